use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::geometry::{point, Bounds, Point};

/// A single outline drawing command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Quadratic curve to `to`, with control point `ctrl`.
    QuadTo { ctrl: Point, to: Point },
    Close,
}

/// A closed outline, used as a clip mask for a segment's surface.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: SmallVec<[PathCommand; 12]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// The command sequence of this outline.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn move_to(&mut self, to: Point) {
        self.commands.push(PathCommand::MoveTo(to));
    }

    fn line_to(&mut self, to: Point) {
        self.commands.push(PathCommand::LineTo(to));
    }

    fn quad_to(&mut self, ctrl: Point, to: Point) {
        self.commands.push(PathCommand::QuadTo { ctrl, to });
    }

    fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// A plain rectangular outline.
    pub fn rect(bounds: Bounds) -> Self {
        let mut path = Self::new();
        path.move_to(point(bounds.left(), bounds.top()));
        path.line_to(point(bounds.right(), bounds.top()));
        path.line_to(point(bounds.right(), bounds.bottom()));
        path.line_to(point(bounds.left(), bounds.bottom()));
        path.close();
        path
    }

    /// The outline of a bar segment with its leading and/or trailing corner
    /// pair rounded.
    ///
    /// Corners are arced with quadratic curves whose control point sits on
    /// the rectangle corner. The radius is clamped so it never exceeds half
    /// of the segment's width or height; when it clamps to zero the outline
    /// degenerates to a plain rectangle.
    pub fn rounded_segment(bounds: Bounds, round_start: bool, round_end: bool, radius: f32) -> Self {
        let radius = radius
            .min(bounds.size.width / 2.)
            .min(bounds.size.height / 2.)
            .max(0.);
        if radius == 0. || (!round_start && !round_end) {
            return Self::rect(bounds);
        }

        let start_x = bounds.left();
        let end_x = bounds.right();
        let top_y = bounds.top();
        let bottom_y = bounds.bottom();

        let mut path = Self::new();
        if round_start && round_end {
            path.move_to(point(start_x + radius, top_y));
            path.line_to(point(end_x - radius, top_y));
            path.quad_to(point(end_x, top_y), point(end_x, top_y + radius));
            path.line_to(point(end_x, bottom_y - radius));
            path.quad_to(point(end_x, bottom_y), point(end_x - radius, bottom_y));
            path.line_to(point(start_x + radius, bottom_y));
            path.quad_to(point(start_x, bottom_y), point(start_x, bottom_y - radius));
            path.line_to(point(start_x, top_y + radius));
            path.quad_to(point(start_x, top_y), point(start_x + radius, top_y));
        } else if round_start {
            path.move_to(point(start_x + radius, top_y));
            path.line_to(point(end_x, top_y));
            path.line_to(point(end_x, bottom_y));
            path.line_to(point(start_x + radius, bottom_y));
            path.quad_to(point(start_x, bottom_y), point(start_x, bottom_y - radius));
            path.line_to(point(start_x, top_y + radius));
            path.quad_to(point(start_x, top_y), point(start_x + radius, top_y));
        } else {
            path.move_to(point(start_x, top_y));
            path.line_to(point(end_x - radius, top_y));
            path.quad_to(point(end_x, top_y), point(end_x, top_y + radius));
            path.line_to(point(end_x, bottom_y - radius));
            path.quad_to(point(end_x, bottom_y), point(end_x - radius, bottom_y));
            path.line_to(point(start_x, bottom_y));
        }
        path.close();
        path
    }
}
