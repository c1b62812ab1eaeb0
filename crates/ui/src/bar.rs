use serde::{Deserialize, Serialize};

use crate::color::{hsla, Hsla};
use crate::geometry::{point, Bounds, Point, Size};
use crate::path::Path;

/// Default width of the clear gap between the filled and unfilled portions.
pub const DEFAULT_GAP: f32 = 8.;

/// Default corner radius of the segment end-caps.
pub const DEFAULT_CORNER_RADIUS: f32 = 4.;

/// One visual sub-rectangle of the bar.
///
/// Derived on every layout pass, never persisted. The rounding flags say
/// whether the leading (left) and trailing (right) pair of corners should
/// be arced rather than square.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub bounds: Bounds,
    pub round_start: bool,
    pub round_end: bool,
}

impl Segment {
    /// The clip mask outline for this segment, in surface-local coordinates
    /// (origin at the segment's own top-left).
    pub fn mask(&self, radius: f32) -> Path {
        let local = Bounds::new(Point::default(), self.bounds.size);
        Path::rounded_segment(local, self.round_start, self.round_end, radius)
    }
}

/// The computed segments of the bar for one layout pass.
///
/// A hidden segment is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BarLayout {
    pub progress: Option<Segment>,
    pub gap: Option<Segment>,
    pub remaining: Option<Segment>,
}

/// A segmented progress bar.
///
/// The bar is rendered as two colored segments (filled and remaining)
/// separated by a small clear gap. [`ProgressBar::layout`] derives the
/// segment rectangles and corner rounding flags from the current value;
/// it is pure and holds no state between calls, so hosts re-invoke it on
/// every value or bounds change.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBar {
    pub(crate) value: f32,
    pub(crate) track_color: Hsla,
    pub(crate) progress_color: Hsla,
    pub(crate) gap: f32,
    pub(crate) corner_radius: f32,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self {
            value: 0.,
            track_color: hsla(0., 0., 0.5, 0.3),
            progress_color: Hsla::black(),
            gap: DEFAULT_GAP,
            corner_radius: DEFAULT_CORNER_RADIUS,
        }
    }
}

impl ProgressBar {
    /// Create a new progress bar with default colors, gap and corner radius.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fraction value of the progress bar.
    ///
    /// The value should be between 0.0 and 1.0. Out-of-range values are not
    /// rejected: anything >= 1.0 renders a full bar and anything < 0.0
    /// renders nothing.
    pub fn value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    /// Set the color of the unfilled (remaining) segment.
    pub fn track_color(mut self, color: impl Into<Hsla>) -> Self {
        self.track_color = color.into();
        self
    }

    /// Set the color of the filled (progress) segment.
    pub fn progress_color(mut self, color: impl Into<Hsla>) -> Self {
        self.progress_color = color.into();
        self
    }

    /// Set the width of the gap between the bars, default: 8.0
    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap.max(0.);
        self
    }

    /// Set the corner radius of the segment end-caps, default: 4.0
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius.max(0.);
        self
    }

    /// Compute the segment rectangles and rounding flags for the given
    /// bar size.
    ///
    /// - value >= 1.0: only the progress segment, spanning the full width,
    ///   rounded on both ends.
    /// - 0.0 <= value < 1.0: progress, gap and remaining segments laid out
    ///   left to right; `progress_width = width * value` and the remaining
    ///   segment takes whatever width is left after the gap.
    /// - value < 0.0: nothing visible.
    pub fn layout(&self, size: Size) -> BarLayout {
        let total_width = size.width;
        let progress_width = total_width * self.value;

        if self.value >= 1. {
            BarLayout {
                progress: Some(Segment {
                    bounds: Bounds::new(Point::default(), size),
                    round_start: true,
                    round_end: true,
                }),
                ..Default::default()
            }
        } else if self.value >= 0. {
            let progress = Segment {
                bounds: Bounds::new(
                    Point::default(),
                    Size {
                        width: progress_width,
                        height: size.height,
                    },
                ),
                round_start: progress_width > 0.,
                round_end: true,
            };

            let gap = Segment {
                bounds: Bounds::new(
                    point(progress_width, 0.),
                    Size {
                        width: self.gap,
                        height: size.height,
                    },
                ),
                round_start: progress_width > 0.,
                round_end: true,
            };

            let remaining_width = total_width - progress_width - self.gap;
            let remaining = Segment {
                bounds: Bounds::new(
                    point(progress_width + self.gap, 0.),
                    Size {
                        width: remaining_width.max(0.),
                        height: size.height,
                    },
                ),
                round_start: true,
                round_end: remaining_width > 0.,
            };

            BarLayout {
                progress: Some(progress),
                gap: Some(gap),
                remaining: Some(remaining),
            }
        } else {
            BarLayout::default()
        }
    }
}
