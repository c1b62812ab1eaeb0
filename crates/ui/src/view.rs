use smallvec::SmallVec;

use crate::bar::{BarLayout, ProgressBar, Segment};
use crate::color::Hsla;
use crate::geometry::Bounds;
use crate::path::Path;

/// A paint-ready surface for one segment of the bar.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentSurface {
    /// The segment rectangle, in bar coordinates.
    pub bounds: Bounds,
    /// The fill color of the surface.
    pub color: Hsla,
    /// The clip mask outline, in surface-local coordinates.
    pub mask: Path,
}

/// Thin adapter between a host UI layer and the pure bar geometry.
///
/// The view owns the bar configuration and the last-seen bounds. The host
/// calls [`set_bounds`](Self::set_bounds) on layout invalidation and any of
/// the setters when a bound property changes, then repaints from
/// [`surfaces`](Self::surfaces). Every call re-derives everything from the
/// current inputs; no incremental state is kept between recomputations.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressView {
    bar: ProgressBar,
    bounds: Bounds,
}

impl ProgressView {
    pub fn new(bar: ProgressBar) -> Self {
        Self {
            bar,
            bounds: Bounds::default(),
        }
    }

    /// Update the bar bounds, typically from the host's layout pass.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        tracing::trace!("progress bar bounds changed: {:?}", bounds);
        self.bounds = bounds;
    }

    /// Update the fraction value.
    ///
    /// The value is stored as given; out-of-range values degrade to a full
    /// or empty rendering rather than raising.
    pub fn set_progress(&mut self, value: f32) {
        self.bar.value = value;
    }

    /// Update the color of the unfilled segment.
    pub fn set_track_color(&mut self, color: impl Into<Hsla>) {
        self.bar.track_color = color.into();
    }

    /// Update the color of the filled segment.
    pub fn set_progress_color(&mut self, color: impl Into<Hsla>) {
        self.bar.progress_color = color.into();
    }

    /// Update the gap width between the bars.
    pub fn set_gap(&mut self, gap: f32) {
        self.bar.gap = gap.max(0.);
    }

    /// The current fraction value.
    pub fn progress(&self) -> f32 {
        self.bar.value
    }

    /// The current bar bounds.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The segment layout for the current value and bounds.
    pub fn layout(&self) -> BarLayout {
        self.bar.layout(self.bounds.size)
    }

    /// The paint-ready surfaces for the current state, in paint order:
    /// remaining, progress, then the clear gap on top. Hidden segments are
    /// omitted.
    pub fn surfaces(&self) -> SmallVec<[SegmentSurface; 3]> {
        let layout = self.layout();
        let radius = self.bar.corner_radius;

        let surface = |segment: Segment, color: Hsla| SegmentSurface {
            bounds: segment.bounds,
            color,
            mask: segment.mask(radius),
        };

        let mut surfaces = SmallVec::new();
        if let Some(remaining) = layout.remaining {
            surfaces.push(surface(remaining, self.bar.track_color));
        }
        if let Some(progress) = layout.progress {
            surfaces.push(surface(progress, self.bar.progress_color));
        }
        if let Some(gap) = layout.gap {
            surfaces.push(surface(gap, Hsla::transparent()));
        }
        surfaces
    }
}

impl Default for ProgressView {
    fn default() -> Self {
        Self::new(ProgressBar::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb;
    use crate::geometry::{point, size};

    fn view_at(value: f32) -> ProgressView {
        let mut view = ProgressView::new(ProgressBar::new().value(value));
        view.set_bounds(Bounds::new(point(0., 0.), size(100., 10.)));
        view
    }

    #[test]
    fn test_surfaces_paint_order() {
        let surfaces = view_at(0.5).surfaces();
        assert_eq!(surfaces.len(), 3);
        // remaining, progress, gap
        assert_eq!(surfaces[0].bounds.left(), 58.);
        assert_eq!(surfaces[1].bounds.left(), 0.);
        assert_eq!(surfaces[2].bounds.left(), 50.);
        assert_eq!(surfaces[2].color, Hsla::transparent());
    }

    #[test]
    fn test_surfaces_full() {
        let surfaces = view_at(1.).surfaces();
        assert_eq!(surfaces.len(), 1);
        assert_eq!(surfaces[0].bounds.size.width, 100.);
    }

    #[test]
    fn test_surfaces_negative_value() {
        assert!(view_at(-1.).surfaces().is_empty());
    }

    #[test]
    fn test_mutation_recomputes() {
        let mut view = view_at(0.25);
        let before = view.surfaces();
        view.set_progress(0.75);
        let after = view.surfaces();
        assert_ne!(before, after);
        assert_eq!(after[1].bounds.size.width, 75.);

        view.set_progress(0.25);
        assert_eq!(view.surfaces(), before);
    }

    #[test]
    fn test_colors_applied() {
        let mut view = view_at(0.5);
        view.set_track_color(rgb(0x336699));
        view.set_progress_color(rgb(0xff0000));
        let surfaces = view.surfaces();
        assert_eq!(surfaces[0].color, rgb(0x336699));
        assert_eq!(surfaces[1].color, rgb(0xff0000));
    }

    #[test]
    fn test_set_gap() {
        let mut view = view_at(0.5);
        view.set_gap(10.);
        let surfaces = view.surfaces();
        assert_eq!(surfaces[2].bounds.size.width, 10.);
        assert_eq!(surfaces[0].bounds.size.width, 40.);

        // Negative gap widths are floored at zero
        view.set_gap(-5.);
        assert_eq!(view.surfaces()[2].bounds.size.width, 0.);
    }

    #[test]
    fn test_bounds_resize_relayouts() {
        let mut view = view_at(0.5);
        view.set_bounds(Bounds::new(point(0., 0.), size(200., 10.)));
        let surfaces = view.surfaces();
        assert_eq!(surfaces[1].bounds.size.width, 100.);
        assert_eq!(surfaces[0].bounds.left(), 108.);
    }
}
