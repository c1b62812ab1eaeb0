//! Segmented progress bar geometry.
//!
//! A horizontal progress bar rendered as two colored segments (filled and
//! remaining) separated by a small clear gap, with rounded end-caps whose
//! rounding pattern depends on which segment currently touches the bar's
//! edges.
//!
//! The crate is toolkit-agnostic: [`ProgressBar::layout`] is a pure function
//! from value and size to segment rectangles and rounding flags, and
//! [`ProgressView`] is a thin adapter a host UI layer drives on every value
//! or bounds change to get paint-ready surfaces with clip mask outlines.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use segmented_progress::{rgb, point, size, Bounds, ProgressBar, ProgressView};
//!
//! let mut view = ProgressView::new(
//!     ProgressBar::new()
//!         .value(0.5)
//!         .progress_color(rgb(0x18a0fb))
//!         .gap(8.),
//! );
//! view.set_bounds(Bounds::new(point(0., 0.), size(240., 10.)));
//! for surface in view.surfaces() {
//!     // paint surface.bounds with surface.color, clipped by surface.mask
//! }
//! ```

mod bar;
mod color;
mod geometry;
mod path;
mod view;

pub use bar::{BarLayout, ProgressBar, Segment, DEFAULT_CORNER_RADIUS, DEFAULT_GAP};
pub use color::{hsla, rgb, rgba, Hsla};
pub use geometry::{point, size, Bounds, Point, Size};
pub use path::{Path, PathCommand};
pub use view::{ProgressView, SegmentSurface};
