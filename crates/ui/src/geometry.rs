use serde::{Deserialize, Serialize};

/// A point in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Create a [`Point`] from x, y coordinates.
pub fn point(x: f32, y: f32) -> Point {
    Point { x, y }
}

/// A size in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// Create a [`Size`] from width and height.
pub fn size(width: f32, height: f32) -> Size {
    Size { width, height }
}

impl Size {
    /// Returns true if either dimension is zero or negative.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0. || self.height <= 0.
    }
}

/// An axis-aligned rectangle, defined by its top-left origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub origin: Point,
    pub size: Size,
}

impl Bounds {
    /// Create bounds from an origin and a size.
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// The x-coordinate of the left edge.
    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    /// The x-coordinate of the right edge.
    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// The y-coordinate of the top edge.
    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    /// The y-coordinate of the bottom edge.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Returns true if the bounds cover no area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_edges() {
        let bounds = Bounds::new(point(10., 5.), size(30., 8.));
        assert_eq!(bounds.left(), 10.);
        assert_eq!(bounds.right(), 40.);
        assert_eq!(bounds.top(), 5.);
        assert_eq!(bounds.bottom(), 13.);
        assert!(!bounds.is_empty());
    }

    #[test]
    fn test_bounds_is_empty() {
        assert!(Bounds::new(point(0., 0.), size(0., 10.)).is_empty());
        assert!(Bounds::new(point(0., 0.), size(10., 0.)).is_empty());
        assert!(Bounds::new(point(0., 0.), size(-1., 10.)).is_empty());
        assert!(!Bounds::new(point(0., 0.), size(1., 1.)).is_empty());
    }

    #[test]
    fn test_bounds_serde() {
        let bounds = Bounds::new(point(1., 2.), size(3., 4.));
        let json = serde_json::to_string(&bounds).unwrap();
        assert_eq!(
            json,
            r#"{"origin":{"x":1.0,"y":2.0},"size":{"width":3.0,"height":4.0}}"#
        );
        assert_eq!(serde_json::from_str::<Bounds>(&json).unwrap(), bounds);
    }
}
