//! Geometry for scene positioning.

/// A point in scene coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point2D {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point2D {
    /// The origin.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns this point shifted by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Measured extent of a shape.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBox {
    /// Left edge.
    pub min_x: f32,
    /// Top edge.
    pub min_y: f32,
    /// Right edge.
    pub max_x: f32,
    /// Bottom edge.
    pub max_y: f32,
}

impl BoundingBox {
    /// An empty box at the origin.
    pub const EMPTY: Self = Self {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 0.0,
        max_y: 0.0,
    };

    /// Creates a box anchored at the origin with the given size.
    #[must_use]
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            max_x: width,
            max_y: height,
        }
    }

    /// Returns the width.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

/// A rectangle in scene coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> Point2D {
        Point2D::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Returns this rect moved by `(dx, dy)`.
    #[must_use]
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translated_rect_keeps_size() {
        let rect = Rect::new(0.0, 0.0, 40.0, 20.0).translate(80.0, 30.0);

        assert_eq!(rect, Rect::new(80.0, 30.0, 40.0, 20.0));
        assert_eq!(rect.right(), 120.0);
        assert_eq!(rect.bottom(), 50.0);
        assert_eq!(rect.center(), Point2D::new(100.0, 40.0));
    }

    #[test]
    fn test_bounding_box_extent() {
        let bb = BoundingBox::from_size(30.0, 12.0);

        assert_eq!(bb.width(), 30.0);
        assert_eq!(bb.height(), 12.0);
        assert_eq!(BoundingBox::from_size(0.0, 0.0), BoundingBox::EMPTY);
    }
}
