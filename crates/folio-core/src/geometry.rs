//! Basic geometry types for layout and viewport intersection.

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// A size in 2D space (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Check if the size has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Area in square units (zero for empty sizes).
    #[inline]
    pub fn area(&self) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            self.width * self.height
        }
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }
}

/// A rectangle defined by origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle from origin and size.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    /// Empty rectangle at origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Left edge x coordinate.
    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    /// Top edge y coordinate.
    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    /// Right edge x coordinate.
    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Bottom edge y coordinate.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Width of the rectangle.
    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Check if the rectangle is empty (zero or negative size).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Compute the intersection of two rectangles.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if left < right && top < bottom {
            Some(Rect::new(left, top, right - left, bottom - top))
        } else {
            None
        }
    }

    /// Fraction of this rectangle's area that lies inside `visible`, in `[0, 1]`.
    ///
    /// A zero-area rectangle counts as fully visible when its origin lies
    /// inside `visible`, and as invisible otherwise.
    pub fn intersection_ratio(&self, visible: &Rect) -> f32 {
        let area = self.size.area();
        if area == 0.0 {
            return if visible.contains(self.origin) { 1.0 } else { 0.0 };
        }
        match self.intersect(visible) {
            Some(overlap) => (overlap.size.area() / area).clamp(0.0, 1.0),
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersect_overlapping() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 100.0, 100.0);
        assert_eq!(a.intersect(&b), Some(Rect::new(50.0, 50.0, 50.0, 50.0)));
    }

    #[test]
    fn test_intersect_touching_edges_is_none() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(0.0, 100.0, 100.0, 100.0);
        assert_eq!(a.intersect(&b), None);
    }

    #[test]
    fn test_intersection_ratio_partial() {
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        let element = Rect::new(0.0, 80.0, 100.0, 100.0);
        assert!((element.intersection_ratio(&viewport) - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_intersection_ratio_bounds() {
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(Rect::new(10.0, 10.0, 20.0, 20.0).intersection_ratio(&viewport), 1.0);
        assert_eq!(Rect::new(0.0, 300.0, 20.0, 20.0).intersection_ratio(&viewport), 0.0);
    }

    #[test]
    fn test_intersection_ratio_zero_area() {
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(Rect::new(10.0, 10.0, 0.0, 0.0).intersection_ratio(&viewport), 1.0);
        assert_eq!(Rect::new(10.0, 200.0, 0.0, 0.0).intersection_ratio(&viewport), 0.0);
    }
}
