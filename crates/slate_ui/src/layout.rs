//! Geometry primitives shared by layout, drawing and hit testing.

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle of the given size positioned at the origin.
    pub fn at_origin(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Compute the intersection of two rectangles.
    /// If there is no overlap, the result has zero width or height.
    pub fn intersect(&self, other: &Bounds) -> Bounds {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = (self.x + self.width).min(other.x + other.width);
        let y2 = (self.y + self.height).min(other.y + other.height);

        Bounds::new(x1, y1, (x2 - x1).max(0.0), (y2 - y1).max(0.0))
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Padding around a container's content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl From<f32> for Padding {
    fn from(value: f32) -> Self {
        Padding::uniform(value)
    }
}

impl Padding {
    pub const ZERO: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// Equal padding on all four sides.
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Defines how a widget's dimension should be sized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Length {
    /// Fill all available space
    Fill,

    /// Shrink to fit content
    #[default]
    Shrink,

    /// Fixed size in pixels
    Units(f32),
}

impl From<f32> for Length {
    fn from(px: f32) -> Self {
        Length::Units(px)
    }
}

impl Length {
    /// Resolve the length to a concrete size given the available space and
    /// the content's intrinsic size. `Fill` of an unbounded axis collapses
    /// to the intrinsic size.
    pub fn resolve(&self, available: f32, intrinsic: f32) -> f32 {
        match self {
            Length::Fill => {
                if available.is_finite() {
                    available
                } else {
                    intrinsic
                }
            }
            Length::Shrink => intrinsic,
            Length::Units(px) => *px,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_contains_edges() {
        let bounds = Bounds::new(10.0, 10.0, 100.0, 50.0);
        assert!(bounds.contains(Point::new(10.0, 10.0)));
        assert!(bounds.contains(Point::new(110.0, 60.0)));
        assert!(!bounds.contains(Point::new(9.9, 10.0)));
        assert!(!bounds.contains(Point::new(10.0, 60.1)));
    }

    #[test]
    fn bounds_intersect_overlap() {
        let a = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let b = Bounds::new(50.0, 50.0, 100.0, 100.0);
        assert_eq!(a.intersect(&b), Bounds::new(50.0, 50.0, 50.0, 50.0));
    }

    #[test]
    fn bounds_intersect_disjoint_is_empty() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(20.0, 20.0, 10.0, 10.0);
        assert!(a.intersect(&b).is_empty());
    }

    #[test]
    fn length_resolve() {
        assert_eq!(Length::Fill.resolve(200.0, 50.0), 200.0);
        assert_eq!(Length::Shrink.resolve(200.0, 50.0), 50.0);
        assert_eq!(Length::Units(80.0).resolve(200.0, 50.0), 80.0);
    }

    #[test]
    fn length_fill_unbounded_collapses() {
        assert_eq!(Length::Fill.resolve(f32::INFINITY, 50.0), 50.0);
    }

    #[test]
    fn padding_totals() {
        let padding = Padding::uniform(8.0);
        assert_eq!(padding.horizontal(), 16.0);
        assert_eq!(padding.vertical(), 16.0);
    }
}
