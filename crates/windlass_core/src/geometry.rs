//! Core geometry types
//!
//! All values are in the host container's units. The y axis grows
//! downward; a content offset below `-inset.top` means the viewport sits
//! above the content's first edge.

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Edge insets around a scrollable content area
///
/// Pull views only ever write the edge they own (top for headers, bottom
/// for footers); the full structure is carried so read-modify-write
/// updates preserve the other edges.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Insets with only the vertical edges set
    pub const fn vertical(top: f32, bottom: f32) -> Self {
        Self {
            top,
            right: 0.0,
            bottom,
            left: 0.0,
        }
    }

    /// Same insets on all four edges
    pub const fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_insets_leave_horizontal_zero() {
        let inset = EdgeInsets::vertical(10.0, 20.0);
        assert_eq!(inset.top, 10.0);
        assert_eq!(inset.bottom, 20.0);
        assert_eq!(inset.left, 0.0);
        assert_eq!(inset.right, 0.0);
    }

    #[test]
    fn test_zero_constants_compare_equal_to_default() {
        assert_eq!(Point::ZERO, Point::default());
        assert_eq!(Size::ZERO, Size::default());
        assert_eq!(EdgeInsets::ZERO, EdgeInsets::default());
    }
}
