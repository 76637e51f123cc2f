use glam::{DVec2, IVec2};

/// Axis-aligned rectangle in display pixels.
///
/// Always normalized: `width` and `height` are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ScreenRect {
    /// Left edge.
    pub x: i32,
    /// Bottom edge.
    pub y: i32,
    /// Horizontal extent in pixels.
    pub width: i32,
    /// Vertical extent in pixels.
    pub height: i32,
}

impl ScreenRect {
    /// Create a rectangle from an origin and a size.
    ///
    /// Negative sizes are folded so the result stays normalized.
    #[must_use]
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::from_corners(IVec2::new(x, y), IVec2::new(x + width, y + height))
    }

    /// Build the normalized rectangle spanned by two arbitrary corners.
    #[must_use]
    pub fn from_corners(a: IVec2, b: IVec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self {
            x: min.x,
            y: min.y,
            width: max.x - min.x,
            height: max.y - min.y,
        }
    }

    /// Bottom-left corner.
    #[must_use]
    pub fn min(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// Top-right corner.
    #[must_use]
    pub fn max(&self) -> IVec2 {
        IVec2::new(self.x + self.width, self.y + self.height)
    }

    /// Exact center, which may fall between pixels.
    #[must_use]
    pub fn center(&self) -> DVec2 {
        DVec2::new(
            f64::from(self.x) + f64::from(self.width) / 2.0,
            f64::from(self.y) + f64::from(self.height) / 2.0,
        )
    }

    /// Whether the rectangle has no area.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether `point` lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, point: IVec2) -> bool {
        let (min, max) = (self.min(), self.max());
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_corners_normalizes_any_drag_direction() {
        let down_left = ScreenRect::from_corners(IVec2::new(300, 400), IVec2::new(100, 100));
        let up_right = ScreenRect::from_corners(IVec2::new(100, 100), IVec2::new(300, 400));
        assert_eq!(down_left, up_right);
        assert_eq!(
            up_right,
            ScreenRect {
                x: 100,
                y: 100,
                width: 200,
                height: 300
            }
        );
    }

    #[test]
    fn new_folds_negative_sizes() {
        assert_eq!(ScreenRect::new(10, 10, -5, -2), ScreenRect::new(5, 8, 5, 2));
    }

    #[test]
    fn center_can_be_fractional() {
        let rect = ScreenRect::new(0, 0, 3, 4);
        assert_eq!(rect.center(), DVec2::new(1.5, 2.0));
        assert_eq!(ScreenRect::new(100, 100, 200, 300).center(), DVec2::new(200.0, 250.0));
    }

    #[test]
    fn degenerate_and_contains() {
        assert!(ScreenRect::new(5, 5, 0, 10).is_degenerate());
        assert!(!ScreenRect::new(5, 5, 1, 1).is_degenerate());

        let rect = ScreenRect::new(0, 0, 10, 10);
        assert!(rect.contains(IVec2::new(10, 10)));
        assert!(rect.contains(IVec2::ZERO));
        assert!(!rect.contains(IVec2::new(11, 5)));
        assert!(!rect.contains(IVec2::new(5, -1)));
    }
}
