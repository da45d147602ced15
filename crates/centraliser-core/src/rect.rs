/// Bounds of a window or screen in screen coordinates.
///
/// A snapshot taken at query time. It goes stale as soon as the window
/// moves or resizes and must be re-queried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Horizontal extent. Saturates when it does not fit in an `i32`,
    /// which only happens for rectangles that fail [`Rect::is_valid`].
    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    /// Vertical extent, saturating like [`Rect::width`].
    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Top-left corner.
    pub fn origin(&self) -> (i32, i32) {
        (self.left, self.top)
    }

    /// Returns whether the edges are ordered (`right >= left`, `bottom >= top`)
    /// and both extents fit in an `i32`.
    pub fn is_valid(&self) -> bool {
        self.right >= self.left
            && self.bottom >= self.top
            && self.right.checked_sub(self.left).is_some()
            && self.bottom.checked_sub(self.top).is_some()
    }

    /// Top-left coordinate that centres a `width` x `height` box within
    /// this rectangle's extent, measured from the screen origin.
    ///
    /// Uses truncating integer division. A box larger than the rectangle
    /// yields negative coordinates.
    pub fn centred_origin(&self, width: i32, height: i32) -> (i32, i32) {
        (
            half_difference(self.width(), width),
            half_difference(self.height(), height),
        )
    }
}

/// `(outer - inner) / 2` computed in `i64`. Half the difference of two
/// `i32`s always fits back into an `i32`.
fn half_difference(outer: i32, inner: i32) -> i32 {
    ((i64::from(outer) - i64::from(inner)) / 2) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_and_height_from_edges() {
        // Arrange
        let rect = Rect::new(100, 100, 500, 400);

        // Assert
        assert_eq!(rect.width(), 400);
        assert_eq!(rect.height(), 300);
        assert_eq!(rect.origin(), (100, 100));
    }

    #[test]
    fn valid_rects_have_non_negative_extent() {
        for rect in [
            Rect::default(),
            Rect::new(-50, -50, -50, -50),
            Rect::new(-1920, 0, 0, 1080),
            Rect::new(10, 20, 11, 21),
        ] {
            assert!(rect.is_valid());
            assert!(rect.width() >= 0);
            assert!(rect.height() >= 0);
        }
    }

    #[test]
    fn inverted_edges_are_invalid() {
        assert!(!Rect::new(10, 0, 5, 10).is_valid());
        assert!(!Rect::new(0, 10, 10, 5).is_valid());
    }

    #[test]
    fn extents_wider_than_i32_are_invalid_and_do_not_panic() {
        // Arrange
        let rect = Rect::new(i32::MIN, 0, i32::MAX, 10);

        // Assert
        assert!(!rect.is_valid());
        assert_eq!(rect.width(), i32::MAX);
        assert_eq!(rect.height(), 10);
    }

    #[test]
    fn largest_valid_extent_is_exact() {
        // Arrange
        let rect = Rect::new(0, i32::MIN, i32::MAX, -1);

        // Assert
        assert!(rect.is_valid());
        assert_eq!(rect.width(), i32::MAX);
        assert_eq!(rect.height(), i32::MAX);
    }

    #[test]
    fn centred_origin_does_not_overflow_at_extremes() {
        // Arrange
        let huge = Rect::new(0, 0, i32::MAX, i32::MAX);
        let empty = Rect::default();

        // Act / Assert
        assert_eq!(huge.centred_origin(-1, i32::MIN), (1_073_741_824, i32::MAX));
        assert_eq!(empty.centred_origin(i32::MAX, i32::MIN), (-1_073_741_823, 1_073_741_824));
    }

    #[test]
    fn centred_origin_on_full_hd() {
        // Arrange
        let screen = Rect::new(0, 0, 1920, 1080);

        // Act
        let origin = screen.centred_origin(400, 300);

        // Assert
        assert_eq!(origin, (760, 390));
    }

    #[test]
    fn centred_origin_truncates_odd_difference() {
        // Arrange: width difference of 401
        let screen = Rect::new(0, 0, 801, 600);

        // Act
        let (x, _) = screen.centred_origin(400, 600);

        // Assert
        assert_eq!(x, 200);
    }

    #[test]
    fn centred_origin_truncates_toward_zero_when_negative() {
        // Arrange: difference of -201
        let screen = Rect::new(0, 0, 800, 600);

        // Act
        let (x, _) = screen.centred_origin(1001, 600);

        // Assert
        assert_eq!(x, -100);
    }
}
