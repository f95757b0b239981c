//! Small math value types with built-in codec support.

/// An axis-aligned rectangle: position of the minimum corner plus size.
///
/// Encoded as `[x,y,width,height]` by the built-in overrides.
///
/// ```
/// use mithril_reflect::math::Rect;
///
/// let r = Rect::new(1.0, 2.0, 4.0, 3.0);
/// assert_eq!(r.max(), (5.0, 5.0));
/// assert!(r.contains(2.0, 4.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The maximum corner.
    #[inline]
    pub fn max(&self) -> (f32, f32) {
        (self.x + self.width, self.y + self.height)
    }

    /// Returns `true` if the point lies inside, edges included.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let (max_x, max_y) = self.max();
        x >= self.x && x <= max_x && y >= self.y && y <= max_y
    }
}
