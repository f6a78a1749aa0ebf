/// Sentinel for "no neighbor in this direction"
pub const INVALID_NODE: u32 = u32::MAX;

/// Float 2-vector, just the ops the motion math needs
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared distance to another point (no sqrt in the hot path)
    #[inline]
    pub fn dist_sq(self, other: Vec2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn scaled(self, k: f32) -> Vec2 {
        Vec2::new(self.x * k, self.y * k)
    }

    #[inline]
    pub fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }

    /// Round each axis to the nearest grid cell
    #[inline]
    pub fn to_cell(self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }
}
