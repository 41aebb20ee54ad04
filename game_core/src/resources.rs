use crate::components::Side;

/// Running score for both players
///
/// Counters only ever go up, and only through `record_point`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreBoard {
    left: u32,
    right: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit one point to `side`
    pub fn record_point(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn left(&self) -> u32 {
        self.left
    }

    pub fn right(&self) -> u32 {
        self.right
    }

    /// Both counters, for the HUD
    pub fn snapshot(&self) -> (u32, u32) {
        (self.left, self.right)
    }
}
