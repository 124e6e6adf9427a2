// Player state

use glam::Vec2;

/// Distance moved per processed movement event, in world units
pub const MOVE_STEP: f32 = 4.0;

/// Edge length of the player's square, in world units
pub const PLAYER_SIZE: f32 = 8.0;

/// The player: a single square identified by its centre position.
///
/// Owned by the main loop and mutated only by the input resolver; the
/// renderer reads the position when drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// Centre position in world space (y grows downward)
    pub position: Vec2,
}

impl Player {
    /// Create a player at the given centre position
    pub fn new(position: Vec2) -> Self {
        Self { position }
    }

    /// Move the player by the given offset
    pub fn translate(&mut self, offset: Vec2) {
        self.position += offset;
    }
}
