//! The player body: float position in tile units, cursor-key velocity, and
//! axis-separated collision against the ground and items masks.

use core::{Pos, TileLayer};

/// Tiles per second. Diagonal movement is normalized so it is never faster
/// than straight movement.
const PLAYER_SPEED: f32 = 10.0;
/// Half-extent of the collision box, slightly smaller than a tile so the
/// player slides through doors without snagging on the jambs.
const HALF_EXTENT: f32 = 0.35;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct Player {
    /// Center of the body, in tile units.
    pub x: f32,
    pub y: f32,
    frozen: bool,
}

impl Player {
    /// Spawns centered on a grid cell.
    pub fn at_tile(tile: Pos) -> Self {
        Self { x: tile.x as f32 + 0.5, y: tile.y as f32 + 0.5, frozen: false }
    }

    /// The grid cell under the body's center.
    pub fn tile(&self) -> Pos {
        Pos { y: self.y.floor() as i32, x: self.x.floor() as i32 }
    }

    /// Stops reacting to input until the floor regenerates.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// One movement step. Axes resolve independently so sliding along a
    /// wall works; a blocked axis just drops that component.
    pub fn update(&mut self, input: MoveInput, dt: f32, ground: &TileLayer, items: &TileLayer) {
        if self.frozen {
            return;
        }

        let mut velocity_x = (i32::from(input.right) - i32::from(input.left)) as f32;
        let mut velocity_y = (i32::from(input.down) - i32::from(input.up)) as f32;
        let magnitude = (velocity_x * velocity_x + velocity_y * velocity_y).sqrt();
        if magnitude == 0.0 {
            return;
        }
        velocity_x *= PLAYER_SPEED / magnitude;
        velocity_y *= PLAYER_SPEED / magnitude;

        let next_x = self.x + velocity_x * dt;
        if !body_blocked(next_x, self.y, ground, items) {
            self.x = next_x;
        }
        let next_y = self.y + velocity_y * dt;
        if !body_blocked(self.x, next_y, ground, items) {
            self.y = next_y;
        }
    }
}

/// Samples the four corners of the collision box against both masks.
fn body_blocked(center_x: f32, center_y: f32, ground: &TileLayer, items: &TileLayer) -> bool {
    for corner_y in [center_y - HALF_EXTENT, center_y + HALF_EXTENT] {
        for corner_x in [center_x - HALF_EXTENT, center_x + HALF_EXTENT] {
            let cell = Pos { y: corner_y.floor() as i32, x: corner_x.floor() as i32 };
            if ground.collides_at(cell) || items.collides_at(cell) {
                return true;
            }
        }
    }
    false
}
