use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

/// Raw index into the dungeon tilesheet. Layers store `Option<TileIndex>`
/// with `None` as the empty cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileIndex(pub u16);

/// Position of a room in the dungeon's ordered room list. Index 0 is the
/// start room by generator construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoomId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FurnishError {
    /// A floor needs a start and an end room; nothing is written when the
    /// generator hands over fewer than two.
    TooFewRooms { found: usize },
    /// A room thinner than 3 tiles has no interior distinct from its walls.
    RoomTooSmall { room: RoomId, width: i32, height: i32 },
}

impl fmt::Display for FurnishError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewRooms { found } => {
                write!(f, "floor needs at least 2 rooms, generator produced {found}")
            }
            Self::RoomTooSmall { room, width, height } => {
                write!(f, "room {} is {width}x{height}, minimum is 3x3", room.0)
            }
        }
    }
}

impl std::error::Error for FurnishError {}

/// What the stochastic furnishing passes actually placed, in placement
/// order. Read by the host for debugging overlays and by tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementEvent {
    StairsPlaced { room: RoomId, at: Pos },
    DecorPlaced { room: RoomId, at: Pos },
    ChestPlaced { room: RoomId, at: Pos },
    PotPlaced { room: RoomId, at: Pos },
}
