//! Index mapping for the dungeon tilesheet: fixed indices for single-tile
//! writes, weighted tables for randomized fills, and 3-tile door patterns.

use crate::table::{Candidate, TileTable, WeightedEntry};
use crate::types::{Pos, TileIndex};

pub const BLANK: TileIndex = TileIndex(78);
pub const CHEST: TileIndex = TileIndex(83);
pub const STAIRS: TileIndex = TileIndex(39);

// Corners are fixed so room outlines always read the same.
pub const WALL_TOP_LEFT: TileIndex = TileIndex(0);
pub const WALL_TOP_RIGHT: TileIndex = TileIndex(5);
pub const WALL_BOTTOM_RIGHT: TileIndex = TileIndex(45);
pub const WALL_BOTTOM_LEFT: TileIndex = TileIndex(40);

/// Mostly clean floor, one dirty variant in ten.
pub const FLOOR: TileTable = TileTable::Weighted(&[
    WeightedEntry { candidate: Candidate::Single(TileIndex(79)), weight: 9 },
    WeightedEntry {
        candidate: Candidate::AnyOf(&[TileIndex(6), TileIndex(7), TileIndex(8), TileIndex(9)]),
        weight: 1,
    },
]);

// Each wall direction carries its own crack/moss variants.
pub const WALL_TOP: TileTable = TileTable::Weighted(&[
    WeightedEntry { candidate: Candidate::Single(TileIndex(1)), weight: 2 },
    WeightedEntry {
        candidate: Candidate::AnyOf(&[TileIndex(2), TileIndex(3), TileIndex(4)]),
        weight: 1,
    },
]);

pub const WALL_LEFT: TileTable = TileTable::Weighted(&[
    WeightedEntry { candidate: Candidate::Single(TileIndex(10)), weight: 4 },
    WeightedEntry { candidate: Candidate::AnyOf(&[TileIndex(20), TileIndex(30)]), weight: 1 },
]);

pub const WALL_RIGHT: TileTable = TileTable::Weighted(&[
    WeightedEntry { candidate: Candidate::Single(TileIndex(15)), weight: 4 },
    WeightedEntry { candidate: Candidate::AnyOf(&[TileIndex(25), TileIndex(35)]), weight: 1 },
]);

pub const WALL_BOTTOM: TileTable = TileTable::Weighted(&[
    WeightedEntry { candidate: Candidate::Single(TileIndex(41)), weight: 4 },
    WeightedEntry {
        candidate: Candidate::AnyOf(&[TileIndex(42), TileIndex(43), TileIndex(44)]),
        weight: 1,
    },
]);

/// Non-interactive ground clutter for the stuff layer.
pub const STUFF: TileTable = TileTable::Weighted(&[
    WeightedEntry { candidate: Candidate::Single(TileIndex(68)), weight: 3 },
    WeightedEntry { candidate: Candidate::Single(TileIndex(77)), weight: 1 },
    WeightedEntry { candidate: Candidate::Single(TileIndex(49)), weight: 1 },
    WeightedEntry { candidate: Candidate::Single(TileIndex(59)), weight: 5 },
]);

/// Breakable pots, three interchangeable sprites.
pub const POT: TileTable = TileTable::Weighted(&[WeightedEntry {
    candidate: Candidate::AnyOf(&[TileIndex(13), TileIndex(14), TileIndex(15)]),
    weight: 1,
}]);

/// A door is three tiles along the wall it punches through: flanking jamb
/// tiles around a walkable center that lines up with the door cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DoorPattern {
    /// Left-to-right, anchored one cell left of the door.
    Horizontal([TileIndex; 3]),
    /// Top-to-bottom, anchored one cell above the door.
    Vertical([TileIndex; 3]),
}

impl DoorPattern {
    pub fn cells(self, anchor: Pos) -> [(Pos, TileIndex); 3] {
        match self {
            Self::Horizontal(tiles) => [
                (anchor, tiles[0]),
                (Pos { y: anchor.y, x: anchor.x + 1 }, tiles[1]),
                (Pos { y: anchor.y, x: anchor.x + 2 }, tiles[2]),
            ],
            Self::Vertical(tiles) => [
                (anchor, tiles[0]),
                (Pos { y: anchor.y + 1, x: anchor.x }, tiles[1]),
                (Pos { y: anchor.y + 2, x: anchor.x }, tiles[2]),
            ],
        }
    }
}

pub const DOOR_TOP: DoorPattern =
    DoorPattern::Horizontal([TileIndex(3), TileIndex(79), TileIndex(1)]);
pub const DOOR_BOTTOM: DoorPattern =
    DoorPattern::Horizontal([TileIndex(53), TileIndex(79), TileIndex(50)]);
pub const DOOR_LEFT: DoorPattern =
    DoorPattern::Vertical([TileIndex(52), TileIndex(79), TileIndex(55)]);
pub const DOOR_RIGHT: DoorPattern =
    DoorPattern::Vertical([TileIndex(52), TileIndex(79), TileIndex(50)]);
