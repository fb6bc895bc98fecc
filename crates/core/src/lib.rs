pub mod dungeon;
pub mod furnish;
pub mod layers;
pub mod rng;
pub mod session;
pub mod table;
pub mod tileset;
pub mod types;
pub mod visibility;

pub use dungeon::{Dungeon, Room};
pub use furnish::{FurnishedFloor, RoomCatalog, furnish_floor, partition_rooms};
pub use layers::{Shade, ShadowLayer, TileLayer};
pub use rng::{ChaChaSource, RandomSource};
pub use session::{FloorEvent, FloorSession, StairsTrigger};
pub use table::{Candidate, TileTable, WeightedEntry};
pub use types::*;
pub use visibility::{RoomVisibility, VisibilityEngine};
