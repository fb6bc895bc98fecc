//! Floor furnishing pipeline: partition the room list, synthesize the
//! ground layer, scatter decoration and loot, and arm the exit trigger.
//! Everything runs synchronously to completion; a furnished floor is fully
//! interactive or was never produced at all.

pub mod catalog;
mod decoration;
mod synthesis;

pub use catalog::{RoomCatalog, partition_rooms};

use crate::dungeon::Dungeon;
use crate::layers::{ShadowLayer, TileLayer};
use crate::rng::RandomSource;
use crate::session::StairsTrigger;
use crate::tileset;
use crate::types::{FurnishError, PlacementEvent, Pos};

/// One fully furnished floor: the four layers, the room classification, the
/// armed exit trigger, and the record of what the stochastic passes placed.
pub struct FurnishedFloor {
    pub ground: TileLayer,
    pub stuff: TileLayer,
    pub items: TileLayer,
    pub shadow: ShadowLayer,
    pub catalog: RoomCatalog,
    pub stairs_trigger: StairsTrigger,
    /// Center of the start room; where the host drops the player.
    pub entry_tile: Pos,
    /// Center of the end room; the one stairs cell on the floor.
    pub stairs_tile: Pos,
    pub events: Vec<PlacementEvent>,
}

impl FurnishedFloor {
    /// Stable byte encoding of everything gameplay-relevant, for
    /// fingerprint comparisons in tests.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.ground.width() as u32).to_le_bytes());
        bytes.extend((self.ground.height() as u32).to_le_bytes());
        for layer in [&self.ground, &self.stuff, &self.items] {
            for y in 0..layer.height() as i32 {
                for x in 0..layer.width() as i32 {
                    let pos = Pos { y, x };
                    match layer.tile_at(pos) {
                        Some(tile) => bytes.extend(tile.0.to_le_bytes()),
                        None => bytes.extend(u16::MAX.to_le_bytes()),
                    }
                    bytes.push(u8::from(layer.collides_at(pos)));
                }
            }
        }
        bytes.extend(self.entry_tile.y.to_le_bytes());
        bytes.extend(self.entry_tile.x.to_le_bytes());
        bytes.extend(self.stairs_tile.y.to_le_bytes());
        bytes.extend(self.stairs_tile.x.to_le_bytes());
        bytes.extend((self.catalog.end_room.0 as u32).to_le_bytes());
        bytes
    }
}

/// Runs the whole pipeline against a generated layout. Fails without
/// touching any layer when the layout breaks the furnishing contract
/// (fewer than two rooms, or a room without an interior).
pub fn furnish_floor(
    dungeon: &Dungeon,
    rng: &mut dyn RandomSource,
) -> Result<FurnishedFloor, FurnishError> {
    let catalog = partition_rooms(dungeon, rng)?;

    let width = dungeon.width() as usize;
    let height = dungeon.height() as usize;
    let mut ground = TileLayer::new(width, height);
    ground.fill(tileset::BLANK);
    let mut stuff = TileLayer::new(width, height);
    let mut items = TileLayer::new(width, height);
    let shadow = ShadowLayer::new(width, height);

    synthesis::synthesize_ground(dungeon, &mut ground, rng)?;

    let mut events = Vec::new();
    decoration::place_stairs(dungeon, &catalog, &mut items, &mut events);
    decoration::place_decor(dungeon, &catalog, &mut stuff, rng, &mut events);
    decoration::place_loot(dungeon, &catalog, &mut items, rng, &mut events);
    // Stairs stay walkable so the trigger can see the player stand on them;
    // chests and pots block.
    items.set_collision_by_exclusion(&[tileset::STAIRS]);

    Ok(FurnishedFloor {
        entry_tile: dungeon.room(catalog.start_room).center(),
        stairs_tile: dungeon.room(catalog.end_room).center(),
        ground,
        stuff,
        items,
        shadow,
        catalog,
        stairs_trigger: StairsTrigger::new(tileset::STAIRS),
        events,
    })
}
