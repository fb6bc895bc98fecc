//! Splits the generator's room list into start, end, decorable, and
//! lootable subsets.

use crate::dungeon::Dungeon;
use crate::rng::{self, RandomSource};
use crate::types::{FurnishError, RoomId};

/// Share of the non-start, non-end rooms eligible for loot.
const LOOTABLE_SHARE: f64 = 0.9;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomCatalog {
    pub start_room: RoomId,
    pub end_room: RoomId,
    /// Every room that is neither start nor end, in generator order.
    pub decorable_rooms: Vec<RoomId>,
    /// A shuffled 90% subset of the same remainder, sampled independently
    /// of `decorable_rooms`.
    pub lootable_rooms: Vec<RoomId>,
}

/// The start room is always index 0; the end room is drawn uniformly from
/// the rest. A two-room floor has empty decorable and lootable sets, which
/// is valid: nothing gets decorated.
pub fn partition_rooms(
    dungeon: &Dungeon,
    rng: &mut dyn RandomSource,
) -> Result<RoomCatalog, FurnishError> {
    let room_count = dungeon.rooms().len();
    if room_count < 2 {
        return Err(FurnishError::TooFewRooms { found: room_count });
    }

    let mut remaining: Vec<RoomId> = (1..room_count).map(RoomId).collect();
    let end_room =
        rng::remove_random(rng, &mut remaining).expect("a non-start room remains");

    let decorable_rooms = remaining.clone();
    let mut lootable_rooms = remaining;
    rng::shuffle(rng, &mut lootable_rooms);
    let lootable_count = (lootable_rooms.len() as f64 * LOOTABLE_SHARE) as usize;
    lootable_rooms.truncate(lootable_count);

    Ok(RoomCatalog { start_room: RoomId(0), end_room, decorable_rooms, lootable_rooms })
}
