//! Ground-layer synthesis: floors, fixed corners, weighted walls, and door
//! patterns for every room of the dungeon.

use crate::dungeon::{Dungeon, Room};
use crate::layers::TileLayer;
use crate::rng::RandomSource;
use crate::tileset;
use crate::types::{FurnishError, Pos, RoomId};

const MIN_ROOM_EXTENT: i32 = 3;

/// Writes structure tiles for every room, start and end included, then
/// recomputes the ground collision mask by excluding the floor variants.
/// All rooms are validated before the first write, so a failed call leaves
/// the layer untouched.
pub(super) fn synthesize_ground(
    dungeon: &Dungeon,
    ground: &mut TileLayer,
    rng: &mut dyn RandomSource,
) -> Result<(), FurnishError> {
    for (index, room) in dungeon.rooms().iter().enumerate() {
        if room.width() < MIN_ROOM_EXTENT || room.height() < MIN_ROOM_EXTENT {
            return Err(FurnishError::RoomTooSmall {
                room: RoomId(index),
                width: room.width(),
                height: room.height(),
            });
        }
    }

    for room in dungeon.rooms() {
        furnish_room(room, ground, rng);
    }

    ground.set_collision_by_exclusion(&tileset::FLOOR.candidate_indices());
    Ok(())
}

/// Interior, then corners, then wall runs, then doors. Later writes win at
/// overlapping cells; doors punch through the wall tiles under them.
fn furnish_room(room: &Room, ground: &mut TileLayer, rng: &mut dyn RandomSource) {
    ground.weighted_fill(
        &tileset::FLOOR,
        room.x() + 1,
        room.y() + 1,
        room.width() - 2,
        room.height() - 2,
        rng,
    );

    ground.put_tile(tileset::WALL_TOP_LEFT, Pos { y: room.top(), x: room.left() });
    ground.put_tile(tileset::WALL_TOP_RIGHT, Pos { y: room.top(), x: room.right() });
    ground.put_tile(tileset::WALL_BOTTOM_RIGHT, Pos { y: room.bottom(), x: room.right() });
    ground.put_tile(tileset::WALL_BOTTOM_LEFT, Pos { y: room.bottom(), x: room.left() });

    ground.weighted_fill(&tileset::WALL_TOP, room.left() + 1, room.top(), room.width() - 2, 1, rng);
    ground.weighted_fill(
        &tileset::WALL_BOTTOM,
        room.left() + 1,
        room.bottom(),
        room.width() - 2,
        1,
        rng,
    );
    ground.weighted_fill(&tileset::WALL_LEFT, room.left(), room.top() + 1, 1, room.height() - 2, rng);
    ground.weighted_fill(
        &tileset::WALL_RIGHT,
        room.right(),
        room.top() + 1,
        1,
        room.height() - 2,
        rng,
    );

    for door in room.door_locations() {
        write_door(room, *door, ground);
    }
}

/// Classifies the door by edge, top before bottom before left before right,
/// and stamps the direction's 3-tile pattern centered on the door cell.
/// A door off the perimeter (excluded by generator contract) matches no
/// branch and writes nothing.
fn write_door(room: &Room, door: Pos, ground: &mut TileLayer) {
    let pattern_cells = if door.y == 0 {
        tileset::DOOR_TOP.cells(Pos { y: room.y(), x: room.x() + door.x - 1 })
    } else if door.y == room.height() - 1 {
        tileset::DOOR_BOTTOM.cells(Pos { y: room.y() + door.y, x: room.x() + door.x - 1 })
    } else if door.x == 0 {
        tileset::DOOR_LEFT.cells(Pos { y: room.y() + door.y - 1, x: room.x() })
    } else if door.x == room.width() - 1 {
        tileset::DOOR_RIGHT.cells(Pos { y: room.y() + door.y - 1, x: room.x() + door.x })
    } else {
        return;
    };

    for (pos, tile) in pattern_cells {
        ground.put_tile(tile, pos);
    }
}
