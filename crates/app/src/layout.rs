//! Floor plan generation: odd-sized rooms grown edge-to-edge with matching
//! door pairs. The furnishing core consumes the result as opaque geometry;
//! everything about how rooms come to exist lives here.

use core::rng::RandomSource;
use core::{Dungeon, Pos, Room};

use crate::config::LayoutConfig;

const PLACEMENT_ATTEMPTS: u32 = 240;

#[derive(Clone, Debug)]
struct GrowingRoom {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    doors: Vec<Pos>,
}

impl GrowingRoom {
    fn right(&self) -> i32 {
        self.x + self.width - 1
    }

    fn bottom(&self) -> i32 {
        self.y + self.height - 1
    }

    fn intersects(&self, other: &Self) -> bool {
        self.x <= other.right()
            && self.right() >= other.x
            && self.y <= other.bottom()
            && self.bottom() >= other.y
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

/// Grows a dungeon from a centered seed room: each attempt picks a placed
/// room, a side, and a door cell, then tries to attach a fresh odd-sized
/// room flush against that side so the door pair lines up. Rejected
/// placements cost one attempt; the loop stops at `max_rooms` or when the
/// attempt budget runs out.
pub fn generate_layout(config: &LayoutConfig, rng: &mut dyn RandomSource) -> Dungeon {
    let mut rooms = Vec::with_capacity(config.max_rooms);

    let seed_width = odd_between(rng, config.room_min, config.room_max);
    let seed_height = odd_between(rng, config.room_min, config.room_max);
    rooms.push(GrowingRoom {
        x: (config.floor_width - seed_width) / 2,
        y: (config.floor_height - seed_height) / 2,
        width: seed_width,
        height: seed_height,
        doors: Vec::new(),
    });

    for _ in 0..PLACEMENT_ATTEMPTS {
        if rooms.len() >= config.max_rooms {
            break;
        }
        let source = rng.between(0, rooms.len() as i32 - 1) as usize;
        let side = match rng.between(0, 3) {
            0 => Side::Top,
            1 => Side::Right,
            2 => Side::Bottom,
            _ => Side::Left,
        };
        let width = odd_between(rng, config.room_min, config.room_max);
        let height = odd_between(rng, config.room_min, config.room_max);
        try_attach(config, &mut rooms, source, side, width, height, rng);
    }

    if rooms.len() < 2 {
        attach_fallback_room(config, &mut rooms);
    }

    let rooms = rooms
        .into_iter()
        .map(|room| Room::new(room.x, room.y, room.width, room.height, room.doors))
        .collect();
    Dungeon::new(config.floor_width, config.floor_height, rooms)
}

fn try_attach(
    config: &LayoutConfig,
    rooms: &mut Vec<GrowingRoom>,
    source: usize,
    side: Side,
    width: i32,
    height: i32,
    rng: &mut dyn RandomSource,
) {
    let padding = config.door_padding;
    let anchor = rooms[source].clone();

    // Pick the shared door cell on the anchor's perimeter, then slide the
    // candidate along the shared wall so its own matching door keeps the
    // same corner padding.
    let (candidate_x, candidate_y, source_door, candidate_door) = match side {
        Side::Top | Side::Bottom => {
            let door_x = rng.between(anchor.x + padding, anchor.right() - padding);
            let offset = rng.between(padding, width - 1 - padding);
            let candidate_x = door_x - offset;
            let (candidate_y, source_door_y, candidate_door_y) = if side == Side::Top {
                (anchor.y - height, 0, height - 1)
            } else {
                (anchor.bottom() + 1, anchor.height - 1, 0)
            };
            (
                candidate_x,
                candidate_y,
                Pos { y: source_door_y, x: door_x - anchor.x },
                Pos { y: candidate_door_y, x: door_x - candidate_x },
            )
        }
        Side::Left | Side::Right => {
            let door_y = rng.between(anchor.y + padding, anchor.bottom() - padding);
            let offset = rng.between(padding, height - 1 - padding);
            let candidate_y = door_y - offset;
            let (candidate_x, source_door_x, candidate_door_x) = if side == Side::Left {
                (anchor.x - width, 0, width - 1)
            } else {
                (anchor.right() + 1, anchor.width - 1, 0)
            };
            (
                candidate_x,
                candidate_y,
                Pos { y: door_y - anchor.y, x: source_door_x },
                Pos { y: door_y - candidate_y, x: candidate_door_x },
            )
        }
    };

    let mut candidate =
        GrowingRoom { x: candidate_x, y: candidate_y, width, height, doors: Vec::new() };
    if candidate.x < 0
        || candidate.y < 0
        || candidate.right() >= config.floor_width
        || candidate.bottom() >= config.floor_height
    {
        return;
    }
    if rooms.iter().any(|existing| existing.intersects(&candidate)) {
        return;
    }

    rooms[source].doors.push(source_door);
    candidate.doors.push(candidate_door);
    rooms.push(candidate);
}

/// Deterministic rescue for layouts that never managed a second room: a
/// minimum-size room flush against whichever side of the seed room fits,
/// doors at the shared wall's center.
fn attach_fallback_room(config: &LayoutConfig, rooms: &mut Vec<GrowingRoom>) {
    let seed_room = rooms[0].clone();
    let extent = config.room_min;

    let candidates = [
        (Side::Right, seed_room.right() + 1, seed_room.y),
        (Side::Bottom, seed_room.x, seed_room.bottom() + 1),
        (Side::Left, seed_room.x - extent, seed_room.y),
        (Side::Top, seed_room.x, seed_room.y - extent),
    ];
    for (side, x, y) in candidates {
        let candidate = GrowingRoom { x, y, width: extent, height: extent, doors: Vec::new() };
        if candidate.x < 0
            || candidate.y < 0
            || candidate.right() >= config.floor_width
            || candidate.bottom() >= config.floor_height
        {
            continue;
        }

        let (seed_door, fallback_door) = match side {
            Side::Right => (
                Pos { y: extent / 2, x: seed_room.width - 1 },
                Pos { y: extent / 2, x: 0 },
            ),
            Side::Bottom => (
                Pos { y: seed_room.height - 1, x: extent / 2 },
                Pos { y: 0, x: extent / 2 },
            ),
            Side::Left => (Pos { y: extent / 2, x: 0 }, Pos { y: extent / 2, x: extent - 1 }),
            Side::Top => (Pos { y: 0, x: extent / 2 }, Pos { y: extent - 1, x: extent / 2 }),
        };
        rooms[0].doors.push(seed_door);
        let mut candidate = candidate;
        candidate.doors.push(fallback_door);
        rooms.push(candidate);
        return;
    }
}

fn odd_between(rng: &mut dyn RandomSource, min: i32, max: i32) -> i32 {
    min + 2 * rng.between(0, (max - min) / 2)
}
