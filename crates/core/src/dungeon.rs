//! Read-only room and dungeon geometry handed over by the layout generator.
//! This core only queries it; it never mutates or extends the layout.

use crate::types::{Pos, RoomId};

/// An axis-aligned room rectangle in grid units plus its perimeter door
/// cells in room-local coordinates. The generator guarantees odd width and
/// height (a well-defined center cell) and doors on the perimeter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    doors: Vec<Pos>,
}

impl Room {
    pub fn new(x: i32, y: i32, width: i32, height: i32, doors: Vec<Pos>) -> Self {
        Self { x, y, width, height, doors }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width - 1
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height - 1
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.height / 2
    }

    pub fn center(&self) -> Pos {
        Pos { y: self.center_y(), x: self.center_x() }
    }

    /// Door cells in room-local coordinates, each on the room's perimeter.
    pub fn door_locations(&self) -> &[Pos] {
        &self.doors
    }

    /// Point-in-rectangle, walls included.
    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= self.left() && pos.x <= self.right() && pos.y >= self.top() && pos.y <= self.bottom()
    }
}

/// The generator's output: floor dimensions and an ordered room list where
/// index 0 is the designated start room.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dungeon {
    width: i32,
    height: i32,
    rooms: Vec<Room>,
}

impl Dungeon {
    pub fn new(width: i32, height: i32, rooms: Vec<Room>) -> Self {
        Self { width, height, rooms }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    /// The room owning a grid cell, or `None` in the gaps between rooms.
    pub fn room_at(&self, pos: Pos) -> Option<RoomId> {
        self.rooms.iter().position(|room| room.contains(pos)).map(RoomId)
    }
}
