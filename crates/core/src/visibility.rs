//! Room-scoped fog of war keyed by player room containment.
//! This module exists to keep reveal/dim rules deterministic and isolated
//! from movement; the host feeds it a containment lookup once per tick.

use crate::dungeon::Dungeon;
use crate::layers::{Shade, ShadowLayer};
use crate::types::RoomId;

/// Reveal state of one room. Transitions only ever move forward:
/// `Unrevealed -> ActiveClear` on first entry, then
/// `ActiveClear <-> SeenDim` on leaving and re-entering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoomVisibility {
    Unrevealed,
    SeenDim,
    ActiveClear,
}

/// Tracks which room the player is in and paints the shadow layer on every
/// change. Rebuilt from scratch when the floor regenerates.
pub struct VisibilityEngine {
    active_room: Option<RoomId>,
    room_states: Vec<RoomVisibility>,
}

impl VisibilityEngine {
    pub fn new(room_count: usize) -> Self {
        Self { active_room: None, room_states: vec![RoomVisibility::Unrevealed; room_count] }
    }

    pub fn active_room(&self) -> Option<RoomId> {
        self.active_room
    }

    pub fn room_state(&self, room: RoomId) -> RoomVisibility {
        self.room_states[room.0]
    }

    /// Per-tick update. `None` (the player is between rooms) and the
    /// unchanged room are no-ops, so calling this every frame is safe. On a
    /// real change the incoming room is cleared with a one-cell margin to
    /// cover the door seam, then the outgoing room is dimmed.
    pub fn set_active_room(
        &mut self,
        incoming: Option<RoomId>,
        dungeon: &Dungeon,
        shadow: &mut ShadowLayer,
    ) {
        let Some(next) = incoming else { return };
        if self.active_room == Some(next) {
            return;
        }

        // Dim the outgoing room before clearing the incoming one: the
        // incoming margin overlaps the outgoing wall at the door seam, and
        // the seam must end up lit.
        if let Some(previous) = self.active_room {
            let previous_room = dungeon.room(previous);
            shadow.set_rect(
                previous_room.left(),
                previous_room.top(),
                previous_room.right(),
                previous_room.bottom(),
                Shade::Dim,
            );
            self.room_states[previous.0] = RoomVisibility::SeenDim;
        }

        let room = dungeon.room(next);
        shadow.set_rect(
            room.left() - 1,
            room.top() - 1,
            room.right() + 1,
            room.bottom() + 1,
            Shade::Clear,
        );
        self.room_states[next.0] = RoomVisibility::ActiveClear;

        self.active_room = Some(next);
    }
}
