//! Floor lifecycle state: the level counter, the exit latch, and the
//! one-shot stairs trigger. The host owns the fade/teardown sequence; this
//! module only decides when it starts and guarantees it starts once.

use crate::types::TileIndex;

/// Counters that outlive a single floor. `reached_exit` moves false→true
/// exactly once per floor and is only cleared by `begin_floor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FloorSession {
    level: u32,
    reached_exit: bool,
}

impl FloorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the next floor: bumps the level and clears the exit latch.
    pub fn begin_floor(&mut self) {
        self.level += 1;
        self.reached_exit = false;
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn reached_exit(&self) -> bool {
        self.reached_exit
    }
}

/// Emitted once per floor, the frame the player first touches the stairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloorEvent {
    ExitReached,
}

/// Edge-triggered watcher for one tile index on the items layer. Disarms
/// itself on the first hit, so holding still on the stairs for a hundred
/// ticks still fires exactly one event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StairsTrigger {
    watched: TileIndex,
    armed: bool,
}

impl StairsTrigger {
    pub fn new(watched: TileIndex) -> Self {
        Self { watched, armed: true }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Feed the items-layer tile under the player each tick. Latches the
    /// session and disarms before returning, so the caller sees the frozen
    /// state no matter what it does with the event.
    pub fn notify_contact(
        &mut self,
        tile: Option<TileIndex>,
        session: &mut FloorSession,
    ) -> Option<FloorEvent> {
        if !self.armed || tile != Some(self.watched) {
            return None;
        }
        self.armed = false;
        session.reached_exit = true;
        Some(FloorEvent::ExitReached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAIRS: TileIndex = TileIndex(39);

    #[test]
    fn trigger_fires_once_then_stays_silent_under_repeated_contact() {
        let mut session = FloorSession::new();
        session.begin_floor();
        let mut trigger = StairsTrigger::new(STAIRS);

        assert_eq!(trigger.notify_contact(Some(STAIRS), &mut session), Some(FloorEvent::ExitReached));
        assert!(session.reached_exit());
        assert!(!trigger.is_armed());

        for _ in 0..100 {
            assert_eq!(trigger.notify_contact(Some(STAIRS), &mut session), None);
        }
        assert!(session.reached_exit(), "latch never resets mid-floor");
    }

    #[test]
    fn trigger_ignores_other_tiles_and_empty_cells() {
        let mut session = FloorSession::new();
        session.begin_floor();
        let mut trigger = StairsTrigger::new(STAIRS);

        assert_eq!(trigger.notify_contact(None, &mut session), None);
        assert_eq!(trigger.notify_contact(Some(TileIndex(83)), &mut session), None);
        assert!(trigger.is_armed(), "misses leave the trigger armed");
        assert!(!session.reached_exit());
    }

    #[test]
    fn latch_is_set_before_the_event_is_observable() {
        let mut session = FloorSession::new();
        session.begin_floor();
        let mut trigger = StairsTrigger::new(STAIRS);

        let event = trigger.notify_contact(Some(STAIRS), &mut session);
        // By the time the caller can react to the event, movement is
        // already supposed to be frozen.
        assert!(session.reached_exit());
        assert_eq!(event, Some(FloorEvent::ExitReached));
    }

    #[test]
    fn begin_floor_increments_level_and_rearms_the_world() {
        let mut session = FloorSession::new();
        assert_eq!(session.level(), 0);

        session.begin_floor();
        assert_eq!(session.level(), 1);

        let mut trigger = StairsTrigger::new(STAIRS);
        trigger.notify_contact(Some(STAIRS), &mut session);
        assert!(session.reached_exit());

        session.begin_floor();
        assert_eq!(session.level(), 2);
        assert!(!session.reached_exit(), "regeneration clears the latch");

        // A fresh floor gets a fresh trigger.
        let trigger = StairsTrigger::new(STAIRS);
        assert!(trigger.is_armed());
    }
}
