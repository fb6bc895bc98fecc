//! Floor lifecycle: generate a layout, furnish it, run the per-frame
//! update, and regenerate everything when the stairs fire. The update is a
//! plain function over a `MoveInput` so tests can drive whole runs without
//! a window.

use core::rng::RandomSource;
use core::{
    ChaChaSource, Dungeon, FloorEvent, FloorSession, FurnishError, FurnishedFloor,
    VisibilityEngine, furnish_floor,
};

use crate::config::LayoutConfig;
use crate::layout::generate_layout;
use crate::player::{MoveInput, Player};
use crate::seed::floor_seed;

/// Seconds of fade-to-black between touching the stairs and tearing the
/// floor down.
const FADE_SECONDS: f32 = 0.25;

/// Everything that dies with the current floor.
pub struct FloorScene {
    pub dungeon: Dungeon,
    pub floor: FurnishedFloor,
    pub visibility: VisibilityEngine,
    pub player: Player,
}

impl FloorScene {
    fn generate(config: &LayoutConfig, rng: &mut dyn RandomSource) -> Result<Self, FurnishError> {
        let dungeon = generate_layout(config, rng);
        let floor = furnish_floor(&dungeon, rng)?;
        let visibility = VisibilityEngine::new(dungeon.rooms().len());
        let player = Player::at_tile(floor.entry_tile);
        Ok(Self { dungeon, floor, visibility, player })
    }
}

/// Fade overlay progress. `Faded(1.0)` is fully black, right before the
/// next floor appears.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fade {
    None,
    Out { progress: f32 },
}

impl Fade {
    pub fn alpha(self) -> f32 {
        match self {
            Self::None => 0.0,
            Self::Out { progress } => progress.min(1.0),
        }
    }
}

/// One run of the game: a run seed, the floor counter, and the scene for
/// the floor currently being played.
pub struct GameSession {
    run_seed: u64,
    session: FloorSession,
    scene: FloorScene,
    fade: Fade,
}

impl GameSession {
    pub fn new(run_seed: u64, config: LayoutConfig) -> Result<Self, FurnishError> {
        let mut session = FloorSession::new();
        session.begin_floor();
        let mut rng = ChaChaSource::seeded(floor_seed(run_seed, session.level()));
        let scene = FloorScene::generate(&config, &mut rng)?;
        Ok(Self { run_seed, session, scene, fade: Fade::None })
    }

    pub fn level(&self) -> u32 {
        self.session.level()
    }

    pub fn run_seed(&self) -> u64 {
        self.run_seed
    }

    pub fn scene(&self) -> &FloorScene {
        &self.scene
    }

    pub fn fade(&self) -> Fade {
        self.fade
    }

    /// Per-frame step: advance the fade or move the player, update room
    /// containment, and let the stairs trigger end the floor. Regeneration
    /// replaces the dungeon, the layers, the visibility engine, and the
    /// player wholesale.
    pub fn frame(&mut self, input: MoveInput, dt: f32, config: &LayoutConfig) {
        if let Fade::Out { progress } = self.fade {
            let progress = progress + dt / FADE_SECONDS;
            if progress < 1.0 {
                self.fade = Fade::Out { progress };
                return;
            }
            self.descend(config);
            return;
        }

        let scene = &mut self.scene;
        scene.player.update(input, dt, &scene.floor.ground, &scene.floor.items);

        let player_tile = scene.player.tile();
        let containing_room = scene.dungeon.room_at(player_tile);
        scene.visibility.set_active_room(
            containing_room,
            &scene.dungeon,
            &mut scene.floor.shadow,
        );

        let item_under_player = scene.floor.items.tile_at(player_tile);
        if let Some(FloorEvent::ExitReached) =
            scene.floor.stairs_trigger.notify_contact(item_under_player, &mut self.session)
        {
            scene.player.freeze();
            self.fade = Fade::Out { progress: 0.0 };
        }
    }

    fn descend(&mut self, config: &LayoutConfig) {
        self.session.begin_floor();
        let mut rng = ChaChaSource::seeded(floor_seed(self.run_seed, self.session.level()));
        match FloorScene::generate(config, &mut rng) {
            Ok(scene) => {
                self.scene = scene;
                self.fade = Fade::None;
            }
            Err(error) => {
                // The config already furnished one floor; a later failure
                // would take a degenerate layout draw. Keep the old floor
                // rather than tearing the window down.
                eprintln!("floor regeneration failed: {error}");
                self.fade = Fade::None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::{Pos, RoomVisibility, Shade};

    fn test_config() -> LayoutConfig {
        LayoutConfig::default()
    }

    fn hold(direction: fn(&mut MoveInput)) -> MoveInput {
        let mut input = MoveInput::default();
        direction(&mut input);
        input
    }

    /// Teleports the player body onto a tile, bypassing physics. Test-only
    /// shortcut for reaching the stairs without pathfinding.
    fn place_player(session: &mut GameSession, tile: Pos) {
        session.scene.player = Player::at_tile(tile);
    }

    #[test]
    fn new_session_starts_on_level_one_with_the_player_in_the_start_room() {
        let session = GameSession::new(42, test_config()).expect("session");
        assert_eq!(session.level(), 1);

        let scene = session.scene();
        let start = scene.floor.catalog.start_room;
        assert_eq!(scene.dungeon.room_at(scene.player.tile()), Some(start));
        assert_eq!(scene.visibility.active_room(), None, "nothing revealed before a frame runs");
    }

    #[test]
    fn first_frame_reveals_the_start_room() {
        let mut session = GameSession::new(7, test_config()).expect("session");
        session.frame(MoveInput::default(), 1.0 / 60.0, &test_config());

        let scene = session.scene();
        let start = scene.floor.catalog.start_room;
        assert_eq!(scene.visibility.active_room(), Some(start));
        assert_eq!(scene.visibility.room_state(start), RoomVisibility::ActiveClear);
        let center = scene.dungeon.room(start).center();
        assert_eq!(scene.floor.shadow.shade_at(center), Shade::Clear);
    }

    #[test]
    fn touching_the_stairs_freezes_fades_and_regenerates_with_a_new_level() {
        let config = test_config();
        let mut session = GameSession::new(1234, config).expect("session");
        let stairs_tile = session.scene().floor.stairs_tile;
        let old_bytes = session.scene().floor.canonical_bytes();

        place_player(&mut session, stairs_tile);
        session.frame(MoveInput::default(), 1.0 / 60.0, &config);

        assert!(session.scene().player.is_frozen(), "contact must freeze the player");
        assert!(matches!(session.fade(), Fade::Out { .. }));
        assert_eq!(session.level(), 1, "still on the old floor during the fade");

        // Movement input during the fade is ignored.
        let frozen_pos = (session.scene().player.x, session.scene().player.y);
        session.frame(hold(|input| input.right = true), 0.05, &config);
        assert_eq!((session.scene().player.x, session.scene().player.y), frozen_pos);

        // Run the fade out.
        for _ in 0..30 {
            session.frame(MoveInput::default(), 0.05, &config);
        }

        assert_eq!(session.level(), 2, "descending increments the level");
        assert_eq!(session.fade(), Fade::None);
        let scene = session.scene();
        assert!(!scene.player.is_frozen(), "the new floor starts unfrozen");
        assert!(scene.floor.stairs_trigger.is_armed(), "fresh trigger per floor");
        // The frames that ran after the descend already revealed the new
        // start room and nothing else: the engine really is fresh.
        assert_eq!(scene.visibility.active_room(), Some(scene.floor.catalog.start_room));
        for index in 0..scene.dungeon.rooms().len() {
            if core::RoomId(index) != scene.floor.catalog.start_room {
                assert_eq!(
                    scene.visibility.room_state(core::RoomId(index)),
                    RoomVisibility::Unrevealed
                );
            }
        }
        assert_ne!(
            scene.floor.canonical_bytes(),
            old_bytes,
            "regeneration must produce a different floor"
        );
    }

    #[test]
    fn lingering_on_the_stairs_fires_only_once() {
        let config = test_config();
        let mut session = GameSession::new(99, config).expect("session");
        let stairs_tile = session.scene().floor.stairs_tile;

        place_player(&mut session, stairs_tile);
        session.frame(MoveInput::default(), 0.01, &config);
        let level_after_first_contact = session.level();

        // Stay in contact for several frames; the fade must not restart
        // and the trigger must not re-fire.
        for _ in 0..3 {
            session.frame(MoveInput::default(), 0.01, &config);
        }
        assert_eq!(session.level(), level_after_first_contact);
        assert!(!session.scene().floor.stairs_trigger.is_armed());
    }

    #[test]
    fn same_run_seed_replays_the_same_floors() {
        let config = test_config();
        let first = GameSession::new(777, config).expect("session");
        let second = GameSession::new(777, config).expect("session");
        assert_eq!(
            first.scene().floor.canonical_bytes(),
            second.scene().floor.canonical_bytes()
        );
        assert_eq!(first.scene().dungeon, second.scene().dungeon);
    }

    #[test]
    fn active_room_always_tracks_the_room_containing_the_player() {
        let config = test_config();
        let mut session = GameSession::new(5, config).expect("session");

        // Sweep the player around in a square; wherever the body ends up,
        // the engine must agree with the containment lookup. Fade frames
        // and the frame that swaps floors don't run a visibility update,
        // so they are skipped.
        let mut last_level = session.level();
        for frame_index in 0..240 {
            let input = match (frame_index / 40) % 4 {
                0 => hold(|input| input.right = true),
                1 => hold(|input| input.down = true),
                2 => hold(|input| input.left = true),
                _ => hold(|input| input.up = true),
            };
            session.frame(input, 0.02, &config);

            if session.level() != last_level {
                last_level = session.level();
                continue;
            }
            if session.fade() != Fade::None {
                continue;
            }
            let scene = session.scene();
            if let Some(room) = scene.dungeon.room_at(scene.player.tile()) {
                assert_eq!(
                    scene.visibility.active_room(),
                    Some(room),
                    "frame {frame_index}: engine lost track of the player's room"
                );
            }
        }
    }
}
