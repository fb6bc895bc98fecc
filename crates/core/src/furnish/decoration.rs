//! Stochastic furnishing of the stuff and items layers: the exit stairs,
//! ambient decor, and chest-or-pot loot.

use crate::dungeon::{Dungeon, Room};
use crate::layers::TileLayer;
use crate::rng::RandomSource;
use crate::tileset;
use crate::types::{PlacementEvent, Pos};

use super::catalog::RoomCatalog;

const DECOR_CHANCE: f64 = 0.60;
const CHEST_CHANCE: f64 = 0.25;
const POT_CHANCE: f64 = 0.70;
/// Decor and pots keep two cells of clearance from the walls so they never
/// crowd a door seam.
const WALL_INSET: i32 = 2;

pub(super) fn place_stairs(
    dungeon: &Dungeon,
    catalog: &RoomCatalog,
    items: &mut TileLayer,
    events: &mut Vec<PlacementEvent>,
) {
    let at = dungeon.room(catalog.end_room).center();
    items.put_tile(tileset::STAIRS, at);
    events.push(PlacementEvent::StairsPlaced { room: catalog.end_room, at });
}

/// 60% of decorable rooms get one piece of ground clutter at a random
/// inset cell.
pub(super) fn place_decor(
    dungeon: &Dungeon,
    catalog: &RoomCatalog,
    stuff: &mut TileLayer,
    rng: &mut dyn RandomSource,
    events: &mut Vec<PlacementEvent>,
) {
    for &room_id in &catalog.decorable_rooms {
        if rng.unit() > DECOR_CHANCE {
            continue;
        }
        let at = inset_point(dungeon.room(room_id), rng);
        let tile = tileset::STUFF.resolve(rng);
        stuff.put_tile(tile, at);
        events.push(PlacementEvent::DecorPlaced { room: room_id, at });
    }
}

/// Per lootable room, one draw decides the branch: chest at the exact
/// center (25%), a pot at a random inset cell (next 45%), or nothing.
pub(super) fn place_loot(
    dungeon: &Dungeon,
    catalog: &RoomCatalog,
    items: &mut TileLayer,
    rng: &mut dyn RandomSource,
    events: &mut Vec<PlacementEvent>,
) {
    for &room_id in &catalog.lootable_rooms {
        let room = dungeon.room(room_id);
        let draw = rng.unit();
        if draw <= CHEST_CHANCE {
            let at = room.center();
            items.put_tile(tileset::CHEST, at);
            events.push(PlacementEvent::ChestPlaced { room: room_id, at });
        } else if draw <= POT_CHANCE {
            let at = inset_point(room, rng);
            let tile = tileset::POT.resolve(rng);
            items.put_tile(tile, at);
            events.push(PlacementEvent::PotPlaced { room: room_id, at });
        }
    }
}

/// Uniform cell at least `WALL_INSET` from every wall. Rooms too narrow for
/// the inset band collapse to the center line.
fn inset_point(room: &Room, rng: &mut dyn RandomSource) -> Pos {
    let x = rng.between(
        (room.left() + WALL_INSET).min(room.center_x()),
        (room.right() - WALL_INSET).max(room.center_x()),
    );
    let y = rng.between(
        (room.top() + WALL_INSET).min(room.center_y()),
        (room.bottom() - WALL_INSET).max(room.center_y()),
    );
    Pos { y, x }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::Room;
    use crate::rng::{ChaChaSource, ScriptedSource};
    use crate::types::RoomId;

    fn three_room_dungeon() -> Dungeon {
        // Start, middle, end laid out left to right.
        let rooms = vec![
            Room::new(0, 0, 7, 7, Vec::new()),
            Room::new(8, 0, 9, 9, Vec::new()),
            Room::new(18, 0, 7, 7, Vec::new()),
        ];
        Dungeon::new(26, 10, rooms)
    }

    fn fixed_catalog() -> RoomCatalog {
        RoomCatalog {
            start_room: RoomId(0),
            end_room: RoomId(2),
            decorable_rooms: vec![RoomId(1)],
            lootable_rooms: vec![RoomId(1)],
        }
    }

    #[test]
    fn stairs_land_on_the_end_room_center_and_nowhere_else() {
        let dungeon = three_room_dungeon();
        let catalog = fixed_catalog();
        let mut items = TileLayer::new(26, 10);
        let mut events = Vec::new();

        place_stairs(&dungeon, &catalog, &mut items, &mut events);

        assert_eq!(items.find_tiles(tileset::STAIRS), vec![Pos { y: 3, x: 21 }]);
        assert_eq!(
            events,
            vec![PlacementEvent::StairsPlaced { room: RoomId(2), at: Pos { y: 3, x: 21 } }]
        );
    }

    #[test]
    fn decor_draw_at_half_places_one_clutter_tile_inside_the_inset_band() {
        let dungeon = three_room_dungeon();
        let catalog = fixed_catalog();
        let mut stuff = TileLayer::new(26, 10);
        let mut events = Vec::new();
        let mut rng = ScriptedSource::new(&[0.50], &[]);

        place_decor(&dungeon, &catalog, &mut stuff, &mut rng, &mut events);

        let placed = events
            .iter()
            .find_map(|event| match event {
                PlacementEvent::DecorPlaced { room, at } => Some((*room, *at)),
                _ => None,
            })
            .expect("a 0.50 draw is under the 0.60 threshold");
        assert_eq!(placed.0, RoomId(1));
        let at = placed.1;
        // Middle room spans (8..=16, 0..=8); inset band is (10..=14, 2..=6).
        assert!((10..=14).contains(&at.x) && (2..=6).contains(&at.y), "decor at {at:?}");
        let tile = stuff.tile_at(at).expect("tile written at event position");
        assert!(tileset::STUFF.candidate_indices().contains(&tile));
    }

    #[test]
    fn decor_draw_above_threshold_places_nothing() {
        let dungeon = three_room_dungeon();
        let catalog = fixed_catalog();
        let mut stuff = TileLayer::new(26, 10);
        let mut events = Vec::new();
        let mut rng = ScriptedSource::new(&[0.61], &[]);

        place_decor(&dungeon, &catalog, &mut stuff, &mut rng, &mut events);

        assert!(events.is_empty());
    }

    #[test]
    fn loot_draw_in_the_pot_band_places_a_pot_and_no_chest() {
        let dungeon = three_room_dungeon();
        let catalog = fixed_catalog();
        let mut items = TileLayer::new(26, 10);
        let mut events = Vec::new();
        let mut rng = ScriptedSource::new(&[0.40], &[]);

        place_loot(&dungeon, &catalog, &mut items, &mut rng, &mut events);

        assert_eq!(items.find_tiles(tileset::CHEST), Vec::new(), "no chest anywhere");
        let (room, at) = events
            .iter()
            .find_map(|event| match event {
                PlacementEvent::PotPlaced { room, at } => Some((*room, *at)),
                _ => None,
            })
            .expect("a 0.40 draw lands in the pot band");
        assert_eq!(room, RoomId(1));
        let tile = items.tile_at(at).expect("pot written");
        assert!(tileset::POT.candidate_indices().contains(&tile));
    }

    #[test]
    fn loot_draw_at_the_chest_threshold_places_a_chest_at_the_exact_center() {
        let dungeon = three_room_dungeon();
        let catalog = fixed_catalog();
        let mut items = TileLayer::new(26, 10);
        let mut events = Vec::new();
        let mut rng = ScriptedSource::new(&[0.25], &[]);

        place_loot(&dungeon, &catalog, &mut items, &mut rng, &mut events);

        assert_eq!(items.find_tiles(tileset::CHEST), vec![Pos { y: 4, x: 12 }]);
        assert!(matches!(events[0], PlacementEvent::ChestPlaced { room: RoomId(1), .. }));
    }

    #[test]
    fn loot_draw_above_the_pot_band_places_nothing() {
        let dungeon = three_room_dungeon();
        let catalog = fixed_catalog();
        let mut items = TileLayer::new(26, 10);
        let mut events = Vec::new();
        let mut rng = ScriptedSource::new(&[0.71], &[]);

        place_loot(&dungeon, &catalog, &mut items, &mut rng, &mut events);

        assert!(events.is_empty());
        assert!(items.find_tiles(tileset::CHEST).is_empty());
    }

    #[test]
    fn half_decor_and_point_four_loot_yield_decor_plus_pot_and_no_chest() {
        // The full three-room scenario in one pass: stairs at the end room
        // center, a 0.50 decor draw and a 0.40 loot draw for the middle
        // room.
        let dungeon = three_room_dungeon();
        let catalog = fixed_catalog();
        let mut stuff = TileLayer::new(26, 10);
        let mut items = TileLayer::new(26, 10);
        let mut events = Vec::new();
        let mut rng = ScriptedSource::new(&[0.50, 0.40], &[]);

        place_stairs(&dungeon, &catalog, &mut items, &mut events);
        place_decor(&dungeon, &catalog, &mut stuff, &mut rng, &mut events);
        place_loot(&dungeon, &catalog, &mut items, &mut rng, &mut events);

        assert_eq!(items.find_tiles(tileset::STAIRS), vec![Pos { y: 3, x: 21 }]);
        assert!(items.find_tiles(tileset::CHEST).is_empty(), "no chest anywhere");
        assert_eq!(events.len(), 3, "stairs, one decor, one pot: {events:?}");
        assert!(matches!(events[0], PlacementEvent::StairsPlaced { .. }));
        assert!(matches!(events[1], PlacementEvent::DecorPlaced { room: RoomId(1), .. }));
        assert!(matches!(events[2], PlacementEvent::PotPlaced { room: RoomId(1), .. }));
    }

    #[test]
    fn narrow_room_inset_collapses_to_the_center_line() {
        let room = Room::new(0, 0, 3, 3, Vec::new());
        let mut rng = ChaChaSource::seeded(14);
        for _ in 0..20 {
            assert_eq!(inset_point(&room, &mut rng), Pos { y: 1, x: 1 });
        }
    }
}
