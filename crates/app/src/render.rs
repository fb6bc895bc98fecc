//! Flat-color tile rendering: the three index layers bottom-up, the shadow
//! overlay on top, then the HUD and the floor-transition fade.

use core::{Pos, Shade, TileIndex, TileLayer};
use macroquad::prelude::*;

use crate::hud_text;
use crate::scene::GameSession;

const TILE_PX: f32 = 18.0;
const HUD_FONT_SIZE: f32 = 22.0;
const HUD_LINE_STEP: f32 = 22.0;

const BACKGROUND: Color = Color { r: 0.02, g: 0.02, b: 0.03, a: 1.0 };
const FLOOR_CLEAN: Color = Color { r: 0.42, g: 0.38, b: 0.33, a: 1.0 };
const FLOOR_DIRTY: Color = Color { r: 0.36, g: 0.33, b: 0.28, a: 1.0 };
const WALL: Color = Color { r: 0.18, g: 0.16, b: 0.22, a: 1.0 };
const DOOR_JAMB: Color = Color { r: 0.30, g: 0.22, b: 0.14, a: 1.0 };
const STAIRS: Color = Color { r: 0.90, g: 0.90, b: 0.95, a: 1.0 };
const CHEST: Color = Color { r: 0.85, g: 0.65, b: 0.13, a: 1.0 };
const POT: Color = Color { r: 0.72, g: 0.45, b: 0.20, a: 1.0 };
const STUFF: Color = Color { r: 0.35, g: 0.52, b: 0.32, a: 1.0 };
const PLAYER: Color = Color { r: 0.92, g: 0.88, b: 0.70, a: 1.0 };

pub fn draw_frame(session: &GameSession) {
    clear_background(BACKGROUND);

    let scene = session.scene();
    // Camera: keep the player centered.
    let offset_x = screen_width() / 2.0 - scene.player.x * TILE_PX;
    let offset_y = screen_height() / 2.0 - scene.player.y * TILE_PX;

    draw_layer(&scene.floor.ground, offset_x, offset_y);
    draw_layer(&scene.floor.stuff, offset_x, offset_y);
    draw_layer(&scene.floor.items, offset_x, offset_y);

    draw_rectangle(
        offset_x + (scene.player.x - 0.35) * TILE_PX,
        offset_y + (scene.player.y - 0.35) * TILE_PX,
        0.7 * TILE_PX,
        0.7 * TILE_PX,
        PLAYER,
    );

    draw_shadow(scene, offset_x, offset_y);
    draw_hud(session);

    let fade_alpha = session.fade().alpha();
    if fade_alpha > 0.0 {
        draw_rectangle(
            0.0,
            0.0,
            screen_width(),
            screen_height(),
            Color { r: 0.0, g: 0.0, b: 0.0, a: fade_alpha },
        );
    }
}

fn draw_layer(layer: &TileLayer, offset_x: f32, offset_y: f32) {
    for y in 0..layer.height() as i32 {
        for x in 0..layer.width() as i32 {
            let Some(tile) = layer.tile_at(Pos { y, x }) else { continue };
            draw_rectangle(
                offset_x + x as f32 * TILE_PX,
                offset_y + y as f32 * TILE_PX,
                TILE_PX,
                TILE_PX,
                tile_color(tile),
            );
        }
    }
}

fn draw_shadow(scene: &crate::scene::FloorScene, offset_x: f32, offset_y: f32) {
    let shadow = &scene.floor.shadow;
    for y in 0..shadow.height() as i32 {
        for x in 0..shadow.width() as i32 {
            let alpha = shade_alpha(shadow.shade_at(Pos { y, x }));
            if alpha == 0.0 {
                continue;
            }
            draw_rectangle(
                offset_x + x as f32 * TILE_PX,
                offset_y + y as f32 * TILE_PX,
                TILE_PX,
                TILE_PX,
                Color { r: 0.0, g: 0.0, b: 0.0, a: alpha },
            );
        }
    }
}

fn draw_hud(session: &GameSession) {
    let mut text_y = 24.0;
    for line in hud_text(session.level(), session.run_seed()).lines() {
        draw_text(line, 16.0, text_y, HUD_FONT_SIZE, WHITE);
        text_y += HUD_LINE_STEP;
    }
}

/// The previously-seen dim level matches the original's half-alpha shadow.
pub fn shade_alpha(shade: Shade) -> f32 {
    match shade {
        Shade::Opaque => 1.0,
        Shade::Dim => 0.5,
        Shade::Clear => 0.0,
    }
}

fn tile_color(tile: TileIndex) -> Color {
    match tile.0 {
        79 => FLOOR_CLEAN,
        6..=9 => FLOOR_DIRTY,
        39 => STAIRS,
        83 => CHEST,
        13..=15 => POT,
        49 | 59 | 68 | 77 => STUFF,
        50 | 52 | 53 | 55 => DOOR_JAMB,
        _ => WALL,
    }
}
