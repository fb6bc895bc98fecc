use std::path::Path;

use app::config::{LayoutConfig, build_window_conf};
use app::player::MoveInput;
use app::scene::GameSession;
use app::seed::{generate_runtime_seed, resolve_seed_from_args};
use app::{format_seed, render};
use macroquad::prelude::{KeyCode, get_frame_time, is_key_down, next_frame};

const LAYOUT_CONFIG_PATH: &str = "layout.json";

fn capture_move_input() -> MoveInput {
    MoveInput {
        left: is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
        right: is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
        up: is_key_down(KeyCode::Up) || is_key_down(KeyCode::W),
        down: is_key_down(KeyCode::Down) || is_key_down(KeyCode::S),
    }
}

#[macroquad::main(build_window_conf)]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    let seed_choice = match resolve_seed_from_args(&args, generate_runtime_seed()) {
        Ok(choice) => choice,
        Err(message) => {
            eprintln!("{message}");
            return;
        }
    };

    let config = match LayoutConfig::load_or_default(Path::new(LAYOUT_CONFIG_PATH)) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("bad {LAYOUT_CONFIG_PATH}: {error}");
            return;
        }
    };

    let mut session = match GameSession::new(seed_choice.value(), config) {
        Ok(session) => session,
        Err(error) => {
            eprintln!("floor generation failed: {error}");
            return;
        }
    };
    println!("run seed: {}", format_seed(seed_choice.value()));

    loop {
        session.frame(capture_move_input(), get_frame_time(), &config);
        render::draw_frame(&session);
        next_frame().await;
    }
}
