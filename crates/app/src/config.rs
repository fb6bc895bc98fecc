//! Layout generator knobs and the desktop window configuration.

use std::fs;
use std::io;
use std::path::Path;

use macroquad::window::Conf;
use serde::{Deserialize, Serialize};

use crate::APP_NAME;

const DEFAULT_WINDOW_WIDTH: i32 = 960;
const DEFAULT_WINDOW_HEIGHT: i32 = 720;

pub fn build_window_conf() -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: DEFAULT_WINDOW_WIDTH,
        window_height: DEFAULT_WINDOW_HEIGHT,
        high_dpi: true,
        ..Default::default()
    }
}

/// Knobs handed to the layout generator. Room bounds must be odd so every
/// room has a center cell, and doors keep `door_padding` tiles of wall
/// between themselves and the nearest corner.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    pub floor_width: i32,
    pub floor_height: i32,
    pub room_min: i32,
    pub room_max: i32,
    pub max_rooms: usize,
    pub door_padding: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            floor_width: 50,
            floor_height: 50,
            room_min: 7,
            room_max: 15,
            max_rooms: 12,
            door_padding: 2,
        }
    }
}

impl LayoutConfig {
    /// Loads overrides from a JSON file; a missing file means defaults.
    pub fn load_or_default(path: &Path) -> io::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;
        config.validate().map_err(|message| io::Error::new(io::ErrorKind::InvalidData, message))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.room_min % 2 == 0 || self.room_max % 2 == 0 {
            return Err(format!(
                "room bounds must be odd, got {}..{}",
                self.room_min, self.room_max
            ));
        }
        if self.room_min < 5 || self.room_max < self.room_min {
            return Err(format!("room bounds {}..{} out of range", self.room_min, self.room_max));
        }
        if self.door_padding < 1 || self.door_padding > (self.room_min - 3) / 2 + 1 {
            return Err(format!(
                "door padding {} leaves no legal door cell on a {}-wide room",
                self.door_padding, self.room_min
            ));
        }
        if self.max_rooms < 2 {
            return Err("a floor needs at least a start and an end room".to_string());
        }
        if self.floor_width < self.room_max || self.floor_height < self.room_max {
            return Err(format!(
                "floor {}x{} cannot hold a {}-wide room",
                self.floor_width, self.floor_height, self.room_max
            ));
        }
        Ok(())
    }
}
