//! Runtime settings
//!
//! Read once at startup from a JSON file next to the executable's working
//! directory. Every field is optional in the file; anything missing takes its
//! default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::levels::{LevelConfig, default_catalog};
use crate::persistence::{JsonFileStore, MemoryStore, SaveStore};
use crate::sim::Field;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub window_width: u32,
    pub window_height: u32,
    /// Pixels reserved for HUD, half above and half below the field
    pub hud_band: f32,

    // === Persistence ===
    /// Save history file; `null` keeps history in memory only
    pub save_file: Option<PathBuf>,

    // === Assets ===
    /// Sprite manifest; built-in sprites when absent
    pub asset_manifest: Option<PathBuf>,

    // === Gameplay ===
    pub player_speed: f32,
    pub damage_cooldown_ms: u64,
    pub rewards_per_level: usize,
    pub reward_speed_factor: f32,
    /// Fixed RNG seed; wall clock when absent
    pub seed: Option<u64>,
    pub levels: Vec<LevelConfig>,

    // === Diagnostics ===
    /// env_logger filter used when RUST_LOG is unset
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            hud_band: HUD_BAND,

            save_file: Some(PathBuf::from(SAVE_FILE)),

            asset_manifest: None,

            player_speed: PLAYER_SPEED,
            damage_cooldown_ms: (DAMAGE_COOLDOWN * 1000.0) as u64,
            rewards_per_level: REWARDS_PER_LEVEL,
            reward_speed_factor: REWARD_SPEED_FACTOR,
            seed: None,
            levels: default_catalog(),

            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Playable area for the configured window
    pub fn field(&self) -> Field {
        Field::for_window(
            self.window_width as f32,
            self.window_height as f32,
            self.hud_band,
        )
    }

    /// Configured levels, or the built-in catalog when none are given
    pub fn level_catalog(&self) -> Vec<LevelConfig> {
        if self.levels.is_empty() {
            log::warn!("No levels configured, using built-in catalog");
            default_catalog()
        } else {
            self.levels.clone()
        }
    }

    /// Settings file location: `SPACE_DRIFT_CONFIG` or the default name
    pub fn default_path() -> PathBuf {
        std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE))
    }

    /// Load from the default location
    pub fn load_default() -> Self {
        Self::load(&Self::default_path())
    }

    /// Load from a file, falling back to defaults if it is missing or broken
    pub fn load(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Malformed settings {}, using defaults: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Persistence backend selected by `save_file`
    pub fn save_store(&self) -> Box<dyn SaveStore> {
        match &self.save_file {
            Some(path) => Box::new(JsonFileStore::new(path.clone())),
            None => {
                log::info!("Save file disabled, history kept in memory");
                Box::new(MemoryStore::new())
            }
        }
    }
}
