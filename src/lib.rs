//! Space Drift - a side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Frame simulation (kinematics, collisions, session lifecycle)
//! - `levels`: Fixed level catalog
//! - `assets`: Sprite registry injected at startup
//! - `persistence`: Append-only save history on disk
//! - `settings`: Runtime configuration
//! - `platform`: Keyboard mapping and frame clock
//! - `renderer`: wgpu presentation of frame snapshots

pub mod assets;
pub mod levels;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use assets::{AssetHandle, AssetRegistry};
pub use levels::{Background, LevelConfig};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default window dimensions (pixels)
    pub const WINDOW_WIDTH: u32 = 1200;
    pub const WINDOW_HEIGHT: u32 = 750;
    /// Vertical space reserved for HUD text, split above and below the field
    pub const HUD_BAND: f32 = 100.0;

    /// Longest frame fed to the simulation (seconds); stalls beyond this are dropped
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Player craft speed (pixels/s along each held axis)
    pub const PLAYER_SPEED: f32 = 200.0;

    /// Shared obstacle damage cooldown (seconds)
    pub const DAMAGE_COOLDOWN: f32 = 0.5;

    /// Rewards spawned on every level (re)initialization
    pub const REWARDS_PER_LEVEL: usize = 3;
    /// Reward speed relative to the level's obstacle speed
    pub const REWARD_SPEED_FACTOR: f32 = 0.5;

    /// Default sprite bounding sizes
    pub const PLAYER_SIZE: [f32; 2] = [50.0, 50.0];
    pub const OBSTACLE_SIZE: [f32; 2] = [60.0, 60.0];
    pub const REWARD_SIZE: [f32; 2] = [30.0, 30.0];

    /// Default save history file
    pub const SAVE_FILE: &str = "sscore.json";
    /// Default settings file
    pub const SETTINGS_FILE: &str = "spacedrift.json";
    /// Environment variable overriding the settings file path
    pub const SETTINGS_ENV: &str = "SPACE_DRIFT_CONFIG";
}

/// Lower bound of a uniform range, collapsed when the range is empty
///
/// Returns `(lo, hi)` with `hi >= lo` so callers can sample without
/// tripping over a zero or negative span.
#[inline]
pub fn safe_range(lo: f32, hi: f32) -> (f32, f32) {
    if hi > lo { (lo, hi) } else { (lo, lo) }
}
