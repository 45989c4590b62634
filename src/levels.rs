//! Level catalog
//!
//! Levels are immutable configurations selected by index. Advancing past the
//! last level wraps back to the first.

use serde::{Deserialize, Serialize};

/// Background identity for a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Background {
    #[default]
    Black,
    Cyan,
    Magenta,
}

impl Background {
    pub fn as_str(&self) -> &'static str {
        match self {
            Background::Black => "Black",
            Background::Cyan => "Cyan",
            Background::Magenta => "Magenta",
        }
    }

    /// Linear RGBA clear color
    pub fn color(&self) -> [f32; 4] {
        match self {
            Background::Black => [0.0, 0.0, 0.0, 1.0],
            Background::Cyan => [0.0, 0.45, 0.45, 1.0],
            Background::Magenta => [0.45, 0.0, 0.45, 1.0],
        }
    }
}

/// One difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub background: Background,
    /// Obstacle drift speed (pixels/s); rewards drift at a fraction of this
    pub obstacle_speed: f32,
    pub obstacle_count: usize,
}

impl LevelConfig {
    pub const fn new(background: Background, obstacle_speed: f32, obstacle_count: usize) -> Self {
        Self {
            background,
            obstacle_speed,
            obstacle_count,
        }
    }
}

/// Built-in levels: slow and sparse up to fast and crowded
pub const DEFAULT_LEVELS: [LevelConfig; 3] = [
    LevelConfig::new(Background::Black, 100.0, 5),
    LevelConfig::new(Background::Cyan, 150.0, 8),
    LevelConfig::new(Background::Magenta, 215.0, 10),
];

pub fn default_catalog() -> Vec<LevelConfig> {
    DEFAULT_LEVELS.to_vec()
}

/// Index of the level after `current`, wrapping around the catalog
#[inline]
pub fn next_level_index(current: usize, catalog_len: usize) -> usize {
    if catalog_len == 0 {
        0
    } else {
        (current + 1) % catalog_len
    }
}
