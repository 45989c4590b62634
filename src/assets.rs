//! Sprite asset registry
//!
//! Built once at startup and handed to whoever needs sprite data. Entities
//! only carry an [`AssetHandle`]; their bounding size is read from the
//! registry when they are created.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{OBSTACLE_SIZE, PLAYER_SIZE, REWARD_SIZE};

/// Index of a sprite inside an [`AssetRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetHandle(pub u16);

/// Flat-colored sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteAsset {
    /// Bounding size in pixels
    pub size: Vec2,
    /// Linear RGBA
    pub color: [f32; 4],
}

/// Startup asset failures. All of these abort initialization.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read asset manifest {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed asset manifest {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("sprite '{name}' has a non-positive size {width}x{height}")]
    InvalidSize {
        name: &'static str,
        width: f32,
        height: f32,
    },
}

/// On-disk manifest: one sprite per role, all required
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AssetManifest {
    player: SpriteAsset,
    obstacle: SpriteAsset,
    reward: SpriteAsset,
}

#[derive(Debug, Clone)]
pub struct AssetRegistry {
    sprites: Vec<SpriteAsset>,
    player: AssetHandle,
    obstacle: AssetHandle,
    reward: AssetHandle,
}

impl Default for AssetRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AssetRegistry {
    /// Built-in sprite set: green craft, grey planets, gold comets
    pub fn builtin() -> Self {
        Self::from_manifest(AssetManifest {
            player: SpriteAsset {
                size: Vec2::from_array(PLAYER_SIZE),
                color: [0.2, 0.8, 0.4, 1.0],
            },
            obstacle: SpriteAsset {
                size: Vec2::from_array(OBSTACLE_SIZE),
                color: [0.55, 0.5, 0.6, 1.0],
            },
            reward: SpriteAsset {
                size: Vec2::from_array(REWARD_SIZE),
                color: [1.0, 0.85, 0.2, 1.0],
            },
        })
    }

    /// Load the sprite set from a JSON manifest
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let display = path.display().to_string();
        let json = fs::read_to_string(path).map_err(|source| AssetError::Io {
            path: display.clone(),
            source,
        })?;
        let manifest: AssetManifest =
            serde_json::from_str(&json).map_err(|source| AssetError::Malformed {
                path: display.clone(),
                source,
            })?;

        for (name, sprite) in [
            ("player", &manifest.player),
            ("obstacle", &manifest.obstacle),
            ("reward", &manifest.reward),
        ] {
            if sprite.size.x <= 0.0 || sprite.size.y <= 0.0 {
                return Err(AssetError::InvalidSize {
                    name,
                    width: sprite.size.x,
                    height: sprite.size.y,
                });
            }
        }

        log::info!("Loaded asset manifest from {}", display);
        Ok(Self::from_manifest(manifest))
    }

    fn from_manifest(manifest: AssetManifest) -> Self {
        Self {
            sprites: vec![manifest.player, manifest.obstacle, manifest.reward],
            player: AssetHandle(0),
            obstacle: AssetHandle(1),
            reward: AssetHandle(2),
        }
    }

    pub fn player(&self) -> AssetHandle {
        self.player
    }

    pub fn obstacle(&self) -> AssetHandle {
        self.obstacle
    }

    pub fn reward(&self) -> AssetHandle {
        self.reward
    }

    pub fn get(&self, handle: AssetHandle) -> Option<&SpriteAsset> {
        self.sprites.get(handle.0 as usize)
    }

    /// Bounding size for a handle; zero for an unknown handle
    pub fn size_of(&self, handle: AssetHandle) -> Vec2 {
        self.get(handle).map(|s| s.size).unwrap_or(Vec2::ZERO)
    }
}
