//! Session state and core entity types
//!
//! Exactly one `SessionState` exists per run. It owns the player and every
//! drifting entity; the level catalog is only referenced by index.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::boundary::random_spawn;
use super::field::{Aabb, Field};
use crate::assets::{AssetHandle, AssetRegistry};
use crate::levels::{LevelConfig, default_catalog};
use crate::settings::Settings;

/// Top-level mode; everything except `Playing` suspends simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScreenState {
    #[default]
    Playing,
    /// Waiting for resume or a confirmed exit
    Paused,
    HelpOverlay,
    /// Score dropped below zero; only a restart leaves this
    GameOver,
    Menu,
}

impl ScreenState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenState::Playing => "Playing",
            ScreenState::Paused => "Paused",
            ScreenState::HelpOverlay => "Help",
            ScreenState::GameOver => "Game Over",
            ScreenState::Menu => "Menu",
        }
    }

    pub fn simulates(&self) -> bool {
        *self == ScreenState::Playing
    }
}

/// The player's craft
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerEntity {
    /// Top-left corner
    pub pos: Vec2,
    pub speed: f32,
    pub size: Vec2,
    pub asset: AssetHandle,
}

impl PlayerEntity {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriftKind {
    /// Costs a point on contact, recycles at the left edge
    Obstacle,
    /// Grants a point on contact and is consumed
    Reward,
}

/// An obstacle or reward moving right-to-left across the field
#[derive(Debug, Clone, PartialEq)]
pub struct DriftEntity {
    pub id: u32,
    pub kind: DriftKind,
    /// Top-left corner
    pub pos: Vec2,
    pub speed: f32,
    pub size: Vec2,
    pub asset: AssetHandle,
}

impl DriftEntity {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Everything a session needs to know about its world
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub field: Field,
    pub player_speed: f32,
    pub player_size: Vec2,
    pub player_asset: AssetHandle,
    pub obstacle_size: Vec2,
    pub obstacle_asset: AssetHandle,
    pub reward_size: Vec2,
    pub reward_asset: AssetHandle,
    /// Seconds between two damage events, shared by all obstacles
    pub damage_cooldown: f32,
    pub rewards_per_level: usize,
    pub reward_speed_factor: f32,
    pub levels: Vec<LevelConfig>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(&Settings::default(), &AssetRegistry::builtin())
    }
}

impl SessionConfig {
    pub fn new(settings: &Settings, assets: &AssetRegistry) -> Self {
        Self {
            field: settings.field(),
            player_speed: settings.player_speed,
            player_size: assets.size_of(assets.player()),
            player_asset: assets.player(),
            obstacle_size: assets.size_of(assets.obstacle()),
            obstacle_asset: assets.obstacle(),
            reward_size: assets.size_of(assets.reward()),
            reward_asset: assets.reward(),
            damage_cooldown: settings.damage_cooldown_ms as f32 / 1000.0,
            rewards_per_level: settings.rewards_per_level,
            reward_speed_factor: settings.reward_speed_factor,
            levels: settings.level_catalog(),
        }
    }

    /// Player position centered in the field
    pub fn player_start(&self) -> Vec2 {
        self.field.center() - self.player_size / 2.0
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct SessionState {
    pub config: SessionConfig,
    pub score: i32,
    /// Index into `config.levels`
    pub level_index: usize,
    pub player: PlayerEntity,
    /// Obstacles and rewards, in spawn order
    pub drifts: Vec<DriftEntity>,
    pub screen: ScreenState,
    pub exit_requested: bool,
    /// Seconds since the last obstacle damage, capped at the cooldown
    pub since_damage: f32,
    /// Screen to return to when the help overlay closes
    pub(crate) help_return: ScreenState,
    /// Screen to return to on resume
    pub(crate) pause_return: ScreenState,
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl SessionState {
    /// Fresh session: score 0, player centered, first level populated
    pub fn new(mut config: SessionConfig, seed: u64) -> Self {
        if config.levels.is_empty() {
            log::warn!("Empty level catalog, using built-in levels");
            config.levels = default_catalog();
        }

        let player = PlayerEntity {
            pos: config.player_start(),
            speed: config.player_speed,
            size: config.player_size,
            asset: config.player_asset,
        };
        let since_damage = config.damage_cooldown;

        let mut state = Self {
            config,
            score: 0,
            level_index: 0,
            player,
            drifts: Vec::new(),
            screen: ScreenState::Playing,
            exit_requested: false,
            since_damage,
            help_return: ScreenState::Playing,
            pause_return: ScreenState::Playing,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        };
        state.populate_level();
        state
    }

    pub fn current_level(&self) -> &LevelConfig {
        &self.config.levels[self.level_index % self.config.levels.len()]
    }

    pub fn obstacles(&self) -> impl Iterator<Item = &DriftEntity> {
        self.drifts.iter().filter(|d| d.kind == DriftKind::Obstacle)
    }

    pub fn rewards(&self) -> impl Iterator<Item = &DriftEntity> {
        self.drifts.iter().filter(|d| d.kind == DriftKind::Reward)
    }

    /// Allocate a new entity ID
    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Clear both collections and respawn them for the current level
    pub fn populate_level(&mut self) {
        let level = *self.current_level();
        self.drifts.clear();

        let field = self.config.field;
        for _ in 0..level.obstacle_count {
            let size = self.config.obstacle_size;
            let pos = random_spawn(size, &field, &mut self.rng);
            let id = self.next_entity_id();
            self.drifts.push(DriftEntity {
                id,
                kind: DriftKind::Obstacle,
                pos,
                speed: level.obstacle_speed,
                size,
                asset: self.config.obstacle_asset,
            });
        }

        let reward_speed = level.obstacle_speed * self.config.reward_speed_factor;
        for _ in 0..self.config.rewards_per_level {
            let size = self.config.reward_size;
            let pos = random_spawn(size, &field, &mut self.rng);
            let id = self.next_entity_id();
            self.drifts.push(DriftEntity {
                id,
                kind: DriftKind::Reward,
                pos,
                speed: reward_speed,
                size,
                asset: self.config.reward_asset,
            });
        }

        log::debug!(
            "Level {} populated: {} obstacles at {}, {} rewards at {}",
            self.level_index + 1,
            level.obstacle_count,
            level.obstacle_speed,
            self.config.rewards_per_level,
            reward_speed
        );
    }
}
