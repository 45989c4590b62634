//! Read-only view of a session handed to presentation

use glam::Vec2;

use super::field::Field;
use super::state::{DriftEntity, ScreenState, SessionState};
use crate::assets::AssetHandle;
use crate::levels::Background;

/// Drawable entity: where, how big, which sprite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityView {
    pub pos: Vec2,
    pub size: Vec2,
    pub asset: AssetHandle,
}

impl From<&DriftEntity> for EntityView {
    fn from(d: &DriftEntity) -> Self {
        Self {
            pos: d.pos,
            size: d.size,
            asset: d.asset,
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub screen: ScreenState,
    pub score: i32,
    pub level_index: usize,
    pub level_count: usize,
    pub background: Background,
    pub field: Field,
    pub player: EntityView,
    pub obstacles: Vec<EntityView>,
    pub rewards: Vec<EntityView>,
}

impl FrameSnapshot {
    /// One-line HUD: score, rounded position, level and any overlay name
    pub fn hud_line(&self) -> String {
        let mut line = format!(
            "Score: {} | Position: ({}, {}) | Level {}/{}",
            self.score,
            self.player.pos.x as i32,
            self.player.pos.y as i32,
            self.level_index + 1,
            self.level_count
        );
        if self.screen != ScreenState::Playing {
            line.push_str(" | ");
            line.push_str(self.screen.as_str());
        }
        line
    }

    /// Key reminder for the active overlay, if any
    pub fn overlay_hint(&self) -> Option<&'static str> {
        match self.screen {
            ScreenState::Playing => None,
            ScreenState::Paused => Some("Esc: save and quit, Shift: resume"),
            ScreenState::HelpOverlay => Some("F1: close help, Esc: pause"),
            ScreenState::GameOver => Some("Esc: quit, G: continue from last save"),
            ScreenState::Menu => {
                Some("M: back to game, F1: help, Esc: pause, S: save, F: load last save")
            }
        }
    }
}

impl SessionState {
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            screen: self.screen,
            score: self.score,
            level_index: self.level_index,
            level_count: self.config.levels.len(),
            background: self.current_level().background,
            field: self.config.field,
            player: EntityView {
                pos: self.player.pos,
                size: self.player.size,
                asset: self.player.asset,
            },
            obstacles: self.obstacles().map(EntityView::from).collect(),
            rewards: self.rewards().map(EntityView::from).collect(),
        }
    }
}
