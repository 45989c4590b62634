//! Axis-aligned rectangles for the play field and entity bounds
//!
//! Screen-space convention: origin top-left, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The rectangular playable area inside the window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Field for a window with a HUD band split evenly above and below
    pub fn for_window(width: f32, height: f32, hud_band: f32) -> Self {
        let field_height = (height - hud_band).max(0.0);
        Self::new(0.0, (height - field_height) / 2.0, width, field_height)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Whether a box of `size` at `pos` lies fully inside the field
    pub fn contains_box(&self, pos: Vec2, size: Vec2) -> bool {
        pos.x >= self.left
            && pos.y >= self.top
            && pos.x + size.x <= self.right()
            && pos.y + size.y <= self.bottom()
    }
}

/// Bounding box anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub const fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }
}
