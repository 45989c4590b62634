//! Geometry for a frame snapshot
//!
//! Everything is an axis-aligned quad in game pixels. Draw order: HUD bands,
//! field background, rewards, obstacles, player, overlay tint.

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::assets::{AssetHandle, AssetRegistry};
use crate::sim::{EntityView, FrameSnapshot, ScreenState};

/// Two triangles covering `[pos, pos + size]`
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);
    [
        Vertex::new(x0, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y1, color),
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y1, color),
        Vertex::new(x1, y0, color),
    ]
}

fn sprite_color(assets: &AssetRegistry, handle: AssetHandle) -> [f32; 4] {
    assets
        .get(handle)
        .map(|s| s.color)
        .unwrap_or(colors::MISSING)
}

fn push_entity(out: &mut Vec<Vertex>, entity: &EntityView, assets: &AssetRegistry) {
    out.extend(rect(entity.pos, entity.size, sprite_color(assets, entity.asset)));
}

/// Tint drawn over the field for each non-playing screen
pub fn overlay_color(screen: ScreenState) -> Option<[f32; 4]> {
    match screen {
        ScreenState::Playing => None,
        ScreenState::Paused => Some(colors::PAUSED),
        ScreenState::HelpOverlay => Some(colors::HELP),
        ScreenState::GameOver => Some(colors::GAME_OVER),
        ScreenState::Menu => Some(colors::MENU),
    }
}

/// Build all triangles for one frame in a window of `view` pixels
pub fn scene_vertices(snapshot: &FrameSnapshot, assets: &AssetRegistry, view: Vec2) -> Vec<Vertex> {
    let entities = 1 + snapshot.obstacles.len() + snapshot.rewards.len();
    let mut out = Vec::with_capacity((entities + 4) * 6);

    let field = snapshot.field;
    let field_pos = Vec2::new(field.left, field.top);
    let field_size = Vec2::new(field.width, field.height);

    // HUD bands above and below the field
    out.extend(rect(Vec2::ZERO, Vec2::new(view.x, field.top), colors::HUD_BAND));
    out.extend(rect(
        Vec2::new(0.0, field.bottom()),
        Vec2::new(view.x, (view.y - field.bottom()).max(0.0)),
        colors::HUD_BAND,
    ));
    out.extend(rect(field_pos, field_size, snapshot.background.color()));

    for reward in &snapshot.rewards {
        push_entity(&mut out, reward, assets);
    }
    for obstacle in &snapshot.obstacles {
        push_entity(&mut out, obstacle, assets);
    }
    push_entity(&mut out, &snapshot.player, assets);

    if let Some(tint) = overlay_color(snapshot.screen) {
        out.extend(rect(field_pos, field_size, tint));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{SessionConfig, SessionState};

    #[test]
    fn test_rect_corners() {
        let verts = rect(Vec2::new(10.0, 20.0), Vec2::new(5.0, 8.0), [1.0; 4]);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 15.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 28.0);
    }

    #[test]
    fn test_scene_quad_count() {
        let assets = AssetRegistry::builtin();
        let mut state = SessionState::new(SessionConfig::default(), 11);
        let view = Vec2::new(1200.0, 750.0);

        // 2 bands + field + 5 obstacles + 3 rewards + player
        let playing = scene_vertices(&state.snapshot(), &assets, view);
        assert_eq!(playing.len(), 12 * 6);

        state.screen = ScreenState::Paused;
        let paused = scene_vertices(&state.snapshot(), &assets, view);
        assert_eq!(paused.len(), 13 * 6);
        assert_eq!(paused.last().map(|v| v.color), Some(colors::PAUSED));
    }

    #[test]
    fn test_player_drawn_with_sprite_color() {
        let assets = AssetRegistry::builtin();
        let state = SessionState::new(SessionConfig::default(), 11);
        let verts = scene_vertices(&state.snapshot(), &assets, Vec2::new(1200.0, 750.0));
        let player_color = assets.get(assets.player()).map(|s| s.color);
        assert_eq!(verts.last().map(|v| v.color), player_color);
    }
}
