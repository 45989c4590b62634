//! wgpu rendering module
//!
//! Draws [`FrameSnapshot`](crate::sim::FrameSnapshot)s as flat-colored quads.
//! HUD text goes to the window title.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderError, RenderState};
pub use shapes::scene_vertices;
pub use vertex::Vertex;

use crate::sim::FrameSnapshot;

/// Window title carrying the HUD line and any overlay hint
pub fn window_title(snapshot: &FrameSnapshot) -> String {
    match snapshot.overlay_hint() {
        Some(hint) => format!("Space Drift | {} | {}", snapshot.hud_line(), hint),
        None => format!("Space Drift | {}", snapshot.hud_line()),
    }
}
