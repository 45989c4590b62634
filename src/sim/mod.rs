//! Frame simulation module
//!
//! All gameplay logic lives here. This module must stay free of platform
//! concerns:
//! - Variable `dt` supplied by the caller, never read from a clock
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or windowing dependencies

pub mod boundary;
pub mod collision;
pub mod field;
pub mod kinematics;
pub mod lifecycle;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use boundary::{clamp_to_field, random_spawn, wrap_drift};
pub use collision::{consume_rewards, obstacle_damage, overlaps};
pub use field::{Aabb, Field};
pub use kinematics::{HeldDirections, advance_drift, advance_player};
pub use snapshot::{EntityView, FrameSnapshot};
pub use state::{DriftEntity, DriftKind, PlayerEntity, ScreenState, SessionConfig, SessionState};
pub use tick::{InputEvent, TickInput, TickOutcome, dispatch, tick};
