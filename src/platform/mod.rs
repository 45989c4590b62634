//! Platform layer
//!
//! Turns winit keyboard events into per-frame [`TickInput`](crate::sim::TickInput)
//! and measures wall-clock frame time.

pub mod input;
pub mod time;

pub use input::{InputState, map_action};
pub use time::FrameClock;
