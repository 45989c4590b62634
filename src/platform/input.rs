//! Keyboard input
//!
//! Arrow keys are polled as held state. Every other bound key is an edge:
//! one press queues one [`InputEvent`], OS key repeat is ignored.

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::sim::{HeldDirections, InputEvent, TickInput};

/// Action bound to a key, if any
pub fn map_action(code: KeyCode) -> Option<InputEvent> {
    match code {
        KeyCode::KeyM => Some(InputEvent::ToggleMenu),
        KeyCode::KeyG => Some(InputEvent::Restart),
        KeyCode::Escape => Some(InputEvent::PauseOrExit),
        KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(InputEvent::Resume),
        KeyCode::F1 => Some(InputEvent::ToggleHelp),
        KeyCode::Enter | KeyCode::NumpadEnter => Some(InputEvent::AdvanceLevel),
        KeyCode::KeyF => Some(InputEvent::LoadLast),
        KeyCode::KeyS => Some(InputEvent::SaveNow),
        _ => None,
    }
}

/// Input accumulated between two frames
#[derive(Debug, Default)]
pub struct InputState {
    held: HeldDirections,
    pressed: Vec<InputEvent>,
    close_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(code) = event.physical_key {
            self.key(code, event.state == ElementState::Pressed, event.repeat);
        }
    }

    /// Record a key transition
    pub fn key(&mut self, code: KeyCode, pressed: bool, repeat: bool) {
        match code {
            KeyCode::ArrowUp => self.held.up = pressed,
            KeyCode::ArrowDown => self.held.down = pressed,
            KeyCode::ArrowLeft => self.held.left = pressed,
            KeyCode::ArrowRight => self.held.right = pressed,
            _ => {
                if pressed && !repeat {
                    if let Some(event) = map_action(code) {
                        self.pressed.push(event);
                    }
                }
            }
        }
    }

    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    /// Release all held directions (focus lost, releases never arrive)
    pub fn release_all(&mut self) {
        self.held = HeldDirections::default();
    }

    pub fn held(&self) -> HeldDirections {
        self.held
    }

    /// Drain queued presses into this frame's input; held keys persist
    pub fn take_frame(&mut self) -> TickInput {
        TickInput {
            held: self.held,
            pressed: std::mem::take(&mut self.pressed),
            close_requested: std::mem::take(&mut self.close_requested),
        }
    }
}
