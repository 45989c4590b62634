//! Score and screen lifecycle
//!
//! Every transition is an explicit trigger on [`SessionState`]. Triggers that
//! are not valid in the current screen are ignored and return `false`.
//! Persistence failures are logged and never roll back the session.

use super::state::{ScreenState, SessionConfig, SessionState};
use crate::levels::next_level_index;
use crate::persistence::{SaveRecord, SaveStore};

impl SessionState {
    /// Create the session and seed it from the last saved record, if any
    ///
    /// A negative score carried over from a game-over save is reset to 0, so
    /// every run begins in `Playing` without writing anything.
    pub fn start(config: SessionConfig, seed: u64, store: &mut dyn SaveStore) -> Self {
        let mut state = Self::new(config, seed);
        if state.read_last(store) {
            if state.score < 0 {
                state.score = 0;
            }
            log::info!("Resumed from save: score {}", state.score);
        } else {
            log::info!("Starting fresh session");
        }
        state
    }

    /// Snapshot of the current position and score, stamped now
    pub fn save_record(&self) -> SaveRecord {
        SaveRecord::now(self.player.pos, self.score)
    }

    fn persist(&self, store: &mut dyn SaveStore, reason: &str) {
        match store.append(self.save_record()) {
            Ok(()) => log::info!("Saved ({}): score {}", reason, self.score),
            Err(e) => log::warn!("Save failed ({}), continuing: {}", reason, e),
        }
    }

    /// Show or hide the help overlay; closing returns to the prior screen
    ///
    /// Paused and GameOver only end through their own triggers, so help is
    /// not reachable from them.
    pub fn toggle_help(&mut self) -> bool {
        match self.screen {
            ScreenState::GameOver | ScreenState::Paused => false,
            ScreenState::HelpOverlay => {
                self.screen = self.help_return;
                true
            }
            other => {
                self.help_return = other;
                self.screen = ScreenState::HelpOverlay;
                true
            }
        }
    }

    /// Swap between the menu and active play
    pub fn toggle_menu(&mut self) -> bool {
        match self.screen {
            ScreenState::Menu => {
                self.screen = ScreenState::Playing;
                true
            }
            ScreenState::Playing => {
                self.screen = ScreenState::Menu;
                true
            }
            ScreenState::Paused | ScreenState::GameOver | ScreenState::HelpOverlay => false,
        }
    }

    /// Pause, or when already paused, save and request exit
    pub fn request_pause_or_exit(&mut self, store: &mut dyn SaveStore) {
        if self.screen == ScreenState::Paused {
            self.persist(store, "exit");
            self.exit_requested = true;
            log::info!("Exit confirmed");
        } else {
            self.pause_return = self.screen;
            self.screen = ScreenState::Paused;
        }
    }

    /// Leave the pause screen
    pub fn resume(&mut self) -> bool {
        if self.screen != ScreenState::Paused {
            return false;
        }
        self.screen = self.pause_return;
        true
    }

    /// Window closed: exit without writing a new record
    pub fn request_close(&mut self) {
        self.exit_requested = true;
    }

    /// Move to the next level and respawn everything for it
    pub fn advance_level(&mut self) -> bool {
        if self.screen != ScreenState::Playing {
            return false;
        }
        self.level_index = next_level_index(self.level_index, self.config.levels.len());
        self.populate_level();
        log::info!(
            "Level changed to {} ({})",
            self.level_index + 1,
            self.current_level().background.as_str()
        );
        true
    }

    /// Append a record for the current position and score
    pub fn save_now(&mut self, store: &mut dyn SaveStore) {
        self.persist(store, "manual");
    }

    /// Overwrite position and score from the most recent record
    ///
    /// Returns `false` and leaves the session untouched when there is no
    /// record or the store can't be read. Loading a negative score ends the
    /// game like any other drop below zero.
    pub fn load_last(&mut self, store: &mut dyn SaveStore) -> bool {
        let loaded = self.read_last(store);
        if loaded {
            self.check_game_over(store);
        }
        loaded
    }

    fn read_last(&mut self, store: &mut dyn SaveStore) -> bool {
        match store.last_record() {
            Ok(Some(record)) => {
                self.player.pos = record.position;
                self.score = record.score;
                log::info!(
                    "Loaded save from {}: score {} at ({:.0}, {:.0})",
                    record.date,
                    record.score,
                    record.position.x,
                    record.position.y
                );
                true
            }
            Ok(None) => {
                log::info!("No saved game to load");
                false
            }
            Err(e) => {
                log::warn!("Could not read saved games, keeping current state: {}", e);
                false
            }
        }
    }

    /// Continue after game over from the last save
    pub fn restart_from_game_over(&mut self, store: &mut dyn SaveStore) -> bool {
        if self.screen != ScreenState::GameOver {
            return false;
        }
        self.read_last(store);
        // The game-over record itself holds a negative score
        if self.score < 0 {
            self.score = 0;
        }
        self.populate_level();
        self.help_return = ScreenState::Playing;
        self.pause_return = ScreenState::Playing;
        self.screen = ScreenState::Playing;
        log::info!("Restarted on level {}", self.level_index + 1);
        true
    }

    /// Apply a score change and enforce the game-over threshold
    ///
    /// A decrease that leaves the score below zero ends the game, writes a
    /// record and freezes simulation until restart. Zero is still alive.
    pub fn apply_score_delta(&mut self, delta: i32, store: &mut dyn SaveStore) {
        if delta == 0 {
            return;
        }
        self.score += delta;
        if delta < 0 {
            self.check_game_over(store);
        }
    }

    fn check_game_over(&mut self, store: &mut dyn SaveStore) {
        if self.score < 0 && self.screen != ScreenState::GameOver {
            self.screen = ScreenState::GameOver;
            log::info!("Game over");
            self.persist(store, "game over");
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.screen == ScreenState::GameOver
    }
}
