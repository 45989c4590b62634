//! Frame scheduler
//!
//! One call per rendered frame:
//! 1. advance the damage cooldown clock by the frame's wall-clock `dt`
//! 2. dispatch this frame's key presses as lifecycle triggers
//! 3. on exit request, flush persistence and stop
//! 4. while playing, move everything and resolve collisions

use super::boundary::{clamp_to_field, wrap_drift};
use super::collision::{consume_rewards, obstacle_damage};
use super::kinematics::{HeldDirections, advance_drift, advance_player};
use super::state::SessionState;
use crate::persistence::SaveStore;

/// Discrete key presses, at most one trigger each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    ToggleMenu,
    Restart,
    PauseOrExit,
    Resume,
    ToggleHelp,
    AdvanceLevel,
    LoadLast,
    SaveNow,
}

/// Input sampled at the start of a frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Continuously polled direction keys
    pub held: HeldDirections,
    /// Presses since the previous frame, in arrival order
    pub pressed: Vec<InputEvent>,
    /// Window close button
    pub close_requested: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    /// Exit was requested and the final flush has run
    Exit,
}

/// Route one key press to its trigger
pub fn dispatch(state: &mut SessionState, event: InputEvent, store: &mut dyn SaveStore) {
    match event {
        InputEvent::ToggleMenu => {
            state.toggle_menu();
        }
        InputEvent::Restart => {
            state.restart_from_game_over(store);
        }
        InputEvent::PauseOrExit => state.request_pause_or_exit(store),
        InputEvent::Resume => {
            state.resume();
        }
        InputEvent::ToggleHelp => {
            state.toggle_help();
        }
        InputEvent::AdvanceLevel => {
            state.advance_level();
        }
        InputEvent::LoadLast => {
            state.load_last(store);
        }
        InputEvent::SaveNow => state.save_now(store),
    }
}

/// Advance the session by one frame of `dt` seconds
pub fn tick(
    state: &mut SessionState,
    input: &TickInput,
    dt: f32,
    store: &mut dyn SaveStore,
) -> TickOutcome {
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    state.since_damage = (state.since_damage + dt).min(state.config.damage_cooldown);

    for &event in &input.pressed {
        if state.exit_requested {
            break;
        }
        dispatch(state, event, store);
    }
    if input.close_requested {
        state.request_close();
    }

    if state.exit_requested {
        if let Err(e) = store.flush() {
            log::warn!("Final save flush failed: {}", e);
        }
        return TickOutcome::Exit;
    }

    if state.screen.simulates() {
        step(state, input.held, dt, store);
    }
    TickOutcome::Running
}

/// Kinematics, boundary policy and both contact rules
fn step(state: &mut SessionState, held: HeldDirections, dt: f32, store: &mut dyn SaveStore) {
    let field = state.config.field;

    let player = &mut state.player;
    let moved = advance_player(player.pos, held, player.speed, dt);
    player.pos = clamp_to_field(moved, player.size, &field);

    for drift in &mut state.drifts {
        let moved = advance_drift(drift.pos, drift.speed, dt);
        drift.pos = wrap_drift(moved, drift.size, &field, &mut state.rng);
    }

    let player_box = state.player.bounds();
    let damage = obstacle_damage(
        &player_box,
        &state.drifts,
        &mut state.since_damage,
        state.config.damage_cooldown,
    );
    state.apply_score_delta(damage, store);
    if state.is_game_over() {
        return;
    }

    let gained = consume_rewards(&player_box, &mut state.drifts);
    state.apply_score_delta(gained, store);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{MemoryStore, SaveRecord};
    use crate::sim::state::{DriftEntity, DriftKind, ScreenState, SessionConfig};
    use glam::Vec2;

    fn session() -> SessionState {
        SessionState::new(SessionConfig::default(), 2024)
    }

    /// Entity parked on top of the player
    fn on_player(state: &SessionState, id: u32, kind: DriftKind) -> DriftEntity {
        DriftEntity {
            id,
            kind,
            pos: state.player.pos + Vec2::splat(5.0),
            speed: 0.0,
            size: Vec2::splat(20.0),
            asset: state.config.obstacle_asset,
        }
    }

    fn pressed(events: &[InputEvent]) -> TickInput {
        TickInput {
            pressed: events.to_vec(),
            ..Default::default()
        }
    }

    #[test]
    fn test_drifts_move_left_while_playing() {
        let mut state = session();
        let mut store = MemoryStore::new();
        state.player.pos = Vec2::new(0.0, 50.0);
        let before: Vec<Vec2> = state.drifts.iter().map(|d| d.pos).collect();

        let outcome = tick(&mut state, &TickInput::default(), 0.01, &mut store);
        assert_eq!(outcome, TickOutcome::Running);

        for (drift, old) in state.drifts.iter().zip(before) {
            if drift.pos.x < old.x {
                assert!((old.x - drift.pos.x - drift.speed * 0.01).abs() < 1e-3);
                assert_eq!(drift.pos.y, old.y);
            }
        }
    }

    #[test]
    fn test_held_direction_moves_and_clamps_player() {
        let mut state = session();
        state.drifts.clear();
        let mut store = MemoryStore::new();
        let input = TickInput {
            held: HeldDirections {
                right: true,
                ..Default::default()
            },
            ..Default::default()
        };

        tick(&mut state, &input, 0.5, &mut store);
        assert_eq!(state.player.pos, Vec2::new(675.0, 350.0));

        tick(&mut state, &input, 10.0, &mut store);
        assert_eq!(state.player.pos.x, 1150.0);
    }

    #[test]
    fn test_overlays_freeze_simulation() {
        for event in [InputEvent::PauseOrExit, InputEvent::ToggleHelp, InputEvent::ToggleMenu] {
            let mut state = session();
            let mut store = MemoryStore::new();
            tick(&mut state, &pressed(&[event]), 0.0, &mut store);
            assert!(!state.screen.simulates());

            let before = state.drifts.clone();
            tick(&mut state, &TickInput::default(), 0.5, &mut store);
            assert_eq!(state.drifts, before);
        }
    }

    #[test]
    fn test_simultaneous_obstacles_cost_one_point() {
        let mut state = session();
        let mut store = MemoryStore::new();
        state.score = 5;
        state.drifts = (1..=4).map(|i| on_player(&state, i, DriftKind::Obstacle)).collect();

        tick(&mut state, &TickInput::default(), 0.0, &mut store);
        assert_eq!(state.score, 4);

        // Within the cooldown window contact is free
        for _ in 0..3 {
            tick(&mut state, &TickInput::default(), 0.125, &mut store);
        }
        assert_eq!(state.score, 4);

        tick(&mut state, &TickInput::default(), 0.125, &mut store);
        assert_eq!(state.score, 3);
    }

    #[test]
    fn test_cooldown_runs_while_paused() {
        let mut state = session();
        let mut store = MemoryStore::new();
        state.score = 5;
        state.drifts = vec![on_player(&state, 1, DriftKind::Obstacle)];

        tick(&mut state, &TickInput::default(), 0.0, &mut store);
        assert_eq!(state.score, 4);

        tick(&mut state, &pressed(&[InputEvent::PauseOrExit]), 0.5, &mut store);
        tick(&mut state, &pressed(&[InputEvent::Resume]), 0.0, &mut store);
        assert_eq!(state.score, 3);
    }

    #[test]
    fn test_reward_consumed_exactly_once() {
        let mut state = session();
        let mut store = MemoryStore::new();
        state.drifts = vec![on_player(&state, 1, DriftKind::Reward)];

        tick(&mut state, &TickInput::default(), 0.0, &mut store);
        assert_eq!(state.score, 1);
        assert_eq!(state.rewards().count(), 0);

        tick(&mut state, &TickInput::default(), 0.0, &mut store);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_game_over_once_and_freezes() {
        let mut state = session();
        let mut store = MemoryStore::new();
        state.drifts = vec![
            on_player(&state, 1, DriftKind::Obstacle),
            on_player(&state, 2, DriftKind::Obstacle),
            on_player(&state, 3, DriftKind::Reward),
        ];

        tick(&mut state, &TickInput::default(), 0.0, &mut store);
        assert_eq!(state.screen, ScreenState::GameOver);
        assert_eq!(state.score, -1);
        // Reward rule skipped on the game-over frame
        assert_eq!(state.rewards().count(), 1);
        assert_eq!(store.records().len(), 1);

        let frozen = state.drifts.clone();
        tick(&mut state, &TickInput::default(), 1.0, &mut store);
        assert_eq!(state.drifts, frozen);
        assert_eq!(state.score, -1);
        assert_eq!(store.records().len(), 1);
    }

    #[test]
    fn test_game_over_survives_overlay_keys() {
        let mut state = session();
        let mut store = MemoryStore::new();
        state.screen = ScreenState::GameOver;
        state.score = -1;
        state.drifts = vec![on_player(&state, 1, DriftKind::Obstacle)];

        let keys = [
            InputEvent::PauseOrExit,
            InputEvent::ToggleHelp,
            InputEvent::ToggleMenu,
            InputEvent::ToggleMenu,
            InputEvent::Resume,
        ];
        tick(&mut state, &pressed(&keys), 1.0, &mut store);
        assert_eq!(state.screen, ScreenState::GameOver);

        tick(&mut state, &TickInput::default(), 1.0, &mut store);
        assert_eq!(state.score, -1);
        assert!(store.records().is_empty());
    }

    #[test]
    fn test_restart_key_after_game_over() {
        let mut state = session();
        let mut store = MemoryStore::with_history(vec![SaveRecord::new(
            Vec2::new(100.0, 100.0),
            6,
            "2024-01-01 00:00:00",
        )]);
        state.screen = ScreenState::GameOver;

        tick(&mut state, &pressed(&[InputEvent::Restart]), 0.0, &mut store);
        assert_eq!(state.screen, ScreenState::Playing);
        assert_eq!(state.score, 6);
    }

    #[test]
    fn test_confirmed_exit_stops_loop() {
        let mut state = session();
        let mut store = MemoryStore::new();
        let outcome = tick(
            &mut state,
            &pressed(&[InputEvent::PauseOrExit, InputEvent::PauseOrExit, InputEvent::SaveNow]),
            0.0,
            &mut store,
        );
        assert_eq!(outcome, TickOutcome::Exit);
        // Presses after the confirmed exit are dropped
        assert_eq!(store.records().len(), 1);
    }

    #[test]
    fn test_close_requested_exits_without_saving() {
        let mut state = session();
        let mut store = MemoryStore::new();
        let input = TickInput {
            close_requested: true,
            ..Default::default()
        };
        assert_eq!(tick(&mut state, &input, 0.0, &mut store), TickOutcome::Exit);
        assert!(store.records().is_empty());
    }

    #[test]
    fn test_level_scenario() {
        let mut state = session();
        let mut store = MemoryStore::new();
        tick(&mut state, &pressed(&[InputEvent::AdvanceLevel]), 0.0, &mut store);
        assert_eq!(state.level_index, 1);
        state.drifts.retain(|d| d.kind == DriftKind::Obstacle);

        tick(&mut state, &pressed(&[InputEvent::AdvanceLevel]), 0.0, &mut store);
        assert_eq!(state.level_index, 2);
        assert_eq!(state.obstacles().count(), 10);
        assert!(state.obstacles().all(|o| o.speed == 215.0));
        assert_eq!(state.rewards().count(), 3);
        assert!(state.rewards().all(|r| r.speed == 215.0 / 2.0));
    }

    #[test]
    fn test_negative_dt_treated_as_zero() {
        let mut state = session();
        let mut store = MemoryStore::new();
        let before = state.drifts.clone();
        tick(&mut state, &TickInput::default(), -1.0, &mut store);
        tick(&mut state, &TickInput::default(), f32::NAN, &mut store);
        assert_eq!(state.drifts, before);
    }
}
