//! Per-frame position updates for the player and drifting entities

use glam::Vec2;

/// Directional keys currently held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldDirections {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldDirections {
    /// Unnormalized direction; diagonals keep full speed on both axes
    pub fn axis(&self) -> Vec2 {
        let x = (self.right as i8 - self.left as i8) as f32;
        let y = (self.down as i8 - self.up as i8) as f32;
        Vec2::new(x, y)
    }

    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Move the player along every held axis by `speed * dt`
pub fn advance_player(pos: Vec2, held: HeldDirections, speed: f32, dt: f32) -> Vec2 {
    if dt <= 0.0 {
        return pos;
    }
    pos + held.axis() * speed * dt
}

/// Drift an obstacle or reward leftward by `speed * dt`
pub fn advance_drift(pos: Vec2, speed: f32, dt: f32) -> Vec2 {
    if dt <= 0.0 {
        return pos;
    }
    Vec2::new(pos.x - speed * dt, pos.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_player_single_axis() {
        let held = HeldDirections {
            right: true,
            ..Default::default()
        };
        let pos = advance_player(Vec2::new(100.0, 100.0), held, 200.0, 0.5);
        assert_eq!(pos, Vec2::new(200.0, 100.0));
    }

    #[test]
    fn test_advance_player_diagonal_not_normalized() {
        let held = HeldDirections {
            up: true,
            left: true,
            ..Default::default()
        };
        let pos = advance_player(Vec2::new(100.0, 100.0), held, 200.0, 0.1);
        assert!((pos.x - 80.0).abs() < 1e-4);
        assert!((pos.y - 80.0).abs() < 1e-4);
    }

    #[test]
    fn test_opposite_directions_cancel() {
        let held = HeldDirections {
            up: true,
            down: true,
            left: true,
            right: true,
        };
        let pos = advance_player(Vec2::new(10.0, 10.0), held, 200.0, 1.0);
        assert_eq!(pos, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let held = HeldDirections {
            down: true,
            ..Default::default()
        };
        assert_eq!(advance_player(Vec2::ONE, held, 200.0, 0.0), Vec2::ONE);
        assert_eq!(advance_drift(Vec2::ONE, 150.0, 0.0), Vec2::ONE);
    }

    #[test]
    fn test_advance_drift_keeps_y() {
        let pos = advance_drift(Vec2::new(500.0, 120.0), 100.0, 0.25);
        assert_eq!(pos, Vec2::new(475.0, 120.0));
    }
}
