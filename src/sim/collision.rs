//! Collision detection between the player and drifting entities
//!
//! Plain axis-aligned box overlap plus the two contact rules:
//! - obstacles cost one point, gated by a single session-wide cooldown
//! - rewards grant one point each and are removed on contact

use super::field::Aabb;
use super::state::{DriftEntity, DriftKind};

/// Closed AABB intersection; boxes sharing an edge overlap
#[inline]
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    let (a_max, b_max) = (a.max(), b.max());
    a.min.x <= b_max.x && b.min.x <= a_max.x && a.min.y <= b_max.y && b.min.y <= a_max.y
}

/// Obstacle damage rule
///
/// Returns the score delta: `-1` when the player touches any obstacle and
/// the cooldown has fully elapsed, `0` otherwise. Applying damage resets
/// `since_damage`, so any number of simultaneous contacts costs one point.
pub fn obstacle_damage(
    player: &Aabb,
    drifts: &[DriftEntity],
    since_damage: &mut f32,
    cooldown: f32,
) -> i32 {
    if *since_damage < cooldown {
        return 0;
    }
    let hit = drifts
        .iter()
        .filter(|d| d.kind == DriftKind::Obstacle)
        .any(|d| overlaps(player, &d.bounds()));
    if hit {
        *since_damage = 0.0;
        -1
    } else {
        0
    }
}

/// Reward consumption rule
///
/// Removes every reward touching the player and returns how many were taken.
pub fn consume_rewards(player: &Aabb, drifts: &mut Vec<DriftEntity>) -> i32 {
    let before = drifts.len();
    drifts.retain(|d| d.kind != DriftKind::Reward || !overlaps(player, &d.bounds()));
    (before - drifts.len()) as i32
}
