//! Field boundary policy
//!
//! The player is clamped inside the field. Drifting entities that leave
//! past the left edge re-enter at the right edge on a fresh random row.

use glam::Vec2;
use rand::Rng;

use super::field::Field;
use crate::safe_range;

/// Clamp a box so it stays fully inside the field, each axis independently
///
/// When the box is larger than the field on an axis, it is pinned to the
/// field's leading edge on that axis.
pub fn clamp_to_field(pos: Vec2, size: Vec2, field: &Field) -> Vec2 {
    let (min_x, max_x) = safe_range(field.left, field.right() - size.x);
    let (min_y, max_y) = safe_range(field.top, field.bottom() - size.y);
    Vec2::new(pos.x.clamp(min_x, max_x), pos.y.clamp(min_y, max_y))
}

/// Recycle a drifting entity that has fully left through the left edge
///
/// Returns the position unchanged while any part of the box is still at or
/// right of `field.left`.
pub fn wrap_drift<R: Rng + ?Sized>(pos: Vec2, size: Vec2, field: &Field, rng: &mut R) -> Vec2 {
    if pos.x + size.x >= field.left {
        return pos;
    }
    Vec2::new(field.right(), random_row(size, field, rng))
}

/// Uniform y for a box of `size`, collapsing to `field.top` when it can't fit
pub fn random_row<R: Rng + ?Sized>(size: Vec2, field: &Field, rng: &mut R) -> f32 {
    let (lo, hi) = safe_range(field.top, field.bottom() - size.y);
    if hi > lo { rng.random_range(lo..=hi) } else { lo }
}

/// Uniform spawn point for a freshly initialized drifting entity
pub fn random_spawn<R: Rng + ?Sized>(size: Vec2, field: &Field, rng: &mut R) -> Vec2 {
    let x = if field.width > 0.0 {
        rng.random_range(field.left..field.right())
    } else {
        field.left
    };
    Vec2::new(x, random_row(size, field, rng))
}
