//! Арена: границы мира, AABB helpers, spawn layout
//!
//! Координаты экранные: (0,0) — левый верхний угол, Y вниз.

use bevy::prelude::*;

pub mod spawn;


pub use spawn::{ProxySpawn, SpawnGroup, SpawnLayout, SpawnSide};

/// Прижать точку внутрь `bounds`, отступив `inset` от каждого края
///
/// Если `inset` больше половины размера — точка прижимается к нижней границе (без паники).
pub fn clamp_inside(point: Vec2, bounds: Rect, inset: f32) -> Vec2 {
    Vec2::new(
        (bounds.min.x + inset).max((bounds.max.x - inset).min(point.x)),
        (bounds.min.y + inset).max((bounds.max.y - inset).min(point.y)),
    )
}

/// Квадратный box с центром `center`
pub fn box_around(center: Vec2, half_size: f32) -> Rect {
    Rect::from_center_half_size(center, Vec2::splat(half_size))
}

/// Строгое пересечение AABB: касание краями не считается
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.min.x < b.max.x && b.min.x < a.max.x && a.min.y < b.max.y && b.min.y < a.max.y
}
