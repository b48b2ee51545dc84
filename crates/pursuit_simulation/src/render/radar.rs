//! Радар в левом верхнем углу: все hunters (dormant и active) как точки

use bevy::prelude::*;

use super::{Rgb, ShapeRenderer, Stroke};

pub const RADAR_PLAYER_COLOR: Rgb = Rgb(120, 210, 255);
pub const RADAR_HUNTER_COLOR: Rgb = Rgb(255, 120, 100);

/// Отступ blip от рамки (px)
const INNER_PAD: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Radar {
    pub frame: Rect,
}

impl Default for Radar {
    fn default() -> Self {
        Self {
            frame: Rect::new(8.0, 8.0, 128.0, 88.0),
        }
    }
}

impl Radar {
    /// World → radar координаты. Точки за краем арены уходят за рамку, как и в мире.
    pub fn map(&self, position: Vec2, world_size: Vec2) -> Vec2 {
        let inner = self.frame.size() - Vec2::splat(INNER_PAD * 2.0);
        let unit = position / world_size.max(Vec2::ONE);
        self.frame.min + unit * inner + Vec2::splat(INNER_PAD)
    }

    pub fn draw(
        &self,
        renderer: &mut impl ShapeRenderer,
        world_size: Vec2,
        player: Vec2,
        hunters: impl Iterator<Item = Vec2>,
    ) {
        renderer.rect(self.frame, Rgb::BLACK, Stroke::Outline(1.0));
        renderer.circle(self.map(player, world_size), 3.0, RADAR_PLAYER_COLOR, Stroke::Fill);
        for hunter in hunters {
            renderer.circle(self.map(hunter, world_size), 2.0, RADAR_HUNTER_COLOR, Stroke::Fill);
        }
    }
}
