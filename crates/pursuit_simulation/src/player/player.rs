//! Player controller: ускорение от ввода, трение, ограничение скорости
//!
//! Трение применяется как множитель за тик (не за секунду), как в исходном балансе.

use bevy::prelude::*;

use crate::arena::{box_around, clamp_inside};
use crate::config::PlayerConfig;
use crate::player::input::{direction_vector, InputSource};
use crate::steering::clamp_length;

/// Диск игрока
///
/// Инвариант: |velocity| <= max_speed, позиция внутри арены с отступом radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerBody {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub max_speed: f32,
    pub acceleration: f32,
    pub friction: f32,
}

impl PlayerBody {
    pub fn new(position: Vec2, config: &PlayerConfig) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            radius: config.radius,
            max_speed: config.max_speed,
            acceleration: config.acceleration,
            friction: config.friction,
        }
    }

    /// Один тик управления
    pub fn update_controls(&mut self, input: &impl InputSource, dt: f32, bounds: Rect) {
        let acc = direction_vector(input).normalize_or_zero() * self.acceleration * dt;

        self.velocity += acc;
        self.velocity *= self.friction;
        self.velocity = clamp_length(self.velocity, self.max_speed);

        self.position += self.velocity * dt;
        self.position = clamp_inside(self.position, bounds, self.radius);
    }

    pub fn bounding_box(&self) -> Rect {
        box_around(self.position, self.radius)
    }
}
