//! SteeringAgent: pursuit с предсказанием + интеграция velocity → position

use bevy::prelude::*;

use crate::arena::{box_around, clamp_inside};
use crate::config::HunterConfig;

/// Нижняя граница max_speed в делителе (max_speed = 0 не должен делить на ноль)
pub const SPEED_EPSILON: f32 = 1e-5;

/// Ограничить длину вектора сверху
pub fn clamp_length(v: Vec2, max_length: f32) -> Vec2 {
    let max_length = max_length.max(0.0);
    if v.length_squared() > max_length * max_length {
        v.normalize_or_zero() * max_length
    } else {
        v
    }
}

/// Предсказанная позиция цели
///
/// Горизонт = min(lookahead_time, distance / max_speed): далёкую цель не предсказываем
/// дальше, чем успеем добежать.
pub fn predict_target(
    self_pos: Vec2,
    target_pos: Vec2,
    target_vel: Vec2,
    max_speed: f32,
    lookahead_time: f32,
) -> Vec2 {
    let distance = self_pos.distance(target_pos);
    let t = lookahead_time.min(distance / max_speed.max(SPEED_EPSILON));
    target_pos + target_vel * t
}

/// Steering вектор pursuit поведения
///
/// Инвариант: |result| <= max_force. Детерминирован (без RNG).
pub fn compute_steering(
    self_pos: Vec2,
    self_vel: Vec2,
    target_pos: Vec2,
    target_vel: Vec2,
    max_speed: f32,
    max_force: f32,
    lookahead_time: f32,
) -> Vec2 {
    let predicted = predict_target(self_pos, target_pos, target_vel, max_speed, lookahead_time);
    let desired = (predicted - self_pos).normalize_or_zero() * max_speed;
    clamp_length(desired - self_vel, max_force)
}

/// Полноценный hunter (после активации прокси)
///
/// Инвариант: |velocity| <= max_speed после каждого `step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringAgent {
    pub position: Vec2,
    pub velocity: Vec2,
    pub max_speed: f32,
    pub max_force: f32,
    pub lookahead_time: f32,
    /// Половина стороны collision box (и размер треугольника)
    pub half_size: f32,
}

impl SteeringAgent {
    pub fn new(position: Vec2, config: &HunterConfig) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            max_speed: config.max_speed,
            max_force: config.max_force,
            lookahead_time: config.lookahead_time,
            half_size: config.half_size,
        }
    }

    /// Стартовая скорость (клампится к max_speed)
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = clamp_length(velocity, self.max_speed);
        self
    }

    pub fn pursue(&self, target_pos: Vec2, target_vel: Vec2) -> Vec2 {
        compute_steering(
            self.position,
            self.velocity,
            target_pos,
            target_vel,
            self.max_speed,
            self.max_force,
            self.lookahead_time,
        )
    }

    /// Один тик: steering → velocity (scaled acceleration) → position → clamp в bounds
    pub fn step(&mut self, target_pos: Vec2, target_vel: Vec2, dt: f32, bounds: Rect) {
        let force = self.pursue(target_pos, target_vel);

        self.velocity += force * dt / self.max_force.max(1.0) * self.max_speed;
        self.velocity = clamp_length(self.velocity, self.max_speed);

        self.position += self.velocity * dt;
        self.position = clamp_inside(self.position, bounds, self.half_size);
    }

    /// Направление «носа» (для отрисовки); почти стоящий hunter смотрит вдоль +X
    pub fn forward(&self) -> Vec2 {
        if self.velocity.length_squared() > 1.0 {
            self.velocity.normalize()
        } else {
            Vec2::X
        }
    }

    pub fn bounding_box(&self) -> Rect {
        box_around(self.position, self.half_size)
    }
}
