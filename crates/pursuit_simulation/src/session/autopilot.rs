//! Автопилот для headless прогонов: убегаем от ближайших hunters
//!
//! Сумма отталкиваний 1/d² от hunters в радиусе + слабое притяжение к центру
//! (иначе игрок зажимается в угол).

use bevy::prelude::*;

use crate::player::{Direction, InputSnapshot};
use crate::session::PursuitWorld;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Autopilot {
    /// Hunters дальше не учитываются
    pub threat_radius: f32,
    pub center_pull: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            threat_radius: 300.0,
            center_pull: 0.15,
        }
    }
}

impl Autopilot {
    pub fn plan(&self, world: &PursuitWorld) -> InputSnapshot {
        let player = world.player().position;
        let mut flee = Vec2::ZERO;

        for proxy in world.proxies() {
            let away = player - proxy.position();
            let distance = away.length();
            if distance > 0.0 && distance < self.threat_radius {
                flee += away / (distance * distance);
            }
        }

        let to_center = world.bounds().center() - player;
        let heading = flee.normalize_or_zero() + to_center.normalize_or_zero() * self.center_pull;

        // Ось зажата, если её доля мала (без дрожания на диагоналях)
        let threshold = heading.length() * 0.3;
        let mut input = InputSnapshot::default();
        input.set_held(Direction::Left, heading.x < -threshold);
        input.set_held(Direction::Right, heading.x > threshold);
        input.set_held(Direction::Up, heading.y < -threshold);
        input.set_held(Direction::Down, heading.y > threshold);
        input
    }
}
