//! HunterProxy: tagged state вместо nullable обёртки
//!
//! Все пути (update / draw / collision) решаются одним `match` по `ProxyState`.

use bevy::prelude::*;

use crate::arena::{box_around, clamp_inside};
use crate::config::HunterConfig;
use crate::steering::SteeringAgent;

/// Половина стороны placeholder box (12x12) у dormant прокси
pub const PLACEHOLDER_HALF_SIZE: f32 = 6.0;

/// Состояние прокси
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProxyState {
    /// Placeholder: дрейфует к игроку со скоростью `drift_speed`
    Dormant {
        position: Vec2,
        /// Скорость дрейфа за последний тик (наследуется агентом при активации)
        velocity: Vec2,
        drift_speed: f32,
    },
    /// Полноценный hunter, прокси только делегирует
    Active(SteeringAgent),
}

/// Что видит прокси в тике (собирается миром один раз на тик)
#[derive(Debug, Clone, Copy)]
pub struct ProxyContext {
    pub target_position: Vec2,
    pub target_velocity: Vec2,
    /// Арена: clamp для активных hunters
    pub bounds: Rect,
    /// Арена + кольцо спавна: clamp для dormant
    pub dormant_bounds: Rect,
    /// Видимая область, уже расширенная на margin (None = только дистанция)
    pub visible_region: Option<Rect>,
}

/// Снимок в момент активации
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Activation {
    pub spawn_order: usize,
    pub position: Vec2,
    pub velocity: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HunterProxy {
    spawn_order: usize,
    activation_distance: f32,
    hunter: HunterConfig,
    state: ProxyState,
}

impl HunterProxy {
    pub fn dormant(
        spawn_order: usize,
        position: Vec2,
        drift_speed: f32,
        activation_distance: f32,
        hunter: HunterConfig,
    ) -> Self {
        Self {
            spawn_order,
            activation_distance,
            hunter,
            state: ProxyState::Dormant {
                position,
                velocity: Vec2::ZERO,
                drift_speed,
            },
        }
    }

    pub fn spawn_order(&self) -> usize {
        self.spawn_order
    }

    pub fn activation_distance(&self) -> f32 {
        self.activation_distance
    }

    pub fn state(&self) -> &ProxyState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, ProxyState::Active(_))
    }

    pub fn agent(&self) -> Option<&SteeringAgent> {
        match &self.state {
            ProxyState::Active(agent) => Some(agent),
            ProxyState::Dormant { .. } => None,
        }
    }

    pub fn position(&self) -> Vec2 {
        match &self.state {
            ProxyState::Dormant { position, .. } => *position,
            ProxyState::Active(agent) => agent.position,
        }
    }

    pub fn velocity(&self) -> Vec2 {
        match &self.state {
            ProxyState::Dormant { velocity, .. } => *velocity,
            ProxyState::Active(agent) => agent.velocity,
        }
    }

    /// Collision box: агента если активен, иначе маленький placeholder
    pub fn bounding_box(&self) -> Rect {
        match &self.state {
            ProxyState::Dormant { position, .. } => box_around(*position, PLACEHOLDER_HALF_SIZE),
            ProxyState::Active(agent) => agent.bounding_box(),
        }
    }

    /// Предикат активации: близко к игроку ИЛИ внутри (расширенной) видимой области
    pub fn should_activate(&self, ctx: &ProxyContext) -> bool {
        let ProxyState::Dormant { position, .. } = &self.state else {
            return false;
        };

        // Отрицательная дистанция = «никогда по дистанции»
        let near_player = self.activation_distance >= 0.0
            && position.distance_squared(ctx.target_position)
                <= self.activation_distance * self.activation_distance;
        let near_screen = ctx
            .visible_region
            .is_some_and(|region| region.contains(*position));

        near_player || near_screen
    }

    /// Один тик. Возвращает снимок, если в этом тике прокси активировался.
    ///
    /// Предикат проверяется по позиции на начало тика; активированный в тике агент
    /// сразу делает свой шаг (как свежий SteeringAgent с этим снимком).
    pub fn tick(&mut self, ctx: &ProxyContext, dt: f32) -> Option<Activation> {
        let activation = if self.should_activate(ctx) {
            self.activate()
        } else {
            None
        };

        match &mut self.state {
            ProxyState::Dormant {
                position,
                velocity,
                drift_speed,
            } => {
                let to_target = ctx.target_position - *position;
                let distance = to_target.length();

                if distance > 0.0 {
                    // Шаг не перепрыгивает игрока
                    let step = (*drift_speed * dt).min(distance);
                    let direction = to_target / distance;
                    *velocity = direction * (step / dt);
                    *position = clamp_inside(
                        *position + direction * step,
                        ctx.dormant_bounds,
                        PLACEHOLDER_HALF_SIZE,
                    );
                } else {
                    *velocity = Vec2::ZERO;
                }
            }
            ProxyState::Active(agent) => {
                agent.step(ctx.target_position, ctx.target_velocity, dt, ctx.bounds);
            }
        }

        activation
    }

    fn activate(&mut self) -> Option<Activation> {
        let ProxyState::Dormant {
            position, velocity, ..
        } = self.state
        else {
            return None;
        };

        let agent = SteeringAgent::new(position, &self.hunter).with_velocity(velocity);
        self.state = ProxyState::Active(agent);

        crate::log_info(&format!(
            "Hunter #{} activated at ({:.0}, {:.0})",
            self.spawn_order, position.x, position.y
        ));

        Some(Activation {
            spawn_order: self.spawn_order,
            position,
            velocity: agent.velocity,
        })
    }
}
