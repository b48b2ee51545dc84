//! Pursuit steering (hunter AI)
//!
//! Hunter предсказывает позицию игрока на `lookahead_time` вперёд и рулит туда
//! с ограничением по силе (max_force) и скорости (max_speed).

pub mod agent;

#[cfg(test)]
mod agent_tests;

pub use agent::{
    clamp_length, compute_steering, predict_target, SteeringAgent, SPEED_EPSILON,
};
