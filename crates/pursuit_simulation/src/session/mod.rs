//! Сессия погони: мир, fixed-step тик, GameOver
//!
//! `PursuitWorld` — чистая логика (тестируется без App).
//! `systems` — тонкая ECS обёртка: FixedUpdate тик + события для клиента.

pub mod autopilot;
pub mod systems;
pub mod world;

#[cfg(test)]
mod world_tests;

pub use autopilot::Autopilot;
pub use systems::{advance_pursuit, restart_session, HunterActivated, RestartRequested, SessionEnded};
pub use world::{GameOver, PursuitWorld, SessionState, TickOutcome};
