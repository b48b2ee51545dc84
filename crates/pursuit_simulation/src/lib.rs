//! Pursuit Simulation Core
//!
//! Top-down погоня на Bevy 0.16: игрок уходит от hunters.
//!
//! Слои:
//! - `steering` — pursuit + lookahead (SteeringAgent)
//! - `proxy` — lazy activation: Dormant прокси → Active агент
//! - `session` — PursuitWorld, fixed-step тик, AABB коллизии, GameOver
//! - `render` — примитивы рендера (ShapeRenderer), клиент рисует их мешами
//!
//! Симуляция headless: окно, клавиатура и меши живут в `pursuit_client`.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod arena;
pub mod config;
pub mod logger;
pub mod player;
pub mod proxy;
pub mod render;
pub mod session;
pub mod steering;

// Re-export для удобства
pub use config::{ConfigError, ConfigResult, PursuitConfig};
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, log_with_level, set_log_level, set_logger,
    set_logger_if_needed, ConsoleLogger, LogLevel, LogPrinter, MemoryLogger,
};
pub use player::{InputSnapshot, InputSource, PlayerBody};
pub use proxy::{HunterProxy, ProxyState};
pub use render::{DrawList, RenderStyle, ShapeRenderer};
pub use session::{
    Autopilot, GameOver, HunterActivated, PursuitWorld, RestartRequested, SessionEnded,
    SessionState, TickOutcome,
};
pub use steering::SteeringAgent;

/// Главный plugin симуляции
///
/// Берёт `PursuitConfig` и `DeterministicRng` из App, если они уже вставлены,
/// иначе defaults (seed из конфига).
pub struct PursuitPlugin;

impl Plugin for PursuitPlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world()
            .get_resource::<PursuitConfig>()
            .cloned()
            .unwrap_or_default();

        let mut rng = app
            .world_mut()
            .remove_resource::<DeterministicRng>()
            .unwrap_or_else(|| DeterministicRng::new(config.seed));

        let world = PursuitWorld::new(config.clone(), &mut rng.rng);
        log_info(&format!(
            "Pursuit started: seed {}, {} hunters, {}Hz",
            rng.seed,
            world.proxies().len(),
            config.tick_hz
        ));

        app
            // Fixed timestep для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(config.tick_hz))
            .insert_resource(config)
            .insert_resource(rng)
            .insert_resource(world)
            .init_resource::<InputSnapshot>()
            .init_resource::<DrawList>()
            .add_event::<HunterActivated>()
            .add_event::<SessionEnded>()
            .add_event::<RestartRequested>()
            .add_systems(
                FixedUpdate,
                (session::restart_session, session::advance_pursuit).chain(),
            );
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0)); // 60Hz FixedUpdate

    app
}

/// Snapshot мира для сравнения детерминизма
///
/// Игрок, затем прокси в spawn order: флаг активности, позиция, скорость (LE байты).
pub fn world_snapshot(world: &PursuitWorld) -> Vec<u8> {
    let mut snapshot = Vec::new();

    push_vec2(&mut snapshot, world.player().position);
    push_vec2(&mut snapshot, world.player().velocity);

    for proxy in world.proxies() {
        snapshot.push(proxy.is_active() as u8);
        push_vec2(&mut snapshot, proxy.position());
        push_vec2(&mut snapshot, proxy.velocity());
    }

    snapshot.extend_from_slice(&world.elapsed().to_le_bytes());
    snapshot.extend_from_slice(&world.ticks().to_le_bytes());
    snapshot
}

fn push_vec2(snapshot: &mut Vec<u8>, v: Vec2) {
    snapshot.extend_from_slice(&v.x.to_le_bytes());
    snapshot.extend_from_slice(&v.y.to_le_bytes());
}
