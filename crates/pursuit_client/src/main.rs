use bevy::prelude::*;
use pursuit_simulation::{init_logger, log_error, log_info, PursuitConfig, PursuitPlugin, SessionEnded};

mod camera;
mod input;
mod rendering;
mod shape_cache;

use camera::CameraPlugin;
use input::KeyboardInputPlugin;
use rendering::SceneRenderPlugin;

fn main() {
    init_logger();
    let config = load_config();
    let arena = config.arena;

    App::new()
        // Bevy defaults (rendering, input, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Pursuit - Avoid the hunters".to_string(),
                resolution: (arena.width, arena.height).into(),
                ..default()
            }),
            ..default()
        }))
        // Конфиг до PursuitPlugin: plugin читает его в build()
        .insert_resource(config)
        // Simulation (headless ECS logic)
        .add_plugins(PursuitPlugin)
        // Keyboard → InputSnapshot
        .add_plugins(KeyboardInputPlugin)
        // DrawList → meshes/gizmos/text
        .add_plugins(SceneRenderPlugin)
        .add_plugins(CameraPlugin)
        .add_systems(Update, announce_game_over)
        .run();
}

/// `pursuit_client [config.toml]`; битый конфиг → defaults
fn load_config() -> PursuitConfig {
    let Some(path) = std::env::args().nth(1) else {
        return PursuitConfig::default();
    };

    match PursuitConfig::from_file(&path) {
        Ok(config) => {
            log_info(&format!("Loaded config from {}", path));
            config
        }
        Err(err) => {
            log_error(&format!("{}; falling back to defaults", err));
            PursuitConfig::default()
        }
    }
}

fn announce_game_over(mut ended_events: EventReader<SessionEnded>) {
    for ended in ended_events.read() {
        log_info(&format!(
            "Survived {:.1}s. [R] restart, any other key quits",
            ended.survived
        ));
    }
}
