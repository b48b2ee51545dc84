use bevy::prelude::*;
use bevy::render::camera::ScalingMode;
use pursuit_simulation::PursuitConfig;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb_u8(20, 22, 30)))
            .add_systems(Startup, spawn_arena_camera);
    }
}

/// 2D камера в центре арены; арена целиком в окне при любом размере
fn spawn_arena_camera(mut commands: Commands, config: Res<PursuitConfig>) {
    commands.spawn((
        Camera2d,
        Projection::from(OrthographicProjection {
            scaling_mode: ScalingMode::AutoMin {
                min_width: config.arena.width,
                min_height: config.arena.height,
            },
            ..OrthographicProjection::default_2d()
        }),
    ));
}

/// Экранные координаты симуляции (Y вниз, (0,0) в углу) → world space Bevy
pub fn to_screen(position: Vec2, arena: Vec2) -> Vec2 {
    Vec2::new(position.x - arena.x * 0.5, arena.y * 0.5 - position.y)
}
