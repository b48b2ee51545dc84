//! Клавиатура → InputSnapshot
//!
//! Пишем в PreUpdate после InputSystem: FixedUpdate этого кадра видит свежий ввод.

use bevy::input::InputSystem;
use bevy::prelude::*;
use pursuit_simulation::player::Direction;
use pursuit_simulation::{InputSnapshot, InputSource, PursuitWorld, RestartRequested};

pub struct KeyboardInputPlugin;

impl Plugin for KeyboardInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreUpdate, read_keyboard.after(InputSystem));
    }
}

const BINDINGS: [(Direction, [KeyCode; 2]); 4] = [
    (Direction::Left, [KeyCode::ArrowLeft, KeyCode::KeyA]),
    (Direction::Right, [KeyCode::ArrowRight, KeyCode::KeyD]),
    (Direction::Up, [KeyCode::ArrowUp, KeyCode::KeyW]),
    (Direction::Down, [KeyCode::ArrowDown, KeyCode::KeyS]),
];

fn read_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    world: Res<PursuitWorld>,
    mut input: ResMut<InputSnapshot>,
    mut restart_events: EventWriter<RestartRequested>,
    mut exit_events: EventWriter<AppExit>,
) {
    // После GameOver: R — заново, любая другая клавиша — выход
    if world.is_over() {
        *input = InputSnapshot::default();
        if keys.just_pressed(KeyCode::KeyR) {
            restart_events.write(RestartRequested);
        } else if keys.get_just_pressed().next().is_some() {
            exit_events.write(AppExit::Success);
        }
        return;
    }

    for (direction, codes) in BINDINGS {
        input.set_held(direction, keys.any_pressed(codes));
    }

    // Защёлка: снимает FixedUpdate тик
    if keys.just_pressed(KeyCode::Tab) {
        input.press_toggle();
    }

    input.quit = keys.pressed(KeyCode::Escape);
    if input.quit_requested() {
        exit_events.write(AppExit::Success);
    }
}
