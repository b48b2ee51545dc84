//! ECS системы сессии (FixedUpdate)
//!
//! Порядок: restart_session → advance_pursuit (chain).

use bevy::prelude::*;

use super::PursuitWorld;
use crate::player::InputSnapshot;
use crate::DeterministicRng;

/// Событие: прокси hunter'а материализовался в SteeringAgent
///
/// position/velocity — состояние прокси на момент активации (до шага тика).
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct HunterActivated {
    pub spawn_order: usize,
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Событие: сессия закончилась (ровно одно на сессию)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SessionEnded {
    pub survived: f32,
    pub caught_by: usize,
}

/// Запрос новой сессии (клиент после GameOver)
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct RestartRequested;

/// Система: новая сессия с свежим layout из DeterministicRng
pub fn restart_session(
    mut requests: EventReader<RestartRequested>,
    mut world: ResMut<PursuitWorld>,
    mut rng: ResMut<DeterministicRng>,
) {
    // Несколько запросов за тик = один reset
    if requests.read().count() == 0 {
        return;
    }
    world.reset(&mut rng.rng);
}

/// Система: один fixed тик мира
///
/// Защёлка toggle снимается после тика, чтобы следующий тик её не повторил.
pub fn advance_pursuit(
    mut world: ResMut<PursuitWorld>,
    mut input: ResMut<InputSnapshot>,
    time: Res<Time<Fixed>>,
    mut activated_events: EventWriter<HunterActivated>,
    mut ended_events: EventWriter<SessionEnded>,
) {
    let outcome = world.tick(time.delta_secs(), &*input);
    input.take_toggle();

    for activation in outcome.activations {
        activated_events.write(HunterActivated {
            spawn_order: activation.spawn_order,
            position: activation.position,
            velocity: activation.velocity,
        });
    }

    if let Some(game_over) = outcome.game_over {
        ended_events.write(SessionEnded {
            survived: game_over.survived,
            caught_by: game_over.caught_by,
        });
    }
}
