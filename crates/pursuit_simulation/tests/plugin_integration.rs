//! PursuitPlugin integration test
//!
//! Проверяем:
//! - FixedUpdate тик двигает мир и считает score
//! - События HunterActivated / SessionEnded
//! - RestartRequested → свежая сессия

use bevy::prelude::*;
use pursuit_simulation::*;

fn create_pursuit_app(seed: u64) -> App {
    let mut app = create_headless_app(seed);
    app.add_plugins(PursuitPlugin);
    app
}

fn fixed_tick(app: &mut App) {
    let timestep = app.world().resource::<Time<Fixed>>().timestep();
    app.world_mut()
        .resource_mut::<Time<Fixed>>()
        .advance_by(timestep);
    app.world_mut().run_schedule(FixedUpdate);
}

#[test]
fn test_plugin_inserts_session_resources() {
    let app = create_pursuit_app(42);
    let world = app.world();

    assert!(world.contains_resource::<PursuitConfig>());
    assert!(world.contains_resource::<DeterministicRng>());
    assert!(world.contains_resource::<InputSnapshot>());
    assert!(world.contains_resource::<DrawList>());

    let pursuit = world.resource::<PursuitWorld>();
    assert_eq!(pursuit.proxies().len(), 12);
    assert_eq!(pursuit.state(), SessionState::Running);
}

#[test]
fn test_plugin_uses_preinserted_config() {
    let mut app = create_headless_app(42);
    let mut config = PursuitConfig::default();
    config.spawn.edge_count = 2;
    config.spawn.inside_count = 1;
    config.tick_hz = 30.0;
    app.insert_resource(config);
    app.add_plugins(PursuitPlugin);

    let world = app.world();
    assert_eq!(world.resource::<PursuitWorld>().proxies().len(), 3);
    let timestep = world.resource::<Time<Fixed>>().timestep();
    assert!((timestep.as_secs_f64() - 1.0 / 30.0).abs() < 1e-9);
}

#[test]
fn test_fixed_ticks_advance_score() {
    let mut app = create_pursuit_app(42);

    for _ in 0..30 {
        fixed_tick(&mut app);
    }

    let world = app.world().resource::<PursuitWorld>();
    assert_eq!(world.ticks(), 30);
    assert!((world.elapsed() - 0.5).abs() < 1e-3);
}

#[test]
fn test_idle_player_is_caught_once() {
    let mut app = create_pursuit_app(42);

    // Игрок стоит в центре — hunters рано или поздно догонят
    let mut ticks = 0;
    while !app.world().resource::<PursuitWorld>().is_over() {
        fixed_tick(&mut app);
        ticks += 1;
        assert!(ticks < 60 * 60, "idle player survived a whole minute");
    }

    // Ещё тики после GameOver — события не дублируются
    for _ in 0..60 {
        fixed_tick(&mut app);
    }

    let ended: Vec<_> = app
        .world()
        .resource::<Events<SessionEnded>>()
        .iter_current_update_events()
        .copied()
        .collect();
    assert_eq!(ended.len(), 1);

    let world = app.world().resource::<PursuitWorld>();
    assert_eq!(world.ticks(), ticks);
    assert_eq!(
        world.state(),
        SessionState::GameOver {
            survived: ended[0].survived,
            caught_by: ended[0].caught_by
        }
    );

    let activated = app.world().resource::<Events<HunterActivated>>().len();
    assert!(activated >= 1);
    assert!(activated <= world.proxies().len());
}

#[test]
fn test_restart_request_starts_new_session() {
    let mut app = create_pursuit_app(42);

    while !app.world().resource::<PursuitWorld>().is_over() {
        fixed_tick(&mut app);
    }

    app.world_mut().send_event(RestartRequested);
    fixed_tick(&mut app);

    let world = app.world().resource::<PursuitWorld>();
    assert_eq!(world.state(), SessionState::Running);
    // Reset + один тик новой сессии
    assert_eq!(world.ticks(), 1);
    assert!((world.elapsed() - 1.0 / 60.0).abs() < 1e-6);
    assert_eq!(world.proxies().len(), 12);
}

#[test]
fn test_toggle_latch_consumed_by_tick() {
    let mut app = create_pursuit_app(42);

    app.world_mut().resource_mut::<InputSnapshot>().press_toggle();
    fixed_tick(&mut app);
    fixed_tick(&mut app);

    assert_eq!(
        app.world().resource::<PursuitWorld>().style(),
        RenderStyle::Wireframe
    );
    assert!(!app.world().resource::<InputSnapshot>().toggle_style);
}
