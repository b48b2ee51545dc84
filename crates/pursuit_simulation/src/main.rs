//! Headless симуляция погони
//!
//! Автопилот играет несколько раундов без окна, лог — в консоль.
//! `pursuit_simulation [config.toml]`

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use pursuit_simulation::{
    init_logger, log_error, log_info, set_log_level, Autopilot, LogLevel, PursuitConfig,
    PursuitWorld, SessionState,
};

fn main() {
    init_logger();
    // Активации и итоги раундов, без debug шума
    set_log_level(LogLevel::Info);

    let config = match std::env::args().nth(1) {
        Some(path) => PursuitConfig::from_file(&path).unwrap_or_else(|err| {
            log_error(&format!("{}; falling back to defaults", err));
            PursuitConfig::default()
        }),
        None => PursuitConfig::default(),
    };

    log_info(&format!(
        "Starting headless pursuit (seed: {}, rounds: {})",
        config.seed, config.headless.rounds
    ));

    let dt = (1.0 / config.tick_hz) as f32;
    let rounds = config.headless.rounds;
    let max_ticks = config.headless.max_ticks;
    let autopilot = Autopilot::default();

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut world = PursuitWorld::new(config, &mut rng);

    for round in 1..=rounds {
        if round > 1 {
            world.reset(&mut rng);
        }

        let mut activations = 0;
        while !world.is_over() && world.ticks() < u64::from(max_ticks) {
            let input = autopilot.plan(&world);
            activations += world.tick(dt, &input).activations.len();
        }

        match world.state() {
            SessionState::GameOver { survived, caught_by } => log_info(&format!(
                "Round {}: caught by hunter #{} after {:.1}s, {}/{} hunters activated",
                round,
                caught_by,
                survived,
                activations,
                world.proxies().len()
            )),
            SessionState::Running => log_info(&format!(
                "Round {}: survived the {} tick limit ({:.1}s), {}/{} hunters activated",
                round,
                max_ticks,
                world.elapsed(),
                activations,
                world.proxies().len()
            )),
        }
    }

    log_info("Simulation complete!");
}
