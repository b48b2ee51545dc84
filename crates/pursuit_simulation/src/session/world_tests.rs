//! Tests for the fixed-step pursuit session.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::arena::{ProxySpawn, SpawnGroup, SpawnLayout};
    use crate::config::PursuitConfig;
    use crate::player::{Direction, InputSnapshot};
    use crate::render::RenderStyle;
    use crate::session::{Autopilot, PursuitWorld, SessionState};
    use crate::world_snapshot;

    const DT: f32 = 1.0 / 60.0;
    const NEVER: f32 = -1.0;

    fn config_without_visibility() -> PursuitConfig {
        let mut config = PursuitConfig::default();
        config.visibility.enabled = false;
        config
    }

    /// Мир с ручным layout: (позиция, drift, activation distance)
    fn world_with(spawns: &[(Vec2, f32, f32)]) -> PursuitWorld {
        let layout = SpawnLayout {
            spawns: spawns
                .iter()
                .map(|&(position, drift_speed, activation_distance)| ProxySpawn {
                    position,
                    drift_speed,
                    activation_distance,
                    group: SpawnGroup::Inside,
                })
                .collect(),
        };
        PursuitWorld::from_layout(config_without_visibility(), &layout)
    }

    fn idle() -> InputSnapshot {
        InputSnapshot::default()
    }

    #[test]
    fn test_player_starts_at_arena_center() {
        let world = world_with(&[]);
        assert_eq!(world.player().position, Vec2::new(480.0, 270.0));
        assert_eq!(world.state(), SessionState::Running);
        assert_eq!(world.elapsed(), 0.0);
    }

    #[test]
    fn test_overlap_ends_session_exactly_once() {
        // Placeholder 489..501 пересекает игрока 466..494
        let mut world = world_with(&[(Vec2::new(495.0, 270.0), 0.0, NEVER)]);

        let outcome = world.tick(DT, &idle());
        let game_over = outcome.game_over.expect("overlap must end the session");
        assert_eq!(game_over.caught_by, 0);
        assert!((game_over.survived - DT).abs() < 1e-6);
        assert!(world.is_over());

        // Пересечение сохраняется, но GameOver больше не репортится
        for _ in 0..10 {
            let outcome = world.tick(DT, &InputSnapshot::holding(&[Direction::Right]));
            assert_eq!(outcome.game_over, None);
            assert!(outcome.activations.is_empty());
        }
        assert_eq!(world.ticks(), 1);
        assert!((world.elapsed() - DT).abs() < 1e-6);
        assert_eq!(world.player().position, Vec2::new(480.0, 270.0));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        // Placeholder 494..506, игрок 466..494: касание
        let mut world = world_with(&[(Vec2::new(500.0, 270.0), 0.0, NEVER)]);

        for _ in 0..5 {
            assert_eq!(world.tick(DT, &idle()).game_over, None);
        }
        assert!(!world.is_over());
        assert_eq!(world.ticks(), 5);
    }

    #[test]
    fn test_first_overlap_in_spawn_order_wins() {
        let mut world = world_with(&[
            (Vec2::new(300.0, 100.0), 0.0, NEVER),
            (Vec2::new(488.0, 270.0), 0.0, NEVER),
            (Vec2::new(472.0, 270.0), 0.0, NEVER),
        ]);

        let game_over = world.tick(DT, &idle()).game_over.unwrap();
        assert_eq!(game_over.caught_by, 1);
        assert_eq!(
            world.state(),
            SessionState::GameOver {
                survived: game_over.survived,
                caught_by: 1
            }
        );
    }

    #[test]
    fn test_non_positive_dt_is_noop() {
        let mut world = world_with(&[(Vec2::new(700.0, 270.0), 60.0, 520.0)]);
        let before = world_snapshot(&world);

        for dt in [0.0, -DT, f32::NAN, f32::INFINITY] {
            let outcome = world.tick(dt, &InputSnapshot::holding(&[Direction::Left]));
            assert_eq!(outcome.game_over, None);
            assert!(!outcome.style_changed);
        }

        assert_eq!(world_snapshot(&world), before);
        assert_eq!(world.ticks(), 0);
    }

    #[test]
    fn test_score_accumulates_dt() {
        let mut world = world_with(&[]);
        for _ in 0..120 {
            world.tick(DT, &idle());
        }
        assert!((world.elapsed() - 2.0).abs() < 1e-4);
        assert_eq!(world.ticks(), 120);
    }

    #[test]
    fn test_toggle_flips_style_once_per_press() {
        let mut world = world_with(&[]);
        let mut input = InputSnapshot::default();
        input.press_toggle();

        let outcome = world.tick(DT, &input);
        assert!(outcome.style_changed);
        assert_eq!(world.style(), RenderStyle::Wireframe);

        input.take_toggle();
        let outcome = world.tick(DT, &input);
        assert!(!outcome.style_changed);
        assert_eq!(world.style(), RenderStyle::Wireframe);

        input.press_toggle();
        world.tick(DT, &input);
        assert_eq!(world.style(), RenderStyle::Filled);
    }

    #[test]
    fn test_dormant_proxy_activates_at_distance_inside_world() {
        // 600 px справа от игрока, за краем арены
        let mut world = world_with(&[(Vec2::new(1080.0, 270.0), 60.0, 520.0)]);

        let mut activated_on = None;
        for tick in 1..=200u64 {
            let before = world.proxies()[0].position();
            let outcome = world.tick(DT, &idle());

            if let Some(activation) = outcome.activations.first() {
                assert_eq!(activation.spawn_order, 0);
                assert_eq!(activation.position, before);
                activated_on = Some(tick);
                break;
            }
        }

        // ~1 px за тик: 80 тиков до 520
        let tick = activated_on.expect("proxy never activated");
        assert!((80..=82).contains(&tick), "activated on tick {}", tick);
        assert!(world.proxies()[0].is_active());
        assert_eq!(world.active_count(), 1);
        assert!(!world.is_over());
    }

    #[test]
    fn test_visible_region_activates_on_first_tick() {
        let mut world = world_with(&[(Vec2::new(100.0, 100.0), 60.0, NEVER)]);
        world.set_visible_region(Some(Rect::new(0.0, 0.0, 960.0, 540.0)));

        let outcome = world.tick(DT, &idle());
        assert_eq!(outcome.activations.len(), 1);
        assert!(world.proxies()[0].is_active());
    }

    #[test]
    fn test_activation_reported_once() {
        let mut world = world_with(&[(Vec2::new(200.0, 270.0), 60.0, 520.0)]);

        let mut reported = 0;
        for _ in 0..60 {
            reported += world.tick(DT, &idle()).activations.len();
        }
        assert_eq!(reported, 1);
    }

    #[test]
    fn test_speeds_stay_bounded_under_autopilot() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut world = PursuitWorld::new(PursuitConfig::default(), &mut rng);
        let autopilot = Autopilot::default();
        let bounds = world.bounds();

        for _ in 0..900 {
            if world.is_over() {
                break;
            }
            let input = autopilot.plan(&world);
            world.tick(DT, &input);

            let player = world.player();
            assert!(player.velocity.length() <= player.max_speed + 1e-3);
            assert!(player.position.x >= bounds.min.x + player.radius - 1e-3);
            assert!(player.position.x <= bounds.max.x - player.radius + 1e-3);

            for agent in world.proxies().iter().filter_map(|proxy| proxy.agent()) {
                assert!(agent.velocity.length() <= agent.max_speed + 1e-3);
            }
        }
    }

    #[test]
    fn test_same_seed_same_session() {
        let run = |seed: u64| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut world = PursuitWorld::new(PursuitConfig::default(), &mut rng);
            let autopilot = Autopilot::default();
            for _ in 0..600 {
                let input = autopilot.plan(&world);
                world.tick(DT, &input);
            }
            world_snapshot(&world)
        };

        assert_eq!(run(11), run(11));
        assert_ne!(run(11), run(12));
    }

    #[test]
    fn test_reset_starts_fresh_session_and_keeps_style() {
        let mut world = world_with(&[(Vec2::new(495.0, 270.0), 0.0, NEVER)]);
        let mut input = InputSnapshot::default();
        input.press_toggle();
        world.tick(DT, &input);
        assert!(world.is_over());

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        world.reset(&mut rng);

        assert_eq!(world.state(), SessionState::Running);
        assert_eq!(world.elapsed(), 0.0);
        assert_eq!(world.ticks(), 0);
        assert_eq!(world.style(), RenderStyle::Wireframe);
        assert_eq!(world.player().position, Vec2::new(480.0, 270.0));
        assert_eq!(world.proxies().len(), 12);
        assert_eq!(world.active_count(), 0);

        for (order, proxy) in world.proxies().iter().enumerate() {
            assert_eq!(proxy.spawn_order(), order);
        }
    }

    #[test]
    fn test_autopilot_flees_from_nearby_hunter() {
        let world = world_with(&[(Vec2::new(560.0, 270.0), 0.0, NEVER)]);
        let input = Autopilot::default().plan(&world);

        assert!(input.left);
        assert!(!input.right);
    }
}
