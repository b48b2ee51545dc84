//! Tests for pursuit steering.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use proptest::prelude::*;

    use crate::config::HunterConfig;
    use crate::steering::{clamp_length, compute_steering, predict_target, SteeringAgent};

    /// Погрешность normalize() * max
    fn within(length: f32, max: f32) -> bool {
        length <= max * (1.0 + 1e-5) + 1e-4
    }

    fn arena() -> Rect {
        Rect::new(0.0, 0.0, 960.0, 540.0)
    }

    #[test]
    fn test_pursuit_scenario_stationary_target() {
        // agent (0,0), target (100,0), maxSpeed 50, lookahead 1, maxForce 1000
        let predicted = predict_target(Vec2::ZERO, Vec2::new(100.0, 0.0), Vec2::ZERO, 50.0, 1.0);
        assert_eq!(predicted, Vec2::new(100.0, 0.0));

        let current_vel = Vec2::new(10.0, 5.0);
        let steer = compute_steering(
            Vec2::ZERO,
            current_vel,
            Vec2::new(100.0, 0.0),
            Vec2::ZERO,
            50.0,
            1000.0,
            1.0,
        );

        // desired = (50, 0) → steering = desired - current_vel
        assert_eq!(steer, Vec2::new(50.0, 0.0) - current_vel);
    }

    #[test]
    fn test_lookahead_saturates_for_far_target() {
        // d = 1000 > maxSpeed * lookahead = 100 * 0.5
        let target = Vec2::new(1000.0, 0.0);
        let target_vel = Vec2::new(0.0, 40.0);

        let predicted = predict_target(Vec2::ZERO, target, target_vel, 100.0, 0.5);
        assert_eq!(predicted, target + target_vel * 0.5);
    }

    #[test]
    fn test_lookahead_clamped_by_distance_for_near_target() {
        // d = 10, maxSpeed = 100 → t = 0.1 (меньше lookahead 0.6)
        let predicted = predict_target(
            Vec2::ZERO,
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, 100.0),
            100.0,
            0.6,
        );
        assert!((predicted - Vec2::new(10.0, 10.0)).length() < 1e-4);
    }

    #[test]
    fn test_zero_max_speed_does_not_divide_by_zero() {
        let steer = compute_steering(
            Vec2::ZERO,
            Vec2::ZERO,
            Vec2::new(50.0, 50.0),
            Vec2::new(3.0, -2.0),
            0.0,
            100.0,
            0.6,
        );
        assert!(steer.is_finite());
        assert_eq!(steer, Vec2::ZERO);
    }

    #[test]
    fn test_predicted_on_self_gives_zero_desired() {
        // predicted == self_pos → desired = 0 → steering = -velocity
        let steer = compute_steering(
            Vec2::new(5.0, 5.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(5.0, 5.0),
            Vec2::ZERO,
            100.0,
            100.0,
            0.6,
        );
        assert_eq!(steer, Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_clamp_length() {
        assert_eq!(clamp_length(Vec2::new(3.0, 4.0), 10.0), Vec2::new(3.0, 4.0));
        let clamped = clamp_length(Vec2::new(30.0, 40.0), 10.0);
        assert!((clamped - Vec2::new(6.0, 8.0)).length() < 1e-5);
        assert_eq!(clamp_length(Vec2::new(3.0, 4.0), 0.0), Vec2::ZERO);
    }

    #[test]
    fn test_agent_moves_toward_target_and_stays_in_bounds() {
        let mut agent = SteeringAgent::new(Vec2::new(100.0, 100.0), &HunterConfig::default());
        let target = Vec2::new(500.0, 100.0);

        let start_distance = agent.position.distance(target);
        for _ in 0..30 {
            agent.step(target, Vec2::ZERO, 1.0 / 60.0, arena());
        }

        assert!(agent.position.distance(target) < start_distance);
        assert!(agent.velocity.x > 0.0);
        assert!(arena().contains(agent.position));
    }

    #[test]
    fn test_agent_clamped_by_half_size() {
        let config = HunterConfig::default();
        let mut agent = SteeringAgent::new(Vec2::new(2.0, 2.0), &config);

        // Цель за пределами арены — hunter упирается в край
        agent.step(Vec2::new(-500.0, -500.0), Vec2::ZERO, 1.0 / 60.0, arena());

        assert_eq!(agent.position, Vec2::splat(config.half_size));
    }

    #[test]
    fn test_with_velocity_is_clamped() {
        let agent = SteeringAgent::new(Vec2::ZERO, &HunterConfig::default())
            .with_velocity(Vec2::new(1000.0, 0.0));
        assert!(within(agent.velocity.length(), agent.max_speed));
    }

    #[test]
    fn test_forward_defaults_to_x_when_slow() {
        let agent = SteeringAgent::new(Vec2::ZERO, &HunterConfig::default())
            .with_velocity(Vec2::new(0.5, 0.5));
        assert_eq!(agent.forward(), Vec2::X);

        let moving = agent.with_velocity(Vec2::new(0.0, -50.0));
        assert_eq!(moving.forward(), Vec2::new(0.0, -1.0));
    }

    fn vec2_strategy(range: f32) -> impl Strategy<Value = Vec2> {
        (-range..range, -range..range).prop_map(|(x, y)| Vec2::new(x, y))
    }

    proptest! {
        #[test]
        fn prop_steering_bounded_by_max_force(
            self_pos in vec2_strategy(2000.0),
            self_vel in vec2_strategy(500.0),
            target_pos in vec2_strategy(2000.0),
            target_vel in vec2_strategy(500.0),
            max_speed in 0.0f32..500.0,
            max_force in 0.0f32..1000.0,
            lookahead in 0.0f32..3.0,
        ) {
            let steer = compute_steering(
                self_pos, self_vel, target_pos, target_vel, max_speed, max_force, lookahead,
            );
            prop_assert!(steer.is_finite());
            prop_assert!(within(steer.length(), max_force), "|steer| = {} > {}", steer.length(), max_force);
        }

        #[test]
        fn prop_velocity_bounded_after_step(
            start in (20.0f32..940.0, 20.0f32..520.0),
            start_vel in vec2_strategy(400.0),
            target_pos in vec2_strategy(1500.0),
            target_vel in vec2_strategy(400.0),
            dt in 0.0001f32..1.0,
            ticks in 1usize..20,
        ) {
            let config = HunterConfig::default();
            let mut agent = SteeringAgent::new(Vec2::new(start.0, start.1), &config)
                .with_velocity(start_vel);

            for _ in 0..ticks {
                agent.step(target_pos, target_vel, dt, arena());
                prop_assert!(within(agent.velocity.length(), config.max_speed));
            }
        }

        #[test]
        fn prop_steering_deterministic(
            self_pos in vec2_strategy(1000.0),
            target_pos in vec2_strategy(1000.0),
            target_vel in vec2_strategy(300.0),
        ) {
            let a = compute_steering(self_pos, Vec2::ZERO, target_pos, target_vel, 180.0, 280.0, 0.6);
            let b = compute_steering(self_pos, Vec2::ZERO, target_pos, target_vel, 180.0, 280.0, 0.6);
            prop_assert_eq!(a, b);
        }
    }
}
