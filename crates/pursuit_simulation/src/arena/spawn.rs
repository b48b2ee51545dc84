//! Spawn layout для hunter прокси
//!
//! Два кольца:
//! - Edge: сразу за краем арены (скоро станут видимы)
//! - Inside: внутри арены, но не ближе `safe_radius` к игроку
//!
//! Детерминизм: layout зависит только от config + RNG (ChaCha8 в DeterministicRng).

use bevy::prelude::*;
use rand::Rng;

use crate::config::{DriftRange, PursuitConfig};

/// Сколько раз перевыбираем внутреннюю точку, попавшую в safe_radius
const MAX_INSIDE_ATTEMPTS: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnSide {
    Top,
    Bottom,
    Left,
    Right,
}

impl SpawnSide {
    const ALL: [SpawnSide; 4] = [SpawnSide::Top, SpawnSide::Bottom, SpawnSide::Left, SpawnSide::Right];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnGroup {
    Edge(SpawnSide),
    Inside,
}

/// Параметры одного прокси при создании мира
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProxySpawn {
    pub position: Vec2,
    pub drift_speed: f32,
    pub activation_distance: f32,
    pub group: SpawnGroup,
}

/// Упорядоченный список спавнов (порядок = spawn order в мире)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpawnLayout {
    pub spawns: Vec<ProxySpawn>,
}

impl SpawnLayout {
    /// Точка спавна игрока — центр арены
    pub fn player_spawn(config: &PursuitConfig) -> Vec2 {
        Vec2::new(config.arena.width * 0.5, config.arena.height * 0.5)
    }

    pub fn generate<R: Rng + ?Sized>(config: &PursuitConfig, rng: &mut R) -> Self {
        let spawn = &config.spawn;
        let (width, height) = (config.arena.width, config.arena.height);
        let mut spawns = Vec::with_capacity(spawn.edge_count + spawn.inside_count);

        for _ in 0..spawn.edge_count {
            let side = SpawnSide::ALL[rng.gen_range(0..SpawnSide::ALL.len())];
            let margin = spawn.edge_margin;

            let position = match side {
                SpawnSide::Top => Vec2::new(rng.gen_range(0.0..=width), -margin),
                SpawnSide::Bottom => Vec2::new(rng.gen_range(0.0..=width), height + margin),
                SpawnSide::Left => Vec2::new(-margin, rng.gen_range(0.0..=height)),
                SpawnSide::Right => Vec2::new(width + margin, rng.gen_range(0.0..=height)),
            };

            spawns.push(ProxySpawn {
                position,
                drift_speed: sample_drift(rng, spawn.edge_drift),
                activation_distance: spawn.edge_activation_distance,
                group: SpawnGroup::Edge(side),
            });
        }

        let player = Self::player_spawn(config);
        let inset = spawn.inside_inset;
        for _ in 0..spawn.inside_count {
            let mut position = Vec2::ZERO;
            for attempt in 0..MAX_INSIDE_ATTEMPTS {
                position = Vec2::new(
                    rng.gen_range(inset..=width - inset),
                    rng.gen_range(inset..=height - inset),
                );
                if position.distance(player) >= spawn.safe_radius {
                    break;
                }
                if attempt + 1 == MAX_INSIDE_ATTEMPTS {
                    crate::log_warning(&format!(
                        "Spawn: no free point outside safe radius {} after {} attempts, using {:?}",
                        spawn.safe_radius, MAX_INSIDE_ATTEMPTS, position
                    ));
                }
            }

            spawns.push(ProxySpawn {
                position,
                drift_speed: sample_drift(rng, spawn.inside_drift),
                activation_distance: spawn.inside_activation_distance,
                group: SpawnGroup::Inside,
            });
        }

        Self { spawns }
    }

    pub fn len(&self) -> usize {
        self.spawns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spawns.is_empty()
    }
}

fn sample_drift<R: Rng + ?Sized>(rng: &mut R, range: DriftRange) -> f32 {
    rng.gen_range(range.min..=range.max)
}
