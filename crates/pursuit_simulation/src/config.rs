//! Конфигурация погони (TOML → PursuitConfig)
//!
//! Каждое поле имеет default, поэтому пустой файл = стандартная игра 960x540.

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Полная конфигурация сессии
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PursuitConfig {
    /// Seed для spawn layout (DeterministicRng)
    pub seed: u64,
    /// Частота FixedUpdate тика
    pub tick_hz: f64,
    pub arena: ArenaConfig,
    pub player: PlayerConfig,
    pub hunter: HunterConfig,
    pub spawn: SpawnConfig,
    pub visibility: VisibilityConfig,
    pub headless: HeadlessConfig,
}

impl Default for PursuitConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_hz: 60.0,
            arena: ArenaConfig::default(),
            player: PlayerConfig::default(),
            hunter: HunterConfig::default(),
            spawn: SpawnConfig::default(),
            visibility: VisibilityConfig::default(),
            headless: HeadlessConfig::default(),
        }
    }
}

/// Размер арены (world bounds) и плитки фона
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
    pub tile_size: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 540.0,
            tile_size: 32.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub radius: f32,
    pub max_speed: f32,
    /// px/s²
    pub acceleration: f32,
    /// Множитель скорости за тик (не за секунду)
    pub friction: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            radius: 14.0,
            max_speed: 220.0,
            acceleration: 900.0,
            friction: 0.85,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HunterConfig {
    pub max_speed: f32,
    pub max_force: f32,
    /// Горизонт предсказания позиции игрока (секунды)
    pub lookahead_time: f32,
    pub half_size: f32,
}

impl Default for HunterConfig {
    fn default() -> Self {
        Self {
            max_speed: 180.0,
            max_force: 280.0,
            lookahead_time: 0.6,
            half_size: 18.0,
        }
    }
}

/// Диапазон скорости дрейфа dormant прокси (включительно)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriftRange {
    pub min: f32,
    pub max: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Прокси на кольце сразу за краями арены
    pub edge_count: usize,
    pub edge_margin: f32,
    pub edge_activation_distance: f32,
    pub edge_drift: DriftRange,
    /// Прокси внутри арены
    pub inside_count: usize,
    pub inside_inset: f32,
    pub inside_activation_distance: f32,
    pub inside_drift: DriftRange,
    /// Внутренние прокси не появляются ближе этого к точке спавна игрока
    pub safe_radius: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            edge_count: 8,
            edge_margin: 12.0,
            edge_activation_distance: 520.0,
            edge_drift: DriftRange { min: 60.0, max: 110.0 },
            inside_count: 4,
            inside_inset: 80.0,
            inside_activation_distance: 420.0,
            inside_drift: DriftRange { min: 40.0, max: 90.0 },
            safe_radius: 120.0,
        }
    }
}

/// Видимая область для предиката активации
///
/// `region = None` → вся арена. `enabled = false` → активирует только дистанция до игрока.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityConfig {
    pub enabled: bool,
    pub region: Option<RegionConfig>,
    /// Расширение области с каждой стороны
    pub margin: f32,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            region: None,
            margin: 60.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionConfig {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadlessConfig {
    pub rounds: u32,
    /// Лимит тиков на раунд (автопилот может жить вечно)
    pub max_ticks: u32,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            rounds: 3,
            max_ticks: 60 * 120,
        }
    }
}

impl PursuitConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: PursuitConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Видимая область (None если предикат видимости выключен)
    pub fn visible_region(&self) -> Option<Rect> {
        if !self.visibility.enabled {
            return None;
        }

        Some(match self.visibility.region {
            Some(region) => Rect::new(
                region.x,
                region.y,
                region.x + region.width,
                region.y + region.height,
            ),
            None => Rect::new(0.0, 0.0, self.arena.width, self.arena.height),
        })
    }

    pub fn validate(&self) -> ConfigResult<()> {
        positive("arena.width", self.arena.width)?;
        positive("arena.height", self.arena.height)?;
        positive("arena.tile_size", self.arena.tile_size)?;

        positive("player.radius", self.player.radius)?;
        non_negative("player.max_speed", self.player.max_speed)?;
        non_negative("player.acceleration", self.player.acceleration)?;
        if !(0.0..=1.0).contains(&self.player.friction) {
            return Err(invalid("player.friction", "must be within [0, 1]"));
        }

        non_negative("hunter.max_speed", self.hunter.max_speed)?;
        non_negative("hunter.max_force", self.hunter.max_force)?;
        non_negative("hunter.lookahead_time", self.hunter.lookahead_time)?;
        positive("hunter.half_size", self.hunter.half_size)?;

        drift_range("spawn.edge_drift", self.spawn.edge_drift)?;
        drift_range("spawn.inside_drift", self.spawn.inside_drift)?;
        non_negative("spawn.edge_margin", self.spawn.edge_margin)?;
        non_negative("spawn.inside_inset", self.spawn.inside_inset)?;
        non_negative("spawn.safe_radius", self.spawn.safe_radius)?;
        non_negative("spawn.edge_activation_distance", self.spawn.edge_activation_distance)?;
        non_negative("spawn.inside_activation_distance", self.spawn.inside_activation_distance)?;
        if self.spawn.inside_inset * 2.0 >= self.arena.width.min(self.arena.height) {
            return Err(invalid("spawn.inside_inset", "leaves no room inside the arena"));
        }

        non_negative("visibility.margin", self.visibility.margin)?;
        if let Some(region) = self.visibility.region {
            finite("visibility.region.x", region.x)?;
            finite("visibility.region.y", region.y)?;
            positive("visibility.region.width", region.width)?;
            positive("visibility.region.height", region.height)?;
        }

        // Шаг считается в f32: и 0, и inf остановили бы тик
        let dt = (1.0 / self.tick_hz) as f32;
        if !(self.tick_hz > 0.0 && dt > 0.0 && dt.is_finite()) {
            return Err(invalid(
                "tick_hz",
                &format!("must give a positive finite tick step, got {}", self.tick_hz),
            ));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

fn finite(field: &'static str, value: f32) -> ConfigResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, &format!("must be finite, got {}", value)))
    }
}

fn positive(field: &'static str, value: f32) -> ConfigResult<()> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, &format!("must be positive, got {}", value)))
    }
}

fn non_negative(field: &'static str, value: f32) -> ConfigResult<()> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, &format!("must not be negative, got {}", value)))
    }
}

fn drift_range(field: &'static str, range: DriftRange) -> ConfigResult<()> {
    non_negative(field, range.min)?;
    non_negative(field, range.max)?;
    if range.min > range.max {
        return Err(invalid(
            field,
            &format!("min {} is greater than max {}", range.min, range.max),
        ));
    }
    Ok(())
}
