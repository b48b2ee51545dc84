//! PursuitWorld: владелец игрока и прокси, fixed-step тик
//!
//! Порядок тика фиксирован: input → simulation → collision → score.
//! Коллизии проверяются только после того, как ВСЕ позиции тика финализированы.

use bevy::prelude::*;
use rand::Rng;

use crate::arena::{box_around, overlaps, SpawnLayout};
use crate::config::PursuitConfig;
use crate::player::{InputSource, PlayerBody};
use crate::proxy::{Activation, HunterProxy, ProxyContext, PLACEHOLDER_HALF_SIZE};
use crate::render::RenderStyle;

/// Состояние сессии
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionState {
    Running,
    /// Terminal: дальнейшие тики — no-op
    GameOver { survived: f32, caught_by: usize },
}

/// Конец сессии (репортится ровно один раз)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameOver {
    /// Прожитое время (score), включая последний тик
    pub survived: f32,
    /// Spawn order hunter'а, который догнал
    pub caught_by: usize,
}

/// Результат одного тика
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    pub activations: Vec<Activation>,
    pub game_over: Option<GameOver>,
    pub style_changed: bool,
}

#[derive(Resource, Debug, Clone)]
pub struct PursuitWorld {
    config: PursuitConfig,
    bounds: Rect,
    /// Арена + кольцо спавна (clamp для dormant прокси)
    dormant_bounds: Rect,
    /// Уже расширена на visibility.margin
    visible_region: Option<Rect>,
    player: PlayerBody,
    /// Порядок = spawn order
    proxies: Vec<HunterProxy>,
    style: RenderStyle,
    state: SessionState,
    elapsed: f32,
    ticks: u64,
}

impl PursuitWorld {
    pub fn new<R: Rng + ?Sized>(config: PursuitConfig, rng: &mut R) -> Self {
        let layout = SpawnLayout::generate(&config, rng);
        Self::from_layout(config, &layout)
    }

    /// Мир с заданным layout (сценарии и тесты)
    pub fn from_layout(config: PursuitConfig, layout: &SpawnLayout) -> Self {
        let bounds = Rect::new(0.0, 0.0, config.arena.width, config.arena.height);
        let visible_region = config
            .visible_region()
            .map(|region| region.inflate(config.visibility.margin));

        let mut world = Self {
            bounds,
            dormant_bounds: bounds,
            visible_region,
            player: PlayerBody::new(SpawnLayout::player_spawn(&config), &config.player),
            proxies: Vec::new(),
            style: RenderStyle::default(),
            state: SessionState::Running,
            elapsed: 0.0,
            ticks: 0,
            config,
        };
        world.populate(layout);
        world
    }

    /// Новая сессия: свежий layout, игрок в центре. Стиль рендера сохраняется.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let layout = SpawnLayout::generate(&self.config, rng);
        self.player = PlayerBody::new(SpawnLayout::player_spawn(&self.config), &self.config.player);
        self.state = SessionState::Running;
        self.elapsed = 0.0;
        self.ticks = 0;
        self.populate(&layout);

        crate::log_info(&format!("Pursuit reset: {} hunters spawned", self.proxies.len()));
    }

    fn populate(&mut self, layout: &SpawnLayout) {
        let margin = self.config.spawn.edge_margin + PLACEHOLDER_HALF_SIZE;
        self.dormant_bounds = self.bounds.inflate(margin);

        self.proxies.clear();
        for (order, spawn) in layout.spawns.iter().enumerate() {
            // Кольцо должно вмещать любой spawn, иначе первый clamp телепортирует прокси
            self.dormant_bounds = self
                .dormant_bounds
                .union(box_around(spawn.position, PLACEHOLDER_HALF_SIZE));

            self.proxies.push(HunterProxy::dormant(
                order,
                spawn.position,
                spawn.drift_speed,
                spawn.activation_distance,
                self.config.hunter,
            ));
        }
    }

    /// Видимая область (без margin); None — активирует только дистанция
    pub fn set_visible_region(&mut self, region: Option<Rect>) {
        self.visible_region = region.map(|region| region.inflate(self.config.visibility.margin));
    }

    pub fn config(&self) -> &PursuitConfig {
        &self.config
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn visible_region(&self) -> Option<Rect> {
        self.visible_region
    }

    pub fn player(&self) -> &PlayerBody {
        &self.player
    }

    pub fn proxies(&self) -> &[HunterProxy] {
        &self.proxies
    }

    pub fn active_count(&self) -> usize {
        self.proxies.iter().filter(|proxy| proxy.is_active()).count()
    }

    pub fn style(&self) -> RenderStyle {
        self.style
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, SessionState::GameOver { .. })
    }

    /// Score: прожитые секунды
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    fn proxy_context(&self) -> ProxyContext {
        ProxyContext {
            target_position: self.player.position,
            target_velocity: self.player.velocity,
            bounds: self.bounds,
            dormant_bounds: self.dormant_bounds,
            visible_region: self.visible_region,
        }
    }

    /// Один тик симуляции
    ///
    /// `dt <= 0` и тики после GameOver ничего не меняют.
    pub fn tick(&mut self, dt: f32, input: &impl InputSource) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if self.is_over() || !(dt > 0.0 && dt.is_finite()) {
            return outcome;
        }

        // 1. Input
        if input.toggle_pressed() {
            self.style = self.style.toggled();
            outcome.style_changed = true;
            crate::log(&format!("Render style → {}", self.style.label()));
        }
        self.player.update_controls(input, dt, self.bounds);

        // 2. Simulation (контекст снят после движения игрока)
        let ctx = self.proxy_context();
        for proxy in self.proxies.iter_mut() {
            if let Some(activation) = proxy.tick(&ctx, dt) {
                outcome.activations.push(activation);
            }
        }

        // 3. Collision: первый по spawn order
        let player_box = self.player.bounding_box();
        let caught_by = self
            .proxies
            .iter()
            .find(|proxy| overlaps(player_box, proxy.bounding_box()))
            .map(|proxy| proxy.spawn_order());

        // 4. Score
        self.elapsed += dt;
        self.ticks += 1;

        if let Some(caught_by) = caught_by {
            let game_over = GameOver {
                survived: self.elapsed,
                caught_by,
            };
            self.state = SessionState::GameOver {
                survived: game_over.survived,
                caught_by,
            };
            outcome.game_over = Some(game_over);

            crate::log_info(&format!(
                "Game over: caught by hunter #{} after {:.1}s ({} ticks)",
                caught_by, self.elapsed, self.ticks
            ));
        }

        outcome
    }
}
