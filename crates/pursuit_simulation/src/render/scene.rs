//! Отрисовка сцены: арена → игрок (+outline) → hunters → радар → HUD
//!
//! Порядок задаёт дерево `SceneGroup` (группы и слои с флагом visible).
//!
//! Мир во время draw только читается.

use bevy::prelude::*;

use super::{Radar, Rgb, ShapeRenderer, Stroke, TextAnchor};
use crate::proxy::{HunterProxy, ProxyState, PLACEHOLDER_HALF_SIZE};
use crate::session::{PursuitWorld, SessionState};
use crate::steering::SteeringAgent;

pub const ARENA_PALETTE: [Rgb; 3] = [Rgb(35, 45, 70), Rgb(42, 58, 90), Rgb(48, 66, 100)];
pub const PLAYER_COLOR: Rgb = Rgb(120, 210, 255);
pub const HUNTER_COLOR: Rgb = Rgb(255, 110, 90);
pub const PLACEHOLDER_COLOR: Rgb = Rgb(180, 180, 180);
pub const HUD_COLOR: Rgb = Rgb(235, 235, 235);

/// Outline decoration вокруг игрока
const OUTLINE_THICKNESS: f32 = 2.0;
const HUD_TOP: f32 = 96.0;
const HUD_LINE_HEIGHT: f32 = 20.0;

/// Строки HUD (последняя — счёт)
pub fn hud_lines(world: &PursuitWorld) -> Vec<String> {
    vec![
        "PURSUIT: Avoid the hunters!".to_string(),
        "[WASD/Arrows] move | [TAB] toggle (Filled/Wireframe) | [ESC] quit".to_string(),
        "Hunters drift toward you and activate near the screen or you. Radar shows all blips."
            .to_string(),
        format!(
            "Score: {:.1}s | Active: {}/{} | Style: {}",
            world.elapsed(),
            world.active_count(),
            world.proxies().len(),
            world.style().label()
        ),
    ]
}

/// Слой сцены: что рисует один лист дерева
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneLayer {
    Arena,
    Player,
    Hunters,
    Radar,
    /// Текст HUD + баннер Game Over
    Hud,
}

/// Узел сцены: лист-слой или вложенная группа
#[derive(Debug, Clone, PartialEq)]
pub enum SceneNode {
    Layer { layer: SceneLayer, visible: bool },
    Group(SceneGroup),
}

impl SceneNode {
    pub fn layer(layer: SceneLayer) -> Self {
        SceneNode::Layer {
            layer,
            visible: true,
        }
    }
}

/// Composite: группа рисует детей по порядку; скрытая группа скрывает всё поддерево
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SceneGroup {
    pub visible: bool,
    pub children: Vec<SceneNode>,
}

impl SceneGroup {
    pub fn new(children: Vec<SceneNode>) -> Self {
        Self {
            visible: true,
            children,
        }
    }

    /// Мир (арена, игрок, hunters) под оверлеем (радар, HUD)
    pub fn standard() -> Self {
        Self::new(vec![
            SceneNode::Group(Self::new(vec![
                SceneNode::layer(SceneLayer::Arena),
                SceneNode::layer(SceneLayer::Player),
                SceneNode::layer(SceneLayer::Hunters),
            ])),
            SceneNode::Group(Self::new(vec![
                SceneNode::layer(SceneLayer::Radar),
                SceneNode::layer(SceneLayer::Hud),
            ])),
        ])
    }

    /// Показать/скрыть слой где угодно в дереве. false — слоя нет.
    pub fn set_layer_visible(&mut self, target: SceneLayer, visible: bool) -> bool {
        let mut found = false;
        for child in self.children.iter_mut() {
            match child {
                SceneNode::Layer {
                    layer,
                    visible: flag,
                } if *layer == target => {
                    *flag = visible;
                    found = true;
                }
                SceneNode::Layer { .. } => {}
                SceneNode::Group(group) => found |= group.set_layer_visible(target, visible),
            }
        }
        found
    }

    pub fn draw(&self, world: &PursuitWorld, renderer: &mut impl ShapeRenderer) {
        if !self.visible {
            return;
        }

        for child in &self.children {
            match child {
                SceneNode::Layer {
                    layer,
                    visible: true,
                } => world.draw_layer(*layer, renderer),
                SceneNode::Layer { .. } => {}
                SceneNode::Group(group) => group.draw(world, renderer),
            }
        }
    }
}

impl Default for SceneGroup {
    fn default() -> Self {
        Self::standard()
    }
}

impl PursuitWorld {
    /// Стандартная сцена целиком
    pub fn draw(&self, renderer: &mut impl ShapeRenderer) {
        SceneGroup::standard().draw(self, renderer);
    }

    pub fn draw_layer(&self, layer: SceneLayer, renderer: &mut impl ShapeRenderer) {
        match layer {
            SceneLayer::Arena => self.draw_arena(renderer),
            SceneLayer::Player => self.draw_player(renderer),
            SceneLayer::Hunters => {
                let stroke = self.style().stroke();
                for proxy in self.proxies() {
                    draw_hunter(renderer, proxy, stroke);
                }
            }
            SceneLayer::Radar => Radar::default().draw(
                renderer,
                self.bounds().size(),
                self.player().position,
                self.proxies().iter().map(HunterProxy::position),
            ),
            SceneLayer::Hud => self.draw_hud(renderer),
        }
    }

    fn draw_hud(&self, renderer: &mut impl ShapeRenderer) {
        for (i, line) in hud_lines(self).iter().enumerate() {
            let position = Vec2::new(8.0, HUD_TOP + i as f32 * HUD_LINE_HEIGHT);
            renderer.text(position, line, HUD_COLOR, TextAnchor::TopLeft);
        }

        if let SessionState::GameOver { survived, .. } = self.state() {
            renderer.text(
                self.bounds().center(),
                &format!("Game Over - survived {:.1}s", survived),
                Rgb(240, 240, 240),
                TextAnchor::Center,
            );
        }
    }

    /// Шахматка из плиток; одна форма на (size, color) у рендера
    fn draw_arena(&self, renderer: &mut impl ShapeRenderer) {
        let tile = self.config().arena.tile_size;
        let size = self.bounds().size();
        let cols = (size.x / tile).ceil() as usize;
        let rows = (size.y / tile).ceil() as usize;

        for y in 0..rows {
            for x in 0..cols {
                let color = ARENA_PALETTE[(x + y) % ARENA_PALETTE.len()];
                let min = Vec2::new(x as f32 * tile, y as f32 * tile);
                renderer.tile(Rect::from_corners(min, min + Vec2::splat(tile)), color);
            }
        }
    }

    fn draw_player(&self, renderer: &mut impl ShapeRenderer) {
        let player = self.player();
        let stroke = self.style().stroke();

        renderer.circle(player.position, player.radius, PLAYER_COLOR, stroke);
        renderer.circle(player.position + Vec2::new(4.0, -4.0), 3.0, Rgb::WHITE, stroke);

        // Decorator: рамка поверх, всегда контуром
        renderer.rect(
            player.bounding_box().inflate(OUTLINE_THICKNESS),
            Rgb::WHITE,
            Stroke::Outline(OUTLINE_THICKNESS),
        );
    }
}

fn draw_hunter(renderer: &mut impl ShapeRenderer, proxy: &HunterProxy, stroke: Stroke) {
    match proxy.state() {
        ProxyState::Dormant { position, .. } => {
            renderer.circle(*position, PLACEHOLDER_HALF_SIZE, PLACEHOLDER_COLOR, stroke);
        }
        ProxyState::Active(agent) => {
            renderer.polygon(&hunter_triangle(agent), HUNTER_COLOR, stroke);
        }
    }
}

/// Треугольник носом по скорости
pub fn hunter_triangle(agent: &SteeringAgent) -> [Vec2; 3] {
    let forward = agent.forward();
    let left = Vec2::new(-forward.y, forward.x);
    let size = agent.half_size;

    [
        agent.position + forward * size,
        agent.position - forward * (size * 0.7) + left * (size * 0.6),
        agent.position - forward * (size * 0.7) - left * (size * 0.6),
    ]
}
