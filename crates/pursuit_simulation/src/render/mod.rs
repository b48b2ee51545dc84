//! Renderer seam (Bridge)
//!
//! Симуляция говорит только примитивами: позиция, размер, цвет, stroke.
//! Конкретный рендер (Bevy клиент, `DrawList` в тестах) реализует `ShapeRenderer`.
//! Стиль (Filled / Wireframe) — enum в мире, не подкласс рендера.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

pub mod radar;
pub mod scene;


pub use radar::Radar;
pub use scene::{
    hud_lines, SceneGroup, SceneLayer, SceneNode, ARENA_PALETTE, HUNTER_COLOR, PLACEHOLDER_COLOR,
    PLAYER_COLOR,
};

/// RGB цвет (0-255), без зависимости от bevy_color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

/// Заливка или контур заданной толщины
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stroke {
    Fill,
    Outline(f32),
}

/// Стиль отрисовки, переключается Tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RenderStyle {
    #[default]
    Filled,
    Wireframe,
}

impl RenderStyle {
    pub fn toggled(self) -> Self {
        match self {
            RenderStyle::Filled => RenderStyle::Wireframe,
            RenderStyle::Wireframe => RenderStyle::Filled,
        }
    }

    pub fn stroke(self) -> Stroke {
        match self {
            RenderStyle::Filled => Stroke::Fill,
            RenderStyle::Wireframe => Stroke::Outline(2.0),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RenderStyle::Filled => "Filled",
            RenderStyle::Wireframe => "Wireframe",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    TopLeft,
    Center,
}

/// Примитивы рендера (world-space координаты, Y вниз)
pub trait ShapeRenderer {
    fn circle(&mut self, center: Vec2, radius: f32, color: Rgb, stroke: Stroke);
    fn polygon(&mut self, points: &[Vec2], color: Rgb, stroke: Stroke);
    fn rect(&mut self, rect: Rect, color: Rgb, stroke: Stroke);
    /// Плитка фона: рендер может кэшировать одну форму на (size, color)
    fn tile(&mut self, rect: Rect, color: Rgb);
    fn text(&mut self, position: Vec2, text: &str, color: Rgb, anchor: TextAnchor);
}

/// Записанная команда отрисовки
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgb,
        stroke: Stroke,
    },
    Polygon {
        points: Vec<Vec2>,
        color: Rgb,
        stroke: Stroke,
    },
    Rect {
        rect: Rect,
        color: Rgb,
        stroke: Stroke,
    },
    Tile {
        rect: Rect,
        color: Rgb,
    },
    Text {
        position: Vec2,
        text: String,
        color: Rgb,
        anchor: TextAnchor,
    },
}

/// Recording renderer: кадр как список команд
///
/// Клиент рисует из него меши, тесты проверяют порядок и содержимое.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl ShapeRenderer for DrawList {
    fn circle(&mut self, center: Vec2, radius: f32, color: Rgb, stroke: Stroke) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            stroke,
        });
    }

    fn polygon(&mut self, points: &[Vec2], color: Rgb, stroke: Stroke) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
            stroke,
        });
    }

    fn rect(&mut self, rect: Rect, color: Rgb, stroke: Stroke) {
        self.commands.push(DrawCommand::Rect { rect, color, stroke });
    }

    fn tile(&mut self, rect: Rect, color: Rgb) {
        self.commands.push(DrawCommand::Tile { rect, color });
    }

    fn text(&mut self, position: Vec2, text: &str, color: Rgb, anchor: TextAnchor) {
        self.commands.push(DrawCommand::Text {
            position,
            text: text.to_string(),
            color,
            anchor,
        });
    }
}
