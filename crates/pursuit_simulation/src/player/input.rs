//! Input seam: симуляция не знает про клавиатуру
//!
//! Клиент заполняет `InputSnapshot` из `ButtonInput<KeyCode>`, headless — из автопилота,
//! тесты — руками.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Источник ввода на один тик
pub trait InputSource {
    /// Удерживается ли направление
    fn held(&self, direction: Direction) -> bool;
    /// Был ли нажат toggle стиля рендера в этом тике (edge, не hold)
    fn toggle_pressed(&self) -> bool;
    fn quit_requested(&self) -> bool;
}

/// Снимок ввода (Resource)
///
/// Toggle — защёлка: клиент ставит её в Update (`press_toggle`), FixedUpdate тик
/// снимает (`take_toggle`). Так нажатие не теряется и не дублируется между кадрами
/// с 0 или 2 fixed тиками.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub toggle_style: bool,
    pub quit: bool,
}

impl InputSnapshot {
    pub fn holding(directions: &[Direction]) -> Self {
        let mut snapshot = Self::default();
        for direction in directions {
            snapshot.set_held(*direction, true);
        }
        snapshot
    }

    pub fn set_held(&mut self, direction: Direction, held: bool) {
        match direction {
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
        }
    }

    pub fn press_toggle(&mut self) {
        self.toggle_style = true;
    }

    /// Снять защёлку toggle, вернув её значение
    pub fn take_toggle(&mut self) -> bool {
        std::mem::take(&mut self.toggle_style)
    }
}

impl InputSource for InputSnapshot {
    fn held(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }

    fn toggle_pressed(&self) -> bool {
        self.toggle_style
    }

    fn quit_requested(&self) -> bool {
        self.quit
    }
}

/// Единичный (ненормализованный) вектор ускорения из удерживаемых направлений
///
/// Y вниз: Up = -Y.
pub fn direction_vector(input: &impl InputSource) -> Vec2 {
    let mut acc = Vec2::ZERO;
    if input.held(Direction::Left) {
        acc.x -= 1.0;
    }
    if input.held(Direction::Right) {
        acc.x += 1.0;
    }
    if input.held(Direction::Up) {
        acc.y -= 1.0;
    }
    if input.held(Direction::Down) {
        acc.y += 1.0;
    }
    acc
}
