//! Flyweight для мешей и материалов
//!
//! Плитки арены и круги повторяются сотнями с одинаковыми (size, color).
//! Одна пара Mesh/ColorMaterial на ключ, entities делят handles.

use std::collections::HashMap;

use bevy::prelude::*;
use pursuit_simulation::render::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Circle,
}

/// Размеры храним битами f32 (Hash/Eq)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeKey {
    pub kind: ShapeKind,
    pub size: [u32; 2],
    pub color: Rgb,
}

impl ShapeKey {
    pub fn rectangle(size: Vec2, color: Rgb) -> Self {
        Self {
            kind: ShapeKind::Rectangle,
            size: [size.x.to_bits(), size.y.to_bits()],
            color,
        }
    }

    pub fn circle(radius: f32, color: Rgb) -> Self {
        Self {
            kind: ShapeKind::Circle,
            size: [radius.to_bits(), radius.to_bits()],
            color,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShapeHandles {
    pub mesh: Handle<Mesh>,
    pub material: Handle<ColorMaterial>,
}

#[derive(Resource, Debug, Default)]
pub struct ShapeCache {
    entries: HashMap<ShapeKey, ShapeHandles>,
    /// Материалы по цвету (общие для форм и для некэшируемых мешей)
    materials: HashMap<Rgb, Handle<ColorMaterial>>,
    hits: u64,
    misses: u64,
}

impl ShapeCache {
    pub fn get_or_insert_material_with(
        &mut self,
        color: Rgb,
        create: impl FnOnce() -> Handle<ColorMaterial>,
    ) -> Handle<ColorMaterial> {
        if let Some(material) = self.materials.get(&color) {
            self.hits += 1;
            return material.clone();
        }

        self.misses += 1;
        let material = create();
        self.materials.insert(color, material.clone());
        material
    }

    pub fn material(
        &mut self,
        color: Rgb,
        materials: &mut Assets<ColorMaterial>,
    ) -> Handle<ColorMaterial> {
        self.get_or_insert_material_with(color, || {
            materials.add(ColorMaterial::from(to_color(color)))
        })
    }

    pub fn get_or_insert_with(
        &mut self,
        key: ShapeKey,
        create: impl FnOnce() -> ShapeHandles,
    ) -> ShapeHandles {
        if let Some(handles) = self.entries.get(&key) {
            self.hits += 1;
            return handles.clone();
        }

        self.misses += 1;
        let handles = create();
        self.entries.insert(key, handles.clone());
        handles
    }

    /// Прямоугольник: меш размером `size`, материал цвета `color`
    pub fn rectangle(
        &mut self,
        size: Vec2,
        color: Rgb,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<ColorMaterial>,
    ) -> ShapeHandles {
        let key = ShapeKey::rectangle(size, color);
        if let Some(handles) = self.lookup(&key) {
            return handles;
        }
        let material = self.material(color, materials);
        self.get_or_insert_with(key, || ShapeHandles {
            mesh: meshes.add(Rectangle::new(size.x, size.y)),
            material,
        })
    }

    pub fn circle(
        &mut self,
        radius: f32,
        color: Rgb,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<ColorMaterial>,
    ) -> ShapeHandles {
        let key = ShapeKey::circle(radius, color);
        if let Some(handles) = self.lookup(&key) {
            return handles;
        }
        let material = self.material(color, materials);
        self.get_or_insert_with(key, || ShapeHandles {
            mesh: meshes.add(Circle::new(radius)),
            material,
        })
    }

    fn lookup(&mut self, key: &ShapeKey) -> Option<ShapeHandles> {
        let handles = self.entries.get(key).cloned();
        if handles.is_some() {
            self.hits += 1;
        }
        handles
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

pub fn to_color(color: Rgb) -> Color {
    Color::srgb_u8(color.0, color.1, color.2)
}
