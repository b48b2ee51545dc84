use bevy::math::Isometry2d;
use bevy::prelude::*;
use bevy::sprite::Anchor;
use pursuit_simulation::render::{DrawCommand, DrawList, Rgb, SceneGroup, Stroke, TextAnchor};
use pursuit_simulation::PursuitWorld;

use crate::camera::to_screen;
use crate::shape_cache::{to_color, ShapeCache, ShapeHandles};

/// Кадр симуляции → Bevy: DrawList перезаписывается и пересобирается каждый Update
pub struct SceneRenderPlugin;

impl Plugin for SceneRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ShapeCache>()
            .init_resource::<SceneGroup>()
            .add_systems(
            Update,
            (record_draw_list, despawn_frame_shapes, spawn_frame_shapes).chain(),
        );
    }
}

/// Marker: entity живёт один кадр
#[derive(Component)]
pub struct FrameShape;

/// Шаг по Z между командами (порядок DrawList = порядок наложения)
const LAYER_STEP: f32 = 0.001;
const HUD_FONT_SIZE: f32 = 16.0;

fn record_draw_list(
    world: Res<PursuitWorld>,
    scene: Res<SceneGroup>,
    mut draw_list: ResMut<DrawList>,
) {
    draw_list.clear();
    scene.draw(&world, &mut *draw_list);
}

fn despawn_frame_shapes(mut commands: Commands, shapes: Query<Entity, With<FrameShape>>) {
    for entity in shapes.iter() {
        commands.entity(entity).despawn();
    }
}

/// Fill → меш (из ShapeCache где форма повторяется), Outline → gizmos
fn spawn_frame_shapes(
    mut commands: Commands,
    draw_list: Res<DrawList>,
    world: Res<PursuitWorld>,
    mut cache: ResMut<ShapeCache>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut gizmos: Gizmos,
) {
    let arena = world.bounds().size();

    for (layer, command) in draw_list.commands.iter().enumerate() {
        let z = layer as f32 * LAYER_STEP;

        match command {
            DrawCommand::Tile { rect, color } => {
                let handles = cache.rectangle(rect.size(), *color, &mut meshes, &mut materials);
                spawn_mesh(&mut commands, handles, to_screen(rect.center(), arena).extend(z));
            }
            DrawCommand::Rect {
                rect,
                color,
                stroke: Stroke::Fill,
            } => {
                let handles = cache.rectangle(rect.size(), *color, &mut meshes, &mut materials);
                spawn_mesh(&mut commands, handles, to_screen(rect.center(), arena).extend(z));
            }
            DrawCommand::Rect {
                rect,
                color,
                stroke: Stroke::Outline(_),
            } => {
                gizmos.rect_2d(
                    Isometry2d::from_translation(to_screen(rect.center(), arena)),
                    rect.size(),
                    to_color(*color),
                );
            }
            DrawCommand::Circle {
                center,
                radius,
                color,
                stroke: Stroke::Fill,
            } => {
                let handles = cache.circle(*radius, *color, &mut meshes, &mut materials);
                spawn_mesh(&mut commands, handles, to_screen(*center, arena).extend(z));
            }
            DrawCommand::Circle {
                center,
                radius,
                color,
                stroke: Stroke::Outline(_),
            } => {
                gizmos.circle_2d(
                    Isometry2d::from_translation(to_screen(*center, arena)),
                    *radius,
                    to_color(*color),
                );
            }
            DrawCommand::Polygon {
                points,
                color,
                stroke,
            } => {
                let screen: Vec<Vec2> = points.iter().map(|p| to_screen(*p, arena)).collect();
                draw_polygon(
                    &mut commands,
                    &mut cache,
                    &mut meshes,
                    &mut materials,
                    &mut gizmos,
                    &screen,
                    *color,
                    *stroke,
                    z,
                );
            }
            DrawCommand::Text {
                position,
                text,
                color,
                anchor,
            } => {
                let anchor = match anchor {
                    TextAnchor::TopLeft => Anchor::TopLeft,
                    TextAnchor::Center => Anchor::Center,
                };
                commands.spawn((
                    Text2d::new(text.clone()),
                    TextFont {
                        font_size: HUD_FONT_SIZE,
                        ..default()
                    },
                    TextColor(to_color(*color)),
                    anchor,
                    Transform::from_translation(to_screen(*position, arena).extend(z)),
                    FrameShape,
                ));
            }
        }
    }
}

fn spawn_mesh(commands: &mut Commands, handles: ShapeHandles, translation: Vec3) {
    commands.spawn((
        Mesh2d(handles.mesh),
        MeshMaterial2d(handles.material),
        Transform::from_translation(translation),
        FrameShape,
    ));
}

/// Меш hunter-треугольника меняет ориентацию каждый тик; материал общий на цвет
#[allow(clippy::too_many_arguments)]
fn draw_polygon(
    commands: &mut Commands,
    cache: &mut ShapeCache,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    gizmos: &mut Gizmos,
    points: &[Vec2],
    color: Rgb,
    stroke: Stroke,
    z: f32,
) {
    match (stroke, points) {
        (Stroke::Fill, [a, b, c]) => {
            commands.spawn((
                Mesh2d(meshes.add(Triangle2d::new(*a, *b, *c))),
                MeshMaterial2d(cache.material(color, materials)),
                Transform::from_xyz(0.0, 0.0, z),
                FrameShape,
            ));
        }
        _ => {
            // Замкнутый контур
            gizmos.linestrip_2d(
                points.iter().copied().chain(points.first().copied()),
                to_color(color),
            );
        }
    }
}
