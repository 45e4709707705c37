use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::assets::GameAssets;
use crate::app::flow::{SceneId, SceneTag};
use crate::core::config::GameConfig;

#[derive(Component)]
pub struct Ground;

#[derive(Component)]
pub struct Sun;

/// Placeholder level: a flat ground box with a fixed collider, ambient fill and a
/// shadow-casting directional light.
pub fn spawn_environment(commands: &mut Commands, scene: SceneId, assets: &GameAssets, cfg: &GameConfig) {
    let env = &cfg.environment;
    let half = env.ground_size * 0.5;
    let tag = SceneTag(scene);

    commands.spawn((
        Name::new("ground"),
        tag,
        Ground,
        Mesh3d(assets.ground_mesh.clone()),
        MeshMaterial3d(assets.ground_material.clone()),
        Transform::default(),
        Visibility::Hidden,
        RigidBody::Fixed,
        Collider::cuboid(half, cfg.ground_top(), half),
    ));

    commands.spawn((
        Name::new("sun"),
        tag,
        Sun,
        DirectionalLight {
            illuminance: env.sun_illuminance,
            shadows_enabled: env.shadows,
            ..default()
        },
        Transform::from_xyz(1.0, 1.0, 0.0).looking_at(Vec3::ZERO, Vec3::Y),
        Visibility::Hidden,
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: env.ambient_brightness,
        ..default()
    });
}
