//! Mesh/material handles for the game scene. Created while the cutscene plays so
//! the game transition only waits for what is still outstanding.

use bevy::prelude::*;

use crate::core::config::{rgb, GameConfig};

#[derive(Resource, Debug, Clone)]
pub struct GameAssets {
    pub ground_mesh: Handle<Mesh>,
    pub ground_material: Handle<StandardMaterial>,
    pub player_mesh: Handle<Mesh>,
    pub player_material: Handle<StandardMaterial>,
}

impl GameAssets {
    pub fn create(
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
        cfg: &GameConfig,
    ) -> Self {
        let env = &cfg.environment;
        let [sx, sy, sz] = cfg.player.size;
        Self {
            ground_mesh: meshes.add(Cuboid::new(
                env.ground_size,
                env.ground_size * env.ground_height_scale,
                env.ground_size,
            )),
            ground_material: materials.add(StandardMaterial {
                base_color: rgb(env.ground_color),
                perceptual_roughness: 0.9,
                ..default()
            }),
            player_mesh: meshes.add(Cuboid::new(sx, sy, sz)),
            player_material: materials.add(rgb(cfg.player.color)),
        }
    }
}

pub fn preload_game_assets(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(GameAssets::create(&mut meshes, &mut materials, &cfg));
    debug!(target: "flow", "game assets preloaded");
}
