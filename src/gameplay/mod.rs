pub mod assets;
pub mod environment;
pub mod player;

use bevy::prelude::*;

use crate::app::flow::{BuildScene, ScreenFlow};
use crate::app::screens::ScreenSpec;
use crate::app::state::AppState;
use crate::core::config::GameConfig;
use crate::core::system::system_order::FlowSet;
use assets::GameAssets;

/// Builds the game scene's content (environment, player, camera rig) when its
/// transition starts, and preloads its assets during the cutscene.
pub struct GameScenePlugin;

impl Plugin for GameScenePlugin {
    fn build(&self, app: &mut App) {
        // Headless tests run without the PBR plugin; make sure the storages exist.
        if app.world().get_resource::<Assets<Mesh>>().is_none() {
            app.init_resource::<Assets<Mesh>>();
        }
        if app
            .world()
            .get_resource::<Assets<StandardMaterial>>()
            .is_none()
        {
            app.init_resource::<Assets<StandardMaterial>>();
        }
        app.add_systems(OnEnter(AppState::Cutscene), assets::preload_game_assets)
            .add_systems(Update, populate_game_scene.in_set(FlowSet::Build));
    }
}

pub fn populate_game_scene(
    mut commands: Commands,
    mut builds: EventReader<BuildScene>,
    cfg: Res<GameConfig>,
    flow: Res<ScreenFlow>,
    preloaded: Option<Res<GameAssets>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for build in builds.read() {
        if build.state != AppState::Game {
            continue;
        }
        if flow.pending().map(|p| p.scene) != Some(build.scene) {
            continue;
        }
        let assets = match preloaded.as_deref() {
            Some(a) => a.clone(),
            None => {
                let a = GameAssets::create(&mut meshes, &mut materials, &cfg);
                commands.insert_resource(a.clone());
                a
            }
        };
        let clear = ScreenSpec::for_state(AppState::Game, &cfg)
            .map(|s| s.clear_color)
            .unwrap_or(Color::BLACK);

        environment::spawn_environment(&mut commands, build.scene, &assets, &cfg);
        let player = player::controller::spawn_player(&mut commands, build.scene, &assets, &cfg);
        let focus = player::camera::follow_target(
            Vec3::from_array(cfg.player.spawn_position),
            cfg.camera.height_offset,
        );
        player::camera::spawn_camera_rig(&mut commands, build.scene, &cfg.camera, clear, focus);
        info!(target: "player", ?player, scene = build.scene.0, "game scene populated");
    }
}
