use bevy::asset::LoadState;
use bevy::prelude::*;

use super::flow::{BuildScene, GoTo, Readiness, SceneSwapped, SceneTag, ScreenFlow};
use super::loading::{set_loading_visible, OverlayVisibility};
use super::screens::{build_screen, NavButton, SceneCamera, ScreenSpec};
use super::state::AppState;
use crate::core::config::GameConfig;
use crate::interaction::inputmap::InputMap;

pub fn go_to_start(mut go: EventWriter<GoTo>) {
    info!(target: "flow", "boot complete; requesting start screen");
    go.write(GoTo(AppState::Start));
}

const BUTTON_IDLE: Color = Color::NONE;
const BUTTON_HOVER: Color = Color::srgba(1.0, 1.0, 1.0, 0.08);
const BUTTON_PRESSED: Color = Color::srgba(1.0, 1.0, 1.0, 0.18);

/// Navigation buttons are inert while a transition is pending (input detached).
pub fn nav_button_clicks(
    flow: Res<ScreenFlow>,
    mut q_btn: Query<(&Interaction, &NavButton, &mut BackgroundColor), Changed<Interaction>>,
    mut go: EventWriter<GoTo>,
) {
    for (interaction, nav, mut bg) in q_btn.iter_mut() {
        match *interaction {
            Interaction::Pressed => {
                *bg = BackgroundColor(BUTTON_PRESSED);
                if flow.is_busy() {
                    debug!(target: "flow", "button for {:?} ignored; transition pending", nav.target);
                    continue;
                }
                go.write(GoTo(nav.target));
            }
            Interaction::Hovered => *bg = BackgroundColor(BUTTON_HOVER),
            Interaction::None => *bg = BackgroundColor(BUTTON_IDLE),
        }
    }
}

/// Accepts `GoTo` requests: shows the loading card, detaches input and builds the
/// new (hidden) screen. Rejected requests are logged and dropped.
pub fn request_transitions(
    mut commands: Commands,
    mut requests: EventReader<GoTo>,
    mut flow: ResMut<ScreenFlow>,
    mut build: EventWriter<BuildScene>,
    mut overlay: OverlayVisibility,
    mut input_map: Option<ResMut<InputMap>>,
    cfg: Res<GameConfig>,
    asset_server: Option<Res<AssetServer>>,
) {
    for GoTo(target) in requests.read().copied() {
        let scene = match flow.begin(target) {
            Ok(scene) => scene,
            Err(e) => {
                warn!(target: "flow", "{e}");
                continue;
            }
        };
        let Some(spec) = ScreenSpec::for_state(target, &cfg) else {
            continue;
        };
        info!(target: "flow", from = ?flow.state(), to = ?target, scene = scene.0, "transition started");

        set_loading_visible(&mut overlay, true);
        if let Some(map) = input_map.as_mut() {
            map.set_attached(false);
        }

        let font = match (&asset_server, cfg.flow.ui_font.trim()) {
            (Some(server), path) if !path.is_empty() => {
                let handle: Handle<Font> = server.load(path.to_string());
                flow.track(handle.clone());
                handle
            }
            _ => Handle::default(),
        };
        build_screen(&mut commands, scene, &spec, font);
        build.write(BuildScene { scene, state: target });
    }
}

fn handle_settled(server: &AssetServer, handle: &UntypedHandle) -> bool {
    match server.load_state(handle.id()) {
        LoadState::Loaded => server.is_loaded_with_dependencies(handle.id()),
        LoadState::Failed(err) => {
            warn!(target: "flow", "asset failed to load; continuing without it: {err}");
            true
        }
        _ => false,
    }
}

/// Waits for the pending scene, then hides the loading card, disposes the old
/// scene, reveals the new one and updates `AppState`, all in this one system.
#[allow(clippy::too_many_arguments)]
pub fn poll_scene_readiness(
    mut commands: Commands,
    time: Res<Time>,
    cfg: Res<GameConfig>,
    mut flow: ResMut<ScreenFlow>,
    asset_server: Option<Res<AssetServer>>,
    mut overlay: OverlayVisibility,
    mut scene_entities: Query<
        (Entity, &SceneTag, Option<&mut Visibility>, Has<ChildOf>),
        Without<super::loading::LoadingOverlay>,
    >,
    mut cameras: Query<(&SceneTag, &mut Camera), With<SceneCamera>>,
    mut next_state: ResMut<NextState<AppState>>,
    mut input_map: Option<ResMut<InputMap>>,
    mut swapped: EventWriter<SceneSwapped>,
) {
    let Some(pending) = flow.pending() else {
        return;
    };
    let all_settled = match asset_server.as_deref() {
        Some(server) => pending.handles.iter().all(|h| handle_settled(server, h)),
        None => true,
    };
    let readiness = Readiness::decide(
        all_settled,
        pending.frames,
        pending.elapsed,
        cfg.flow.ready_timeout_secs,
    );
    match readiness {
        Readiness::Waiting => {
            flow.tick(time.delta_secs());
            return;
        }
        Readiness::TimedOut => warn!(
            target: "flow",
            "scene {} for {:?} not ready after {:.1}s; completing anyway",
            pending.scene.0, pending.target, pending.elapsed
        ),
        Readiness::Ready => {}
    }

    set_loading_visible(&mut overlay, false);
    let Some(done) = flow.complete() else {
        return;
    };

    for (entity, tag, vis, is_child) in scene_entities.iter_mut() {
        if Some(tag.0) == done.old_scene {
            // Despawn is recursive; children go with their root.
            if !is_child {
                commands.entity(entity).despawn();
            }
        } else if tag.0 == done.new_scene {
            if let Some(mut vis) = vis {
                vis.set_if_neq(Visibility::Inherited);
            }
        }
    }
    for (tag, mut camera) in cameras.iter_mut() {
        camera.is_active = tag.0 == done.new_scene;
    }

    next_state.set(done.to);
    if let Some(map) = input_map.as_mut() {
        map.set_attached(true);
    }
    info!(
        target: "flow",
        from = ?done.from,
        to = ?done.to,
        scene = done.new_scene.0,
        disposed = ?done.old_scene.map(|s| s.0),
        "transition complete"
    );
    swapped.write(SceneSwapped {
        from: done.from,
        to: done.to,
        scene: done.new_scene,
        timed_out: readiness == Readiness::TimedOut,
    });
}
