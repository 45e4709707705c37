use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use festival_run::app::flow::SceneTag;
use festival_run::app::screens::{NavButton, SceneCamera};
use festival_run::gameplay::player::{CameraRoot, Player};
use festival_run::{AppState, GameConfig, GamePlugin, GoTo, SceneSwapped, ScreenFlow};

fn flow_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .insert_resource(GameConfig::default())
        .insert_resource(ButtonInput::<KeyCode>::default())
        .add_plugins(GamePlugin);
    app
}

fn state(app: &App) -> AppState {
    *app.world().resource::<State<AppState>>().get()
}

fn run_until(app: &mut App, target: AppState) {
    for _ in 0..20 {
        app.update();
        if state(app) == target && !app.world().resource::<ScreenFlow>().is_busy() {
            return;
        }
    }
    panic!("never reached {target:?}; stuck in {:?}", state(app));
}

fn go(app: &mut App, target: AppState) {
    app.world_mut().send_event(GoTo(target));
}

fn tagged_scenes(app: &mut App) -> Vec<u32> {
    let mut q = app.world_mut().query::<&SceneTag>();
    let mut ids: Vec<u32> = q.iter(app.world()).map(|t| (t.0).0).collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

fn count<C: Component>(app: &mut App) -> usize {
    let mut q = app.world_mut().query_filtered::<Entity, With<C>>();
    q.iter(app.world()).count()
}

#[test]
fn boots_into_start_with_one_scene() {
    let mut app = flow_app();
    run_until(&mut app, AppState::Start);
    let flow = app.world().resource::<ScreenFlow>();
    assert_eq!(flow.state(), AppState::Start);
    assert_eq!(flow.completed(), 1);
    let current = flow.current_scene().expect("scene").0;
    assert_eq!(tagged_scenes(&mut app), vec![current]);

    let mut q = app.world_mut().query::<&NavButton>();
    let targets: Vec<AppState> = q.iter(app.world()).map(|b| b.target).collect();
    assert_eq!(targets, vec![AppState::Cutscene]);
}

#[test]
fn full_cycle_disposes_each_previous_scene() {
    let mut app = flow_app();
    run_until(&mut app, AppState::Start);

    for target in [AppState::Cutscene, AppState::Game, AppState::Lose, AppState::Start] {
        go(&mut app, target);
        run_until(&mut app, target);
        let current = app.world().resource::<ScreenFlow>().current_scene().expect("scene").0;
        assert_eq!(tagged_scenes(&mut app), vec![current], "leftovers after {target:?}");

        let mut cams = app.world_mut().query::<(&Camera, &SceneTag)>();
        let active: Vec<u32> = cams
            .iter(app.world())
            .filter(|(c, _)| c.is_active)
            .map(|(_, t)| (t.0).0)
            .collect();
        assert_eq!(active, vec![current], "exactly one live scene camera for {target:?}");
    }
    assert_eq!(app.world().resource::<ScreenFlow>().completed(), 5);
    assert_eq!(count::<Player>(&mut app), 0);
}

#[test]
fn game_scene_spawns_player_and_rig() {
    let mut app = flow_app();
    run_until(&mut app, AppState::Start);
    go(&mut app, AppState::Cutscene);
    run_until(&mut app, AppState::Cutscene);
    go(&mut app, AppState::Game);
    run_until(&mut app, AppState::Game);

    assert_eq!(count::<Player>(&mut app), 1);
    assert_eq!(count::<CameraRoot>(&mut app), 1);
    assert_eq!(count::<SceneCamera>(&mut app), 1);

    let mut players = app.world_mut().query_filtered::<&Visibility, With<Player>>();
    let vis = players.single(app.world()).expect("player");
    assert_eq!(*vis, Visibility::Inherited);
}

#[test]
fn second_request_while_pending_is_rejected() {
    let mut app = flow_app();
    run_until(&mut app, AppState::Start);
    let before = app.world().resource::<ScreenFlow>().rejected();

    go(&mut app, AppState::Cutscene);
    go(&mut app, AppState::Lose);
    app.update();
    let flow = app.world().resource::<ScreenFlow>();
    assert!(flow.is_busy());
    assert_eq!(flow.pending().map(|p| p.target), Some(AppState::Cutscene));
    assert_eq!(flow.rejected(), before + 1);

    run_until(&mut app, AppState::Cutscene);
    // Same-screen request is dropped too.
    go(&mut app, AppState::Cutscene);
    app.update();
    let flow = app.world().resource::<ScreenFlow>();
    assert!(!flow.is_busy());
    assert_eq!(flow.rejected(), before + 2);
}

#[test]
fn swap_event_reports_each_transition() {
    let mut app = flow_app();
    run_until(&mut app, AppState::Start);
    go(&mut app, AppState::Lose);
    run_until(&mut app, AppState::Lose);

    let events = app.world().resource::<Events<SceneSwapped>>();
    let mut cursor = events.get_cursor();
    let seen: Vec<(AppState, AppState, bool)> =
        cursor.read(events).map(|e| (e.from, e.to, e.timed_out)).collect();
    assert!(seen.contains(&(AppState::Start, AppState::Lose, false)), "{seen:?}");
}
