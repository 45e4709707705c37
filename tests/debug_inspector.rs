#![cfg(feature = "debug")]
use bevy::prelude::*;
use festival_run::debug::keys::debug_key_input_system;
use festival_run::debug::DebugState;
use festival_run::interaction::inputmap::InputActionsPlugin;

#[test]
fn inspector_toggles_only_on_full_chord() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(ButtonInput::<KeyCode>::default())
        .add_plugins(InputActionsPlugin)
        .init_resource::<DebugState>()
        .add_systems(Update, debug_key_input_system);
    app.update();

    // Partial chord does nothing.
    {
        let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        input.press(KeyCode::ShiftLeft);
        input.press(KeyCode::KeyI);
    }
    app.update();
    assert!(!app.world().resource::<DebugState>().overlay_visible);

    {
        let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        input.press(KeyCode::ControlRight);
        input.press(KeyCode::AltLeft);
    }
    app.update();
    assert!(app.world().resource::<DebugState>().overlay_visible);

    // Holding keeps it on; toggling needs a fresh press.
    app.update();
    assert!(app.world().resource::<DebugState>().overlay_visible);

    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().release(KeyCode::KeyI);
    app.update();
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(KeyCode::KeyI);
    app.update();
    assert!(!app.world().resource::<DebugState>().overlay_visible);
}
