//! Systems for input action evaluation.
use super::types::*;
use bevy::prelude::*;

pub fn token_held(
    token: &RawBindingToken,
    keyboard: &ButtonInput<KeyCode>,
    mouse_buttons: Option<&ButtonInput<MouseButton>>,
) -> bool {
    match token {
        RawBindingToken::Key(k) => keyboard.pressed(*k),
        RawBindingToken::Mod(m) => keyboard.any_pressed(m.keys()),
        RawBindingToken::MouseBtn(b) => mouse_buttons.is_some_and(|mb| mb.pressed(*b)),
    }
}

pub fn system_evaluate_bindings(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_buttons: Option<Res<ButtonInput<MouseButton>>>,
    mut input_map: ResMut<InputMap>,
) {
    input_map.frame_counter += 1;
    for st in &mut input_map.states {
        st.clear_transitions();
    }

    let mouse = mouse_buttons.as_deref();
    let attached = input_map.attached;
    let map = &mut *input_map;
    for meta in &map.actions {
        let active = attached
            && map
                .bindings_index
                .get(&meta.id)
                .into_iter()
                .flatten()
                .filter_map(|bid| map.bindings.get(*bid as usize))
                .any(|b| b.tokens.iter().all(|t| token_held(t, &keyboard, mouse)));
        if let Some(st) = map.states.get_mut(meta.id.0 as usize) {
            st.set(active);
        }
    }
}
