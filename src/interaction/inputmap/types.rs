use bevy::prelude::*;
use smallvec::SmallVec;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId(pub u16); // internal index (array position)

#[derive(Debug, Clone)]
pub struct ActionMeta {
    pub id: ActionId,
    pub name: String,
    pub description: String,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionState {
    pub pressed: bool,
    pub just_pressed: bool,
    pub just_released: bool,
}
impl ActionState {
    pub fn clear_transitions(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }

    pub fn set(&mut self, active: bool) {
        if active && !self.pressed {
            self.just_pressed = true;
        } else if !active && self.pressed {
            self.just_released = true;
        }
        self.pressed = active;
    }
}

/// Side-agnostic modifier keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    Shift,
    Control,
    Alt,
}
impl Modifier {
    pub fn keys(self) -> [KeyCode; 2] {
        match self {
            Self::Shift => [KeyCode::ShiftLeft, KeyCode::ShiftRight],
            Self::Control => [KeyCode::ControlLeft, KeyCode::ControlRight],
            Self::Alt => [KeyCode::AltLeft, KeyCode::AltRight],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawBindingToken {
    Key(KeyCode),
    Mod(Modifier),
    MouseBtn(MouseButton),
}

/// All tokens must be held for the binding to be active.
#[derive(Debug, Clone)]
pub struct Binding {
    pub id: u32,
    pub tokens: SmallVec<[RawBindingToken; 4]>,
}

#[derive(Resource, Debug)]
pub struct InputMap {
    pub actions: Vec<ActionMeta>,
    pub name_to_id: HashMap<String, ActionId>,
    pub bindings_index: HashMap<ActionId, Vec<u32>>, // mapping to binding ids
    pub bindings: Vec<Binding>,
    pub states: Vec<ActionState>,
    /// Input gate. While closed every action reads released.
    pub attached: bool,
    pub frame_counter: u64,
}

impl Default for InputMap {
    fn default() -> Self {
        Self {
            actions: Vec::new(),
            name_to_id: HashMap::new(),
            bindings_index: HashMap::new(),
            bindings: Vec::new(),
            states: Vec::new(),
            attached: true,
            frame_counter: 0,
        }
    }
}

impl InputMap {
    pub fn get_state(&self, name: &str) -> Option<&ActionState> {
        self.name_to_id
            .get(name)
            .and_then(|id| self.states.get(id.0 as usize))
    }
    pub fn pressed(&self, name: &str) -> bool {
        self.get_state(name).is_some_and(|s| s.pressed)
    }
    pub fn just_pressed(&self, name: &str) -> bool {
        self.get_state(name).is_some_and(|s| s.just_pressed)
    }
    pub fn just_released(&self, name: &str) -> bool {
        self.get_state(name).is_some_and(|s| s.just_released)
    }
    pub fn bindings_for(&self, name: &str) -> impl Iterator<Item = &Binding> {
        self.name_to_id
            .get(name)
            .and_then(|id| self.bindings_index.get(id))
            .into_iter()
            .flatten()
            .filter_map(|bid| self.bindings.get(*bid as usize))
    }

    /// Closing the gate releases every held action on the next evaluation.
    pub fn set_attached(&mut self, attached: bool) {
        if self.attached != attached {
            info!(target: "input", attached, "input gate changed");
        }
        self.attached = attached;
    }

    /// Names of currently pressed actions (declaration order).
    pub fn active_actions(&self) -> Vec<&str> {
        self.actions
            .iter()
            .filter(|m| self.states.get(m.id.0 as usize).is_some_and(|s| s.pressed))
            .map(|m| m.name.as_str())
            .collect()
    }
}
