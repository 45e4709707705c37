use super::types::*;
use bevy::prelude::*;
use smallvec::SmallVec;
use std::collections::{BTreeMap, HashMap, HashSet};

#[derive(Debug, Default)]
pub struct ParsedInputConfig {
    pub input_map: InputMap,
    pub errors: Vec<String>,
}

#[derive(Debug, serde::Deserialize)]
struct ActionDecl {
    description: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct RootToml {
    actions: Option<BTreeMap<String, ActionDecl>>,
    bindings: Option<BTreeMap<String, Vec<String>>>,
}

pub fn parse_input_toml(raw: &str) -> ParsedInputConfig {
    let mut result = ParsedInputConfig::default();
    let root: RootToml = match toml::from_str(raw) {
        Ok(r) => r,
        Err(e) => {
            result.errors.push(format!("Top-level parse: {e}"));
            return result;
        }
    };

    let mut actions: Vec<ActionMeta> = Vec::new();
    let mut name_to_id = HashMap::new();
    // BTreeMap keeps action ids stable across runs.
    for (name, decl) in root.actions.unwrap_or_default() {
        if !validate_action_name(&name) {
            result
                .errors
                .push(format!("Invalid action name '{name}': must be PascalCase"));
            continue;
        }
        let id = ActionId(actions.len() as u16);
        name_to_id.insert(name.clone(), id);
        actions.push(ActionMeta {
            id,
            name,
            description: decl.description.unwrap_or_default(),
        });
    }

    let states = vec![ActionState::default(); actions.len()];
    let mut input_map = InputMap {
        actions,
        name_to_id,
        states,
        ..Default::default()
    };

    let mut binding_id: u32 = 0;
    for (action_name, list) in root.bindings.unwrap_or_default() {
        let Some(aid) = input_map.name_to_id.get(&action_name).copied() else {
            result
                .errors
                .push(format!("Binding references unknown action '{action_name}'"));
            continue;
        };
        for spec in &list {
            match parse_binding(spec) {
                Ok(tokens) => {
                    input_map.bindings.push(Binding {
                        id: binding_id,
                        tokens,
                    });
                    input_map
                        .bindings_index
                        .entry(aid)
                        .or_default()
                        .push(binding_id);
                    binding_id += 1;
                }
                Err(e) => result
                    .errors
                    .push(format!("Action '{action_name}' binding '{spec}': {e}")),
            }
        }
    }

    result.input_map = input_map;
    result
}

fn validate_action_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    if bytes.is_empty() || !bytes[0].is_ascii_uppercase() {
        return false;
    }
    name.chars().all(|c| c.is_ascii_alphanumeric())
}

fn parse_binding(spec: &str) -> Result<SmallVec<[RawBindingToken; 4]>, String> {
    let mut tokens: SmallVec<[RawBindingToken; 4]> = SmallVec::new();
    let mut seen: HashSet<RawBindingToken> = HashSet::new();
    for part in spec.split('+') {
        let p = part.trim();
        if p.is_empty() {
            continue;
        }
        let token = parse_token(p)?;
        if !seen.insert(token) {
            return Err(format!("duplicate token '{p}'"));
        }
        tokens.push(token);
    }
    if tokens.is_empty() {
        return Err("Empty binding".into());
    }
    Ok(tokens)
}

pub fn parse_token(s: &str) -> Result<RawBindingToken, String> {
    if let Some(rest) = s.strip_prefix("Key:") {
        return parse_keycode(rest).map(RawBindingToken::Key);
    }
    if let Some(rest) = s.strip_prefix("Mod:") {
        return match rest {
            "Shift" => Ok(RawBindingToken::Mod(Modifier::Shift)),
            "Control" | "Ctrl" => Ok(RawBindingToken::Mod(Modifier::Control)),
            "Alt" => Ok(RawBindingToken::Mod(Modifier::Alt)),
            other => Err(format!("unknown modifier '{other}'")),
        };
    }
    if let Some(rest) = s.strip_prefix("Mouse:") {
        return match rest {
            "Left" => Ok(RawBindingToken::MouseBtn(MouseButton::Left)),
            "Right" => Ok(RawBindingToken::MouseBtn(MouseButton::Right)),
            "Middle" => Ok(RawBindingToken::MouseBtn(MouseButton::Middle)),
            other => Err(format!("unknown mouse button '{other}'")),
        };
    }
    Err(format!("unknown token '{s}' (expected Key:/Mod:/Mouse: prefix)"))
}

fn parse_keycode(name: &str) -> Result<KeyCode, String> {
    const LETTERS: [KeyCode; 26] = [
        KeyCode::KeyA, KeyCode::KeyB, KeyCode::KeyC, KeyCode::KeyD, KeyCode::KeyE,
        KeyCode::KeyF, KeyCode::KeyG, KeyCode::KeyH, KeyCode::KeyI, KeyCode::KeyJ,
        KeyCode::KeyK, KeyCode::KeyL, KeyCode::KeyM, KeyCode::KeyN, KeyCode::KeyO,
        KeyCode::KeyP, KeyCode::KeyQ, KeyCode::KeyR, KeyCode::KeyS, KeyCode::KeyT,
        KeyCode::KeyU, KeyCode::KeyV, KeyCode::KeyW, KeyCode::KeyX, KeyCode::KeyY,
        KeyCode::KeyZ,
    ];
    const DIGITS: [KeyCode; 10] = [
        KeyCode::Digit0, KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3, KeyCode::Digit4,
        KeyCode::Digit5, KeyCode::Digit6, KeyCode::Digit7, KeyCode::Digit8, KeyCode::Digit9,
    ];
    let letter = name.strip_prefix("Key").unwrap_or(name);
    if letter.len() == 1 {
        let c = letter.as_bytes()[0].to_ascii_uppercase();
        if c.is_ascii_uppercase() {
            return Ok(LETTERS[(c - b'A') as usize]);
        }
    }
    if let Some(d) = name.strip_prefix("Digit") {
        if let Ok(n) = d.parse::<usize>() {
            if let Some(k) = DIGITS.get(n) {
                return Ok(*k);
            }
        }
    }
    let kc = match name {
        "ArrowUp" => KeyCode::ArrowUp,
        "ArrowDown" => KeyCode::ArrowDown,
        "ArrowLeft" => KeyCode::ArrowLeft,
        "ArrowRight" => KeyCode::ArrowRight,
        "Space" => KeyCode::Space,
        "Enter" => KeyCode::Enter,
        "Escape" => KeyCode::Escape,
        "Tab" => KeyCode::Tab,
        "ShiftLeft" => KeyCode::ShiftLeft,
        "ShiftRight" => KeyCode::ShiftRight,
        "ControlLeft" => KeyCode::ControlLeft,
        "ControlRight" => KeyCode::ControlRight,
        "AltLeft" => KeyCode::AltLeft,
        "AltRight" => KeyCode::AltRight,
        "F1" => KeyCode::F1,
        "F2" => KeyCode::F2,
        "F3" => KeyCode::F3,
        "F4" => KeyCode::F4,
        other => return Err(format!("unknown key '{other}'")),
    };
    Ok(kc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_letter_aliases() {
        assert_eq!(parse_token("Key:W"), Ok(RawBindingToken::Key(KeyCode::KeyW)));
        assert_eq!(parse_token("Key:KeyW"), Ok(RawBindingToken::Key(KeyCode::KeyW)));
        assert_eq!(parse_token("Key:Digit3"), Ok(RawBindingToken::Key(KeyCode::Digit3)));
    }

    #[test]
    fn duplicate_chord_token_rejected() {
        assert!(parse_binding("Key:KeyA+Key:A").is_err());
        assert!(parse_binding(" + ").is_err());
    }
}
