use festival_run::interaction::inputmap::parse::parse_input_toml;

const SHIPPED: &str = include_str!("../assets/config/input.toml");

#[test]
fn shipped_input_map_parses_cleanly() {
    let parsed = parse_input_toml(SHIPPED);
    assert!(parsed.errors.is_empty(), "{:?}", parsed.errors);
    let map = parsed.input_map;
    for action in ["MoveUp", "MoveDown", "MoveLeft", "MoveRight", "ToggleInspector"] {
        assert!(map.name_to_id.contains_key(action), "missing {action}");
        assert!(map.bindings_for(action).next().is_some(), "{action} unbound");
    }
    // Arrow and WASD for every direction.
    assert_eq!(map.bindings_for("MoveUp").count(), 2);
    let chord = map.bindings_for("ToggleInspector").next().expect("chord");
    assert_eq!(chord.tokens.len(), 4);
}

#[test]
fn bad_entries_collect_errors_and_keep_the_rest() {
    let raw = r#"
[actions]
MoveUp = { description = "up" }
jump = {}

[bindings]
MoveUp = ["Key:ArrowUp", "Key:Bogus", "Key:KeyW+Key:KeyW"]
Undeclared = ["Key:Space"]
"#;
    let parsed = parse_input_toml(raw);
    let joined = parsed.errors.join("\n");
    assert!(joined.contains("jump"), "{joined}");
    assert!(joined.contains("Bogus"), "{joined}");
    assert!(joined.contains("Undeclared"), "{joined}");
    assert!(parsed.errors.len() >= 4, "{joined}");
    assert_eq!(parsed.input_map.bindings_for("MoveUp").count(), 1);
}
