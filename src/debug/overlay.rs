use super::{DebugState, DebugStats};
use crate::app::flow::{SceneTag, ScreenFlow};
use crate::gameplay::player::{Player, PlayerInput, PlayerMotion};
use crate::interaction::inputmap::InputMap;
use bevy::prelude::*;

#[derive(Component)]
pub(crate) struct DebugOverlayText;

pub fn debug_overlay_spawn(mut commands: Commands) {
    commands.spawn((
        Name::new("inspector overlay"),
        Text::new(String::new()),
        TextFont {
            font_size: 14.0,
            ..Default::default()
        },
        TextColor(Color::srgb(0.75, 0.85, 0.95)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(4.0),
            left: Val::Px(6.0),
            ..Default::default()
        },
        GlobalZIndex(i32::MAX),
        DebugOverlayText,
    ));
}

pub(crate) fn debug_overlay_update(
    state: Res<DebugState>,
    stats: Res<DebugStats>,
    flow: Res<ScreenFlow>,
    axes: Res<PlayerInput>,
    input_map: Option<Res<InputMap>>,
    players: Query<(&Transform, &PlayerMotion, &SceneTag), With<Player>>,
    mut q_text: Query<&mut Text, With<DebugOverlayText>>,
) {
    let Ok(mut text) = q_text.single_mut() else {
        return;
    };
    if !state.overlay_visible {
        if !text.0.is_empty() {
            text.0.clear();
        }
        return;
    }
    let mut base = format!(
        "FPS {:.1} ft {:.1}ms | state {:?} scene {:?} pending {:?} done {} rejected {}",
        stats.fps,
        stats.frame_time_ms,
        flow.state(),
        flow.current_scene().map(|s| s.0),
        flow.pending().map(|p| p.target),
        flow.completed(),
        flow.rejected(),
    );
    base.push_str(&format!(
        "\nAXES v {:+.2} (→{:+.0}) h {:+.2} (→{:+.0})",
        axes.vertical, axes.desired_vertical, axes.horizontal, axes.desired_horizontal
    ));
    let current = flow.current_scene();
    if let Some((t, m, _)) = players.iter().find(|(_, _, tag)| Some(tag.0) == current) {
        base.push_str(&format!(
            "\nPLAYER pos ({:.2}, {:.2}, {:.2}) delta {:.3}",
            t.translation.x,
            t.translation.y,
            t.translation.z,
            m.last_delta.length()
        ));
    }
    if let Some(im) = input_map {
        let active = im.active_actions();
        if !active.is_empty() {
            base.push_str("\nINPUT: ");
            base.push_str(&active.join(" "));
        }
        if !im.attached {
            base.push_str("\nINPUT detached");
        }
    }
    if text.0 != base {
        text.0 = base;
    }
}
