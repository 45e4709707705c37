//! One parameterized builder for every screen: camera, clear colour and a single
//! navigation button. Scenes are built hidden and revealed at swap time.

use bevy::prelude::*;
use bevy::render::camera::ClearColorConfig;

use super::flow::{SceneId, SceneTag};
use super::state::AppState;
use crate::core::config::{rgb, GameConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraKind {
    /// Static camera at the origin looking toward -Z.
    Fixed,
    /// Camera lives on the player rig (spawned by gameplay).
    PlayerRig,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    BottomCenter,
    BottomRight,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub width: Val,
    pub height: Val,
    pub anchor: Anchor,
    /// Distance from the anchored edge (bottom).
    pub inset_y: Val,
    /// Distance from the anchored edge (right), ignored for centred anchors.
    pub inset_x: Val,
    pub target: AppState,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenSpec {
    pub state: AppState,
    pub clear_color: Color,
    pub camera: CameraKind,
    pub button: ButtonSpec,
}

impl ScreenSpec {
    pub fn for_state(state: AppState, cfg: &GameConfig) -> Option<Self> {
        let bottom_bar = |name, label, target| ButtonSpec {
            name,
            label,
            width: Val::Percent(20.0),
            height: Val::Px(40.0),
            anchor: Anchor::BottomCenter,
            inset_y: Val::Px(14.0),
            inset_x: Val::Px(0.0),
            target,
        };
        let spec = match state {
            AppState::Boot => return None,
            AppState::Start => Self {
                state,
                clear_color: Color::BLACK,
                camera: CameraKind::Fixed,
                button: bottom_bar("start", "PLAY", AppState::Cutscene),
            },
            AppState::Cutscene => Self {
                state,
                clear_color: Color::BLACK,
                camera: CameraKind::Fixed,
                button: ButtonSpec {
                    name: "next",
                    label: "NEXT",
                    width: Val::Px(64.0),
                    height: Val::Px(64.0),
                    anchor: Anchor::BottomRight,
                    inset_y: Val::Percent(3.0),
                    inset_x: Val::Percent(12.0),
                    target: AppState::Game,
                },
            },
            AppState::Game => Self {
                state,
                clear_color: rgb(cfg.environment.clear_color),
                camera: CameraKind::PlayerRig,
                button: bottom_bar("lose", "LOSE", AppState::Lose),
            },
            AppState::Lose => Self {
                state,
                clear_color: Color::BLACK,
                camera: CameraKind::Fixed,
                button: ButtonSpec {
                    name: "mainmenu",
                    label: "MAIN MENU",
                    anchor: Anchor::Center,
                    inset_y: Val::Px(0.0),
                    ..bottom_bar("mainmenu", "MAIN MENU", AppState::Start)
                },
            },
        };
        Some(spec)
    }
}

/// Marks the screen's navigation button.
#[derive(Component, Debug, Clone, Copy)]
pub struct NavButton {
    pub target: AppState,
}

/// Root UI node of a screen.
#[derive(Component)]
pub struct ScreenUiRoot;

/// Camera owned by a scene; enabled when the scene becomes current.
#[derive(Component)]
pub struct SceneCamera;

/// Spawns camera (for fixed screens) and UI. Everything starts hidden/inactive.
pub fn build_screen(commands: &mut Commands, scene: SceneId, spec: &ScreenSpec, font: Handle<Font>) {
    let tag = SceneTag(scene);
    if spec.camera == CameraKind::Fixed {
        commands.spawn((
            Name::new(format!("{:?} camera", spec.state)),
            tag,
            SceneCamera,
            Camera3d::default(),
            Camera {
                is_active: false,
                clear_color: ClearColorConfig::Custom(spec.clear_color),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 0.0).looking_at(Vec3::NEG_Z, Vec3::Y),
        ));
    }

    let b = &spec.button;
    let (justify, align) = match b.anchor {
        Anchor::BottomCenter => (JustifyContent::Center, AlignItems::FlexEnd),
        Anchor::BottomRight => (JustifyContent::FlexEnd, AlignItems::FlexEnd),
        Anchor::Center => (JustifyContent::Center, AlignItems::Center),
    };
    let padding = match b.anchor {
        Anchor::Center => UiRect::default(),
        Anchor::BottomCenter => UiRect::bottom(b.inset_y),
        Anchor::BottomRight => UiRect {
            right: b.inset_x,
            bottom: b.inset_y,
            ..default()
        },
    };

    commands
        .spawn((
            Name::new(format!("{:?} ui", spec.state)),
            tag,
            ScreenUiRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                justify_content: justify,
                align_items: align,
                padding,
                ..default()
            },
            Visibility::Hidden,
        ))
        .with_children(|p| {
            p.spawn((
                Name::new(b.name),
                Button,
                NavButton { target: b.target },
                Node {
                    width: b.width,
                    height: b.height,
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    ..default()
                },
                BackgroundColor(Color::NONE),
            ))
            .with_children(|btn| {
                btn.spawn((
                    Text::new(b.label),
                    TextFont {
                        font: font.clone(),
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_screen_has_a_spec_and_boot_has_none() {
        let cfg = GameConfig::default();
        assert!(ScreenSpec::for_state(AppState::Boot, &cfg).is_none());
        let targets: Vec<_> = AppState::SCREENS
            .iter()
            .map(|s| ScreenSpec::for_state(*s, &cfg).unwrap().button.target)
            .collect();
        assert_eq!(
            targets,
            vec![AppState::Cutscene, AppState::Game, AppState::Lose, AppState::Start]
        );
    }

    #[test]
    fn only_game_uses_player_rig() {
        let cfg = GameConfig::default();
        for s in AppState::SCREENS {
            let spec = ScreenSpec::for_state(s, &cfg).unwrap();
            assert_eq!(spec.camera == CameraKind::PlayerRig, s == AppState::Game);
        }
    }

    #[test]
    fn lose_button_is_centred_main_menu() {
        let spec = ScreenSpec::for_state(AppState::Lose, &GameConfig::default()).unwrap();
        assert_eq!(spec.button.label, "MAIN MENU");
        assert_eq!(spec.button.anchor, Anchor::Center);
        assert_eq!(spec.button.width, Val::Percent(20.0));
    }
}
