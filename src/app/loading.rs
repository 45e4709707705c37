use bevy::prelude::*;
use bevy::render::camera::ClearColorConfig;

/// Full-screen "Loading..." card shown while a transition waits for its scene.
#[derive(Component)]
pub struct LoadingOverlay;

/// Persistent 2D camera that renders all UI on top of the current scene camera.
#[derive(Component)]
pub struct OverlayCamera;

pub fn spawn_overlay_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("overlay camera"),
        OverlayCamera,
        Camera2d,
        Camera {
            order: 10,
            clear_color: ClearColorConfig::None,
            ..default()
        },
        IsDefaultUiCamera,
    ));
}

pub fn spawn_loading_overlay(mut commands: Commands) {
    commands
        .spawn((
            Name::new("loading overlay"),
            LoadingOverlay,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgb(0.02, 0.02, 0.05)),
            GlobalZIndex(i32::MAX - 1),
            Visibility::Hidden,
        ))
        .with_children(|p| {
            p.spawn((Text::new("Loading..."), TextColor(Color::WHITE)));
        });
}

pub fn set_loading_visible(overlay: &mut OverlayVisibility, visible: bool) {
    for mut vis in overlay.iter_mut() {
        vis.set_if_neq(if visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        });
    }
}

/// Overlay visibility, disjoint from scene entities so both can be mutated in one system.
pub type OverlayVisibility<'w, 's> = Query<
    'w,
    's,
    &'static mut Visibility,
    (With<LoadingOverlay>, Without<crate::app::flow::SceneTag>),
>;
