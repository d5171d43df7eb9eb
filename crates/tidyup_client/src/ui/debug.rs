use bevy::prelude::*;
use tidyup_core::interaction::CarryState;
use tidyup_core::proximity::Nearest;

use crate::app_state::AppState;
use crate::avatar::Avatar;
use crate::player::controller::Controller;

#[derive(Component)]
pub struct DebugOverlay;

#[derive(Component)]
pub struct DebugOverlayRoot;

#[derive(Resource, Default)]
pub struct DebugOverlayVisible(pub bool);

pub fn spawn_debug_overlay(mut commands: Commands, visible: Res<DebugOverlayVisible>) {
    let visibility = if visible.0 {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
    commands
        .spawn((
            DebugOverlayRoot,
            StateScoped(AppState::InGame),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                left: Val::Px(10.0),
                ..default()
            },
            visibility,
        ))
        .with_children(|parent| {
            parent.spawn((
                DebugOverlay,
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

pub fn toggle_debug_overlay(
    keys: Res<ButtonInput<KeyCode>>,
    mut visible: ResMut<DebugOverlayVisible>,
    mut query: Query<&mut Visibility, With<DebugOverlayRoot>>,
) {
    if keys.just_pressed(KeyCode::F3) {
        visible.0 = !visible.0;
        for mut vis in &mut query {
            *vis = if visible.0 {
                Visibility::Visible
            } else {
                Visibility::Hidden
            };
        }
    }
}

fn describe(nearest: Nearest) -> String {
    match nearest.index {
        Some(index) => format!("#{} at {:.2}", index, nearest.distance),
        None => "none".to_string(),
    }
}

pub fn update_debug_overlay(
    visible: Res<DebugOverlayVisible>,
    controller: Res<Controller>,
    avatar_query: Query<&Transform, With<Avatar>>,
    mut text_query: Query<&mut Text, With<DebugOverlay>>,
) {
    if !visible.0 {
        return;
    }

    let Ok(transform) = avatar_query.get_single() else {
        return;
    };

    let pos = transform.translation;
    let snapshot = controller.0.snapshot();
    let camera = controller.0.camera();
    let carry = match snapshot.carry {
        CarryState::Idle => "nothing".to_string(),
        CarryState::Carrying(item) => format!("item #{}", item),
    };

    for mut text in &mut text_query {
        **text = format!(
            "XYZ: {:.2} / {:.2} / {:.2}\nFacing: {:.1}\u{b0}  Grounded: {}\nClip: {}\nCarrying: {}\nNearest item: {}\nNearest bin: {}\nCamera: yaw {:.1}\u{b0} pitch {:.1}\u{b0} dist {:.1}",
            pos.x,
            pos.y,
            pos.z,
            snapshot.facing.to_degrees(),
            snapshot.grounded,
            snapshot.animation.clip_name(),
            carry,
            describe(snapshot.proximity.item),
            describe(snapshot.proximity.bin),
            camera.yaw.to_degrees(),
            camera.pitch.to_degrees(),
            camera.distance,
        );
    }
}
