use bevy::prelude::*;

use crate::app_state::AppState;
use crate::litter::Litter;
use crate::player::controller::Controller;

const HUD_FONT_SIZE: f32 = 20.0;
const PROMPT_COLOR: Color = Color::srgb(1.0, 0.95, 0.6);
const CLEARED_COLOR: Color = Color::srgb(0.5, 1.0, 0.5);

#[derive(Component)]
pub struct PromptText;

#[derive(Component)]
pub struct ProgressText;

pub fn spawn_hud(mut commands: Commands) {
    // Progress counter, top right
    commands.spawn((
        ProgressText,
        StateScoped(AppState::InGame),
        Text::new(""),
        TextFont {
            font_size: HUD_FONT_SIZE,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            right: Val::Px(14.0),
            ..default()
        },
    ));

    // Interaction prompt, bottom center
    commands
        .spawn((
            StateScoped(AppState::InGame),
            Node {
                width: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                bottom: Val::Px(60.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                PromptText,
                Text::new(""),
                TextFont {
                    font_size: HUD_FONT_SIZE,
                    ..default()
                },
                TextColor(PROMPT_COLOR),
            ));
        });
}

pub fn update_prompt(
    controller: Res<Controller>,
    mut query: Query<&mut Text, With<PromptText>>,
) {
    let prompt = controller.0.snapshot().prompt.text();
    for mut text in &mut query {
        if text.0 != prompt {
            **text = prompt.to_string();
        }
    }
}

pub fn update_progress(
    litter: Option<Res<Litter>>,
    mut query: Query<(&mut Text, &mut TextColor), With<ProgressText>>,
) {
    let Some(litter) = litter else {
        return;
    };
    if !litter.is_changed() {
        return;
    }

    let total = litter.ledger.total();
    for (mut text, mut color) in &mut query {
        if litter.cleared {
            **text = format!("All {} items cleared!", total);
            color.0 = CLEARED_COLOR;
        } else {
            **text = format!("Litter: {}/{}", litter.ledger.removed_count(), total);
            color.0 = Color::WHITE;
        }
    }
}
