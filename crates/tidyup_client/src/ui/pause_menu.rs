use bevy::prelude::*;

use crate::app_state::AppState;
use crate::player::camera::GameState;

const BUTTON_COLOR: Color = Color::srgb(0.3, 0.3, 0.3);
const BUTTON_HOVER: Color = Color::srgb(0.4, 0.4, 0.4);
const QUIT_COLOR: Color = Color::srgb(0.5, 0.15, 0.15);
const QUIT_HOVER: Color = Color::srgb(0.6, 0.2, 0.2);

#[derive(Component)]
pub struct PauseMenuRoot;

#[derive(Component)]
pub struct ResumeButton;

#[derive(Component)]
pub struct QuitButton;

fn menu_button(parent: &mut ChildBuilder, marker: impl Component, label: &str, color: Color) {
    parent
        .spawn((
            marker,
            Button,
            Node {
                width: Val::Px(250.0),
                height: Val::Px(50.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(color),
        ))
        .with_children(|btn| {
            btn.spawn((
                Text::new(label),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

pub fn spawn_pause_menu(mut commands: Commands) {
    commands
        .spawn((
            PauseMenuRoot,
            StateScoped(AppState::InGame),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(16.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            Visibility::Hidden,
            GlobalZIndex(10),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Paused"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    margin: UiRect::bottom(Val::Px(24.0)),
                    ..default()
                },
            ));
            menu_button(parent, ResumeButton, "Resume", BUTTON_COLOR);
            menu_button(parent, QuitButton, "Quit", QUIT_COLOR);
        });
}

pub fn show_hide_pause_menu(
    game_state: Res<GameState>,
    mut query: Query<&mut Visibility, With<PauseMenuRoot>>,
) {
    if !game_state.is_changed() {
        return;
    }
    for mut vis in &mut query {
        *vis = match *game_state {
            GameState::Paused => Visibility::Visible,
            GameState::Playing => Visibility::Hidden,
        };
    }
}

pub fn handle_resume_button(
    interaction: Query<&Interaction, (Changed<Interaction>, With<ResumeButton>)>,
    mut game_state: ResMut<GameState>,
) {
    for &inter in &interaction {
        if inter == Interaction::Pressed {
            *game_state = GameState::Playing;
        }
    }
}

pub fn handle_quit_button(
    interaction: Query<&Interaction, (Changed<Interaction>, With<QuitButton>)>,
    mut app_exit: EventWriter<AppExit>,
) {
    for &inter in &interaction {
        if inter == Interaction::Pressed {
            app_exit.send(AppExit::Success);
        }
    }
}

pub fn button_hover(
    mut query: Query<
        (&Interaction, &mut BackgroundColor, Option<&QuitButton>),
        (Changed<Interaction>, With<Button>),
    >,
) {
    for (interaction, mut bg, is_quit) in &mut query {
        let (base, hover) = if is_quit.is_some() {
            (QUIT_COLOR, QUIT_HOVER)
        } else {
            (BUTTON_COLOR, BUTTON_HOVER)
        };

        *bg = match interaction {
            Interaction::Hovered => BackgroundColor(hover),
            _ => BackgroundColor(base),
        };
    }
}
