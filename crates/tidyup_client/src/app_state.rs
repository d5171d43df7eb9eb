use bevy::prelude::*;

#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppState {
    #[default]
    Loading,
    InGame,
}

pub fn enter_game(mut next_state: ResMut<NextState<AppState>>) {
    next_state.set(AppState::InGame);
}
