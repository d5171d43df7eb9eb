pub mod camera;
pub mod controller;

use bevy::prelude::*;
use camera::{GameState, pause_on_focus_lost, sample_input, spawn_camera, toggle_pause};
use controller::{FrameInput, drive_controller, setup_controller};

use crate::app_state::AppState;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameState>()
            .init_resource::<FrameInput>()
            .add_systems(
                OnEnter(AppState::InGame),
                (setup_controller, spawn_camera).chain(),
            )
            .add_systems(
                Update,
                (
                    toggle_pause,
                    pause_on_focus_lost,
                    sample_input.after(toggle_pause).after(pause_on_focus_lost),
                    drive_controller.after(sample_input),
                )
                    .run_if(in_state(AppState::InGame)),
            );
    }
}
