pub mod debug;
pub mod hud;
pub mod pause_menu;

use bevy::prelude::*;
use debug::{DebugOverlayVisible, spawn_debug_overlay, toggle_debug_overlay, update_debug_overlay};
use hud::{spawn_hud, update_progress, update_prompt};
use pause_menu::{
    button_hover, handle_quit_button, handle_resume_button, show_hide_pause_menu,
    spawn_pause_menu,
};

use crate::app_state::AppState;
use crate::player::controller::{Controller, drive_controller};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugOverlayVisible>()
            .add_systems(
                OnEnter(AppState::InGame),
                (spawn_hud, spawn_pause_menu, spawn_debug_overlay),
            )
            .add_systems(
                Update,
                (
                    show_hide_pause_menu,
                    handle_resume_button,
                    handle_quit_button,
                    button_hover,
                    toggle_debug_overlay,
                )
                    .run_if(in_state(AppState::InGame)),
            )
            .add_systems(
                Update,
                (update_prompt, update_progress, update_debug_overlay)
                    .after(drive_controller)
                    .run_if(in_state(AppState::InGame))
                    .run_if(resource_exists::<Controller>),
            );
    }
}
