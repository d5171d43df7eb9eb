use bevy::input::ButtonState;
use bevy::input::keyboard::KeyboardInput;
use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;
use tidyup_core::input::{InputFrame, MoveIntent};

use crate::app_state::AppState;
use crate::player::controller::{Controller, FrameInput};

/// Wheel "lines" are converted to the pixel units the zoom is tuned for.
const PIXELS_PER_LINE: f32 = 100.0;

const INTERACT_KEY: KeyCode = KeyCode::KeyE;

#[derive(Component)]
pub struct OrbitCam;

#[derive(Resource, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum GameState {
    #[default]
    Playing,
    Paused,
}

pub fn spawn_camera(mut commands: Commands, controller: Res<Controller>) {
    let camera = controller.0.camera();
    let look_at = controller.0.camera_forward() + camera.position();
    commands.spawn((
        OrbitCam,
        StateScoped(AppState::InGame),
        Camera3d::default(),
        Transform::from_translation(camera.position()).looking_at(look_at, Vec3::Y),
    ));
}

/// Snapshot the input devices into one [`InputFrame`]. Interact presses
/// come from key events, so a held key or OS key-repeat counts once.
pub fn sample_input(
    game_state: Res<GameState>,
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut key_events: EventReader<KeyboardInput>,
    mut controller: ResMut<Controller>,
    mut frame: ResMut<FrameInput>,
) {
    let interact_presses = key_events
        .read()
        .filter(|event| {
            event.key_code == INTERACT_KEY && event.state == ButtonState::Pressed && !event.repeat
        })
        .count() as u32;

    if *game_state != GameState::Playing {
        controller.0.set_dragging(false);
        frame.0 = InputFrame::default();
        return;
    }

    let dragging = mouse.pressed(MouseButton::Left);
    controller.0.set_dragging(dragging);

    let drag = if dragging {
        (mouse_motion.delta.x, mouse_motion.delta.y)
    } else {
        (0.0, 0.0)
    };

    let scroll = match mouse_scroll.unit {
        MouseScrollUnit::Line => mouse_scroll.delta.y * PIXELS_PER_LINE,
        MouseScrollUnit::Pixel => mouse_scroll.delta.y,
    };

    frame.0 = InputFrame {
        intent: MoveIntent {
            forward: keys.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]),
            backward: keys.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]),
            left: keys.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]),
            right: keys.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]),
            sprint: keys.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]),
            jump: keys.pressed(KeyCode::Space),
        },
        interact_presses,
        drag,
        // Scrolling up zooms in
        zoom: -scroll,
    };
}

pub fn toggle_pause(keys: Res<ButtonInput<KeyCode>>, mut game_state: ResMut<GameState>) {
    if !keys.just_pressed(KeyCode::Escape) {
        return;
    }
    *game_state = match *game_state {
        GameState::Playing => GameState::Paused,
        GameState::Paused => GameState::Playing,
    };
    info!("Game {:?}", *game_state);
}

pub fn pause_on_focus_lost(
    mut game_state: ResMut<GameState>,
    mut focus_events: EventReader<bevy::window::WindowFocused>,
) {
    for event in focus_events.read() {
        if !event.focused && *game_state != GameState::Paused {
            *game_state = GameState::Paused;
            info!("Game paused (focus lost)");
        }
    }
}

#[cfg(test)]
mod tests {
    use bevy::input::keyboard::{Key, NativeKey};
    use tidyup_core::config::{ControllerConfig, OrbitSettings};
    use tidyup_core::controller::CharacterController;
    use tidyup_core::level::LevelPreset;

    use super::*;

    fn input_app() -> App {
        let mut app = App::new();
        app.add_event::<KeyboardInput>()
            .init_resource::<GameState>()
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<ButtonInput<MouseButton>>()
            .init_resource::<AccumulatedMouseMotion>()
            .init_resource::<AccumulatedMouseScroll>()
            .init_resource::<FrameInput>()
            .insert_resource(Controller(CharacterController::new(
                &LevelPreset::Meadow.layout(),
                ControllerConfig::default(),
                OrbitSettings::default(),
            )))
            .add_systems(Update, sample_input);
        app
    }

    fn key_event(key_code: KeyCode, state: ButtonState, repeat: bool) -> KeyboardInput {
        KeyboardInput {
            key_code,
            logical_key: Key::Unidentified(NativeKey::Unidentified),
            state,
            repeat,
            window: Entity::PLACEHOLDER,
        }
    }

    fn presses(app: &App) -> u32 {
        app.world().resource::<FrameInput>().0.interact_presses
    }

    #[test]
    fn key_repeat_counts_as_one_press() {
        let mut app = input_app();
        app.world_mut()
            .send_event(key_event(INTERACT_KEY, ButtonState::Pressed, false));
        app.world_mut()
            .send_event(key_event(INTERACT_KEY, ButtonState::Pressed, true));
        app.world_mut()
            .send_event(key_event(INTERACT_KEY, ButtonState::Pressed, true));
        app.update();
        assert_eq!(presses(&app), 1);

        // Still held, no new events
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(INTERACT_KEY);
        app.update();
        assert_eq!(presses(&app), 0);
    }

    #[test]
    fn releases_and_other_keys_are_not_presses() {
        let mut app = input_app();
        app.world_mut()
            .send_event(key_event(INTERACT_KEY, ButtonState::Released, false));
        app.world_mut()
            .send_event(key_event(KeyCode::KeyQ, ButtonState::Pressed, false));
        app.update();
        assert_eq!(presses(&app), 0);

        app.world_mut()
            .send_event(key_event(INTERACT_KEY, ButtonState::Pressed, false));
        app.world_mut()
            .send_event(key_event(INTERACT_KEY, ButtonState::Released, false));
        app.world_mut()
            .send_event(key_event(INTERACT_KEY, ButtonState::Pressed, false));
        app.update();
        assert_eq!(presses(&app), 2);
    }

    #[test]
    fn paused_frames_are_empty() {
        let mut app = input_app();
        *app.world_mut().resource_mut::<GameState>() = GameState::Paused;
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyW);
        app.world_mut()
            .send_event(key_event(INTERACT_KEY, ButtonState::Pressed, false));
        app.update();

        let frame = app.world().resource::<FrameInput>().0;
        assert_eq!(frame.interact_presses, 0);
        assert!(!frame.intent.forward);

        // The press made while paused is not replayed after resuming
        *app.world_mut().resource_mut::<GameState>() = GameState::Playing;
        app.update();
        assert_eq!(presses(&app), 0);
        assert!(app.world().resource::<FrameInput>().0.intent.forward);
    }
}
