pub mod app_state;
pub mod avatar;
pub mod events;
pub mod litter;
pub mod physics;
pub mod player;
pub mod ui;
pub mod world;

use std::sync::Mutex;

use avian3d::prelude::PhysicsPlugins;
use bevy::prelude::*;
use tidyup_core::config::{ControllerConfig, OrbitSettings};
use tidyup_core::level::LevelPreset;

use app_state::AppState;
use events::EventsPlugin;

/// Level and tuning chosen at startup.
#[derive(Resource, Debug, Clone, Default)]
pub struct GameConfig {
    pub preset: LevelPreset,
    pub controller: ControllerConfig,
    pub orbit: OrbitSettings,
}

/// The client plugin composes all game-side functionality:
/// physics, level, avatar, camera, input and HUD.
pub struct ClientPlugin {
    config: GameConfig,
    event_plugins: Mutex<Vec<Box<dyn events::TidyPlugin>>>,
}

impl ClientPlugin {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            event_plugins: Mutex::new(Vec::new()),
        }
    }

    pub fn with_plugin(self, plugin: impl events::TidyPlugin) -> Self {
        if let Ok(mut plugins) = self.event_plugins.lock() {
            plugins.push(Box::new(plugin));
        }
        self
    }
}

impl Plugin for ClientPlugin {
    fn build(&self, app: &mut App) {
        let event_plugins = self
            .event_plugins
            .lock()
            .map(|mut plugins| plugins.drain(..).collect())
            .unwrap_or_default();

        app.insert_resource(self.config.clone())
            .init_state::<AppState>()
            .enable_state_scoped_entities::<AppState>()
            .add_plugins(PhysicsPlugins::default())
            .add_plugins(EventsPlugin::new_with(event_plugins))
            .add_plugins(world::WorldPlugin)
            .add_plugins(physics::BodyPlugin)
            .add_plugins(litter::LitterPlugin)
            .add_plugins(avatar::AvatarPlugin)
            .add_plugins(player::PlayerPlugin)
            .add_plugins(ui::UiPlugin)
            .add_systems(Startup, app_state::enter_game);
    }
}
