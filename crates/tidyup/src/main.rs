use bevy::prelude::*;
use clap::{Parser, ValueEnum};
use tidyup_client::{ClientPlugin, GameConfig};
use tidyup_core::level::LevelPreset;
use tidyup_macros::tidy_plugin;

use tidyup_client::events;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LevelArg {
    Meadow,
    Plaza,
    Courtyard,
}

impl From<LevelArg> for LevelPreset {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Meadow => LevelPreset::Meadow,
            LevelArg::Plaza => LevelPreset::Plaza,
            LevelArg::Courtyard => LevelPreset::Courtyard,
        }
    }
}

#[derive(Parser)]
#[command(name = "tidyup")]
#[command(about = "Tidyup: walk around, pick up litter, put it in the bins")]
struct Args {
    /// Level to play
    #[arg(long, value_enum, default_value_t = LevelArg::Meadow)]
    level: LevelArg,

    /// Walking speed in units per second
    #[arg(long)]
    walk_speed: Option<f32>,

    /// Running speed in units per second (Shift held)
    #[arg(long)]
    run_speed: Option<f32>,

    /// Upward impulse applied on jump
    #[arg(long)]
    jump_force: Option<f32>,
}

impl Args {
    fn game_config(&self) -> GameConfig {
        let mut config = GameConfig {
            preset: self.level.into(),
            ..default()
        };
        if let Some(speed) = self.walk_speed {
            config.controller.walk_speed = speed;
        }
        if let Some(speed) = self.run_speed {
            config.controller.run_speed = speed;
        }
        if let Some(force) = self.jump_force {
            config.controller.jump_force = force;
        }
        config
    }
}

struct LogPlugin;

#[tidy_plugin]
impl LogPlugin {
    #[Event::ItemPickedUp]
    fn on_pick_up(&self, event: &events::ItemPickedUpEvent) {
        info!(
            "Avatar at ({:.1}, {:.1}, {:.1}) picked up item {}",
            event.avatar.x, event.avatar.y, event.avatar.z, event.item
        );
    }

    #[Event::ItemDropped]
    fn on_drop(&self, event: &events::ItemDroppedEvent) {
        info!(
            "Item {} dropped at ({:.1}, {:.1}, {:.1})",
            event.item, event.position.x, event.position.y, event.position.z
        );
    }

    #[Event::ItemDeposited]
    fn on_deposit(&self, event: &events::ItemDepositedEvent) {
        info!(
            "Item {} went into bin {}, {} left",
            event.item, event.bin, event.remaining
        );
    }

    #[Event::AvatarRespawned]
    fn on_respawn(&self, event: &events::AvatarRespawnedEvent) {
        info!(
            "Avatar fell at y={:.1}, back at ({:.1}, {:.1}, {:.1})",
            event.fell_at.y, event.position.x, event.position.y, event.position.z
        );
    }

    #[Event::LevelCleared]
    fn on_cleared(&self, event: &events::LevelClearedEvent) {
        info!("{} cleared, {} items binned", event.level, event.items);
    }
}

fn main() {
    let args = Args::parse();
    let config = args.game_config();

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Tidyup".into(),
            ..default()
        }),
        ..default()
    }));

    app.add_plugins(ClientPlugin::new(config).with_plugin(LogPlugin));

    app.add_systems(Startup, setup_lighting);
    app.run();
}

fn setup_lighting(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: 12000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -0.8, 0.4, 0.0)),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 250.0,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_meadow_with_stock_tuning() {
        let args = Args::parse_from(["tidyup"]);
        let config = args.game_config();
        assert_eq!(config.preset, LevelPreset::Meadow);
        assert_eq!(config.controller, GameConfig::default().controller);
    }

    #[test]
    fn overrides_speeds_and_level() {
        let args = Args::parse_from([
            "tidyup",
            "--level",
            "courtyard",
            "--run-speed",
            "5.5",
            "--jump-force",
            "0.8",
        ]);
        let config = args.game_config();
        assert_eq!(config.preset, LevelPreset::Courtyard);
        assert_eq!(config.controller.run_speed, 5.5);
        assert_eq!(config.controller.jump_force, 0.8);
        assert_eq!(config.controller.walk_speed, 2.0);
    }
}
