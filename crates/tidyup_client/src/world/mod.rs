use avian3d::prelude::*;
use bevy::prelude::*;
use tidyup_core::level::{FLOOR_TOP, LevelLayout};

use crate::GameConfig;
use crate::app_state::AppState;

const FLOOR_SIZE: f32 = 40.0;
const FLOOR_THICKNESS: f32 = 1.0;
const FLOOR_COLOR: Color = Color::srgb(0.36, 0.55, 0.30);

/// Static layout of the level being played.
#[derive(Resource, Debug, Clone)]
pub struct Level(pub LevelLayout);

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_level)
            .add_systems(OnEnter(AppState::InGame), spawn_floor);
    }
}

fn load_level(mut commands: Commands, config: Res<GameConfig>) {
    let layout = config.preset.layout();
    info!(
        "Level '{}': {} items, {} bins",
        layout.name,
        layout.items.len(),
        layout.bins.len()
    );
    commands.insert_resource(Level(layout));
}

fn spawn_floor(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        StateScoped(AppState::InGame),
        RigidBody::Static,
        Collider::cuboid(FLOOR_SIZE, FLOOR_THICKNESS, FLOOR_SIZE),
        Mesh3d(meshes.add(Cuboid::new(FLOOR_SIZE, FLOOR_THICKNESS, FLOOR_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: FLOOR_COLOR,
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::from_xyz(0.0, FLOOR_TOP - FLOOR_THICKNESS / 2.0, 0.0),
    ));
}
