use avian3d::prelude::*;
use bevy::prelude::*;
use tidyup_core::level::ItemLedger;

use crate::app_state::AppState;
use crate::events::ItemDepositedEvent;
use crate::physics::BodyEnabled;
use crate::world::Level;

const ITEM_SIZE: f32 = 0.25;
const ITEM_COLOR: Color = Color::srgb(0.85, 0.55, 0.15);
const BIN_RADIUS: f32 = 0.35;
const BIN_HEIGHT: f32 = 0.66;
const BIN_COLOR: Color = Color::srgb(0.25, 0.35, 0.40);

#[derive(Component)]
pub struct LitterItem;

#[derive(Component)]
pub struct Bin;

/// Item registry for the running level: removed flags plus the entity that
/// owns each item's body.
#[derive(Resource, Debug, Clone, Default)]
pub struct Litter {
    pub ledger: ItemLedger,
    pub entities: Vec<Entity>,
    pub cleared: bool,
}

impl Litter {
    pub fn remaining(&self) -> usize {
        self.ledger.total() - self.ledger.removed_count()
    }
}

pub struct LitterPlugin;

impl Plugin for LitterPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::InGame), spawn_litter)
            .add_systems(
                Update,
                despawn_deposited.run_if(in_state(AppState::InGame)),
            );
    }
}

fn spawn_litter(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    level: Res<Level>,
) {
    let item_mesh = meshes.add(Cuboid::new(ITEM_SIZE, ITEM_SIZE, ITEM_SIZE));
    let item_mat = materials.add(StandardMaterial {
        base_color: ITEM_COLOR,
        ..default()
    });
    let bin_mesh = meshes.add(Cylinder::new(BIN_RADIUS, BIN_HEIGHT));
    let bin_mat = materials.add(StandardMaterial {
        base_color: BIN_COLOR,
        metallic: 0.4,
        ..default()
    });

    let entities = level
        .0
        .items
        .iter()
        .map(|&position| {
            commands
                .spawn((
                    LitterItem,
                    StateScoped(AppState::InGame),
                    RigidBody::Dynamic,
                    Collider::cuboid(ITEM_SIZE, ITEM_SIZE, ITEM_SIZE),
                    SleepingDisabled,
                    LinearVelocity::default(),
                    BodyEnabled::default(),
                    Mesh3d(item_mesh.clone()),
                    MeshMaterial3d(item_mat.clone()),
                    Transform::from_translation(position),
                    Visibility::Visible,
                ))
                .id()
        })
        .collect();

    for &position in &level.0.bins {
        commands.spawn((
            Bin,
            StateScoped(AppState::InGame),
            RigidBody::Static,
            Collider::cylinder(BIN_RADIUS, BIN_HEIGHT),
            Mesh3d(bin_mesh.clone()),
            MeshMaterial3d(bin_mat.clone()),
            Transform::from_translation(position),
        ));
    }

    commands.insert_resource(Litter {
        ledger: ItemLedger::new(level.0.items.len()),
        entities,
        cleared: false,
    });
}

fn despawn_deposited(
    mut commands: Commands,
    mut ev_deposited: EventReader<ItemDepositedEvent>,
    litter: Res<Litter>,
) {
    for event in ev_deposited.read() {
        let Some(&entity) = litter.entities.get(event.item) else {
            continue;
        };
        if let Some(mut entity_commands) = commands.get_entity(entity) {
            entity_commands.despawn_recursive();
        }
    }
}
