use bevy::prelude::*;
use tidyup_core::controller::CharacterController;
use tidyup_core::input::InputFrame;
use tidyup_core::interaction::InteractionOutcome;

use crate::GameConfig;
use crate::events::{
    AvatarRespawnedEvent, ItemDepositedEvent, ItemDroppedEvent, ItemPickedUpEvent,
    LevelClearedEvent,
};
use crate::litter::{Litter, LitterItem};
use crate::physics::{AvatarBodyQuery, AvianBody, ItemBodyQuery, LitterBodies};
use crate::avatar::Avatar;
use crate::player::camera::OrbitCam;
use crate::world::Level;

#[derive(Resource)]
pub struct Controller(pub CharacterController);

/// Input sampled for the current frame.
#[derive(Resource, Default)]
pub struct FrameInput(pub InputFrame);

pub fn setup_controller(mut commands: Commands, level: Res<Level>, config: Res<GameConfig>) {
    info!(
        "Controller ready: walk {:.1}, run {:.1}, jump {:.2}",
        config.controller.walk_speed, config.controller.run_speed, config.controller.jump_force
    );
    commands.insert_resource(Controller(CharacterController::new(
        &level.0,
        config.controller,
        config.orbit,
    )));
}

#[allow(clippy::too_many_arguments)]
pub fn drive_controller(
    input: Res<FrameInput>,
    level: Res<Level>,
    mut controller: ResMut<Controller>,
    mut litter: ResMut<Litter>,
    mut avatar_query: AvatarBodyQuery,
    mut item_query: ItemBodyQuery,
    mut camera_query: Query<&mut Transform, (With<OrbitCam>, Without<Avatar>, Without<LitterItem>)>,
    mut ev_picked: EventWriter<ItemPickedUpEvent>,
    mut ev_dropped: EventWriter<ItemDroppedEvent>,
    mut ev_deposited: EventWriter<ItemDepositedEvent>,
    mut ev_respawned: EventWriter<AvatarRespawnedEvent>,
    mut ev_cleared: EventWriter<LevelClearedEvent>,
) {
    // Nothing to drive until the avatar body exists
    let Ok((transform, velocity, impulse, enabled)) = avatar_query.get_single_mut() else {
        return;
    };
    let mut avatar = AvianBody {
        transform,
        velocity,
        impulse: Some(impulse),
        enabled,
    };

    let fell_at = avatar.transform.translation;

    let Litter {
        ledger, entities, ..
    } = &mut *litter;
    let mut bodies = LitterBodies {
        entities: entities.as_slice(),
        query: &mut item_query,
    };

    let report = controller.0.tick(&input.0, &mut avatar, &mut bodies, ledger);
    let avatar_position = avatar.transform.translation;

    for outcome in &report.interactions {
        match *outcome {
            InteractionOutcome::PickedUp { item } => {
                info!("Picked up item {}", item);
                ev_picked.send(ItemPickedUpEvent {
                    item,
                    avatar: avatar_position,
                });
            }
            InteractionOutcome::Dropped { item, position } => {
                info!(
                    "Dropped item {} at ({:.1}, {:.1}, {:.1})",
                    item, position.x, position.y, position.z
                );
                ev_dropped.send(ItemDroppedEvent {
                    item,
                    position,
                    avatar: avatar_position,
                });
            }
            InteractionOutcome::Deposited { item, bin } => {
                let remaining = litter.remaining();
                info!("Deposited item {} in bin {} ({} left)", item, bin, remaining);
                ev_deposited.send(ItemDepositedEvent {
                    item,
                    bin,
                    avatar: avatar_position,
                    remaining,
                });
            }
            InteractionOutcome::Missed { item } => {
                debug!("Item {} body unavailable, interaction skipped", item);
            }
            InteractionOutcome::Nothing => {}
        }
    }

    if let Some(position) = report.respawned {
        warn!(
            "Avatar fell out of the level at ({:.1}, {:.1}, {:.1}), respawning",
            fell_at.x, fell_at.y, fell_at.z
        );
        ev_respawned.send(AvatarRespawnedEvent { fell_at, position });
    }

    if !litter.cleared && litter.ledger.all_removed() {
        litter.cleared = true;
        info!("Level '{}' cleared", level.0.name);
        ev_cleared.send(LevelClearedEvent {
            level: level.0.name,
            items: litter.ledger.total(),
        });
    }

    if let Ok(mut camera) = camera_query.get_single_mut() {
        *camera = Transform::from_translation(report.camera.position)
            .looking_at(report.camera.look_at, Vec3::Y);
    }
}
