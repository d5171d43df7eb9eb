use std::f32::consts::PI;

use avian3d::prelude::*;
use bevy::prelude::*;
use tidyup_core::animation::AnimationState;

use crate::app_state::AppState;
use crate::physics::BodyEnabled;
use crate::player::controller::{Controller, drive_controller};
use crate::world::Level;

// --- Colors ---

const SKIN_COLOR: Color = Color::srgb(0.87, 0.72, 0.58);
const SHIRT_COLOR: Color = Color::srgb(0.30, 0.55, 0.78);
const PANTS_COLOR: Color = Color::srgb(0.35, 0.30, 0.25);
const SHOE_COLOR: Color = Color::srgb(0.25, 0.20, 0.15);
const CARRIED_COLOR: Color = Color::srgb(0.85, 0.55, 0.15);

// --- Body ---

const CAPSULE_RADIUS: f32 = 0.15;
const CAPSULE_LENGTH: f32 = 0.16;
/// Gives the avatar roughly 0.1 kg, so the jump impulse launches it about a metre.
const CAPSULE_DENSITY: f32 = 4.0;
const MODEL_SCALE: f32 = 0.26;

// --- Animation ---

const WALK_SWING_SPEED: f32 = 10.0;
const RUN_SWING_SPEED: f32 = 16.0;
const RUN_AMPLITUDE: f32 = 1.4;
const ARM_SWING_ANGLE: f32 = 0.6;
const LEG_SWING_ANGLE: f32 = 0.5;
const LOWER_BEND_ANGLE: f32 = 0.3;
const SWING_LERP_SPEED: f32 = 8.0;

// --- Components ---

/// The player's physics body.
#[derive(Component)]
pub struct Avatar;

/// Visual model under the body. Rotates with the smoothed facing; the
/// body itself never rotates.
#[derive(Component)]
pub struct AvatarModel;

#[derive(Component)]
pub struct CarriedItemDisplay;

#[derive(Component, Clone, Copy, PartialEq, Eq)]
pub enum BodyPart {
    Head,
    Torso,
    LeftUpperArm,
    RightUpperArm,
    LeftUpperLeg,
    LeftLowerLeg,
    RightUpperLeg,
    RightLowerLeg,
}

#[derive(Component, Default)]
pub struct AvatarAnimation {
    pub clip: AnimationState,
    pub walk_phase: f32,
    pub swing_amplitude: f32,
}

// --- Plugin ---

pub struct AvatarPlugin;

impl Plugin for AvatarPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::InGame), spawn_avatar)
            .add_systems(
                Update,
                (
                    sync_avatar_facing.after(drive_controller),
                    select_clip.after(drive_controller),
                    animate_avatar.after(select_clip),
                    update_carried_display.after(drive_controller),
                )
                    .run_if(in_state(AppState::InGame))
                    .run_if(resource_exists::<Controller>),
            );
    }
}

// --- Spawn ---

fn spawn_avatar(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    level: Res<Level>,
) {
    let mut material = |color: Color| {
        materials.add(StandardMaterial {
            base_color: color,
            ..default()
        })
    };
    let skin_mat = material(SKIN_COLOR);
    let shirt_mat = material(SHIRT_COLOR);
    let pants_mat = material(PANTS_COLOR);
    let shoe_mat = material(SHOE_COLOR);
    let carried_mat = material(CARRIED_COLOR);

    let head_mesh = meshes.add(Cuboid::new(0.50, 0.50, 0.50));
    let nose_mesh = meshes.add(Cuboid::new(0.10, 0.10, 0.08));
    let torso_mesh = meshes.add(Cuboid::new(0.60, 0.55, 0.30));
    let arm_mesh = meshes.add(Cuboid::new(0.20, 0.55, 0.20));
    let upper_leg_mesh = meshes.add(Cuboid::new(0.25, 0.35, 0.25));
    let lower_leg_mesh = meshes.add(Cuboid::new(0.22, 0.35, 0.22));
    let carried_mesh = meshes.add(Cuboid::new(0.25, 0.25, 0.25));

    let feet = -(CAPSULE_RADIUS + CAPSULE_LENGTH / 2.0);

    commands
        .spawn((
            Avatar,
            StateScoped(AppState::InGame),
            RigidBody::Dynamic,
            Collider::capsule(CAPSULE_RADIUS, CAPSULE_LENGTH),
            ColliderDensity(CAPSULE_DENSITY),
            LockedAxes::ROTATION_LOCKED,
            SleepingDisabled,
            LinearVelocity::default(),
            ExternalImpulse::default(),
            BodyEnabled::default(),
            Transform::from_translation(level.0.spawn_point),
            Visibility::Visible,
        ))
        .with_children(|body| {
            body.spawn((
                AvatarModel,
                AvatarAnimation::default(),
                Transform::from_xyz(0.0, feet, 0.0).with_scale(Vec3::splat(MODEL_SCALE)),
                Visibility::Inherited,
            ))
            .with_children(|root| {
                root.spawn((
                    BodyPart::Torso,
                    Mesh3d(torso_mesh),
                    MeshMaterial3d(shirt_mat.clone()),
                    Transform::from_xyz(0.0, 0.975, 0.0),
                ));

                // Head pivots at the neck; the nose marks the front (+z)
                root.spawn((BodyPart::Head, Transform::from_xyz(0.0, 1.30, 0.0), Visibility::Inherited))
                    .with_children(|head| {
                        head.spawn((
                            Mesh3d(head_mesh),
                            MeshMaterial3d(skin_mat.clone()),
                            Transform::from_xyz(0.0, 0.25, 0.0),
                        ));
                        head.spawn((
                            Mesh3d(nose_mesh),
                            MeshMaterial3d(skin_mat.clone()),
                            Transform::from_xyz(0.0, 0.22, 0.28),
                        ));
                    });

                for (part, x) in [(BodyPart::LeftUpperArm, 0.40), (BodyPart::RightUpperArm, -0.40)] {
                    root.spawn((part, Transform::from_xyz(x, 1.25, 0.0), Visibility::Inherited))
                        .with_children(|shoulder| {
                            shoulder.spawn((
                                Mesh3d(arm_mesh.clone()),
                                MeshMaterial3d(shirt_mat.clone()),
                                Transform::from_xyz(0.0, -0.275, 0.0),
                            ));
                        });
                }

                for (upper, lower, x) in [
                    (BodyPart::LeftUpperLeg, BodyPart::LeftLowerLeg, 0.15),
                    (BodyPart::RightUpperLeg, BodyPart::RightLowerLeg, -0.15),
                ] {
                    root.spawn((upper, Transform::from_xyz(x, 0.70, 0.0), Visibility::Inherited))
                        .with_children(|hip| {
                            hip.spawn((
                                Mesh3d(upper_leg_mesh.clone()),
                                MeshMaterial3d(pants_mat.clone()),
                                Transform::from_xyz(0.0, -0.175, 0.0),
                            ));
                            hip.spawn((lower, Transform::from_xyz(0.0, -0.35, 0.0), Visibility::Inherited))
                                .with_children(|knee| {
                                    knee.spawn((
                                        Mesh3d(lower_leg_mesh.clone()),
                                        MeshMaterial3d(shoe_mat.clone()),
                                        Transform::from_xyz(0.0, -0.175, 0.0),
                                    ));
                                });
                        });
                }

                // Held in front of the chest while carrying
                root.spawn((
                    CarriedItemDisplay,
                    Mesh3d(carried_mesh),
                    MeshMaterial3d(carried_mat),
                    Transform::from_xyz(0.0, 0.95, 0.55).with_scale(Vec3::splat(0.6 / MODEL_SCALE)),
                    Visibility::Hidden,
                ));
            });
        });
}

// --- Sync systems ---

fn sync_avatar_facing(
    controller: Res<Controller>,
    mut model_query: Query<&mut Transform, With<AvatarModel>>,
) {
    let Ok(mut transform) = model_query.get_single_mut() else {
        return;
    };
    transform.rotation = Quat::from_rotation_y(controller.0.snapshot().facing);
}

fn select_clip(controller: Res<Controller>, mut query: Query<&mut AvatarAnimation>) {
    let clip = controller.0.snapshot().animation;
    for mut anim in &mut query {
        if anim.clip != clip {
            debug!("Avatar clip: {}", clip.clip_name());
            anim.clip = clip;
        }
    }
}

// --- Animation ---

fn animate_avatar(
    time: Res<Time>,
    mut avatar_query: Query<&mut AvatarAnimation>,
    mut parts_query: Query<(&BodyPart, &mut Transform)>,
) {
    let Ok(mut anim) = avatar_query.get_single_mut() else {
        return;
    };

    let dt = time.delta_secs();

    let (target_amplitude, swing_speed) = match anim.clip {
        AnimationState::Idle => (0.0, 0.0),
        AnimationState::Walk => (1.0, WALK_SWING_SPEED),
        AnimationState::Run => (RUN_AMPLITUDE, RUN_SWING_SPEED),
    };
    anim.swing_amplitude += (target_amplitude - anim.swing_amplitude) * (SWING_LERP_SPEED * dt).min(1.0);
    anim.walk_phase = (anim.walk_phase + swing_speed * dt) % (2.0 * PI);

    let phase = anim.walk_phase;
    let amp = anim.swing_amplitude;

    let left_arm_angle = phase.sin() * ARM_SWING_ANGLE * amp;
    let right_arm_angle = (phase + PI).sin() * ARM_SWING_ANGLE * amp;
    let left_leg_angle = (phase + PI).sin() * LEG_SWING_ANGLE * amp;
    let right_leg_angle = phase.sin() * LEG_SWING_ANGLE * amp;

    let left_lower_leg_bend = (left_leg_angle.max(0.0) / LEG_SWING_ANGLE) * LOWER_BEND_ANGLE * amp;
    let right_lower_leg_bend = (right_leg_angle.max(0.0) / LEG_SWING_ANGLE) * LOWER_BEND_ANGLE * amp;

    for (part, mut transform) in &mut parts_query {
        let angle = match part {
            BodyPart::LeftUpperArm => left_arm_angle,
            BodyPart::RightUpperArm => right_arm_angle,
            BodyPart::LeftUpperLeg => left_leg_angle,
            BodyPart::RightUpperLeg => right_leg_angle,
            BodyPart::LeftLowerLeg => left_lower_leg_bend,
            BodyPart::RightLowerLeg => right_lower_leg_bend,
            BodyPart::Head | BodyPart::Torso => continue,
        };
        transform.rotation = Quat::from_rotation_x(angle);
    }
}

fn update_carried_display(
    controller: Res<Controller>,
    mut query: Query<&mut Visibility, With<CarriedItemDisplay>>,
) {
    let carrying = controller.0.carried().is_some();
    for mut visibility in &mut query {
        let wanted = if carrying {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        if *visibility != wanted {
            *visibility = wanted;
        }
    }
}
