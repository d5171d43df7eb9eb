use avian3d::prelude::*;
use bevy::prelude::*;
use tidyup_core::body::{ItemBodies, PhysicsBody};

use crate::avatar::Avatar;
use crate::litter::LitterItem;

/// Whether the physics engine should simulate this body. Toggled by the
/// controller, applied to avian by [`apply_body_enabled`].
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyEnabled(pub bool);

impl Default for BodyEnabled {
    fn default() -> Self {
        Self(true)
    }
}

pub struct BodyPlugin;

impl Plugin for BodyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostUpdate, apply_body_enabled);
    }
}

/// Controller-facing view of an avian rigid body.
///
/// Positions go through `Transform`; avian copies changed transforms into
/// its own `Position` before the next step. Bodies carry `SleepingDisabled`,
/// so the wake flag needs no handling here.
pub struct AvianBody<'a> {
    pub transform: Mut<'a, Transform>,
    pub velocity: Mut<'a, LinearVelocity>,
    pub impulse: Option<Mut<'a, ExternalImpulse>>,
    pub enabled: Mut<'a, BodyEnabled>,
}

impl PhysicsBody for AvianBody<'_> {
    fn position(&self) -> Vec3 {
        self.transform.translation
    }

    fn linear_velocity(&self) -> Vec3 {
        self.velocity.0
    }

    fn set_linear_velocity(&mut self, velocity: Vec3, _wake: bool) {
        self.velocity.0 = velocity;
    }

    fn apply_impulse(&mut self, impulse: Vec3, _wake: bool) {
        if let Some(external) = self.impulse.as_mut() {
            external.apply_impulse(impulse);
        }
    }

    fn set_position(&mut self, position: Vec3, _wake: bool) {
        self.transform.translation = position;
    }

    fn set_enabled(&mut self, enabled: bool) {
        if self.enabled.0 != enabled {
            self.enabled.0 = enabled;
        }
    }
}

pub type AvatarBodyQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static mut Transform,
        &'static mut LinearVelocity,
        &'static mut ExternalImpulse,
        &'static mut BodyEnabled,
    ),
    (With<Avatar>, Without<LitterItem>),
>;

pub type ItemBodyQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static mut Transform,
        &'static mut LinearVelocity,
        &'static mut BodyEnabled,
    ),
    (With<LitterItem>, Without<Avatar>),
>;

/// Item bodies looked up through the index -> entity table.
pub struct LitterBodies<'a, 'w, 's> {
    pub entities: &'a [Entity],
    pub query: &'a mut ItemBodyQuery<'w, 's>,
}

impl ItemBodies for LitterBodies<'_, '_, '_> {
    fn body(&mut self, index: usize) -> Option<impl PhysicsBody + '_> {
        let entity = *self.entities.get(index)?;
        let (transform, velocity, enabled) = self.query.get_mut(entity).ok()?;
        Some(AvianBody {
            transform,
            velocity,
            impulse: None,
            enabled,
        })
    }
}

pub fn apply_body_enabled(
    mut commands: Commands,
    mut query: Query<(Entity, &BodyEnabled, &mut Visibility), Changed<BodyEnabled>>,
) {
    for (entity, enabled, mut visibility) in &mut query {
        if enabled.0 {
            commands.entity(entity).remove::<RigidBodyDisabled>();
            *visibility = Visibility::Inherited;
        } else {
            commands.entity(entity).insert(RigidBodyDisabled);
            *visibility = Visibility::Hidden;
        }
    }
}
