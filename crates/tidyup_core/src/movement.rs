use bevy_math::Vec3;

use crate::angle::lerp_angle;
use crate::body::PhysicsBody;
use crate::config::{ControllerConfig, MOVE_EPSILON_SQ};
use crate::input::MoveIntent;
use crate::orbit::flatten;

/// What the resolver decided this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementFrame {
    pub grounded: bool,
    /// Camera-relative input direction before normalization.
    pub move_world: Vec3,
    pub speed: f32,
    pub facing_target: f32,
    /// Smoothed visual yaw after this frame.
    pub facing: f32,
    pub jumped: bool,
}

impl MovementFrame {
    pub fn is_moving(&self) -> bool {
        self.move_world.length_squared() > MOVE_EPSILON_SQ
    }
}

/// Turns held keys and the camera heading into body velocity.
///
/// The body's own rotation is locked; `facing` only drives the visual model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovementResolver {
    facing: f32,
}

impl MovementResolver {
    pub fn facing(&self) -> f32 {
        self.facing
    }

    pub fn resolve(
        &mut self,
        intent: &MoveIntent,
        camera_forward: Vec3,
        body: &mut impl PhysicsBody,
        config: &ControllerConfig,
    ) -> MovementFrame {
        let speed = if intent.sprint {
            config.run_speed
        } else {
            config.walk_speed
        };

        let grounded = body.position().y <= config.ground_height;

        // Re-issued every grounded frame the key stays down
        let jumped = intent.jump && grounded;
        if jumped {
            body.apply_impulse(Vec3::Y * config.jump_force, true);
        }

        let forward = flatten(camera_forward);
        let right = Vec3::Y.cross(forward);
        let move_world = forward * intent.forward_axis() + right * intent.strafe_axis();

        let vertical = body.linear_velocity().y;
        let facing_target = if move_world.length_squared() > MOVE_EPSILON_SQ {
            let direction = move_world.normalize();
            body.set_linear_velocity(
                Vec3::new(direction.x * speed, vertical, direction.z * speed),
                true,
            );
            direction.x.atan2(direction.z)
        } else {
            body.set_linear_velocity(Vec3::new(0.0, vertical, 0.0), true);
            forward.x.atan2(forward.z)
        };

        self.facing = lerp_angle(self.facing, facing_target, config.turn_smoothing);

        MovementFrame {
            grounded,
            move_world,
            speed,
            facing_target,
            facing: self.facing,
            jumped,
        }
    }
}
