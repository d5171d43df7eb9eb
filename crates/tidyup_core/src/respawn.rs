use bevy_math::Vec3;

use crate::body::PhysicsBody;
use crate::config::ControllerConfig;

/// Puts the avatar back on the level after it falls through the floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RespawnGuard {
    spawn_point: Vec3,
}

impl RespawnGuard {
    pub fn new(spawn_point: Vec3) -> Self {
        Self { spawn_point }
    }

    /// Returns the reset position when the guard fired.
    pub fn check(&self, body: &mut impl PhysicsBody, config: &ControllerConfig) -> Option<Vec3> {
        if body.position().y >= config.fall_limit {
            return None;
        }
        let reset = self.spawn_point + config.respawn_lift;
        body.set_position(reset, true);
        body.set_linear_velocity(Vec3::ZERO, true);
        Some(reset)
    }
}
