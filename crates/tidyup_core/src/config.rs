use bevy_math::Vec3;

pub const WALK_SPEED: f32 = 2.0;
pub const RUN_SPEED: f32 = 3.2;
pub const JUMP_FORCE: f32 = 0.5;

/// Height at or below which the avatar counts as standing on the floor.
/// Only valid for levels whose floor sits where the built-in presets put it.
pub const GROUND_HEIGHT: f32 = 1.51;

pub const TURN_SMOOTHING: f32 = 0.12;
pub const PICKUP_RADIUS: f32 = 1.5;
pub const DEPOSIT_RADIUS: f32 = 2.0;
pub const DROP_OFFSET: Vec3 = Vec3::new(0.5, 0.3, 0.2);
pub const STASH_POSITION: Vec3 = Vec3::new(0.0, -1000.0, 0.0);
pub const FALL_LIMIT: f32 = -5.0;
pub const RESPAWN_LIFT: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Movement squared length under which input counts as "no movement".
pub const MOVE_EPSILON_SQ: f32 = 1e-4;

/// Tunables for the character controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig {
    pub walk_speed: f32,
    pub run_speed: f32,
    pub jump_force: f32,
    pub ground_height: f32,
    pub turn_smoothing: f32,
    pub pickup_radius: f32,
    pub deposit_radius: f32,
    /// Where a dropped item lands, relative to the avatar.
    pub drop_offset: Vec3,
    /// Out-of-world parking spot for the item being carried.
    pub stash_position: Vec3,
    pub fall_limit: f32,
    pub respawn_lift: Vec3,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            walk_speed: WALK_SPEED,
            run_speed: RUN_SPEED,
            jump_force: JUMP_FORCE,
            ground_height: GROUND_HEIGHT,
            turn_smoothing: TURN_SMOOTHING,
            pickup_radius: PICKUP_RADIUS,
            deposit_radius: DEPOSIT_RADIUS,
            drop_offset: DROP_OFFSET,
            stash_position: STASH_POSITION,
            fall_limit: FALL_LIMIT,
            respawn_lift: RESPAWN_LIFT,
        }
    }
}

/// Tunables for the orbit camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSettings {
    pub yaw_sensitivity: f32,
    pub pitch_sensitivity: f32,
    pub zoom_sensitivity: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Distance kept between the pitch limit and straight up/down.
    pub pitch_margin: f32,
    /// Fraction of the remaining gap closed each frame. Not scaled by frame time.
    pub follow_smoothing: f32,
    /// The camera aims this far above the avatar origin.
    pub target_height: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            yaw_sensitivity: 0.005,
            pitch_sensitivity: 0.003,
            zoom_sensitivity: 0.01,
            min_distance: 3.0,
            max_distance: 15.0,
            pitch_margin: 0.05,
            follow_smoothing: 0.12,
            target_height: 1.5,
        }
    }
}

impl OrbitSettings {
    pub fn max_pitch(&self) -> f32 {
        std::f32::consts::FRAC_PI_2 - self.pitch_margin
    }
}
