use bevy_math::Vec3;

use crate::animation::AnimationState;
use crate::body::{ItemBodies, ItemRegistry, PhysicsBody};
use crate::config::{ControllerConfig, OrbitSettings};
use crate::input::InputFrame;
use crate::interaction::{CarryState, InteractionController, InteractionOutcome, InteractionPrompt};
use crate::level::LevelLayout;
use crate::movement::{MovementFrame, MovementResolver};
use crate::orbit::{CameraPose, OrbitCamera, flatten};
use crate::proximity::{self, ProximityResult};
use crate::respawn::RespawnGuard;

/// Everything that happened during one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub movement: MovementFrame,
    pub animation: AnimationState,
    pub interactions: Vec<InteractionOutcome>,
    pub respawned: Option<Vec3>,
    pub camera: CameraPose,
}

/// Read-only view for display layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerSnapshot {
    pub carry: CarryState,
    pub animation: AnimationState,
    pub grounded: bool,
    pub facing: f32,
    pub proximity: ProximityResult,
    pub prompt: InteractionPrompt,
}

/// Player-control core: movement, facing, camera, proximity and carrying.
#[derive(Debug, Clone)]
pub struct CharacterController {
    pub config: ControllerConfig,
    items: Vec<Vec3>,
    bins: Vec<Vec3>,
    movement: MovementResolver,
    interaction: InteractionController,
    respawn: RespawnGuard,
    camera: OrbitCamera,
    last_pose: Option<CameraPose>,
    proximity: ProximityResult,
    animation: AnimationState,
    grounded: bool,
}

impl CharacterController {
    pub fn new(layout: &LevelLayout, config: ControllerConfig, orbit: OrbitSettings) -> Self {
        let mut camera = OrbitCamera::new(orbit, layout.spawn_point);
        camera.snap(layout.spawn_point + Vec3::Y * orbit.target_height);

        Self {
            config,
            items: layout.items.clone(),
            bins: layout.bins.clone(),
            movement: MovementResolver::default(),
            interaction: InteractionController::default(),
            respawn: RespawnGuard::new(layout.spawn_point),
            camera,
            last_pose: None,
            proximity: ProximityResult::default(),
            animation: AnimationState::Idle,
            grounded: false,
        }
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn carried(&self) -> Option<usize> {
        self.interaction.carried()
    }

    pub fn proximity(&self) -> &ProximityResult {
        &self.proximity
    }

    /// Heading the avatar walks toward on "forward", flattened to the ground.
    pub fn camera_forward(&self) -> Vec3 {
        let forward = match self.last_pose {
            Some(pose) => pose.forward_flat(),
            None => Vec3::ZERO,
        };
        if forward != Vec3::ZERO {
            return forward;
        }
        flatten(-self.camera.offset())
    }

    /// Run one frame. Stages execute in a fixed order: camera input,
    /// movement, animation, proximity, interaction, respawn, camera pose.
    pub fn tick(
        &mut self,
        input: &InputFrame,
        avatar: &mut impl PhysicsBody,
        bodies: &mut impl ItemBodies,
        registry: &mut impl ItemRegistry,
    ) -> TickReport {
        self.camera.on_drag(input.drag.0, input.drag.1);
        if input.zoom != 0.0 {
            self.camera.on_zoom(input.zoom);
        }

        let forward = self.camera_forward();
        let movement = self.movement.resolve(&input.intent, forward, avatar, &self.config);
        self.grounded = movement.grounded;
        self.animation = AnimationState::from_movement(&movement, self.config.run_speed);

        self.rescan(avatar.position(), registry);

        let mut interactions = Vec::new();
        for _ in 0..input.interact_presses {
            let outcome = self.interaction.on_interact(
                avatar.position(),
                &self.proximity,
                bodies,
                registry,
                &self.config,
            );
            if outcome != InteractionOutcome::Nothing {
                self.rescan(avatar.position(), registry);
            }
            interactions.push(outcome);
        }

        let respawned = self.respawn.check(avatar, &self.config);

        let target = avatar.position() + Vec3::Y * self.camera.settings.target_height;
        let camera = self.camera.compute_pose(target);
        self.last_pose = Some(camera);

        TickReport {
            movement,
            animation: self.animation,
            interactions,
            respawned,
            camera,
        }
    }

    /// Start or stop a camera drag gesture.
    pub fn set_dragging(&mut self, dragging: bool) {
        self.camera.set_dragging(dragging);
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        let carry = self.interaction.state();
        ControllerSnapshot {
            carry,
            animation: self.animation,
            grounded: self.grounded,
            facing: self.movement.facing(),
            proximity: self.proximity,
            prompt: InteractionPrompt::project(carry, &self.proximity, &self.config),
        }
    }

    fn rescan(&mut self, position: Vec3, registry: &impl ItemRegistry) {
        self.proximity = proximity::scan(position, &self.items, registry, &self.bins);
    }
}
