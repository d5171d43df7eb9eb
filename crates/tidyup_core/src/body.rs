use bevy_math::Vec3;

/// Handle to a rigid body owned by the physics engine.
///
/// The controller never owns bodies. It reads their state and issues
/// commands; the engine resolves collisions and integrates on its own step.
pub trait PhysicsBody {
    fn position(&self) -> Vec3;
    fn linear_velocity(&self) -> Vec3;
    fn set_linear_velocity(&mut self, velocity: Vec3, wake: bool);
    fn apply_impulse(&mut self, impulse: Vec3, wake: bool);
    fn set_position(&mut self, position: Vec3, wake: bool);
    fn set_enabled(&mut self, enabled: bool);
}

/// Lookup from item index to that item's body.
///
/// `None` means the body is not available right now (not spawned yet or
/// already gone); callers treat it as a missed interaction.
pub trait ItemBodies {
    fn body(&mut self, index: usize) -> Option<impl PhysicsBody + '_>;
}

/// Authoritative owner of the item list.
pub trait ItemRegistry {
    fn is_removed(&self, index: usize) -> bool;
    fn on_item_removed(&mut self, index: usize);
}

impl<B: PhysicsBody + ?Sized> PhysicsBody for &mut B {
    fn position(&self) -> Vec3 {
        (**self).position()
    }

    fn linear_velocity(&self) -> Vec3 {
        (**self).linear_velocity()
    }

    fn set_linear_velocity(&mut self, velocity: Vec3, wake: bool) {
        (**self).set_linear_velocity(velocity, wake)
    }

    fn apply_impulse(&mut self, impulse: Vec3, wake: bool) {
        (**self).apply_impulse(impulse, wake)
    }

    fn set_position(&mut self, position: Vec3, wake: bool) {
        (**self).set_position(position, wake)
    }

    fn set_enabled(&mut self, enabled: bool) {
        (**self).set_enabled(enabled)
    }
}
