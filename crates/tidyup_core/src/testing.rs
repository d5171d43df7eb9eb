use bevy_math::Vec3;

use crate::body::{ItemBodies, ItemRegistry, PhysicsBody};

/// In-memory body that applies every command immediately.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FakeBody {
    pub position: Vec3,
    pub velocity: Vec3,
    pub enabled: bool,
    pub impulses: Vec<Vec3>,
    pub teleports: Vec<Vec3>,
}

impl FakeBody {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            enabled: true,
            ..Default::default()
        }
    }
}

impl PhysicsBody for FakeBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn linear_velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_linear_velocity(&mut self, velocity: Vec3, _wake: bool) {
        self.velocity = velocity;
    }

    fn apply_impulse(&mut self, impulse: Vec3, _wake: bool) {
        self.impulses.push(impulse);
    }

    fn set_position(&mut self, position: Vec3, _wake: bool) {
        self.position = position;
        self.teleports.push(position);
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

/// Item table where any slot can be made unavailable.
#[derive(Debug, Default)]
pub struct FakeItems(pub Vec<Option<FakeBody>>);

impl FakeItems {
    pub fn from_positions(positions: &[Vec3]) -> Self {
        Self(positions.iter().map(|&p| Some(FakeBody::at(p))).collect())
    }

    pub fn get(&self, index: usize) -> &FakeBody {
        self.0[index].as_ref().expect("slot is empty")
    }
}

impl ItemBodies for FakeItems {
    fn body(&mut self, index: usize) -> Option<impl PhysicsBody + '_> {
        self.0.get_mut(index)?.as_mut()
    }
}

/// Registry that records every removal call, repeats included.
#[derive(Debug, Default)]
pub struct FakeRegistry {
    pub total: usize,
    pub removals: Vec<usize>,
}

impl FakeRegistry {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            removals: Vec::new(),
        }
    }
}

impl ItemRegistry for FakeRegistry {
    fn is_removed(&self, index: usize) -> bool {
        index >= self.total || self.removals.contains(&index)
    }

    fn on_item_removed(&mut self, index: usize) {
        self.removals.push(index);
    }
}
