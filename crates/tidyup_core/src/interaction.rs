use bevy_math::Vec3;

use crate::body::{ItemBodies, ItemRegistry, PhysicsBody};
use crate::config::ControllerConfig;
use crate::proximity::ProximityResult;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarryState {
    #[default]
    Idle,
    Carrying(usize),
}

/// Result of one interact press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionOutcome {
    /// No rule matched.
    Nothing,
    PickedUp { item: usize },
    Dropped { item: usize, position: Vec3 },
    Deposited { item: usize, bin: usize },
    /// The item's body was unavailable; state is unchanged.
    Missed { item: usize },
}

/// Pick-up / drop / deposit state machine. Only advanced by interact
/// presses, never by held keys.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InteractionController {
    state: CarryState,
}

impl InteractionController {
    pub fn state(&self) -> CarryState {
        self.state
    }

    pub fn carried(&self) -> Option<usize> {
        match self.state {
            CarryState::Idle => None,
            CarryState::Carrying(item) => Some(item),
        }
    }

    pub fn on_interact(
        &mut self,
        avatar_position: Vec3,
        proximity: &ProximityResult,
        bodies: &mut impl ItemBodies,
        registry: &mut impl ItemRegistry,
        config: &ControllerConfig,
    ) -> InteractionOutcome {
        match self.state {
            CarryState::Carrying(item) => {
                if let Some(bin) = proximity.bin.within(config.deposit_radius) {
                    registry.on_item_removed(item);
                    self.state = CarryState::Idle;
                    return InteractionOutcome::Deposited { item, bin };
                }

                let Some(mut body) = bodies.body(item) else {
                    return InteractionOutcome::Missed { item };
                };
                let position = avatar_position + config.drop_offset;
                body.set_position(position, true);
                body.set_enabled(true);
                self.state = CarryState::Idle;
                InteractionOutcome::Dropped { item, position }
            }
            CarryState::Idle => {
                let Some(item) = proximity.item.within(config.pickup_radius) else {
                    return InteractionOutcome::Nothing;
                };
                if registry.is_removed(item) {
                    return InteractionOutcome::Nothing;
                }

                let Some(mut body) = bodies.body(item) else {
                    return InteractionOutcome::Missed { item };
                };
                body.set_enabled(false);
                body.set_position(config.stash_position, true);
                self.state = CarryState::Carrying(item);
                InteractionOutcome::PickedUp { item }
            }
        }
    }
}

/// Hint shown above the avatar. Derived from state, never stored.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InteractionPrompt {
    #[default]
    None,
    PickUp,
    Drop,
    Deposit,
}

impl InteractionPrompt {
    pub fn project(state: CarryState, proximity: &ProximityResult, config: &ControllerConfig) -> Self {
        match state {
            CarryState::Carrying(_) if proximity.bin.within(config.deposit_radius).is_some() => {
                InteractionPrompt::Deposit
            }
            CarryState::Carrying(_) => InteractionPrompt::Drop,
            CarryState::Idle if proximity.item.within(config.pickup_radius).is_some() => {
                InteractionPrompt::PickUp
            }
            CarryState::Idle => InteractionPrompt::None,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            InteractionPrompt::None => "",
            InteractionPrompt::PickUp => "Press E: pick up",
            InteractionPrompt::Drop => "Press E: drop",
            InteractionPrompt::Deposit => "Press E: throw in bin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::ItemLedger;
    use crate::proximity::Nearest;
    use crate::testing::{FakeItems, FakeRegistry};

    const AVATAR: Vec3 = Vec3::new(0.0, 1.5, 0.0);

    fn near(index: usize, distance: f32) -> Nearest {
        Nearest {
            index: Some(index),
            distance,
        }
    }

    fn items() -> FakeItems {
        FakeItems::from_positions(&[
            Vec3::new(5.0, 1.4, 0.0),
            Vec3::new(0.0, 1.4, 6.0),
            Vec3::new(1.0, 1.5, 0.0),
        ])
    }

    fn carrying(item: usize) -> InteractionController {
        InteractionController {
            state: CarryState::Carrying(item),
        }
    }

    #[test]
    fn picks_up_item_in_reach() {
        let mut controller = InteractionController::default();
        let mut bodies = items();
        let mut ledger = ItemLedger::new(3);
        let proximity = ProximityResult {
            item: near(2, 1.0),
            bin: Nearest::NONE,
        };

        let outcome = controller.on_interact(AVATAR, &proximity, &mut bodies, &mut ledger, &ControllerConfig::default());

        assert_eq!(outcome, InteractionOutcome::PickedUp { item: 2 });
        assert_eq!(controller.carried(), Some(2));
        assert!(!bodies.get(2).enabled);
        assert_eq!(bodies.get(2).position.y, -1000.0);
    }

    #[test]
    fn ignores_item_at_exact_pickup_radius() {
        let mut controller = InteractionController::default();
        let mut bodies = items();
        let mut ledger = ItemLedger::new(3);
        let proximity = ProximityResult {
            item: near(2, 1.5),
            bin: Nearest::NONE,
        };

        let outcome = controller.on_interact(AVATAR, &proximity, &mut bodies, &mut ledger, &ControllerConfig::default());

        assert_eq!(outcome, InteractionOutcome::Nothing);
        assert_eq!(controller.state(), CarryState::Idle);
        assert!(bodies.get(2).teleports.is_empty());
    }

    #[test]
    fn deposits_when_bin_is_close() {
        let mut controller = carrying(2);
        let mut bodies = items();
        let mut ledger = ItemLedger::new(3);
        let proximity = ProximityResult {
            item: near(0, 5.0),
            bin: near(1, 1.0),
        };

        let outcome = controller.on_interact(AVATAR, &proximity, &mut bodies, &mut ledger, &ControllerConfig::default());

        assert_eq!(outcome, InteractionOutcome::Deposited { item: 2, bin: 1 });
        assert_eq!(controller.carried(), None);
        assert!(ledger.is_removed(2));
        assert_eq!(ledger.removed_count(), 1);
    }

    #[test]
    fn deposit_reports_removal_exactly_once() {
        let mut controller = carrying(2);
        let mut bodies = items();
        let mut registry = FakeRegistry::new(3);
        let config = ControllerConfig::default();
        let at_bin = ProximityResult {
            item: near(2, 0.5),
            bin: near(1, 1.0),
        };

        let outcome = controller.on_interact(AVATAR, &at_bin, &mut bodies, &mut registry, &config);
        assert_eq!(outcome, InteractionOutcome::Deposited { item: 2, bin: 1 });
        assert_eq!(registry.removals, vec![2]);

        // Idle again; the deposited item can no longer be picked up
        let outcome = controller.on_interact(AVATAR, &at_bin, &mut bodies, &mut registry, &config);
        assert_eq!(outcome, InteractionOutcome::Nothing);
        assert_eq!(registry.removals, vec![2]);
        assert!(bodies.get(2).teleports.is_empty());
    }

    #[test]
    fn pickup_and_drop_never_touch_the_registry() {
        let mut controller = InteractionController::default();
        let mut bodies = items();
        let mut registry = FakeRegistry::new(3);
        let config = ControllerConfig::default();
        let proximity = ProximityResult {
            item: near(2, 1.0),
            bin: near(0, 9.0),
        };

        controller.on_interact(AVATAR, &proximity, &mut bodies, &mut registry, &config);
        controller.on_interact(AVATAR, &proximity, &mut bodies, &mut registry, &config);

        assert_eq!(controller.state(), CarryState::Idle);
        assert!(registry.removals.is_empty());
    }

    #[test]
    fn drops_next_to_avatar_when_no_bin_in_reach() {
        let mut controller = carrying(2);
        let mut bodies = items();
        if let Some(body) = bodies.0[2].as_mut() {
            body.enabled = false;
        }
        let mut ledger = ItemLedger::new(3);
        let proximity = ProximityResult {
            item: Nearest::NONE,
            bin: near(0, 5.0),
        };

        let outcome = controller.on_interact(AVATAR, &proximity, &mut bodies, &mut ledger, &ControllerConfig::default());

        let expected = AVATAR + Vec3::new(0.5, 0.3, 0.2);
        assert_eq!(outcome, InteractionOutcome::Dropped { item: 2, position: expected });
        assert_eq!(controller.carried(), None);
        assert!(bodies.get(2).enabled);
        assert_eq!(bodies.get(2).position, expected);
        assert!(!ledger.is_removed(2));
    }

    #[test]
    fn missing_body_leaves_state_alone() {
        let mut bodies = items();
        bodies.0[2] = None;
        let mut ledger = ItemLedger::new(3);
        let config = ControllerConfig::default();

        let mut idle = InteractionController::default();
        let reach = ProximityResult {
            item: near(2, 0.5),
            bin: Nearest::NONE,
        };
        assert_eq!(
            idle.on_interact(AVATAR, &reach, &mut bodies, &mut ledger, &config),
            InteractionOutcome::Missed { item: 2 }
        );
        assert_eq!(idle.state(), CarryState::Idle);

        let mut holding = carrying(2);
        assert_eq!(
            holding.on_interact(AVATAR, &ProximityResult::default(), &mut bodies, &mut ledger, &config),
            InteractionOutcome::Missed { item: 2 }
        );
        assert_eq!(holding.carried(), Some(2));
    }

    #[test]
    fn repeated_presses_alternate_pickup_and_drop() {
        let mut controller = InteractionController::default();
        let mut bodies = items();
        let mut ledger = ItemLedger::new(3);
        let config = ControllerConfig::default();
        let proximity = ProximityResult {
            item: near(2, 1.0),
            bin: near(0, 9.0),
        };

        controller.on_interact(AVATAR, &proximity, &mut bodies, &mut ledger, &config);
        controller.on_interact(AVATAR, &proximity, &mut bodies, &mut ledger, &config);
        assert_eq!(controller.state(), CarryState::Idle);
        assert_eq!(bodies.get(2).teleports.len(), 2);
    }

    #[test]
    fn prompt_follows_state_and_reach() {
        let config = ControllerConfig::default();
        let far = ProximityResult::default();
        let close = ProximityResult {
            item: near(0, 1.0),
            bin: near(0, 1.0),
        };

        assert_eq!(InteractionPrompt::project(CarryState::Idle, &far, &config), InteractionPrompt::None);
        assert_eq!(InteractionPrompt::project(CarryState::Idle, &close, &config), InteractionPrompt::PickUp);
        assert_eq!(InteractionPrompt::project(CarryState::Carrying(0), &far, &config), InteractionPrompt::Drop);
        assert_eq!(
            InteractionPrompt::project(CarryState::Carrying(0), &close, &config),
            InteractionPrompt::Deposit
        );
        assert_eq!(InteractionPrompt::None.text(), "");
    }
}
