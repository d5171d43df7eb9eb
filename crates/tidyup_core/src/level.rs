use bevy_math::Vec3;

use crate::body::ItemRegistry;

/// Default avatar spawn point.
pub const SPAWN_POINT: Vec3 = Vec3::new(0.0, 1.5, 0.0);

/// Height of the walkable floor's top face in every built-in preset.
pub const FLOOR_TOP: f32 = 1.27;

const ITEM_HEIGHT: f32 = 1.4;
const BIN_HEIGHT: f32 = 1.6;

/// Static placement of everything the controller interacts with.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelLayout {
    pub name: &'static str,
    pub spawn_point: Vec3,
    pub items: Vec<Vec3>,
    pub bins: Vec<Vec3>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LevelPreset {
    #[default]
    Meadow,
    Plaza,
    Courtyard,
}

impl LevelPreset {
    pub const ALL: [LevelPreset; 3] = [LevelPreset::Meadow, LevelPreset::Plaza, LevelPreset::Courtyard];

    pub fn layout(self) -> LevelLayout {
        match self {
            LevelPreset::Meadow => LevelLayout {
                name: "meadow",
                spawn_point: SPAWN_POINT,
                items: ground(&[
                    (2.0, 1.0),
                    (-4.0, -2.0),
                    (1.0, -5.0),
                    (-6.0, 2.0),
                    (3.0, -4.0),
                    (0.0, 0.0),
                ], ITEM_HEIGHT),
                bins: ground(&[(5.0, 5.0), (-3.0, -5.0)], BIN_HEIGHT),
            },
            LevelPreset::Plaza => LevelLayout {
                name: "plaza",
                spawn_point: SPAWN_POINT,
                items: ground(&[
                    (4.0, 4.0),
                    (-4.0, 4.0),
                    (4.0, -4.0),
                    (-4.0, -4.0),
                    (0.0, 7.0),
                    (7.0, 0.0),
                    (-7.0, 0.0),
                    (0.0, -7.0),
                ], ITEM_HEIGHT),
                bins: ground(&[(0.0, 3.0)], BIN_HEIGHT),
            },
            LevelPreset::Courtyard => LevelLayout {
                name: "courtyard",
                spawn_point: Vec3::new(-6.0, 1.5, -6.0),
                items: ground(&[(-2.0, 6.0), (6.0, 6.0), (6.0, -2.0), (2.0, 2.0)], ITEM_HEIGHT),
                bins: ground(&[(-7.0, 7.0), (7.0, -7.0), (7.0, 7.0)], BIN_HEIGHT),
            },
        }
    }
}

fn ground(points: &[(f32, f32)], height: f32) -> Vec<Vec3> {
    points.iter().map(|&(x, z)| Vec3::new(x, height, z)).collect()
}

/// Removed flags for a level's items. The only place an item is ever
/// marked removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemLedger {
    removed: Vec<bool>,
}

impl ItemLedger {
    pub fn new(item_count: usize) -> Self {
        Self {
            removed: vec![false; item_count],
        }
    }

    pub fn total(&self) -> usize {
        self.removed.len()
    }

    pub fn removed_count(&self) -> usize {
        self.removed.iter().filter(|&&r| r).count()
    }

    pub fn all_removed(&self) -> bool {
        !self.removed.is_empty() && self.removed.iter().all(|&r| r)
    }
}

impl ItemRegistry for ItemLedger {
    fn is_removed(&self, index: usize) -> bool {
        self.removed.get(index).copied().unwrap_or(true)
    }

    fn on_item_removed(&mut self, index: usize) {
        if let Some(flag) = self.removed.get_mut(index) {
            *flag = true;
        }
    }
}
