use bevy_math::Vec3;

use crate::body::ItemRegistry;

/// Distance reported when nothing is in reach. Fails every threshold test.
pub const UNREACHABLE: f32 = f32::INFINITY;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest {
    pub index: Option<usize>,
    pub distance: f32,
}

impl Nearest {
    pub const NONE: Nearest = Nearest {
        index: None,
        distance: UNREACHABLE,
    };

    /// Index of the target if it lies strictly inside `radius`.
    pub fn within(&self, radius: f32) -> Option<usize> {
        self.index.filter(|_| self.distance < radius)
    }
}

impl Default for Nearest {
    fn default() -> Self {
        Self::NONE
    }
}

/// Nearest item and bin for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProximityResult {
    pub item: Nearest,
    pub bin: Nearest,
}

/// Full rescan of items and bins. Nothing is cached between frames; item
/// and bin counts are small enough for a linear pass.
pub fn scan(
    avatar: Vec3,
    items: &[Vec3],
    registry: &impl ItemRegistry,
    bins: &[Vec3],
) -> ProximityResult {
    ProximityResult {
        item: nearest(avatar, items, |index| !registry.is_removed(index)),
        bin: nearest(avatar, bins, |_| true),
    }
}

fn nearest(from: Vec3, points: &[Vec3], eligible: impl Fn(usize) -> bool) -> Nearest {
    let mut best = Nearest::NONE;
    for (index, &point) in points.iter().enumerate() {
        if !eligible(index) {
            continue;
        }
        let distance = from.distance(point);
        if distance < best.distance {
            best = Nearest {
                index: Some(index),
                distance,
            };
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::ItemLedger;

    fn items() -> Vec<Vec3> {
        vec![
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 3.0),
        ]
    }

    #[test]
    fn picks_closest_item_and_bin() {
        let ledger = ItemLedger::new(3);
        let bins = [Vec3::new(-4.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -2.0)];
        let result = scan(Vec3::ZERO, &items(), &ledger, &bins);

        assert_eq!(result.item.index, Some(1));
        assert_eq!(result.item.distance, 1.0);
        assert_eq!(result.bin.index, Some(1));
        assert_eq!(result.bin.distance, 2.0);
    }

    #[test]
    fn skips_removed_items() {
        let mut ledger = ItemLedger::new(3);
        ledger.on_item_removed(1);
        let result = scan(Vec3::ZERO, &items(), &ledger, &[]);
        assert_eq!(result.item.index, Some(0));

        ledger.on_item_removed(0);
        ledger.on_item_removed(2);
        let result = scan(Vec3::ZERO, &items(), &ledger, &[]);
        assert_eq!(result.item, Nearest::NONE);
        assert_eq!(result.bin, Nearest::NONE);
    }

    #[test]
    fn uses_full_3d_distance() {
        let ledger = ItemLedger::new(1);
        let result = scan(Vec3::ZERO, &[Vec3::new(0.0, 3.0, 4.0)], &ledger, &[]);
        assert_eq!(result.item.distance, 5.0);
    }

    #[test]
    fn nothing_in_reach_fails_every_radius() {
        assert_eq!(Nearest::NONE.within(f32::MAX), None);
        let near = Nearest {
            index: Some(4),
            distance: 1.5,
        };
        assert_eq!(near.within(1.5), None);
        assert_eq!(near.within(1.6), Some(4));
    }
}
