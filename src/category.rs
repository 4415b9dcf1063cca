//! Collision category registry: the five physical body roles of the court.
//!
//! Every collider that can take part in scoring carries exactly one
//! [`CollisionCategory`] component, attached when the body is spawned.  The
//! contact bridge in [`crate::scoring`] reads the component on both colliders
//! of a Rapier contact to build a [`ContactEvent`].
//!
//! ## Collision groups
//!
//! | Category    | Bit    | Group    | Collides with |
//! |-------------|--------|----------|---------------|
//! | `Ball`      | 1 << 0 | GROUP_1  | everything    |
//! | `Hoop`      | 1 << 1 | GROUP_2  | ball only     |
//! | `Board`     | 1 << 2 | GROUP_3  | ball only     |
//! | `AboveHoop` | 1 << 4 | GROUP_5  | ball only     |
//! | `UnderHoop` | 1 << 8 | GROUP_9  | ball only     |
//!
//! Balls collide with each other too, so a ball resting on another ball still
//! produces contact events; those pairs never match a scoring pair.

use bevy::prelude::*;
use bevy_rapier2d::geometry::Group;
use bevy_rapier2d::prelude::CollisionGroups;

/// Physical role of a body for scoring purposes.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionCategory {
    /// The thrown projectile.
    Ball,
    /// Rim of the hoop.
    Hoop,
    /// Backboard behind the rim.
    Board,
    /// Invisible trigger volume just above the rim opening.
    AboveHoop,
    /// Invisible trigger volume just below the rim opening.
    UnderHoop,
}

impl CollisionCategory {
    /// Every registered category, in bit order.
    pub const ALL: [CollisionCategory; 5] = [
        CollisionCategory::Ball,
        CollisionCategory::Hoop,
        CollisionCategory::Board,
        CollisionCategory::AboveHoop,
        CollisionCategory::UnderHoop,
    ];

    /// Single-bit flag for this category.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            CollisionCategory::Ball => 1 << 0,
            CollisionCategory::Hoop => 1 << 1,
            CollisionCategory::Board => 1 << 2,
            CollisionCategory::AboveHoop => 1 << 4,
            CollisionCategory::UnderHoop => 1 << 8,
        }
    }

    /// Rapier membership group carrying the same bit as [`Self::bits`].
    #[inline]
    pub fn group(self) -> Group {
        match self {
            CollisionCategory::Ball => Group::GROUP_1,
            CollisionCategory::Hoop => Group::GROUP_2,
            CollisionCategory::Board => Group::GROUP_3,
            CollisionCategory::AboveHoop => Group::GROUP_5,
            CollisionCategory::UnderHoop => Group::GROUP_9,
        }
    }

    /// Inverse of [`Self::group`].  Returns `None` for groups that are not
    /// exactly one registered category.
    pub fn from_group(group: Group) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.group() == group)
    }

    /// Groups this category is allowed to interact with.
    pub fn filter(self) -> Group {
        match self {
            CollisionCategory::Ball => Self::ALL
                .into_iter()
                .fold(Group::NONE, |acc, c| acc | c.group()),
            _ => CollisionCategory::Ball.group(),
        }
    }

    /// Rapier `CollisionGroups` for a collider tagged with this category.
    #[inline]
    pub fn collision_groups(self) -> CollisionGroups {
        CollisionGroups::new(self.group(), self.filter())
    }
}

// Pairwise disjoint single-bit flags, checked at compile time.
const _: () = {
    let all = CollisionCategory::ALL;
    let mut i = 0;
    while i < all.len() {
        assert!(all[i].bits().count_ones() == 1);
        let mut j = i + 1;
        while j < all.len() {
            assert!(all[i].bits() & all[j].bits() == 0);
            j += 1;
        }
        i += 1;
    }
};

/// End of a physical contact between two categorised bodies.
///
/// Field order carries no meaning; see [`ContactEvent::matches`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactEvent {
    pub category_a: CollisionCategory,
    pub category_b: CollisionCategory,
}

impl ContactEvent {
    #[inline]
    pub fn new(category_a: CollisionCategory, category_b: CollisionCategory) -> Self {
        Self {
            category_a,
            category_b,
        }
    }

    /// `true` iff `{category_a, category_b} == {x, y}` as an unordered pair.
    #[inline]
    pub fn matches(&self, x: CollisionCategory, y: CollisionCategory) -> bool {
        (self.category_a == x && self.category_b == y)
            || (self.category_a == y && self.category_b == x)
    }
}

/// Free-function form of [`ContactEvent::matches`].
#[inline]
pub fn matches(event: &ContactEvent, x: CollisionCategory, y: CollisionCategory) -> bool {
    event.matches(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_follow_registry_layout() {
        assert_eq!(CollisionCategory::Ball.bits(), 1);
        assert_eq!(CollisionCategory::Hoop.bits(), 2);
        assert_eq!(CollisionCategory::Board.bits(), 4);
        assert_eq!(CollisionCategory::AboveHoop.bits(), 16);
        assert_eq!(CollisionCategory::UnderHoop.bits(), 256);
    }

    #[test]
    fn group_carries_the_same_bit() {
        for category in CollisionCategory::ALL {
            assert_eq!(category.group().bits(), category.bits(), "{category:?}");
            assert_eq!(CollisionCategory::from_group(category.group()), Some(category));
        }
    }

    #[test]
    fn from_group_rejects_unregistered_and_combined_groups() {
        assert_eq!(CollisionCategory::from_group(Group::GROUP_4), None);
        assert_eq!(
            CollisionCategory::from_group(Group::GROUP_1 | Group::GROUP_2),
            None
        );
        assert_eq!(CollisionCategory::from_group(Group::NONE), None);
    }

    #[test]
    fn matching_is_symmetric() {
        let forward = ContactEvent::new(CollisionCategory::Ball, CollisionCategory::AboveHoop);
        let backward = ContactEvent::new(CollisionCategory::AboveHoop, CollisionCategory::Ball);
        for event in [forward, backward] {
            assert!(matches(&event, CollisionCategory::Ball, CollisionCategory::AboveHoop));
            assert!(matches(&event, CollisionCategory::AboveHoop, CollisionCategory::Ball));
            assert!(!matches(&event, CollisionCategory::Ball, CollisionCategory::UnderHoop));
        }
    }

    #[test]
    fn same_category_pair_does_not_match_mixed_pair() {
        let event = ContactEvent::new(CollisionCategory::Ball, CollisionCategory::Ball);
        assert!(!event.matches(CollisionCategory::Ball, CollisionCategory::AboveHoop));
        assert!(event.matches(CollisionCategory::Ball, CollisionCategory::Ball));
    }

    #[test]
    fn triggers_and_rim_only_interact_with_the_ball() {
        let ball = CollisionCategory::Ball.collision_groups();
        for category in CollisionCategory::ALL {
            let groups = category.collision_groups();
            assert!(groups.memberships.intersects(ball.filters));
            assert!(ball.memberships.intersects(groups.filters));
        }
        let above = CollisionCategory::AboveHoop.collision_groups();
        let board = CollisionCategory::Board.collision_groups();
        assert!(!above.memberships.intersects(board.filters));
    }
}
