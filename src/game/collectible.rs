//! Collectibles
//!
//! Coins and gems. A pickup only marks an item; the set is compacted once the
//! hit-test pass is over, so indices returned by an overlap query stay valid
//! for the whole pass and an item can never be counted twice.

use serde::{Deserialize, Serialize};

use crate::core::aabb::Aabb;
use crate::game::assets::{SoundCue, SpriteAsset};
use crate::game::body::Body;

/// Collectible type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CollectibleKind {
    /// Worth 1 point
    Coin = 0,
    /// Worth 3 points
    Gem = 1,
}

impl CollectibleKind {
    /// Points awarded on pickup.
    #[inline]
    pub fn value(self) -> i32 {
        match self {
            CollectibleKind::Coin => 1,
            CollectibleKind::Gem => 3,
        }
    }

    /// Sprite used for this kind.
    pub fn sprite(self) -> SpriteAsset {
        match self {
            CollectibleKind::Coin => SpriteAsset::Coin,
            CollectibleKind::Gem => SpriteAsset::Gem,
        }
    }

    /// Sound played on pickup.
    pub fn sound(self) -> SoundCue {
        match self {
            CollectibleKind::Coin => SoundCue::Coin,
            CollectibleKind::Gem => SoundCue::Gem,
        }
    }
}

/// A body that awards points and disappears on contact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    /// Position and hit box
    pub body: Body,
    /// Coin or gem
    pub kind: CollectibleKind,
    /// Marked for removal by the current pickup pass
    pub removed: bool,
}

impl Collectible {
    /// A live collectible.
    pub fn new(kind: CollectibleKind, body: Body) -> Self {
        Self {
            body,
            kind,
            removed: false,
        }
    }

    /// Point value.
    #[inline]
    pub fn value(&self) -> i32 {
        self.kind.value()
    }
}

/// Index-addressable container of collectibles of one kind.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectibleSet {
    items: Vec<Collectible>,
}

impl CollectibleSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a collectible and return its index.
    pub fn push(&mut self, item: Collectible) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    /// Number of items, including any marked but not yet compacted.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the set holds nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`.
    pub fn get(&self, index: usize) -> Option<&Collectible> {
        self.items.get(index)
    }

    /// All items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Collectible> {
        self.items.iter()
    }

    /// Hit boxes, index-aligned with the items.
    pub fn bounds(&self) -> Vec<Aabb> {
        self.items.iter().map(|c| c.body.bounds()).collect()
    }

    /// Mark the item at `index` for removal.
    ///
    /// Returns the item's kind the first time; `None` if the index is out of
    /// range or the item is already marked.
    pub fn mark_removed(&mut self, index: usize) -> Option<CollectibleKind> {
        let item = self.items.get_mut(index)?;
        if item.removed {
            return None;
        }
        item.removed = true;
        Some(item.kind)
    }

    /// Drop every marked item. Returns how many were dropped.
    pub fn compact(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|c| !c.removed);
        before - self.items.len()
    }

    /// Sum of the values of unmarked items.
    pub fn total_value(&self) -> i32 {
        self.items
            .iter()
            .filter(|c| !c.removed)
            .map(Collectible::value)
            .sum()
    }
}

impl FromIterator<Collectible> for CollectibleSet {
    fn from_iter<I: IntoIterator<Item = Collectible>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
