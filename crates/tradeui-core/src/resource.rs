#![forbid(unsafe_code)]

//! Resource kinds and fixed-arity resource vectors.
//!
//! A [`ResourceVector`] is an ordered 5-tuple of non-negative counts, one
//! slot per [`ResourceKind`]. The slot order is fixed and must match the
//! external resource enumeration exactly — an off-by-one here produces a
//! wrong trade, so all indexed access goes through `ResourceKind`.
//!
//! # Invariants
//!
//! 1. Every entry is ≥ 0 (enforced by the unsigned element type).
//! 2. `ResourceKind::ALL` iterates slots in index order 0..=4.
//! 3. `contains` is componentwise ≥, never a total-sum comparison.

use serde::{Deserialize, Serialize};

/// The number of tradable resource kinds.
pub const RESOURCE_KIND_COUNT: usize = 5;

/// One of the five tradable resource kinds.
///
/// Discriminants are the vector slot indices; they must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(usize)]
pub enum ResourceKind {
    Clay = 0,
    Ore = 1,
    Sheep = 2,
    Wheat = 3,
    Wood = 4,
}

impl ResourceKind {
    /// All kinds, in slot order.
    pub const ALL: [ResourceKind; RESOURCE_KIND_COUNT] = [
        ResourceKind::Clay,
        ResourceKind::Ore,
        ResourceKind::Sheep,
        ResourceKind::Wheat,
        ResourceKind::Wood,
    ];

    /// Slot index of this kind.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Clay => "clay",
            Self::Ore => "ore",
            Self::Sheep => "sheep",
            Self::Wheat => "wheat",
            Self::Wood => "wood",
        };
        f.write_str(name)
    }
}

/// An ordered 5-tuple of non-negative resource counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceVector {
    counts: [u32; RESOURCE_KIND_COUNT],
}

impl ResourceVector {
    /// The all-zero vector.
    pub const ZERO: ResourceVector = ResourceVector {
        counts: [0; RESOURCE_KIND_COUNT],
    };

    /// Create a vector from raw slot counts.
    #[must_use]
    pub const fn new(counts: [u32; RESOURCE_KIND_COUNT]) -> Self {
        Self { counts }
    }

    /// Count for one kind.
    #[must_use]
    pub fn get(&self, kind: ResourceKind) -> u32 {
        self.counts[kind.index()]
    }

    /// Set the count for one kind.
    pub fn set(&mut self, kind: ResourceKind, amount: u32) {
        self.counts[kind.index()] = amount;
    }

    /// Sum across all kinds.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// `true` if every slot is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Componentwise ≥: do these holdings cover `required` in every slot?
    #[must_use]
    pub fn contains(&self, required: &ResourceVector) -> bool {
        self.counts
            .iter()
            .zip(required.counts.iter())
            .all(|(have, need)| have >= need)
    }

    /// Reset every slot to zero.
    pub fn clear(&mut self) {
        self.counts = [0; RESOURCE_KIND_COUNT];
    }

    /// Raw slot counts, in kind order.
    #[must_use]
    pub const fn counts(&self) -> [u32; RESOURCE_KIND_COUNT] {
        self.counts
    }
}

impl From<[u32; RESOURCE_KIND_COUNT]> for ResourceVector {
    fn from(counts: [u32; RESOURCE_KIND_COUNT]) -> Self {
        Self { counts }
    }
}

impl std::fmt::Display for ResourceVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, kind) in ResourceKind::ALL.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}={}", kind, self.get(*kind))?;
        }
        write!(f, "]")
    }
}
