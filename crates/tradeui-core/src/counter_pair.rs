#![forbid(unsafe_code)]

//! The give/get pair of resource vectors edited in the counter-offer box.

use serde::{Deserialize, Serialize};

use crate::resource::{ResourceKind, ResourceVector};

/// Two parallel resource vectors: what the viewer would give and get.
///
/// Backs the counter-offer draft. `set_values` followed by `values` returns
/// the same pair unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceCounterPair {
    give: ResourceVector,
    get: ResourceVector,
}

impl ResourceCounterPair {
    /// A zeroed pair.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace both vectors at once.
    pub fn set_values(&mut self, give: ResourceVector, get: ResourceVector) {
        self.give = give;
        self.get = get;
    }

    /// Both vectors, `(give, get)`.
    #[must_use]
    pub fn values(&self) -> (ResourceVector, ResourceVector) {
        (self.give, self.get)
    }

    /// The give side.
    #[must_use]
    pub fn give(&self) -> &ResourceVector {
        &self.give
    }

    /// The get side.
    #[must_use]
    pub fn get(&self) -> &ResourceVector {
        &self.get
    }

    /// Set one count on the give side.
    pub fn set_give(&mut self, kind: ResourceKind, amount: u32) {
        self.give.set(kind, amount);
    }

    /// Set one count on the get side.
    pub fn set_get(&mut self, kind: ResourceKind, amount: u32) {
        self.get.set(kind, amount);
    }

    /// `true` if both sides are all-zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.give.is_empty() && self.get.is_empty()
    }

    /// Zero both sides.
    pub fn clear(&mut self) {
        self.give.clear();
        self.get.clear();
    }
}
