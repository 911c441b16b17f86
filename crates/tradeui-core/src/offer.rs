#![forbid(unsafe_code)]

//! Trade offers and the seats they are addressed to.

use serde::{Deserialize, Serialize};

use crate::resource::ResourceVector;

/// A player's seat number at the game table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Seat index for array/mask lookups.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "seat {}", self.0)
    }
}

/// The set of seats an offer is addressed to, one flag per seat.
///
/// Sized by the game's max player count so seat order is preserved when the
/// recipient list is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecipientSet {
    seats: Vec<bool>,
}

impl RecipientSet {
    /// An empty set with room for `max_players` seats.
    #[must_use]
    pub fn with_seats(max_players: usize) -> Self {
        Self {
            seats: vec![false; max_players],
        }
    }

    /// Build a set from the listed recipients.
    #[must_use]
    pub fn of(max_players: usize, recipients: &[PlayerId]) -> Self {
        let mut set = Self::with_seats(max_players);
        for &p in recipients {
            set.insert(p);
        }
        set
    }

    /// Add a seat. Out-of-range seats are ignored.
    pub fn insert(&mut self, player: PlayerId) {
        if let Some(flag) = self.seats.get_mut(player.index()) {
            *flag = true;
        }
    }

    /// Whether the offer is addressed to this seat.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.seats.get(player.index()).copied().unwrap_or(false)
    }

    /// Number of seats this set can address.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    /// Addressed seats, in seat order.
    pub fn iter(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.seats
            .iter()
            .enumerate()
            .filter(|&(_, &to)| to)
            .map(|(i, _)| PlayerId(i as u8))
    }
}

/// An immutable trade proposal from one player to one or more recipients.
///
/// `give` and `get` are from the *proposer's* point of view: `give` is what
/// the proposer hands over, `get` is what they ask for in return. Created by
/// the network layer when a proposal arrives; read-only within this core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeOffer {
    /// The proposing player's seat.
    pub from: PlayerId,
    /// Seats the proposal is addressed to.
    pub to: RecipientSet,
    /// What the proposer gives.
    pub give: ResourceVector,
    /// What the proposer asks for.
    pub get: ResourceVector,
}

impl TradeOffer {
    /// Create a new offer.
    #[must_use]
    pub fn new(from: PlayerId, to: RecipientSet, give: ResourceVector, get: ResourceVector) -> Self {
        Self { from, to, give, get }
    }
}
