#![forbid(unsafe_code)]

//! Domain values for the trade-negotiation panel core.
//!
//! Everything here is a plain value type: resource vectors, player seats,
//! trade offers, and the give/get counter pair edited in the counter-offer
//! box. No rendering, no transport, no game rules beyond componentwise
//! affordability — those live behind the collaborator traits in
//! `tradeui-panel`.

pub mod counter_pair;
pub mod error;
pub mod offer;
pub mod resource;

pub use counter_pair::ResourceCounterPair;
pub use error::{Error, Result, TradeRuleViolation};
pub use offer::{PlayerId, RecipientSet, TradeOffer};
pub use resource::{ResourceKind, ResourceVector};

/// Phase of the surrounding game, as far as this core cares.
///
/// Sending a counter-offer is only legal while free player-to-player trading
/// is allowed; every other phase is opaque to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Free trading between players is allowed.
    FreeTrading,
    /// Any other phase (setup, dice roll, special building, game over, ...).
    #[default]
    Other,
}

impl GamePhase {
    /// Whether player-to-player trading is currently allowed.
    #[must_use]
    pub fn trading_allowed(self) -> bool {
        matches!(self, Self::FreeTrading)
    }
}
