#![forbid(unsafe_code)]

//! Negotiation state machine and auto-reject countdown for the trade panel.
//!
//! This crate is the panel's brain with the toolkit removed: the state of an
//! incoming offer and its counter-offer draft ([`OfferNegotiationState`]),
//! the bot auto-reject countdown ([`RejectCountdown`]) driven by injected
//! ticks, and the "Offered to" recipient-line building. Geometry lives in
//! `tradeui-layout`; user actions and collaborators in `tradeui-panel`.

pub mod countdown;
pub mod negotiation;
pub mod recipients;

pub use countdown::{
    CountdownPhase, INITIAL_TICK_DELAY_MS, RejectCountdown, TICK_PERIOD_MS, TickOutcome,
    TimerEpoch,
};
pub use negotiation::{ButtonEligibility, OfferNegotiationState, OfferUpdate};
pub use recipients::{RecipientLines, build_recipient_lines, recipient_wrap_budget};
