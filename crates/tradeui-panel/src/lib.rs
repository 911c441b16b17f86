#![forbid(unsafe_code)]

//! Action dispatch and collaborator seams for the trade-offer panel.
//!
//! An incoming offer flows host → [`OfferPanelController::set_offer`] →
//! `OfferNegotiationState` → `PanelSizer` → host repaint. User input flows
//! the other way: [`OfferPanelController::handle`] mutates the state and
//! talks to the [`MessageSender`]/[`PanelHost`] collaborators, behind a
//! panic boundary that keeps the interaction loop alive.

pub mod controller;
pub mod traits;

pub use controller::{OfferPanelController, TradeAction};
pub use traits::{GameView, MessageSender, PanelConfig, PanelHost};
