#![forbid(unsafe_code)]

//! Seams to the game client: data source, messaging, host callbacks, config.
//!
//! The panel core never owns game data, wire formats, or rendering; it sees
//! its surroundings only through these traits. Tests substitute recording
//! fakes; the real client adapts its player interface, message sender, and
//! preferences onto them.

use tradeui_core::{GamePhase, PlayerId, ResourceVector, TradeOffer};

/// Read-only view of the game and its seats.
pub trait GameView {
    /// Name of the player in a seat, `None` if the seat is vacant.
    fn player_name(&self, id: PlayerId) -> Option<String>;

    /// Whether a seat is vacant.
    fn is_seat_vacant(&self, id: PlayerId) -> bool {
        self.player_name(id).is_none()
    }

    /// Whether a seat is held by a bot.
    fn is_bot(&self, id: PlayerId) -> bool;

    /// All seat names in seat order, `None` for vacant seats.
    fn seat_names(&self) -> Vec<Option<String>>;

    /// The viewing player's seat, `None` for spectators.
    fn viewer_id(&self) -> Option<PlayerId>;

    /// The viewing player's current holdings.
    fn viewer_resources(&self) -> ResourceVector;

    /// Whether the viewer's holdings cover `required` componentwise.
    fn viewer_holdings_contain(&self, required: &ResourceVector) -> bool {
        self.viewer_resources().contains(required)
    }

    /// Number of seats at the table.
    fn max_players(&self) -> usize;

    /// Current game phase.
    fn current_phase(&self) -> GamePhase;

    /// Whether the game uses the sea-board variant (wider panel, later
    /// recipient-line wrap).
    fn has_sea_board(&self) -> bool;
}

/// Outbound trade messages.
pub trait MessageSender {
    /// Send a trade offer (the viewer's counter-offer).
    fn send_trade_offer(&mut self, offer: &TradeOffer);

    /// Accept the offer proposed by `from`.
    fn send_accept_offer(&mut self, from: PlayerId);
}

/// Callbacks into the hosting panel.
pub trait PanelHost {
    /// The counter-offer box was shown or hidden; re-layout as needed.
    fn counter_offer_visibility_changed(&mut self, visible: bool);

    /// The offer was rejected at this viewer (by button or countdown).
    fn offer_rejected_at_viewer(&mut self);

    /// A trade was accepted; any pending bank-trade undo is no longer valid.
    fn disable_bank_trade_undo(&mut self);

    /// Show a transient advisory or diagnostic message to the viewer.
    fn report_message(&mut self, text: &str);

    /// Something visual changed; schedule a repaint.
    fn request_repaint(&mut self);
}

/// Host preferences consumed by the panel.
pub trait PanelConfig {
    /// Seconds before a bot offer is auto-rejected; 0 disables the feature.
    fn auto_reject_seconds(&self) -> u32;

    /// Display scale factor for high-DPI hosts (1 = unscaled). Opaque to the
    /// state logic; only layout geometry uses it.
    fn display_scale(&self) -> u32 {
        1
    }
}
