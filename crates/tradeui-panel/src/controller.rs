#![forbid(unsafe_code)]

//! Action dispatch for one trade-offer panel.
//!
//! [`OfferPanelController`] wires user actions (Counter/Clear/Send/Cancel/
//! Reject/Accept) to [`OfferNegotiationState`] transitions and to the
//! messaging/game collaborators, and feeds the negotiation state into the
//! [`PanelSizer`]. Every action goes through a panic boundary: a fault in a
//! collaborator callback is logged and surfaced as a diagnostic message, and
//! never crashes the interaction loop.

use std::panic::{AssertUnwindSafe, catch_unwind};

use tradeui_core::{Error, PlayerId, RecipientSet, Result, TradeOffer, TradeRuleViolation};
use tradeui_layout::{LayoutDecision, LayoutQuery, PanelMetrics, PanelSizer};
use tradeui_state::{OfferNegotiationState, OfferUpdate, TickOutcome, TimerEpoch};
use tradeui_state::recipients::recipient_wrap_budget;

use crate::traits::{GameView, MessageSender, PanelConfig, PanelHost};

/// A user action on the panel's buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeAction {
    /// Open the counter-offer box.
    Counter,
    /// Zero the counter-offer draft.
    Clear,
    /// Send the drafted counter-offer back to the proposer.
    Send,
    /// Close the counter-offer box.
    Cancel,
    /// Reject the shown offer.
    Reject,
    /// Accept the shown offer.
    Accept,
}

impl TradeAction {
    /// Stable name for logs and diagnostics.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Counter => "counter",
            Self::Clear => "clear",
            Self::Send => "send",
            Self::Cancel => "cancel",
            Self::Reject => "reject",
            Self::Accept => "accept",
        }
    }
}

impl std::fmt::Display for TradeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Controller for the panel showing offers from one proposer seat.
#[derive(Debug)]
pub struct OfferPanelController {
    /// The proposer seat this panel represents.
    from: PlayerId,
    from_bot: bool,
    visible: bool,
    state: OfferNegotiationState,
    sizer: PanelSizer,
}

impl OfferPanelController {
    /// A hidden, empty panel for offers from `from`.
    #[must_use]
    pub fn new(from: PlayerId) -> Self {
        Self {
            from,
            from_bot: false,
            visible: false,
            state: OfferNegotiationState::new(),
            sizer: PanelSizer::default(),
        }
    }

    /// A hidden panel whose geometry uses the host's display scale.
    #[must_use]
    pub fn for_config(from: PlayerId, config: &dyn PanelConfig) -> Self {
        Self::new(from).with_sizer(PanelSizer::new(PanelMetrics::default(), config.display_scale()))
    }

    /// Replace the default sizer (custom metrics or display scale).
    #[must_use]
    pub fn with_sizer(mut self, sizer: PanelSizer) -> Self {
        self.sizer = sizer;
        self
    }

    /// The proposer seat.
    #[must_use]
    pub fn proposer(&self) -> PlayerId {
        self.from
    }

    /// A new player (human or bot) sat down in the proposer's seat:
    /// re-resolve the bot flag and reset any stale negotiation.
    pub fn seat_changed(&mut self, game: &dyn GameView) {
        self.from_bot = game.is_bot(self.from);
        self.state.clear();
    }

    /// Show an offer (or refresh the one being shown).
    ///
    /// Recomputes everything derived, restarts or cancels the countdown per
    /// its eligibility, and asks the host to repaint. Counter-offer mode is
    /// preserved so the offer view survives a refresh mid-draft.
    pub fn set_offer(
        &mut self,
        offer: TradeOffer,
        game: &dyn GameView,
        config: &dyn PanelConfig,
        host: &mut dyn PanelHost,
    ) {
        self.visible = true;
        self.from_bot = game.is_bot(self.from);
        let seat_names = game.seat_names();
        self.state.update(OfferUpdate {
            offer,
            viewer: game.viewer_id(),
            viewer_resources: game.viewer_resources(),
            seat_names: &seat_names,
            wrap_budget: recipient_wrap_budget(game.max_players(), game.has_sea_board()),
            auto_reject_seconds: config.auto_reject_seconds(),
            from_bot: self.from_bot,
        });
        host.request_repaint();
    }

    /// Withdraw the offer: wipe state, cancel the countdown, hide.
    pub fn clear_offer(&mut self, host: &mut dyn PanelHost) {
        self.state.clear();
        self.visible = false;
        host.request_repaint();
    }

    /// Show or hide the whole panel. Hiding cancels the countdown.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.state.countdown_mut().cancel();
        }
    }

    /// Whether the panel is showing.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the panel is showing and its offer is addressed to the viewer.
    #[must_use]
    pub fn is_offer_to_viewer(&self) -> bool {
        self.visible && self.state.offered_to_me()
    }

    /// Re-check accept affordability after the viewer's holdings changed.
    /// No-op while the panel is hidden.
    pub fn update_offer_buttons(&mut self, game: &dyn GameView) {
        if !self.visible {
            return;
        }
        self.state
            .update_accept_eligibility(&game.viewer_resources());
    }

    /// The negotiation state, for rendering.
    #[must_use]
    pub fn state(&self) -> &OfferNegotiationState {
        &self.state
    }

    /// Mutable draft access for the counter-offer square edits.
    pub fn state_mut(&mut self) -> &mut OfferNegotiationState {
        &mut self.state
    }

    /// Record the space available in the hosting panel. Returns `true` if it
    /// changed and the preferred size should be re-queried.
    pub fn set_available_space(&mut self, width: u32, height: u32) -> bool {
        self.sizer.set_available_space(width, height)
    }

    /// Preferred size and compact mode for the current state.
    ///
    /// `label_width_overflow` comes from the host's text measurement (see
    /// [`tradeui_layout::label_width_overflow`]). A compact-mode transition
    /// sets `repaint_needed` and is also forwarded to the host.
    pub fn preferred_size(
        &mut self,
        label_width_overflow: u32,
        host: &mut dyn PanelHost,
    ) -> LayoutDecision {
        let decision = self.sizer.preferred_size(&LayoutQuery {
            counter_offer_mode: self.state.counter_offer_mode(),
            label_width_overflow,
            wants_countdown_line: self.state.wants_reject_countdown(),
        });
        if decision.repaint_needed {
            host.request_repaint();
        }
        decision
    }

    /// One scheduled countdown tick from the host's shared timer.
    ///
    /// On expiry this performs the same transition as the viewer pressing
    /// Reject. The outcome tells the host what to do with the countdown
    /// label (`Display` → show "Auto-Reject in: n").
    pub fn countdown_tick(&mut self, epoch: TimerEpoch, host: &mut dyn PanelHost) -> TickOutcome {
        let outcome = self.state.countdown_mut().tick(epoch, self.visible);
        if outcome == TickOutcome::FireReject {
            self.reject_at_viewer(host);
        }
        outcome
    }

    /// Dispatch a user action through the panic boundary.
    ///
    /// Rule violations are reported to the host and leave state unchanged;
    /// they are not errors. `Err` is returned only when a collaborator
    /// panicked, after the panic has been contained and reported.
    pub fn handle(
        &mut self,
        action: TradeAction,
        game: &dyn GameView,
        sender: &mut dyn MessageSender,
        host: &mut dyn PanelHost,
    ) -> Result<()> {
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            self.dispatch(action, game, sender, host);
        }));
        match outcome {
            Ok(()) => Ok(()),
            Err(payload) => {
                let message = panic_text(payload.as_ref());
                tracing::error!(action = action.name(), %message, "action dispatch panicked");
                host.report_message(&format!("internal error during '{action}': {message}"));
                Err(Error::ActionPanicked {
                    action: action.name(),
                    message,
                })
            }
        }
    }

    fn dispatch(
        &mut self,
        action: TradeAction,
        game: &dyn GameView,
        sender: &mut dyn MessageSender,
        host: &mut dyn PanelHost,
    ) {
        tracing::debug!(action = action.name(), "dispatching panel action");
        match action {
            TradeAction::Counter => {
                self.state.countdown_mut().cancel();
                self.set_counter_visible(true, host);
            }
            TradeAction::Clear => {
                if self.state.counter_offer_mode() {
                    self.state.draft_mut().clear();
                    host.request_repaint();
                }
            }
            TradeAction::Send => self.send_counter_offer(game, sender, host),
            TradeAction::Cancel => {
                if self.state.counter_offer_mode() {
                    self.set_counter_visible(false, host);
                }
            }
            TradeAction::Reject => {
                if self.visible && self.state.offer().is_some() {
                    self.reject_at_viewer(host);
                }
            }
            TradeAction::Accept => {
                if self.visible && self.state.offer().is_some() && self.state.buttons().accept {
                    self.state.countdown_mut().cancel();
                    sender.send_accept_offer(self.from);
                    host.disable_bank_trade_undo();
                }
            }
        }
    }

    fn send_counter_offer(
        &mut self,
        game: &dyn GameView,
        sender: &mut dyn MessageSender,
        host: &mut dyn PanelHost,
    ) {
        self.state.countdown_mut().cancel();

        if !game.current_phase().trading_allowed() {
            return;
        }
        let Some(viewer) = game.viewer_id() else {
            return;
        };

        let (give, get) = self.state.draft().values();
        if !game.viewer_holdings_contain(&give) {
            host.report_message(TradeRuleViolation::InsufficientResources.message());
            return;
        }
        if give.is_empty() || get.is_empty() {
            host.report_message(TradeRuleViolation::EmptySide.message());
            return;
        }

        // Addressed back to the original proposer only.
        let to = RecipientSet::of(game.max_players(), &[self.from]);
        let offer = TradeOffer::new(viewer, to, give, get);
        sender.send_trade_offer(&offer);

        // The box stays open so the viewer can see what they sent.
        self.set_counter_visible(true, host);
    }

    fn set_counter_visible(&mut self, visible: bool, host: &mut dyn PanelHost) {
        self.state.set_counter_offer_visible(visible);
        host.counter_offer_visibility_changed(visible);
    }

    fn reject_at_viewer(&mut self, host: &mut dyn PanelHost) {
        self.visible = false;
        self.state.countdown_mut().cancel();
        host.offer_rejected_at_viewer();
    }
}

/// Render a panic payload to text for logs and diagnostics.
fn panic_text(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_owned()
    }
}
