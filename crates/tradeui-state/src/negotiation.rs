#![forbid(unsafe_code)]

//! The offer-negotiation state machine.
//!
//! [`OfferNegotiationState`] tracks the current offer, the counter-offer
//! draft, the counter-offer visibility flag, and the derived booleans the
//! buttons and countdown depend on. It is pure data plus transitions: no
//! widget toolkit, no transport, no clock. Rendering reads the accessors;
//! the controller in `tradeui-panel` drives the transitions.
//!
//! # Invariants
//!
//! 1. The countdown is armed only while `offered_to_me && from_bot &&
//!    !counter_offer_mode && auto_reject_seconds > 0`.
//! 2. Turning counter-offer mode off zeroes the draft.
//! 3. An unseated viewer yields `offered_to_me == false` and
//!    `can_accept == false`, never an error.

use tradeui_core::{PlayerId, ResourceCounterPair, ResourceVector, TradeOffer};

use crate::countdown::RejectCountdown;
use crate::recipients::{RecipientLines, build_recipient_lines};

/// Which of the offer-row buttons are currently eligible.
///
/// Eligibility, not rendering: the host decides how an ineligible button
/// looks (hidden, greyed out, whatever fits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonEligibility {
    /// Accept: affordable, addressed to the viewer, counter-offer hidden.
    pub accept: bool,
    /// Reject: addressed to the viewer, counter-offer hidden.
    pub reject: bool,
    /// Counter: same condition as Reject.
    pub counter: bool,
}

/// Inputs for [`OfferNegotiationState::update`].
#[derive(Debug)]
pub struct OfferUpdate<'a> {
    /// The newly arrived (or re-shown) offer.
    pub offer: TradeOffer,
    /// The viewing player's seat, `None` for spectators or between seats.
    pub viewer: Option<PlayerId>,
    /// The viewer's current holdings.
    pub viewer_resources: ResourceVector,
    /// Seat names by seat index; `None` marks a vacant seat.
    pub seat_names: &'a [Option<String>],
    /// Character budget for the "Offered to" line (see
    /// [`crate::recipients::recipient_wrap_budget`]).
    pub wrap_budget: usize,
    /// Configured auto-reject seconds; 0 disables the countdown.
    pub auto_reject_seconds: u32,
    /// Whether the proposer's seat is held by a bot.
    pub from_bot: bool,
}

/// State machine for one trade-offer panel.
#[derive(Debug, Default)]
pub struct OfferNegotiationState {
    current: Option<TradeOffer>,
    draft: ResourceCounterPair,
    counter_offer_mode: bool,
    offered_to_me: bool,
    can_accept: bool,
    from_bot: bool,
    auto_reject_seconds: u32,
    recipient_lines: RecipientLines,
    buttons: ButtonEligibility,
    countdown: RejectCountdown,
}

impl OfferNegotiationState {
    /// An empty state: no offer, counter-offer hidden, countdown idle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a new (or re-shown) offer and recompute everything derived.
    ///
    /// Does not change `counter_offer_mode`; if a counter-offer was being
    /// drafted it stays visible across the update.
    pub fn update(&mut self, u: OfferUpdate<'_>) {
        self.offered_to_me = match u.viewer {
            Some(viewer) => u.offer.to.contains(viewer),
            None => false,
        };
        self.can_accept = self.offered_to_me && u.viewer_resources.contains(&u.offer.get);
        self.from_bot = u.from_bot;
        self.auto_reject_seconds = u.auto_reject_seconds;
        self.recipient_lines = build_recipient_lines(&u.offer.to, u.seat_names, u.wrap_budget);

        tracing::debug!(
            from = %u.offer.from,
            offered_to_me = self.offered_to_me,
            can_accept = self.can_accept,
            from_bot = self.from_bot,
            "offer updated"
        );

        self.current = Some(u.offer);
        self.refresh_eligibility();
        self.rearm_or_cancel_countdown();
    }

    /// Show or hide the counter-offer box.
    ///
    /// Turning it off zeroes the draft for the next use. Entering
    /// counter-offer mode suspends the auto-reject countdown; leaving it
    /// re-arms the countdown if the offer is still an eligible bot offer.
    /// A call that does not change visibility is a no-op, so a running
    /// countdown is never restarted without an actual transition.
    pub fn set_counter_offer_visible(&mut self, visible: bool) {
        if self.counter_offer_mode == visible {
            return;
        }
        tracing::debug!(visible, "counter-offer visibility changed");
        self.counter_offer_mode = visible;
        if !visible {
            self.draft.clear();
        }
        self.refresh_eligibility();
        self.rearm_or_cancel_countdown();
    }

    /// Wipe the offer, both resource vectors, and the countdown; force
    /// counter-offer mode off.
    pub fn clear(&mut self) {
        self.current = None;
        self.draft.clear();
        self.counter_offer_mode = false;
        self.offered_to_me = false;
        self.can_accept = false;
        self.recipient_lines.clear();
        self.buttons = ButtonEligibility::default();
        self.countdown.cancel();
    }

    /// Recompute accept affordability after the viewer's holdings changed.
    ///
    /// Only `can_accept` and button eligibility move; the countdown and the
    /// rest of the state are untouched.
    pub fn update_accept_eligibility(&mut self, viewer_resources: &ResourceVector) {
        let Some(offer) = &self.current else {
            return;
        };
        self.can_accept = self.offered_to_me && viewer_resources.contains(&offer.get);
        self.refresh_eligibility();
    }

    /// Whether the countdown should currently be armed.
    fn countdown_eligible(&self) -> bool {
        self.offered_to_me
            && self.from_bot
            && !self.counter_offer_mode
            && self.auto_reject_seconds > 0
            && self.current.is_some()
    }

    fn refresh_eligibility(&mut self) {
        let visible = self.counter_offer_mode;
        self.buttons = ButtonEligibility {
            accept: self.can_accept && self.offered_to_me && !visible,
            reject: self.offered_to_me && !visible,
            counter: self.offered_to_me && !visible,
        };
    }

    fn rearm_or_cancel_countdown(&mut self) {
        if self.countdown_eligible() {
            self.countdown.start(self.auto_reject_seconds);
        } else {
            self.countdown.cancel();
        }
    }

    /// The offer being shown, if any.
    #[must_use]
    pub fn offer(&self) -> Option<&TradeOffer> {
        self.current.as_ref()
    }

    /// The counter-offer draft.
    #[must_use]
    pub fn draft(&self) -> &ResourceCounterPair {
        &self.draft
    }

    /// Mutable access to the counter-offer draft (Clear, square edits).
    pub fn draft_mut(&mut self) -> &mut ResourceCounterPair {
        &mut self.draft
    }

    /// Whether the counter-offer box is showing.
    #[must_use]
    pub fn counter_offer_mode(&self) -> bool {
        self.counter_offer_mode
    }

    /// Whether the current offer is addressed to the viewer.
    #[must_use]
    pub fn offered_to_me(&self) -> bool {
        self.offered_to_me
    }

    /// Whether the viewer can afford the offer's asking side.
    #[must_use]
    pub fn can_accept(&self) -> bool {
        self.can_accept
    }

    /// Whether the proposer is a bot.
    #[must_use]
    pub fn from_bot(&self) -> bool {
        self.from_bot
    }

    /// Current button eligibility.
    #[must_use]
    pub fn buttons(&self) -> ButtonEligibility {
        self.buttons
    }

    /// The "Offered to" display lines.
    #[must_use]
    pub fn recipient_lines(&self) -> &RecipientLines {
        &self.recipient_lines
    }

    /// The auto-reject countdown.
    #[must_use]
    pub fn countdown(&self) -> &RejectCountdown {
        &self.countdown
    }

    /// Mutable countdown access for the tick entry point.
    pub fn countdown_mut(&mut self) -> &mut RejectCountdown {
        &mut self.countdown
    }

    /// Whether layout should reserve a line for the countdown label.
    #[must_use]
    pub fn wants_reject_countdown(&self) -> bool {
        self.countdown_eligible() && self.countdown.is_running()
    }
}
