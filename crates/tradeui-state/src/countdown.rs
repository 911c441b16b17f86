#![forbid(unsafe_code)]

//! Auto-reject countdown for bot trade offers.
//!
//! The countdown itself holds no clock: the host's shared periodic timer
//! drives it by calling [`RejectCountdown::tick`], so tests inject synthetic
//! ticks instead of waiting on wall time. The recommended schedule is
//! published as [`INITIAL_TICK_DELAY_MS`] and [`TICK_PERIOD_MS`]; the initial
//! delay only guarantees the panel is visible before the first displayed
//! value and does not consume countdown seconds.
//!
//! # State machine
//!
//! Idle → Running → (Expired | Cancelled). `cancel` is idempotent and valid
//! from any state. `start` re-arms from any state and bumps the epoch, so a
//! tick scheduled against a superseded arm is ignored rather than racing the
//! new countdown.
//!
//! # Invariants
//!
//! 1. Once cancelled, no tick changes the displayed value or fires Reject.
//! 2. At most one countdown is live per panel: ticks carry the epoch they
//!    were scheduled under, and stale epochs are ignored.
//! 3. A hidden panel cancels on the next tick, not asynchronously.

/// Delay before the first tick, so the panel is visible before the first
/// displayed value. Not part of the countdown itself.
pub const INITIAL_TICK_DELAY_MS: u64 = 300;

/// Period between ticks.
pub const TICK_PERIOD_MS: u64 = 1000;

/// Identifies which `start` call a scheduled tick belongs to.
pub type TimerEpoch = u64;

/// Lifecycle phase of the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountdownPhase {
    /// Never started (or cleared back to rest).
    #[default]
    Idle,
    /// Armed and counting down.
    Running,
    /// Reached zero and fired Reject.
    Expired,
    /// Stopped before firing.
    Cancelled,
}

/// What a single tick produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Show this many remaining seconds on the countdown label.
    Display(u32),
    /// The countdown reached zero: fire the Reject action and stop.
    FireReject,
    /// The panel was hidden since scheduling: cancelled, display cleared.
    CancelledHidden,
    /// Stale epoch or not running; nothing to do.
    Ignored,
}

/// The per-panel auto-reject countdown.
#[derive(Debug, Default)]
pub struct RejectCountdown {
    phase: CountdownPhase,
    seconds_remaining: u32,
    displayed: Option<u32>,
    epoch: TimerEpoch,
}

impl RejectCountdown {
    /// A countdown at rest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the countdown with `seconds` remaining.
    ///
    /// Implicitly cancels any prior countdown: the returned epoch must be
    /// attached to every tick the host schedules for this arm, and ticks
    /// carrying an older epoch are ignored.
    pub fn start(&mut self, seconds: u32) -> TimerEpoch {
        self.epoch += 1;
        self.phase = CountdownPhase::Running;
        self.seconds_remaining = seconds;
        self.displayed = None;
        tracing::debug!(seconds, epoch = self.epoch, "reject countdown armed");
        self.epoch
    }

    /// Stop the countdown and clear the displayed value.
    ///
    /// Idempotent; valid from any state.
    pub fn cancel(&mut self) {
        if self.phase == CountdownPhase::Running {
            tracing::debug!(epoch = self.epoch, "reject countdown cancelled");
        }
        self.phase = CountdownPhase::Cancelled;
        self.displayed = None;
    }

    /// Process one scheduled tick.
    ///
    /// `panel_visible` is checked first: the panel may have been hidden
    /// between scheduling and firing.
    pub fn tick(&mut self, epoch: TimerEpoch, panel_visible: bool) -> TickOutcome {
        if epoch != self.epoch || self.phase != CountdownPhase::Running {
            return TickOutcome::Ignored;
        }

        if !panel_visible {
            self.phase = CountdownPhase::Cancelled;
            self.displayed = None;
            return TickOutcome::CancelledHidden;
        }

        if self.seconds_remaining > 0 {
            let shown = self.seconds_remaining;
            self.displayed = Some(shown);
            self.seconds_remaining -= 1;
            TickOutcome::Display(shown)
        } else {
            self.phase = CountdownPhase::Expired;
            self.displayed = None;
            tracing::debug!(epoch = self.epoch, "reject countdown expired");
            TickOutcome::FireReject
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> CountdownPhase {
        self.phase
    }

    /// Whether the countdown is armed and ticking.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == CountdownPhase::Running
    }

    /// The seconds value currently shown on the label, if any.
    #[must_use]
    pub fn displayed_seconds(&self) -> Option<u32> {
        self.displayed
    }

    /// Epoch of the most recent arm.
    #[must_use]
    pub fn epoch(&self) -> TimerEpoch {
        self.epoch
    }
}
