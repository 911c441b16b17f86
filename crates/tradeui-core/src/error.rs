#![forbid(unsafe_code)]

//! Error model for the negotiation core.
//!
//! # Design Principles
//!
//! 1. **Rule violations are not faults** — a Send that breaks a trade rule is
//!    reported as a transient advisory message and leaves state unchanged.
//! 2. **No fault is fatal** — unexpected faults are caught at the action
//!    dispatch boundary; worst case the panel goes inert until the next
//!    offer update.
//! 3. **Unseated viewers are normal** — a spectator or between-seat viewer
//!    yields "not eligible", never an error.

use std::fmt;

/// A user-input trade rule violation, recovered locally.
///
/// Each variant maps to the advisory message shown to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeRuleViolation {
    /// The draft's give side exceeds the viewer's holdings.
    InsufficientResources,
    /// One side of the draft is empty.
    EmptySide,
}

impl TradeRuleViolation {
    /// The advisory message for this violation.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::InsufficientResources => "You can't offer what you don't have.",
            Self::EmptySide => "A trade must contain at least one resource from each player.",
        }
    }
}

impl fmt::Display for TradeRuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for TradeRuleViolation {}

/// Top-level error for negotiation-core APIs.
#[derive(Debug)]
pub enum Error {
    /// A trade rule violation (advisory, state unchanged).
    Rule(TradeRuleViolation),
    /// A collaborator callback panicked; caught at the dispatch boundary.
    ActionPanicked {
        /// The action that was being dispatched.
        action: &'static str,
        /// Panic payload rendered to text, if it was a string.
        message: String,
    },
}

/// Standard result type for negotiation-core APIs.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the interaction loop can keep running after this error.
    ///
    /// Always true: no fault in this core is fatal to the hosting process.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        true
    }

    /// Error type label for tracing.
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Rule(_) => "rule",
            Self::ActionPanicked { .. } => "action_panicked",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rule(v) => write!(f, "{v}"),
            Self::ActionPanicked { action, message } => {
                write!(f, "action '{action}' panicked: {message}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rule(v) => Some(v),
            Self::ActionPanicked { .. } => None,
        }
    }
}

impl From<TradeRuleViolation> for Error {
    fn from(v: TradeRuleViolation) -> Self {
        Self::Rule(v)
    }
}
