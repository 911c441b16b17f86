#![forbid(unsafe_code)]

//! "Offered to: …" line building and wrapping.
//!
//! The recipient list is concatenated in seat order, skipping vacant seats,
//! and wrapped onto a second line once it exceeds a character budget. The
//! wrap point is the right-most `", "` boundary at or before the budget; if
//! none exists the line is left unwrapped. The 25/30 budgets are a product
//! decision, not derived here.

use tradeui_core::RecipientSet;

/// Wrap budget (in characters) for the recipient list.
///
/// Larger games and sea-board variants get a wider panel, so they wrap later.
#[must_use]
pub fn recipient_wrap_budget(max_players: usize, has_sea_board: bool) -> usize {
    if max_players > 4 || has_sea_board { 30 } else { 25 }
}

/// The one- or two-line "Offered to" text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipientLines {
    /// First line; empty when no offer is shown.
    pub line1: String,
    /// Overflow line, present only when the text wrapped.
    pub line2: Option<String>,
}

impl RecipientLines {
    /// Clear both lines.
    pub fn clear(&mut self) {
        self.line1.clear();
        self.line2 = None;
    }

    /// Whether any text is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line1.is_empty()
    }
}

/// Build the display lines for an offer's recipients.
///
/// `seat_names` is indexed by seat; `None` marks a vacant seat, which is
/// skipped even if the recipient mask names it (a player may have left
/// between the offer being sent and displayed).
#[must_use]
pub fn build_recipient_lines(
    recipients: &RecipientSet,
    seat_names: &[Option<String>],
    wrap_budget: usize,
) -> RecipientLines {
    let mut names = String::new();
    for seat in recipients.iter() {
        if let Some(Some(name)) = seat_names.get(seat.index()) {
            if !names.is_empty() {
                names.push_str(", ");
            }
            names.push_str(name);
        }
    }

    let full = format!("Offered to: {names}");
    let (line1, line2) = wrap_at_comma(&full, wrap_budget);
    RecipientLines { line1, line2 }
}

/// Wrap once at the right-most `", "` whose start is at or before `budget`
/// characters. Keeps the comma on the first line.
fn wrap_at_comma(text: &str, budget: usize) -> (String, Option<String>) {
    if text.chars().count() <= budget {
        return (text.to_owned(), None);
    }

    // Byte offset of the character at position `budget`; the whole string is
    // past the budget, so `nth` cannot run off the end by more than one.
    let budget_byte = text
        .char_indices()
        .nth(budget)
        .map_or(text.len(), |(i, _)| i);

    let wrap_at = text
        .match_indices(", ")
        .take_while(|(i, _)| *i <= budget_byte)
        .last()
        .map(|(i, _)| i);

    match wrap_at {
        Some(i) => {
            // +1 keeps the comma on the first line.
            let head = text[..=i].trim().to_owned();
            let tail = text[i + 1..].trim().to_owned();
            (head, Some(tail))
        }
        None => (text.to_owned(), None),
    }
}
