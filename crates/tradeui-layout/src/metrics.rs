#![forbid(unsafe_code)]

//! The metrics table behind the panel's size decisions.
//!
//! The individual constants are product values; what matters to this crate
//! is only how they combine into the derived minimums and heights below.
//! All values are unscaled, the sizer multiplies by the display scale factor.

use serde::{Deserialize, Serialize};

/// Unscaled layout constants for one trade-offer panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelMetrics {
    /// Typical button width.
    pub button_width: u32,
    /// Typical button height.
    pub button_height: u32,
    /// Height of a single-line text label, including the countdown line.
    pub label_line_height: u32,
    /// Height of one resource-square row label.
    pub square_line_height: u32,
    /// Width of the 5-wide resource square grid.
    pub grid_width: u32,
    /// Height of the 2-row resource square grid.
    pub grid_height: u32,
    /// Baseline width of the "Gives You:"/"They Get:" labels; measured text
    /// wider than this becomes the label-width overflow.
    pub gives_label_min_width: u32,
    /// Height of the speech balloon's protruding point.
    pub balloon_point_height: u32,
    /// Drop-shadow thickness along the right/bottom edges.
    pub shadow_size: u32,
}

impl Default for PanelMetrics {
    fn default() -> Self {
        Self {
            button_width: 55,
            button_height: 18,
            label_line_height: 14,
            square_line_height: 20,
            grid_width: 96,
            grid_height: 39,
            gives_label_min_width: 49,
            balloon_point_height: 12,
            shadow_size: 5,
        }
    }
}

impl PanelMetrics {
    /// Height of the offer balloon with its action buttons, without the
    /// counter-offer box or countdown line.
    #[must_use]
    pub fn offer_height(&self) -> u32 {
        self.balloon_point_height
            + 3
            + (2 * self.label_line_height + 4)
            + (self.grid_height + 5)
            + self.button_height
            + 5
            + self.shadow_size
    }

    /// The slice of [`offer_height`](Self::offer_height) contributed by the
    /// Accept/Reject/Counter row; removed while the counter-offer is showing.
    #[must_use]
    pub fn offer_buttons_added_height(&self) -> u32 {
        self.button_height + 5 + 2
    }

    /// Height of the counter-offer box in the normal (stacked) arrangement.
    #[must_use]
    pub fn counter_height(&self) -> u32 {
        4 + self.square_line_height + self.grid_height + 6 + self.button_height + 7
            + self.shadow_size
    }

    /// Minimum width needed by the give/get labels and the square grid.
    #[must_use]
    pub fn min_width_from_labels(&self) -> u32 {
        (8 + self.gives_label_min_width + 6 + self.grid_width + 8) + self.shadow_size
    }

    /// Minimum width needed by three side-by-side buttons.
    #[must_use]
    pub fn min_width_from_buttons(&self) -> u32 {
        (2 * (5 + 5) + 3 * self.button_width) + self.shadow_size
    }

    /// Panel minimum width: the larger of the label and button minimums.
    #[must_use]
    pub fn min_width(&self) -> u32 {
        self.min_width_from_buttons().max(self.min_width_from_labels())
    }

    /// Minimum width in compact mode, where the buttons sit beside the grid
    /// instead of below it: shorter but wider.
    #[must_use]
    pub fn compact_min_width(&self) -> u32 {
        2 + self.gives_label_min_width + 6 + self.grid_width + 2 + self.button_width + 2
            + self.shadow_size
    }

    /// Combined height of offer plus stacked counter-offer; the threshold
    /// below which compact mode engages.
    #[must_use]
    pub fn combined_height(&self) -> u32 {
        self.offer_height() - self.offer_buttons_added_height() + self.counter_height()
    }
}
