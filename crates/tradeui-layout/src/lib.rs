#![forbid(unsafe_code)]

//! Preferred-size and compact-mode decisions for the trade-offer panel.
//!
//! [`PanelSizer`] answers one question: given the space the hosting panel has
//! available and the current negotiation state, how big does the panel want
//! to be, and does the counter-offer need the "compact" arrangement (buttons
//! beside the resource grid instead of below it)? It owns no widget state —
//! the only thing it remembers between calls is the previous compact flag,
//! used solely to detect a transition worth repainting.
//!
//! # Invariants
//!
//! 1. Given the same inputs and cached compact flag, the decision is pure.
//! 2. With counter-offer mode fixed on, lowering the available height below
//!    the combined-height threshold flips compact on; it never flips back at
//!    the same height.
//! 3. The compact flag is meaningful only while the counter-offer is showing;
//!    it is left untouched otherwise.

pub mod metrics;

pub use metrics::PanelMetrics;

/// A preferred width/height pair, in scaled pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeHint {
    pub width: u32,
    pub height: u32,
}

/// The state-dependent inputs to a size decision.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutQuery {
    /// Whether the counter-offer box is showing.
    pub counter_offer_mode: bool,
    /// How far the measured give/get label text exceeds the baseline width,
    /// in scaled pixels; 0 when it fits. Measured externally (font metrics
    /// are a rendering concern).
    pub label_width_overflow: u32,
    /// Whether a line must be reserved for the auto-reject countdown.
    pub wants_countdown_line: bool,
}

/// The outcome of a size decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutDecision {
    /// Preferred panel size, clamped to the available space.
    pub size: SizeHint,
    /// Whether the counter-offer must use the compact arrangement.
    pub compact: bool,
    /// The compact flag changed; the host should request a repaint.
    pub repaint_needed: bool,
}

/// Decides the panel's preferred size and compact layout mode.
#[derive(Debug, Clone)]
pub struct PanelSizer {
    metrics: PanelMetrics,
    scale: u32,
    available_width: u32,
    available_height: u32,
    compact: bool,
}

impl PanelSizer {
    /// Create a sizer. `scale` is the host's display scale factor (1 for
    /// unscaled); a zero scale is treated as 1.
    #[must_use]
    pub fn new(metrics: PanelMetrics, scale: u32) -> Self {
        Self {
            metrics,
            scale: scale.max(1),
            available_width: 0,
            available_height: 0,
            compact: false,
        }
    }

    /// Record the space available in the hosting panel.
    ///
    /// Returns `true` if the space changed (the host should then re-query
    /// the preferred size). Zero means "unknown, don't clamp".
    pub fn set_available_space(&mut self, width: u32, height: u32) -> bool {
        if width == self.available_width && height == self.available_height {
            return false;
        }
        self.available_width = width;
        self.available_height = height;
        true
    }

    /// Compute the preferred size and compact mode for the given state.
    pub fn preferred_size(&mut self, query: &LayoutQuery) -> LayoutDecision {
        let m = &self.metrics;
        let s = self.scale;

        let mut pref_w = m.min_width() * s;
        let overflow = query.label_width_overflow;
        if overflow > 0 {
            pref_w = (m.min_width_from_buttons() * s).max(m.min_width_from_labels() * s + overflow);
        }

        let mut pref_h;
        let mut repaint_needed = false;
        if !query.counter_offer_mode {
            pref_h = m.offer_height() * s;
        } else {
            let was_compact = self.compact;

            pref_h = m.combined_height() * s;
            if self.available_height >= pref_h {
                self.compact = false;
            } else {
                self.compact = true;
                pref_h -= (m.button_height + 2) * s;
                pref_w = m.compact_min_width() * s;
                if overflow > 0 {
                    pref_w += overflow;
                }
            }

            repaint_needed = was_compact != self.compact;
        }

        if query.counter_offer_mode && self.compact {
            // Compact mode suppresses the balloon point.
            pref_h -= m.balloon_point_height * s;
        } else if query.wants_countdown_line {
            pref_h += m.label_line_height * s;
        }

        if self.available_width != 0 && self.available_width < pref_w {
            pref_w = self.available_width;
        }
        if self.available_height != 0 && self.available_height < pref_h {
            pref_h = self.available_height;
        }

        LayoutDecision {
            size: SizeHint {
                width: pref_w,
                height: pref_h,
            },
            compact: self.compact,
            repaint_needed,
        }
    }

    /// The compact flag from the most recent counter-offer decision.
    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// The metrics table in use.
    #[must_use]
    pub fn metrics(&self) -> &PanelMetrics {
        &self.metrics
    }
}

impl Default for PanelSizer {
    fn default() -> Self {
        Self::new(PanelMetrics::default(), 1)
    }
}

/// Excess of a measured label width over the baseline assumption, in scaled
/// pixels. Feed the result into [`LayoutQuery::label_width_overflow`].
#[must_use]
pub fn label_width_overflow(measured_width: u32, metrics: &PanelMetrics, scale: u32) -> u32 {
    measured_width.saturating_sub(metrics.gives_label_min_width * scale.max(1))
}
