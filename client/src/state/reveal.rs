//! One-shot reveal-on-scroll tracking.
//!
//! DESIGN
//! ======
//! Each revealed element owns a `RevealTracker` that moves
//! `Unobserved -> Observing -> Revealed`, or `-> Released` when the element
//! unmounts first. `Revealed` and `Released` are terminal, so intersection
//! reports that arrive after the first reveal are ignored and the reveal class
//! is applied at most once per element. The browser observer glue lives in
//! `util::reveal`; this module is the pure state machine plus the entrance
//! timings the sections use.
//!
//! The browser observer is registered with the threshold and only calls back
//! on crossings, so any intersecting report while observing reveals. The
//! reported ratio is not re-checked.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Visible fraction at which the contact section reveals.
pub const CONTACT_REVEAL_THRESHOLD: f64 = 0.1;

/// Observer lifecycle for one element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealPhase {
    #[default]
    Unobserved,
    Observing,
    Revealed,
    Released,
}

/// Outcome of feeding one intersection report to the tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStep {
    /// First qualifying report: apply the reveal and stop observing.
    Reveal,
    /// Nothing to do.
    Ignore,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTracker {
    phase: RevealPhase,
    threshold: f64,
}

impl RevealTracker {
    /// `threshold` is the visible fraction the observer is registered with,
    /// clamped to `0.0..=1.0`.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_finite() { threshold.clamp(0.0, 1.0) } else { 0.0 };
        Self { phase: RevealPhase::Unobserved, threshold }
    }

    #[must_use]
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.phase == RevealPhase::Revealed
    }

    /// Start observing. Returns `true` only on the first call from
    /// `Unobserved`, i.e. when an observer should be registered.
    pub fn observe(&mut self) -> bool {
        if self.phase != RevealPhase::Unobserved {
            return false;
        }
        self.phase = RevealPhase::Observing;
        true
    }

    /// Feed one intersection report.
    pub fn on_intersection(&mut self, is_intersecting: bool) -> RevealStep {
        if self.phase != RevealPhase::Observing || !is_intersecting {
            return RevealStep::Ignore;
        }
        self.phase = RevealPhase::Revealed;
        RevealStep::Reveal
    }

    /// The element is going away. Returns `true` when a live registration
    /// still has to be released.
    pub fn release(&mut self) -> bool {
        match self.phase {
            RevealPhase::Observing => {
                self.phase = RevealPhase::Released;
                true
            }
            RevealPhase::Unobserved => {
                self.phase = RevealPhase::Released;
                false
            }
            RevealPhase::Revealed | RevealPhase::Released => false,
        }
    }
}

/// Fade-and-rise entrance used by the projects header and cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entrance {
    pub offset_px: u32,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

/// Delay added per card so the grid reveals as a cascade.
pub const CARD_STAGGER_MS: u32 = 200;

pub const HEADER_ENTRANCE: Entrance = Entrance { offset_px: 20, duration_ms: 600, delay_ms: 0 };

/// Entrance for the card at `index` in the grid.
#[must_use]
pub fn card_entrance(index: usize) -> Entrance {
    let step = u32::try_from(index).unwrap_or(u32::MAX);
    Entrance { offset_px: 50, duration_ms: 600, delay_ms: step.saturating_mul(CARD_STAGGER_MS) }
}

impl Entrance {
    /// Inline style for the hidden or revealed state.
    #[must_use]
    pub fn style(self, revealed: bool) -> String {
        let (opacity, offset) = if revealed { (1, 0) } else { (0, self.offset_px) };
        let timing = format!("{}ms ease-out {}ms", self.duration_ms, self.delay_ms);
        format!("opacity: {opacity}; transform: translateY({offset}px); transition: opacity {timing}, transform {timing};")
    }
}
