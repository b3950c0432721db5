//! Staggered load-in for dashboard stat cards.
//!
//! Each card starts hidden and offset, then settles into place. Card `i`
//! begins at `i * STAGGER_STEP` so the row cascades instead of popping in
//! at once.

use std::time::Duration;

/// Offset between successive cards starting their animation.
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

/// Delay between a card being hidden and it settling.
pub const SETTLE_DELAY: Duration = Duration::from_millis(50);

/// CSS transition applied while a card animates.
pub const CARD_TRANSITION: &str = "all 0.5s ease";

/// Animation phase of a single card.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CardPhase {
    /// Invisible and shifted down, waiting for its turn
    #[default]
    Hidden,
    /// Visible in its final position
    Settled,
}

impl CardPhase {
    /// Inline style for this phase
    pub fn style(&self) -> String {
        match self {
            CardPhase::Hidden => format!(
                "opacity: 0; transform: translateY(20px); transition: {};",
                CARD_TRANSITION
            ),
            CardPhase::Settled => format!(
                "opacity: 1; transform: translateY(0); transition: {};",
                CARD_TRANSITION
            ),
        }
    }

    /// Phase of card `index` once `elapsed` has passed since page load.
    pub fn at(index: usize, elapsed: Duration) -> Self {
        if elapsed >= settle_at(index) {
            CardPhase::Settled
        } else {
            CardPhase::Hidden
        }
    }
}

/// When card `index` starts animating.
pub fn start_offset(index: usize) -> Duration {
    STAGGER_STEP * index as u32
}

/// When card `index` reaches [`CardPhase::Settled`].
pub fn settle_at(index: usize) -> Duration {
    start_offset(index) + SETTLE_DELAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_cascade() {
        assert_eq!(start_offset(0), Duration::ZERO);
        assert_eq!(start_offset(1), Duration::from_millis(100));
        assert_eq!(start_offset(4), Duration::from_millis(400));
        assert_eq!(settle_at(2), Duration::from_millis(250));
    }

    #[test]
    fn phase_follows_schedule() {
        assert_eq!(CardPhase::at(0, Duration::ZERO), CardPhase::Hidden);
        assert_eq!(CardPhase::at(0, Duration::from_millis(50)), CardPhase::Settled);
        assert_eq!(CardPhase::at(3, Duration::from_millis(349)), CardPhase::Hidden);
        assert_eq!(CardPhase::at(3, Duration::from_millis(350)), CardPhase::Settled);
    }

    #[test]
    fn styles() {
        assert!(CardPhase::Hidden.style().contains("opacity: 0"));
        assert!(CardPhase::Hidden.style().contains("translateY(20px)"));
        assert!(CardPhase::Settled.style().contains("opacity: 1"));
        assert!(CardPhase::Settled.style().contains("translateY(0)"));
    }
}
