//! Breathing exercise state machine.
//!
//! While running, the exercise cycles through [`PHASES`], advancing one
//! step every [`BREATH_INTERVAL`]. The ticker itself lives with the
//! component; this type only tracks which phrase is showing.

use std::time::Duration;

/// Phrases shown in order, wrapping around.
pub const PHASES: [&str; 4] = ["Breathe In...", "Hold...", "Breathe Out...", "Hold..."];

/// Time each phrase stays on screen.
pub const BREATH_INTERVAL: Duration = Duration::from_secs(4);

/// Visibility and position in the phrase cycle
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
enum BreathingState {
    #[default]
    Hidden,
    Running { phase: usize },
}

/// The breathing exercise panel
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BreathingExercise {
    state: BreathingState,
    /// Incremented on every `start`; lets a ticker notice it was superseded
    generation: u64,
}

impl BreathingExercise {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the panel at phase 0, restarting the cycle if already running.
    ///
    /// Returns the generation the caller's ticker should carry. The caller
    /// must cancel any ticker it armed for an earlier generation.
    pub fn start(&mut self) -> u64 {
        self.state = BreathingState::Running { phase: 0 };
        self.generation += 1;
        tracing::debug!(generation = self.generation, "breathing exercise started");
        self.generation
    }

    /// Advance to the next phrase.
    ///
    /// Ignored while hidden or when `generation` belongs to a previous start.
    /// Returns the phrase now showing.
    pub fn tick(&mut self, generation: u64) -> Option<&'static str> {
        if generation != self.generation {
            return None;
        }
        match self.state {
            BreathingState::Running { phase } => {
                let next = (phase + 1) % PHASES.len();
                self.state = BreathingState::Running { phase: next };
                Some(PHASES[next])
            }
            BreathingState::Hidden => None,
        }
    }

    /// Hide the panel. The caller cancels its ticker.
    pub fn stop(&mut self) {
        self.state = BreathingState::Hidden;
        tracing::debug!("breathing exercise stopped");
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, BreathingState::Running { .. })
    }

    /// Phrase currently on screen, empty while hidden
    pub fn phrase(&self) -> &'static str {
        match self.state {
            BreathingState::Running { phase } => PHASES[phase],
            BreathingState::Hidden => "",
        }
    }
}
