//! Pysra Dashboard Core Library
//!
//! UI-free state machines behind the dashboard widgets.
//!
//! ## Overview
//!
//! Every widget on the Pysra dashboard is a small, independent piece of
//! interactive behavior. This crate holds the parts that do not need a
//! document to exist: what a card looks like at each animation phase, when
//! an alert disappears, how the memory game reacts to a flip, which cells
//! the calendar heatmap draws. The Dioxus components in `pysra-ui` own one
//! of these structs each and drive it from clicks and timers.
//!
//! ## Quick Start
//!
//! ```ignore
//! use pysra_core::memory::{FlipOutcome, MemoryGame};
//!
//! let mut game = MemoryGame::new();
//! game.start(&mut rand::rng());
//!
//! if let FlipOutcome::PairComplete { moves } = game.flip(3) {
//!     // evaluate after EVALUATE_DELAY
//!     let outcome = game.evaluate();
//! }
//! ```

pub mod alert;
pub mod breathing;
pub mod error;
pub mod heatmap;
pub mod logging;
pub mod memory;
pub mod nav;
pub mod quote;
pub mod stagger;
pub mod stats;
pub mod upload;

// Re-exports
pub use alert::{AlertLevel, AlertPhase};
pub use breathing::BreathingExercise;
pub use error::{PysraError, PysraResult};
pub use heatmap::{ActivityRecord, HeatmapData, HeatmapDay, HeatmapGrid};
pub use memory::{Card, FlipOutcome, FlipRejection, MatchOutcome, MemoryGame};
pub use quote::QuoteBox;
pub use stagger::CardPhase;
pub use stats::DashboardStats;
