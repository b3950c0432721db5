//! Pysra Dashboard UI Components
//!
//! Dioxus components for the dashboard and games pages. Each component owns
//! one state machine from `pysra-core` and drives it from clicks and timers.
//!
//! ## Timers
//!
//! Delays are `tokio::time::sleep` futures run in Dioxus tasks. A widget
//! keeps the handle in a [`TimerSlot`](components::TimerSlot) so that
//! restarting or closing it cancels whatever was still scheduled.

pub mod components;

pub use components::*;
