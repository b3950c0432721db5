//! Reusable dashboard components
//!
//! Element ids and classes match the dashboard stylesheet: `stat-card`,
//! `alert`, `memory-card`, `heatmap-cell` and the fixed game panel ids.

mod alert;
mod anchor_link;
mod breathing;
mod button;
mod calendar_heatmap;
mod file_input;
mod memory_game;
mod panel;
mod quote_box;
mod stat_card;
#[cfg(test)]
mod test_support;
mod timer;

pub use alert::*;
pub use anchor_link::*;
pub use breathing::*;
pub use button::*;
pub use calendar_heatmap::*;
pub use file_input::*;
pub use memory_game::*;
pub use panel::*;
pub use quote_box::*;
pub use stat_card::*;
pub use timer::*;
