//! Page components for the Pysra dashboard.

mod dashboard;
mod games;

pub use dashboard::Dashboard;
pub use games::Games;
