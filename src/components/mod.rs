//! App-level components for the Pysra dashboard.

mod nav_header;

pub use nav_header::{NavHeader, NavLocation};
