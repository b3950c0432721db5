//! Console logging setup.
//!
//! ```ignore
//! use pysra_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new()
//!     .with_filter("pysra=debug,pysra_ui=debug")
//!     .init();
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor an explicit filter is set.
pub const DEFAULT_FILTER: &str = "info";

/// Builder for the process-wide tracing subscriber.
#[derive(Debug, Clone, Default)]
pub struct LoggingBuilder {
    env_filter: Option<String>,
    with_target: bool,
}

impl LoggingBuilder {
    /// Create a new logging builder.
    pub fn new() -> Self {
        Self {
            env_filter: None,
            with_target: true,
        }
    }

    /// Set the environment filter (e.g., "pysra=info,pysra_core=debug").
    ///
    /// Takes precedence over `RUST_LOG`.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Hide the module path on each line.
    pub fn without_target(mut self) -> Self {
        self.with_target = false;
        self
    }

    /// Resolve the filter: explicit, then `RUST_LOG`, then [`DEFAULT_FILTER`].
    pub fn build_filter(&self) -> EnvFilter {
        match &self.env_filter {
            Some(filter) => EnvFilter::new(filter),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        }
    }

    /// Install the subscriber globally.
    ///
    /// Returns `false` if a global subscriber was already installed.
    pub fn init(self) -> bool {
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(self.with_target);
        tracing_subscriber::registry()
            .with(self.build_filter())
            .with(fmt_layer)
            .try_init()
            .is_ok()
    }
}

/// Install console logging with the default filter.
pub fn init_logging() -> bool {
    LoggingBuilder::new().init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let filter = LoggingBuilder::new().with_filter("pysra_core=debug").build_filter();
        assert_eq!(filter.to_string(), "pysra_core=debug");
    }

    #[test]
    fn second_init_reports_failure() {
        let _ = LoggingBuilder::new().with_filter("warn").init();
        assert!(!LoggingBuilder::new().with_filter("warn").init());
    }
}
