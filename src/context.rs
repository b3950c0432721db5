//! Dashboard context provider.
//!
//! Holds what the dashboard renders from: the heatmap data loaded at
//! startup and any notices to flash on the first visit.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let dashboard = use_dashboard();
//! let data = dashboard.read().heatmap.clone();
//! ```

use dioxus::prelude::*;
use pysra_core::{AlertLevel, HeatmapData};

use crate::Startup;

/// Shared state for dashboard pages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardContext {
    pub heatmap: HeatmapData,
    /// Alerts shown once; cleared after the dashboard first renders them
    pub notices: Vec<(AlertLevel, String)>,
}

impl From<Startup> for DashboardContext {
    fn from(startup: Startup) -> Self {
        Self {
            heatmap: startup.heatmap,
            notices: startup.notices,
        }
    }
}

/// Hook to access the dashboard context.
pub fn use_dashboard() -> Signal<DashboardContext> {
    use_context::<Signal<DashboardContext>>()
}
