use dioxus::prelude::*;

use crate::context::DashboardContext;
use crate::pages::{Dashboard, Games};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Dashboard with stat cards, check-in uploads and the activity heatmap
/// - `/games` - Breathing exercise, quotes and the memory game
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/games")]
    Games {},
}

/// Root application component.
///
/// Provides global styles, dashboard context, and routing.
#[component]
pub fn App() -> Element {
    let dashboard: Signal<DashboardContext> =
        use_signal(|| DashboardContext::from(crate::get_startup()));

    use_context_provider(|| dashboard);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
