//! Stat Card Component
//!
//! Summary tile that fades and slides in on page load. Cards are given
//! their position in the row so the entrance cascades.

use dioxus::prelude::*;
use pysra_core::stagger::{self, CardPhase};
use tokio::time::Instant;

/// Properties for the StatCard component
#[derive(Clone, PartialEq, Props)]
pub struct StatCardProps {
    /// Position in the card row, in document order
    pub index: usize,
    pub value: String,
    pub label: String,
    #[props(default)]
    pub icon: Option<String>,
}

/// Statistics card with staggered entrance
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     StatCard { index: 0, value: "12".to_string(), label: "Days Logged".to_string() }
///     StatCard { index: 1, value: "64%".to_string(), label: "Average Intensity".to_string() }
/// }
/// ```
#[component]
pub fn StatCard(props: StatCardProps) -> Element {
    let mut phase = use_signal(CardPhase::default);
    let index = props.index;

    use_effect(move || {
        spawn(async move {
            let mounted = Instant::now();
            tokio::time::sleep_until(mounted + stagger::settle_at(index)).await;
            phase.set(CardPhase::at(index, mounted.elapsed()));
        });
    });

    rsx! {
        div { class: "card stat-card", style: "{phase().style()}",
            if let Some(icon) = &props.icon {
                div { class: "stat-icon", "{icon}" }
            }
            div { class: "stat-value", "{props.value}" }
            div { class: "stat-label", "{props.label}" }
        }
    }
}
