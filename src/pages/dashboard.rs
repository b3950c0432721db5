//! Dashboard page - stat cards, check-in uploads and the activity heatmap.

use chrono::Local;
use dioxus::prelude::*;
use pysra_core::DashboardStats;
use pysra_ui::{Alert, CalendarHeatmap, FileInput, StatCard};

use crate::components::{NavHeader, NavLocation};
use crate::context::use_dashboard;

/// Id of the heatmap container
const HEATMAP_CONTAINER: &str = "emotion-heatmap";

/// Dashboard page component.
///
/// Startup notices are flashed on the first visit only.
#[component]
pub fn Dashboard() -> Element {
    let mut dashboard = use_dashboard();
    let notices = use_hook(|| std::mem::take(&mut dashboard.write().notices));

    let heatmap = dashboard.read().heatmap.clone();
    let today = Local::now().date_naive();
    let stats = DashboardStats::compute(&heatmap, today);

    let cards = [
        ("\u{1F4C5}", stats.days_logged.to_string(), "Days Logged"),
        ("\u{1F525}", stats.current_streak.to_string(), "Current Streak"),
        ("\u{1F4CA}", format!("{}%", stats.average_percent()), "Average Intensity"),
        ("\u{26A1}", format!("{:.0}%", stats.peak_intensity * 100.0), "Peak Intensity"),
    ];

    rsx! {
        NavHeader { current: NavLocation::Dashboard }

        main { class: "dashboard",
            div { class: "alerts",
                for (level, message) in notices.iter() {
                    Alert { level: *level, message: message.clone() }
                }
            }

            section { id: "stats", class: "stats-grid",
                for (index, (icon, value, label)) in cards.iter().enumerate() {
                    StatCard {
                        index,
                        icon: icon.to_string(),
                        value: value.clone(),
                        label: label.to_string(),
                    }
                }
            }

            section { id: "check-in", class: "card",
                h2 { class: "section-header", "Check-in" }
                p { class: "body-text", "Pick a photo or a voice note for today's check-in." }
                div { class: "upload-row",
                    FileInput { id: "face-image".to_string(), accept: "image/*".to_string(), icon: "\u{1F4F7}".to_string() }
                    FileInput { id: "voice-note".to_string(), accept: "audio/*".to_string(), icon: "\u{1F3A4}".to_string() }
                }
            }

            section { id: "activity", class: "card",
                h2 { class: "section-header", "Activity" }
                CalendarHeatmap {
                    container_id: HEATMAP_CONTAINER.to_string(),
                    data: heatmap,
                    today,
                }
            }
        }
    }
}
