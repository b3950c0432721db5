//! Games page - three small wellbeing widgets.

use dioxus::prelude::*;
use pysra_ui::{BreathingWidget, MemoryGameWidget, QuoteWidget};

use crate::components::{NavHeader, NavLocation};

#[component]
pub fn Games() -> Element {
    rsx! {
        NavHeader { current: NavLocation::Games }

        main { class: "games",
            h2 { class: "section-header", "Mood Boosters" }
            div { class: "games-grid",
                BreathingWidget {}
                QuoteWidget {}
                MemoryGameWidget {}
            }
        }
    }
}
