//! Breathing Exercise Widget
//!
//! Game card with a start button, plus the `breathing-area` panel that
//! cycles through the breathing phrases every four seconds.

use dioxus::prelude::*;
use pysra_core::breathing::{BreathingExercise, BREATH_INTERVAL};

use super::{use_scroll_target, use_timer_slot, Button, ButtonVariant, GamePanel};

#[component]
pub fn BreathingWidget() -> Element {
    let mut exercise = use_signal(BreathingExercise::new);
    let mut ticker = use_timer_slot();
    let scroll = use_scroll_target();

    let start = move |_| {
        let generation = exercise.write().start();
        // arming replaces any ticker left from a previous start
        ticker.every(BREATH_INTERVAL, move || {
            exercise.write().tick(generation);
        });
        scroll.scroll_into_view();
    };

    let stop = move |_| {
        ticker.cancel();
        exercise.write().stop();
    };

    let ex = exercise.read();

    rsx! {
        div { class: "game-card",
            div { class: "game-icon", "\u{1F9D8}" }
            h3 { "Breathing Exercise" }
            p { "Follow a calm four-step breathing rhythm." }
            Button { onclick: start, "Start" }
        }

        GamePanel { id: "breathing-area".to_string(), visible: ex.is_visible(), scroll: scroll,
            div { class: "breathing-circle" }
            p { id: "breathing-text", class: "breathing-text", "{ex.phrase()}" }
            Button { variant: ButtonVariant::Secondary, onclick: stop, "Stop" }
        }
    }
}
