//! Positive Quote Widget

use dioxus::prelude::*;
use pysra_core::quote::QuoteBox;

use super::{use_scroll_target, Button, ButtonVariant, GamePanel};

/// Game card that reveals a random quote in the `quote-area` panel.
#[component]
pub fn QuoteWidget() -> Element {
    let mut quotes = use_signal(QuoteBox::new);
    let scroll = use_scroll_target();

    let show = move |_| {
        let quote = quotes.write().show(&mut rand::rng());
        tracing::debug!(quote, "quote shown");
        scroll.scroll_into_view();
    };

    let close = move |_| quotes.write().close();

    let state = quotes.read();

    rsx! {
        div { class: "game-card",
            div { class: "game-icon", "\u{1F4AC}" }
            h3 { "Positive Quotes" }
            p { "Get a dose of encouragement." }
            Button { onclick: show, "Show Quote" }
        }

        GamePanel { id: "quote-area".to_string(), visible: state.is_visible(), scroll: scroll,
            p { id: "quote-text", class: "quote-text", "{state.display_text()}" }
            div { class: "panel-actions",
                Button { variant: ButtonVariant::Ghost, onclick: show, "Another" }
                Button { variant: ButtonVariant::Secondary, onclick: close, "Close" }
            }
        }
    }
}
