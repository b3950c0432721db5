//! Auto-dismissing alert banner.

use dioxus::prelude::*;
use pysra_core::alert::{AlertLevel, AlertPhase};
use tokio::time::Instant;

/// Properties for the Alert component
#[derive(Clone, PartialEq, Props)]
pub struct AlertProps {
    #[props(default)]
    pub level: AlertLevel,
    pub message: String,
}

/// Flash message that fades out after five seconds and then removes itself.
///
/// Every alert keeps its own clock.
#[component]
pub fn Alert(props: AlertProps) -> Element {
    let mut phase = use_signal(AlertPhase::default);

    use_effect(move || {
        spawn(async move {
            let mounted = Instant::now();
            while let Some(wait) = AlertPhase::until_next(mounted.elapsed()) {
                tokio::time::sleep(wait).await;
                phase.set(AlertPhase::at(mounted.elapsed()));
            }
            tracing::debug!("alert dismissed");
        });
    });

    let Some(style) = phase().style() else {
        return rsx! {};
    };

    rsx! {
        div { class: props.level.class(), role: "alert", style: style,
            "{props.message}"
        }
    }
}
