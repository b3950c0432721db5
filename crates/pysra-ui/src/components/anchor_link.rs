//! In-page navigation link with smooth scrolling.

use dioxus::prelude::*;
use pysra_core::nav;

/// Properties for the AnchorLink component
#[derive(Clone, PartialEq, Props)]
pub struct AnchorLinkProps {
    /// Link target; only `#...` hrefs are intercepted
    pub href: String,
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

/// Anchor that scrolls smoothly to its in-page target instead of jumping.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     AnchorLink { href: "#heatmap".to_string(), "Activity" }
/// }
/// ```
#[component]
pub fn AnchorLink(props: AnchorLinkProps) -> Element {
    let href = props.href.clone();
    let class = props.class.clone().unwrap_or_else(|| "nav-link".to_string());

    let handle_click = move |evt: MouseEvent| {
        if !nav::is_in_page(&href) {
            return;
        }
        evt.prevent_default();
        let Some(selector) = nav::anchor_selector(&href) else {
            return;
        };
        let selector = selector.to_string();
        let script = nav::scroll_into_view_script(&selector);
        spawn(async move {
            match document::eval(&script).await {
                Ok(scrolled) if scrolled.as_bool() == Some(true) => {}
                Ok(_) => tracing::debug!(%selector, "no element to scroll to"),
                Err(e) => tracing::debug!(%selector, "smooth scroll failed: {:?}", e),
            }
        });
    };

    rsx! {
        a { class: "{class}", href: "{props.href}", onclick: handle_click,
            {props.children}
        }
    }
}
