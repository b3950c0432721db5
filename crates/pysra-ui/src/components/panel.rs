//! Game panels that toggle visibility and scroll into view when opened.

use std::rc::Rc;
use std::time::Duration;

use dioxus::html::ScrollBehavior;
use dioxus::prelude::*;

/// Handle to a mounted element that can be scrolled into view later.
#[derive(Clone, Copy, PartialEq)]
pub struct ScrollTarget {
    element: Signal<Option<Rc<MountedData>>>,
}

pub fn use_scroll_target() -> ScrollTarget {
    ScrollTarget {
        element: use_signal(|| None),
    }
}

impl ScrollTarget {
    /// Remember the element from its `onmounted` event.
    pub fn capture(&mut self, evt: MountedEvent) {
        self.element.set(Some(evt.data()));
    }

    /// Smoothly scroll the element into view. No-op until mounted.
    pub fn scroll_into_view(&self) {
        let Some(element) = self.element.peek().clone() else {
            return;
        };
        spawn(async move {
            // let the panel render as visible before measuring it
            tokio::time::sleep(Duration::from_millis(16)).await;
            if let Err(e) = element.scroll_to(ScrollBehavior::Smooth).await {
                tracing::debug!("scroll into view failed: {:?}", e);
            }
        });
    }
}

/// Inline display style for a toggled panel
pub fn display_style(visible: bool) -> &'static str {
    if visible {
        "display: block;"
    } else {
        "display: none;"
    }
}

/// Properties for the GamePanel component
#[derive(Clone, PartialEq, Props)]
pub struct GamePanelProps {
    /// Element id of the panel (e.g. `breathing-area`)
    pub id: String,
    pub visible: bool,
    /// Scroll handle the owning widget uses when opening the panel
    pub scroll: ScrollTarget,
    pub children: Element,
}

/// Panel container that is always mounted and toggled with `display`
#[component]
pub fn GamePanel(props: GamePanelProps) -> Element {
    let mut scroll = props.scroll;

    rsx! {
        div {
            id: "{props.id}",
            class: "game-area",
            style: display_style(props.visible),
            onmounted: move |evt| scroll.capture(evt),
            {props.children}
        }
    }
}
