//! Navigation Header Component
//!
//! App title, page links, and in-page section links for the current page.

use dioxus::prelude::*;
use pysra_ui::AnchorLink;

use crate::app::Route;

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Dashboard,
    Games,
}

impl NavLocation {
    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Dashboard => "Dashboard",
            NavLocation::Games => "Games",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Dashboard => Route::Dashboard {},
            NavLocation::Games => Route::Games {},
        }
    }

    /// In-page sections as `(href, label)`
    pub fn sections(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            NavLocation::Dashboard => &[
                ("#stats", "Overview"),
                ("#check-in", "Check-in"),
                ("#activity", "Activity"),
            ],
            NavLocation::Games => &[
                ("#breathing-area", "Breathe"),
                ("#quote-area", "Quotes"),
                ("#memory-area", "Memory"),
            ],
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current location in the app
    pub current: NavLocation,
}

#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let locations = [NavLocation::Dashboard, NavLocation::Games];

    rsx! {
        header { class: "nav-header",
            h1 { class: "app-title", "Pysra" }

            nav { class: "nav-links",
                for location in locations {
                    Link {
                        to: location.route(),
                        class: if location == props.current { "nav-link active" } else { "nav-link" },
                        "{location.display_name()}"
                    }
                }
            }

            nav { class: "nav-sections",
                for (href, label) in props.current.sections().iter() {
                    AnchorLink { href: href.to_string(), class: "section-link".to_string(), "{label}" }
                }
            }
        }
    }
}
