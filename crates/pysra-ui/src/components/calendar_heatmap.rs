//! Calendar Heatmap Component
//!
//! One square per day of the trailing year, seven to a row. Cell opacity
//! carries the day's intensity.

use chrono::{Local, NaiveDate};
use dioxus::prelude::*;
use pysra_core::heatmap::{HeatmapData, HeatmapGrid};

/// Properties for the CalendarHeatmap component
#[derive(Clone, PartialEq, Props)]
pub struct CalendarHeatmapProps {
    /// Id of the container element the grid renders into
    pub container_id: String,
    /// Date-keyed activity; nothing is rendered without it
    #[props(default)]
    pub data: Option<HeatmapData>,
    /// Last day of the window, defaults to the local date
    #[props(default)]
    pub today: Option<NaiveDate>,
}

/// Renders the trailing-year activity grid
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CalendarHeatmap { container_id: "emotion-heatmap".to_string(), data: Some(data) }
/// }
/// ```
#[component]
pub fn CalendarHeatmap(props: CalendarHeatmapProps) -> Element {
    let Some(data) = props.data.as_ref() else {
        return rsx! {};
    };
    let today = props.today.unwrap_or_else(|| Local::now().date_naive());

    let grid = match HeatmapGrid::build(data, today) {
        Ok(grid) => grid,
        Err(e) => {
            tracing::error!("Failed to build heatmap: {}", e);
            return rsx! {
                div { id: "{props.container_id}" }
            };
        }
    };

    rsx! {
        div { id: "{props.container_id}",
            div { class: "heatmap-grid",
                for (row, week) in grid.weeks().iter().enumerate() {
                    div { key: "{row}", class: "heatmap-week",
                        for day in week.iter() {
                            div {
                                key: "{day.date}",
                                class: "heatmap-cell",
                                style: "background-color: {day.color()};",
                                title: "{day.tooltip()}",
                                "data-date": "{day.date_string()}",
                            }
                        }
                    }
                }
            }
        }
    }
}
