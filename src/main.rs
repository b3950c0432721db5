#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use pysra_core::{AlertLevel, HeatmapData};

/// Heatmap data and startup notices, set once from the command line
static STARTUP: OnceLock<Startup> = OnceLock::new();

/// What `main` resolved before the window opened.
#[derive(Debug, Clone, Default)]
pub struct Startup {
    pub heatmap: HeatmapData,
    pub notices: Vec<(AlertLevel, String)>,
}

/// Get the startup state (empty if `main` did not set one)
pub fn get_startup() -> Startup {
    STARTUP.get().cloned().unwrap_or_default()
}

/// Pysra - Emotion Dashboard
#[derive(Parser, Debug)]
#[command(name = "pysra-desktop")]
#[command(about = "Pysra - mood dashboard with activity heatmap and mini-games")]
struct Args {
    /// JSON file mapping YYYY-MM-DD to {"intensity": 0-5}
    #[arg(long)]
    heatmap_data: Option<PathBuf>,
}

fn load_startup(args: &Args) -> Startup {
    let Some(path) = &args.heatmap_data else {
        return Startup::default();
    };

    match HeatmapData::load(path) {
        Ok(heatmap) => {
            let notice = format!("Loaded {} days of activity.", heatmap.len());
            Startup {
                heatmap,
                notices: vec![(AlertLevel::Success, notice)],
            }
        }
        Err(e) => {
            tracing::error!("Failed to load heatmap data from {:?}: {}", path, e);
            Startup {
                heatmap: HeatmapData::new(),
                notices: vec![(AlertLevel::Danger, format!("Could not load activity data: {}", e))],
            }
        }
    }
}

fn main() {
    pysra_core::logging::init_logging();

    let args = Args::parse();
    let _ = STARTUP.set(load_startup(&args));

    let window_width = 1100.0;
    let window_height = 900.0;

    tracing::info!("Starting Pysra dashboard");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Pysra")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_means_empty_startup() {
        let args = Args::parse_from(["pysra-desktop"]);
        let startup = load_startup(&args);
        assert!(startup.heatmap.is_empty());
        assert!(startup.notices.is_empty());
    }

    #[test]
    fn missing_file_becomes_a_danger_notice() {
        let args = Args::parse_from(["pysra-desktop", "--heatmap-data", "/no/such/file.json"]);
        let startup = load_startup(&args);
        assert!(startup.heatmap.is_empty());
        assert_eq!(startup.notices.len(), 1);
        assert_eq!(startup.notices[0].0, AlertLevel::Danger);
    }
}
