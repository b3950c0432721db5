//! Summary numbers for the dashboard stat cards.

use chrono::{Days, NaiveDate};

use crate::heatmap::{normalize, window_start, HeatmapData};

/// Values shown on the stat cards
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashboardStats {
    /// Logged days inside the heatmap window
    pub days_logged: usize,
    /// Mean normalized intensity over logged days
    pub average_intensity: f64,
    pub peak_intensity: f64,
    /// Consecutive logged days ending today, or yesterday if today is empty
    pub current_streak: u32,
}

impl DashboardStats {
    pub fn compute(data: &HeatmapData, today: NaiveDate) -> Self {
        let Ok(start) = window_start(today) else {
            return Self::default();
        };

        let in_window: Vec<f64> = start
            .iter_days()
            .take_while(|d| *d <= today)
            .filter_map(|d| data.get(d))
            .map(|record| normalize(record.intensity))
            .collect();

        let days_logged = in_window.len();
        let average_intensity = if days_logged == 0 {
            0.0
        } else {
            in_window.iter().sum::<f64>() / days_logged as f64
        };
        let peak_intensity = in_window.iter().copied().fold(0.0, f64::max);

        Self {
            days_logged,
            average_intensity,
            peak_intensity,
            current_streak: streak(data, today),
        }
    }

    /// Average as a whole percentage for display
    pub fn average_percent(&self) -> u32 {
        (self.average_intensity * 100.0).round() as u32
    }
}

fn streak(data: &HeatmapData, today: NaiveDate) -> u32 {
    let mut day = if data.get(today).is_some() {
        today
    } else {
        match today.checked_sub_days(Days::new(1)) {
            Some(yesterday) => yesterday,
            None => return 0,
        }
    };

    let mut count = 0;
    while data.get(day).is_some() {
        count += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    count
}
