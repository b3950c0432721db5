//! Calendar heatmap over the trailing year.
//!
//! Input is a map from `YYYY-MM-DD` to an [`ActivityRecord`]. The grid covers
//! every date from one year before `today` through `today`, in chunks of
//! seven consecutive days. Weeks are not aligned to Monday or Sunday, and
//! the last one is usually short.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{PysraError, PysraResult};

/// Raw intensity that maps to full opacity.
pub const MAX_INTENSITY: f64 = 5.0;

/// Days per grid row.
pub const DAYS_PER_WEEK: usize = 7;

/// Accent color as `r, g, b`; the alpha channel carries intensity.
pub const ACCENT_RGB: (u8, u8, u8) = (99, 102, 241);

/// Date format used as map keys and in tooltips.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One day's activity as supplied by the caller.
///
/// Only `intensity` is read; other fields are accepted and ignored. A
/// missing or non-numeric intensity reads as 0 and the day still counts as
/// logged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    #[serde(default, deserialize_with = "lenient_intensity")]
    pub intensity: f64,
}

/// Accept numbers and numeric strings; anything else becomes 0.
fn lenient_intensity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let intensity = match &value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    if intensity.is_none() {
        tracing::debug!(%value, "non-numeric intensity, using 0");
    }
    Ok(intensity.unwrap_or(0.0))
}

/// Date-keyed activity map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeatmapData(pub BTreeMap<String, ActivityRecord>);

impl HeatmapData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> PysraResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> PysraResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let data = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), days = data.len(), "loaded heatmap data");
        Ok(data)
    }

    pub fn insert(&mut self, date: NaiveDate, intensity: f64) {
        self.0.insert(date.format(DATE_FORMAT).to_string(), ActivityRecord { intensity });
    }

    pub fn get(&self, date: NaiveDate) -> Option<&ActivityRecord> {
        self.0.get(&date.format(DATE_FORMAT).to_string())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A single rendered cell
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapDay {
    pub date: NaiveDate,
    /// Normalized to [0, 1]
    pub intensity: f64,
    /// 1 when the date has a record, 0 otherwise
    pub count: u32,
}

impl HeatmapDay {
    fn from_data(date: NaiveDate, data: &HeatmapData) -> Self {
        match data.get(date) {
            Some(record) => Self {
                date,
                intensity: normalize(record.intensity),
                count: 1,
            },
            None => Self {
                date,
                intensity: 0.0,
                count: 0,
            },
        }
    }

    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// CSS background color; alpha 0 renders fully transparent
    pub fn color(&self) -> String {
        let (r, g, b) = ACCENT_RGB;
        format!("rgba({}, {}, {}, {})", r, g, b, self.intensity)
    }

    /// Hover text
    pub fn tooltip(&self) -> String {
        format!("{}: {} entries", self.date_string(), self.count)
    }
}

/// Scale a raw score into an alpha value.
pub fn normalize(raw: f64) -> f64 {
    if raw.is_nan() {
        return 0.0;
    }
    (raw / MAX_INTENSITY).clamp(0.0, 1.0)
}

/// First day of the window ending at `today`.
///
/// Feb 29 clamps to Feb 28 of the previous year.
pub fn window_start(today: NaiveDate) -> PysraResult<NaiveDate> {
    today
        .checked_sub_months(Months::new(12))
        .ok_or_else(|| PysraError::InvalidDate(today.format(DATE_FORMAT).to_string()))
}

/// The rendered year, grouped into rows of seven days
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapGrid {
    start: NaiveDate,
    end: NaiveDate,
    weeks: Vec<Vec<HeatmapDay>>,
}

impl HeatmapGrid {
    /// Build the grid for the window ending at `today` (inclusive).
    pub fn build(data: &HeatmapData, today: NaiveDate) -> PysraResult<Self> {
        let start = window_start(today)?;
        let days: Vec<HeatmapDay> = start
            .iter_days()
            .take_while(|d| *d <= today)
            .map(|d| HeatmapDay::from_data(d, data))
            .collect();
        let weeks = days
            .chunks(DAYS_PER_WEEK)
            .map(|week| week.to_vec())
            .collect();

        Ok(Self {
            start,
            end: today,
            weeks,
        })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whole days between the first and last cell: 365 or 366
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn weeks(&self) -> &[Vec<HeatmapDay>] {
        &self.weeks
    }

    /// All cells in render order
    pub fn days(&self) -> impl Iterator<Item = &HeatmapDay> {
        self.weeks.iter().flatten()
    }

    pub fn day_count(&self) -> usize {
        self.weeks.iter().map(Vec::len).sum()
    }
}
