//! Auto-dismissing alerts.
//!
//! An alert stays for [`DISMISS_DELAY`], fades for [`FADE_DURATION`] and is
//! then removed. The phase is a pure function of time since page load, so
//! each alert runs on its own clock.

use std::time::Duration;

/// How long an alert stays fully visible.
pub const DISMISS_DELAY: Duration = Duration::from_secs(5);

/// Length of the opacity fade before removal.
pub const FADE_DURATION: Duration = Duration::from_millis(500);

/// Severity of an alert, mapped to a CSS modifier class
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AlertLevel {
    Success,
    #[default]
    Info,
    Warning,
    Danger,
}

impl AlertLevel {
    /// Returns the CSS class for this level
    pub fn class(&self) -> &'static str {
        match self {
            AlertLevel::Success => "alert alert-success",
            AlertLevel::Info => "alert alert-info",
            AlertLevel::Warning => "alert alert-warning",
            AlertLevel::Danger => "alert alert-danger",
        }
    }
}

/// Lifecycle of an alert
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AlertPhase {
    #[default]
    Shown,
    Fading,
    Removed,
}

impl AlertPhase {
    /// Phase after `elapsed` time since load.
    pub fn at(elapsed: Duration) -> Self {
        if elapsed < DISMISS_DELAY {
            AlertPhase::Shown
        } else if elapsed < DISMISS_DELAY + FADE_DURATION {
            AlertPhase::Fading
        } else {
            AlertPhase::Removed
        }
    }

    /// Time from `elapsed` until the phase next changes. `None` once removed.
    pub fn until_next(elapsed: Duration) -> Option<Duration> {
        let boundary = match Self::at(elapsed) {
            AlertPhase::Shown => DISMISS_DELAY,
            AlertPhase::Fading => DISMISS_DELAY + FADE_DURATION,
            AlertPhase::Removed => return None,
        };
        Some(boundary - elapsed)
    }

    /// Inline style for this phase. `None` once removed.
    pub fn style(&self) -> Option<&'static str> {
        match self {
            AlertPhase::Shown => Some(""),
            AlertPhase::Fading => Some("transition: opacity 0.5s; opacity: 0;"),
            AlertPhase::Removed => None,
        }
    }

    pub fn is_removed(&self) -> bool {
        matches!(self, AlertPhase::Removed)
    }
}
