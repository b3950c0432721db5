//! Color constants for the Pysra dashboard.
//!
//! Mirrors the custom properties in `styles.rs`.

#![allow(dead_code)]

// === SURFACES ===
pub const BACKGROUND: &str = "#f5f7fb";
pub const SURFACE: &str = "#ffffff";
pub const BORDER: &str = "#e2e8f0";

// === ACCENT (heatmap, primary actions) ===
pub const ACCENT: &str = "#6366f1";
pub const ACCENT_SOFT: &str = "rgba(99, 102, 241, 0.15)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#1e293b";
pub const TEXT_MUTED: &str = "#64748b";

// === SEMANTIC ===
pub const SUCCESS: &str = "#10b981";
pub const INFO: &str = "#3b82f6";
pub const WARNING: &str = "#f59e0b";
pub const DANGER: &str = "#ef4444";
