//! Persisted timer records and the visual theme enumeration.

use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::remaining::{remaining_from_str, RemainingTime};

/// Theme color applied when a record carries none.
pub const DEFAULT_THEME_COLOR: &str = "#14b8a6";

/// Visual style for a timer's countdown display.
///
/// The set is closed; any unrecognized persisted value decodes to `Digital`
/// so a stale store never surfaces an error to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(into = "String", from = "String")]
pub enum ThemeKind {
    #[default]
    Digital,
    Analog,
    Chronometer,
    ChronometerAnalog,
    Calendar,
}

impl ThemeKind {
    /// All themes in selection order.
    pub const ALL: [ThemeKind; 5] = [
        ThemeKind::Digital,
        ThemeKind::Analog,
        ThemeKind::Chronometer,
        ThemeKind::ChronometerAnalog,
        ThemeKind::Calendar,
    ];

    /// Stable identifier used in the store and on the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeKind::Digital => "digital",
            ThemeKind::Analog => "analog",
            ThemeKind::Chronometer => "chronometer",
            ThemeKind::ChronometerAnalog => "chronometer-analog",
            ThemeKind::Calendar => "calendar",
        }
    }

    /// Human-readable label for forms and cards.
    pub fn label(&self) -> &'static str {
        match self {
            ThemeKind::Digital => "Digital",
            ThemeKind::Analog => "Analog",
            ThemeKind::Chronometer => "Chronometer",
            ThemeKind::ChronometerAnalog => "Chronometer Analog",
            ThemeKind::Calendar => "Calendar",
        }
    }

    /// Short glyph shown next to a timer in the grid.
    pub fn glyph(&self) -> &'static str {
        match self {
            ThemeKind::Digital => "⌨",
            ThemeKind::Analog => "◷",
            ThemeKind::Chronometer => "⏱",
            ThemeKind::ChronometerAnalog => "◶",
            ThemeKind::Calendar => "▦",
        }
    }

    /// Refresh interval for live displays of this theme.
    ///
    /// The chronometer family refreshes at ~60 Hz for millisecond
    /// resolution; everything else once per second.
    pub fn tick_rate(&self) -> Duration {
        if self.precise() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(1000)
        }
    }

    /// Whether displays of this theme show sub-second resolution.
    pub fn precise(&self) -> bool {
        matches!(self, ThemeKind::Chronometer | ThemeKind::ChronometerAnalog)
    }

    /// The theme following `self` in selection order (wraps around).
    pub fn next(&self) -> ThemeKind {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ThemeKind> for String {
    fn from(kind: ThemeKind) -> Self {
        kind.as_str().to_string()
    }
}

impl From<String> for ThemeKind {
    /// Decode a stored theme identifier, falling back to `Digital` for
    /// anything unrecognized.
    fn from(value: String) -> Self {
        match value.as_str() {
            "digital" => ThemeKind::Digital,
            "analog" => ThemeKind::Analog,
            "chronometer" => ThemeKind::Chronometer,
            "chronometer-analog" => ThemeKind::ChronometerAnalog,
            "calendar" => ThemeKind::Calendar,
            _ => ThemeKind::Digital,
        }
    }
}

/// A single countdown timer, the only persisted entity.
///
/// Serialized with camelCase keys; the on-disk shape is a flat ordered list
/// of these records. Optional visual fields are filled at construction and
/// at deserialization, so renderers never coalesce defaults themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerRecord {
    /// Opaque unique identifier, assigned at creation, immutable.
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Target as a `datetime-local` string, stored verbatim.
    pub target_date: String,
    #[serde(default)]
    pub theme: ThemeKind,
    #[serde(default = "default_theme_color")]
    pub theme_color: String,
    #[serde(default)]
    pub glow_intensity: f64,
}

fn default_theme_color() -> String {
    DEFAULT_THEME_COLOR.to_string()
}

impl TimerRecord {
    /// Create a record with a fresh id and defaulted visual fields.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        target_date: impl Into<String>,
        theme: ThemeKind,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            target_date: target_date.into(),
            theme,
            theme_color: default_theme_color(),
            glow_intensity: 0.0,
        }
    }

    /// Set the theme color, keeping the default when `color` is empty.
    pub fn set_theme_color(&mut self, color: &str) {
        if color.trim().is_empty() {
            self.theme_color = default_theme_color();
        } else {
            self.theme_color = color.trim().to_string();
        }
    }

    /// Set the glow intensity, clamped to `[0, 1]`.
    pub fn set_glow_intensity(&mut self, glow: f64) {
        self.glow_intensity = glow.clamp(0.0, 1.0);
    }

    /// Clamp fields that may arrive out of range from an old store.
    pub fn normalize(&mut self) {
        self.glow_intensity = self.glow_intensity.clamp(0.0, 1.0);
        if self.theme_color.trim().is_empty() {
            self.theme_color = default_theme_color();
        }
    }

    /// Countdown state for this record as seen from `now_ms`.
    ///
    /// Precision follows the theme: chronometer-family records report
    /// sub-second display strings.
    pub fn remaining_at(&self, now_ms: i64) -> RemainingTime {
        remaining_from_str(&self.target_date, now_ms, self.theme.precise())
    }
}
