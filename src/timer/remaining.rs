//! Time-remaining computation for countdown timers.
//!
//! The duration engine is a pure function over epoch milliseconds: it never
//! reads the clock itself, the caller supplies "now". Targets that fail to
//! parse are reported as already expired rather than propagating an invalid
//! numeric state.

use chrono::NaiveDateTime;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Summary string shown once a timer's target has passed.
pub const COMPLETED: &str = "Completed";

/// Accepted `datetime-local` formats, most specific first.
const TARGET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Strictly decomposed remaining duration.
///
/// Each field is the remainder after extracting all larger units, so
/// `hours` is in `[0, 23]`, `minutes` and `seconds` in `[0, 59]`, and
/// `milliseconds` in `[0, 999]`. Only `days` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawRemaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
}

impl RawRemaining {
    /// Total duration in milliseconds (inverse of the decomposition).
    pub fn total_ms(&self) -> i64 {
        self.days * MS_PER_DAY
            + self.hours * MS_PER_HOUR
            + self.minutes * MS_PER_MINUTE
            + self.seconds * MS_PER_SECOND
            + self.milliseconds
    }
}

/// Result of a single countdown computation.
///
/// Recomputed on every tick and discarded after the render pass; never
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct RemainingTime {
    /// True iff the target is at or before "now" (or failed to parse).
    pub expired: bool,
    /// Human-readable summary, e.g. `"1d 1h 1m 1s"` or `"Completed"`.
    pub display: String,
    /// Decomposed duration; all zero when expired.
    pub raw: RawRemaining,
}

impl RemainingTime {
    /// The uniform expired value: all-zero raw fields, `"Completed"` display.
    pub fn completed() -> Self {
        Self {
            expired: true,
            display: COMPLETED.to_string(),
            raw: RawRemaining::default(),
        }
    }
}

/// Compute the time remaining until `target_ms`, as seen from `now_ms`.
///
/// `precise` selects sub-second resolution in the display string
/// (`"1.500s"` instead of `"1s"`). Targets at or before `now_ms` yield the
/// uniform expired value.
pub fn remaining(target_ms: i64, now_ms: i64, precise: bool) -> RemainingTime {
    let total = target_ms - now_ms;
    if total <= 0 {
        return RemainingTime::completed();
    }

    let raw = RawRemaining {
        milliseconds: total % MS_PER_SECOND,
        seconds: (total / MS_PER_SECOND) % 60,
        minutes: (total / MS_PER_MINUTE) % 60,
        hours: (total / MS_PER_HOUR) % 24,
        days: total / MS_PER_DAY,
    };

    RemainingTime {
        expired: false,
        display: format_display(&raw, precise),
        raw,
    }
}

/// Compute the time remaining until a stored `datetime-local` target string.
///
/// An unparsable target is treated as already expired.
pub fn remaining_from_str(target: &str, now_ms: i64, precise: bool) -> RemainingTime {
    match parse_target(target) {
        Some(dt) => remaining(to_epoch_ms(dt), now_ms, precise),
        None => RemainingTime::completed(),
    }
}

/// Parse a `datetime-local` style string (`YYYY-MM-DDTHH:MM[:SS]`).
pub fn parse_target(value: &str) -> Option<NaiveDateTime> {
    TARGET_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value.trim(), fmt).ok())
}

/// Milliseconds since the epoch for a naive timestamp.
///
/// Target dates and "now" are both naive local timestamps, so comparisons
/// stay in a single frame without timezone normalization.
pub fn to_epoch_ms(dt: NaiveDateTime) -> i64 {
    dt.and_utc().timestamp_millis()
}

/// Current local wall-clock time, in the same naive-local frame as targets.
pub fn now_local_ms() -> i64 {
    to_epoch_ms(chrono::Local::now().naive_local())
}

/// Build the summary string from a decomposed duration.
///
/// A unit is included once its own value is non-zero or any larger unit is
/// already included; the seconds component is always present.
fn format_display(raw: &RawRemaining, precise: bool) -> String {
    let mut display = String::new();
    if raw.days > 0 {
        display.push_str(&format!("{}d ", raw.days));
    }
    if raw.hours > 0 || raw.days > 0 {
        display.push_str(&format!("{}h ", raw.hours));
    }
    if raw.minutes > 0 || raw.hours > 0 || raw.days > 0 {
        display.push_str(&format!("{}m ", raw.minutes));
    }
    if precise {
        display.push_str(&format!("{}.{:03}s", raw.seconds, raw.milliseconds));
    } else {
        display.push_str(&format!("{}s", raw.seconds));
    }
    display.trim().to_string()
}
