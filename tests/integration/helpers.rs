//! Shared helpers for integration tests.

use tealtimer::timer::{parse_target, remaining::to_epoch_ms};
use tealtimer::{ThemeKind, TimerRecord};

/// A record targeting a fixed future date.
pub fn future_record(name: &str, theme: ThemeKind) -> TimerRecord {
    TimerRecord::new(name, "integration fixture", "2030-06-15T12:30", theme)
}

/// Epoch milliseconds of a record's target date.
pub fn target_ms(record: &TimerRecord) -> i64 {
    to_epoch_ms(parse_target(&record.target_date).expect("fixture date parses"))
}
