//! Duration engine properties exercised through the public API.

use super::helpers::{future_record, target_ms};
use tealtimer::timer::{remaining, remaining_from_str};
use tealtimer::ThemeKind;

#[test]
fn decomposition_is_lossless_across_magnitudes() {
    // From sub-second up to hundreds of days
    for exponent in 0..11 {
        let total: i64 = 7 * 10_i64.pow(exponent) + 3;
        let result = remaining(total, 0, true);
        let raw = result.raw;
        let rebuilt = raw.days * 86_400_000
            + raw.hours * 3_600_000
            + raw.minutes * 60_000
            + raw.seconds * 1_000
            + raw.milliseconds;
        assert_eq!(rebuilt, total, "lossless for {}", total);
        assert!((0..24).contains(&raw.hours));
        assert!((0..60).contains(&raw.minutes));
        assert!((0..60).contains(&raw.seconds));
        assert!((0..1000).contains(&raw.milliseconds));
    }
}

#[test]
fn expiry_boundary_is_exact() {
    assert!(remaining(1_000, 1_000, false).expired);
    assert!(remaining(1_000, 1_001, false).expired);
    let just_before = remaining(1_000, 999, false);
    assert!(!just_before.expired);
    assert_eq!(just_before.raw.milliseconds, 1);
}

#[test]
fn one_of_each_unit_scenario() {
    let result = remaining(90_061_000, 0, false);
    assert_eq!(result.display, "1d 1h 1m 1s");
    assert_eq!(result.raw.days, 1);
    assert_eq!(result.raw.hours, 1);
    assert_eq!(result.raw.minutes, 1);
    assert_eq!(result.raw.seconds, 1);
    assert_eq!(result.raw.milliseconds, 0);
}

#[test]
fn display_precision_scenarios() {
    assert_eq!(remaining(500, 0, false).display, "0s");
    assert_eq!(remaining(1_500, 0, true).display, "1.500s");
}

#[test]
fn record_expires_through_its_own_target() {
    let record = future_record("boundary", ThemeKind::Digital);
    let target = target_ms(&record);

    let before = record.remaining_at(target - 1);
    assert!(!before.expired);

    let at = record.remaining_at(target);
    assert!(at.expired);
    assert_eq!(at.display, "Completed");

    // Expired stays expired for any later instant
    let after = record.remaining_at(target + 86_400_000);
    assert!(after.expired);
}

#[test]
fn unparsable_dates_are_expired_not_errors() {
    for bad in ["", "tomorrow", "2030-99-99T99:99", "2030-06-15 12:30:00 UTC"] {
        let result = remaining_from_str(bad, 0, true);
        assert!(result.expired, "{:?} should be expired", bad);
        assert_eq!(result.display, "Completed");
    }
}
