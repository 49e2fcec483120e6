//! Rendered output shapes per theme, via the off-screen snapshot path.

use super::helpers::{future_record, target_ms};
use tealtimer::export::render_snapshot;
use tealtimer::render::chronometer::format_clock;
use tealtimer::{ThemeKind, TimerRecord};

#[test]
fn digital_shows_all_four_unit_tiles() {
    let record = future_record("digital", ThemeKind::Digital);
    let now = target_ms(&record) - 90_061_000;
    let content = render_snapshot(&record, now).unwrap();
    for label in ["days", "hours", "minutes", "seconds"] {
        assert!(content.contains(label), "missing {} tile:\n{}", label, content);
    }
    assert!(!content.contains("milliseconds"));
}

#[test]
fn digital_tiles_show_zero_values_rather_than_omitting() {
    let record = future_record("digital", ThemeKind::Digital);
    // 5 minutes 3 seconds: days and hours are zero but tiles still render
    let now = target_ms(&record) - 303_000;
    let content = render_snapshot(&record, now).unwrap();
    assert!(content.contains("days"));
    assert!(content.contains("hours"));
}

#[test]
fn chronometer_shows_padded_readout() {
    let record = future_record("chrono", ThemeKind::Chronometer);
    let now = target_ms(&record) - 90_061_042;
    let content = render_snapshot(&record, now).unwrap();
    let expected = format_clock(&record.remaining_at(now).raw);
    assert_eq!(expected, "01:01:01:01.042");
    assert!(content.contains(&expected));
}

#[test]
fn analog_family_draws_a_face_and_summary() {
    for theme in [ThemeKind::Analog, ThemeKind::ChronometerAnalog] {
        let record = future_record("face", theme);
        let now = target_ms(&record) - 90_061_000;
        let content = render_snapshot(&record, now).unwrap();
        // Braille canvas cells appear once the face is drawn
        assert!(
            content.chars().any(|c| ('\u{2800}'..='\u{28ff}').contains(&c)),
            "no canvas output for {:?}",
            theme
        );
        let summary = record.remaining_at(now).display;
        assert!(content.contains(&summary), "{:?} missing summary", theme);
    }
}

#[test]
fn chronometer_analog_shows_numerals() {
    let record = future_record("face", ThemeKind::ChronometerAnalog);
    let now = target_ms(&record) - 90_061_000;
    let content = render_snapshot(&record, now).unwrap();
    assert!(content.contains("12"));
    assert!(content.contains('6'));
}

#[test]
fn calendar_shows_month_day_and_summary() {
    let record = future_record("cal", ThemeKind::Calendar);
    let now = target_ms(&record) - 90_061_000;
    let content = render_snapshot(&record, now).unwrap();
    assert!(content.contains("Jun"));
    assert!(content.contains("15"));
    assert!(content.contains("1d 1h 1m 1s"));
}

#[test]
fn unknown_stored_theme_renders_exactly_like_digital() {
    let json = r#"{
        "id": "2a4b3c74-9c92-4cbe-bf7d-75c3a4b5d6e7",
        "name": "mystery",
        "description": "integration fixture",
        "targetDate": "2030-06-15T12:30",
        "theme": "foo"
    }"#;
    let unknown: TimerRecord = serde_json::from_str(json).unwrap();
    let digital = TimerRecord {
        theme: ThemeKind::Digital,
        ..unknown.clone()
    };

    let now = target_ms(&unknown) - 90_061_000;
    let unknown_view = render_snapshot(&unknown, now).unwrap();
    let digital_view = render_snapshot(&digital, now).unwrap();
    assert_eq!(unknown_view, digital_view);
}

#[test]
fn expired_indicator_is_uniform_across_themes() {
    let base = TimerRecord::new("done", "", "2000-01-01T00:00", ThemeKind::Digital);
    let now = tealtimer::timer::now_local_ms();
    let reference = render_snapshot(&base, now).unwrap();
    assert!(reference.contains("Completed"));

    for theme in ThemeKind::ALL {
        let themed = TimerRecord {
            theme,
            ..base.clone()
        };
        let content = render_snapshot(&themed, now).unwrap();
        assert_eq!(content, reference, "theme {:?} deviates when expired", theme);
    }
}
