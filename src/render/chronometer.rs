//! Chronometer theme: zero-padded `DD:HH:MM:SS.mmm` readout.
//!
//! Refreshed at ~60 Hz by the host view so the millisecond field is live.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{vertical_center, RenderContext};
use crate::timer::RawRemaining;

/// Readout height: border + digits + border.
const READOUT_HEIGHT: u16 = 3;

/// Format the decomposed duration as `DD:HH:MM:SS.mmm`.
///
/// Days grow past two digits rather than truncating.
pub fn format_clock(raw: &RawRemaining) -> String {
    format!(
        "{:02}:{:02}:{:02}:{:02}.{:03}",
        raw.days, raw.hours, raw.minutes, raw.seconds, raw.milliseconds
    )
}

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let band = vertical_center(area, READOUT_HEIGHT);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ctx.color));
    let readout = Paragraph::new(Line::from(Span::styled(
        format_clock(&ctx.remaining.raw),
        ctx.accent_style(),
    )))
    .alignment(Alignment::Center)
    .block(block);
    frame.render_widget(readout, band);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_every_field() {
        let raw = RawRemaining {
            days: 1,
            hours: 2,
            minutes: 3,
            seconds: 4,
            milliseconds: 5,
        };
        insta::assert_snapshot!(format_clock(&raw), @"01:02:03:04.005");
    }

    #[test]
    fn zero_duration_is_all_zeros() {
        insta::assert_snapshot!(format_clock(&RawRemaining::default()), @"00:00:00:00.000");
    }

    #[test]
    fn days_exceeding_two_digits_are_not_truncated() {
        let raw = RawRemaining {
            days: 365,
            hours: 23,
            minutes: 59,
            seconds: 59,
            milliseconds: 999,
        };
        assert_eq!(format_clock(&raw), "365:23:59:59.999");
    }
}
