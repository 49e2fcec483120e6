//! Chronometer-analog theme: clock face with a live millisecond hand.
//!
//! Extends the analog face with 60 tick marks (every fifth one major, with
//! numerals 1-12) and a thin fourth hand sweeping once per second.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::Marker,
    text::{Line, Span},
    widgets::{canvas::Canvas, Paragraph},
    Frame,
};

use super::analog::{
    draw_center_dot, draw_face, draw_hand, draw_marker, hand_angle, hand_endpoint, BOUNDS,
    HOUR_HAND, MILLISECOND_HAND, MINUTE_HAND, SECOND_HAND,
};
use super::{square_area, RenderContext};

/// Radius fraction where the hour numerals sit.
const NUMERAL_RADIUS: f64 = 0.68;

/// Numeral shown at major tick `i` (every fifth of 60): 12 at the top,
/// then 1-11 clockwise.
pub fn numeral_at(major_index: usize) -> u32 {
    let n = (major_index as u32) / 5;
    if n == 0 {
        12
    } else {
        n
    }
}

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let color = ctx.accent();
    let numeral_style = Style::default().fg(ctx.color);
    let raw = ctx.remaining.raw;
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(BOUNDS)
        .y_bounds(BOUNDS)
        .paint(move |painter| {
            draw_face(painter, color);
            // 60 ticks; every fifth is major and carries a numeral
            for i in 0..60 {
                let angle = hand_angle(i as f64, 60.0);
                let is_major = i % 5 == 0;
                let inner = if is_major { 0.84 } else { 0.92 };
                draw_marker(painter, angle, inner, color);
                if is_major {
                    let (x, y) = hand_endpoint(angle, NUMERAL_RADIUS);
                    painter.print(
                        x,
                        y,
                        Line::from(Span::styled(numeral_at(i).to_string(), numeral_style)),
                    );
                }
            }
            draw_hand(painter, hand_angle((raw.hours % 12) as f64, 12.0), HOUR_HAND, color);
            draw_hand(painter, hand_angle(raw.minutes as f64, 60.0), MINUTE_HAND, color);
            draw_hand(painter, hand_angle(raw.seconds as f64, 60.0), SECOND_HAND, color);
            // Thin sweep hand, once around per second
            draw_hand(
                painter,
                hand_angle(raw.milliseconds as f64, 1000.0),
                MILLISECOND_HAND,
                color,
            );
            draw_center_dot(painter, color);
        });
    frame.render_widget(canvas, square_area(chunks[0]));

    let summary = Paragraph::new(Line::from(Span::styled(
        ctx.remaining.display.clone(),
        ctx.accent_style(),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(summary, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_numeral_is_twelve() {
        assert_eq!(numeral_at(0), 12);
    }

    #[test]
    fn numerals_run_one_to_eleven_clockwise() {
        assert_eq!(numeral_at(5), 1);
        assert_eq!(numeral_at(30), 6);
        assert_eq!(numeral_at(55), 11);
    }
}
