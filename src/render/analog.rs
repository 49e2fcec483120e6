//! Analog theme: clock face with hour, minute, and second hands.
//!
//! Hands sweep clockwise from 12 o'clock; a hand's angle is the fraction of
//! its unit's full range times 2π. Drawing is immediate-mode on a braille
//! canvas.

use std::f64::consts::TAU;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Color,
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Context, Line as CanvasLine},
        Paragraph,
    },
    Frame,
};

use super::{square_area, RenderContext};

/// Hand lengths as fractions of the face radius.
pub const HOUR_HAND: f64 = 0.5;
pub const MINUTE_HAND: f64 = 0.7;
pub const SECOND_HAND: f64 = 0.9;
pub const MILLISECOND_HAND: f64 = 0.95;

/// Face radius in canvas coordinates.
pub(crate) const FACE_RADIUS: f64 = 1.0;

/// Canvas coordinate bounds, slightly larger than the face.
pub(crate) const BOUNDS: [f64; 2] = [-1.2, 1.2];

/// Angle of a hand, clockwise from 12 o'clock, for `value` out of `max`.
pub fn hand_angle(value: f64, max: f64) -> f64 {
    (value / max) * TAU
}

/// Endpoint of a hand of `length` at `angle` (clockwise from 12 o'clock).
pub fn hand_endpoint(angle: f64, length: f64) -> (f64, f64) {
    (length * angle.sin(), length * angle.cos())
}

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let color = ctx.accent();
    let raw = ctx.remaining.raw;
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(BOUNDS)
        .y_bounds(BOUNDS)
        .paint(move |painter| {
            draw_face(painter, color);
            // 12 hour markers, every third one longer
            for i in 0..12 {
                let inner = if i % 3 == 0 { 0.82 } else { 0.9 };
                draw_marker(painter, hand_angle(i as f64, 12.0), inner, color);
            }
            draw_hand(painter, hand_angle((raw.hours % 12) as f64, 12.0), HOUR_HAND, color);
            draw_hand(painter, hand_angle(raw.minutes as f64, 60.0), MINUTE_HAND, color);
            draw_hand(painter, hand_angle(raw.seconds as f64, 60.0), SECOND_HAND, color);
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

/// Draw the outer circle of the clock face.
pub(crate) fn draw_face(painter: &mut Context, color: Color) {
    painter.draw(&Circle {
        x: 0.0,
        y: 0.0,
        radius: FACE_RADIUS,
        color,
    });
}

/// Draw a hand from the center to its endpoint.
pub(crate) fn draw_hand(painter: &mut Context, angle: f64, length: f64, color: Color) {
    let (x, y) = hand_endpoint(angle, length * FACE_RADIUS);
    painter.draw(&CanvasLine {
        x1: 0.0,
        y1: 0.0,
        x2: x,
        y2: y,
        color,
    });
}

/// Draw a tick mark on the rim, from `inner` fraction out to the rim.
pub(crate) fn draw_marker(painter: &mut Context, angle: f64, inner: f64, color: Color) {
    let (x1, y1) = hand_endpoint(angle, inner * FACE_RADIUS);
    let (x2, y2) = hand_endpoint(angle, FACE_RADIUS);
    painter.draw(&CanvasLine { x1, y1, x2, y2, color });
}

/// Small filled-looking dot where the hands meet.
pub(crate) fn draw_center_dot(painter: &mut Context, color: Color) {
    painter.draw(&Circle {
        x: 0.0,
        y: 0.0,
        radius: 0.04,
        color,
    });
}
