//! Themed countdown rendering.
//!
//! Each theme draws a live countdown into a ratatui frame region. Dispatch
//! is an exhaustive match over the closed [`ThemeKind`] enum; unrecognized
//! stored theme values were already mapped to `Digital` at decode time, so
//! rendering itself can never meet an unknown theme. Every theme renders
//! the same uniform indicator once the countdown has expired.

pub mod analog;
pub mod calendar;
pub mod chronometer;
pub mod chronometer_analog;
pub mod digital;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::timer::{parse_target, RemainingTime, ThemeKind, TimerRecord, DEFAULT_THEME_COLOR};

/// Everything a theme renderer needs for one frame.
///
/// Built per tick from a record and "now"; renderers never consult the
/// record or the clock themselves.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub remaining: RemainingTime,
    /// Parsed target, used by the calendar theme; `None` only when the
    /// stored date is unparsable (in which case `remaining` is expired).
    pub target: Option<chrono::NaiveDateTime>,
    pub color: Color,
    pub glow: f64,
}

impl RenderContext {
    /// Snapshot a record's countdown state at `now_ms`.
    pub fn for_record(record: &TimerRecord, now_ms: i64) -> Self {
        Self {
            remaining: record.remaining_at(now_ms),
            target: parse_target(&record.target_date),
            color: parse_hex_color(&record.theme_color).unwrap_or(default_color()),
            glow: record.glow_intensity.clamp(0.0, 1.0),
        }
    }

    /// The theme color with the glow effect applied.
    pub fn accent(&self) -> Color {
        glow_color(self.color, self.glow)
    }

    /// Style for primary themed content.
    pub fn accent_style(&self) -> Style {
        Style::default()
            .fg(self.accent())
            .add_modifier(Modifier::BOLD)
    }
}

/// Render `theme` for the given context into `area`.
///
/// Expired countdowns short-circuit to the shared completed indicator
/// regardless of theme.
pub fn render_theme(frame: &mut Frame, area: Rect, theme: ThemeKind, ctx: &RenderContext) {
    if ctx.remaining.expired {
        render_completed(frame, area, ctx);
        return;
    }
    match theme {
        ThemeKind::Digital => digital::render(frame, area, ctx),
        ThemeKind::Analog => analog::render(frame, area, ctx),
        ThemeKind::Chronometer => chronometer::render(frame, area, ctx),
        ThemeKind::ChronometerAnalog => chronometer_analog::render(frame, area, ctx),
        ThemeKind::Calendar => calendar::render(frame, area, ctx),
    }
}

/// Uniform indicator shown by every theme once the target has passed.
fn render_completed(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let content = vec![
        Line::from(Span::styled("🎉", ctx.accent_style())),
        Line::from(""),
        Line::from(Span::styled(
            ctx.remaining.display.clone(),
            ctx.accent_style(),
        )),
    ];
    let rows = content.len() as u16;
    let paragraph = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(paragraph, vertical_center(area, rows));
}

/// Default teal as a ratatui color.
pub fn default_color() -> Color {
    parse_hex_color(DEFAULT_THEME_COLOR).unwrap_or(Color::Cyan)
}

/// Parse a `#rrggbb` hex color.
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Lighten a color toward white in proportion to the glow intensity.
///
/// The terminal counterpart of the original soft-shadow effect; glow 0
/// leaves the color untouched.
pub fn glow_color(color: Color, glow: f64) -> Color {
    if glow <= 0.0 {
        return color;
    }
    match color {
        Color::Rgb(r, g, b) => {
            let factor = glow.clamp(0.0, 1.0) * 0.5;
            let lift = |c: u8| c.saturating_add(((255 - c) as f64 * factor) as u8);
            Color::Rgb(lift(r), lift(g), lift(b))
        }
        other => other,
    }
}

/// Middle band of `area` that is `height` rows tall.
pub(crate) fn vertical_center(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let y = area.y + (area.height - height) / 2;
    Rect::new(area.x, y, area.width, height)
}

/// Centered sub-area with a roughly square visual aspect.
///
/// Terminal cells are about twice as tall as they are wide, so a square
/// drawing surface needs a 2:1 cell footprint.
pub(crate) fn square_area(area: Rect) -> Rect {
    let width = area.width.min(area.height.saturating_mul(2)).max(1);
    let height = (width / 2).max(1).min(area.height.max(1));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
