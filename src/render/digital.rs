//! Digital theme: labeled tiles for days, hours, minutes, seconds.
//!
//! All four tiles are always shown, even when a field is zero; only the
//! milliseconds field has no tile.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{vertical_center, RenderContext};
use crate::timer::RawRemaining;

/// Tile height: border + value + label + border.
const TILE_HEIGHT: u16 = 4;

/// The displayed fields in tile order.
pub fn tile_values(raw: &RawRemaining) -> [(i64, &'static str); 4] {
    [
        (raw.days, "days"),
        (raw.hours, "hours"),
        (raw.minutes, "minutes"),
        (raw.seconds, "seconds"),
    ]
}

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let band = vertical_center(area, TILE_HEIGHT);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(band);

    for (column, (value, label)) in columns.iter().zip(tile_values(&ctx.remaining.raw)) {
        render_tile(frame, *column, ctx, value, label);
    }
}

fn render_tile(frame: &mut Frame, area: Rect, ctx: &RenderContext, value: i64, label: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ctx.accent()));
    let content = vec![
        Line::from(Span::styled(value.to_string(), ctx.accent_style())),
        Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(ctx.color),
        )),
    ];
    let tile = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(tile, area);
}
