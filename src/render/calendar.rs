//! Calendar theme: a date card with the countdown summary beneath.
//!
//! Month and day come from the target date itself, not from the remaining
//! time.

use chrono::{Datelike, NaiveDateTime};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::RenderContext;

const CARD_WIDTH: u16 = 24;
const CARD_HEIGHT: u16 = 9;

/// Three-letter month abbreviation of the target date.
pub fn month_abbrev(target: NaiveDateTime) -> String {
    target.format("%b").to_string()
}

/// Day of month of the target date.
pub fn day_of_month(target: NaiveDateTime) -> u32 {
    target.day()
}

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    // A non-expired countdown always has a parsed target; nothing to draw
    // otherwise.
    let Some(target) = ctx.target else {
        return;
    };

    let card = card_area(area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ctx.accent()));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // month banner
            Constraint::Min(1),    // day of month
            Constraint::Length(1), // countdown summary
        ])
        .split(inner);

    let banner = Paragraph::new(Line::from(Span::styled(
        month_abbrev(target),
        Style::default()
            .fg(Color::Black)
            .bg(ctx.color)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(banner, rows[0]);

    let day = Paragraph::new(Line::from(Span::styled(
        day_of_month(target).to_string(),
        ctx.accent_style(),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(day, super::vertical_center(rows[1], 1));

    let summary = Paragraph::new(Line::from(Span::styled(
        ctx.remaining.display.clone(),
        Style::default().fg(ctx.color),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(summary, rows[2]);
}

/// Centered fixed-size card, shrunk to fit small areas.
fn card_area(area: Rect) -> Rect {
    let width = CARD_WIDTH.min(area.width);
    let height = CARD_HEIGHT.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
