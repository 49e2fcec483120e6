//! UI rendering helpers for TUI
//!
//! Common layout helpers and modal overlays shared by the apps.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::theme::current_theme;

/// Create a centered layout with the given constraints.
///
/// Returns the center area that can be used for content.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical_layout[1])[1]
}

/// Render the delete confirmation modal for the named timer.
pub fn render_confirm_delete_modal(frame: &mut Frame, area: Rect, name: &str) {
    let theme = current_theme();

    let modal_width = 46.min(area.width.saturating_sub(4));
    let modal_height = 7.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(modal_width)) / 2;
    let y = area.y + (area.height.saturating_sub(modal_height)) / 2;
    let modal_area = Rect::new(x, y, modal_width, modal_height);

    frame.render_widget(Clear, modal_area);

    let lines = vec![
        Line::from(Span::styled(
            format!("Delete \"{}\"?", name),
            theme.text_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "This action cannot be undone.",
            theme.text_secondary_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", theme.accent_bold_style()),
            Span::styled(": delete | ", theme.text_secondary_style()),
            Span::styled("n", theme.accent_bold_style()),
            Span::styled("/Esc: cancel", theme.text_secondary_style()),
        ]),
    ];

    let modal = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.error_style())
                .title(" Delete Timer "),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(modal, modal_area);
}
