//! Application banner.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::theme::current_theme;

/// One-line banner rendered at the top of the grid view.
#[derive(Debug, Default)]
pub struct Logo;

impl Logo {
    pub fn new() -> Self {
        Self
    }
}

impl Widget for Logo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = current_theme();
        let line = Line::from(vec![
            Span::styled("⏳ ", theme.accent_style()),
            Span::styled("Teal Timer", theme.accent_bold_style()),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
