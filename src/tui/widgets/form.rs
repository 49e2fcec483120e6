//! New/edit timer form, rendered as a modal overlay.
//!
//! Field-based inline editing: Tab/arrows move focus, text fields take
//! keystrokes directly, the theme and glow fields cycle with Left/Right.
//! Enter validates and submits, Esc cancels.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::render::parse_hex_color;
use crate::timer::{parse_target, ThemeKind, TimerRecord};
use crate::tui::theme::current_theme;

/// Step applied to the glow intensity per Left/Right press.
const GLOW_STEP: f64 = 0.1;

/// Form fields in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Description,
    TargetDate,
    Theme,
    Color,
    Glow,
}

impl Field {
    const ALL: [Field; 6] = [
        Field::Name,
        Field::Description,
        Field::TargetDate,
        Field::Theme,
        Field::Color,
        Field::Glow,
    ];

    fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Description => "Description",
            Field::TargetDate => "Target date",
            Field::Theme => "Theme",
            Field::Color => "Color",
            Field::Glow => "Glow",
        }
    }

    fn next(&self) -> Field {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    fn previous(&self) -> Field {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Outcome of one key press handled by the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormResult {
    /// Still editing.
    Pending,
    /// User cancelled; discard the form.
    Cancelled,
    /// Validated record ready to be stored.
    Submitted(TimerRecord),
}

/// Modal form for creating or editing a timer.
pub struct TimerForm {
    title: &'static str,
    name: String,
    description: String,
    target_date: String,
    theme: ThemeKind,
    color: String,
    glow: f64,
    focus: Field,
    error: Option<String>,
    /// Original record when editing; its id is preserved on submit.
    editing: Option<TimerRecord>,
}

impl TimerForm {
    /// Empty form for a new timer.
    pub fn new_timer(default_theme: ThemeKind) -> Self {
        Self {
            title: " New Timer ",
            name: String::new(),
            description: String::new(),
            target_date: String::new(),
            theme: default_theme,
            color: String::new(),
            glow: 0.0,
            focus: Field::Name,
            error: None,
            editing: None,
        }
    }

    /// Form pre-filled from an existing record.
    pub fn edit(record: &TimerRecord) -> Self {
        Self {
            title: " Edit Timer ",
            name: record.name.clone(),
            description: record.description.clone(),
            target_date: record.target_date.clone(),
            theme: record.theme,
            color: record.theme_color.clone(),
            glow: record.glow_intensity,
            focus: Field::Name,
            error: None,
            editing: Some(record.clone()),
        }
    }

    /// Process a key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> FormResult {
        self.error = None;
        match key.code {
            KeyCode::Esc => return FormResult::Cancelled,
            KeyCode::Enter => {
                return match self.submit() {
                    Ok(record) => FormResult::Submitted(record),
                    Err(message) => {
                        self.error = Some(message);
                        FormResult::Pending
                    }
                }
            }
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.previous(),
            KeyCode::Left => self.adjust(-1),
            KeyCode::Right => self.adjust(1),
            KeyCode::Backspace => {
                if let Some(buffer) = self.text_buffer() {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = self.text_buffer() {
                    buffer.push(c);
                }
            }
            _ => {}
        }
        FormResult::Pending
    }

    /// The text buffer under focus, if the focused field is textual.
    fn text_buffer(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::Name => Some(&mut self.name),
            Field::Description => Some(&mut self.description),
            Field::TargetDate => Some(&mut self.target_date),
            Field::Color => Some(&mut self.color),
            Field::Theme | Field::Glow => None,
        }
    }

    /// Cycle/step the non-text fields.
    fn adjust(&mut self, direction: i8) {
        match self.focus {
            Field::Theme => {
                // Right cycles forward; Left is four forward steps (wraps)
                let steps = if direction > 0 { 1 } else { ThemeKind::ALL.len() - 1 };
                for _ in 0..steps {
                    self.theme = self.theme.next();
                }
            }
            Field::Glow => {
                self.glow = (self.glow + f64::from(direction) * GLOW_STEP).clamp(0.0, 1.0);
            }
            _ => {}
        }
    }

    /// Validate the fields and build the resulting record.
    fn submit(&self) -> Result<TimerRecord, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name must not be empty".to_string());
        }
        if parse_target(&self.target_date).is_none() {
            return Err("Target date must be YYYY-MM-DDTHH:MM".to_string());
        }
        if !self.color.trim().is_empty() && parse_hex_color(&self.color).is_none() {
            return Err("Color must be #rrggbb (or empty for teal)".to_string());
        }

        let mut record = match &self.editing {
            Some(original) => original.clone(),
            None => TimerRecord::new("", "", "", self.theme),
        };
        record.name = name.to_string();
        record.description = self.description.trim().to_string();
        record.target_date = self.target_date.trim().to_string();
        record.theme = self.theme;
        record.set_theme_color(&self.color);
        record.set_glow_intensity(self.glow);
        Ok(record)
    }

    /// Render the form as a centered modal overlay.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let theme = current_theme();

        let modal_width = 52.min(area.width.saturating_sub(4));
        let modal_height = 12.min(area.height.saturating_sub(2));
        let x = area.x + (area.width.saturating_sub(modal_width)) / 2;
        let y = area.y + (area.height.saturating_sub(modal_height)) / 2;
        let modal_area = Rect::new(x, y, modal_width, modal_height);

        frame.render_widget(Clear, modal_area);

        let mut lines = Vec::with_capacity(Field::ALL.len() + 3);
        for field in Field::ALL {
            let focused = field == self.focus;
            let marker = if focused { "> " } else { "  " };
            let value = self.field_display(field, focused);
            let value_style = if focused {
                theme.accent_bold_style()
            } else {
                theme.text_style()
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}{:<13}", marker, field.label()),
                    theme.text_secondary_style(),
                ),
                Span::styled(value, value_style),
            ]));
        }
        lines.push(Line::from(""));
        match &self.error {
            Some(error) => lines.push(Line::from(Span::styled(
                error.clone(),
                theme.error_style(),
            ))),
            None => lines.push(Line::from(Span::styled(
                "Enter: save | Esc: cancel | Tab: next field",
                theme.text_secondary_style(),
            ))),
        }

        let form = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.accent_style())
                    .title(self.title),
            );
        frame.render_widget(form, modal_area);
    }

    /// Displayed value for a field; focused text fields get a cursor.
    fn field_display(&self, field: Field, focused: bool) -> String {
        let cursor = if focused { "_" } else { "" };
        match field {
            Field::Name => format!("{}{}", self.name, cursor),
            Field::Description => format!("{}{}", self.description, cursor),
            Field::TargetDate => {
                if self.target_date.is_empty() && !focused {
                    "YYYY-MM-DDTHH:MM".to_string()
                } else {
                    format!("{}{}", self.target_date, cursor)
                }
            }
            Field::Theme => format!("◂ {} ▸", self.theme.label()),
            Field::Color => {
                if self.color.is_empty() && !focused {
                    "(teal)".to_string()
                } else {
                    format!("{}{}", self.color, cursor)
                }
            }
            Field::Glow => format!("◂ {:.1} ▸", self.glow),
        }
    }
}
