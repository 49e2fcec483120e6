//! Single-timer live view application
//!
//! Full-screen themed countdown refreshed at the theme's tick rate, with
//! inline editing, theme-editor actions (color presets, glow), snapshot
//! export, and delete confirmation.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tracing::error;
use uuid::Uuid;

use super::app::{App, TuiApp};
use super::theme::current_theme;
use super::ui::render_confirm_delete_modal;
use super::widgets::{FormResult, TimerForm};
use crate::config::Config;
use crate::export;
use crate::render::{render_theme, RenderContext};
use crate::store::TimerStore;
use crate::timer::{now_local_ms, TimerRecord};

/// Theme color presets cycled by the `c` key.
const COLOR_PRESETS: &[&str] = &[
    "#14b8a6", // teal
    "#06b6d4", // cyan
    "#8b5cf6", // violet
    "#f59e0b", // amber
    "#f43f5e", // rose
    "#22c55e", // green
];

/// Step applied to the glow intensity per key press.
const GLOW_STEP: f64 = 0.1;

/// How the view ended, reported back to the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewOutcome {
    /// Returned without structural changes (edits may have been saved).
    Back,
    /// The timer was deleted from inside the view.
    Deleted(String),
}

/// UI mode for the view application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Mode {
    #[default]
    Normal,
    ConfirmDelete,
    Form,
}

/// View application state
pub struct ViewApp<'a> {
    /// Base app for terminal handling
    app: App,
    /// The persisted collection (edits are written through immediately)
    store: &'a mut TimerStore,
    /// Configuration (export directory)
    config: &'a Config,
    /// Working copy of the record being viewed
    record: TimerRecord,
    mode: Mode,
    form: Option<TimerForm>,
    status_message: Option<String>,
    deleted: Option<String>,
    quit: bool,
}

impl<'a> ViewApp<'a> {
    /// Run the live view for the timer with `id` until the user leaves.
    pub fn run_for(
        store: &'a mut TimerStore,
        config: &'a Config,
        id: Uuid,
    ) -> Result<ViewOutcome> {
        let Some(record) = store.get(id).cloned() else {
            return Ok(ViewOutcome::Back);
        };

        let app = App::new(record.theme.tick_rate())?;
        let mut view = Self {
            app,
            store,
            config,
            record,
            mode: Mode::Normal,
            form: None,
            status_message: None,
            deleted: None,
            quit: false,
        };
        view.run()?;

        Ok(match view.deleted.take() {
            Some(name) => ViewOutcome::Deleted(name),
            None => ViewOutcome::Back,
        })
    }

    /// Persist the working copy after a mutation.
    fn save_record(&mut self) {
        if let Err(e) = self.store.update(self.record.clone()) {
            self.status_message = Some(format!("Save failed: {}", e));
        }
    }
}

// --- TuiApp trait implementation ---

impl TuiApp for ViewApp<'_> {
    fn app(&mut self) -> &mut App {
        &mut self.app
    }

    fn should_quit(&self) -> bool {
        self.quit
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.mode {
            Mode::Normal => self.handle_normal_key(key)?,
            Mode::ConfirmDelete => self.handle_confirm_delete_key(key),
            Mode::Form => self.handle_form_key(key),
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let theme = current_theme();
        let now_ms = now_local_ms();
        let ctx = RenderContext::for_record(&self.record, now_ms);
        let record = self.record.clone();
        let mode = self.mode;
        let form = self.form.as_ref();
        let status = self.status_message.clone();

        self.app.draw(|frame| {
            let area = frame.area();
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2), // name + description
                    Constraint::Min(5),    // themed countdown
                    Constraint::Length(1), // status line
                    Constraint::Length(1), // footer
                ])
                .split(area);

            render_header(frame, chunks[0], &record);
            render_theme(frame, chunks[1], record.theme, &ctx);

            let status_text = status.unwrap_or_else(|| {
                format!("{} [{}]", record.target_date, record.theme.label())
            });
            let status_line =
                Paragraph::new(status_text).style(theme.text_secondary_style());
            frame.render_widget(status_line, chunks[2]);

            let footer = Paragraph::new(footer_text(mode))
                .style(theme.text_secondary_style())
                .alignment(Alignment::Center);
            frame.render_widget(footer, chunks[3]);

            match mode {
                Mode::ConfirmDelete => render_confirm_delete_modal(frame, area, &record.name),
                Mode::Form => {
                    if let Some(form) = form {
                        form.render(frame, area);
                    }
                }
                Mode::Normal => {}
            }
        })?;

        Ok(())
    }
}

// --- Key handlers ---

impl ViewApp<'_> {
    fn handle_normal_key(&mut self, key: KeyEvent) -> Result<()> {
        self.status_message = None;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('e') => {
                self.form = Some(TimerForm::edit(&self.record));
                self.mode = Mode::Form;
            }
            KeyCode::Char('d') => self.mode = Mode::ConfirmDelete,
            KeyCode::Char('s') => self.export_snapshot(),
            KeyCode::Char('c') => {
                let next = next_color_preset(&self.record.theme_color);
                self.record.set_theme_color(next);
                self.status_message = Some(format!("Color: {}", next));
                // A failed write replaces the status with its error
                self.save_record();
            }
            KeyCode::Char('g') => self.adjust_glow(GLOW_STEP),
            KeyCode::Char('G') => self.adjust_glow(-GLOW_STEP),
            _ => {}
        }
        Ok(())
    }

    fn handle_confirm_delete_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                let id = self.record.id;
                match self.store.delete(id) {
                    Ok(removed) => {
                        self.deleted = Some(removed.name);
                        self.quit = true;
                    }
                    Err(e) => {
                        self.status_message = Some(format!("Delete failed: {}", e));
                        self.mode = Mode::Normal;
                    }
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.mode = Mode::Normal;
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(form) = self.form.as_mut() else {
            self.mode = Mode::Normal;
            return;
        };
        match form.handle_key(key) {
            FormResult::Pending => {}
            FormResult::Cancelled => {
                self.form = None;
                self.mode = Mode::Normal;
            }
            FormResult::Submitted(record) => {
                self.form = None;
                self.mode = Mode::Normal;
                // The tick is restarted, not adjusted: a new theme or target
                // date must never inherit the old deadline.
                self.app.restart_tick(record.theme.tick_rate());
                self.record = record;
                self.save_record();
                self.status_message = Some("Saved".to_string());
            }
        }
    }
}

// --- Actions ---

impl ViewApp<'_> {
    /// Write a snapshot of the themed view to the export directory.
    fn export_snapshot(&mut self) {
        let out_dir = self
            .config
            .export
            .output_dir
            .clone()
            .unwrap_or_else(|| std::path::PathBuf::from("."));
        match export::export_snapshot(&self.record, &out_dir, now_local_ms()) {
            Ok(path) => {
                self.status_message = Some(format!("Saved {}", path.display()));
            }
            Err(e) => {
                error!(timer = %self.record.name, error = %e, "snapshot export failed");
                self.status_message = Some(format!("Export failed: {}", e));
            }
        }
    }

    /// Adjust the glow intensity and persist.
    fn adjust_glow(&mut self, delta: f64) {
        self.record
            .set_glow_intensity(self.record.glow_intensity + delta);
        self.status_message = Some(format!("Glow: {:.1}", self.record.glow_intensity));
        self.save_record();
    }
}

// --- Helper functions ---

/// Render the timer name and description header.
fn render_header(frame: &mut Frame, area: Rect, record: &TimerRecord) {
    let theme = current_theme();
    let lines = vec![
        Line::from(Span::styled(
            record.name.clone(),
            theme.accent_bold_style(),
        )),
        Line::from(Span::styled(
            record.description.clone(),
            theme.text_secondary_style(),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

/// The color preset following `current` (first preset if unknown).
fn next_color_preset(current: &str) -> &'static str {
    let idx = COLOR_PRESETS
        .iter()
        .position(|p| p.eq_ignore_ascii_case(current));
    match idx {
        Some(i) => COLOR_PRESETS[(i + 1) % COLOR_PRESETS.len()],
        None => COLOR_PRESETS[0],
    }
}

/// Footer hints for the current mode.
fn footer_text(mode: Mode) -> &'static str {
    match mode {
        Mode::Normal => {
            "e: edit | d: delete | s: snapshot | c: color | g/G: glow | q/Esc: back"
        }
        Mode::ConfirmDelete => "y: confirm delete | n/Esc: cancel",
        Mode::Form => "Enter: save | Esc: cancel | Tab: next field",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_presets_cycle_and_wrap() {
        let second = next_color_preset(COLOR_PRESETS[0]);
        assert_eq!(second, COLOR_PRESETS[1]);
        let first = next_color_preset(COLOR_PRESETS[COLOR_PRESETS.len() - 1]);
        assert_eq!(first, COLOR_PRESETS[0]);
    }

    #[test]
    fn unknown_color_starts_the_cycle() {
        assert_eq!(next_color_preset("#000000"), COLOR_PRESETS[0]);
    }

    #[test]
    fn all_presets_are_valid_hex_colors() {
        for preset in COLOR_PRESETS {
            assert!(crate::render::parse_hex_color(preset).is_some(), "{preset}");
        }
    }

    #[test]
    fn footer_mentions_theme_editor_actions() {
        let footer = footer_text(Mode::Normal);
        assert!(footer.contains("c: color"));
        assert!(footer.contains("g/G: glow"));
    }
}
