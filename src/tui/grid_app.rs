//! Grid TUI application
//!
//! Interactive browser for the timer collection. Features: live countdown
//! summaries, search, create/edit forms, delete confirmation, keyboard
//! reordering, dark-mode toggle, and opening the full live view.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use uuid::Uuid;

use super::app::{handle_shared_key, App, KeyResult, SharedMode, SharedState, TuiApp};
use super::theme::{current_theme, is_dark_mode, set_dark_mode};
use super::ui::render_confirm_delete_modal;
use super::view_app::{ViewApp, ViewOutcome};
use super::widgets::{render_timer_list, FormResult, Logo, TimerForm, TimerList};
use crate::config::Config;
use crate::store::TimerStore;
use crate::timer::{now_local_ms, ThemeKind, TimerRecord};

/// UI mode for the grid application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal browsing mode
    #[default]
    Normal,
    /// Search mode - typing filters by name/description
    Search,
    /// Help mode - showing keyboard shortcuts
    Help,
    /// Confirm delete mode
    ConfirmDelete,
    /// New/edit form mode
    Form,
}

impl Mode {
    /// Map this mode to a `SharedMode`, if it is a shared mode.
    fn to_shared_mode(self) -> Option<SharedMode> {
        match self {
            Mode::Normal => Some(SharedMode::Normal),
            Mode::Search => Some(SharedMode::Search),
            Mode::Help => Some(SharedMode::Help),
            Mode::ConfirmDelete | Mode::Form => None,
        }
    }

    /// Convert a `SharedMode` into the corresponding `Mode`.
    fn from_shared_mode(shared: SharedMode) -> Self {
        match shared {
            SharedMode::Normal => Mode::Normal,
            SharedMode::Search => Mode::Search,
            SharedMode::Help => Mode::Help,
        }
    }
}

/// Grid application state
pub struct GridApp {
    /// Base app for terminal handling
    app: App,
    /// Shared state (timer list, search, status message)
    shared_state: SharedState,
    /// The persisted collection; every mutation goes through here
    store: TimerStore,
    /// Current UI mode
    mode: Mode,
    /// Active new/edit form while in form mode
    form: Option<TimerForm>,
    /// Configuration (display mode persistence)
    config: Config,
}

impl GridApp {
    /// Create the grid application over a loaded store.
    pub fn new(store: TimerStore, config: Config) -> Result<Self> {
        let app = App::new(required_tick_rate(store.timers()))?;
        let shared_state = SharedState::new(TimerList::new(store.timers().to_vec()));

        Ok(Self {
            app,
            shared_state,
            store,
            mode: Mode::Normal,
            form: None,
            config,
        })
    }

    /// Re-sync the list from the store, keeping the selection on `keep`.
    fn refresh(&mut self, keep: Option<Uuid>) {
        self.shared_state.list.set_items(self.store.timers().to_vec());
        if let Some(id) = keep {
            self.shared_state.list.select_id(id);
        }
        self.app.set_tick_rate(required_tick_rate(self.store.timers()));
    }

    /// Render the help modal overlay.
    /// Public for snapshot testing.
    pub fn render_help_modal(frame: &mut Frame, area: Rect) {
        let theme = current_theme();

        let modal_width = 56.min(area.width.saturating_sub(4));
        let modal_height = 22.min(area.height.saturating_sub(2));
        let x = (area.width.saturating_sub(modal_width)) / 2;
        let y = (area.height.saturating_sub(modal_height)) / 2;
        let modal_area = Rect::new(x, y, modal_width, modal_height);

        frame.render_widget(Clear, modal_area);

        let help = Paragraph::new(build_help_text(&theme))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.accent))
                    .title(" Help "),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(help, modal_area);
    }
}

// --- TuiApp trait implementation ---

impl TuiApp for GridApp {
    fn app(&mut self) -> &mut App {
        &mut self.app
    }

    fn should_quit(&self) -> bool {
        self.shared_state.quit
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Try shared key handling first for shared modes
        if let Some(shared_mode) = self.mode.to_shared_mode() {
            match handle_shared_key(&shared_mode, key, &mut self.shared_state) {
                KeyResult::Consumed => return Ok(()),
                KeyResult::EnterMode(mode) => {
                    self.mode = Mode::from_shared_mode(mode);
                    return Ok(());
                }
                KeyResult::NotConsumed => {}
            }
        }

        // App-specific key handling
        match self.mode {
            Mode::Normal => self.handle_normal_key(key)?,
            Mode::ConfirmDelete => self.handle_confirm_delete_key(key)?,
            Mode::Form => self.handle_form_key(key)?,
            // Search and Help are fully handled by shared logic above
            _ => {}
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        // Page size follows the visible list height
        let (_, height) = self.app.size()?;
        self.shared_state
            .list
            .set_page_size(height.saturating_sub(9) as usize);

        let now_ms = now_local_ms();
        let mode = self.mode;
        let status_text = compute_status_text(mode, &self.shared_state);
        let footer_text = compute_footer_text(mode);
        let selected_name = self
            .shared_state
            .list
            .selected_item()
            .map(|t| t.name.clone());

        let list = &self.shared_state.list;
        let form = self.form.as_ref();

        self.app.draw(|frame| {
            let area = frame.area();
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2), // logo
                    Constraint::Min(3),    // timer list
                    Constraint::Length(4), // selected timer card
                    Constraint::Length(1), // status line
                    Constraint::Length(1), // footer
                ])
                .split(area);

            frame.render_widget(Logo::new(), chunks[0]);
            render_timer_list(frame, chunks[1], list, now_ms);
            render_selected_card(frame, chunks[2], list.selected_item(), now_ms);
            render_status_line(frame, chunks[3], &status_text);
            render_footer(frame, chunks[4], footer_text);

            // Render modal overlays
            match mode {
                Mode::Help => Self::render_help_modal(frame, area),
                Mode::ConfirmDelete => {
                    if let Some(ref name) = selected_name {
                        render_confirm_delete_modal(frame, area, name);
                    }
                }
                Mode::Form => {
                    if let Some(form) = form {
                        form.render(frame, area);
                    }
                }
                _ => {}
            }
        })?;

        Ok(())
    }
}

// --- App-specific key handlers ---

impl GridApp {
    /// Handle app-specific keys in normal mode.
    fn handle_normal_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter => self.open_selected()?,
            KeyCode::Char('n') => {
                let default_theme =
                    ThemeKind::from(self.config.display.default_theme.clone());
                self.form = Some(TimerForm::new_timer(default_theme));
                self.mode = Mode::Form;
            }
            KeyCode::Char('e') => {
                if let Some(selected) = self.shared_state.list.selected_item() {
                    self.form = Some(TimerForm::edit(selected));
                    self.mode = Mode::Form;
                }
            }
            KeyCode::Char('d') => {
                if self.shared_state.list.selected_item().is_some() {
                    self.mode = Mode::ConfirmDelete;
                }
            }
            KeyCode::Char('J') => self.move_selected(1)?,
            KeyCode::Char('K') => self.move_selected(-1)?,
            KeyCode::Char('D') => self.toggle_dark_mode(),

            // Clear filters
            KeyCode::Esc => {
                self.shared_state.list.clear_search();
                self.shared_state.search_input.clear();
            }

            _ => {}
        }
        Ok(())
    }

    /// Handle keys in confirm delete mode.
    fn handle_confirm_delete_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.delete_selected()?;
                self.mode = Mode::Normal;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.mode = Mode::Normal;
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in form mode.
    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(form) = self.form.as_mut() else {
            self.mode = Mode::Normal;
            return Ok(());
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
                self.apply_form_record(record)?;
            }
        }
        Ok(())
    }
}

// --- Timer actions ---

impl GridApp {
    /// Open the full live view for the selected timer.
    fn open_selected(&mut self) -> Result<()> {
        let Some(id) = self.shared_state.list.selected_item().map(|t| t.id) else {
            return Ok(());
        };

        self.app.suspend()?;
        let outcome = ViewApp::run_for(&mut self.store, &self.config, id);
        self.app.resume()?;

        match outcome? {
            ViewOutcome::Back => self.refresh(Some(id)),
            ViewOutcome::Deleted(name) => {
                self.refresh(None);
                self.shared_state.status_message = Some(format!("Deleted: {}", name));
            }
        }
        Ok(())
    }

    /// Store a submitted form record (new or edited).
    fn apply_form_record(&mut self, record: TimerRecord) -> Result<()> {
        let id = record.id;
        let name = record.name.clone();
        let result = if self.store.get(id).is_some() {
            self.store.update(record).map(|_| "Updated")
        } else {
            self.store.add(record).map(|_| "Created")
        };
        match result {
            Ok(verb) => {
                self.refresh(Some(id));
                self.shared_state.status_message = Some(format!("{}: {}", verb, name));
            }
            Err(e) => {
                self.shared_state.status_message = Some(format!("Save failed: {}", e));
            }
        }
        Ok(())
    }

    /// Delete the selected timer.
    fn delete_selected(&mut self) -> Result<()> {
        if let Some(selected) = self.shared_state.list.selected_item() {
            let id = selected.id;
            match self.store.delete(id) {
                Ok(removed) => {
                    self.refresh(None);
                    self.shared_state.status_message = Some(format!("Deleted: {}", removed.name));
                }
                Err(e) => {
                    self.shared_state.status_message = Some(format!("Delete failed: {}", e));
                }
            }
        }
        Ok(())
    }

    /// Move the selected timer up (-1) or down (+1) in display order.
    fn move_selected(&mut self, direction: i64) -> Result<()> {
        if self.shared_state.list.is_filtered() {
            self.shared_state.status_message =
                Some("Clear the search before reordering".to_string());
            return Ok(());
        }
        let Some(from) = self.shared_state.list.selected_position() else {
            return Ok(());
        };
        let id = self.shared_state.list.selected_item().map(|t| t.id);
        let to = if direction < 0 {
            from.saturating_sub(1)
        } else {
            from + 1
        };
        match self.store.move_timer(from, to) {
            Ok(()) => self.refresh(id),
            Err(e) => {
                self.shared_state.status_message = Some(format!("Reorder failed: {}", e));
            }
        }
        Ok(())
    }

    /// Flip dark/light mode and persist the flag.
    fn toggle_dark_mode(&mut self) {
        let dark = !is_dark_mode();
        set_dark_mode(dark);
        self.config.display.dark_mode = dark;
        if let Err(e) = self.config.save() {
            self.shared_state.status_message = Some(format!("Could not save config: {}", e));
        } else {
            self.shared_state.status_message = Some(
                if dark {
                    "Dark mode on"
                } else {
                    "Light mode on"
                }
                .to_string(),
            );
        }
    }
}

// --- Helper functions ---

/// Tick rate the grid needs: 60 Hz once any chronometer-family card is
/// visible, otherwise once per second.
fn required_tick_rate(timers: &[TimerRecord]) -> Duration {
    if timers.iter().any(|t| t.theme.precise()) {
        Duration::from_millis(16)
    } else {
        Duration::from_millis(1000)
    }
}

/// Render the one-line detail card for the selected timer.
fn render_selected_card(
    frame: &mut Frame,
    area: Rect,
    selected: Option<&TimerRecord>,
    now_ms: i64,
) {
    let theme = current_theme();
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.text_secondary_style());

    let lines = match selected {
        Some(record) => {
            let remaining = record.remaining_at(now_ms);
            vec![
                Line::from(vec![
                    Span::styled(
                        format!("{} ", record.name),
                        theme.accent_bold_style(),
                    ),
                    Span::styled(
                        format!("[{}]", record.theme.label()),
                        theme.text_secondary_style(),
                    ),
                ]),
                Line::from(Span::styled(
                    record.description.clone(),
                    theme.text_style(),
                )),
                Line::from(vec![
                    Span::styled(
                        format!("{} \u{2192} ", record.target_date),
                        theme.text_secondary_style(),
                    ),
                    Span::styled(remaining.display, theme.accent_style()),
                ]),
            ]
        }
        None => vec![Line::from(Span::styled(
            "Nothing selected",
            theme.text_secondary_style(),
        ))],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render a status line with the given text.
fn render_status_line(frame: &mut Frame, area: Rect, text: &str) {
    let theme = current_theme();
    let status = Paragraph::new(text.to_string()).style(theme.text_secondary_style());
    frame.render_widget(status, area);
}

/// Render a centered footer from a pre-formatted text string.
fn render_footer(frame: &mut Frame, area: Rect, text: &str) {
    let theme = current_theme();
    let footer = Paragraph::new(text.to_string())
        .style(theme.text_secondary_style())
        .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(footer, area);
}

/// Compute the status text for the given mode and shared state.
fn compute_status_text(mode: Mode, state: &SharedState) -> String {
    if let Some(msg) = &state.status_message {
        return msg.clone();
    }
    match mode {
        Mode::Search => format!("Search: {}_", state.search_input),
        Mode::ConfirmDelete => "Delete this timer? (y/n)".to_string(),
        Mode::Help | Mode::Form => String::new(),
        Mode::Normal => format_normal_status(&state.list),
    }
}

/// Format the status line for normal mode (shows the active filter).
fn format_normal_status(list: &TimerList) -> String {
    match list.search_filter() {
        Some(query) if !query.is_empty() => {
            format!("{} of {} timers (search: \"{}\")", list.len(), list.total(), query)
        }
        _ => format!("{} timers", list.len()),
    }
}

/// Get the footer text for the given mode.
fn compute_footer_text(mode: Mode) -> &'static str {
    match mode {
        Mode::Search => "Esc: cancel | Enter: apply search | Backspace: delete char",
        Mode::ConfirmDelete => "y: confirm delete | n/Esc: cancel",
        Mode::Help => "Press any key to close help",
        Mode::Form => "Enter: save | Esc: cancel | Tab: next field",
        Mode::Normal => {
            "\u{2191}\u{2193}: navigate | Enter: open | n: new | e: edit | d: delete | J/K: move | D: dark | ?: help | q: quit"
        }
    }
}

/// Build the help text lines for the help modal.
fn build_help_text(theme: &crate::tui::theme::Theme) -> Vec<Line<'static>> {
    let key_style = Style::default().fg(theme.accent);
    let section_style = Style::default().fg(theme.text_secondary);
    vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Navigation", section_style)),
        Line::from(vec![
            Span::styled("  \u{2191}/\u{2193} j/k", key_style),
            Span::raw("    Navigate"),
        ]),
        Line::from(vec![
            Span::styled("  PgUp/Dn", key_style),
            Span::raw("    Page up/down"),
        ]),
        Line::from(vec![
            Span::styled("  Home/End", key_style),
            Span::raw("   First/last"),
        ]),
        Line::from(""),
        Line::from(Span::styled("Timers", section_style)),
        Line::from(vec![
            Span::styled("  Enter", key_style),
            Span::raw("       Open live view"),
        ]),
        Line::from(vec![
            Span::styled("  n", key_style),
            Span::raw("           New timer"),
        ]),
        Line::from(vec![
            Span::styled("  e", key_style),
            Span::raw("           Edit timer"),
        ]),
        Line::from(vec![
            Span::styled("  d", key_style),
            Span::raw("           Delete timer"),
        ]),
        Line::from(vec![
            Span::styled("  J/K", key_style),
            Span::raw("         Move timer down/up"),
        ]),
        Line::from(""),
        Line::from(Span::styled("Display", section_style)),
        Line::from(vec![
            Span::styled("  /", key_style),
            Span::raw("           Search"),
        ]),
        Line::from(vec![
            Span::styled("  D", key_style),
            Span::raw("           Toggle dark/light mode"),
        ]),
        Line::from(vec![
            Span::styled("  Esc", key_style),
            Span::raw("         Clear search"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  q", key_style),
            Span::raw("           Quit"),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_default_is_normal() {
        assert_eq!(Mode::default(), Mode::Normal);
    }

    #[test]
    fn form_and_confirm_modes_are_not_shared() {
        assert_eq!(Mode::Form.to_shared_mode(), None);
        assert_eq!(Mode::ConfirmDelete.to_shared_mode(), None);
        assert_eq!(Mode::Normal.to_shared_mode(), Some(SharedMode::Normal));
    }

    #[test]
    fn shared_mode_round_trips() {
        for shared in [SharedMode::Normal, SharedMode::Search, SharedMode::Help] {
            let mode = Mode::from_shared_mode(shared);
            assert_eq!(mode.to_shared_mode(), Some(shared));
        }
    }

    #[test]
    fn tick_rate_follows_fastest_theme() {
        let coarse = vec![TimerRecord::new(
            "a",
            "",
            "2030-01-01T00:00",
            ThemeKind::Digital,
        )];
        assert_eq!(required_tick_rate(&coarse), Duration::from_millis(1000));

        let mut precise = coarse.clone();
        precise.push(TimerRecord::new(
            "b",
            "",
            "2030-01-01T00:00",
            ThemeKind::Chronometer,
        ));
        assert_eq!(required_tick_rate(&precise), Duration::from_millis(16));
        assert_eq!(required_tick_rate(&[]), Duration::from_millis(1000));
    }

    #[test]
    fn normal_status_counts_timers() {
        let list = TimerList::new(vec![
            TimerRecord::new("a", "", "2030-01-01T00:00", ThemeKind::Digital),
            TimerRecord::new("b", "", "2030-01-01T00:00", ThemeKind::Digital),
        ]);
        assert_eq!(format_normal_status(&list), "2 timers");
    }

    #[test]
    fn filtered_status_shows_query() {
        let mut list = TimerList::new(vec![
            TimerRecord::new("alpha", "", "2030-01-01T00:00", ThemeKind::Digital),
            TimerRecord::new("beta", "", "2030-01-01T00:00", ThemeKind::Digital),
        ]);
        list.set_search("al".to_string());
        assert_eq!(format_normal_status(&list), "1 of 2 timers (search: \"al\")");
    }

    #[test]
    fn footer_text_mentions_core_actions() {
        let footer = compute_footer_text(Mode::Normal);
        assert!(footer.contains("n: new"));
        assert!(footer.contains("q: quit"));
    }
}
