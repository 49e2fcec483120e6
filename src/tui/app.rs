//! Shared TUI plumbing.
//!
//! `App` owns the terminal (raw mode + alternate screen) and the repeating
//! render tick; `TuiApp` is the trait both interactive applications
//! implement, with a provided event loop that interleaves input polling and
//! tick-driven redraws. List-based applications additionally share
//! navigation/search/help key handling through [`handle_shared_key`].

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

use super::widgets::TimerList;
use crate::timer::Ticker;

/// Base terminal application: setup, teardown, drawing, and the render tick.
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    tick: Ticker,
}

impl App {
    /// Enter raw mode and the alternate screen, ticking at `tick_rate`.
    pub fn new(tick_rate: Duration) -> Result<Self> {
        enable_raw_mode().context("enabling raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
        let terminal =
            Terminal::new(CrosstermBackend::new(stdout)).context("creating terminal")?;
        Ok(Self {
            terminal,
            tick: Ticker::new(tick_rate),
        })
    }

    /// Replace the render tick when the required rate changes.
    ///
    /// The ticker is recreated, not adjusted, so a rate change never
    /// inherits a stale deadline.
    pub fn set_tick_rate(&mut self, period: Duration) {
        if self.tick.period() != period {
            self.tick = Ticker::new(period);
        }
    }

    /// Unconditionally restart the render tick at `period`.
    ///
    /// Used when the thing being rendered changed (new theme or target
    /// date), so the fresh schedule never inherits a stale deadline.
    pub fn restart_tick(&mut self, period: Duration) {
        self.tick = Ticker::new(period);
    }

    /// How long input polling may block before the next tick is due.
    pub fn tick_timeout(&self) -> Duration {
        self.tick.timeout()
    }

    /// Consume a due tick, if any.
    pub fn tick_due(&mut self) -> bool {
        self.tick.tick()
    }

    /// Current terminal size as (width, height).
    pub fn size(&self) -> Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }

    /// Draw one frame.
    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Temporarily hand the terminal back (e.g. to run a nested view).
    pub fn suspend(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// Reclaim the terminal after `suspend`.
    pub fn resume(&mut self) -> Result<()> {
        enable_raw_mode()?;
        execute!(self.terminal.backend_mut(), EnterAlternateScreen)?;
        self.terminal.clear()?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Best effort: leave the user's terminal usable even on panic
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Modes whose key handling is shared between list-based applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharedMode {
    Normal,
    Search,
    Help,
}

/// Result of shared key processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    /// The key was fully handled.
    Consumed,
    /// The app should switch to this shared mode.
    EnterMode(SharedMode),
    /// Not a shared key; the app handles it itself.
    NotConsumed,
}

/// State shared by list-based applications.
pub struct SharedState {
    /// The timer list with selection and filtering.
    pub list: TimerList,
    /// Search input buffer while in search mode.
    pub search_input: String,
    /// One-shot status line message, shown until the next action.
    pub status_message: Option<String>,
    /// Set when the application should exit its loop.
    pub quit: bool,
}

impl SharedState {
    pub fn new(list: TimerList) -> Self {
        Self {
            list,
            search_input: String::new(),
            status_message: None,
            quit: false,
        }
    }
}

/// Handle keys common to list-based applications.
///
/// Normal mode: navigation, `/` search, `?` help, `q` quit, Esc clears
/// filters. Search mode: text editing, Enter applies, Esc cancels. Help
/// mode: any key closes.
pub fn handle_shared_key(mode: &SharedMode, key: KeyEvent, state: &mut SharedState) -> KeyResult {
    match mode {
        SharedMode::Normal => handle_normal_shared(key, state),
        SharedMode::Search => handle_search_shared(key, state),
        SharedMode::Help => KeyResult::EnterMode(SharedMode::Normal),
    }
}

fn handle_normal_shared(key: KeyEvent, state: &mut SharedState) -> KeyResult {
    state.status_message = None;
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.list.select_previous();
            KeyResult::Consumed
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.list.select_next();
            KeyResult::Consumed
        }
        KeyCode::Home => {
            state.list.select_first();
            KeyResult::Consumed
        }
        KeyCode::End => {
            state.list.select_last();
            KeyResult::Consumed
        }
        KeyCode::PageUp => {
            state.list.page_up();
            KeyResult::Consumed
        }
        KeyCode::PageDown => {
            state.list.page_down();
            KeyResult::Consumed
        }
        KeyCode::Char('/') => {
            state.search_input = state.list.search_filter().unwrap_or_default();
            KeyResult::EnterMode(SharedMode::Search)
        }
        KeyCode::Char('?') => KeyResult::EnterMode(SharedMode::Help),
        KeyCode::Char('q') => {
            state.quit = true;
            KeyResult::Consumed
        }
        _ => KeyResult::NotConsumed,
    }
}

fn handle_search_shared(key: KeyEvent, state: &mut SharedState) -> KeyResult {
    match key.code {
        KeyCode::Esc => {
            state.search_input.clear();
            state.list.clear_search();
            KeyResult::EnterMode(SharedMode::Normal)
        }
        KeyCode::Enter => {
            let query = state.search_input.trim().to_string();
            if query.is_empty() {
                state.list.clear_search();
            } else {
                state.list.set_search(query);
            }
            KeyResult::EnterMode(SharedMode::Normal)
        }
        KeyCode::Backspace => {
            state.search_input.pop();
            state.list.set_search(state.search_input.clone());
            KeyResult::Consumed
        }
        KeyCode::Char(c) => {
            state.search_input.push(c);
            state.list.set_search(state.search_input.clone());
            KeyResult::Consumed
        }
        _ => KeyResult::Consumed,
    }
}

/// Trait implemented by the interactive applications.
pub trait TuiApp {
    /// Base app for terminal handling.
    fn app(&mut self) -> &mut App;

    /// Whether the application wants to exit its loop.
    fn should_quit(&self) -> bool;

    /// Handle one key press.
    fn handle_key(&mut self, key: KeyEvent) -> Result<()>;

    /// Render one frame.
    fn draw(&mut self) -> Result<()>;

    /// Called when the render tick fires (countdowns recompute on draw).
    fn on_tick(&mut self) -> Result<()> {
        Ok(())
    }

    /// Event loop: draw, poll input until the next tick, repeat.
    fn run(&mut self) -> Result<()> {
        loop {
            self.draw()?;
            let timeout = self.app().tick_timeout();
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key)?;
                    }
                    // Resize falls through; the next iteration redraws
                    _ => {}
                }
            }
            if self.app().tick_due() {
                self.on_tick()?;
            }
            if self.should_quit() {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::{ThemeKind, TimerRecord};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state_with(names: &[&str]) -> SharedState {
        let records = names
            .iter()
            .map(|n| TimerRecord::new(*n, "", "2030-01-01T00:00", ThemeKind::Digital))
            .collect();
        SharedState::new(TimerList::new(records))
    }

    #[test]
    fn navigation_moves_selection() {
        let mut state = state_with(&["a", "b", "c"]);
        handle_shared_key(&SharedMode::Normal, key(KeyCode::Down), &mut state);
        assert_eq!(state.list.selected_item().unwrap().name, "b");
        handle_shared_key(&SharedMode::Normal, key(KeyCode::Up), &mut state);
        assert_eq!(state.list.selected_item().unwrap().name, "a");
        handle_shared_key(&SharedMode::Normal, key(KeyCode::End), &mut state);
        assert_eq!(state.list.selected_item().unwrap().name, "c");
    }

    #[test]
    fn slash_enters_search_mode() {
        let mut state = state_with(&["a"]);
        let result = handle_shared_key(&SharedMode::Normal, key(KeyCode::Char('/')), &mut state);
        assert_eq!(result, KeyResult::EnterMode(SharedMode::Search));
    }

    #[test]
    fn search_typing_filters_incrementally() {
        let mut state = state_with(&["alpha", "beta"]);
        handle_shared_key(&SharedMode::Search, key(KeyCode::Char('b')), &mut state);
        assert_eq!(state.list.len(), 1);
        assert_eq!(state.list.selected_item().unwrap().name, "beta");
    }

    #[test]
    fn search_escape_cancels_the_filter() {
        let mut state = state_with(&["alpha", "beta"]);
        handle_shared_key(&SharedMode::Search, key(KeyCode::Char('x')), &mut state);
        assert_eq!(state.list.len(), 0);
        let result = handle_shared_key(&SharedMode::Search, key(KeyCode::Esc), &mut state);
        assert_eq!(result, KeyResult::EnterMode(SharedMode::Normal));
        assert!(state.search_input.is_empty());
        assert_eq!(state.list.len(), 2);
    }

    #[test]
    fn q_requests_quit() {
        let mut state = state_with(&[]);
        handle_shared_key(&SharedMode::Normal, key(KeyCode::Char('q')), &mut state);
        assert!(state.quit);
    }

    #[test]
    fn any_key_leaves_help() {
        let mut state = state_with(&[]);
        let result = handle_shared_key(&SharedMode::Help, key(KeyCode::Char('x')), &mut state);
        assert_eq!(result, KeyResult::EnterMode(SharedMode::Normal));
    }

    #[test]
    fn unknown_normal_keys_are_not_consumed() {
        let mut state = state_with(&[]);
        let result = handle_shared_key(&SharedMode::Normal, key(KeyCode::Char('z')), &mut state);
        assert_eq!(result, KeyResult::NotConsumed);
    }
}
