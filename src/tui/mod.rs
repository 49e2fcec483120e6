//! TUI (Text User Interface) module
//!
//! Terminal-based UI built on ratatui/crossterm: the grid browser, the
//! single-timer live view, shared terminal plumbing, the UI palette, and
//! reusable widgets.

pub mod app;
pub mod grid_app;
pub mod theme;
pub mod ui;
pub mod view_app;
pub mod widgets;

// Re-export apps, trait, and shared types for commands and external use
pub use app::{App, SharedState, TuiApp};
pub use grid_app::GridApp;
pub use theme::{current_theme, is_dark_mode, set_dark_mode, Theme};
pub use view_app::{ViewApp, ViewOutcome};
