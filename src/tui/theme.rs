//! UI palette for TUI and CLI output.
//!
//! Centralizes color and style definitions. Two palettes exist - dark (the
//! default) and light - selected by the persisted display-mode flag and
//! toggleable at runtime. This is unrelated to a timer's visual theme; it
//! only colors the application chrome around the countdown displays.

use std::sync::atomic::{AtomicBool, Ordering};

use ratatui::style::{Color, Modifier, Style};

/// Teal accent shared by both palettes (dark variant).
const TEAL: Color = Color::Rgb(20, 184, 166);
/// Deeper teal used on light backgrounds for contrast.
const TEAL_DEEP: Color = Color::Rgb(13, 148, 136);

/// Process-wide display mode. Initialized from config at startup and
/// flipped by the in-app toggle.
static DARK_MODE: AtomicBool = AtomicBool::new(true);

/// Set the process-wide display mode.
pub fn set_dark_mode(dark: bool) {
    DARK_MODE.store(dark, Ordering::Relaxed);
}

/// Whether the dark palette is active.
pub fn is_dark_mode() -> bool {
    DARK_MODE.load(Ordering::Relaxed)
}

/// Palette for the active display mode.
pub fn current_theme() -> Theme {
    if is_dark_mode() {
        Theme::dark()
    } else {
        Theme::light()
    }
}

/// UI palette.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for highlights and important elements
    pub accent: Color,
    /// Error/warning color
    pub error: Color,
    /// Success color
    pub success: Color,
    /// Background color (usually default/transparent)
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark palette - light gray text with the teal accent.
    pub fn dark() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: TEAL,
            error: Color::Red,
            success: Color::Green,
            background: Color::Reset,
        }
    }

    /// Light palette - dark text, deeper teal for contrast.
    pub fn light() -> Self {
        Self {
            text_primary: Color::Black,
            text_secondary: Color::DarkGray,
            accent: TEAL_DEEP,
            error: Color::Red,
            success: Color::Green,
            background: Color::Reset,
        }
    }

    // Style helpers

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented/highlighted text.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (keybindings, titles).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the selected list row.
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    /// Style for error text.
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for success text.
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    // ANSI color helpers for CLI output

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.accent), text, ANSI_RESET)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.text_primary), text, ANSI_RESET)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        format!(
            "{}{}{}",
            color_to_ansi(self.text_secondary),
            text,
            ANSI_RESET
        )
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.error), text, ANSI_RESET)
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.success), text, ANSI_RESET)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> String {
    match color {
        Color::Black => "\x1b[30m".to_string(),
        Color::Red => "\x1b[31m".to_string(),
        Color::Green => "\x1b[32m".to_string(),
        Color::Yellow => "\x1b[33m".to_string(),
        Color::Blue => "\x1b[34m".to_string(),
        Color::Magenta => "\x1b[35m".to_string(),
        Color::Cyan => "\x1b[36m".to_string(),
        Color::Gray => "\x1b[37m".to_string(),
        Color::DarkGray => "\x1b[90m".to_string(),
        Color::White => "\x1b[97m".to_string(),
        Color::Rgb(r, g, b) => format!("\x1b[38;2;{};{};{}m", r, g, b),
        Color::Reset => ANSI_RESET.to_string(),
        // Indexed and remaining named colors fall back to no color
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_palette_uses_teal_accent() {
        let theme = Theme::dark();
        assert_eq!(theme.accent, TEAL);
        assert_eq!(theme.text_primary, Color::Gray);
    }

    #[test]
    fn light_palette_uses_dark_text() {
        let theme = Theme::light();
        assert_eq!(theme.text_primary, Color::Black);
        assert_eq!(theme.accent, TEAL_DEEP);
    }

    #[test]
    fn display_mode_selects_palette() {
        set_dark_mode(false);
        assert_eq!(current_theme().text_primary, Color::Black);
        set_dark_mode(true);
        assert_eq!(current_theme().text_primary, Color::Gray);
    }

    #[test]
    fn style_helpers_return_correct_colors() {
        let theme = Theme::dark();
        assert_eq!(theme.text_style().fg, Some(Color::Gray));
        assert_eq!(theme.text_secondary_style().fg, Some(Color::DarkGray));
        assert_eq!(theme.accent_style().fg, Some(TEAL));
    }

    #[test]
    fn ansi_text_helpers_wrap_with_color_codes() {
        let theme = Theme::dark();

        let accent = theme.accent_text("test");
        assert!(accent.starts_with("\x1b[38;2;20;184;166m"));
        assert!(accent.ends_with("\x1b[0m"));
        assert!(accent.contains("test"));

        let primary = theme.primary_text("hello");
        assert!(primary.starts_with("\x1b[37m"));
        assert!(primary.ends_with("\x1b[0m"));
    }

    #[test]
    fn color_to_ansi_maps_standard_and_rgb_colors() {
        assert_eq!(color_to_ansi(Color::Green), "\x1b[32m");
        assert_eq!(color_to_ansi(Color::DarkGray), "\x1b[90m");
        assert_eq!(color_to_ansi(Color::Rgb(1, 2, 3)), "\x1b[38;2;1;2;3m");
        assert_eq!(color_to_ansi(Color::Reset), "\x1b[0m");
    }
}
