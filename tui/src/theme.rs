//! Color palette and glyphs for the jobdeck TUI.
//!
//! Kanagawa Wave-derived palette, with an ASCII-only glyph set for
//! terminals without good Unicode coverage.

use jobdeck_types::ApplicationStatus;
use ratatui::style::{Color, Modifier, Style};

mod colors {
    use super::Color;

    pub const BG_DARK: Color = Color::Rgb(22, 22, 29);
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 42, 55);
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109);

    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186);
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147);
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105);

    pub const ACCENT: Color = Color::Rgb(127, 180, 202);
    pub const SUCCESS: Color = Color::Rgb(152, 187, 108);
    pub const WARNING: Color = Color::Rgb(230, 195, 132);
    pub const ERROR: Color = Color::Rgb(255, 93, 98);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            accent: colors::ACCENT,
            success: colors::SUCCESS,
            warning: colors::WARNING,
            error: colors::ERROR,
        }
    }

    /// Styling for an application status badge.
    #[must_use]
    pub fn status_color(&self, status: &ApplicationStatus) -> Color {
        match status {
            ApplicationStatus::Hired => self.success,
            ApplicationStatus::Shortlisted => self.accent,
            ApplicationStatus::Pending => self.warning,
            ApplicationStatus::Rejected => self.error,
            ApplicationStatus::Other(_) => self.text_secondary,
        }
    }

    #[must_use]
    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn label(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    #[must_use]
    pub fn value(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }
}

/// Glyph set, switchable to plain ASCII.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub location_marker: &'static str,
    pub bullet: &'static str,
    pub warning: &'static str,
    spinner: &'static [&'static str],
}

const UNICODE_SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const ASCII_SPINNER: &[&str] = &["|", "/", "-", "\\"];

impl Glyphs {
    #[must_use]
    pub fn new(ascii_only: bool) -> Self {
        if ascii_only {
            Self {
                location_marker: "@",
                bullet: "*",
                warning: "!",
                spinner: ASCII_SPINNER,
            }
        } else {
            Self {
                location_marker: "⌖",
                bullet: "•",
                warning: "⚠",
                spinner: UNICODE_SPINNER,
            }
        }
    }

    /// Frame of the loading spinner for a tick counter.
    #[must_use]
    pub fn spinner_frame(&self, tick: usize) -> &'static str {
        self.spinner[tick % self.spinner.len()]
    }
}
