//! Terminal styling and color utilities.
//!
//! This module provides ANSI escape code definitions and color detection
//! for the detailed flight rendering.

use jetstream_lib::RenderStyle;

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bold reverse cyan for jet stream legs.
    pub const TAG_JET: &str = "\x1b[1;7;36m";
    /// Gray for open-air legs.
    pub const GRAY: &str = "\x1b[90m";
    /// Orange (256-color) for legs flown back toward the origin.
    pub const ORANGE: &str = "\x1b[38;5;208m";
    /// Bright bold white for the total.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub jet: &'static str,
    pub open_air: &'static str,
    pub backward: &'static str,
    pub total: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            jet: colors::TAG_JET,
            open_air: colors::GRAY,
            backward: colors::ORANGE,
            total: colors::WHITE_BOLD,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            jet: "",
            open_air: "",
            backward: "",
            total: "",
        }
    }

    /// Styling handed to the library's detailed renderer.
    #[must_use]
    pub const fn render_style(&self) -> RenderStyle {
        RenderStyle {
            jet: self.jet,
            open_air: self.open_air,
            backward: self.backward,
            total: self.total,
            reset: self.reset,
        }
    }

    /// Create a palette based on terminal capabilities.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// This function respects:
/// - The `NO_COLOR` environment variable (https://no-color.org/)
/// - The `TERM=dumb` convention for non-capable terminals
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}
