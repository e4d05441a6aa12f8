//! Theme configuration for TUI and CLI
//!
//! Centralizes all color and style definitions. Provides both ratatui styles
//! (for the TUI) and ANSI escape codes (for plain CLI output).

use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeName;

/// Theme configuration for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Which palette this is
    pub name: ThemeName,
    /// Primary text color (headline, body copy)
    pub text_primary: Color,
    /// Secondary/dimmed text color (tagline, footer hints, dormant items)
    pub text_secondary: Color,
    /// Accent color for highlights and active items
    pub accent: Color,
    /// Warning color (running timer)
    pub warning: Color,
    /// Success color (completion line)
    pub success: Color,
    /// Page background
    pub background: Color,
    /// Mock terminal background
    pub panel_bg: Color,
    /// Mock terminal foreground
    pub panel_fg: Color,
    /// Service tag color inside the mock terminal
    pub service: Color,
    /// Border color for panels
    pub border: Color,
    /// Whether ANSI helpers emit color codes
    pub ansi_enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark palette, mirrors a GitHub-dark terminal.
    pub fn dark() -> Self {
        Self {
            name: ThemeName::Dark,
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            warning: Color::Yellow,
            success: Color::Green,
            background: Color::Reset,
            panel_bg: Color::Rgb(0x0d, 0x11, 0x17),
            panel_fg: Color::Rgb(0xc9, 0xd1, 0xd9),
            service: Color::Rgb(0x79, 0xc0, 0xff),
            border: Color::Rgb(0x30, 0x36, 0x3d),
            ansi_enabled: true,
        }
    }

    /// Light palette. The mock terminal stays dark, like the page it imitates.
    pub fn light() -> Self {
        Self {
            name: ThemeName::Light,
            text_primary: Color::Black,
            text_secondary: Color::Gray,
            accent: Color::Blue,
            warning: Color::Yellow,
            success: Color::Green,
            background: Color::White,
            panel_bg: Color::Rgb(0x0d, 0x11, 0x17),
            panel_fg: Color::Rgb(0xc9, 0xd1, 0xd9),
            service: Color::Rgb(0x79, 0xc0, 0xff),
            border: Color::Gray,
            ansi_enabled: true,
        }
    }

    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
        }
    }

    /// The other palette.
    pub fn toggled(&self) -> Self {
        let mut next = Self::from_name(self.name.toggled());
        next.ansi_enabled = self.ansi_enabled;
        next
    }

    /// Disable ANSI codes in the CLI helpers.
    pub fn without_ansi(mut self) -> Self {
        self.ansi_enabled = false;
        self
    }

    // Style helpers

    /// Style for the page background.
    pub fn page_style(&self) -> Style {
        Style::default().bg(self.background)
    }

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

    /// Style for bold accented text (keybindings, headline highlight).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the mock terminal body.
    pub fn panel_style(&self) -> Style {
        Style::default().fg(self.panel_fg).bg(self.panel_bg)
    }

    /// Style for panel borders.
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    // ANSI color helpers for CLI output

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        self.wrap(self.accent, text)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        self.wrap(self.text_primary, text)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        self.wrap(self.text_secondary, text)
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        self.wrap(self.success, text)
    }

    fn wrap(&self, color: Color, text: &str) -> String {
        let code = color_to_ansi(color);
        if !self.ansi_enabled || code.is_empty() {
            return text.to_string();
        }
        format!("{}{}{}", code, text, ANSI_RESET)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// ANSI foreground code for the palette colors; empty for anything else.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::White => "\x1b[97m",
        _ => "",
    }
}

/// Theme for CLI output, honoring `NO_COLOR`.
pub fn cli_theme(name: ThemeName) -> Theme {
    let theme = Theme::from_name(name);
    if std::env::var_os("NO_COLOR").is_some() {
        theme.without_ansi()
    } else {
        theme
    }
}
