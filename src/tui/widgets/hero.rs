//! Hero block: headline and tagline above the mock terminal.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::tui::theme::Theme;

/// Headline text before the highlighted part.
pub const HEADLINE_LEAD: &str = "Ephemeral GitHub Actions runners, ";
/// Highlighted part of the headline.
pub const HEADLINE_ACCENT: &str = "production-ready";
/// Tagline under the headline.
pub const TAGLINE: &str =
    "Launch self-hosted runners on AWS only when you need them. Secure, observable, and cost-efficient.";

/// Number of rows the hero wants.
pub const HERO_HEIGHT: u16 = 3;

/// Headline + tagline widget.
pub struct Hero<'a> {
    theme: &'a Theme,
}

impl<'a> Hero<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        vec![
            Line::from(vec![
                Span::styled(HEADLINE_LEAD, self.theme.text_style()),
                Span::styled(HEADLINE_ACCENT, self.theme.accent_bold_style()),
                Span::styled(".", self.theme.text_style()),
            ]),
            Line::from(Span::styled(TAGLINE, self.theme.text_secondary_style())),
        ]
    }
}

impl Widget for Hero<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
