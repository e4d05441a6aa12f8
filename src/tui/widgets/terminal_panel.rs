//! Mock orchestrator terminal panel.
//!
//! Renders the script lines that have been revealed so far, followed by
//! either the running timer or the completion line.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::animator::{LinePayload, Script, Snapshot};
use crate::tui::format::format_elapsed;
use crate::tui::theme::Theme;

/// Title shown in the panel border.
pub const PANEL_TITLE: &str = " runner-orchestrator ";

/// Mock terminal widget.
pub struct TerminalPanel<'a> {
    script: &'a Script<LinePayload>,
    snapshot: &'a Snapshot,
    theme: &'a Theme,
}

impl<'a> TerminalPanel<'a> {
    pub fn new(script: &'a Script<LinePayload>, snapshot: &'a Snapshot, theme: &'a Theme) -> Self {
        Self {
            script,
            snapshot,
            theme,
        }
    }

    /// Rows needed to show every line plus the status line and borders.
    pub fn height(script: &Script<LinePayload>) -> u16 {
        // borders (2) + lines + spacer + status
        u16::try_from(script.len())
            .unwrap_or(u16::MAX)
            .saturating_add(4)
    }
}

/// Text of the status line under the script lines, if any.
pub fn status_text(snapshot: &Snapshot) -> Option<String> {
    if snapshot.shows_completion() {
        Some(format!(
            "✓ workflow completed in {} – cleanup OK",
            format_elapsed(snapshot.target_secs)
        ))
    } else if snapshot.shows_running_line() {
        Some(format!("⏱ Running... {}", format_elapsed(snapshot.elapsed_secs)))
    } else {
        None
    }
}

/// Build the panel body. Unrevealed lines are kept as blank rows so revealed
/// lines never shift.
pub fn build_terminal_lines(
    script: &Script<LinePayload>,
    snapshot: &Snapshot,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let body = Style::default().fg(theme.panel_fg);
    let mut lines: Vec<Line<'static>> = script
        .events()
        .iter()
        .map(|event| {
            if !snapshot.is_revealed(&event.id) {
                return Line::default();
            }
            let p = &event.payload;
            Line::from(vec![
                Span::styled(p.prefix, Style::default().fg(theme.accent)),
                Span::raw(" "),
                Span::styled(p.service, Style::default().fg(theme.service)),
                Span::raw(" "),
                Span::styled(p.message, body),
            ])
        })
        .collect();

    lines.push(Line::default());
    if let Some(text) = status_text(snapshot) {
        let color = if snapshot.shows_completion() {
            theme.success
        } else {
            theme.warning
        };
        lines.push(Line::from(Span::styled(text, Style::default().fg(color))));
    }
    lines
}

impl Widget for TerminalPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(PANEL_TITLE)
            .style(self.theme.panel_style());
        let lines = build_terminal_lines(self.script, self.snapshot, self.theme);
        Paragraph::new(lines).block(block).render(area, buf);
    }
}
