//! Footer bar with keybinding hints and the current run status.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::animator::Snapshot;
use crate::tui::theme::Theme;

/// Key hints shown in the footer.
pub const KEY_HINTS: &[(&str, &str)] = &[
    ("r", "replay"),
    ("s", "stop"),
    ("t", "theme"),
    ("q", "quit"),
];

/// Footer widget.
pub struct Footer<'a> {
    snapshot: &'a Snapshot,
    live: bool,
    theme: &'a Theme,
}

impl<'a> Footer<'a> {
    pub fn new(snapshot: &'a Snapshot, live: bool, theme: &'a Theme) -> Self {
        Self {
            snapshot,
            live,
            theme,
        }
    }
}

/// Short status label for the footer, e.g. `run 3 · running`.
pub fn status_label(snapshot: &Snapshot, live: bool) -> String {
    let state = if live {
        snapshot.phase.as_str()
    } else {
        "stopped"
    };
    format!("run {} · {}", snapshot.run_epoch, state)
}

/// Build styled spans for keybinding hints.
///
/// Each key is highlighted with the theme accent color, descriptions use
/// the secondary text color, and entries are separated by " | ".
pub fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ".to_string(), theme.text_secondary_style()));
        }
        spans.push(Span::styled(key.to_string(), theme.accent_style()));
        spans.push(Span::styled(
            format!(": {}", desc),
            theme.text_secondary_style(),
        ));
    }
    spans
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let mut spans = build_footer_spans(KEY_HINTS, self.theme);
        spans.push(Span::styled(
            format!("   {}", status_label(self.snapshot, self.live)),
            self.theme.text_secondary_style(),
        ));
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
