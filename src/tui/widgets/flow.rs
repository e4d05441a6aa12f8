//! Service flow row: one glyph + label per script event.
//!
//! Each node is dormant until its line is revealed and active from then on.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::animator::{LinePayload, Script, Snapshot};
use crate::tui::theme::Theme;

/// Rows the flow row wants (borders + glyph + label).
pub const FLOW_HEIGHT: u16 = 4;

/// Marker drawn next to active nodes.
const ACTIVE_MARKER: &str = "•";

/// Visual state of a flow node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    Dormant,
    Active,
}

/// State of the node for event `id`.
pub fn node_state(snapshot: &Snapshot, id: &str) -> NodeState {
    if snapshot.phase.run_started() && snapshot.is_revealed(id) {
        NodeState::Active
    } else {
        NodeState::Dormant
    }
}

fn node_style(state: NodeState, theme: &Theme) -> Style {
    match state {
        NodeState::Dormant => theme.text_secondary_style().add_modifier(Modifier::DIM),
        NodeState::Active => theme.accent_bold_style(),
    }
}

/// Glyph and label lines for one node.
pub fn node_lines(payload: &LinePayload, state: NodeState, theme: &Theme) -> [Line<'static>; 2] {
    let style = node_style(state, theme);
    let mut glyph = vec![Span::styled(payload.glyph, style)];
    if state == NodeState::Active {
        glyph.push(Span::styled(ACTIVE_MARKER, theme.accent_style()));
    }
    let label_style = match state {
        NodeState::Dormant => theme.text_secondary_style(),
        NodeState::Active => theme.text_style(),
    };
    [
        Line::from(glyph),
        Line::from(Span::styled(payload.label, label_style)),
    ]
}

/// Flow row widget.
pub struct FlowRow<'a> {
    script: &'a Script<LinePayload>,
    snapshot: &'a Snapshot,
    theme: &'a Theme,
}

impl<'a> FlowRow<'a> {
    pub fn new(script: &'a Script<LinePayload>, snapshot: &'a Snapshot, theme: &'a Theme) -> Self {
        Self {
            script,
            snapshot,
            theme,
        }
    }
}

impl Widget for FlowRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style());
        let inner = block.inner(area);
        block.render(area, buf);

        let count = u32::try_from(self.script.len()).unwrap_or(u32::MAX);
        let columns =
            Layout::horizontal((0..count).map(|_| Constraint::Ratio(1, count))).split(inner);

        for (event, column) in self.script.events().iter().zip(columns.iter()) {
            let state = node_state(self.snapshot, &event.id);
            let lines = node_lines(&event.payload, state, self.theme);
            Paragraph::new(Vec::from(lines))
                .alignment(Alignment::Center)
                .render(*column, buf);
        }
    }
}
