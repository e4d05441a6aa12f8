//! Page layout and rendering helpers.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{Block, Paragraph, Widget, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::theme::Theme;
use super::widgets::{flow::FLOW_HEIGHT, hero::HERO_HEIGHT, FlowRow, Footer, Hero, TerminalPanel};
use crate::animator::{LinePayload, Script, Snapshot};

/// Maximum width of the page column.
pub const MAX_PAGE_WIDTH: u16 = 88;

/// Everything the page needs to draw one frame.
pub struct PageView<'a> {
    pub script: &'a Script<LinePayload>,
    pub snapshot: &'a Snapshot,
    pub theme: &'a Theme,
    /// Whether the animation is live (not stopped)
    pub live: bool,
}

/// Smallest terminal size that fits the mock terminal and flow row.
pub fn required_size(script: &Script<LinePayload>) -> (u16, u16) {
    let widest_line = script
        .events()
        .iter()
        .map(|e| {
            let p = &e.payload;
            // "> service: message" plus borders
            p.prefix.width() + p.service.width() + p.message.width() + 2 + 2
        })
        .max()
        .unwrap_or(0);
    let height = TerminalPanel::height(script) + FLOW_HEIGHT + 1;
    (widest_line.min(u16::MAX as usize) as u16, height)
}

/// Center a column of at most `max_width` inside `area`.
pub fn centered_column(max_width: u16, area: Rect) -> Rect {
    let width = max_width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// Render the landing page into `frame`.
pub fn render_page(frame: &mut Frame, view: &PageView<'_>) {
    let area = frame.area();
    render_page_area(area, frame.buffer_mut(), view);
}

/// Render the landing page into a buffer region.
pub fn render_page_area(area: Rect, buf: &mut Buffer, view: &PageView<'_>) {
    Block::default().style(view.theme.page_style()).render(area, buf);

    let (min_width, min_height) = required_size(view.script);
    if area.width < min_width || area.height < min_height {
        Paragraph::new(format!(
            "Terminal too small: need {}x{}, have {}x{}",
            min_width, min_height, area.width, area.height
        ))
        .style(view.theme.text_secondary_style())
        .wrap(Wrap { trim: true })
        .render(area, buf);
        return;
    }

    let column = centered_column(MAX_PAGE_WIDTH, area);
    let hero_height = if area.height >= min_height + HERO_HEIGHT + 1 {
        HERO_HEIGHT
    } else {
        0
    };
    let [hero, panel, flow, _, footer] = Layout::vertical([
        Constraint::Length(hero_height),
        Constraint::Length(TerminalPanel::height(view.script)),
        Constraint::Length(FLOW_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(column);

    if hero_height > 0 {
        Hero::new(view.theme).render(hero, buf);
    }
    TerminalPanel::new(view.script, view.snapshot, view.theme).render(panel, buf);
    FlowRow::new(view.script, view.snapshot, view.theme).render(flow, buf);
    Footer::new(view.snapshot, view.live, view.theme).render(footer, buf);
}

/// Plain-text dump of a buffer, one line per row with trailing spaces trimmed.
pub fn buffer_to_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::with_capacity((area.width as usize + 1) * area.height as usize);
    for y in area.top()..area.bottom() {
        let mut line = String::with_capacity(area.width as usize);
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
