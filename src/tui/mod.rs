//! TUI (Text User Interface) module for runnerdeck
//!
//! Renders the landing page with ratatui/crossterm: hero copy, the mock
//! orchestrator terminal, the service flow row and a key-hint footer.

pub mod app;
pub mod format;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::{InputResult, LandingState};
pub use format::format_elapsed;
pub use theme::{cli_theme, Theme};
pub use ui::{buffer_to_text, render_page, PageView};
