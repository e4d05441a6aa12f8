//! TUI widgets for the landing page
//!
//! Reusable UI components for the terminal interface.

pub mod flow;
pub mod footer;
pub mod hero;
pub mod terminal_panel;

pub use flow::{node_state, FlowRow, NodeState};
pub use footer::Footer;
pub use hero::Hero;
pub use terminal_panel::{build_terminal_lines, status_text, TerminalPanel};
