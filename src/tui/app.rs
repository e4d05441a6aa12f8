//! Interactive landing page application.
//!
//! `LandingState` holds the animator, the active theme and the redraw flag,
//! and maps key presses to actions. `run` owns the real terminal and drives
//! the animator from the event loop.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

use super::theme::Theme;
use super::ui::{render_page, PageView};
use crate::animator::{Animator, Clock, LinePayload, SystemClock};

/// Longest time the loop waits for input before re-checking timers.
const MAX_IDLE_WAIT: Duration = Duration::from_millis(250);

/// Result of processing a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Exit the application
    Quit,
}

/// Application state independent of the real terminal.
pub struct LandingState<C: Clock = SystemClock> {
    animator: Animator<C, LinePayload>,
    theme: Theme,
    /// True when the screen needs to be redrawn
    pub needs_render: bool,
}

impl<C: Clock> LandingState<C> {
    pub fn new(animator: Animator<C, LinePayload>, theme: Theme) -> Self {
        Self {
            animator,
            theme,
            needs_render: true,
        }
    }

    pub fn animator(&self) -> &Animator<C, LinePayload> {
        &self.animator
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Start the animation.
    pub fn start(&mut self) {
        self.animator.start();
        self.needs_render = true;
    }

    /// Fire due timers; marks the screen dirty if anything changed.
    pub fn tick(&mut self) {
        if self.animator.tick() {
            self.needs_render = true;
        }
    }

    /// How long the event loop may wait before the next tick.
    pub fn wait_budget(&self) -> Duration {
        self.animator
            .next_deadline()
            .map_or(MAX_IDLE_WAIT, |d| d.min(MAX_IDLE_WAIT))
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> InputResult {
        if key.kind != KeyEventKind::Press {
            return InputResult::Continue;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return InputResult::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return InputResult::Quit
            }
            KeyCode::Char('r') => {
                tracing::info!("manual replay");
                self.animator.start();
            }
            KeyCode::Char('s') => self.animator.stop(),
            KeyCode::Char('t') => {
                self.theme = self.theme.toggled();
                tracing::debug!(theme = self.theme.name.as_str(), "theme toggled");
            }
            _ => return InputResult::Continue,
        }
        self.needs_render = true;
        InputResult::Continue
    }

    /// Draw the page.
    pub fn draw(&self, frame: &mut Frame) {
        let snapshot = self.animator.snapshot();
        let view = PageView {
            script: self.animator.script(),
            snapshot: &snapshot,
            theme: &self.theme,
            live: self.animator.is_live(),
        };
        render_page(frame, &view);
    }

    /// Stop the animation and release its timers.
    pub fn shutdown(&mut self) {
        self.animator.stop();
    }
}

/// Raw mode + alternate screen, restored on drop.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(t) => t,
            Err(e) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                return Err(e.into());
            }
        };
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Run the landing page until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn run(mut state: LandingState<SystemClock>) -> Result<()> {
    let mut guard = TerminalGuard::enter()?;
    guard.terminal.hide_cursor()?;
    state.start();

    let result = event_loop(&mut guard, &mut state);

    // Release timers before giving the terminal back
    state.shutdown();
    drop(guard);
    result
}

#[cfg(not(tarpaulin_include))]
fn event_loop(guard: &mut TerminalGuard, state: &mut LandingState<SystemClock>) -> Result<()> {
    loop {
        state.tick();
        if state.needs_render {
            guard.terminal.draw(|frame| state.draw(frame))?;
            state.needs_render = false;
        }

        if event::poll(state.wait_budget())? {
            match event::read()? {
                Event::Key(key) => {
                    if state.handle_key(key) == InputResult::Quit {
                        return Ok(());
                    }
                }
                Event::Resize(..) => state.needs_render = true,
                _ => {}
            }
        }
    }
}
