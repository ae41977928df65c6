//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod layout;
pub mod list;
pub mod status;
pub mod styles;

pub use layout::render_replay;
pub use styles::ColorConfig;

use crate::replay::{ClockHandle, ClockSignal, PlaybackRate, ReplayClock};
use crate::view_state::{RenderOrder, ViewStateEngine};
use constants::{IDLE_POLL, TICK_WAIT};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Presentation settings fixed for the whole replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySettings {
    /// Ticks per second.
    pub rate: PlaybackRate,
    /// Item order on screen.
    pub order: RenderOrder,
    /// Whether the palette is shown in color.
    pub colors: ColorConfig,
}

/// Whether the clock is still producing ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayPhase {
    /// Ticks are flowing.
    Playing,
    /// The clock has finished; the final state stays on screen.
    Complete,
}

/// True for key events that end the replay.
///
/// Any key quits. Only presses count, so terminals that report releases do
/// not quit twice or on the release of the key that started the program.
pub fn is_quit_event(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    engine: ViewStateEngine,
    settings: ReplaySettings,
    phase: ReplayPhase,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(engine: ViewStateEngine, settings: ReplaySettings) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self::with_terminal(terminal, engine, settings))
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Application drawing to an already prepared terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        engine: ViewStateEngine,
        settings: ReplaySettings,
    ) -> Self {
        Self {
            terminal,
            engine,
            settings,
            phase: ReplayPhase::Playing,
        }
    }

    /// Run the main event loop
    ///
    /// Returns when the user presses any key. While playing, input is
    /// checked between ticks without blocking; each consumed tick advances
    /// the engine and redraws. Once complete, the loop only waits for input
    /// and resizes. Returning drops `clock`, which stops its thread.
    pub fn run(&mut self, clock: ClockHandle) -> Result<(), TuiError> {
        // Initial render so the title shows before the first tick
        self.draw()?;

        loop {
            let input_wait = match self.phase {
                ReplayPhase::Playing => Duration::ZERO,
                ReplayPhase::Complete => IDLE_POLL,
            };

            if event::poll(input_wait)? {
                match event::read()? {
                    Event::Key(key) if is_quit_event(&key) => {
                        info!(
                            ticks = self.engine.cursor(),
                            total = self.engine.total(),
                            "Quit requested"
                        );
                        return Ok(());
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                        self.draw()?;
                    }
                    _ => {}
                }
                continue;
            }

            if self.phase == ReplayPhase::Playing {
                if let Some(signal) = clock.recv_timeout(TICK_WAIT) {
                    self.handle_signal(signal);
                    self.draw()?;
                }
            }
        }
    }

    /// Apply one clock signal to the replay state.
    pub fn handle_signal(&mut self, signal: ClockSignal) {
        match signal {
            ClockSignal::Tick => {
                if self.engine.advance().is_none() {
                    warn!(
                        total = self.engine.total(),
                        "Tick received after the last event"
                    );
                }
            }
            ClockSignal::Complete => {
                if self.phase == ReplayPhase::Playing {
                    info!(
                        ticks = self.engine.cursor(),
                        items = self.engine.len(),
                        "Replay complete"
                    );
                }
                self.phase = ReplayPhase::Complete;
            }
        }
    }

    /// Draw the current state.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let engine = &self.engine;
        let settings = &self.settings;
        let phase = self.phase;
        self.terminal
            .draw(|frame| render_replay(frame, engine, settings, phase))?;
        Ok(())
    }

    /// Replay state.
    pub fn engine(&self) -> &ViewStateEngine {
        &self.engine
    }

    /// Current phase.
    pub fn phase(&self) -> ReplayPhase {
        self.phase
    }

    /// The underlying terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the replay.
///
/// Sets up the terminal, starts the clock over every loaded event, runs the
/// event loop and always restores the terminal afterwards.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_replay(engine: ViewStateEngine, settings: ReplaySettings) -> Result<(), TuiError> {
    let total = engine.total();
    let mut app = TuiApp::new(engine, settings)?;

    let result = ReplayClock::new(total, settings.rate)
        .spawn()
        .map_err(TuiError::from)
        .and_then(|clock| app.run(clock));

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
