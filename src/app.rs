//! Render loop: terminal setup, frame timing, and drawing.
//!
//! Single-threaded and cooperative: each iteration drains the resize
//! mailbox, advances the simulation if the frame budget allows, draws the
//! glyph grid, then polls for input with the remaining budget. Terminal
//! state is restored on every exit path through an RAII guard.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::input::{Action, InputHandler};
use crate::layout::{self, Padding};
use crate::sim::Simulation;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use std::io::{self, Write};
use std::time::Instant;

/// Notice shown instead of the grid when the terminal cannot fit it.
const TOO_SMALL_NOTICE: &str = "terminal too small";

/// Scoped raw-mode/alternate-screen session.
///
/// Restoration runs in `Drop`, so it happens on normal return, early
/// return, and `?`-propagated errors alike.
struct RawScreen;

impl RawScreen {
    fn acquire(out: &mut impl Write) -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, Hide)?;
        Ok(Self)
    }
}

impl Drop for RawScreen {
    fn drop(&mut self) {
        // Restore failures are unreportable: stdout may already be gone.
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// The torus renderer application.
pub struct App {
    config: Config,
    sim: Simulation,
    input: InputHandler,
    /// Single-slot mailbox for resize notifications, drained once per
    /// frame before layout.
    pending_resize: Option<(u16, u16)>,
    /// Terminal dimensions drawn last frame; a change forces a clear.
    drawn: Option<(u16, u16)>,
}

impl App {
    /// Creates the application from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the torus parameters are invalid.
    pub fn new(config: Config) -> Result<Self> {
        let sim = Simulation::new(&config)?;
        Ok(Self {
            config,
            sim,
            input: InputHandler::new(),
            pending_resize: None,
            drawn: None,
        })
    }

    /// Runs the render loop until a quit keypress or an error.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup or drawing fails. The terminal
    /// is restored either way.
    pub fn run(&mut self) -> Result<()> {
        let mut out = io::stdout();
        let _screen = RawScreen::acquire(&mut out)?;
        self.main_loop(&mut out)
    }

    /// The main frame loop.
    fn main_loop(&mut self, out: &mut impl Write) -> Result<()> {
        let frame_interval = self.config.frame_interval();
        let (mut term_width, mut term_height) = terminal::size()?;
        let mut last_frame = Instant::now();

        loop {
            if let Some((w, h)) = self.pending_resize.take() {
                term_width = w;
                term_height = h;
            }

            // Advisory frame limiter: under budget, skip step-and-render
            // without blocking.
            let elapsed = last_frame.elapsed();
            if elapsed >= frame_interval {
                last_frame = Instant::now();
                self.render_frame(out, term_width, term_height, elapsed.as_secs_f64() * 1000.0)?;
            }

            let budget = frame_interval.saturating_sub(last_frame.elapsed());
            if event::poll(budget)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.input.handle_key(key) == Action::Quit {
                            break;
                        }
                    }
                    Event::Resize(w, h) => self.pending_resize = Some((w, h)),
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Steps the simulation and draws one frame.
    ///
    /// A too-small terminal is recoverable: a notice is drawn instead of
    /// the grid and the loop keeps polling for a resize.
    fn render_frame(
        &mut self,
        out: &mut impl Write,
        term_width: u16,
        term_height: u16,
        elapsed_ms: f64,
    ) -> Result<()> {
        let (cells_x, cells_y) = layout::fit_cells(
            term_width,
            term_height,
            self.config.min_h_pad,
            self.config.min_v_pad,
        );
        if cells_x == 0 || cells_y == 0 {
            return self.draw_notice(out, term_width, term_height);
        }

        self.sim
            .grid_mut()
            .set_window_cells(cells_x as usize, cells_y as usize)?;
        self.sim.step(elapsed_ms);

        match layout::center(
            term_width,
            term_height,
            self.config.min_h_pad,
            self.config.min_v_pad,
            cells_x,
            cells_y,
        ) {
            Ok(padding) => self.draw_grid(out, term_width, term_height, padding),
            // fit_cells already bounded the grid, but a resize can land
            // between the two calls.
            Err(Error::TermTooSmall { .. }) => self.draw_notice(out, term_width, term_height),
            Err(e) => Err(e),
        }
    }

    /// Draws every grid row at its padded position.
    fn draw_grid(
        &mut self,
        out: &mut impl Write,
        term_width: u16,
        term_height: u16,
        padding: Padding,
    ) -> Result<()> {
        self.clear_if_resized(out, term_width, term_height)?;

        for row in 0..self.sim.grid().cells_y() {
            let line: String = self.sim.grid().row(row)?.iter().collect();
            queue!(out, MoveTo(padding.left, padding.top + row as u16), Print(line))?;
        }
        out.flush()?;
        Ok(())
    }

    /// Clears the screen and prints the too-small notice.
    fn draw_notice(
        &mut self,
        out: &mut impl Write,
        term_width: u16,
        term_height: u16,
    ) -> Result<()> {
        self.drawn = None;
        let col = (term_width.saturating_sub(TOO_SMALL_NOTICE.len() as u16)) / 2;
        let row = term_height / 2;
        queue!(
            out,
            Clear(ClearType::All),
            MoveTo(col, row),
            Print(TOO_SMALL_NOTICE)
        )?;
        out.flush()?;
        Ok(())
    }

    /// Clears the screen when the terminal dimensions changed since the
    /// last drawn frame; steady-state frames overdraw in place.
    fn clear_if_resized(
        &mut self,
        out: &mut impl Write,
        term_width: u16,
        term_height: u16,
    ) -> Result<()> {
        if self.drawn != Some((term_width, term_height)) {
            queue!(out, Clear(ClearType::All))?;
            self.drawn = Some((term_width, term_height));
        }
        Ok(())
    }
}
