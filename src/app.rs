use crate::clock::Accumulator;
use crate::command::Command;
use crate::consts;
use crate::game::Game;
use crate::input::SwipeTracker;
use crate::render::{GameView, Palette, ScreenLayout};
use crate::util::get_display_area;
use crate::warning::{Warning, WarningOutcome};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::io;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: Game<R>,
    clock: Accumulator,
    palette: Palette,
    swipe: SwipeTracker,
    /// Pop-up shown over the game until dismissed.  The game does not advance
    /// while it is up.
    warning: Option<Warning>,
    /// Terminal area as of the most recent draw, for locating mouse events
    area: Rect,
    quitting: bool,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(
        game: Game<R>,
        clock: Accumulator,
        palette: Palette,
        swipe: SwipeTracker,
        warning: Option<Warning>,
    ) -> App<R> {
        App {
            game,
            clock,
            palette,
            swipe,
            warning,
            area: Rect::default(),
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        let mut last_frame = Instant::now();
        while !self.quitting {
            let now = Instant::now();
            self.advance(now.duration_since(last_frame));
            last_frame = now;
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        log::info!(
            "Quitting with a score of {} and a best score of {}",
            self.game.score(),
            self.game.best()
        );
        Ok(())
    }

    /// Let `elapsed` of wall-clock time pass in the game.  Time that passes
    /// while the game is not running is dropped.
    fn advance(&mut self, elapsed: Duration) {
        if self.warning.is_some() || !self.game.status().is_running() {
            return;
        }
        let ticks = self.clock.advance(elapsed, &mut self.game);
        if ticks > 1 {
            log::trace!(
                "Ran {ticks} ticks in one frame; {:?} left over",
                self.clock.pending()
            );
        }
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let frame = terminal.draw(|frame| {
            let view = GameView {
                snapshot: self.game.snapshot(),
                palette: self.palette,
            };
            frame.render_widget(view, frame.area());
            if let Some(ref warning) = self.warning {
                frame.render_widget(warning, get_display_area(frame.area()));
            }
        })?;
        self.area = frame.area;
        Ok(())
    }

    /// Handle input events until it's time for the next frame
    fn process_input(&mut self) -> io::Result<()> {
        let deadline = Instant::now() + consts::FRAME_PERIOD;
        while !self.quitting {
            let wait = deadline.saturating_duration_since(Instant::now());
            if !poll(wait)? {
                break;
            }
            self.handle_event(read()?);
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::FocusLost => {
                log::debug!("Terminal lost focus");
                self.game.focus_lost();
            }
            Event::FocusGained => {
                log::debug!("Terminal regained focus");
                self.game.focus_gained();
            }
            Event::Mouse(ev) => {
                if self.warning.is_some() {
                    return;
                }
                let layout = ScreenLayout::new(self.area, self.game.snapshot().grid);
                if let Some(cmd) = self.swipe.handle_event(ev, &layout) {
                    self.handle_command(cmd);
                }
            }
            _ => {
                if let Some(cmd) = event
                    .as_key_press_event()
                    .and_then(Command::from_key_event)
                {
                    self.handle_command(cmd);
                }
            }
        }
    }

    fn handle_command(&mut self, cmd: Command) {
        if let Some(warning) = self.warning.as_mut() {
            match warning.handle_command(cmd) {
                Some(WarningOutcome::Dismissed) => self.warning = None,
                Some(WarningOutcome::Quit) => self.quitting = true,
                None => (),
            }
            return;
        }
        match cmd {
            Command::Quit => self.quitting = true,
            Command::Move(direction) => self.game.apply_direction(direction),
            Command::TogglePause => self.game.toggle_pause(None),
            Command::Reset => {
                self.game.reset_paused();
                self.clock.reset();
            }
            Command::Restart => self.restart(),
            Command::Enter => {
                if self.game.status().is_locked() {
                    self.restart();
                }
            }
        }
    }

    fn restart(&mut self) {
        self.game.restart();
        self.clock.reset();
    }
}
