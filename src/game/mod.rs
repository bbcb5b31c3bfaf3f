mod direction;
mod grid;
mod snake;
mod status;
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::{Cell, Grid};
pub(crate) use self::snake::Snake;
pub(crate) use self::status::{LockCause, PauseReason, RunStatus};
use crate::clock::Simulation;
use crate::highscores::BestScore;
use crate::speed::SpeedPolicy;
use rand::Rng;
use std::time::Duration;

/// The state of a game of snake, from the start of the first round through
/// every restart
#[derive(Debug)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: Grid,
    policy: SpeedPolicy,
    snake: Snake,
    /// The direction the snake moved in on the most recent tick.  Turns are
    /// checked against this, not against `pending`.
    direction: Direction,
    /// The direction the snake will move in on the next tick.  Copied into
    /// `direction` at the start of every tick.
    pending: Direction,
    /// `None` only once the snake covers the entire grid
    apple: Option<Cell>,
    score: u32,
    best: BestScore,
    tick_interval: Duration,
    status: RunStatus,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(grid: Grid, policy: SpeedPolicy, best: BestScore) -> Self {
        Game::new_with_rng(grid, policy, best, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(
        grid: Grid,
        policy: SpeedPolicy,
        best: BestScore,
        rng: R,
    ) -> Game<R> {
        let (snake, direction) = grid.start_layout();
        let mut game = Game {
            rng,
            grid,
            policy,
            snake,
            direction,
            pending: direction,
            apple: None,
            score: 0,
            best,
            tick_interval: policy.base_interval(),
            status: RunStatus::Idle,
        };
        game.reset();
        game
    }

    /// Start a fresh round.  The snake is back at its starting position,
    /// the score is zero, and the game waits for a direction before moving.
    pub(crate) fn reset(&mut self) {
        let (snake, direction) = self.grid.start_layout();
        self.snake = snake;
        self.direction = direction;
        self.pending = direction;
        self.score = 0;
        self.tick_interval = self.policy.base_interval();
        self.status = RunStatus::Idle;
        self.apple = spawn_apple(&mut self.rng, self.grid, &self.snake);
    }

    /// Reset the board and hold it paused until the player moves
    pub(crate) fn reset_paused(&mut self) {
        self.reset();
        self.status = RunStatus::Paused(PauseReason::ManualReset);
    }

    /// Reset the board and start moving right away
    pub(crate) fn restart(&mut self) {
        self.reset();
        self.status = RunStatus::Running;
    }

    /// Advance the snake one cell.  Returns `true` if the round ended.
    ///
    /// Does nothing unless the game is running.
    pub(crate) fn step(&mut self) -> bool {
        if !self.status.is_running() {
            return false;
        }
        self.direction = self.pending;
        let head = self.direction.advance(self.snake.head(), self.grid);
        if self.snake.contains(head) {
            log::info!("Snake bit itself at {head:?} with score {}", self.score);
            self.status = RunStatus::Locked(LockCause::SelfCollision);
            return true;
        }
        self.snake.push_head(head);
        if self.apple == Some(head) {
            self.score = self.score.saturating_add(1);
            if self.best.record(self.score) {
                log::debug!("New best score: {}", self.score);
            }
            self.tick_interval = self.policy.tick_interval(self.score);
            self.apple = spawn_apple(&mut self.rng, self.grid, &self.snake);
            if self.apple.is_none() {
                log::info!("Snake fills the board with score {}", self.score);
                self.status = RunStatus::Locked(LockCause::BoardFilled);
                return true;
            }
        } else {
            self.snake.drop_tail();
        }
        false
    }
}

impl<R> Game<R> {
    /// Queue a turn for the next tick.  Turns along the axis the snake is
    /// already moving on are ignored, as is everything once the round has
    /// ended.  A turn that is accepted also starts or resumes the game.
    pub(crate) fn apply_direction(&mut self, direction: Direction) {
        if self.status.is_locked() || direction.shares_axis(self.direction) {
            return;
        }
        self.pending = direction;
        if !self.status.is_running() {
            self.set_running(true);
        }
    }

    /// Run or pause the game.  Pausing a game that is already paused keeps
    /// the original reason.
    pub(crate) fn set_running(&mut self, flag: bool) {
        self.status = match (self.status, flag) {
            (RunStatus::Locked(_), _) => return,
            (_, true) => RunStatus::Running,
            (RunStatus::Paused(reason), false) => RunStatus::Paused(reason),
            (_, false) => RunStatus::Paused(PauseReason::Manual),
        };
    }

    /// Pause a running game or resume a paused one.  If `forced` is given,
    /// run or pause according to it instead of flipping.
    pub(crate) fn toggle_pause(&mut self, forced: Option<bool>) {
        if self.status.is_locked() {
            return;
        }
        let target = forced.unwrap_or(!self.status.is_running());
        self.set_running(target);
    }

    pub(crate) fn focus_lost(&mut self) {
        if self.status.is_running() {
            self.status = RunStatus::Paused(PauseReason::FocusLost);
        }
    }

    /// Resume the game, but only if it was paused by losing focus
    pub(crate) fn focus_gained(&mut self) {
        if self.status == RunStatus::Paused(PauseReason::FocusLost) {
            self.status = RunStatus::Running;
        }
    }

    pub(crate) fn status(&self) -> RunStatus {
        self.status
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn best(&self) -> u32 {
        self.best.get()
    }

    /// A read-only view of everything needed to draw the game
    pub(crate) fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: self.grid,
            snake: &self.snake,
            apple: self.apple,
            score: self.score,
            best: self.best.is_persistent().then_some(self.best.get()),
            status: self.status,
        }
    }
}

impl<R: Rng> Simulation for Game<R> {
    fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    fn step(&mut self) -> bool {
        Game::step(self)
    }
}

/// Pick a random cell not occupied by the snake.  Returns `None` if there is
/// no such cell.
fn spawn_apple<R: Rng>(rng: &mut R, grid: Grid, snake: &Snake) -> Option<Cell> {
    if snake.len() >= grid.area() {
        return None;
    }
    loop {
        let cell = Cell::new(
            rng.random_range(0..grid.size()),
            rng.random_range(0..grid.size()),
        );
        if !snake.contains(cell) {
            return Some(cell);
        }
    }
}

/// What the renderer gets to see of a [`Game`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Snapshot<'a> {
    pub(crate) grid: Grid,
    pub(crate) snake: &'a Snake,
    pub(crate) apple: Option<Cell>,
    pub(crate) score: u32,
    /// `None` if the best score isn't being saved
    pub(crate) best: Option<u32>,
    pub(crate) status: RunStatus,
}
