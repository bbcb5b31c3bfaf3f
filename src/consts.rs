//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Number of cells along each side of the board
pub(crate) const GRID_SIZE: u16 = 15;

/// Length of the snake at the start of a round
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Time between frames of the draw loop
pub(crate) const FRAME_PERIOD: Duration = Duration::from_millis(16);

/// Default cap on the number of ticks that a single frame may catch up on
pub(crate) const MAX_CATCH_UP_TICKS: u32 = 3;

/// Key under which the best score is stored
pub(crate) const BEST_SCORE_KEY: &str = "adaptasnake-best";

/// Name of the file written & removed to check that the best score's
/// directory is writable
pub(crate) const STORAGE_PROBE_NAME: &str = ".adaptasnake-check";

/// Minimum drag distance, in approximate pixels, before a swipe registers
pub(crate) const SWIPE_THRESHOLD: u32 = 18;

/// Approximate size in pixels of one terminal cell, used to measure swipes
pub(crate) const CELL_PIXELS: Size = Size {
    width: 8,
    height: 16,
};

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Number of terminal columns used to draw one cell of the board
pub(crate) const CELL_WIDTH: u16 = 2;

/// Glyph for the apple
pub(crate) const APPLE_SYMBOL: &str = "●";

/// Glyph for the snake's head and body
pub(crate) const SNAKE_SYMBOL: &str = "██";

/// Faint dot marking each empty cell of the board
pub(crate) const GRID_SYMBOL: &str = "·";

/// Default color of the snake's body
pub(crate) const SNAKE_COLOR: Color = Color::Rgb(0x6a, 0xd9, 0x72);

/// Default color of the snake's head
pub(crate) const HEAD_COLOR: Color = Color::Rgb(0xb8, 0xf1, 0x8b);

/// Default color of the apple
pub(crate) const APPLE_COLOR: Color = Color::Rgb(0xff, 0x65, 0x65);

/// Style for the grid hint dots
pub(crate) const GRID_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the on-screen control buttons
pub(crate) const BUTTON_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);
