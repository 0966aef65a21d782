use std::time::Duration;

use ratatui::style::Color;

/// Number of cells along each side of the square board.
pub const BOARD_SIZE: u16 = 20;

/// Terminal columns used to draw one board cell, keeping cells roughly square.
pub const CELL_WIDTH: u16 = 2;

/// Segment count of a freshly spawned snake.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Score granted for each food eaten.
pub const POINTS_PER_FOOD: u32 = 10;

/// Tick interval at score zero, in milliseconds.
pub const BASE_TICK_INTERVAL_MS: u64 = 200;

/// Interval reduction applied for every full speed step of score.
pub const SPEED_STEP_MS: u64 = 20;

/// Score needed per speed step.
pub const POINTS_PER_SPEED_STEP: u32 = 50;

/// Fastest allowed tick interval, in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 100;

/// Key under which the high score is persisted.
pub const HIGH_SCORE_KEY: &str = "snakeHighScore";

/// Upper bound on how long the driver blocks waiting for a key press.
pub const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Returns the total number of cells on the board.
#[must_use]
pub const fn total_cells() -> usize {
    BOARD_SIZE as usize * BOARD_SIZE as usize
}

/// Colors used to draw the board and its surroundings.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub grid: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub border: Color,
    pub score: Color,
    pub high_score: Color,
    pub muted: Color,
    pub paused: Color,
    pub game_over: Color,
}

/// Dark red palette of the arcade cabinet.
pub const THEME_EMBER: Theme = Theme {
    background: Color::Rgb(0x1a, 0x0a, 0x0a),
    grid: Color::Rgb(0x4a, 0x15, 0x15),
    snake_head: Color::Rgb(0xdc, 0x26, 0x26),
    snake_body: Color::Rgb(0x99, 0x1b, 0x1b),
    food: Color::Rgb(0xfb, 0xbf, 0x24),
    border: Color::Rgb(0x4b, 0x55, 0x63),
    score: Color::Rgb(0x4a, 0xde, 0x80),
    high_score: Color::Rgb(0xfa, 0xcc, 0x15),
    muted: Color::Rgb(0xd1, 0xd5, 0xdb),
    paused: Color::Rgb(0xfa, 0xcc, 0x15),
    game_over: Color::Rgb(0xf8, 0x71, 0x71),
};

/// Glyph drawn in empty cells to suggest the grid lines.
pub const GLYPH_GRID: &str = " ·";

/// Glyph drawn for snake segments and food.
pub const GLYPH_CELL: &str = "██";
