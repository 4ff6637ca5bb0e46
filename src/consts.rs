//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};
use std::time::Duration;

/// Default time between movements of the snake, in milliseconds
pub(crate) const TICK_MILLIS: u64 = 250;

/// Default time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(TICK_MILLIS);

/// Default width of the play area, in cells
pub(crate) const DEFAULT_BOARD_WIDTH: u16 = 15;

/// Default height of the play area, in cells
pub(crate) const DEFAULT_BOARD_HEIGHT: u16 = 15;

/// Size of a cell in pixel-equivalent units.  Random placement samples
/// continuous positions in these units before snapping them to the grid.
pub(crate) const CELL_SIZE: u16 = 40;

/// Fraction of the play area's extent on each side of each axis in which the
/// snake's head is never spawned
pub(crate) const HEAD_SPAWN_MARGIN: f64 = 0.2;

/// Fraction of the play area's extent excluded when placing food
pub(crate) const FOOD_SPAWN_MARGIN: f64 = 0.0;

/// How many random samples to draw per cell of the board when looking for a
/// free cell for food before falling back to scanning the board
pub(crate) const FOOD_PLACEMENT_ATTEMPTS_PER_CELL: usize = 4;

/// Number of terminal columns used to draw one cell
pub(crate) const CELL_COLUMNS: u16 = 2;

/// Glyph pair for the snake's head
pub(crate) const SNAKE_HEAD_SYMBOL: &str = "■■";

/// Glyph pair for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: &str = "▪▪";

/// Glyph pair for the food
pub(crate) const FOOD_SYMBOL: &str = "██";

/// Glyph pair for the snake's head when the game has ended
pub(crate) const COLLISION_SYMBOL: &str = "××";

/// Style for the snake's head and body: a green inset on a grey outline
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).bg(Color::DarkGray);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::Red);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the title on the start screen
pub(crate) const TITLE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
