mod direction;
mod food;
mod snake;
pub(crate) use self::direction::Direction;
use self::food::place_food;
use self::snake::Snake;
use crate::command::Command;
use crate::consts;
use crate::grid::{in_bounds, random_cell, Bounds, Cell};
use rand::Rng;
use std::collections::HashSet;
use std::fmt;

/// The complete state of one game: the snake, the food, the phase, and the
/// random source used for placement.
///
/// The state only changes through the input handlers
/// ([`request_start()`][GameState::request_start],
/// [`request_direction()`][GameState::request_direction],
/// [`request_quit()`][GameState::request_quit]) and the movement tick
/// ([`on_movement_tick()`][GameState::on_movement_tick]).  Every handler is
/// total: calling one in a phase where it means nothing does nothing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameState<R = rand::rngs::ThreadRng> {
    rng: R,
    bounds: Bounds,
    snake: Snake,
    /// `None` only once the snake has filled the whole board
    food: Option<Cell>,
    direction: Direction,
    /// Direction requested since the last tick, applied at the next one
    pending: Option<Direction>,
    phase: GamePhase,
    should_stop: bool,
}

impl GameState<rand::rngs::ThreadRng> {
    pub(crate) fn new(bounds: Bounds) -> Self {
        GameState::new_with_rng(bounds, rand::rng())
    }
}

impl<R: Rng> GameState<R> {
    /// Set up a new game on the start screen with the head at a random cell
    /// away from the edges, a random direction, and food on some other cell.
    pub(crate) fn new_with_rng(bounds: Bounds, mut rng: R) -> GameState<R> {
        let head = random_cell(bounds, consts::HEAD_SPAWN_MARGIN, &mut rng);
        let direction = rng.random::<Direction>();
        let food = place_food(bounds, &HashSet::from([head]), &mut rng);
        log::debug!("New game: head at {head}, heading {direction}, food at {food:?}");
        GameState {
            rng,
            bounds,
            snake: Snake::new(head),
            food,
            direction,
            pending: None,
            phase: GamePhase::StartScreen,
            should_stop: false,
        }
    }

    /// Advance the snake by one cell and evaluate the outcome.  Does nothing
    /// unless the game is being played.
    pub(crate) fn on_movement_tick(&mut self) {
        if !self.playing() {
            return;
        }
        if let Some(direction) = self.pending.take() {
            self.direction = direction;
        }
        let eating = self.food == Some(self.snake.next_head(self.direction));
        self.snake.advance(self.direction, eating);
        if eating {
            log::info!(
                "Ate food at {}; score is now {}",
                self.snake.head(),
                self.score()
            );
            self.food = place_food(self.bounds, &self.snake.occupied(), &mut self.rng);
        }
        if self.snake.bit_itself() {
            self.end(GameOverReason::SelfCollision);
        } else if !in_bounds(self.snake.head(), self.bounds) {
            self.end(GameOverReason::OutOfBounds);
        } else if self.food.is_none() {
            self.end(GameOverReason::BoardFull);
        }
    }
}

impl<R> GameState<R> {
    /// Leave the start screen and begin playing
    pub(crate) fn request_start(&mut self) {
        if self.phase == GamePhase::StartScreen {
            log::info!("Game started heading {}", self.direction);
            self.phase = GamePhase::Playing;
        }
    }

    /// Ask for the snake to turn at the next tick.  Turning straight back
    /// into the snake's neck is refused, and a later request before the
    /// tick replaces an earlier one.
    pub(crate) fn request_direction(&mut self, direction: Direction) {
        if !self.playing() {
            return;
        }
        if direction.is_opposite(self.direction) {
            log::debug!(
                "Ignoring request to reverse from {} to {direction}",
                self.direction
            );
            return;
        }
        self.pending = Some(direction);
    }

    /// Ask the driver to stop.  The phase is left untouched.
    pub(crate) fn request_quit(&mut self) {
        log::info!("Quit requested");
        self.should_stop = true;
    }

    /// Feed a logical input to the game.  On the start screen, a direction
    /// both starts the game and steers the snake.
    pub(crate) fn apply(&mut self, command: Command) {
        match command {
            Command::Start => self.request_start(),
            Command::Quit => self.request_quit(),
            Command::Up => self.steer(Direction::Up),
            Command::Down => self.steer(Direction::Down),
            Command::Left => self.steer(Direction::Left),
            Command::Right => self.steer(Direction::Right),
        }
    }

    fn steer(&mut self, direction: Direction) {
        self.request_start();
        self.request_direction(direction);
    }

    pub(crate) fn phase(&self) -> GamePhase {
        self.phase
    }

    pub(crate) fn should_stop(&self) -> bool {
        self.should_stop
    }

    pub(crate) fn playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Number of food items eaten, which is also the length of the trail
    pub(crate) fn score(&self) -> usize {
        self.snake.trail().len()
    }

    /// Return a read-only copy of everything needed to draw the game
    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            bounds: self.bounds,
            head: self.snake.head(),
            trail: self.snake.trail().iter().copied().collect(),
            food: self.food,
            direction: self.direction,
        }
    }

    fn end(&mut self, reason: GameOverReason) {
        log::info!(
            "Game over ({reason}) with head at {} and score {}",
            self.snake.head(),
            self.score()
        );
        self.phase = GamePhase::GameOver(reason);
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GamePhase {
    StartScreen,
    Playing,
    GameOver(GameOverReason),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameOverReason {
    /// The head ran into the trail
    SelfCollision,
    /// The head left the play area
    OutOfBounds,
    /// The snake covers every cell, so there is nowhere left to put food
    BoardFull,
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            GameOverReason::SelfCollision => "self-collision",
            GameOverReason::OutOfBounds => "out of bounds",
            GameOverReason::BoardFull => "board full",
        };
        f.pad(msg)
    }
}

/// An immutable view of a game taken between ticks
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snapshot {
    pub(crate) phase: GamePhase,
    pub(crate) bounds: Bounds,
    pub(crate) head: Cell,
    /// Newest first
    pub(crate) trail: Vec<Cell>,
    pub(crate) food: Option<Cell>,
    pub(crate) direction: Direction,
}

impl Snapshot {
    pub(crate) fn score(&self) -> usize {
        self.trail.len()
    }
}
