use super::direction::Direction;
use crate::grid::Cell;
use std::collections::{HashSet, VecDeque};

/// Snake state.  Snate.
///
/// All positions are relative to the top-left corner of the play area.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The position of the snake's head
    pub(super) head: Cell,

    /// The cells most recently vacated by the head, newest first.  Its
    /// length is the number of food items eaten.
    pub(super) trail: VecDeque<Cell>,
}

impl Snake {
    /// Create a new snake with its head at `head` and an empty trail
    pub(super) fn new(head: Cell) -> Snake {
        Snake {
            head,
            trail: VecDeque::new(),
        }
    }

    pub(super) fn head(&self) -> Cell {
        self.head
    }

    pub(super) fn trail(&self) -> &VecDeque<Cell> {
        &self.trail
    }

    /// Return the cell the head would move to when heading in `direction`
    pub(super) fn next_head(&self, direction: Direction) -> Cell {
        direction.advance(self.head)
    }

    /// Move the head one cell in `direction`.  The vacated cell becomes the
    /// newest part of the trail; unless `grow` is true, the oldest part of
    /// the trail is then dropped so that the length stays the same.
    pub(super) fn advance(&mut self, direction: Direction, grow: bool) {
        let new_head = self.next_head(direction);
        self.trail.push_front(self.head);
        self.head = new_head;
        if !grow {
            let _ = self.trail.pop_back();
        }
    }

    /// Has the head run into the trail?
    pub(super) fn bit_itself(&self) -> bool {
        self.trail.contains(&self.head)
    }

    /// Return every cell the snake currently covers
    pub(super) fn occupied(&self) -> HashSet<Cell> {
        std::iter::once(self.head)
            .chain(self.trail.iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_without_growth() {
        let mut snake = Snake::new(Cell::new(7, 7));
        snake.trail = VecDeque::from([Cell::new(6, 7), Cell::new(5, 7)]);
        snake.advance(Direction::Right, false);
        assert_eq!(snake.head(), Cell::new(8, 7));
        assert_eq!(
            snake.trail(),
            &VecDeque::from([Cell::new(7, 7), Cell::new(6, 7)])
        );
        assert!(!snake.bit_itself());
    }

    #[test]
    fn advance_with_growth() {
        let mut snake = Snake::new(Cell::new(7, 7));
        snake.advance(Direction::Up, true);
        assert_eq!(snake.head(), Cell::new(7, 6));
        assert_eq!(snake.trail(), &VecDeque::from([Cell::new(7, 7)]));
    }

    #[test]
    fn empty_trail_stays_empty() {
        let mut snake = Snake::new(Cell::new(0, 0));
        snake.advance(Direction::Left, false);
        assert_eq!(snake.head(), Cell::new(-1, 0));
        assert!(snake.trail().is_empty());
    }

    #[test]
    fn following_the_tail_is_safe() {
        // A 2x2 loop: the head moves into the cell the tail is leaving.
        let mut snake = Snake::new(Cell::new(0, 0));
        snake.trail = VecDeque::from([Cell::new(1, 0), Cell::new(1, 1), Cell::new(0, 1)]);
        snake.advance(Direction::Down, false);
        assert_eq!(snake.head(), Cell::new(0, 1));
        assert!(!snake.bit_itself());
    }

    #[test]
    fn occupied_cells() {
        let mut snake = Snake::new(Cell::new(3, 3));
        snake.trail = VecDeque::from([Cell::new(3, 4), Cell::new(3, 5)]);
        assert_eq!(
            snake.occupied(),
            HashSet::from([Cell::new(3, 3), Cell::new(3, 4), Cell::new(3, 5)])
        );
    }
}
