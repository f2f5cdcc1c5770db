use std::collections::VecDeque;
use std::str::FromStr;

use crate::board::Board;
use crate::error::InputError;
use crate::locator::locate;
use crate::{Coords, NO_POSITION};
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    /// `(column, row)` offset of a single step.
    pub fn delta(self) -> Coords {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn step_from(self, pos: Coords) -> Coords {
        let (dx, dy) = self.delta();
        (pos.0 + dx, pos.1 + dy)
    }
}

impl FromStr for Direction {
    type Err = InputError;

    /// Accepts exactly one of `U`, `D`, `L`, `R` in either case, surrounding
    /// whitespace aside.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let mut chars = token.chars();

        match (chars.next().map(|c| c.to_ascii_uppercase()), chars.next()) {
            (Some('U'), None) => Ok(Up),
            (Some('D'), None) => Ok(Down),
            (Some('L'), None) => Ok(Left),
            (Some('R'), None) => Ok(Right),
            _ => Err(InputError::InvalidMove(token.to_string())),
        }
    }
}

/// The player's snake. The body is kept in order, head first; the board is
/// patched from it after every move.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Coords>,
    last_vacated_tail: Coords,
    grow_pending: bool,
}

impl Snake {
    pub fn new(head: Coords) -> Self {
        let mut body = VecDeque::new();
        body.push_back(head);
        Snake { body, last_vacated_tail: head, grow_pending: false }
    }

    /// Rebuilds a snake from the segment labels on `board`, following labels
    /// 1, 2, ... until one is missing. Returns `None` if there is no head or
    /// if some segment is left over past the gap.
    pub fn from_board(board: &Board) -> Option<Self> {
        let body: VecDeque<Coords> = (1..)
            .map(|label| locate(board, label))
            .take_while(|pos| *pos != NO_POSITION)
            .collect();

        if body.len() != board.segment_count() {
            return None;
        }

        let tail = *body.back()?;
        Some(Snake { body, last_vacated_tail: tail, grow_pending: false })
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    /// Segment positions, head first.
    pub fn body(&self) -> impl Iterator<Item = &Coords> {
        self.body.iter()
    }

    pub fn contains(&self, pos: Coords) -> bool {
        self.body.contains(&pos)
    }

    pub fn last_vacated_tail(&self) -> Coords {
        self.last_vacated_tail
    }

    pub fn grow_pending(&self) -> bool {
        self.grow_pending
    }

    pub fn grow(&mut self) {
        self.grow_pending = true;
    }

    /// First half of a move: drops the tail and remembers where it was. Each
    /// remaining segment then sits one place behind its new ordinal.
    pub fn vacate_tail(&mut self) -> Coords {
        if let Some(tail) = self.body.pop_back() {
            self.last_vacated_tail = tail;
        }
        self.last_vacated_tail
    }

    /// Second half of a move: puts the head at `new_head` and, if growth is
    /// pending, gives the vacated tail cell back. Returns whether it grew.
    pub fn advance(&mut self, new_head: Coords) -> bool {
        self.body.push_front(new_head);

        if self.grow_pending {
            self.grow_pending = false;
            self.body.push_back(self.last_vacated_tail);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn direction_steps() {
        assert_eq!(Up.step_from((2, 2)), (2, 1));
        assert_eq!(Down.step_from((2, 2)), (2, 3));
        assert_eq!(Left.step_from((2, 2)), (1, 2));
        assert_eq!(Right.step_from((2, 2)), (3, 2));
    }

    #[test]
    fn parses_direction_tokens() {
        assert_eq!("u".parse::<Direction>().unwrap(), Up);
        assert_eq!("D".parse::<Direction>().unwrap(), Down);
        assert_eq!("  l\n".parse::<Direction>().unwrap(), Left);
        assert_eq!(" r ".parse::<Direction>().unwrap(), Right);

        assert!(matches!("x".parse::<Direction>(), Err(InputError::InvalidMove(t)) if t == "x"));
        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn longer_tokens_are_not_moves() {
        for token in ["dance", "Rx", "up?", "Right", "RR", "u d"].iter() {
            assert!(
                matches!(token.parse::<Direction>(), Err(InputError::InvalidMove(ref t)) if t == token),
                "{:?} was accepted",
                token
            );
        }
    }

    #[test]
    fn moving_without_growth_keeps_length() {
        let mut snake = Snake::new((1, 1));
        assert_eq!(snake.vacate_tail(), (1, 1));
        assert!(!snake.advance((2, 1)));

        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), (2, 1));
        assert_eq!(snake.last_vacated_tail(), (1, 1));
    }

    #[test]
    fn growth_returns_the_vacated_tail() {
        let mut snake = Snake::new((1, 1));
        snake.vacate_tail();
        snake.grow();
        assert!(snake.advance((1, 2)));

        assert!(!snake.grow_pending());
        let body: Vec<Coords> = snake.body().copied().collect();
        assert_eq!(body, vec![(1, 2), (1, 1)]);
    }

    #[test]
    fn rebuilds_from_labelled_board() {
        let mut board = Board::new(3, 3);
        board.set_cell((0, 0), Cell::Segment(1));
        board.set_cell((0, 1), Cell::Segment(2));
        board.set_cell((1, 1), Cell::Segment(3));

        let snake = Snake::from_board(&board).unwrap();
        let body: Vec<Coords> = snake.body().copied().collect();
        assert_eq!(body, vec![(0, 0), (0, 1), (1, 1)]);
        assert_eq!(snake.last_vacated_tail(), (1, 1));

        assert!(Snake::from_board(&Board::new(2, 2)).is_none());
    }

    #[test]
    fn gap_in_labels_is_rejected() {
        let mut board = Board::new(1, 3);
        board.set_cell((0, 0), Cell::Segment(1));
        board.set_cell((2, 0), Cell::Segment(3));
        assert!(Snake::from_board(&board).is_none());

        board.set_cell((1, 0), Cell::Segment(1));
        assert!(Snake::from_board(&board).is_none());
    }
}
