use std::fmt;

use crate::board::{Board, Cell};
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::snake::{Direction, Snake};

use rand::Rng;
use tracing::{debug, info, instrument, trace};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    OutOfBounds,
    SelfBite,
    AllFoodEaten,
}

impl Outcome {
    pub fn is_win(self) -> bool {
        self == Outcome::AllFoodEaten
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::OutOfBounds => "out of bounds",
            Outcome::SelfBite => "bitten itself",
            Outcome::AllFoodEaten => "all food eaten",
        };
        f.write_str(s)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Over(Outcome),
}

/// What the end-of-game screen needs to know.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub outcome: Outcome,
    pub moves: u32,
    pub length: usize,
    pub remaining_food: usize,
}

/// Board and snake of a single game, advanced one turn at a time.
#[derive(Clone, Debug)]
pub struct Engine {
    board: Board,
    snake: Snake,
    total_food: usize,
    food_eaten: usize,
    moves: u32,
    state: GameState,
}

impl Engine {
    /// Starts a game, refusing configurations that do not fit on the board.
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;
        let (board, start) = Board::initialize(config.rows, config.cols, config.food_count, rng);
        Ok(Engine::with_board(board, Snake::new(start), config.food_count))
    }

    /// Resumes from an existing board. `total_food` counts every food of the
    /// game, including the ones already eaten by a snake longer than 1.
    pub fn from_board(board: Board, total_food: usize) -> Option<Self> {
        let snake = Snake::from_board(&board)?;
        Some(Engine::with_board(board, snake, total_food))
    }

    fn with_board(board: Board, snake: Snake, total_food: usize) -> Self {
        let food_eaten = snake.len() - 1;
        Engine { board, snake, total_food, food_eaten, moves: 0, state: GameState::Playing }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn total_food(&self) -> usize {
        self.total_food
    }

    pub fn remaining_food(&self) -> usize {
        (self.total_food + 1).saturating_sub(self.snake.len())
    }

    /// `None` while the game is still being played.
    pub fn report(&self) -> Option<Report> {
        match self.state {
            GameState::Playing => None,
            GameState::Over(outcome) => Some(Report {
                outcome,
                moves: self.moves,
                length: self.snake.len(),
                remaining_food: self.remaining_food(),
            }),
        }
    }

    /// Plays one turn. Once the game is over this does nothing and keeps
    /// returning the final state.
    #[instrument(level = "trace", skip(self), fields(moves = self.moves))]
    pub fn step(&mut self, direction: Direction) -> GameState {
        if let GameState::Over(_) = self.state {
            return self.state;
        }

        let head_before = self.snake.head();
        debug_assert_eq!(crate::locator::locate(&self.board, 1), head_before);
        let head_after = direction.step_from(head_before);

        if self.board.is_out_of_bounds(head_after) {
            return self.finish(Outcome::OutOfBounds);
        }
        self.moves += 1;

        // Every segment slides into the place of the one ahead of it, which
        // leaves only the old tail cell free.
        let vacated = self.snake.vacate_tail();
        self.board.set_cell(vacated, Cell::Empty);

        if self.board.cell_at(head_after).is_segment() {
            self.snake.advance(head_after);
            self.relabel();
            self.board.set_cell(head_after, Cell::DeadHead);
            return self.finish(Outcome::SelfBite);
        }

        let ate = self.board.cell_at(head_after) == Cell::Food;
        if ate {
            self.snake.grow();
            self.food_eaten += 1;
        }

        let grew = self.snake.advance(head_after);
        self.relabel();
        trace!(?head_before, ?head_after, grew, length = self.snake.len(), "moved");

        if ate && self.food_eaten >= self.total_food {
            return self.finish(Outcome::AllFoodEaten);
        }

        debug!(moves = self.moves, ?direction, length = self.snake.len(), "turn played");
        self.state
    }

    ///////////////////////////////////////////////////////////////////////////

    /// Writes the ordinal labels of the body back to the board.
    fn relabel(&mut self) {
        for (i, pos) in self.snake.body().enumerate() {
            self.board.set_cell(*pos, Cell::Segment(i + 1));
        }
    }

    fn finish(&mut self, outcome: Outcome) -> GameState {
        info!(%outcome, moves = self.moves, length = self.snake.len(), "game over");
        self.state = GameState::Over(outcome);
        self.state
    }
}
