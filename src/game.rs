use std::io::{BufRead, Write};

use crate::config::GameConfig;
use crate::engine::{Engine, GameState, Report};
use crate::error::{ConfigError, InputError};
use crate::input::Prompter;
use crate::term::TermManager;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

/// Board settings given up front; whatever is missing gets asked for.
#[derive(Debug, Clone, Default)]
pub struct Setup {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub food_count: Option<usize>,
    pub fancy: bool,
    pub seed: Option<u64>,
}

/// One game played over a line-based terminal.
pub struct SnakeGame<R, W: Write> {
    input: Prompter<R>,
    term: TermManager<W>,
}

impl<R: BufRead, W: Write> SnakeGame<R, W> {
    pub fn new(input: R, output: W, fancy: bool) -> Self {
        SnakeGame { input: Prompter::new(input), term: TermManager::new(output, fancy) }
    }

    pub fn into_output(self) -> W {
        self.term.into_inner()
    }

    /// Asks for the board size and food count not already in `setup`, until
    /// they form a valid configuration.
    pub fn configure(&mut self, setup: &Setup) -> Result<GameConfig> {
        let rows = match setup.rows {
            Some(rows) => rows,
            None => self.ask_number("Enter the number of rows: ")?,
        };
        let cols = match setup.cols {
            Some(cols) => cols,
            None => self.ask_number("Enter the number of columns: ")?,
        };
        let food_count = match setup.food_count {
            Some(food) => food,
            None => self.ask_number("Enter the number of foods: ")?,
        };

        let mut config = GameConfig { rows, cols, food_count, fancy: setup.fancy, seed: setup.seed };
        loop {
            match config.validate() {
                Ok(()) => return Ok(config),
                Err(err @ ConfigError::ZeroDimension { .. }) | Err(err @ ConfigError::TooLarge { .. }) => {
                    return Err(err.into())
                }
                Err(err @ ConfigError::TooMuchFood { .. }) => {
                    warn!(%err, "rejected food count");
                    self.term.show_message(&["Invalid number of foods!"])?;
                    config.food_count = self.ask_number("Please re-enter valid number of foods: ")?;
                }
            }
        }
    }

    /// Plays a full game and returns how it ended.
    pub fn play(&mut self, config: &GameConfig) -> Result<Report> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut engine = Engine::new(config, &mut rng).context("starting the game")?;
        info!(rows = config.rows, cols = config.cols, food = config.food_count, "game started");

        self.term.draw_board(engine.board(), engine.moves())?;
        self.term.show_help()?;
        self.run(&mut engine)
    }

    /// Feeds moves to `engine` until the game ends.
    pub fn run(&mut self, engine: &mut Engine) -> Result<Report> {
        let report = loop {
            self.term.prompt("Enter your move: ")?;
            let direction = match self.input.read_direction() {
                Ok(direction) => direction,
                Err(err) if err.is_retryable() => {
                    warn!(%err, "move rejected");
                    self.term.show_message(&["", "Invalid move!"])?;
                    continue;
                }
                Err(err) => return Err(err).context("reading the next move"),
            };
            self.term.show_message(&[""])?;

            if let GameState::Over(_) = engine.step(direction) {
                if let Some(report) = engine.report() {
                    break report;
                }
            }
            self.term.draw_board(engine.board(), engine.moves())?;
        };

        self.term.show_report(&report)?;
        self.term.draw_board(engine.board(), engine.moves())?;
        Ok(report)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn ask_number(&mut self, prompt: &str) -> Result<usize> {
        loop {
            self.term.prompt(prompt)?;
            match self.input.read_number() {
                Ok(n) => return Ok(n),
                Err(err) if err.is_retryable() => {
                    warn!(%err, "number rejected");
                    self.term.show_message(&["Invalid number!"])?;
                }
                Err(InputError::Closed) => return Err(InputError::Closed).context("reading the game settings"),
                Err(err) => return Err(err.into()),
            }
        }
    }
}
