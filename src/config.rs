use crate::error::ConfigError;

/// Settings for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of board rows
    pub rows: usize,
    /// Number of board columns
    pub cols: usize,
    /// Food spread over the board at the start
    pub food_count: usize,
    /// Draw with pictorial glyphs instead of plain text
    pub fancy: bool,
    /// Fixed seed for food and snake placement
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            food_count: 5,
            fancy: false,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn new(rows: usize, cols: usize, food_count: usize) -> Self {
        Self {
            rows,
            cols,
            food_count,
            ..Default::default()
        }
    }

    /// Number of cells on the board, `None` if that overflows.
    pub fn cell_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    /// Most food a board of this size can hold next to the snake.
    pub fn max_food(&self) -> Option<usize> {
        self.cell_count().map(|cells| cells.saturating_sub(1))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::ZeroDimension { rows: self.rows, cols: self.cols });
        }

        let max = self.max_food().ok_or(ConfigError::TooLarge { rows: self.rows, cols: self.cols })?;
        if self.food_count > max {
            return Err(ConfigError::TooMuchFood { requested: self.food_count, max });
        }

        Ok(())
    }
}
