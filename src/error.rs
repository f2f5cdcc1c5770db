use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("the board needs at least one row and one column (got {rows}x{cols})")]
    ZeroDimension { rows: usize, cols: usize },
    #[error("a {rows}x{cols} board is too large")]
    TooLarge { rows: usize, cols: usize },
    #[error("{requested} foods do not fit on the board, at most {max} are allowed")]
    TooMuchFood { requested: usize, max: usize },
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid move {0:?}, expected one of U, D, L, R")]
    InvalidMove(String),
    #[error("invalid number {0:?}")]
    InvalidNumber(String),
    #[error("input closed")]
    Closed,
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl InputError {
    /// Whether the prompt should simply be repeated.
    pub fn is_retryable(&self) -> bool {
        matches!(self, InputError::InvalidMove(_) | InputError::InvalidNumber(_))
    }
}
