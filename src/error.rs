// Error type shared by maze construction, configuration and the CLI.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MazeError {
    #[error("maze dimensions must be at least 1x1, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("slot buffer for {rows}x{cols} maze has wrong length: expected {expected}, got {actual}")]
    SlotCount {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("configuration parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MazeError>;
