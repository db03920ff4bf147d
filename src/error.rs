//! Error types for placement, input, rejected moves and configuration

use std::path::PathBuf;

use crate::WIDTH;

/// Errors from dropping a disc into the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("column {} is full", .0 + 1)]
    ColumnFull(usize),

    #[error("column {} is outside the board", .0 + 1)]
    ColumnOutOfRange(usize),
}

/// Errors from the input collaborator
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("expected a column number, got {0:?}")]
    Malformed(String),

    #[error("input closed")]
    Closed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A rejected move. Every variant is recoverable: the board is left as it
/// was and the player is prompted again.
#[derive(Debug, thiserror::Error)]
pub enum MoveError {
    #[error("Invalid disk position [{0}], please choose a column between 1 and {}", WIDTH)]
    InvalidColumn(i64),

    #[error("Invalid disk position [{0}], please choose a column which is not full")]
    ColumnFull(i64),

    #[error("Error reading input: {0}")]
    Input(#[from] InputError),
}

impl From<PlacementError> for MoveError {
    fn from(err: PlacementError) -> Self {
        match err {
            PlacementError::ColumnFull(column) => MoveError::ColumnFull(column as i64 + 1),
            PlacementError::ColumnOutOfRange(column) => MoveError::InvalidColumn(column as i64 + 1),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("bad config file: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid setting: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_error_uses_one_indexed_columns() {
        assert_eq!(PlacementError::ColumnFull(0).to_string(), "column 1 is full");
        assert_eq!(
            PlacementError::ColumnOutOfRange(7).to_string(),
            "column 8 is outside the board"
        );
    }

    #[test]
    fn move_error_display() {
        assert_eq!(
            MoveError::InvalidColumn(9).to_string(),
            "Invalid disk position [9], please choose a column between 1 and 7"
        );
        assert_eq!(
            MoveError::ColumnFull(3).to_string(),
            "Invalid disk position [3], please choose a column which is not full"
        );
        assert_eq!(
            MoveError::from(InputError::Malformed("x".into())).to_string(),
            "Error reading input: expected a column number, got \"x\""
        );
    }

    #[test]
    fn placement_errors_become_one_indexed_move_errors() {
        assert!(matches!(
            MoveError::from(PlacementError::ColumnFull(2)),
            MoveError::ColumnFull(3)
        ));
        assert!(matches!(
            MoveError::from(PlacementError::ColumnOutOfRange(7)),
            MoveError::InvalidColumn(8)
        ));
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::Validation("log_filter must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "invalid setting: log_filter must not be empty"
        );
    }
}
