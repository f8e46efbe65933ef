//! Level loading errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;

/// Ill-formed level descriptor detected at load time.
///
/// The engine state is left untouched when loading fails.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LevelError {
    #[error("invalid level data: map template is empty")]
    EmptyMap,

    #[error("invalid level data: row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid level data: no player marker '@'")]
    MissingPlayer,

    #[error("invalid level data: second player marker at {second} (first at {first})")]
    DuplicatePlayer { first: Position, second: Position },

    #[error("invalid level data: map {width}x{height} exceeds the supported size")]
    TooLarge { width: usize, height: usize },
}

impl GameError for LevelError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyMap => "LEVEL_EMPTY_MAP",
            Self::RaggedRow { .. } => "LEVEL_RAGGED_ROW",
            Self::MissingPlayer => "LEVEL_MISSING_PLAYER",
            Self::DuplicatePlayer { .. } => "LEVEL_DUPLICATE_PLAYER",
            Self::TooLarge { .. } => "LEVEL_TOO_LARGE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_errors_are_validation_failures() {
        let err = LevelError::RaggedRow {
            row: 2,
            expected: 5,
            found: 3,
        };
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert!(!err.severity().is_internal());
        assert_eq!(err.error_code(), "LEVEL_RAGGED_ROW");
        assert_eq!(
            err.to_string(),
            "invalid level data: row 2 has width 3, expected 5"
        );
    }
}
