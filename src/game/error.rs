//! Error types for position setup.

use std::fmt;

use super::types::Side;

/// Error type for invalid position setups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// Rank or file outside the 8x8 board
    SquareOutOfBounds { rank: usize, file: usize },
    /// A side was given more pieces than its roster holds
    TeamFull { side: Side },
    /// A side has no king
    MissingKing { side: Side },
    /// A side has more than one king
    DuplicateKing { side: Side },
    /// En passant file outside 0-7
    InvalidEnPassantFile { file: usize },
    /// Fullmove counter must start at 1
    InvalidFullmove { found: u32 },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::SquareOutOfBounds { rank, file } => {
                write!(f, "Square ({rank}, {file}) out of bounds (must be 0-7)")
            }
            SetupError::TeamFull { side } => {
                write!(f, "Too many pieces for {side} (at most 16)")
            }
            SetupError::MissingKing { side } => {
                write!(f, "{side} has no king")
            }
            SetupError::DuplicateKing { side } => {
                write!(f, "{side} has more than one king")
            }
            SetupError::InvalidEnPassantFile { file } => {
                write!(f, "En passant file {file} out of bounds (must be 0-7)")
            }
            SetupError::InvalidFullmove { found } => {
                write!(f, "Fullmove number must be at least 1, found {found}")
            }
        }
    }
}

impl std::error::Error for SetupError {}
