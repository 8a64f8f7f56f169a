//! Chess position state machine and move search.
//!
//! A position is two [`Team`]s of id-addressed pieces plus a square map that
//! agrees with each team's occupied set at all times. Moves are applied and
//! reverted through a history stack of per-move records, and the alpha-beta
//! search drives the same make/undo machinery depth-first.
//!
//! # Example
//! ```
//! use chess_core::game::{search, Game};
//!
//! let mut game = Game::new();
//! let evaluation = search::evaluate(&mut game, 2);
//! println!("best line starts with {:?}", evaluation.best_line.first());
//! ```

mod attack_tables;
mod builder;
mod error;
mod make_unmake;
mod movegen;
pub mod search;
mod state;
mod team;
mod types;

#[cfg(test)]
mod tests;

pub use builder::GameBuilder;
pub use error::SetupError;
pub use search::Evaluation;
pub use state::{Game, Position};
pub use team::Team;
pub use types::{Move, MoveList, Piece, PieceId, PieceKind, Side, Square, SquareSet};

pub(crate) use types::MAX_TEAM_PIECES;
