//! Leaf types shared by the board, teams, and search.

mod moves;
mod piece;
mod square;
mod square_set;

pub use moves::{Move, MoveList};
pub use piece::{Piece, PieceId, PieceKind, Side};
pub use square::Square;
pub use square_set::SquareSet;

pub(crate) use piece::MAX_TEAM_PIECES;
