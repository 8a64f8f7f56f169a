pub mod game;

pub use game::{
    Evaluation, Game, GameBuilder, Move, MoveList, Piece, PieceId, PieceKind, Position,
    SetupError, Side, Square, SquareSet, Team,
};
