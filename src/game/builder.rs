//! Fluent builder for constructing positions.
//!
//! Positions are assembled piece by piece; [`GameBuilder::build`] validates
//! the result, so an embedder can never obtain a `Game` without exactly one
//! king per side.
//!
//! # Example
//! ```
//! use chess_core::{GameBuilder, PieceKind, Side, Square};
//!
//! let game = GameBuilder::new()
//!     .piece(Square(0, 4), Side::White, PieceKind::King)
//!     .piece(Square(7, 4), Side::Black, PieceKind::King)
//!     .piece(Square(1, 0), Side::White, PieceKind::Pawn)
//!     .side_to_move(Side::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(game.team(Side::White).active_count(), 2);
//! ```

use super::error::SetupError;
use super::state::Game;
use super::types::{PieceKind, Side, Square, MAX_TEAM_PIECES};

/// A fluent builder for constructing `Game` positions.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    placements: Vec<(Square, Side, PieceKind)>,
    side_to_move: Side,
    en_passant_file: Option<usize>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    /// Create a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder {
            placements: Vec::new(),
            side_to_move: Side::White,
            en_passant_file: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Create a builder holding the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();

        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, &kind) in back_rank.iter().enumerate() {
            builder
                .placements
                .push((Square(0, file), Side::White, kind));
            builder
                .placements
                .push((Square(7, file), Side::Black, kind));
        }
        for file in 0..8 {
            builder
                .placements
                .push((Square(1, file), Side::White, PieceKind::Pawn));
            builder
                .placements
                .push((Square(6, file), Side::Black, PieceKind::Pawn));
        }

        builder
    }

    /// Place a piece, replacing whatever was on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, side: Side, kind: PieceKind) -> Self {
        self.placements.retain(|(sq, _, _)| *sq != square);
        self.placements.push((square, side, kind));
        self
    }

    /// Remove whatever is on a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.placements.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, side: Side) -> Self {
        self.side_to_move = side;
        self
    }

    /// Record a double-push file as if the previous move were a pawn double
    /// push on that file.
    #[must_use]
    pub const fn en_passant_file(mut self, file: usize) -> Self {
        self.en_passant_file = Some(file);
        self
    }

    /// Set the halfmove clock.
    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    /// Set the fullmove number (1 at the start of a game).
    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    /// Validate the setup and build the game.
    ///
    /// Requires every placement on the board, exactly one king per side, at
    /// most 16 pieces per side, an in-range en passant file, and a fullmove
    /// number of at least 1.
    pub fn build(self) -> Result<Game, SetupError> {
        // Square's public tuple fields allow out-of-range coordinates, so
        // placements are re-checked here before any set or map indexing.
        for &(Square(rank, file), _, _) in &self.placements {
            Square::try_from((rank, file))?;
        }

        for side in Side::BOTH {
            let kings = self
                .placements
                .iter()
                .filter(|(_, s, kind)| *s == side && *kind == PieceKind::King)
                .count();
            match kings {
                0 => return Err(SetupError::MissingKing { side }),
                1 => {}
                _ => return Err(SetupError::DuplicateKing { side }),
            }
            let pieces = self.placements.iter().filter(|(_, s, _)| *s == side).count();
            if pieces > MAX_TEAM_PIECES {
                return Err(SetupError::TeamFull { side });
            }
        }

        if let Some(file) = self.en_passant_file {
            if file >= 8 {
                return Err(SetupError::InvalidEnPassantFile { file });
            }
        }
        if self.fullmove_number == 0 {
            return Err(SetupError::InvalidFullmove {
                found: self.fullmove_number,
            });
        }

        let mut game = Game::empty();
        for (square, side, kind) in self.placements {
            let id = game.teams[side.index()]
                .register(kind, square)
                .ok_or(SetupError::TeamFull { side })?;
            game.board[square.index()] = Some((side, id));
        }

        game.side_to_move = self.side_to_move;
        game.en_passant_file = self.en_passant_file;
        game.halfmove_clock = self.halfmove_clock;
        game.fullmove_number = self.fullmove_number;

        Ok(game)
    }
}
