use super::builder::GameBuilder;
use super::team::Team;
use super::types::{Move, Piece, PieceId, PieceKind, Side, Square};

/// Everything a popped history entry needs to restore the previous position
/// without re-deriving anything from the board.
#[derive(Clone, Copy, Debug)]
pub struct MoveRecord {
    pub(crate) mv: Move,
    pub(crate) mover: PieceId,
    /// Captured piece's id on the opposing team, if the move captured
    pub(crate) captured: Option<PieceId>,
    pub(crate) prev_en_passant_file: Option<usize>,
    pub(crate) prev_halfmove_clock: u32,
    pub(crate) prev_fullmove_number: u32,
}

/// A structured snapshot of the position, sufficient for an embedder to
/// format its own textual notation. The core neither parses nor prints
/// position strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    /// Active pieces in ascending square order
    pub placements: Vec<(Side, PieceKind, Square)>,
    pub side_to_move: Side,
    pub en_passant_file: Option<usize>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

/// The position state machine: two teams, the square map, the side to move,
/// and the history stack that makes every applied move reversible.
///
/// The square map holds `(Side, PieceId)` indices into team storage, never
/// direct references; the map and each team's occupied set agree at every
/// step, which the test suite checks as a standing invariant.
#[derive(Clone, Debug)]
pub struct Game {
    pub(crate) teams: [Team; 2],
    pub(crate) board: [Option<(Side, PieceId)>; 64],
    pub(crate) side_to_move: Side,
    pub(crate) en_passant_file: Option<usize>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) history: Vec<MoveRecord>,
}

impl Game {
    /// The standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder::starting_position()
            .build()
            .expect("standard starting position is valid")
    }

    pub(crate) fn empty() -> Self {
        Game {
            teams: [Team::new(Side::White), Team::new(Side::Black)],
            board: [None; 64],
            side_to_move: Side::White,
            en_passant_file: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        }
    }

    /// The side whose turn it is
    #[inline]
    #[must_use]
    pub fn moving_side(&self) -> Side {
        self.side_to_move
    }

    /// Borrow one side's team
    #[inline]
    #[must_use]
    pub fn team(&self, side: Side) -> &Team {
        &self.teams[side.index()]
    }

    /// The piece occupying `square`, if any
    #[must_use]
    pub fn occupant(&self, square: Square) -> Option<&Piece> {
        let (side, id) = self.board[square.index()]?;
        self.teams[side.index()].piece(id)
    }

    /// Number of plies played since construction
    #[must_use]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// File of the pawn that just made a double push, if the last move was one
    #[inline]
    #[must_use]
    pub fn en_passant_file(&self) -> Option<usize> {
        self.en_passant_file
    }

    /// White's material minus Black's, in centipawns. White-positive at
    /// every node; the search never flips the sign.
    #[must_use]
    pub fn material_balance(&self) -> i32 {
        self.teams[Side::White.index()].points() - self.teams[Side::Black.index()].points()
    }

    /// Snapshot the position for external notation formatting
    #[must_use]
    pub fn position(&self) -> Position {
        let mut placements = Vec::with_capacity(32);
        for idx in 0..64 {
            if let Some((side, id)) = self.board[idx] {
                if let Some(piece) = self.teams[side.index()].piece(id) {
                    placements.push((side, piece.kind, Square::from_index(idx)));
                }
            }
        }
        Position {
            placements,
            side_to_move: self.side_to_move,
            en_passant_file: self.en_passant_file,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
