//! Per-side piece roster and aggregate square sets.

use super::attack_tables::{attacks, pawn_pushes};
use super::types::{Move, MoveList, Piece, PieceId, PieceKind, Side, Square, SquareSet};
use super::MAX_TEAM_PIECES;

/// One side's roster: id-indexed piece storage, the bitset of active ids,
/// the union of active pieces' squares, and the cached material total.
///
/// Pieces are owned here for the whole game; the board's square map refers
/// back by `(Side, PieceId)`. The opposing team is not stored — the `Game`
/// holds both teams side by side and resolves the pairing by `Side`.
#[derive(Clone, Debug)]
pub struct Team {
    side: Side,
    pieces: [Option<Piece>; MAX_TEAM_PIECES],
    active: u16,
    occupied: SquareSet,
    points: i32,
    king: Option<PieceId>,
}

impl Team {
    #[must_use]
    pub(crate) fn new(side: Side) -> Self {
        Team {
            side,
            pieces: [None; MAX_TEAM_PIECES],
            active: 0,
            occupied: SquareSet::EMPTY,
            points: 0,
            king: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Union of all active pieces' squares
    #[inline]
    #[must_use]
    pub fn occupied(&self) -> SquareSet {
        self.occupied
    }

    /// Combined material value of active pieces, in centipawns
    #[inline]
    #[must_use]
    pub fn points(&self) -> i32 {
        self.points
    }

    /// Number of active pieces
    #[must_use]
    pub fn active_count(&self) -> u32 {
        self.active.count_ones()
    }

    /// Look up a piece by id, whether active or captured
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.as_usize()).and_then(Option::as_ref)
    }

    #[inline]
    #[must_use]
    pub(crate) fn is_active(&self, id: PieceId) -> bool {
        self.active & (1 << id.as_usize()) != 0
    }

    /// The active king's square, if a king is registered and on the board
    #[must_use]
    pub fn king_square(&self) -> Option<Square> {
        let id = self.king?;
        if self.is_active(id) {
            self.piece(id).map(|p| p.square)
        } else {
            None
        }
    }

    /// Register a new piece on `square` and activate it. Ids are assigned in
    /// registration order and stay stable for the lifetime of the game.
    ///
    /// Returns `None` when the roster is full.
    pub(crate) fn register(&mut self, kind: PieceKind, square: Square) -> Option<PieceId> {
        let slot = self.pieces.iter().position(Option::is_none)?;
        let id = PieceId(slot as u8);
        self.pieces[slot] = Some(Piece {
            id,
            side: self.side,
            kind,
            square,
        });
        if kind == PieceKind::King {
            self.king = Some(id);
        }
        self.activate_piece(id);
        Some(id)
    }

    /// Put a captured piece back on the board at its stored square.
    ///
    /// Exact inverse of [`Team::deactivate_piece`] for the same id.
    pub(crate) fn activate_piece(&mut self, id: PieceId) {
        let piece = self.pieces[id.as_usize()].expect("activating unregistered piece");
        debug_assert!(!self.is_active(id));
        self.active |= 1 << id.as_usize();
        self.occupied = self.occupied.with(piece.square);
        self.points += piece.kind.value();
    }

    /// Remove a piece from the board without destroying it.
    pub(crate) fn deactivate_piece(&mut self, id: PieceId) {
        let piece = self.pieces[id.as_usize()].expect("deactivating unregistered piece");
        debug_assert!(self.is_active(id));
        self.active &= !(1 << id.as_usize());
        self.occupied = self.occupied.without(piece.square);
        self.points -= piece.kind.value();
    }

    /// Move an active piece to a new square, keeping the occupied set in step.
    pub(crate) fn relocate(&mut self, id: PieceId, to: Square) {
        debug_assert!(self.is_active(id));
        let piece = self.pieces[id.as_usize()]
            .as_mut()
            .expect("relocating unregistered piece");
        self.occupied = self.occupied.without(piece.square).with(to);
        piece.square = to;
    }

    /// Iterate active pieces in ascending id order
    pub fn active_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces
            .iter()
            .enumerate()
            .filter(|(idx, _)| self.active & (1 << idx) != 0)
            .filter_map(|(_, slot)| slot.as_ref())
    }

    /// Union of every active piece's attack set, given the opposing
    /// occupancy snapshot.
    #[must_use]
    pub fn attack_set(&self, enemy: SquareSet) -> SquareSet {
        self.active_pieces().fold(SquareSet::EMPTY, |acc, piece| {
            acc.union(attacks(
                piece.kind,
                self.side,
                piece.square,
                self.occupied,
                enemy,
            ))
        })
    }

    /// Target squares for a single piece: its attack set, plus quiet pushes
    /// for pawns.
    #[must_use]
    fn move_targets(&self, piece: &Piece, enemy: SquareSet) -> SquareSet {
        let attacked = attacks(piece.kind, self.side, piece.square, self.occupied, enemy);
        if piece.kind == PieceKind::Pawn {
            attacked.union(pawn_pushes(
                self.side,
                piece.square,
                self.occupied.union(enemy),
            ))
        } else {
            attacked
        }
    }

    /// Candidate moves before the king-safety filter, one list per active
    /// piece in id order, each list in ascending target-square order.
    #[must_use]
    pub fn considered_moves(&self, enemy: SquareSet) -> Vec<(PieceId, MoveList)> {
        self.active_pieces()
            .map(|piece| {
                let mut list = MoveList::new();
                for to in self.move_targets(piece, enemy) {
                    list.push(Move::new(piece.square, to));
                }
                (piece.id, list)
            })
            .collect()
    }
}
