use super::types::{MoveList, PieceId};
use super::Game;

impl Game {
    /// True if the side to move could take the opposing king next ply.
    ///
    /// A position where this holds is illegal: the previous mover left
    /// their own king en prise. The legality filter and the search both
    /// reject such positions.
    #[must_use]
    pub fn king_capturable(&self) -> bool {
        let mover = self.team(self.side_to_move);
        let opponent = self.team(self.side_to_move.opponent());
        match opponent.king_square() {
            Some(king) => mover.attack_set(opponent.occupied()).contains(king),
            None => false,
        }
    }

    /// True if the side to move is currently in check
    #[must_use]
    pub fn king_checked(&self) -> bool {
        let mover = self.team(self.side_to_move);
        let opponent = self.team(self.side_to_move.opponent());
        match mover.king_square() {
            Some(king) => opponent.attack_set(mover.occupied()).contains(king),
            None => false,
        }
    }

    /// Candidate moves for the side to move, before the king-safety filter:
    /// one list per active piece in id order, targets ascending within each
    /// list.
    #[must_use]
    pub fn considered_moves(&self) -> Vec<(PieceId, MoveList)> {
        let mover = self.team(self.side_to_move);
        let opponent = self.team(self.side_to_move.opponent());
        mover.considered_moves(opponent.occupied())
    }

    /// Fully legal moves for the side to move, in the same deterministic
    /// order as [`Game::considered_moves`].
    ///
    /// Each candidate is tried with make/undo and kept only if it does not
    /// leave the mover's king capturable. Exhaustive rather than
    /// incremental: the correctness baseline any faster filter must match.
    #[must_use]
    pub fn legal_moves(&mut self) -> MoveList {
        let mut legal = MoveList::new();
        for (_, list) in self.considered_moves() {
            for &mv in &list {
                self.make_move(mv);
                let safe = !self.king_capturable();
                self.undo_move();
                if safe {
                    legal.push(mv);
                }
            }
        }
        legal
    }

    /// No legal moves and the king is attacked
    #[must_use]
    pub fn is_checkmate(&mut self) -> bool {
        self.legal_moves().is_empty() && self.king_checked()
    }

    /// No legal moves but the king is not attacked
    #[must_use]
    pub fn is_stalemate(&mut self) -> bool {
        self.legal_moves().is_empty() && !self.king_checked()
    }
}
