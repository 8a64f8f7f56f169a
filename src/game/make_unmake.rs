use super::state::MoveRecord;
use super::types::{Move, PieceKind, Side};
use super::Game;

impl Game {
    /// Apply `mv` for the side to move.
    ///
    /// Precondition: the origin square holds a piece of the side to move.
    /// This is an internal engine invariant, not an input boundary — callers
    /// feed moves straight from the generators, and violations panic.
    pub fn make_move(&mut self, mv: Move) {
        // 1. deactivate any capture target on the destination square
        let captured = self.board[mv.to.index()];
        if let Some((side, id)) = captured {
            debug_assert_ne!(side, self.side_to_move, "move captures its own piece");
            self.teams[side.index()].deactivate_piece(id);
        }

        // 2. clear the destination map entry
        self.board[mv.to.index()] = None;

        // 3. relocate the mover, keeping its team's occupied set in step
        let (mover_side, mover_id) = self.board[mv.from.index()]
            .expect("make_move: origin square is empty");
        debug_assert_eq!(mover_side, self.side_to_move, "move from the wrong side");
        self.teams[mover_side.index()].relocate(mover_id, mv.to);
        self.board[mv.to.index()] = Some((mover_side, mover_id));

        // 4. clear the origin map entry
        self.board[mv.from.index()] = None;

        // 5. push the history record with all pre-move state
        self.history.push(MoveRecord {
            mv,
            mover: mover_id,
            captured: captured.map(|(_, id)| id),
            prev_en_passant_file: self.en_passant_file,
            prev_halfmove_clock: self.halfmove_clock,
            prev_fullmove_number: self.fullmove_number,
        });

        let mover_kind = self.teams[mover_side.index()]
            .piece(mover_id)
            .map(|p| p.kind);
        let double_push = mover_kind == Some(PieceKind::Pawn)
            && mv.from.rank().abs_diff(mv.to.rank()) == 2;
        self.en_passant_file = if double_push { Some(mv.to.file()) } else { None };

        // 6. advance the clocks
        self.halfmove_clock += 1;
        if self.side_to_move == Side::Black {
            self.fullmove_number += 1;
        }

        // 7. hand the turn over
        self.side_to_move = self.side_to_move.opponent();
    }

    /// Revert the most recent [`Game::make_move`], restoring every piece of
    /// state it touched.
    ///
    /// Precondition: at least one move has been made and not yet undone.
    pub fn undo_move(&mut self) {
        let record = self
            .history
            .pop()
            .expect("undo_move without a matching make_move");

        // reverse 7 and 6
        self.side_to_move = self.side_to_move.opponent();
        self.halfmove_clock = record.prev_halfmove_clock;
        self.fullmove_number = record.prev_fullmove_number;
        self.en_passant_file = record.prev_en_passant_file;

        // reverse 4 and 3: put the mover back
        let mover_side = self.side_to_move;
        self.teams[mover_side.index()].relocate(record.mover, record.mv.from);
        self.board[record.mv.from.index()] = Some((mover_side, record.mover));
        self.board[record.mv.to.index()] = None;

        // reverse 2 and 1: reinstate the captured piece at the capture square
        if let Some(captured_id) = record.captured {
            let opponent = mover_side.opponent();
            self.teams[opponent.index()].activate_piece(captured_id);
            self.board[record.mv.to.index()] = Some((opponent, captured_id));
        }
    }
}
