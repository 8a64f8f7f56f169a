//! Attack-set generation per piece kind.
//!
//! Leaper targets (king, knight, pawn captures) come from tables precomputed
//! on first use; slider targets are walked ray by ray, stopping at the first
//! occupied square, which is itself included so it can be captured.

use once_cell::sync::Lazy;

use super::types::{PieceKind, Side, Square, SquareSet};

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn leaper_table(deltas: [(isize, isize); 8]) -> [SquareSet; 64] {
    let mut table = [SquareSet::EMPTY; 64];
    for (idx, slot) in table.iter_mut().enumerate() {
        let from = Square::from_index(idx);
        let mut mask = SquareSet::EMPTY;
        for (dr, df) in deltas {
            if let Some(to) = from.offset(dr, df) {
                mask = mask.with(to);
            }
        }
        *slot = mask;
    }
    table
}

static KNIGHT_ATTACKS: Lazy<[SquareSet; 64]> = Lazy::new(|| leaper_table(KNIGHT_DELTAS));

static KING_ATTACKS: Lazy<[SquareSet; 64]> = Lazy::new(|| leaper_table(KING_DELTAS));

static PAWN_CAPTURES: Lazy<[[SquareSet; 64]; 2]> = Lazy::new(|| {
    let mut table = [[SquareSet::EMPTY; 64]; 2];
    for side in Side::BOTH {
        let forward = side.pawn_direction();
        for (idx, slot) in table[side.index()].iter_mut().enumerate() {
            let from = Square::from_index(idx);
            let mut mask = SquareSet::EMPTY;
            for df in [-1, 1] {
                if let Some(to) = from.offset(forward, df) {
                    mask = mask.with(to);
                }
            }
            *slot = mask;
        }
    }
    table
});

/// Walk each ray outward from `from`, including every visited square and
/// stopping once a ray hits an occupied square.
fn ray_attacks(from: Square, directions: &[(isize, isize)], occupied: SquareSet) -> SquareSet {
    let mut targets = SquareSet::EMPTY;
    for &(dr, df) in directions {
        let mut current = from;
        while let Some(next) = current.offset(dr, df) {
            targets = targets.with(next);
            if occupied.contains(next) {
                break;
            }
            current = next;
        }
    }
    targets
}

/// The squares a piece of `kind` on `from` attacks, given both occupancy
/// snapshots. Friendly-occupied squares are never attackable; a pawn's
/// diagonal squares count only when an enemy stands on them.
#[must_use]
pub(crate) fn attacks(
    kind: PieceKind,
    side: Side,
    from: Square,
    friendly: SquareSet,
    enemy: SquareSet,
) -> SquareSet {
    let raw = match kind {
        PieceKind::Knight => KNIGHT_ATTACKS[from.index()],
        PieceKind::King => KING_ATTACKS[from.index()],
        PieceKind::Bishop => ray_attacks(from, &BISHOP_DIRECTIONS, friendly.union(enemy)),
        PieceKind::Rook => ray_attacks(from, &ROOK_DIRECTIONS, friendly.union(enemy)),
        PieceKind::Queen => ray_attacks(from, &QUEEN_DIRECTIONS, friendly.union(enemy)),
        PieceKind::Pawn => return PAWN_CAPTURES[side.index()][from.index()].intersection(enemy),
    };
    raw.difference(friendly)
}

/// Quiet pawn pushes: one square forward onto an empty square, plus the
/// double push from the start rank when both squares are empty. These are
/// movement targets, not attacks; they never capture.
#[must_use]
pub(crate) fn pawn_pushes(side: Side, from: Square, occupied: SquareSet) -> SquareSet {
    let forward = side.pawn_direction();
    let mut targets = SquareSet::EMPTY;
    if let Some(single) = from.offset(forward, 0) {
        if !occupied.contains(single) {
            targets = targets.with(single);
            if from.rank() == side.pawn_start_rank() {
                if let Some(double) = single.offset(forward, 0) {
                    if !occupied.contains(double) {
                        targets = targets.with(double);
                    }
                }
            }
        }
    }
    targets
}
