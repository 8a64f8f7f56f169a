//! Per-kind attack and push generation tests.

use crate::game::attack_tables::{attacks, pawn_pushes};
use crate::game::{PieceKind, Side, Square, SquareSet};

fn set(squares: &[Square]) -> SquareSet {
    squares.iter().copied().collect()
}

#[test]
fn test_knight_in_corner() {
    let targets = attacks(
        PieceKind::Knight,
        Side::White,
        Square(0, 0),
        SquareSet::EMPTY,
        SquareSet::EMPTY,
    );
    assert_eq!(targets, set(&[Square(2, 1), Square(1, 2)]));
}

#[test]
fn test_knight_in_center() {
    let targets = attacks(
        PieceKind::Knight,
        Side::White,
        Square(3, 4),
        SquareSet::EMPTY,
        SquareSet::EMPTY,
    );
    assert_eq!(targets.len(), 8);
}

#[test]
fn test_king_neighbourhood() {
    let center = attacks(
        PieceKind::King,
        Side::White,
        Square(4, 4),
        SquareSet::EMPTY,
        SquareSet::EMPTY,
    );
    assert_eq!(center.len(), 8);

    let corner = attacks(
        PieceKind::King,
        Side::Black,
        Square(7, 7),
        SquareSet::EMPTY,
        SquareSet::EMPTY,
    );
    assert_eq!(corner, set(&[Square(6, 6), Square(6, 7), Square(7, 6)]));
}

#[test]
fn test_rook_open_board() {
    let targets = attacks(
        PieceKind::Rook,
        Side::White,
        Square(0, 0),
        SquareSet::EMPTY,
        SquareSet::EMPTY,
    );
    // full first rank plus full a-file
    assert_eq!(targets.len(), 14);
    assert!(targets.contains(Square(0, 7)));
    assert!(targets.contains(Square(7, 0)));
    assert!(!targets.contains(Square(1, 1)));
}

#[test]
fn test_rook_blocked_by_friend_and_enemy() {
    let friendly = SquareSet::from_square(Square(0, 3));
    let enemy = SquareSet::from_square(Square(4, 0));
    let targets = attacks(PieceKind::Rook, Side::White, Square(0, 0), friendly, enemy);

    // ray toward the friendly blocker stops short of it
    assert!(targets.contains(Square(0, 2)));
    assert!(!targets.contains(Square(0, 3)));
    // ray toward the enemy blocker includes it and stops there
    assert!(targets.contains(Square(4, 0)));
    assert!(!targets.contains(Square(5, 0)));
}

#[test]
fn test_bishop_diagonals() {
    let targets = attacks(
        PieceKind::Bishop,
        Side::White,
        Square(0, 0),
        SquareSet::EMPTY,
        SquareSet::EMPTY,
    );
    assert_eq!(targets.len(), 7);
    assert!(targets.contains(Square(7, 7)));
}

#[test]
fn test_queen_is_rook_plus_bishop() {
    let from = Square(3, 3);
    let occupied = set(&[Square(3, 6), Square(6, 6)]);
    let queen = attacks(PieceKind::Queen, Side::White, from, SquareSet::EMPTY, occupied);
    let rook = attacks(PieceKind::Rook, Side::White, from, SquareSet::EMPTY, occupied);
    let bishop = attacks(PieceKind::Bishop, Side::White, from, SquareSet::EMPTY, occupied);
    assert_eq!(queen, rook.union(bishop));
}

#[test]
fn test_pawn_attacks_need_enemy() {
    let from = Square(1, 4);
    let empty = attacks(
        PieceKind::Pawn,
        Side::White,
        from,
        SquareSet::EMPTY,
        SquareSet::EMPTY,
    );
    assert!(empty.is_empty());

    let enemy = SquareSet::from_square(Square(2, 3));
    let targets = attacks(PieceKind::Pawn, Side::White, from, SquareSet::EMPTY, enemy);
    assert_eq!(targets, enemy);
}

#[test]
fn test_pawn_attack_direction_by_side() {
    let white = attacks(
        PieceKind::Pawn,
        Side::White,
        Square(3, 4),
        SquareSet::EMPTY,
        set(&[Square(4, 3), Square(2, 3)]),
    );
    assert_eq!(white, set(&[Square(4, 3)]));

    let black = attacks(
        PieceKind::Pawn,
        Side::Black,
        Square(3, 4),
        SquareSet::EMPTY,
        set(&[Square(4, 3), Square(2, 3)]),
    );
    assert_eq!(black, set(&[Square(2, 3)]));
}

#[test]
fn test_pawn_pushes_from_start() {
    let targets = pawn_pushes(Side::White, Square(1, 4), SquareSet::EMPTY);
    assert_eq!(targets, set(&[Square(2, 4), Square(3, 4)]));

    let targets = pawn_pushes(Side::Black, Square(6, 4), SquareSet::EMPTY);
    assert_eq!(targets, set(&[Square(5, 4), Square(4, 4)]));
}

#[test]
fn test_pawn_pushes_blocked() {
    // blocker directly in front kills both pushes
    let blocked = pawn_pushes(Side::White, Square(1, 4), SquareSet::from_square(Square(2, 4)));
    assert!(blocked.is_empty());

    // blocker two ahead kills only the double push
    let single = pawn_pushes(Side::White, Square(1, 4), SquareSet::from_square(Square(3, 4)));
    assert_eq!(single, set(&[Square(2, 4)]));

    // off the start rank only the single push exists
    let advanced = pawn_pushes(Side::White, Square(3, 4), SquareSet::EMPTY);
    assert_eq!(advanced, set(&[Square(4, 4)]));
}
