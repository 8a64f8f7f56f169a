//! Property-based tests using proptest.

use proptest::prelude::*;

use crate::game::search;
use crate::game::{Game, PieceKind, Side, Square, SquareSet};

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=30usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play `num_moves` random legal moves from the starting position,
/// stopping early if the game ends.
fn random_playout(seed: u64, num_moves: usize) -> Game {
    use rand::prelude::*;

    let mut game = Game::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..num_moves {
        let moves = game.legal_moves();
        if moves.is_empty() {
            break;
        }
        let idx = rng.gen_range(0..moves.len());
        game.make_move(moves[idx]);
    }
    game
}

/// Recount material from scratch and compare against the cached totals.
fn recounted_balance(game: &Game) -> i32 {
    let mut balance = 0;
    for idx in 0..64 {
        if let Some(piece) = game.occupant(Square::from_index(idx)) {
            balance += piece.side.sign() * piece.kind.value();
        }
    }
    balance
}

proptest! {
    /// Property: undoing every move restores the initial position exactly
    #[test]
    fn prop_make_undo_restores_position(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let initial = Game::new().position();

        let mut game = random_playout(seed, num_moves);
        while game.ply() > 0 {
            game.undo_move();
        }

        prop_assert_eq!(game.position(), initial);
        prop_assert_eq!(game.material_balance(), 0);
    }

    /// Property: the square map and each team's occupied set always agree
    #[test]
    fn prop_board_and_occupied_agree(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let game = random_playout(seed, num_moves);

        for side in Side::BOTH {
            let team = game.team(side);
            let mut rebuilt = SquareSet::EMPTY;
            for piece in team.active_pieces() {
                rebuilt = rebuilt.with(piece.square);
                prop_assert_eq!(
                    game.occupant(piece.square).map(|p| p.id),
                    Some(piece.id)
                );
            }
            prop_assert_eq!(team.occupied(), rebuilt);
            prop_assert_eq!(team.occupied().len(), team.active_count());
        }
    }

    /// Property: legal moves never leave the mover's king capturable
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut game = random_playout(seed, num_moves);

        let moves = game.legal_moves();
        for &mv in &moves {
            game.make_move(mv);
            prop_assert!(!game.king_capturable(), "legal move left the king en prise: {}", mv);
            game.undo_move();
        }
    }

    /// Property: being in check is the mirror of the opponent being able
    /// to capture the king on a turn flip
    #[test]
    fn prop_check_mirrors_capturable(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use crate::game::GameBuilder;

        let game = random_playout(seed, num_moves);
        let position = game.position();

        let mut builder = GameBuilder::new();
        for &(side, kind, square) in &position.placements {
            builder = builder.piece(square, side, kind);
        }
        let flipped = builder
            .side_to_move(position.side_to_move.opponent())
            .build()
            .expect("a reachable position stays valid with the turn flipped");

        prop_assert_eq!(game.king_checked(), flipped.king_capturable());
    }

    /// Property: cached material always matches a from-scratch recount
    #[test]
    fn prop_material_matches_recount(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let game = random_playout(seed, num_moves);
        prop_assert_eq!(game.material_balance(), recounted_balance(&game));
    }

    /// Property: kings survive every playout
    #[test]
    fn prop_kings_are_never_captured(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let game = random_playout(seed, num_moves);
        for side in Side::BOTH {
            prop_assert!(game.team(side).king_square().is_some());
        }
    }

    /// Property: search scores are bounded and quiet scores stay below the
    /// mate threshold
    #[test]
    fn prop_search_score_bounded(seed in seed_strategy(), num_moves in 0..15usize) {
        let mut game = random_playout(seed, num_moves);

        let eval = search::evaluate(&mut game, 2);
        prop_assert!(eval.score.abs() < search::INF_SCORE);
        if !eval.is_mate() {
            // a full extra queen armada still stays well under the threshold
            prop_assert!(eval.score.abs() < 10_000);
        }
    }

    /// Property: search never mutates the position it evaluates
    #[test]
    fn prop_search_restores_position(seed in seed_strategy(), num_moves in 0..15usize) {
        let mut game = random_playout(seed, num_moves);
        let before = game.position();
        let ply = game.ply();

        let _ = search::evaluate(&mut game, 2);

        prop_assert_eq!(game.position(), before);
        prop_assert_eq!(game.ply(), ply);
    }

    /// Property: evaluation is a pure function of the position
    #[test]
    fn prop_search_deterministic(seed in seed_strategy(), num_moves in 0..10usize) {
        let mut game = random_playout(seed, num_moves);
        let mut copy = game.clone();

        let first = search::evaluate(&mut game, 2);
        let second = search::evaluate(&mut copy, 2);
        prop_assert_eq!(first, second);
    }

    /// Property: the best line is playable and no longer than the depth
    #[test]
    fn prop_best_line_is_playable(seed in seed_strategy(), num_moves in 0..10usize) {
        let mut game = random_playout(seed, num_moves);

        let eval = search::evaluate(&mut game, 3);
        prop_assert!(eval.best_line.len() <= 3);

        let mut played = 0;
        for &mv in &eval.best_line {
            let legal = game.legal_moves();
            prop_assert!(legal.contains(mv), "line move {} is not legal", mv);
            game.make_move(mv);
            played += 1;
        }
        for _ in 0..played {
            game.undo_move();
        }
    }
}

#[test]
fn test_piece_values_are_ordered() {
    let values: Vec<i32> = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ]
    .iter()
    .map(|kind| kind.value())
    .collect();
    let mut sorted = values.clone();
    sorted.sort_unstable();
    assert_eq!(values, sorted);
    // the king is priceless and counts for nothing
    assert_eq!(PieceKind::King.value(), 0);
}
