//! Fixed-depth alpha-beta search.
//!
//! Scores are White-positive at every node; each side's preference is
//! expressed through `Side::prefers` rather than by negating scores.
//! Pruning uses a single bound per node: the best score the parent has
//! already secured. As soon as a node's own best is at least as good for
//! its mover as that bound, the parent would never enter this subtree and
//! the remaining moves are skipped.
//!
//! Candidate moves come from the pseudo-legal generator; a reply that could
//! capture the king refutes the move that allowed it, so such subtrees
//! report "no score" (`None`) and the parent discards the move. The `None`
//! sentinel never escapes the search.

mod constants;

use super::types::Move;
use super::Game;

pub use constants::{DEFAULT_DEPTH, DRAW_SCORE, INF_SCORE, MATE_SCORE, MATE_THRESHOLD};

/// Outcome of a search from one position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    /// White-positive score in centipawns; mate scores exceed
    /// [`MATE_THRESHOLD`] in magnitude
    pub score: i32,
    /// Principal variation, best move first. Empty only when the root
    /// position is already terminal.
    pub best_line: Vec<Move>,
    /// Positions visited, including pruned-into and discarded ones
    pub nodes: u64,
}

impl Evaluation {
    /// The move the search recommends, if the position is not terminal
    #[must_use]
    pub fn best_move(&self) -> Option<Move> {
        self.best_line.first().copied()
    }

    /// True if the score is a forced-mate score for either side
    #[must_use]
    pub fn is_mate(&self) -> bool {
        self.score.abs() > MATE_THRESHOLD
    }
}

/// Scored subtree: the score plus its line, stored deepest move first and
/// reversed once at the root.
struct Node {
    score: i32,
    line: Vec<Move>,
}

/// Search `game` to `max_depth` plies and return the best score and line
/// for the side to move.
///
/// Deterministic: the same position and depth always yield the same
/// evaluation, because candidates are generated in a fixed order and only a
/// strictly preferred score replaces the incumbent.
///
/// Precondition: the opposing king is not already capturable. Positions
/// that violate it are unreachable through legal play and panic here.
#[must_use]
pub fn evaluate(game: &mut Game, max_depth: u32) -> Evaluation {
    let mover = game.moving_side();
    let mut nodes = 0;
    // The root bound is the mover's dream score, which no real score
    // matches or beats, so the root itself never prunes.
    let root = score_node(game, max_depth, mover.sign() * INF_SCORE, &mut nodes)
        .expect("search started from a position with a capturable king");

    let mut best_line = root.line;
    best_line.reverse();

    #[cfg(feature = "logging")]
    log::debug!(
        "depth {} score {} nodes {} line {}",
        max_depth,
        root.score,
        nodes,
        best_line
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    );

    Evaluation {
        score: root.score,
        best_line,
        nodes,
    }
}

/// Convenience wrapper for embedders that just want a move.
#[must_use]
pub fn best_move(game: &mut Game, max_depth: u32) -> Option<Move> {
    evaluate(game, max_depth).best_move()
}

/// Score one position. `bound` is the parent's best score so far; `None`
/// means the side to move can capture the opposing king, i.e. the move
/// that led here was illegal.
fn score_node(game: &mut Game, depth: u32, bound: i32, nodes: &mut u64) -> Option<Node> {
    *nodes += 1;

    if game.king_capturable() {
        return None;
    }

    let mover = game.moving_side();

    if depth == 0 {
        // A mate sitting exactly on the horizon must still score as mate,
        // not as a quiet material count.
        let score = if game.legal_moves().is_empty() {
            terminal_score(game, depth)
        } else {
            game.material_balance()
        };
        return Some(Node {
            score,
            line: Vec::new(),
        });
    }

    let mut best: Option<Node> = None;
    'pieces: for (_, list) in game.considered_moves() {
        for &mv in &list {
            // Until this node has a score of its own, hand children the
            // mover's worst case so they cannot prune against nothing.
            let child_bound = best
                .as_ref()
                .map_or(-mover.sign() * INF_SCORE, |node| node.score);

            game.make_move(mv);
            let reply = score_node(game, depth - 1, child_bound, nodes);
            game.undo_move();

            let Some(mut child) = reply else {
                continue;
            };

            let improved = match &best {
                None => true,
                Some(node) => mover.prefers(child.score, node.score),
            };
            if improved {
                child.line.push(mv);
                let cutoff = child.score == bound || mover.prefers(child.score, bound);
                best = Some(child);
                // The parent already holds `bound`; it will never let the
                // mover cash in a line worth this much.
                if cutoff {
                    break 'pieces;
                }
            }
        }
    }

    // No candidate survived the king-safety refutation: mate or stalemate.
    Some(best.unwrap_or_else(|| Node {
        score: terminal_score(game, depth),
        line: Vec::new(),
    }))
}

/// Score for a side to move with no legal moves: checkmate weighted by the
/// remaining depth so nearer mates dominate, stalemate a dead draw.
fn terminal_score(game: &Game, remaining_depth: u32) -> i32 {
    if game.king_checked() {
        let winner = game.moving_side().opponent();
        winner.sign() * (MATE_SCORE + remaining_depth as i32)
    } else {
        DRAW_SCORE
    }
}
