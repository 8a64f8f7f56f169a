//! Search constants.

/// Depth searched when the caller does not specify one
pub const DEFAULT_DEPTH: u32 = 2;

/// Score of a drawn position (stalemate)
pub const DRAW_SCORE: i32 = 0;

/// Base magnitude of a checkmate score. Remaining depth is added on top so
/// that a faster mate always scores strictly better than a slower one.
pub const MATE_SCORE: i32 = 1_000_000;

/// Scores with absolute value above this are checkmate scores
pub const MATE_THRESHOLD: i32 = 900_000;

/// Sentinel beyond any reachable score. Used as the root bound so the root
/// never prunes, and (negated) as the starting bound for untried subtrees.
pub const INF_SCORE: i32 = 2_000_000;
