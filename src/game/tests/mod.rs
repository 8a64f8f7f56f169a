//! Game module tests.
//!
//! Tests are organized into separate files by category:
//! - `square_set.rs` - Square set and square arithmetic
//! - `attacks.rs` - Per-kind attack and push generation
//! - `make_unmake.rs` - Make/undo move correctness
//! - `movegen.rs` - Legality filtering and check predicates
//! - `search.rs` - Alpha-beta scores, lines and mates
//! - `proptest.rs` - Property-based tests
//! - `serde_roundtrip.rs` - Serialization, behind the `serde` feature

mod attacks;
mod proptest;
