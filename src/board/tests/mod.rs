//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `attacks.rs` - Square attack detection
//! - `perft.rs` - Node counts for move generation correctness
//! - `draw.rs` - Outcome decisions (fifty-move, repetition, mate, stalemate)
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests

mod attacks;
mod make_unmake;
