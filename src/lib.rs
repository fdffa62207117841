//! Chess rules: legal move generation, reversible move application, and
//! game outcome detection (checkmate, stalemate, threefold repetition and
//! the fifty-move rule).
//!
//! # Example
//! ```
//! use chess_rules::board::Board;
//!
//! let mut board = Board::new();
//! assert_eq!(board.perft(3), 8902);
//! ```

#[macro_use]
mod macros;

pub mod board;
pub mod cli;
pub mod game;
mod perft;
pub mod player;
pub mod zobrist;

pub use board::{Board, Color, Move, Piece, Square};
pub use game::{Game, GameError, GameStatus, PlayerKind};
pub use player::{MoveSupplier, RandomMover};
