//! Chess board representation and rules.
//!
//! A 64-slot mailbox with cached king squares. Legal moves are found by
//! making each pseudo-legal candidate and checking the mover's king.
//!
//! # Example
//! ```
//! use chess_rules::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.generate_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attacks;
mod builder;
mod display;
mod error;
mod fen;
mod make_unmake;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, MoveParseError, SquareError};
pub use state::{Board, UnmakeInfo};
pub use types::{
    CastlingRights, Color, Move, MoveFlags, MoveList, MoveListIntoIter, Piece, Square,
};

pub(crate) use types::{
    CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q, PROMOTION_PIECES,
};
