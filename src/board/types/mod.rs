//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rules engine:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - compact board square index (a1 = 0 .. h8 = 63)
//! - `Move`, `MoveFlags` and `MoveList` - move representation
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, MoveFlags, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use castling::{CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q};
pub(crate) use piece::PROMOTION_PIECES;
