//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lowercase FEN letters, indexed by `Piece as usize`.
const SYMBOLS: [char; 6] = ['p', 'n', 'b', 'r', 'q', 'k'];

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Parse a FEN piece letter in either case.
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        let lower = c.to_ascii_lowercase();
        SYMBOLS
            .iter()
            .position(|&s| s == lower)
            .map(|idx| Piece::ALL[idx])
    }

    /// Parse a UCI promotion letter. Only lowercase `q`, `r`, `b`, `n` are accepted.
    #[must_use]
    pub fn from_promotion_char(c: char) -> Option<Piece> {
        match Piece::from_char(c) {
            Some(piece) if c.is_ascii_lowercase() && piece.can_promote_to() => Some(piece),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        SYMBOLS[self.index()]
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    #[inline]
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        match color {
            Color::White => self.to_char().to_ascii_uppercase(),
            Color::Black => self.to_char(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn can_promote_to(self) -> bool {
        !matches!(self, Piece::Pawn | Piece::King)
    }

    #[inline]
    #[must_use]
    pub const fn attacks_diagonally(self) -> bool {
        matches!(self, Piece::Bishop | Piece::Queen)
    }

    #[inline]
    #[must_use]
    pub const fn attacks_straight(self) -> bool {
        matches!(self, Piece::Rook | Piece::Queen)
    }
}

/// Promotion choices, queen first.
pub(crate) const PROMOTION_PIECES: [Piece; 4] =
    [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight];

/// Side to move, or owner of a piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Board rank seen from this side: rank 0 is its own back rank.
    #[inline]
    #[must_use]
    pub(crate) const fn relative_rank(self, rank: usize) -> usize {
        match self {
            Color::White => rank,
            Color::Black => 7 - rank,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn back_rank(self) -> usize {
        self.relative_rank(0)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn pawn_start_rank(self) -> usize {
        self.relative_rank(1)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn pawn_promotion_rank(self) -> usize {
        self.relative_rank(7)
    }

    /// Rank delta of a pawn step.
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_direction(self) -> isize {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::White => "White",
            Color::Black => "Black",
        })
    }
}
