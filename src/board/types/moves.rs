//! Move types and move list.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;
use crate::board::error::MoveParseError;

/// Move flag bitset. Flags are derived from the position, so only moves
/// produced by the generator carry trustworthy capture/castle/en-passant/
/// double-push bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveFlags(u8);

impl MoveFlags {
    pub const NONE: MoveFlags = MoveFlags(0);
    pub const CAPTURE: MoveFlags = MoveFlags(1 << 0);
    pub const DOUBLE_PUSH: MoveFlags = MoveFlags(1 << 1);
    pub const EN_PASSANT: MoveFlags = MoveFlags(1 << 2);
    pub const CASTLE: MoveFlags = MoveFlags(1 << 3);
    pub const PROMOTION: MoveFlags = MoveFlags(1 << 4);

    #[inline]
    #[must_use]
    pub const fn contains(self, other: MoveFlags) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: MoveFlags) -> MoveFlags {
        MoveFlags(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl std::ops::BitOr for MoveFlags {
    type Output = MoveFlags;

    fn bitor(self, rhs: MoveFlags) -> MoveFlags {
        self.union(rhs)
    }
}

impl fmt::Debug for MoveFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MoveFlags({:#07b})", self.0)
    }
}

/// A position-independent move descriptor.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<Piece>,
    flags: MoveFlags,
}

impl Move {
    /// Create a move with explicit flags
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, flags: MoveFlags) -> Self {
        Move {
            from,
            to,
            promotion: None,
            flags,
        }
    }

    /// Create a quiet move (no capture, no special flags)
    #[inline]
    #[must_use]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move::new(from, to, MoveFlags::NONE)
    }

    /// Create a capture move
    #[inline]
    #[must_use]
    pub const fn capture(from: Square, to: Square) -> Self {
        Move::new(from, to, MoveFlags::CAPTURE)
    }

    /// Create a double pawn push move
    #[inline]
    #[must_use]
    pub const fn double_pawn_push(from: Square, to: Square) -> Self {
        Move::new(from, to, MoveFlags::DOUBLE_PUSH)
    }

    /// Create an en passant capture
    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Move::new(from, to, MoveFlags::EN_PASSANT.union(MoveFlags::CAPTURE))
    }

    /// Create a castling move, described by the king's origin and destination
    #[inline]
    #[must_use]
    pub const fn castle(from: Square, to: Square) -> Self {
        Move::new(from, to, MoveFlags::CASTLE)
    }

    /// Create a promotion, optionally capturing
    #[inline]
    #[must_use]
    pub const fn promotion_to(from: Square, to: Square, piece: Piece, capture: bool) -> Self {
        let flags = if capture {
            MoveFlags::PROMOTION.union(MoveFlags::CAPTURE)
        } else {
            MoveFlags::PROMOTION
        };
        Move {
            from,
            to,
            promotion: Some(piece),
            flags,
        }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Get the promotion piece, if any
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }

    #[inline]
    #[must_use]
    pub const fn flags(self) -> MoveFlags {
        self.flags
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.flags.contains(MoveFlags::CAPTURE)
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        self.flags.contains(MoveFlags::EN_PASSANT)
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        self.flags.contains(MoveFlags::CASTLE)
    }

    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(self) -> bool {
        self.flags.contains(MoveFlags::DOUBLE_PUSH)
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// True when both moves name the same origin, destination and promotion.
    /// Flags are ignored.
    #[inline]
    #[must_use]
    pub fn same_move(self, other: Move) -> bool {
        self.from == other.from && self.to == other.to && self.promotion == other.promotion
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if self.is_capture() {
            write!(f, " cap")?;
        }
        if self.is_castling() {
            write!(f, " castle")?;
        }
        if self.is_en_passant() {
            write!(f, " ep")?;
        }
        if self.is_double_pawn_push() {
            write!(f, " double")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// UCI move syntax: origin, destination, optional lowercase promotion letter.
/// Only the syntax is checked; the result still has to be matched against
/// the legal moves of a position.
impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(uci: &str) -> Result<Self, Self::Err> {
        let len = uci.chars().count();
        if !(4..=5).contains(&len) {
            return Err(MoveParseError::InvalidLength { len });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: uci.to_string(),
        };
        if !uci.is_ascii() {
            return Err(invalid_square());
        }
        let from: Square = uci[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = uci[2..4].parse().map_err(|_| invalid_square())?;

        match uci[4..].chars().next() {
            None => Ok(Move::quiet(from, to)),
            Some(c) => {
                let piece = Piece::from_promotion_char(c)
                    .ok_or(MoveParseError::InvalidPromotion { char: c })?;
                Ok(Move::promotion_to(from, to, piece, false))
            }
        }
    }
}

pub(crate) const MAX_MOVES: usize = 256;
pub(crate) const EMPTY_MOVE: Move = Move::quiet(Square::A1, Square::A1);

/// List of moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    /// Find the move matching `candidate` by origin, destination and promotion.
    #[must_use]
    pub fn find_same(&self, candidate: Move) -> Option<Move> {
        self.iter().copied().find(|m| m.same_move(candidate))
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.as_slice().contains(mv)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.moves[self.idx];
            self.idx += 1;
            Some(mv)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_plain_move() {
        let mv: Move = "e2e4".parse().unwrap();
        assert_eq!(mv.from(), sq("e2"));
        assert_eq!(mv.to(), sq("e4"));
        assert_eq!(mv.promotion(), None);
        assert_eq!(mv.flags(), MoveFlags::NONE);
    }

    #[test]
    fn test_parse_promotion_sets_only_promotion_flag() {
        let mv: Move = "e7e8n".parse().unwrap();
        assert_eq!(mv.promotion(), Some(Piece::Knight));
        assert_eq!(mv.flags(), MoveFlags::PROMOTION);
        assert_eq!(mv.to_string(), "e7e8n");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "e2e".parse::<Move>(),
            Err(MoveParseError::InvalidLength { len: 3 })
        ));
        assert!(matches!(
            "e2e4qq".parse::<Move>(),
            Err(MoveParseError::InvalidLength { len: 6 })
        ));
        assert!(matches!(
            "z9e4".parse::<Move>(),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert!(matches!(
            "e7e8Q".parse::<Move>(),
            Err(MoveParseError::InvalidPromotion { char: 'Q' })
        ));
        assert!(matches!(
            "e7e8k".parse::<Move>(),
            Err(MoveParseError::InvalidPromotion { char: 'k' })
        ));
    }

    #[test]
    fn test_same_move_ignores_flags() {
        let parsed: Move = "e1g1".parse().unwrap();
        let generated = Move::castle(Square::E1, Square::G1);
        assert!(parsed.same_move(generated));
        assert_ne!(parsed, generated);

        let promo_q = Move::promotion_to(sq("a7"), sq("a8"), Piece::Queen, false);
        let promo_n = Move::promotion_to(sq("a7"), sq("a8"), Piece::Knight, false);
        assert!(!promo_q.same_move(promo_n));
    }

    #[test]
    fn test_move_list_find_same() {
        let mut list = MoveList::new();
        list.push(Move::double_pawn_push(sq("e2"), sq("e4")));
        list.push(Move::quiet(sq("e2"), sq("e3")));
        let found = list.find_same("e2e4".parse().unwrap()).unwrap();
        assert!(found.is_double_pawn_push());
        assert!(list.find_same("e2e5".parse().unwrap()).is_none());
        assert_eq!(list.len(), 2);
        assert_eq!(list.into_iter().count(), 2);
    }
}
