//! Square attack detection.
//!
//! Mailbox scan from the target square outward: pawn sources, knight and
//! king step tables, then eight sliding rays.

use once_cell::sync::Lazy;

use super::{Board, Color, Piece, Square};

pub(crate) const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub(crate) const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// (rank, file) steps along ranks and files
pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// (rank, file) steps along diagonals
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

fn step_table(deltas: &[(isize, isize)]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        let from = Square::from_index_unchecked(idx);
        deltas
            .iter()
            .filter_map(|&(dr, df)| from.offset(dr, df))
            .collect()
    })
}

/// On-board knight destinations per square.
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| step_table(&KNIGHT_DELTAS));

/// On-board king destinations per square.
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| step_table(&KING_DELTAS));

impl Board {
    /// Returns true if `square` is attacked by any piece of `by`.
    ///
    /// Pure query; pieces of either color block rays, and a ray only
    /// attacks when its first occupant is a `by` slider moving along that
    /// ray's geometry.
    #[must_use]
    pub fn is_attacked(&self, square: Square, by: Color) -> bool {
        // A pawn of `by` attacks forward-diagonally, so its source sits one
        // rank behind the target from its own point of view.
        let behind = -by.pawn_direction();
        for df in [-1, 1] {
            if let Some(src) = square.offset(behind, df) {
                if self.piece_at(src) == Some((by, Piece::Pawn)) {
                    return true;
                }
            }
        }

        if KNIGHT_TARGETS[square.index()]
            .iter()
            .any(|&src| self.piece_at(src) == Some((by, Piece::Knight)))
        {
            return true;
        }

        if KING_TARGETS[square.index()]
            .iter()
            .any(|&src| self.piece_at(src) == Some((by, Piece::King)))
        {
            return true;
        }

        ROOK_DIRECTIONS
            .iter()
            .any(|&dir| self.ray_hits(square, dir, by, Piece::attacks_straight))
            || BISHOP_DIRECTIONS
                .iter()
                .any(|&dir| self.ray_hits(square, dir, by, Piece::attacks_diagonally))
    }

    /// Walk from `origin` along `dir`; true if the first occupied square
    /// holds a `by` piece accepted by `slides_here`.
    fn ray_hits(
        &self,
        origin: Square,
        (dr, df): (isize, isize),
        by: Color,
        slides_here: fn(Piece) -> bool,
    ) -> bool {
        let mut cursor = origin.offset(dr, df);
        while let Some(sq) = cursor {
            if let Some((color, piece)) = self.piece_at(sq) {
                return color == by && slides_here(piece);
            }
            cursor = sq.offset(dr, df);
        }
        false
    }

    /// True when `color`'s king is attacked by the other side.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.is_attacked(self.king_square(color), color.opponent())
    }
}
