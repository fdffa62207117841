//! ASCII rendering of a position, rank 8 at the top.

use std::fmt;

use super::{Board, Square};

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let sq = Square::from_index_unchecked(rank * 8 + file);
                let c = self
                    .piece_at(sq)
                    .map_or('.', |(color, piece)| piece.to_fen_char(color));
                if file > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
