//! Zobrist hashing for chess positions.
//!
//! The hash covers piece placement, side to move, the castling mask and the
//! en passant file. It is recomputed from the board contents on every call,
//! so two positions with the same contents always hash alike no matter how
//! they were reached.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Board, Color, Piece, Square};

pub(crate) struct ZobristKeys {
    // piece_keys[piece_type][color][square_index]
    pub(crate) piece_keys: [[[u64; 64]; 2]; 6],
    pub(crate) black_to_move_key: u64,
    // indexed by the raw 4-bit castling mask
    pub(crate) castling_keys: [u64; 16],
    // only the file of the target square matters
    pub(crate) en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64);
        let mut piece_keys = [[[0; 64]; 2]; 6];
        let mut castling_keys = [0; 16];
        let mut en_passant_keys = [0; 8];

        for piece in &mut piece_keys {
            for color in piece.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        for key in &mut castling_keys {
            *key = rng.gen();
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }

    #[inline]
    fn piece(&self, color: Color, piece: Piece, sq: Square) -> u64 {
        self.piece_keys[piece.index()][color.index()][sq.index()]
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

impl Board {
    /// Structural hash of the position, computed from scratch.
    #[must_use]
    pub fn hash(&self) -> u64 {
        let keys = &*ZOBRIST;
        let mut hash = self
            .occupied()
            .fold(0, |acc, (sq, color, piece)| acc ^ keys.piece(color, piece, sq));

        if self.side_to_move() == Color::Black {
            hash ^= keys.black_to_move_key;
        }
        hash ^= keys.castling_keys[usize::from(self.castling_rights().as_u8())];
        if let Some(ep) = self.en_passant_target() {
            hash ^= keys.en_passant_keys[ep.file()];
        }

        hash
    }
}
