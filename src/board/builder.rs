//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square::E1, Color::White, Piece::King)
//!     .piece(Square::E8, Color::Black, Piece::King)
//!     .piece("a2".parse().unwrap(), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(board.to_fen(), "4k3/8/8/8/8/8/P7/4K3 w - - 0 1");
//! ```

use super::{Board, CastlingRights, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        let mut builder = Self::new();
        builder.pieces = board.occupied().collect();
        builder.castling_rights = board.castling_rights();
        builder
    }

    /// Place a piece on the board, replacing whatever was there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, true);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, false);
        self
    }

    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::none();
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Set the halfmove clock (for the fifty-move rule).
    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    /// Set the fullmove number. Values below 1 are raised to 1.
    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = if number == 0 { 1 } else { number };
        self
    }

    /// Build the board.
    ///
    /// No legality checks are made; a position without kings builds fine
    /// but is not something the move generator is meant to see.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();

        for (square, color, piece) in self.pieces {
            board.set_piece(square, color, piece);
        }

        board.side_to_move = self.side_to_move;
        board.castling_rights = self.castling_rights;
        board.en_passant_target = self.en_passant_target;
        board.halfmove_clock = self.halfmove_clock;
        board.fullmove_number = self.fullmove_number;

        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let built = BoardBuilder::starting_position().build();
        assert_eq!(built, Board::new());
    }

    #[test]
    fn test_kings_only() {
        let board = BoardBuilder::new()
            .piece(Square::E1, Color::White, Piece::King)
            .piece(Square::E8, Color::Black, Piece::King)
            .build();

        assert_eq!(board.king_square(Color::White), Square::E1);
        assert_eq!(board.king_square(Color::Black), Square::E8);
        assert!(board.piece_at(Square::A1).is_none());
        assert_eq!(board.occupied().count(), 2);
    }

    #[test]
    fn test_castling_rights() {
        let board = BoardBuilder::starting_position()
            .no_castling_rights()
            .castle_kingside(Color::White)
            .castle_queenside(Color::Black)
            .build();

        let rights = board.castling_rights();
        assert!(rights.has(Color::White, true));
        assert!(!rights.has(Color::White, false));
        assert!(!rights.has(Color::Black, true));
        assert!(rights.has(Color::Black, false));
    }

    #[test]
    fn test_side_to_move_and_clocks() {
        let board = BoardBuilder::new()
            .piece(Square::E1, Color::White, Piece::King)
            .piece(Square::E8, Color::Black, Piece::King)
            .side_to_move(Color::Black)
            .halfmove_clock(12)
            .fullmove_number(30)
            .build();

        assert!(!board.white_to_move());
        assert_eq!(board.to_fen(), "4k3/8/8/8/8/8/8/4K3 b - - 12 30");
    }

    #[test]
    fn test_clear_square() {
        let board = BoardBuilder::starting_position().clear(Square::A1).build();

        assert!(board.piece_at(Square::A1).is_none());
        assert!(board.piece_at(Square::B1).is_some());
    }
}
