use super::{CastlingRights, Color, Piece, Square};

/// Everything needed to reverse exactly one applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnmakeInfo {
    /// The piece actually taken. For en passant this is the pawn beside the
    /// destination, not whatever sat on the destination square.
    pub(crate) captured_piece_info: Option<(Color, Piece)>,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
}

impl UnmakeInfo {
    /// The piece removed by the move, if any
    #[must_use]
    pub fn captured(&self) -> Option<(Color, Piece)> {
        self.captured_piece_info
    }
}

/// Mailbox position: one slot per square plus the cached state the rules need.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [Option<(Color, Piece)>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    // Always the square holding each side's king; maintained by `put`.
    pub(crate) king_squares: [Square; 2],
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square::from_index_unchecked(file), Color::White, *piece);
            board.set_piece(Square::from_index_unchecked(56 + file), Color::Black, *piece);
            board.set_piece(Square::from_index_unchecked(8 + file), Color::White, Piece::Pawn);
            board.set_piece(Square::from_index_unchecked(48 + file), Color::Black, Piece::Pawn);
        }

        board.castling_rights = CastlingRights::all();
        board
    }

    /// A board with no pieces, White to move, no rights, clocks at 0 / 1.
    /// Both king caches point at a1 until kings are placed.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            king_squares: [Square::A1; 2],
        }
    }

    /// Single mutation primitive for square contents. Placing a king moves
    /// that side's king cache; clearing a square or placing anything else
    /// leaves the cache alone.
    #[inline]
    pub(crate) fn put(&mut self, sq: Square, content: Option<(Color, Piece)>) {
        self.squares[sq.index()] = content;
        if let Some((color, Piece::King)) = content {
            self.king_squares[color.index()] = sq;
        }
    }

    /// Place a piece, replacing whatever stood on the square.
    pub fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.put(sq, Some((color, piece)));
    }

    /// Empty a square. A king removed this way keeps its cached square.
    pub fn clear_square(&mut self, sq: Square) {
        self.put(sq, None);
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.index()]
    }

    /// Raw index read. Indices outside 0..63 read as empty.
    #[must_use]
    pub fn piece_at_index(&self, idx: usize) -> Option<(Color, Piece)> {
        self.squares.get(idx).copied().flatten()
    }

    /// Raw index write. Indices outside 0..63 are ignored.
    pub fn set_square_index(&mut self, idx: usize, content: Option<(Color, Piece)>) {
        if let Some(sq) = Square::from_index(idx) {
            self.put(sq, content);
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Iterate over occupied squares with their contents.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        self.squares.iter().enumerate().filter_map(|(idx, content)| {
            content.map(|(color, piece)| (Square::from_index_unchecked(idx), color, piece))
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
