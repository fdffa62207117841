use super::{Board, Color, Move, Piece, Square, UnmakeInfo};

/// Rook origin and destination for a castle, keyed by the king's destination.
fn castling_rook_squares(king_to: Square) -> (Square, Square) {
    match king_to {
        Square::G1 => (Square::H1, Square::F1),
        Square::C1 => (Square::A1, Square::D1),
        Square::G8 => (Square::H8, Square::F8),
        _ => (Square::A8, Square::D8),
    }
}

/// Square of the pawn taken by an en passant capture landing on `to`.
fn en_passant_capture_square(to: Square, mover: Color) -> Square {
    Square::from_index_unchecked(match mover {
        Color::White => to.index() - 8,
        Color::Black => to.index() + 8,
    })
}

impl Board {
    /// Apply `m` without any legality check and return the data needed to
    /// reverse it. The move's flags are trusted, so `m` should come from
    /// the generator.
    pub fn make_move(&mut self, m: Move) -> UnmakeInfo {
        let color = self.side_to_move;

        let previous_en_passant_target = self.en_passant_target;
        let previous_castling_rights = self.castling_rights;
        let previous_halfmove_clock = self.halfmove_clock;
        let previous_fullmove_number = self.fullmove_number;

        let Some((moving_color, moving_piece)) = self.piece_at(m.from()) else {
            debug_assert!(false, "make_move from empty square {}", m.from());
            return UnmakeInfo {
                captured_piece_info: None,
                previous_en_passant_target,
                previous_castling_rights,
                previous_halfmove_clock,
                previous_fullmove_number,
            };
        };

        let captured_piece_info = if m.is_en_passant() {
            let capture_sq = en_passant_capture_square(m.to(), color);
            let captured = self.piece_at(capture_sq);
            self.clear_square(capture_sq);
            captured
        } else {
            self.piece_at(m.to())
        };

        if moving_piece == Piece::Pawn || captured_piece_info.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        self.en_passant_target = None;
        if m.is_double_pawn_push() {
            let ep_idx = (m.from().index() + m.to().index()) / 2;
            self.en_passant_target = Some(Square::from_index_unchecked(ep_idx));
        }

        let placed = match m.promotion() {
            Some(promoted) => (moving_color, promoted),
            None => (moving_color, moving_piece),
        };
        self.clear_square(m.from());
        self.put(m.to(), Some(placed));

        match moving_piece {
            Piece::King => self.castling_rights.remove_color(moving_color),
            Piece::Rook => self.castling_rights.remove_for_corner(m.from()),
            _ => {}
        }
        if captured_piece_info.is_some() {
            self.castling_rights.remove_for_corner(m.to());
        }

        if m.is_castling() {
            let (rook_from, rook_to) = castling_rook_squares(m.to());
            let rook = self.piece_at(rook_from);
            self.clear_square(rook_from);
            self.put(rook_to, rook);
        }

        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = color.opponent();

        UnmakeInfo {
            captured_piece_info,
            previous_en_passant_target,
            previous_castling_rights,
            previous_halfmove_clock,
            previous_fullmove_number,
        }
    }

    /// Reverse `m` using the info returned when it was made.
    pub fn unmake_move(&mut self, m: Move, info: UnmakeInfo) {
        self.side_to_move = self.side_to_move.opponent();
        let color = self.side_to_move;

        self.en_passant_target = info.previous_en_passant_target;
        self.castling_rights = info.previous_castling_rights;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.fullmove_number = info.previous_fullmove_number;

        if m.is_castling() {
            let (rook_from, rook_to) = castling_rook_squares(m.to());
            let rook = self.piece_at(rook_to);
            self.clear_square(rook_to);
            self.put(rook_from, rook);
        }

        let moved = if m.is_promotion() {
            Some((color, Piece::Pawn))
        } else {
            self.piece_at(m.to())
        };
        // Putting a king back on its origin restores the king cache.
        self.put(m.from(), moved);

        if m.is_en_passant() {
            self.clear_square(m.to());
            self.put(
                en_passant_capture_square(m.to(), color),
                info.captured_piece_info,
            );
        } else {
            self.put(m.to(), info.captured_piece_info);
        }
    }
}
