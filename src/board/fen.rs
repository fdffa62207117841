use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{
    Board, CastlingRights, Color, Move, Piece, Square, CASTLE_BLACK_K, CASTLE_BLACK_Q,
    CASTLE_WHITE_K, CASTLE_WHITE_Q,
};

/// Parse the piece placement field into `board`.
fn parse_placement(board: &mut Board, placement: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_idx;
        let mut file = 0;
        for c in rank_str.chars() {
            if let Some(empty @ 1..=8) = c.to_digit(10) {
                file += empty as usize;
            } else {
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let Some(sq) = Square::new(rank, file) else {
                    return Err(FenError::InvalidRankLength {
                        rank: rank + 1,
                        files: file + 1,
                    });
                };
                board.set_piece(sq, color, piece);
                file += 1;
            }
            if file > 8 {
                return Err(FenError::InvalidRankLength {
                    rank: rank + 1,
                    files: file,
                });
            }
        }
        if file != 8 {
            return Err(FenError::InvalidRankLength {
                rank: rank + 1,
                files: file,
            });
        }
    }

    Ok(())
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    if field == "-" {
        return Ok(CastlingRights::none());
    }
    let mut bits = 0;
    for c in field.chars() {
        bits |= match c {
            'K' => CASTLE_WHITE_K,
            'Q' => CASTLE_WHITE_Q,
            'k' => CASTLE_BLACK_K,
            'q' => CASTLE_BLACK_Q,
            _ => return Err(FenError::InvalidCastling { char: c }),
        };
    }
    Ok(CastlingRights::from_u8(bits))
}

fn castling_to_string(rights: CastlingRights) -> String {
    let bits = rights.as_u8();
    let mut castling = String::new();
    for (bit, c) in [
        (CASTLE_WHITE_K, 'K'),
        (CASTLE_WHITE_Q, 'Q'),
        (CASTLE_BLACK_K, 'k'),
        (CASTLE_BLACK_Q, 'q'),
    ] {
        if bits & bit != 0 {
            castling.push(c);
        }
    }
    if castling.is_empty() {
        castling.push('-');
    }
    castling
}

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// All six fields are required. Nothing is returned unless every field
    /// is valid and both kings are on the board.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        let [placement, side, castling, ep, halfmove, fullmove] = parts[..] else {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        };

        let mut board = Board::empty();
        parse_placement(&mut board, placement)?;

        board.side_to_move = match side {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        board.castling_rights = parse_castling(castling)?;

        board.en_passant_target = if ep == "-" {
            None
        } else {
            Some(ep.parse().map_err(|_| FenError::InvalidEnPassant {
                found: ep.to_string(),
            })?)
        };

        board.halfmove_clock = halfmove
            .parse()
            .map_err(|_| FenError::InvalidHalfmoveClock {
                found: halfmove.to_string(),
            })?;

        board.fullmove_number = match fullmove.parse::<u32>() {
            Ok(n) if n >= 1 => n,
            _ => {
                return Err(FenError::InvalidFullmoveNumber {
                    found: fullmove.to_string(),
                })
            }
        };

        for color in Color::BOTH {
            if board.piece_at(board.king_square(color)) != Some((color, Piece::King)) {
                return Err(FenError::MissingKing { color });
            }
        }

        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                let sq = Square::from_index_unchecked(rank * 8 + file);
                if let Some((color, piece)) = self.piece_at(sq) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.white_to_move() { "w" } else { "b" };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling_to_string(self.castling_rights),
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in UCI long algebraic notation (e.g., "e2e4", "e7e8q").
    ///
    /// Returns the generator's version of the matching legal move, which
    /// carries the correct flags.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::Board;
    ///
    /// let mut board = Board::new();
    /// let mv = board.parse_move("e2e4").unwrap();
    /// assert!(mv.is_double_pawn_push());
    /// ```
    pub fn parse_move(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        let candidate: Move = uci.parse()?;
        self.generate_moves()
            .find_same(candidate)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: uci.to_string(),
            })
    }

    /// Parse a UCI move and make it on the board in one call.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::Board;
    ///
    /// let mut board = Board::new();
    /// board.make_move_uci("e2e4").unwrap();
    /// board.make_move_uci("e7e5").unwrap();
    /// ```
    pub fn make_move_uci(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(uci)?;
        self.make_move(mv);
        Ok(mv)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
