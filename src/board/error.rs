//! Error types for board operations.

use std::fmt;

use super::Color;

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string does not have exactly 6 fields
    WrongFieldCount { found: usize },
    /// Invalid piece character in placement field
    InvalidPiece { char: char },
    /// A rank does not describe exactly 8 squares
    InvalidRankLength { rank: usize, files: usize },
    /// Placement field does not have exactly 8 ranks
    WrongRankCount { found: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Halfmove clock is not a non-negative integer
    InvalidHalfmoveClock { found: String },
    /// Fullmove number is not a positive integer
    InvalidFullmoveNumber { found: String },
    /// One side has no king on the board
    MissingKing { color: Color },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have exactly 6 fields, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidRankLength { rank, files } => {
                write!(f, "Rank {rank} describes {files} squares, expected 8")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidHalfmoveClock { found } => {
                write!(f, "Invalid halfmove clock '{found}'")
            }
            FenError::InvalidFullmoveNumber { found } => {
                write!(f, "Invalid fullmove number '{found}', expected 1 or more")
            }
            FenError::MissingKing { color } => {
                write!(f, "{color} king is missing")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_error_field_count() {
        let err = FenError::WrongFieldCount { found: 4 };
        assert!(err.to_string().contains('4'));
        assert!(err.to_string().contains('6'));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let err = FenError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_fen_error_missing_king() {
        let err = FenError::MissingKing {
            color: Color::Black,
        };
        assert_eq!(err.to_string(), "Black king is missing");
    }

    #[test]
    fn test_fen_error_rank_length() {
        let err = FenError::InvalidRankLength { rank: 3, files: 9 };
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_move_error_invalid_length() {
        let err = MoveParseError::InvalidLength { len: 3 };
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_move_error_illegal_move() {
        let err = MoveParseError::IllegalMove {
            notation: "e2e5".to_string(),
        };
        assert!(err.to_string().contains("e2e5"));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }
}
