//! Game session: a board plus the move, undo and hash histories that make
//! undo and repetition detection possible.
//!
//! # Example
//! ```
//! use chess_rules::{Game, GameStatus};
//!
//! let mut game = Game::new();
//! game.play_uci("f2f3").unwrap();
//! game.play_uci("e7e5").unwrap();
//! game.play_uci("g2g4").unwrap();
//! game.play_uci("d8h4").unwrap();
//! assert_eq!(game.status(), GameStatus::Checkmate);
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, FenError, Move, MoveList, MoveParseError, UnmakeInfo};
use crate::player::MoveSupplier;

/// Plies without a pawn move or capture after which the game is drawn.
pub const FIFTY_MOVE_PLIES: u32 = 100;

/// Occurrences of one position that draw the game.
pub const REPETITION_LIMIT: usize = 3;

/// Outcome of the current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
    DrawRepetition,
    DrawFiftyMove,
}

impl GameStatus {
    /// True for every status except `Ongoing`.
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

impl Board {
    /// Decide the outcome given how often the current position has occurred.
    ///
    /// The automatic draws are checked first (repetition, then the fifty-move
    /// rule); only then are the legal moves counted.
    pub fn status_with_repetitions(&mut self, repetitions: usize) -> GameStatus {
        if repetitions >= REPETITION_LIMIT {
            return GameStatus::DrawRepetition;
        }
        if self.halfmove_clock() >= FIFTY_MOVE_PLIES {
            return GameStatus::DrawFiftyMove;
        }
        if !self.generate_moves().is_empty() {
            GameStatus::Ongoing
        } else if self.in_check(self.side_to_move()) {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    }
}

/// Errors surfaced by game-level operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The position text could not be parsed
    Fen(FenError),
    /// The move text could not be parsed, or matched no legal move
    Move(MoveParseError),
    /// A well-formed move that is not legal here
    IllegalMove { notation: String },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Fen(err) => write!(f, "{err}"),
            GameError::Move(err) => write!(f, "{err}"),
            GameError::IllegalMove { notation } => write!(f, "Illegal move '{notation}'"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Fen(err) => Some(err),
            GameError::Move(err) => Some(err),
            GameError::IllegalMove { .. } => None,
        }
    }
}

impl From<FenError> for GameError {
    fn from(err: FenError) -> Self {
        GameError::Fen(err)
    }
}

impl From<MoveParseError> for GameError {
    fn from(err: MoveParseError) -> Self {
        match err {
            MoveParseError::IllegalMove { notation } => GameError::IllegalMove { notation },
            other => GameError::Move(other),
        }
    }
}

/// Who chooses the moves for one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlayerKind {
    #[default]
    Human,
    Computer,
}

/// A board with full history.
///
/// `moves` and `undos` always have the same length, and `hashes` is one
/// longer: entry zero is the starting position.
pub struct Game {
    board: Board,
    moves: Vec<Move>,
    undos: Vec<UnmakeInfo>,
    hashes: Vec<u64>,
    players: [PlayerKind; 2],
    suppliers: [Option<Box<dyn MoveSupplier>>; 2],
}

impl Game {
    /// A game at the standard starting position, both sides human.
    #[must_use]
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    /// A game starting from a FEN position.
    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        Ok(Self::with_board(Board::try_from_fen(fen)?))
    }

    fn with_board(board: Board) -> Self {
        let hashes = vec![board.hash()];
        Game {
            board,
            moves: Vec::new(),
            undos: Vec::new(),
            hashes,
            players: [PlayerKind::Human; 2],
            suppliers: [None, None],
        }
    }

    /// Replace the position and clear all history. Player settings are kept.
    fn reseed(&mut self, board: Board) {
        self.hashes.clear();
        self.hashes.push(board.hash());
        self.board = board;
        self.moves.clear();
        self.undos.clear();
    }

    /// Back to the standard starting position with empty history.
    pub fn reset(&mut self) {
        self.reseed(Board::new());
        log_debug!("game reset to start position");
    }

    /// Load a FEN position. On error the game is left untouched.
    pub fn set_fen(&mut self, fen: &str) -> Result<(), GameError> {
        let board = Board::try_from_fen(fen)?;
        self.reseed(board);
        log_debug!("game reset to {fen}");
        Ok(())
    }

    #[must_use]
    pub fn fen(&self) -> String {
        self.board.to_fen()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.board.legal_moves()
    }

    /// Play `m` if it matches a legal move by origin, destination and
    /// promotion. The generator's copy, with its flags, is what gets applied
    /// and recorded.
    pub fn play_move(&mut self, m: Move) -> Result<Move, GameError> {
        let Some(legal) = self.board.generate_moves().find_same(m) else {
            log_trace!("rejected move {m}");
            return Err(GameError::IllegalMove {
                notation: m.to_string(),
            });
        };

        let info = self.board.make_move(legal);
        self.moves.push(legal);
        self.undos.push(info);
        self.hashes.push(self.board.hash());
        log_debug!("played {legal} (ply {})", self.moves.len());
        Ok(legal)
    }

    /// Parse UCI text and play it.
    pub fn play_uci(&mut self, uci: &str) -> Result<Move, GameError> {
        let m: Move = uci.parse().map_err(|err| {
            log_trace!("rejected move text {uci:?}");
            GameError::Move(err)
        })?;
        self.play_move(m)
    }

    /// Take back the last move. Returns `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<Move> {
        let m = self.moves.pop()?;
        let info = self.undos.pop()?;
        self.board.unmake_move(m, info);
        self.hashes.pop();
        log_debug!("undid {m} (ply {})", self.moves.len());
        Some(m)
    }

    /// Number of moves played since the starting position.
    #[must_use]
    pub fn ply(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// How many times the current position has occurred, counting itself.
    #[must_use]
    pub fn repetition_count(&self) -> usize {
        let Some(&current) = self.hashes.last() else {
            return 1;
        };
        self.hashes.iter().filter(|&&h| h == current).count()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.board
            .clone()
            .status_with_repetitions(self.repetition_count())
    }

    pub fn set_player(&mut self, color: Color, kind: PlayerKind) {
        self.players[color.index()] = kind;
    }

    #[must_use]
    pub fn player(&self, color: Color) -> PlayerKind {
        self.players[color.index()]
    }

    /// Install the move supplier consulted when `color` is a computer.
    pub fn set_supplier(&mut self, color: Color, supplier: Box<dyn MoveSupplier>) {
        self.suppliers[color.index()] = Some(supplier);
    }

    pub fn clear_supplier(&mut self, color: Color) {
        self.suppliers[color.index()] = None;
    }

    /// Let the computer play one move for the side to move.
    ///
    /// Returns `Ok(None)` when that side is human or has no supplier, when
    /// the game is over, or when the supplier has no move. A suggestion that
    /// is not legal is an error and changes nothing.
    pub fn step_ai(&mut self) -> Result<Option<Move>, GameError> {
        let idx = self.board.side_to_move().index();
        if self.players[idx] != PlayerKind::Computer || self.status().is_over() {
            return Ok(None);
        }
        let Some(supplier) = self.suppliers[idx].as_mut() else {
            return Ok(None);
        };
        let Some(suggestion) = supplier.suggest(&self.board) else {
            return Ok(None);
        };
        self.play_move(suggestion).map(Some)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("fen", &self.board.to_fen())
            .field("moves", &self.moves)
            .field("players", &self.players)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;
    use crate::player::RandomMover;

    #[test]
    fn test_histories_move_in_lockstep() {
        let mut game = Game::new();
        game.play_uci("e2e4").unwrap();
        game.play_uci("e7e5").unwrap();
        assert_eq!(game.ply(), 2);
        assert_eq!(game.undos.len(), 2);
        assert_eq!(game.hashes.len(), 3);

        game.undo().unwrap();
        assert_eq!(game.ply(), 1);
        assert_eq!(game.undos.len(), 1);
        assert_eq!(game.hashes.len(), 2);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = Game::new();
        let before = game.fen();
        assert_eq!(
            game.play_uci("e2e5"),
            Err(GameError::IllegalMove {
                notation: "e2e5".to_string()
            })
        );
        assert!(matches!(
            game.play_uci("e2"),
            Err(GameError::Move(MoveParseError::InvalidLength { len: 2 }))
        ));
        assert_eq!(game.fen(), before);
        assert_eq!(game.ply(), 0);
        assert_eq!(game.hashes.len(), 1);
    }

    #[test]
    fn test_play_move_uses_generator_flags() {
        let mut game = Game::new();
        let e2: Square = "e2".parse().unwrap();
        let e4: Square = "e4".parse().unwrap();
        let played = game.play_move(Move::quiet(e2, e4)).unwrap();
        assert!(played.is_double_pawn_push());
        assert_eq!(game.board().en_passant_target(), Some("e3".parse().unwrap()));
    }

    #[test]
    fn test_undo_on_empty_history() {
        let mut game = Game::new();
        assert_eq!(game.undo(), None);
        assert_eq!(game.fen(), Board::new().to_fen());
    }

    #[test]
    fn test_set_fen_error_leaves_game_untouched() {
        let mut game = Game::new();
        game.play_uci("d2d4").unwrap();
        let before = game.fen();
        assert!(matches!(
            game.set_fen("not a fen"),
            Err(GameError::Fen(FenError::WrongFieldCount { found: 3 }))
        ));
        assert_eq!(game.fen(), before);
        assert_eq!(game.ply(), 1);
    }

    #[test]
    fn test_repetition_count() {
        let mut game = Game::new();
        assert_eq!(game.repetition_count(), 1);
        for uci in ["g1f3", "g8f6", "f3g1", "f6g8"] {
            game.play_uci(uci).unwrap();
        }
        assert_eq!(game.repetition_count(), 2);
        assert_eq!(game.status(), GameStatus::Ongoing);
    }

    #[test]
    fn test_status_priority_prefers_draws() {
        // mated, but the fifty-move count has run out first
        let mut board = Board::from_fen("7k/7Q/7K/8/8/8/8/8 b - - 100 80");
        assert_eq!(board.status_with_repetitions(1), GameStatus::DrawFiftyMove);
        assert_eq!(board.status_with_repetitions(3), GameStatus::DrawRepetition);

        let mut board = Board::from_fen("7k/7Q/7K/8/8/8/8/8 b - - 0 80");
        assert_eq!(board.status_with_repetitions(1), GameStatus::Checkmate);
    }

    #[test]
    fn test_step_ai_requires_computer_and_supplier() {
        let mut game = Game::new();
        game.set_supplier(
            Color::White,
            Box::new(|b: &Board| b.legal_moves().iter().next().copied()),
        );
        assert_eq!(game.step_ai(), Ok(None));

        game.set_player(Color::White, PlayerKind::Computer);
        assert!(game.step_ai().unwrap().is_some());
        assert_eq!(game.ply(), 1);

        // black is still human
        assert_eq!(game.step_ai(), Ok(None));
    }

    #[test]
    fn test_step_ai_rejects_illegal_suggestion() {
        let mut game = Game::new();
        game.set_player(Color::White, PlayerKind::Computer);
        game.set_supplier(
            Color::White,
            Box::new(|_: &Board| Some(Move::quiet(Square::E1, Square::E8))),
        );
        assert!(matches!(
            game.step_ai(),
            Err(GameError::IllegalMove { .. })
        ));
        assert_eq!(game.ply(), 0);

        game.set_supplier(Color::White, Box::new(|_: &Board| None));
        assert_eq!(game.step_ai(), Ok(None));
        game.clear_supplier(Color::White);
        assert_eq!(game.step_ai(), Ok(None));
    }

    #[test]
    fn test_step_ai_stops_once_game_is_over() {
        let mut game = Game::from_fen("8/8/8/8/8/8/8/K1k5 w - - 100 1").unwrap();
        game.set_player(Color::White, PlayerKind::Computer);
        game.set_supplier(Color::White, Box::new(RandomMover::new(3)));
        assert_eq!(game.step_ai(), Ok(None));
        assert_eq!(game.ply(), 0);
    }
}
