//! Move suppliers for computer-controlled sides.

use rand::prelude::*;

use crate::board::{Board, Move};

/// Something that, given a position, may propose a move.
///
/// The proposal is only a candidate: the game checks it against the legal
/// moves before playing it. Returning `None` means "no move this turn".
pub trait MoveSupplier {
    fn suggest(&mut self, board: &Board) -> Option<Move>;
}

impl<F> MoveSupplier for F
where
    F: FnMut(&Board) -> Option<Move>,
{
    fn suggest(&mut self, board: &Board) -> Option<Move> {
        self(board)
    }
}

/// Picks uniformly among the legal moves. Seeded, so a given seed replays
/// the same choices for the same positions.
#[derive(Clone, Debug)]
pub struct RandomMover {
    rng: StdRng,
}

impl RandomMover {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        RandomMover {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomMover {
    fn default() -> Self {
        Self::new(0x5eed)
    }
}

impl MoveSupplier for RandomMover {
    fn suggest(&mut self, board: &Board) -> Option<Move> {
        board.legal_moves().as_slice().choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_mover_plays_legal_moves() {
        let mut mover = RandomMover::new(7);
        let mut board = Board::new();
        for _ in 0..20 {
            let Some(m) = mover.suggest(&board) else {
                break;
            };
            assert!(board.generate_moves().contains(&m));
            board.make_move(m);
        }
    }

    #[test]
    fn test_random_mover_is_deterministic_per_seed() {
        let board = Board::new();
        let a: Vec<_> = {
            let mut mover = RandomMover::new(42);
            (0..5).filter_map(|_| mover.suggest(&board)).collect()
        };
        let b: Vec<_> = {
            let mut mover = RandomMover::new(42);
            (0..5).filter_map(|_| mover.suggest(&board)).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_move_when_mated() {
        let board = Board::from_fen("7k/7Q/7K/8/8/8/8/8 b - - 0 1");
        assert_eq!(RandomMover::default().suggest(&board), None);
    }

    #[test]
    fn test_closure_supplier() {
        let mut first = |b: &Board| b.legal_moves().iter().next().copied();
        assert!(first.suggest(&Board::new()).is_some());
    }
}
