use super::super::attacks::KNIGHT_TARGETS;
use super::super::{Board, MoveList, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;
        for &to in &KNIGHT_TARGETS[from.index()] {
            self.push_step(from, to, color, moves);
        }
    }
}
