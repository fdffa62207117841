use super::super::{Board, Move, MoveList, Square};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;
        let dir = color.pawn_direction();

        // A pawn on its last rank cannot exist in a real game; FEN input
        // can still put one there, and it simply has no moves.
        let Some(forward_sq) = from.offset(dir, 0) else {
            return;
        };

        if self.is_empty(forward_sq) {
            Self::push_pawn_move(from, forward_sq, false, color, moves);

            if from.rank() == color.pawn_start_rank() {
                if let Some(double_sq) = forward_sq.offset(dir, 0) {
                    if self.is_empty(double_sq) {
                        moves.push(Move::double_pawn_push(from, double_sq));
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target_sq) = from.offset(dir, df) else {
                continue;
            };
            match self.color_on(target_sq) {
                Some(target_color) if target_color != color => {
                    Self::push_pawn_move(from, target_sq, true, color, moves);
                }
                Some(_) => {}
                None => {
                    if self.en_passant_target == Some(target_sq) {
                        moves.push(Move::en_passant(from, target_sq));
                    }
                }
            }
        }
    }
}
