use super::super::attacks::KING_TARGETS;
use super::super::{Board, Move, MoveList, Piece, Square};

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;
        for &to in &KING_TARGETS[from.index()] {
            self.push_step(from, to, color, moves);
        }

        let back_rank = color.back_rank();
        let Some(home) = Square::new(back_rank, 4) else {
            return;
        };
        if from != home {
            return;
        }

        let them = color.opponent();
        let on_rank = |file: usize| Square::new(back_rank, file);

        // Crossing or leaving an attacked square is rejected here; the
        // destination square is left to the legality filter.
        for kingside in [true, false] {
            if !self.castling_rights.has(color, kingside) {
                continue;
            }
            let (rook_file, between, transit_file, to_file): (usize, &[usize], usize, usize) =
                if kingside {
                    (7, &[5, 6], 5, 6)
                } else {
                    (0, &[1, 2, 3], 3, 2)
                };

            let (Some(rook_sq), Some(transit), Some(to)) =
                (on_rank(rook_file), on_rank(transit_file), on_rank(to_file))
            else {
                continue;
            };

            let path_clear = between
                .iter()
                .filter_map(|&file| on_rank(file))
                .all(|sq| self.is_empty(sq));

            if path_clear
                && self.piece_at(rook_sq) == Some((color, Piece::Rook))
                && !self.is_attacked(home, them)
                && !self.is_attacked(transit, them)
            {
                moves.push(Move::castle(from, to));
            }
        }
    }
}
