mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attacks::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use super::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    /// Pseudo-legal moves for the side to move: piece geometry and occupancy
    /// are respected, own-king safety is not. Order is unspecified.
    #[must_use]
    pub fn generate_pseudo_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let color = self.side_to_move;

        for idx in 0..64 {
            let from = Square::from_index_unchecked(idx);
            let Some((owner, piece)) = self.piece_at(from) else {
                continue;
            };
            if owner != color {
                continue;
            }
            match piece {
                Piece::Pawn => self.generate_pawn_moves(from, &mut moves),
                Piece::Knight => self.generate_knight_moves(from, &mut moves),
                Piece::Bishop => self.generate_sliding_moves(from, &BISHOP_DIRECTIONS, &mut moves),
                Piece::Rook => self.generate_sliding_moves(from, &ROOK_DIRECTIONS, &mut moves),
                Piece::Queen => {
                    self.generate_sliding_moves(from, &ROOK_DIRECTIONS, &mut moves);
                    self.generate_sliding_moves(from, &BISHOP_DIRECTIONS, &mut moves);
                }
                Piece::King => self.generate_king_moves(from, &mut moves),
            }
        }

        moves
    }

    /// Legal moves for the side to move.
    ///
    /// Each pseudo-legal candidate is made, the mover's king is tested for
    /// attack, and the move is unmade. The board is back to its original
    /// state on return but passes through every candidate position.
    pub fn generate_moves(&mut self) -> MoveList {
        let pseudo = self.generate_pseudo_moves();
        let us = self.side_to_move;
        let them = us.opponent();
        let mut legal = MoveList::new();

        for m in pseudo {
            let info = self.make_move(m);
            let king_safe = !self.is_attacked(self.king_square(us), them);
            self.unmake_move(m, info);
            if king_safe {
                legal.push(m);
            }
        }

        legal
    }

    /// Legal moves without mutating `self`; works on a copy.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.clone().generate_moves()
    }

    /// The side to move has no legal move and is in check.
    pub fn is_checkmate(&mut self) -> bool {
        self.generate_moves().is_empty() && self.in_check(self.side_to_move)
    }

    /// The side to move has no legal move and is not in check.
    pub fn is_stalemate(&mut self) -> bool {
        self.generate_moves().is_empty() && !self.in_check(self.side_to_move)
    }

    fn push_pawn_move(from: Square, to: Square, capture: bool, color: Color, moves: &mut MoveList) {
        if to.rank() == color.pawn_promotion_rank() {
            for promo in super::PROMOTION_PIECES {
                moves.push(Move::promotion_to(from, to, promo, capture));
            }
        } else if capture {
            moves.push(Move::capture(from, to));
        } else {
            moves.push(Move::quiet(from, to));
        }
    }

    /// Quiet move to an empty square, capture onto an enemy piece, nothing
    /// onto a friendly one.
    fn push_step(&self, from: Square, to: Square, color: Color, moves: &mut MoveList) {
        match self.color_on(to) {
            None => moves.push(Move::quiet(from, to)),
            Some(owner) if owner != color => moves.push(Move::capture(from, to)),
            Some(_) => {}
        }
    }
}
