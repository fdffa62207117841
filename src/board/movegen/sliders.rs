use super::super::{Board, Move, MoveList, Square};

impl Board {
    /// Cast a ray per direction until the edge or a blocker. An enemy blocker
    /// yields one capture; a friendly blocker yields nothing.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        directions: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        let color = self.side_to_move;

        for &(dr, df) in directions {
            let mut cursor = from.offset(dr, df);
            while let Some(to) = cursor {
                match self.color_on(to) {
                    None => moves.push(Move::quiet(from, to)),
                    Some(owner) => {
                        if owner != color {
                            moves.push(Move::capture(from, to));
                        }
                        break;
                    }
                }
                cursor = to.offset(dr, df);
            }
        }
    }
}
