use crate::board::{Board, Move};

impl Board {
    /// Count leaf positions of the legal move tree `depth` plies deep.
    ///
    /// Recurses through make, count, unmake; the board is unchanged on return.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves {
            let info = self.make_move(m);
            nodes += self.perft(depth - 1);
            self.unmake_move(m, info);
        }

        nodes
    }

    /// Per-root-move leaf counts at `depth`, in generation order.
    /// A depth of 0 yields no entries.
    pub fn perft_divide(&mut self, depth: usize) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }

        let moves = self.generate_moves();
        let mut counts = Vec::with_capacity(moves.len());
        for m in moves {
            let info = self.make_move(m);
            counts.push((m, self.perft(depth - 1)));
            self.unmake_move(m, info);
        }

        counts
    }
}
