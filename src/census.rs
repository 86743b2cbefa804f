//
// This file is part of tic_tac_toe_engine.
//
// tic_tac_toe_engine is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// tic_tac_toe_engine is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with tic_tac_toe_engine. If not, see <http://www.gnu.org/licenses/>.
//
// Copyright 2017 Chris Foster
//

//! A survey of every position reachable in legal play.

use fnv::FnvHashSet;

use board::{Board, Mark};
use canonical::{State, canonicalize};
use ply::Ply;
use search::BUCKETS;

/// The canonical positions reachable from the empty board, X moving first and play stopping
/// at a win or a full board.
pub struct Census {
    /// Every canonical state seen, including the empty board's.
    pub states: FnvHashSet<State>,
    /// The canonical states of finished games.
    pub terminal: FnvHashSet<State>,
}

impl Census {
    pub fn take() -> Census {
        let mut census = Census {
            states: FnvHashSet::default(),
            terminal: FnvHashSet::default(),
        };

        let mut board = Board::new();
        census.states.insert(canonicalize(&board).0);
        census.walk(&mut board, Mark::X);

        census
    }

    fn walk(&mut self, board: &mut Board, mark: Mark) {
        for position in board.empty_positions() {
            let ply = Ply::new(mark, position);
            board.set_position(position, Some(mark));

            let (state, _) = canonicalize(board);
            if self.states.insert(state) {
                if board.check_resolution(&ply).is_some() {
                    self.terminal.insert(state);
                } else {
                    self.walk(board, mark.flip());
                }
            }

            board.set_position(position, None);
        }
    }

    /// The number of open (non-terminal, non-empty) positions hashing to each cache bucket.
    ///
    /// These are the only positions the engine can try to cache, so a load above the bucket
    /// size means some of them will be dropped.
    pub fn bucket_loads(&self) -> Vec<usize> {
        let mut loads = vec![0; BUCKETS];
        for &state in self.states.difference(&self.terminal) {
            if state != 0 {
                loads[state as usize & 0xFF] += 1;
            }
        }
        loads
    }

    pub fn max_bucket_load(&self) -> usize {
        self.bucket_loads().into_iter().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod test {
    use board::{Board, Mark};
    use canonical::canonicalize;
    use search::{BUCKETS, Engine, ROWS_PER_BUCKET};
    use super::*;

    #[test]
    fn test_position_counts() {
        let census = Census::take();
        assert_eq!(census.states.len(), 765);
        assert_eq!(census.terminal.len(), 138);
    }

    #[test]
    fn test_bucket_loads_cover_open_positions() {
        let census = Census::take();
        let loads = census.bucket_loads();
        assert_eq!(loads.len(), BUCKETS);
        assert_eq!(loads.iter().sum::<usize>(), 765 - 138 - 1);
        assert!(census.max_bucket_load() <= ROWS_PER_BUCKET);
    }

    #[test]
    fn test_engine_caches_only_open_positions() {
        let census = Census::take();
        let mut engine = Engine::new();
        let mut board = Board::new();
        engine.best_move(Mark::X, &mut board, 0);

        assert!(engine.cache().len() > 0);
        assert!(engine.cache().len() <= census.states.len() - census.terminal.len() - 1);
        assert!(census.states.contains(&canonicalize(&"X../.../...".parse::<Board>().unwrap()).0));
    }
}
