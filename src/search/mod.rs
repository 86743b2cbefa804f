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

//! Exhaustive negamax search.

use std::fmt;
use std::time::Instant;

use board::{Board, Mark};
use canonical::canonicalize;
use geometry::{GEOMETRY, Position};
use ply::Ply;
use score::Score;

use self::pruning::filter_symmetry;

/// The results of a search from the root.
#[derive(Clone, Debug)]
pub struct Analysis {
    /// The board on which the search was performed.
    pub board: Board,
    /// The player to move.
    pub mark: Mark,
    /// The chosen ply, or `None` if the board is full.
    pub ply: Option<Ply>,
    /// The value of the chosen ply to `mark`.
    pub score: Score,
    /// Statistics from this search alone.
    pub statistics: Statistics,
}

/// A perfect-play searcher.
///
/// The engine owns its transposition cache, which persists between searches until `reset`.
/// Searches never yield and never fail; a board is borrowed mutably for the duration of a
/// search and is returned unchanged.
///
/// # Example
///
/// ```rust
/// # extern crate tic_tac_toe_engine;
/// # use tic_tac_toe_engine::{Board, Engine, Mark};
/// # fn main() {
/// let mut engine = Engine::new();
/// let mut board = "XX./OO./...".parse::<Board>().unwrap();
///
/// let (position, score) = engine.best_move(Mark::X, &mut board, 0).unwrap();
/// assert_eq!(position, 2);
/// assert!(score.is_win());
/// # }
/// ```
pub struct Engine {
    cache: TranspositionCache,
    statistics: Statistics,
}

impl Engine {
    /// Creates an engine with an empty cache of the default size.
    pub fn new() -> Engine {
        Engine::with_cache(TranspositionCache::new())
    }

    /// Creates an engine that searches with `cache`, which is cleared first.
    pub fn with_cache(mut cache: TranspositionCache) -> Engine {
        ::lazy_static::initialize(&GEOMETRY);
        cache.clear();

        Engine {
            cache: cache,
            statistics: Statistics::new(),
        }
    }

    /// Forgets every cached position and all statistics.
    pub fn reset(&mut self) {
        self.cache.clear();
        self.statistics = Statistics::new();
    }

    pub fn cache(&self) -> &TranspositionCache {
        &self.cache
    }

    /// Statistics accumulated over every search since creation or the last `reset`.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Returns the best move for `mark` on `board` and its score, or `None` if the board is full.
    ///
    /// `depth` is the number of plies already played since the root of the search; callers
    /// start at `0`.  A move that completes a line ends the search at once.  When several do,
    /// the first is returned along with the sum of all of their scores.
    ///
    /// A cached score keeps the depth it was stored at, so a warm cache can report a win or a
    /// loss at a different distance than a fresh search would.  Its sign is always the same.
    pub fn best_move(&mut self, mark: Mark, board: &mut Board, depth: u8) -> Option<(Position, Score)> {
        let ply = depth + 1;
        let root = depth == 0;

        let mut candidates = board.empty_positions();
        filter_symmetry(board, &mut candidates);

        if candidates.is_empty() {
            return None;
        }

        self.statistics.visited += 1;

        if root {
            debug!("Checking {} for a winning move", format_positions(&candidates));
        }

        let mut winning_move = None;
        let mut winning_score = Score::null();

        for &position in &candidates {
            board.set_position(position, Some(mark));
            if board.check_winner(mark, position).is_some() {
                winning_score = winning_score + Score::win_at(ply);
                if winning_move.is_none() {
                    winning_move = Some(position);
                }
            }
            board.set_position(position, None);
        }

        if let Some(position) = winning_move {
            self.statistics.immediate_wins += 1;
            if root {
                debug!("Winning move {}, score {}", position + 1, winning_score);
            }
            return Some((position, winning_score));
        }

        let (state, symmetry) = canonicalize(board);

        if let Some((position, score)) = self.cache.get(state, symmetry) {
            self.statistics.cache_hits += 1;
            if root {
                debug!("Cached move {}, score {} (state {}, {})", position + 1, score, state, symmetry);
            }
            return Some((position, score));
        }

        let mut best: Option<(Position, Score)> = None;

        for &position in &candidates {
            board.set_position(position, Some(mark));
            let value = match self.best_move(mark.flip(), board, ply) {
                Some((_, score)) => -score,
                None => Score::null(),
            };
            board.set_position(position, None);

            if root {
                debug!("Move {} scores {}", position + 1, value);
            }

            match best {
                Some((_, best_score)) if value <= best_score => (),
                _ => best = Some((position, value)),
            }
        }

        if let Some((position, score)) = best {
            let dropped = self.cache.dropped();
            if self.cache.insert(state, symmetry, position, score) {
                self.statistics.cache_stores += 1;
            } else if self.cache.dropped() > dropped {
                self.statistics.cache_drops += 1;
            }

            if root {
                debug!("Best move {}, score {}", position + 1, score);
            }
        }

        best
    }

    /// Searches `board` for `mark` and reports the result along with the cost of the search.
    pub fn analyze(&mut self, board: &Board, mark: Mark) -> Analysis {
        let mut scratch = *board;
        let before = self.statistics;

        let start = Instant::now();
        let result = self.best_move(mark, &mut scratch, 0);
        let elapsed = start.elapsed();
        self.statistics.time += elapsed.as_secs() as f32 + elapsed.subsec_nanos() as f32 / 1_000_000_000.0;

        let (ply, score) = match result {
            Some((position, score)) => (Some(Ply::new(mark, position)), score),
            None => (None, Score::null()),
        };

        Analysis {
            board: *board,
            mark: mark,
            ply: ply,
            score: score,
            statistics: self.statistics.since(&before),
        }
    }
}

impl Default for Engine {
    fn default() -> Engine {
        Engine::new()
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "State: {}", self.board)?;
        writeln!(f, "To Move: {}", self.mark)?;
        match self.ply {
            Some(ref ply) => {
                let mut result = self.board;
                result.set_position(ply.position, Some(ply.mark));
                writeln!(f, "Best Ply: {}", ply)?;
                writeln!(f, "Resultant State: {}", result)?;
            },
            None => writeln!(f, "Best Ply: none")?,
        }
        writeln!(f, "Score: {}", self.score)?;
        write!(f, "Statistics:\n{}", self.statistics)
    }
}

fn format_positions(positions: &[Position]) -> String {
    positions.iter().map(|position| format!("{}", position + 1)).collect::<Vec<_>>().join(",")
}

pub use self::cache::{BUCKETS, ROWS_PER_BUCKET, TranspositionCache};
pub use self::statistics::Statistics;

pub mod pruning;

mod cache;
mod statistics;
