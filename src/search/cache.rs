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

use canonical::State;
use geometry::{GEOMETRY, Position, Symmetry};
use score::Score;

/// The number of buckets, selected by the low byte of a state.
pub const BUCKETS: usize = 256;
/// The number of entries each bucket can hold.
pub const ROWS_PER_BUCKET: usize = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Entry {
    // Zero marks an unused slot
    state: State,
    // In the canonical orientation of `state`
    best_move: Position,
    score: Score,
}

/// A fixed-size memo of best moves, keyed on canonical states.
///
/// Each bucket is filled front to back and never evicts, so the first entry stored for a state
/// is the one that is kept.  Once a bucket is full, further states that hash to it are dropped.
pub struct TranspositionCache {
    rows: usize,
    entries: Vec<Entry>,
    len: usize,
    dropped: usize,
}

impl TranspositionCache {
    pub fn new() -> TranspositionCache {
        TranspositionCache::with_rows(ROWS_PER_BUCKET)
    }

    /// Creates a cache whose buckets hold `rows` entries each.
    pub fn with_rows(rows: usize) -> TranspositionCache {
        TranspositionCache {
            rows: rows,
            entries: vec![Entry::default(); BUCKETS * rows],
            len: 0,
            dropped: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of stores that were lost to full buckets.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn clear(&mut self) {
        for entry in self.entries.iter_mut() {
            *entry = Entry::default();
        }
        self.len = 0;
        self.dropped = 0;
    }

    /// Looks up `state`, returning the best move in the orientation that `symmetry` was
    /// canonicalized from.
    pub fn get(&self, state: State, symmetry: Symmetry) -> Option<(Position, Score)> {
        if state == 0 {
            return None;
        }

        for entry in self.bucket(state) {
            if entry.state == 0 {
                return None;
            }
            if entry.state == state {
                return Some((GEOMETRY.unmap(symmetry, entry.best_move), entry.score));
            }
        }

        None
    }

    /// Stores `best_move`, given in the orientation that `symmetry` was canonicalized from.
    ///
    /// Returns `true` if a new entry was written.
    pub fn insert(&mut self, state: State, symmetry: Symmetry, best_move: Position, score: Score) -> bool {
        if state == 0 {
            return false;
        }

        let best_move = GEOMETRY.map(symmetry, best_move);

        let written = {
            let bucket = self.bucket_mut(state);
            match bucket.iter().position(|entry| entry.state == state || entry.state == 0) {
                Some(index) if bucket[index].state == 0 => {
                    bucket[index] = Entry {
                        state: state,
                        best_move: best_move,
                        score: score,
                    };
                    Some(true)
                },
                Some(_) => Some(false),
                None => None,
            }
        };

        match written {
            Some(true) => {
                self.len += 1;
                true
            },
            Some(false) => false,
            None => {
                self.dropped += 1;
                trace!("Cache bucket {} is full; dropped state {}", state & 0xFF, state);
                false
            },
        }
    }

    /// The number of used slots in each bucket.
    pub fn bucket_loads(&self) -> Vec<usize> {
        self.entries.chunks(self.rows.max(1)).map(|bucket|
            bucket.iter().take_while(|entry| entry.state != 0).count()
        ).collect()
    }

    fn bucket(&self, state: State) -> &[Entry] {
        let start = (state as usize & 0xFF) * self.rows;
        &self.entries[start..start + self.rows]
    }

    fn bucket_mut(&mut self, state: State) -> &mut [Entry] {
        let start = (state as usize & 0xFF) * self.rows;
        &mut self.entries[start..start + self.rows]
    }
}

impl Default for TranspositionCache {
    fn default() -> TranspositionCache {
        TranspositionCache::new()
    }
}

#[cfg(test)]
mod test {
    use geometry::{GEOMETRY, Symmetry};
    use score::Score;
    use super::*;

    #[test]
    fn test_round_trip_every_symmetry() {
        for &symmetry in Symmetry::ALL.iter() {
            let mut cache = TranspositionCache::new();
            assert!(cache.insert(1234, symmetry, 7, Score(-3)));
            assert_eq!(cache.get(1234, symmetry), Some((7, Score(-3))));
        }
    }

    #[test]
    fn test_stores_canonical_orientation() {
        let mut cache = TranspositionCache::new();
        cache.insert(42, Symmetry::Turn90, 0, Score(5));

        // Seen from another orientation of the same class, the move follows the board
        let canonical = GEOMETRY.map(Symmetry::Turn90, 0);
        assert_eq!(cache.get(42, Symmetry::LeftRight), Some((GEOMETRY.unmap(Symmetry::LeftRight, canonical), Score(5))));
        assert_eq!(cache.get(42, Symmetry::Identity), Some((canonical, Score(5))));
    }

    #[test]
    fn test_zero_state_is_never_cached() {
        let mut cache = TranspositionCache::new();
        assert!(!cache.insert(0, Symmetry::Identity, 4, Score(0)));
        assert_eq!(cache.get(0, Symmetry::Identity), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_first_write_wins() {
        let mut cache = TranspositionCache::new();
        assert!(cache.insert(300, Symmetry::Identity, 1, Score(2)));
        assert!(!cache.insert(300, Symmetry::Identity, 5, Score(-2)));
        assert_eq!(cache.get(300, Symmetry::Identity), Some((1, Score(2))));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.dropped(), 0);
    }

    #[test]
    fn test_miss_stops_at_unused_slot() {
        let mut cache = TranspositionCache::new();
        cache.insert(5, Symmetry::Identity, 1, Score(1));
        assert_eq!(cache.get(5 + 256, Symmetry::Identity), None);
        assert_eq!(cache.get(6, Symmetry::Identity), None);
    }

    #[test]
    fn test_full_bucket_drops() {
        let mut cache = TranspositionCache::with_rows(2);
        assert!(cache.insert(1, Symmetry::Identity, 0, Score(1)));
        assert!(cache.insert(1 + 256, Symmetry::Identity, 1, Score(2)));
        assert!(!cache.insert(1 + 512, Symmetry::Identity, 2, Score(3)));

        assert_eq!(cache.dropped(), 1);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(1 + 256, Symmetry::Identity), Some((1, Score(2))));
        assert_eq!(cache.get(1 + 512, Symmetry::Identity), None);

        // A state already present in a full bucket is not a drop
        assert!(!cache.insert(1, Symmetry::Identity, 3, Score(0)));
        assert_eq!(cache.dropped(), 1);

        let loads = cache.bucket_loads();
        assert_eq!(loads.len(), BUCKETS);
        assert_eq!(loads[1], 2);
        assert_eq!(loads.iter().sum::<usize>(), 2);
    }

    #[test]
    fn test_clear() {
        let mut cache = TranspositionCache::with_rows(1);
        cache.insert(9, Symmetry::Identity, 0, Score(1));
        cache.insert(9 + 256, Symmetry::Identity, 0, Score(1));
        assert_eq!(cache.dropped(), 1);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.dropped(), 0);
        assert_eq!(cache.get(9, Symmetry::Identity), None);
    }
}
