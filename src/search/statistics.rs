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

use std::fmt;
use std::ops::AddAssign;

/// Counters gathered over one or more searches.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Statistics {
    /// Nodes with at least one candidate move.
    pub visited: u32,
    /// Nodes resolved by a move that completes a line.
    pub immediate_wins: u32,
    pub cache_hits: u32,
    pub cache_stores: u32,
    pub cache_drops: u32,
    pub time: f32,
}

impl Statistics {
    pub fn new() -> Statistics {
        Statistics::default()
    }

    /// The counts accumulated since `earlier` was taken.
    pub fn since(&self, earlier: &Statistics) -> Statistics {
        Statistics {
            visited: self.visited - earlier.visited,
            immediate_wins: self.immediate_wins - earlier.immediate_wins,
            cache_hits: self.cache_hits - earlier.cache_hits,
            cache_stores: self.cache_stores - earlier.cache_stores,
            cache_drops: self.cache_drops - earlier.cache_drops,
            time: self.time - earlier.time,
        }
    }
}

impl AddAssign for Statistics {
    fn add_assign(&mut self, other: Statistics) {
        self.visited += other.visited;
        self.immediate_wins += other.immediate_wins;
        self.cache_hits += other.cache_hits;
        self.cache_stores += other.cache_stores;
        self.cache_drops += other.cache_drops;
        self.time += other.time;
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows = [
            ("Visited:", format!("{}", self.visited)),
            ("Immediate Wins:", format!("{}", self.immediate_wins)),
            ("Cache Hits:", format!("{}", self.cache_hits)),
            ("Cache Stores:", format!("{}", self.cache_stores)),
            ("Cache Drops:", format!("{}", self.cache_drops)),
            ("Time:", format!("{:.4}", self.time)),
        ];

        let title_width = rows.iter().map(|&(title, _)| title.len()).max().unwrap_or(0) + 1;
        let value_width = rows.iter().map(|&(_, ref value)| value.len()).max().unwrap_or(0);

        for (i, &(title, ref value)) in rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {0:1$}{2:>3$}", title, title_width, value, value_width)?;
        }
        Ok(())
    }
}
