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
use std::ops::{Add, Neg};

use geometry::BOARD_SQUARES;

/// The value of a position to the player about to move.
///
/// A win completed on the `n`th ply of a search is worth `BOARD_SQUARES + 1 - n`, so
/// faster wins outrank slower ones.  Values are negated as they are passed up the tree,
/// and zero is a drawn subtree.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Score(pub i8);

impl Score {
    /// A drawn, or not yet valued, position.
    pub fn null() -> Score {
        Score(0)
    }

    /// The value of completing a line on ply `ply` of a search, counting the root's move as ply 1.
    pub fn win_at(ply: u8) -> Score {
        Score((BOARD_SQUARES + 1) as i8 - ply as i8)
    }

    pub fn is_win(&self) -> bool {
        self.0 > 0
    }

    pub fn is_lose(&self) -> bool {
        self.0 < 0
    }

    pub fn is_draw(&self) -> bool {
        self.0 == 0
    }
}

impl Add for Score {
    type Output = Score;

    fn add(self, Score(b): Score) -> Score {
        Score(self.0 + b)
    }
}

impl Neg for Score {
    type Output = Score;

    fn neg(self) -> Score {
        Score(-self.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)?;
        if self.is_win() {
            write!(f, " (Win)")
        } else if self.is_lose() {
            write!(f, " (Lose)")
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_win_at() {
        assert_eq!(Score::win_at(1), Score(9));
        assert_eq!(Score::win_at(9), Score(1));
        assert!(Score::win_at(1) > Score::win_at(3));
    }

    #[test]
    fn test_negamax_arithmetic() {
        assert_eq!(-Score(7), Score(-7));
        assert_eq!(Score(9) + Score(9), Score(18));
        assert!(-Score::win_at(2) < Score::null());
        assert!(Score::null().is_draw());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Score(9)), "9 (Win)");
        assert_eq!(format!("{}", Score(-6)), "-6 (Lose)");
        assert_eq!(format!("{}", Score(0)), "0");
    }
}
