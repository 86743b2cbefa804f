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

use board::{Board, Mark};
use geometry::BOARD_DIMENSIONS;
use ply::Ply;
use resolution::Resolution;

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Mark::X => "X",
            Mark::O => "O",
        })
    }
}

impl fmt::Display for Ply {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (x, y) = self.coordinates();
        write!(f, "{}, {:?}", self.mark, (x + 1, y + 1))
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Resolution::Win(mark) => write!(f, "{} wins", mark),
            Resolution::CatsGame => write!(f, "Cat's game"),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\n   1  2  3")?;
        for y in 0..BOARD_DIMENSIONS {
            write!(f, "\n{} ", y + 1)?;
            for x in 0..BOARD_DIMENSIONS {
                match self.0[x + BOARD_DIMENSIONS * y] {
                    Some(mark) => write!(f, "[{}]", mark)?,
                    None => write!(f, "[ ]")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use board::{Board, Mark};
    use ply::Ply;
    use resolution::Resolution;

    #[test]
    fn test_display_board() {
        let board = "X.O/.X./...".parse::<Board>().unwrap();
        assert_eq!(format!("{}", board), "\n   1  2  3\n1 [X][ ][O]\n2 [ ][X][ ]\n3 [ ][ ][ ]");
    }

    #[test]
    fn test_display_ply() {
        assert_eq!(format!("{}", Ply::new(Mark::O, 5)), "O, (3, 2)");
    }

    #[test]
    fn test_display_resolution() {
        assert_eq!(format!("{}", Resolution::Win(Mark::X)), "X wins");
        assert_eq!(format!("{}", Resolution::CatsGame), "Cat's game");
    }
}
