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

//! The game state and its queries.

use std::str::FromStr;

use geometry::{BOARD_DIMENSIONS, BOARD_SQUARES, GEOMETRY, Position};
use ply::Ply;
use resolution::Resolution;

/// Either X or O.  X is the first player.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other player.
    pub fn flip(&self) -> Mark {
        match *self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// The base-3 digit of the mark in a board encoding.
    pub fn digit(&self) -> u16 {
        match *self {
            Mark::X => 1,
            Mark::O => 2,
        }
    }
}

/// The 3x3 game board, indexed by position.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Board(pub [Option<Mark>; BOARD_SQUARES]);

impl Board {
    /// Creates an empty board.
    pub fn new() -> Board {
        Board([None; BOARD_SQUARES])
    }

    pub fn get(&self, position: Position) -> Option<Mark> {
        self.0[position]
    }

    /// Writes `cell` into `position` without checking what was there.
    pub fn set_position(&mut self, position: Position, cell: Option<Mark>) {
        self.0[position] = cell;
    }

    /// The empty spaces, in index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.0.iter().enumerate().filter_map(|(position, cell)| if cell.is_none() {
            Some(position)
        } else {
            None
        }).collect()
    }

    /// Returns `Some(mark)` if the line through `last_move` belongs entirely to `mark`.
    ///
    /// Only the row, the column, and any diagonals through `last_move` are examined, since a
    /// placement can only complete a line that passes through it.
    pub fn check_winner(&self, mark: Mark, last_move: Position) -> Option<Mark> {
        let x = GEOMETRY.x(last_move);
        let y = GEOMETRY.y(last_move);
        let owns = |x: usize, y: usize| self.0[GEOMETRY.position(x, y)] == Some(mark);

        if (0..BOARD_DIMENSIONS).all(|i| owns(i, y)) ||
           (0..BOARD_DIMENSIONS).all(|i| owns(x, i)) ||
           (GEOMETRY.on_diagonal(last_move) && (0..BOARD_DIMENSIONS).all(|i| owns(i, i))) ||
           (GEOMETRY.on_anti_diagonal(last_move) && (0..BOARD_DIMENSIONS).all(|i| owns(i, BOARD_DIMENSIONS - 1 - i))) {
            Some(mark)
        } else {
            None
        }
    }

    /// Returns `true` if no empty spaces remain.
    pub fn check_draw(&self) -> bool {
        self.0.iter().all(|cell| cell.is_some())
    }

    /// Places `ply` on the board, refusing out of bounds or occupied spaces.
    pub fn execute_ply(&mut self, ply: &Ply) -> Result<(), String> {
        if ply.position >= BOARD_SQUARES {
            return Err(String::from("Position out of bounds"));
        }

        if self.0[ply.position].is_some() {
            return Err(String::from("Space already occupied"));
        }

        self.0[ply.position] = Some(ply.mark);
        Ok(())
    }

    /// Removes `ply` from the board.
    pub fn revert_ply(&mut self, ply: &Ply) -> Result<(), String> {
        if ply.position >= BOARD_SQUARES {
            return Err(String::from("Position out of bounds"));
        }

        match self.0[ply.position] {
            None => Err(String::from("Space is empty")),
            Some(mark) if mark != ply.mark => Err(String::from("Space has the wrong mark")),
            Some(_) => {
                self.0[ply.position] = None;
                Ok(())
            },
        }
    }

    /// Returns `None` if the game is still open after `last_ply`.
    pub fn check_resolution(&self, last_ply: &Ply) -> Option<Resolution> {
        if let Some(mark) = self.check_winner(last_ply.mark, last_ply.position) {
            Some(Resolution::Win(mark))
        } else if self.check_draw() {
            Some(Resolution::CatsGame)
        } else {
            None
        }
    }

    /// Counts the marks of each player, `(x, o)`.
    pub fn count_marks(&self) -> (usize, usize) {
        self.0.iter().fold((0, 0), |(x, o), cell| match *cell {
            Some(Mark::X) => (x + 1, o),
            Some(Mark::O) => (x, o + 1),
            None => (x, o),
        })
    }

    /// The player to move, assuming X moved first.
    pub fn next_mark(&self) -> Mark {
        let (x, o) = self.count_marks();
        if x > o {
            Mark::O
        } else {
            Mark::X
        }
    }
}

impl FromStr for Board {
    type Err = String;

    /// Reads nine spaces of `X`, `O`, and `.` in index order.  Row separators (`/`) and
    /// whitespace are ignored.
    fn from_str(s: &str) -> Result<Board, String> {
        let mut board = Board::new();
        let mut position = 0;

        for c in s.chars().filter(|c| *c != '/' && !c.is_whitespace()) {
            if position >= BOARD_SQUARES {
                return Err(format!("Too many spaces in board: {}", s));
            }

            board.0[position] = match c {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '-' | '_' => None,
                _ => return Err(format!("Invalid space '{}' in board: {}", c, s)),
            };
            position += 1;
        }

        if position != BOARD_SQUARES {
            return Err(format!("Too few spaces in board: {}", s));
        }

        Ok(board)
    }
}

#[cfg(test)]
mod test {
    use ply::Ply;
    use resolution::Resolution;
    use super::*;

    #[test]
    fn test_empty_positions() {
        assert_eq!(Board::new().empty_positions(), (0..9).collect::<Vec<_>>());

        let board = "X.O/.X./..O".parse::<Board>().unwrap();
        assert_eq!(board.empty_positions(), vec![1, 3, 5, 6, 7]);
    }

    #[test]
    fn test_set_position_and_undo() {
        let mut board = Board::new();
        board.set_position(4, Some(Mark::X));
        assert_eq!(board.get(4), Some(Mark::X));
        board.set_position(4, None);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_check_winner_lines() {
        let row = "OO./XXX/...".parse::<Board>().unwrap();
        assert_eq!(row.check_winner(Mark::X, 5), Some(Mark::X));
        assert_eq!(row.check_winner(Mark::O, 0), None);

        let column = ".X./OX./OX.".parse::<Board>().unwrap();
        assert_eq!(column.check_winner(Mark::X, 1), Some(Mark::X));

        let diagonal = "O.X/.O./X.O".parse::<Board>().unwrap();
        assert_eq!(diagonal.check_winner(Mark::O, 8), Some(Mark::O));

        let anti_diagonal = "O.X/OX./X..".parse::<Board>().unwrap();
        assert_eq!(anti_diagonal.check_winner(Mark::X, 6), Some(Mark::X));
    }

    #[test]
    fn test_check_winner_only_through_last_move() {
        // The top row is complete, but the last move doesn't touch it
        let board = "XXX/.O./..O".parse::<Board>().unwrap();
        assert_eq!(board.check_winner(Mark::X, 0), Some(Mark::X));
        assert_eq!(board.check_winner(Mark::X, 8), None);

        // An edge space never checks a diagonal
        let board = "X../XX./..X".parse::<Board>().unwrap();
        assert_eq!(board.check_winner(Mark::X, 3), None);
        assert_eq!(board.check_winner(Mark::X, 4), Some(Mark::X));
    }

    #[test]
    fn test_check_draw() {
        assert!(!Board::new().check_draw());
        assert!("XOX/XOO/OXX".parse::<Board>().unwrap().check_draw());
        assert!(!"XOX/XOO/OX.".parse::<Board>().unwrap().check_draw());
    }

    #[test]
    fn test_execute_and_revert_ply() {
        let mut board = Board::new();
        let ply = Ply::new(Mark::X, 2);

        assert!(board.execute_ply(&ply).is_ok());
        assert_eq!(board.execute_ply(&Ply::new(Mark::O, 2)), Err(String::from("Space already occupied")));
        assert_eq!(board.execute_ply(&Ply::new(Mark::O, 9)), Err(String::from("Position out of bounds")));
        assert_eq!(board.revert_ply(&Ply::new(Mark::O, 2)), Err(String::from("Space has the wrong mark")));
        assert!(board.revert_ply(&ply).is_ok());
        assert_eq!(board.revert_ply(&ply), Err(String::from("Space is empty")));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_check_resolution() {
        let won = "XXX/OO./...".parse::<Board>().unwrap();
        assert_eq!(won.check_resolution(&Ply::new(Mark::X, 1)), Some(Resolution::Win(Mark::X)));

        let full = "XOX/XOO/OXX".parse::<Board>().unwrap();
        assert_eq!(full.check_resolution(&Ply::new(Mark::X, 8)), Some(Resolution::CatsGame));

        let open = "X../.O./...".parse::<Board>().unwrap();
        assert_eq!(open.check_resolution(&Ply::new(Mark::O, 4)), None);
    }

    #[test]
    fn test_marks() {
        assert_eq!(Mark::X.flip(), Mark::O);
        assert_eq!(Mark::O.flip(), Mark::X);
        assert_eq!(Mark::X.digit() + Mark::O.digit(), 3);

        let board = "X../.O./..X".parse::<Board>().unwrap();
        assert_eq!(board.count_marks(), (2, 1));
        assert_eq!(board.next_mark(), Mark::O);
    }

    #[test]
    fn test_from_str_errors() {
        assert!("XO".parse::<Board>().is_err());
        assert!("XOX/XOO/OXX/X".parse::<Board>().is_err());
        assert!("XOZ/...  /...".parse::<Board>().is_err());
        assert_eq!("x.o . . . . . .".parse::<Board>().unwrap().get(2), Some(Mark::O));
    }
}
