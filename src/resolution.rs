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

use board::Mark;

/// Either a win or a cat's game.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Resolution {
    Win(Mark),
    CatsGame,
}

impl Resolution {
    pub fn get_winner(&self) -> Option<Mark> {
        match *self {
            Resolution::Win(mark) => Some(mark),
            Resolution::CatsGame => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        if let Resolution::CatsGame = *self { true } else { false }
    }
}
