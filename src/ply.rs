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
use geometry::{GEOMETRY, Position};

/// The placement of a mark in an empty space.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Ply {
    pub mark: Mark,
    pub position: Position,
}

impl Ply {
    pub fn new(mark: Mark, position: Position) -> Ply {
        Ply {
            mark: mark,
            position: position,
        }
    }

    /// The ply's space as zero-based `(x, y)` coordinates.
    pub fn coordinates(&self) -> (usize, usize) {
        (GEOMETRY.x(self.position), GEOMETRY.y(self.position))
    }
}
