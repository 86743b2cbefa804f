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

//! Tables derived from the fixed 3x3 topology.

use std::fmt;

/// The width and height of the board.
pub const BOARD_DIMENSIONS: usize = 3;
/// The number of spaces on the board.
pub const BOARD_SQUARES: usize = BOARD_DIMENSIONS * BOARD_DIMENSIONS;
/// The number of elements in the symmetry group of the square.
pub const SYMMETRIES: usize = 8;

/// An index into the board, `x + 3 * y`.
pub type Position = usize;

lazy_static! {
    /// The tables shared by every board and search.
    pub static ref GEOMETRY: Geometry = Geometry::new();
}

/// One of the eight ways to map the board onto itself.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Symmetry {
    Identity,
    LeftRight,
    TopBottom,
    ForwardSlash,
    BackwardSlash,
    Turn90,
    Turn180,
    Turn270,
}

impl Symmetry {
    /// Every symmetry, in the order canonicalization tries them.
    pub const ALL: [Symmetry; SYMMETRIES] = [
        Symmetry::Identity,
        Symmetry::LeftRight,
        Symmetry::TopBottom,
        Symmetry::ForwardSlash,
        Symmetry::BackwardSlash,
        Symmetry::Turn90,
        Symmetry::Turn180,
        Symmetry::Turn270,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Maps a coordinate to its image under this symmetry.
    pub fn transform(&self, x: usize, y: usize) -> (usize, usize) {
        let last = BOARD_DIMENSIONS - 1;
        match *self {
            Symmetry::Identity => (x, y),
            Symmetry::LeftRight => (last - x, y),
            Symmetry::TopBottom => (x, last - y),
            Symmetry::ForwardSlash => (last - y, last - x),
            Symmetry::BackwardSlash => (y, x),
            Symmetry::Turn90 => (y, last - x),
            Symmetry::Turn180 => (last - x, last - y),
            Symmetry::Turn270 => (last - y, x),
        }
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Symmetry::Identity => "identity",
            Symmetry::LeftRight => "left-right",
            Symmetry::TopBottom => "top-bottom",
            Symmetry::ForwardSlash => "forward slash",
            Symmetry::BackwardSlash => "backward slash",
            Symmetry::Turn90 => "turn 90",
            Symmetry::Turn180 => "turn 180",
            Symmetry::Turn270 => "turn 270",
        })
    }
}

/// Precomputed coordinate, weight, and symmetry tables.
#[derive(Debug)]
pub struct Geometry {
    x: [usize; BOARD_SQUARES],
    y: [usize; BOARD_SQUARES],
    xy_to_position: [[Position; BOARD_DIMENSIONS]; BOARD_DIMENSIONS],

    // Membership in the main (x == y) and anti (x + y == 2) diagonals
    diagonal: [bool; BOARD_SQUARES],
    anti_diagonal: [bool; BOARD_SQUARES],

    // 3^position, the weight of a space in a base-3 encoding of the board
    threes: [u16; BOARD_SQUARES],

    symmetry: [[Position; BOARD_SQUARES]; SYMMETRIES],
    reverse_symmetry: [[Position; BOARD_SQUARES]; SYMMETRIES],
}

impl Geometry {
    fn new() -> Geometry {
        let mut geometry = Geometry {
            x: [0; BOARD_SQUARES],
            y: [0; BOARD_SQUARES],
            xy_to_position: [[0; BOARD_DIMENSIONS]; BOARD_DIMENSIONS],
            diagonal: [false; BOARD_SQUARES],
            anti_diagonal: [false; BOARD_SQUARES],
            threes: [0; BOARD_SQUARES],
            symmetry: [[0; BOARD_SQUARES]; SYMMETRIES],
            reverse_symmetry: [[0; BOARD_SQUARES]; SYMMETRIES],
        };

        for position in 0..BOARD_SQUARES {
            let x = position % BOARD_DIMENSIONS;
            let y = position / BOARD_DIMENSIONS;

            geometry.x[position] = x;
            geometry.y[position] = y;
            geometry.xy_to_position[x][y] = position;
            geometry.diagonal[position] = x == y;
            geometry.anti_diagonal[position] = x + y == BOARD_DIMENSIONS - 1;
            geometry.threes[position] = if position == 0 {
                1
            } else {
                3 * geometry.threes[position - 1]
            };
        }

        for position in 0..BOARD_SQUARES {
            let (x, y) = (geometry.x[position], geometry.y[position]);

            for symmetry in Symmetry::ALL.iter() {
                let (new_x, new_y) = symmetry.transform(x, y);
                let new_position = geometry.xy_to_position[new_x][new_y];

                geometry.symmetry[symmetry.index()][position] = new_position;
                geometry.reverse_symmetry[symmetry.index()][new_position] = position;
            }
        }

        geometry
    }

    pub fn x(&self, position: Position) -> usize {
        self.x[position]
    }

    pub fn y(&self, position: Position) -> usize {
        self.y[position]
    }

    pub fn position(&self, x: usize, y: usize) -> Position {
        self.xy_to_position[x][y]
    }

    /// Returns `true` if `position` lies on the diagonal from the top left to the bottom right.
    pub fn on_diagonal(&self, position: Position) -> bool {
        self.diagonal[position]
    }

    /// Returns `true` if `position` lies on the diagonal from the top right to the bottom left.
    pub fn on_anti_diagonal(&self, position: Position) -> bool {
        self.anti_diagonal[position]
    }

    pub fn weight(&self, position: Position) -> u16 {
        self.threes[position]
    }

    /// Where `position` lands when the board is transformed by `symmetry`.
    pub fn map(&self, symmetry: Symmetry, position: Position) -> Position {
        self.symmetry[symmetry.index()][position]
    }

    /// The inverse of `map`: the position that `symmetry` sends to `position`.
    pub fn unmap(&self, symmetry: Symmetry, position: Position) -> Position {
        self.reverse_symmetry[symmetry.index()][position]
    }
}
