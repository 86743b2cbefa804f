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

//! Removes candidate moves that a symmetry of the board makes redundant.

use board::Board;
use geometry::{BOARD_DIMENSIONS, BOARD_SQUARES, GEOMETRY, Position, Symmetry};

/// The reflections checked, each paired with the test for the half of the board it makes
/// redundant.
const REFLECTIONS: [(Symmetry, fn(usize, usize) -> bool); 4] = [
    (Symmetry::LeftRight, redundant_right),
    (Symmetry::TopBottom, redundant_bottom),
    (Symmetry::BackwardSlash, redundant_above_diagonal),
    (Symmetry::ForwardSlash, redundant_below_anti_diagonal),
];

const MIDDLE: usize = (BOARD_DIMENSIONS + 1) / 2;

fn redundant_right(x: usize, _: usize) -> bool {
    x >= MIDDLE
}

fn redundant_bottom(_: usize, y: usize) -> bool {
    y >= MIDDLE
}

fn redundant_above_diagonal(x: usize, y: usize) -> bool {
    x > y
}

fn redundant_below_anti_diagonal(x: usize, y: usize) -> bool {
    x > BOARD_DIMENSIONS - 1 - y
}

/// Returns `true` if `board` is its own image under `symmetry`.
pub fn is_symmetric(board: &Board, symmetry: Symmetry) -> bool {
    (0..BOARD_SQUARES).all(|position| board.0[position] == board.0[GEOMETRY.map(symmetry, position)])
}

/// Drops from `candidates` every move whose reflection through a symmetry of `board` is also a
/// candidate.  The relative order of the remaining moves is kept.
///
/// Each reflection the board is symmetric under discards one half of the board; the kept half
/// always contains the mirror image of any discarded move, so no class of moves is lost.
pub fn filter_symmetry(board: &Board, candidates: &mut Vec<Position>) {
    for &(symmetry, redundant) in REFLECTIONS.iter() {
        if is_symmetric(board, symmetry) {
            candidates.retain(|&position| !redundant(GEOMETRY.x(position), GEOMETRY.y(position)));
        }
    }
}

#[cfg(test)]
mod test {
    use board::Board;
    use geometry::Symmetry;
    use super::*;

    fn pruned(board: &str) -> Vec<usize> {
        let board = board.parse::<Board>().unwrap();
        let mut candidates = board.empty_positions();
        filter_symmetry(&board, &mut candidates);
        candidates
    }

    #[test]
    fn test_first_move() {
        // A corner, an edge, and the center
        assert_eq!(pruned(".../.../..."), vec![0, 3, 4]);
    }

    #[test]
    fn test_center_opening() {
        assert_eq!(pruned(".../.X./..."), vec![0, 3]);
    }

    #[test]
    fn test_corner_opening() {
        // Only the main diagonal survives as an axis
        assert_eq!(pruned("X../.../..."), vec![3, 4, 6, 7, 8]);
    }

    #[test]
    fn test_edge_opening() {
        assert_eq!(pruned(".X./.../..."), vec![0, 3, 4, 6, 7]);
    }

    #[test]
    fn test_asymmetric_board_is_untouched() {
        assert_eq!(pruned("XO./.../..."), vec![2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_is_symmetric() {
        let board = "X.X/.O./...".parse::<Board>().unwrap();
        assert!(is_symmetric(&board, Symmetry::LeftRight));
        assert!(!is_symmetric(&board, Symmetry::TopBottom));
        assert!(is_symmetric(&Board::new(), Symmetry::Turn90));
    }
}
