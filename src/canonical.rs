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

//! Folding a board down to one representative of its symmetry class.

use board::Board;
use geometry::{BOARD_SQUARES, GEOMETRY, Symmetry};

/// A board encoded as a base-3 numeral, `0..3^9`.
pub type State = u16;

/// Encodes `board` as it appears after being transformed by `symmetry`.
///
/// The space at `position` contributes its mark's digit at the weight of the position it is
/// mapped to.
pub fn encode_with(board: &Board, symmetry: Symmetry) -> State {
    let mut state = 0;
    for position in 0..BOARD_SQUARES {
        if let Some(mark) = board.0[position] {
            state += mark.digit() * GEOMETRY.weight(GEOMETRY.map(symmetry, position));
        }
    }
    state
}

/// Encodes `board` as it stands.
pub fn encode(board: &Board) -> State {
    encode_with(board, Symmetry::Identity)
}

/// Returns the smallest encoding of `board` under any symmetry, along with the first symmetry
/// that produces it.
///
/// A move in `board`'s orientation appears at `GEOMETRY.map(symmetry, move)` in the canonical
/// orientation, and `GEOMETRY.unmap` brings it back.
pub fn canonicalize(board: &Board) -> (State, Symmetry) {
    let mut best = (encode(board), Symmetry::Identity);

    for &symmetry in Symmetry::ALL[1..].iter() {
        let state = encode_with(board, symmetry);
        if state < best.0 {
            best = (state, symmetry);
        }
    }

    best
}

impl Board {
    /// Returns the image of the board under `symmetry`.
    pub fn transform(&self, symmetry: Symmetry) -> Board {
        let mut image = Board::new();
        for position in 0..BOARD_SQUARES {
            image.0[GEOMETRY.map(symmetry, position)] = self.0[position];
        }
        image
    }
}

#[cfg(test)]
mod test {
    use board::{Board, Mark};
    use geometry::{BOARD_SQUARES, GEOMETRY, Symmetry};
    use super::*;

    // Every board reachable with up to `marks` marks, alternating from X
    fn boards_up_to(marks: usize) -> Vec<Board> {
        fn walk(board: &mut Board, mark: Mark, remaining: usize, boards: &mut Vec<Board>) {
            boards.push(*board);
            if remaining == 0 {
                return;
            }
            for position in board.empty_positions() {
                board.set_position(position, Some(mark));
                walk(board, mark.flip(), remaining - 1, boards);
                board.set_position(position, None);
            }
        }

        let mut boards = Vec::new();
        walk(&mut Board::new(), Mark::X, marks, &mut boards);
        boards
    }

    #[test]
    fn test_empty_board_is_zero() {
        assert_eq!(canonicalize(&Board::new()), (0, Symmetry::Identity));
    }

    #[test]
    fn test_encode() {
        let board = "XO./.../...".parse::<Board>().unwrap();
        assert_eq!(encode(&board), 1 + 2 * 3);

        let full = "OOO/OOO/OOO".parse::<Board>().unwrap();
        assert_eq!(encode(&full), 19682);
    }

    #[test]
    fn test_transform_matches_encoding() {
        let board = "X.O/.XO/...".parse::<Board>().unwrap();
        for &symmetry in Symmetry::ALL.iter() {
            let image = board.transform(symmetry);
            assert_eq!(encode(&image), encode_with(&board, symmetry));
            for position in 0..BOARD_SQUARES {
                assert_eq!(image.get(GEOMETRY.map(symmetry, position)), board.get(position));
            }
        }
    }

    #[test]
    fn test_corners_share_a_state() {
        for &corner in &[0, 2, 6, 8] {
            let mut board = Board::new();
            board.set_position(corner, Some(Mark::X));

            let (state, symmetry) = canonicalize(&board);
            assert_eq!(state, 1);
            assert_eq!(GEOMETRY.map(symmetry, corner), 0);
        }
    }

    #[test]
    fn test_identity_wins_ties() {
        let mut board = Board::new();
        board.set_position(4, Some(Mark::O));
        assert_eq!(canonicalize(&board), (2 * 81, Symmetry::Identity));
    }

    #[test]
    fn test_canonical_state_is_minimal() {
        for board in boards_up_to(4) {
            let (state, symmetry) = canonicalize(&board);
            assert_eq!(encode_with(&board, symmetry), state);
            for &other in Symmetry::ALL.iter() {
                assert!(state <= encode_with(&board, other));
            }
        }
    }

    #[test]
    fn test_canonicalization_is_symmetry_invariant() {
        for board in boards_up_to(5) {
            let (state, _) = canonicalize(&board);
            for &symmetry in Symmetry::ALL.iter() {
                assert_eq!(canonicalize(&board.transform(symmetry)).0, state);
            }
        }
    }

    #[test]
    fn test_moves_map_through_canonical_orientation() {
        let board = "..X/.O./...".parse::<Board>().unwrap();
        let (state, symmetry) = canonicalize(&board);
        let canonical = board.transform(symmetry);
        assert_eq!(encode(&canonical), state);

        for position in board.empty_positions() {
            let image = GEOMETRY.map(symmetry, position);
            assert!(canonical.get(image).is_none());
            assert_eq!(GEOMETRY.unmap(symmetry, image), position);
        }
    }
}
