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

//! A perfect-play engine for tic-tac-toe.
//!
//! The engine searches the whole game tree with negamax, made cheap by three tricks: candidate
//! moves that a symmetry of the board makes redundant are dropped before searching, a move
//! that completes a line ends the search at once, and every searched position is remembered
//! under the smallest base-3 encoding of its eight symmetric images.
//!
//! # Usage
//!
//! ```rust
//! extern crate tic_tac_toe_engine;
//!
//! use tic_tac_toe_engine::{Board, Engine, Mark, Ply, Resolution};
//!
//! fn main() {
//!     let mut engine = Engine::new();
//!     let mut board = Board::new();
//!     let mut mark = Mark::X;
//!
//!     let resolution = loop {
//!         let (position, _) = engine.best_move(mark, &mut board, 0).unwrap();
//!         let ply = Ply::new(mark, position);
//!         board.execute_ply(&ply).unwrap();
//!
//!         if let Some(resolution) = board.check_resolution(&ply) {
//!             break resolution;
//!         }
//!         mark = mark.flip();
//!     };
//!
//!     assert_eq!(resolution, Resolution::CatsGame);
//! }
//! ```
//!
//! Logging goes through the `log` facade; the root of every search is reported at `debug`
//! level.

extern crate fnv;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

pub use self::board::{Board, Mark};
pub use self::canonical::{State, canonicalize};
pub use self::census::Census;
pub use self::geometry::{BOARD_DIMENSIONS, BOARD_SQUARES, GEOMETRY, Position, Symmetry};
pub use self::ply::Ply;
pub use self::resolution::Resolution;
pub use self::score::Score;
pub use self::search::{Analysis, Engine, Statistics, TranspositionCache};

pub mod canonical;
pub mod census;
pub mod geometry;
pub mod search;

mod board;
mod display;
mod ply;
mod resolution;
mod score;
