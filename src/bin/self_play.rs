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

//! Plays the engine against itself and against a random opponent.
//!
//! Usage: `self_play [games] [threads]`

extern crate env_logger;
#[macro_use]
extern crate log;
extern crate rand;
extern crate tic_tac_toe_engine;

use std::env;
use std::process;
use std::sync::{Arc, mpsc, Mutex};
use std::thread;

use rand::seq::SliceRandom;

use tic_tac_toe_engine::{Board, Engine, Mark, Ply, Resolution, Statistics};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Opponent {
    Engine,
    // The random player moves with this mark
    Random(Mark),
}

#[derive(Default)]
struct Tally {
    self_play_draws: u32,
    self_play_decided: u32,
    engine_wins: u32,
    random_wins: u32,
    random_draws: u32,
}

fn play_game(engine: &mut Engine, opponent: Opponent) -> Result<Resolution, String> {
    let mut rng = rand::thread_rng();
    let mut board = Board::new();
    let mut mark = Mark::X;

    loop {
        let position = match opponent {
            Opponent::Random(random_mark) if random_mark == mark => {
                match board.empty_positions().choose(&mut rng) {
                    Some(&position) => position,
                    None => return Err(String::from("No empty space for the random player")),
                }
            },
            _ => match engine.best_move(mark, &mut board, 0) {
                Some((position, _)) => position,
                None => return Err(String::from("Engine found no move on an open board")),
            },
        };

        let ply = Ply::new(mark, position);
        board.execute_ply(&ply)?;
        trace!("{}{}", ply, board);

        if let Some(resolution) = board.check_resolution(&ply) {
            return Ok(resolution);
        }

        mark = mark.flip();
    }
}

fn parse_argument(args: &[String], index: usize, default: u32) -> u32 {
    match args.get(index) {
        Some(arg) => match arg.parse() {
            Ok(value) => value,
            Err(_) => {
                eprintln!("Invalid argument '{}', using {}", arg, default);
                default
            },
        },
        None => default,
    }
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "warn"),
    ).init();

    let args = env::args().collect::<Vec<_>>();
    let games = parse_argument(&args, 1, 300);
    let threads = parse_argument(&args, 2, 4).max(1);

    let tally = Arc::new(Mutex::new(Tally::default()));
    let totals = Arc::new(Mutex::new(Statistics::new()));
    let remaining = Arc::new(Mutex::new(games));
    let (finished_sender, finished_receiver) = mpsc::channel();

    for thread in 0..threads {
        let tally = tally.clone();
        let totals = totals.clone();
        let remaining = remaining.clone();
        let finished_sender = finished_sender.clone();

        thread::spawn(move || {
            let mut engine = Engine::new();

            loop {
                let game = {
                    let mut remaining = match remaining.lock() {
                        Ok(remaining) => remaining,
                        Err(_) => break,
                    };
                    if *remaining == 0 {
                        break;
                    }
                    *remaining -= 1;
                    games - *remaining
                };

                let opponent = match game % 3 {
                    0 => Opponent::Engine,
                    1 => Opponent::Random(Mark::O),
                    _ => Opponent::Random(Mark::X),
                };

                let resolution = match play_game(&mut engine, opponent) {
                    Ok(resolution) => resolution,
                    Err(error) => {
                        error!("Thread {}: Game {}: {}", thread, game, error);
                        continue;
                    },
                };

                info!("Thread {}: Game {} against {:?}: {}", thread, game, opponent, resolution);

                if let Ok(mut tally) = tally.lock() {
                    match opponent {
                        Opponent::Engine => if resolution.is_draw() {
                            tally.self_play_draws += 1;
                        } else {
                            tally.self_play_decided += 1;
                        },
                        Opponent::Random(random_mark) => match resolution.get_winner() {
                            Some(winner) if winner == random_mark => tally.random_wins += 1,
                            Some(_) => tally.engine_wins += 1,
                            None => tally.random_draws += 1,
                        },
                    }
                }
            }

            debug!("Thread {} finished:\n{}", thread, engine.statistics());
            if let Ok(mut totals) = totals.lock() {
                *totals += *engine.statistics();
            }
            finished_sender.send(()).ok();
        });
    }

    for _ in 0..threads {
        finished_receiver.recv().ok();
    }

    let tally = match tally.lock() {
        Ok(tally) => tally,
        Err(_) => {
            eprintln!("A worker thread panicked");
            process::exit(2);
        },
    };

    let against_random = tally.engine_wins + tally.random_wins + tally.random_draws;
    let percent = |count: u32, total: u32| if total == 0 { 0.0 } else { count as f32 / total as f32 * 100.0 };

    println!("Self-play draws:   {:4} / {:4} {:6.2}%", tally.self_play_draws, tally.self_play_draws + tally.self_play_decided,
        percent(tally.self_play_draws, tally.self_play_draws + tally.self_play_decided));
    println!("Wins vs random:    {:4} / {:4} {:6.2}%", tally.engine_wins, against_random, percent(tally.engine_wins, against_random));
    println!("Draws vs random:   {:4} / {:4} {:6.2}%", tally.random_draws, against_random, percent(tally.random_draws, against_random));
    println!("Losses vs random:  {:4} / {:4} {:6.2}%", tally.random_wins, against_random, percent(tally.random_wins, against_random));

    if let Ok(totals) = totals.lock() {
        println!("\nSearch statistics over {} threads:\n{}", threads, *totals);
    }

    if tally.self_play_decided > 0 || tally.random_wins > 0 {
        process::exit(1);
    }
}
