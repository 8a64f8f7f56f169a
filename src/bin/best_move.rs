use std::env;

use chess_core::game::search::{self, DEFAULT_DEPTH};
use chess_core::Game;

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth = match args.get(1) {
        Some(arg) => match arg.parse() {
            Ok(depth) => depth,
            Err(_) => {
                eprintln!("usage: best_move [depth]");
                return;
            }
        },
        None => DEFAULT_DEPTH,
    };

    let mut game = Game::new();
    let eval = search::evaluate(&mut game, depth);

    println!("side_to_move: {}", game.moving_side());
    println!("depth: {depth}");
    println!("score: {}", eval.score);
    println!("nodes: {}", eval.nodes);
    match eval.best_move() {
        Some(mv) => println!("best_move: {mv}"),
        None => println!("best_move: (none)"),
    }
    for mv in &eval.best_line {
        println!("{mv}");
    }
}
