//! Console driver: human plays White against the minimax engine as Black.
//!
//! Moves are entered as from-to square pairs ("e2e4"). `fen` prints the
//! current position, `quit` ends the session.

use std::io::{self, BufRead, Write};

use chrono::Local;
use log::info;

use quince_chess::board::board::Board;
use quince_chess::board::board_types::{coordinate_at_position, Square};
use quince_chess::board::fen::generate_fen;
use quince_chess::errors::EngineError;
use quince_chess::player::player::{apply_chosen_move, MoveStatus};
use quince_chess::search::minimax::MiniMax;
use quince_chess::search::strategy::MoveStrategy;

const ENGINE_DEPTH: u32 = 3;

fn main() {
    env_logger::init();
    println!(
        "Quince Chess, session started {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!("You play White. Enter moves like 'e2e4'; 'fen' prints the position; 'quit' exits.");

    if let Err(error) = run() {
        eprintln!("fatal: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), EngineError> {
    let mut board = Board::standard();
    let mut engine = MiniMax::new(ENGINE_DEPTH);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n{board}");
        if announce_if_over(&board) {
            return Ok(());
        }

        print!("your move> ");
        io::stdout().flush().ok();
        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => return Ok(()),
        };
        let text = line.trim();

        match text {
            "" => continue,
            "quit" | "exit" => return Ok(()),
            "fen" => {
                println!("{}", generate_fen(&board));
                continue;
            }
            _ => {}
        }

        let (from, to) = match parse_move_text(text) {
            Ok(squares) => squares,
            Err(error) => {
                println!("{error}");
                continue;
            }
        };

        let transition = apply_chosen_move(&board, from, to);
        match transition.status {
            MoveStatus::Done => board = transition.board,
            MoveStatus::IllegalMove => {
                println!("illegal move: {text}");
                continue;
            }
            MoveStatus::LeavesPlayerInCheck => {
                println!("that move leaves your king in check");
                continue;
            }
        }

        println!("\n{board}");
        if announce_if_over(&board) {
            return Ok(());
        }

        let reply = engine.choose_move(&board)?;
        match reply {
            Some(action) => {
                info!("engine plays {action}");
                println!("engine plays {action}");
                let transition = board.current_player().make_action(&action);
                board = transition.board;
            }
            // Unreachable given the terminal check above, but harmless.
            None => return Ok(()),
        }
    }
}

/// Splits "e2e4" into its two square indices.
fn parse_move_text(text: &str) -> Result<(Square, Square), EngineError> {
    let bad = || EngineError::InvalidAlgebraic(text.to_string());
    if text.len() != 4 {
        return Err(bad());
    }
    let from = coordinate_at_position(&text[0..2]).ok_or_else(bad)?;
    let to = coordinate_at_position(&text[2..4]).ok_or_else(bad)?;
    Ok((from, to))
}

/// Prints the terminal verdict if the game is over. Returns whether it is.
fn announce_if_over(board: &Board) -> bool {
    let player = board.current_player();
    if player.is_in_checkmate() {
        println!("checkmate, {:?} loses", player.color());
        true
    } else if player.is_in_stalemate() {
        println!("stalemate, game drawn");
        true
    } else {
        if player.is_in_check() {
            println!("{:?} is in check", player.color());
        }
        false
    }
}
