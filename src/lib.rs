//! Crate root module declarations for the Quince Chess engine project.
//!
//! This file exposes all top-level subsystems (board model, pieces, move
//! generation, player legality, search, perft, and errors) so binaries,
//! tests, and benches can import stable module paths.

pub mod board {
    pub mod board;
    pub mod board_types;
    pub mod fen;
}

pub mod pieces {
    pub mod piece;
}

pub mod moves {
    pub mod action;
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod player {
    pub mod player;
}

pub mod search {
    pub mod evaluator;
    pub mod minimax;
    pub mod strategy;
}

pub mod errors;
pub mod perft;
