//! Plain fixed-depth minimax over the legal move tree, no pruning.
//!
//! White is always the maximizing side and Black the minimizing side,
//! matching the evaluator's White-positive convention. Ties are broken by
//! keeping the first strictly better move encountered, so the search is
//! deterministic for a given board.

use std::time::Instant;

use log::debug;

use crate::board::board::Board;
use crate::errors::EngineError;
use crate::moves::action::Action;
use crate::search::evaluator::{BoardEvaluator, StandardBoardEvaluator};

pub struct MiniMax<E = StandardBoardEvaluator> {
    evaluator: E,
    search_depth: u32,
}

impl MiniMax<StandardBoardEvaluator> {
    pub fn new(search_depth: u32) -> Self {
        Self::with_evaluator(StandardBoardEvaluator, search_depth)
    }
}

impl<E: BoardEvaluator> MiniMax<E> {
    /// Panics if `search_depth` is 0; a zero-ply search cannot choose a move.
    pub fn with_evaluator(evaluator: E, search_depth: u32) -> Self {
        assert!(search_depth >= 1, "minimax search depth must be at least 1");
        Self {
            evaluator,
            search_depth,
        }
    }

    /// The best move for the side to move, or `None` when the position is
    /// already checkmate or stalemate.
    pub fn best_move(&self, board: &Board) -> Result<Option<Action>, EngineError> {
        let player = board.current_player();
        if player.is_in_checkmate() || player.is_in_stalemate() {
            return Ok(None);
        }

        let start = Instant::now();
        let maximizing = board.side_to_move().is_white();
        let mut best_value = if maximizing { i32::MIN } else { i32::MAX };
        let mut best: Option<Action> = None;

        for action in player.legal_actions() {
            let next = action.apply(board)?;
            let value = if maximizing {
                self.min(&next, self.search_depth - 1)?
            } else {
                self.max(&next, self.search_depth - 1)?
            };
            let improved = if maximizing {
                value > best_value
            } else {
                value < best_value
            };
            if improved {
                best_value = value;
                best = Some(action.clone());
            }
        }

        debug!(
            "minimax depth {} examined {} root moves in {:?}, best value {}",
            self.search_depth,
            player.legal_actions().len(),
            start.elapsed(),
            best_value
        );
        Ok(best)
    }

    fn min(&self, board: &Board, depth: u32) -> Result<i32, EngineError> {
        if depth == 0 || is_end_of_game(board) {
            return Ok(self.evaluator.evaluate(board, depth));
        }
        let mut lowest = i32::MAX;
        for action in board.current_player().legal_actions() {
            let next = action.apply(board)?;
            lowest = lowest.min(self.max(&next, depth - 1)?);
        }
        Ok(lowest)
    }

    fn max(&self, board: &Board, depth: u32) -> Result<i32, EngineError> {
        if depth == 0 || is_end_of_game(board) {
            return Ok(self.evaluator.evaluate(board, depth));
        }
        let mut highest = i32::MIN;
        for action in board.current_player().legal_actions() {
            let next = action.apply(board)?;
            highest = highest.max(self.min(&next, depth - 1)?);
        }
        Ok(highest)
    }
}

fn is_end_of_game(board: &Board) -> bool {
    let player = board.current_player();
    player.is_in_checkmate() || player.is_in_stalemate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::board_types::Color;
    use crate::pieces::piece::{Piece, PieceKind};

    #[test]
    fn finds_a_back_rank_mate_in_one() {
        // White rook d5 mates on d8.
        let mut builder = Board::builder();
        builder.set_piece(Piece::placed(PieceKind::King, Color::Black, 7, false));
        builder.set_piece(Piece::placed(PieceKind::Pawn, Color::Black, 14, false));
        builder.set_piece(Piece::placed(PieceKind::Pawn, Color::Black, 15, false));
        builder.set_piece(Piece::placed(PieceKind::Rook, Color::White, 27, false));
        builder.set_piece(Piece::placed(PieceKind::King, Color::White, 60, false));
        let board = builder.build().expect("valid board");

        let chosen = MiniMax::new(2)
            .best_move(&board)
            .expect("search runs")
            .expect("moves exist");
        assert_eq!(chosen.destination(), Some(3));

        let mated = board.current_player().make_action(&chosen);
        assert!(mated.status.is_done());
        assert!(mated.board.current_player().is_in_checkmate());
    }

    #[test]
    fn terminal_positions_yield_no_move() {
        // Stalemate: cornered black king, nothing to play.
        let mut builder = Board::builder();
        builder.set_piece(Piece::placed(PieceKind::King, Color::Black, 0, false));
        builder.set_piece(Piece::placed(PieceKind::Queen, Color::White, 10, false));
        builder.set_piece(Piece::placed(PieceKind::King, Color::White, 63, false));
        builder.set_move_maker(Color::Black);
        let board = builder.build().expect("valid board");

        let chosen = MiniMax::new(2).best_move(&board).expect("search runs");
        assert!(chosen.is_none());
    }

    #[test]
    fn black_minimizes_toward_material_gain() {
        // Black rook can take a hanging white queen.
        let mut builder = Board::builder();
        builder.set_piece(Piece::placed(PieceKind::King, Color::Black, 0, false));
        builder.set_piece(Piece::placed(PieceKind::Rook, Color::Black, 16, false));
        builder.set_piece(Piece::placed(PieceKind::Queen, Color::White, 23, false));
        builder.set_piece(Piece::placed(PieceKind::King, Color::White, 63, false));
        builder.set_move_maker(Color::Black);
        let board = builder.build().expect("valid board");

        let chosen = MiniMax::new(1)
            .best_move(&board)
            .expect("search runs")
            .expect("moves exist");
        assert!(chosen.is_attack());
        assert_eq!(chosen.destination(), Some(23));
    }

    #[test]
    #[should_panic(expected = "at least 1")]
    fn zero_depth_is_a_caller_bug() {
        let _ = MiniMax::new(0);
    }

    #[test]
    fn repeated_searches_pick_the_same_move() {
        let board = Board::standard();
        let search = MiniMax::new(1);
        let first = search.best_move(&board).expect("search runs");
        let second = search.best_move(&board).expect("search runs");
        assert_eq!(first, second);
        assert!(first.is_some());
    }
}
