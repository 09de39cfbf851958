//! Strategy abstraction over "pick a move for this board", with a uniform
//! random baseline. The minimax searcher implements the same trait so game
//! drivers can swap strengths behind one interface.

use log::debug;
use rand::prelude::IndexedRandom;

use crate::board::board::Board;
use crate::errors::EngineError;
use crate::moves::action::Action;
use crate::search::evaluator::BoardEvaluator;
use crate::search::minimax::MiniMax;

pub trait MoveStrategy {
    fn name(&self) -> &str;

    /// The chosen move, or `None` when the side to move has no legal moves.
    fn choose_move(&mut self, board: &Board) -> Result<Option<Action>, EngineError>;
}

/// Uniform random choice among legal moves. Baseline strength, useful for
/// smoke tests and as a sparring partner.
#[derive(Debug, Default)]
pub struct RandomStrategy;

impl MoveStrategy for RandomStrategy {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, board: &Board) -> Result<Option<Action>, EngineError> {
        let player = board.current_player();
        let legal = player.legal_actions();
        debug!("random strategy choosing among {} moves", legal.len());
        let mut rng = rand::rng();
        Ok(legal.choose(&mut rng).cloned())
    }
}

impl<E: BoardEvaluator> MoveStrategy for MiniMax<E> {
    fn name(&self) -> &str {
        "minimax"
    }

    fn choose_move(&mut self, board: &Board) -> Result<Option<Action>, EngineError> {
        self.best_move(board)
    }
}
