//! Static board evaluation from White's point of view.
//!
//! The score is the difference of two per-side tallies: material, mobility
//! (legal move count), a bonus for giving check, a large depth-scaled bonus
//! for delivering checkmate, and a bonus for having castled. Positive favors
//! White, negative favors Black.

use crate::board::board::Board;
use crate::board::board_types::Color;
use crate::player::player::Player;

const CHECK_BONUS: i32 = 50;
const CHECKMATE_BONUS: i32 = 10_000;
const DEPTH_BONUS: i32 = 100;
const CASTLE_BONUS: i32 = 60;

pub trait BoardEvaluator {
    /// Scores `board`, with `depth` being the remaining search depth so mates
    /// found earlier in the tree score higher.
    fn evaluate(&self, board: &Board, depth: u32) -> i32;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StandardBoardEvaluator;

impl BoardEvaluator for StandardBoardEvaluator {
    fn evaluate(&self, board: &Board, depth: u32) -> i32 {
        side_score(board, Color::White, depth) - side_score(board, Color::Black, depth)
    }
}

fn side_score(board: &Board, color: Color, depth: u32) -> i32 {
    let player = board.player(color);
    let opponent = board.player(color.opposite());
    material(board, color)
        + mobility(&player)
        + check(&opponent)
        + checkmate(&opponent, depth)
        + castled(&player)
}

fn material(board: &Board, color: Color) -> i32 {
    board.pieces(color).iter().map(|piece| piece.value()).sum()
}

fn mobility(player: &Player) -> i32 {
    player.legal_actions().len() as i32
}

fn check(opponent: &Player) -> i32 {
    if opponent.is_in_check() {
        CHECK_BONUS
    } else {
        0
    }
}

fn checkmate(opponent: &Player, depth: u32) -> i32 {
    if opponent.is_in_checkmate() {
        CHECKMATE_BONUS * depth_bonus(depth)
    } else {
        0
    }
}

/// Remaining depth scales the mate bonus so that forcing mate sooner beats
/// forcing it later.
fn depth_bonus(depth: u32) -> i32 {
    if depth == 0 {
        1
    } else {
        DEPTH_BONUS * depth as i32
    }
}

fn castled(player: &Player) -> i32 {
    if player.is_castled() {
        CASTLE_BONUS
    } else {
        0
    }
}
