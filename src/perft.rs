//! Perft: exhaustive legal move tree walks with per-kind tallies, used to
//! validate the move generator and legality filter against reference counts.

use crate::board::board::Board;
use crate::errors::EngineError;
use crate::moves::action::Action;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
}

/// Counts the leaf nodes (and leaf move kinds) of the legal move tree at
/// `depth` plies from `board`. Depth 0 is the single current position.
pub fn perft(board: &Board, depth: u32) -> Result<PerftCounts, EngineError> {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return Ok(counts);
    }
    walk(board, depth, &mut counts)?;
    Ok(counts)
}

fn walk(board: &Board, depth: u32, counts: &mut PerftCounts) -> Result<(), EngineError> {
    for action in board.current_player().legal_actions() {
        let next = action.apply(board)?;
        if depth == 1 {
            tally_leaf(action, counts);
        } else {
            walk(&next, depth - 1, counts)?;
        }
    }
    Ok(())
}

fn tally_leaf(action: &Action, counts: &mut PerftCounts) {
    counts.nodes += 1;
    if action.is_attack() {
        counts.captures += 1;
    }
    if matches!(action, Action::EnPassant { .. }) {
        counts.en_passant += 1;
    }
    if action.is_castle() {
        counts.castles += 1;
    }
    if matches!(action, Action::Promotion { .. }) {
        counts.promotions += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::fen::{parse_fen, STARTING_FEN};

    const KIWIPETE_FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 0";
    const POSITION_3_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

    fn perft_at(fen: &str, depth: u32) -> PerftCounts {
        let board = parse_fen(fen).expect("reference FEN parses");
        perft(&board, depth).expect("perft runs")
    }

    #[test]
    fn depth_zero_is_one_node() {
        assert_eq!(perft_at(STARTING_FEN, 0).nodes, 1);
    }

    #[test]
    fn starting_position_depth_one() {
        let counts = perft_at(STARTING_FEN, 1);
        assert_eq!(counts.nodes, 20);
        assert_eq!(counts.captures, 0);
        assert_eq!(counts.castles, 0);
    }

    #[test]
    fn starting_position_depth_two() {
        assert_eq!(perft_at(STARTING_FEN, 2).nodes, 400);
    }

    #[test]
    fn starting_position_depth_three() {
        let counts = perft_at(STARTING_FEN, 3);
        assert_eq!(counts.nodes, 8902);
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.en_passant, 0);
        assert_eq!(counts.promotions, 0);
    }

    #[test]
    fn kiwipete_depth_one() {
        let counts = perft_at(KIWIPETE_FEN, 1);
        assert_eq!(counts.nodes, 48);
        assert_eq!(counts.captures, 8);
        assert_eq!(counts.castles, 2);
    }

    #[test]
    fn kiwipete_depth_two() {
        let counts = perft_at(KIWIPETE_FEN, 2);
        assert_eq!(counts.nodes, 2039);
        assert_eq!(counts.captures, 351);
        assert_eq!(counts.en_passant, 1);
        assert_eq!(counts.castles, 91);
    }

    #[test]
    fn rook_endgame_depth_three() {
        assert_eq!(perft_at(POSITION_3_FEN, 1).nodes, 14);
        assert_eq!(perft_at(POSITION_3_FEN, 2).nodes, 191);
        let counts = perft_at(POSITION_3_FEN, 3);
        assert_eq!(counts.nodes, 2812);
        assert_eq!(counts.en_passant, 2);
    }
}
