//! Per-turn view of one side: candidate moves, castling, the self-check
//! filter, and the terminal predicates.
//!
//! `Player` is recomputed from a board on demand and borrows it. Candidate
//! actions are the raw geometric moves plus any castles; legal actions are the
//! candidates that survive applying them and confirming the mover's own king
//! is not attacked in the successor. Check, checkmate, and stalemate all fall
//! out of those two sets.

use crate::board::board::Board;
use crate::board::board_types::{Color, Square};
use crate::moves::action::{Action, CastleParts, MoveFactory};
use crate::pieces::piece::Piece;

/// Outcome of attempting an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStatus {
    Done,
    IllegalMove,
    LeavesPlayerInCheck,
}

impl MoveStatus {
    #[inline]
    pub fn is_done(self) -> bool {
        matches!(self, MoveStatus::Done)
    }
}

/// The board an attempted action produced (unchanged unless `Done`), the
/// action itself, and what happened.
#[derive(Debug, Clone)]
pub struct ActionTransition {
    pub board: Board,
    pub action: Action,
    pub status: MoveStatus,
}

#[derive(Debug)]
pub struct Player<'a> {
    board: &'a Board,
    color: Color,
    king: Piece,
    candidate_actions: Vec<Action>,
    legal_actions: Vec<Action>,
    in_check: bool,
}

impl<'a> Player<'a> {
    pub fn new(board: &'a Board, color: Color) -> Player<'a> {
        let king = *board.king(color);
        let opponent_raw = raw_candidates(board, color.opposite());
        let in_check = square_attacked(king.position, &opponent_raw);

        let mut candidate_actions = raw_candidates(board, color);
        king_castles(board, &king, in_check, &opponent_raw, &mut candidate_actions);

        let legal_actions = candidate_actions
            .iter()
            .filter(|action| king_safe_after(board, color, action))
            .cloned()
            .collect();

        Player {
            board,
            color,
            king,
            candidate_actions,
            legal_actions,
            in_check,
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn king(&self) -> &Piece {
        &self.king
    }

    /// Raw moves plus castles, before king-safety filtering.
    pub fn candidate_actions(&self) -> &[Action] {
        &self.candidate_actions
    }

    /// The fully legal moves of this side.
    pub fn legal_actions(&self) -> &[Action] {
        &self.legal_actions
    }

    #[inline]
    pub fn is_in_check(&self) -> bool {
        self.in_check
    }

    pub fn is_in_checkmate(&self) -> bool {
        self.in_check && self.legal_actions.is_empty()
    }

    pub fn is_in_stalemate(&self) -> bool {
        !self.in_check && self.legal_actions.is_empty()
    }

    /// Whether this side has already castled, reconstructed from the board:
    /// the king has moved, stands on a castle destination, and a moved rook of
    /// the same color occupies the matching rook destination.
    pub fn is_castled(&self) -> bool {
        if self.king.is_first_move {
            return false;
        }
        let pairs: [(Square, Square); 2] = match self.color {
            Color::White => [(62, 61), (58, 59)],
            Color::Black => [(6, 5), (2, 3)],
        };
        pairs.iter().any(|&(king_square, rook_square)| {
            self.king.position == king_square
                && self.board.tile(rook_square).is_some_and(|rook| {
                    rook.kind.is_rook() && rook.color == self.color && !rook.is_first_move
                })
        })
    }

    /// Attempts an action. Non-candidates and un-executable actions come back
    /// as `IllegalMove`; candidates that expose the mover's king come back as
    /// `LeavesPlayerInCheck`; in both cases the returned board is the
    /// originating one. Only `Done` carries the successor.
    pub fn make_action(&self, action: &Action) -> ActionTransition {
        if !self.candidate_actions.contains(action) {
            return ActionTransition {
                board: self.board.clone(),
                action: action.clone(),
                status: MoveStatus::IllegalMove,
            };
        }
        match action.apply(self.board) {
            Ok(next) => {
                let king_square = next.king(self.color).position;
                let replies = raw_candidates(&next, self.color.opposite());
                if square_attacked(king_square, &replies) {
                    ActionTransition {
                        board: self.board.clone(),
                        action: action.clone(),
                        status: MoveStatus::LeavesPlayerInCheck,
                    }
                } else {
                    ActionTransition {
                        board: next,
                        action: action.clone(),
                        status: MoveStatus::Done,
                    }
                }
            }
            Err(_) => ActionTransition {
                board: self.board.clone(),
                action: action.clone(),
                status: MoveStatus::IllegalMove,
            },
        }
    }
}

/// Resolves a (from, to) pair for the side to move and attempts it.
pub fn apply_chosen_move(board: &Board, from: Square, to: Square) -> ActionTransition {
    let action = MoveFactory::create_action(board, from, to);
    board.current_player().make_action(&action)
}

/// Every geometric candidate for one color: blocking and capture rules only,
/// no king-safety and no castles.
pub fn raw_candidates(board: &Board, color: Color) -> Vec<Action> {
    let mut out = Vec::new();
    for piece in board.pieces(color) {
        out.extend(piece.candidate_moves(board));
    }
    out
}

/// A square counts as attacked when it is the destination of any of the given
/// actions.
fn square_attacked(square: Square, actions: &[Action]) -> bool {
    actions.iter().any(|action| action.destination() == Some(square))
}

/// Survival test for one candidate: apply it and confirm the mover's king is
/// not attacked in the successor. An action that cannot execute at all does
/// not survive either.
fn king_safe_after(board: &Board, color: Color, action: &Action) -> bool {
    match action.apply(board) {
        Ok(next) => {
            let king_square = next.king(color).position;
            !square_attacked(king_square, &raw_candidates(&next, color.opposite()))
        }
        Err(_) => false,
    }
}

/// Appends whichever castles are available: king unmoved and not in check, a
/// matching unmoved rook on its corner, the between squares empty, and the
/// squares the king crosses unattacked.
fn king_castles(
    board: &Board,
    king: &Piece,
    in_check: bool,
    opponent_raw: &[Action],
    out: &mut Vec<Action>,
) {
    if !king.is_first_move || in_check {
        return;
    }
    // (rook start, between squares, unattacked squares, king dest, rook dest)
    let wings: [(Square, &[Square], &[Square], Square, Square); 2] = match king.color {
        Color::White => [
            (63, &[61, 62], &[61, 62], 62, 61),
            (56, &[57, 58, 59], &[58, 59], 58, 59),
        ],
        Color::Black => [
            (7, &[5, 6], &[5, 6], 6, 5),
            (0, &[1, 2, 3], &[2, 3], 2, 3),
        ],
    };
    for (rook_start, between, crossed, destination, rook_destination) in wings {
        let rook = match board.tile(rook_start) {
            Some(piece) if piece.kind.is_rook() && piece.is_first_move && piece.color == king.color => {
                *piece
            }
            _ => continue,
        };
        if between.iter().any(|square| board.tile(*square).is_some()) {
            continue;
        }
        if crossed.iter().any(|square| square_attacked(*square, opponent_raw)) {
            continue;
        }
        let parts = CastleParts {
            king: *king,
            destination,
            rook,
            rook_start,
            rook_destination,
        };
        if rook_start == 63 || rook_start == 7 {
            out.push(Action::KingSideCastle(parts));
        } else {
            out.push(Action::QueenSideCastle(parts));
        }
    }
}
