//! Pawn candidate generation: single push, double jump from the starting
//! rank, the two diagonal captures, en passant, and auto-queen promotion
//! wrapping. Direction is reversed by color; the column tables keep the
//! diagonals from wrapping around the board edge.

use crate::board::board::Board;
use crate::board::board_types::{
    is_valid_tile, Color, Square, EIGHTH_COLUMN, FIRST_COLUMN, SECOND_ROW, SEVENTH_ROW,
};
use crate::moves::action::Action;
use crate::pieces::piece::Piece;

const MOVE_OFFSETS: [i16; 4] = [8, 16, 7, 9];

pub fn generate(pawn: &Piece, board: &Board, out: &mut Vec<Action>) {
    let position = pawn.position as i16;
    let direction = pawn.color.direction();

    for offset in MOVE_OFFSETS {
        let coordinate = position + direction * offset;
        if !is_valid_tile(coordinate) {
            continue;
        }
        let destination = coordinate as Square;

        match offset {
            8 => push_one(pawn, board, destination, out),
            16 => push_two(pawn, board, position, destination, out),
            7 | 9 => diagonal(pawn, board, offset, destination, out),
            _ => {}
        }
    }
}

fn push_one(pawn: &Piece, board: &Board, destination: Square, out: &mut Vec<Action>) {
    if board.tile(destination).is_some() {
        return;
    }
    let push = Action::PawnPush { pawn: *pawn, destination };
    if pawn.color.is_promotion_square(destination) {
        out.push(Action::promotion(push));
    } else {
        out.push(push);
    }
}

fn push_two(pawn: &Piece, board: &Board, position: i16, destination: Square, out: &mut Vec<Action>) {
    let on_start_rank = match pawn.color {
        Color::White => SEVENTH_ROW[position as usize],
        Color::Black => SECOND_ROW[position as usize],
    };
    if !(pawn.is_first_move && on_start_rank) {
        return;
    }
    let passed = (position + pawn.color.direction() * 8) as Square;
    if board.tile(passed).is_none() && board.tile(destination).is_none() {
        out.push(Action::PawnJump { pawn: *pawn, destination });
    }
}

fn diagonal(pawn: &Piece, board: &Board, offset: i16, destination: Square, out: &mut Vec<Action>) {
    let position = pawn.position as usize;
    let white = pawn.color.is_white();

    // Each diagonal wraps on exactly one edge file per color.
    let wraps = match offset {
        7 => (EIGHTH_COLUMN[position] && white) || (FIRST_COLUMN[position] && !white),
        _ => (EIGHTH_COLUMN[position] && !white) || (FIRST_COLUMN[position] && white),
    };
    if wraps {
        return;
    }

    if let Some(target) = board.tile(destination) {
        if target.color != pawn.color {
            let capture = Action::PawnCapture {
                pawn: *pawn,
                destination,
                captured: *target,
            };
            if pawn.color.is_promotion_square(destination) {
                out.push(Action::promotion(capture));
            } else {
                out.push(capture);
            }
        }
    } else if let Some(en_passant_pawn) = board.en_passant_pawn() {
        // The vulnerable pawn sits laterally adjacent to ours; which side
        // depends on the diagonal being considered.
        let adjacent = match offset {
            7 => pawn.position as i16 + pawn.color.opposite_direction(),
            _ => pawn.position as i16 - pawn.color.opposite_direction(),
        };
        if en_passant_pawn.position as i16 == adjacent && en_passant_pawn.color != pawn.color {
            out.push(Action::EnPassant {
                pawn: *pawn,
                destination,
                captured: *en_passant_pawn,
            });
        }
    }
}
