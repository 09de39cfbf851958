//! Queen candidate generation: the rook and bishop vectors combined into one
//! eight-way ray walk.

use crate::board::board::Board;
use crate::board::board_types::{is_valid_tile, Square, EIGHTH_COLUMN, FIRST_COLUMN};
use crate::moves::action::Action;
use crate::pieces::piece::Piece;

const MOVE_VECTORS: [i16; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

pub fn generate(queen: &Piece, board: &Board, out: &mut Vec<Action>) {
    for vector in MOVE_VECTORS {
        walk_ray(queen, board, vector, out);
    }
}

fn walk_ray(queen: &Piece, board: &Board, vector: i16, out: &mut Vec<Action>) {
    let mut coordinate = queen.position as i16;
    loop {
        if wraps(coordinate as Square, vector) {
            break;
        }
        coordinate += vector;
        if !is_valid_tile(coordinate) {
            break;
        }
        let destination = coordinate as Square;
        match board.tile(destination) {
            None => out.push(Action::Simple {
                piece: *queen,
                destination,
            }),
            Some(target) => {
                if target.color != queen.color {
                    out.push(Action::Capture {
                        piece: *queen,
                        destination,
                        captured: *target,
                    });
                }
                break;
            }
        }
    }
}

fn wraps(position: Square, vector: i16) -> bool {
    let position = position as usize;
    (FIRST_COLUMN[position] && matches!(vector, -9 | -1 | 7))
        || (EIGHTH_COLUMN[position] && matches!(vector, -7 | 1 | 9))
}
