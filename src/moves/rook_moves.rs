//! Rook candidate generation: rank and file ray walks. Only the horizontal
//! vectors can wrap, so only those carry column exclusions.

use crate::board::board::Board;
use crate::board::board_types::{is_valid_tile, Square, EIGHTH_COLUMN, FIRST_COLUMN};
use crate::moves::action::Action;
use crate::pieces::piece::Piece;

const MOVE_VECTORS: [i16; 4] = [-8, -1, 1, 8];

pub fn generate(rook: &Piece, board: &Board, out: &mut Vec<Action>) {
    for vector in MOVE_VECTORS {
        walk_ray(rook, board, vector, out);
    }
}

fn walk_ray(rook: &Piece, board: &Board, vector: i16, out: &mut Vec<Action>) {
    let mut coordinate = rook.position as i16;
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
                piece: *rook,
                destination,
            }),
            Some(target) => {
                if target.color != rook.color {
                    out.push(Action::Capture {
                        piece: *rook,
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
    (FIRST_COLUMN[position] && vector == -1) || (EIGHTH_COLUMN[position] && vector == 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::board_types::Color;
    use crate::pieces::piece::PieceKind;

    fn with_kings(extra: &[Piece]) -> Board {
        let mut builder = Board::builder();
        builder.set_piece(Piece::placed(PieceKind::King, Color::White, 62, false));
        builder.set_piece(Piece::placed(PieceKind::King, Color::Black, 6, false));
        for piece in extra {
            builder.set_piece(*piece);
        }
        builder.build().expect("fixture board is valid")
    }

    #[test]
    fn open_board_rook_covers_its_rank_and_file() {
        let rook = Piece::placed(PieceKind::Rook, Color::White, 35, false);
        let board = with_kings(&[rook]);
        let mut out = Vec::new();
        generate(&rook, &board, &mut out);
        let mut found: Vec<Square> = out.iter().filter_map(|m| m.destination()).collect();
        found.sort_unstable();
        assert_eq!(
            found,
            vec![3, 11, 19, 27, 32, 33, 34, 36, 37, 38, 39, 43, 51, 59]
        );
    }

    #[test]
    fn horizontal_ray_stops_at_the_file_edge() {
        let rook = Piece::placed(PieceKind::Rook, Color::Black, 24, false);
        let board = with_kings(&[rook]);
        let mut out = Vec::new();
        generate(&rook, &board, &mut out);
        // From a5 the leftward vector must yield nothing; every horizontal
        // destination stays on rank 5.
        for square in out.iter().filter_map(|m| m.destination()) {
            assert!(square < 64);
            assert!(!(square % 8 == 7 && square / 8 != 24 / 8) || (24..32).contains(&square));
        }
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn ray_ends_with_an_enemy_capture() {
        let rook = Piece::placed(PieceKind::Rook, Color::White, 35, false);
        let enemy = Piece::placed(PieceKind::Knight, Color::Black, 11, false);
        let board = with_kings(&[rook, enemy]);
        let mut out = Vec::new();
        generate(&rook, &board, &mut out);
        assert!(out.contains(&Action::Capture {
            piece: rook,
            destination: 11,
            captured: enemy,
        }));
        assert!(out.iter().all(|m| m.destination() != Some(3)));
    }
}
