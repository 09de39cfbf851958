//! Bishop candidate generation: the four diagonal ray walks, each stopped by
//! the first occupied square (capture if it is an enemy) or by the board edge.

use crate::board::board::Board;
use crate::board::board_types::{is_valid_tile, Square, EIGHTH_COLUMN, FIRST_COLUMN};
use crate::moves::action::Action;
use crate::pieces::piece::Piece;

const MOVE_VECTORS: [i16; 4] = [-9, -7, 7, 9];

pub fn generate(bishop: &Piece, board: &Board, out: &mut Vec<Action>) {
    for vector in MOVE_VECTORS {
        walk_ray(bishop, board, vector, out);
    }
}

fn walk_ray(bishop: &Piece, board: &Board, vector: i16, out: &mut Vec<Action>) {
    let mut coordinate = bishop.position as i16;
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
                piece: *bishop,
                destination,
            }),
            Some(target) => {
                if target.color != bishop.color {
                    out.push(Action::Capture {
                        piece: *bishop,
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
    (FIRST_COLUMN[position] && matches!(vector, -9 | 7))
        || (EIGHTH_COLUMN[position] && matches!(vector, -7 | 9))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::board_types::Color;
    use crate::pieces::piece::PieceKind;

    fn with_kings(extra: &[Piece]) -> Board {
        let mut builder = Board::builder();
        builder.set_piece(Piece::placed(PieceKind::King, Color::White, 60, false));
        builder.set_piece(Piece::placed(PieceKind::King, Color::Black, 6, false));
        for piece in extra {
            builder.set_piece(*piece);
        }
        builder.build().expect("fixture board is valid")
    }

    #[test]
    fn open_board_bishop_sweeps_both_diagonals() {
        let bishop = Piece::placed(PieceKind::Bishop, Color::White, 35, false);
        let board = with_kings(&[bishop]);
        let mut out = Vec::new();
        generate(&bishop, &board, &mut out);
        let mut found: Vec<Square> = out.iter().filter_map(|m| m.destination()).collect();
        found.sort_unstable();
        assert_eq!(found, vec![7, 8, 14, 17, 21, 26, 28, 42, 44, 49, 53, 56, 62]);
    }

    #[test]
    fn ray_stops_at_a_blocker() {
        let bishop = Piece::placed(PieceKind::Bishop, Color::White, 35, false);
        let friend = Piece::placed(PieceKind::Pawn, Color::White, 44, false);
        let enemy = Piece::placed(PieceKind::Pawn, Color::Black, 26, false);
        let board = with_kings(&[bishop, friend, enemy]);
        let mut out = Vec::new();
        generate(&bishop, &board, &mut out);

        // Down-right ray is fully blocked by the friend; up-left ray ends in
        // a capture on 26 and goes no further.
        assert!(out.iter().all(|m| m.destination() != Some(44)));
        assert!(out.iter().all(|m| m.destination() != Some(53)));
        assert!(out.contains(&Action::Capture {
            piece: bishop,
            destination: 26,
            captured: enemy,
        }));
        assert!(out.iter().all(|m| m.destination() != Some(17)));
    }

    #[test]
    fn a_file_bishop_does_not_wrap() {
        let bishop = Piece::placed(PieceKind::Bishop, Color::Black, 32, false);
        let board = with_kings(&[bishop]);
        let mut out = Vec::new();
        generate(&bishop, &board, &mut out);
        for square in out.iter().filter_map(|m| m.destination()) {
            assert!(!EIGHTH_COLUMN[square as usize], "wrapped to {square}");
        }
    }
}
