//! King candidate generation: the eight adjacent squares, minus the offsets
//! that would wrap around a board edge. Castling is not generated here; it
//! needs opponent attack information and lives with the `Player` view.

use crate::board::board::Board;
use crate::board::board_types::{is_valid_tile, Square, EIGHTH_COLUMN, FIRST_COLUMN};
use crate::moves::action::Action;
use crate::pieces::piece::Piece;

const MOVE_OFFSETS: [i16; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

pub fn generate(king: &Piece, board: &Board, out: &mut Vec<Action>) {
    let position = king.position as i16;

    for offset in MOVE_OFFSETS {
        if wraps(king.position, offset) {
            continue;
        }
        let coordinate = position + offset;
        if !is_valid_tile(coordinate) {
            continue;
        }
        let destination = coordinate as Square;

        match board.tile(destination) {
            None => out.push(Action::Simple {
                piece: *king,
                destination,
            }),
            Some(target) => {
                if target.color != king.color {
                    out.push(Action::Capture {
                        piece: *king,
                        destination,
                        captured: *target,
                    });
                }
            }
        }
    }
}

fn wraps(position: Square, offset: i16) -> bool {
    let position = position as usize;
    (FIRST_COLUMN[position] && matches!(offset, -9 | -1 | 7))
        || (EIGHTH_COLUMN[position] && matches!(offset, -7 | 1 | 9))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::board_types::Color;
    use crate::pieces::piece::PieceKind;

    fn board_with(white_king: Piece, extra: &[Piece]) -> Board {
        let mut builder = Board::builder();
        builder.set_piece(white_king);
        builder.set_piece(Piece::placed(PieceKind::King, Color::Black, 4, false));
        for piece in extra {
            builder.set_piece(*piece);
        }
        builder.build().expect("fixture board is valid")
    }

    fn destinations(king: &Piece, board: &Board) -> Vec<Square> {
        let mut out = Vec::new();
        generate(king, board, &mut out);
        let mut found: Vec<Square> = out.iter().filter_map(|m| m.destination()).collect();
        found.sort_unstable();
        found
    }

    #[test]
    fn central_king_steps_to_all_eight_neighbors() {
        let king = Piece::placed(PieceKind::King, Color::White, 35, false);
        let board = board_with(king, &[]);
        assert_eq!(destinations(&king, &board), vec![26, 27, 28, 34, 36, 42, 43, 44]);
    }

    #[test]
    fn a_file_king_loses_the_leftward_offsets() {
        let king = Piece::placed(PieceKind::King, Color::White, 32, false);
        let board = board_with(king, &[]);
        assert_eq!(destinations(&king, &board), vec![24, 25, 33, 40, 41]);
    }

    #[test]
    fn h_file_king_loses_the_rightward_offsets() {
        let king = Piece::placed(PieceKind::King, Color::White, 39, false);
        let board = board_with(king, &[]);
        assert_eq!(destinations(&king, &board), vec![30, 31, 38, 46, 47]);
    }

    #[test]
    fn corner_king_has_three_moves() {
        let king = Piece::placed(PieceKind::King, Color::White, 63, false);
        let board = board_with(king, &[]);
        assert_eq!(destinations(&king, &board), vec![54, 55, 62]);
    }

    #[test]
    fn occupied_neighbors_split_into_captures_and_exclusions() {
        let king = Piece::placed(PieceKind::King, Color::White, 35, false);
        let friend = Piece::placed(PieceKind::Pawn, Color::White, 34, false);
        let enemy = Piece::placed(PieceKind::Pawn, Color::Black, 36, false);
        let board = board_with(king, &[friend, enemy]);
        let mut out = Vec::new();
        generate(&king, &board, &mut out);
        assert_eq!(out.len(), 7);
        assert!(out.contains(&Action::Capture {
            piece: king,
            destination: 36,
            captured: enemy,
        }));
    }
}
