//! Knight candidate generation. Each of the eight jump offsets wraps around
//! the board edge from specific files, so every offset carries its own column
//! exclusion before the destination is trusted.

use crate::board::board::Board;
use crate::board::board_types::{
    is_valid_tile, Square, EIGHTH_COLUMN, FIRST_COLUMN, SECOND_COLUMN, SEVENTH_COLUMN,
};
use crate::moves::action::Action;
use crate::pieces::piece::Piece;

const MOVE_OFFSETS: [i16; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

pub fn generate(knight: &Piece, board: &Board, out: &mut Vec<Action>) {
    let position = knight.position as i16;

    for offset in MOVE_OFFSETS {
        if wraps(knight.position, offset) {
            continue;
        }
        let coordinate = position + offset;
        if !is_valid_tile(coordinate) {
            continue;
        }
        let destination = coordinate as Square;

        match board.tile(destination) {
            None => out.push(Action::Simple {
                piece: *knight,
                destination,
            }),
            Some(target) => {
                if target.color != knight.color {
                    out.push(Action::Capture {
                        piece: *knight,
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
    (FIRST_COLUMN[position] && matches!(offset, -17 | -10 | 6 | 15))
        || (SECOND_COLUMN[position] && matches!(offset, -10 | 6))
        || (SEVENTH_COLUMN[position] && matches!(offset, -6 | 10))
        || (EIGHTH_COLUMN[position] && matches!(offset, -15 | -6 | 10 | 17))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::board_types::Color;
    use crate::pieces::piece::PieceKind;

    fn with_kings(extra: &[Piece]) -> Board {
        let mut builder = Board::builder();
        builder.set_piece(Piece::placed(PieceKind::King, Color::White, 60, false));
        builder.set_piece(Piece::placed(PieceKind::King, Color::Black, 4, false));
        for piece in extra {
            builder.set_piece(*piece);
        }
        builder.build().expect("fixture board is valid")
    }

    fn destinations(knight: &Piece, board: &Board) -> Vec<Square> {
        let mut out = Vec::new();
        generate(knight, board, &mut out);
        out.iter().filter_map(|m| m.destination()).collect()
    }

    #[test]
    fn central_knight_reaches_all_eight_squares() {
        let knight = Piece::placed(PieceKind::Knight, Color::White, 35, false);
        let board = with_kings(&[knight]);
        let mut found = destinations(&knight, &board);
        found.sort_unstable();
        assert_eq!(found, vec![18, 20, 25, 29, 41, 45, 50, 52]);
    }

    #[test]
    fn corner_knight_has_two_moves() {
        let knight = Piece::placed(PieceKind::Knight, Color::White, 56, false);
        let board = with_kings(&[knight]);
        let mut found = destinations(&knight, &board);
        found.sort_unstable();
        assert_eq!(found, vec![41, 50]);
    }

    #[test]
    fn a_file_knight_never_wraps_to_the_h_file() {
        let knight = Piece::placed(PieceKind::Knight, Color::Black, 24, false);
        let board = with_kings(&[knight]);
        let found = destinations(&knight, &board);
        assert_eq!(found.len(), 4);
        for square in found {
            assert!(!EIGHTH_COLUMN[square as usize]);
            assert!(!SEVENTH_COLUMN[square as usize]);
        }
    }

    #[test]
    fn friendly_blockers_exclude_captures_of_enemies_do_not() {
        let knight = Piece::placed(PieceKind::Knight, Color::White, 35, false);
        let friend = Piece::placed(PieceKind::Pawn, Color::White, 18, false);
        let enemy = Piece::placed(PieceKind::Pawn, Color::Black, 20, false);
        let board = with_kings(&[knight, friend, enemy]);
        let mut out = Vec::new();
        generate(&knight, &board, &mut out);
        assert_eq!(out.len(), 7);
        assert!(out.contains(&Action::Capture {
            piece: knight,
            destination: 20,
            captured: enemy,
        }));
        assert!(out.iter().all(|m| m.destination() != Some(18)));
    }
}
