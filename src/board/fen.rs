//! FEN parsing and generation.
//!
//! Parsing maps the castling-rights field onto king/rook first-move flags and
//! the en passant target square onto the vulnerable pawn behind it. Pawns
//! count as unmoved exactly when they stand on their starting rank; other
//! pieces carry no usable first-move information in FEN and parse as moved.
//! The halfmove and fullmove clocks are accepted but not tracked.

use crate::board::board::Board;
use crate::board::board_types::{
    coordinate_at_position, position_at_coordinate, Color, Square, SECOND_ROW, SEVENTH_ROW,
    TILES_PER_ROW,
};
use crate::errors::EngineError;
use crate::pieces::piece::{Piece, PieceKind};

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// (castling symbol, king home, rook home, color) for each right.
const CASTLING_RIGHTS: [(char, Square, Square, Color); 4] = [
    ('K', 60, 63, Color::White),
    ('Q', 60, 56, Color::White),
    ('k', 4, 7, Color::Black),
    ('q', 4, 0, Color::Black),
];

pub fn parse_fen(fen: &str) -> Result<Board, EngineError> {
    let mut fields = fen.split_whitespace();
    let placement = fields
        .next()
        .ok_or_else(|| invalid(fen, "missing piece placement"))?;
    let side = fields
        .next()
        .ok_or_else(|| invalid(fen, "missing side to move"))?;
    let castling = fields.next().unwrap_or("-");
    let en_passant = fields.next().unwrap_or("-");

    let mut pieces = parse_placement(fen, placement)?;
    apply_castling_rights(fen, castling, &mut pieces)?;

    let mut builder = Board::builder();
    for piece in &pieces {
        builder.set_piece(*piece);
    }

    match side {
        "w" => builder.set_move_maker(Color::White),
        "b" => builder.set_move_maker(Color::Black),
        other => return Err(invalid(fen, &format!("bad side to move '{other}'"))),
    };

    if en_passant != "-" {
        let target = coordinate_at_position(en_passant)
            .ok_or_else(|| invalid(fen, &format!("bad en passant square '{en_passant}'")))?;
        // The vulnerable pawn stands one rank past the target square.
        let (pawn_square, color) = match target {
            40..=47 => (target - TILES_PER_ROW as Square, Color::White),
            16..=23 => (target + TILES_PER_ROW as Square, Color::Black),
            _ => return Err(invalid(fen, &format!("en passant square '{en_passant}' off ranks 3/6"))),
        };
        let pawn = pieces
            .iter()
            .find(|piece| {
                piece.position == pawn_square
                    && piece.kind == PieceKind::Pawn
                    && piece.color == color
            })
            .copied()
            .ok_or_else(|| invalid(fen, "en passant square names no pawn"))?;
        builder.set_en_passant(pawn);
    }

    builder.build()
}

pub fn generate_fen(board: &Board) -> String {
    let mut out = String::new();

    for rank in 0..TILES_PER_ROW {
        let mut empties = 0;
        for file in 0..TILES_PER_ROW {
            let square = (rank * TILES_PER_ROW + file) as Square;
            match board.tile(square) {
                None => empties += 1,
                Some(piece) => {
                    if empties > 0 {
                        out.push_str(&empties.to_string());
                        empties = 0;
                    }
                    let symbol = piece.kind.symbol();
                    out.push(if piece.color.is_white() {
                        symbol
                    } else {
                        symbol.to_ascii_lowercase()
                    });
                }
            }
        }
        if empties > 0 {
            out.push_str(&empties.to_string());
        }
        if rank + 1 < TILES_PER_ROW {
            out.push('/');
        }
    }

    out.push(' ');
    out.push(if board.side_to_move().is_white() { 'w' } else { 'b' });

    out.push(' ');
    let mut rights = String::new();
    for (symbol, king_home, rook_home, color) in CASTLING_RIGHTS {
        if unmoved(board, king_home, PieceKind::King, color)
            && unmoved(board, rook_home, PieceKind::Rook, color)
        {
            rights.push(symbol);
        }
    }
    out.push_str(if rights.is_empty() { "-" } else { &rights });

    out.push(' ');
    match board.en_passant_pawn() {
        Some(pawn) => {
            let target = pawn.position as i16 - pawn.color.direction() * TILES_PER_ROW as i16;
            out.push_str(position_at_coordinate(target as Square));
        }
        None => out.push('-'),
    }

    out.push_str(" 0 1");
    out
}

fn parse_placement(fen: &str, placement: &str) -> Result<Vec<Piece>, EngineError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != TILES_PER_ROW {
        return Err(invalid(fen, &format!("{} ranks in placement", ranks.len())));
    }

    let mut pieces = Vec::new();
    for (rank_index, rank) in ranks.iter().enumerate() {
        let mut file = 0;
        for symbol in rank.chars() {
            if let Some(skip) = symbol.to_digit(10) {
                file += skip as usize;
                continue;
            }
            if file >= TILES_PER_ROW {
                return Err(invalid(fen, &format!("rank '{rank}' overflows the board")));
            }
            let square = (rank_index * TILES_PER_ROW + file) as Square;
            let color = if symbol.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let kind = match symbol.to_ascii_uppercase() {
                'P' => PieceKind::Pawn,
                'N' => PieceKind::Knight,
                'B' => PieceKind::Bishop,
                'R' => PieceKind::Rook,
                'Q' => PieceKind::Queen,
                'K' => PieceKind::King,
                other => return Err(invalid(fen, &format!("unknown piece '{other}'"))),
            };
            let is_first_move = kind == PieceKind::Pawn && pawn_unmoved(color, square);
            pieces.push(Piece::placed(kind, color, square, is_first_move));
            file += 1;
        }
        if file != TILES_PER_ROW {
            return Err(invalid(fen, &format!("rank '{rank}' does not fill the board")));
        }
    }
    Ok(pieces)
}

fn apply_castling_rights(
    fen: &str,
    castling: &str,
    pieces: &mut [Piece],
) -> Result<(), EngineError> {
    if castling == "-" {
        return Ok(());
    }
    for right in castling.chars() {
        let (_, king_home, rook_home, color) = CASTLING_RIGHTS
            .into_iter()
            .find(|(symbol, _, _, _)| *symbol == right)
            .ok_or_else(|| invalid(fen, &format!("unknown castling right '{right}'")))?;
        mark_unmoved(fen, pieces, king_home, PieceKind::King, color)?;
        mark_unmoved(fen, pieces, rook_home, PieceKind::Rook, color)?;
    }
    Ok(())
}

fn mark_unmoved(
    fen: &str,
    pieces: &mut [Piece],
    square: Square,
    kind: PieceKind,
    color: Color,
) -> Result<(), EngineError> {
    let piece = pieces
        .iter_mut()
        .find(|piece| piece.position == square && piece.kind == kind && piece.color == color)
        .ok_or_else(|| {
            invalid(
                fen,
                &format!("castling right without a home {kind:?} on {}", position_at_coordinate(square)),
            )
        })?;
    piece.is_first_move = true;
    Ok(())
}

fn pawn_unmoved(color: Color, square: Square) -> bool {
    match color {
        Color::White => SEVENTH_ROW[square as usize],
        Color::Black => SECOND_ROW[square as usize],
    }
}

fn unmoved(board: &Board, square: Square, kind: PieceKind, color: Color) -> bool {
    board
        .tile(square)
        .is_some_and(|piece| piece.kind == kind && piece.color == color && piece.is_first_move)
}

fn invalid(fen: &str, reason: &str) -> EngineError {
    EngineError::InvalidFen(format!("{reason} in '{fen}'"))
}
