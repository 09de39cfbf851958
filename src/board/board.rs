//! Immutable board snapshot and its builder.
//!
//! A `Board` is one complete game state: 64 tiles of occupancy, the active
//! piece lists for both colors, the side to move, and the pawn (if any) that
//! is vulnerable to en passant. Boards are never mutated; every move builds a
//! brand-new board through `BoardBuilder`, which copies forward the untouched
//! pieces and refuses to produce a board without exactly one king per color.

use std::fmt;

use crate::board::board_types::{Color, Square, NUM_TILES, TILES_PER_ROW};
use crate::errors::EngineError;
use crate::pieces::piece::{Piece, PieceKind};
use crate::player::player::Player;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: [Option<Piece>; NUM_TILES],
    white_pieces: Vec<Piece>,
    black_pieces: Vec<Piece>,
    side_to_move: Color,
    en_passant_pawn: Option<Piece>,
}

impl Board {
    pub fn builder() -> BoardBuilder {
        BoardBuilder::new()
    }

    /// The standard 32-piece starting layout with White to move.
    pub fn standard() -> Board {
        let mut builder = Board::builder();

        // Black back rank and pawns (indices 0..16).
        builder.set_piece(Piece::new(PieceKind::Rook, Color::Black, 0));
        builder.set_piece(Piece::new(PieceKind::Knight, Color::Black, 1));
        builder.set_piece(Piece::new(PieceKind::Bishop, Color::Black, 2));
        builder.set_piece(Piece::new(PieceKind::Queen, Color::Black, 3));
        builder.set_piece(Piece::new(PieceKind::King, Color::Black, 4));
        builder.set_piece(Piece::new(PieceKind::Bishop, Color::Black, 5));
        builder.set_piece(Piece::new(PieceKind::Knight, Color::Black, 6));
        builder.set_piece(Piece::new(PieceKind::Rook, Color::Black, 7));
        for sq in 8..16 {
            builder.set_piece(Piece::new(PieceKind::Pawn, Color::Black, sq));
        }

        // White pawns and back rank (indices 48..64).
        for sq in 48..56 {
            builder.set_piece(Piece::new(PieceKind::Pawn, Color::White, sq));
        }
        builder.set_piece(Piece::new(PieceKind::Rook, Color::White, 56));
        builder.set_piece(Piece::new(PieceKind::Knight, Color::White, 57));
        builder.set_piece(Piece::new(PieceKind::Bishop, Color::White, 58));
        builder.set_piece(Piece::new(PieceKind::Queen, Color::White, 59));
        builder.set_piece(Piece::new(PieceKind::King, Color::White, 60));
        builder.set_piece(Piece::new(PieceKind::Bishop, Color::White, 61));
        builder.set_piece(Piece::new(PieceKind::Knight, Color::White, 62));
        builder.set_piece(Piece::new(PieceKind::Rook, Color::White, 63));

        builder.set_move_maker(Color::White);
        builder.build().expect("standard setup always has both kings")
    }

    /// O(1) occupancy query.
    #[inline]
    pub fn tile(&self, square: Square) -> Option<&Piece> {
        self.tiles[square as usize].as_ref()
    }

    pub fn pieces(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white_pieces,
            Color::Black => &self.black_pieces,
        }
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn en_passant_pawn(&self) -> Option<&Piece> {
        self.en_passant_pawn.as_ref()
    }

    /// Per-turn view for the side to move: legal moves, check state, and the
    /// terminal predicates. Recomputed from scratch on every call.
    pub fn current_player(&self) -> Player<'_> {
        Player::new(self, self.side_to_move)
    }

    pub fn player(&self, color: Color) -> Player<'_> {
        Player::new(self, color)
    }

    /// The king of the given color. The builder guarantees it exists.
    pub fn king(&self, color: Color) -> &Piece {
        self.pieces(color)
            .iter()
            .find(|piece| piece.kind.is_king())
            .expect("board invariant: one king per color")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, tile) in self.tiles.iter().enumerate() {
            let glyph = match tile {
                Some(piece) if piece.color.is_white() => piece.kind.symbol(),
                Some(piece) => piece.kind.symbol().to_ascii_lowercase(),
                None => '-',
            };
            write!(f, "{glyph:>3}")?;
            if (index + 1) % TILES_PER_ROW == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Accumulates piece placements and turn state, then validates and freezes
/// them into a `Board`.
#[derive(Debug)]
pub struct BoardBuilder {
    tiles: [Option<Piece>; NUM_TILES],
    next_move: Color,
    en_passant_pawn: Option<Piece>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self {
            tiles: [None; NUM_TILES],
            next_move: Color::White,
            en_passant_pawn: None,
        }
    }

    /// Places a piece on the tile named by its own position field. The last
    /// placement on a tile wins, matching how a move transplants pieces.
    pub fn set_piece(&mut self, piece: Piece) -> &mut Self {
        self.tiles[piece.position as usize] = Some(piece);
        self
    }

    pub fn set_move_maker(&mut self, next_move: Color) -> &mut Self {
        self.next_move = next_move;
        self
    }

    /// Marks the pawn that just double-stepped as capturable en passant.
    pub fn set_en_passant(&mut self, pawn: Piece) -> &mut Self {
        self.en_passant_pawn = Some(pawn);
        self
    }

    pub fn build(&self) -> Result<Board, EngineError> {
        let mut white_pieces = Vec::new();
        let mut black_pieces = Vec::new();
        for piece in self.tiles.iter().flatten() {
            match piece.color {
                Color::White => white_pieces.push(*piece),
                Color::Black => black_pieces.push(*piece),
            }
        }

        for (color, pieces) in [(Color::White, &white_pieces), (Color::Black, &black_pieces)] {
            let kings = pieces.iter().filter(|piece| piece.kind.is_king()).count();
            if kings != 1 {
                return Err(EngineError::MalformedBoard { color, count: kings });
            }
        }

        Ok(Board {
            tiles: self.tiles,
            white_pieces,
            black_pieces,
            side_to_move: self.next_move,
            en_passant_pawn: self.en_passant_pawn,
        })
    }
}
