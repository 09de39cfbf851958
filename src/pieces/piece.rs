//! Piece value type and the per-kind dispatch into the candidate-move
//! generators.
//!
//! A `Piece` is a plain value: equality covers kind, color, square, and the
//! first-move flag, so two pieces with identical fields are interchangeable.
//! Moving a piece produces a fresh value with the flag cleared rather than
//! mutating anything.

use crate::board::board::Board;
use crate::board::board_types::{Color, Square};
use crate::moves::action::Action;
use crate::moves::{
    bishop_moves, king_moves, knight_moves, pawn_moves, queen_moves, rook_moves,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Material value used by the static evaluator.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 10_000,
        }
    }

    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self, PieceKind::King)
    }

    #[inline]
    pub const fn is_rook(self) -> bool {
        matches!(self, PieceKind::Rook)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub position: Square,
    pub is_first_move: bool,
}

impl Piece {
    /// A freshly placed piece that has not moved yet.
    pub const fn new(kind: PieceKind, color: Color, position: Square) -> Self {
        Self {
            kind,
            color,
            position,
            is_first_move: true,
        }
    }

    pub const fn placed(kind: PieceKind, color: Color, position: Square, is_first_move: bool) -> Self {
        Self {
            kind,
            color,
            position,
            is_first_move,
        }
    }

    /// The piece as it stands after completing a move to `destination`.
    pub const fn moved_to(self, destination: Square) -> Self {
        Self {
            kind: self.kind,
            color: self.color,
            position: destination,
            is_first_move: false,
        }
    }

    #[inline]
    pub const fn value(&self) -> i32 {
        self.kind.value()
    }

    /// Candidate destinations by geometry, blocking, and capture only.
    /// King-safety filtering happens in the `Player` view, and castling is
    /// generated there as well since it needs opponent attack information.
    pub fn candidate_moves(&self, board: &Board) -> Vec<Action> {
        let mut out = Vec::new();
        match self.kind {
            PieceKind::Pawn => pawn_moves::generate(self, board, &mut out),
            PieceKind::Knight => knight_moves::generate(self, board, &mut out),
            PieceKind::Bishop => bishop_moves::generate(self, board, &mut out),
            PieceKind::Rook => rook_moves::generate(self, board, &mut out),
            PieceKind::Queen => queen_moves::generate(self, board, &mut out),
            PieceKind::King => king_moves::generate(self, board, &mut out),
        }
        out
    }
}
