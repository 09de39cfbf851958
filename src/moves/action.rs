//! The closed set of move variants and how each one derives the next board.
//!
//! An `Action` is a pure description of a transition: it records the moved
//! piece (with the square it stood on), the destination, and whatever extra
//! cargo the variant needs (captured piece, castle rook, wrapped inner move).
//! `apply` never mutates the originating board; it assembles a successor
//! through `BoardBuilder`, copying forward every untouched piece. The `Null`
//! variant stands for "no matching move" and refuses to execute.

use std::fmt;

use crate::board::board::{Board, BoardBuilder};
use crate::board::board_types::{position_at_coordinate, Square};
use crate::errors::EngineError;
use crate::pieces::piece::{Piece, PieceKind};

/// Rook bookkeeping shared by the two castle variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastleParts {
    pub king: Piece,
    pub destination: Square,
    pub rook: Piece,
    pub rook_start: Square,
    pub rook_destination: Square,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Quiet move of a non-pawn piece.
    Simple { piece: Piece, destination: Square },
    /// Capture by a non-pawn piece.
    Capture {
        piece: Piece,
        destination: Square,
        captured: Piece,
    },
    /// Pawn single step forward.
    PawnPush { pawn: Piece, destination: Square },
    /// Pawn double step from its starting rank; flags the pawn for en passant.
    PawnJump { pawn: Piece, destination: Square },
    /// Pawn diagonal capture onto an enemy-occupied square.
    PawnCapture {
        pawn: Piece,
        destination: Square,
        captured: Piece,
    },
    /// En passant: the captured pawn is NOT on the destination square.
    EnPassant {
        pawn: Piece,
        destination: Square,
        captured: Piece,
    },
    /// Wraps a push or capture that lands on the back rank; always queens.
    Promotion { inner: Box<Action> },
    KingSideCastle(CastleParts),
    QueenSideCastle(CastleParts),
    /// Placeholder for "no legal move matched". Executing it is a caller bug.
    Null,
}

impl Action {
    pub fn promotion(inner: Action) -> Action {
        Action::Promotion { inner: Box::new(inner) }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Action::Null)
    }

    pub fn is_castle(&self) -> bool {
        matches!(self, Action::KingSideCastle(_) | Action::QueenSideCastle(_))
    }

    pub fn is_attack(&self) -> bool {
        match self {
            Action::Capture { .. } | Action::PawnCapture { .. } | Action::EnPassant { .. } => true,
            Action::Promotion { inner } => inner.is_attack(),
            _ => false,
        }
    }

    pub fn moved_piece(&self) -> Option<&Piece> {
        match self {
            Action::Simple { piece, .. } | Action::Capture { piece, .. } => Some(piece),
            Action::PawnPush { pawn, .. }
            | Action::PawnJump { pawn, .. }
            | Action::PawnCapture { pawn, .. }
            | Action::EnPassant { pawn, .. } => Some(pawn),
            Action::Promotion { inner } => inner.moved_piece(),
            Action::KingSideCastle(parts) | Action::QueenSideCastle(parts) => Some(&parts.king),
            Action::Null => None,
        }
    }

    /// The square the moved piece currently stands on.
    pub fn current_coordinate(&self) -> Option<Square> {
        self.moved_piece().map(|piece| piece.position)
    }

    pub fn destination(&self) -> Option<Square> {
        match self {
            Action::Simple { destination, .. }
            | Action::Capture { destination, .. }
            | Action::PawnPush { destination, .. }
            | Action::PawnJump { destination, .. }
            | Action::PawnCapture { destination, .. }
            | Action::EnPassant { destination, .. } => Some(*destination),
            Action::Promotion { inner } => inner.destination(),
            Action::KingSideCastle(parts) | Action::QueenSideCastle(parts) => {
                Some(parts.destination)
            }
            Action::Null => None,
        }
    }

    pub fn attacked_piece(&self) -> Option<&Piece> {
        match self {
            Action::Capture { captured, .. }
            | Action::PawnCapture { captured, .. }
            | Action::EnPassant { captured, .. } => Some(captured),
            Action::Promotion { inner } => inner.attacked_piece(),
            _ => None,
        }
    }

    /// Derives the successor board. Pure: `board` is left untouched and stays
    /// valid, which is what lets the search backtrack by value.
    ///
    /// Fails loudly when applied to a board the action was not drawn from,
    /// and always when the action is `Null`.
    pub fn apply(&self, board: &Board) -> Result<Board, EngineError> {
        match self {
            Action::Null => Err(EngineError::NullAction),
            Action::Promotion { inner } => apply_promotion(board, inner),
            Action::Simple { piece, destination }
            | Action::PawnPush { pawn: piece, destination } => {
                check_provenance(board, piece)?;
                apply_transplant(board, piece, *destination, None, None)
            }
            Action::PawnJump { pawn, destination } => {
                check_provenance(board, pawn)?;
                let moved_pawn = pawn.moved_to(*destination);
                apply_transplant(board, pawn, *destination, None, Some(moved_pawn))
            }
            Action::Capture { piece, destination, captured }
            | Action::PawnCapture { pawn: piece, destination, captured }
            | Action::EnPassant { pawn: piece, destination, captured } => {
                check_provenance(board, piece)?;
                apply_transplant(board, piece, *destination, Some(captured), None)
            }
            Action::KingSideCastle(parts) | Action::QueenSideCastle(parts) => {
                check_provenance(board, &parts.king)?;
                apply_castle(board, parts)
            }
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Simple { piece, destination } | Action::Capture { piece, destination, .. } => {
                write!(f, "{}{}", piece.kind.symbol(), position_at_coordinate(*destination))
            }
            Action::PawnPush { destination, .. } | Action::PawnJump { destination, .. } => {
                write!(f, "{}", position_at_coordinate(*destination))
            }
            Action::PawnCapture { pawn, destination, .. }
            | Action::EnPassant { pawn, destination, .. } => {
                let from_file = &position_at_coordinate(pawn.position)[0..1];
                write!(f, "{}x{}", from_file, position_at_coordinate(*destination))
            }
            Action::Promotion { inner } => write!(f, "{inner}=Q"),
            Action::KingSideCastle(_) => write!(f, "0-0"),
            Action::QueenSideCastle(_) => write!(f, "0-0-0"),
            Action::Null => write!(f, "(null)"),
        }
    }
}

/// An action is only meaningful against the board it was generated from: the
/// recorded piece must still stand on its square. Whose turn it is does not
/// matter here, so analysis views of the non-moving side can probe their own
/// moves too.
fn check_provenance(board: &Board, moved: &Piece) -> Result<(), EngineError> {
    if board.tile(moved.position) == Some(moved) {
        return Ok(());
    }
    Err(EngineError::StaleAction {
        piece: moved.kind.symbol().to_string(),
        square: position_at_coordinate(moved.position).to_string(),
    })
}

/// Copies every active piece except the listed ones onto a fresh builder.
fn carry_unmoved(builder: &mut BoardBuilder, board: &Board, skip: &[&Piece]) {
    for color in [board.side_to_move(), board.side_to_move().opposite()] {
        for piece in board.pieces(color) {
            if !skip.iter().any(|skipped| *skipped == piece) {
                builder.set_piece(*piece);
            }
        }
    }
}

/// Shared body for every single-piece transplant: quiet moves, captures, pawn
/// pushes and jumps, and en passant (whose captured pawn is off-destination).
fn apply_transplant(
    board: &Board,
    moved: &Piece,
    destination: Square,
    captured: Option<&Piece>,
    en_passant: Option<Piece>,
) -> Result<Board, EngineError> {
    let mut builder = Board::builder();
    match captured {
        Some(captured) => carry_unmoved(&mut builder, board, &[moved, captured]),
        None => carry_unmoved(&mut builder, board, &[moved]),
    }
    builder.set_piece(moved.moved_to(destination));
    if let Some(jumped_pawn) = en_passant {
        builder.set_en_passant(jumped_pawn);
    }
    builder.set_move_maker(moved.color.opposite());
    builder.build()
}

/// Relocates king and rook in one transition, touching nothing else.
fn apply_castle(board: &Board, parts: &CastleParts) -> Result<Board, EngineError> {
    let mut builder = Board::builder();
    carry_unmoved(&mut builder, board, &[&parts.king, &parts.rook]);
    builder.set_piece(parts.king.moved_to(parts.destination));
    builder.set_piece(Piece::placed(
        PieceKind::Rook,
        parts.rook.color,
        parts.rook_destination,
        false,
    ));
    builder.set_move_maker(parts.king.color.opposite());
    builder.build()
}

/// Runs the wrapped push/capture, then swaps the landed pawn for a queen of
/// the same color on the same square. The side to move stays with the
/// opponent the inner apply already handed the turn to.
fn apply_promotion(board: &Board, inner: &Action) -> Result<Board, EngineError> {
    let destination = inner.destination().ok_or(EngineError::NullAction)?;
    let after_inner = inner.apply(board)?;

    let mut builder = Board::builder();
    for color in [after_inner.side_to_move(), after_inner.side_to_move().opposite()] {
        for piece in after_inner.pieces(color) {
            if piece.position != destination {
                builder.set_piece(*piece);
            }
        }
    }
    let pawn_color = after_inner
        .tile(destination)
        .map(|pawn| pawn.color)
        .ok_or(EngineError::NullAction)?;
    builder.set_piece(Piece::placed(PieceKind::Queen, pawn_color, destination, false));
    builder.set_move_maker(after_inner.side_to_move());
    builder.build()
}

/// Resolves a (from, to) square pair against the candidate moves of the side
/// to move. Returns `Action::Null` when nothing matches. Candidates rather
/// than legal moves, so that a move rejected only for exposing the king still
/// resolves and can be reported as such.
pub struct MoveFactory;

impl MoveFactory {
    pub fn create_action(board: &Board, from: Square, to: Square) -> Action {
        for action in board.current_player().candidate_actions() {
            if action.current_coordinate() == Some(from) && action.destination() == Some(to) {
                return action.clone();
            }
        }
        Action::Null
    }
}
