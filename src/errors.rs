//! Error taxonomy for the engine core.
//!
//! Only genuinely unrecoverable conditions are errors. A move request that is
//! merely illegal is reported through `MoveStatus` and leaves the board
//! untouched.

use thiserror::Error;

use crate::board::board_types::Color;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A board was assembled without exactly one king per color. Construction
    /// refuses to produce such a board.
    #[error("malformed board: expected exactly one {color:?} king, found {count}")]
    MalformedBoard { color: Color, count: usize },

    /// An action was applied to a board it was not drawn from: the recorded
    /// moved piece is not where the action says it is.
    #[error("stale action: no matching {piece} on {square}")]
    StaleAction { piece: String, square: String },

    /// The explicit "no move" placeholder was executed. The caller failed to
    /// check for `MoveStatus::IllegalMove` first.
    #[error("cannot execute the null action")]
    NullAction,

    #[error("invalid FEN string: {0}")]
    InvalidFen(String),

    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),
}
