//! Command outcomes and rejection reasons.

use serde::{Deserialize, Serialize};

use crate::board::BoardError;

/// Why a command was refused. A rejected command leaves the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
pub enum RejectReason {
    #[error("coordinate off the board")]
    OutOfBounds,

    #[error("move must be strictly horizontal or vertical")]
    DiagonalOrNullMove,

    #[error("distance is shorter than the squares travelled")]
    DistanceTooShort,

    #[error("distance does not equal the squares travelled")]
    DistanceMismatch,

    #[error("not enough tokens on the source stack")]
    InsufficientPieces,

    #[error("mover does not control the source stack")]
    NotMoverOnTop,

    #[error("not this player's turn")]
    OutOfTurn,

    #[error("no tokens in reserve")]
    NoReserve,

    #[error("no player with that name")]
    UnknownPlayer,

    #[error("the game is over")]
    GameOver,
}

impl RejectReason {
    /// Stable lowercase tag used by the text protocol.
    pub const fn tag(self) -> &'static str {
        match self {
            RejectReason::OutOfBounds => "out_of_bounds",
            RejectReason::DiagonalOrNullMove => "diagonal_or_null_move",
            RejectReason::DistanceTooShort => "distance_too_short",
            RejectReason::DistanceMismatch => "distance_mismatch",
            RejectReason::InsufficientPieces => "insufficient_pieces",
            RejectReason::NotMoverOnTop => "not_mover_on_top",
            RejectReason::OutOfTurn => "out_of_turn",
            RejectReason::NoReserve => "no_reserve",
            RejectReason::UnknownPlayer => "unknown_player",
            RejectReason::GameOver => "game_over",
        }
    }
}

impl From<BoardError> for RejectReason {
    fn from(e: BoardError) -> Self {
        match e {
            BoardError::OutOfBounds(_) => RejectReason::OutOfBounds,
            BoardError::InsufficientPieces { .. } => RejectReason::InsufficientPieces,
        }
    }
}

/// Result of a move or reserve placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Success,
    /// The named player has just passed the capture threshold.
    Win(String),
    Rejected(RejectReason),
}

impl Outcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }

    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            Outcome::Rejected(r) => Some(*r),
            _ => None,
        }
    }
}
