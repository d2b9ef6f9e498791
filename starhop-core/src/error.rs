//! Error types

use crate::pieces::PieceKind;

/// Errors raised by the engine and the game session
#[derive(Debug, thiserror::Error)]
pub enum StarhopError {
    #[error("Unknown piece: {0}")]
    UnknownPiece(String),

    #[error("Cell index out of range: {0} (expected 0..25)")]
    CellOutOfRange(i64),

    #[error("No piece selected")]
    NoPieceSelected,

    #[error("A round is already in progress")]
    RoundInProgress,

    #[error("No valid moves from center for {piece}")]
    NoValidMoves { piece: PieceKind },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StarhopError>;
