//! Piece kind definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StarhopError;

/// The six teachable chess pieces
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Rook,
    Bishop,
    Queen,
    King,
    Knight,
    Pawn,
}

/// All piece kinds in menu order
pub const PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Knight,
    PieceKind::Pawn,
];

impl PieceKind {
    /// Lowercase identifier
    pub fn id(self) -> &'static str {
        match self {
            PieceKind::Rook => "rook",
            PieceKind::Bishop => "bishop",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
            PieceKind::Knight => "knight",
            PieceKind::Pawn => "pawn",
        }
    }

    /// Capitalised name for hints
    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Rook => "Rook",
            PieceKind::Bishop => "Bishop",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
            PieceKind::Knight => "Knight",
            PieceKind::Pawn => "Pawn",
        }
    }

    /// White chess glyph drawn on the center cell
    pub fn glyph(self) -> char {
        match self {
            PieceKind::Rook => '♖',
            PieceKind::Bishop => '♗',
            PieceKind::Queen => '♕',
            PieceKind::King => '♔',
            PieceKind::Knight => '♘',
            PieceKind::Pawn => '♙',
        }
    }

    /// Pawns split their reach into forward moves and captures
    pub fn is_pawn(self) -> bool {
        self == PieceKind::Pawn
    }
}

impl FromStr for PieceKind {
    type Err = StarhopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        PIECE_KINDS
            .iter()
            .copied()
            .find(|kind| kind.id().eq_ignore_ascii_case(needle))
            .ok_or_else(|| StarhopError::UnknownPiece(s.to_string()))
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
