//! STARHOP Core - Move engine and star game
//!
//! This crate provides the core logic of the STARHOP piece-movement game:
//! - Board geometry (5x5 grid with flat cell indices and regions)
//! - Piece kinds and move generation from the center
//! - Target selection with recency and region weighting
//! - Game session state (rounds, taps, stickers)

pub mod board;
pub mod pieces;
pub mod moves;
pub mod target;
pub mod config;
pub mod session;
pub mod error;

// Re-exports for convenient access
pub use board::{Cell, Region, BOARD_SIZE, CELL_COUNT, CENTER_INDEX};
pub use pieces::{PieceKind, PIECE_KINDS};
pub use moves::{compute_moves, compute_moves_from_center, Highlight, MoveSet};
pub use target::{select_target, SelectionHistory, SelectorConfig, TargetSelector};
pub use config::SessionConfig;
pub use session::{Effect, GameSession, Sticker, TapOutcome, Tone};
pub use error::StarhopError;
