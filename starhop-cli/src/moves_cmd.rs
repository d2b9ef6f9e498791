//! Moves command - show where a piece can go
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: resolve_origin(), report_moves()
//! - Level 4: formatting utilities

use anyhow::{Context, Result};
use clap::Args;

use starhop_core::{compute_moves, Cell, MoveSet, PieceKind, CENTER_INDEX};

use crate::render;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct MovesArgs {
    /// Piece to show (rook, bishop, queen, king, knight, pawn)
    #[arg(long)]
    pub piece: PieceKind,

    /// Origin cell index (0-24)
    #[arg(long, default_value_t = CENTER_INDEX)]
    pub origin: u8,

    /// Output the move set as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run moves command
pub fn run(args: MovesArgs) -> Result<()> {
    let origin = resolve_origin(args.origin)?;
    let moves = compute_moves(args.piece, origin);

    tracing::info!(
        "{} from {}: {} reachable cells",
        args.piece,
        origin.index(),
        moves.len()
    );

    report_moves(args.piece, origin, &moves, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn resolve_origin(index: u8) -> Result<Cell> {
    Cell::try_from(index).context("Invalid --origin")
}

fn report_moves(piece: PieceKind, origin: Cell, moves: &MoveSet, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(moves)?);
        return Ok(());
    }

    print!("{}", render::board(Some(moves), Some((piece, origin)), None));
    println!();
    if piece.is_pawn() {
        println!("Forward: {}", format_cells(&moves.forward));
        println!("Capture: {}", format_cells(&moves.capture));
    } else {
        println!("Legal:   {}", format_cells(&moves.legal));
    }
    Ok(())
}

// ============================================================================
// LEVEL 4 - FORMATTING
// ============================================================================

fn format_cells(cells: &[Cell]) -> String {
    if cells.is_empty() {
        return "(none)".to_string();
    }
    cells
        .iter()
        .map(|c| c.index().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_origin() {
        assert_eq!(resolve_origin(12).unwrap(), Cell::CENTER);
        assert_eq!(resolve_origin(0).unwrap().index(), 0);
        assert!(resolve_origin(25).is_err());
    }

    #[test]
    fn test_format_cells() {
        assert_eq!(format_cells(&[]), "(none)");
        let pawn = compute_moves(PieceKind::Pawn, Cell::CENTER);
        assert_eq!(format_cells(&pawn.capture), "6, 8");
    }
}
