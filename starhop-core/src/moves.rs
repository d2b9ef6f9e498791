//! Move generation on the 5x5 board
//!
//! Pieces move on an empty board: there is no blocking, no check and no
//! turn order. The result only says which cells a piece could reach from
//! its origin, split into the highlight categories the board shows.

use serde::{Deserialize, Serialize};

use crate::board::{Cell, BOARD_SIZE};
use crate::pieces::PieceKind;

// ============================================================================
// CONSTANTS
// ============================================================================

/// King steps (Chebyshev distance 1)
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Knight L-jumps
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2),  (1, 2),  (2, -1),  (2, 1),
];

/// Pawns advance toward row 0
const PAWN_FORWARD: i8 = -1;

// ============================================================================
// MOVE SET
// ============================================================================

/// Highlight category of a reachable cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    /// Any non-pawn destination
    Legal,
    /// Pawn forward step
    Move,
    /// Pawn diagonal capture
    Capture,
}

/// Reachable cells of one piece, by category
///
/// Non-pawn pieces only fill `legal`; pawns only fill `forward` and
/// `capture`. No cell appears twice and the origin is never included.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSet {
    pub legal: Vec<Cell>,
    #[serde(rename = "move")]
    pub forward: Vec<Cell>,
    #[serde(rename = "cap")]
    pub capture: Vec<Cell>,
}

impl MoveSet {
    /// Flatten into the target pool: pawn forward then captures, else legal
    pub fn candidates(&self) -> Vec<Cell> {
        self.legal
            .iter()
            .chain(&self.forward)
            .chain(&self.capture)
            .copied()
            .collect()
    }

    /// Which highlight a cell gets, if any
    pub fn category_of(&self, cell: Cell) -> Option<Highlight> {
        if self.legal.contains(&cell) {
            Some(Highlight::Legal)
        } else if self.forward.contains(&cell) {
            Some(Highlight::Move)
        } else if self.capture.contains(&cell) {
            Some(Highlight::Capture)
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.legal.len() + self.forward.len() + self.capture.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// GENERATION
// ============================================================================

/// Compute every cell `piece` can reach from `origin`
pub fn compute_moves(piece: PieceKind, origin: Cell) -> MoveSet {
    let mut moves = MoveSet::default();

    match piece {
        PieceKind::Rook => generate_rook_moves(origin, &mut moves.legal),
        PieceKind::Bishop => generate_bishop_moves(origin, &mut moves.legal),
        PieceKind::Queen => {
            generate_rook_moves(origin, &mut moves.legal);
            generate_bishop_moves(origin, &mut moves.legal);
        }
        PieceKind::King => generate_offset_moves(origin, &KING_OFFSETS, &mut moves.legal),
        PieceKind::Knight => generate_offset_moves(origin, &KNIGHT_OFFSETS, &mut moves.legal),
        PieceKind::Pawn => generate_pawn_moves(origin, &mut moves),
    }

    moves
}

/// Compute moves from the fixed center origin
pub fn compute_moves_from_center(piece: PieceKind) -> MoveSet {
    compute_moves(piece, Cell::CENTER)
}

fn generate_rook_moves(origin: Cell, out: &mut Vec<Cell>) {
    let (row, col) = (origin.row(), origin.col());
    for i in 0..BOARD_SIZE as i8 {
        if i != col {
            out.extend(Cell::from_row_col(row, i));
        }
        if i != row {
            out.extend(Cell::from_row_col(i, col));
        }
    }
}

fn generate_bishop_moves(origin: Cell, out: &mut Vec<Cell>) {
    let (row, col) = (origin.row(), origin.col());
    out.extend(Cell::all().filter(|cell| {
        *cell != origin && (cell.row() - row).abs() == (cell.col() - col).abs()
    }));
}

fn generate_offset_moves(origin: Cell, offsets: &[(i8, i8)], out: &mut Vec<Cell>) {
    out.extend(offsets.iter().filter_map(|&(dr, dc)| origin.offset(dr, dc)));
}

fn generate_pawn_moves(origin: Cell, moves: &mut MoveSet) {
    // No forward row means no captures either
    let Some(ahead) = origin.offset(PAWN_FORWARD, 0) else {
        return;
    };
    moves.forward.push(ahead);
    moves.capture.extend(ahead.offset(0, -1));
    moves.capture.extend(ahead.offset(0, 1));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::PIECE_KINDS;
    use std::collections::HashSet;

    fn cell(index: u8) -> Cell {
        Cell::new(index).unwrap()
    }

    fn indices(cells: &[Cell]) -> Vec<u8> {
        cells.iter().map(|c| c.index()).collect()
    }

    #[test]
    fn test_center_cardinalities() {
        let expected = [
            (PieceKind::Rook, 8),
            (PieceKind::Bishop, 8),
            (PieceKind::Queen, 16),
            (PieceKind::King, 8),
            (PieceKind::Knight, 8),
        ];
        for (piece, count) in expected {
            let moves = compute_moves_from_center(piece);
            assert_eq!(moves.legal.len(), count, "{} legal count", piece);
            assert!(moves.forward.is_empty() && moves.capture.is_empty());
        }

        let pawn = compute_moves_from_center(PieceKind::Pawn);
        assert!(pawn.legal.is_empty());
        assert_eq!(pawn.forward.len(), 1);
        assert_eq!(pawn.capture.len(), 2);
    }

    #[test]
    fn test_pawn_from_center() {
        let pawn = compute_moves_from_center(PieceKind::Pawn);
        assert_eq!(indices(&pawn.forward), vec![7]);
        assert_eq!(indices(&pawn.capture), vec![6, 8]);
        assert_eq!(indices(&pawn.candidates()), vec![7, 6, 8]);
        assert_eq!(pawn.category_of(cell(7)), Some(Highlight::Move));
        assert_eq!(pawn.category_of(cell(8)), Some(Highlight::Capture));
        assert_eq!(pawn.category_of(cell(12)), None);
    }

    #[test]
    fn test_pawn_edges() {
        // Top row: nowhere to go
        assert!(compute_moves(PieceKind::Pawn, cell(2)).is_empty());
        // Left column: one capture only
        let pawn = compute_moves(PieceKind::Pawn, cell(10));
        assert_eq!(indices(&pawn.forward), vec![5]);
        assert_eq!(indices(&pawn.capture), vec![6]);
    }

    #[test]
    fn test_rook_exact_cells() {
        let mut rook = indices(&compute_moves_from_center(PieceKind::Rook).legal);
        rook.sort_unstable();
        assert_eq!(rook, vec![2, 7, 10, 11, 13, 14, 17, 22]);
    }

    #[test]
    fn test_corner_origins_are_clipped() {
        assert_eq!(compute_moves(PieceKind::King, cell(0)).legal.len(), 3);
        assert_eq!(compute_moves(PieceKind::Knight, cell(0)).legal.len(), 2);
        assert_eq!(compute_moves(PieceKind::Bishop, cell(0)).legal.len(), 4);
        assert_eq!(compute_moves(PieceKind::Rook, cell(24)).legal.len(), 8);
    }

    #[test]
    fn test_bounds_and_origin_excluded_everywhere() {
        for origin in Cell::all() {
            for piece in PIECE_KINDS {
                let moves = compute_moves(piece, origin);
                let all = moves.candidates();
                assert!(!all.contains(&origin), "{} at {} includes origin", piece, origin.index());
                assert!(all.iter().all(|c| c.index() < 25));

                let unique: HashSet<_> = all.iter().collect();
                assert_eq!(unique.len(), all.len(), "{} at {} has duplicates", piece, origin.index());

                if piece.is_pawn() {
                    assert!(moves.legal.is_empty());
                } else {
                    assert!(moves.forward.is_empty() && moves.capture.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_queen_is_rook_plus_bishop() {
        for origin in Cell::all() {
            let queen: HashSet<_> = compute_moves(PieceKind::Queen, origin).legal.into_iter().collect();
            let rook = compute_moves(PieceKind::Rook, origin).legal;
            let bishop = compute_moves(PieceKind::Bishop, origin).legal;
            let union: HashSet<_> = rook.iter().chain(&bishop).copied().collect();
            assert_eq!(queen, union);
            assert_eq!(queen.len(), rook.len() + bishop.len());
        }
    }

    #[test]
    fn test_compute_moves_is_pure() {
        for piece in PIECE_KINDS {
            assert_eq!(compute_moves_from_center(piece), compute_moves_from_center(piece));
        }
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(compute_moves_from_center(PieceKind::Pawn)).unwrap();
        assert_eq!(json, serde_json::json!({ "legal": [], "move": [7], "cap": [6, 8] }));
    }
}
