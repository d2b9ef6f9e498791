//! Text rendering of the board and of session effects
//!
//! Legend: `o` legal move, `^` pawn step, `x` pawn capture, `*` star,
//! the piece glyph on its origin, `.` empty.

use starhop_core::{Cell, Effect, Highlight, MoveSet, PieceKind, BOARD_SIZE};

/// Draw the 5x5 board with optional highlights, piece and star
pub fn board(moves: Option<&MoveSet>, piece: Option<(PieceKind, Cell)>, star: Option<Cell>) -> String {
    let mut out = String::from("    1 2 3 4 5\n");
    for row in 0..BOARD_SIZE as i8 {
        out.push_str(&format!("  {} ", row + 1));
        for col in 0..BOARD_SIZE as i8 {
            let Some(cell) = Cell::from_row_col(row, col) else {
                continue;
            };
            out.push(symbol(cell, moves, piece, star));
            if col + 1 < BOARD_SIZE as i8 {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out
}

fn symbol(cell: Cell, moves: Option<&MoveSet>, piece: Option<(PieceKind, Cell)>, star: Option<Cell>) -> char {
    if star == Some(cell) {
        return '*';
    }
    if let Some((kind, origin)) = piece {
        if origin == cell {
            return kind.glyph();
        }
    }
    match moves.and_then(|m| m.category_of(cell)) {
        Some(Highlight::Legal) => 'o',
        Some(Highlight::Move) => '^',
        Some(Highlight::Capture) => 'x',
        None => '.',
    }
}

/// One line per effect, `None` for effects with no text form
pub fn effect(effect: &Effect) -> Option<String> {
    match effect {
        Effect::Tone(tone) => Some(format!("♪ {} Hz", tone.frequency_hz)),
        Effect::Vibrate(pattern) => Some(format!("~ buzz {:?}", pattern)),
        Effect::Confetti { .. } => Some("🎉 🎊 🎉".to_string()),
        Effect::StickerAwarded(sticker) => Some(format!("New sticker: {}", sticker.emoji)),
        Effect::GoalReached => Some("🏆 You found all the stars! Type `again` to play again.".to_string()),
        Effect::Shake => Some("Oops! Try again.".to_string()),
        Effect::Hint(text) => Some(text.clone()),
        Effect::StarPlaced { .. } | Effect::ClearConfetti => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starhop_core::compute_moves_from_center;

    #[test]
    fn test_pawn_board() {
        let moves = compute_moves_from_center(PieceKind::Pawn);
        let text = board(Some(&moves), Some((PieceKind::Pawn, Cell::CENTER)), None);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "    1 2 3 4 5");
        assert_eq!(lines[2], "  2 . x ^ x .");
        assert_eq!(lines[3], "  3 . . ♙ . .");
    }

    #[test]
    fn test_star_drawn_over_highlight() {
        let moves = compute_moves_from_center(PieceKind::Rook);
        let star = Cell::new(2).unwrap();
        let text = board(Some(&moves), None, Some(star));
        assert_eq!(text.lines().nth(1), Some("  1 . . * . ."));
    }

    #[test]
    fn test_effect_text() {
        assert_eq!(effect(&Effect::ClearConfetti), None);
        assert_eq!(effect(&Effect::Hint("hi".into())), Some("hi".to_string()));
    }
}
