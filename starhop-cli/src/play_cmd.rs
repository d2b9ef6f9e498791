//! Play command - interactive "find the star" game on the terminal
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: create_session(), game_loop()
//! - Level 3: apply_command()
//! - Level 4: input parsing and printing

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use starhop_core::{Cell, Effect, GameSession, PieceKind, SessionConfig, StarhopError};

use crate::render;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Piece selected at start
    #[arg(long)]
    pub piece: Option<PieceKind>,

    /// Session config JSON file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Start with sound off
    #[arg(long)]
    pub mute: bool,
}

/// One line of player input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Select(PieceKind),
    Play,
    ToggleMoves,
    ToggleSound,
    Tap(Cell),
    Again,
    Reset,
    Help,
    Quit,
}

const HELP: &str = "\
Commands:
  rook | bishop | queen | king | knight | pawn   choose a piece
  play                                           place a star
  <row> <col>  (1-5 each) or <index> (0-24)      tap a cell
  moves                                          show/hide moves
  sound                                          sound on/off
  again                                          new sticker set
  reset                                          start over
  quit";

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
pub fn run(args: PlayArgs, seed: Option<u64>) -> Result<()> {
    let mut session = create_session(&args, seed)?;

    tracing::info!("Starting interactive session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    game_loop(&mut session, stdin.lock(), stdout.lock())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn create_session(args: &PlayArgs, seed: Option<u64>) -> Result<GameSession> {
    let mut config = match &args.config {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(piece) = args.piece {
        config = config.with_default_piece(Some(piece));
    }
    if args.mute {
        config = config.with_sound(false);
    }
    Ok(GameSession::new(config)?)
}

fn game_loop(session: &mut GameSession, input: impl BufRead, mut out: impl Write) -> Result<()> {
    writeln!(out, "{}", HELP)?;
    draw(session, &mut out)?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Some(command) => command,
            None => {
                writeln!(out, "Unknown command: {} (type `help`)", line.trim())?;
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }
        apply_command(session, command, &mut out)?;
    }

    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn apply_command(session: &mut GameSession, command: Command, out: &mut impl Write) -> Result<()> {
    let effects = match command {
        Command::Select(piece) => session.select_piece(piece),
        Command::Play => match session.play() {
            Ok((_, effects)) => effects,
            Err(StarhopError::NoValidMoves { .. }) => {
                vec![Effect::Hint("No valid moves from center!".to_string())]
            }
            Err(e) => vec![Effect::Hint(e.to_string())],
        },
        Command::ToggleMoves => {
            let on = session.toggle_show_moves();
            vec![Effect::Hint(format!("Moves {}", if on { "shown" } else { "hidden" }))]
        }
        Command::ToggleSound => {
            let on = session.toggle_sound();
            vec![Effect::Hint(format!("Sound: {}", if on { "On" } else { "Off" }))]
        }
        Command::Tap(cell) => session.tap(cell).1,
        Command::Again => session.play_again(),
        Command::Reset => session.reset(),
        Command::Help => vec![Effect::Hint(HELP.to_string())],
        Command::Quit => Vec::new(),
    };

    for effect in &effects {
        if let Some(text) = render::effect(effect) {
            writeln!(out, "{}", text)?;
        }
    }
    draw(session, out)
}

// ============================================================================
// LEVEL 4 - INPUT / OUTPUT
// ============================================================================

fn parse_command(line: &str) -> Option<Command> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        ["play" | "p"] => Some(Command::Play),
        ["moves" | "m"] => Some(Command::ToggleMoves),
        ["sound"] => Some(Command::ToggleSound),
        ["again"] => Some(Command::Again),
        ["reset"] => Some(Command::Reset),
        ["help" | "?"] => Some(Command::Help),
        ["quit" | "q" | "exit"] => Some(Command::Quit),
        [index] => match index.parse::<u8>() {
            Ok(i) => Cell::new(i).map(Command::Tap),
            Err(_) => index.parse::<PieceKind>().ok().map(Command::Select),
        },
        [row, col] => {
            let row: i8 = row.parse().ok()?;
            let col: i8 = col.parse().ok()?;
            Cell::from_row_col(row.checked_sub(1)?, col.checked_sub(1)?).map(Command::Tap)
        }
        _ => None,
    }
}

fn draw(session: &GameSession, out: &mut impl Write) -> Result<()> {
    let moves = session.highlights();
    let piece = session.selected_piece().map(|p| (p, session.config().origin));
    writeln!(out)?;
    write!(out, "{}", render::board(moves.as_ref(), piece, session.star()))?;
    writeln!(out, "Stickers: {}", format_stickers(session))?;
    Ok(())
}

fn format_stickers(session: &GameSession) -> String {
    let stickers: Vec<&str> = session.stickers().iter().map(|s| s.emoji).collect();
    format!("{} / {} {}", stickers.len(), session.config().sticker_goal, stickers.join(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameSession {
        GameSession::new(SessionConfig::default().with_seed(5).with_sound(false)).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("play"), Some(Command::Play));
        assert_eq!(parse_command(" Knight "), Some(Command::Select(PieceKind::Knight)));
        assert_eq!(parse_command("7"), Cell::new(7).map(Command::Tap));
        assert_eq!(parse_command("2 3"), Cell::new(7).map(Command::Tap));
        assert_eq!(parse_command("6 1"), None);
        assert_eq!(parse_command("-128 1"), None);
        assert_eq!(parse_command("1 -128"), None);
        assert_eq!(parse_command("0 0"), None);
        assert_eq!(parse_command("25"), None);
        assert_eq!(parse_command("dragon"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn test_scripted_game_finds_star() {
        let mut s = session();
        let mut out = Vec::new();
        apply_command(&mut s, Command::Play, &mut out).unwrap();
        let star = s.star().unwrap();
        apply_command(&mut s, Command::Tap(star), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Find the ⭐ and tap it!"));
        assert!(text.contains("New sticker"));
        assert_eq!(s.stickers().len(), 1);
    }

    #[test]
    fn test_loop_stops_on_quit() {
        let mut s = session();
        let input = "pawn\nplay\nquit\nplay\n".as_bytes();
        let mut out = Vec::new();
        game_loop(&mut s, input, &mut out).unwrap();

        assert_eq!(s.selected_piece(), Some(PieceKind::Pawn));
        let star = s.star().map(Cell::index);
        assert!(matches!(star, Some(6 | 7 | 8)));
    }

    #[test]
    fn test_play_without_piece_prints_error() {
        let mut s = session();
        let mut out = Vec::new();
        apply_command(&mut s, Command::Reset, &mut out).unwrap();
        apply_command(&mut s, Command::Play, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("No piece selected"));
    }
}
