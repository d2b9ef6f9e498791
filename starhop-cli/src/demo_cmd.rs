//! Demo command - play rounds automatically and show the star placements
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_rounds(), report_results()
//! - Level 3: play_single_round()
//! - Level 4: formatting utilities

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use starhop_core::{GameSession, PieceKind, Region, SessionConfig};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct DemoArgs {
    /// Piece to play with
    #[arg(long, default_value = "rook")]
    pub piece: PieceKind,

    /// Number of rounds to play
    #[arg(long, default_value = "20")]
    pub rounds: usize,

    /// Session config JSON file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of a single round
#[derive(Clone, Debug, Serialize)]
struct RoundRecord {
    round: usize,
    star: u8,
    region: Option<Region>,
    history: Vec<u8>,
}

/// Aggregated demo results
#[derive(Clone, Debug, Serialize)]
struct DemoResults {
    piece: PieceKind,
    rounds: Vec<RoundRecord>,
    star_counts: BTreeMap<u8, usize>,
    stickers: Vec<&'static str>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run demo command
///
/// 1. Build a session for the piece
/// 2. Play every round, always tapping the star
/// 3. Report where the stars landed
pub fn run(args: DemoArgs, seed: Option<u64>) -> Result<()> {
    let mut session = create_session(&args, seed)?;

    tracing::info!("Starting demo: {} ({} rounds)", args.piece, args.rounds);

    let results = play_rounds(&mut session, &args)?;

    report_results(&results, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn create_session(args: &DemoArgs, seed: Option<u64>) -> Result<GameSession> {
    let mut config = match &args.config {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    // Taps are simulated, nothing to hear
    let config = config.with_default_piece(Some(args.piece)).with_sound(false);
    Ok(GameSession::new(config)?)
}

fn play_rounds(session: &mut GameSession, args: &DemoArgs) -> Result<DemoResults> {
    let mut rounds = Vec::with_capacity(args.rounds);
    let mut star_counts = BTreeMap::new();

    for round in 1..=args.rounds {
        let record = play_single_round(session, round)?;
        *star_counts.entry(record.star).or_insert(0) += 1;
        tracing::debug!("Round {}: star at {}", record.round, record.star);
        rounds.push(record);

        if session.stickers().len() >= session.config().sticker_goal {
            session.play_again();
        }
    }

    Ok(DemoResults {
        piece: args.piece,
        rounds,
        star_counts,
        stickers: session.stickers().iter().map(|s| s.emoji).collect(),
    })
}

fn report_results(results: &DemoResults, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
    } else {
        print_text_results(results);
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn play_single_round(session: &mut GameSession, round: usize) -> Result<RoundRecord> {
    let (star, _) = session
        .play()
        .with_context(|| format!("Round {} could not start", round))?;
    session.tap(star);

    Ok(RoundRecord {
        round,
        star: star.index(),
        region: star.region(),
        history: session.selector().history().iter().map(|c| c.index()).collect(),
    })
}

// ============================================================================
// LEVEL 4 - FORMATTING
// ============================================================================

fn print_text_results(results: &DemoResults) {
    println!("Demo: {} {}", results.piece.glyph(), results.piece);
    println!("{:>5}  {:>4}  {:<7}  history", "round", "star", "region");
    for r in &results.rounds {
        println!(
            "{:>5}  {:>4}  {:<7}  {:?}",
            r.round,
            r.star,
            format_region(r.region),
            r.history
        );
    }
    println!();
    println!("Star counts:");
    for (cell, count) in &results.star_counts {
        println!("  {:>2}: {}", cell, "#".repeat(*count));
    }
    if !results.stickers.is_empty() {
        println!("Stickers: {}", results.stickers.join(" "));
    }
}

fn format_region(region: Option<Region>) -> &'static str {
    match region {
        Some(Region::Corner) => "corner",
        Some(Region::Edge) => "edge",
        Some(Region::Inner) => "inner",
        None => "center",
    }
}
