//! Game session: piece choice, star rounds and rewards
//!
//! The session owns everything that lives for one play session: the chosen
//! piece, the active star, collected stickers and the target history.
//! Operations never draw anything themselves; they return [`Effect`]s that a
//! front end turns into highlights, sounds, vibration and confetti.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::board::Cell;
use crate::config::SessionConfig;
use crate::error::{Result, StarhopError};
use crate::moves::{compute_moves, MoveSet};
use crate::pieces::PieceKind;
use crate::target::TargetSelector;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Reward stickers, one drawn per found star
pub const STICKERS: [&str; 30] = [
    "🐶", "🐱", "🐻", "🐼", "🦁", "🐯", "🐸", "🐰", "🐨", "🐵",
    "🚀", "⭐", "🎈", "🎁", "🍎", "🍌", "🎪", "🏰", "🎂", "🧁",
    "🌈", "🌙", "☀️", "⭐", "💫", "🎉", "🎊", "🏆", "🥇", "🎯",
];

const CLICK: Tone = Tone::new(440, 100, Wave::Sine, 0.2, 0);
const MISS: Tone = Tone::new(200, 300, Wave::Triangle, 0.15, 0);
/// C-E-G cheer, staggered
const SUCCESS_CHORD: [Tone; 3] = [
    Tone::new(523, 150, Wave::Sine, 0.25, 0),
    Tone::new(659, 150, Wave::Sine, 0.25, 50),
    Tone::new(784, 200, Wave::Sine, 0.3, 100),
];

const HIT_VIBRATION: [u32; 3] = [100, 50, 100];
const MISS_VIBRATION: [u32; 1] = [100];

// ============================================================================
// EFFECTS
// ============================================================================

/// Oscillator shape
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Wave {
    Sine,
    Triangle,
}

/// A short synthesized tone
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Tone {
    pub frequency_hz: u32,
    pub duration_ms: u32,
    pub wave: Wave,
    pub volume: f32,
    /// Start offset from the triggering action
    pub delay_ms: u32,
}

impl Tone {
    const fn new(frequency_hz: u32, duration_ms: u32, wave: Wave, volume: f32, delay_ms: u32) -> Self {
        Self { frequency_hz, duration_ms, wave, volume, delay_ms }
    }
}

/// A collected reward
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Sticker {
    pub emoji: &'static str,
}

/// Presentation work requested by a session operation
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Effect {
    Tone(Tone),
    /// Vibration pattern in milliseconds (on, off, on, ...)
    Vibrate(Vec<u32>),
    StarPlaced { cell: Cell },
    Confetti { cell: Cell },
    StickerAwarded(Sticker),
    /// Sticker goal reached; show the celebration screen
    GoalReached,
    /// Wrong cell tapped
    Shake,
    Hint(String),
    ClearConfetti,
}

/// What a tap did
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TapOutcome {
    Hit,
    Miss,
    /// No round running
    Idle,
}

// ============================================================================
// SESSION
// ============================================================================

/// One play session (create at start, reset explicitly)
#[derive(Clone, Debug)]
pub struct GameSession<R: Rng = ChaCha8Rng> {
    config: SessionConfig,
    selected: Option<PieceKind>,
    show_moves: bool,
    sound_on: bool,
    star: Option<Cell>,
    stickers: Vec<Sticker>,
    selector: TargetSelector,
    rng: R,
}

impl GameSession<ChaCha8Rng> {
    /// Session seeded from config, or from entropy when no seed is set
    pub fn new(config: SessionConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> GameSession<R> {
    /// Session drawing randomness from `rng`
    pub fn with_rng(config: SessionConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            selected: config.default_piece,
            show_moves: config.show_moves && config.default_piece.is_some(),
            sound_on: config.sound_on,
            star: None,
            stickers: Vec::new(),
            selector: TargetSelector::new(config.selector),
            config,
            rng,
        })
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn selected_piece(&self) -> Option<PieceKind> {
        self.selected
    }

    pub fn show_moves(&self) -> bool {
        self.show_moves
    }

    pub fn sound_on(&self) -> bool {
        self.sound_on
    }

    /// The star of the running round
    pub fn star(&self) -> Option<Cell> {
        self.star
    }

    pub fn is_round_active(&self) -> bool {
        self.star.is_some()
    }

    pub fn stickers(&self) -> &[Sticker] {
        &self.stickers
    }

    pub fn selector(&self) -> &TargetSelector {
        &self.selector
    }

    /// Moves to paint, if the board should show any
    pub fn highlights(&self) -> Option<MoveSet> {
        let piece = self.selected?;
        (self.show_moves || self.is_round_active()).then(|| compute_moves(piece, self.config.origin))
    }

    // ========================================================================
    // ACTIONS
    // ========================================================================

    /// Choose a piece; ends any running round but keeps target history
    pub fn select_piece(&mut self, piece: PieceKind) -> Vec<Effect> {
        tracing::debug!("Selected piece: {}", piece);
        self.selected = Some(piece);
        self.star = None;
        vec![
            Effect::ClearConfetti,
            Effect::Hint(format!("Selected: {}. Tap \"Show Moves\" or \"Play\"!", piece)),
        ]
    }

    pub fn toggle_show_moves(&mut self) -> bool {
        self.show_moves = !self.show_moves;
        self.show_moves
    }

    pub fn toggle_sound(&mut self) -> bool {
        self.sound_on = !self.sound_on;
        self.sound_on
    }

    /// Start a round: place a star on one of the piece's destinations
    pub fn play(&mut self) -> Result<(Cell, Vec<Effect>)> {
        let piece = self.selected.ok_or(StarhopError::NoPieceSelected)?;
        if self.is_round_active() {
            return Err(StarhopError::RoundInProgress);
        }

        let candidates = compute_moves(piece, self.config.origin).candidates();
        let star = self
            .selector
            .select(&candidates, &mut self.rng)
            .ok_or(StarhopError::NoValidMoves { piece })?;

        tracing::debug!("Round started: {} star at {}", piece, star.index());
        self.star = Some(star);
        self.show_moves = true;

        Ok((
            star,
            vec![
                Effect::StarPlaced { cell: star },
                Effect::Hint("Find the ⭐ and tap it!".to_string()),
            ],
        ))
    }

    /// Handle a tap on `cell`
    pub fn tap(&mut self, cell: Cell) -> (TapOutcome, Vec<Effect>) {
        let mut effects = Vec::new();
        self.push_tone(&mut effects, CLICK);

        let outcome = match self.star {
            Some(star) if star == cell => {
                self.award(cell, &mut effects);
                TapOutcome::Hit
            }
            Some(_) => {
                self.push_tone(&mut effects, MISS);
                effects.push(Effect::Vibrate(MISS_VIBRATION.to_vec()));
                effects.push(Effect::Shake);
                TapOutcome::Miss
            }
            None => TapOutcome::Idle,
        };

        tracing::debug!("Tap at {}: {:?}", cell.index(), outcome);
        (outcome, effects)
    }

    /// Start a fresh sticker set, keeping the piece
    pub fn play_again(&mut self) -> Vec<Effect> {
        self.stickers.clear();
        self.star = None;
        vec![Effect::Hint(format!("Great! Find {} more stars!", self.config.sticker_goal))]
    }

    /// Clear piece, highlights, round and target history
    pub fn reset(&mut self) -> Vec<Effect> {
        tracing::debug!("Session reset");
        self.selected = None;
        self.show_moves = false;
        self.star = None;
        self.selector.reset();
        vec![
            Effect::ClearConfetti,
            Effect::Hint("Tap a piece to see how it moves!".to_string()),
        ]
    }

    // ========================================================================
    // HELPERS
    // ========================================================================

    fn award(&mut self, cell: Cell, effects: &mut Vec<Effect>) {
        for tone in SUCCESS_CHORD {
            self.push_tone(effects, tone);
        }
        effects.push(Effect::Vibrate(HIT_VIBRATION.to_vec()));
        effects.push(Effect::Confetti { cell });

        let emoji = STICKERS.choose(&mut self.rng).copied().unwrap_or("⭐");
        let sticker = Sticker { emoji };
        self.stickers.push(sticker);
        effects.push(Effect::StickerAwarded(sticker));

        if self.stickers.len() >= self.config.sticker_goal {
            tracing::info!("Sticker goal reached ({} stickers)", self.stickers.len());
            effects.push(Effect::GoalReached);
        }

        self.star = None;
        effects.push(Effect::Hint("Great job! Tap a piece to play again!".to_string()));
    }

    fn push_tone(&self, effects: &mut Vec<Effect>, tone: Tone) {
        if self.sound_on {
            effects.push(Effect::Tone(tone));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameSession {
        GameSession::new(SessionConfig::default().with_seed(42)).unwrap()
    }

    fn tones(effects: &[Effect]) -> Vec<u32> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Tone(t) => Some(t.frequency_hz),
                _ => None,
            })
            .collect()
    }

    fn wrong_cell(star: Cell) -> Cell {
        Cell::all().find(|&c| c != star).unwrap()
    }

    #[test]
    fn test_starts_with_rook_and_moves_shown() {
        let s = session();
        assert_eq!(s.selected_piece(), Some(PieceKind::Rook));
        assert!(s.show_moves());
        assert_eq!(s.highlights().unwrap().legal.len(), 8);
        assert!(!s.is_round_active());
    }

    #[test]
    fn test_play_places_star_on_destination() {
        let mut s = session();
        s.select_piece(PieceKind::Knight);
        let (star, effects) = s.play().unwrap();
        let knight = compute_moves(PieceKind::Knight, Cell::CENTER);
        assert!(knight.legal.contains(&star));
        assert_eq!(s.star(), Some(star));
        assert!(effects.contains(&Effect::StarPlaced { cell: star }));
        assert!(matches!(s.play(), Err(StarhopError::RoundInProgress)));
    }

    #[test]
    fn test_play_without_piece() {
        let mut s = session();
        s.reset();
        assert!(matches!(s.play(), Err(StarhopError::NoPieceSelected)));
        assert!(s.highlights().is_none());
    }

    #[test]
    fn test_no_valid_moves_from_top_row() {
        let config = SessionConfig {
            origin: Cell::new(2).unwrap(),
            default_piece: Some(PieceKind::Pawn),
            ..SessionConfig::default().with_seed(1)
        };
        let mut s = GameSession::new(config).unwrap();
        assert!(matches!(
            s.play(),
            Err(StarhopError::NoValidMoves { piece: PieceKind::Pawn })
        ));
        assert!(!s.is_round_active());
    }

    #[test]
    fn test_hit_awards_sticker() {
        let mut s = session();
        let (star, _) = s.play().unwrap();
        let (outcome, effects) = s.tap(star);

        assert_eq!(outcome, TapOutcome::Hit);
        assert_eq!(s.stickers().len(), 1);
        assert!(!s.is_round_active());
        assert_eq!(tones(&effects), vec![440, 523, 659, 784]);
        assert!(effects.contains(&Effect::Confetti { cell: star }));
        assert!(effects.contains(&Effect::Vibrate(vec![100, 50, 100])));
        assert!(!effects.contains(&Effect::GoalReached));
        assert!(STICKERS.contains(&s.stickers()[0].emoji));
    }

    #[test]
    fn test_miss_keeps_round() {
        let mut s = session();
        let (star, _) = s.play().unwrap();
        let (outcome, effects) = s.tap(wrong_cell(star));

        assert_eq!(outcome, TapOutcome::Miss);
        assert_eq!(s.star(), Some(star));
        assert_eq!(tones(&effects), vec![440, 200]);
        assert!(effects.contains(&Effect::Shake));
        assert!(s.stickers().is_empty());
    }

    #[test]
    fn test_idle_tap_only_clicks() {
        let mut s = session();
        let (outcome, effects) = s.tap(Cell::CENTER);
        assert_eq!(outcome, TapOutcome::Idle);
        assert_eq!(tones(&effects), vec![440]);
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn test_sound_off_suppresses_tones() {
        let mut s = session();
        assert!(!s.toggle_sound());
        let (star, _) = s.play().unwrap();
        let (_, effects) = s.tap(star);
        assert!(tones(&effects).is_empty());
        assert!(effects.contains(&Effect::Confetti { cell: star }));
    }

    #[test]
    fn test_goal_reached_on_fifth_sticker() {
        let mut s = session();
        for round in 1..=5 {
            let (star, _) = s.play().unwrap();
            let (_, effects) = s.tap(star);
            assert_eq!(effects.contains(&Effect::GoalReached), round == 5, "round {}", round);
        }
        s.play_again();
        assert!(s.stickers().is_empty());
        assert_eq!(s.selected_piece(), Some(PieceKind::Rook));
    }

    #[test]
    fn test_piece_switch_keeps_history_reset_clears_it() {
        let mut s = session();
        let (star, _) = s.play().unwrap();
        s.tap(star);
        assert_eq!(s.selector().history().len(), 1);

        s.select_piece(PieceKind::Queen);
        assert_eq!(s.selector().history().len(), 1);

        s.play().unwrap();
        s.select_piece(PieceKind::King);
        assert!(!s.is_round_active(), "switching piece ends the round");

        s.reset();
        assert!(s.selector().history().is_empty());
        assert_eq!(s.selected_piece(), None);
        assert!(!s.show_moves());
    }

    #[test]
    fn test_highlights_follow_toggle_and_round() {
        let mut s = session();
        assert!(!s.toggle_show_moves());
        assert!(s.highlights().is_none());
        s.play().unwrap();
        assert!(s.show_moves(), "playing turns highlights on");
        s.toggle_show_moves();
        assert!(s.highlights().is_some(), "round keeps highlights visible");
    }

    #[test]
    fn test_effects_serialize_tagged() {
        let json = serde_json::to_value(Effect::Confetti { cell: Cell::CENTER }).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "confetti", "data": { "cell": 12 } }));
    }
}
