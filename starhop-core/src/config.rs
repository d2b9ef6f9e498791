//! Session configuration

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::board::Cell;
use crate::error::StarhopError;
use crate::pieces::PieceKind;
use crate::target::SelectorConfig;

/// Stickers needed for the celebration screen
pub const DEFAULT_STICKER_GOAL: usize = 5;

/// Game session configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Cell the piece stands on
    pub origin: Cell,
    /// Piece selected when the session starts (None = nothing selected)
    pub default_piece: Option<PieceKind>,
    /// Show move highlights before the first round
    pub show_moves: bool,
    /// Emit tones
    pub sound_on: bool,
    /// Stickers that complete a set
    pub sticker_goal: usize,
    /// Target selection tuning
    pub selector: SelectorConfig,
    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            origin: Cell::CENTER,
            default_piece: Some(PieceKind::Rook),
            show_moves: true,
            sound_on: true,
            sticker_goal: DEFAULT_STICKER_GOAL,
            selector: SelectorConfig::default(),
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the starting piece
    pub fn with_default_piece(mut self, piece: Option<PieceKind>) -> Self {
        self.default_piece = piece;
        self
    }

    /// Toggle sound
    pub fn with_sound(mut self, on: bool) -> Self {
        self.sound_on = on;
        self
    }

    /// Set the sticker goal
    pub fn with_sticker_goal(mut self, goal: usize) -> Self {
        self.sticker_goal = goal;
        self
    }

    /// Reject settings the session cannot run with
    pub fn validate(&self) -> Result<(), StarhopError> {
        if self.sticker_goal == 0 {
            return Err(StarhopError::Config("sticker_goal must be at least 1".to_string()));
        }
        if self.selector.region_weight_base == 0 {
            return Err(StarhopError::Config(
                "selector.region_weight_base must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Load from JSON file; missing fields take their defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: SessionConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}
