//! Star target selection
//!
//! Picks the round's target among a piece's reachable cells. Plain uniform
//! picks repeat positions too often, so selection:
//! - skips cells picked in the last few rounds (falling back to every
//!   candidate once all of them were used recently),
//! - weights board regions (corner/edge/inner) by how rarely they were hit,
//! - keeps the recency window at most `candidates - 1` long so no cell is
//!   ever locked out for good.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::board::{Cell, Region};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Upper bound on remembered picks
pub const MAX_HISTORY: usize = 5;

/// Weight of a region nobody picked recently; each recent hit subtracts one
pub const REGION_WEIGHT_BASE: usize = 4;

// ============================================================================
// HISTORY
// ============================================================================

/// Recently picked targets, oldest first
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionHistory {
    recent: VecDeque<Cell>,
}

impl SelectionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// History seeded with earlier picks, oldest first
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        Self { recent: cells.into_iter().collect() }
    }

    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.recent.contains(&cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.recent.iter().copied()
    }

    pub fn last(&self) -> Option<Cell> {
        self.recent.back().copied()
    }

    pub fn clear(&mut self) {
        self.recent.clear();
    }

    /// Number of remembered picks that fall in `region`
    pub fn hits_in(&self, region: Region) -> usize {
        self.recent.iter().filter(|&&cell| region.contains(cell)).count()
    }

    /// Append a pick, then drop the oldest entries beyond `capacity`
    pub fn push_bounded(&mut self, cell: Cell, capacity: usize) {
        self.recent.push_back(cell);
        while self.recent.len() > capacity {
            self.recent.pop_front();
        }
    }
}

/// Window size for a pool of `candidate_count` cells
pub fn history_capacity(candidate_count: usize, max_history: usize) -> usize {
    max_history.min(candidate_count.saturating_sub(1))
}

// ============================================================================
// SELECTOR
// ============================================================================

/// Selection tuning
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub max_history: usize,
    pub region_weight_base: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            max_history: MAX_HISTORY,
            region_weight_base: REGION_WEIGHT_BASE,
        }
    }
}

/// Owns the one live selection history of a play session
#[derive(Clone, Debug, Default)]
pub struct TargetSelector {
    config: SelectorConfig,
    history: SelectionHistory,
}

impl TargetSelector {
    pub fn new(config: SelectorConfig) -> Self {
        Self {
            config,
            history: SelectionHistory::new(),
        }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    pub fn history(&self) -> &SelectionHistory {
        &self.history
    }

    /// Forget every recent pick
    pub fn reset(&mut self) {
        self.history.clear();
    }

    /// Pick a target and record it; `None` only for an empty pool
    pub fn select<R: Rng + ?Sized>(&mut self, candidates: &[Cell], rng: &mut R) -> Option<Cell> {
        select_target_with(&self.config, candidates, &mut self.history, rng)
    }
}

/// Pick a target from `candidates` and record it in `history`
///
/// Returns `None` when `candidates` is empty; callers are expected to check
/// that first and report "no valid moves" instead.
pub fn select_target<R: Rng + ?Sized>(
    candidates: &[Cell],
    history: &mut SelectionHistory,
    rng: &mut R,
) -> Option<Cell> {
    select_target_with(&SelectorConfig::default(), candidates, history, rng)
}

/// [`select_target`] with explicit tuning
pub fn select_target_with<R: Rng + ?Sized>(
    config: &SelectorConfig,
    candidates: &[Cell],
    history: &mut SelectionHistory,
    rng: &mut R,
) -> Option<Cell> {
    if candidates.is_empty() {
        return None;
    }

    let mut available: Vec<Cell> = candidates
        .iter()
        .copied()
        .filter(|&cell| !history.contains(cell))
        .collect();

    let exhausted = available.is_empty();
    if exhausted {
        available = candidates.to_vec();
    }

    // Weights look at the history as it was before any reset
    let mut pool = weighted_pool(&available, history, config.region_weight_base);
    if pool.is_empty() {
        pool = available;
    }

    pool.shuffle(rng);
    let chosen = pool[rng.gen_range(0..pool.len())];

    if exhausted {
        history.clear();
    }
    history.push_bounded(chosen, history_capacity(candidates.len(), config.max_history));

    tracing::debug!(
        "Selected target {} from {} candidates (pool={}, reset={}, history={:?})",
        chosen.index(),
        candidates.len(),
        pool.len(),
        exhausted,
        history.iter().map(Cell::index).collect::<Vec<_>>()
    );

    Some(chosen)
}

/// Repeat each region's available cells by that region's weight
///
/// Cells outside every region (the center) are left out.
pub fn weighted_pool(available: &[Cell], history: &SelectionHistory, weight_base: usize) -> Vec<Cell> {
    let mut buckets: FxHashMap<Region, Vec<Cell>> = FxHashMap::default();
    for &cell in available {
        if let Some(region) = cell.region() {
            buckets.entry(region).or_default().push(cell);
        }
    }

    let mut pool = Vec::new();
    for region in Region::ALL {
        let Some(members) = buckets.get(&region) else {
            continue;
        };
        let weight = weight_base.saturating_sub(history.hits_in(region)).max(1);
        for _ in 0..weight {
            pool.extend_from_slice(members);
        }
    }
    pool
}
