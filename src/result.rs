//! Solver output records.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::model::Tour;

/// Per-call search counters.
///
/// Produced fresh by every solver call; nothing carries over between
/// runs. All zero for the baseline heuristics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchStats {
    /// States popped from the frontier and expanded.
    pub expanded: usize,
    /// Child states created by expansion.
    pub generated: usize,
    /// States discarded by bound or as dead ends.
    pub pruned: usize,
    /// States pushed onto the frontier (root included).
    pub enqueued: usize,
    /// Largest frontier size observed.
    pub max_frontier: usize,
    /// Complete tours reached by the search, accepted or not.
    pub candidates: usize,
    /// Whether the run stopped on an external cancel flag.
    pub cancelled: bool,
}

/// Outcome of a solver call.
///
/// `cost` is the cost of `soln` (possibly infinite). `count` means
/// attempts for the random heuristic, zero for greedy, and BSSF
/// improvements beyond the seed for branch-and-bound.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TspResult {
    /// Cost of the returned tour.
    pub cost: f64,
    /// Elapsed wall-clock seconds.
    pub time: f64,
    /// Algorithm-specific counter (see type docs).
    pub count: usize,
    /// The best tour found.
    pub soln: Tour,
    /// Best cost after seeding and after each improvement.
    pub cost_history: Vec<f64>,
    /// Search counters.
    pub stats: SearchStats,
}
