//! Branch-and-bound (B&B) over reduced cost matrices.
//!
//! Each search state carries its own reduced cost matrix; the amount
//! removed by row/column reduction accumulates into a lower bound on
//! every tour that extends the state's partial path. States are
//! explored best-first by `lower_bound / depth`, and any state whose
//! bound cannot beat the best solution so far (BSSF) is pruned.
//!
//! The search is single-threaded and polls a wall-clock deadline once
//! per frontier pop. When time runs out it returns the current BSSF,
//! which may still be the seeding heuristic's tour.
//!
//! # References
//!
//! - Little, Murty, Sweeney & Karel (1963), "An Algorithm for the
//!   Traveling Salesman Problem"
//! - Lawler & Wood (1966), "Branch-and-Bound Methods: A Survey"

mod config;
mod expand;
mod frontier;
mod runner;
mod types;

pub use config::{BnbConfig, SeedStrategy};
pub use expand::expand;
pub use frontier::{priority, FrontierEntry, PriorityFrontier};
pub use runner::BnbRunner;
pub use types::SearchState;
