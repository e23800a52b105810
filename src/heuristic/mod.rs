//! Baseline tours.
//!
//! Two cheap constructions that give the branch-and-bound search an
//! initial best solution to prune against, and serve as reference
//! points when judging its output:
//!
//! - **Random-valid**: uniform random permutations until one has
//!   finite cost, with an attempt cap for instances that have none.
//! - **Greedy**: nearest unvisited city by matrix row, O(n²).

mod config;
mod runner;

pub use config::HeuristicConfig;
pub use runner::{greedy_tour, random_tour, HeuristicRunner};
