//! Traveling Salesman solver built around branch-and-bound.
//!
//! Provides:
//!
//! - **Model**: the [`City`](model::City) input contract, validated
//!   [`Instance`](model::Instance)s, directed [`CostMatrix`](model::CostMatrix)
//!   construction and row/column reduction, and priced [`Tour`](model::Tour)s.
//! - **Baseline heuristics**: random-valid and greedy tours, used to seed
//!   the search and as reference points.
//! - **Branch-and-Bound (B&B)**: reduced-cost-matrix lower bounds,
//!   best-first frontier, and bound pruning under a wall-clock budget.
//!
//! Costs may be asymmetric, and `f64::INFINITY` marks a missing edge.
//! Every solver call returns a fixed-shape [`TspResult`].
//!
//! # Architecture
//!
//! Scenario generation, geometry and rendering live with the caller:
//! this crate takes a city list in and hands a result record back.

pub mod bnb;
pub mod error;
pub mod heuristic;
pub mod model;
mod result;

pub use error::{Result, TspError};
pub use result::{SearchStats, TspResult};
