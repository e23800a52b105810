//! Problem model: cities, cost matrices, and tours.
//!
//! An [`Instance`] is built once from a city list and shared by the
//! heuristics and the branch-and-bound search. [`CostMatrix`] holds the
//! directed costs and the row/column reduction that yields lower bounds.

mod city;
mod instance;
mod matrix;
mod tour;

pub use city::{City, TableCity};
pub use instance::Instance;
pub use matrix::CostMatrix;
pub use tour::{route_cost, Tour};
