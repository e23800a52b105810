//! Search state for branch-and-bound.

use crate::model::{CostMatrix, Instance};

/// A node of the branch-and-bound tree: a partial path plus its
/// reduced cost matrix.
///
/// `lower_bound` never exceeds the cost of any tour completing this
/// path, and never decreases from parent to child. The matrix is owned
/// exclusively; siblings each get their own copy.
#[derive(Debug, Clone)]
pub struct SearchState {
    /// Reduced matrix with left rows and entered columns tombstoned.
    pub matrix: CostMatrix,
    /// Lower bound on any completion.
    pub lower_bound: f64,
    /// Actual cost of the edges taken so far.
    pub cost: f64,
    /// Matrix position of the current city.
    pub city: usize,
    /// Positions already left, in visiting order.
    pub path: Vec<usize>,
}

impl SearchState {
    /// The root state: full matrix reduced, standing at `start`.
    pub fn root(instance: &Instance, start: usize) -> Self {
        let mut matrix = instance.costs().clone();
        let lower_bound = matrix.reduce();
        Self {
            matrix,
            lower_bound,
            cost: 0.0,
            city: start,
            path: Vec::new(),
        }
    }

    /// Cities visited so far, the current one included. Never zero.
    pub fn depth(&self) -> usize {
        self.path.len() + 1
    }

    /// Whether no finite edge is left anywhere in the matrix.
    pub fn is_exhausted(&self) -> bool {
        !self.matrix.has_finite()
    }

    /// Whether the path has left every one of `n` cities, i.e. the
    /// state closes a full tour.
    pub fn is_complete(&self, n: usize) -> bool {
        self.path.len() == n
    }
}
