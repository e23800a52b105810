//! Validated problem instance built from a city list.

use super::city::City;
use super::matrix::CostMatrix;
use crate::error::{Result, TspError};

/// A TSP instance ready for solving.
///
/// Cities are ordered by their stable index; position `i` in the
/// matrix corresponds to `labels[i]`.
#[derive(Debug, Clone)]
pub struct Instance {
    labels: Vec<usize>,
    costs: CostMatrix,
}

impl Instance {
    /// Builds the cost matrix from a city list.
    ///
    /// Cities are sorted by [`City::index`]. Entry `(i, j)` is
    /// `cities[i].cost_to(&cities[j])`; the diagonal is infinite.
    ///
    /// # Errors
    ///
    /// - [`TspError::EmptyInput`] for an empty list
    /// - [`TspError::DuplicateIndex`] if two cities share an index
    /// - [`TspError::InvalidCost`] for NaN or negative costs
    pub fn from_cities<C: City>(cities: &[C]) -> Result<Self> {
        if cities.is_empty() {
            return Err(TspError::EmptyInput);
        }

        let mut sorted: Vec<&C> = cities.iter().collect();
        sorted.sort_by_key(|c| c.index());
        if let Some(pair) = sorted.windows(2).find(|w| w[0].index() == w[1].index()) {
            return Err(TspError::DuplicateIndex {
                index: pair[0].index(),
            });
        }

        let n = sorted.len();
        let mut costs = CostMatrix::infinite(n);
        for (i, a) in sorted.iter().enumerate() {
            for (j, b) in sorted.iter().enumerate() {
                if i == j {
                    continue;
                }
                let value = a.cost_to(b);
                if value.is_nan() || value < 0.0 {
                    return Err(TspError::InvalidCost {
                        from: a.index(),
                        to: b.index(),
                        value,
                    });
                }
                costs.set(i, j, value);
            }
        }

        Ok(Self {
            labels: sorted.iter().map(|c| c.index()).collect(),
            costs,
        })
    }

    /// Builds an instance straight from a cost table.
    ///
    /// Labels are `0..n`. Diagonal entries are forced to infinity.
    ///
    /// # Errors
    ///
    /// Same conditions as [`from_cities`](Self::from_cities).
    pub fn from_table(table: &[Vec<f64>]) -> Result<Self> {
        Self::from_cities(&super::TableCity::from_table(table.to_vec()))
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false for a constructed instance.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The unreduced cost matrix.
    pub fn costs(&self) -> &CostMatrix {
        &self.costs
    }

    /// Stable city index at matrix position `pos`.
    pub fn label(&self, pos: usize) -> usize {
        self.labels[pos]
    }

    /// Ensures `start` is a valid matrix position.
    pub fn check_start(&self, start: usize) -> Result<()> {
        if start < self.len() {
            Ok(())
        } else {
            Err(TspError::StartOutOfRange {
                start,
                len: self.len(),
            })
        }
    }
}
