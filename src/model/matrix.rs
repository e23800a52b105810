//! Directed cost matrix with tombstoning and row/column reduction.

use std::ops::Index;

/// An N×N table of directed edge costs.
///
/// Entry `(i, j)` is the cost of travelling from position `i` to
/// position `j`. `f64::INFINITY` marks a missing or forbidden edge
/// (a *tombstone*). NaN never appears.
///
/// Stored row-major in a single buffer so that cloning a matrix for a
/// child search state is one allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    n: usize,
    data: Vec<f64>,
}

impl CostMatrix {
    /// Creates an `n`×`n` matrix with every entry infinite.
    pub fn infinite(n: usize) -> Self {
        Self {
            n,
            data: vec![f64::INFINITY; n * n],
        }
    }

    /// Creates a matrix from explicit rows.
    ///
    /// Diagonal entries are kept as given; use
    /// [`Instance::from_cities`](super::Instance::from_cities) for the
    /// validated construction path.
    ///
    /// # Panics
    ///
    /// Panics if the rows do not form a square table or contain NaN.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            assert_eq!(row.len(), n, "cost matrix must be square");
            assert!(row.iter().all(|v| !v.is_nan()), "cost matrix contains NaN");
            data.extend(row);
        }
        Self { n, data }
    }

    /// Number of cities (rows).
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Returns entry `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Sets entry `(i, j)`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        debug_assert!(!value.is_nan());
        self.data[i * self.n + j] = value;
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Forbids the single edge `(i, j)`.
    pub fn tombstone(&mut self, i: usize, j: usize) {
        self.set(i, j, f64::INFINITY);
    }

    /// Forbids every edge leaving `i`.
    pub fn tombstone_row(&mut self, i: usize) {
        let n = self.n;
        self.data[i * n..(i + 1) * n].fill(f64::INFINITY);
    }

    /// Forbids every edge entering `j`.
    pub fn tombstone_col(&mut self, j: usize) {
        for i in 0..self.n {
            self.data[i * self.n + j] = f64::INFINITY;
        }
    }

    /// Smallest finite entry of row `i` as `(column, value)`.
    ///
    /// Ties resolve to the lowest column. `None` if the row is all
    /// infinite.
    pub fn row_min(&self, i: usize) -> Option<(usize, f64)> {
        argmin_finite(self.row(i).iter().copied())
    }

    /// Smallest finite entry of column `j` as `(row, value)`.
    pub fn col_min(&self, j: usize) -> Option<(usize, f64)> {
        argmin_finite((0..self.n).map(|i| self.get(i, j)))
    }

    /// Whether any entry is still finite.
    pub fn has_finite(&self) -> bool {
        self.data.iter().any(|v| v.is_finite())
    }

    /// Reduces the matrix in place and returns the total reduction.
    ///
    /// Every row with a finite entry has its minimum subtracted; then
    /// every column of the row-reduced matrix is treated the same way.
    /// All-infinite rows and columns contribute nothing. The returned
    /// sum is an admissible increment to a lower bound: any completion
    /// must leave each live row and enter each live column once.
    pub fn reduce(&mut self) -> f64 {
        let n = self.n;
        let mut total = 0.0;

        for i in 0..n {
            if let Some((_, min)) = self.row_min(i) {
                if min > 0.0 {
                    for v in &mut self.data[i * n..(i + 1) * n] {
                        *v -= min;
                    }
                }
                total += min;
            }
        }

        for j in 0..n {
            if let Some((_, min)) = self.col_min(j) {
                if min > 0.0 {
                    for i in 0..n {
                        self.data[i * n + j] -= min;
                    }
                }
                total += min;
            }
        }

        total
    }
}

impl Index<(usize, usize)> for CostMatrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i * self.n + j]
    }
}

fn argmin_finite(values: impl Iterator<Item = f64>) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (k, v) in values.enumerate() {
        if v.is_finite() && best.is_none_or(|(_, b)| v < b) {
            best = Some((k, v));
        }
    }
    best
}
