//! City input contract.

use std::sync::Arc;

/// A stop in a TSP instance.
///
/// Cities are identified by a stable integer index. The coordinate is
/// opaque to the solver; only [`cost_to`](City::cost_to) feeds the
/// search.
///
/// # Costs
///
/// `cost_to` returns a non-negative directed cost, or `f64::INFINITY`
/// when there is no edge. Costs may be asymmetric. NaN and negative
/// values are rejected when the cost matrix is built.
///
/// # Examples
///
/// ```ignore
/// struct Site { id: usize, x: f64, y: f64 }
///
/// impl City for Site {
///     fn index(&self) -> usize { self.id }
///     fn position(&self) -> (f64, f64) { (self.x, self.y) }
///     fn cost_to(&self, other: &Self) -> f64 {
///         ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
///     }
/// }
/// ```
pub trait City {
    /// Stable index of this city.
    fn index(&self) -> usize;

    /// 2D coordinate.
    fn position(&self) -> (f64, f64);

    /// Directed cost of travelling from `self` to `other`.
    fn cost_to(&self, other: &Self) -> f64;
}

/// A city whose costs come from an explicit shared table.
///
/// Row `i` of the table holds the outgoing costs of the city with
/// index `i`. Useful for asymmetric instances and instances with
/// missing edges.
///
/// # Examples
///
/// ```
/// use u_tsp::model::{City, TableCity};
///
/// let inf = f64::INFINITY;
/// let cities = TableCity::from_table(vec![
///     vec![inf, 1.0, 5.0],
///     vec![2.0, inf, 1.0],
///     vec![1.0, inf, inf],
/// ]);
/// assert_eq!(cities.len(), 3);
/// assert_eq!(cities[0].cost_to(&cities[1]), 1.0);
/// assert!(cities[2].cost_to(&cities[1]).is_infinite());
/// ```
#[derive(Debug, Clone)]
pub struct TableCity {
    index: usize,
    position: (f64, f64),
    table: Arc<[Vec<f64>]>,
}

impl TableCity {
    /// Creates one city per table row, placed on the x axis.
    pub fn from_table(table: Vec<Vec<f64>>) -> Vec<TableCity> {
        let positions = (0..table.len()).map(|i| (i as f64, 0.0)).collect();
        Self::from_table_with_positions(table, positions)
    }

    /// Creates one city per table row with explicit coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `positions` and `table` differ in length.
    pub fn from_table_with_positions(
        table: Vec<Vec<f64>>,
        positions: Vec<(f64, f64)>,
    ) -> Vec<TableCity> {
        assert_eq!(
            table.len(),
            positions.len(),
            "one position per table row required"
        );
        let table: Arc<[Vec<f64>]> = table.into();
        positions
            .into_iter()
            .enumerate()
            .map(|(index, position)| TableCity {
                index,
                position,
                table: Arc::clone(&table),
            })
            .collect()
    }
}

impl City for TableCity {
    fn index(&self) -> usize {
        self.index
    }

    fn position(&self) -> (f64, f64) {
        self.position
    }

    fn cost_to(&self, other: &Self) -> f64 {
        self.table
            .get(self.index)
            .and_then(|row| row.get(other.index))
            .copied()
            .unwrap_or(f64::INFINITY)
    }
}
