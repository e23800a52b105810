//! Child generation: fix one outgoing edge of the current city.

use super::types::SearchState;
use crate::model::Instance;

/// Expands `parent` into one child per finite edge leaving its city.
///
/// For each live column `j` of the parent's row:
///
/// 1. copy the reduced matrix and charge `M[p, j]` to the bound
/// 2. tombstone row `p`, column `j`, and the back-edge `(j, p)`
/// 3. reduce the copy and add the reduction to the bound
/// 4. extend the path with `p` and move to `j`
///
/// Children are returned in column order. Each costs O(n²).
pub fn expand(parent: &SearchState, instance: &Instance) -> Vec<SearchState> {
    let p = parent.city;
    let costs = instance.costs();
    let n = parent.matrix.len();

    (0..n)
        .filter(|&j| parent.matrix.get(p, j).is_finite())
        .map(|j| {
            let mut matrix = parent.matrix.clone();
            let mut lower_bound = parent.lower_bound + matrix.get(p, j);

            matrix.tombstone_row(p);
            matrix.tombstone_col(j);
            matrix.tombstone(j, p);
            lower_bound += matrix.reduce();

            let mut path = Vec::with_capacity(parent.path.len() + 1);
            path.extend_from_slice(&parent.path);
            path.push(p);

            SearchState {
                matrix,
                lower_bound,
                cost: parent.cost + costs.get(p, j),
                city: j,
                path,
            }
        })
        .collect()
}
