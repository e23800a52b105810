//! Complete tours and their costs.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::instance::Instance;

/// A closed tour visiting every city once.
///
/// `order` holds stable city indices in visiting order. The cost is the
/// sum of consecutive directed edges plus the closing edge back to the
/// first city, and is infinite if any of those edges is missing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tour {
    /// Stable city indices in visiting order.
    pub order: Vec<usize>,
    /// Total directed cost, or `f64::INFINITY`.
    pub cost: f64,
}

impl Tour {
    /// Builds a tour from matrix positions and prices it.
    pub fn from_positions(positions: &[usize], instance: &Instance) -> Self {
        Tour {
            order: positions.iter().map(|&p| instance.label(p)).collect(),
            cost: route_cost(positions, instance),
        }
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the tour has no stops.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether the cost is finite.
    pub fn is_feasible(&self) -> bool {
        self.cost.is_finite()
    }

    /// Whether the tour visits each of the instance's cities exactly once.
    pub fn is_complete(&self, instance: &Instance) -> bool {
        if self.order.len() != instance.len() {
            return false;
        }
        let mut seen: Vec<usize> = self.order.clone();
        seen.sort_unstable();
        seen.iter()
            .enumerate()
            .all(|(pos, &label)| instance.label(pos) == label)
    }
}

/// Cost of the closed route through `positions`.
///
/// A single-stop route costs zero.
pub fn route_cost(positions: &[usize], instance: &Instance) -> f64 {
    if positions.len() < 2 {
        return 0.0;
    }
    let costs = instance.costs();
    let legs: f64 = positions.windows(2).map(|w| costs.get(w[0], w[1])).sum();
    let last = positions[positions.len() - 1];
    legs + costs.get(last, positions[0])
}
