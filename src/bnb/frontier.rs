//! Best-first frontier of search states.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::types::SearchState;

/// Exploration priority of a state: lower bound divided by depth.
///
/// Lower is explored first. Dividing by depth favors states that are
/// both tightly bounded and far along.
pub fn priority(state: &SearchState) -> f64 {
    state.lower_bound / state.depth() as f64
}

/// A queued state with its priority and insertion sequence number.
///
/// Ordered on `(priority, sequence)` only; the payload never takes
/// part in comparisons.
#[derive(Debug)]
pub struct FrontierEntry {
    /// Exploration priority (lower first).
    pub priority: f64,
    /// Insertion order, strictly increasing.
    pub sequence: u64,
    /// The queued state.
    pub state: SearchState,
}

impl FrontierEntry {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.sequence.cmp(&other.sequence))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key_cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, smallest key must pop first.
        other.key_cmp(self)
    }
}

/// Min-priority queue of search states with FIFO tie-breaking.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<FrontierEntry>,
    next_sequence: u64,
    peak_len: usize,
}

impl PriorityFrontier {
    /// Creates an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a state under [`priority`].
    pub fn push(&mut self, state: SearchState) {
        let priority = priority(&state);
        self.push_with_priority(state, priority);
    }

    /// Queues a state under an explicit priority.
    pub fn push_with_priority(&mut self, state: SearchState, priority: f64) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(FrontierEntry {
            priority,
            sequence,
            state,
        });
        self.peak_len = self.peak_len.max(self.heap.len());
    }

    /// Removes the entry with the lowest priority, earliest first on ties.
    pub fn pop(&mut self) -> Option<SearchState> {
        self.heap.pop().map(|entry| entry.state)
    }

    /// Priority of the next entry to pop.
    pub fn peek_priority(&self) -> Option<f64> {
        self.heap.peek().map(|entry| entry.priority)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Largest size reached so far.
    pub fn peak_len(&self) -> usize {
        self.peak_len
    }

    /// Total number of pushes so far.
    pub fn total_pushed(&self) -> u64 {
        self.next_sequence
    }
}
