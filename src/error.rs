//! Error types for TSP solving.

use thiserror::Error;

/// Errors reported at the input and seeding seams.
///
/// Once a valid root matrix has been built and a seed tour obtained,
/// the search loop itself cannot fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TspError {
    /// The city list was empty.
    #[error("no cities given")]
    EmptyInput,

    /// Two cities share the same stable index.
    #[error("duplicate city index {index}")]
    DuplicateIndex {
        /// The repeated index.
        index: usize,
    },

    /// A city reported a NaN or negative edge cost.
    #[error("invalid cost {value} on edge {from} -> {to}")]
    InvalidCost {
        /// Stable index of the source city.
        from: usize,
        /// Stable index of the destination city.
        to: usize,
        /// The offending value.
        value: f64,
    },

    /// The configured start city is not a valid matrix position.
    #[error("start city {start} out of range for {len} cities")]
    StartOutOfRange {
        /// Requested start position.
        start: usize,
        /// Number of cities.
        len: usize,
    },

    /// Configuration validation failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No finite-cost tour was found within the attempt cap.
    #[error("no feasible tour found after {attempts} attempts")]
    Infeasible {
        /// Number of permutations tried.
        attempts: usize,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TspError>;
