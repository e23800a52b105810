//! Branch-and-bound execution loop.
//!
//! # Algorithm
//!
//! 1. Seed the best solution so far (BSSF) with a baseline tour
//! 2. Reduce the full cost matrix and queue the root state
//! 3. Until the frontier empties or time runs out:
//!    a. Pop the state with the lowest `lower_bound / depth`
//!    b. Discard it if its bound exceeds the BSSF cost
//!    c. Otherwise expand it; a child whose matrix has no finite entry
//!       left is either a complete tour (accepted if strictly cheaper)
//!       or a dead end; other children are queued unless their bound
//!       reaches the BSSF cost
//!
//! The BSSF cost only decreases, so a state pruned against an earlier
//! (higher) cost would also be pruned against the current one.
//!
//! # Reference
//!
//! Little, Murty, Sweeney & Karel (1963), "An Algorithm for the
//! Traveling Salesman Problem", *Operations Research* 11(6), 972-989.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::{BnbConfig, SeedStrategy};
use super::expand::expand;
use super::frontier::PriorityFrontier;
use super::types::SearchState;
use crate::error::{Result, TspError};
use crate::heuristic::{greedy_tour, random_tour};
use crate::model::{City, Instance, Tour};
use crate::result::{SearchStats, TspResult};

/// Executes the branch-and-bound search.
pub struct BnbRunner;

impl BnbRunner {
    /// Solves the TSP over `cities`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use u_tsp::bnb::{BnbConfig, BnbRunner};
    /// use u_tsp::model::TableCity;
    ///
    /// let inf = f64::INFINITY;
    /// let cities = TableCity::from_table(vec![
    ///     vec![inf, 1.0, 10.0, 10.0],
    ///     vec![10.0, inf, 1.0, 10.0],
    ///     vec![10.0, 10.0, inf, 1.0],
    ///     vec![1.0, 10.0, 10.0, inf],
    /// ]);
    /// let config = BnbConfig::default().with_time_allowance(Duration::from_secs(5));
    /// let result = BnbRunner::run(&cities, &config).unwrap();
    /// assert_eq!(result.cost, 4.0);
    /// ```
    pub fn run<C: City>(cities: &[C], config: &BnbConfig) -> Result<TspResult> {
        Self::run_with_cancel(cities, config, None)
    }

    /// Solves with an optional cancellation flag, polled once per pop.
    pub fn run_with_cancel<C: City>(
        cities: &[C],
        config: &BnbConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<TspResult> {
        let start_time = Instant::now();
        config.validate().map_err(TspError::InvalidConfig)?;
        let instance = Instance::from_cities(cities)?;
        Self::solve(&instance, config, start_time, cancel)
    }

    /// Solves a prebuilt instance. The clock starts at `start_time`.
    pub fn solve(
        instance: &Instance,
        config: &BnbConfig,
        start_time: Instant,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<TspResult> {
        instance.check_start(config.start_city)?;
        let n = instance.len();

        let mut bssf = seed(instance, config)?;
        debug!("seeded bssf with cost {}", bssf.cost);

        let mut count = 0usize;
        let mut cost_history = vec![bssf.cost];
        let mut stats = SearchStats::default();

        let mut frontier = PriorityFrontier::new();
        frontier.push(SearchState::root(instance, config.start_city));
        stats.enqueued = 1;

        info!(
            "branch-and-bound over {n} cities, budget {:?}",
            config.time_allowance
        );

        while !frontier.is_empty() && start_time.elapsed() < config.time_allowance {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    stats.cancelled = true;
                    break;
                }
            }

            let Some(state) = frontier.pop() else {
                break;
            };
            trace!(
                "pop lb={} depth={} frontier={}",
                state.lower_bound,
                state.depth(),
                frontier.len()
            );

            if state.lower_bound > bssf.cost {
                stats.pruned += 1;
                continue;
            }

            stats.expanded += 1;
            for child in expand(&state, instance) {
                stats.generated += 1;

                if child.is_exhausted() {
                    if !child.is_complete(n) {
                        stats.pruned += 1;
                        continue;
                    }
                    stats.candidates += 1;
                    if child.cost < bssf.cost {
                        bssf = Tour::from_positions(&child.path, instance);
                        debug_assert!(bssf.is_complete(instance));
                        count += 1;
                        cost_history.push(bssf.cost);
                        debug!("bssf improved to {} (#{count})", bssf.cost);
                    }
                } else if child.lower_bound >= bssf.cost {
                    stats.pruned += 1;
                } else {
                    frontier.push(child);
                    stats.enqueued += 1;
                }
            }
        }

        stats.max_frontier = frontier.peak_len();
        let time = start_time.elapsed().as_secs_f64();
        info!(
            "branch-and-bound done: cost {} in {time:.3}s, {count} improvements, {} expanded, {} pruned",
            bssf.cost, stats.expanded, stats.pruned
        );

        Ok(TspResult {
            cost: bssf.cost,
            time,
            count,
            soln: bssf,
            cost_history,
            stats,
        })
    }
}

/// Produces the initial BSSF tour.
fn seed(instance: &Instance, config: &BnbConfig) -> Result<Tour> {
    match config.seed_strategy {
        SeedStrategy::Greedy => Ok(greedy_tour(instance, config.start_city)),
        SeedStrategy::Random => {
            let mut rng = match config.heuristic.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::seed_from_u64(rand::random()),
            };
            random_tour(instance, config.heuristic.max_attempts, &mut rng).map(|(tour, _)| tour)
        }
    }
}
