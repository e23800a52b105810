//! Random-valid and greedy baseline tours.

use std::time::Instant;

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::config::HeuristicConfig;
use crate::error::{Result, TspError};
use crate::model::{City, Instance, Tour};
use crate::result::{SearchStats, TspResult};

/// Draws random permutations until one has finite cost.
///
/// Returns the tour and the number of permutations drawn.
///
/// # Errors
///
/// [`TspError::Infeasible`] if `max_attempts` permutations all hit a
/// missing edge.
pub fn random_tour<R: Rng>(
    instance: &Instance,
    max_attempts: usize,
    rng: &mut R,
) -> Result<(Tour, usize)> {
    let mut perm: Vec<usize> = (0..instance.len()).collect();
    for attempt in 1..=max_attempts {
        perm.shuffle(rng);
        let tour = Tour::from_positions(&perm, instance);
        if tour.is_feasible() {
            return Ok((tour, attempt));
        }
    }
    Err(TspError::Infeasible {
        attempts: max_attempts,
    })
}

/// Builds a tour by always taking the cheapest edge to an unvisited city.
///
/// Works on a copy of the cost matrix: each city's column is
/// tombstoned once it is entered, so the row minimum of the current
/// city only ranges over unvisited cities. When the current row has no
/// finite entry left, the lowest-positioned unvisited city is taken and
/// the resulting tour is infinite.
///
/// # Panics
///
/// Panics if `start` is not a valid position.
pub fn greedy_tour(instance: &Instance, start: usize) -> Tour {
    let n = instance.len();
    let mut live = instance.costs().clone();
    let mut visited = vec![false; n];
    let mut route = Vec::with_capacity(n);
    let mut current = start;

    loop {
        route.push(current);
        visited[current] = true;
        live.tombstone_col(current);
        if route.len() == n {
            break;
        }
        current = match live.row_min(current) {
            Some((next, _)) => next,
            None => visited.iter().position(|&v| !v).unwrap_or(start),
        };
    }

    Tour::from_positions(&route, instance)
}

/// Runs the baseline heuristics against a city list.
pub struct HeuristicRunner;

impl HeuristicRunner {
    /// Random-valid tour. `count` in the result is the attempt count.
    pub fn random<C: City>(cities: &[C], config: &HeuristicConfig) -> Result<TspResult> {
        let start_time = Instant::now();
        config.validate().map_err(TspError::InvalidConfig)?;
        let instance = Instance::from_cities(cities)?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        let (tour, attempts) = random_tour(&instance, config.max_attempts, &mut rng)?;
        debug!("random tour cost {} after {attempts} attempts", tour.cost);

        Ok(TspResult {
            cost: tour.cost,
            time: start_time.elapsed().as_secs_f64(),
            count: attempts,
            cost_history: vec![tour.cost],
            soln: tour,
            stats: SearchStats::default(),
        })
    }

    /// Greedy nearest-neighbour tour from `config.start_city`.
    pub fn greedy<C: City>(cities: &[C], config: &HeuristicConfig) -> Result<TspResult> {
        let start_time = Instant::now();
        config.validate().map_err(TspError::InvalidConfig)?;
        let instance = Instance::from_cities(cities)?;
        instance.check_start(config.start_city)?;

        let tour = greedy_tour(&instance, config.start_city);
        debug!("greedy tour cost {}", tour.cost);

        Ok(TspResult {
            cost: tour.cost,
            time: start_time.elapsed().as_secs_f64(),
            count: 0,
            cost_history: vec![tour.cost],
            soln: tour,
            stats: SearchStats::default(),
        })
    }
}
