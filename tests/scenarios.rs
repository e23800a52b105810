//! End-to-end behavior of the branch-and-bound solver.

use std::time::Duration;

use proptest::prelude::*;
use u_tsp::bnb::{BnbConfig, BnbRunner, SeedStrategy};
use u_tsp::heuristic::{greedy_tour, HeuristicConfig, HeuristicRunner};
use u_tsp::model::{route_cost, Instance, TableCity};

const INF: f64 = f64::INFINITY;

fn budget(secs: u64) -> BnbConfig {
    BnbConfig::default().with_time_allowance(Duration::from_secs(secs))
}

fn ring(n: usize) -> Vec<Vec<f64>> {
    (0..n)
        .map(|i| {
            (0..n)
                .map(|j| if j == (i + 1) % n { 1.0 } else { 10.0 })
                .collect()
        })
        .collect()
}

fn uniform(n: usize, k: f64) -> Vec<Vec<f64>> {
    vec![vec![k; n]; n]
}

/// Cheapest closed tour starting at position 0, by enumeration.
fn brute_force(instance: &Instance) -> f64 {
    fn go(instance: &Instance, route: &mut Vec<usize>, used: &mut [bool], best: &mut f64) {
        if route.len() == used.len() {
            *best = best.min(route_cost(route, instance));
            return;
        }
        for next in 0..used.len() {
            if !used[next] {
                used[next] = true;
                route.push(next);
                go(instance, route, used, best);
                route.pop();
                used[next] = false;
            }
        }
    }

    let mut used = vec![false; instance.len()];
    used[0] = true;
    let mut best = INF;
    go(instance, &mut vec![0], &mut used, &mut best);
    best
}

#[test]
fn ring_of_four_finds_cost_four() {
    let cities = TableCity::from_table(ring(4));
    let result = BnbRunner::run(&cities, &budget(10)).unwrap();
    assert_eq!(result.cost, 4.0);
    assert_eq!(result.soln.order, vec![0, 1, 2, 3]);
    assert_eq!(result.soln.cost, 4.0);
}

#[test]
fn ring_is_found_from_a_random_seed() {
    let cities = TableCity::from_table(ring(7));
    let config = budget(10)
        .with_seed_strategy(SeedStrategy::Random)
        .with_heuristic(HeuristicConfig::default().with_seed(11));
    let result = BnbRunner::run(&cities, &config).unwrap();
    assert_eq!(result.cost, 7.0);
    assert_eq!(result.cost_history.len(), result.count + 1);
}

#[test]
fn zero_budget_returns_greedy_seed() {
    let table = vec![
        vec![INF, 3.0, 1.0, 9.0, 4.0],
        vec![2.0, INF, 8.0, 1.0, 7.0],
        vec![6.0, 1.0, INF, 5.0, 2.0],
        vec![1.0, 7.0, 3.0, INF, 6.0],
        vec![4.0, 2.0, 9.0, 3.0, INF],
    ];
    let instance = Instance::from_table(&table).unwrap();
    let seed = greedy_tour(&instance, 0);

    let cities = TableCity::from_table(table);
    let config = BnbConfig::default().with_time_allowance(Duration::ZERO);
    let result = BnbRunner::run(&cities, &config).unwrap();

    assert_eq!(result.count, 0);
    assert_eq!(result.soln, seed);
    assert_eq!(result.cost, seed.cost);
    assert_eq!(result.cost_history, vec![seed.cost]);
}

#[test]
fn uniform_costs_give_n_times_k() {
    for n in 3..=7 {
        let cities = TableCity::from_table(uniform(n, 2.5));
        let result = BnbRunner::run(&cities, &budget(10)).unwrap();
        assert_eq!(result.cost, n as f64 * 2.5, "n = {n}");
        assert_eq!(result.count, 0);
        assert!(result.soln.is_complete(&Instance::from_table(&uniform(n, 2.5)).unwrap()));
    }
}

#[test]
fn default_heuristics_agree_with_solver_contract() {
    let cities = TableCity::from_table(ring(5));
    let greedy = HeuristicRunner::greedy(&cities, &HeuristicConfig::default()).unwrap();
    let random =
        HeuristicRunner::random(&cities, &HeuristicConfig::default().with_seed(5)).unwrap();
    let bnb = BnbRunner::run(&cities, &budget(10)).unwrap();

    assert!(bnb.cost <= greedy.cost);
    assert!(bnb.cost <= random.cost);
    assert_eq!(bnb.cost, 5.0);
}

fn arb_table() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (3usize..8).prop_flat_map(|n| {
        prop::collection::vec(
            prop::collection::vec(
                prop_oneof![5 => (1u32..30).prop_map(f64::from), 1 => Just(INF)],
                n,
            ),
            n,
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn matches_brute_force(table in arb_table()) {
        let instance = Instance::from_table(&table).unwrap();
        let optimum = brute_force(&instance);
        let seed = greedy_tour(&instance, 0);

        let cities = TableCity::from_table(table);
        let result = BnbRunner::run(&cities, &budget(30)).unwrap();

        if optimum.is_finite() {
            prop_assert_eq!(result.cost, optimum);
            prop_assert!(result.soln.is_complete(&instance));
        } else {
            prop_assert!(result.cost.is_infinite());
            prop_assert_eq!(result.count, 0);
        }
        prop_assert!(result.cost <= seed.cost);
        prop_assert_eq!(result.soln.cost, result.cost);
        for w in result.cost_history.windows(2) {
            prop_assert!(w[1] < w[0]);
        }
        prop_assert_eq!(result.cost_history[0], seed.cost);
    }
}
