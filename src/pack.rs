//! Capacity-constrained assignment of components to groups.
//!
//! Bin packing with fixed bins is NP-hard, so the packer runs randomized
//! restarts of a depth-first backtracking search. Each attempt reshuffles
//! the component order and the capacity-to-bin assignment, which is what
//! lets repeated attempts reach structurally different solutions.

use std::collections::HashSet;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::canon::canonical_key;
use crate::component::Component;
use crate::error::{GroupError, PackingFailure};

/// A single grouping: one list of items per bin, in bin order.
pub type Grouping = Vec<Vec<String>>;

/// Knobs for the randomized packing search.
#[derive(Debug, Clone, Copy)]
pub struct PackConfig {
    /// Structurally distinct groupings to collect before stopping.
    pub max_solutions: usize,
    /// Randomized restarts before giving up.
    pub max_attempts: usize,
}

impl Default for PackConfig {
    fn default() -> Self {
        PackConfig {
            max_solutions: 1,
            max_attempts: 1200,
        }
    }
}

/// Bin-assignment state for one attempt. Mutated in place during the
/// search and undone on backtrack; never shared across attempts.
struct SearchState {
    capacities: Vec<usize>,
    sums: Vec<usize>,
    groups: Vec<Vec<String>>,
    dead: HashSet<(usize, Vec<usize>)>,
}

impl SearchState {
    fn new(capacities: Vec<usize>) -> Self {
        let bins = capacities.len();
        SearchState {
            capacities,
            sums: vec![0; bins],
            groups: vec![Vec::new(); bins],
            dead: HashSet::new(),
        }
    }
}

/// Assign every component to a capacity-bounded bin, collecting up to
/// `config.max_solutions` structurally distinct groupings.
///
/// Attempts repeat until enough distinct solutions are found or
/// `config.max_attempts` runs out. Each attempt shuffles the component
/// order (even odds: re-sorted largest-first instead, which helps tight
/// instances) and with even odds shuffles the capacity list, then runs
/// the backtracking search. Solutions are deduplicated by canonical key.
///
/// Returned groups follow the bin order of the capacity list the winning
/// attempt used, so group `i` holds at most as many items as that list's
/// slot `i`.
pub fn pack_components<R: Rng>(
    components: &[Component],
    capacities: &[usize],
    config: &PackConfig,
    rng: &mut R,
) -> Result<Vec<Grouping>, GroupError> {
    let max_capacity = capacities.iter().copied().max().unwrap_or(0);
    if let Some(oversized) = components.iter().find(|c| c.size() > max_capacity) {
        return Err(GroupError::PackingInfeasible {
            reason: PackingFailure::ComponentTooLarge {
                size: oversized.size(),
                max_capacity,
            },
        });
    }

    let mut solutions: Vec<Grouping> = Vec::new();
    let mut seen: HashSet<Vec<Vec<String>>> = HashSet::new();
    let mut attempts = 0;

    while solutions.len() < config.max_solutions && attempts < config.max_attempts {
        attempts += 1;

        let mut order: Vec<usize> = (0..components.len()).collect();
        order.shuffle(rng);
        if rng.gen_bool(0.5) {
            // stable sort: the shuffle survives as tiebreak among equal sizes
            order.sort_by_key(|&i| std::cmp::Reverse(components[i].size()));
        }

        let mut caps = capacities.to_vec();
        if rng.gen_bool(0.5) {
            caps.shuffle(rng);
        }

        let mut state = SearchState::new(caps);
        if place(components, &order, 0, &mut state) {
            if seen.insert(canonical_key(&state.groups)) {
                solutions.push(state.groups);
            }
        }
    }

    if solutions.is_empty() {
        return Err(GroupError::PackingInfeasible {
            reason: PackingFailure::AttemptsExhausted { attempts },
        });
    }

    debug!(
        "collected {} distinct grouping(s) in {} attempt(s)",
        solutions.len(),
        attempts
    );
    Ok(solutions)
}

/// Place `components[order[depth..]]` into bins, depth-first. Returns true
/// with the completed assignment left in `state.groups` once every
/// component is placed.
fn place(
    components: &[Component],
    order: &[usize],
    depth: usize,
    state: &mut SearchState,
) -> bool {
    if depth == order.len() {
        return true;
    }

    let component = &components[order[depth]];
    let memo_key = (depth, state.sums.clone());
    if state.dead.contains(&memo_key) {
        return false;
    }

    // tightest remaining capacity first, ties by bin index
    let mut bins: Vec<usize> = (0..state.capacities.len()).collect();
    bins.sort_by_key(|&j| (state.capacities[j] - state.sums[j], j));

    for j in bins {
        if state.sums[j] + component.size() > state.capacities[j] {
            continue;
        }
        // empty bins are interchangeable: only the lowest-indexed one is tried
        if state.sums[j] == 0 && state.sums[..j].iter().any(|&s| s == 0) {
            continue;
        }

        state.sums[j] += component.size();
        state.groups[j].extend(component.items.iter().cloned());
        if place(components, order, depth + 1, state) {
            return true;
        }
        let kept = state.groups[j].len() - component.size();
        state.groups[j].truncate(kept);
        state.sums[j] -= component.size();
    }

    state.dead.insert(memo_key);
    false
}
