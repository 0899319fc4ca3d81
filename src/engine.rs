//! Orchestration: validate inputs, build components, plan capacities,
//! run the packer.

use log::debug;
use rand::Rng;

use crate::capacity::plan_capacities;
use crate::component::build_components;
use crate::error::GroupError;
use crate::pack::{pack_components, Grouping, PackConfig};

/// Produce up to `desired` structurally distinct groupings of `items`
/// into `group_count` groups, honoring the must-be-together `pairs`.
///
/// The search is randomized: repeated calls with identical input may
/// return different groupings. Use [`generate_with_rng`] with a seeded
/// random source for reproducible output.
pub fn generate(
    items: &[String],
    pairs: &[(String, String)],
    group_count: usize,
    allow_near: bool,
    desired: usize,
) -> Result<Vec<Grouping>, GroupError> {
    let config = PackConfig {
        max_solutions: desired.max(1),
        ..PackConfig::default()
    };
    generate_with_rng(
        items,
        pairs,
        group_count,
        allow_near,
        &config,
        &mut rand::thread_rng(),
    )
}

/// [`generate`] with a caller-supplied random source and search budget.
pub fn generate_with_rng<R: Rng>(
    items: &[String],
    pairs: &[(String, String)],
    group_count: usize,
    allow_near: bool,
    config: &PackConfig,
    rng: &mut R,
) -> Result<Vec<Grouping>, GroupError> {
    if items.is_empty() {
        return Err(GroupError::NoItems);
    }
    if group_count < 1 {
        return Err(GroupError::InvalidGroupCount);
    }

    let components = build_components(items, pairs)?;
    let capacities = plan_capacities(items.len(), group_count, allow_near)?;
    debug!(
        "{} item(s) in {} component(s), capacities {:?}",
        items.len(),
        components.len(),
        capacities
    );

    pack_components(&components, &capacities, config, rng)
}
