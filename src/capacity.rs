//! Per-group capacity targets.

use crate::error::GroupError;

/// Compute the target size for each group.
///
/// Exact mode requires `total` to divide evenly into `groups` and hands
/// every group `total / groups` items. Near-equal mode gives
/// `total % groups` groups one extra item; the list comes back
/// largest-first, a starting order the packer is free to permute between
/// attempts.
///
/// The orchestrator validates `total >= 1` and `groups >= 1` before
/// calling.
pub fn plan_capacities(
    total: usize,
    groups: usize,
    allow_near: bool,
) -> Result<Vec<usize>, GroupError> {
    if !allow_near {
        if total % groups != 0 {
            return Err(GroupError::NotDivisible { total, groups });
        }
        return Ok(vec![total / groups; groups]);
    }

    let low = total / groups;
    let extra = total % groups;
    let mut capacities = vec![low + 1; extra];
    capacities.resize(groups, low);
    Ok(capacities)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_division_gives_equal_capacities() {
        assert_eq!(plan_capacities(6, 3, false).unwrap(), vec![2, 2, 2]);
        assert_eq!(plan_capacities(4, 1, false).unwrap(), vec![4]);
    }

    #[test]
    fn exact_mode_rejects_remainders() {
        let err = plan_capacities(5, 2, false).unwrap_err();
        assert_eq!(err, GroupError::NotDivisible { total: 5, groups: 2 });
        let msg = err.to_string();
        assert!(msg.contains('5'));
        assert!(msg.contains('2'));
        assert!(msg.contains("near-equal"));
    }

    #[test]
    fn near_mode_splits_remainder_largest_first() {
        assert_eq!(plan_capacities(5, 2, true).unwrap(), vec![3, 2]);
        assert_eq!(plan_capacities(7, 3, true).unwrap(), vec![3, 2, 2]);
        assert_eq!(plan_capacities(6, 3, true).unwrap(), vec![2, 2, 2]);
    }

    #[test]
    fn near_mode_pads_with_empty_groups_when_groups_exceed_items() {
        assert_eq!(plan_capacities(3, 5, true).unwrap(), vec![1, 1, 1, 0, 0]);
    }

    #[test]
    fn capacities_always_sum_to_total() {
        for total in 1..20 {
            for groups in 1..8 {
                let caps = plan_capacities(total, groups, true).unwrap();
                assert_eq!(caps.len(), groups);
                assert_eq!(caps.iter().sum::<usize>(), total);
            }
        }
    }
}
