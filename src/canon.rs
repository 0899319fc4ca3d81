//! Canonical representation of a grouping, used to detect duplicates.

/// Canonical key for a grouping: items sorted within each group, then the
/// groups sorted lexicographically. Two groupings that differ only by
/// group order or intra-group order share one key. Used purely for
/// deduplication; output keeps its bin order.
pub fn canonical_key(groups: &[Vec<String>]) -> Vec<Vec<String>> {
    let mut canon: Vec<Vec<String>> = groups
        .iter()
        .map(|group| {
            let mut group = group.clone();
            group.sort();
            group
        })
        .collect();
    canon.sort();
    canon
}
