//! Reduce items and pairing constraints to indivisible components.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::error::GroupError;
use crate::union_find::UnionFind;

/// A maximal set of items transitively connected by pairing constraints.
///
/// Components are the atomic unit of assignment: the packer places a whole
/// component into one group, never splitting it. An unconstrained item is
/// its own component of size 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub items: Vec<String>,
}

impl Component {
    pub fn size(&self) -> usize {
        self.items.len()
    }
}

/// Merge items connected by pairing constraints into components.
///
/// Items keep their input order inside each component, and components
/// appear in the order their first item appears in `items`. Every pair
/// must reference items present in `items`; the error names the missing
/// item(s).
pub fn build_components(
    items: &[String],
    pairs: &[(String, String)],
) -> Result<Vec<Component>, GroupError> {
    let index: HashMap<&str, usize> = items
        .iter()
        .enumerate()
        .map(|(i, item)| (item.as_str(), i))
        .collect();

    let mut merger = UnionFind::new(items.len());
    for (a, b) in pairs {
        match (index.get(a.as_str()), index.get(b.as_str())) {
            (Some(&ia), Some(&ib)) => merger.union(ia, ib),
            (ia, ib) => {
                let mut missing = Vec::new();
                if ia.is_none() {
                    missing.push(a.as_str());
                }
                if ib.is_none() {
                    missing.push(b.as_str());
                }
                return Err(GroupError::UnknownItemReference(missing.join(", ")));
            }
        }
    }

    // IndexMap keeps components ordered by first-encountered root
    let mut by_root: IndexMap<usize, Vec<String>> = IndexMap::new();
    for (i, item) in items.iter().enumerate() {
        let root = merger.find(i);
        by_root.entry(root).or_insert_with(Vec::new).push(item.clone());
    }

    Ok(by_root
        .into_values()
        .map(|items| Component { items })
        .collect())
}
