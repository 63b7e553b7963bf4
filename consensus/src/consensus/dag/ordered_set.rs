use std::collections::BTreeSet;
use std::fmt;

use consensus_core::NodeName;
use serde::Serialize;

/// Sorted, duplicate-free collection of block names in Genesis-first order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OrderedSet {
    names: BTreeSet<NodeName>,
}

impl OrderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `name` at its sorted position. Returns `false` if it was
    /// already present.
    pub fn insert(&mut self, name: NodeName) -> bool {
        self.names.insert(name)
    }

    /// Exact match against the stored names.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n.as_str() == name)
    }

    pub fn contains_name(&self, name: &NodeName) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeName> {
        self.names.iter()
    }

    /// Names in output order.
    pub fn to_vec(&self) -> Vec<NodeName> {
        self.names.iter().cloned().collect()
    }

    pub fn is_disjoint(&self, other: &OrderedSet) -> bool {
        self.names.is_disjoint(&other.names)
    }
}

impl FromIterator<NodeName> for OrderedSet {
    fn from_iter<T: IntoIterator<Item = NodeName>>(iter: T) -> Self {
        Self { names: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a OrderedSet {
    type Item = &'a NodeName;
    type IntoIter = std::collections::btree_set::Iter<'a, NodeName>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

// Every name is followed by a single space.
impl fmt::Display for OrderedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for name in &self.names {
            write!(f, "{} ", name)?;
        }
        Ok(())
    }
}
