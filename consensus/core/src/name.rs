use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::constants::{GENESIS_NAME, MAX_NODE_NAME_LEN};

/// A block name, truncated to a bounded number of bytes.
///
/// Ordering is total but not lexical: `Genesis` sorts before every other
/// name, the rest compare byte-wise.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeName(String);

impl NodeName {
    /// Builds a name bounded by [`MAX_NODE_NAME_LEN`].
    pub fn new(name: &str) -> Self {
        Self::bounded(name, MAX_NODE_NAME_LEN)
    }

    /// Builds a name keeping at most `max_len` bytes, cut on a char boundary.
    pub fn bounded(name: &str, max_len: usize) -> Self {
        let mut end = name.len().min(max_len);
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        Self(name[..end].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_genesis(&self) -> bool {
        self.0 == GENESIS_NAME
    }
}

impl Ord for NodeName {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_genesis(), other.is_genesis()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.0.as_bytes().cmp(other.0.as_bytes()),
        }
    }
}

impl PartialOrd for NodeName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for NodeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genesis_sorts_first() {
        let genesis = NodeName::new("Genesis");
        let a = NodeName::new("A");
        let lower = NodeName::new("aaa");

        assert!(genesis < a);
        assert!(genesis < lower);
        assert!(a > genesis);
        assert_eq!(genesis.cmp(&NodeName::new("Genesis")), Ordering::Equal);
    }

    #[test]
    fn test_non_genesis_names_compare_bytewise() {
        // Uppercase bytes come before lowercase ones.
        assert!(NodeName::new("B") < NodeName::new("a"));
        assert!(NodeName::new("A") < NodeName::new("AB"));
        assert!(NodeName::new("Gen") < NodeName::new("Genesis2"));
    }

    #[test]
    fn test_names_are_truncated() {
        let name = NodeName::new("VeryLongBlockName");
        assert_eq!(name.as_str(), "VeryLongB");
        assert_eq!(NodeName::bounded("abcdef", 3).as_str(), "abc");
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        // 'é' is two bytes; cutting at 2 would split it.
        let name = NodeName::bounded("aé", 2);
        assert_eq!(name.as_str(), "a");
    }

    #[test]
    fn test_truncated_genesis_is_not_genesis() {
        assert!(!NodeName::bounded("Genesis", 3).is_genesis());
        assert!(NodeName::new("Genesis").is_genesis());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&NodeName::new("C")).unwrap();
        assert_eq!(json, "\"C\"");
    }
}
