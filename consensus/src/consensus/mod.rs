//! Consensus-side analysis of a blockDAG: graph storage, traversal and the
//! derived causal sets.

pub mod dag;
pub mod types;

pub use dag::{CycleDetector, DagTopology, Graph, OrderedSet, Reachability};
pub use types::{CycleCheck, DagSets};
