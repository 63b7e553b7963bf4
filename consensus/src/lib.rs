//! BlockDAG analysis library
//!
//! Verifies that a block graph is acyclic and computes, for a chosen block,
//! its past, future and anticone together with the tips of the graph.

pub mod consensus;

// Re-export key types for easier access
pub use consensus_core::{GraphError, GraphResult, NodeName};
pub use consensus::dag::{CycleDetector, DagTopology, Graph, OrderedSet, Reachability};
pub use consensus::types::{CycleCheck, DagSets};
