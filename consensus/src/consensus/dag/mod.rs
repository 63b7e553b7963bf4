//! DAG (Directed Acyclic Graph) analysis for blockDAG structures
//!
//! This module provides:
//! - Block graph storage with name lookup and transposition
//! - Cycle detection (DAG validity)
//! - Past/future reachability queries
//! - Topology set queries (anticone, tips)

pub mod cycles;
pub mod ordered_set;
pub mod reachability;
pub mod relations;
pub mod topology;

pub use cycles::CycleDetector;
pub use ordered_set::OrderedSet;
pub use reachability::Reachability;
pub use relations::Graph;
pub use topology::DagTopology;
