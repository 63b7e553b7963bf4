//! Core vocabulary shared by the blockDAG analysis crates.
//!
//! Holds the bounded block name type and its Genesis-first ordering, the
//! shared constants, and the error taxonomy used by the graph store and the
//! traversal engine.

pub mod constants;
pub mod errors;
pub mod name;

pub use constants::{GENESIS_NAME, MAX_NODE_NAME_LEN};
pub use errors::{GraphError, GraphResult};
pub use name::NodeName;
