//! Result types produced by the DAG analyses.

use consensus_core::{GraphResult, NodeName};
use serde::Serialize;

use super::dag::{DagTopology, Graph, OrderedSet, Reachability};

/// Outcome of the DAG validity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleCheck {
    /// No vertex can reach itself.
    Acyclic,
    /// The search started at `origin` returned to `origin`.
    Cycle { origin: usize },
    /// The visited markers could not be allocated. Treated as a cycle.
    Inconclusive,
}

impl CycleCheck {
    /// `true` for anything other than [`CycleCheck::Acyclic`].
    pub fn has_cycle(&self) -> bool {
        !self.is_valid_dag()
    }

    pub fn is_valid_dag(&self) -> bool {
        matches!(self, CycleCheck::Acyclic)
    }
}

/// The causal sets of a single block plus the tips of the whole graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DagSets {
    pub vertex: NodeName,
    pub past: OrderedSet,
    pub future: OrderedSet,
    pub anticone: OrderedSet,
    pub tips: OrderedSet,
}

impl DagSets {
    /// Computes past, future, anticone and tips for the vertex called `name`.
    /// Returns `Ok(None)` when no such vertex exists.
    pub fn compute(graph: &Graph, name: &str) -> GraphResult<Option<Self>> {
        let Some(vertex) = graph.index_of(name) else {
            return Ok(None);
        };

        let reachability = Reachability::new(graph);
        let past = reachability.past(vertex)?;
        let future = reachability.future(vertex)?;

        let topology = DagTopology::new(graph);
        let anticone = topology.anticone(&past, &future, vertex)?;
        let tips = topology.tips()?;

        Ok(Some(Self {
            vertex: graph.names()[vertex].clone(),
            past,
            future,
            anticone,
            tips,
        }))
    }
}
