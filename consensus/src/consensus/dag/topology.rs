use consensus_core::{GraphError, GraphResult};

use super::ordered_set::OrderedSet;
use super::relations::Graph;

/// Whole-graph set queries: anticone and tips.
pub struct DagTopology<'a> {
    graph: &'a Graph,
}

impl<'a> DagTopology<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// Every vertex other than `vertex` that is in neither `past` nor `future`.
    pub fn anticone(&self, past: &OrderedSet, future: &OrderedSet, vertex: usize) -> GraphResult<OrderedSet> {
        let len = self.graph.vertex_count();
        if vertex >= len {
            return Err(GraphError::VertexOutOfRange { index: vertex, len });
        }

        Ok(self
            .graph
            .names()
            .iter()
            .enumerate()
            .filter(|(i, name)| *i != vertex && !past.contains_name(name) && !future.contains_name(name))
            .map(|(_, name)| name.clone())
            .collect())
    }

    /// Vertices no other vertex points to.
    pub fn tips(&self) -> GraphResult<OrderedSet> {
        let degrees = self.graph.in_degrees()?;
        Ok(self
            .graph
            .names()
            .iter()
            .zip(degrees)
            .filter(|(_, degree)| *degree == 0)
            .map(|(name, _)| name.clone())
            .collect())
    }
}
