use std::collections::VecDeque;

use consensus_core::{GraphError, GraphResult};
use tracing::trace;

use super::ordered_set::OrderedSet;
use super::relations::{filled, Graph};

/// Breadth-first reachability queries over a [`Graph`].
pub struct Reachability<'a> {
    graph: &'a Graph,
}

impl<'a> Reachability<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// Every vertex reachable from `vertex` along outgoing edges, excluding
    /// `vertex` itself.
    pub fn past(&self, vertex: usize) -> GraphResult<OrderedSet> {
        let len = self.graph.vertex_count();
        if vertex >= len {
            return Err(GraphError::VertexOutOfRange { index: vertex, len });
        }

        let mut visited = filled(len, false)?;
        let mut queue = VecDeque::new();
        let mut past = OrderedSet::new();

        visited[vertex] = true;
        queue.push_back(vertex);

        while let Some(current) = queue.pop_front() {
            if current != vertex {
                past.insert(self.graph.names()[current].clone());
            }

            for next in self.graph.successors(current) {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }

        trace!("past({}) has {} blocks", self.graph.names()[vertex], past.len());
        Ok(past)
    }

    /// Every vertex that can reach `vertex`, computed as the past of `vertex`
    /// in the transposed graph.
    pub fn future(&self, vertex: usize) -> GraphResult<OrderedSet> {
        let transposed = self.graph.transpose();
        Reachability::new(&transposed).past(vertex)
    }
}
