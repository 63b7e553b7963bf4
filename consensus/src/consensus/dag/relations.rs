use std::collections::HashMap;
use std::fmt;

use consensus_core::{GraphError, GraphResult, NodeName, MAX_NODE_NAME_LEN};
use tracing::{trace, warn};

/// Adjacency-list block graph with a fixed vertex set.
///
/// Vertices are addressed by dense indices `0..vertex_count`. An edge
/// `child -> parent` means `child` references `parent`.
#[derive(Clone, Debug)]
pub struct Graph {
    names: Vec<NodeName>,
    index: HashMap<NodeName, usize>,
    // Targets are stored in insertion order; successors() walks them newest first.
    adjacency: Vec<Vec<usize>>,
    max_name_len: usize,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// Only the first `vertex_count` names are used. Duplicate names resolve
    /// to their first occurrence.
    pub fn build<I, S>(vertex_count: usize, names: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build_bounded(vertex_count, names, MAX_NODE_NAME_LEN)
    }

    /// Same as [`Graph::build`] with a custom bound on name length.
    pub fn build_bounded<I, S>(vertex_count: usize, names: I, max_name_len: usize) -> GraphResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if vertex_count == 0 {
            return Err(GraphError::ZeroVertices);
        }

        let names: Vec<NodeName> = names
            .into_iter()
            .take(vertex_count)
            .map(|name| NodeName::bounded(name.as_ref(), max_name_len))
            .collect();

        if names.len() < vertex_count {
            return Err(GraphError::MissingNames { expected: vertex_count, found: names.len() });
        }

        let mut index = HashMap::with_capacity(vertex_count);
        for (i, name) in names.iter().enumerate() {
            index.entry(name.clone()).or_insert(i);
        }

        Ok(Self {
            names,
            index,
            adjacency: vec![Vec::new(); vertex_count],
            max_name_len,
        })
    }

    /// Builds a graph and inserts every `(source, target)` pair in order.
    pub fn from_edges<I, S, E, A, B>(vertex_count: usize, names: I, edges: E) -> GraphResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        E: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let mut graph = Self::build(vertex_count, names)?;
        for (source, target) in edges {
            graph.add_edge(source.as_ref(), target.as_ref());
        }
        Ok(graph)
    }

    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn names(&self) -> &[NodeName] {
        &self.names
    }

    /// Index of the first vertex called exactly `name`. Names longer than the
    /// graph's bound can never match a stored name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        if name.len() > self.max_name_len {
            return None;
        }
        self.index.get(&NodeName::bounded(name, self.max_name_len)).copied()
    }


    pub fn name_of(&self, index: usize) -> Option<&NodeName> {
        self.names.get(index)
    }

    /// Adds `source -> target`. Returns `false` and drops the edge when either
    /// endpoint is not a known vertex.
    pub fn add_edge(&mut self, source: &str, target: &str) -> bool {
        let Some(source_idx) = self.index_of(source) else {
            warn!("Dropping edge {} -> {}: unknown source vertex", source, target);
            return false;
        };
        let Some(target_idx) = self.index_of(target) else {
            warn!("Dropping edge {} -> {}: unknown target vertex", source, target);
            return false;
        };

        trace!("Adding edge {} -> {}", source_idx, target_idx);
        self.adjacency[source_idx].push(target_idx);
        true
    }

    /// Outgoing neighbours of `index`, most recently inserted first. Empty when
    /// `index` is out of range.
    pub fn successors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency
            .get(index)
            .into_iter()
            .flat_map(|targets| targets.iter().rev().copied())
    }

    /// Every edge as `(source, target)`, sources in index order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.vertex_count()).flat_map(move |source| self.successors(source).map(move |target| (source, target)))
    }

    /// Builds a fresh graph over the same vertices with every edge reversed.
    pub fn transpose(&self) -> Graph {
        let mut transposed = Graph {
            names: self.names.clone(),
            index: self.index.clone(),
            adjacency: vec![Vec::new(); self.vertex_count()],
            max_name_len: self.max_name_len,
        };

        for (source, target) in self.edges() {
            transposed.adjacency[target].push(source);
        }

        transposed
    }

    /// Number of edges pointing at each vertex.
    pub fn in_degrees(&self) -> GraphResult<Vec<usize>> {
        let mut degrees = filled(self.vertex_count(), 0usize)?;
        for (_, target) in self.edges() {
            degrees[target] += 1;
        }
        Ok(degrees)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.names.iter().enumerate() {
            write!(f, "Node [{}] : ", name)?;
            for target in self.successors(i) {
                write!(f, "({}) -> ", self.names[target])?;
            }
            writeln!(f, "(null)")?;
        }
        Ok(())
    }
}

/// Allocates a per-traversal buffer without aborting on allocation failure.
pub(crate) fn filled<T: Clone>(len: usize, value: T) -> GraphResult<Vec<T>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| GraphError::MarkerAllocation(len))?;
    buffer.resize(len, value);
    Ok(buffer)
}
