use consensus_core::GraphResult;
use tracing::debug;

use super::relations::{filled, Graph};
use crate::consensus::types::CycleCheck;

/// Depth-first cycle detection.
///
/// Each vertex in turn is used as an origin; a cycle is reported only when the
/// search from an origin comes back to that same origin.
pub struct CycleDetector<'a> {
    graph: &'a Graph,
}

impl<'a> CycleDetector<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    pub fn check(&self) -> CycleCheck {
        self.check_with_markers(filled(self.graph.vertex_count(), false))
    }

    /// Runs the search over pre-allocated markers. A failed allocation is
    /// reported as [`CycleCheck::Inconclusive`].
    pub(crate) fn check_with_markers(&self, markers: GraphResult<Vec<bool>>) -> CycleCheck {
        let mut visited = match markers {
            Ok(markers) => markers,
            Err(err) => {
                debug!("Cycle check inconclusive: {}", err);
                return CycleCheck::Inconclusive;
            }
        };

        for origin in 0..self.graph.vertex_count() {
            visited.fill(false);

            if self.returns_to_origin(origin, &mut visited) {
                debug!("Cycle found through vertex {}", self.graph.names()[origin]);
                return CycleCheck::Cycle { origin };
            }
        }

        CycleCheck::Acyclic
    }

    pub fn has_cycle(&self) -> bool {
        self.check().has_cycle()
    }

    fn returns_to_origin(&self, origin: usize, visited: &mut [bool]) -> bool {
        let mut stack = vec![origin];

        while let Some(current) = stack.pop() {
            if current == origin && visited[origin] {
                return true;
            }
            if visited[current] {
                continue;
            }
            visited[current] = true;

            // Reverse so the first successor is explored first.
            let successors: Vec<usize> = self.graph.successors(current).collect();
            stack.extend(successors.into_iter().rev());
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(names: &[&str], edges: &[(&str, &str)]) -> Graph {
        Graph::from_edges(names.len(), names.iter().copied(), edges.iter().copied()).unwrap()
    }

    #[test]
    fn test_diamond_is_acyclic() {
        let g = graph(
            &["Genesis", "A", "B", "C"],
            &[("A", "Genesis"), ("B", "Genesis"), ("C", "A"), ("C", "B")],
        );
        assert_eq!(CycleDetector::new(&g).check(), CycleCheck::Acyclic);
        assert!(!CycleDetector::new(&g).has_cycle());
    }

    #[test]
    fn test_back_edge_to_tip_is_a_cycle() {
        let g = graph(
            &["Genesis", "A", "B", "C"],
            &[("A", "Genesis"), ("B", "Genesis"), ("C", "A"), ("C", "B"), ("Genesis", "C")],
        );
        let check = CycleDetector::new(&g).check();
        // Genesis is the first origin and sits on the cycle.
        assert_eq!(check, CycleCheck::Cycle { origin: 0 });
        assert!(check.has_cycle());
    }

    #[test]
    fn test_self_loop_is_a_cycle() {
        let g = graph(&["Genesis", "A"], &[("A", "A")]);
        assert_eq!(CycleDetector::new(&g).check(), CycleCheck::Cycle { origin: 1 });
    }

    #[test]
    fn test_cycle_not_through_first_origin() {
        // Genesis leads into the A <-> B cycle but is not on it.
        let g = graph(&["Genesis", "A", "B"], &[("Genesis", "A"), ("A", "B"), ("B", "A")]);
        assert_eq!(CycleDetector::new(&g).check(), CycleCheck::Cycle { origin: 1 });
    }

    #[test]
    fn test_single_vertex_without_edges() {
        let g = graph(&["Genesis"], &[]);
        assert_eq!(CycleDetector::new(&g).check(), CycleCheck::Acyclic);
    }

    #[test]
    fn test_shared_ancestor_is_not_a_cycle() {
        // Two paths to Genesis revisit it without ever returning to C.
        let g = graph(
            &["Genesis", "A", "B", "C", "D"],
            &[("A", "Genesis"), ("B", "A"), ("C", "A"), ("C", "B"), ("D", "C"), ("D", "Genesis")],
        );
        assert!(CycleDetector::new(&g).check().is_valid_dag());
    }

    #[test]
    fn test_failed_marker_allocation_is_inconclusive() {
        let acyclic = graph(&["Genesis", "A"], &[("A", "Genesis")]);
        let detector = CycleDetector::new(&acyclic);

        let check = detector.check_with_markers(filled(usize::MAX, false));
        assert_eq!(check, CycleCheck::Inconclusive);
        assert!(check.has_cycle());
        assert_ne!(check, CycleCheck::Cycle { origin: 0 });

        // Same graph with real markers is a valid DAG.
        assert_eq!(detector.check_with_markers(filled(2, false)), CycleCheck::Acyclic);
    }

    #[test]
    fn test_inconclusive_counts_as_cycle() {
        assert!(CycleCheck::Inconclusive.has_cycle());
        assert!(!CycleCheck::Inconclusive.is_valid_dag());
        assert_ne!(CycleCheck::Inconclusive, CycleCheck::Cycle { origin: 0 });
    }
}
