//! Depth-first topological sort.

use crate::error::{Error, Result};
use crate::schema::ModId;

use std::collections::{BTreeMap, HashMap};
use tracing::warn;

/// Directed graph from a mod to the mods it depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepGraph {
    nodes: BTreeMap<ModId, Vec<ModId>>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

impl DepGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` with edges to `deps`, merging with any edges already present.
    ///
    /// Edge order is kept; repeated edges and self-edges are dropped.
    pub fn add_node<I>(&mut self, id: ModId, deps: I)
    where
        I: IntoIterator<Item = ModId>,
    {
        let edges = self.nodes.entry(id).or_default();
        for dep in deps {
            if dep != id && !edges.contains(&dep) {
                edges.push(dep);
            }
        }
    }

    /// IDs that were added as nodes, in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = ModId> + '_ {
        self.nodes.keys().copied()
    }

    pub fn dependencies_of(&self, id: ModId) -> &[ModId] {
        self.nodes.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Order every node and edge target so dependencies come first.
    ///
    /// Cycles are broken deterministically.
    pub fn top_sort(&self) -> Vec<ModId> {
        let mut order = Vec::new();
        let walked = self.walk(&mut order, &mut |path| {
            warn!(cycle = ?path, "breaking dependency cycle");
            Ok(())
        });
        debug_assert!(walked.is_ok());
        order
    }

    /// Like [`DepGraph::top_sort`] but fails on the first cycle found.
    pub fn try_top_sort(&self) -> Result<Vec<ModId>> {
        let mut order = Vec::new();
        self.walk(&mut order, &mut |path| Err(Error::CycleDetected(path)))?;
        Ok(order)
    }

    fn walk<F>(&self, order: &mut Vec<ModId>, on_cycle: &mut F) -> Result<()>
    where
        F: FnMut(Vec<ModId>) -> Result<()>,
    {
        let mut marks = HashMap::new();
        let mut path = Vec::new();
        for id in self.nodes.keys() {
            self.visit(*id, &mut marks, &mut path, order, on_cycle)?;
        }
        Ok(())
    }

    fn visit<F>(
        &self,
        id: ModId,
        marks: &mut HashMap<ModId, Mark>,
        path: &mut Vec<ModId>,
        order: &mut Vec<ModId>,
        on_cycle: &mut F,
    ) -> Result<()>
    where
        F: FnMut(Vec<ModId>) -> Result<()>,
    {
        match marks.get(&id) {
            Some(Mark::Done) => return Ok(()),
            Some(Mark::InProgress) => {
                // Back edge: the cycle is the path suffix starting at `id`.
                let start = path.iter().position(|p| *p == id).unwrap_or(0);
                let mut cycle = path[start..].to_vec();
                cycle.push(id);
                return on_cycle(cycle);
            }
            None => {}
        }

        marks.insert(id, Mark::InProgress);
        path.push(id);
        for dep in self.dependencies_of(id) {
            self.visit(*dep, marks, path, order, on_cycle)?;
        }
        path.pop();
        marks.insert(id, Mark::Done);
        order.push(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u32]) -> Vec<ModId> {
        raw.iter().copied().map(ModId).collect()
    }

    fn position(order: &[ModId], id: u32) -> usize {
        order.iter().position(|x| *x == ModId(id)).unwrap()
    }

    #[test]
    fn test_empty_graph() {
        assert!(DepGraph::new().top_sort().is_empty());
    }

    #[test]
    fn test_dependencies_precede_dependents() {
        let mut graph = DepGraph::new();
        graph.add_node(ModId(1), ids(&[2, 3]));
        graph.add_node(ModId(2), ids(&[3]));
        graph.add_node(ModId(4), ids(&[1]));

        let order = graph.try_top_sort().unwrap();
        assert_eq!(order, ids(&[3, 2, 1, 4]));
        assert!(position(&order, 3) < position(&order, 2));
        assert!(position(&order, 1) < position(&order, 4));
    }

    #[test]
    fn test_edge_targets_are_included_once() {
        let mut graph = DepGraph::new();
        graph.add_node(ModId(10), ids(&[30, 40]));
        graph.add_node(ModId(20), ids(&[30]));

        assert_eq!(graph.top_sort(), ids(&[30, 40, 10, 20]));
    }

    #[test]
    fn test_add_node_merges_and_dedups() {
        let mut graph = DepGraph::new();
        graph.add_node(ModId(1), ids(&[2, 2, 1]));
        graph.add_node(ModId(1), ids(&[3, 2]));
        assert_eq!(graph.dependencies_of(ModId(1)), ids(&[2, 3]).as_slice());
        assert_eq!(graph.len(), 1);
        assert!(graph.dependencies_of(ModId(9)).is_empty());
    }

    #[test]
    fn test_cycle_is_broken_deterministically() {
        let mut graph = DepGraph::new();
        graph.add_node(ModId(1), ids(&[2]));
        graph.add_node(ModId(2), ids(&[3]));
        graph.add_node(ModId(3), ids(&[1]));

        let first = graph.top_sort();
        assert_eq!(first, ids(&[3, 2, 1]));
        for _ in 0..10 {
            assert_eq!(graph.top_sort(), first);
        }
    }

    #[test]
    fn test_try_top_sort_reports_cycle() {
        let mut graph = DepGraph::new();
        graph.add_node(ModId(5), ids(&[6]));
        graph.add_node(ModId(6), ids(&[7]));
        graph.add_node(ModId(7), ids(&[6]));

        match graph.try_top_sort() {
            Err(Error::CycleDetected(path)) => assert_eq!(path, ids(&[6, 7, 6])),
            other => panic!("Expected CycleDetected, got {:?}", other),
        }
    }
}
