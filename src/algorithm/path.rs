use crate::algorithm::SearchState;
use crate::error::Result;
use crate::graph::*;
use std::fmt::Debug;
use std::hash::Hash;

/// A path from a source to a destination and its total weight.
///
/// *   source == destination: `path == [source]`, `distance == 0`.
/// *   unreachable destination: `path` is empty, `distance` is `+inf`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath<P> {
    pub path: Vec<P>,
    pub distance: f64,
}

impl<P> ShortestPath<P> {
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Single-source shortest paths, as left behind by Dijkstra or Bellman-Ford.
pub struct ShortestPaths<'a, P>
where
    P: Hash + Eq,
{
    graph: &'a WeightedGraph<P>,
    source: VertexId,
    state: SearchState,
}

impl<'a, P> ShortestPaths<'a, P>
where
    P: Hash + Eq + Clone + Debug,
{
    pub(crate) fn new(graph: &'a WeightedGraph<P>, source: VertexId, state: SearchState) -> Self {
        Self {
            graph,
            source,
            state,
        }
    }

    pub fn source(&self) -> Option<&P> {
        self.graph.payload(&self.source)
    }

    /// The raw per-vertex outcome: distances and predecessors.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn distance(&self, destination: &P) -> Result<f64> {
        let dst = self.graph.existing_id(destination)?;
        Ok(self.state.distance(&dst))
    }

    pub fn path_to(&self, destination: &P) -> Result<ShortestPath<P>> {
        let dst = self.graph.existing_id(destination)?;
        Ok(self.path_to_id(&dst))
    }

    pub(crate) fn path_to_id(&self, destination: &VertexId) -> ShortestPath<P> {
        let path = self
            .state
            .path(&self.source, destination)
            .iter()
            .filter_map(|v| self.graph.payload(v).cloned())
            .collect();
        ShortestPath {
            path,
            distance: self.state.distance(destination),
        }
    }

    /// `(source, vertex, distance)` for every vertex in enumeration order,
    /// unreachable ones at `+inf`.
    pub fn triples(&self) -> Vec<(P, P, f64)> {
        let source = match self.source() {
            Some(s) => s,
            None => return vec![],
        };
        self.graph
            .iter_vertices()
            .map(|(vid, p)| (source.clone(), p.clone(), self.state.distance(&vid)))
            .collect()
    }
}
