use crate::algorithm::{Mark, SearchState};
use crate::error::Result;
use crate::graph::*;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

/// Depth-first and breadth-first walks over any [QueryableGraph].
///
/// Both walks mark vertices [Mark::Visited] in the given [SearchState] and skip
/// vertices that are already visited there, including the start vertex.
pub trait Traversal
where
    Self: QueryableGraph + Sized,
{
    fn depth_first<'a>(
        &'a self,
        start: VertexId,
        state: &'a mut SearchState,
    ) -> DepthFirst<'a, Self> {
        DepthFirst::new(self, start, state)
    }

    fn breadth_first<'a>(
        &'a self,
        start: VertexId,
        state: &'a mut SearchState,
    ) -> BreadthFirst<'a, Self> {
        BreadthFirst::new(self, start, state)
    }
}

impl<G: QueryableGraph> Traversal for G {}

/// Depth-first preorder driven by an explicit stack of successor iterators.
///
/// Yields exactly what the recursive version would: a vertex is emitted when it
/// is first discovered, then its own unvisited successors are explored before
/// the next sibling.
pub struct DepthFirst<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    state: &'a mut SearchState,
    start: Option<VertexId>,
    stack: Vec<Box<dyn Iterator<Item = VertexId> + 'a>>,
}

impl<'a, G> DepthFirst<'a, G>
where
    G: QueryableGraph,
{
    pub fn new(graph: &'a G, start: VertexId, state: &'a mut SearchState) -> Self {
        state.fit(graph.vertex_size());
        let start = if graph.contains_vertex(&start) && !state.is_visited(&start) {
            Some(start)
        } else {
            None
        };
        Self {
            graph,
            state,
            start,
            stack: vec![],
        }
    }

    fn discover(&mut self, v: VertexId) -> VertexId {
        self.state.set_mark(&v, Mark::Visited);
        self.stack.push(self.graph.successors(&v));
        v
    }
}

impl<'a, G> Iterator for DepthFirst<'a, G>
where
    G: QueryableGraph,
{
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            return Some(self.discover(start));
        }
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(v) => {
                    if !self.state.is_visited(&v) {
                        return Some(self.discover(v));
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Breadth-first level order.
///
/// A vertex is marked when it is enqueued, so it is never enqueued twice,
/// and it is yielded when it is dequeued.
pub struct BreadthFirst<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    state: &'a mut SearchState,
    queue: VecDeque<VertexId>,
}

impl<'a, G> BreadthFirst<'a, G>
where
    G: QueryableGraph,
{
    pub fn new(graph: &'a G, start: VertexId, state: &'a mut SearchState) -> Self {
        state.fit(graph.vertex_size());
        let mut queue = VecDeque::new();
        if graph.contains_vertex(&start) && !state.is_visited(&start) {
            state.set_mark(&start, Mark::Visited);
            queue.push_back(start);
        }
        Self {
            graph,
            state,
            queue,
        }
    }
}

impl<'a, G> Iterator for BreadthFirst<'a, G>
where
    G: QueryableGraph,
{
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;
        for v in self.graph.successors(&u) {
            if !self.state.is_visited(&v) {
                self.state.set_mark(&v, Mark::Visited);
                self.queue.push_back(v);
            }
        }
        Some(u)
    }
}

/// Depth-first order of the vertices reachable from `start`, as payloads.
#[tracing::instrument(level = "debug", skip_all, fields(vertices = graph.vertex_size()))]
pub fn dfs<P>(graph: &WeightedGraph<P>, start: &P) -> Result<Vec<P>>
where
    P: Hash + Eq + Clone + Debug,
{
    let start = graph.existing_id(start)?;
    let mut state = SearchState::for_graph(graph);
    let order: Vec<_> = graph.depth_first(start, &mut state).collect();
    Ok(to_payloads(graph, order))
}

/// Breadth-first order of the vertices reachable from `start`, as payloads.
#[tracing::instrument(level = "debug", skip_all, fields(vertices = graph.vertex_size()))]
pub fn bfs<P>(graph: &WeightedGraph<P>, start: &P) -> Result<Vec<P>>
where
    P: Hash + Eq + Clone + Debug,
{
    let start = graph.existing_id(start)?;
    let mut state = SearchState::for_graph(graph);
    let order: Vec<_> = graph.breadth_first(start, &mut state).collect();
    Ok(to_payloads(graph, order))
}

fn to_payloads<P>(graph: &WeightedGraph<P>, vids: Vec<VertexId>) -> Vec<P>
where
    P: Hash + Eq + Clone,
{
    vids.iter()
        .filter_map(|v| graph.payload(v).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use quickcheck_macros::quickcheck;
    use std::collections::BTreeSet;

    fn labels(xs: &str) -> Vec<String> {
        xs.chars().map(|c| c.to_string()).collect()
    }

    #[test]
    fn petersen_dfs() {
        let g = petersen();
        let trial = dfs(&g, &"a".to_string()).unwrap();
        assert_eq!(trial, labels("abcdejgifh"));
    }

    #[test]
    fn petersen_bfs() {
        let g = petersen();
        let trial = bfs(&g, &"a".to_string()).unwrap();
        assert_eq!(trial, labels("abfecghidj"));
    }

    #[test]
    fn unknown_start() {
        let g = petersen();
        assert!(matches!(
            dfs(&g, &"z".to_string()),
            Err(GraphError::VertexNotFound(_))
        ));
        assert!(matches!(
            bfs(&g, &"z".to_string()),
            Err(GraphError::VertexNotFound(_))
        ));
    }

    #[test]
    fn runs_do_not_share_marks() {
        let g = petersen();
        let first = dfs(&g, &"a".to_string()).unwrap();
        let second = dfs(&g, &"a".to_string()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn shared_state_skips_visited() {
        let g = petersen();
        let mut state = SearchState::for_graph(&g);
        let a = g.id_of(&"a".to_string()).unwrap();
        assert_eq!(g.depth_first(a, &mut state).count(), 10);
        assert_eq!(g.breadth_first(a, &mut state).count(), 0);
        state.reset();
        assert_eq!(g.breadth_first(a, &mut state).count(), 10);
    }

    #[test]
    fn directed_edges_are_followed_one_way() {
        let mut g = WeightedGraph::new();
        for v in 0..3 {
            g.add_vertex(v).unwrap();
        }
        g.add_edge(&0, &1, 1.0, true).unwrap();
        g.add_edge(&2, &1, 1.0, true).unwrap();
        assert_eq!(dfs(&g, &0).unwrap(), vec![0, 1]);
        assert_eq!(bfs(&g, &2).unwrap(), vec![2, 1]);
        assert_eq!(dfs(&g, &1).unwrap(), vec![1]);
    }

    #[quickcheck]
    fn dfs_and_bfs_reach_the_same_vertices(ops: Ops) {
        let g = ops.build();
        for (_, start) in g.iter_vertices() {
            let by_dfs = dfs(&g, start).unwrap();
            let by_bfs = bfs(&g, start).unwrap();
            assert_eq!(by_dfs.first(), Some(start));
            assert_eq!(by_bfs.first(), Some(start));
            assert_eq!(by_dfs.len(), by_dfs.iter().collect::<BTreeSet<_>>().len());
            assert_eq!(
                by_dfs.iter().collect::<BTreeSet<_>>(),
                by_bfs.iter().collect::<BTreeSet<_>>()
            );
        }
    }
}
