use crate::graph::*;

/// Visit status of a vertex during one traversal.
///
/// The algorithms here only ever move a vertex from `Unvisited` to `Visited`.
/// `Visiting` is available to callers driving their own searches.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Mark {
    Unvisited,
    Visiting,
    Visited,
}

/// Per-run bookkeeping of a traversal or a shortest-path search:
/// a mark, a tentative distance and a predecessor for every vertex, indexed by [VertexId].
///
/// Graphs hold none of this, so each algorithm call allocates a fresh state and
/// several searches over the same graph never interfere. A caller that wants
/// marks to carry over between runs passes the same state again, and calls
/// [reset](Self::reset) to start over.
#[derive(Debug, Clone)]
pub struct SearchState {
    marks: Vec<Mark>,
    distances: Vec<f64>,
    predecessors: Vec<Option<VertexId>>,
}

impl SearchState {
    pub fn new(vertex_size: usize) -> Self {
        Self {
            marks: vec![Mark::Unvisited; vertex_size],
            distances: vec![f64::INFINITY; vertex_size],
            predecessors: vec![None; vertex_size],
        }
    }

    pub fn for_graph<G: QueryableGraph>(graph: &G) -> Self {
        Self::new(graph.vertex_size())
    }

    pub fn vertex_size(&self) -> usize {
        self.marks.len()
    }

    /// Grows the state to cover vertices added to the graph since it was allocated.
    pub fn fit(&mut self, vertex_size: usize) {
        if vertex_size > self.marks.len() {
            self.marks.resize(vertex_size, Mark::Unvisited);
            self.distances.resize(vertex_size, f64::INFINITY);
            self.predecessors.resize(vertex_size, None);
        }
    }

    /// Every vertex back to unvisited, infinitely far, without predecessor.
    pub fn reset(&mut self) {
        self.marks.iter_mut().for_each(|m| *m = Mark::Unvisited);
        self.distances.iter_mut().for_each(|d| *d = f64::INFINITY);
        self.predecessors.iter_mut().for_each(|p| *p = None);
    }

    pub fn mark(&self, v: &VertexId) -> Mark {
        self.marks
            .get(v.to_raw())
            .copied()
            .unwrap_or(Mark::Unvisited)
    }

    pub fn is_visited(&self, v: &VertexId) -> bool {
        self.mark(v) == Mark::Visited
    }

    pub fn set_mark(&mut self, v: &VertexId, mark: Mark) {
        self.fit(v.to_raw() + 1);
        self.marks[v.to_raw()] = mark;
    }

    pub fn distance(&self, v: &VertexId) -> f64 {
        self.distances
            .get(v.to_raw())
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    pub fn set_distance(&mut self, v: &VertexId, distance: f64) {
        self.fit(v.to_raw() + 1);
        self.distances[v.to_raw()] = distance;
    }

    pub fn predecessor(&self, v: &VertexId) -> Option<VertexId> {
        self.predecessors.get(v.to_raw()).copied().flatten()
    }

    pub fn set_predecessor(&mut self, v: &VertexId, predecessor: VertexId) {
        self.fit(v.to_raw() + 1);
        self.predecessors[v.to_raw()] = Some(predecessor);
    }

    /// The relaxation step: improves `sink` through `source` over an edge of `weight`.
    /// Returns whether anything changed.
    pub fn relax(&mut self, source: &VertexId, sink: &VertexId, weight: f64) -> bool {
        let alt = self.distance(source) + weight;
        if alt < self.distance(sink) {
            self.set_distance(sink, alt);
            self.set_predecessor(sink, *source);
            true
        } else {
            false
        }
    }

    /// Walks predecessors back from `destination` to `source`.
    ///
    /// *   `[source]` if both are the same vertex.
    /// *   Empty if `destination` was never reached.
    pub fn path(&self, source: &VertexId, destination: &VertexId) -> Vec<VertexId> {
        if source == destination {
            return vec![*source];
        }
        let mut res = vec![*destination];
        let mut cur = *destination;
        while cur != *source {
            match self.predecessor(&cur) {
                Some(prev) if res.len() <= self.vertex_size() => {
                    res.push(prev);
                    cur = prev;
                }
                _ => return vec![],
            }
        }
        res.reverse();
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dirty() -> SearchState {
        let mut state = SearchState::new(3);
        state.set_mark(&VertexId::new(0), Mark::Visited);
        state.set_distance(&VertexId::new(1), 10.0);
        state.set_predecessor(&VertexId::new(2), VertexId::new(0));
        state
    }

    fn assert_pristine(state: &SearchState) {
        for i in 0..state.vertex_size() {
            let v = VertexId::new(i);
            assert_eq!(state.mark(&v), Mark::Unvisited);
            assert_eq!(state.distance(&v), f64::INFINITY);
            assert_eq!(state.predecessor(&v), None);
        }
    }

    #[test]
    fn reset_is_idempotent() {
        let mut state = dirty();
        state.reset();
        assert_pristine(&state);
        state.reset();
        assert_pristine(&state);
        assert_eq!(state.vertex_size(), 3);
    }

    #[test]
    fn relax_only_improves() {
        let mut state = SearchState::new(2);
        let (a, b) = (VertexId::new(0), VertexId::new(1));
        state.set_distance(&a, 0.0);
        assert!(state.relax(&a, &b, 5.0));
        assert!(!state.relax(&a, &b, 7.0));
        assert!(state.relax(&a, &b, -1.0));
        assert_eq!(state.distance(&b), -1.0);
        assert_eq!(state.predecessor(&b), Some(a));
    }

    #[test]
    fn unreached_destination_has_empty_path() {
        let state = SearchState::new(3);
        let (a, c) = (VertexId::new(0), VertexId::new(2));
        assert!(state.path(&a, &c).is_empty());
        assert_eq!(state.path(&a, &a), vec![a]);
    }

    #[test]
    fn path_follows_predecessors() {
        let mut state = SearchState::new(3);
        let (a, b, c) = (VertexId::new(0), VertexId::new(1), VertexId::new(2));
        state.set_predecessor(&b, a);
        state.set_predecessor(&c, b);
        assert_eq!(state.path(&a, &c), vec![a, b, c]);
    }

    #[test]
    fn fit_grows_unvisited() {
        let mut state = SearchState::new(1);
        state.set_mark(&VertexId::new(3), Mark::Visited);
        assert_eq!(state.vertex_size(), 4);
        assert_eq!(state.mark(&VertexId::new(2)), Mark::Unvisited);
        assert!(state.is_visited(&VertexId::new(3)));
    }
}
