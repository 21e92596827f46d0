use crate::error::{GraphError, Result};
use crate::graph::*;
use ahash::RandomState;
use bimap::BiHashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A weighted graph whose vertices carry unique payloads.
///
/// Directed and undirected edges may be mixed freely: every call to
/// [add_edge](Self::add_edge) decides whether it populates one direction or both.
///
/// The adjacency is kept in exactly one place, a table indexed by [VertexId]
/// whose rows list `(neighbour, weights)` in the order the neighbour was first
/// connected. That order is what DFS, BFS and `Display` observe.
///
/// Parallel edges are distinguished by weight only: adding a weight already
/// recorded for the same ordered pair is a no-op.
///
/// |                 | Complexity                       |
/// | --------------- | -------------------------------- |
/// | `add_vertex`    | amortized $O(1)$                 |
/// | `add_edge`      | $O(\deg(u) + \deg(v))$           |
/// | `contains`      | $O(1)$                           |
/// | `edges`         | $O(\|V\| + \|E\|)$ for a full iteration |
/// | `is_multigraph` | $O(\|V\| + \|E\|)$               |
#[derive(Clone)]
pub struct WeightedGraph<P>
where
    P: Hash + Eq,
{
    payloads: BiHashMap<VertexId, P, RandomState, RandomState>,
    adjacency: Vec<Vec<(VertexId, Vec<f64>)>>,
}

impl<P> Default for WeightedGraph<P>
where
    P: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P> WeightedGraph<P>
where
    P: Hash + Eq,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            payloads: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
            adjacency: vec![],
        }
    }

    pub fn vertex_size(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directional weight entries, i.e. the length of [edges](Self::edges).
    pub fn edge_size(&self) -> usize {
        self.adjacency
            .iter()
            .flat_map(|row| row.iter())
            .map(|(_, ws)| ws.len())
            .sum()
    }

    /// Iterates over vertices in insertion order.
    pub fn iter_vertices(&self) -> impl Iterator<Item = (VertexId, &P)> + '_ {
        (0..self.adjacency.len()).filter_map(move |i| {
            let vid = VertexId::new(i);
            self.payloads.get_by_left(&vid).map(|p| (vid, p))
        })
    }

    pub fn contains(&self, payload: &P) -> bool {
        self.payloads.contains_right(payload)
    }

    pub fn id_of(&self, payload: &P) -> Option<VertexId> {
        self.payloads.get_by_right(payload).copied()
    }

    pub fn payload(&self, vid: &VertexId) -> Option<&P> {
        self.payloads.get_by_left(vid)
    }

    /// Looks up a vertex by payload.
    pub fn vertex(&self, payload: &P) -> Option<Vertex<'_, P>> {
        self.id_of(payload).and_then(|vid| self.vertex_by_id(&vid))
    }

    pub fn vertex_by_id(&self, vid: &VertexId) -> Option<Vertex<'_, P>> {
        match (self.payloads.get_by_left(vid), self.adjacency.get(vid.to_raw())) {
            (Some(payload), Some(row)) => Some(Vertex {
                id: *vid,
                payload,
                adjacency: row,
            }),
            _ => None,
        }
    }

    /// Neighbours of `vid` with their weight lists, in adjacency order.
    pub fn neighbors(&self, vid: &VertexId) -> impl Iterator<Item = (VertexId, &[f64])> + '_ {
        self.adjacency
            .get(vid.to_raw())
            .into_iter()
            .flat_map(|row| row.iter().map(|(v, ws)| (*v, ws.as_slice())))
    }

    /// Weights recorded for the ordered pair `source -> sink`, if they are adjacent.
    pub fn weights(&self, source: &VertexId, sink: &VertexId) -> Option<&[f64]> {
        self.neighbors(source)
            .find(|(v, _)| v == sink)
            .map(|(_, ws)| ws)
    }

    /// Every `(u, v, w)` implied by the adjacency.
    ///
    /// An undirected edge is yielded in both directions; Bellman-Ford relies on that.
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(i, row)| {
            let source = VertexId::new(i);
            row.iter().flat_map(move |(sink, ws)| {
                ws.iter().map(move |w| WeightedEdge {
                    source,
                    sink: *sink,
                    weight: *w,
                })
            })
        })
    }

    /// True iff some ordered pair carries more than one weight.
    pub fn is_multigraph(&self) -> bool {
        self.adjacency
            .iter()
            .flat_map(|row| row.iter())
            .any(|(_, ws)| ws.len() > 1)
    }

    fn has_weight(&self, source: &VertexId, sink: &VertexId, weight: f64) -> bool {
        self.weights(source, sink)
            .map(|ws| ws.contains(&weight))
            .unwrap_or(false)
    }

    fn push_weight(&mut self, source: VertexId, sink: VertexId, weight: f64) {
        let row = &mut self.adjacency[source.to_raw()];
        match row.iter_mut().find(|(v, _)| *v == sink) {
            Some((_, ws)) => ws.push(weight),
            None => row.push((sink, vec![weight])),
        }
    }
}

impl<P> WeightedGraph<P>
where
    P: Hash + Eq + Debug,
{
    /// Inserts a vertex.
    ///
    /// A payload that is already present is reported as
    /// [GraphError::DuplicateVertex] and leaves the graph untouched.
    pub fn add_vertex(&mut self, payload: P) -> Result<VertexId> {
        if self.payloads.contains_right(&payload) {
            tracing::warn!(payload = ?payload, "vertex already exists");
            return Err(GraphError::duplicate_vertex(&payload));
        }
        let vid = VertexId::new(self.adjacency.len());
        self.payloads.insert(vid, payload);
        self.adjacency.push(vec![]);
        Ok(vid)
    }

    /// Adds `weight` between two existing vertices.
    ///
    /// *   directed: appends `weight` to `from -> to` unless already there.
    /// *   undirected: appends to both directions. If exactly one direction
    ///     already holds `weight`, the other one is completed instead of
    ///     reporting an error.
    ///
    /// A missing endpoint yields [GraphError::VertexNotFound] and changes nothing.
    pub fn add_edge(
        &mut self,
        from: &P,
        to: &P,
        weight: f64,
        directed: bool,
    ) -> Result<EdgeInsertion> {
        if weight.is_nan() {
            return Err(GraphError::InvalidWeight(weight));
        }
        let source = self.existing_id(from)?;
        let sink = self.existing_id(to)?;

        let forward = self.has_weight(&source, &sink, weight);
        if directed || source == sink {
            if forward {
                return Ok(EdgeInsertion::Unchanged);
            }
            self.push_weight(source, sink, weight);
            return Ok(EdgeInsertion::Added);
        }

        let backward = self.has_weight(&sink, &source, weight);
        match (forward, backward) {
            (false, false) => {
                self.push_weight(source, sink, weight);
                self.push_weight(sink, source, weight);
                Ok(EdgeInsertion::Added)
            }
            (true, true) => Ok(EdgeInsertion::Unchanged),
            (true, false) => {
                tracing::warn!(from = ?to, to = ?from, weight, "completing asymmetric edge");
                self.push_weight(sink, source, weight);
                Ok(EdgeInsertion::Repaired)
            }
            (false, true) => {
                tracing::warn!(from = ?from, to = ?to, weight, "completing asymmetric edge");
                self.push_weight(source, sink, weight);
                Ok(EdgeInsertion::Repaired)
            }
        }
    }

    /// Like [id_of](Self::id_of) but a missing payload is an error.
    pub fn existing_id(&self, payload: &P) -> Result<VertexId> {
        self.id_of(payload).ok_or_else(|| {
            tracing::warn!(payload = ?payload, "vertex not found");
            GraphError::vertex_not_found(payload)
        })
    }

    /// Rebinds payloads in vertex enumeration order, keeping the topology.
    ///
    /// `labels` must hold exactly one new, distinct payload per vertex.
    pub fn remap<Q>(self, labels: Vec<Q>) -> Result<WeightedGraph<Q>>
    where
        Q: Hash + Eq + Debug,
    {
        if labels.len() != self.vertex_size() {
            return Err(GraphError::LabelCountMismatch {
                expected: self.vertex_size(),
                actual: labels.len(),
            });
        }
        let mut payloads: BiHashMap<VertexId, Q, RandomState, RandomState> =
            BiHashMap::with_hashers(RandomState::new(), RandomState::new());
        for (i, label) in labels.into_iter().enumerate() {
            if payloads.contains_right(&label) {
                return Err(GraphError::duplicate_vertex(&label));
            }
            payloads.insert(VertexId::new(i), label);
        }
        Ok(WeightedGraph {
            payloads,
            adjacency: self.adjacency,
        })
    }
}

impl<P> QueryableGraph for WeightedGraph<P>
where
    P: Hash + Eq,
{
    fn vertex_size(&self) -> usize {
        self.adjacency.len()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new((0..self.adjacency.len()).map(VertexId::new))
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        v.to_raw() < self.adjacency.len()
    }

    fn successors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.neighbors(v).map(|(sink, _)| sink))
    }
}

/// One line per vertex in insertion order:
/// `payload: [[neighbour, [weights]], ...]`.
impl<P> std::fmt::Display for WeightedGraph<P>
where
    P: Hash + Eq + Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (vid, payload) in self.iter_vertices() {
            write!(f, "{:?}: [", payload)?;
            for (i, (sink, ws)) in self.neighbors(&vid).enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                match self.payload(&sink) {
                    Some(p) => write!(f, "[{:?}, {:?}]", p, ws)?,
                    None => write!(f, "[{:?}, {:?}]", sink, ws)?,
                }
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

impl<P> std::fmt::Debug for WeightedGraph<P>
where
    P: Hash + Eq + Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "WeightedGraph {{")?;
        write!(f, "{}", self)?;
        writeln!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn abc() -> WeightedGraph<String> {
        let mut g = WeightedGraph::new();
        for p in ["A", "B", "C"] {
            g.add_vertex(p.to_string()).unwrap();
        }
        g.add_edge(&"A".to_string(), &"B".to_string(), 0.0, false)
            .unwrap();
        g.add_edge(&"A".to_string(), &"C".to_string(), 0.0, false)
            .unwrap();
        g
    }

    #[test]
    fn duplicate_vertex_leaves_graph_unchanged() {
        let mut g = abc();
        let before = g.to_string();
        let res = g.add_vertex("B".to_string());
        assert!(matches!(res, Err(GraphError::DuplicateVertex(_))));
        assert_eq!(g.vertex_size(), 3);
        assert_eq!(g.to_string(), before);
    }

    #[test]
    fn add_vertex_then_contains() {
        let mut g = abc();
        assert!(!g.contains(&"D".to_string()));
        let vid = g.add_vertex("D".to_string()).unwrap();
        assert!(g.contains(&"D".to_string()));
        assert_eq!(vid, VertexId::new(3));
        assert_eq!(g.vertex(&"D".to_string()).unwrap().degree(), 0);
    }

    #[test]
    fn ids_follow_insertion_order() {
        let mut g = abc();
        assert!(g.add_vertex("A".to_string()).is_err());
        let d = g.add_vertex("D".to_string()).unwrap();
        let e = g.add_vertex("E".to_string()).unwrap();
        assert_eq!((d, e), (VertexId::new(3), VertexId::new(4)));
        let trial: Vec<_> = g.iter_vertices().map(|(vid, _)| vid.to_raw()).collect();
        assert_eq!(trial, vec![0, 1, 2, 3, 4]);
        let remapped = g.remap(vec![5, 6, 7, 8, 9]).unwrap();
        assert_eq!(remapped.id_of(&9), Some(e));
    }

    #[test]
    fn add_undirected_edge() {
        let mut g = abc();
        let res = g.add_edge(&"B".to_string(), &"C".to_string(), 3.14, false);
        assert_eq!(res.unwrap(), EdgeInsertion::Added);
        let oracle = concat!(
            "\"A\": [[\"B\", [0.0]], [\"C\", [0.0]]]\n",
            "\"B\": [[\"A\", [0.0]], [\"C\", [3.14]]]\n",
            "\"C\": [[\"A\", [0.0]], [\"B\", [3.14]]]\n",
        );
        assert_eq!(g.to_string(), oracle);
    }

    #[test]
    fn add_directed_edge() {
        let mut g = abc();
        g.add_edge(&"B".to_string(), &"C".to_string(), 3.14, true)
            .unwrap();
        let oracle = concat!(
            "\"A\": [[\"B\", [0.0]], [\"C\", [0.0]]]\n",
            "\"B\": [[\"A\", [0.0]], [\"C\", [3.14]]]\n",
            "\"C\": [[\"A\", [0.0]]]\n",
        );
        assert_eq!(g.to_string(), oracle);
    }

    #[test]
    fn edge_to_missing_vertex_is_a_no_op() {
        let mut g = abc();
        let before = g.to_string();
        let res = g.add_edge(&"A".to_string(), &"Z".to_string(), 1.0, false);
        assert!(matches!(res, Err(GraphError::VertexNotFound(_))));
        assert_eq!(g.to_string(), before);
    }

    #[test]
    fn nan_weight_is_rejected() {
        let mut g = abc();
        let res = g.add_edge(&"A".to_string(), &"B".to_string(), f64::NAN, false);
        assert!(matches!(res, Err(GraphError::InvalidWeight(_))));
        assert!(!g.is_multigraph());
    }

    #[test]
    fn asymmetric_edge_is_repaired() {
        let mut g = abc();
        let b = "B".to_string();
        let c = "C".to_string();
        g.add_edge(&b, &c, 2.0, true).unwrap();
        assert_eq!(g.add_edge(&c, &b, 2.0, false).unwrap(), EdgeInsertion::Repaired);
        let (vb, vc) = (g.id_of(&b).unwrap(), g.id_of(&c).unwrap());
        assert_eq!(g.weights(&vb, &vc), Some(&[2.0][..]));
        assert_eq!(g.weights(&vc, &vb), Some(&[2.0][..]));
        assert_eq!(g.add_edge(&b, &c, 2.0, false).unwrap(), EdgeInsertion::Unchanged);
        assert!(!g.is_multigraph());
    }

    #[test]
    fn second_weight_makes_a_multigraph() {
        let mut g = abc();
        assert!(!g.is_multigraph());
        g.add_edge(&"A".to_string(), &"B".to_string(), 3.14, false)
            .unwrap();
        assert!(g.is_multigraph());
        let a = g.vertex(&"A".to_string()).unwrap();
        let (_, ws) = a.adjacency().next().unwrap();
        assert_eq!(ws, &[0.0, 3.14][..]);
    }

    #[test]
    fn undirected_self_loop_is_stored_once() {
        let mut g = abc();
        let a = "A".to_string();
        g.add_edge(&a, &a, 5.0, false).unwrap();
        let va = g.id_of(&a).unwrap();
        assert_eq!(g.weights(&va, &va), Some(&[5.0][..]));
        assert!(!g.is_multigraph());
    }

    #[test]
    fn edges_are_directional() {
        let g = abc();
        let mut trial: Vec<_> = g
            .edges()
            .map(|e| {
                (
                    g.payload(&e.source).unwrap().clone(),
                    g.payload(&e.sink).unwrap().clone(),
                    e.weight,
                )
            })
            .collect();
        trial.sort_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)));
        let oracle = vec![
            ("A".to_string(), "B".to_string(), 0.0),
            ("A".to_string(), "C".to_string(), 0.0),
            ("B".to_string(), "A".to_string(), 0.0),
            ("C".to_string(), "A".to_string(), 0.0),
        ];
        assert_eq!(trial, oracle);
        assert_eq!(g.edge_size(), 4);
    }

    #[test]
    fn petersen_display() {
        let g = petersen();
        let oracle = concat!(
            "\"a\": [[\"b\", [1.0]], [\"f\", [1.0]], [\"e\", [1.0]]]\n",
            "\"b\": [[\"a\", [1.0]], [\"c\", [1.0]], [\"g\", [1.0]]]\n",
            "\"c\": [[\"b\", [1.0]], [\"d\", [1.0]], [\"h\", [1.0]]]\n",
            "\"d\": [[\"c\", [1.0]], [\"e\", [1.0]], [\"i\", [1.0]]]\n",
            "\"e\": [[\"a\", [1.0]], [\"d\", [1.0]], [\"j\", [1.0]]]\n",
            "\"f\": [[\"a\", [1.0]], [\"h\", [1.0]], [\"i\", [1.0]]]\n",
            "\"g\": [[\"b\", [1.0]], [\"i\", [1.0]], [\"j\", [1.0]]]\n",
            "\"h\": [[\"c\", [1.0]], [\"f\", [1.0]], [\"j\", [1.0]]]\n",
            "\"i\": [[\"d\", [1.0]], [\"f\", [1.0]], [\"g\", [1.0]]]\n",
            "\"j\": [[\"e\", [1.0]], [\"g\", [1.0]], [\"h\", [1.0]]]\n",
        );
        assert_eq!(g.to_string(), oracle);
        assert_eq!(g.edges().count(), 30);
    }

    #[test]
    fn remap_keeps_topology() {
        let g = abc();
        let before: Vec<_> = g.edges().collect();
        let remapped = g.remap(vec![10, 20, 30]).unwrap();
        assert_eq!(remapped.edges().collect::<Vec<_>>(), before);
        assert_eq!(remapped.id_of(&20), Some(VertexId::new(1)));
        assert!(!remapped.contains(&40));
    }

    #[test]
    fn remap_rejects_wrong_label_count() {
        let res = abc().remap(vec![1, 2]);
        assert!(matches!(
            res,
            Err(GraphError::LabelCountMismatch {
                expected: 3,
                actual: 2
            })
        ));
        let res = abc().remap(vec![1, 1, 2]);
        assert!(matches!(res, Err(GraphError::DuplicateVertex(_))));
    }

    #[quickcheck]
    fn undirected_graphs_are_symmetric(ops: Ops) {
        let g = ops.undirected().build();
        for e in g.edges() {
            let back = g.weights(&e.sink, &e.source).unwrap();
            assert!(back.contains(&e.weight));
        }
    }

    #[quickcheck]
    fn directed_edges_populate_one_direction(ops: Ops) {
        let g = ops.directed().build();
        assert_eq!(g.edge_size(), ops.directed().distinct_edges().len());
    }
}
