/// ID for vertices, which are essentially `usize`.
///
/// IDs are handed out in insertion order starting from zero and never reused,
/// so they double as indices into per-vertex tables.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}

/// A borrowed view of one vertex: its ID, its payload and its adjacency.
pub struct Vertex<'a, P> {
    pub id: VertexId,
    pub payload: &'a P,
    pub(crate) adjacency: &'a [(VertexId, Vec<f64>)],
}

impl<'a, P> Vertex<'a, P> {
    /// Neighbours in the order their first edge was added, each with its weight list.
    pub fn adjacency(&self) -> impl Iterator<Item = (VertexId, &'a [f64])> + 'a {
        self.adjacency.iter().map(|(v, ws)| (*v, ws.as_slice()))
    }

    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }
}

impl<'a, P> std::fmt::Debug for Vertex<'a, P>
where
    P: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}({:?})", self.id, self.payload)
    }
}
