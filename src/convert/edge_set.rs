use crate::convert::Built;
use crate::error::Result;
use crate::graph::*;
use std::fmt::Debug;
use std::hash::Hash;

/// Builds a graph from `(source, sink, weight)` triples.
///
/// Vertices are the endpoints in order of first appearance. Identical triples
/// collapse into one edge; a parallel edge needs a different weight.
pub fn edges_to_graph<P, I>(edges: I, directed: bool) -> Result<Built<P>>
where
    P: Hash + Eq + Clone + Debug,
    I: IntoIterator<Item = (P, P, f64)>,
{
    let edges: Vec<_> = edges.into_iter().collect();
    let mut built = Built::new();
    add_endpoints(&mut built, &edges);
    add_edges(&mut built, &edges, directed)?;
    Ok(built)
}

/// Every directional edge as a `(source, sink, weight)` triple, in enumeration order.
pub fn graph_to_edges<P>(graph: &WeightedGraph<P>) -> Vec<(P, P, f64)>
where
    P: Hash + Eq + Clone,
{
    graph
        .iter_vertices()
        .flat_map(|(id, source)| {
            graph.neighbors(&id).flat_map(move |(sink, ws)| {
                let sink = graph.payload(&sink).cloned();
                ws.iter()
                    .filter_map(move |w| sink.clone().map(|t| (source.clone(), t, *w)))
            })
        })
        .collect()
}

pub(crate) fn add_endpoints<P>(built: &mut Built<P>, edges: &[(P, P, f64)])
where
    P: Hash + Eq + Clone + Debug,
{
    for (source, sink, _) in edges.iter() {
        for v in [source, sink] {
            if !built.graph.contains(v) {
                built.add_vertex(v.clone());
            }
        }
    }
}

pub(crate) fn add_edges<P>(
    built: &mut Built<P>,
    edges: &[(P, P, f64)],
    directed: bool,
) -> Result<()>
where
    P: Hash + Eq + Clone + Debug,
{
    for (source, sink, weight) in edges.iter() {
        built.add_edge(source, sink, *weight, directed)?;
    }
    Ok(())
}
