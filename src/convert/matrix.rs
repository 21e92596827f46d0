use crate::convert::Built;
use crate::error::{GraphError, Result};
use crate::graph::*;
use std::fmt::Debug;
use std::hash::Hash;

/// The two matrix views of a graph over one vertex enumeration.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphMatrices<P> {
    /// Payload of row/column `i`.
    pub labels: Vec<P>,
    pub binary: AdjacencyMatrix,
    pub weighted: AdjacencyMatrix,
}

/// Adjacency matrices of `graph`, rows and columns in vertex enumeration order.
///
/// The binary matrix is symmetric iff every edge was added as undirected.
pub fn graph_to_matrix<P>(graph: &WeightedGraph<P>) -> GraphMatrices<P>
where
    P: Hash + Eq + Clone,
{
    let n = graph.vertex_size();
    let labels = graph.iter_vertices().map(|(_, p)| p.clone()).collect();
    let mut binary = vec![vec![0u8; n]; n];
    let mut weighted: Vec<Vec<Vec<f64>>> = vec![vec![vec![]; n]; n];
    for e in graph.edges() {
        let (r, c) = (e.source.to_raw(), e.sink.to_raw());
        binary[r][c] = 1;
        weighted[r][c].push(e.weight);
    }
    GraphMatrices {
        labels,
        binary: AdjacencyMatrix::Binary(binary),
        weighted: AdjacencyMatrix::Weighted(weighted),
    }
}

/// Builds a graph from a matrix with vertices labelled `"0"` to `"n-1"`.
pub fn matrix_to_graph(matrix: &AdjacencyMatrix, directed: bool) -> Result<Built<String>> {
    let labels = (0..matrix.size()).map(|i| i.to_string()).collect();
    matrix_to_graph_with_labels(matrix, labels, directed)
}

/// Builds a graph from a matrix, row `i` becoming vertex `labels[i]`.
///
/// Every weight of cell `[i][j]` becomes an edge `i -> j`; a binary cell weighs
/// [DEFAULT_WEIGHT]. With `directed == false` each edge is added both ways.
/// Repeated labels merge their rows and are reported as warnings.
#[tracing::instrument(level = "debug", skip_all, fields(size = matrix.size(), directed))]
pub fn matrix_to_graph_with_labels<P>(
    matrix: &AdjacencyMatrix,
    labels: Vec<P>,
    directed: bool,
) -> Result<Built<P>>
where
    P: Hash + Eq + Clone + Debug,
{
    matrix.validate()?;
    let n = matrix.size();
    if labels.len() != n {
        return Err(GraphError::LabelCountMismatch {
            expected: n,
            actual: labels.len(),
        });
    }
    let mut built = Built::new();
    for label in labels.iter() {
        built.add_vertex(label.clone());
    }
    for (i, from) in labels.iter().enumerate() {
        for (j, to) in labels.iter().enumerate() {
            for w in matrix.weights(i, j) {
                built.add_edge(from, to, *w, directed)?;
            }
        }
    }
    Ok(built)
}
