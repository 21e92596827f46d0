use crate::error::{GraphError, Result};
use crate::graph::*;

/// Weight given to every present cell of a binary matrix.
pub const DEFAULT_WEIGHT: f64 = 1.0;

const PRESENT: &[f64] = &[DEFAULT_WEIGHT];

/// A square adjacency matrix indexed by vertex enumeration.
///
/// *   `Binary`: `m[i][j]` is `1` iff `i -> j` is an edge, `0` otherwise.
/// *   `Weighted`: `m[i][j]` is the weight list of `i -> j`, empty if not adjacent.
///
/// Cell `[i][j]` describes the ordered pair, so a matrix is symmetric iff it
/// encodes an undirected graph.
#[derive(Debug, Clone, PartialEq)]
pub enum AdjacencyMatrix {
    Binary(Vec<Vec<u8>>),
    Weighted(Vec<Vec<Vec<f64>>>),
}

impl AdjacencyMatrix {
    /// Number of rows, i.e. vertices.
    pub fn size(&self) -> usize {
        match self {
            AdjacencyMatrix::Binary(m) => m.len(),
            AdjacencyMatrix::Weighted(m) => m.len(),
        }
    }

    /// Checks that the matrix is square and its cells are well-formed:
    /// only `0`/`1` in a binary matrix, no NaN weights in a weighted one.
    pub fn validate(&self) -> Result<()> {
        let n = self.size();
        match self {
            AdjacencyMatrix::Binary(m) => {
                for (i, row) in m.iter().enumerate() {
                    check_row_len(i, row.len(), n)?;
                    if let Some(j) = row.iter().position(|x| *x > 1) {
                        return Err(GraphError::MalformedAdjacencyMatrix(format!(
                            "cell [{}][{}] of a binary matrix is {}",
                            i, j, row[j]
                        )));
                    }
                }
            }
            AdjacencyMatrix::Weighted(m) => {
                for (i, row) in m.iter().enumerate() {
                    check_row_len(i, row.len(), n)?;
                    for (j, ws) in row.iter().enumerate() {
                        if ws.iter().any(|w| w.is_nan()) {
                            return Err(GraphError::MalformedAdjacencyMatrix(format!(
                                "cell [{}][{}] holds a NaN weight",
                                i, j
                            )));
                        }
                    }
                }
            }
        }
        Ok(())
    }

    pub fn is_adjacent(&self, row: usize, col: usize) -> bool {
        !self.weights(row, col).is_empty()
    }

    /// Weights of `row -> col`. A present binary cell weighs [DEFAULT_WEIGHT].
    pub fn weights(&self, row: usize, col: usize) -> &[f64] {
        match self {
            AdjacencyMatrix::Binary(m) => match m.get(row).and_then(|r| r.get(col)) {
                Some(&1) => PRESENT,
                _ => &[],
            },
            AdjacencyMatrix::Weighted(m) => m
                .get(row)
                .and_then(|r| r.get(col))
                .map(|ws| ws.as_slice())
                .unwrap_or(&[]),
        }
    }

    pub fn is_symmetric(&self) -> bool {
        let n = self.size();
        (0..n).all(|i| (0..i).all(|j| self.weights(i, j) == self.weights(j, i)))
    }
}

fn check_row_len(row: usize, len: usize, n: usize) -> Result<()> {
    if len == n {
        Ok(())
    } else {
        Err(GraphError::MalformedAdjacencyMatrix(format!(
            "row {} has {} cells in a matrix of {} rows",
            row, len, n
        )))
    }
}

impl QueryableGraph for AdjacencyMatrix {
    fn vertex_size(&self) -> usize {
        self.size()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new((0..self.size()).map(VertexId::new))
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        v.to_raw() < self.size()
    }

    fn successors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        let row = v.to_raw();
        let it = (0..self.size())
            .filter(move |col| self.is_adjacent(row, *col))
            .map(VertexId::new);
        Box::new(it)
    }
}
