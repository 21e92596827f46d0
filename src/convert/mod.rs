//! Conversions between a [WeightedGraph] and flat representations:
//! adjacency matrices, edge sets and a plain text file format.
//!
//! Builders return a [Built] graph. Conditions that do not prevent a usable
//! graph, such as a repeated label or a header count that does not match the
//! data, are collected in [Built::warnings] and logged, instead of failing the
//! conversion.
use crate::error::{GraphError, Result};
use crate::graph::*;
use std::fmt::Debug;
use std::hash::Hash;

mod matrix;
pub use self::matrix::*;
mod edge_set;
pub use self::edge_set::*;
mod file;
pub use self::file::*;

/// A graph built from a flat representation plus the non-fatal conditions met on the way.
#[derive(Debug)]
pub struct Built<P>
where
    P: Hash + Eq + Debug,
{
    pub graph: WeightedGraph<P>,
    pub warnings: Vec<GraphError>,
}

impl<P> Built<P>
where
    P: Hash + Eq + Debug,
{
    pub(crate) fn new() -> Self {
        Self {
            graph: WeightedGraph::new(),
            warnings: vec![],
        }
    }

    pub(crate) fn warn(&mut self, warning: GraphError) {
        tracing::warn!(%warning, "conversion");
        self.warnings.push(warning);
    }

    /// Adds a vertex, downgrading a duplicate to a warning.
    pub(crate) fn add_vertex(&mut self, payload: P) {
        if let Err(e) = self.graph.add_vertex(payload) {
            self.warn(e);
        }
    }

    pub(crate) fn add_edge(&mut self, from: &P, to: &P, weight: f64, directed: bool) -> Result<()> {
        self.graph.add_edge(from, to, weight, directed)?;
        Ok(())
    }

    pub fn into_graph(self) -> WeightedGraph<P> {
        self.graph
    }
}
