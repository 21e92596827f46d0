//! A weighted graph keyed by vertex payloads, with traversals, shortest paths and
//! conversions from flat representations.
//!
//! ```
//! use wgraph::algorithm::*;
//! use wgraph::graph::*;
//!
//! let mut g = WeightedGraph::new();
//! for v in ["a", "b", "c"] {
//!     g.add_vertex(v).unwrap();
//! }
//! g.add_edge(&"a", &"b", 1.0, false).unwrap();
//! g.add_edge(&"b", &"c", 2.0, false).unwrap();
//! g.add_edge(&"a", &"c", 5.0, false).unwrap();
//!
//! assert_eq!(bfs(&g, &"a").unwrap(), vec!["a", "b", "c"]);
//! let p = dijkstra(&g, &"a", &"c").unwrap();
//! assert_eq!(p.path, vec!["a", "b", "c"]);
//! assert_eq!(p.distance, 3.0);
//! ```
//!
//! * [graph] holds the graph itself and the adjacency matrix views.
//! * [algorithm] holds DFS/BFS, Dijkstra, Bellman-Ford and connected components.
//! * [convert] builds graphs from matrices, edge sets and edge-list files, and back.
pub mod algorithm;
pub mod convert;
mod error;
pub mod graph;

pub use error::{GraphError, Result};
