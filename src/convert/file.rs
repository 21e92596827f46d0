use crate::convert::{add_edges, add_endpoints, Built};
use crate::error::{GraphError, Result};
use crate::graph::*;
use std::fmt::Display;
use std::fs::File;
use std::hash::Hash;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Reads the edge-list text format.
///
/// ```text
/// N            number of vertices
/// M            number of edge lines
/// u v w        M times: source label, sink label, weight
/// ```
///
/// Fields are separated by whitespace and blank lines are ignored. Labels are
/// read as strings. A header or edge line that cannot be parsed is an error.
/// Counts that disagree with the data are warnings: if `N` exceeds the number of
/// distinct labels, isolated vertices are added under the smallest unused
/// decimal labels counting up from that number.
#[derive(Debug, Clone, Default)]
pub struct EdgeFileReader {
    directed: bool,
}

impl EdgeFileReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether each edge line is a directed edge. Undirected by default.
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    pub fn read_file<Q: AsRef<Path>>(&self, path: Q) -> Result<Built<String>> {
        let file = File::open(path)?;
        self.read(BufReader::new(file))
    }

    #[tracing::instrument(level = "debug", skip_all, fields(directed = self.directed))]
    pub fn read<R: BufRead>(&self, reader: R) -> Result<Built<String>> {
        let mut lines = Lines::new(reader);
        let (n_line, vertex_count) = lines.header("vertex count")?;
        let (m_line, edge_count) = lines.header("edge count")?;

        let mut edges = vec![];
        while let Some((line_no, line)) = lines.next()? {
            edges.push(parse_edge(line_no, &line)?);
        }

        let mut built = Built::new();
        if edges.len() != edge_count {
            built.warn(GraphError::MalformedInputFile {
                line: m_line,
                reason: format!("declares {} edges, found {}", edge_count, edges.len()),
            });
        }
        add_endpoints(&mut built, &edges);
        let distinct = built.graph.vertex_size();
        if distinct > vertex_count {
            built.warn(GraphError::MalformedInputFile {
                line: n_line,
                reason: format!("declares {} vertices, edges name {}", vertex_count, distinct),
            });
        }
        let mut next_label = distinct;
        while built.graph.vertex_size() < vertex_count {
            let label = next_label.to_string();
            next_label += 1;
            if !built.graph.contains(&label) {
                built.add_vertex(label);
            }
        }
        add_edges(&mut built, &edges, self.directed)?;
        tracing::debug!(
            vertices = built.graph.vertex_size(),
            edges = built.graph.edge_size(),
            warnings = built.warnings.len(),
            "read"
        );
        Ok(built)
    }
}

/// Reads an edge-list file. See [EdgeFileReader] for the format.
pub fn file_to_graph<Q: AsRef<Path>>(path: Q, directed: bool) -> Result<Built<String>> {
    EdgeFileReader::new().directed(directed).read_file(path)
}

/// Writes `graph` in the edge-list format, one line per directional edge.
///
/// An undirected edge is written in both directions, which reads back
/// unchanged with either orientation. Labels must not contain whitespace.
pub fn write_graph<P, W>(graph: &WeightedGraph<P>, writer: W) -> Result<()>
where
    P: Hash + Eq + Display,
    W: Write,
{
    let mut writer = BufWriter::new(writer);
    let edges: Vec<WeightedEdge> = graph.edges().collect();
    writeln!(writer, "{}", graph.vertex_size())?;
    writeln!(writer, "{}", edges.len())?;
    for e in edges.iter() {
        let (Some(source), Some(sink)) = (graph.payload(&e.source), graph.payload(&e.sink)) else {
            continue;
        };
        writeln!(writer, "{} {} {}", source, sink, e.weight)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn graph_to_file<P, Q>(graph: &WeightedGraph<P>, path: Q) -> Result<()>
where
    P: Hash + Eq + Display,
    Q: AsRef<Path>,
{
    write_graph(graph, File::create(path)?)
}

struct Lines<R> {
    inner: std::io::Lines<R>,
    line_no: usize,
}

impl<R: BufRead> Lines<R> {
    fn new(reader: R) -> Self {
        Self {
            inner: reader.lines(),
            line_no: 0,
        }
    }

    /// Next non-blank line with its 1-based number.
    fn next(&mut self) -> Result<Option<(usize, String)>> {
        for line in self.inner.by_ref() {
            self.line_no += 1;
            let line = line?;
            if !line.trim().is_empty() {
                return Ok(Some((self.line_no, line)));
            }
        }
        Ok(None)
    }

    fn header(&mut self, what: &str) -> Result<(usize, usize)> {
        let Some((line_no, line)) = self.next()? else {
            return Err(GraphError::MalformedInputFile {
                line: self.line_no + 1,
                reason: format!("missing {}", what),
            });
        };
        let count = line
            .trim()
            .parse::<usize>()
            .map_err(|e| GraphError::MalformedInputFile {
                line: line_no,
                reason: format!("bad {} {:?}: {}", what, line.trim(), e),
            })?;
        Ok((line_no, count))
    }
}

fn parse_edge(line_no: usize, line: &str) -> Result<(String, String, f64)> {
    let malformed = |reason: String| GraphError::MalformedInputFile {
        line: line_no,
        reason,
    };
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [source, sink, weight] = fields.as_slice() else {
        return Err(malformed(format!(
            "expected `source sink weight`, found {} fields",
            fields.len()
        )));
    };
    let weight = weight
        .parse::<f64>()
        .map_err(|e| malformed(format!("bad weight {:?}: {}", weight, e)))?;
    if weight.is_nan() {
        return Err(malformed("weight is NaN".to_string()));
    }
    Ok((source.to_string(), sink.to_string(), weight))
}
