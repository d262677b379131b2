//! Judge-style input and output.
//!
//! Input is a whitespace-separated token stream holding any number of cases:
//!
//! ```text
//! N M
//! from to weight     (M times)
//! start end
//! ```
//!
//! The stream ends when no tokens are left at a case boundary.

use std::str::{FromStr, SplitWhitespace};

use ordered_float::OrderedFloat;

use crate::algorithm::PathResult;
use crate::graph::DirectedGraph;
use crate::{Error, Result};

/// Concrete weight type used for parsed cases
pub type Weight = OrderedFloat<f64>;

/// Pulls typed values out of a whitespace-separated token stream
#[derive(Debug)]
pub struct TokenReader<'a> {
    tokens: SplitWhitespace<'a>,
}

impl<'a> TokenReader<'a> {
    /// Creates a reader over `input`
    pub fn new(input: &'a str) -> Self {
        TokenReader {
            tokens: input.split_whitespace(),
        }
    }

    /// Reads the next token, or `None` once the stream is exhausted
    pub fn next_token<T: FromStr>(&mut self) -> Result<Option<T>> {
        match self.tokens.next() {
            None => Ok(None),
            Some(token) => token
                .parse()
                .map(Some)
                .map_err(|_| Error::Parse(format!("unexpected token {:?}", token))),
        }
    }

    /// Reads the next token, treating end of input as an error
    pub fn expect_token<T: FromStr>(&mut self, what: &str) -> Result<T> {
        self.next_token()?
            .ok_or_else(|| Error::Parse(format!("input ended while reading {}", what)))
    }
}

/// One fully loaded search request
#[derive(Debug, Clone)]
pub struct GraphCase {
    pub graph: DirectedGraph<Weight>,
    pub start: usize,
    pub end: usize,
}

/// Iterates over the cases of a token stream.
///
/// A case with an out-of-range vertex or negative weight is still consumed
/// completely before its `Error::InvalidGraph` is yielded, so the following
/// case can be read. A malformed or truncated stream yields one
/// `Error::Parse` and then ends.
#[derive(Debug)]
pub struct CaseReader<'a> {
    reader: TokenReader<'a>,
    failed: bool,
}

impl<'a> CaseReader<'a> {
    /// Creates a case reader over `input`
    pub fn new(input: &'a str) -> Self {
        CaseReader {
            reader: TokenReader::new(input),
            failed: false,
        }
    }

    fn read_case(&mut self, vertices: i64) -> Result<Result<GraphCase>> {
        let edge_count: i64 = self.reader.expect_token("edge count")?;

        // The count is untrusted; let the vector grow with the edges actually read
        let mut edges = Vec::new();
        for _ in 0..edge_count.max(0) {
            let from: i64 = self.reader.expect_token("edge source")?;
            let to: i64 = self.reader.expect_token("edge target")?;
            let weight: f64 = self.reader.expect_token("edge weight")?;
            edges.push((from, to, weight));
        }
        let start: i64 = self.reader.expect_token("start vertex")?;
        let end: i64 = self.reader.expect_token("end vertex")?;

        Ok(build_case(vertices, edge_count, edges, start, end))
    }
}

impl Iterator for CaseReader<'_> {
    type Item = Result<GraphCase>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let outcome = match self.reader.next_token::<i64>() {
            Ok(None) => return None,
            Ok(Some(vertices)) => self.read_case(vertices),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(case) => Some(case),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

/// Reads every case from `input`
pub fn read_cases(input: &str) -> Vec<Result<GraphCase>> {
    CaseReader::new(input).collect()
}

fn vertex_id(id: i64, vertices: usize) -> Result<usize> {
    usize::try_from(id)
        .ok()
        .filter(|&v| v < vertices)
        .ok_or_else(|| {
            Error::InvalidGraph(format!("vertex {} is outside 0..{}", id, vertices))
        })
}

fn build_case(
    vertices: i64,
    edge_count: i64,
    edges: Vec<(i64, i64, f64)>,
    start: i64,
    end: i64,
) -> Result<GraphCase> {
    let n = usize::try_from(vertices)
        .map_err(|_| Error::InvalidGraph(format!("vertex count {} is negative", vertices)))?;
    if edge_count < 0 {
        return Err(Error::InvalidGraph(format!("edge count {} is negative", edge_count)));
    }

    let edges = edges
        .into_iter()
        .map(|(from, to, weight)| Ok((vertex_id(from, n)?, vertex_id(to, n)?, OrderedFloat(weight))))
        .collect::<Result<Vec<_>>>()?;
    let graph = DirectedGraph::from_edges(n, edges)?;

    let start = vertex_id(start, n)?;
    let end = vertex_id(end, n)?;

    Ok(GraphCase { graph, start, end })
}

/// Renders a path as space-separated vertices, or the "no path" line
pub fn render_path(result: &PathResult<Weight>) -> String {
    if !result.is_reachable() {
        return format!("no path from {} to {}", result.source, result.target);
    }
    result
        .path
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders a reachability answer
pub fn render_reachability(reachable: bool) -> &'static str {
    if reachable {
        "yes"
    } else {
        "no"
    }
}

/// Renders a result as one JSON object; an unreachable distance becomes `null`
pub fn render_json(result: &PathResult<Weight>) -> Result<String> {
    Ok(serde_json::to_string(result)?)
}
