//! Reads the textual graph description into a [`Graph`].
//!
//! Layout: vertex count, vertex names, one ignored header line, then edge
//! lines of the form `SRC : T1 T2 ...`.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use consensus::{Graph, NodeName};
use tracing::{debug, trace};

use crate::error::{BlockdagError, Result};

const DELIMITERS: &[char] = &[' ', ':', '\t', '\r', '\n'];

fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(DELIMITERS).filter(|token| !token.is_empty())
}

/// Reads `path` (or stdin for `-`) and builds the graph.
pub fn load(path: &Path, max_name_len: usize) -> Result<Graph> {
    let text = if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path)?
    };

    debug!("Loading graph from {}", path.display());
    parse_str(&text, max_name_len)
}

pub fn parse_str(text: &str, max_name_len: usize) -> Result<Graph> {
    let mut lines = text.lines();

    let count_line = lines.next().ok_or_else(|| parse_error(1, "missing vertex count"))?;
    let count_token = tokens(count_line).next().ok_or_else(|| parse_error(1, "missing vertex count"))?;
    let vertex_count: usize = count_token
        .parse()
        .map_err(|_| parse_error(1, format!("invalid vertex count '{}'", count_token)))?;
    if vertex_count == 0 {
        return Err(parse_error(1, "vertex count must be positive"));
    }

    let names_line = lines.next().ok_or_else(|| parse_error(2, "missing vertex names"))?;
    let mut graph = Graph::build_bounded(vertex_count, tokens(names_line), max_name_len)?;

    // Header line carries nothing the graph needs.
    lines.next();

    let mut dropped = 0usize;
    for line in lines {
        let mut parts = tokens(line);
        let Some(source) = parts.next() else {
            continue;
        };
        // Edge tokens are bounded the same way as the names line.
        let source = NodeName::bounded(source, max_name_len);
        for target in parts {
            let target = NodeName::bounded(target, max_name_len);
            if !graph.add_edge(source.as_str(), target.as_str()) {
                dropped += 1;
            }
        }
    }

    debug!(
        "Loaded graph with {} vertices and {} edges ({} dropped)",
        graph.vertex_count(),
        graph.edge_count(),
        dropped
    );
    trace!("Adjacency:\n{}", graph);
    Ok(graph)
}

fn parse_error(line: usize, reason: impl Into<String>) -> BlockdagError {
    BlockdagError::Parse { line, reason: reason.into() }
}
