use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{GraphError, Result};
use crate::storage::graph::SparseGraph;
use crate::types::VertexId;

/// Parses a whitespace-delimited edge list into a [`SparseGraph`].
///
/// Each non-empty line holds two non-negative integers `u v`. Blank lines
/// and lines starting with `#` are skipped. The load fails fast: the
/// first line that does not parse as exactly two non-negative integers
/// aborts with [`GraphError::Parse`] and nothing is returned.
///
/// In undirected mode every line contributes the two arcs `u -> v` and
/// `v -> u`; a self-loop likewise contributes two identical arcs, which
/// keeps `arc_count` at exactly twice the line count.
pub fn load_edge_list<R: Read>(reader: R, directed: bool) -> Result<SparseGraph> {
    let mut arcs: Vec<(VertexId, VertexId)> = Vec::new();
    let mut max_id: Option<VertexId> = None;
    let reader = BufReader::new(reader);
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let (u, v) = parse_edge(trimmed).ok_or_else(|| GraphError::Parse {
            line_no: idx + 1,
            line: trimmed.to_string(),
        })?;
        max_id = Some(max_id.map_or(u.max(v), |m| m.max(u).max(v)));
        arcs.push((u, v));
        if !directed {
            arcs.push((v, u));
        }
    }
    let graph = match max_id {
        Some(m) => SparseGraph::from_arcs(m as usize + 1, &arcs, directed),
        None => SparseGraph::empty(directed),
    };
    info!(
        vertices = graph.vertex_count(),
        arcs = graph.arc_count(),
        directed,
        "edge list loaded"
    );
    Ok(graph)
}

/// Opens `path` and loads it with [`load_edge_list`]. The file extension
/// is not significant; `.txt` and `.csv` are both read as raw
/// whitespace-delimited pairs.
pub fn load_edge_list_path(path: impl AsRef<Path>, directed: bool) -> Result<SparseGraph> {
    let path = path.as_ref();
    debug!(path = %path.display(), directed, "opening edge list");
    let file = File::open(path)?;
    load_edge_list(file, directed)
}

fn parse_edge(line: &str) -> Option<(VertexId, VertexId)> {
    let mut fields = line.split_whitespace();
    let u = fields.next()?.parse().ok()?;
    let v = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some((u, v))
}
