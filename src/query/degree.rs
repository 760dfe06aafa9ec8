use serde::Serialize;
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::storage::SparseGraph;
use crate::types::VertexId;

/// Returns the vertex with the largest out-degree, smallest id winning
/// ties. O(vertex_count). Fails with [`GraphError::EmptyGraph`] when the
/// graph has no vertices.
pub fn max_out_degree_vertex(graph: &SparseGraph) -> Result<VertexId> {
    if graph.vertex_count() == 0 {
        return Err(GraphError::EmptyGraph);
    }
    let mut best = 0usize;
    let mut best_degree = graph.out_degree_raw(0);
    for v in 1..graph.vertex_count() {
        let degree = graph.out_degree_raw(v);
        if degree > best_degree {
            best = v;
            best_degree = degree;
        }
    }
    debug!(vertex = best, degree = best_degree, "max out-degree");
    Ok(best as VertexId)
}

/// Returns the vertex with the largest in-degree, smallest id winning
/// ties. There is no reverse index, so this is one O(arc_count) scan of
/// the adjacency accumulating counts per target. Fails with
/// [`GraphError::EmptyGraph`] when the graph has no vertices.
pub fn max_in_degree_vertex(graph: &SparseGraph) -> Result<VertexId> {
    if graph.vertex_count() == 0 {
        return Err(GraphError::EmptyGraph);
    }
    let counts = in_degree_counts(graph);
    let mut best = 0usize;
    let mut best_degree = counts[0];
    for (v, &degree) in counts.iter().enumerate().skip(1) {
        if degree > best_degree {
            best = v;
            best_degree = degree;
        }
    }
    debug!(vertex = best, degree = best_degree, "max in-degree");
    Ok(best as VertexId)
}

/// Min/max/average in- and out-degree over all vertices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DegreeStats {
    /// Smallest out-degree.
    pub min_out: usize,
    /// Largest out-degree.
    pub max_out: usize,
    /// Mean out-degree.
    pub avg_out: f64,
    /// Smallest in-degree.
    pub min_in: usize,
    /// Largest in-degree.
    pub max_in: usize,
    /// Mean in-degree.
    pub avg_in: f64,
}

/// Computes [`DegreeStats`] in one pass over the offsets plus one arc
/// scan. Returns the zeroed default for the empty graph.
pub fn degree_statistics(graph: &SparseGraph) -> DegreeStats {
    let n = graph.vertex_count();
    if n == 0 {
        return DegreeStats::default();
    }
    let mut stats = DegreeStats {
        min_out: usize::MAX,
        min_in: usize::MAX,
        ..DegreeStats::default()
    };
    for v in 0..n {
        let degree = graph.out_degree_raw(v);
        stats.min_out = stats.min_out.min(degree);
        stats.max_out = stats.max_out.max(degree);
    }
    let counts = in_degree_counts(graph);
    for &degree in &counts {
        stats.min_in = stats.min_in.min(degree);
        stats.max_in = stats.max_in.max(degree);
    }
    stats.avg_out = graph.arc_count() as f64 / n as f64;
    stats.avg_in = stats.avg_out;
    stats
}

fn in_degree_counts(graph: &SparseGraph) -> Vec<usize> {
    let mut counts = vec![0usize; graph.vertex_count()];
    for &target in graph.targets() {
        counts[target as usize] += 1;
    }
    counts
}
