//! Session-scoped handle owning the single loaded graph.

use std::path::Path;

use tracing::info;

use crate::error::{GraphError, Result};
use crate::query::{self, BfsResult, DegreeStats};
use crate::storage::{load_edge_list_path, SparseGraph};
use crate::types::VertexId;

/// Owns at most one loaded [`SparseGraph`] and exposes the engine's query
/// surface over it.
///
/// The session is a plain value: one per caller, no shared state between
/// sessions, no interior mutability. [`load`](GraphSession::load) parses
/// the whole source into a fresh graph before swapping it in, so a failed
/// load leaves the previously loaded graph intact and queryable. Queries
/// recompute from the store on every call.
#[derive(Default)]
pub struct GraphSession {
    graph: Option<SparseGraph>,
}

impl GraphSession {
    /// A session with no graph loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `path` as an edge list, replacing any previously loaded
    /// graph on success only.
    pub fn load(&mut self, path: impl AsRef<Path>, directed: bool) -> Result<()> {
        let graph = load_edge_list_path(path.as_ref(), directed)?;
        let replaced = self.graph.is_some();
        self.graph = Some(graph);
        info!(replaced, "session graph installed");
        Ok(())
    }

    /// The loaded graph, or [`GraphError::EmptyGraph`] when nothing has
    /// been loaded yet.
    pub fn graph(&self) -> Result<&SparseGraph> {
        self.graph.as_ref().ok_or(GraphError::EmptyGraph)
    }

    /// `(vertex_count, arc_count)`; `(0, 0)` when no graph is loaded.
    /// Valid even on an empty graph.
    pub fn get_sizes(&self) -> (u64, u64) {
        match &self.graph {
            Some(g) => (g.vertex_count() as u64, g.arc_count() as u64),
            None => (0, 0),
        }
    }

    /// See [`query::max_out_degree_vertex`].
    pub fn max_out_degree_vertex(&self) -> Result<VertexId> {
        query::max_out_degree_vertex(self.graph()?)
    }

    /// See [`query::max_in_degree_vertex`].
    pub fn max_in_degree_vertex(&self) -> Result<VertexId> {
        query::max_in_degree_vertex(self.graph()?)
    }

    /// See [`query::degree_statistics`].
    pub fn degree_statistics(&self) -> Result<DegreeStats> {
        Ok(query::degree_statistics(self.graph()?))
    }

    /// See [`query::bfs`]. With no graph loaded every start vertex is out
    /// of range, matching the empty-graph behavior.
    pub fn bfs(&self, start: VertexId, max_depth: u32) -> Result<BfsResult> {
        match &self.graph {
            Some(g) => query::bfs(g, start, max_depth),
            None => Err(GraphError::InvalidArgument(format!(
                "vertex {start} out of range (vertex count 0)"
            ))),
        }
    }

    /// See [`query::count_components`]. 0 when no graph is loaded.
    pub fn count_components(&self) -> usize {
        self.graph.as_ref().map_or(0, query::count_components)
    }
}
