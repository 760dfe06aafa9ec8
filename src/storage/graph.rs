use crate::error::{GraphError, Result};
use crate::types::VertexId;

/// Compressed sparse row adjacency over a dense vertex id space.
///
/// `offsets` has `vertex_count + 1` entries; the out-neighbors of vertex
/// `v` live in `targets[offsets[v]..offsets[v + 1]]`, in the order their
/// edges appeared in the source. Duplicate arcs and self-loops are kept
/// as-is. An undirected load stores both `u -> v` and `v -> u`, so one
/// input line always contributes two arcs (self-loops included).
///
/// The structure is immutable once built; there is no mutation API.
#[derive(Debug)]
pub struct SparseGraph {
    offsets: Vec<usize>,
    targets: Vec<VertexId>,
    directed: bool,
}

impl SparseGraph {
    /// Builds the CSR from a flat arc list. The fill is stable: arcs keep
    /// their relative order within each source vertex. Every target must
    /// already be `< vertex_count`; the loader guarantees this by sizing
    /// the id space from the maximum id seen.
    pub(crate) fn from_arcs(
        vertex_count: usize,
        arcs: &[(VertexId, VertexId)],
        directed: bool,
    ) -> Self {
        let mut offsets = vec![0usize; vertex_count + 1];
        for &(u, _) in arcs {
            offsets[u as usize + 1] += 1;
        }
        for v in 0..vertex_count {
            offsets[v + 1] += offsets[v];
        }
        let mut cursor = offsets.clone();
        let mut targets: Vec<VertexId> = vec![0; arcs.len()];
        for &(u, v) in arcs {
            targets[cursor[u as usize]] = v;
            cursor[u as usize] += 1;
        }
        Self {
            offsets,
            targets,
            directed,
        }
    }

    /// An empty graph with zero vertices and zero arcs.
    pub fn empty(directed: bool) -> Self {
        Self {
            offsets: vec![0],
            targets: Vec::new(),
            directed,
        }
    }

    /// Number of vertices, `1 + max id` seen at load time (0 when the
    /// source had no edges). Isolated ids below the maximum count too.
    pub fn vertex_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Total number of stored directed adjacency entries.
    pub fn arc_count(&self) -> usize {
        self.targets.len()
    }

    /// Whether the graph was loaded in directed mode.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Out-neighbors of `v` in source insertion order.
    pub fn out_neighbors(&self, v: VertexId) -> Result<&[VertexId]> {
        self.check_vertex(v)?;
        Ok(self.neighbors_raw(v as usize))
    }

    /// Number of arcs leaving `v`.
    pub fn out_degree(&self, v: VertexId) -> Result<usize> {
        self.check_vertex(v)?;
        Ok(self.out_degree_raw(v as usize))
    }

    pub(crate) fn neighbors_raw(&self, v: usize) -> &[VertexId] {
        &self.targets[self.offsets[v]..self.offsets[v + 1]]
    }

    pub(crate) fn out_degree_raw(&self, v: usize) -> usize {
        self.offsets[v + 1] - self.offsets[v]
    }

    /// Flat view of all arc targets, used for the in-degree scan.
    pub(crate) fn targets(&self) -> &[VertexId] {
        &self.targets
    }

    pub(crate) fn check_vertex(&self, v: VertexId) -> Result<()> {
        if (v as usize) < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::InvalidArgument(format!(
                "vertex {v} out of range (vertex count {})",
                self.vertex_count()
            )))
        }
    }
}
