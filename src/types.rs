//! Identifier types shared across the engine.

/// Identifier of a graph vertex.
///
/// Vertex ids are dense: after a load every id in `[0, vertex_count)` is a
/// valid vertex, including ids that never appeared in the source (isolated
/// vertices).
pub type VertexId = u32;
