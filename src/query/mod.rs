//! Stateless analytics and traversal over a loaded [`SparseGraph`].
//!
//! Every query recomputes from the store; no derived state is cached
//! between calls.
//!
//! [`SparseGraph`]: crate::storage::SparseGraph

mod degree;
mod traversal;

pub use degree::{degree_statistics, max_in_degree_vertex, max_out_degree_vertex, DegreeStats};
pub use traversal::{bfs, count_components, BfsResult};
