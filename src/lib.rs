//! In-memory sparse graph engine.
//!
//! Loads a whitespace-delimited edge list into a compact CSR adjacency
//! structure and answers degree, reachability, and connectivity queries
//! over it. A [`GraphSession`] owns at most one loaded graph; the graph
//! is immutable once built and a reload swaps in a fresh instance only
//! after the new load fully succeeded.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod query;
pub mod session;
pub mod storage;
pub mod types;

pub use error::{GraphError, Result};
pub use query::{
    bfs, count_components, degree_statistics, max_in_degree_vertex, max_out_degree_vertex,
    BfsResult, DegreeStats,
};
pub use session::GraphSession;
pub use storage::{load_edge_list, load_edge_list_path, SparseGraph};
pub use types::VertexId;
