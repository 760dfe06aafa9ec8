//! Sparse graph storage: the CSR adjacency structure and the edge-list
//! loader that builds it.

mod graph;
mod loader;

pub use graph::SparseGraph;
pub use loader::{load_edge_list, load_edge_list_path};
