use std::collections::VecDeque;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::storage::SparseGraph;
use crate::types::VertexId;

/// Vertices and tree edges discovered by a depth-bounded BFS.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BfsResult {
    /// Visited vertices in discovery order; always starts with the origin.
    pub visited: Vec<VertexId>,
    /// Tree edges `(parent, child)` used to first discover each vertex,
    /// in discovery order. Non-tree edges among visited vertices are not
    /// reported; the result is a BFS-tree approximation of the induced
    /// subgraph, not the full induced subgraph.
    pub frontier_edges: Vec<(VertexId, VertexId)>,
}

/// Level-synchronous breadth-first traversal from `start`, expanding
/// out-neighbors in adjacency (insertion) order. Vertices discovered at
/// depth `max_depth` are visited but not expanded, so `max_depth == 0`
/// yields exactly the origin. Fails with an invalid-argument error when
/// `start` is out of range, which includes the empty graph.
pub fn bfs(graph: &SparseGraph, start: VertexId, max_depth: u32) -> Result<BfsResult> {
    graph.check_vertex(start)?;
    let mut seen = vec![false; graph.vertex_count()];
    let mut queue: VecDeque<(VertexId, u32)> = VecDeque::new();
    let mut result = BfsResult::default();
    seen[start as usize] = true;
    queue.push_back((start, 0));
    while let Some((v, depth)) = queue.pop_front() {
        result.visited.push(v);
        if depth >= max_depth {
            continue;
        }
        for &w in graph.neighbors_raw(v as usize) {
            if !seen[w as usize] {
                seen[w as usize] = true;
                result.frontier_edges.push((v, w));
                queue.push_back((w, depth + 1));
            }
        }
    }
    debug!(
        start,
        max_depth,
        visited = result.visited.len(),
        "bfs complete"
    );
    Ok(result)
}

/// Counts components by iterative depth-first exploration over
/// out-neighbors only, starting a new component at each unvisited vertex
/// in id order. Correct connected components for an undirected load;
/// for a directed load this is forward reachability from each start, not
/// weak connectivity (no reverse arcs are followed). Isolated vertices
/// count as singleton components. Returns 0 for the empty graph.
pub fn count_components(graph: &SparseGraph) -> usize {
    let n = graph.vertex_count();
    let mut seen = vec![false; n];
    let mut stack: Vec<VertexId> = Vec::new();
    let mut components = 0usize;
    for v in 0..n {
        if seen[v] {
            continue;
        }
        components += 1;
        seen[v] = true;
        stack.push(v as VertexId);
        while let Some(u) = stack.pop() {
            for &w in graph.neighbors_raw(u as usize) {
                if !seen[w as usize] {
                    seen[w as usize] = true;
                    stack.push(w);
                }
            }
        }
    }
    debug!(components, "component count complete");
    components
}
