use trama::{bfs, count_components, load_edge_list, Result, SparseGraph};

fn chain_graph(length: u32) -> SparseGraph {
    let mut src = String::new();
    for i in 0..length.saturating_sub(1) {
        src.push_str(&format!("{} {}\n", i, i + 1));
    }
    load_edge_list(src.as_bytes(), false).unwrap()
}

fn star_graph(leaves: u32) -> SparseGraph {
    let mut src = String::new();
    for leaf in 1..=leaves {
        src.push_str(&format!("0 {leaf}\n"));
    }
    load_edge_list(src.as_bytes(), false).unwrap()
}

#[test]
fn star_center_reaches_all_leaves_at_depth_one() -> Result<()> {
    let g = star_graph(10);
    let res = bfs(&g, 0, 1)?;
    assert_eq!(res.visited.len(), 11);
    assert_eq!(res.visited[0], 0);
    assert_eq!(res.frontier_edges.len(), 10);
    Ok(())
}

#[test]
fn star_leaf_needs_two_levels_for_the_far_side() -> Result<()> {
    let g = star_graph(10);
    let near = bfs(&g, 3, 1)?;
    assert_eq!(near.visited, vec![3, 0]);
    let far = bfs(&g, 3, 2)?;
    assert_eq!(far.visited.len(), 11);
    Ok(())
}

#[test]
fn chain_depth_bound_cuts_off_distance() -> Result<()> {
    let g = chain_graph(50);
    for depth in [0u32, 1, 5, 49, 60] {
        let res = bfs(&g, 0, depth)?;
        assert_eq!(res.visited.len(), (depth as usize + 1).min(50));
        assert_eq!(res.frontier_edges.len(), res.visited.len() - 1);
    }
    Ok(())
}

#[test]
fn bfs_visits_match_frontier_edge_targets() -> Result<()> {
    let g = load_edge_list("0 1\n0 2\n1 2\n2 3\n3 4\n".as_bytes(), false)?;
    let res = bfs(&g, 0, 3)?;
    // every visited vertex except the origin is the target of exactly one
    // tree edge
    assert_eq!(res.frontier_edges.len(), res.visited.len() - 1);
    for &(parent, child) in &res.frontier_edges {
        assert!(res.visited.contains(&parent));
        assert!(res.visited.contains(&child));
    }
    Ok(())
}

#[test]
fn components_count_isolated_ranges() -> Result<()> {
    // two clusters and a large gap of isolated ids between them
    let g = load_edge_list("0 1\n1 2\n10 11\n".as_bytes(), false)?;
    // 7 isolated ids (3..=9) plus the two clusters
    assert_eq!(count_components(&g), 9);
    Ok(())
}

#[test]
fn chain_is_a_single_component() {
    assert_eq!(count_components(&chain_graph(100)), 1);
}

#[test]
fn parallel_edges_do_not_change_connectivity() -> Result<()> {
    let g = load_edge_list("0 1\n0 1\n0 1\n".as_bytes(), false)?;
    assert_eq!(count_components(&g), 1);
    let res = bfs(&g, 0, 1)?;
    assert_eq!(res.visited, vec![0, 1]);
    assert_eq!(res.frontier_edges, vec![(0, 1)]);
    Ok(())
}
