use std::io::Write;

use tempfile::NamedTempFile;
use trama::{load_edge_list_path, GraphError, Result};

fn edge_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn undirected_square_has_four_vertices_and_eight_arcs() -> Result<()> {
    let file = edge_file("0 1\n0 2\n1 2\n2 3\n");
    let g = load_edge_list_path(file.path(), false)?;
    assert_eq!(g.vertex_count(), 4);
    assert_eq!(g.arc_count(), 8);
    assert!(!g.is_directed());
    Ok(())
}

#[test]
fn directed_square_stores_one_arc_per_line() -> Result<()> {
    let file = edge_file("0 1\n0 2\n1 2\n2 3\n");
    let g = load_edge_list_path(file.path(), true)?;
    assert_eq!(g.vertex_count(), 4);
    assert_eq!(g.arc_count(), 4);
    assert!(g.is_directed());
    Ok(())
}

#[test]
fn vertex_count_is_one_past_the_largest_id() -> Result<()> {
    let file = edge_file("0 1\n100 7\n");
    let g = load_edge_list_path(file.path(), true)?;
    assert_eq!(g.vertex_count(), 101);
    // every id below the maximum is a valid, possibly isolated, vertex
    assert!(g.out_neighbors(50)?.is_empty());
    assert_eq!(g.out_degree(100)?, 1);
    Ok(())
}

#[test]
fn undirected_load_is_symmetric() -> Result<()> {
    let file = edge_file("0 3\n1 3\n3 2\n");
    let g = load_edge_list_path(file.path(), false)?;
    for u in 0..g.vertex_count() as u32 {
        for &v in g.out_neighbors(u)? {
            let back = g
                .out_neighbors(v)?
                .iter()
                .filter(|&&w| w == u)
                .count();
            let fwd = g
                .out_neighbors(u)?
                .iter()
                .filter(|&&w| w == v)
                .count();
            assert_eq!(back, fwd, "arc {u}->{v} not mirrored");
        }
    }
    Ok(())
}

#[test]
fn adjacency_keeps_duplicates_in_insertion_order() -> Result<()> {
    let file = edge_file("0 2\n0 1\n0 2\n");
    let g = load_edge_list_path(file.path(), true)?;
    assert_eq!(g.out_neighbors(0)?, &[2, 1, 2]);
    Ok(())
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_edge_list_path("/nonexistent/edges.txt", false).unwrap_err();
    assert!(matches!(err, GraphError::Io(_)));
}

#[test]
fn malformed_line_aborts_the_load() {
    let file = edge_file("0 1\n1 two\n");
    let err = load_edge_list_path(file.path(), false).unwrap_err();
    match err {
        GraphError::Parse { line_no, line } => {
            assert_eq!(line_no, 2);
            assert_eq!(line, "1 two");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn csv_extension_is_read_as_whitespace_pairs() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("edges.csv");
    std::fs::write(&path, "0 1\n1 2\n")?;
    let g = load_edge_list_path(&path, false)?;
    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.arc_count(), 4);
    Ok(())
}
