// tests/edges_tests.rs

use h3_core::*;

fn idx(s: &str) -> H3Index {
  s.parse().unwrap()
}

#[test]
fn directed_edges() {
  let start = idx("891ea6d6533ffff");
  let adjacent = idx("891ea6d65afffff");
  let not_adjacent = idx("891ea6992dbffff");

  assert_eq!(are_neighbor_cells(start, adjacent), Ok(true));
  assert_eq!(are_neighbor_cells(start, not_adjacent), Ok(false));
  assert_eq!(are_neighbor_cells(start, start), Ok(false));

  let edge = cells_to_directed_edge(start, adjacent).unwrap();
  assert!(is_valid_directed_edge(edge));
  assert!(!is_valid_directed_edge(start));
  assert!(!is_valid_cell(edge));

  assert_eq!(get_directed_edge_origin(edge), Ok(start));
  assert_eq!(get_directed_edge_destination(edge), Ok(adjacent));
  assert_eq!(directed_edge_to_cells(edge), Ok([start, adjacent]));

  let edges = origin_to_directed_edges(start);
  assert_eq!(edges.len(), 6);
  assert!(edges.contains(&edge));

  assert_eq!(directed_edge_to_boundary(edge).unwrap().len(), 2);
}

#[test]
fn edge_requires_neighbors() {
  assert_eq!(
    cells_to_directed_edge(idx("891ea6d6533ffff"), idx("891ea6992dbffff")),
    Err(H3Error::NotNeighbors)
  );
}

#[test]
fn edge_boundary_lies_on_both_cells() {
  let start = idx("891ea6d6533ffff");
  let start_boundary = cell_to_boundary(start);
  for edge in origin_to_directed_edges(start) {
    let dest = get_directed_edge_destination(edge).unwrap();
    let dest_boundary = cell_to_boundary(dest);
    let edge_boundary = directed_edge_to_boundary(edge).unwrap();
    for v in &edge_boundary {
      let near = |b: &LatLng| (b.lat - v.lat).abs() < 1e-9 && (b.lng - v.lng).abs() < 1e-9;
      assert!(start_boundary.iter().any(near));
      assert!(dest_boundary.iter().any(near));
    }
  }
}

#[test]
fn pentagon_edges() {
  let pentagon = idx("821c07fffffffff");
  let edges = origin_to_directed_edges(pentagon);
  assert_eq!(edges.len(), 5);
  let mut destinations: Vec<H3Index> = edges
    .iter()
    .map(|&e| get_directed_edge_destination(e).unwrap())
    .collect();
  destinations.sort_unstable();
  let mut ring: Vec<H3Index> = grid_disk(pentagon, 1).unwrap().into_iter().filter(|&c| c != pentagon).collect();
  ring.sort_unstable();
  assert_eq!(destinations, ring);
}

#[test]
fn edge_errors() {
  let cell = idx("891ea6d6533ffff");
  assert_eq!(get_directed_edge_origin(cell), Err(H3Error::DirEdgeInvalid));
  assert_eq!(get_directed_edge_destination(cell), Err(H3Error::DirEdgeInvalid));
  assert_eq!(directed_edge_to_cells(cell), Err(H3Error::DirEdgeInvalid));
  assert_eq!(directed_edge_to_boundary(cell).map(|b| b.len()), Err(H3Error::DirEdgeInvalid));
  assert!(!is_valid_directed_edge(H3_NULL));
  assert!(!is_valid_directed_edge(H3Index(u64::MAX)));
}
