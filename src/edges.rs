//! Directed edges between neighboring cells.
//!
//! An edge index is the origin cell's index in directed edge mode, with
//! the reserved bits holding the direction towards the destination.

use crate::constants::{H3_CELL_MODE, H3_DIRECTEDEDGE_MODE};
use crate::error::H3Error;
use crate::h3_index::inspection::{is_pentagon, is_valid_cell};
use crate::indexing::cell_to_boundary;
use crate::math::geo_almost_equal;
use crate::traversal::neighbors::{direction_for_neighbor, neighbor_rotations};
use crate::types::{CellBoundary, Direction, H3Index};

/// Edge from `origin` to the adjacent `destination`.
pub fn cells_to_directed_edge(origin: H3Index, destination: H3Index) -> Result<H3Index, H3Error> {
  if !is_valid_cell(origin) || !is_valid_cell(destination) {
    return Err(H3Error::CellInvalid);
  }
  if origin.resolution() != destination.resolution() {
    return Err(H3Error::ResMismatch);
  }
  let dir = direction_for_neighbor(origin, destination);
  if !Direction::NEIGHBORS.contains(&dir) {
    return Err(H3Error::NotNeighbors);
  }
  let mut edge = origin;
  edge.set_mode(H3_DIRECTEDEDGE_MODE);
  edge.set_reserved_bits(dir as u8);
  Ok(edge)
}

/// Whether `edge` is a directed edge out of a valid cell, in a direction
/// that cell has.
#[must_use]
pub fn is_valid_directed_edge(edge: H3Index) -> bool {
  if edge.mode() != H3_DIRECTEDEDGE_MODE {
    return false;
  }
  let dir = Direction::from_digit(u64::from(edge.reserved_bits()));
  if !Direction::NEIGHBORS.contains(&dir) {
    return false;
  }
  let origin = edge_origin(edge);
  if is_pentagon(origin) && dir == Direction::KAxes {
    return false;
  }
  is_valid_cell(origin)
}

fn edge_origin(edge: H3Index) -> H3Index {
  let mut origin = edge;
  origin.set_mode(H3_CELL_MODE);
  origin.set_reserved_bits(0);
  origin
}

/// Origin cell of the edge.
pub fn get_directed_edge_origin(edge: H3Index) -> Result<H3Index, H3Error> {
  if edge.mode() != H3_DIRECTEDEDGE_MODE {
    return Err(H3Error::DirEdgeInvalid);
  }
  Ok(edge_origin(edge))
}

/// Destination cell of the edge.
pub fn get_directed_edge_destination(edge: H3Index) -> Result<H3Index, H3Error> {
  if !is_valid_directed_edge(edge) {
    return Err(H3Error::DirEdgeInvalid);
  }
  let dir = Direction::from_digit(u64::from(edge.reserved_bits()));
  neighbor_rotations(edge_origin(edge), dir, 0).map(|(h, _)| h)
}

/// Origin and destination of the edge, in that order.
pub fn directed_edge_to_cells(edge: H3Index) -> Result<[H3Index; 2], H3Error> {
  Ok([get_directed_edge_origin(edge)?, get_directed_edge_destination(edge)?])
}

/// Every edge leaving `origin`: six, or five for a pentagon.
#[must_use]
pub fn origin_to_directed_edges(origin: H3Index) -> Vec<H3Index> {
  let pent = is_pentagon(origin);
  Direction::NEIGHBORS
    .into_iter()
    .filter(|&dir| !(pent && dir == Direction::KAxes))
    .map(|dir| {
      let mut edge = origin;
      edge.set_mode(H3_DIRECTEDEDGE_MODE);
      edge.set_reserved_bits(dir as u8);
      edge
    })
    .collect()
}

/// Vertices of the edge, in the origin's counter-clockwise order.
///
/// These are the origin boundary vertices also on the destination's
/// boundary. Edges crossing an icosahedron edge carry the extra crossing
/// vertex.
pub fn directed_edge_to_boundary(edge: H3Index) -> Result<CellBoundary, H3Error> {
  let [origin, destination] = directed_edge_to_cells(edge)?;
  let from = cell_to_boundary(origin);
  let to = cell_to_boundary(destination);

  let shared: Vec<bool> = from
    .iter()
    .map(|v| to.iter().any(|w| geo_almost_equal(v, w)))
    .collect();
  let n = from.len();
  // the shared vertices form one run, possibly wrapping past vertex 0
  let start = (0..n).find(|&i| shared[i] && !shared[(i + n - 1) % n]).unwrap_or(0);

  Ok(
    (0..n)
      .map(|offset| (start + offset) % n)
      .take_while(|&i| shared[i])
      .map(|i| from[i])
      .collect(),
  )
}
