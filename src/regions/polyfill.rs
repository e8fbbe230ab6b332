use std::collections::HashSet;
use std::f64::consts::PI;

use tracing::{debug, trace};

use crate::constants::{MAX_H3_RES, M_2PI};
use crate::error::H3Error;
use crate::h3_index::inspection::get_pentagons;
use crate::indexing::{cell_to_boundary, cell_to_lat_lng, lat_lng_to_cell};
use crate::math::great_circle_distance_rads;
use crate::polygon::Ring;
use crate::traversal::grid_disk::grid_disk;
use crate::types::{GeoPolygon, H3Index, LatLng};

/// Outer ring plus holes, ready for containment queries.
struct PreparedPolygon {
  outer: Ring,
  holes: Vec<Ring>,
}

impl PreparedPolygon {
  fn new(polygon: &GeoPolygon) -> Self {
    Self {
      outer: Ring::new(&polygon.outer),
      holes: polygon.holes.iter().map(|h| Ring::new(h)).collect(),
    }
  }

  /// Inside or on the outer ring, and not strictly inside any hole.
  fn contains(&self, p: &LatLng) -> bool {
    if !(self.outer.on_boundary(p) || self.outer.contains(p)) {
      return false;
    }
    !self.holes.iter().any(|h| !h.on_boundary(p) && h.contains(p))
  }

  fn rings(&self) -> impl Iterator<Item = &Ring> {
    std::iter::once(&self.outer).chain(self.holes.iter())
  }
}

/// Distance from center to first vertex of a pentagon, the most distorted
/// cell at `res`.
fn max_cell_radius_rads(res: i32) -> Result<f64, H3Error> {
  let pentagon = get_pentagons(res)?[0];
  let center = cell_to_lat_lng(pentagon);
  let boundary = cell_to_boundary(pentagon);
  Ok(great_circle_distance_rads(&center, &boundary[0]))
}

/// Cells under every segment of `ring`, sampled finely enough that no cell
/// the segment passes through is skipped over.
fn trace_ring(ring: &Ring, res: i32, cell_radius: f64, seen: &mut HashSet<H3Index>) -> Result<(), H3Error> {
  let verts = ring.verts();
  for (i, origin) in verts.iter().enumerate() {
    let mut dest = verts[(i + 1) % verts.len()];
    // interpolate the short way across the antimeridian
    if dest.lng - origin.lng > PI {
      dest.lng -= M_2PI;
    } else if origin.lng - dest.lng > PI {
      dest.lng += M_2PI;
    }
    let steps = ((great_circle_distance_rads(origin, &dest) / (2.0 * cell_radius)).ceil() as usize).max(1);
    for j in 0..steps {
      let t = j as f64 / steps as f64;
      let p = LatLng::new(
        origin.lat * (1.0 - t) + dest.lat * t,
        origin.lng * (1.0 - t) + dest.lng * t,
      );
      seen.insert(lat_lng_to_cell(&p, res)?);
    }
  }
  Ok(())
}

/// Every cell at `res` whose center is inside `polygon`.
///
/// Centers on the outer ring count as inside; holes remove only the
/// centers they strictly contain. The search starts from the cells under
/// the rings and grows outwards one ring of neighbors at a time, so work is
/// proportional to the polygon's area rather than the globe's.
///
/// Degenerate outer rings yield an empty set. Output order is unspecified.
pub fn polygon_to_cells(polygon: &GeoPolygon, res: i32) -> Result<Vec<H3Index>, H3Error> {
  if !(0..=MAX_H3_RES).contains(&res) {
    return Err(H3Error::ResDomain);
  }
  let all_finite = polygon
    .outer
    .iter()
    .chain(polygon.holes.iter().flatten())
    .all(LatLng::is_finite);
  if !all_finite {
    return Err(H3Error::LatLngDomain);
  }

  let prepared = PreparedPolygon::new(polygon);
  if prepared.outer.is_degenerate() {
    trace!(res, "degenerate outer ring");
    return Ok(Vec::new());
  }

  let cell_radius = max_cell_radius_rads(res)?;
  let mut frontier = HashSet::new();
  for ring in prepared.rings().filter(|r| !r.verts().is_empty()) {
    trace_ring(ring, res, cell_radius, &mut frontier)?;
  }

  let mut visited: HashSet<H3Index> = HashSet::new();
  let mut found = Vec::new();
  let mut round = 0;
  while !frontier.is_empty() {
    let mut next = HashSet::new();
    for cell in frontier {
      for neighbor in grid_disk(cell, 1)? {
        if !visited.insert(neighbor) {
          continue;
        }
        if prepared.contains(&cell_to_lat_lng(neighbor)) {
          found.push(neighbor);
          next.insert(neighbor);
        }
      }
    }
    round += 1;
    trace!(round, frontier = next.len(), found = found.len(), "polyfill search round");
    frontier = next;
  }
  debug!(res, rounds = round, cells = found.len(), "polyfill complete");
  Ok(found)
}
