//! Disks and rings of cells around an origin.
//!
//! The spiral walk visits ring after ring by stepping along the six sides
//! of each hexagonal ring. It is exact away from pentagons and fails with
//! [`H3Error::Pentagon`] as soon as it meets one. The pentagon tolerant
//! variants fall back to a breadth-first search.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::error::H3Error;
use crate::h3_index::inspection::{is_pentagon, is_valid_cell};
use crate::traversal::neighbors::neighbor_rotations;
use crate::types::{Direction, H3Index};

/// Radius at which a disk covers every cell at resolution 15.
const K_ALL_CELLS_AT_RES_15: i64 = 13_780_510;

/// Sides of a ring, walked counter-clockwise.
const DIRECTIONS: [Direction; 6] = [
  Direction::JAxes,
  Direction::JkAxes,
  Direction::KAxes,
  Direction::IkAxes,
  Direction::IAxes,
  Direction::IjAxes,
];

/// Step from one ring to the start of the next.
const NEXT_RING_DIRECTION: Direction = Direction::IAxes;

/// Upper bound on the number of cells within distance `k`.
pub fn max_grid_disk_size(k: i32) -> Result<i64, H3Error> {
  if k < 0 {
    return Err(H3Error::Domain);
  }
  let k = i64::from(k).min(K_ALL_CELLS_AT_RES_15);
  Ok(3 * k * (k + 1) + 1)
}

fn check_origin(origin: H3Index, k: i32) -> Result<(), H3Error> {
  if k < 0 {
    return Err(H3Error::Domain);
  }
  if !is_valid_cell(origin) {
    return Err(H3Error::CellInvalid);
  }
  Ok(())
}

/// Capacity hint for a disk, kept modest for huge radii.
fn disk_capacity(k: i32) -> usize {
  max_grid_disk_size(k).map_or(1, |n| usize::try_from(n.min(1 << 16)).unwrap_or(1))
}

fn pentagon_met(origin: H3Index, at: H3Index) -> H3Error {
  trace!(origin = %origin, pentagon = %at, "walk met a pentagon");
  H3Error::Pentagon
}

/// Spiral walk, reporting each cell with its ring number.
fn spiral(origin: H3Index, k: i32, mut visit: impl FnMut(H3Index, usize)) -> Result<(), H3Error> {
  visit(origin, 0);
  if is_pentagon(origin) {
    return Err(pentagon_met(origin, origin));
  }

  let mut current = origin;
  let mut rotations = 0;
  for ring in 1..=k as usize {
    (current, rotations) = neighbor_rotations(current, NEXT_RING_DIRECTION, rotations)?;
    if is_pentagon(current) {
      return Err(pentagon_met(origin, current));
    }
    for dir in DIRECTIONS {
      for _ in 0..ring {
        (current, rotations) = neighbor_rotations(current, dir, rotations)?;
        visit(current, ring);
        if is_pentagon(current) {
          return Err(pentagon_met(origin, current));
        }
      }
    }
  }
  Ok(())
}

/// Breadth-first search out to distance `k`, one vector per distance.
fn breadth_first(origin: H3Index, k: i32) -> Result<Vec<Vec<H3Index>>, H3Error> {
  let mut seen = HashSet::with_capacity(disk_capacity(k));
  seen.insert(origin);
  let mut rings = vec![vec![origin]];

  for _ in 0..k {
    let mut next = Vec::new();
    for &cell in rings.last().into_iter().flatten() {
      for dir in Direction::NEIGHBORS {
        match neighbor_rotations(cell, dir, 0) {
          Ok((n, _)) => {
            if seen.insert(n) {
              next.push(n);
            }
          }
          // the deleted K direction of a pentagon
          Err(H3Error::Pentagon) => {}
          Err(e) => return Err(e),
        }
      }
    }
    if next.is_empty() {
      break;
    }
    rings.push(next);
  }
  Ok(rings)
}

/// Cells within grid distance `k` of `origin`, pentagon distortion or not.
/// Order is unspecified.
pub fn grid_disk(origin: H3Index, k: i32) -> Result<Vec<H3Index>, H3Error> {
  check_origin(origin, k)?;
  let mut out = Vec::with_capacity(disk_capacity(k));
  match spiral(origin, k, |h, _| out.push(h)) {
    Ok(()) => Ok(out),
    Err(H3Error::Pentagon) => {
      debug!(origin = %origin, k, "pentagon on spiral walk, falling back to breadth-first search");
      Ok(breadth_first(origin, k)?.into_iter().flatten().collect())
    }
    Err(e) => Err(e),
  }
}

/// Cells within grid distance `k` of `origin`, grouped by exact distance.
///
/// Index `d` of the result holds the cells at distance `d`. The result has
/// `k + 1` entries unless the disk covers every cell at the resolution
/// first: then it stops at the greatest distance that holds a cell, and is
/// shorter than `k + 1`. No entry is empty.
pub fn grid_disk_distances(origin: H3Index, k: i32) -> Result<Vec<Vec<H3Index>>, H3Error> {
  match grid_disk_distances_unsafe(origin, k) {
    Err(H3Error::Pentagon) => {
      debug!(origin = %origin, k, "pentagon on spiral walk, falling back to breadth-first search");
      breadth_first(origin, k)
    }
    other => other,
  }
}

/// Spiral walk only. Fails with [`H3Error::Pentagon`] if the walk meets a
/// pentagon.
pub fn grid_disk_unsafe(origin: H3Index, k: i32) -> Result<Vec<H3Index>, H3Error> {
  check_origin(origin, k)?;
  let mut out = Vec::with_capacity(disk_capacity(k));
  spiral(origin, k, |h, _| out.push(h))?;
  Ok(out)
}

/// [`grid_disk_unsafe`] grouped by distance.
pub fn grid_disk_distances_unsafe(origin: H3Index, k: i32) -> Result<Vec<Vec<H3Index>>, H3Error> {
  check_origin(origin, k)?;
  let mut rings: Vec<Vec<H3Index>> = Vec::new();
  spiral(origin, k, |h, ring| {
    if rings.len() <= ring {
      rings.push(Vec::with_capacity(6 * ring.max(1)));
    }
    rings[ring].push(h);
  })?;
  Ok(rings)
}

/// The hollow ring of cells at exactly distance `k`, walked directly.
///
/// Fails with [`H3Error::Pentagon`] whenever the walk meets a pentagon,
/// including at the origin.
pub fn grid_ring_unsafe(origin: H3Index, k: i32) -> Result<Vec<H3Index>, H3Error> {
  check_origin(origin, k)?;
  if k == 0 {
    return Ok(vec![origin]);
  }
  if is_pentagon(origin) {
    return Err(pentagon_met(origin, origin));
  }

  let mut current = origin;
  let mut rotations = 0;
  for _ in 0..k {
    (current, rotations) = neighbor_rotations(current, NEXT_RING_DIRECTION, rotations)?;
    if is_pentagon(current) {
      return Err(pentagon_met(origin, current));
    }
  }

  let first = current;
  let mut out = Vec::with_capacity(6 * k as usize);
  out.push(first);
  for (side, dir) in DIRECTIONS.into_iter().enumerate() {
    for pos in 0..k {
      (current, rotations) = neighbor_rotations(current, dir, rotations)?;
      // the last step closes the ring onto the first cell
      if pos != k - 1 || side != 5 {
        out.push(current);
        if is_pentagon(current) {
          return Err(pentagon_met(origin, current));
        }
      }
    }
  }

  // a ring that does not close has been distorted by a pentagon
  if current != first {
    trace!(origin = %origin, k, "ring did not close");
    return Err(H3Error::Pentagon);
  }
  Ok(out)
}
