//! Single step moves between adjacent cells.

use tracing::trace;

use crate::base_cells::{
  base_cell_home, base_cell_is_cw_offset, is_base_cell_pentagon, is_base_cell_polar_pentagon, BASE_CELL_NEIGHBORS,
  BASE_CELL_NEIGHBOR_60CCW_ROTS, INVALID_BASE_CELL,
};
use crate::constants::NUM_BASE_CELLS;
use crate::coords::res_is_class_iii;
use crate::error::H3Error;
use crate::h3_index::inspection::{is_pentagon, is_valid_cell};
use crate::hierarchy::cell_to_parent;
use crate::types::{Direction, H3Index};

use Direction::{Center as C0, IAxes as I4, IjAxes as Ij6, IkAxes as Ik5, JAxes as J2, JkAxes as Jk3, KAxes as K1};

// New digit when moving `dir` from a digit, and the carry into the parent.
#[rustfmt::skip]
const NEW_DIGIT_II: [[Direction; 7]; 7] = [
  [C0, K1, J2, Jk3, I4, Ik5, Ij6],
  [K1, I4, Jk3, Ij6, Ik5, J2, C0],
  [J2, Jk3, K1, I4, Ij6, C0, Ik5],
  [Jk3, Ij6, I4, Ik5, C0, K1, J2],
  [I4, Ik5, Ij6, C0, J2, Jk3, K1],
  [Ik5, J2, C0, K1, Jk3, Ij6, I4],
  [Ij6, C0, Ik5, J2, K1, I4, Jk3],
];

#[rustfmt::skip]
const NEW_ADJUSTMENT_II: [[Direction; 7]; 7] = [
  [C0, C0, C0, C0, C0, C0, C0],
  [C0, K1, C0, K1, C0, Ik5, C0],
  [C0, C0, J2, Jk3, C0, C0, J2],
  [C0, K1, Jk3, Jk3, C0, C0, C0],
  [C0, C0, C0, C0, I4, I4, Ij6],
  [C0, Ik5, C0, C0, I4, Ik5, C0],
  [C0, C0, J2, C0, Ij6, C0, Ij6],
];

#[rustfmt::skip]
const NEW_DIGIT_III: [[Direction; 7]; 7] = [
  [C0, K1, J2, Jk3, I4, Ik5, Ij6],
  [K1, J2, Jk3, I4, Ik5, Ij6, C0],
  [J2, Jk3, I4, Ik5, Ij6, C0, K1],
  [Jk3, I4, Ik5, Ij6, C0, K1, J2],
  [I4, Ik5, Ij6, C0, K1, J2, Jk3],
  [Ik5, Ij6, C0, K1, J2, Jk3, I4],
  [Ij6, C0, K1, J2, Jk3, I4, Ik5],
];

#[rustfmt::skip]
const NEW_ADJUSTMENT_III: [[Direction; 7]; 7] = [
  [C0, C0, C0, C0, C0, C0, C0],
  [C0, K1, C0, Jk3, C0, K1, C0],
  [C0, C0, J2, J2, C0, C0, Ij6],
  [C0, Jk3, J2, Jk3, C0, C0, C0],
  [C0, C0, C0, C0, I4, Ik5, I4],
  [C0, K1, C0, C0, Ik5, Ik5, C0],
  [C0, C0, Ij6, C0, I4, C0, Ij6],
];

/// Neighbor of `origin` in `dir`, where `dir` is expressed in a frame
/// rotated `rotations` times 60 degrees counter-clockwise from the origin's.
///
/// Returns the neighbor and the rotation count of its frame. Moving into the
/// deleted K subsequence from the center of a pentagon fails with
/// [`H3Error::Pentagon`].
pub(crate) fn neighbor_rotations(origin: H3Index, dir: Direction, rotations: i32) -> Result<(H3Index, i32), H3Error> {
  if dir == Direction::Center || dir == Direction::InvalidDigit {
    return Err(H3Error::Failed);
  }

  let mut rotations = rotations.rem_euclid(6);
  let mut dir = (0..rotations).fold(dir, |d, _| d.rotate60_ccw());

  let mut current = origin;
  let old_base_cell = origin.base_cell();
  if old_base_cell >= NUM_BASE_CELLS {
    return Err(H3Error::CellInvalid);
  }
  let old_leading_digit = origin.leading_non_zero_digit();
  let mut new_rotations = 0;

  // Carry the move up through the digits until it is absorbed.
  let mut r = origin.resolution() - 1;
  loop {
    if r == -1 {
      let bc = old_base_cell as usize;
      current.set_base_cell(BASE_CELL_NEIGHBORS[bc][dir as usize]);
      new_rotations = BASE_CELL_NEIGHBOR_60CCW_ROTS[bc][dir as usize];

      if current.base_cell() == INVALID_BASE_CELL {
        // the deleted K vertex borders the IK neighbor instead
        let ik = Direction::IkAxes as usize;
        current.set_base_cell(BASE_CELL_NEIGHBORS[bc][ik]);
        new_rotations = BASE_CELL_NEIGHBOR_60CCW_ROTS[bc][ik];
        current = current.rotate60_ccw();
        rotations += 1;
      }
      break;
    }

    let old_digit = current.digit(r + 1);
    if old_digit == Direction::InvalidDigit {
      return Err(H3Error::CellInvalid);
    }
    let (digit, next_dir) = if res_is_class_iii(r + 1) {
      (
        NEW_DIGIT_II[old_digit as usize][dir as usize],
        NEW_ADJUSTMENT_II[old_digit as usize][dir as usize],
      )
    } else {
      (
        NEW_DIGIT_III[old_digit as usize][dir as usize],
        NEW_ADJUSTMENT_III[old_digit as usize][dir as usize],
      )
    };
    current.set_digit(r + 1, digit);

    if next_dir == Direction::Center {
      break;
    }
    dir = next_dir;
    r -= 1;
  }

  let new_base_cell = current.base_cell();
  if is_base_cell_pentagon(new_base_cell) {
    let mut already_adjusted_k = false;

    // rotate out of the missing K subsequence
    if current.leading_non_zero_digit() == Direction::KAxes {
      if old_base_cell != new_base_cell {
        current = if base_cell_is_cw_offset(new_base_cell, base_cell_home(old_base_cell).face) {
          current.rotate60_cw()
        } else {
          current.rotate60_ccw()
        };
        already_adjusted_k = true;
      } else {
        match old_leading_digit {
          Direction::Center => {
            trace!(origin = %origin, "move into deleted pentagon subsequence");
            return Err(H3Error::Pentagon);
          }
          Direction::JkAxes => {
            current = current.rotate60_ccw();
            rotations += 1;
          }
          Direction::IkAxes => {
            current = current.rotate60_cw();
            rotations += 5;
          }
          _ => return Err(H3Error::Failed),
        }
      }
    }

    for _ in 0..new_rotations {
      current = current.rotate_pent60_ccw();
    }

    // base cells around a pentagon are not uniformly oriented
    if old_base_cell != new_base_cell {
      if is_base_cell_polar_pentagon(new_base_cell) {
        if old_base_cell != 118 && old_base_cell != 8 && current.leading_non_zero_digit() != Direction::JkAxes {
          rotations += 1;
        }
      } else if current.leading_non_zero_digit() == Direction::IkAxes && !already_adjusted_k {
        rotations += 1;
      }
    }
  } else {
    for _ in 0..new_rotations {
      current = current.rotate60_ccw();
    }
  }

  Ok((current, (rotations + i32::from(new_rotations)) % 6))
}

/// Direction from `origin` to an adjacent `destination`, `Center` for the
/// cell itself and `InvalidDigit` when they are not neighbors.
pub(crate) fn direction_for_neighbor(origin: H3Index, destination: H3Index) -> Direction {
  if origin == destination {
    return Direction::Center;
  }
  let first = if is_pentagon(origin) { 2 } else { 1 };
  Direction::NEIGHBORS[first - 1..]
    .iter()
    .copied()
    .find(|&dir| matches!(neighbor_rotations(origin, dir, 0), Ok((n, _)) if n == destination))
    .unwrap_or(Direction::InvalidDigit)
}

/// Whether two cells share an edge. A cell is never its own neighbor.
pub fn are_neighbor_cells(origin: H3Index, destination: H3Index) -> Result<bool, H3Error> {
  if !is_valid_cell(origin) || !is_valid_cell(destination) {
    return Err(H3Error::CellInvalid);
  }
  if origin == destination {
    return Ok(false);
  }
  let res = origin.resolution();
  if res != destination.resolution() {
    return Err(H3Error::ResMismatch);
  }

  // Children of one parent: the center touches every sibling and each
  // other child touches the siblings 60 degrees either side of it.
  if res > 1 && cell_to_parent(origin, res - 1)? == cell_to_parent(destination, res - 1)? {
    let o = origin.digit(res);
    let d = destination.digit(res);
    if o == Direction::Center || d == Direction::Center || d == o.rotate60_cw() || d == o.rotate60_ccw() {
      return Ok(true);
    }
  }

  Ok(direction_for_neighbor(origin, destination) != Direction::InvalidDigit)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::indexing::lat_lng_degs_to_cell;
  use crate::traversal::grid_disk::grid_disk;
  use crate::types::H3_NULL;

  #[test]
  fn every_direction_round_trips() {
    let origin = lat_lng_degs_to_cell(37.779265, -122.419277, 9).unwrap();
    let disk = grid_disk(origin, 1).unwrap();
    let mut found = 0;
    for &n in disk.iter().filter(|&&n| n != origin) {
      let dir = direction_for_neighbor(origin, n);
      assert!(Direction::NEIGHBORS.contains(&dir), "{n}");
      assert_eq!(neighbor_rotations(origin, dir, 0).map(|(h, _)| h), Ok(n));
      found += 1;
    }
    assert_eq!(found, 6);
    assert_eq!(direction_for_neighbor(origin, origin), Direction::Center);
  }

  #[test]
  fn pentagon_directions_skip_k() {
    let pent = H3Index(0x820807fffffffff);
    assert!(is_pentagon(pent));
    assert_eq!(neighbor_rotations(pent, Direction::KAxes, 0), Err(H3Error::Pentagon));
    let disk = grid_disk(pent, 1).unwrap();
    assert_eq!(disk.len(), 6);
    for &n in disk.iter().filter(|&&n| n != pent) {
      let dir = direction_for_neighbor(pent, n);
      assert_ne!(dir, Direction::InvalidDigit);
      assert_ne!(dir, Direction::KAxes);
    }
  }

  #[test]
  fn invalid_direction_fails() {
    let h = H3Index(0x8928308280fffff);
    assert_eq!(neighbor_rotations(h, Direction::Center, 0), Err(H3Error::Failed));
    assert_eq!(neighbor_rotations(h, Direction::InvalidDigit, 0), Err(H3Error::Failed));
  }

  #[test]
  fn neighbors_of_known_cell() {
    let origin = H3Index(0x8928308280fffff);
    let disk1 = grid_disk(origin, 1).unwrap();
    for &n in &disk1 {
      assert_eq!(are_neighbor_cells(origin, n), Ok(n != origin), "{n}");
      assert_eq!(are_neighbor_cells(n, origin), Ok(n != origin), "{n}");
    }
    for n in grid_disk(origin, 2).unwrap().into_iter().filter(|n| !disk1.contains(n)) {
      assert_eq!(are_neighbor_cells(origin, n), Ok(false), "{n}");
    }
  }

  #[test]
  fn sibling_shortcut_agrees_with_walk() {
    for parent in [H3Index(0x85283473fffffff), H3Index(0x820807fffffffff)] {
      let children = crate::hierarchy::cell_to_children(parent, parent.resolution() + 1).unwrap();
      for &a in &children {
        for &b in &children {
          let walked = a != b && direction_for_neighbor(a, b) != Direction::InvalidDigit;
          assert_eq!(are_neighbor_cells(a, b), Ok(walked), "{a} {b}");
        }
      }
    }
  }

  #[test]
  fn neighbor_errors() {
    let res9 = H3Index(0x8928308280fffff);
    let res8 = cell_to_parent(res9, 8).unwrap();
    assert_eq!(are_neighbor_cells(res9, res8), Err(H3Error::ResMismatch));
    assert_eq!(are_neighbor_cells(res9, H3_NULL), Err(H3Error::CellInvalid));
  }
}
