//! Local IJ coordinates anchored at an origin cell.
//!
//! Coordinates are expressed in the frame of the origin's base cell and may
//! extend into the neighboring base cells. Unfolding across a pentagon is
//! only supported in the directions where it is unambiguous; elsewhere the
//! conversion fails rather than producing a distorted answer.

use crate::base_cells::{
  base_cell_direction, base_cell_neighbor, is_base_cell_pentagon, is_base_cell_polar_pentagon,
  BASE_CELL_NEIGHBOR_60CCW_ROTS, INVALID_BASE_CELL,
};
use crate::constants::{H3_CELL_MODE, H3_INIT, NUM_BASE_CELLS};
use crate::coords::res_is_class_iii;
use crate::error::H3Error;
use crate::h3_index::inspection::is_valid_cell;
use crate::types::{CoordIJ, CoordIJK, Direction, FaceIJK, H3Index};

// Clockwise rotations when unfolding a pentagon, by [leading digit][direction].
#[rustfmt::skip]
const PENTAGON_ROTATIONS: [[i32; 7]; 7] = [
  [0, -1, 0, 0, 0, 0, 0],
  [-1, -1, -1, -1, -1, -1, -1],
  [0, -1, 0, 0, 0, 1, 0],
  [0, -1, 0, 0, 1, 1, 0],
  [0, -1, 0, 5, 0, 0, 0],
  [0, -1, 5, 5, 0, 0, 0],
  [0, -1, 0, 0, 0, 0, 0],
];

// Counter-clockwise rotations undoing the above when the origin is a pentagon.
#[rustfmt::skip]
const PENTAGON_ROTATIONS_REVERSE: [[i32; 7]; 7] = [
  [0, 0, 0, 0, 0, 0, 0],
  [-1, -1, -1, -1, -1, -1, -1],
  [0, 1, 0, 0, 0, 0, 0],
  [0, 1, 0, 0, 0, 1, 0],
  [0, 5, 0, 0, 0, 0, 0],
  [0, 5, 0, 5, 0, 0, 0],
  [0, 0, 0, 0, 0, 0, 0],
];

#[rustfmt::skip]
const PENTAGON_ROTATIONS_REVERSE_NONPOLAR: [[i32; 7]; 7] = [
  [0, 0, 0, 0, 0, 0, 0],
  [-1, -1, -1, -1, -1, -1, -1],
  [0, 1, 0, 0, 0, 0, 0],
  [0, 1, 0, 0, 0, 1, 0],
  [0, 5, 0, 0, 0, 0, 0],
  [0, 1, 0, 5, 1, 1, 0],
  [0, 0, 0, 0, 0, 0, 0],
];

#[rustfmt::skip]
const PENTAGON_ROTATIONS_REVERSE_POLAR: [[i32; 7]; 7] = [
  [0, 0, 0, 0, 0, 0, 0],
  [-1, -1, -1, -1, -1, -1, -1],
  [0, 1, 1, 1, 1, 1, 1],
  [0, 1, 0, 0, 0, 1, 0],
  [0, 1, 0, 0, 1, 1, 1],
  [0, 1, 0, 5, 1, 1, 0],
  [0, 1, 1, 0, 1, 1, 1],
];

// Unfoldings across the deleted K subsequence that are not supported.
#[rustfmt::skip]
const FAILED_DIRECTIONS: [[bool; 7]; 7] = [
  [false, false, false, false, false, false, false],
  [false, false, false, false, false, false, false],
  [false, false, false, false, true,  true,  false],
  [false, false, false, false, true,  false, true ],
  [false, false, true,  true,  false, false, false],
  [false, false, true,  false, false, false, true ],
  [false, false, false, true,  false, true,  false],
];

fn rotations(table: &[[i32; 7]; 7], row: Direction, col: Direction) -> Result<i32, H3Error> {
  match table[row as usize][col as usize] {
    n if n < 0 => Err(H3Error::Failed),
    n => Ok(n),
  }
}

fn check_base_cell(h: H3Index) -> Result<i32, H3Error> {
  let bc = h.base_cell();
  if bc >= NUM_BASE_CELLS {
    return Err(H3Error::CellInvalid);
  }
  Ok(bc)
}

/// IJK coordinates of `h` in the frame of `origin`'s base cell.
pub(crate) fn cell_to_local_ijk(origin: H3Index, h: H3Index) -> Result<CoordIJK, H3Error> {
  let res = origin.resolution();
  if res != h.resolution() {
    return Err(H3Error::ResMismatch);
  }
  let origin_bc = check_base_cell(origin)?;
  let bc = check_base_cell(h)?;

  // direction between the base cells
  let mut dir = Direction::Center;
  let mut rev_dir = Direction::Center;
  if origin_bc != bc {
    dir = base_cell_direction(origin_bc, bc);
    if dir == Direction::InvalidDigit {
      return Err(H3Error::Failed);
    }
    rev_dir = base_cell_direction(bc, origin_bc);
    if rev_dir == Direction::InvalidDigit {
      return Err(H3Error::Failed);
    }
  }

  let origin_on_pent = is_base_cell_pentagon(origin_bc);
  let index_on_pent = is_base_cell_pentagon(bc);

  // Undo the rotation into the other base cell's frame.
  let mut h = h;
  if dir != Direction::Center {
    let base_cell_rotations = BASE_CELL_NEIGHBOR_60CCW_ROTS[origin_bc as usize][dir as usize];
    for _ in 0..base_cell_rotations {
      if index_on_pent {
        h = h.rotate_pent60_cw();
        rev_dir = rev_dir.rotate60_cw();
        if rev_dir == Direction::KAxes {
          rev_dir = rev_dir.rotate60_cw();
        }
      } else {
        h = h.rotate60_cw();
        rev_dir = rev_dir.rotate60_cw();
      }
    }
  }

  // coordinates relative to the base cell center
  let mut index_fijk = FaceIJK::default();
  h.descend_from_base_cell(&mut index_fijk);

  if dir != Direction::Center {
    let mut pentagon_rotations = 0;
    let mut direction_rotations = 0;

    if origin_on_pent {
      let leading = origin.leading_non_zero_digit();
      if FAILED_DIRECTIONS[leading as usize][dir as usize] {
        return Err(H3Error::Failed);
      }
      direction_rotations = rotations(&PENTAGON_ROTATIONS, leading, dir)?;
      pentagon_rotations = direction_rotations;
    } else if index_on_pent {
      let leading = h.leading_non_zero_digit();
      if FAILED_DIRECTIONS[leading as usize][rev_dir as usize] {
        return Err(H3Error::Failed);
      }
      pentagon_rotations = rotations(&PENTAGON_ROTATIONS, rev_dir, leading)?;
    }

    for _ in 0..pentagon_rotations {
      index_fijk.coord.rotate60_cw();
    }

    // offset of the neighboring base cell, scaled down to `res`
    let mut offset = CoordIJK::default();
    offset.neighbor(dir);
    for r in (0..res).rev() {
      if res_is_class_iii(r + 1) {
        offset.down_ap7();
      } else {
        offset.down_ap7r();
      }
    }
    for _ in 0..direction_rotations {
      offset.rotate60_cw();
    }

    index_fijk.coord = (index_fijk.coord + offset).normalized();
  } else if origin_on_pent && index_on_pent {
    // same pentagon base cell
    let origin_leading = origin.leading_non_zero_digit();
    let index_leading = h.leading_non_zero_digit();
    if FAILED_DIRECTIONS[origin_leading as usize][index_leading as usize] {
      return Err(H3Error::Failed);
    }
    for _ in 0..rotations(&PENTAGON_ROTATIONS, origin_leading, index_leading)? {
      index_fijk.coord.rotate60_cw();
    }
  }

  Ok(index_fijk.coord)
}

/// Cell at `ijk` in the frame of `origin`'s base cell.
pub(crate) fn local_ijk_to_cell(origin: H3Index, ijk: CoordIJK) -> Result<H3Index, H3Error> {
  let res = origin.resolution();
  let origin_bc = check_base_cell(origin)?;
  let origin_on_pent = is_base_cell_pentagon(origin_bc);

  let mut out = H3Index(H3_INIT);
  out.set_mode(H3_CELL_MODE);
  out.set_resolution(res);

  if res == 0 {
    let dir = ijk.to_digit();
    let bc = base_cell_neighbor(origin_bc, dir);
    if dir == Direction::InvalidDigit || bc == INVALID_BASE_CELL {
      return Err(H3Error::Failed);
    }
    out.set_base_cell(bc);
    return Ok(out);
  }

  // Walk up to the base cell, recording the digits.
  let mut ijk = ijk;
  for r in (0..res).rev() {
    let last = ijk;
    let mut last_center;
    if res_is_class_iii(r + 1) {
      ijk.up_ap7();
      last_center = ijk;
      last_center.down_ap7();
    } else {
      ijk.up_ap7r();
      last_center = ijk;
      last_center.down_ap7r();
    }
    out.set_digit(r + 1, (last - last_center).to_digit());
  }

  // only the base cell and its immediate neighbors are reachable
  if ijk.i > 1 || ijk.j > 1 || ijk.k > 1 {
    return Err(H3Error::Failed);
  }

  let mut dir = ijk.to_digit();
  let mut bc = base_cell_neighbor(origin_bc, dir);
  // pentagon base cells never border each other
  let index_on_pent = bc != INVALID_BASE_CELL && is_base_cell_pentagon(bc);

  if dir != Direction::Center {
    let mut pentagon_rotations = 0;
    if origin_on_pent {
      let leading = origin.leading_non_zero_digit();
      pentagon_rotations = rotations(&PENTAGON_ROTATIONS_REVERSE, leading, dir)?;
      for _ in 0..pentagon_rotations {
        dir = dir.rotate60_ccw();
      }
      // still pointing into the deleted subsequence: no cell here
      if dir == Direction::KAxes {
        return Err(H3Error::Pentagon);
      }
      bc = base_cell_neighbor(origin_bc, dir);
      if bc == INVALID_BASE_CELL {
        return Err(H3Error::Failed);
      }
    }

    let base_cell_rotations = BASE_CELL_NEIGHBOR_60CCW_ROTS[origin_bc as usize][dir as usize];

    if index_on_pent {
      let rev_dir = base_cell_direction(bc, origin_bc);
      if rev_dir == Direction::InvalidDigit {
        return Err(H3Error::Failed);
      }
      for _ in 0..base_cell_rotations {
        out = out.rotate60_ccw();
      }
      let leading = out.leading_non_zero_digit();
      let table = if is_base_cell_polar_pentagon(bc) {
        &PENTAGON_ROTATIONS_REVERSE_POLAR
      } else {
        &PENTAGON_ROTATIONS_REVERSE_NONPOLAR
      };
      for _ in 0..rotations(table, rev_dir, leading)? {
        out = out.rotate_pent60_ccw();
      }
    } else {
      for _ in 0..pentagon_rotations + i32::from(base_cell_rotations) {
        out = out.rotate60_ccw();
      }
    }
  } else if origin_on_pent && index_on_pent {
    let origin_leading = origin.leading_non_zero_digit();
    let index_leading = out.leading_non_zero_digit();
    for _ in 0..rotations(&PENTAGON_ROTATIONS_REVERSE, origin_leading, index_leading)? {
      out = out.rotate60_ccw();
    }
  }

  if index_on_pent && out.leading_non_zero_digit() == Direction::KAxes {
    return Err(H3Error::Pentagon);
  }

  out.set_base_cell(bc);
  Ok(out)
}

/// Local IJ coordinates of `cell` relative to `origin`.
///
/// Fails with [`H3Error::ResMismatch`] for cells of different resolutions,
/// and with [`H3Error::Failed`] when the cells are too far apart or on
/// opposite sides of a pentagon.
pub fn cell_to_local_ij(origin: H3Index, cell: H3Index) -> Result<CoordIJ, H3Error> {
  if !is_valid_cell(origin) || !is_valid_cell(cell) {
    return Err(H3Error::CellInvalid);
  }
  Ok(cell_to_local_ijk(origin, cell)?.to_ij())
}

/// Cell at local IJ coordinates relative to `origin`.
pub fn local_ij_to_cell(origin: H3Index, ij: CoordIJ) -> Result<H3Index, H3Error> {
  if !is_valid_cell(origin) {
    return Err(H3Error::CellInvalid);
  }
  local_ijk_to_cell(origin, CoordIJK::from_ij(ij)?)
}
