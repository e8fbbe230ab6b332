//! Field extraction and validation of cell indexes.

use crate::base_cells::is_base_cell_pentagon;
use crate::constants::{H3_CELL_MODE, MAX_H3_RES, NUM_BASE_CELLS, NUM_PENTAGONS};
use crate::coords::res_is_class_iii;
use crate::error::H3Error;
use crate::hierarchy::cell_to_center_child;
use crate::types::{Direction, H3Index};

/// Resolution of the index, read positionally.
#[inline]
#[must_use]
pub fn get_resolution(h: H3Index) -> i32 {
  h.resolution()
}

/// Base cell number of the index, read positionally. Values above 121 mean
/// the index is not a valid cell.
#[inline]
#[must_use]
pub fn get_base_cell_number(h: H3Index) -> i32 {
  h.base_cell()
}

/// Whether the index has an odd (Class III) resolution.
#[inline]
#[must_use]
pub fn is_res_class_iii(h: H3Index) -> bool {
  res_is_class_iii(h.resolution())
}

/// Whether the cell is one of the twelve pentagons of its resolution.
///
/// A pentagon is the center descendant of a pentagonal base cell. The index
/// is not validated.
#[must_use]
pub fn is_pentagon(h: H3Index) -> bool {
  is_base_cell_pentagon(h.base_cell()) && h.leading_non_zero_digit() == Direction::Center
}

/// Whether `h` is a well formed cell index.
#[must_use]
pub fn is_valid_cell(h: H3Index) -> bool {
  if h.high_bit() || h.mode() != H3_CELL_MODE || h.reserved_bits() != 0 {
    return false;
  }

  let base_cell = h.base_cell();
  if base_cell >= NUM_BASE_CELLS {
    return false;
  }

  let res = h.resolution();
  let is_pent = is_base_cell_pentagon(base_cell);
  let mut found_first_non_zero = false;
  for r in 1..=res {
    let digit = h.digit(r);
    if digit == Direction::InvalidDigit {
      return false;
    }
    if !found_first_non_zero && digit != Direction::Center {
      found_first_non_zero = true;
      // the K subsequence does not exist below a pentagon
      if is_pent && digit == Direction::KAxes {
        return false;
      }
    }
  }

  ((res + 1)..=MAX_H3_RES).all(|r| h.digit(r) == Direction::InvalidDigit)
}

/// The 122 resolution 0 cells, in base cell order.
#[must_use]
pub fn get_res0_cells() -> Vec<H3Index> {
  (0..NUM_BASE_CELLS)
    .map(|bc| H3Index::new_cell(0, bc, Direction::Center))
    .collect()
}

/// The twelve pentagons at `res`.
pub fn get_pentagons(res: i32) -> Result<Vec<H3Index>, H3Error> {
  if !(0..=MAX_H3_RES).contains(&res) {
    return Err(H3Error::ResDomain);
  }
  let mut out = Vec::with_capacity(NUM_PENTAGONS);
  for bc in (0..NUM_BASE_CELLS).filter(|&bc| is_base_cell_pentagon(bc)) {
    out.push(cell_to_center_child(H3Index::new_cell(0, bc, Direction::Center), res)?);
  }
  Ok(out)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::H3_NULL;

  #[test]
  fn valid_at_every_resolution() {
    for res in 0..=MAX_H3_RES {
      let h = H3Index::new_cell(res, 0, Direction::Center);
      assert!(is_valid_cell(h), "resolution {res}");
    }
  }

  #[test]
  fn known_cells() {
    let h = H3Index(0x8928308280fffff);
    assert!(is_valid_cell(h));
    assert_eq!(get_resolution(h), 9);
    assert_eq!(get_base_cell_number(h), 20);
    assert!(!is_pentagon(h));
    assert!(is_res_class_iii(h));
    assert!(is_pentagon(H3Index(0x821c07fffffffff)));
    assert!(is_valid_cell(H3Index(0x821c07fffffffff)));
  }

  #[test]
  fn rejects_malformed_indexes() {
    assert!(!is_valid_cell(H3_NULL));
    assert!(!is_valid_cell(H3Index(u64::MAX)));
    assert!(!is_pentagon(H3Index(u64::MAX)));

    let good = H3Index::new_cell(1, 0, Direction::JAxes);
    let mut h = good;
    h.set_digit(1, Direction::InvalidDigit);
    assert!(!is_valid_cell(h), "used digit set to 7");

    let mut h = good;
    h.set_digit(2, Direction::Center);
    assert!(!is_valid_cell(h), "unused digit not 7");

    let mut h = good;
    h.set_mode(2);
    assert!(!is_valid_cell(h), "edge mode");

    let mut h = good;
    h.set_reserved_bits(1);
    assert!(!is_valid_cell(h), "reserved bits");

    let mut h = good;
    h.set_base_cell(NUM_BASE_CELLS);
    assert!(!is_valid_cell(h), "base cell out of range");

    assert!(!is_valid_cell(H3Index(good.0 | (1 << 63))), "high bit");
  }

  #[test]
  fn pentagon_deleted_subsequence() {
    let k = H3Index::new_cell(2, 4, Direction::KAxes);
    assert!(!is_valid_cell(k));
    let mut inner = H3Index::new_cell(2, 4, Direction::Center);
    inner.set_digit(2, Direction::KAxes);
    assert!(!is_valid_cell(inner));
    let mut later = H3Index::new_cell(2, 4, Direction::JAxes);
    later.set_digit(2, Direction::KAxes);
    assert!(is_valid_cell(later));
    // hexagon base cells have every subsequence
    assert!(is_valid_cell(H3Index::new_cell(2, 0, Direction::KAxes)));
  }

  #[test]
  fn res0_cells() {
    let cells = get_res0_cells();
    assert_eq!(cells.len(), NUM_BASE_CELLS as usize);
    assert!(cells.iter().all(|&h| is_valid_cell(h)));
    assert_eq!(cells.iter().filter(|&&h| is_pentagon(h)).count(), NUM_PENTAGONS);
  }

  #[test]
  fn pentagons_at_every_resolution() {
    for res in 0..=MAX_H3_RES {
      let pents = get_pentagons(res).unwrap();
      assert_eq!(pents.len(), NUM_PENTAGONS);
      for p in pents {
        assert!(is_valid_cell(p));
        assert!(is_pentagon(p));
        assert_eq!(get_resolution(p), res);
      }
    }
    assert_eq!(get_pentagons(16), Err(H3Error::ResDomain));
    assert_eq!(get_pentagons(-1), Err(H3Error::ResDomain));
  }
}
