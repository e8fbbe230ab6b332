//! Index bit layout and the conversion between indexes and face coordinates.
//!
//! From the most significant bit an index holds: one reserved bit, a 4 bit
//! mode, 3 reserved bits (the direction of a directed edge), a 4 bit
//! resolution, a 7 bit base cell and fifteen 3 bit digits. Digits below the
//! resolution are set to 7.

pub mod inspection;
pub mod string_conv;

use crate::base_cells::{
  base_cell_home, base_cell_is_cw_offset, face_ijk_to_base_cell, is_base_cell_pentagon, MAX_FACE_COORD,
};
use crate::constants::{
  H3_BC_MASK, H3_BC_OFFSET, H3_CELL_MODE, H3_DIGIT_MASK, H3_HIGH_BIT_MASK, H3_INIT, H3_MODE_MASK, H3_MODE_OFFSET,
  H3_PER_DIGIT_OFFSET, H3_RESERVED_MASK, H3_RESERVED_OFFSET, H3_RES_MASK, H3_RES_OFFSET, MAX_H3_RES, NUM_BASE_CELLS,
  NUM_ICOSA_FACES,
};
use crate::coords::face_ijk::Overage;
use crate::coords::res_is_class_iii;
use crate::error::H3Error;
use crate::types::{Direction, FaceIJK, H3Index, H3_NULL};

#[inline]
const fn digit_offset(res: i32) -> u32 {
  (MAX_H3_RES - res) as u32 * H3_PER_DIGIT_OFFSET
}

impl H3Index {
  /// Mode field: 1 for cells, 2 for directed edges.
  #[inline]
  #[must_use]
  pub const fn mode(self) -> u8 {
    ((self.0 & H3_MODE_MASK) >> H3_MODE_OFFSET) as u8
  }

  #[inline]
  #[must_use]
  pub const fn resolution(self) -> i32 {
    ((self.0 & H3_RES_MASK) >> H3_RES_OFFSET) as i32
  }

  #[inline]
  #[must_use]
  pub const fn base_cell(self) -> i32 {
    ((self.0 & H3_BC_MASK) >> H3_BC_OFFSET) as i32
  }

  #[inline]
  #[must_use]
  pub(crate) const fn reserved_bits(self) -> u8 {
    ((self.0 & H3_RESERVED_MASK) >> H3_RESERVED_OFFSET) as u8
  }

  #[inline]
  #[must_use]
  pub(crate) const fn high_bit(self) -> bool {
    self.0 & H3_HIGH_BIT_MASK != 0
  }

  /// Digit at resolution `res`, for `res` in `1..=15`.
  #[inline]
  #[must_use]
  pub(crate) const fn digit(self, res: i32) -> Direction {
    Direction::from_digit((self.0 >> digit_offset(res)) & H3_DIGIT_MASK)
  }

  #[inline]
  pub(crate) fn set_mode(&mut self, mode: u8) {
    self.0 = (self.0 & !H3_MODE_MASK) | (u64::from(mode) << H3_MODE_OFFSET);
  }

  #[inline]
  pub(crate) fn set_resolution(&mut self, res: i32) {
    self.0 = (self.0 & !H3_RES_MASK) | ((res as u64 & 0xf) << H3_RES_OFFSET);
  }

  #[inline]
  pub(crate) fn set_base_cell(&mut self, base_cell: i32) {
    self.0 = (self.0 & !H3_BC_MASK) | ((base_cell as u64 & 0x7f) << H3_BC_OFFSET);
  }

  #[inline]
  pub(crate) fn set_reserved_bits(&mut self, bits: u8) {
    self.0 = (self.0 & !H3_RESERVED_MASK) | (u64::from(bits & 0b111) << H3_RESERVED_OFFSET);
  }

  #[inline]
  pub(crate) fn set_digit(&mut self, res: i32, digit: Direction) {
    let offset = digit_offset(res);
    self.0 = (self.0 & !(H3_DIGIT_MASK << offset)) | ((digit as u64) << offset);
  }

  /// A cell index with every digit up to `res` set to `digit`.
  #[must_use]
  pub(crate) fn new_cell(res: i32, base_cell: i32, digit: Direction) -> Self {
    let mut h = H3Index(H3_INIT);
    h.set_mode(H3_CELL_MODE);
    h.set_resolution(res);
    h.set_base_cell(base_cell);
    for r in 1..=res {
      h.set_digit(r, digit);
    }
    h
  }

  /// First digit that is not `Center`, or `Center` if all are.
  #[inline]
  #[must_use]
  pub(crate) fn leading_non_zero_digit(self) -> Direction {
    (1..=self.resolution())
      .map(|r| self.digit(r))
      .find(|d| *d != Direction::Center)
      .unwrap_or(Direction::Center)
  }

  #[must_use]
  pub(crate) fn rotate60_ccw(mut self) -> Self {
    for r in 1..=self.resolution() {
      self.set_digit(r, self.digit(r).rotate60_ccw());
    }
    self
  }

  #[must_use]
  pub(crate) fn rotate60_cw(mut self) -> Self {
    for r in 1..=self.resolution() {
      self.set_digit(r, self.digit(r).rotate60_cw());
    }
    self
  }

  /// Rotates a pentagon index, stepping over the deleted K subsequence.
  #[must_use]
  pub(crate) fn rotate_pent60_ccw(mut self) -> Self {
    let mut found_first = false;
    for r in 1..=self.resolution() {
      self.set_digit(r, self.digit(r).rotate60_ccw());
      if !found_first && self.digit(r) != Direction::Center {
        found_first = true;
        if self.leading_non_zero_digit() == Direction::KAxes {
          self = self.rotate60_ccw();
        }
      }
    }
    self
  }

  #[must_use]
  pub(crate) fn rotate_pent60_cw(mut self) -> Self {
    let mut found_first = false;
    for r in 1..=self.resolution() {
      self.set_digit(r, self.digit(r).rotate60_cw());
      if !found_first && self.digit(r) != Direction::Center {
        found_first = true;
        if self.leading_non_zero_digit() == Direction::KAxes {
          self = self.rotate60_cw();
        }
      }
    }
    self
  }

  /// Encodes a face coordinate at `res`. Returns [`H3_NULL`] when the
  /// coordinate does not resolve to a base cell.
  #[must_use]
  pub(crate) fn from_face_ijk(fijk: &FaceIJK, res: i32) -> Self {
    let mut h = H3Index(H3_INIT);
    h.set_mode(H3_CELL_MODE);
    h.set_resolution(res);

    if res == 0 {
      return match face_ijk_to_base_cell(fijk) {
        Some((bc, _)) => {
          h.set_base_cell(bc);
          h
        }
        None => H3_NULL,
      };
    }

    // Walk up to resolution 0, recording the digit of each step.
    let mut bc_fijk = *fijk;
    let ijk = &mut bc_fijk.coord;
    for r in (0..res).rev() {
      let last = *ijk;
      let mut last_center;
      if res_is_class_iii(r + 1) {
        ijk.up_ap7();
        last_center = *ijk;
        last_center.down_ap7();
      } else {
        ijk.up_ap7r();
        last_center = *ijk;
        last_center.down_ap7r();
      }
      h.set_digit(r + 1, (last - last_center).to_digit());
    }

    if bc_fijk.coord.i > MAX_FACE_COORD || bc_fijk.coord.j > MAX_FACE_COORD || bc_fijk.coord.k > MAX_FACE_COORD {
      return H3_NULL;
    }
    let Some((base_cell, num_rots)) = face_ijk_to_base_cell(&bc_fijk) else {
      return H3_NULL;
    };
    h.set_base_cell(base_cell);

    // Rotate into the base cell's own frame.
    if is_base_cell_pentagon(base_cell) {
      // force rotation out of the missing K subsequence
      if h.leading_non_zero_digit() == Direction::KAxes {
        h = if base_cell_is_cw_offset(base_cell, bc_fijk.face) {
          h.rotate60_cw()
        } else {
          h.rotate60_ccw()
        };
      }
      for _ in 0..num_rots {
        h = h.rotate_pent60_ccw();
      }
    } else {
      for _ in 0..num_rots {
        h = h.rotate60_ccw();
      }
    }
    h
  }

  /// Face coordinate of the cell center, on the face that contains it.
  pub(crate) fn to_face_ijk(self) -> Result<FaceIJK, H3Error> {
    let base_cell = self.base_cell();
    if !(0..NUM_BASE_CELLS).contains(&base_cell) {
      return Err(H3Error::CellInvalid);
    }

    let is_pent = is_base_cell_pentagon(base_cell);
    let mut h = self;
    // every sub-sequence 5 of a pentagon is rotated out of the deleted sequence
    if is_pent && h.leading_non_zero_digit() == Direction::IkAxes {
      h = h.rotate60_cw();
    }

    let mut fijk = base_cell_home(base_cell);
    if !h.descend_from_base_cell(&mut fijk) {
      return Ok(fijk);
    }

    // The cell may lie on an adjacent face.
    let orig_ijk = fijk.coord;
    let cell_res = h.resolution();
    let mut res = cell_res;
    if res_is_class_iii(res) {
      fijk.coord.down_ap7r();
      res += 1;
    }

    let pent_leading_4 = is_pent && h.leading_non_zero_digit() == Direction::IAxes;
    if fijk.adjust_overage_class_ii(res, pent_leading_4, false) != Overage::None {
      // pentagons can spill over twice
      if is_pent {
        for _ in 0..NUM_ICOSA_FACES {
          if fijk.adjust_overage_class_ii(res, false, false) == Overage::None {
            break;
          }
        }
      }
      if res != cell_res {
        fijk.coord.up_ap7r();
      }
    } else if res != cell_res {
      fijk.coord = orig_ijk;
    }
    Ok(fijk)
  }

  /// Applies the digits to `fijk`, which holds the base cell's coordinate.
  /// Returns whether the result may have spilled onto another face.
  pub(crate) fn descend_from_base_cell(self, fijk: &mut FaceIJK) -> bool {
    let res = self.resolution();

    // the center base cell hierarchy is entirely on its face
    let possible_overage = is_base_cell_pentagon(self.base_cell()) || !(res == 0 || fijk.coord == Default::default());

    for r in 1..=res {
      if res_is_class_iii(r) {
        fijk.coord.down_ap7();
      } else {
        fijk.coord.down_ap7r();
      }
      fijk.coord.neighbor(self.digit(r));
    }
    possible_overage
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::CoordIJK;

  #[test]
  fn field_accessors_round_trip() {
    let mut h = H3Index(0);
    h.set_mode(H3_CELL_MODE);
    h.set_resolution(9);
    h.set_base_cell(121);
    h.set_reserved_bits(5);
    h.set_digit(3, Direction::IkAxes);
    assert_eq!(h.mode(), H3_CELL_MODE);
    assert_eq!(h.resolution(), 9);
    assert_eq!(h.base_cell(), 121);
    assert_eq!(h.reserved_bits(), 5);
    assert_eq!(h.digit(3), Direction::IkAxes);
    assert!(!h.high_bit());
    assert!(H3Index(u64::MAX).high_bit());
  }

  #[test]
  fn known_index_fields() {
    let h = H3Index(0x8928_3082_80ff_fff);
    assert_eq!(h.mode(), H3_CELL_MODE);
    assert_eq!(h.resolution(), 9);
    assert_eq!(h.base_cell(), 20);
    assert_eq!(h.digit(10), Direction::InvalidDigit);
  }

  #[test]
  fn new_cell_sets_digits() {
    let h = H3Index::new_cell(5, 12, Direction::Center);
    assert_eq!(h.resolution(), 5);
    assert_eq!(h.base_cell(), 12);
    assert_eq!(h.leading_non_zero_digit(), Direction::Center);
    assert_eq!(h.digit(6), Direction::InvalidDigit);
  }

  #[test]
  fn leading_digit_skips_center() {
    let mut h = H3Index::new_cell(3, 0, Direction::Center);
    h.set_digit(2, Direction::JAxes);
    h.set_digit(3, Direction::KAxes);
    assert_eq!(h.leading_non_zero_digit(), Direction::JAxes);
  }

  #[test]
  fn digit_rotations() {
    let i = H3Index::new_cell(1, 0, Direction::IAxes);
    assert_eq!(i.rotate60_ccw(), H3Index::new_cell(1, 0, Direction::IjAxes));
    assert_eq!(i.rotate60_cw(), H3Index::new_cell(1, 0, Direction::IkAxes));
    assert_eq!(i.rotate_pent60_ccw(), H3Index::new_cell(1, 0, Direction::IjAxes));

    // a pentagon rotation never lands in the deleted K subsequence
    let jk = H3Index::new_cell(1, 14, Direction::JkAxes);
    assert_ne!(jk.rotate_pent60_ccw().leading_non_zero_digit(), Direction::KAxes);
    let ik = H3Index::new_cell(1, 14, Direction::IkAxes);
    assert_ne!(ik.rotate_pent60_cw().leading_non_zero_digit(), Direction::KAxes);
  }

  #[test]
  fn base_cell_homes_round_trip() {
    for bc in 0..NUM_BASE_CELLS {
      let h = H3Index::new_cell(0, bc, Direction::Center);
      let fijk = h.to_face_ijk().unwrap();
      assert_eq!(H3Index::from_face_ijk(&fijk, 0), h, "base cell {bc}");
    }
  }

  #[test]
  fn children_round_trip_through_face_ijk() {
    for bc in [0, 4, 14, 20, 117] {
      for res in 1..=4 {
        for d in Direction::NEIGHBORS {
          let h = H3Index::new_cell(res, bc, d);
          if is_base_cell_pentagon(bc) && d == Direction::KAxes {
            continue;
          }
          let fijk = h.to_face_ijk().unwrap();
          assert_eq!(H3Index::from_face_ijk(&fijk, res), h, "{h:x}");
        }
      }
    }
  }

  #[test]
  fn out_of_range_face_coordinates_are_null() {
    let far = FaceIJK::new(0, CoordIJK::new(3, 0, 0));
    assert_eq!(H3Index::from_face_ijk(&far, 0), H3_NULL);
  }

  #[test]
  fn invalid_base_cell_has_no_face() {
    assert_eq!(H3Index(u64::MAX).to_face_ijk(), Err(H3Error::CellInvalid));
  }
}
