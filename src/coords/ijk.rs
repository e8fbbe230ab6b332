//! IJK hexagon coordinate arithmetic.
//!
//! Coordinates are kept normalized: every component is non-negative and at
//! least one is zero. The aperture helpers move a coordinate between
//! resolutions; the `r` variants are the clockwise (Class II) forms.

use crate::constants::{M_RSIN60, M_SQRT3_2};
use crate::error::H3Error;
use crate::types::{CoordIJ, CoordIJK, Direction, Vec2d};
use std::ops::{Add, Sub};

/// Unit vectors indexed by digit.
#[rustfmt::skip]
pub(crate) const UNIT_VECS: [CoordIJK; 7] = [
  CoordIJK::new(0, 0, 0), // center
  CoordIJK::new(0, 0, 1), // k
  CoordIJK::new(0, 1, 0), // j
  CoordIJK::new(0, 1, 1), // jk
  CoordIJK::new(1, 0, 0), // i
  CoordIJK::new(1, 0, 1), // ik
  CoordIJK::new(1, 1, 0), // ij
];

impl Add for CoordIJK {
  type Output = CoordIJK;

  #[inline]
  fn add(self, rhs: CoordIJK) -> CoordIJK {
    CoordIJK::new(
      self.i.saturating_add(rhs.i),
      self.j.saturating_add(rhs.j),
      self.k.saturating_add(rhs.k),
    )
  }
}

impl Sub for CoordIJK {
  type Output = CoordIJK;

  #[inline]
  fn sub(self, rhs: CoordIJK) -> CoordIJK {
    CoordIJK::new(
      self.i.saturating_sub(rhs.i),
      self.j.saturating_sub(rhs.j),
      self.k.saturating_sub(rhs.k),
    )
  }
}

impl CoordIJK {
  #[inline]
  #[must_use]
  pub const fn new(i: i32, j: i32, k: i32) -> Self {
    Self { i, j, k }
  }

  #[inline]
  #[must_use]
  pub(crate) fn scaled(self, factor: i32) -> Self {
    CoordIJK::new(
      self.i.saturating_mul(factor),
      self.j.saturating_mul(factor),
      self.k.saturating_mul(factor),
    )
  }

  /// Brings the coordinate to its canonical form in place.
  #[inline]
  pub(crate) fn normalize(&mut self) {
    if self.i < 0 {
      self.j = self.j.saturating_sub(self.i);
      self.k = self.k.saturating_sub(self.i);
      self.i = 0;
    }
    if self.j < 0 {
      self.i = self.i.saturating_sub(self.j);
      self.k = self.k.saturating_sub(self.j);
      self.j = 0;
    }
    if self.k < 0 {
      self.i = self.i.saturating_sub(self.k);
      self.j = self.j.saturating_sub(self.k);
      self.k = 0;
    }

    let min = self.i.min(self.j).min(self.k);
    if min > 0 {
      self.i -= min;
      self.j -= min;
      self.k -= min;
    }
  }

  #[inline]
  #[must_use]
  pub(crate) fn normalized(mut self) -> Self {
    self.normalize();
    self
  }

  /// The digit matching a unit (or zero) vector, `InvalidDigit` otherwise.
  #[inline]
  #[must_use]
  pub(crate) fn to_digit(self) -> Direction {
    let c = self.normalized();
    UNIT_VECS
      .iter()
      .position(|u| *u == c)
      .map_or(Direction::InvalidDigit, |d| Direction::from_digit(d as u64))
  }

  /// Moves one cell in `digit` direction.
  #[inline]
  pub(crate) fn neighbor(&mut self, digit: Direction) {
    if digit != Direction::Center && digit != Direction::InvalidDigit {
      *self = (*self + UNIT_VECS[digit as usize]).normalized();
    }
  }

  /// Sum of each component times the matching basis vector, normalized.
  #[inline]
  fn rebase(&mut self, i_vec: CoordIJK, j_vec: CoordIJK, k_vec: CoordIJK) {
    *self = (i_vec.scaled(self.i) + j_vec.scaled(self.j) + k_vec.scaled(self.k)).normalized();
  }

  /// Parent coordinate in a counter-clockwise aperture 7 grid.
  #[inline]
  pub(crate) fn up_ap7(&mut self) {
    let i = f64::from(self.i - self.k);
    let j = f64::from(self.j - self.k);
    *self = CoordIJK::new(lround((3.0 * i - j) / 7.0), lround((i + 2.0 * j) / 7.0), 0).normalized();
  }

  /// Parent coordinate in a clockwise aperture 7 grid.
  #[inline]
  pub(crate) fn up_ap7r(&mut self) {
    let i = f64::from(self.i - self.k);
    let j = f64::from(self.j - self.k);
    *self = CoordIJK::new(lround((2.0 * i + j) / 7.0), lround((3.0 * j - i) / 7.0), 0).normalized();
  }

  /// Center child coordinate in the next finer counter-clockwise aperture 7 grid.
  #[inline]
  pub(crate) fn down_ap7(&mut self) {
    self.rebase(CoordIJK::new(3, 0, 1), CoordIJK::new(1, 3, 0), CoordIJK::new(0, 1, 3));
  }

  /// Center child coordinate in the next finer clockwise aperture 7 grid.
  #[inline]
  pub(crate) fn down_ap7r(&mut self) {
    self.rebase(CoordIJK::new(3, 1, 0), CoordIJK::new(0, 3, 1), CoordIJK::new(1, 0, 3));
  }

  /// Center coordinate in the next finer counter-clockwise aperture 3 grid.
  #[inline]
  pub(crate) fn down_ap3(&mut self) {
    self.rebase(CoordIJK::new(2, 0, 1), CoordIJK::new(1, 2, 0), CoordIJK::new(0, 1, 2));
  }

  /// Center coordinate in the next finer clockwise aperture 3 grid.
  #[inline]
  pub(crate) fn down_ap3r(&mut self) {
    self.rebase(CoordIJK::new(2, 1, 0), CoordIJK::new(0, 2, 1), CoordIJK::new(1, 0, 2));
  }

  #[inline]
  pub(crate) fn rotate60_ccw(&mut self) {
    self.rebase(CoordIJK::new(1, 1, 0), CoordIJK::new(0, 1, 1), CoordIJK::new(1, 0, 1));
  }

  #[inline]
  pub(crate) fn rotate60_cw(&mut self) {
    self.rebase(CoordIJK::new(1, 0, 1), CoordIJK::new(1, 1, 0), CoordIJK::new(0, 1, 1));
  }

  /// Grid distance between two coordinates on the same plane.
  #[inline]
  #[must_use]
  pub(crate) fn distance(&self, other: &CoordIJK) -> i32 {
    let d = (*self - *other).normalized();
    d.i.abs().max(d.j.abs()).max(d.k.abs())
  }

  /// Drops the k axis.
  #[inline]
  #[must_use]
  pub(crate) fn to_ij(self) -> CoordIJ {
    CoordIJ {
      i: self.i - self.k,
      j: self.j - self.k,
    }
  }

  /// Rebuilds IJK from IJ. Fails when normalizing would overflow.
  pub(crate) fn from_ij(ij: CoordIJ) -> Result<Self, H3Error> {
    let (max, min) = if ij.i > ij.j { (ij.i, ij.j) } else { (ij.j, ij.i) };
    if min < 0
      && (max.checked_add(min).is_none() || 0i32.checked_sub(min).is_none() || max.checked_sub(min).is_none())
    {
      return Err(H3Error::Failed);
    }
    Ok(CoordIJK::new(ij.i, ij.j, 0).normalized())
  }

  /// Center of the cell on the face plane.
  #[inline]
  #[must_use]
  pub(crate) fn to_hex2d(self) -> Vec2d {
    let i = f64::from(self.i - self.k);
    let j = f64::from(self.j - self.k);
    Vec2d::new(i - 0.5 * j, j * M_SQRT3_2)
  }
}

/// Round half away from zero, saturating at the `i32` range.
#[inline]
fn lround(v: f64) -> i32 {
  v.round() as i32
}

impl Vec2d {
  /// The cell containing this point of the face plane.
  #[must_use]
  pub(crate) fn to_coord_ijk(self) -> CoordIJK {
    let a1 = self.x.abs();
    let a2 = self.y.abs();

    // reverse the hex2d transform
    let x2 = a2 * M_RSIN60;
    let x1 = a1 + x2 / 2.0;

    let m1 = x1 as i32;
    let m2 = x2 as i32;

    let r1 = x1 - f64::from(m1);
    let r2 = x2 - f64::from(m2);

    let (mut i, mut j);
    if r1 < 0.5 {
      if r1 < 1.0 / 3.0 {
        i = m1;
        j = if r2 < (1.0 + r1) / 2.0 { m2 } else { m2.saturating_add(1) };
      } else {
        j = if r2 < 1.0 - r1 { m2 } else { m2.saturating_add(1) };
        i = if (1.0 - r1) <= r2 && r2 < 2.0 * r1 { m1.saturating_add(1) } else { m1 };
      }
    } else if r1 < 2.0 / 3.0 {
      j = if r2 < 1.0 - r1 { m2 } else { m2.saturating_add(1) };
      i = if (2.0 * r1 - 1.0) < r2 && r2 < (1.0 - r1) { m1 } else { m1.saturating_add(1) };
    } else {
      i = m1.saturating_add(1);
      j = if r2 < r1 / 2.0 { m2 } else { m2.saturating_add(1) };
    }

    // fold across the axes if necessary
    if self.x < 0.0 {
      let (i64_i, i64_j) = (i64::from(i), i64::from(j));
      let folded = if j % 2 == 0 {
        let diff = i64_i - i64_j / 2;
        i64_i - 2 * diff
      } else {
        let diff = i64_i - (i64_j + 1) / 2;
        i64_i - (2 * diff + 1)
      };
      i = saturate(folded);
    }
    if self.y < 0.0 {
      i = saturate(i64::from(i) - (2 * i64::from(j) + 1) / 2);
      j = j.saturating_neg();
    }

    CoordIJK::new(i, j, 0).normalized()
  }
}

#[inline]
fn saturate(v: i64) -> i32 {
  v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn normalize_makes_components_non_negative() {
    let mut c = CoordIJK::new(2, 3, 4);
    c.normalize();
    assert_eq!(c, CoordIJK::new(0, 1, 2));

    let mut c = CoordIJK::new(-1, 0, 0);
    c.normalize();
    assert_eq!(c, CoordIJK::new(0, 1, 1));

    let mut c = CoordIJK::new(i32::MIN, 0, 0);
    c.normalize();
    assert!(c.i >= 0 && c.j >= 0 && c.k >= 0);
  }

  #[test]
  fn unit_vectors_map_to_digits() {
    for (d, u) in UNIT_VECS.iter().enumerate() {
      assert_eq!(u.to_digit() as usize, d);
    }
    assert_eq!(CoordIJK::new(2, 0, 0).to_digit(), Direction::InvalidDigit);
    assert_eq!(CoordIJK::new(1, 1, 1).to_digit(), Direction::Center);
  }

  #[test]
  fn neighbor_moves_one_step() {
    let mut c = CoordIJK::default();
    c.neighbor(Direction::IAxes);
    assert_eq!(c, CoordIJK::new(1, 0, 0));
    c.neighbor(Direction::Center);
    assert_eq!(c, CoordIJK::new(1, 0, 0));
    c.neighbor(Direction::InvalidDigit);
    assert_eq!(c, CoordIJK::new(1, 0, 0));
    c.neighbor(Direction::JkAxes);
    assert_eq!(c, CoordIJK::new(0, 0, 0));
  }

  #[test]
  fn hex2d_round_trip() {
    for i in 0..4 {
      for j in 0..4 {
        let c = CoordIJK::new(i, j, 0).normalized();
        assert_eq!(c.to_hex2d().to_coord_ijk(), c, "{c:?}");
      }
    }
    let neg = CoordIJK::new(0, 3, 5);
    assert_eq!(neg.to_hex2d().to_coord_ijk(), neg);
  }

  #[test]
  fn hex2d_quantizes_near_points() {
    assert_eq!(Vec2d::new(0.1, 0.1).to_coord_ijk(), CoordIJK::default());
    assert_eq!(Vec2d::new(0.9, 0.0).to_coord_ijk(), CoordIJK::new(1, 0, 0));
    assert_eq!(Vec2d::new(-0.9, 0.0).to_coord_ijk(), CoordIJK::new(0, 1, 1));
  }

  #[test]
  fn huge_plane_coordinates_saturate() {
    let c = Vec2d::new(1e300, -1e300).to_coord_ijk();
    assert!(c.i >= 0 && c.j >= 0 && c.k >= 0);
  }

  #[test]
  fn down_then_up_is_identity() {
    for d in UNIT_VECS {
      let mut c = d;
      c.down_ap7();
      c.up_ap7();
      assert_eq!(c, d);

      let mut c = d;
      c.down_ap7r();
      c.up_ap7r();
      assert_eq!(c, d);
    }
  }

  #[test]
  fn down_ap3_scales_axes() {
    let mut c = CoordIJK::new(1, 0, 0);
    c.down_ap3();
    assert_eq!(c, CoordIJK::new(2, 0, 1));
    let mut c = CoordIJK::new(1, 0, 0);
    c.down_ap3r();
    assert_eq!(c, CoordIJK::new(2, 1, 0));
  }

  #[test]
  fn rotations_follow_digits() {
    for d in Direction::NEIGHBORS {
      let mut c = UNIT_VECS[d as usize];
      c.rotate60_ccw();
      assert_eq!(c.to_digit(), d.rotate60_ccw());

      let mut c = UNIT_VECS[d as usize];
      c.rotate60_cw();
      assert_eq!(c.to_digit(), d.rotate60_cw());
    }
  }

  #[test]
  fn distance_counts_steps() {
    let origin = CoordIJK::default();
    assert_eq!(origin.distance(&origin), 0);
    assert_eq!(origin.distance(&CoordIJK::new(1, 0, 0)), 1);
    assert_eq!(origin.distance(&CoordIJK::new(2, 1, 0)), 2);
    assert_eq!(CoordIJK::new(0, 0, 3).distance(&CoordIJK::new(3, 0, 0)), 6);
  }

  #[test]
  fn ij_round_trip() {
    for c in [CoordIJK::new(0, 0, 0), CoordIJK::new(2, 0, 1), CoordIJK::new(0, 5, 3)] {
      assert_eq!(CoordIJK::from_ij(c.to_ij()), Ok(c));
    }
    assert_eq!(
      CoordIJK::from_ij(CoordIJ { i: i32::MAX, j: i32::MIN }),
      Err(H3Error::Failed)
    );
  }
}
