//! Numeric constants of the grid: projection parameters, bit layout and sizes.

use std::f64::consts;

/// pi / 180, degrees to radians.
pub const M_PI_180: f64 = consts::PI / 180.0;
/// 180 / pi, radians to degrees.
pub const M_180_PI: f64 = 180.0 / consts::PI;
/// 2 * pi.
pub const M_2PI: f64 = consts::TAU;

/// Threshold epsilon for geometric comparisons in radians.
pub const EPSILON: f64 = 0.000_000_000_000_000_1;
/// One billionth of a degree, in radians. Tolerance for vertex matching.
pub const EPSILON_RAD: f64 = 0.000_000_001 * M_PI_180;

/// sqrt(3) / 2, the sine of 60 degrees.
pub const M_SQRT3_2: f64 = 0.866_025_403_784_438_6;
/// sqrt(7).
pub const M_SQRT7: f64 = 2.645_751_311_064_590_6;
/// 1 / sqrt(7).
pub const M_RSQRT7: f64 = 0.377_964_473_009_227_2;
/// 1 / sin(60 degrees).
pub const M_RSIN60: f64 = 1.0 / M_SQRT3_2;
/// One third.
pub const M_ONETHIRD: f64 = 1.0 / 3.0;

/// Rotation angle between Class II and Class III resolution axes,
/// asin(sqrt(3 / 28)).
pub const M_AP7_ROT_RADS: f64 = 0.333_473_172_251_832_1;

/// Mean earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.007_180_918_475;

/// Scaling factor from hex2d resolution 0 unit length (distance between
/// adjacent cell center points on the plane) to gnomonic unit length.
pub const RES0_U_GNOMONIC: f64 = 0.381_966_011_250_105;
/// Inverse of [`RES0_U_GNOMONIC`].
pub const INV_RES0_U_GNOMONIC: f64 = 2.618_033_988_749_895;

/// Finest supported resolution.
pub const MAX_H3_RES: i32 = 15;
/// Number of faces on the icosahedron.
pub const NUM_ICOSA_FACES: usize = 20;
/// Number of resolution 0 cells.
pub const NUM_BASE_CELLS: i32 = 122;
/// Number of pentagons at every resolution.
pub const NUM_PENTAGONS: usize = 12;
/// Number of vertices of a hexagon.
pub const NUM_HEX_VERTS: usize = 6;
/// Number of vertices of a pentagon.
pub const NUM_PENT_VERTS: usize = 5;
/// Upper bound on boundary vertices: 5 pentagon vertices plus 5 edge crossings.
pub const MAX_CELL_BNDRY_VERTS: usize = 10;

// Index bit layout.
pub(crate) const H3_MODE_OFFSET: u32 = 59;
pub(crate) const H3_RESERVED_OFFSET: u32 = 56;
pub(crate) const H3_RES_OFFSET: u32 = 52;
pub(crate) const H3_BC_OFFSET: u32 = 45;
pub(crate) const H3_PER_DIGIT_OFFSET: u32 = 3;

pub(crate) const H3_HIGH_BIT_MASK: u64 = 1 << 63;
pub(crate) const H3_MODE_MASK: u64 = 0b1111 << H3_MODE_OFFSET;
pub(crate) const H3_RESERVED_MASK: u64 = 0b111 << H3_RESERVED_OFFSET;
pub(crate) const H3_RES_MASK: u64 = 0b1111 << H3_RES_OFFSET;
pub(crate) const H3_BC_MASK: u64 = 0b111_1111 << H3_BC_OFFSET;
pub(crate) const H3_DIGIT_MASK: u64 = 0b111;

/// Mode tag of a cell index.
pub const H3_CELL_MODE: u8 = 1;
/// Mode tag of a directed edge index.
pub const H3_DIRECTEDEDGE_MODE: u8 = 2;

/// An index with mode 0, resolution 0, base cell 0 and all 15 digits set to 7.
pub(crate) const H3_INIT: u64 = 35_184_372_088_831;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn derived_constants_are_consistent() {
    assert!((M_RSQRT7 * M_SQRT7 - 1.0).abs() < 1e-15);
    assert!((RES0_U_GNOMONIC * INV_RES0_U_GNOMONIC - 1.0).abs() < 1e-15);
    assert!((M_AP7_ROT_RADS - (3.0_f64 / 28.0).sqrt().asin()).abs() < 1e-15);
  }

  #[test]
  fn init_has_all_digits_unused() {
    for r in 1..=MAX_H3_RES as u32 {
      let shift = (MAX_H3_RES as u32 - r) * H3_PER_DIGIT_OFFSET;
      assert_eq!((H3_INIT >> shift) & H3_DIGIT_MASK, 7, "digit {r}");
    }
    assert_eq!(H3_INIT & (H3_MODE_MASK | H3_RES_MASK | H3_BC_MASK), 0);
  }
}
