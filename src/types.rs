//! Core value types shared by every module.

use crate::constants::{MAX_CELL_BNDRY_VERTS, M_180_PI, M_PI_180};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};
use smallvec::SmallVec;

/// A cell or directed edge index. The bit layout is described in
/// [`crate::h3_index`].
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct H3Index(pub u64);

/// The null index. Never a valid cell.
pub const H3_NULL: H3Index = H3Index(0);

/// Latitude/longitude in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLng {
  /// Latitude in radians.
  pub lat: f64,
  /// Longitude in radians.
  pub lng: f64,
}

impl LatLng {
  #[inline]
  #[must_use]
  pub const fn new(lat: f64, lng: f64) -> Self {
    Self { lat, lng }
  }

  /// Builds a coordinate from degrees.
  #[inline]
  #[must_use]
  pub fn from_degrees(lat: f64, lng: f64) -> Self {
    Self {
      lat: lat * M_PI_180,
      lng: lng * M_PI_180,
    }
  }

  #[inline]
  #[must_use]
  pub fn lat_degrees(&self) -> f64 {
    self.lat * M_180_PI
  }

  #[inline]
  #[must_use]
  pub fn lng_degrees(&self) -> f64 {
    self.lng * M_180_PI
  }

  #[inline]
  #[must_use]
  pub fn is_finite(&self) -> bool {
    self.lat.is_finite() && self.lng.is_finite()
  }
}

/// Vertices of a cell (or directed edge) boundary, counter-clockwise and not
/// closed. Class III cells crossing an icosahedron edge carry extra
/// distortion vertices, hence up to [`MAX_CELL_BNDRY_VERTS`].
pub type CellBoundary = SmallVec<[LatLng; MAX_CELL_BNDRY_VERTS]>;

/// Polyfill input: an outer ring with optional holes, all in radians.
///
/// Rings may be given open or closed; a repeated closing vertex is harmless.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPolygon {
  pub outer: Vec<LatLng>,
  pub holes: Vec<Vec<LatLng>>,
}

impl GeoPolygon {
  #[must_use]
  pub fn new(outer: Vec<LatLng>) -> Self {
    Self { outer, holes: Vec::new() }
  }

  /// Builds a polygon from `(lat, lng)` degree pairs.
  #[must_use]
  pub fn from_degrees(outer: &[(f64, f64)], holes: &[Vec<(f64, f64)>]) -> Self {
    let ring = |pts: &[(f64, f64)]| pts.iter().map(|&(lat, lng)| LatLng::from_degrees(lat, lng)).collect();
    Self {
      outer: ring(outer),
      holes: holes.iter().map(|h| ring(h)).collect(),
    }
  }

  #[must_use]
  pub fn with_hole(mut self, hole: Vec<LatLng>) -> Self {
    self.holes.push(hole);
    self
  }
}

/// One entry of a multipolygon traced from a cell set, as degree pairs.
///
/// Pair order and ring closure depend on the `geo_json` flag passed to
/// [`crate::cells_to_multi_polygon`].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
  pub outer: Vec<[f64; 2]>,
  pub holes: Vec<Vec<[f64; 2]>>,
}

impl Polygon {
  /// Outer ring followed by every hole, in trace order.
  pub fn loops(&self) -> impl Iterator<Item = &Vec<[f64; 2]>> {
    std::iter::once(&self.outer).chain(self.holes.iter())
  }

  /// Number of rings, outer included.
  #[must_use]
  pub fn num_loops(&self) -> usize {
    1 + self.holes.len()
  }
}

/// A traced multipolygon.
pub type MultiPolygon = Vec<Polygon>;

/// Digit values of an index, which double as the six unit directions of
/// the IJK grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
#[repr(u8)]
pub enum Direction {
  /// Center, digit 0.
  #[default]
  Center = 0,
  /// k-axes direction, digit 1. Deleted at pentagons.
  KAxes = 1,
  /// j-axes direction, digit 2.
  JAxes = 2,
  /// j == k direction, digit 3.
  JkAxes = 3,
  /// i-axes direction, digit 4.
  IAxes = 4,
  /// i == k direction, digit 5.
  IkAxes = 5,
  /// i == j direction, digit 6.
  IjAxes = 6,
  /// Unused digit.
  InvalidDigit = 7,
}

impl Direction {
  /// The six neighbor directions in digit order.
  pub const NEIGHBORS: [Direction; 6] = [
    Direction::KAxes,
    Direction::JAxes,
    Direction::JkAxes,
    Direction::IAxes,
    Direction::IkAxes,
    Direction::IjAxes,
  ];

  /// Maps a raw 3-bit digit; anything above 6 is `InvalidDigit`.
  #[inline]
  #[must_use]
  pub const fn from_digit(d: u64) -> Self {
    match d {
      0 => Direction::Center,
      1 => Direction::KAxes,
      2 => Direction::JAxes,
      3 => Direction::JkAxes,
      4 => Direction::IAxes,
      5 => Direction::IkAxes,
      6 => Direction::IjAxes,
      _ => Direction::InvalidDigit,
    }
  }

  /// Rotates 60 degrees counter-clockwise.
  #[inline]
  #[must_use]
  pub const fn rotate60_ccw(self) -> Self {
    match self {
      Direction::KAxes => Direction::IkAxes,
      Direction::IkAxes => Direction::IAxes,
      Direction::IAxes => Direction::IjAxes,
      Direction::IjAxes => Direction::JAxes,
      Direction::JAxes => Direction::JkAxes,
      Direction::JkAxes => Direction::KAxes,
      other => other,
    }
  }

  /// Rotates 60 degrees clockwise.
  #[inline]
  #[must_use]
  pub const fn rotate60_cw(self) -> Self {
    match self {
      Direction::KAxes => Direction::JkAxes,
      Direction::JkAxes => Direction::JAxes,
      Direction::JAxes => Direction::IjAxes,
      Direction::IjAxes => Direction::IAxes,
      Direction::IAxes => Direction::IkAxes,
      Direction::IkAxes => Direction::KAxes,
      other => other,
    }
  }
}

/// IJK hexagon coordinates; axes are 120 degrees apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CoordIJK {
  pub i: i32,
  pub j: i32,
  pub k: i32,
}

/// IJ hexagon coordinates in a local frame anchored at an origin cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordIJ {
  pub i: i32,
  pub j: i32,
}

/// Icosahedron face number and IJK coordinates on that face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub(crate) struct FaceIJK {
  pub face: usize,
  pub coord: CoordIJK,
}

/// 2D floating point vector on a face plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct Vec2d {
  pub x: f64,
  pub y: f64,
}

/// 3D floating point vector on the unit sphere.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct Vec3d {
  pub x: f64,
  pub y: f64,
  pub z: f64,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn direction_rotations_cycle() {
    for d in Direction::NEIGHBORS {
      let mut ccw = d;
      let mut cw = d;
      for _ in 0..6 {
        ccw = ccw.rotate60_ccw();
        cw = cw.rotate60_cw();
      }
      assert_eq!(ccw, d);
      assert_eq!(cw, d);
      assert_eq!(d.rotate60_ccw().rotate60_cw(), d);
    }
    assert_eq!(Direction::Center.rotate60_ccw(), Direction::Center);
    assert_eq!(Direction::InvalidDigit.rotate60_cw(), Direction::InvalidDigit);
  }

  #[test]
  fn from_digit_covers_all_values() {
    for d in 0..8u64 {
      assert_eq!(Direction::from_digit(d) as u64, d);
    }
    assert_eq!(Direction::from_digit(42), Direction::InvalidDigit);
  }

  #[test]
  fn degrees_round_trip() {
    let ll = LatLng::from_degrees(37.5, -122.25);
    assert!((ll.lat_degrees() - 37.5).abs() < 1e-12);
    assert!((ll.lng_degrees() + 122.25).abs() < 1e-12);
  }

  #[test]
  fn polygon_loops_lists_outer_first() {
    let p = Polygon {
      outer: vec![[0.0, 0.0]],
      holes: vec![vec![[1.0, 1.0]], vec![[2.0, 2.0]]],
    };
    let firsts: Vec<_> = p.loops().map(|l| l[0][0]).collect();
    assert_eq!(firsts, vec![0.0, 1.0, 2.0]);
    assert_eq!(p.num_loops(), 3);
  }
}
