//! Planar geometry over lat/lng rings: bounding boxes, containment and
//! winding order.
//!
//! Rings are treated as straight segments in lat/lng space. A ring whose
//! consecutive vertices are more than pi apart in longitude is taken to
//! cross the antimeridian, and its negative longitudes are shifted east by
//! two pi before any comparison.

use std::f64::consts::PI;

use crate::constants::{EPSILON, EPSILON_RAD, M_2PI};
use crate::math::{constrain_lng, geo_almost_equal};
use crate::types::LatLng;

/// Latitude/longitude bounds of a ring. `east < west` marks a box that
/// crosses the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct BBox {
  pub north: f64,
  pub south: f64,
  pub east: f64,
  pub west: f64,
}

impl BBox {
  pub(crate) fn from_ring(verts: &[LatLng]) -> Self {
    if verts.is_empty() {
      return Self::default();
    }
    let mut bbox = BBox {
      north: -f64::MAX,
      south: f64::MAX,
      east: -f64::MAX,
      west: f64::MAX,
    };
    let mut min_pos_lng = f64::MAX;
    let mut max_neg_lng = -f64::MAX;
    let mut transmeridian = false;

    for (i, v) in verts.iter().enumerate() {
      let next = &verts[(i + 1) % verts.len()];
      bbox.south = bbox.south.min(v.lat);
      bbox.north = bbox.north.max(v.lat);
      bbox.west = bbox.west.min(v.lng);
      bbox.east = bbox.east.max(v.lng);
      if v.lng > 0.0 {
        min_pos_lng = min_pos_lng.min(v.lng);
      }
      if v.lng < 0.0 {
        max_neg_lng = max_neg_lng.max(v.lng);
      }
      if (v.lng - next.lng).abs() > PI {
        transmeridian = true;
      }
    }
    if transmeridian {
      bbox.east = max_neg_lng;
      bbox.west = min_pos_lng;
    }
    bbox
  }

  #[inline]
  pub(crate) fn is_transmeridian(&self) -> bool {
    self.east < self.west
  }

  pub(crate) fn contains(&self, p: &LatLng) -> bool {
    if p.lat < self.south || p.lat > self.north {
      return false;
    }
    if self.is_transmeridian() {
      p.lng >= self.west || p.lng <= self.east
    } else {
      p.lng >= self.west && p.lng <= self.east
    }
  }

  /// Longitude span in radians.
  #[cfg(test)]
  pub(crate) fn width(&self) -> f64 {
    if self.is_transmeridian() {
      self.east - self.west + M_2PI
    } else {
      self.east - self.west
    }
  }
}

#[inline]
fn normalize_lng(lng: f64, transmeridian: bool) -> f64 {
  if transmeridian && lng < 0.0 {
    lng + M_2PI
  } else {
    lng
  }
}

/// A ring prepared for repeated containment queries.
#[derive(Debug, Clone)]
pub(crate) struct Ring {
  verts: Vec<LatLng>,
  bbox: BBox,
}

impl Ring {
  /// Wraps longitudes into `[-pi, pi]` and drops a repeated closing vertex.
  pub(crate) fn new(verts: &[LatLng]) -> Self {
    let mut verts: Vec<LatLng> = verts
      .iter()
      .map(|v| LatLng::new(v.lat, constrain_lng(v.lng)))
      .collect();
    if verts.len() > 1 && geo_almost_equal(&verts[0], &verts[verts.len() - 1]) {
      verts.pop();
    }
    let bbox = BBox::from_ring(&verts);
    Self { verts, bbox }
  }

  pub(crate) fn verts(&self) -> &[LatLng] {
    &self.verts
  }

  #[cfg(test)]
  pub(crate) fn bbox(&self) -> &BBox {
    &self.bbox
  }

  fn edges(&self) -> impl Iterator<Item = (LatLng, LatLng)> + '_ {
    let n = self.verts.len();
    (0..n).map(move |i| (self.verts[i], self.verts[(i + 1) % n]))
  }

  /// Twice the signed planar area; positive when clockwise.
  fn winding_sum(&self) -> f64 {
    let tm = self.bbox.is_transmeridian();
    self
      .edges()
      .map(|(a, b)| (normalize_lng(b.lng, tm) - normalize_lng(a.lng, tm)) * (b.lat + a.lat))
      .sum()
  }

  /// Fewer than three vertices, or no enclosed area.
  pub(crate) fn is_degenerate(&self) -> bool {
    self.verts.len() < 3 || self.winding_sum().abs() < EPSILON
  }

  /// Whether `p` lies on one of the ring's segments.
  pub(crate) fn on_boundary(&self, p: &LatLng) -> bool {
    if self.verts.is_empty() {
      return false;
    }
    let tm = self.bbox.is_transmeridian();
    let (px, py) = (normalize_lng(p.lng, tm), p.lat);
    self.edges().any(|(a, b)| {
      let (ax, ay) = (normalize_lng(a.lng, tm), a.lat);
      let (bx, by) = (normalize_lng(b.lng, tm), b.lat);
      let (dx, dy) = (bx - ax, by - ay);
      let len = dx.hypot(dy);
      if len < EPSILON {
        return (px - ax).hypot(py - ay) < EPSILON_RAD;
      }
      let cross = dx * (py - ay) - dy * (px - ax);
      if cross.abs() / len > EPSILON_RAD {
        return false;
      }
      let t = (dx * (px - ax) + dy * (py - ay)) / (len * len);
      (-EPSILON..=1.0 + EPSILON).contains(&t)
    })
  }

  /// Ray-casting containment. Points exactly on an edge may land on
  /// either side; pair with [`Ring::on_boundary`] where that matters.
  pub(crate) fn contains(&self, p: &LatLng) -> bool {
    if self.verts.is_empty() || !self.bbox.contains(p) {
      return false;
    }
    let tm = self.bbox.is_transmeridian();
    let mut lat = p.lat;
    let mut lng = normalize_lng(p.lng, tm);
    let mut inside = false;

    for (a, b) in self.edges() {
      let (a, b) = if a.lat > b.lat { (b, a) } else { (a, b) };
      // bias ties north and west so a vertex is only crossed once
      if lat == a.lat || lat == b.lat {
        lat += f64::EPSILON;
      }
      if lat < a.lat || lat > b.lat {
        continue;
      }
      let a_lng = normalize_lng(a.lng, tm);
      let b_lng = normalize_lng(b.lng, tm);
      if a_lng == lng || b_lng == lng {
        lng -= f64::EPSILON;
      }
      let ratio = (lat - a.lat) / (b.lat - a.lat);
      let test_lng = normalize_lng(a_lng + (b_lng - a_lng) * ratio, tm);
      if test_lng > lng {
        inside = !inside;
      }
    }
    inside
  }
}

/// Whether the ring winds clockwise in lat/lng space.
pub(crate) fn is_clockwise(verts: &[LatLng]) -> bool {
  Ring::new(verts).winding_sum() > 0.0
}
