use crate::types::{LatLng, Vec3d};

impl Vec3d {
  /// Projects a coordinate onto the unit sphere.
  #[inline]
  #[must_use]
  pub(crate) fn from_lat_lng(g: &LatLng) -> Self {
    let r = g.lat.cos();
    Self {
      x: g.lng.cos() * r,
      y: g.lng.sin() * r,
      z: g.lat.sin(),
    }
  }

  /// Squared euclidean distance to another point.
  #[inline]
  #[must_use]
  pub(crate) fn square_dist(&self, other: &Vec3d) -> f64 {
    let dx = self.x - other.x;
    let dy = self.y - other.y;
    let dz = self.z - other.z;
    dx * dx + dy * dy + dz * dz
  }
}
