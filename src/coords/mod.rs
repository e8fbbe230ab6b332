//! Planar coordinate systems: IJK on a face, and face+IJK on the icosahedron.

pub(crate) mod face_ijk;
pub(crate) mod ijk;

/// Odd resolutions are Class III.
#[inline]
#[must_use]
pub(crate) const fn res_is_class_iii(res: i32) -> bool {
  res % 2 == 1
}
