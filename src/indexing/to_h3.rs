use crate::constants::MAX_H3_RES;
use crate::error::H3Error;
use crate::types::{FaceIJK, H3Index, LatLng, H3_NULL};

/// Cell containing `geo` at `res`.
///
/// Any finite coordinate is accepted; out of range values are projected
/// like every other point.
pub fn lat_lng_to_cell(geo: &LatLng, res: i32) -> Result<H3Index, H3Error> {
  if !(0..=MAX_H3_RES).contains(&res) {
    return Err(H3Error::ResDomain);
  }
  if !geo.is_finite() {
    return Err(H3Error::LatLngDomain);
  }

  let fijk = FaceIJK::from_geo(geo, res);
  match H3Index::from_face_ijk(&fijk, res) {
    H3_NULL => Err(H3Error::Failed),
    h => Ok(h),
  }
}

/// [`lat_lng_to_cell`] taking degrees.
pub fn lat_lng_degs_to_cell(lat: f64, lng: f64, res: i32) -> Result<H3Index, H3Error> {
  lat_lng_to_cell(&LatLng::from_degrees(lat, lng), res)
}
