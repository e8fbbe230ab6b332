//! Spherical and planar helpers used by the projection code.

pub(crate) mod vec2d;
pub(crate) mod vec3d;

use crate::constants::{EPSILON, EPSILON_RAD, M_2PI};
use crate::types::LatLng;
use std::f64::consts::{FRAC_PI_2, PI};

/// Normalizes radians to a value between 0.0 and two pi.
#[inline]
#[must_use]
pub(crate) fn pos_angle_rads(rads: f64) -> f64 {
  let tmp = if rads < 0.0 { rads + M_2PI } else { rads };
  if rads >= M_2PI {
    tmp - M_2PI
  } else {
    tmp
  }
}

/// Brings a longitude into `[-pi, pi]`.
#[inline]
#[must_use]
pub(crate) fn constrain_lng(mut lng: f64) -> f64 {
  if !lng.is_finite() {
    return lng;
  }
  if lng.abs() > 4.0 * M_2PI {
    lng %= M_2PI;
  }
  while lng > PI {
    lng -= M_2PI;
  }
  while lng < -PI {
    lng += M_2PI;
  }
  lng
}

/// Whether two coordinates are within `threshold` radians on both axes.
#[inline]
#[must_use]
pub(crate) fn geo_almost_equal_threshold(a: &LatLng, b: &LatLng, threshold: f64) -> bool {
  (a.lat - b.lat).abs() < threshold && (a.lng - b.lng).abs() < threshold
}

/// Whether two coordinates are equal to within a billionth of a degree.
#[inline]
#[must_use]
pub(crate) fn geo_almost_equal(a: &LatLng, b: &LatLng) -> bool {
  geo_almost_equal_threshold(a, b, EPSILON_RAD)
}

/// Azimuth in radians from `p1` to `p2`, measured clockwise from north.
#[must_use]
pub(crate) fn geo_azimuth_rads(p1: &LatLng, p2: &LatLng) -> f64 {
  let dlng = p2.lng - p1.lng;
  (p2.lat.cos() * dlng.sin()).atan2(p1.lat.cos() * p2.lat.sin() - p1.lat.sin() * p2.lat.cos() * dlng.cos())
}

/// The point `distance` radians from `p1` along azimuth `az`.
///
/// Results at either pole are pinned to longitude 0.
#[must_use]
pub(crate) fn geo_az_distance_rads(p1: &LatLng, az: f64, distance: f64) -> LatLng {
  if distance < EPSILON {
    return *p1;
  }

  let az = pos_angle_rads(az);
  let pinned = |lat: f64| {
    if (lat - FRAC_PI_2).abs() < EPSILON {
      Some(LatLng::new(FRAC_PI_2, 0.0))
    } else if (lat + FRAC_PI_2).abs() < EPSILON {
      Some(LatLng::new(-FRAC_PI_2, 0.0))
    } else {
      None
    }
  };

  // due north or due south
  if az < EPSILON || (az - PI).abs() < EPSILON {
    let lat = if az < EPSILON { p1.lat + distance } else { p1.lat - distance };
    return pinned(lat).unwrap_or_else(|| LatLng::new(lat, constrain_lng(p1.lng)));
  }

  let sin_lat = (p1.lat.sin() * distance.cos() + p1.lat.cos() * distance.sin() * az.cos()).clamp(-1.0, 1.0);
  let lat = sin_lat.asin();
  if let Some(pole) = pinned(lat) {
    return pole;
  }

  let sin_lng = (az.sin() * distance.sin() / lat.cos()).clamp(-1.0, 1.0);
  let cos_lng = ((distance.cos() - p1.lat.sin() * lat.sin()) / p1.lat.cos() / lat.cos()).clamp(-1.0, 1.0);
  LatLng::new(lat, constrain_lng(p1.lng + sin_lng.atan2(cos_lng)))
}

/// Haversine distance in radians between two points on the unit sphere.
#[must_use]
pub fn great_circle_distance_rads(a: &LatLng, b: &LatLng) -> f64 {
  let sin_lat = ((b.lat - a.lat) * 0.5).sin();
  let sin_lng = ((b.lng - a.lng) * 0.5).sin();
  let h = (sin_lat * sin_lat + a.lat.cos() * b.lat.cos() * sin_lng * sin_lng).clamp(0.0, 1.0);
  2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}
