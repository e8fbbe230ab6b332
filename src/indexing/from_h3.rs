use crate::constants::{NUM_HEX_VERTS, NUM_PENT_VERTS};
use crate::h3_index::inspection::is_pentagon;
use crate::types::{CellBoundary, FaceIJK, H3Index, LatLng};

/// Face coordinate of the cell, or the origin of face 0 when the base cell
/// is out of range. Other malformed fields are read positionally.
fn best_effort_face_ijk(cell: H3Index) -> FaceIJK {
  cell.to_face_ijk().unwrap_or_default()
}

/// Center of the cell. Malformed indexes give a deterministic but
/// meaningless point.
#[must_use]
pub fn cell_to_lat_lng(cell: H3Index) -> LatLng {
  best_effort_face_ijk(cell).to_geo(cell.resolution())
}

/// Boundary of the cell, counter-clockwise and not closed.
#[must_use]
pub fn cell_to_boundary(cell: H3Index) -> CellBoundary {
  let fijk = best_effort_face_ijk(cell);
  let res = cell.resolution();
  if is_pentagon(cell) {
    fijk.pent_to_cell_boundary(res, 0, NUM_PENT_VERTS)
  } else {
    fijk.to_cell_boundary(res, 0, NUM_HEX_VERTS)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::MAX_H3_RES;
  use crate::h3_index::inspection::get_pentagons;
  use crate::indexing::to_h3::lat_lng_to_cell;
  use crate::math::great_circle_distance_rads;

  #[test]
  fn center_of_known_cell() {
    let center = cell_to_lat_lng(H3Index(0x85283473fffffff));
    assert!((center.lat_degrees() - 37.345793375368).abs() < 1e-9);
    assert!((center.lng_degrees() + 121.976375972551).abs() < 1e-9);
  }

  #[test]
  fn center_maps_back_to_cell() {
    let geo = LatLng::from_degrees(-33.86, 151.21);
    for res in 0..=MAX_H3_RES {
      let h = lat_lng_to_cell(&geo, res).unwrap();
      assert_eq!(lat_lng_to_cell(&cell_to_lat_lng(h), res).unwrap(), h, "res {res}");
    }
  }

  #[test]
  fn boundary_sizes() {
    let hex = lat_lng_to_cell(&LatLng::from_degrees(40.7, -74.0), 8).unwrap();
    assert_eq!(cell_to_boundary(hex).len(), 6);
    for res in [0, 2, 4] {
      for p in get_pentagons(res).unwrap() {
        assert_eq!(cell_to_boundary(p).len(), 5);
      }
    }
    for p in get_pentagons(1).unwrap() {
      assert_eq!(cell_to_boundary(p).len(), 10);
    }
  }

  #[test]
  fn boundary_surrounds_center() {
    let h = H3Index(0x8928308280fffff);
    let center = cell_to_lat_lng(h);
    for v in cell_to_boundary(h) {
      let d = great_circle_distance_rads(&center, &v);
      assert!(d > 0.0 && d < 0.0001, "{d}");
    }
  }

  #[test]
  fn malformed_input_does_not_panic() {
    for h in [H3Index(0), H3Index(u64::MAX)] {
      let _ = cell_to_lat_lng(h);
      let _ = cell_to_boundary(h);
    }
  }
}
