use crate::error::H3Error;
use crate::h3_index::inspection::is_valid_cell;
use crate::local_ij::cell_to_local_ijk;
use crate::types::H3Index;

/// Number of grid steps between two cells of the same resolution.
///
/// Both cells are placed in a local frame anchored at `origin`, so the
/// distance can only be found for cells on the same or adjacent base cells.
/// Cells on opposite sides of a pentagon may fail too.
pub fn grid_distance(origin: H3Index, destination: H3Index) -> Result<i64, H3Error> {
  if !is_valid_cell(origin) || !is_valid_cell(destination) {
    return Err(H3Error::CellInvalid);
  }
  if origin.resolution() != destination.resolution() {
    return Err(H3Error::ResMismatch);
  }
  let a = cell_to_local_ijk(origin, origin)?;
  let b = cell_to_local_ijk(origin, destination)?;
  Ok(i64::from(a.distance(&b)))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::hierarchy::cell_to_parent;
  use crate::traversal::grid_disk::grid_disk_distances;
  use crate::types::{Direction, H3_NULL};

  #[test]
  fn matches_disk_distances() {
    let origin = H3Index(0x8928308280fffff);
    for (d, ring) in grid_disk_distances(origin, 5).unwrap().into_iter().enumerate() {
      for h in ring {
        assert_eq!(grid_distance(origin, h), Ok(d as i64), "{h}");
        assert_eq!(grid_distance(h, origin), Ok(d as i64), "{h}");
      }
    }
  }

  #[test]
  fn distance_to_self_is_zero() {
    let pent = H3Index(0x821c07fffffffff);
    assert_eq!(grid_distance(pent, pent), Ok(0));
  }

  #[test]
  fn errors() {
    let a = H3Index(0x8928308280fffff);
    let parent = cell_to_parent(a, 8).unwrap();
    assert_eq!(grid_distance(a, parent), Err(H3Error::ResMismatch));
    assert_eq!(grid_distance(a, H3_NULL), Err(H3Error::CellInvalid));
    let far = H3Index::new_cell(0, 121, Direction::Center);
    let near = H3Index::new_cell(0, 0, Direction::Center);
    assert_eq!(grid_distance(near, far), Err(H3Error::Failed));
  }
}
