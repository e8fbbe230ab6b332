use crate::constants::MAX_H3_RES;
use crate::error::H3Error;
use crate::h3_index::inspection::is_pentagon;
use crate::types::{Direction, H3Index};

/// Whether `child_res` is a resolution at or below the cell's own.
#[inline]
fn has_child_at_res(h: H3Index, child_res: i32) -> bool {
  child_res >= h.resolution() && child_res <= MAX_H3_RES
}

/// Number of descendants of `h` at `child_res`. Pentagons lose one child
/// per level along their center path.
pub(crate) fn cell_to_children_size(h: H3Index, child_res: i32) -> Result<u64, H3Error> {
  if !has_child_at_res(h, child_res) {
    return Err(H3Error::ResDomain);
  }
  let n = (child_res - h.resolution()) as u32;
  let hexagons = 7u64.pow(n);
  Ok(if is_pentagon(h) { 1 + 5 * (hexagons - 1) / 6 } else { hexagons })
}

/// Ancestor of `h` at `parent_res`. The cell itself when the resolutions
/// match.
pub fn cell_to_parent(h: H3Index, parent_res: i32) -> Result<H3Index, H3Error> {
  let child_res = h.resolution();
  if parent_res < 0 || parent_res > MAX_H3_RES || parent_res > child_res {
    return Err(H3Error::ResDomain);
  }
  let mut parent = h;
  parent.set_resolution(parent_res);
  for r in (parent_res + 1)..=child_res {
    parent.set_digit(r, Direction::InvalidDigit);
  }
  Ok(parent)
}

/// Descendant of `h` at `child_res` reached through center digits only.
pub fn cell_to_center_child(h: H3Index, child_res: i32) -> Result<H3Index, H3Error> {
  if !has_child_at_res(h, child_res) {
    return Err(H3Error::ResDomain);
  }
  let mut child = h;
  child.set_resolution(child_res);
  for r in (h.resolution() + 1)..=child_res {
    child.set_digit(r, Direction::Center);
  }
  Ok(child)
}

/// Every descendant of `h` at `child_res`, in digit order.
///
/// Descendants along the center path of a pentagon skip the K digit.
pub fn cell_to_children(h: H3Index, child_res: i32) -> Result<Vec<H3Index>, H3Error> {
  let size = cell_to_children_size(h, child_res)?;
  let mut level = Vec::with_capacity(usize::try_from(size).unwrap_or(0));
  level.push(h);

  for r in (h.resolution() + 1)..=child_res {
    let mut next = Vec::with_capacity(level.len() * 7);
    for parent in level {
      let pent = is_pentagon(parent);
      let mut child = parent;
      child.set_resolution(r);
      for d in (0..7).map(Direction::from_digit) {
        if pent && d == Direction::KAxes {
          continue;
        }
        child.set_digit(r, d);
        next.push(child);
      }
    }
    level = next;
  }
  Ok(level)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::h3_index::inspection::is_valid_cell;
  use crate::types::H3_NULL;

  const CELL: H3Index = H3Index(0x8928308280fffff);

  #[test]
  fn parents_of_known_cell() {
    assert_eq!(cell_to_parent(CELL, 7), Ok(H3Index(0x872830828ffffff)));
    assert_eq!(cell_to_parent(CELL, 8), Ok(H3Index(0x8828308281fffff)));
    assert_eq!(cell_to_parent(CELL, 9), Ok(CELL));
    assert_eq!(cell_to_parent(CELL, 0).map(|p| p.base_cell()), Ok(20));
  }

  #[test]
  fn parent_domain() {
    assert_eq!(cell_to_parent(CELL, 10), Err(H3Error::ResDomain));
    assert_eq!(cell_to_parent(CELL, -1), Err(H3Error::ResDomain));
    assert_eq!(cell_to_parent(CELL, 16), Err(H3Error::ResDomain));
  }

  #[test]
  fn children_of_hexagon() {
    let children = cell_to_children(CELL, 10).unwrap();
    assert_eq!(children.len(), 7);
    assert_eq!(cell_to_children(CELL, 11).unwrap().len(), 49);
    for c in children {
      assert!(is_valid_cell(c));
      assert_eq!(cell_to_parent(c, 9), Ok(CELL));
    }
    assert_eq!(cell_to_children(CELL, 9), Ok(vec![CELL]));
  }

  #[test]
  fn children_of_pentagon() {
    let pent = H3Index::new_cell(0, 4, Direction::Center);
    assert_eq!(cell_to_children(pent, 1).unwrap().len(), 6);
    let grandchildren = cell_to_children(pent, 2).unwrap();
    assert_eq!(grandchildren.len(), 41);
    assert_eq!(cell_to_children_size(pent, 2), Ok(41));
    assert!(grandchildren.iter().all(|&c| is_valid_cell(c)));
  }

  #[test]
  fn children_domain() {
    assert_eq!(cell_to_children(CELL, 8), Err(H3Error::ResDomain));
    assert_eq!(cell_to_children(CELL, 16), Err(H3Error::ResDomain));
    assert_eq!(cell_to_center_child(CELL, 8), Err(H3Error::ResDomain));
    // positional reads only, no panic
    assert_eq!(cell_to_children(H3_NULL, 1).map(|c| c.len()), Ok(7));
  }

  #[test]
  fn center_child() {
    let child = cell_to_center_child(CELL, 11).unwrap();
    assert_eq!(child.resolution(), 11);
    assert_eq!(child.digit(10), Direction::Center);
    assert_eq!(child.digit(11), Direction::Center);
    assert_eq!(cell_to_parent(child, 9), Ok(CELL));
    assert_eq!(cell_to_center_child(CELL, 9), Ok(CELL));
  }
}
