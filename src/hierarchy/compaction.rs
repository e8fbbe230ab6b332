use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::debug;

use crate::constants::MAX_H3_RES;
use crate::error::H3Error;
use crate::h3_index::inspection::{is_pentagon, is_valid_cell};
use crate::hierarchy::parent_child::{cell_to_children, cell_to_parent};
use crate::types::H3Index;

/// Replaces every complete set of siblings with their parent, repeatedly,
/// until nothing more can be merged.
///
/// Input may mix resolutions. Cells are merged from the finest resolution
/// up; parents produced by one round join the input cells already at the
/// parent resolution for the next. Fails with [`H3Error::DuplicateInput`]
/// if a cell is repeated or a merged parent was itself part of the input.
/// Output order is unspecified.
pub fn compact_cells(cells: &[H3Index]) -> Result<Vec<H3Index>, H3Error> {
  let mut by_res: BTreeMap<i32, Vec<H3Index>> = BTreeMap::new();
  let mut seen = HashSet::with_capacity(cells.len());
  for &cell in cells {
    if !is_valid_cell(cell) {
      return Err(H3Error::CellInvalid);
    }
    if !seen.insert(cell) {
      return Err(H3Error::DuplicateInput);
    }
    by_res.entry(cell.resolution()).or_default().push(cell);
  }
  let Some(&finest) = by_res.keys().next_back() else {
    return Ok(Vec::new());
  };

  let mut out = Vec::new();
  let mut remaining: Vec<H3Index> = Vec::new();
  for res in (1..=finest).rev() {
    remaining.extend(by_res.remove(&res).unwrap_or_default());
    if remaining.is_empty() {
      continue;
    }
    let mut siblings: HashMap<H3Index, usize> = HashMap::with_capacity(remaining.len() / 6 + 1);
    for &cell in &remaining {
      *siblings.entry(cell_to_parent(cell, res - 1)?).or_default() += 1;
    }

    let complete = |parent: &H3Index| {
      let needed = if is_pentagon(*parent) { 6 } else { 7 };
      siblings.get(parent).is_some_and(|&n| n == needed)
    };

    for &cell in &remaining {
      if !complete(&cell_to_parent(cell, res - 1)?) {
        out.push(cell);
      }
    }
    let parents: Vec<H3Index> = siblings.keys().copied().filter(|p| complete(p)).collect();
    if parents.iter().any(|p| seen.contains(p)) {
      return Err(H3Error::DuplicateInput);
    }

    debug!(res, input = remaining.len(), merged = parents.len(), "compaction round");
    remaining = parents;
  }
  out.extend(remaining);
  out.extend(by_res.remove(&0).unwrap_or_default());
  Ok(out)
}

/// Expands each cell to its descendants at `res`. Cells already at `res`
/// are kept as they are.
pub fn uncompact_cells(cells: &[H3Index], res: i32) -> Result<Vec<H3Index>, H3Error> {
  if !(0..=MAX_H3_RES).contains(&res) {
    return Err(H3Error::ResDomain);
  }
  let mut out = Vec::with_capacity(cells.len());
  for &cell in cells {
    if !is_valid_cell(cell) {
      return Err(H3Error::CellInvalid);
    }
    if cell.resolution() > res {
      return Err(H3Error::ResDomain);
    }
    out.extend(cell_to_children(cell, res)?);
  }
  Ok(out)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::{Direction, H3_NULL};

  fn sorted(mut v: Vec<H3Index>) -> Vec<H3Index> {
    v.sort_unstable();
    v
  }

  #[test]
  fn complete_children_compact_to_parent() {
    let parent = H3Index(0x85283473fffffff);
    let children = cell_to_children(parent, 7).unwrap();
    assert_eq!(compact_cells(&children), Ok(vec![parent]));
  }

  #[test]
  fn partial_set_is_unchanged() {
    let parent = H3Index(0x85283473fffffff);
    let mut children = cell_to_children(parent, 6).unwrap();
    children.pop();
    assert_eq!(sorted(compact_cells(&children).unwrap()), sorted(children));
  }

  #[test]
  fn mixed_compaction_levels() {
    let parent = H3Index(0x85283473fffffff);
    let mut cells = cell_to_children(parent, 6).unwrap();
    let kept = cells.pop().unwrap();
    cells.extend(cell_to_children(kept, 7).unwrap().into_iter().take(3));
    let mut uniform = Vec::new();
    for c in &cells {
      uniform.extend(cell_to_children(*c, 7).unwrap());
    }
    let compacted = compact_cells(&uniform).unwrap();
    // six merged parents plus the three loose grandchildren
    assert_eq!(compacted.len(), 9);
    assert_eq!(sorted(uncompact_cells(&compacted, 7).unwrap()), sorted(uniform));
  }

  #[test]
  fn pentagon_children_compact() {
    let pent = H3Index::new_cell(0, 4, Direction::Center);
    let children = cell_to_children(pent, 2).unwrap();
    assert_eq!(compact_cells(&children), Ok(vec![pent]));
  }

  #[test]
  fn res0_cells_stay() {
    let cells = crate::h3_index::inspection::get_res0_cells();
    assert_eq!(sorted(compact_cells(&cells).unwrap()), cells);
  }

  #[test]
  fn compaction_errors() {
    let a = H3Index(0x85283473fffffff);
    let b = center_child(a);
    assert_eq!(compact_cells(&[a, a]), Err(H3Error::DuplicateInput));
    // a complete sibling set whose parent is also listed
    let mut overlapping = cell_to_children(a, 6).unwrap();
    overlapping.push(a);
    assert_eq!(compact_cells(&overlapping), Err(H3Error::DuplicateInput));
    assert_eq!(compact_cells(&[b, b, a]), Err(H3Error::DuplicateInput));
    assert_eq!(compact_cells(&[a, H3_NULL]), Err(H3Error::CellInvalid));
    assert_eq!(compact_cells(&[]), Ok(vec![]));
  }

  #[test]
  fn mixed_resolution_input() {
    let a = H3Index(0x85283473fffffff);
    let b = H3Index(0x85283477fffffff);
    let mut cells = cell_to_children(a, 6).unwrap();
    cells.push(b);
    assert_eq!(sorted(compact_cells(&cells).unwrap()), sorted(vec![a, b]));

    // merged res 6 parents join a res 6 input cell to complete `a`
    let mut children = cell_to_children(a, 6).unwrap();
    let direct = children.pop().unwrap();
    let mut cells = vec![direct];
    for c in &children {
      cells.extend(cell_to_children(*c, 8).unwrap());
    }
    assert_eq!(compact_cells(&cells), Ok(vec![a]));

    // an incomplete finer set stays below a coarser neighbor
    let partial: Vec<H3Index> = cell_to_children(a, 7).unwrap().into_iter().skip(1).collect();
    let mut cells = partial.clone();
    cells.push(b);
    let compacted = compact_cells(&cells).unwrap();
    assert!(compacted.contains(&b));
    assert!(!compacted.contains(&a));
    let mut restored = uncompact_cells(&compacted, 7).unwrap();
    restored.retain(|c| cell_to_parent(*c, 5).unwrap() == a);
    assert_eq!(sorted(restored), sorted(partial));
  }

  fn center_child(h: H3Index) -> H3Index {
    crate::hierarchy::cell_to_center_child(h, h.resolution() + 1).unwrap()
  }

  #[test]
  fn uncompact_errors() {
    let a = H3Index(0x85283473fffffff);
    assert_eq!(uncompact_cells(&[a], 4), Err(H3Error::ResDomain));
    assert_eq!(uncompact_cells(&[a], 16), Err(H3Error::ResDomain));
    assert_eq!(uncompact_cells(&[H3_NULL], 5), Err(H3Error::CellInvalid));
    assert_eq!(uncompact_cells(&[a], 5), Ok(vec![a]));
    assert_eq!(uncompact_cells(&[a], 6).unwrap().len(), 7);
  }
}
