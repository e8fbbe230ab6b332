// tests/hierarchy_tests.rs

use std::collections::HashSet;

use h3_core::*;

fn set(cells: &[H3Index]) -> HashSet<H3Index> {
  cells.iter().copied().collect()
}

#[test]
fn parents() {
  assert_eq!(cell_to_parent(H3Index(0x811d7ffffffffff), 0), Ok(H3Index(0x801dfffffffffff)));
  assert_eq!(cell_to_parent(H3Index(0x801dfffffffffff), 0), Ok(H3Index(0x801dfffffffffff)));
  assert_eq!(cell_to_parent(H3Index(0x8928308280fffff), 8), Ok(H3Index(0x8828308281fffff)));
  assert_eq!(cell_to_parent(H3Index(0x8928308280fffff), 7), Ok(H3Index(0x872830828ffffff)));
  assert_eq!(cell_to_parent(H3Index(0x8928342e20fffff), 3), Ok(H3Index(0x832834fffffffff)));
  assert_eq!(
    cell_to_parent(H3Index(0x8928308280fffff), 7).map(|p| p.to_string()),
    Ok("872830828ffffff".to_owned())
  );
}

#[test]
fn parent_domain_errors() {
  assert_eq!(cell_to_parent(H3_NULL, 5), Err(H3Error::ResDomain));
  assert_eq!(cell_to_parent(H3Index(0x8928308280fffff), -1), Err(H3Error::ResDomain));
  assert_eq!(cell_to_parent(H3Index(0x8928308280fffff), 17), Err(H3Error::ResDomain));
  assert_eq!(cell_to_parent(H3_NULL, 17), Err(H3Error::ResDomain));
}

#[test]
fn children() {
  let sf_children = cell_to_children("88283082803ffff".parse().unwrap(), 9).unwrap();
  let expected: Vec<H3Index> = [
    "8928308280fffff",
    "8928308280bffff",
    "8928308281bffff",
    "89283082813ffff",
    "89283082817ffff",
    "89283082807ffff",
    "89283082803ffff",
  ]
  .iter()
  .map(|s| s.parse().unwrap())
  .collect();
  assert_eq!(set(&sf_children), set(&expected));
  assert_eq!(sf_children.len(), 7);

  // five hexagons with 7 children each, plus the pentagon's 6
  let pentagon_children = cell_to_children(H3Index(0x801dfffffffffff), 2).unwrap();
  assert_eq!(pentagon_children.len(), 5 * 7 + 6);
  assert!(pentagon_children.iter().all(|&c| is_valid_cell(c)));

  assert!(cell_to_children(H3_NULL, 2).is_ok());
  let parent: H3Index = "88283082803ffff".parse().unwrap();
  assert_eq!(cell_to_children(parent, -1), Err(H3Error::ResDomain));
  assert_eq!(cell_to_children(parent, 17), Err(H3Error::ResDomain));
}

#[test]
fn center_child() {
  let parent = H3Index(0x85283473fffffff);
  assert_eq!(cell_to_center_child(parent, 7), Ok(H3Index(0x872834700ffffff)));
  assert_eq!(cell_to_center_child(parent, 5), Ok(parent));
  assert_eq!(cell_to_center_child(parent, 4), Err(H3Error::ResDomain));
}

#[test]
fn compact_disk() {
  let starting = lat_lng_degs_to_cell(30.0, 20.0, 6).unwrap();
  let expanded = grid_disk(starting, 8).unwrap();
  let compacted = compact_cells(&expanded).unwrap();
  assert_eq!(compacted.len(), 61);

  let uncompacted = uncompact_cells(&compacted, 6).unwrap();
  assert_eq!(uncompacted.len(), expanded.len());
  assert_eq!(set(&uncompacted), set(&expanded));
}

#[test]
fn compact_rejects_duplicates() {
  let starting = lat_lng_degs_to_cell(30.0, 20.0, 6).unwrap();
  let repeated = vec![starting; 9];
  assert_eq!(compact_cells(&repeated), Err(H3Error::DuplicateInput));
}

#[test]
fn compact_mixed_resolutions() {
  let a = H3Index(0x85283473fffffff);
  let b = H3Index(0x85283477fffffff);
  let mut cells = cell_to_children(a, 6).unwrap();
  cells.push(b);
  assert_eq!(set(&compact_cells(&cells).unwrap()), set(&[a, b]));

  // res 7 and res 6 input meeting at one res 5 parent
  let mut cells = cell_to_children(a, 7).unwrap();
  cells.retain(|c| cell_to_parent(*c, 6).unwrap() != cell_to_center_child(a, 6).unwrap());
  cells.push(cell_to_center_child(a, 6).unwrap());
  cells.push(b);
  assert_eq!(set(&compact_cells(&cells).unwrap()), set(&[a, b]));

  let mut overlapping = cell_to_children(a, 6).unwrap();
  overlapping.push(a);
  assert_eq!(compact_cells(&overlapping), Err(H3Error::DuplicateInput));
}

#[test]
fn compact_rejects_invalid_input() {
  let a = H3Index(0x8928308280fffff);
  assert_eq!(compact_cells(&[a, H3_NULL]), Err(H3Error::CellInvalid));
  assert_eq!(compact_cells(&[]), Ok(Vec::new()));
}

#[test]
fn uncompact_pentagon() {
  let cells = uncompact_cells(&["821c07fffffffff".parse().unwrap()], 3).unwrap();
  assert_eq!(cells.len(), 6);
  assert!(cells.iter().all(|&c| get_resolution(c) == 3));
}

#[test]
fn uncompact_errors() {
  assert_eq!(uncompact_cells(&["0".parse().unwrap()], 3), Err(H3Error::CellInvalid));
  let fine = H3Index(0x8928308280fffff);
  assert_eq!(uncompact_cells(&[fine], 8), Err(H3Error::ResDomain));
  assert_eq!(uncompact_cells(&[fine], 16), Err(H3Error::ResDomain));
  assert_eq!(uncompact_cells(&[fine], 9), Ok(vec![fine]));
}

#[test]
fn compaction_round_trips_around_pentagon() {
  let pentagon = H3Index(0x821c07fffffffff);
  let children = cell_to_children(pentagon, 4).unwrap();
  assert_eq!(compact_cells(&children), Ok(vec![pentagon]));
}
