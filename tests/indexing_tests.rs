// tests/indexing_tests.rs

use h3_core::*;

const EPSILON_DEG: f64 = 1e-6;
const KNOWN: H3Index = H3Index(22758474429497343 | (1 << 59));

#[test]
fn encode_known_coordinate() {
  assert_eq!(lat_lng_degs_to_cell(67.194013596, 191.598258018, 5), Ok(KNOWN));
  assert_eq!(format!("{KNOWN}"), "850dab63fffffff");
}

#[test]
fn decode_known_cell() {
  let center = cell_to_lat_lng(KNOWN);
  assert!((center.lat_degrees() - 67.15092686397713).abs() < EPSILON_DEG);
  assert!((center.lng_degrees() - (191.6091114190303 - 360.0)).abs() < EPSILON_DEG);

  let parsed: H3Index = "850dab63fffffff".parse().unwrap();
  assert_eq!(cell_to_lat_lng(parsed), center);
}

#[test]
fn boundary_of_known_cell() {
  let expected = [
    (67.224749856, 191.476993415 - 360.0),
    (67.140938355, 191.373085667 - 360.0),
    (67.067252558, 191.505086715 - 360.0),
    (67.077062918, 191.740304069 - 360.0),
    (67.160561948, 191.845198829 - 360.0),
    (67.234563187, 191.713897218 - 360.0),
  ];
  let boundary = cell_to_boundary(KNOWN);
  assert_eq!(boundary.len(), expected.len());
  for (v, (lat, lng)) in boundary.iter().zip(expected) {
    assert!((v.lat_degrees() - lat).abs() < EPSILON_DEG, "{} vs {lat}", v.lat_degrees());
    assert!((v.lng_degrees() - lng).abs() < EPSILON_DEG, "{} vs {lng}", v.lng_degrees());
  }
}

#[test]
fn validity() {
  assert!(is_valid_cell(KNOWN));
  assert!(!is_valid_cell(H3Index(u64::MAX)));
  assert!(!is_valid_cell(H3_NULL));
  assert!(is_valid_cell("8f28308280f18f2".parse().unwrap()));
}

#[test]
fn resolutions_and_base_cells() {
  assert_eq!(get_resolution(H3Index(0x8029fffffffffff)), 0);
  assert_eq!(get_resolution(H3Index(0x8f28308280f18f2)), 15);
  assert_eq!(get_resolution(H3Index(0x8e28308280f18f7)), 14);
  assert_eq!(get_resolution("8928308280fffff".parse().unwrap()), 9);
  // malformed input is read positionally
  assert_eq!(get_resolution(H3_NULL), 0);
  assert_eq!(get_resolution(H3Index(u64::MAX)), 15);

  assert_eq!(get_base_cell_number(H3Index(0x8f28308280f18f2)), 20);
  assert_eq!(get_base_cell_number(H3Index(0x821c07fffffffff)), 14);
  assert_eq!(get_base_cell_number(H3Index(0x85283473fffffff)), 20);
}

#[test]
fn pentagons_and_classes() {
  assert!(!is_pentagon(H3Index(0x8f28308280f18f2)));
  assert!(is_pentagon(H3Index(0x821c07fffffffff)));
  assert!(is_pentagon(H3Index(0x8009fffffffffff)));

  assert!(is_res_class_iii(H3Index(0x85283473fffffff)));
  assert!(!is_res_class_iii(H3Index(0x8428347ffffffff)));
  for res in 0..=MAX_H3_RES {
    let cell = lat_lng_degs_to_cell(10.0, 10.0, res).unwrap();
    assert_eq!(is_res_class_iii(cell), res % 2 == 1);
  }
}

#[test]
fn hostile_input() {
  assert_eq!(lat_lng_to_cell(&LatLng::new(f64::NAN, 0.0), 5), Err(H3Error::LatLngDomain));
  assert_eq!(lat_lng_to_cell(&LatLng::new(0.0, f64::NAN), 5), Err(H3Error::LatLngDomain));
  assert_eq!(
    lat_lng_to_cell(&LatLng::new(f64::INFINITY, f64::INFINITY), 5),
    Err(H3Error::LatLngDomain)
  );
  assert_eq!(
    lat_lng_to_cell(&LatLng::new(f64::NEG_INFINITY, f64::NEG_INFINITY), 5),
    Err(H3Error::LatLngDomain)
  );
  assert_eq!(lat_lng_degs_to_cell(0.0, 0.0, -1), Err(H3Error::ResDomain));
  assert_eq!(lat_lng_degs_to_cell(0.0, 0.0, 1000), Err(H3Error::ResDomain));

  for (lat, lng) in [(987654321.0, -987654321.0), (-987654321.0, 987654321.0), (1e45, 1e45)] {
    let cell = lat_lng_degs_to_cell(lat, lng, 5).unwrap();
    assert_ne!(cell, H3_NULL);
    assert!(is_valid_cell(cell));
  }
}

#[test]
fn res0_cells_and_pentagons() {
  let res0 = get_res0_cells();
  assert_eq!(res0.len(), 122);
  assert_eq!(res0.iter().filter(|&&c| is_pentagon(c)).count(), 12);
  for res in [0, 5, 15] {
    let pentagons = get_pentagons(res).unwrap();
    assert_eq!(pentagons.len(), 12);
    assert!(pentagons.iter().all(|&p| is_pentagon(p) && get_resolution(p) == res));
  }
  assert_eq!(get_pentagons(16), Err(H3Error::ResDomain));
}

#[test]
fn text_form() {
  let h = H3Index(0x85283473fffffff);
  assert_eq!(h.to_string(), "85283473fffffff");
  assert_eq!(format!("{h:x}"), "85283473fffffff");
  assert_eq!("85283473fffffff".parse::<H3Index>(), Ok(h));
  assert_eq!("0x85283473fffffff".parse::<H3Index>(), Ok(h));
  assert_eq!("599686042433355775".parse::<u64>().map(H3Index), Ok(h));
  assert_eq!("zz".parse::<H3Index>(), Err(H3Error::CellInvalid));
  assert_eq!("".parse::<H3Index>(), Err(H3Error::CellInvalid));
  assert_eq!("85283473fffffff00".parse::<H3Index>(), Err(H3Error::CellInvalid));
}

#[test]
fn center_round_trips_at_every_resolution() {
  let p = LatLng::from_degrees(37.3615593, -122.0553238);
  for res in 0..=MAX_H3_RES {
    let cell = lat_lng_to_cell(&p, res).unwrap();
    let center = cell_to_lat_lng(cell);
    assert_eq!(lat_lng_to_cell(&center, res), Ok(cell), "res {res}");
  }
}
