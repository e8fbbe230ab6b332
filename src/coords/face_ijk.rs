//! Icosahedron face projection.
//!
//! Each of the 20 faces carries its own gnomonic projection and IJK frame.
//! Coordinates that fall past a face edge ("overage") are re-expressed on
//! the neighboring face using [`FACE_NEIGHBORS`].

use crate::constants::{
  EPSILON, INV_RES0_U_GNOMONIC, M_AP7_ROT_RADS, M_ONETHIRD, M_RSQRT7, M_SQRT3_2, M_SQRT7, NUM_HEX_VERTS,
  NUM_ICOSA_FACES, NUM_PENT_VERTS, RES0_U_GNOMONIC,
};
use crate::coords::res_is_class_iii;
use crate::math::vec2d::intersect;
use crate::math::{geo_az_distance_rads, geo_azimuth_rads, pos_angle_rads};
use crate::types::{CellBoundary, CoordIJK, FaceIJK, LatLng, Vec2d, Vec3d};

/// Quadrant indexes into [`FACE_NEIGHBORS`].
pub(crate) const IJ_QUADRANT: usize = 1;
pub(crate) const KI_QUADRANT: usize = 2;
pub(crate) const JK_QUADRANT: usize = 3;

/// Largest coordinate sum on a face, by Class II resolution (16 covers the
/// substrate of Class III resolution 15).
#[rustfmt::skip]
const MAX_DIM_BY_CII_RES: [i64; 17] = [
  2, -1, 14, -1, 98, -1, 686, -1, 4802, -1, 33614, -1, 235_298, -1, 1_647_086, -1, 11_529_602,
];

/// Resolution 0 unit length in cells, by Class II resolution.
#[rustfmt::skip]
const UNIT_SCALE_BY_CII_RES: [i32; 17] = [
  1, -1, 7, -1, 49, -1, 343, -1, 2401, -1, 16807, -1, 117_649, -1, 823_543, -1, 5_764_801,
];

/// Face centers, in radians.
#[rustfmt::skip]
pub(crate) const FACE_CENTER_GEO: [LatLng; NUM_ICOSA_FACES] = [
  LatLng::new(0.803_582_649_718_989_94, 1.248_397_419_617_396),
  LatLng::new(1.307_747_883_455_638_2, 2.536_945_009_877_921),
  LatLng::new(1.054_751_253_523_952, -1.347_517_358_900_396_6),
  LatLng::new(0.600_191_595_538_186_8, -0.450_603_909_469_755_75),
  LatLng::new(0.491_715_428_198_773_87, 0.401_988_202_911_306_94),
  LatLng::new(0.172_745_327_415_618_7, 1.678_146_885_280_433_7),
  LatLng::new(0.605_929_321_571_350_7, 2.953_923_329_812_411_6),
  LatLng::new(0.427_370_518_328_979_64, -1.888_876_200_336_285_4),
  LatLng::new(-0.079_066_118_549_212_83, -0.733_429_513_380_867_74),
  LatLng::new(-0.230_961_644_455_383_64, 0.506_495_587_332_349),
  LatLng::new(0.079_066_118_549_212_83, 2.408_163_140_208_925_5),
  LatLng::new(0.230_961_644_455_383_64, -2.635_097_066_257_444),
  LatLng::new(-0.172_745_327_415_618_7, -1.463_445_768_309_359_5),
  LatLng::new(-0.605_929_321_571_350_7, -0.187_669_323_777_381_62),
  LatLng::new(-0.427_370_518_328_979_64, 1.252_716_453_253_508),
  LatLng::new(-0.600_191_595_538_186_8, 2.690_988_744_120_037_5),
  LatLng::new(-0.491_715_428_198_773_87, -2.739_604_450_678_486_3),
  LatLng::new(-0.803_582_649_718_989_94, -1.893_195_233_972_397),
  LatLng::new(-1.307_747_883_455_638_2, -0.604_647_643_711_872_1),
  LatLng::new(-1.054_751_253_523_952, 1.794_075_294_689_396_6),
];

/// Face centers on the unit sphere.
#[rustfmt::skip]
const FACE_CENTER_POINT: [Vec3d; NUM_ICOSA_FACES] = [
  Vec3d { x: 0.219_930_779_140_460_6, y: 0.658_369_178_027_499_6, z: 0.719_847_537_892_618_2 },
  Vec3d { x: -0.213_923_483_450_142_1, y: 0.147_817_182_955_070_3, z: 0.965_601_793_521_420_5 },
  Vec3d { x: 0.109_262_527_878_479_7, y: -0.481_195_157_287_321, z: 0.869_777_512_128_725_3 },
  Vec3d { x: 0.742_856_730_158_679_1, y: -0.359_394_167_827_802_8, z: 0.564_800_593_651_703_3 },
  Vec3d { x: 0.811_253_470_914_096_9, y: 0.344_895_323_763_938_4, z: 0.472_138_773_641_393 },
  Vec3d { x: -0.105_549_814_961_392_1, y: 0.979_445_729_641_141_3, z: 0.171_887_461_000_936_5 },
  Vec3d { x: -0.807_540_757_997_009_2, y: 0.153_355_248_589_881_8, z: 0.569_526_199_488_268_8 },
  Vec3d { x: -0.284_614_806_978_790_7, y: -0.864_408_097_265_420_6, z: 0.414_479_255_247_354 },
  Vec3d { x: 0.740_562_147_385_448_2, y: -0.667_329_956_456_552_4, z: -0.078_983_764_632_673_77 },
  Vec3d { x: 0.851_230_398_647_429_3, y: 0.472_234_378_858_268_1, z: -0.228_913_738_868_780_8 },
  Vec3d { x: -0.740_562_147_385_448_1, y: 0.667_329_956_456_552_4, z: 0.078_983_764_632_673_77 },
  Vec3d { x: -0.851_230_398_647_429_2, y: -0.472_234_378_858_268_2, z: 0.228_913_738_868_780_8 },
  Vec3d { x: 0.105_549_814_961_391_9, y: -0.979_445_729_641_141_3, z: -0.171_887_461_000_936_5 },
  Vec3d { x: 0.807_540_757_997_009_2, y: -0.153_355_248_589_881_9, z: -0.569_526_199_488_268_8 },
  Vec3d { x: 0.284_614_806_978_790_8, y: 0.864_408_097_265_420_4, z: -0.414_479_255_247_354 },
  Vec3d { x: -0.742_856_730_158_679_1, y: 0.359_394_167_827_802_7, z: -0.564_800_593_651_703_3 },
  Vec3d { x: -0.811_253_470_914_097_1, y: -0.344_895_323_763_938_2, z: -0.472_138_773_641_393 },
  Vec3d { x: -0.219_930_779_140_460_7, y: -0.658_369_178_027_499_6, z: -0.719_847_537_892_618_2 },
  Vec3d { x: 0.213_923_483_450_142, y: -0.147_817_182_955_070_4, z: -0.965_601_793_521_420_5 },
  Vec3d { x: -0.109_262_527_878_479_6, y: 0.481_195_157_287_321, z: -0.869_777_512_128_725_3 },
];

/// Azimuth from each face center to its vertices 0, 1 and 2; the i, j and k axes.
#[rustfmt::skip]
const FACE_AXES_AZ_RADS_CII: [[f64; 3]; NUM_ICOSA_FACES] = [
  [5.619_958_268_523_94, 3.525_563_166_130_744_5, 1.431_168_063_737_548_7],
  [5.760_339_081_714_187, 3.665_943_979_320_991_7, 1.571_548_876_927_796],
  [0.780_213_654_393_430_1, 4.969_003_859_179_821, 2.874_608_756_786_625_7],
  [0.430_469_363_979_999_9, 4.619_259_568_766_391, 2.524_864_466_373_195_5],
  [6.130_269_123_335_111, 4.035_874_020_941_916, 1.941_478_918_548_720_3],
  [2.692_877_706_530_643, 0.598_482_604_137_447_1, 4.787_272_808_923_838],
  [2.982_963_003_477_244, 0.888_567_901_084_048_4, 5.077_358_105_870_44],
  [3.532_912_002_790_141, 1.438_516_900_396_945_7, 5.627_307_105_183_337],
  [3.494_305_004_259_568, 1.399_909_901_866_372_9, 5.588_700_106_652_764],
  [3.003_214_169_499_538_4, 0.908_819_067_106_342_9, 5.097_609_271_892_734],
  [5.930_472_956_509_811_6, 3.836_077_854_116_616, 1.741_682_751_723_420_4],
  [0.138_378_484_090_254_85, 4.327_168_688_876_646, 2.232_773_586_483_45],
  [0.448_714_947_059_150_36, 4.637_505_151_845_541_5, 2.543_110_049_452_346],
  [0.158_629_650_112_549_36, 4.347_419_854_898_94, 2.253_024_752_505_745],
  [5.891_865_957_979_238_5, 3.797_470_855_586_043, 1.703_075_753_192_847_6],
  [2.711_123_289_609_793_3, 0.616_728_187_216_597_8, 4.805_518_392_002_988_7],
  [3.294_508_837_434_268, 1.200_113_735_041_073, 5.388_903_939_827_464],
  [3.804_819_692_245_44, 1.710_424_589_852_244_5, 5.899_214_794_638_635],
  [3.664_438_879_055_192_4, 1.570_043_776_661_997, 5.758_833_981_448_388],
  [2.361_378_999_196_363, 0.266_983_896_803_167_6, 4.455_774_101_589_558_6],
];

/// How to move from one face's IJK frame into a neighbor's.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FaceOrientIJK {
  pub face: usize,
  /// Resolution 0 translation relative to the primary face.
  pub translate: CoordIJK,
  /// Number of 60 degree ccw rotations relative to the primary face.
  pub ccw_rot60: u8,
}

const fn orient(face: usize, i: i32, j: i32, k: i32, ccw_rot60: u8) -> FaceOrientIJK {
  FaceOrientIJK {
    face,
    translate: CoordIJK::new(i, j, k),
    ccw_rot60,
  }
}

/// Per face: itself, then its IJ, KI and JK quadrant neighbors.
#[rustfmt::skip]
pub(crate) const FACE_NEIGHBORS: [[FaceOrientIJK; 4]; NUM_ICOSA_FACES] = [
  [orient(0, 0, 0, 0, 0),  orient(4, 2, 0, 2, 1),  orient(1, 2, 2, 0, 5),  orient(5, 0, 2, 2, 3)],
  [orient(1, 0, 0, 0, 0),  orient(0, 2, 0, 2, 1),  orient(2, 2, 2, 0, 5),  orient(6, 0, 2, 2, 3)],
  [orient(2, 0, 0, 0, 0),  orient(1, 2, 0, 2, 1),  orient(3, 2, 2, 0, 5),  orient(7, 0, 2, 2, 3)],
  [orient(3, 0, 0, 0, 0),  orient(2, 2, 0, 2, 1),  orient(4, 2, 2, 0, 5),  orient(8, 0, 2, 2, 3)],
  [orient(4, 0, 0, 0, 0),  orient(3, 2, 0, 2, 1),  orient(0, 2, 2, 0, 5),  orient(9, 0, 2, 2, 3)],
  [orient(5, 0, 0, 0, 0),  orient(10, 2, 2, 0, 3), orient(14, 2, 0, 2, 3), orient(0, 0, 2, 2, 3)],
  [orient(6, 0, 0, 0, 0),  orient(11, 2, 2, 0, 3), orient(10, 2, 0, 2, 3), orient(1, 0, 2, 2, 3)],
  [orient(7, 0, 0, 0, 0),  orient(12, 2, 2, 0, 3), orient(11, 2, 0, 2, 3), orient(2, 0, 2, 2, 3)],
  [orient(8, 0, 0, 0, 0),  orient(13, 2, 2, 0, 3), orient(12, 2, 0, 2, 3), orient(3, 0, 2, 2, 3)],
  [orient(9, 0, 0, 0, 0),  orient(14, 2, 2, 0, 3), orient(13, 2, 0, 2, 3), orient(4, 0, 2, 2, 3)],
  [orient(10, 0, 0, 0, 0), orient(5, 2, 2, 0, 3),  orient(6, 2, 0, 2, 3),  orient(15, 0, 2, 2, 3)],
  [orient(11, 0, 0, 0, 0), orient(6, 2, 2, 0, 3),  orient(7, 2, 0, 2, 3),  orient(16, 0, 2, 2, 3)],
  [orient(12, 0, 0, 0, 0), orient(7, 2, 2, 0, 3),  orient(8, 2, 0, 2, 3),  orient(17, 0, 2, 2, 3)],
  [orient(13, 0, 0, 0, 0), orient(8, 2, 2, 0, 3),  orient(9, 2, 0, 2, 3),  orient(18, 0, 2, 2, 3)],
  [orient(14, 0, 0, 0, 0), orient(9, 2, 2, 0, 3),  orient(5, 2, 0, 2, 3),  orient(19, 0, 2, 2, 3)],
  [orient(15, 0, 0, 0, 0), orient(16, 2, 0, 2, 1), orient(19, 2, 2, 0, 5), orient(10, 0, 2, 2, 3)],
  [orient(16, 0, 0, 0, 0), orient(17, 2, 0, 2, 1), orient(15, 2, 2, 0, 5), orient(11, 0, 2, 2, 3)],
  [orient(17, 0, 0, 0, 0), orient(18, 2, 0, 2, 1), orient(16, 2, 2, 0, 5), orient(12, 0, 2, 2, 3)],
  [orient(18, 0, 0, 0, 0), orient(19, 2, 0, 2, 1), orient(17, 2, 2, 0, 5), orient(13, 0, 2, 2, 3)],
  [orient(19, 0, 0, 0, 0), orient(15, 2, 0, 2, 1), orient(18, 2, 2, 0, 5), orient(14, 0, 2, 2, 3)],
];

/// Quadrant of `from` that borders `to`, 0 when they are the same face and
/// `None` when they do not touch.
#[inline]
#[must_use]
pub(crate) fn adjacent_face_dir(from: usize, to: usize) -> Option<usize> {
  FACE_NEIGHBORS[from].iter().position(|o| o.face == to)
}

/// Where a coordinate ended up after overage adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Overage {
  /// Still on the original face.
  None,
  /// On a face edge. Only happens on substrate grids.
  FaceEdge,
  /// Moved into the interior of a new face.
  NewFace,
}

/// The face whose center is closest to `g`, and the squared distance to it.
#[must_use]
pub(crate) fn geo_to_closest_face(g: &LatLng) -> (usize, f64) {
  let v = Vec3d::from_lat_lng(g);
  let mut best = (0, 5.0);
  for (f, center) in FACE_CENTER_POINT.iter().enumerate() {
    let sqd = center.square_dist(&v);
    if sqd < best.1 {
      best = (f, sqd);
    }
  }
  best
}

/// Projects `g` onto its closest face plane at `res`.
#[must_use]
pub(crate) fn geo_to_hex2d(g: &LatLng, res: i32) -> (usize, Vec2d) {
  let (face, sqd) = geo_to_closest_face(g);

  // cos(r) = 1 - 2 * sin^2(r/2) = 1 - 2 * (sqd / 4) = 1 - sqd/2
  let r = (1.0 - sqd / 2.0).clamp(-1.0, 1.0).acos();
  if r < EPSILON {
    return (face, Vec2d::default());
  }

  let az = pos_angle_rads(geo_azimuth_rads(&FACE_CENTER_GEO[face], g));
  let mut theta = pos_angle_rads(FACE_AXES_AZ_RADS_CII[face][0] - az);
  if res_is_class_iii(res) {
    theta = pos_angle_rads(theta - M_AP7_ROT_RADS);
  }

  let r = (0..res).fold(r.tan() * INV_RES0_U_GNOMONIC, |acc, _| acc * M_SQRT7);
  (face, Vec2d::new(r * theta.cos(), r * theta.sin()))
}

/// Inverse gnomonic projection of a face plane point.
///
/// `substrate` selects the aperture 3 vertex grid, whose unit is a third of
/// the cell grid's (Class III substrates are also unrotated, hence the
/// extra 1/sqrt(7)).
#[must_use]
pub(crate) fn hex2d_to_geo(v: &Vec2d, face: usize, res: i32, substrate: bool) -> LatLng {
  let mut r = v.mag();
  if r < EPSILON {
    return FACE_CENTER_GEO[face];
  }

  let mut theta = v.y.atan2(v.x);

  r = (0..res).fold(r, |acc, _| acc * M_RSQRT7);
  if substrate {
    r *= M_ONETHIRD;
    if res_is_class_iii(res) {
      r *= M_RSQRT7;
    }
  }
  r = (r * RES0_U_GNOMONIC).atan();

  if !substrate && res_is_class_iii(res) {
    theta = pos_angle_rads(theta + M_AP7_ROT_RADS);
  }
  theta = pos_angle_rads(FACE_AXES_AZ_RADS_CII[face][0] - theta);

  geo_az_distance_rads(&FACE_CENTER_GEO[face], theta, r)
}

/// Substrate vertex offsets of a cell centered at the origin.
#[rustfmt::skip]
const VERTS_CII: [CoordIJK; NUM_HEX_VERTS] = [
  CoordIJK::new(2, 1, 0), CoordIJK::new(1, 2, 0), CoordIJK::new(0, 2, 1),
  CoordIJK::new(0, 1, 2), CoordIJK::new(1, 0, 2), CoordIJK::new(2, 0, 1),
];
#[rustfmt::skip]
const VERTS_CIII: [CoordIJK; NUM_HEX_VERTS] = [
  CoordIJK::new(5, 4, 0), CoordIJK::new(1, 5, 0), CoordIJK::new(0, 5, 4),
  CoordIJK::new(0, 1, 5), CoordIJK::new(4, 0, 5), CoordIJK::new(5, 0, 1),
];

/// Endpoints of the face edge crossed when moving from the center face
/// towards the neighbor in `quadrant`, on the substrate grid of `adj_res`.
fn face_edge(quadrant: Option<usize>, adj_res: i32) -> (Vec2d, Vec2d) {
  let max_dim = MAX_DIM_BY_CII_RES[adj_res as usize] as f64;
  let v0 = Vec2d::new(3.0 * max_dim, 0.0);
  let v1 = Vec2d::new(-1.5 * max_dim, 3.0 * M_SQRT3_2 * max_dim);
  let v2 = Vec2d::new(-1.5 * max_dim, -3.0 * M_SQRT3_2 * max_dim);
  match quadrant {
    Some(IJ_QUADRANT) => (v0, v1),
    Some(JK_QUADRANT) => (v1, v2),
    _ => (v2, v0),
  }
}

impl FaceIJK {
  #[inline]
  #[must_use]
  pub(crate) const fn new(face: usize, coord: CoordIJK) -> Self {
    Self { face, coord }
  }

  /// Cell containing `g` at `res`, on the closest face.
  #[must_use]
  pub(crate) fn from_geo(g: &LatLng, res: i32) -> Self {
    let (face, v) = geo_to_hex2d(g, res);
    FaceIJK::new(face, v.to_coord_ijk())
  }

  /// Center point of the cell.
  #[must_use]
  pub(crate) fn to_geo(&self, res: i32) -> LatLng {
    hex2d_to_geo(&self.coord.to_hex2d(), self.face, res, false)
  }

  /// Moves the coordinate onto the neighboring face if it lies past the
  /// edge of its own.
  ///
  /// # Arguments
  /// * `res` - Class II resolution of the grid the coordinate lives on.
  /// * `pent_leading_4` - The cell is a pentagon whose leading digit is 4.
  /// * `substrate` - The coordinate is on the aperture 3 vertex grid.
  pub(crate) fn adjust_overage_class_ii(&mut self, res: i32, pent_leading_4: bool, substrate: bool) -> Overage {
    let mut max_dim = MAX_DIM_BY_CII_RES[res as usize];
    if substrate {
      max_dim *= 3;
    }

    let sum = |c: &CoordIJK| i64::from(c.i) + i64::from(c.j) + i64::from(c.k);
    let ijk = &mut self.coord;
    if substrate && sum(ijk) == max_dim {
      return Overage::FaceEdge;
    }
    if sum(ijk) <= max_dim {
      return Overage::None;
    }

    let quadrant = if ijk.k > 0 {
      if ijk.j > 0 {
        JK_QUADRANT
      } else {
        if pent_leading_4 {
          // rotate about the pentagon center to skip the missing sequence
          let origin = CoordIJK::new(max_dim as i32, 0, 0);
          let mut tmp = *ijk - origin;
          tmp.rotate60_cw();
          *ijk = tmp + origin;
        }
        KI_QUADRANT
      }
    } else {
      IJ_QUADRANT
    };

    let orient = FACE_NEIGHBORS[self.face][quadrant];
    self.face = orient.face;
    for _ in 0..orient.ccw_rot60 {
      ijk.rotate60_ccw();
    }

    let mut unit_scale = UNIT_SCALE_BY_CII_RES[res as usize];
    if substrate {
      unit_scale *= 3;
    }
    *ijk = (*ijk + orient.translate.scaled(unit_scale)).normalized();

    // overage points on pentagon boundaries can end up on edges
    if substrate && sum(ijk) == max_dim {
      Overage::FaceEdge
    } else {
      Overage::NewFace
    }
  }

  /// Repeats the substrate adjustment until a pentagon vertex stops moving
  /// faces.
  pub(crate) fn adjust_pent_vert_overage(&mut self, res: i32) -> Overage {
    loop {
      let overage = self.adjust_overage_class_ii(res, false, true);
      if overage != Overage::NewFace {
        return overage;
      }
    }
  }

  /// Substrate coordinates of the cell vertices, plus the Class II
  /// resolution of that substrate.
  fn to_verts(&self, res: i32) -> ([FaceIJK; NUM_HEX_VERTS], i32) {
    let verts = if res_is_class_iii(res) { &VERTS_CIII } else { &VERTS_CII };

    // aperture 3 then 3r puts the vertices on a Class II grid
    let mut center = self.coord;
    center.down_ap3();
    center.down_ap3r();
    let mut adj_res = res;
    if res_is_class_iii(res) {
      center.down_ap7r();
      adj_res += 1;
    }

    let mut out = [FaceIJK::default(); NUM_HEX_VERTS];
    for (slot, offset) in out.iter_mut().zip(verts) {
      *slot = FaceIJK::new(self.face, (center + *offset).normalized());
    }
    (out, adj_res)
  }

  /// Boundary vertices `start..start + length` of a hexagon, with edge
  /// crossing vertices inserted on Class III resolutions.
  #[must_use]
  pub(crate) fn to_cell_boundary(&self, res: i32, start: usize, length: usize) -> CellBoundary {
    let (verts, adj_res) = self.to_verts(res);
    let mut boundary = CellBoundary::new();

    // one more pass for the full loop catches a crossing on the last edge
    let extra = usize::from(length == NUM_HEX_VERTS);
    let mut last_face = None;
    let mut last_overage = Overage::None;
    for vert in start..start + length + extra {
      let v = vert % NUM_HEX_VERTS;
      let mut fijk = verts[v];
      let overage = fijk.adjust_overage_class_ii(adj_res, false, true);

      // A Class III edge crossing an icosahedron edge needs an extra vertex
      // at the crossing so each half projects on its own face.
      if res_is_class_iii(res) && vert > start && last_face != Some(fijk.face) && last_overage != Overage::FaceEdge {
        let last_v = (v + 5) % NUM_HEX_VERTS;
        let orig0 = verts[last_v].coord.to_hex2d();
        let orig1 = verts[v].coord.to_hex2d();

        let face2 = match last_face {
          Some(f) if f != self.face => f,
          _ => fijk.face,
        };
        let (edge0, edge1) = face_edge(adjacent_face_dir(self.face, face2), adj_res);
        let inter = intersect(&orig0, &orig1, &edge0, &edge1);

        // no extra vertex if the crossing is at a cell vertex
        if !orig0.almost_equals(&inter) && !orig1.almost_equals(&inter) {
          boundary.push(hex2d_to_geo(&inter, self.face, adj_res, true));
        }
      }

      if vert < start + NUM_HEX_VERTS {
        boundary.push(hex2d_to_geo(&fijk.coord.to_hex2d(), fijk.face, adj_res, true));
      }
      last_face = Some(fijk.face);
      last_overage = overage;
    }
    boundary
  }

  /// Boundary vertices `start..start + length` of a pentagon. Every Class III
  /// pentagon edge crosses an icosahedron edge.
  #[must_use]
  pub(crate) fn pent_to_cell_boundary(&self, res: i32, start: usize, length: usize) -> CellBoundary {
    let (hex_verts, adj_res) = self.to_verts(res);
    let verts = &hex_verts[..NUM_PENT_VERTS];
    let mut boundary = CellBoundary::new();

    let extra = usize::from(length == NUM_PENT_VERTS);
    let mut last = FaceIJK::default();
    for vert in start..start + length + extra {
      let v = vert % NUM_PENT_VERTS;
      let mut fijk = verts[v];
      fijk.adjust_pent_vert_overage(adj_res);

      if res_is_class_iii(res) && vert > start {
        let orig0 = last.coord.to_hex2d();

        // the current vertex expressed in the last vertex's face frame
        let dir = adjacent_face_dir(fijk.face, last.face).unwrap_or(0);
        let orient = FACE_NEIGHBORS[fijk.face][dir];
        let mut tmp = FaceIJK::new(orient.face, fijk.coord);
        for _ in 0..orient.ccw_rot60 {
          tmp.coord.rotate60_ccw();
        }
        let scale = UNIT_SCALE_BY_CII_RES[adj_res as usize] * 3;
        tmp.coord = (tmp.coord + orient.translate.scaled(scale)).normalized();
        let orig1 = tmp.coord.to_hex2d();

        let (edge0, edge1) = face_edge(adjacent_face_dir(tmp.face, fijk.face), adj_res);
        let inter = intersect(&orig0, &orig1, &edge0, &edge1);
        boundary.push(hex2d_to_geo(&inter, tmp.face, adj_res, true));
      }

      if vert < start + NUM_PENT_VERTS {
        boundary.push(hex2d_to_geo(&fijk.coord.to_hex2d(), fijk.face, adj_res, true));
      }
      last = fijk;
    }
    boundary
  }
}
