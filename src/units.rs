//! Average cell dimensions and cell counts per resolution.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::MAX_H3_RES;
use crate::error::H3Error;

const NUM_RES: usize = (MAX_H3_RES + 1) as usize;

/// Average hexagon area in km², pentagons excluded.
const HEX_AREA_KM2: [f64; NUM_RES] = [
  4.357_449_416_078_383e6,
  6.097_884_417_941_332e5,
  8.680_178_039_899_720e4,
  1.239_343_465_508_816e4,
  1.770_347_654_491_307e3,
  2.529_038_581_819_449e2,
  3.612_906_216_441_245e1,
  5.161_293_359_717_191,
  7.373_275_975_944_177e-1,
  1.053_325_134_272_067e-1,
  1.504_750_190_766_435e-2,
  2.149_643_129_451_879e-3,
  3.070_918_756_316_060e-4,
  4.387_026_794_728_296e-5,
  6.267_181_135_324_313e-6,
  8.953_115_907_605_790e-7,
];

/// Average hexagon edge length in km, pentagons excluded.
const EDGE_LENGTH_KM: [f64; NUM_RES] = [
  1281.256_011,
  483.056_839_1,
  182.512_956_5,
  68.979_221_79,
  26.071_759_68,
  9.854_090_990,
  3.724_532_667,
  1.406_475_763,
  0.531_414_010,
  0.200_786_148,
  0.075_863_783,
  0.028_663_897,
  0.010_830_188,
  0.004_092_010,
  0.001_546_100,
  0.000_584_169,
];

/// Unit for [`hex_area`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AreaUnit {
  #[cfg_attr(feature = "serde", serde(rename = "km2"))]
  Km2,
  #[cfg_attr(feature = "serde", serde(rename = "m2"))]
  M2,
}

/// Unit for [`edge_length`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LengthUnit {
  #[cfg_attr(feature = "serde", serde(rename = "km"))]
  Km,
  #[cfg_attr(feature = "serde", serde(rename = "m"))]
  M,
}

impl FromStr for AreaUnit {
  type Err = H3Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "km2" => Ok(AreaUnit::Km2),
      "m2" => Ok(AreaUnit::M2),
      _ => Err(H3Error::OptionInvalid),
    }
  }
}

impl FromStr for LengthUnit {
  type Err = H3Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "km" => Ok(LengthUnit::Km),
      "m" => Ok(LengthUnit::M),
      _ => Err(H3Error::OptionInvalid),
    }
  }
}

impl fmt::Display for AreaUnit {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      AreaUnit::Km2 => "km2",
      AreaUnit::M2 => "m2",
    })
  }
}

impl fmt::Display for LengthUnit {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      LengthUnit::Km => "km",
      LengthUnit::M => "m",
    })
  }
}

#[inline]
fn res_index(res: i32) -> Result<usize, H3Error> {
  if (0..=MAX_H3_RES).contains(&res) {
    Ok(res as usize)
  } else {
    Err(H3Error::ResDomain)
  }
}

/// Average hexagon area at `res`.
pub fn hex_area(res: i32, unit: AreaUnit) -> Result<f64, H3Error> {
  let km2 = HEX_AREA_KM2[res_index(res)?];
  Ok(match unit {
    AreaUnit::Km2 => km2,
    AreaUnit::M2 => km2 * 1.0e6,
  })
}

/// Average hexagon edge length at `res`.
pub fn edge_length(res: i32, unit: LengthUnit) -> Result<f64, H3Error> {
  let km = EDGE_LENGTH_KM[res_index(res)?];
  Ok(match unit {
    LengthUnit::Km => km,
    LengthUnit::M => km * 1.0e3,
  })
}

/// Number of cells at `res`, pentagons included: `2 + 120 * 7^res`.
pub fn num_hexagons(res: i32) -> Result<i64, H3Error> {
  let res = res_index(res)?;
  Ok(2 + 120 * 7_i64.pow(res as u32))
}
