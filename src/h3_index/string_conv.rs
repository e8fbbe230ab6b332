//! Hexadecimal text form of an index.

use std::fmt;
use std::str::FromStr;

use crate::error::H3Error;
use crate::types::H3Index;

impl fmt::Display for H3Index {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:x}", self.0)
  }
}

impl fmt::LowerHex for H3Index {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::LowerHex::fmt(&self.0, f)
  }
}

impl FromStr for H3Index {
  type Err = H3Error;

  /// Parses lowercase or uppercase hex, with an optional `0x` prefix. The
  /// result is not validated as a cell.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let digits = s
      .strip_prefix("0x")
      .or_else(|| s.strip_prefix("0X"))
      .unwrap_or(s);
    if digits.is_empty() || digits.len() > 16 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
      return Err(H3Error::CellInvalid);
    }
    u64::from_str_radix(digits, 16)
      .map(H3Index)
      .map_err(|_| H3Error::CellInvalid)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_has_no_prefix() {
    let h = H3Index(0x8928308280fffff);
    assert_eq!(h.to_string(), "8928308280fffff");
    assert_eq!(format!("{h:x}"), "8928308280fffff");
    assert_eq!(format!("{h:#x}"), "0x8928308280fffff");
    assert_eq!(H3Index(0).to_string(), "0");
  }

  #[test]
  fn parses_with_and_without_prefix() {
    let want = H3Index(0x8928308280fffff);
    assert_eq!("8928308280fffff".parse::<H3Index>(), Ok(want));
    assert_eq!("0x8928308280fffff".parse::<H3Index>(), Ok(want));
    assert_eq!("8928308280FFFFF".parse::<H3Index>(), Ok(want));
    assert_eq!("ffffffffffffffff".parse::<H3Index>(), Ok(H3Index(u64::MAX)));
  }

  #[test]
  fn rejects_bad_text() {
    for s in ["", "0x", "zz", "+1", "-1", " 85", "1ffffffffffffffff", "85 "] {
      assert_eq!(s.parse::<H3Index>(), Err(H3Error::CellInvalid), "{s:?}");
    }
  }

  #[test]
  fn round_trips() {
    for v in [0u64, 1, 0x85283473fffffff, u64::MAX] {
      let h = H3Index(v);
      assert_eq!(h.to_string().parse::<H3Index>(), Ok(h));
    }
  }
}
