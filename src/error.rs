//! Error codes returned by fallible operations.

#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};
use thiserror::Error;

/// Failure of an indexing operation. The numeric codes are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
#[repr(u32)]
pub enum H3Error {
  /// The operation failed but a more specific error is not available.
  #[error("operation failed")]
  Failed = 1,
  /// Argument was outside of acceptable range.
  #[error("argument out of domain")]
  Domain = 2,
  /// Latitude or longitude was not finite.
  #[error("latitude/longitude out of domain")]
  LatLngDomain = 3,
  /// Resolution argument was outside of acceptable range.
  #[error("resolution out of domain")]
  ResDomain = 4,
  /// Cell argument was not a valid cell.
  #[error("invalid cell index")]
  CellInvalid = 5,
  /// Directed edge argument was not valid.
  #[error("invalid directed edge index")]
  DirEdgeInvalid = 6,
  /// Pentagon distortion was encountered which the algorithm could not handle.
  #[error("pentagon distortion encountered")]
  Pentagon = 9,
  /// Duplicate input was encountered in the arguments.
  #[error("duplicate input")]
  DuplicateInput = 10,
  /// Cell arguments were not neighbors.
  #[error("cells are not neighbors")]
  NotNeighbors = 11,
  /// Cell arguments had incompatible resolutions.
  #[error("resolution mismatch")]
  ResMismatch = 12,
  /// Mode or unit argument was not valid.
  #[error("invalid option")]
  OptionInvalid = 15,
}

impl H3Error {
  /// Numeric error code.
  #[inline]
  #[must_use]
  pub const fn code(self) -> u32 {
    self as u32
  }

  /// True when the failure came from pentagon distortion rather than bad
  /// input; callers may retry with a pentagon-tolerant operation.
  #[inline]
  #[must_use]
  pub const fn is_pentagon_distortion(self) -> bool {
    matches!(self, H3Error::Pentagon)
  }

  /// True for every malformed or out-of-domain input error.
  #[inline]
  #[must_use]
  pub const fn is_invalid_argument(self) -> bool {
    !matches!(self, H3Error::Pentagon | H3Error::Failed)
  }
}
