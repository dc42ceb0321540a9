//! Error taxonomy shared by every index constructor.

use thiserror::Error;

/// Errors raised while constructing an index.
///
/// Everything is detected up front, so statistics and traversal never fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IndexError {
  /// A construction parameter is out of range.
  #[error("invalid parameter `{name}`: {requirement}")]
  InvalidParameter {
    /// Parameter name as it appears in the API.
    name: &'static str,
    /// The constraint that was violated.
    requirement: &'static str,
  },

  /// The point set handed to a constructor was empty.
  #[error("point set is empty")]
  EmptyInput,

  /// A point carries a NaN or infinite coordinate.
  #[error("point {index} has a non-finite coordinate")]
  NonFinitePoint {
    /// Position of the offending point in the input slice.
    index: usize,
  },

  /// Grid dimensions do not fit in a `u64` cell count.
  #[error("cell size {cell_size} yields more grid cells than fit in u64")]
  GridTooLarge {
    /// The requested cell size.
    cell_size: f64,
  },
}

impl IndexError {
  pub(crate) fn invalid(name: &'static str, requirement: &'static str) -> Self {
    Self::InvalidParameter { name, requirement }
  }
}
