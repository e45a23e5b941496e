//! Error types for `roster-core`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  /// A create body is missing a required field, or a name is empty.
  #[error("Invalid employee data")]
  InvalidEmployee,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
