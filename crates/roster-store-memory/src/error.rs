//! Error type for `roster-store-memory`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A thread panicked while holding the collection lock.
  #[error("employee collection lock poisoned")]
  LockPoisoned,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
