//! In-memory backend for the Roster employee store.
//!
//! Records live for the lifetime of the process. A single [`RwLock`] guards
//! the collection: mutations are serialised and reads never observe a
//! half-applied edit.
//!
//! [`RwLock`]: std::sync::RwLock

mod seed;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use seed::seed_employees;
pub use store::MemoryStore;

#[cfg(test)]
mod tests;
