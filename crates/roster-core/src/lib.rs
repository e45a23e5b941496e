//! Core types and trait definitions for the Roster employee store.
//!
//! This crate is deliberately free of HTTP and runtime dependencies.
//! Every other crate in the workspace depends on it.

pub mod employee;
pub mod error;
pub mod store;

pub use error::{Error, Result};
