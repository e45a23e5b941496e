//! The `EmployeeStore` trait.
//!
//! Implemented by storage backends (e.g. `roster-store-memory`). The HTTP
//! layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::employee::{Employee, EmployeePatch, NewEmployee};

/// Abstraction over a Roster employee store.
///
/// A store is an insertion-ordered collection of [`Employee`] records with
/// unique ids. Each mutating call is a single atomic edit of that collection.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait EmployeeStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Every record, in insertion order.
  fn list(
    &self,
  ) -> impl Future<Output = Result<Vec<Employee>, Self::Error>> + Send + '_;

  /// Retrieve a record by id. Returns `None` if not found.
  fn get(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + '_;

  /// Assign a fresh unique id to `input`, append it and return the record.
  fn create(
    &self,
    input: NewEmployee,
  ) -> impl Future<Output = Result<Employee, Self::Error>> + Send + '_;

  /// Merge `patch` into the record with `id` (see [`Employee::apply`]).
  /// Returns the updated record, or `None` if not found.
  fn update(
    &self,
    id: Uuid,
    patch: EmployeePatch,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + '_;

  /// Remove the record with `id`, preserving the order of the rest.
  /// Returns the removed record, or `None` if not found.
  fn delete(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + '_;

  /// Records whose firstname contains `query`, ignoring case, in collection
  /// order.
  fn search_by_firstname<'a>(
    &'a self,
    query: &'a str,
  ) -> impl Future<Output = Result<Vec<Employee>, Self::Error>> + Send + 'a;
}
