//! [`MemoryStore`] — the in-memory implementation of [`EmployeeStore`].

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use roster_core::{
  employee::{Employee, EmployeePatch, NewEmployee},
  store::EmployeeStore,
};
use uuid::Uuid;

use crate::{Error, Result, seed::seed_employees};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Roster employee store held entirely in process memory.
///
/// Cloning is cheap — clones share the same collection.
#[derive(Clone, Default)]
pub struct MemoryStore {
  employees: Arc<RwLock<Vec<Employee>>>,
}

impl MemoryStore {
  /// An empty store.
  pub fn new() -> Self {
    Self::default()
  }

  /// A store holding the sample employees from [`seed_employees`].
  pub fn seeded() -> Self {
    let store = Self::new();
    {
      // Not yet shared, so the lock cannot be poisoned.
      let mut employees = store
        .employees
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
      for new in seed_employees() {
        let id = fresh_id(&employees);
        employees.push(Employee::from_new(id, new));
      }
    }
    store
  }

  fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Employee>>> {
    self.employees.read().map_err(|_| Error::LockPoisoned)
  }

  fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Employee>>> {
    self.employees.write().map_err(|_| Error::LockPoisoned)
  }

  fn list_sync(&self) -> Result<Vec<Employee>> {
    Ok(self.read()?.clone())
  }

  fn get_sync(&self, id: Uuid) -> Result<Option<Employee>> {
    Ok(self.read()?.iter().find(|e| e.id == id).cloned())
  }

  fn create_sync(&self, input: NewEmployee) -> Result<Employee> {
    let mut employees = self.write()?;
    let employee = Employee::from_new(fresh_id(&employees), input);
    employees.push(employee.clone());
    tracing::debug!(id = %employee.id, "employee created");
    Ok(employee)
  }

  fn update_sync(
    &self,
    id: Uuid,
    patch: EmployeePatch,
  ) -> Result<Option<Employee>> {
    let mut employees = self.write()?;
    let Some(employee) = employees.iter_mut().find(|e| e.id == id) else {
      return Ok(None);
    };
    employee.apply(patch);
    tracing::debug!(%id, "employee updated");
    Ok(Some(employee.clone()))
  }

  fn delete_sync(&self, id: Uuid) -> Result<Option<Employee>> {
    let mut employees = self.write()?;
    let Some(index) = employees.iter().position(|e| e.id == id) else {
      return Ok(None);
    };
    let removed = employees.remove(index);
    tracing::debug!(%id, "employee deleted");
    Ok(Some(removed))
  }

  fn search_sync(&self, query: &str) -> Result<Vec<Employee>> {
    Ok(
      self
        .read()?
        .iter()
        .filter(|e| e.firstname_matches(query))
        .cloned()
        .collect(),
    )
  }
}

/// A v4 UUID not already used by any record in `employees`.
fn fresh_id(employees: &[Employee]) -> Uuid {
  loop {
    let id = Uuid::new_v4();
    if employees.iter().all(|e| e.id != id) {
      return id;
    }
  }
}

// ─── EmployeeStore impl ──────────────────────────────────────────────────────

// Every operation runs synchronously under the lock; no guard is held across
// an await point.
impl EmployeeStore for MemoryStore {
  type Error = Error;

  async fn list(&self) -> Result<Vec<Employee>> {
    self.list_sync()
  }

  async fn get(&self, id: Uuid) -> Result<Option<Employee>> {
    self.get_sync(id)
  }

  async fn create(&self, input: NewEmployee) -> Result<Employee> {
    self.create_sync(input)
  }

  async fn update(
    &self,
    id: Uuid,
    patch: EmployeePatch,
  ) -> Result<Option<Employee>> {
    self.update_sync(id, patch)
  }

  async fn delete(&self, id: Uuid) -> Result<Option<Employee>> {
    self.delete_sync(id)
  }

  async fn search_by_firstname<'a>(
    &'a self,
    query: &'a str,
  ) -> Result<Vec<Employee>> {
    self.search_sync(query)
  }
}
