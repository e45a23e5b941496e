//! The sample records a fresh store starts with.

use roster_core::employee::NewEmployee;

/// The three sample employees loaded on process start.
pub fn seed_employees() -> Vec<NewEmployee> {
  [("John", "Doe", 30, false), ("Jane", "Smith", 25, true), ("Alice", "Johnson", 28, false)]
    .into_iter()
    .map(|(firstname, lastname, age, is_married)| NewEmployee {
      firstname: firstname.to_owned(),
      lastname: lastname.to_owned(),
      age,
      is_married,
    })
    .collect()
}
