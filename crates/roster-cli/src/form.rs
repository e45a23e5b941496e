//! Add / edit form state and its client-side validation.

use roster_core::employee::{Employee, EmployeeDraft, EmployeePatch};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
  Add,
  Edit(Uuid),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
  Firstname,
  Lastname,
  Age,
  Married,
}

impl Field {
  pub const ALL: [Field; 4] =
    [Field::Firstname, Field::Lastname, Field::Age, Field::Married];

  pub fn label(self) -> &'static str {
    match self {
      Field::Firstname => "First name",
      Field::Lastname => "Last name",
      Field::Age => "Age",
      Field::Married => "Married",
    }
  }

  fn index(self) -> usize {
    Field::ALL.iter().position(|f| *f == self).unwrap_or(0)
  }
}

/// The editable fields of the add / edit pane.
#[derive(Debug, Clone)]
pub struct EmployeeForm {
  pub kind:      FormKind,
  pub firstname: String,
  pub lastname:  String,
  pub age:       String,
  pub married:   bool,
  pub focus:     Field,
}

/// A form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
  pub firstname:  String,
  pub lastname:   String,
  pub age:        i64,
  pub is_married: bool,
}

impl Submission {
  pub fn into_draft(self) -> EmployeeDraft {
    EmployeeDraft {
      firstname:  Some(self.firstname),
      lastname:   Some(self.lastname),
      age:        Some(self.age),
      is_married: Some(self.is_married),
    }
  }

  /// Edits send every field, like a full form post.
  pub fn into_patch(self) -> EmployeePatch {
    EmployeePatch {
      firstname:  Some(self.firstname),
      lastname:   Some(self.lastname),
      age:        Some(self.age),
      is_married: Some(self.is_married),
    }
  }
}

impl EmployeeForm {
  /// An empty form for a new employee.
  pub fn add() -> Self {
    Self {
      kind:      FormKind::Add,
      firstname: String::new(),
      lastname:  String::new(),
      age:       String::new(),
      married:   false,
      focus:     Field::Firstname,
    }
  }

  /// A form pre-filled from `employee`.
  pub fn edit(employee: &Employee) -> Self {
    Self {
      kind:      FormKind::Edit(employee.id),
      firstname: employee.firstname.clone(),
      lastname:  employee.lastname.clone(),
      age:       employee.age.to_string(),
      married:   employee.is_married,
      focus:     Field::Firstname,
    }
  }

  pub fn next_field(&mut self) {
    self.focus = Field::ALL[(self.focus.index() + 1) % Field::ALL.len()];
  }

  pub fn prev_field(&mut self) {
    let len = Field::ALL.len();
    self.focus = Field::ALL[(self.focus.index() + len - 1) % len];
  }

  fn focused_text(&mut self) -> Option<&mut String> {
    match self.focus {
      Field::Firstname => Some(&mut self.firstname),
      Field::Lastname => Some(&mut self.lastname),
      Field::Age => Some(&mut self.age),
      Field::Married => None,
    }
  }

  /// Type `c` into the focused field. Space toggles the married flag.
  pub fn input(&mut self, c: char) {
    match self.focused_text() {
      Some(text) => text.push(c),
      None if c == ' ' => self.married = !self.married,
      None => {}
    }
  }

  pub fn backspace(&mut self) {
    if let Some(text) = self.focused_text() {
      text.pop();
    }
  }

  /// Names are trimmed and must be non-empty; age must be an integer.
  pub fn submission(&self) -> Result<Submission, &'static str> {
    let firstname = self.firstname.trim();
    let lastname = self.lastname.trim();
    if firstname.is_empty() || lastname.is_empty() {
      return Err("first and last name are required");
    }
    let age = self
      .age
      .trim()
      .parse::<i64>()
      .map_err(|_| "age must be a whole number")?;
    Ok(Submission {
      firstname: firstname.to_owned(),
      lastname: lastname.to_owned(),
      age,
      is_married: self.married,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn typed(form: &mut EmployeeForm, text: &str) {
    for c in text.chars() {
      form.input(c);
    }
  }

  #[test]
  fn typing_fills_fields_in_tab_order() {
    let mut form = EmployeeForm::add();
    typed(&mut form, " Bob ");
    form.next_field();
    typed(&mut form, "Lee");
    form.next_field();
    typed(&mut form, "40");
    form.next_field();
    form.input(' ');

    assert_eq!(form.submission(), Ok(Submission {
      firstname:  "Bob".into(),
      lastname:   "Lee".into(),
      age:        40,
      is_married: true,
    }));
  }

  #[test]
  fn focus_wraps_in_both_directions() {
    let mut form = EmployeeForm::add();
    form.prev_field();
    assert_eq!(form.focus, Field::Married);
    form.next_field();
    assert_eq!(form.focus, Field::Firstname);
  }

  #[test]
  fn blank_name_or_bad_age_is_rejected() {
    let mut form = EmployeeForm::add();
    form.firstname = "  ".into();
    form.lastname = "Lee".into();
    form.age = "40".into();
    assert!(form.submission().is_err());

    form.firstname = "Bob".into();
    form.age = "forty".into();
    assert!(form.submission().is_err());
  }

  #[test]
  fn edit_prefills_and_sends_full_patch() {
    let employee = Employee {
      id:         Uuid::new_v4(),
      firstname:  "Jane".into(),
      lastname:   "Smith".into(),
      age:        25,
      is_married: true,
    };
    let mut form = EmployeeForm::edit(&employee);
    assert_eq!(form.kind, FormKind::Edit(employee.id));
    form.focus = Field::Age;
    form.backspace();
    form.input('6');

    let patch = form.submission().unwrap().into_patch();
    assert_eq!(patch.age, Some(26));
    assert_eq!(patch.firstname.as_deref(), Some("Jane"));
    assert_eq!(patch.is_married, Some(true));
  }
}
