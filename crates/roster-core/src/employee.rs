//! Employee records and the rules for creating and updating them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Record ──────────────────────────────────────────────────────────────────

/// A stored employee record. The `id` is assigned by the store on creation and
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
  pub id:         Uuid,
  pub firstname:  String,
  pub lastname:   String,
  pub age:        i64,
  pub is_married: bool,
}

impl Employee {
  /// Materialise a validated [`NewEmployee`] under `id`.
  pub fn from_new(id: Uuid, new: NewEmployee) -> Self {
    Self {
      id,
      firstname: new.firstname,
      lastname: new.lastname,
      age: new.age,
      is_married: new.is_married,
    }
  }

  /// Merge `patch` into this record.
  ///
  /// The rule differs per field type and is intentionally not uniform:
  ///
  /// - `firstname` / `lastname` are replaced only by a non-empty string. An
  ///   explicit `""` is ignored rather than clearing the name.
  /// - `age` / `is_married` are replaced whenever a value is supplied, so
  ///   `0` and `false` are applied.
  ///
  /// `id` is never touched.
  pub fn apply(&mut self, patch: EmployeePatch) {
    if let Some(firstname) = patch.firstname.filter(|s| !s.is_empty()) {
      self.firstname = firstname;
    }
    if let Some(lastname) = patch.lastname.filter(|s| !s.is_empty()) {
      self.lastname = lastname;
    }
    if let Some(age) = patch.age {
      self.age = age;
    }
    if let Some(is_married) = patch.is_married {
      self.is_married = is_married;
    }
  }

  /// Case-insensitive substring match of `query` against `firstname`.
  pub fn firstname_matches(&self, query: &str) -> bool {
    self
      .firstname
      .to_lowercase()
      .contains(&query.to_lowercase())
  }
}

// ─── Create ──────────────────────────────────────────────────────────────────

/// A create request as received, before validation.
///
/// Every field is optional so that a missing field can be told apart from a
/// present-but-falsy one (`age: 0`, `isMarried: false`). JSON `null` is read
/// as missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
  pub firstname:  Option<String>,
  pub lastname:   Option<String>,
  pub age:        Option<i64>,
  pub is_married: Option<bool>,
}

/// A validated create request; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
  pub firstname:  String,
  pub lastname:   String,
  pub age:        i64,
  pub is_married: bool,
}

impl TryFrom<EmployeeDraft> for NewEmployee {
  type Error = Error;

  fn try_from(draft: EmployeeDraft) -> Result<Self> {
    let non_empty = |s: Option<String>| s.filter(|s| !s.is_empty());
    match (
      non_empty(draft.firstname),
      non_empty(draft.lastname),
      draft.age,
      draft.is_married,
    ) {
      (Some(firstname), Some(lastname), Some(age), Some(is_married)) => {
        Ok(NewEmployee {
          firstname,
          lastname,
          age,
          is_married,
        })
      }
      _ => Err(Error::InvalidEmployee),
    }
  }
}

// ─── Update ──────────────────────────────────────────────────────────────────

/// A partial update. Absent fields keep their stored value; see
/// [`Employee::apply`] for how present fields are merged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub firstname:  Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub lastname:   Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub age:        Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub is_married: Option<bool>,
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn john() -> Employee {
    Employee {
      id:         Uuid::new_v4(),
      firstname:  "John".into(),
      lastname:   "Doe".into(),
      age:        30,
      is_married: true,
    }
  }

  #[test]
  fn serialises_with_camel_case_married_flag() {
    let e = john();
    let v = serde_json::to_value(&e).unwrap();
    assert_eq!(v["isMarried"], json!(true));
    assert_eq!(v["id"], json!(e.id.to_string()));
    assert!(v.get("is_married").is_none());
  }

  #[test]
  fn draft_with_zero_age_and_unmarried_is_valid() {
    let draft: EmployeeDraft = serde_json::from_value(json!({
      "firstname": "Bob", "lastname": "Lee", "age": 0, "isMarried": false
    }))
    .unwrap();
    let new = NewEmployee::try_from(draft).unwrap();
    assert_eq!(new.age, 0);
    assert!(!new.is_married);
  }

  #[test]
  fn draft_missing_age_is_rejected() {
    let draft: EmployeeDraft = serde_json::from_value(json!({
      "firstname": "Bob", "lastname": "Lee", "isMarried": true
    }))
    .unwrap();
    assert_eq!(NewEmployee::try_from(draft), Err(Error::InvalidEmployee));
  }

  #[test]
  fn draft_missing_married_flag_is_rejected() {
    let draft: EmployeeDraft = serde_json::from_value(json!({
      "firstname": "Bob", "lastname": "Lee", "age": 40
    }))
    .unwrap();
    assert_eq!(NewEmployee::try_from(draft), Err(Error::InvalidEmployee));
  }

  #[test]
  fn draft_with_empty_lastname_is_rejected() {
    let draft = EmployeeDraft {
      firstname:  Some("Bob".into()),
      lastname:   Some(String::new()),
      age:        Some(40),
      is_married: Some(true),
    };
    assert_eq!(NewEmployee::try_from(draft), Err(Error::InvalidEmployee));
  }

  #[test]
  fn draft_with_null_age_is_rejected() {
    let draft: EmployeeDraft = serde_json::from_value(json!({
      "firstname": "Bob", "lastname": "Lee", "age": null, "isMarried": true
    }))
    .unwrap();
    assert_eq!(NewEmployee::try_from(draft), Err(Error::InvalidEmployee));
  }

  #[test]
  fn apply_ignores_empty_names() {
    let mut e = john();
    e.apply(EmployeePatch {
      firstname: Some(String::new()),
      lastname: Some(String::new()),
      ..Default::default()
    });
    assert_eq!(e.firstname, "John");
    assert_eq!(e.lastname, "Doe");
  }

  #[test]
  fn apply_accepts_zero_age_and_false() {
    let mut e = john();
    e.apply(EmployeePatch {
      age: Some(0),
      is_married: Some(false),
      ..Default::default()
    });
    assert_eq!(e.age, 0);
    assert!(!e.is_married);
  }

  #[test]
  fn apply_empty_patch_changes_nothing() {
    let mut e = john();
    let before = e.clone();
    e.apply(EmployeePatch::default());
    assert_eq!(e, before);
  }

  #[test]
  fn apply_replaces_supplied_names() {
    let mut e = john();
    let id = e.id;
    e.apply(EmployeePatch {
      firstname: Some("Johnny".into()),
      ..Default::default()
    });
    assert_eq!(e.firstname, "Johnny");
    assert_eq!(e.lastname, "Doe");
    assert_eq!(e.id, id);
  }

  #[test]
  fn firstname_match_is_case_insensitive_substring() {
    let e = john();
    assert!(e.firstname_matches("jo"));
    assert!(e.firstname_matches("OHN"));
    assert!(!e.firstname_matches("doe"));
  }
}
