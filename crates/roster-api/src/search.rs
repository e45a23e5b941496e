//! Handler for `GET /employees/search`.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
};
use roster_core::{employee::Employee, store::EmployeeStore};

use crate::error::ApiError;

const INVALID_QUERY: &str = "Invalid or missing firstname query parameter";

/// Pull the single, non-empty `firstname` value out of the query pairs.
///
/// The pairs are taken raw rather than through a struct so that a repeated
/// `firstname` (a list, not a string) is rejected with the same message as a
/// missing one instead of a generic query rejection.
fn firstname_param(pairs: &[(String, String)]) -> Option<&str> {
  let mut values = pairs
    .iter()
    .filter(|(key, _)| key == "firstname")
    .map(|(_, value)| value.as_str());
  match (values.next(), values.next()) {
    (Some(value), None) if !value.is_empty() => Some(value),
    _ => None,
  }
}

/// `GET /employees/search?firstname=<text>`
///
/// Case-insensitive substring match on `firstname`, in collection order.
pub async fn handler<S>(
  State(store): State<Arc<S>>,
  Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Employee>>, ApiError>
where
  S: EmployeeStore,
{
  let firstname = firstname_param(&pairs)
    .ok_or_else(|| ApiError::BadRequest(INVALID_QUERY.to_owned()))?;
  let employees = store
    .search_by_firstname(firstname)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(employees))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
    raw
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect()
  }

  #[test]
  fn single_value_is_accepted() {
    let p = pairs(&[("firstname", "jo"), ("other", "x")]);
    assert_eq!(firstname_param(&p), Some("jo"));
  }

  #[test]
  fn missing_empty_or_repeated_is_rejected() {
    assert_eq!(firstname_param(&pairs(&[])), None);
    assert_eq!(firstname_param(&pairs(&[("firstname", "")])), None);
    assert_eq!(
      firstname_param(&pairs(&[("firstname", "a"), ("firstname", "b")])),
      None
    );
  }
}
