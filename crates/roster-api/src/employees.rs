//! Handlers for `/employees` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/employees` | Every record, insertion order |
//! | `POST`   | `/employees` | Body: [`EmployeeDraft`]; returns 201 + stored record |
//! | `GET`    | `/employees/:id` | 404 if not found |
//! | `PUT`    | `/employees/:id` | Body: [`EmployeePatch`]; 404 if not found |
//! | `DELETE` | `/employees/:id` | 204 on success; 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use roster_core::{
  employee::{Employee, EmployeeDraft, EmployeePatch, NewEmployee},
  store::EmployeeStore,
};
use uuid::Uuid;

use crate::error::ApiError;

/// Ids are opaque to clients and match only in the exact form the server
/// issued them (lowercase, hyphenated). Any other spelling, or anything that
/// is not a UUID at all, is reported the same way as an unknown id.
fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
  let id = Uuid::parse_str(raw).map_err(|_| ApiError::NotFound)?;
  if id.hyphenated().to_string() != raw {
    return Err(ApiError::NotFound);
  }
  Ok(id)
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /employees`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Employee>>, ApiError>
where
  S: EmployeeStore,
{
  let employees = store.list().await.map_err(ApiError::store)?;
  Ok(Json(employees))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /employees/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Employee>, ApiError>
where
  S: EmployeeStore,
{
  let id = parse_id(&id)?;
  let employee = store
    .get(id)
    .await
    .map_err(ApiError::store)?
    .ok_or(ApiError::NotFound)?;
  Ok(Json(employee))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /employees` — returns 201 + the stored [`Employee`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<EmployeeDraft>,
) -> Result<impl IntoResponse, ApiError>
where
  S: EmployeeStore,
{
  let new = NewEmployee::try_from(body)?;
  let employee = store.create(new).await.map_err(ApiError::store)?;
  Ok((StatusCode::CREATED, Json(employee)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /employees/:id` — body is any subset of the editable fields.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  Json(patch): Json<EmployeePatch>,
) -> Result<Json<Employee>, ApiError>
where
  S: EmployeeStore,
{
  let id = parse_id(&id)?;
  let employee = store
    .update(id, patch)
    .await
    .map_err(ApiError::store)?
    .ok_or(ApiError::NotFound)?;
  Ok(Json(employee))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /employees/:id` — 204 with an empty body.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
  S: EmployeeStore,
{
  let id = parse_id(&id)?;
  store
    .delete(id)
    .await
    .map_err(ApiError::store)?
    .ok_or(ApiError::NotFound)?;
  Ok(StatusCode::NO_CONTENT)
}
