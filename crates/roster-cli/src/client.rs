//! Async HTTP client wrapping the roster JSON API.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::{Client, Response};
use roster_core::employee::{Employee, EmployeeDraft, EmployeePatch};
use serde::Deserialize;
use uuid::Uuid;

/// Connection settings for the roster API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// Async HTTP client for the roster JSON REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

/// Body of every non-success API response.
#[derive(Deserialize)]
struct ErrorBody {
  message: String,
}

/// Turn a non-success response into an error carrying the server's message.
async fn ensure_success(resp: Response, what: &str) -> Result<Response> {
  let status = resp.status();
  if status.is_success() {
    return Ok(resp);
  }
  match resp.json::<ErrorBody>().await {
    Ok(body) => Err(anyhow!("{what} → {status}: {}", body.message)),
    Err(_) => Err(anyhow!("{what} → {status}")),
  }
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
  }

  /// `GET /employees`
  pub async fn list(&self) -> Result<Vec<Employee>> {
    tracing::debug!("GET /employees");
    let resp = self
      .client
      .get(self.url("/employees"))
      .send()
      .await
      .context("GET /employees failed")?;
    ensure_success(resp, "GET /employees")
      .await?
      .json()
      .await
      .context("deserialising employees")
  }

  /// `GET /employees/:id`
  pub async fn get(&self, id: Uuid) -> Result<Employee> {
    tracing::debug!(%id, "GET /employees/:id");
    let resp = self
      .client
      .get(self.url(&format!("/employees/{id}")))
      .send()
      .await
      .context("GET /employees/:id failed")?;
    ensure_success(resp, "GET /employees/:id")
      .await?
      .json()
      .await
      .context("deserialising employee")
  }

  /// `POST /employees`
  pub async fn create(&self, draft: &EmployeeDraft) -> Result<Employee> {
    tracing::debug!("POST /employees");
    let resp = self
      .client
      .post(self.url("/employees"))
      .json(draft)
      .send()
      .await
      .context("POST /employees failed")?;
    ensure_success(resp, "POST /employees")
      .await?
      .json()
      .await
      .context("deserialising created employee")
  }

  /// `PUT /employees/:id`
  pub async fn update(&self, id: Uuid, patch: &EmployeePatch) -> Result<Employee> {
    tracing::debug!(%id, "PUT /employees/:id");
    let resp = self
      .client
      .put(self.url(&format!("/employees/{id}")))
      .json(patch)
      .send()
      .await
      .context("PUT /employees/:id failed")?;
    ensure_success(resp, "PUT /employees/:id")
      .await?
      .json()
      .await
      .context("deserialising updated employee")
  }

  /// `DELETE /employees/:id`
  pub async fn delete(&self, id: Uuid) -> Result<()> {
    tracing::debug!(%id, "DELETE /employees/:id");
    let resp = self
      .client
      .delete(self.url(&format!("/employees/{id}")))
      .send()
      .await
      .context("DELETE /employees/:id failed")?;
    ensure_success(resp, "DELETE /employees/:id").await?;
    Ok(())
  }

  /// `GET /employees/search?firstname=<query>`
  pub async fn search(&self, firstname: &str) -> Result<Vec<Employee>> {
    tracing::debug!(firstname, "GET /employees/search");
    let resp = self
      .client
      .get(self.url("/employees/search"))
      .query(&[("firstname", firstname)])
      .send()
      .await
      .context("GET /employees/search failed")?;
    ensure_success(resp, "GET /employees/search")
      .await?
      .json()
      .await
      .context("deserialising search results")
  }
}
