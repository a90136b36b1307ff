//! REST helpers for the remote task collaborator.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call yields a `Result`; callers log the error and leave local state
//! untouched. There is no retry and no offline fallback.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Task, TaskId};
#[cfg(feature = "hydrate")]
use super::types::NewTask;

/// Failure modes of a REST call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, encoding).
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("unexpected status: {0}")]
    Status(u16),

    /// The response body was not the expected JSON.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The task was never stored on the server, so it has no address.
    #[error("task has no server id")]
    MissingId,

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

/// Collection URL with exactly one trailing slash.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn collection_endpoint(base: &str) -> String {
    format!("{}/", base.trim_end_matches('/'))
}

/// Item URL in the `{base}{id}/` form the collaborator expects.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn task_endpoint(base: &str, id: &TaskId) -> String {
    format!("{}{id}/", collection_endpoint(base))
}

fn require_id(task: &Task) -> Result<&TaskId, ApiError> {
    task.id.as_ref().ok_or(ApiError::MissingId)
}

#[cfg(feature = "hydrate")]
fn ensure_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() { Ok(resp) } else { Err(ApiError::Status(resp.status())) }
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    ensure_ok(resp)?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the full task list via `GET {base}`.
///
/// # Errors
///
/// Returns an error if the request fails, the status is not 2xx, or the body
/// is not a JSON array of tasks.
pub async fn fetch_tasks(base: &str) -> Result<Vec<Task>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&collection_endpoint(base))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = base;
        Err(ApiError::Unavailable)
    }
}

/// Create a task via `POST {base}` and return the stored record (with `id`).
///
/// # Errors
///
/// Returns an error if the request fails, the status is not 2xx, or the body
/// is not a task.
pub async fn create_task(base: &str, text: &str) -> Result<Task, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = NewTask { text, completed: false };
        let resp = gloo_net::http::Request::post(&collection_endpoint(base))
            .json(&payload)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, text);
        Err(ApiError::Unavailable)
    }
}

/// Replace a task via `PUT {base}{id}/` and return the server's copy.
///
/// # Errors
///
/// Returns `MissingId` for tasks that were never stored remotely, otherwise
/// the same failures as [`create_task`].
pub async fn update_task(base: &str, task: &Task) -> Result<Task, ApiError> {
    let id = require_id(task)?;
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&task_endpoint(base, id))
            .json(task)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, id);
        Err(ApiError::Unavailable)
    }
}

/// Delete a task via `DELETE {base}{id}/`. The response body is ignored.
///
/// # Errors
///
/// Returns an error if the request fails or the status is not 2xx.
pub async fn delete_task(base: &str, id: &TaskId) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&task_endpoint(base, id))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        ensure_ok(resp).map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, id);
        Err(ApiError::Unavailable)
    }
}
