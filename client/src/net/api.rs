//! REST API client for the project/task backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call returns [`ApiError::Unavailable`] so the crate
//! and its tests compile without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get typed `Result`s and turn them into the inline messages each
//! screen shows. A 401 from any endpoint ends the session here, before the
//! error reaches the caller, so the route guard sends the user back to
//! `/login` on its next evaluation.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    LoginRequest, LoginResponse, Project, ProjectInput, RegisterRequest, RegisterResponse, Task, TaskInput,
};
use crate::state::session::SessionStore;

pub const DEFAULT_API_BASE_URL: &str = "/api";

pub const REGISTER_REJECTED_MESSAGE: &str = "Registration failed. Please check your input.";
pub const REGISTER_UNREACHABLE_MESSAGE: &str = "Registration failed. Please try again.";

/// Errors produced by backend calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never got a response.
    #[error("network error: {0}")]
    Network(String),

    /// The backend rejected the bearer token (or the credentials).
    #[error("unauthorized")]
    Unauthorized,

    /// Any other non-success status, with the backend's `message` if it sent one.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },

    #[error("request body encode failed: {0}")]
    Encode(String),

    #[error("response body decode failed: {0}")]
    Decode(String),

    /// Called outside the browser.
    #[error("not available outside the browser")]
    Unavailable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Backend base URL, from `PROTASKER_API_URL` at build time.
#[must_use]
pub fn api_base_url() -> &'static str {
    option_env!("PROTASKER_API_URL")
        .map(|url| url.trim_end_matches('/'))
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
}

fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "csr"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn project_path(id: &str) -> String {
    format!("/projects/{id}")
}

fn project_tasks_path(project_id: &str) -> String {
    format!("/projects/{project_id}/tasks")
}

fn task_path(id: &str) -> String {
    format!("/tasks/{id}")
}

/// Map a non-success response onto an [`ApiError`].
#[cfg(any(test, feature = "csr"))]
fn classify_failure(status: u16, body: &str) -> ApiError {
    if status == 401 {
        return ApiError::Unauthorized;
    }
    let message = serde_json::from_str::<super::types::ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty());
    ApiError::Status { status, message }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<T: Serialize>(body: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Inline message for a failed registration: the backend's own message when
/// it sent one, otherwise a generic fallback.
#[must_use]
pub fn register_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { message: Some(message), .. } => message.clone(),
        ApiError::Status { .. } | ApiError::Unauthorized | ApiError::Decode(_) => {
            REGISTER_REJECTED_MESSAGE.to_owned()
        }
        ApiError::Network(_) | ApiError::Encode(_) | ApiError::Unavailable => REGISTER_UNREACHABLE_MESSAGE.to_owned(),
    }
}

/// Backend client bound to the session it authenticates with.
#[derive(Clone, Copy)]
pub struct ApiClient {
    base_url: &'static str,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(base_url: &'static str, session: SessionStore) -> Self {
        Self { base_url, session }
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    /// `POST /users/login`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or credentials are rejected.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let body = encode(request)?;
        decode(&self.execute(Method::Post, "/users/login", Some(body)).await?)
    }

    /// `POST /users/register`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the backend rejects the input.
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let body = encode(request)?;
        decode(&self.execute(Method::Post, "/users/register", Some(body)).await?)
    }

    // =========================================================================
    // PROJECTS
    // =========================================================================

    /// `GET /projects`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        decode(&self.execute(Method::Get, "/projects", None).await?)
    }

    /// `GET /projects/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn get_project(&self, id: &str) -> Result<Project, ApiError> {
        decode(&self.execute(Method::Get, &project_path(id), None).await?)
    }

    /// `POST /projects`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn create_project(&self, input: &ProjectInput) -> Result<Project, ApiError> {
        let body = encode(input)?;
        decode(&self.execute(Method::Post, "/projects", Some(body)).await?)
    }

    /// `PUT /projects/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn update_project(&self, id: &str, input: &ProjectInput) -> Result<Project, ApiError> {
        let body = encode(input)?;
        decode(&self.execute(Method::Put, &project_path(id), Some(body)).await?)
    }

    /// `DELETE /projects/{id}`. The backend removes the project's tasks too.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn delete_project(&self, id: &str) -> Result<(), ApiError> {
        self.execute(Method::Delete, &project_path(id), None).await.map(|_| ())
    }

    // =========================================================================
    // TASKS
    // =========================================================================

    /// `GET /projects/{id}/tasks`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn list_tasks(&self, project_id: &str) -> Result<Vec<Task>, ApiError> {
        decode(&self.execute(Method::Get, &project_tasks_path(project_id), None).await?)
    }

    /// `POST /projects/{id}/tasks`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn create_task(&self, project_id: &str, input: &TaskInput) -> Result<Task, ApiError> {
        let body = encode(input)?;
        decode(&self.execute(Method::Post, &project_tasks_path(project_id), Some(body)).await?)
    }

    /// `PUT /tasks/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn update_task(&self, id: &str, input: &TaskInput) -> Result<Task, ApiError> {
        let body = encode(input)?;
        decode(&self.execute(Method::Put, &task_path(id), Some(body)).await?)
    }

    /// `DELETE /tasks/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        self.execute(Method::Delete, &task_path(id), None).await.map(|_| ())
    }

    // =========================================================================
    // TRANSPORT
    // =========================================================================

    /// Turn a non-success response into an error. A 401 ends the session.
    #[cfg(any(test, feature = "csr"))]
    fn fail(&self, status: u16, body: &str) -> ApiError {
        let err = classify_failure(status, body);
        if err == ApiError::Unauthorized {
            log::warn!("backend rejected the session token, logging out");
            self.session.logout();
        }
        err
    }

    /// Send one request and return the raw success body.
    async fn execute(&self, method: Method, path: &str, body: Option<serde_json::Value>) -> Result<String, ApiError> {
        let url = endpoint(self.base_url, path);
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let mut builder = match method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Delete => Request::delete(&url),
            };
            if let Some(token) = self.session.token() {
                builder = builder.header("Authorization", &bearer(&token));
            }
            let sent = match body {
                Some(body) => builder.json(&body).map_err(|e| ApiError::Encode(e.to_string()))?.send().await,
                None => builder.send().await,
            };
            let resp = sent.map_err(|e| {
                log::error!("{method:?} {url} failed: {e}");
                ApiError::Network(e.to_string())
            })?;
            let status = resp.status();
            let ok = resp.ok();
            let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            if ok {
                return Ok(text);
            }
            log::warn!("{method:?} {url} returned {status}");
            Err(self.fail(status, &text))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, url, body, self.session);
            Err(ApiError::Unavailable)
        }
    }
}
