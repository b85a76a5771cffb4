//! API utilities for frontend-gateway communication
//!
//! Builds gateway URLs and turns `gloo-net` responses into typed results with
//! [`ApiError`] on failure.

use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the gateway.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `GET` a JSON document.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json, text/plain, */*")
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_json(response).await
}

/// `POST` a JSON body, returning the raw success body.
pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<String, ApiError> {
    let response = Request::post(&api_url(path))
        .header("Content-Type", "application/json;charset=UTF-8")
        .json(body)
        .map_err(|e| ApiError::MalformedResponse(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_text(response).await
}

async fn read_text(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let ok = response.ok();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !ok {
        return Err(ApiError::from_response(status, &body));
    }
    Ok(body)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = read_text(response).await?;
    serde_json::from_str(&body).map_err(|e| ApiError::MalformedResponse(e.to_string()))
}
