//! HTTP helpers shared by every feature client. Each request is resolved
//! against the configured API base URL, carries the stored session token in
//! the `Authorization` header, and is aborted after a fixed timeout. A 401 on
//! a request that carried a token means the session is gone: the token is
//! dropped and the browser is sent back to the login screen.

use super::{
    config::AppConfig,
    errors::{AppError, message_from_body},
    storage,
    url::{join_url, session_expired},
};
use gloo_net::http::{Headers, Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::to_string;
use web_sys::{AbortController, FormData};

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Where the browser goes once the API rejects the stored token.
const LOGIN_PATH: &str = "/login";

/// HTTP verbs accepted by [`send_multipart`].
#[derive(Clone, Copy, Debug)]
pub enum MultipartMethod {
    Post,
    Patch,
}

/// Fetches JSON with query parameters and hands back the response headers,
/// which carry pagination metadata for list endpoints.
pub async fn get_json_with_headers<T: DeserializeOwned>(
    path: &str,
    query: &[(&str, String)],
) -> Result<(T, Headers), AppError> {
    let url = build_url(path);
    let response = send(|| {
        Request::get(&url)
            .query(query.iter().map(|(name, value)| (*name, value.as_str())))
    })
    .await?;

    let headers = response.headers();
    let body = handle_json_response(response).await?;
    Ok((body, headers))
}

/// Posts JSON and returns the raw success body with the response headers.
/// Callers decide how to read the body; some endpoints answer with plain
/// text or nothing at all and put what matters in the headers.
pub async fn post_json_response<B: Serialize>(
    path: &str,
    body: &B,
) -> Result<(String, Headers), AppError> {
    let url = build_url(path);
    let payload = encode(body)?;
    let response = send_with_body(|| json_post(&url), payload).await?;

    let headers = response.headers();
    let body = handle_text_response(response).await?;
    Ok((body, headers))
}

/// Posts JSON and parses a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let url = build_url(path);
    let payload = encode(body)?;
    let response = send_with_body(|| json_post(&url), payload).await?;

    handle_json_response(response).await
}

/// Posts JSON and ignores whatever the server answers on success.
pub async fn post_json_empty<B: Serialize>(path: &str, body: &B) -> Result<(), AppError> {
    let url = build_url(path);
    let payload = encode(body)?;
    let response = send_with_body(|| json_post(&url), payload).await?;

    handle_empty_response(response).await
}

/// Sends a multipart form. The browser picks the boundary, so no
/// `Content-Type` header is set here.
pub async fn send_multipart<T: DeserializeOwned>(
    method: MultipartMethod,
    path: &str,
    form: FormData,
) -> Result<T, AppError> {
    let url = build_url(path);
    let had_token = storage::session().token().is_some();
    let response = send_with_timeout(|signal| {
        let builder = match method {
            MultipartMethod::Post => Request::post(&url),
            MultipartMethod::Patch => Request::patch(&url),
        };
        authorize(builder)
            .abort_signal(Some(signal))
            .body(form)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    check_session(&response, had_token)?;
    handle_json_response(response).await
}

/// Sends a DELETE and expects no meaningful body.
pub async fn delete(path: &str) -> Result<(), AppError> {
    let url = build_url(path);
    let response = send(|| Request::delete(&url)).await?;

    handle_empty_response(response).await
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    join_url(&config.api_base_url, path)
}

fn json_post(url: &str) -> RequestBuilder {
    Request::post(url).header("Content-Type", "application/json")
}

fn encode<B: Serialize>(body: &B) -> Result<String, AppError> {
    to_string(body).map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))
}

/// Attaches the stored session token, if any.
fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match storage::session().token() {
        Some(token) => builder.header("Authorization", &token),
        None => builder,
    }
}

/// Sends a body-less request built by `builder`.
async fn send(builder: impl FnOnce() -> RequestBuilder) -> Result<Response, AppError> {
    let had_token = storage::session().token().is_some();
    let response = send_with_timeout(|signal| {
        authorize(builder())
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    check_session(&response, had_token)?;
    Ok(response)
}

/// Sends a request with a pre-encoded JSON body.
async fn send_with_body(
    builder: impl FnOnce() -> RequestBuilder,
    payload: String,
) -> Result<Response, AppError> {
    let had_token = storage::session().token().is_some();
    let response = send_with_timeout(move |signal| {
        authorize(builder())
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    check_session(&response, had_token)?;
    Ok(response)
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        tracing::warn!(error = %message, "request failed before reaching the API");
        AppError::Network("Unable to reach the server. Please try again.".to_string())
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    tracing::debug!(url = %request.url(), "sending request");
    request.send().await.map_err(map_request_error)
}

/// Drops the stored token and returns to the login screen when the API
/// rejects a token we sent. Unauthenticated 401s (bad credentials) are left
/// for the caller to report.
fn check_session(response: &Response, had_token: bool) -> Result<(), AppError> {
    if !session_expired(response.status(), had_token) {
        return Ok(());
    }

    tracing::info!("session rejected by the API; returning to login");
    storage::session().clear_token();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(LOGIN_PATH);
    }
    Err(AppError::Unauthorized)
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(http_error(response).await)
    }
}

/// Reads a success body as text and surfaces HTTP errors with sanitized bodies.
async fn handle_text_response(response: Response) -> Result<String, AppError> {
    if response.ok() {
        response
            .text()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to read response: {err}")))
    } else {
        Err(http_error(response).await)
    }
}

/// Handles empty responses and returns sanitized HTTP errors when needed.
async fn handle_empty_response(response: Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        Err(http_error(response).await)
    }
}

async fn http_error(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    tracing::warn!(status, "API returned an error");
    AppError::Http {
        status,
        message: message_from_body(&body),
    }
}
