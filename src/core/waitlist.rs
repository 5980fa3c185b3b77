//! Waitlist signup flow.
//!
//! The page makes exactly one kind of network call: `POST
//! {base_url}/waitlist/join` with the visitor's email. There is no retry, no
//! backoff and no timeout; one attempt per user submission. Errors are fully
//! handled here and surface only as the inline message under the form.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shown when the server accepts the signup but returns no message.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Successfully joined the waitlist!";
/// Shown when the server rejects the signup without a message.
pub const DEFAULT_REJECTED_MESSAGE: &str = "Something went wrong. Please try again.";
/// Shown when the request never reaches the server.
pub const DEFAULT_NETWORK_MESSAGE: &str = "Failed to connect. Please try again.";

/// Waitlist API origin, baked into the client bundle at compile time.
///
/// An unset `WAITLIST_API_URL` falls back to the page's own origin via a
/// relative request path.
pub fn api_base_url() -> &'static str {
    option_env!("WAITLIST_API_URL").unwrap_or("")
}

pub fn join_url() -> String {
    format!("{}/waitlist/join", api_base_url())
}

/// Request body for the join endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinRequest {
    pub email: String,
}

/// Response body from the join endpoint. The server is expected to return
/// `{ "message": string }`, but a missing or malformed body is tolerated and
/// replaced with the default message for the status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct JoinResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// The two observable failure kinds of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaitlistError {
    /// The server responded with a non-success status.
    #[error("{0}")]
    Rejected(String),
    /// The request failed at the transport level.
    #[error("{DEFAULT_NETWORK_MESSAGE}")]
    RequestFailed,
}

/// Form submission state, owned by the signup form component.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    /// A request is outstanding; further submits are no-ops until it settles.
    Submitting,
    Success(String),
    Error(String),
}

impl SubmitState {
    /// Map a finished request to the next form state and whether the email
    /// input should be cleared. The input is cleared only on success.
    pub fn settle(result: Result<String, WaitlistError>) -> (Self, bool) {
        match result {
            Ok(message) => (Self::Success(message), true),
            Err(err) => (Self::Error(err.to_string()), false),
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The inline message to display, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(msg) | Self::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Submit an email to the waitlist.
///
/// Returns the message to display: the server's on success, or a
/// [`WaitlistError`] carrying the server's rejection message (or a fallback).
#[cfg(not(feature = "ssr"))]
pub async fn join_waitlist(email: &str) -> Result<String, WaitlistError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    let body = JoinRequest {
        email: email.to_string(),
    };

    let window = web_sys::window().ok_or(WaitlistError::RequestFailed)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(
        &serde_json::to_string(&body)
            .map_err(|_| WaitlistError::RequestFailed)?
            .into(),
    );

    let req = Request::new_with_str_and_init(&join_url(), &opts)
        .map_err(|_| WaitlistError::RequestFailed)?;

    req.headers()
        .set("Content-Type", "application/json")
        .map_err(|_| WaitlistError::RequestFailed)?;

    let resp_value = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(|_| WaitlistError::RequestFailed)?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| WaitlistError::RequestFailed)?;

    // Tolerate an empty or non-JSON body on either status.
    let response: JoinResponse = match resp.json() {
        Ok(promise) => match JsFuture::from(promise).await {
            Ok(json) => serde_wasm_bindgen::from_value(json).unwrap_or_default(),
            Err(_) => JoinResponse::default(),
        },
        Err(_) => JoinResponse::default(),
    };

    if resp.ok() {
        Ok(response
            .message
            .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()))
    } else {
        Err(WaitlistError::Rejected(
            response
                .message
                .unwrap_or_else(|| DEFAULT_REJECTED_MESSAGE.to_string()),
        ))
    }
}

#[cfg(feature = "ssr")]
pub async fn join_waitlist(_email: &str) -> Result<String, WaitlistError> {
    Err(WaitlistError::RequestFailed)
}
