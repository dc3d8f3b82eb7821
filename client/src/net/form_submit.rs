//! Contact form delivery to the hosted form-processing service.
//!
//! Client-side (hydrate): JSON `POST` via `gloo-net`.
//! Server-side (SSR): never called; returns a network error so callers keep
//! a single code path.
//!
//! ERROR HANDLING
//! ==============
//! Any non-2xx status or transport failure becomes a [`SubmitError`]. The
//! form keeps its values so the user can simply resubmit; there are no
//! retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "form_submit_test.rs"]
mod form_submit_test;

use thiserror::Error;

use crate::state::contact::ContactForm;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("form service responded with status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to encode submission: {0}")]
    Encode(String),
}

/// Map an HTTP status to the submit outcome. Only 2xx counts as delivered.
///
/// # Errors
///
/// Returns [`SubmitError::Status`] for anything outside `200..300`.
pub fn classify_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(SubmitError::Status(status)) }
}

/// JSON body for `form`, including the fixed service metadata fields.
///
/// # Errors
///
/// Returns [`SubmitError::Encode`] if serialization fails.
pub fn encode_submission(form: &ContactForm) -> Result<String, SubmitError> {
    serde_json::to_string(&form.submission()).map_err(|e| SubmitError::Encode(e.to_string()))
}

/// Send `form` to `endpoint`.
///
/// # Errors
///
/// Returns [`SubmitError`] on transport failure or a non-2xx response.
#[cfg(feature = "hydrate")]
pub async fn submit_contact(endpoint: &str, form: &ContactForm) -> Result<(), SubmitError> {
    let body = encode_submission(form)?;
    let resp = gloo_net::http::Request::post(endpoint)
        .header("Content-Type", "application/json")
        .header("Accept", "application/json")
        .body(body)
        .map_err(|e| SubmitError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;
    classify_status(resp.status())
}

/// Server-rendered pages never submit; the form posts only after hydration.
///
/// # Errors
///
/// Always returns [`SubmitError::Network`].
#[cfg(not(feature = "hydrate"))]
pub async fn submit_contact(_endpoint: &str, _form: &ContactForm) -> Result<(), SubmitError> {
    Err(SubmitError::Network("not available on server".to_owned()))
}
