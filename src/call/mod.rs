// SPDX-License-Identifier: MPL-2.0
//! Outbound call initiation.
//!
//! This module owns the POST to the call-initiation endpoint. Each
//! submission builds its own client and runs to completion on its own;
//! nothing here tracks or cancels in-flight requests.

use serde::Serialize;

/// User agent sent with every call submission.
const USER_AGENT: &str = concat!("IcedDial/", env!("CARGO_PKG_VERSION"));

/// Result type for call operations.
pub type CallResult<T> = Result<T, CallError>;

/// Errors that can occur while initiating a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallError {
    /// The request never produced a response (connect failure, timeout, ...).
    Request(String),
    /// The endpoint answered with a non-success HTTP status.
    Status(u16),
}

impl std::fmt::Display for CallError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CallError::Request(msg) => write!(f, "Request failed: {msg}"),
            CallError::Status(code) => write!(f, "HTTP status: {code}"),
        }
    }
}

impl std::error::Error for CallError {}

/// JSON body sent to the call endpoint.
#[derive(Debug, Serialize)]
struct CallRequest<'a> {
    #[serde(rename = "phoneNumber")]
    phone_number: &'a str,
}

/// POSTs a call-initiation request for `phone_number` to `endpoint`.
///
/// `phone_number` is the full dial string including the leading country
/// code. Any 2xx response counts as success; the response body is ignored.
pub async fn initiate(endpoint: &str, phone_number: &str) -> CallResult<()> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| CallError::Request(e.to_string()))?;

    let response = client
        .post(endpoint)
        .json(&CallRequest { phone_number })
        .send()
        .await
        .map_err(|e| CallError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(CallError::Status(status.as_u16()));
    }

    Ok(())
}
