//! Assertion failure reporting and expectation helpers for fabricated
//! HTTP traffic.
//!
//! Each helper compares a built value against an expectation and, on
//! mismatch, returns an [`AssertionFailure`] stating expected versus
//! observed. Helpers never panic, never retry and never swallow a
//! failure; policy for reporting belongs to the calling test.

use crate::message::{is_subset_of, Body, Header, Headers, Method, Status};
use crate::request::FakeRequest;
use crate::response::FakeResponse;
use thiserror::Error;

/// Boxed error carried as the optional cause of a failure. `Send + Sync`
/// so failures can cross threads and be read from any of them.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Result alias returned by every expectation helper.
pub type AssertionResult = Result<(), AssertionFailure>;

/// Failure of one expectation about HTTP traffic, distinct from any
/// other error kind so test harnesses can report it precisely.
///
/// Every instance carries a message; construction without one is not
/// part of the public surface. Instances are immutable once built.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct AssertionFailure {
    message: String,
    #[source]
    cause: Option<BoxedError>,
}

impl AssertionFailure {
    /// Creates a failure carrying `message` and no cause.
    pub fn new<M: Into<String>>(message: M) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Creates a failure wrapping the lower-level error that triggered
    /// it. The cause is surfaced through [`std::error::Error::source`]
    /// and never introspected here.
    pub fn with_cause<M, E>(message: M, cause: E) -> Self
    where
        M: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }

    /// Returns the description of what was expected versus observed.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

fn failed(message: String) -> AssertionFailure {
    tracing::debug!("expectation failed: {}", message);
    AssertionFailure::new(message)
}

/// Checks that the response carries the expected status, compared by
/// numeric code.
///
/// # Errors
/// Returns an [`AssertionFailure`] naming both status lines on mismatch.
pub fn expect_status<S: Into<Status>>(response: &FakeResponse, expected: S) -> AssertionResult {
    let expected = expected.into();
    if response.status.code() == expected.code() {
        return Ok(());
    }

    Err(failed(format!(
        "expected status {}, got {}",
        expected.status_line(),
        response.status.status_line()
    )))
}

/// Checks that `value` is among the values recorded for header `key`.
pub fn expect_header<H, S>(response: &FakeResponse, key: H, value: S) -> AssertionResult
where
    H: Into<Header>,
    S: Into<String>,
{
    let key = key.into();
    let value = value.into();
    match response.headers.get(&key) {
        Some(values) if values.iter().any(|item| *item == value) => Ok(()),
        Some(values) => Err(failed(format!(
            "expected header {key} to carry {value:?}, got {values:?}"
        ))),
        None => Err(failed(format!(
            "expected header {key} to carry {value:?}, header is absent"
        ))),
    }
}

/// Checks that header `key` carries exactly `expected`, in order.
pub fn expect_header_values<H: Into<Header>>(
    response: &FakeResponse,
    key: H,
    expected: &[&str],
) -> AssertionResult {
    let key = key.into();
    match response.headers.get(&key) {
        Some(values) if values.iter().map(String::as_str).eq(expected.iter().copied()) => Ok(()),
        Some(values) => Err(failed(format!(
            "expected header {key} values {expected:?}, got {values:?}"
        ))),
        None => Err(failed(format!(
            "expected header {key} values {expected:?}, header is absent"
        ))),
    }
}

/// Checks that every header in `expected` appears in the response with
/// the same values.
pub fn expect_headers_contain(response: &FakeResponse, expected: &Headers) -> AssertionResult {
    if is_subset_of(expected, &response.headers) {
        return Ok(());
    }

    Err(failed(format!(
        "expected headers to contain {expected:?}, got {:?}",
        response.headers
    )))
}

/// Checks the response body structurally.
pub fn expect_body(response: &FakeResponse, expected: &Body) -> AssertionResult {
    if response.body == *expected {
        return Ok(());
    }

    Err(failed(format!(
        "expected body {expected:?}, got {:?}",
        response.body
    )))
}

/// Checks the response body as text. Byte payloads are decoded as UTF-8
/// first.
///
/// # Errors
/// Returns an [`AssertionFailure`] on mismatch, carrying the decode
/// error as its source when the payload was not valid UTF-8.
pub fn expect_body_text(response: &FakeResponse, expected: &str) -> AssertionResult {
    match &response.body {
        Body::Text(inner) if inner == expected => Ok(()),
        Body::Text(inner) => Err(failed(format!("expected body {expected:?}, got {inner:?}"))),
        Body::Bytes(inner) => match String::from_utf8(inner.clone()) {
            Ok(text) if text == expected => Ok(()),
            Ok(text) => Err(failed(format!("expected body {expected:?}, got {text:?}"))),
            Err(err) => {
                tracing::debug!("expectation failed: body is not valid utf8: {:?}", err);
                Err(AssertionFailure::with_cause(
                    format!("expected body {expected:?}, got undecodable bytes"),
                    err,
                ))
            }
        },
        Body::None => Err(failed(format!(
            "expected body {expected:?}, got no content"
        ))),
    }
}

/// Checks a captured request's method.
pub fn expect_method<M: Into<Method>>(request: &FakeRequest, expected: M) -> AssertionResult {
    let expected = expected.into();
    if request.method == expected {
        return Ok(());
    }

    Err(failed(format!(
        "expected method {expected}, got {}",
        request.method
    )))
}

/// Checks a captured request's URL, compared verbatim.
pub fn expect_url(request: &FakeRequest, expected: &str) -> AssertionResult {
    if request.url == expected {
        return Ok(());
    }

    Err(failed(format!(
        "expected url {expected:?}, got {:?}",
        request.url
    )))
}
