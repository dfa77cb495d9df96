//! HTTP test doubles for exercising request and response handling code.
//!
//! This crate provides:
//! - **Response builder**: chainable construction of synthetic HTTP responses
//! - **Request builder**: fabricated originating requests for captured-traffic checks
//! - **Assertion failures**: a dedicated error type for failed expectations
//! - **Expectation helpers**: `expect_*` functions comparing built values
//!
//! No wire traffic is parsed and no network I/O happens anywhere: values
//! are assembled in memory exactly as configured, including intentionally
//! malformed ones for negative tests.
//!
//! # Examples
//!
//! ```rust
//! use foundation_httptest::{expect_body_text, expect_status, FakeResponse, Status};
//!
//! let response = FakeResponse::builder()
//!     .with_status(Status::Created)
//!     .with_body_string("{\"id\": 7}")
//!     .build();
//!
//! expect_status(&response, Status::Created).expect("status should match");
//! expect_body_text(&response, "{\"id\": 7}").expect("body should match");
//! ```

pub mod assertions;
pub mod message;
pub mod request;
pub mod response;

// Re-export commonly used items
pub use assertions::{
    expect_body, expect_body_text, expect_header, expect_header_values, expect_headers_contain,
    expect_method, expect_status, expect_url, AssertionFailure, AssertionResult, BoxedError,
};
pub use message::{append_value, is_subset_of, Body, Header, Headers, Method, Proto, Status};
pub use request::{FakeRequest, FakeRequestBuilder, FakeRequestError, FakeRequestResult};
pub use response::{FakeResponse, FakeResponseBuilder, FakeResponseError, FakeResponseResult};
