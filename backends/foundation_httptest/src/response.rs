//! Synthetic response values and the builder test code assembles them with.

use crate::message::{append_value, Body, Header, Headers, Proto, Status};
use crate::request::FakeRequest;

/// Synthetic HTTP response assembled by [`FakeResponseBuilder`].
///
/// Values are plain data: once built they are never mutated by this crate
/// and are safe to share with any number of readers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FakeResponse {
    pub proto: Proto,
    pub status: Status,
    pub headers: Headers,
    pub body: Body,
    pub request: Option<FakeRequest>,
}

impl FakeResponse {
    #[must_use]
    pub fn builder() -> FakeResponseBuilder {
        FakeResponseBuilder::default()
    }

    /// Creates a `200 OK` response carrying the given body.
    #[must_use]
    pub fn ok<B: Into<Body>>(body: B) -> FakeResponse {
        FakeResponse::builder()
            .with_status(Status::OK)
            .with_body(body.into())
            .build()
    }

    /// Creates a `302 Found` response redirecting to `location`.
    #[must_use]
    pub fn redirect<S: Into<String>>(location: S) -> FakeResponse {
        FakeResponse::builder()
            .with_status(Status::Found)
            .with_headers(|headers| append_value(headers, "Location", location))
            .build()
    }
}

pub type FakeResponseResult<T> = std::result::Result<T, FakeResponseError>;

#[derive(Debug)]
pub enum FakeResponseError {
    EmptyHeaderName,
}

impl std::error::Error for FakeResponseError {}

impl core::fmt::Display for FakeResponseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Accumulates response fields and produces [`FakeResponse`] snapshots.
///
/// Setters borrow the builder mutably and return the same handle, so a
/// response is assembled in one chain ending in
/// [`build`](FakeResponseBuilder::build). There is no locked state:
/// fields may be set in any order and any quantity, and further calls are
/// allowed after building.
#[derive(Default)]
pub struct FakeResponseBuilder {
    proto: Option<Proto>,
    status: Option<Status>,
    headers: Headers,
    body: Option<Body>,
    request: Option<FakeRequest>,
}

impl FakeResponseBuilder {
    pub fn with_proto<P: Into<Proto>>(&mut self, proto: P) -> &mut Self {
        self.proto = Some(proto.into());
        self
    }

    pub fn with_status<S: Into<Status>>(&mut self, status: S) -> &mut Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_body(&mut self, body: Body) -> &mut Self {
        self.body = Some(body);
        self
    }

    pub fn with_body_bytes<S: Into<Vec<u8>>>(&mut self, body: S) -> &mut Self {
        self.body = Some(Body::Bytes(body.into()));
        self
    }

    pub fn with_body_string<S: Into<String>>(&mut self, body: S) -> &mut Self {
        self.body = Some(Body::Text(body.into()));
        self
    }

    /// Hands the in-progress header map to `configurator` for direct
    /// mutation, for bulk or conditional setup beyond single
    /// [`add_header`](FakeResponseBuilder::add_header) calls. The
    /// configurator runs exactly once, synchronously, before this call
    /// returns.
    ///
    /// ```rust
    /// use foundation_httptest::{append_value, FakeResponse};
    ///
    /// let response = FakeResponse::builder()
    ///     .with_headers(|headers| {
    ///         append_value(headers, "X-Request-Id", "abc-123");
    ///     })
    ///     .build();
    ///
    /// assert_eq!(response.headers.len(), 1);
    /// ```
    pub fn with_headers<F>(&mut self, configurator: F) -> &mut Self
    where
        F: FnOnce(&mut Headers),
    {
        configurator(&mut self.headers);
        self
    }

    /// Appends `value` to the header named `key`, keeping any values
    /// already recorded for that name.
    ///
    /// # Errors
    /// Returns [`FakeResponseError::EmptyHeaderName`] if the name is
    /// empty. Nothing is mutated in that case.
    pub fn add_header<H: Into<Header>, S: Into<String>>(
        &mut self,
        key: H,
        value: S,
    ) -> FakeResponseResult<&mut Self> {
        let actual_key = key.into();
        if actual_key.is_empty() {
            return Err(FakeResponseError::EmptyHeaderName);
        }

        append_value(&mut self.headers, actual_key, value);
        Ok(self)
    }

    /// Attaches an informational reference to the request this response
    /// answers. Never validated against the response fields.
    pub fn with_request(&mut self, request: FakeRequest) -> &mut Self {
        self.request = Some(request);
        self
    }

    /// Builds a response snapshot of everything configured so far.
    ///
    /// Unset fields take their defaults: `HTTP/1.1`, `200 OK`, empty
    /// headers, no body, no request reference. The builder keeps its
    /// state, so repeated calls yield equal values and setter calls made
    /// afterwards never touch responses built earlier.
    #[must_use]
    pub fn build(&self) -> FakeResponse {
        FakeResponse {
            proto: self.proto.clone().unwrap_or(Proto::HTTP11),
            status: self.status.clone().unwrap_or(Status::OK),
            headers: self.headers.clone(),
            body: self.body.clone().unwrap_or(Body::None),
            request: self.request.clone(),
        }
    }
}
