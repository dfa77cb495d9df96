//! Fabricated request values, for linking responses to the traffic that
//! supposedly produced them and for checking captured requests.

use crate::message::{append_value, Body, Header, Headers, Method, Proto};

/// Synthetic HTTP request assembled by [`FakeRequestBuilder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FakeRequest {
    pub method: Method,
    pub url: String,
    pub proto: Proto,
    pub headers: Headers,
    pub body: Body,
}

impl FakeRequest {
    #[must_use]
    pub fn builder() -> FakeRequestBuilder {
        FakeRequestBuilder::default()
    }
}

pub type FakeRequestResult<T> = std::result::Result<T, FakeRequestError>;

#[derive(Debug)]
pub enum FakeRequestError {
    EmptyHeaderName,
    UrlIsRequired,
}

impl std::error::Error for FakeRequestError {}

impl core::fmt::Display for FakeRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Builder for [`FakeRequest`] values, with the same chaining and
/// snapshot rules as [`crate::response::FakeResponseBuilder`]. The URL is
/// the one required field.
#[derive(Default)]
pub struct FakeRequestBuilder {
    method: Option<Method>,
    url: Option<String>,
    proto: Option<Proto>,
    headers: Headers,
    body: Option<Body>,
}

impl FakeRequestBuilder {
    pub fn with_method<M: Into<Method>>(&mut self, method: M) -> &mut Self {
        self.method = Some(method.into());
        self
    }

    pub fn with_url<S: Into<String>>(&mut self, url: S) -> &mut Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_proto<P: Into<Proto>>(&mut self, proto: P) -> &mut Self {
        self.proto = Some(proto.into());
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

    /// Hands the in-progress header map to `configurator`, invoked
    /// exactly once before this call returns.
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
    /// Returns [`FakeRequestError::EmptyHeaderName`] if the name is
    /// empty. Nothing is mutated in that case.
    pub fn add_header<H: Into<Header>, S: Into<String>>(
        &mut self,
        key: H,
        value: S,
    ) -> FakeRequestResult<&mut Self> {
        let actual_key = key.into();
        if actual_key.is_empty() {
            return Err(FakeRequestError::EmptyHeaderName);
        }

        append_value(&mut self.headers, actual_key, value);
        Ok(self)
    }

    /// Builds a request snapshot of everything configured so far.
    /// Method defaults to `GET`, proto to `HTTP/1.1`, headers to empty
    /// and body to no content.
    ///
    /// # Errors
    /// Returns [`FakeRequestError::UrlIsRequired`] if no URL was set.
    pub fn build(&self) -> FakeRequestResult<FakeRequest> {
        let url = match &self.url {
            Some(inner) => inner.clone(),
            None => return Err(FakeRequestError::UrlIsRequired),
        };

        Ok(FakeRequest {
            url,
            method: self.method.clone().unwrap_or(Method::GET),
            proto: self.proto.clone().unwrap_or(Proto::HTTP11),
            headers: self.headers.clone(),
            body: self.body.clone().unwrap_or(Body::None),
        })
    }
}

#[cfg(test)]
mod request_builder_tests {
    use super::*;

    #[test]
    fn should_require_a_url() {
        let result = FakeRequest::builder().build();
        assert!(matches!(result, Err(FakeRequestError::UrlIsRequired)));
    }

    #[test]
    fn should_apply_request_defaults() {
        let request = FakeRequest::builder()
            .with_url("/health")
            .build()
            .expect("should build request");

        assert_eq!(request.method, Method::GET);
        assert_eq!(request.proto, Proto::HTTP11);
        assert!(request.headers.is_empty());
        assert_eq!(request.body, Body::None);
    }

    #[test]
    fn should_reject_an_empty_header_name() {
        let mut builder = FakeRequest::builder();
        builder.with_url("/health");

        let failed = builder.add_header("", "value");
        assert!(matches!(failed, Err(FakeRequestError::EmptyHeaderName)));

        let request = builder.build().expect("should build request");
        assert!(request.headers.is_empty());
    }

    #[test]
    fn should_snapshot_request_state_at_build_time() {
        let mut builder = FakeRequest::builder();
        builder.with_url("/orders").with_method("post");

        let first = builder.build().expect("should build request");
        builder.with_body_string("{\"sku\": 42}");

        assert_eq!(first.body, Body::None);

        let second = builder.build().expect("should build request");
        assert_eq!(second.body, Body::Text("{\"sku\": 42}".into()));
        assert_eq!(second.method, Method::POST);
    }

    #[test]
    fn should_configure_headers_through_the_configurator() {
        let request = FakeRequest::builder()
            .with_url("/ping")
            .with_headers(|headers| {
                append_value(headers, "Host", "localhost:8000");
            })
            .build()
            .expect("should build request");

        assert_eq!(
            request.headers.get(&Header::from("host")),
            Some(&vec!["localhost:8000".to_string()])
        );
    }
}
