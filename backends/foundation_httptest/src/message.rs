//! Value types shared by the fabricated request and response builders.

use derive_more::From;
use std::{collections::BTreeMap, convert::Infallible, str::FromStr};

// -- HTTP Artefacts

/// Protocol version attached to fabricated messages.
///
/// Conversions are total: any representation a test supplies is accepted,
/// with unrecognized ones kept as [`Proto::Custom`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Proto {
    HTTP10,
    HTTP11,
    HTTP20,
    HTTP30,
    Custom(String),
}

impl From<String> for Proto {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<&str> for Proto {
    fn from(value: &str) -> Self {
        let upper = value.to_uppercase();
        match upper.as_str() {
            "HTTP/1.0" | "HTTP 1.0" | "HTTP10" | "HTTP_10" | "1.0" => Self::HTTP10,
            "HTTP/1.1" | "HTTP 1.1" | "HTTP11" | "HTTP_11" | "1.1" => Self::HTTP11,
            "HTTP/2.0" | "HTTP 2.0" | "HTTP20" | "HTTP_20" | "2.0" | "2" => Self::HTTP20,
            "HTTP/3.0" | "HTTP 3.0" | "HTTP30" | "HTTP_30" | "3.0" | "3" => Self::HTTP30,
            _ => Self::Custom(upper),
        }
    }
}

impl FromStr for Proto {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl core::fmt::Display for Proto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HTTP10 => write!(f, "HTTP/1.0"),
            Self::HTTP11 => write!(f, "HTTP/1.1"),
            Self::HTTP20 => write!(f, "HTTP/2.0"),
            Self::HTTP30 => write!(f, "HTTP/3.0"),
            Self::Custom(inner) => write!(f, "{inner}"),
        }
    }
}

/// HTTP methods
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Method {
    HEAD,
    GET,
    POST,
    PUT,
    DELETE,
    PATCH,
    OPTIONS,
    CONNECT,
    TRACE,
    Custom(String),
}

impl Method {
    /// Returns the method's wire spelling.
    #[must_use]
    pub fn value(&self) -> String {
        match self {
            Method::HEAD => "HEAD".into(),
            Method::GET => "GET".into(),
            Method::POST => "POST".into(),
            Method::PUT => "PUT".into(),
            Method::DELETE => "DELETE".into(),
            Method::PATCH => "PATCH".into(),
            Method::OPTIONS => "OPTIONS".into(),
            Method::CONNECT => "CONNECT".into(),
            Method::TRACE => "TRACE".into(),
            Method::Custom(inner) => inner.clone(),
        }
    }
}

impl From<&str> for Method {
    fn from(value: &str) -> Self {
        match value.to_uppercase().as_str() {
            "HEAD" => Self::HEAD,
            "GET" => Self::GET,
            "POST" => Self::POST,
            "PUT" => Self::PUT,
            "DELETE" => Self::DELETE,
            "PATCH" => Self::PATCH,
            "TRACE" => Self::TRACE,
            "CONNECT" => Self::CONNECT,
            "OPTION" | "OPTIONS" => Self::OPTIONS,
            _ => Self::Custom(value.into()),
        }
    }
}

impl From<String> for Method {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl core::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// HTTP status
///
/// Carries the common IANA codes as named variants; any other code is
/// representable through [`Status::Numbered`], so no range validation
/// happens anywhere.
#[derive(Debug, Eq, PartialEq, PartialOrd, Clone)]
#[repr(u64)]
pub enum Status {
    Continue = 100,
    SwitchingProtocols = 101,
    Processing = 102,
    OK = 200,
    Created = 201,
    Accepted = 202,
    NonAuthoritativeInformation = 203,
    NoContent = 204,
    ResetContent = 205,
    PartialContent = 206,
    MultiStatus = 207,
    MultipleChoices = 300,
    MovedPermanently = 301,
    Found = 302,
    SeeOther = 303,
    NotModified = 304,
    UseProxy = 305,
    TemporaryRedirect = 307,
    PermanentRedirect = 308,
    BadRequest = 400,
    Unauthorized = 401,
    PaymentRequired = 402,
    Forbidden = 403,
    NotFound = 404,
    MethodNotAllowed = 405,
    NotAcceptable = 406,
    ProxyAuthenticationRequired = 407,
    RequestTimeout = 408,
    Conflict = 409,
    Gone = 410,
    LengthRequired = 411,
    PreconditionFailed = 412,
    PayloadTooLarge = 413,
    UriTooLong = 414,
    UnsupportedMediaType = 415,
    RangeNotSatisfiable = 416,
    ExpectationFailed = 417,
    ImATeapot = 418,
    UnprocessableEntity = 422,
    Locked = 423,
    FailedDependency = 424,
    UpgradeRequired = 426,
    PreconditionRequired = 428,
    TooManyRequests = 429,
    RequestHeaderFieldsTooLarge = 431,
    InternalServerError = 500,
    NotImplemented = 501,
    BadGateway = 502,
    ServiceUnavailable = 503,
    GatewayTimeout = 504,
    HttpVersionNotSupported = 505,
    InsufficientStorage = 507,
    NetworkAuthenticationRequired = 511,
    Numbered(u16, String),
}

impl Status {
    /// Returns the numeric code of this status.
    #[must_use]
    pub fn code(&self) -> u16 {
        match self {
            Self::Continue => 100,
            Self::SwitchingProtocols => 101,
            Self::Processing => 102,
            Self::OK => 200,
            Self::Created => 201,
            Self::Accepted => 202,
            Self::NonAuthoritativeInformation => 203,
            Self::NoContent => 204,
            Self::ResetContent => 205,
            Self::PartialContent => 206,
            Self::MultiStatus => 207,
            Self::MultipleChoices => 300,
            Self::MovedPermanently => 301,
            Self::Found => 302,
            Self::SeeOther => 303,
            Self::NotModified => 304,
            Self::UseProxy => 305,
            Self::TemporaryRedirect => 307,
            Self::PermanentRedirect => 308,
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::PaymentRequired => 402,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::NotAcceptable => 406,
            Self::ProxyAuthenticationRequired => 407,
            Self::RequestTimeout => 408,
            Self::Conflict => 409,
            Self::Gone => 410,
            Self::LengthRequired => 411,
            Self::PreconditionFailed => 412,
            Self::PayloadTooLarge => 413,
            Self::UriTooLong => 414,
            Self::UnsupportedMediaType => 415,
            Self::RangeNotSatisfiable => 416,
            Self::ExpectationFailed => 417,
            Self::ImATeapot => 418,
            Self::UnprocessableEntity => 422,
            Self::Locked => 423,
            Self::FailedDependency => 424,
            Self::UpgradeRequired => 426,
            Self::PreconditionRequired => 428,
            Self::TooManyRequests => 429,
            Self::RequestHeaderFieldsTooLarge => 431,
            Self::InternalServerError => 500,
            Self::NotImplemented => 501,
            Self::BadGateway => 502,
            Self::ServiceUnavailable => 503,
            Self::GatewayTimeout => 504,
            Self::HttpVersionNotSupported => 505,
            Self::InsufficientStorage => 507,
            Self::NetworkAuthenticationRequired => 511,
            Self::Numbered(code, _) => *code,
        }
    }

    /// Returns the reason phrase paired with this status.
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            Self::Continue => "Continue",
            Self::SwitchingProtocols => "Switching Protocols",
            Self::Processing => "Processing",
            Self::OK => "OK",
            Self::Created => "Created",
            Self::Accepted => "Accepted",
            Self::NonAuthoritativeInformation => "Non Authoritative Information",
            Self::NoContent => "No Content",
            Self::ResetContent => "Reset Content",
            Self::PartialContent => "Partial Content",
            Self::MultiStatus => "Multi Status",
            Self::MultipleChoices => "Multiple Choices",
            Self::MovedPermanently => "Moved Permanently",
            Self::Found => "Found",
            Self::SeeOther => "See Other",
            Self::NotModified => "Not Modified",
            Self::UseProxy => "Use Proxy",
            Self::TemporaryRedirect => "Temporary Redirect",
            Self::PermanentRedirect => "Permanent Redirect",
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::PaymentRequired => "Payment Required",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::MethodNotAllowed => "Method Not Allowed",
            Self::NotAcceptable => "Not Acceptable",
            Self::ProxyAuthenticationRequired => "Proxy Authentication Required",
            Self::RequestTimeout => "Request Timeout",
            Self::Conflict => "Conflict",
            Self::Gone => "Gone",
            Self::LengthRequired => "Length Required",
            Self::PreconditionFailed => "Precondition Failed",
            Self::PayloadTooLarge => "Payload Too Large",
            Self::UriTooLong => "URI Too Long",
            Self::UnsupportedMediaType => "Unsupported Media Type",
            Self::RangeNotSatisfiable => "Range Not Satisfiable",
            Self::ExpectationFailed => "Expectation Failed",
            Self::ImATeapot => "I'm A Teapot",
            Self::UnprocessableEntity => "Unprocessable Entity",
            Self::Locked => "Locked",
            Self::FailedDependency => "Failed Dependency",
            Self::UpgradeRequired => "Upgrade Required",
            Self::PreconditionRequired => "Precondition Required",
            Self::TooManyRequests => "Too Many Requests",
            Self::RequestHeaderFieldsTooLarge => "Request Header Fields Too Large",
            Self::InternalServerError => "Internal Server Error",
            Self::NotImplemented => "Not Implemented",
            Self::BadGateway => "Bad Gateway",
            Self::ServiceUnavailable => "Service Unavailable",
            Self::GatewayTimeout => "Gateway Timeout",
            Self::HttpVersionNotSupported => "Http Version Not Supported",
            Self::InsufficientStorage => "Insufficient Storage",
            Self::NetworkAuthenticationRequired => "Network Authentication Required",
            Self::Numbered(_, description) => description,
        }
    }

    /// Returns the status' full description, e.g. `404 Not Found`.
    #[must_use]
    pub fn status_line(&self) -> String {
        format!("{} {}", self.code(), self.reason())
    }
}

impl From<u16> for Status {
    fn from(value: u16) -> Self {
        match value {
            100 => Self::Continue,
            101 => Self::SwitchingProtocols,
            102 => Self::Processing,
            200 => Self::OK,
            201 => Self::Created,
            202 => Self::Accepted,
            203 => Self::NonAuthoritativeInformation,
            204 => Self::NoContent,
            205 => Self::ResetContent,
            206 => Self::PartialContent,
            207 => Self::MultiStatus,
            300 => Self::MultipleChoices,
            301 => Self::MovedPermanently,
            302 => Self::Found,
            303 => Self::SeeOther,
            304 => Self::NotModified,
            305 => Self::UseProxy,
            307 => Self::TemporaryRedirect,
            308 => Self::PermanentRedirect,
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            402 => Self::PaymentRequired,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            405 => Self::MethodNotAllowed,
            406 => Self::NotAcceptable,
            407 => Self::ProxyAuthenticationRequired,
            408 => Self::RequestTimeout,
            409 => Self::Conflict,
            410 => Self::Gone,
            411 => Self::LengthRequired,
            412 => Self::PreconditionFailed,
            413 => Self::PayloadTooLarge,
            414 => Self::UriTooLong,
            415 => Self::UnsupportedMediaType,
            416 => Self::RangeNotSatisfiable,
            417 => Self::ExpectationFailed,
            418 => Self::ImATeapot,
            422 => Self::UnprocessableEntity,
            423 => Self::Locked,
            424 => Self::FailedDependency,
            426 => Self::UpgradeRequired,
            428 => Self::PreconditionRequired,
            429 => Self::TooManyRequests,
            431 => Self::RequestHeaderFieldsTooLarge,
            500 => Self::InternalServerError,
            501 => Self::NotImplemented,
            502 => Self::BadGateway,
            503 => Self::ServiceUnavailable,
            504 => Self::GatewayTimeout,
            505 => Self::HttpVersionNotSupported,
            507 => Self::InsufficientStorage,
            511 => Self::NetworkAuthenticationRequired,
            _ => Self::Numbered(value, "Unknown".into()),
        }
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.status_line())
    }
}

/// Header name with case-insensitive identity.
///
/// Names are normalized to their uppercase canonical form on construction,
/// so lookups and equality ignore whatever casing a test supplied.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Header(String);

impl Header {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(value.into().to_uppercase())
    }

    /// Returns the canonical (uppercase) form of the name.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Header {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Header {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl core::fmt::Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered multi-map of header names to their recorded values. Keys are
/// unique under case-insensitive comparison; values per key keep their
/// insertion order.
pub type Headers = BTreeMap<Header, Vec<String>>;

/// Appends `value` to the values recorded for `key`, keeping any earlier
/// values for that name.
pub fn append_value<H: Into<Header>, S: Into<String>>(headers: &mut Headers, key: H, value: S) {
    let actual_key = key.into();
    if let Some(values) = headers.get_mut(&actual_key) {
        values.push(value.into());
    } else {
        headers.insert(actual_key, vec![value.into()]);
    }
}

/// `is_subset_of` returns true if every entry in `this` appears in `other`
/// with the same values.
#[must_use]
pub fn is_subset_of(this: &Headers, other: &Headers) -> bool {
    for (key, value) in this {
        match other.get(key) {
            Some(other_value) => {
                if value == other_value {
                    continue;
                }
                return false;
            }
            None => return false,
        }
    }
    true
}

/// Opaque message payload.
///
/// [`Body::None`] is the explicit no-content marker; text and byte
/// payloads are carried as supplied, never inspected.
#[derive(From, Clone, Debug, PartialEq, Eq)]
pub enum Body {
    None,
    Text(String),
    Bytes(Vec<u8>),
}

impl From<&str> for Body {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl core::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "<no content>"),
            Self::Text(inner) => write!(f, "{inner}"),
            Self::Bytes(inner) => write!(f, "<{} bytes>", inner.len()),
        }
    }
}

#[cfg(test)]
mod message_tests {
    use super::*;

    #[test]
    fn should_treat_header_names_case_insensitively() {
        assert_eq!(Header::from("content-type"), Header::from("CONTENT-TYPE"));
        assert_eq!(Header::from("X-Request-Id").value(), "X-REQUEST-ID");
    }

    #[test]
    fn should_append_header_values_in_insertion_order() {
        let mut headers = Headers::new();
        append_value(&mut headers, "X-Test", "a");
        append_value(&mut headers, "x-test", "b");

        assert_eq!(
            headers.get(&Header::from("X-TEST")),
            Some(&vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn should_match_header_subsets() {
        let mut wanted = Headers::new();
        append_value(&mut wanted, "Host", "localhost:8000");

        let mut observed = Headers::new();
        append_value(&mut observed, "HOST", "localhost:8000");
        append_value(&mut observed, "Content-Type", "text/plain");

        assert!(is_subset_of(&wanted, &observed));
        assert!(!is_subset_of(&observed, &wanted));
    }

    #[test]
    fn should_map_known_status_codes_to_named_variants() {
        assert_eq!(Status::from(404u16), Status::NotFound);
        assert_eq!(Status::NotFound.code(), 404);
        assert_eq!(Status::NotFound.status_line(), "404 Not Found");
    }

    #[test]
    fn should_keep_unknown_status_codes_numbered() {
        let status = Status::from(799u16);
        assert_eq!(status, Status::Numbered(799, "Unknown".into()));
        assert_eq!(status.code(), 799);
        assert_eq!(status.status_line(), "799 Unknown");
    }

    #[test]
    fn should_accept_any_protocol_representation() {
        assert_eq!(Proto::from("HTTP/1.1"), Proto::HTTP11);
        assert_eq!(Proto::from("1.1"), Proto::HTTP11);
        assert_eq!(Proto::from("http20"), Proto::HTTP20);
        assert_eq!(Proto::from("SPDY/3.1"), Proto::Custom("SPDY/3.1".into()));
        assert_eq!(
            "HTTP/3.0".parse::<Proto>().expect("should always parse"),
            Proto::HTTP30
        );
    }

    #[test]
    fn should_convert_method_strings() {
        assert_eq!(Method::from("get"), Method::GET);
        assert_eq!(Method::from("BREW"), Method::Custom("BREW".into()));
        assert_eq!(Method::GET.value(), "GET");
    }

    #[test]
    fn should_convert_payloads_into_bodies() {
        assert_eq!(
            Body::from(String::from("hello")),
            Body::Text("hello".into())
        );
        assert_eq!(Body::from("hello"), Body::Text("hello".into()));
        assert_eq!(Body::from(vec![1u8, 2, 3]), Body::Bytes(vec![1, 2, 3]));
    }

    #[test]
    fn should_render_display_forms_for_diagnostics() {
        assert_eq!(Proto::HTTP11.to_string(), "HTTP/1.1");
        assert_eq!(Proto::Custom("SPDY/3.1".into()).to_string(), "SPDY/3.1");
        assert_eq!(Status::NotFound.to_string(), "404 Not Found");
        assert_eq!(Method::GET.to_string(), "GET");
        assert_eq!(Header::from("x-request-id").to_string(), "X-REQUEST-ID");
        assert_eq!(Body::None.to_string(), "<no content>");
        assert_eq!(Body::Text("created".into()).to_string(), "created");
        assert_eq!(Body::Bytes(vec![1u8, 2, 3]).to_string(), "<3 bytes>");
    }
}
