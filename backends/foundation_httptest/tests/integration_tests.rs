//! Scenario tests wiring the builders to the expectation helpers the way
//! a consuming test suite would.

use foundation_httptest::{
    append_value, expect_body_text, expect_header, expect_header_values, expect_headers_contain,
    expect_method, expect_status, expect_url, Body, FakeRequest, FakeResponse, Headers, Method,
    Proto, Status,
};

#[test]
fn test_full_response_construction_with_expectations() {
    let request = FakeRequest::builder()
        .with_method(Method::POST)
        .with_url("/v1/orders")
        .with_body_string("{\"sku\": 42}")
        .build()
        .expect("should build request");

    let mut builder = FakeResponse::builder();
    builder
        .with_proto(Proto::HTTP11)
        .with_status(201u16)
        .with_body_string("{\"id\": 7}")
        .with_request(request.clone());
    builder
        .add_header("Content-Type", "application/json")
        .expect("should accept header");

    let response = builder.build();

    expect_status(&response, Status::Created).expect("status should match");
    expect_header(&response, "content-type", "application/json").expect("header should match");
    expect_body_text(&response, "{\"id\": 7}").expect("body should match");

    let captured = response
        .request
        .expect("should carry the originating request");
    expect_method(&captured, Method::POST).expect("method should match");
    expect_url(&captured, "/v1/orders").expect("url should match");
}

#[test]
fn test_headers_from_configurator_and_single_adds_accumulate() {
    let mut builder = FakeResponse::builder();
    builder.with_headers(|headers| {
        append_value(headers, "Set-Cookie", "a=1");
    });
    builder
        .add_header("set-cookie", "b=2")
        .expect("should accept header");

    let response = builder.build();
    expect_header_values(&response, "SET-COOKIE", &["a=1", "b=2"])
        .expect("values should accumulate in order");
}

#[test]
fn test_failures_report_expected_versus_observed() {
    let response = FakeResponse::builder().with_status(500u16).build();

    let failure = expect_status(&response, 200u16).expect_err("status should not match");
    assert!(failure.message().contains("200 OK"));
    assert!(failure.message().contains("500 Internal Server Error"));
    assert!(std::error::Error::source(&failure).is_none());
}

#[test]
fn test_builder_reuse_yields_independent_snapshots() {
    let mut template = FakeResponse::builder();
    template
        .with_status(Status::OK)
        .with_body(Body::Text("base".into()));

    let first = template.build();
    template.with_status(Status::ServiceUnavailable);
    let second = template.build();

    expect_status(&first, 200u16).expect("first snapshot should keep its status");
    expect_status(&second, 503u16).expect("second snapshot should see the update");
    assert_eq!(first.body, second.body);
}

#[test]
fn test_subset_expectations_against_fabricated_traffic() {
    let mut builder = FakeResponse::builder();
    builder.with_headers(|headers| {
        append_value(headers, "X-Trace-Id", "abc");
        append_value(headers, "Content-Type", "text/plain");
        append_value(headers, "Cache-Control", "no-store");
    });
    let response = builder.build();

    let mut wanted = Headers::new();
    append_value(&mut wanted, "x-trace-id", "abc");
    expect_headers_contain(&response, &wanted).expect("subset should match");

    append_value(&mut wanted, "x-trace-id", "def");
    expect_headers_contain(&response, &wanted).expect_err("extra value should not match");
}

#[test]
fn test_intentionally_malformed_responses_are_representable() {
    // No semantic validation: a 204 with a body is fine to fabricate.
    let response = FakeResponse::builder()
        .with_status(204u16)
        .with_body_string("should not be here")
        .build();

    expect_status(&response, Status::NoContent).expect("status should match");
    expect_body_text(&response, "should not be here").expect("body should match");
}
