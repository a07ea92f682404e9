// SPDX-License-Identifier: MPL-2.0
//! Integration tests for call submission against a mock HTTP endpoint.

use iced_dial::call::{self, CallError};
use iced_dial::domain::dialer::DialedNumber;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn dialed(digits: &str) -> DialedNumber {
    let mut number = DialedNumber::new();
    for c in digits.chars() {
        number.push(c);
    }
    number
}

#[tokio::test]
async fn call_posts_country_prefixed_number_as_json() {
    let server = MockServer::start().await;
    let agent = format!("IcedDial/{}", env!("CARGO_PKG_VERSION"));

    Mock::given(method("POST"))
        .and(path("/api/call"))
        .and(header("user-agent", agent.as_str()))
        .and(body_json(serde_json::json!({ "phoneNumber": "15551234567" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let number = dialed("5551234567");
    assert!(number.is_complete());

    let endpoint = format!("{}/api/call", server.uri());
    let result = call::initiate(&endpoint, &number.country_prefixed()).await;

    assert_eq!(result, Ok(()));
}

#[tokio::test]
async fn server_error_surfaces_the_status_code() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/call"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let endpoint = format!("{}/api/call", server.uri());
    let result = call::initiate(&endpoint, "15551234567").await;

    assert_eq!(result, Err(CallError::Status(500)));
}

#[tokio::test]
async fn client_error_surfaces_the_status_code() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/call"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let endpoint = format!("{}/api/call", server.uri());
    let result = call::initiate(&endpoint, "15551234567").await;

    assert_eq!(result, Err(CallError::Status(404)));
}

#[tokio::test]
async fn unreachable_endpoint_reports_a_request_error() {
    // Bind a port and release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind probe port");
    let port = listener
        .local_addr()
        .expect("Failed to read probe port")
        .port();
    drop(listener);

    let endpoint = format!("http://127.0.0.1:{port}/api/call");
    let result = call::initiate(&endpoint, "15551234567").await;

    assert!(matches!(result, Err(CallError::Request(_))));
}

#[tokio::test]
async fn response_body_is_ignored_on_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/call"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "status": "queued", "id": 42 })),
        )
        .mount(&server)
        .await;

    let endpoint = format!("{}/api/call", server.uri());
    let result = call::initiate(&endpoint, "15551234567").await;

    assert_eq!(result, Ok(()));
}
