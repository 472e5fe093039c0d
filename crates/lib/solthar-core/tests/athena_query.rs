use solthar_core::{AthenaClient, ClientError, RemoteEndpoint};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> AthenaClient {
    AthenaClient::new(RemoteEndpoint::new(
        Some(server.uri()),
        Some("secret".to_string()),
    ))
}

#[tokio::test]
async fn query_returns_the_response_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .and(header("x-api-key", "secret"))
        .and(body_json(serde_json::json!({"prompt": "hello"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"response": "hi there"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let answer = client_for(&server)
        .query_prompt("hello")
        .await
        .expect("query should succeed");

    assert_eq!(answer, "hi there");
}

#[tokio::test]
async fn query_without_response_field_renders_the_whole_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"other": 1})))
        .mount(&server)
        .await;

    let answer = client_for(&server)
        .query_prompt("hello")
        .await
        .expect("query should succeed");

    assert!(answer.contains("other"), "answer: {answer}");
}

#[tokio::test]
async fn query_with_non_json_body_returns_the_raw_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string("plain text answer"))
        .mount(&server)
        .await;

    let answer = client_for(&server)
        .query_prompt("hello")
        .await
        .expect("query should succeed");

    assert_eq!(answer, "plain text answer");
}

#[tokio::test]
async fn query_without_api_key_omits_the_auth_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"response": "ok"})),
        )
        .mount(&server)
        .await;

    let client = AthenaClient::new(RemoteEndpoint::new(Some(server.uri()), None));
    client.query_prompt("hello").await.expect("query succeeds");

    let requests = server
        .received_requests()
        .await
        .expect("request recording enabled");
    assert!(!requests[0].headers.contains_key("x-api-key"));
}

#[tokio::test]
async fn missing_base_url_fails_without_a_network_call() {
    let client = AthenaClient::new(RemoteEndpoint::default());

    let err = client
        .query_prompt("hello")
        .await
        .expect_err("unconfigured endpoint should fail");

    assert!(matches!(err, ClientError::Configuration(_)), "got {err:?}");
}

#[tokio::test]
async fn non_2xx_query_is_an_application_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .query_prompt("hello")
        .await
        .expect_err("503 should fail");

    assert!(
        matches!(
            err,
            ClientError::Application {
                status: Some(503),
                ..
            }
        ),
        "got {err:?}"
    );
}

#[tokio::test]
async fn unreachable_host_is_a_connectivity_error() {
    let client = AthenaClient::new(RemoteEndpoint::new(
        Some("http://127.0.0.1:1".to_string()),
        None,
    ));

    let err = client
        .query_prompt("hello")
        .await
        .expect_err("unreachable host should fail");

    assert!(matches!(err, ClientError::Connectivity(_)), "got {err:?}");
}
