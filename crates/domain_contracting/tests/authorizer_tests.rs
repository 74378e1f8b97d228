//! External authorizer adapter tests
//!
//! The dependency is stubbed with a local axum server on an ephemeral port,
//! so every translation path (grant, decline, casing, bad status, bad
//! payload, unreachable host) is exercised without leaving the process.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use domain_contracting::{
    AuthorizationDecision, AuthorizationPort, AuthorizerConfig, ExternalAuthorizer,
};
use serde_json::json;
use tokio::net::TcpListener;

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/authorize")
}

fn authorizer(endpoint: String) -> ExternalAuthorizer {
    ExternalAuthorizer::new(AuthorizerConfig {
        endpoint,
        timeout_secs: 2,
    })
    .unwrap()
}

#[tokio::test]
async fn grants_when_the_flag_is_true() {
    let endpoint = serve(Router::new().route(
        "/authorize",
        get(|| async {
            Json(json!({
                "status": "success",
                "message": "go ahead",
                "data": { "authorization": true }
            }))
        }),
    ))
    .await;

    let result = authorizer(endpoint).authorize().await;
    assert_eq!(result.decision, AuthorizationDecision::Authorized);
    assert_eq!(result.message.as_deref(), Some("go ahead"));
}

#[tokio::test]
async fn declines_when_the_flag_is_false() {
    let endpoint = serve(Router::new().route(
        "/authorize",
        get(|| async {
            Json(json!({
                "status": "fail",
                "data": { "authorization": false }
            }))
        }),
    ))
    .await;

    let result = authorizer(endpoint).authorize().await;
    assert_eq!(result.decision, AuthorizationDecision::Denied);
}

#[tokio::test]
async fn accepts_capitalized_field_names() {
    let endpoint = serve(Router::new().route(
        "/authorize",
        get(|| async {
            Json(json!({
                "Status": "success",
                "Message": "Authorized",
                "Data": { "Authorization": true }
            }))
        }),
    ))
    .await;

    let result = authorizer(endpoint).authorize().await;
    assert!(result.is_authorized());
}

#[tokio::test]
async fn non_success_status_fails_closed() {
    let endpoint = serve(Router::new().route(
        "/authorize",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE.into_response() }),
    ))
    .await;

    let result = authorizer(endpoint).authorize().await;
    assert_eq!(result.decision, AuthorizationDecision::Unreachable);
    assert!(result.message.is_some());
}

#[tokio::test]
async fn malformed_payload_fails_closed() {
    let endpoint = serve(Router::new().route(
        "/authorize",
        get(|| async { Json(json!({ "status": "success" })) }),
    ))
    .await;

    let result = authorizer(endpoint).authorize().await;
    assert_eq!(result.decision, AuthorizationDecision::Unreachable);
}

#[tokio::test]
async fn unreachable_host_fails_closed() {
    // Bind then drop to get a port with nothing listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = authorizer(format!("http://{addr}/authorize"))
        .authorize()
        .await;
    assert_eq!(result.decision, AuthorizationDecision::Unreachable);
    assert!(!result.is_authorized());
}
