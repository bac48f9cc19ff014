//! Integration tests: run `HttpChatBackend` against an in-process axum server.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::post;
use chatwidget_client::HttpChatBackend;
use chatwidget_core::{BackendError, ChatBackend, ChatRequest, UserId};
use serde_json::{Value, json};
use url::Url;

/// Serve `router` on an ephemeral port and return the chat endpoint URL.
async fn serve(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    Url::parse(&format!("http://{addr}/api/chat")).expect("endpoint url")
}

fn chat_route<H, T>(handler: H) -> Router
where
    H: axum::handler::Handler<T, ()>,
    T: 'static,
{
    Router::new().route("/api/chat", post(handler))
}

fn request(message: &str) -> ChatRequest {
    ChatRequest {
        user_id: UserId(1),
        message: message.into(),
    }
}

#[tokio::test]
async fn posts_json_body_with_content_type() {
    let seen: Arc<Mutex<Option<(String, Value)>>> = Arc::default();
    let captured = seen.clone();
    let router = chat_route(move |headers: HeaderMap, body: String| {
        let captured = captured.clone();
        async move {
            let content_type = headers
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            let value: Value = serde_json::from_str(&body).expect("request body is JSON");
            *captured.lock().unwrap() = Some((content_type, value));
            axum::Json(json!({ "response": "ok" }))
        }
    });

    let backend = HttpChatBackend::new(serve(router).await);
    backend.send(&request("hello")).await.expect("send");

    let (content_type, body) = seen.lock().unwrap().clone().expect("request captured");
    assert_eq!(content_type, "application/json");
    assert_eq!(body, json!({ "user_id": 1, "message": "hello" }));
}

#[tokio::test]
async fn returns_response_field() {
    let router = chat_route(|| async { axum::Json(json!({ "response": "Hello!" })) });
    let backend = HttpChatBackend::new(serve(router).await);

    let resp = backend.send(&request("hi")).await.expect("send");
    assert_eq!(resp.response.as_deref(), Some("Hello!"));
}

#[tokio::test]
async fn missing_response_field_is_not_an_error() {
    let router = chat_route(|| async { axum::Json(json!({})) });
    let backend = HttpChatBackend::new(serve(router).await);

    let resp = backend.send(&request("hi")).await.expect("send");
    assert_eq!(resp.response, None);
}

#[tokio::test]
async fn server_error_carries_status_and_detail() {
    let router = chat_route(|| async {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(json!({ "error": "retrieval failed" })),
        )
    });
    let backend = HttpChatBackend::new(serve(router).await);

    let err = backend.send(&request("hi")).await.unwrap_err();
    match err {
        BackendError::Status {
            status,
            reason,
            detail,
        } => {
            assert_eq!(status, 500);
            assert_eq!(reason, "Internal Server Error");
            assert_eq!(detail.as_deref(), Some("retrieval failed"));
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn plain_text_error_body_is_kept_as_detail() {
    let router = chat_route(|| async { (StatusCode::BAD_GATEWAY, "upstream down").into_response() });
    let backend = HttpChatBackend::new(serve(router).await);

    let err = backend.send(&request("hi")).await.unwrap_err();
    assert!(
        matches!(&err, BackendError::Status { status: 502, detail: Some(d), .. } if d == "upstream down"),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn unknown_route_is_a_status_error() {
    let router = Router::new().route("/elsewhere", post(|| async { "nope" }));
    let backend = HttpChatBackend::new(serve(router).await);

    let err = backend.send(&request("hi")).await.unwrap_err();
    assert!(matches!(err, BackendError::Status { status: 404, .. }));
}

#[tokio::test]
async fn non_json_success_body_is_a_decode_error() {
    let router = chat_route(|| async { "definitely not json" });
    let backend = HttpChatBackend::new(serve(router).await);

    let err = backend.send(&request("hi")).await.unwrap_err();
    assert!(matches!(err, BackendError::Decode(_)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    // Reserve a port, then free it so nothing is listening there.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let endpoint = Url::parse(&format!("http://{addr}/api/chat")).unwrap();
    let backend = HttpChatBackend::new(endpoint);

    let err = backend.send(&request("hi")).await.unwrap_err();
    assert!(matches!(err, BackendError::Transport(_)), "unexpected error: {err:?}");
}
