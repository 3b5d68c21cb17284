//! Chat client integration tests
//!
//! Drives the real HTTP client against a throwaway in-process server that
//! plays the chat-completion API.
//!
//! Author: hephaex@gmail.com

use atende_core::AtendeError;
use atende_rag::{ChatClient, OpenAiChat};
use axum::{http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::json;

/// Bind a fake chat-completion upstream on an ephemeral port
async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn test_successful_completion_returns_first_choice() {
    let router = Router::new().route(
        "/chat/completions",
        post(|| async {
            Json(json!({
                "choices": [
                    {"message": {"role": "assistant", "content": "resposta gerada"}}
                ]
            }))
        }),
    );
    let base_url = spawn_upstream(router).await;

    let client = OpenAiChat::new("test-key").with_base_url(base_url);
    let answer = client.generate("pergunta").await.unwrap();

    assert_eq!(answer, "resposta gerada");
}

#[tokio::test]
async fn test_upstream_500_surfaces_status_and_body() {
    let router = Router::new().route(
        "/chat/completions",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response() }),
    );
    let base_url = spawn_upstream(router).await;

    let client = OpenAiChat::new("test-key").with_base_url(base_url);
    let err = client.generate("pergunta").await.unwrap_err();

    match err {
        AtendeError::Upstream { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "internal error");
        }
        other => panic!("expected Upstream error, got: {other}"),
    }
}

#[tokio::test]
async fn test_upstream_401_surfaces_status_and_body() {
    let router = Router::new().route(
        "/chat/completions",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": {"message": "Incorrect API key provided"}})),
            )
                .into_response()
        }),
    );
    let base_url = spawn_upstream(router).await;

    let client = OpenAiChat::new("bad-key").with_base_url(base_url);
    let err = client.generate("pergunta").await.unwrap_err();

    match err {
        AtendeError::Upstream { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("Incorrect API key"));
        }
        other => panic!("expected Upstream error, got: {other}"),
    }
}

#[tokio::test]
async fn test_empty_choices_is_malformed_not_a_crash() {
    let router = Router::new().route(
        "/chat/completions",
        post(|| async { Json(json!({"choices": []})) }),
    );
    let base_url = spawn_upstream(router).await;

    let client = OpenAiChat::new("test-key").with_base_url(base_url);
    let err = client.generate("pergunta").await.unwrap_err();

    assert!(matches!(err, AtendeError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_unexpected_body_shape_is_malformed() {
    let router = Router::new().route(
        "/chat/completions",
        post(|| async { Json(json!({"unexpected": true})) }),
    );
    let base_url = spawn_upstream(router).await;

    let client = OpenAiChat::new("test-key").with_base_url(base_url);
    let err = client.generate("pergunta").await.unwrap_err();

    assert!(matches!(err, AtendeError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_unreachable_upstream_is_a_transport_error() {
    // Bind and immediately drop a listener so the port refuses connections.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = OpenAiChat::new("test-key").with_base_url(format!("http://{addr}"));
    let err = client.generate("pergunta").await.unwrap_err();

    assert!(matches!(err, AtendeError::Transport(_)));
}
