use crate::prelude::*;
use axum::{
    extract::State,
    response::sse::{Event, Sse},
    routing::{get, post},
    Json, Router,
};
use futures::stream::{self, Stream};
use std::convert::Infallible;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Path clients POST JSON-RPC messages to
const MESSAGE_PATH: &str = "/message";

pub async fn run_sse(options: super::cli::SseOptions, global: crate::Global) -> Result<()> {
    let addr = format!("{}:{}", options.host, options.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("MCP SSE transport listening on http://{addr}");
    log::info!("Events on http://{addr}/sse, messages on http://{addr}{MESSAGE_PATH}");

    axum::serve(listener, router(global))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

fn router(global: crate::Global) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/sse", get(events))
        .route(MESSAGE_PATH, post(message))
        .layer(cors)
        .with_state(Arc::new(global))
}

/// Announces where messages go, then closes
async fn events() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let endpoint = Event::default().event("endpoint").data(MESSAGE_PATH);
    Sse::new(stream::once(async move { Ok(endpoint) }))
}

/// The body is handed to the JSON-RPC layer as is, so malformed JSON comes
/// back as a -32700 response rather than an HTTP rejection.
async fn message(
    State(global): State<Arc<crate::Global>>,
    body: String,
) -> Json<super::JsonRpcResponse> {
    Json(super::handle_request(&body, &global).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use cdaylink_core::labels::Language;
    use serde_json::json;
    use tower::ServiceExt;

    fn create_test_global(lang: Option<Language>) -> crate::Global {
        crate::Global {
            lang,
            config_dir: None,
            verbose: false,
        }
    }

    async fn post_message(global: crate::Global, body: String) -> serde_json::Value {
        let request = Request::builder()
            .method("POST")
            .uri(MESSAGE_PATH)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();

        let response = router(global).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_message_convert_url() {
        let request = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": {"name": "convert_url", "arguments": {"url": "https://cday.kambria.io/cdcg-news"}}
        });

        let response = post_message(create_test_global(None), request.to_string()).await;

        assert_eq!(response["id"], 1);
        let text = response["result"]["content"][0]["text"].as_str().unwrap();
        let output: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(output["destination"], "https://cdcg.cday.global/news");
    }

    #[tokio::test]
    async fn test_message_uses_server_language() {
        let request = json!({
            "jsonrpc": "2.0",
            "id": 2,
            "method": "tools/call",
            "params": {"name": "convert_url", "arguments": {"url": "https://example.com/foo"}}
        });

        let response =
            post_message(create_test_global(Some(Language::Vi)), request.to_string()).await;

        assert_eq!(response["result"]["isError"], true);
        let text = response["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("Định dạng URL không hợp lệ"), "{text}");
    }

    #[tokio::test]
    async fn test_message_malformed_json() {
        let response = post_message(create_test_global(None), "{not json".to_string()).await;
        assert_eq!(response["error"]["code"], -32700);
    }

    #[tokio::test]
    async fn test_events_announce_message_endpoint() {
        let request = Request::builder().uri("/sse").body(Body::empty()).unwrap();

        let response = router(create_test_global(None)).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/event-stream"
        );

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.contains("event: endpoint"), "{body}");
        assert!(body.contains("data: /message"), "{body}");
    }
}
