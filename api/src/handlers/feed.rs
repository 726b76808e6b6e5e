//! Feed handlers
//!
//! Preview endpoint: posts a batch of activity records against a feed name
//! and returns the converted items tagged with the requested format.
//! The format comes from a `.rss`/`.atom` suffix or the `Accept` header.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use serde::Serialize;

use crate::domain::entities::{ActionRecord, FeedItem};
use crate::error::AppError;
use crate::feed::{detect_feed_type_from_headers, FeedFormat};
use crate::AppState;

/// JSON response for a feed preview
#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub name: String,
    pub format: FeedFormat,
    /// Content type the serialized feed is served with
    pub content_type: &'static str,
    pub items: Vec<FeedItem>,
}

/// POST /feeds/:name
///
/// - `name.rss` or `Accept: application/rss+xml` → RSS
/// - `name.atom` or `Accept: application/atom+xml` → Atom
/// - Otherwise → 404
pub async fn preview_feed(
    State(state): State<AppState>,
    Path(name): Path<String>,
    headers: HeaderMap,
    Json(records): Json<Vec<ActionRecord>>,
) -> Result<Json<FeedResponse>, AppError> {
    let request = detect_feed_type_from_headers(&name, &headers);
    tracing::debug!(name = %name, is_feed = request.is_feed(), "Detected feed request");
    let Some(format) = request.format else {
        return Err(AppError::NotFound(format!("'{}' is not a feed", name)));
    };
    if request.name.is_empty() {
        return Err(AppError::BadRequest("feed name must not be empty".to_string()));
    }

    let items = state.feed_service.actions_to_items(&records)?;
    tracing::info!(
        "Built {} feed for {} with {} items",
        format,
        request.name,
        items.len()
    );

    Ok(Json(FeedResponse {
        name: request.name,
        format,
        content_type: format.content_type(),
        items,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use tower::ServiceExt;

    use crate::domain::entities::action::OpType;
    use crate::test_utils::{test_record, test_state};

    fn app() -> Router {
        crate::router(test_state())
    }

    fn post(uri: &str, accept: Option<&str>, body: String) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(accept) = accept {
            builder = builder.header(header::ACCEPT, accept);
        }
        builder.body(Body::from(body)).unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn rss_suffix_returns_items() {
        let records = vec![test_record(OpType::CreateRepo), test_record(OpType::StarRepo)];
        let body = serde_json::to_string(&records).unwrap();

        let response = app()
            .oneshot(post("/feeds/alice.rss", None, body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["name"], "alice");
        assert_eq!(json["format"], "rss");
        assert_eq!(json["items"].as_array().unwrap().len(), 2);
        assert_eq!(json["items"][0]["link"], "/alice/demo");
    }

    #[tokio::test]
    async fn atom_accept_header_selects_atom() {
        let body = serde_json::to_string(&vec![test_record(OpType::WatchRepo)]).unwrap();

        let response = app()
            .oneshot(post("/feeds/alice", Some("application/atom+xml"), body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["name"], "alice");
        assert_eq!(json["format"], "atom");
        assert_eq!(json["content_type"], "application/atom+xml;charset=utf-8");
    }

    #[tokio::test]
    async fn non_feed_request_is_not_found() {
        let response = app()
            .oneshot(post("/feeds/alice.txt", Some("text/html"), "[]".to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_action_type_is_unprocessable() {
        let mut record = test_record(OpType::CreateRepo);
        record.op_type = 77;
        let body = serde_json::to_string(&vec![record]).unwrap();

        let response = app()
            .oneshot(post("/feeds/alice.atom", None, body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = json_body(response).await;
        assert_eq!(json["details"], "unknown action type: 77");
    }

    #[tokio::test]
    async fn bare_suffix_is_bad_request() {
        let response = app()
            .oneshot(post("/feeds/.rss", None, "[]".to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
