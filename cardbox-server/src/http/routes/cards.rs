//! Card endpoints
//!
//! Every handler opens one session, runs one repository call and commits.
//! A session dropped on an error path rolls back.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{CardId, ValidJson};
use crate::http::server::AppState;
use crate::models::{CardResponse, CardSnapshot};

/// POST /snapshot - save a new card
async fn save_snapshot(
    State(state): State<Arc<AppState>>,
    ValidJson(snapshot): ValidJson<CardSnapshot>,
) -> Result<Json<CardResponse>, ApiError> {
    let mut session = state.store.begin().await?;
    let card = session.cards().insert(&snapshot).await?;
    session.commit().await?;

    tracing::debug!(card_id = card.id, "card saved");
    Ok(Json(CardResponse::from(card)))
}

/// GET /cards - all cards, newest first
async fn list_cards(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CardResponse>>, ApiError> {
    let mut session = state.store.begin().await?;
    let cards = session.cards().list().await?;
    session.commit().await?;

    Ok(Json(cards.into_iter().map(CardResponse::from).collect()))
}

/// GET /cards/{id}
async fn get_card(
    State(state): State<Arc<AppState>>,
    CardId(id): CardId,
) -> Result<Json<CardResponse>, ApiError> {
    let mut session = state.store.begin().await?;
    let card = session.cards().get(id).await?;
    session.commit().await?;

    Ok(Json(CardResponse::from(card)))
}

/// PUT /cards/{id} - replace all mutable fields
async fn update_card(
    State(state): State<Arc<AppState>>,
    CardId(id): CardId,
    ValidJson(snapshot): ValidJson<CardSnapshot>,
) -> Result<Json<CardResponse>, ApiError> {
    let mut session = state.store.begin().await?;
    let card = session.cards().update(id, &snapshot).await?;
    session.commit().await?;

    tracing::debug!(card_id = card.id, "card updated");
    Ok(Json(CardResponse::from(card)))
}

/// DELETE /cards/{id}
async fn delete_card(
    State(state): State<Arc<AppState>>,
    CardId(id): CardId,
) -> Result<StatusCode, ApiError> {
    let mut session = state.store.begin().await?;
    session.cards().delete(id).await?;
    session.commit().await?;

    tracing::debug!(card_id = id, "card deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Card routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/snapshot", post(save_snapshot))
        .route("/cards", get(list_cards))
        .route(
            "/cards/{id}",
            get(get_card).put(update_card).delete(delete_card),
        )
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::http::server::tests::lazy_app;

    // Requests below are rejected before a session is opened, so the
    // lazily-connected pool never dials the database.

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = lazy_app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn create_missing_template_is_422() {
        let (status, body) = send(json_request(
            Method::POST,
            "/snapshot",
            json!({"name": "Alice", "x": 10, "y": 20}),
        ))
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["loc"], json!(["body", "template"]));
        assert_eq!(body["detail"][0]["type"], "missing");
    }

    #[tokio::test]
    async fn create_with_wrong_type_is_422() {
        let (status, body) = send(json_request(
            Method::POST,
            "/snapshot",
            json!({"name": "Alice", "x": "ten", "y": 20, "template": "blue"}),
        ))
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["loc"][0], "body");
        assert_eq!(body["detail"][0]["type"], "json_data");
    }

    #[tokio::test]
    async fn create_with_invalid_json_is_422() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/snapshot")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"name\": "))
            .unwrap();

        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["type"], "json_invalid");
    }

    #[tokio::test]
    async fn create_without_content_type_is_422() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/snapshot")
            .body(Body::from(
                json!({"name": "Alice", "x": 10, "y": 20, "template": "blue"}).to_string(),
            ))
            .unwrap();

        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["type"], "content_type");
    }

    #[tokio::test]
    async fn non_integer_id_is_422() {
        for method in [Method::GET, Method::DELETE] {
            let request = Request::builder()
                .method(method)
                .uri("/cards/abc")
                .body(Body::empty())
                .unwrap();

            let (status, body) = send(request).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(body["detail"][0]["loc"], json!(["path", "id"]));
            assert_eq!(body["detail"][0]["type"], "int_parsing");
        }
    }

    #[tokio::test]
    async fn update_with_malformed_body_is_422() {
        let (status, body) = send(json_request(
            Method::PUT,
            "/cards/1",
            json!({"name": "Alice", "x": 10, "y": 20}),
        ))
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["loc"], json!(["body", "template"]));
    }

    #[tokio::test]
    async fn unsupported_method_is_405() {
        let request = Request::builder()
            .method(Method::PATCH)
            .uri("/cards/1")
            .body(Body::empty())
            .unwrap();

        let (status, _) = send(request).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
