/// Common test utilities and fixtures
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use encore_core::{Catalog, PlayableItem};
use encore_server::{build_state, create_router, ServerConfig};

/// Catalog of three playable songs plus one with no media
pub fn create_test_catalog() -> Catalog {
    Catalog::from_items(vec![
        PlayableItem::new("a", "Opening Night").with_audio("/media/a.mp3"),
        PlayableItem::new("b", "Backstage Blues").with_audio("/media/b.mp3"),
        PlayableItem::new("c", "Curtain Call").with_video("https://video.example/c"),
        PlayableItem::new("lost", "Lost Recording"),
    ])
    .unwrap()
}

/// Router over the test catalog with default playback settings
pub fn create_test_app() -> Router {
    let state = build_state(&ServerConfig::default(), create_test_catalog()).unwrap();
    create_router(state)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}
