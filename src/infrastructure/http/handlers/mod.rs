//! HTTP Handlers

mod bible;
mod passage;
mod ping;
mod search;

pub use bible::*;
pub use passage::*;
pub use ping::*;
pub use search::*;

#[cfg(test)]
pub(crate) mod test_support {
    use axum::body::{to_bytes, Body};
    use axum::http::{header::CONTENT_TYPE, Method, Request};
    use axum::Router;
    use serde_json::Value;
    use std::sync::Arc;
    use tower::util::ServiceExt;

    use crate::application::ReadingOptions;
    use crate::infrastructure::http::{create_routes, AppState};
    use crate::test_fixtures::sample_index;

    pub(crate) fn app() -> Router {
        create_routes().with_state(Arc::new(AppState::new(
            sample_index(),
            ReadingOptions::default(),
        )))
    }

    async fn send(request: Request<Body>) -> Value {
        let response = app().oneshot(request).await.unwrap();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    pub(crate) async fn get_json(uri: &str) -> Value {
        send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    pub(crate) async fn post_json(uri: &str, body: Value) -> Value {
        send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }
}
