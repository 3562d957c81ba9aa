use std::time::Instant;

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, Instrument};

use super::state::AppState;

/// Wrap each request in a span tagged with a request id, then log the
/// outcome once the handler returns.
pub(crate) async fn request_tracing<S>(
    State(state): State<AppState<S>>,
    request: Request<Body>,
    next: Next,
) -> Response
where
    S: Send + Sync + 'static,
{
    let request_id = state.next_request_id();
    let method = request.method().to_string();
    let route = request.uri().path().to_string();

    let span = tracing::info_span!(
        "http.request",
        request_id,
        method = %method,
        route = %route,
    );

    let started = Instant::now();
    let mut response = next.run(request).instrument(span.clone()).await;
    span.in_scope(|| {
        info!(
            status = response.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Request handled"
        );
    });

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert("x-request-id", value);
    }
    response
}
