//! HTTP endpoint server using Axum

use axum::{
    extract::{RawQuery, Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::Utc;
use rand::{rngs::StdRng, SeedableRng};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

use crate::endpoints::{self, Endpoint};
use crate::metrics::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub metrics: Arc<Metrics>,
}

/// All analytics routes answer through this one handler, keyed by the
/// `endpoint` query parameter. Unknown or unparseable input degrades to
/// the endpoint listing; the handler itself never fails.
async fn forex_handler(State(state): State<AppState>, RawQuery(query): RawQuery) -> Json<Value> {
    let param = query.as_deref().map(endpoint_param).unwrap_or_default();
    let endpoint = Endpoint::from_param(&param);

    state
        .metrics
        .endpoint_hits
        .with_label_values(&[endpoint.map_or("index", Endpoint::as_str)])
        .inc();

    let mut rng = StdRng::from_entropy();
    Json(endpoints::dispatch(endpoint, Utc::now(), &mut rng))
}

/// Pull the `endpoint` parameter out of a raw query string.
///
/// First occurrence wins; anything malformed decodes to whatever
/// `form_urlencoded` can make of it, so the caller always gets a string.
fn endpoint_param(query: &str) -> String {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "endpoint")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default()
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

fn apply_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
}

/// Cross-origin middleware matching the service's published contract:
/// every response carries the same three headers, and `OPTIONS` on any
/// path short-circuits to an empty 200 before routing.
async fn cors_middleware(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::OK.into_response();
        apply_cors_headers(response.headers_mut());
        return response;
    }

    let mut response = next.run(request).await;
    apply_cors_headers(response.headers_mut());
    response
}

/// Middleware to track HTTP request metrics
async fn track_metrics(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let start = Instant::now();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(start.elapsed().as_secs_f64());

    response
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/forex", get(forex_handler))
        .route("/metrics", get(metrics_handler))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    track_metrics,
                ))
                .layer(axum::middleware::from_fn(cors_middleware)),
        )
        .with_state(state)
}

pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let state = AppState { metrics };

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
