//! Integration tests for the API Server
//!
//! Exercises the query-routed forex endpoint, the CORS contract, the
//! fallback listing, and the metrics exposition.


use axum::http::Method;
use axum_test::TestResponse;
use serde_json::Value;

use test_utils::TestApiServer;

fn assert_cors_headers(response: &TestResponse) {
    let headers = response.headers();
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    assert_eq!(
        headers
            .get("access-control-allow-methods")
            .and_then(|v| v.to_str().ok()),
        Some("GET, POST, OPTIONS")
    );
    assert_eq!(
        headers
            .get("access-control-allow-headers")
            .and_then(|v| v.to_str().ok()),
        Some("Content-Type")
    );
}

#[tokio::test]
async fn health_endpoint_reports_service_identity() {
    let app = TestApiServer::new();
    let response = app
        .server
        .get("/api/forex")
        .add_query_param("endpoint", "health")
        .await;
    assert_eq!(response.status_code(), 200);
    assert_cors_headers(&response);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "forex-analysis-api");
    assert_eq!(body["version"], "2.0.0");
    assert!(body["timestamp"].as_str().is_some());
    assert!(body.get("success").is_none());
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn performance_endpoint_matches_published_summary() {
    let app = TestApiServer::new();
    let response = app
        .server
        .get("/api/forex")
        .add_query_param("endpoint", "performance")
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["accuracy"], 0.714);
    assert_eq!(body["data"]["total_predictions"], 7);
    assert_eq!(body["data"]["correct_predictions"], 5);
    assert_eq!(body["data"]["total_profit"], 0.41);
    assert!(body["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn current_price_returns_the_fixed_quote() {
    let app = TestApiServer::new();
    let response = app
        .server
        .get("/api/forex")
        .add_query_param("endpoint", "current-price")
        .await;

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["symbol"], "GBP/JPY");
    assert_eq!(body["data"]["price"], 199.899);
    assert_eq!(body["data"]["bid"], 199.895);
    assert_eq!(body["data"]["ask"], 199.903);
}

#[tokio::test]
async fn missing_endpoint_falls_back_to_listing() {
    let app = TestApiServer::new();
    let response = app.server.get("/api/forex").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert!(body.get("success").is_none());
    let routes = body["available_endpoints"].as_array().expect("route list");
    assert_eq!(routes.len(), 10);
}

#[tokio::test]
async fn unknown_endpoint_falls_back_to_listing() {
    let app = TestApiServer::new();
    let response = app
        .server
        .get("/api/forex")
        .add_query_param("endpoint", "order-book")
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    let routes = body["available_endpoints"].as_array().expect("route list");
    assert_eq!(routes.len(), 10);
}

#[tokio::test]
async fn malformed_query_falls_back_to_listing() {
    let app = TestApiServer::new();
    // no parseable `endpoint` key in any of these
    for query in ["?", "?=health", "?&&&", "?endpoint"] {
        let response = app.server.get(&format!("/api/forex{query}")).await;
        assert_eq!(response.status_code(), 200, "query {query}");

        let body: Value = response.json();
        assert!(
            body.get("available_endpoints").is_some(),
            "query {query} did not fall back"
        );
    }
}

#[tokio::test]
async fn duplicate_endpoint_parameter_uses_first_occurrence() {
    let app = TestApiServer::new();
    let response = app
        .server
        .get("/api/forex?endpoint=health&endpoint=performance")
        .await;

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn price_history_returns_24_points() {
    let app = TestApiServer::new();
    let response = app
        .server
        .get("/api/forex")
        .add_query_param("endpoint", "price-history")
        .await;

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    let points = body["data"].as_array().expect("price points");
    assert_eq!(points.len(), 24);
    for point in points {
        assert!(point["timestamp"].as_str().is_some());
        assert!(point["price"].as_f64().is_some());
        let volume = point["volume"].as_u64().expect("volume");
        assert!((1000..=5000).contains(&volume));
    }
}

#[tokio::test]
async fn prediction_history_returns_seven_consistent_records() {
    let app = TestApiServer::new();
    let response = app
        .server
        .get("/api/forex")
        .add_query_param("endpoint", "prediction-history")
        .await;

    let body: Value = response.json();
    let records = body["data"].as_array().expect("prediction records");
    assert_eq!(records.len(), 7);
    for record in records {
        let is_correct = record["is_correct"].as_bool().expect("is_correct");
        assert_eq!(
            is_correct,
            record["predicted_direction"] == record["actual_direction"]
        );

        let profit = record["profit_loss"].as_f64().expect("profit_loss");
        if is_correct {
            assert!((-0.2005..=0.3005).contains(&profit));
        } else {
            assert!((-0.3005..=0.1005).contains(&profit));
        }
    }
}

#[tokio::test]
async fn technical_signals_rollup_counts_match_the_listing() {
    let app = TestApiServer::new();
    let response = app
        .server
        .get("/api/forex")
        .add_query_param("endpoint", "technical-signals")
        .await;

    let body: Value = response.json();
    let data = &body["data"];
    let signals = data["signals"].as_array().expect("signals");
    let total = data["bullish_signals"].as_u64().unwrap()
        + data["bearish_signals"].as_u64().unwrap()
        + data["neutral_signals"].as_u64().unwrap();
    assert_eq!(total, signals.len() as u64);
    assert_eq!(data["bullish_signals"], 1);
    assert_eq!(data["bearish_signals"], 4);
    assert_eq!(data["neutral_signals"], 0);
}

#[tokio::test]
async fn dashboard_data_aggregates_all_domains() {
    let app = TestApiServer::new();
    let response = app
        .server
        .get("/api/forex")
        .add_query_param("endpoint", "dashboard-data")
        .await;

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    let data = &body["data"];
    for domain in [
        "current_price",
        "technical_analysis",
        "fundamental_analysis",
        "ml_prediction",
        "performance",
    ] {
        assert!(data.get(domain).is_some(), "dashboard missing {domain}");
    }

    let target_time = data["ml_prediction"]["target_time"]
        .as_str()
        .expect("target_time");
    assert!(
        target_time.ends_with("T06:00:00Z"),
        "unexpected target_time {target_time}"
    );
}

#[tokio::test]
async fn options_returns_empty_body_with_cors_headers() {
    let app = TestApiServer::new();
    for path in ["/api/forex", "/metrics", "/anywhere/else"] {
        let response = app.server.method(Method::OPTIONS, path).await;
        assert_eq!(response.status_code(), 200, "path {path}");
        assert_cors_headers(&response);
        assert!(response.text().is_empty(), "path {path} body not empty");
    }
}

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_metrics() {
    let app = TestApiServer::new();
    let _ = app
        .server
        .get("/api/forex")
        .add_query_param("endpoint", "health")
        .await;

    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(
        body.contains("http_requests_total"),
        "Expected http_requests_total metric"
    );
    assert!(
        body.contains("http_request_duration_seconds"),
        "Expected http_request_duration_seconds metric"
    );
    assert!(
        body.contains("http_requests_in_flight"),
        "Expected http_requests_in_flight metric"
    );
    assert!(
        body.contains("forex_endpoint_requests_total{endpoint=\"health\"}"),
        "Expected per-endpoint counter for health"
    );
}

#[tokio::test]
async fn fallback_requests_count_under_the_index_label() {
    let app = TestApiServer::new();
    let _ = app.server.get("/api/forex").await;

    let body = app.server.get("/metrics").await.text();
    assert!(
        body.contains("forex_endpoint_requests_total{endpoint=\"index\"}"),
        "Expected per-endpoint counter for the fallback"
    );
}

#[tokio::test]
async fn api_server_is_stateless() {
    let app = TestApiServer::new();

    let response1 = app
        .server
        .get("/api/forex")
        .add_query_param("endpoint", "fundamental-analysis")
        .await;
    let response2 = app
        .server
        .get("/api/forex")
        .add_query_param("endpoint", "fundamental-analysis")
        .await;

    let body1: Value = response1.json();
    let body2: Value = response2.json();

    // identical payloads across calls; only the envelope timestamp moves
    assert_eq!(body1["data"], body2["data"]);
}
