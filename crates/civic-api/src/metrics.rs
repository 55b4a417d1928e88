//! Prometheus metrics.
//!
//! Requests are labelled by their route template (`/api/finance/accounts`),
//! never by the raw URI, so query strings and unknown paths cannot blow up the
//! label set.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};

use crate::state::ApiState;

const REQUESTS_TOTAL: &str = "http_requests_total";
const REQUEST_DURATION: &str = "http_request_duration_seconds";
const AUTH_EVENTS_TOTAL: &str = "auth_events_total";
const PAYLOADS_GENERATED_TOTAL: &str = "mock_payloads_generated_total";

/// Label for requests that matched no route
const UNMATCHED: &str = "unmatched";

/// Mock handlers answer in microseconds; the buckets lean low
const DURATION_BUCKETS: &[f64] = &[0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.5, 1.0];

/// Install the global Prometheus recorder.
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(Matcher::Full(REQUEST_DURATION.to_string()), DURATION_BUCKETS)?
        .install_recorder()?;

    Ok(handle)
}

/// Count every request and time it.
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let route = route_label(req.extensions().get::<MatchedPath>());
    let method = req.method().as_str().to_owned();
    let started = Instant::now();

    let response = next.run(req).await;

    let labels = [
        ("method", method),
        ("route", route),
        ("status", response.status().as_u16().to_string()),
    ];
    counter!(REQUESTS_TOTAL, &labels).increment(1);
    histogram!(REQUEST_DURATION, &labels).record(started.elapsed().as_secs_f64());

    response
}

fn route_label(matched: Option<&MatchedPath>) -> String {
    matched.map_or_else(|| UNMATCHED.to_string(), |path| path.as_str().to_string())
}

/// `GET /metrics`
pub async fn metrics_handler(State(state): State<ApiState>) -> Response {
    match state.metrics {
        Some(handle) => handle.render().into_response(),
        None => (StatusCode::NOT_FOUND, "Metrics are not enabled").into_response(),
    }
}

/// Count a login or registration attempt.
pub fn record_auth_event(event_type: &'static str, success: bool) {
    let outcome = if success { "success" } else { "failure" };
    counter!(AUTH_EVENTS_TOTAL, "type" => event_type, "outcome" => outcome).increment(1);
}

/// Count a generated mock payload by kind.
pub fn record_generated(kind: &'static str) {
    counter!(PAYLOADS_GENERATED_TOTAL, "kind" => kind).increment(1);
}
