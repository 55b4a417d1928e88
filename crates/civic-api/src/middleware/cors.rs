use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::Environment;

/// Creates the CORS layer for the dashboard frontend.
///
/// With no configured origins, development falls back to a permissive layer
/// so a local frontend on any port works; production then allows no
/// cross-origin requests at all.
pub fn create_cors_layer(allowed_origins: Vec<String>, environment: Environment) -> CorsLayer {
    let origins = allowed_origins
        .into_iter()
        .filter_map(|s| s.parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();

    if origins.is_empty() && environment.is_development() {
        return CorsLayer::very_permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}
