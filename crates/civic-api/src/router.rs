use axum::{Router, http::StatusCode, middleware, routing::get};
use tower_http::trace::TraceLayer;

use crate::{
    ApiConfig, auth, community, dashboard,
    error::ApiError,
    finance,
    metrics::{metrics_handler, track_metrics},
    middleware::{
        cors::create_cors_layer, panic::catch_panic_layer, request_id::request_id_middleware,
        security_headers::apply_security_headers,
    },
    state::ApiState,
    user,
};

/// Routes without the middleware stack, still waiting for state.
pub fn router() -> Router<ApiState> {
    let api = Router::new()
        .merge(auth::routes())
        .merge(user::routes())
        .merge(finance::routes())
        .merge(community::routes())
        .merge(dashboard::routes());

    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics_handler))
        .nest("/api", api)
        .fallback(handler_404)
}

/// The full application: routes, state and every middleware layer.
pub fn app(state: ApiState, config: &ApiConfig) -> Router {
    let environment = state.environment;
    let routes = router()
        .with_state(state)
        .layer(catch_panic_layer())
        .layer(middleware::from_fn(track_metrics));

    apply_security_headers(routes, environment)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(create_cors_layer(config.origins(), environment))
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> ApiError {
    ApiError::NotFound("The requested resource was not found".to_string())
}
