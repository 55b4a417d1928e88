//! Converts handler panics into the standard 500 envelope.

use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use civic_mock::envelope::ErrorBody;
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::INTERNAL_ERROR_MESSAGE;

/// Layer that logs a panicking handler and answers with a generic 500.
pub fn catch_panic_layer() -> CatchPanicLayer<fn(Box<dyn Any + Send + 'static>) -> Response> {
    CatchPanicLayer::custom(handle_panic as fn(Box<dyn Any + Send + 'static>) -> Response)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            success: false,
            message: INTERNAL_ERROR_MESSAGE.to_string(),
        }),
    )
        .into_response()
}
