//! Log output setup.
//!
//! Development prints pretty multi-line events with source locations;
//! production emits one JSON object per line with the current span flattened
//! in, so the request id travels with every event. `RUST_LOG` replaces the
//! default filter in both.

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Environment;

/// Filter used when `RUST_LOG` is unset.
pub const fn default_directives(env: Environment) -> &'static str {
    match env {
        Environment::Development => "debug,tower_http=debug,civic_api=debug,hyper=info",
        Environment::Production => "info,tower_http=info",
    }
}

/// Install the global subscriber for `env`.
pub fn init_tracing(env: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(*env)));

    let output = match env {
        Environment::Development => fmt::layer()
            .pretty()
            .with_file(true)
            .with_line_number(true)
            .boxed(),
        Environment::Production => fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(output.with_filter(filter))
        .init();

    tracing::info!(environment = ?env, "Tracing initialized");
}
