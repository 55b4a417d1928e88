pub mod auth;
pub mod community;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod finance;
pub mod metrics;
pub mod middleware;
pub mod router;
pub mod state;
pub mod tracing;
pub mod user;
pub mod validation;

pub use config::ApiConfig;
pub use state::ApiState;
