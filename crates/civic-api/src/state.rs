use chrono::{DateTime, Utc};
use civic_mock::{MockRandom, rng::StdRng};
use metrics_exporter_prometheus::PrometheusHandle;

use crate::{ApiConfig, auth::service::CredentialPolicy, config::Environment};

/// Shared, immutable application state cloned into every handler.
#[derive(Clone)]
pub struct ApiState {
    pub random: MockRandom,
    pub credentials: CredentialPolicy,
    pub environment: Environment,
    pub metrics: Option<PrometheusHandle>,
    /// Fixed "now" for reproducible payloads; `None` uses the wall clock
    pub frozen_time: Option<DateTime<Utc>>,
}

impl std::fmt::Debug for ApiState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiState")
            .field("random", &self.random)
            .field("credentials", &self.credentials)
            .field("environment", &self.environment)
            .field("metrics", &self.metrics.is_some())
            .field("frozen_time", &self.frozen_time)
            .finish()
    }
}

impl ApiState {
    pub fn new(config: &ApiConfig) -> Self {
        let credentials = CredentialPolicy {
            allow_demo_passwords: config.allow_demo_passwords,
        };
        if credentials.allow_demo_passwords {
            tracing::warn!(
                "Demo fallback passwords are enabled; any directory user can log in with them"
            );
        }
        if let Some(seed) = config.mock_seed {
            tracing::info!(seed, "Mock generators are seeded");
        }

        Self {
            random: MockRandom::from_seed(config.mock_seed),
            credentials,
            environment: config.env,
            metrics: None,
            frozen_time: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    pub const fn with_frozen_time(mut self, now: DateTime<Utc>) -> Self {
        self.frozen_time = Some(now);
        self
    }

    /// Current time as seen by the generators.
    pub fn now(&self) -> DateTime<Utc> {
        self.frozen_time.unwrap_or_else(Utc::now)
    }

    /// Fresh random generator for one request.
    pub fn rng(&self) -> StdRng {
        self.random.rng()
    }
}
