use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    routing::get,
};
use civic_mock::{accounts, dashboard, envelope::DashboardResponse, profile};
use serde::Deserialize;

use crate::{ApiState, error::ApiError, metrics, validation::require_user_id};

/// Create the dashboard routes
pub fn routes() -> Router<ApiState> {
    Router::new().route("/dashboard/overview", get(get_overview))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OverviewQuery {
    user_id: Option<String>,
}

/// Everything the dashboard home page renders in one payload
async fn get_overview(
    State(state): State<ApiState>,
    query: Result<Query<OverviewQuery>, QueryRejection>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let Query(query) = query?;
    let user_id = require_user_id(query.user_id.as_deref())?;
    let now = state.now();
    let today = now.date_naive();

    let mut rng = state.rng();
    let social_credit = profile::social_credit(user_id, now, &mut rng);
    let net_worth = accounts::summarize(&accounts::generate_accounts(user_id, &mut rng)).net_worth;
    let balance_history = dashboard::balance_history(net_worth, today, &mut rng);
    metrics::record_generated("dashboard");

    Ok(Json(DashboardResponse {
        success: true,
        social_credit,
        net_worth,
        recent_activity: dashboard::recent_activity(now),
        civic_events: dashboard::civic_events(today),
        balance_history,
    }))
}
