use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    routing::get,
};
use civic_mock::{
    directory,
    envelope::{LeaderboardResponse, StakingResponse},
    leaderboard, staking,
};
use serde::Deserialize;

use crate::{
    ApiState,
    error::ApiError,
    metrics,
    validation::{parse_count, require_user_id},
};

/// Current-user row when the request does not identify one
const ANONYMOUS_ID: &str = "me";
const ANONYMOUS_NAME: &str = "You";

/// Create the community routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/community/leaderboard", get(get_leaderboard))
        .route("/community/staking", get(get_staking))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LeaderboardQuery {
    user_id: Option<String>,
    limit: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StakingQuery {
    user_id: Option<String>,
}

/// Leaderboard, regenerated on every call.
///
/// Never fails on input: unusable `userId` or `limit` values fall back to
/// the anonymous row and the default size.
async fn get_leaderboard(
    State(state): State<ApiState>,
    query: Result<Query<LeaderboardQuery>, QueryRejection>,
) -> Json<LeaderboardResponse> {
    let query = query.map_or_else(
        |rejection| {
            tracing::debug!(%rejection, "Ignoring leaderboard query");
            LeaderboardQuery::default()
        },
        |Query(query)| query,
    );
    let size = parse_count(
        "limit",
        query.limit.as_deref(),
        leaderboard::DEFAULT_SIZE as usize,
        leaderboard::MAX_SIZE as usize,
    )
    .map_or(leaderboard::DEFAULT_SIZE, |size| {
        u32::try_from(size).unwrap_or(leaderboard::MAX_SIZE)
    });
    let user_id = query
        .user_id
        .as_deref()
        .and_then(|raw| require_user_id(Some(raw)).ok())
        .unwrap_or(ANONYMOUS_ID);
    let name = directory::find_by_id(user_id).map_or(ANONYMOUS_NAME, |u| u.name);

    let mut rng = state.rng();
    let board = leaderboard::generate_leaderboard(size, &mut rng);
    let current_user = leaderboard::current_user_entry(user_id, name, size, &mut rng);
    let stats = leaderboard::stats(&board, &current_user, &mut rng);
    metrics::record_generated("leaderboard");

    Json(LeaderboardResponse {
        leaderboard: board,
        current_user,
        stats,
    })
}

/// Pools and the user's stakes
async fn get_staking(
    State(state): State<ApiState>,
    query: Result<Query<StakingQuery>, QueryRejection>,
) -> Result<Json<StakingResponse>, ApiError> {
    let Query(query) = query?;
    let user_id = require_user_id(query.user_id.as_deref())?;

    let mut rng = state.rng();
    let pools = staking::pools(&mut rng);
    let user_stakes = staking::user_stakes(user_id, state.now(), &mut rng);
    let summary = staking::summarize(&user_stakes, &pools);
    metrics::record_generated("staking");

    Ok(Json(StakingResponse {
        success: true,
        user_id: user_id.to_string(),
        pools,
        user_stakes,
        summary,
    }))
}
