use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    routing::get,
};
use civic_mock::{
    accounts,
    envelope::{AccountsResponse, TransactionsResponse},
    transactions,
};
use serde::Deserialize;

use crate::{
    ApiState,
    error::ApiError,
    metrics,
    validation::{parse_count, require_user_id},
};

/// Create the finance routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/finance/accounts", get(get_accounts))
        .route("/finance/transactions", get(get_transactions))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountsQuery {
    user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransactionsQuery {
    user_id: Option<String>,
    limit: Option<String>,
    offset: Option<String>,
}

/// Accounts with freshly generated balances and their aggregates
async fn get_accounts(
    State(state): State<ApiState>,
    query: Result<Query<AccountsQuery>, QueryRejection>,
) -> Result<Json<AccountsResponse>, ApiError> {
    let Query(query) = query?;
    let user_id = require_user_id(query.user_id.as_deref())?;

    let accounts = accounts::generate_accounts(user_id, &mut state.rng());
    let summary = accounts::summarize(&accounts);
    metrics::record_generated("accounts");

    Ok(Json(AccountsResponse {
        success: true,
        accounts,
        summary,
    }))
}

/// One page of the ledger; the summary always covers the whole ledger
async fn get_transactions(
    State(state): State<ApiState>,
    query: Result<Query<TransactionsQuery>, QueryRejection>,
) -> Result<Json<TransactionsResponse>, ApiError> {
    let Query(query) = query?;
    let user_id = require_user_id(query.user_id.as_deref())?;
    let limit = parse_count(
        "limit",
        query.limit.as_deref(),
        transactions::DEFAULT_LIMIT,
        transactions::MAX_LIMIT,
    )?;
    let offset = parse_count("offset", query.offset.as_deref(), 0, usize::MAX)?;

    let all = transactions::all_transactions(user_id, state.now().date_naive());
    let summary = transactions::summarize(&all);
    let (page, pagination) = transactions::paginate(&all, offset, limit);
    metrics::record_generated("transactions");

    tracing::debug!(user_id, offset, limit, returned = page.len(), "Transactions page");

    Ok(Json(TransactionsResponse {
        success: true,
        transactions: page,
        pagination,
        summary,
    }))
}
