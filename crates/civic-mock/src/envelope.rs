//! JSON response envelopes shared by the server and the client.
//!
//! Every envelope except [`LeaderboardResponse`] carries a `success` flag.

use serde::{Deserialize, Serialize};

use crate::models::{
    Account, AccountSummary, Activity, BalancePoint, CivicEvent, LeaderboardEntry,
    LeaderboardStats, Pagination, SocialCredit, StakingPool, StakingSummary, Transaction,
    TransactionSummary, User, UserStake,
};

/// Failure body returned with every non-2xx status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always `false`
    pub success: bool,
    /// What went wrong
    pub message: String,
}

/// `POST /api/auth/login` and `POST /api/auth/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    pub user: User,
}

/// `POST /api/auth` and `POST /api/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDataResponse {
    pub success: bool,
    pub message: String,
    pub user_data: User,
}

/// `GET` and `PUT /api/user/profile`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub user_data: User,
}

/// `GET /api/finance/accounts`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountsResponse {
    pub success: bool,
    pub accounts: Vec<Account>,
    pub summary: AccountSummary,
}

/// `GET /api/finance/transactions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionsResponse {
    pub success: bool,
    pub transactions: Vec<Transaction>,
    pub pagination: Pagination,
    pub summary: TransactionSummary,
}

/// `GET /api/community/leaderboard`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub leaderboard: Vec<LeaderboardEntry>,
    pub current_user: LeaderboardEntry,
    pub stats: LeaderboardStats,
}

/// `GET /api/community/staking`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakingResponse {
    pub success: bool,
    pub user_id: String,
    pub pools: Vec<StakingPool>,
    pub user_stakes: Vec<UserStake>,
    pub summary: StakingSummary,
}

/// `GET /api/dashboard/overview`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub success: bool,
    pub social_credit: SocialCredit,
    pub net_worth: f64,
    pub recent_activity: Vec<Activity>,
    pub civic_events: Vec<CivicEvent>,
    pub balance_history: Vec<BalancePoint>,
}
