use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Per-category breakdown of the social credit score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCategories {
    /// Repayments, savings habits
    pub financial: u32,
    /// Voting, civic events attended
    pub civic: u32,
    /// Green commuting, energy usage
    pub environmental: u32,
    /// Volunteering, community staking
    pub community: u32,
}

impl CreditCategories {
    /// Mean of the four categories, rounded.
    pub fn average(&self) -> u32 {
        let sum = self.financial + self.civic + self.environmental + self.community;
        (f64::from(sum) / 4.0).round() as u32
    }
}

/// Social credit score with its category breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialCredit {
    /// Composite score
    pub score: u32,
    /// Score per category
    pub categories: CreditCategories,
    /// When the score was computed
    pub last_updated: DateTime<Utc>,
}

/// User record as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User ID
    pub id: String,
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Phone number
    pub phone: String,
    /// Aadhaar number, masked to the last four digits
    pub aadhaar_number: String,
    /// Social credit score
    pub social_credit: SocialCredit,
    /// When the user joined
    pub joined_at: DateTime<Utc>,
}

/// Partial profile update sent with `PUT /api/user/profile`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProfileUpdate {
    /// New display name
    pub name: Option<String>,
    /// New email address
    pub email: Option<String>,
    /// New phone number
    pub phone: Option<String>,
}

impl User {
    /// Apply the fields present in `update`, leaving the rest untouched.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
    }
}

/// Kind of financial account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Savings account
    Savings,
    /// Current / salary account
    Checking,
    /// Credit card
    Credit,
    /// Investment portfolio
    Investment,
    /// Loan
    Loan,
}

impl AccountType {
    /// Whether the balance of this account represents money owed.
    pub const fn is_liability(&self) -> bool {
        matches!(self, Self::Credit | Self::Loan)
    }
}

/// Financial account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Account ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Balance formatted for display
    pub balance: String,
    /// Balance as a number, negative for liabilities
    pub balance_raw: f64,
    /// Masked account number
    pub account_number: String,
    /// Bank or broker
    pub institution: String,
    /// Account type
    #[serde(rename = "type")]
    pub account_type: AccountType,
}

/// Aggregates over a set of accounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    /// Sum of all raw balances
    pub total_balance: f64,
    /// `total_balance` formatted for display
    pub total_balance_formatted: String,
    /// Assets minus debt
    pub net_worth: f64,
    /// Sum of positive balances
    pub total_assets: f64,
    /// Sum of the magnitudes of negative balances
    pub total_debt: f64,
    /// Number of accounts
    pub account_count: usize,
}

/// Settlement state of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Settled
    Completed,
    /// Awaiting settlement
    Pending,
    /// Rejected by the bank
    Failed,
}

/// Ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Transaction ID
    pub id: String,
    /// Merchant or counterparty description
    pub description: String,
    /// Signed amount formatted for display
    pub amount: String,
    /// Signed amount, negative for expenses
    pub amount_raw: f64,
    /// Booking date
    pub date: NaiveDate,
    /// Spending category
    pub category: String,
    /// Settlement state
    pub status: TransactionStatus,
    /// Owning account
    pub account_id: String,
}

/// Offset/limit pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Size of the full, unpaginated set
    pub total: usize,
    /// Requested page size
    pub limit: usize,
    /// Requested offset
    pub offset: usize,
    /// Whether items remain after this page
    pub has_more: bool,
}

/// Income and expense totals over the full transaction set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    /// Sum of positive amounts
    pub total_income: f64,
    /// Sum of the magnitudes of negative amounts
    pub total_expense: f64,
    /// Income minus expense
    pub net_flow: f64,
}

/// Direction a leaderboard entry moved since the previous period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Climbed
    Up,
    /// Dropped
    Down,
    /// Unchanged
    Same,
}

/// Rank movement indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    /// Direction of movement
    pub direction: Direction,
    /// Number of places moved, zero when unchanged
    pub change: u32,
}

/// One row of the community leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// 1-based rank
    pub rank: u32,
    /// Synthetic user ID
    pub user_id: String,
    /// Display name
    pub name: String,
    /// Initials shown in the avatar bubble
    pub avatar: String,
    /// Composite score
    pub total_score: u32,
    /// Civic share of the total
    pub civic_score: u32,
    /// Financial share of the total
    pub financial_score: u32,
    /// Remainder of the total
    pub environmental_score: u32,
    /// Distinct badges
    pub badges: Vec<String>,
    /// Movement since last period
    pub movement: Movement,
}

/// Leaderboard-wide statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardStats {
    /// Number of users taking part
    pub total_participants: u32,
    /// Mean total score across the returned entries
    pub average_score: f64,
    /// Highest total score
    pub top_score: u32,
    /// Percentile of the current user
    pub current_user_percentile: f64,
}

/// Community staking pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakingPool {
    /// Pool ID
    pub id: String,
    /// Pool name
    pub name: String,
    /// What the pool funds
    pub description: String,
    /// Annual percentage yield
    pub apy: f64,
    /// Total amount staked by all participants
    pub total_staked: f64,
    /// Number of participants
    pub participants: u32,
    /// Minimum stake
    pub min_stake: f64,
    /// Lock-up period
    pub lock_period_days: u32,
    /// Cause category
    pub category: String,
}

/// State of a user's stake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StakeStatus {
    /// Still within its lock-up period
    Active,
    /// Lock-up has elapsed
    Unlocked,
}

/// A user's position in one pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStake {
    /// Pool the stake belongs to
    pub pool_id: String,
    /// Pool name, denormalized for display
    pub pool_name: String,
    /// Staked amount
    pub amount: f64,
    /// Rewards accrued so far
    pub rewards_earned: f64,
    /// When the stake was placed
    pub staked_at: DateTime<Utc>,
    /// When the lock-up ends
    pub unlocks_at: DateTime<Utc>,
    /// Lock state
    pub status: StakeStatus,
}

/// Totals over a user's stakes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakingSummary {
    /// Sum of staked amounts
    pub total_staked: f64,
    /// Sum of accrued rewards
    pub total_rewards: f64,
    /// Number of stakes still locked
    pub active_stakes: usize,
    /// Mean APY across all pools
    pub average_apy: f64,
}

/// Upcoming civic engagement event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CivicEvent {
    /// Event ID
    pub id: String,
    /// Title
    pub title: String,
    /// Date of the event
    pub date: NaiveDate,
    /// Venue
    pub location: String,
    /// Registered participants
    pub participants: u32,
    /// Credit points awarded for attending
    pub credit_reward: u32,
}

/// Entry in the recent activity feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Activity ID
    pub id: String,
    /// Feed category, e.g. `payment` or `civic`
    pub kind: String,
    /// Human readable description
    pub description: String,
    /// When it happened
    pub timestamp: DateTime<Utc>,
    /// Effect on the social credit score
    pub points_delta: i32,
}

/// One point of the balance history chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalancePoint {
    /// Month label, e.g. `Mar 2024`
    pub month: String,
    /// Net worth at month end
    pub balance: f64,
}
