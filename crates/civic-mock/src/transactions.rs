//! Fixed transaction ledger with offset/limit pagination.

use chrono::{Days, NaiveDate};

use crate::{
    accounts::account_id,
    format::format_signed_currency,
    models::{Pagination, Transaction, TransactionStatus, TransactionSummary},
    round2,
};

/// Page size used when the request gives none
pub const DEFAULT_LIMIT: usize = 10;
/// Largest page size a request may ask for
pub const MAX_LIMIT: usize = 100;

struct Entry {
    description: &'static str,
    amount: f64,
    days_ago: u64,
    category: &'static str,
    status: TransactionStatus,
    account: usize,
}

const LEDGER: &[Entry] = &[
    Entry {
        description: "Salary credit - Infosys Ltd",
        amount: 85_000.0,
        days_ago: 1,
        category: "Income",
        status: TransactionStatus::Completed,
        account: 2,
    },
    Entry {
        description: "BigBasket groceries",
        amount: -3_245.5,
        days_ago: 2,
        category: "Groceries",
        status: TransactionStatus::Completed,
        account: 3,
    },
    Entry {
        description: "BESCOM electricity bill",
        amount: -1_870.0,
        days_ago: 3,
        category: "Utilities",
        status: TransactionStatus::Completed,
        account: 2,
    },
    Entry {
        description: "SIP - Parag Parikh Flexi Cap",
        amount: -10_000.0,
        days_ago: 4,
        category: "Investment",
        status: TransactionStatus::Completed,
        account: 1,
    },
    Entry {
        description: "Swiggy order",
        amount: -642.0,
        days_ago: 5,
        category: "Food & Dining",
        status: TransactionStatus::Completed,
        account: 3,
    },
    Entry {
        description: "Freelance payment - Upwork",
        amount: 18_500.0,
        days_ago: 6,
        category: "Income",
        status: TransactionStatus::Pending,
        account: 1,
    },
    Entry {
        description: "Education loan EMI",
        amount: -12_450.0,
        days_ago: 8,
        category: "Loan Repayment",
        status: TransactionStatus::Completed,
        account: 2,
    },
    Entry {
        description: "Namma Metro card recharge",
        amount: -500.0,
        days_ago: 9,
        category: "Transport",
        status: TransactionStatus::Completed,
        account: 2,
    },
    Entry {
        description: "Donation - Goonj",
        amount: -2_000.0,
        days_ago: 11,
        category: "Charity",
        status: TransactionStatus::Failed,
        account: 3,
    },
    Entry {
        description: "Interest credit",
        amount: 1_236.75,
        days_ago: 14,
        category: "Income",
        status: TransactionStatus::Completed,
        account: 1,
    },
];

/// The full, unpaginated ledger for a user, dated relative to `today`.
pub fn all_transactions(user_id: &str, today: NaiveDate) -> Vec<Transaction> {
    LEDGER
        .iter()
        .enumerate()
        .map(|(i, entry)| Transaction {
            id: format!("txn-{:03}", i + 1),
            description: entry.description.to_string(),
            amount: format_signed_currency(entry.amount),
            amount_raw: entry.amount,
            date: today
                .checked_sub_days(Days::new(entry.days_ago))
                .unwrap_or(today),
            category: entry.category.to_string(),
            status: entry.status,
            account_id: account_id(user_id, entry.account),
        })
        .collect()
}

/// Slice one page out of `all`.
///
/// An offset past the end yields an empty page.
pub fn paginate(all: &[Transaction], offset: usize, limit: usize) -> (Vec<Transaction>, Pagination) {
    let page = all.iter().skip(offset).take(limit).cloned().collect();
    let pagination = Pagination {
        total: all.len(),
        limit,
        offset,
        has_more: offset.saturating_add(limit) < all.len(),
    };

    (page, pagination)
}

/// Income and expense totals over every transaction in `all`.
pub fn summarize(all: &[Transaction]) -> TransactionSummary {
    let total_income = round2(
        all.iter()
            .map(|t| t.amount_raw)
            .filter(|a| *a > 0.0)
            .sum(),
    );
    let total_expense = round2(
        all.iter()
            .map(|t| t.amount_raw)
            .filter(|a| *a < 0.0)
            .map(f64::abs)
            .sum(),
    );

    TransactionSummary {
        total_income,
        total_expense,
        net_flow: round2(total_income - total_expense),
    }
}
