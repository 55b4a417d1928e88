//! Financial account generator.

use rand::Rng;

use crate::{
    format::{format_currency, mask_number},
    models::{Account, AccountSummary, AccountType},
    round2,
};

struct AccountTemplate {
    name: &'static str,
    institution: &'static str,
    account_type: AccountType,
    number: &'static str,
    min: f64,
    max: f64,
}

const CATALOGUE: &[AccountTemplate] = &[
    AccountTemplate {
        name: "Primary Savings",
        institution: "State Bank of India",
        account_type: AccountType::Savings,
        number: "30214578963214",
        min: 25_000.0,
        max: 350_000.0,
    },
    AccountTemplate {
        name: "Salary Account",
        institution: "HDFC Bank",
        account_type: AccountType::Checking,
        number: "50100234567891",
        min: 5_000.0,
        max: 120_000.0,
    },
    AccountTemplate {
        name: "Millennia Credit Card",
        institution: "HDFC Bank",
        account_type: AccountType::Credit,
        number: "4386280012345524",
        min: -85_000.0,
        max: -2_000.0,
    },
    AccountTemplate {
        name: "Mutual Fund Portfolio",
        institution: "Zerodha Coin",
        account_type: AccountType::Investment,
        number: "ZC0098124477",
        min: 50_000.0,
        max: 800_000.0,
    },
    AccountTemplate {
        name: "Education Loan",
        institution: "ICICI Bank",
        account_type: AccountType::Loan,
        number: "LBEDU00456612",
        min: -600_000.0,
        max: -150_000.0,
    },
];

/// Generate the user's accounts with fresh balances.
pub fn generate_accounts(user_id: &str, rng: &mut impl Rng) -> Vec<Account> {
    CATALOGUE
        .iter()
        .enumerate()
        .map(|(i, template)| {
            let balance_raw = round2(rng.gen_range(template.min..template.max));
            Account {
                id: account_id(user_id, i + 1),
                name: template.name.to_string(),
                balance: format_currency(balance_raw),
                balance_raw,
                account_number: mask_number(template.number),
                institution: template.institution.to_string(),
                account_type: template.account_type,
            }
        })
        .collect()
}

/// ID of the `n`th (1-based) account of a user.
pub fn account_id(user_id: &str, n: usize) -> String {
    format!("{user_id}-acc-{n}")
}

/// Aggregate a set of accounts.
pub fn summarize(accounts: &[Account]) -> AccountSummary {
    let total_balance = round2(accounts.iter().map(|a| a.balance_raw).sum());
    let total_assets = round2(
        accounts
            .iter()
            .map(|a| a.balance_raw)
            .filter(|b| *b > 0.0)
            .sum(),
    );
    let total_debt = round2(
        accounts
            .iter()
            .map(|a| a.balance_raw)
            .filter(|b| *b < 0.0)
            .map(f64::abs)
            .sum(),
    );

    AccountSummary {
        total_balance,
        total_balance_formatted: format_currency(total_balance),
        net_worth: total_balance,
        total_assets,
        total_debt,
        account_count: accounts.len(),
    }
}
