//! Display formatting for amounts, dates and identifiers.

use chrono::NaiveDate;

/// Currency symbol used throughout the dashboard.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Format an amount in rupees with Indian digit grouping.
///
/// ```
/// use civic_mock::format::format_currency;
///
/// assert_eq!(format_currency(123456.78), "₹1,23,456.78");
/// assert_eq!(format_currency(-999.5), "-₹999.50");
/// ```
pub fn format_currency(amount: f64) -> String {
    let paise_total = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && paise_total > 0 {
        "-"
    } else {
        ""
    };

    format!(
        "{sign}{CURRENCY_SYMBOL}{}.{:02}",
        group_indian(paise_total / 100),
        paise_total % 100
    )
}

/// Like [`format_currency`] but always carries a sign, for ledger lines.
pub fn format_signed_currency(amount: f64) -> String {
    let formatted = format_currency(amount);
    if formatted.starts_with('-') {
        formatted
    } else {
        format!("+{formatted}")
    }
}

/// Group digits the Indian way: the last three, then pairs.
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (mut head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    while head.len() > 2 {
        let (rest, pair) = head.split_at(head.len() - 2);
        groups.push(pair);
        head = rest;
    }
    if !head.is_empty() {
        groups.push(head);
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Format a date as `15 Jan 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

/// Mask all but the last four characters of an account or identity number.
///
/// Output is grouped in blocks of four, e.g. `XXXX XXXX 9012`.
pub fn mask_number(number: &str) -> String {
    let digits: Vec<char> = number.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    let visible = digits.len().saturating_sub(4);

    digits
        .iter()
        .enumerate()
        .map(|(i, c)| if i < visible { 'X' } else { *c })
        .collect::<Vec<_>>()
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}
