//! Fixed datasets behind the dashboard widgets.

use chrono::{DateTime, Datelike, Days, Duration, Months, NaiveDate, Utc};
use rand::Rng;

use crate::{
    models::{Activity, BalancePoint, CivicEvent},
    round2,
};

/// Number of months shown on the balance chart
pub const HISTORY_MONTHS: u32 = 6;

/// Upcoming civic events, dated relative to `today`.
pub fn civic_events(today: NaiveDate) -> Vec<CivicEvent> {
    let events = [
        ("evt-1", "Ward committee meeting", 3, "Koramangala Community Hall", 86, 25),
        ("evt-2", "Lake clean-up drive", 6, "Bellandur Lake, East Gate", 214, 40),
        ("evt-3", "Voter registration camp", 10, "Jayanagar 4th Block", 132, 30),
        ("evt-4", "Tree plantation", 17, "Cubbon Park", 305, 35),
    ];

    events
        .into_iter()
        .map(|(id, title, in_days, location, participants, credit_reward)| CivicEvent {
            id: id.to_string(),
            title: title.to_string(),
            date: today.checked_add_days(Days::new(in_days)).unwrap_or(today),
            location: location.to_string(),
            participants,
            credit_reward,
        })
        .collect()
}

/// Recent activity feed, newest first.
pub fn recent_activity(now: DateTime<Utc>) -> Vec<Activity> {
    let feed = [
        ("act-1", "payment", "Paid BESCOM electricity bill on time", 2, 5),
        ("act-2", "civic", "Attended ward committee meeting", 26, 25),
        ("act-3", "staking", "Staked in Green Energy Fund", 50, 10),
        ("act-4", "payment", "Credit card payment missed", 98, -15),
        ("act-5", "community", "Volunteered at food bank", 170, 20),
    ];

    feed.into_iter()
        .map(|(id, kind, description, hours_ago, points_delta)| Activity {
            id: id.to_string(),
            kind: kind.to_string(),
            description: description.to_string(),
            timestamp: now - Duration::hours(hours_ago),
            points_delta,
        })
        .collect()
}

/// Month-end balances for the last [`HISTORY_MONTHS`] months, ending at `net_worth`.
///
/// Earlier months walk backwards from the current figure by a few percent each.
pub fn balance_history(net_worth: f64, today: NaiveDate, rng: &mut impl Rng) -> Vec<BalancePoint> {
    let first_of_month = today.with_day(1).unwrap_or(today);
    let mut balance = net_worth;
    let mut points: Vec<BalancePoint> = (0..HISTORY_MONTHS)
        .map(|back| {
            let month = first_of_month
                .checked_sub_months(Months::new(back))
                .unwrap_or(first_of_month);
            let point = BalancePoint {
                month: month.format("%b %Y").to_string(),
                balance: round2(balance),
            };
            balance -= balance.abs() * rng.gen_range(0.01..0.06);
            point
        })
        .collect();
    points.reverse();
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockRandom;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()
    }

    #[test]
    fn test_events_are_upcoming() {
        for event in civic_events(today()) {
            assert!(event.date > today());
        }
    }

    #[test]
    fn test_activity_is_newest_first() {
        let now = Utc::now();
        let feed = recent_activity(now);
        assert_eq!(feed.len(), 5);
        for pair in feed.windows(2) {
            assert!(pair[0].timestamp > pair[1].timestamp);
        }
    }

    #[test]
    fn test_balance_history_ends_at_net_worth() {
        let mut rng = MockRandom::seeded(10).rng();
        let history = balance_history(250_000.0, today(), &mut rng);

        assert_eq!(history.len(), HISTORY_MONTHS as usize);
        assert_eq!(history[0].month, "Oct 2023");
        let last = history.last().unwrap();
        assert_eq!(last.month, "Mar 2024");
        assert_eq!(last.balance, 250_000.0);
        for pair in history.windows(2) {
            assert!(pair[0].balance < pair[1].balance);
        }
    }
}
