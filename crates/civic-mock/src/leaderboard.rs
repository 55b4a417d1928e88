//! Community leaderboard generator.
//!
//! Scores decay logarithmically with rank and are split into civic, financial
//! and environmental parts. The environmental part is the remainder, so the
//! three parts always add up to the total.

use rand::{Rng, seq::SliceRandom};

use crate::models::{Direction, LeaderboardEntry, LeaderboardStats, Movement};

/// Entries returned when the request gives no limit
pub const DEFAULT_SIZE: u32 = 10;
/// Largest leaderboard a request may ask for
pub const MAX_SIZE: u32 = 50;

const NAMES: &[&str] = &[
    "Kavya Reddy",
    "Arjun Mehta",
    "Ishita Banerjee",
    "Vikram Singh",
    "Sneha Kulkarni",
    "Aditya Rao",
    "Nisha Verma",
    "Rahul Desai",
    "Pooja Menon",
    "Siddharth Joshi",
    "Tanvi Kapoor",
    "Manish Choudhary",
];

const BADGES: &[&str] = &[
    "Civic Champion",
    "Green Warrior",
    "Savings Star",
    "Community Builder",
    "Active Voter",
    "Early Adopter",
    "Tax Hero",
];

const TOP_BADGE: &str = "Top 3";

/// Score before jitter for a 1-based rank.
pub fn base_score(rank: u32) -> u32 {
    let score = 980.0 - 95.0 * f64::from(rank.max(1)).ln();
    score.round().max(100.0) as u32
}

/// Split `total` into civic, financial and environmental parts.
pub fn split_score(total: u32, rng: &mut impl Rng) -> (u32, u32, u32) {
    let civic = (f64::from(total) * rng.gen_range(0.35..0.45)).round() as u32;
    let financial = (f64::from(total) * rng.gen_range(0.30..0.40)).round() as u32;
    let financial = financial.min(total - civic);
    let environmental = total - civic - financial;

    (civic, financial, environmental)
}

/// Pick one to three badges, deduplicated in first-seen order.
fn pick_badges(rank: u32, rng: &mut impl Rng) -> Vec<String> {
    let count = rng.gen_range(1..=3);
    let mut badges: Vec<String> = Vec::with_capacity(count + 1);
    if rank <= 3 {
        badges.push(TOP_BADGE.to_string());
    }
    for _ in 0..count {
        if let Some(badge) = BADGES.choose(rng)
            && !badges.iter().any(|b| b == badge)
        {
            badges.push((*badge).to_string());
        }
    }
    badges
}

fn movement(rng: &mut impl Rng) -> Movement {
    match rng.gen_range(0..3) {
        0 => Movement {
            direction: Direction::Up,
            change: rng.gen_range(1..=5),
        },
        1 => Movement {
            direction: Direction::Down,
            change: rng.gen_range(1..=5),
        },
        _ => Movement {
            direction: Direction::Same,
            change: 0,
        },
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect::<String>()
        .to_uppercase()
}

fn entry(rank: u32, user_id: String, name: &str, total: u32, rng: &mut impl Rng) -> LeaderboardEntry {
    let (civic_score, financial_score, environmental_score) = split_score(total, rng);
    LeaderboardEntry {
        rank,
        user_id,
        name: name.to_string(),
        avatar: initials(name),
        total_score: total,
        civic_score,
        financial_score,
        environmental_score,
        badges: pick_badges(rank, rng),
        movement: movement(rng),
    }
}

/// Generate the top `size` entries, ordered by rank.
///
/// Total scores never increase with rank.
pub fn generate_leaderboard(size: u32, rng: &mut impl Rng) -> Vec<LeaderboardEntry> {
    let mut previous = u32::MAX;
    (1..=size)
        .map(|rank| {
            let jitter = rng.gen_range(0..15);
            let total = base_score(rank).saturating_sub(jitter).min(previous);
            previous = total;

            let name = NAMES[(rank as usize - 1) % NAMES.len()];
            entry(rank, format!("lb-{rank:03}"), name, total, rng)
        })
        .collect()
}

/// Entry for the requesting user, ranked below the visible board.
pub fn current_user_entry(
    user_id: &str,
    name: &str,
    board_size: u32,
    rng: &mut impl Rng,
) -> LeaderboardEntry {
    let rank = rng.gen_range(board_size + 15..=board_size + 70);
    entry(rank, user_id.to_string(), name, base_score(rank), rng)
}

/// Statistics over the visible board.
pub fn stats(
    leaderboard: &[LeaderboardEntry],
    current_user: &LeaderboardEntry,
    rng: &mut impl Rng,
) -> LeaderboardStats {
    let total_participants = rng.gen_range(1_200..1_500);
    let average_score = if leaderboard.is_empty() {
        0.0
    } else {
        let sum: u32 = leaderboard.iter().map(|e| e.total_score).sum();
        (f64::from(sum) / leaderboard.len() as f64 * 10.0).round() / 10.0
    };
    let percentile = 100.0 * (1.0 - f64::from(current_user.rank) / f64::from(total_participants));

    LeaderboardStats {
        total_participants,
        average_score,
        top_score: leaderboard.first().map_or(0, |e| e.total_score),
        current_user_percentile: (percentile * 10.0).round() / 10.0,
    }
}
