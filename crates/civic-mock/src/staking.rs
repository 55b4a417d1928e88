//! Community staking pools and per-user stakes.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::{
    models::{StakeStatus, StakingPool, StakingSummary, UserStake},
    rng::char_code_seed,
    round2,
};

struct PoolTemplate {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    apy: f64,
    total_staked: f64,
    participants: u32,
    min_stake: f64,
    lock_period_days: u32,
    category: &'static str,
    /// Scales the user's stake in this pool. `100 * weight * 0.8` stays
    /// above `min_stake`.
    weight: f64,
}

const POOLS: &[PoolTemplate] = &[
    PoolTemplate {
        id: "pool-green-energy",
        name: "Green Energy Fund",
        description: "Rooftop solar installations for government schools",
        apy: 12.5,
        total_staked: 4_850_000.0,
        participants: 1_240,
        min_stake: 50.0,
        lock_period_days: 90,
        category: "Environment",
        weight: 1.0,
    },
    PoolTemplate {
        id: "pool-community-infra",
        name: "Community Infrastructure",
        description: "Neighbourhood parks, libraries and public toilets",
        apy: 9.0,
        total_staked: 7_200_000.0,
        participants: 2_105,
        min_stake: 50.0,
        lock_period_days: 180,
        category: "Infrastructure",
        weight: 0.75,
    },
    PoolTemplate {
        id: "pool-education",
        name: "Education Initiative",
        description: "Scholarships and digital classrooms in rural districts",
        apy: 7.5,
        total_staked: 2_960_000.0,
        participants: 980,
        min_stake: 25.0,
        lock_period_days: 30,
        category: "Education",
        weight: 0.5,
    },
    PoolTemplate {
        id: "pool-healthcare",
        name: "Healthcare Access",
        description: "Mobile clinics and subsidised diagnostics",
        apy: 8.25,
        total_staked: 3_415_000.0,
        participants: 1_312,
        min_stake: 25.0,
        lock_period_days: 60,
        category: "Health",
        weight: 0.6,
    },
];

/// Current pool metadata, with pool-wide totals drifting slightly per call.
pub fn pools(rng: &mut impl Rng) -> Vec<StakingPool> {
    POOLS
        .iter()
        .map(|pool| StakingPool {
            id: pool.id.to_string(),
            name: pool.name.to_string(),
            description: pool.description.to_string(),
            apy: pool.apy,
            total_staked: round2(pool.total_staked * rng.gen_range(0.95..1.05)),
            participants: pool.participants + rng.gen_range(0..50),
            min_stake: pool.min_stake,
            lock_period_days: pool.lock_period_days,
            category: pool.category.to_string(),
        })
        .collect()
}

/// The user's stakes.
///
/// Which pools a user joined, how much they staked and for how long all come
/// from the user id; only the amount multiplier is random.
pub fn user_stakes(user_id: &str, now: DateTime<Utc>, rng: &mut impl Rng) -> Vec<UserStake> {
    let seed = char_code_seed(user_id);
    let base = (seed % 900 + 100) as f64;

    POOLS
        .iter()
        .enumerate()
        .filter(|(i, _)| *i == 0 || (seed + *i as u64) % 3 != 0)
        .map(|(i, pool)| {
            let amount = round2(base * pool.weight * rng.gen_range(0.8..1.2));
            let days_staked = ((seed + i as u64 * 17) % 120 + 5) as i64;
            let staked_at = now - Duration::days(days_staked);
            let unlocks_at = staked_at + Duration::days(i64::from(pool.lock_period_days));
            let status = if unlocks_at <= now {
                StakeStatus::Unlocked
            } else {
                StakeStatus::Active
            };

            UserStake {
                pool_id: pool.id.to_string(),
                pool_name: pool.name.to_string(),
                amount,
                rewards_earned: round2(amount * pool.apy / 100.0 * days_staked as f64 / 365.0),
                staked_at,
                unlocks_at,
                status,
            }
        })
        .collect()
}

/// Totals over the user's stakes.
pub fn summarize(stakes: &[UserStake], pools: &[StakingPool]) -> StakingSummary {
    let average_apy = if pools.is_empty() {
        0.0
    } else {
        round2(pools.iter().map(|p| p.apy).sum::<f64>() / pools.len() as f64)
    };

    StakingSummary {
        total_staked: round2(stakes.iter().map(|s| s.amount).sum()),
        total_rewards: round2(stakes.iter().map(|s| s.rewards_earned).sum()),
        active_stakes: stakes
            .iter()
            .filter(|s| s.status == StakeStatus::Active)
            .count(),
        average_apy,
    }
}
