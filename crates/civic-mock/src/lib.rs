//! Mock data layer for Civic Pulse
//!
//! This crate holds the response-shaped data model and the generators that
//! synthesize every payload the API serves. Generators are pure functions of
//! their inputs, the current time and a caller-supplied random source, so a
//! seeded [`MockRandom`] makes every payload reproducible.

pub mod accounts;
pub mod dashboard;
pub mod directory;
pub mod envelope;
pub mod format;
pub mod leaderboard;
pub mod models;
pub mod profile;
pub mod rng;
pub mod staking;
pub mod transactions;

pub use rng::{MockRandom, char_code_seed};

/// Round a monetary amount to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.005_1), 1.01);
        assert_eq!(round2(-2.344), -2.34);
        assert_eq!(round2(10.0), 10.0);
    }
}
