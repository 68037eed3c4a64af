//! Shared test helpers: synthetic participants and populations.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use nusa_core::types::ParticipantMetrics;

/// An active mid-range participant with the given wallet balance.
pub fn active_participant(wallet: &str, balance: f64) -> ParticipantMetrics {
    ParticipantMetrics {
        daily_active_minutes: 150.0,
        contributions_count: 60,
        community_interactions: 25,
        days_active: 200,
        wallet_balance: balance,
        quality_score: 0.9,
        ..ParticipantMetrics::new(wallet)
    }
}

/// Deterministic synthetic population of `n` participants.
///
/// Balances span from dust to whale territory (up to 3% of the canonical
/// supply) so every anti-whale tier is represented in larger populations.
pub fn sample_population(n: usize, seed: u64) -> Vec<ParticipantMetrics> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| ParticipantMetrics {
            daily_active_minutes: rng.gen_range(0.0..480.0),
            contributions_count: rng.gen_range(0..250),
            community_interactions: rng.gen_range(0..120),
            days_active: rng.gen_range(0..1500),
            wallet_balance: rng.gen_range(0.0..750_000.0),
            quality_score: rng.gen_range(0.0..=1.0),
            ..ParticipantMetrics::new(format!("nusa1sim{i:04}"))
        })
        .collect()
}
