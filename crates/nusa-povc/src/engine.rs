//! PoVC engine implementing the [`RewardCalculator`] trait.
//!
//! Holds only the immutable [`EngineConfig`]; every operation is a pure
//! function of its inputs plus the two configured constants, so one engine
//! instance is safely shared across threads for unlimited calls.

use chrono::{Duration, Utc};
use rayon::prelude::*;
use tracing::debug;

use nusa_core::config::EngineConfig;
use nusa_core::constants::REWARD_PERIOD_DAYS;
use nusa_core::error::PovcError;
use nusa_core::traits::RewardCalculator;
use nusa_core::types::{
    round_dp, ConcentrationResult, DistributionSummary, ParticipantMetrics, RewardResult,
    ScoreResult, WealthDistribution,
};

use crate::distribution::{gini, median, percentile};
use crate::score::compute_score;
use crate::whale::assess_concentration;

/// The production PoVC calculator.
#[derive(Debug, Clone, Default)]
pub struct PovcEngine {
    config: EngineConfig,
}

impl PovcEngine {
    /// Create an engine with the given economic parameters.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl RewardCalculator for PovcEngine {
    fn compute_score(&self, metrics: &ParticipantMetrics) -> ScoreResult {
        compute_score(metrics)
    }

    fn assess_concentration(&self, balance: f64) -> Result<ConcentrationResult, PovcError> {
        assess_concentration(balance, self.config.total_supply())
    }

    fn calculate_reward(&self, metrics: &ParticipantMetrics) -> Result<RewardResult, PovcError> {
        metrics.validate()?;

        let score = compute_score(metrics);
        let concentration =
            assess_concentration(metrics.wallet_balance, self.config.total_supply())?;

        let base_reward = self.config.monthly_reward_pool() * score.value_score;
        let final_reward = base_reward * concentration.reward_multiplier;

        let now = Utc::now();
        Ok(RewardResult {
            wallet_id: metrics.wallet_id.clone(),
            value_score: score.value_score,
            base_reward: round_dp(base_reward, 2),
            final_reward: round_dp(final_reward, 2),
            concentration,
            distribution_date: now.format("%Y-%m-%d").to_string(),
            next_distribution: (now + Duration::days(REWARD_PERIOD_DAYS))
                .format("%Y-%m-%d")
                .to_string(),
        })
    }

    fn simulate_distribution(
        &self,
        population: &[ParticipantMetrics],
    ) -> Result<DistributionSummary, PovcError> {
        // Fail-fast: reject the whole batch on the first invalid participant
        // so the aggregate statistics never silently exclude anyone.
        for (index, metrics) in population.iter().enumerate() {
            metrics
                .validate()
                .map_err(|source| PovcError::InvalidParticipant {
                    wallet: metrics.wallet_id.clone(),
                    index,
                    source: Box::new(source),
                })?;
        }

        // Per-participant computations are independent; the indexed collect
        // preserves input order.
        let individual_rewards: Vec<RewardResult> = population
            .par_iter()
            .map(|metrics| self.calculate_reward(metrics))
            .collect::<Result<_, _>>()?;

        let total_distributed: f64 = individual_rewards.iter().map(|r| r.final_reward).sum();
        let average_reward = if population.is_empty() {
            0.0
        } else {
            total_distributed / population.len() as f64
        };

        let balances: Vec<f64> = population.iter().map(|m| m.wallet_balance).collect();
        let wealth_distribution = WealthDistribution {
            gini_coefficient: round_dp(gini(&balances), 4),
            top_10_percent_threshold: round_dp(percentile(&balances, 90.0), 2),
            median_balance: round_dp(median(&balances), 2),
        };

        debug!(
            participants = population.len(),
            total_distributed, "distribution simulated"
        );

        Ok(DistributionSummary {
            simulation_date: Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            total_participants: population.len(),
            total_distributed: round_dp(total_distributed, 2),
            average_reward: round_dp(average_reward, 2),
            wealth_distribution,
            individual_rewards,
        })
    }
}
