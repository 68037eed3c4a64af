//! Trait interfaces for the PoVC engine.
//!
//! [`RewardCalculator`] is the seam between the engine crate (nusa-povc,
//! which implements it) and its callers (the HTTP layer, the CLI, test
//! harnesses), letting callers substitute a double without linking the real
//! scoring math.

use crate::error::PovcError;
use crate::types::{ConcentrationResult, DistributionSummary, ParticipantMetrics, RewardResult, ScoreResult};

/// Pure reward-scoring and distribution computation.
///
/// Every method is synchronous, side-effect-free, and safe to call from any
/// number of threads concurrently: implementations hold only immutable
/// configuration.
pub trait RewardCalculator: Send + Sync {
    /// Normalized value score in [0, 1] for one participant.
    ///
    /// Permissive by contract: never fails, all saturating sub-scores clamp.
    fn compute_score(&self, metrics: &ParticipantMetrics) -> ScoreResult;

    /// Anti-whale assessment of a balance against the configured supply.
    fn assess_concentration(&self, balance: f64) -> Result<ConcentrationResult, PovcError>;

    /// Full per-participant reward: score, base reward, concentration
    /// penalty, final reward.
    fn calculate_reward(&self, metrics: &ParticipantMetrics) -> Result<RewardResult, PovcError>;

    /// Batch rewards plus wealth-distribution statistics over a population.
    ///
    /// Fail-fast: the first invalid participant aborts the whole batch with
    /// [`PovcError::InvalidParticipant`]. Output order matches input order.
    fn simulate_distribution(
        &self,
        population: &[ParticipantMetrics],
    ) -> Result<DistributionSummary, PovcError>;
}
