//! NUSA Value Score calculator.
//!
//! Maps one participant's raw telemetry to a normalized score in [0, 1].
//! Each sub-metric saturates at its configured cap, the weighted sum is
//! gated multiplicatively by the quality score, and the result is clamped.
//! Permissive by contract: no input combination fails.

use nusa_core::constants::{
    ACTIVITY_SATURATION_MINUTES, ACTIVITY_WEIGHT, AGE_BONUS_CAP, COMMUNITY_SATURATION,
    COMMUNITY_WEIGHT, CONTRIBUTION_SATURATION, CONTRIBUTION_WEIGHT, TENURE_FULL_DAYS,
};
use nusa_core::types::{round_dp, ParticipantMetrics, ScoreBreakdown, ScoreResult};

/// A saturating sub-score: `value / cap` clamped to [0, 1].
fn saturating_ratio(value: f64, cap: f64) -> f64 {
    (value / cap).clamp(0.0, 1.0)
}

/// Compute the NUSA Value Score for one participant.
///
/// `value_score` is rounded to 4 decimals, breakdown entries to 3. The
/// quality multiplier is echoed back as supplied.
pub fn compute_score(metrics: &ParticipantMetrics) -> ScoreResult {
    let activity = saturating_ratio(metrics.daily_active_minutes, ACTIVITY_SATURATION_MINUTES);
    let contribution =
        saturating_ratio(metrics.contributions_count as f64, CONTRIBUTION_SATURATION);
    let community =
        saturating_ratio(metrics.community_interactions as f64, COMMUNITY_SATURATION);
    let age_bonus = saturating_ratio(metrics.days_active as f64, TENURE_FULL_DAYS) * AGE_BONUS_CAP;

    let raw = (activity * ACTIVITY_WEIGHT
        + contribution * CONTRIBUTION_WEIGHT
        + community * COMMUNITY_WEIGHT
        + age_bonus)
        * metrics.quality_score;

    ScoreResult {
        value_score: round_dp(raw.clamp(0.0, 1.0), 4),
        breakdown: ScoreBreakdown {
            activity: round_dp(activity, 3),
            contribution: round_dp(contribution, 3),
            community: round_dp(community, 3),
            age_bonus: round_dp(age_bonus, 3),
            quality_multiplier: metrics.quality_score,
        },
    }
}
