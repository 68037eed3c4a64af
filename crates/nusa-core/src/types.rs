//! PoVC data model: participant metrics and result types.
//!
//! All monetary values are f64 NUSA token units. Field names and decimal
//! precisions are the wire contract external services depend on; legacy
//! field names from the first engine generation are accepted as serde
//! aliases on input.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::DEFAULT_QUALITY_SCORE;
use crate::error::PovcError;

/// Round to `dp` decimal places, half away from zero.
///
/// Applied at output boundaries only; intermediate math is full precision.
pub fn round_dp(value: f64, dp: u32) -> f64 {
    let factor = 10f64.powi(dp as i32);
    (value * factor).round() / factor
}

fn default_quality() -> f64 {
    DEFAULT_QUALITY_SCORE
}

/// Raw per-participant telemetry, immutable per calculation.
///
/// Missing numeric fields default to 0 (0.5 for `quality_score`) when
/// deserialized — the deliberate permissiveness policy of the scheme.
/// Negative or non-finite values are rejected by [`validate`](Self::validate)
/// at the engine boundary rather than silently normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantMetrics {
    /// Opaque wallet identifier.
    #[serde(alias = "wallet_address")]
    pub wallet_id: String,
    /// Minutes of daily activity; saturates the activity sub-score at 240.
    #[serde(default, alias = "daily_activity")]
    pub daily_active_minutes: f64,
    #[serde(default)]
    pub contributions_count: u64,
    #[serde(default)]
    pub community_interactions: u64,
    #[serde(default)]
    pub days_active: u64,
    /// Current balance in NUSA token units.
    #[serde(default)]
    pub wallet_balance: f64,
    /// Externally supplied quality judgment in [0, 1]; trusted, not computed.
    #[serde(default = "default_quality")]
    pub quality_score: f64,
}

impl ParticipantMetrics {
    /// Zeroed metrics for a wallet, with the default quality score.
    pub fn new(wallet_id: impl Into<String>) -> Self {
        Self {
            wallet_id: wallet_id.into(),
            daily_active_minutes: 0.0,
            contributions_count: 0,
            community_interactions: 0,
            days_active: 0,
            wallet_balance: 0.0,
            quality_score: DEFAULT_QUALITY_SCORE,
        }
    }

    /// Boundary validation: rejects negative or non-finite real-valued
    /// fields and a quality score outside [0, 1].
    pub fn validate(&self) -> Result<(), PovcError> {
        for (field, value) in [
            ("daily_active_minutes", self.daily_active_minutes),
            ("wallet_balance", self.wallet_balance),
        ] {
            if !value.is_finite() {
                return Err(PovcError::NonFiniteMetric {
                    wallet: self.wallet_id.clone(),
                    field,
                });
            }
            if value < 0.0 {
                return Err(PovcError::NegativeMetric {
                    wallet: self.wallet_id.clone(),
                    field,
                    value,
                });
            }
        }
        if !self.quality_score.is_finite() {
            return Err(PovcError::NonFiniteMetric {
                wallet: self.wallet_id.clone(),
                field: "quality_score",
            });
        }
        if !(0.0..=1.0).contains(&self.quality_score) {
            return Err(PovcError::QualityOutOfRange {
                wallet: self.wallet_id.clone(),
                value: self.quality_score,
            });
        }
        Ok(())
    }
}

/// Per-sub-metric contributions to the value score, each rounded to 3
/// decimals except the quality multiplier, which is reported as supplied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub activity: f64,
    pub contribution: f64,
    pub community: f64,
    pub age_bonus: f64,
    pub quality_multiplier: f64,
}

/// A participant's normalized value score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// NUSA Value Score in [0, 1], rounded to 4 decimals.
    #[serde(alias = "nvs_score")]
    pub value_score: f64,
    #[serde(alias = "component_breakdown")]
    pub breakdown: ScoreBreakdown,
}

/// Anti-whale tier labels, in ascending tier order.
///
/// Serialized as the legacy label strings the dashboard matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WhaleWarning {
    /// Tier 1: 1–50% reward reduction active.
    #[serde(rename = "Reward reduction active")]
    RewardReduction,
    /// Tier 2: 50–100% reduction.
    #[serde(rename = "High concentration penalty")]
    HighConcentration,
    /// Tier 3: no rewards at all.
    #[serde(rename = "WHALE: No rewards")]
    WhaleZone,
}

impl fmt::Display for WhaleWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::RewardReduction => "Reward reduction active",
            Self::HighConcentration => "High concentration penalty",
            Self::WhaleZone => "WHALE: No rewards",
        };
        f.write_str(label)
    }
}

/// Outcome of the concentration guard for one wallet balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcentrationResult {
    /// The balance that was assessed.
    pub balance: f64,
    /// `100 * balance / total_supply`, rounded to 4 decimals.
    #[serde(alias = "percentage")]
    pub percentage_of_supply: f64,
    /// Multiplier applied to the base reward, in [0, 1]. The highest crossed
    /// tier wins.
    pub reward_multiplier: f64,
    /// One of 0, 1, 3, 10.
    #[serde(alias = "transfer_fee")]
    pub transfer_fee_percentage: u8,
    /// Labels of every crossed tier, cumulative in ascending order.
    pub warnings: Vec<WhaleWarning>,
}

/// Final per-participant reward for one distribution period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardResult {
    #[serde(alias = "wallet")]
    pub wallet_id: String,
    #[serde(alias = "nvs_score")]
    pub value_score: f64,
    /// `monthly_reward_pool * value_score`, rounded to 2 decimals.
    pub base_reward: f64,
    /// `base_reward * reward_multiplier`, rounded to 2 decimals.
    pub final_reward: f64,
    #[serde(alias = "whale_check")]
    pub concentration: ConcentrationResult,
    /// Date of this computation, `YYYY-MM-DD`.
    pub distribution_date: String,
    /// Date of the next period's distribution, `YYYY-MM-DD`.
    pub next_distribution: String,
}

/// Inequality statistics over a population's balances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WealthDistribution {
    /// 0 = perfectly equal; 0 for empty or all-zero populations.
    pub gini_coefficient: f64,
    /// 90th-percentile balance (linear interpolation), rounded to 2 decimals.
    pub top_10_percent_threshold: f64,
    /// Median balance, rounded to 2 decimals.
    pub median_balance: f64,
}

/// Population-level distribution outcome.
///
/// `average_reward` always equals `total_distributed / total_participants`
/// when the population is non-empty (within the 2-decimal output rounding),
/// and 0 otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSummary {
    /// Timestamp of the simulation, `YYYY-MM-DD HH:MM:SS` UTC.
    pub simulation_date: String,
    pub total_participants: usize,
    /// Sum of all final rewards, rounded to 2 decimals.
    pub total_distributed: f64,
    pub average_reward: f64,
    pub wealth_distribution: WealthDistribution,
    /// One entry per input participant, input order preserved.
    pub individual_rewards: Vec<RewardResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_dp_basics() {
        assert_eq!(round_dp(0.123456, 4), 0.1235);
        assert_eq!(round_dp(0.123449, 4), 0.1234);
        assert_eq!(round_dp(99.999, 2), 100.0);
        assert_eq!(round_dp(-1.005, 1), -1.0);
    }

    #[test]
    fn metrics_defaults_on_missing_fields() {
        let m: ParticipantMetrics = serde_json::from_str(r#"{"wallet_id":"nusa1abc"}"#).unwrap();
        assert_eq!(m.daily_active_minutes, 0.0);
        assert_eq!(m.contributions_count, 0);
        assert_eq!(m.wallet_balance, 0.0);
        assert_eq!(m.quality_score, 0.5);
    }

    #[test]
    fn metrics_accepts_legacy_field_names() {
        let m: ParticipantMetrics = serde_json::from_str(
            r#"{"wallet_address":"nusa1abc","daily_activity":120.0}"#,
        )
        .unwrap();
        assert_eq!(m.wallet_id, "nusa1abc");
        assert_eq!(m.daily_active_minutes, 120.0);
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(ParticipantMetrics::new("w").validate().is_ok());
    }

    #[test]
    fn validate_rejects_negative_balance() {
        let mut m = ParticipantMetrics::new("w");
        m.wallet_balance = -1.0;
        assert!(matches!(
            m.validate(),
            Err(PovcError::NegativeMetric {
                field: "wallet_balance",
                ..
            })
        ));
    }

    #[test]
    fn validate_rejects_negative_minutes() {
        let mut m = ParticipantMetrics::new("w");
        m.daily_active_minutes = -0.1;
        assert!(m.validate().is_err());
    }

    #[test]
    fn validate_rejects_nan() {
        let mut m = ParticipantMetrics::new("w");
        m.wallet_balance = f64::NAN;
        assert!(matches!(
            m.validate(),
            Err(PovcError::NonFiniteMetric { .. })
        ));
    }

    #[test]
    fn validate_rejects_quality_above_one() {
        let mut m = ParticipantMetrics::new("w");
        m.quality_score = 1.5;
        assert!(matches!(
            m.validate(),
            Err(PovcError::QualityOutOfRange { .. })
        ));
    }

    #[test]
    fn score_result_accepts_both_breakdown_spellings() {
        let breakdown = r#"{
            "activity": 0.5,
            "contribution": 0.5,
            "community": 0.5,
            "age_bonus": 0.0,
            "quality_multiplier": 0.5
        }"#;
        let canonical = format!(r#"{{"value_score":0.225,"breakdown":{breakdown}}}"#);
        let spelled_out =
            format!(r#"{{"value_score":0.225,"component_breakdown":{breakdown}}}"#);
        let a: ScoreResult = serde_json::from_str(&canonical).unwrap();
        let b: ScoreResult = serde_json::from_str(&spelled_out).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.breakdown.activity, 0.5);
    }

    #[test]
    fn whale_warning_serializes_to_legacy_labels() {
        assert_eq!(
            serde_json::to_string(&WhaleWarning::WhaleZone).unwrap(),
            r#""WHALE: No rewards""#
        );
        assert_eq!(
            serde_json::to_string(&WhaleWarning::RewardReduction).unwrap(),
            r#""Reward reduction active""#
        );
    }

    #[test]
    fn whale_warning_display_matches_serde() {
        for w in [
            WhaleWarning::RewardReduction,
            WhaleWarning::HighConcentration,
            WhaleWarning::WhaleZone,
        ] {
            let json = serde_json::to_string(&w).unwrap();
            assert_eq!(json, format!("{:?}", w.to_string()));
        }
    }

    #[test]
    fn concentration_result_round_trips() {
        let r = ConcentrationResult {
            balance: 500_000.0,
            percentage_of_supply: 2.0,
            reward_multiplier: 0.25,
            transfer_fee_percentage: 3,
            warnings: vec![WhaleWarning::RewardReduction, WhaleWarning::HighConcentration],
        };
        let json = serde_json::to_string(&r).unwrap();
        let back: ConcentrationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn reward_result_accepts_legacy_aliases() {
        let json = r#"{
            "wallet": "nusa1abc",
            "nvs_score": 0.5,
            "base_reward": 50000.0,
            "final_reward": 50000.0,
            "whale_check": {
                "balance": 0.0,
                "percentage": 0.0,
                "reward_multiplier": 1.0,
                "transfer_fee": 0,
                "warnings": []
            },
            "distribution_date": "2025-01-01",
            "next_distribution": "2025-01-31"
        }"#;
        let r: RewardResult = serde_json::from_str(json).unwrap();
        assert_eq!(r.wallet_id, "nusa1abc");
        assert_eq!(r.concentration.reward_multiplier, 1.0);
    }
}
