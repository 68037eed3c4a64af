//! Anti-whale concentration guard.
//!
//! Maps a wallet balance, as a percentage of total supply, to a reward
//! multiplier and transfer-fee rate via three fixed tiers. Tier checks are
//! cumulative: every crossed tier appends its warning, and each one
//! unconditionally overwrites the multiplier and fee of the tier below, so
//! the highest crossed tier wins. All threshold comparisons are strict —
//! a balance exactly at a threshold stays in the lower tier.

use tracing::debug;

use nusa_core::constants::{
    TIER1_MAX_REDUCTION, TIER1_REDUCTION_SLOPE, TIER1_THRESHOLD_PCT, TIER1_TRANSFER_FEE_PCT,
    TIER2_BASE_REDUCTION, TIER2_MAX_EXTRA_REDUCTION, TIER2_REDUCTION_SLOPE, TIER2_THRESHOLD_PCT,
    TIER2_TRANSFER_FEE_PCT, TIER3_THRESHOLD_PCT, TIER3_TRANSFER_FEE_PCT,
};
use nusa_core::error::PovcError;
use nusa_core::types::{round_dp, ConcentrationResult, WhaleWarning};

/// Assess one balance against the anti-whale tiers.
///
/// Fails with [`PovcError::NonPositiveSupply`] when `total_supply <= 0`
/// (or is non-finite) and [`PovcError::NegativeMetric`] for a negative
/// balance; otherwise never fails.
pub fn assess_concentration(
    balance: f64,
    total_supply: f64,
) -> Result<ConcentrationResult, PovcError> {
    if !(total_supply.is_finite() && total_supply > 0.0) {
        return Err(PovcError::NonPositiveSupply {
            supply: total_supply,
        });
    }
    if !balance.is_finite() || balance < 0.0 {
        return Err(PovcError::NegativeMetric {
            wallet: String::new(),
            field: "wallet_balance",
            value: balance,
        });
    }

    let pct = balance / total_supply * 100.0;

    let mut result = ConcentrationResult {
        balance,
        percentage_of_supply: round_dp(pct, 4),
        reward_multiplier: 1.0,
        transfer_fee_percentage: 0,
        warnings: Vec::new(),
    };

    // Tier 1: reward-reduction zone, linear 1-50% reduction.
    if pct > TIER1_THRESHOLD_PCT {
        let reduction = ((pct - TIER1_THRESHOLD_PCT) * TIER1_REDUCTION_SLOPE)
            .min(TIER1_MAX_REDUCTION);
        result.reward_multiplier = 1.0 - reduction / 100.0;
        result.transfer_fee_percentage = TIER1_TRANSFER_FEE_PCT;
        result.warnings.push(WhaleWarning::RewardReduction);
    }

    // Tier 2: high concentration, 50-100% reduction. Overwrites tier 1.
    if pct > TIER2_THRESHOLD_PCT {
        let reduction = TIER2_BASE_REDUCTION
            + ((pct - TIER2_THRESHOLD_PCT) * TIER2_REDUCTION_SLOPE)
                .min(TIER2_MAX_EXTRA_REDUCTION);
        result.reward_multiplier = 1.0 - reduction / 100.0;
        result.transfer_fee_percentage = TIER2_TRANSFER_FEE_PCT;
        result.warnings.push(WhaleWarning::HighConcentration);
    }

    // Tier 3: whale zone, no rewards regardless of how far past 2%.
    if pct > TIER3_THRESHOLD_PCT {
        result.reward_multiplier = 0.0;
        result.transfer_fee_percentage = TIER3_TRANSFER_FEE_PCT;
        result.warnings.push(WhaleWarning::WhaleZone);
    }

    if !result.warnings.is_empty() {
        debug!(
            pct = result.percentage_of_supply,
            multiplier = result.reward_multiplier,
            fee = result.transfer_fee_percentage,
            "concentration tier crossed"
        );
    }

    Ok(result)
}
