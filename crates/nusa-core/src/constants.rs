//! Economic constants. All monetary values in NUSA token units.

/// Total NUSA token supply.
pub const TOTAL_SUPPLY: f64 = 25_000_000.0;

/// Token budget distributed across all participants' scores each period.
pub const MONTHLY_REWARD_POOL: f64 = 100_000.0;

/// Days between reward distributions.
pub const REWARD_PERIOD_DAYS: i64 = 30;

// ---------------------------------------------------------------------------
// Value-score weight/saturation table.
//
// Canonical formula: the weighted activity/contribution/community terms plus
// the tenure bonus are gated multiplicatively by the quality score, then
// clamped to [0, 1].
// ---------------------------------------------------------------------------

/// Daily active minutes at which the activity sub-score saturates (4 hours).
pub const ACTIVITY_SATURATION_MINUTES: f64 = 240.0;
/// Contribution count at which the contribution sub-score saturates.
pub const CONTRIBUTION_SATURATION: f64 = 100.0;
/// Community-interaction count at which the community sub-score saturates.
pub const COMMUNITY_SATURATION: f64 = 50.0;

pub const ACTIVITY_WEIGHT: f64 = 0.3;
pub const CONTRIBUTION_WEIGHT: f64 = 0.4;
pub const COMMUNITY_WEIGHT: f64 = 0.2;

/// Maximum long-tenure bonus, reached after [`TENURE_FULL_DAYS`].
pub const AGE_BONUS_CAP: f64 = 0.2;
/// Days of activity required for the full tenure bonus.
pub const TENURE_FULL_DAYS: f64 = 365.0;

/// Quality score assumed when no external judgment is supplied.
pub const DEFAULT_QUALITY_SCORE: f64 = 0.5;

// ---------------------------------------------------------------------------
// Anti-whale tier thresholds, as percentage of total supply held by one
// wallet. All comparisons are strict: a balance exactly at a threshold stays
// in the lower tier.
// ---------------------------------------------------------------------------

/// Above this share the reward-reduction zone begins.
pub const TIER1_THRESHOLD_PCT: f64 = 0.5;
/// Above this share the high-concentration zone begins.
pub const TIER2_THRESHOLD_PCT: f64 = 1.0;
/// Above this share the wallet is a whale and earns nothing.
pub const TIER3_THRESHOLD_PCT: f64 = 2.0;

/// Tier 1: reduction grows 2 points per percentage point of supply above
/// the threshold, capped at 50%.
pub const TIER1_REDUCTION_SLOPE: f64 = 2.0;
pub const TIER1_MAX_REDUCTION: f64 = 50.0;

/// Tier 2: reduction starts at 50% and grows 25 points per percentage point
/// of supply above the threshold, reaching 100% at 3% of supply.
pub const TIER2_BASE_REDUCTION: f64 = 50.0;
pub const TIER2_REDUCTION_SLOPE: f64 = 25.0;
pub const TIER2_MAX_EXTRA_REDUCTION: f64 = 50.0;

pub const TIER1_TRANSFER_FEE_PCT: u8 = 1;
pub const TIER2_TRANSFER_FEE_PCT: u8 = 3;
pub const TIER3_TRANSFER_FEE_PCT: u8 = 10;
