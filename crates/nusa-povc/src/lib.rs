//! # nusa-povc — Proof of Value Creation engine.
//!
//! Three composed pure stages, no hidden state beyond the engine's
//! [`EngineConfig`](nusa_core::config::EngineConfig):
//! - **Score calculator**: raw participant telemetry to a NUSA Value Score
//!   (NVS) in [0, 1], a weighted activity/contribution/community/tenure sum
//!   gated multiplicatively by an external quality judgment.
//! - **Concentration guard**: a wallet's share of total supply to a reward
//!   multiplier and transfer-fee rate via three fixed anti-whale tiers.
//! - **Distribution engine**: per-participant monthly rewards, and for a
//!   population the aggregated payout plus wealth-inequality statistics
//!   (Gini coefficient, 90th-percentile threshold, median balance).

pub mod distribution;
pub mod engine;
pub mod score;
pub mod whale;

pub use engine::PovcEngine;
pub use score::compute_score;
pub use whale::assess_concentration;
