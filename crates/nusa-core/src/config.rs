//! Engine configuration.
//!
//! The two process-wide economic constants are carried as an explicit
//! immutable value handed to the engine at construction, never as mutable
//! global state. A constructed config is guaranteed to have a positive,
//! finite total supply, which is what lets the per-call concentration math
//! stay infallible downstream.

use serde::{Deserialize, Serialize};

use crate::constants::{MONTHLY_REWARD_POOL, TOTAL_SUPPLY};
use crate::error::PovcError;

/// Immutable economic parameters held by an engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    total_supply: f64,
    monthly_reward_pool: f64,
}

impl EngineConfig {
    /// Create a config, rejecting non-positive or non-finite total supply.
    pub fn new(total_supply: f64, monthly_reward_pool: f64) -> Result<Self, PovcError> {
        if !(total_supply.is_finite() && total_supply > 0.0) {
            return Err(PovcError::NonPositiveSupply {
                supply: total_supply,
            });
        }
        if !(monthly_reward_pool.is_finite() && monthly_reward_pool >= 0.0) {
            return Err(PovcError::NegativeMetric {
                wallet: String::new(),
                field: "monthly_reward_pool",
                value: monthly_reward_pool,
            });
        }
        Ok(Self {
            total_supply,
            monthly_reward_pool,
        })
    }

    pub fn total_supply(&self) -> f64 {
        self.total_supply
    }

    pub fn monthly_reward_pool(&self) -> f64 {
        self.monthly_reward_pool
    }
}

impl Default for EngineConfig {
    /// Canonical mainnet parameters: 25M supply, 100K monthly pool.
    fn default() -> Self {
        Self {
            total_supply: TOTAL_SUPPLY,
            monthly_reward_pool: MONTHLY_REWARD_POOL,
        }
    }
}
