//! Error types for the PoVC engine.
use thiserror::Error;

/// The only failure class the engine originates: invalid input.
///
/// Everything else is normalized by defaulting at deserialization time
/// (missing numeric fields become 0, missing quality becomes 0.5). There are
/// no transient failures and nothing to retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PovcError {
    #[error("non-positive total supply: {supply}")]
    NonPositiveSupply { supply: f64 },
    #[error("negative {field} for wallet {wallet}: {value}")]
    NegativeMetric {
        wallet: String,
        field: &'static str,
        value: f64,
    },
    #[error("non-finite {field} for wallet {wallet}")]
    NonFiniteMetric { wallet: String, field: &'static str },
    #[error("quality score out of [0, 1] for wallet {wallet}: {value}")]
    QualityOutOfRange { wallet: String, value: f64 },
    #[error("invalid participant {wallet} at index {index}: {source}")]
    InvalidParticipant {
        wallet: String,
        index: usize,
        source: Box<PovcError>,
    },
}
