//! Wire-format contract: the JSON shape external services depend on.
//!
//! Field names, nesting, legacy aliases, and rounding precisions are all
//! backward-compatibility surface. A failure here means a dashboard or the
//! HTTP layer will silently misread engine output.

use nusa_core::traits::RewardCalculator;
use nusa_core::types::{DistributionSummary, ParticipantMetrics, RewardResult};
use nusa_povc::PovcEngine;
use nusa_tests::helpers::{active_participant, sample_population};
use serde_json::Value;

#[test]
fn reward_result_field_names() {
    let engine = PovcEngine::default();
    let reward = engine
        .calculate_reward(&active_participant("nusa1wire", 200_000.0))
        .unwrap();
    let v: Value = serde_json::to_value(&reward).unwrap();

    for key in [
        "wallet_id",
        "value_score",
        "base_reward",
        "final_reward",
        "concentration",
        "distribution_date",
        "next_distribution",
    ] {
        assert!(v.get(key).is_some(), "missing field {key}");
    }
    let conc = &v["concentration"];
    for key in [
        "balance",
        "percentage_of_supply",
        "reward_multiplier",
        "transfer_fee_percentage",
        "warnings",
    ] {
        assert!(conc.get(key).is_some(), "missing concentration field {key}");
    }
}

#[test]
fn summary_nests_wealth_distribution() {
    let engine = PovcEngine::default();
    let summary = engine
        .simulate_distribution(&sample_population(8, 1))
        .unwrap();
    let v: Value = serde_json::to_value(&summary).unwrap();

    let wd = v
        .get("wealth_distribution")
        .expect("wealth_distribution object");
    for key in ["gini_coefficient", "top_10_percent_threshold", "median_balance"] {
        assert!(wd.get(key).is_some(), "missing wealth field {key}");
    }
    assert!(v["individual_rewards"].as_array().unwrap().len() == 8);
}

#[test]
fn reward_result_round_trips() {
    let engine = PovcEngine::default();
    let reward = engine
        .calculate_reward(&active_participant("nusa1rt", 150_000.0))
        .unwrap();
    let json = serde_json::to_string(&reward).unwrap();
    let back: RewardResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, reward);
}

#[test]
fn summary_round_trips() {
    let engine = PovcEngine::default();
    let summary = engine
        .simulate_distribution(&sample_population(12, 9))
        .unwrap();
    let json = serde_json::to_string(&summary).unwrap();
    let back: DistributionSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(back, summary);
}

#[test]
fn metrics_parse_from_legacy_payload() {
    // Payload shape emitted by the first engine generation.
    let legacy = r#"{
        "wallet_address": "nusa1legacy",
        "daily_activity": 90.0,
        "contributions_count": 12,
        "wallet_balance": 5000.0
    }"#;
    let m: ParticipantMetrics = serde_json::from_str(legacy).unwrap();
    assert_eq!(m.wallet_id, "nusa1legacy");
    assert_eq!(m.daily_active_minutes, 90.0);
    assert_eq!(m.quality_score, 0.5);

    let engine = PovcEngine::default();
    assert!(engine.calculate_reward(&m).is_ok());
}

#[test]
fn whale_warnings_serialize_as_legacy_labels() {
    let engine = PovcEngine::default();
    let r = engine.assess_concentration(25_000_000.0 * 0.03).unwrap();
    let v: Value = serde_json::to_value(&r).unwrap();
    let labels: Vec<&str> = v["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w.as_str().unwrap())
        .collect();
    assert_eq!(
        labels,
        vec![
            "Reward reduction active",
            "High concentration penalty",
            "WHALE: No rewards",
        ]
    );
}

#[test]
fn rounding_precision_observed_in_json() {
    let engine = PovcEngine::default();
    let mut m = active_participant("nusa1prec", 260_000.0);
    m.daily_active_minutes = 100.0;
    m.quality_score = 0.77;
    let reward = engine.calculate_reward(&m).unwrap();
    let v: Value = serde_json::to_value(&reward).unwrap();

    let decimals = |x: f64, dp: i32| {
        let scaled = x * 10f64.powi(dp);
        (scaled - scaled.round()).abs() < 1e-6
    };
    assert!(decimals(v["value_score"].as_f64().unwrap(), 4));
    assert!(decimals(v["base_reward"].as_f64().unwrap(), 2));
    assert!(decimals(v["final_reward"].as_f64().unwrap(), 2));
    assert!(decimals(
        v["concentration"]["percentage_of_supply"].as_f64().unwrap(),
        4
    ));
}
