//! Tests for the goal-seek helpers

use crate::analysis::required_periodic_contribution;
use crate::config::{ContributionFrequency, GrowthScenarioConfig};
use crate::error::EngineError;
use crate::growth;

fn base_config() -> GrowthScenarioConfig {
    GrowthScenarioConfig {
        initial_value: 10_000.0,
        periodic_contribution: 0.0,
        contribution_frequency: ContributionFrequency::Monthly,
        nominal_annual_rate: 0.05,
        projection_years: 10,
    }
}

#[test]
fn test_finds_contribution_that_reaches_target() {
    let target = 100_000.0;
    let contribution = required_periodic_contribution(&base_config(), target, 5_000.0)
        .unwrap()
        .expect("target should be reachable");

    assert!(contribution > 0.0);
    let series =
        growth::project(&base_config().with_periodic_contribution(contribution)).unwrap();
    let reached = series.last().unwrap().total;
    assert!(
        reached >= target - 1e-6,
        "contribution {contribution} only reaches {reached}"
    );
    // The answer is tight: shaving one percent falls short.
    let series =
        growth::project(&base_config().with_periodic_contribution(contribution * 0.99)).unwrap();
    assert!(series.last().unwrap().total < target);
}

#[test]
fn test_target_already_met_needs_no_contribution() {
    let result = required_periodic_contribution(&base_config(), 10_000.0, 5_000.0).unwrap();
    assert_eq!(result, Some(0.0));
}

#[test]
fn test_unreachable_target_returns_none() {
    let result = required_periodic_contribution(&base_config(), 1e9, 10.0).unwrap();
    assert_eq!(result, None);
}

#[test]
fn test_invalid_horizon_propagates() {
    let config = GrowthScenarioConfig {
        projection_years: -1,
        ..base_config()
    };
    assert_eq!(
        required_periodic_contribution(&config, 50_000.0, 1_000.0),
        Err(EngineError::InvalidHorizon { years: -1 })
    );
}
