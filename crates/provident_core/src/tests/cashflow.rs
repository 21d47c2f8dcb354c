//! Tests for the cash-savings projector

use crate::cashflow::project;
use crate::config::CashFlowScenarioConfig;
use crate::error::EngineError;

#[test]
fn test_year_zero_equals_initial_balance() {
    let config = CashFlowScenarioConfig {
        initial_balance: 12_345.67,
        monthly_inflow: 4_000.0,
        monthly_outflow: 2_000.0,
        annual_outflow_growth_rate: 0.02,
        annual_interest_rate: 0.015,
        projection_years: 5,
    };
    let series = project(&config).unwrap();

    assert_eq!(series.len(), 6);
    assert_eq!(series[0].year, 0);
    assert_eq!(series[0].total, 12_345.67);
}

#[test]
fn test_first_year_applies_interest_then_net_flow() {
    let config = CashFlowScenarioConfig {
        initial_balance: 10_000.0,
        monthly_inflow: 5_000.0,
        monthly_outflow: 3_000.0,
        annual_outflow_growth_rate: 0.10,
        annual_interest_rate: 0.02,
        projection_years: 1,
    };
    let series = project(&config).unwrap();

    // 10,000 * 1.02 + (60,000 - 36,000 * 1.1)
    let expected = 10_200.0 + 60_000.0 - 39_600.0;
    assert!(
        (series[1].total - expected).abs() < 1e-6,
        "got {}, expected {expected}",
        series[1].total
    );
}

#[test]
fn test_outflow_growth_exponent_is_the_snapshot_year() {
    // With a doubling growth rate the exponent choice is unambiguous:
    // year 1 spends 2x the base outflow, year 2 spends 4x.
    let config = CashFlowScenarioConfig {
        initial_balance: 0.0,
        monthly_inflow: 0.0,
        monthly_outflow: 100.0,
        annual_outflow_growth_rate: 1.0,
        annual_interest_rate: 0.0,
        projection_years: 2,
    };
    let series = project(&config).unwrap();

    assert!((series[1].total + 2_400.0).abs() < 1e-9);
    assert!((series[2].total + 7_200.0).abs() < 1e-9);
}

#[test]
fn test_unsustainable_plan_goes_negative_without_error() {
    let config = CashFlowScenarioConfig {
        initial_balance: 10_000.0,
        monthly_inflow: 0.0,
        monthly_outflow: 2_000.0,
        annual_outflow_growth_rate: 0.0,
        annual_interest_rate: 0.01,
        projection_years: 5,
    };
    let series = project(&config).unwrap();

    assert!(series.last().unwrap().total < 0.0);
    // Once negative, the drawdown keeps deepening.
    for pair in series.windows(2).skip(1) {
        assert!(pair[1].total < pair[0].total);
    }
}

#[test]
fn test_negative_flows_are_clamped() {
    let messy = CashFlowScenarioConfig {
        initial_balance: 1_000.0,
        monthly_inflow: -100.0,
        monthly_outflow: -50.0,
        annual_outflow_growth_rate: 0.05,
        annual_interest_rate: 0.02,
        projection_years: 3,
    };
    let clean = CashFlowScenarioConfig {
        monthly_inflow: 0.0,
        monthly_outflow: 0.0,
        ..messy.clone()
    };

    assert_eq!(project(&messy).unwrap(), project(&clean).unwrap());
}

#[test]
fn test_negative_initial_balance_is_preserved() {
    // A negative opening position is a meaningful drawdown signal, not bad
    // input, so it is not clamped.
    let config = CashFlowScenarioConfig {
        initial_balance: -5_000.0,
        monthly_inflow: 1_000.0,
        monthly_outflow: 0.0,
        annual_outflow_growth_rate: 0.0,
        annual_interest_rate: 0.0,
        projection_years: 1,
    };
    let series = project(&config).unwrap();

    assert_eq!(series[0].total, -5_000.0);
    assert!((series[1].total - 7_000.0).abs() < 1e-9);
}

#[test]
fn test_negative_horizon_is_rejected() {
    let config = CashFlowScenarioConfig {
        projection_years: -7,
        ..Default::default()
    };
    assert_eq!(
        project(&config),
        Err(EngineError::InvalidHorizon { years: -7 })
    );
}
