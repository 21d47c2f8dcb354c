//! Tests for the periodic-compounding projector
//!
//! Pins the period-by-period loop against the closed-form ordinary-annuity
//! relation and covers the zero- and negative-rate edge cases.

use crate::config::{ContributionFrequency, GrowthScenarioConfig};
use crate::error::EngineError;
use crate::growth::project;

#[test]
fn test_row_count_and_year_zero() {
    let config = GrowthScenarioConfig {
        initial_value: 10_000.0,
        periodic_contribution: 500.0,
        contribution_frequency: ContributionFrequency::Monthly,
        nominal_annual_rate: 0.05,
        projection_years: 7,
    };
    let series = project(&config).unwrap();

    assert_eq!(series.len(), 8);
    assert_eq!(series[0].year, 0);
    assert_eq!(series[0].total, 10_000.0);
    assert_eq!(series[0].ordinary, 10_000.0);
    assert_eq!(series[0].combined, 0.0);
}

#[test]
fn test_zero_rate_degenerates_to_linear_accumulation() {
    let config = GrowthScenarioConfig {
        initial_value: 10_000.0,
        periodic_contribution: 500.0,
        contribution_frequency: ContributionFrequency::Monthly,
        nominal_annual_rate: 0.0,
        projection_years: 10,
    };
    let series = project(&config).unwrap();

    for row in &series {
        let invested = 10_000.0 + 500.0 * 12.0 * row.year as f64;
        assert!(
            (row.total - invested).abs() < 1e-6,
            "value {} != invested {} at year {}",
            row.total,
            invested,
            row.year
        );
        assert!((row.total - row.ordinary).abs() < 1e-6);
    }
}

#[test]
fn test_loop_matches_closed_form_annuity() {
    for frequency in [
        ContributionFrequency::Annual,
        ContributionFrequency::Quarterly,
        ContributionFrequency::Monthly,
    ] {
        let config = GrowthScenarioConfig {
            initial_value: 20_000.0,
            periodic_contribution: 1_000.0,
            contribution_frequency: frequency,
            nominal_annual_rate: 0.06,
            projection_years: 15,
        };
        let series = project(&config).unwrap();

        let periods = f64::from(frequency.periods_per_year());
        let rate = 0.06 / periods;
        for row in &series {
            let n = periods * row.year as f64;
            let factor = (1.0 + rate).powf(n);
            let closed = 20_000.0 * factor + 1_000.0 * (factor - 1.0) / rate;
            assert!(
                (row.total - closed).abs() < 1e-9 * closed.max(1.0),
                "{frequency:?} year {}: loop {} vs closed form {closed}",
                row.year,
                row.total
            );
        }
    }
}

#[test]
fn test_negative_rate_is_not_floored() {
    let config = GrowthScenarioConfig {
        initial_value: 50_000.0,
        periodic_contribution: 200.0,
        contribution_frequency: ContributionFrequency::Monthly,
        nominal_annual_rate: -0.10,
        projection_years: 5,
    };
    let series = project(&config).unwrap();

    for row in series.iter().skip(1) {
        assert!(
            row.total < row.ordinary,
            "value should trail invested under a negative rate at year {}",
            row.year
        );
        assert!(row.combined < 0.0);
    }
    // Still a balance, not a write-off.
    assert!(series.last().unwrap().total > 0.0);
}

#[test]
fn test_bucket_sum_invariant_is_exact() {
    let config = GrowthScenarioConfig {
        initial_value: 1_234.5,
        periodic_contribution: 67.8,
        contribution_frequency: ContributionFrequency::Quarterly,
        nominal_annual_rate: 0.04,
        projection_years: 30,
    };
    for row in &project(&config).unwrap() {
        assert_eq!(row.total, row.ordinary + row.combined + row.medisave);
    }
}

#[test]
fn test_negative_contribution_is_clamped() {
    let negative = GrowthScenarioConfig {
        initial_value: 5_000.0,
        periodic_contribution: -300.0,
        contribution_frequency: ContributionFrequency::Monthly,
        nominal_annual_rate: 0.03,
        projection_years: 4,
    };
    let zero = GrowthScenarioConfig {
        periodic_contribution: 0.0,
        ..negative.clone()
    };

    assert_eq!(project(&negative).unwrap(), project(&zero).unwrap());
}

#[test]
fn test_negative_horizon_is_rejected() {
    let config = GrowthScenarioConfig {
        projection_years: -3,
        ..Default::default()
    };
    assert_eq!(
        project(&config),
        Err(EngineError::InvalidHorizon { years: -3 })
    );
}
