//! Future-value projection for a periodically funded, compounding account.
//!
//! Used for equity and miscellaneous-asset scenarios. The projection runs
//! the explicit period-by-period loop rather than the closed-form
//! ordinary-annuity relation, so hand-simulated fixtures match it exactly;
//! the closed form is pinned against the loop in tests.

use crate::config::GrowthScenarioConfig;
use crate::error::{EngineError, Result};
use crate::model::YearlySnapshot;

/// Project a growth scenario into a yearly series.
///
/// Row `y` reports the cumulative amount invested in `ordinary` and the
/// gain (or loss) above it in `combined`, so `total` is the market value.
/// A zero rate degenerates to linear accumulation; negative rates flow
/// through the same loop with no floor.
pub fn project(config: &GrowthScenarioConfig) -> Result<Vec<YearlySnapshot>> {
    if config.projection_years < 0 {
        return Err(EngineError::InvalidHorizon {
            years: config.projection_years,
        });
    }
    let years = config.projection_years as usize;
    let periods = config.contribution_frequency.periods_per_year();
    let rate = config.nominal_annual_rate / f64::from(periods);
    let initial = config.initial_value.max(0.0);
    let contribution = config.periodic_contribution.max(0.0);

    let mut series = Vec::with_capacity(years + 1);
    series.push(snapshot_row(0, initial, initial));

    let mut value = initial;
    for year in 1..=years {
        for _ in 0..periods {
            // Ordinary-annuity convention: the contribution lands at period
            // end and starts compounding from the next period.
            value = value * (1.0 + rate) + contribution;
        }
        let invested = initial + contribution * f64::from(periods) * year as f64;
        series.push(snapshot_row(year, invested, value));
    }

    Ok(series)
}

fn snapshot_row(year: usize, invested: f64, value: f64) -> YearlySnapshot {
    YearlySnapshot::from_buckets(year, None, invested, value - invested, 0.0)
}
