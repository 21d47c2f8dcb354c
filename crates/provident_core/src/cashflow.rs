//! Cash-savings projection under simple annual interest and net cash flow.

use crate::config::CashFlowScenarioConfig;
use crate::error::{EngineError, Result};
use crate::model::YearlySnapshot;

/// Project a cash balance that earns simple annual interest and absorbs the
/// year's net cash flow.
///
/// Monthly flows are annualized; the outflow grows by its configured rate,
/// compounded per year. The balance has no floor: a negative series tells
/// the caller the plan does not sustain itself, it is not an engine error.
pub fn project(config: &CashFlowScenarioConfig) -> Result<Vec<YearlySnapshot>> {
    if config.projection_years < 0 {
        return Err(EngineError::InvalidHorizon {
            years: config.projection_years,
        });
    }
    let years = config.projection_years as usize;

    let annual_inflow = config.monthly_inflow.max(0.0) * 12.0;
    let base_outflow = config.monthly_outflow.max(0.0) * 12.0;

    let mut series = Vec::with_capacity(years + 1);
    let mut balance = config.initial_balance;
    series.push(snapshot_row(0, balance));

    for year in 1..=years {
        let outflow = base_outflow * (1.0 + config.annual_outflow_growth_rate).powi(year as i32);
        let net = annual_inflow - outflow;
        balance = balance * (1.0 + config.annual_interest_rate) + net;
        series.push(snapshot_row(year, balance));
    }

    Ok(series)
}

fn snapshot_row(year: usize, balance: f64) -> YearlySnapshot {
    YearlySnapshot::from_buckets(year, None, balance, 0.0, 0.0)
}
