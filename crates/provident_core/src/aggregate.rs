//! Merges projector outputs into a unified net-worth timeline.
//!
//! The aggregator runs each selected scenario once at a shared horizon,
//! converts growth components through their caller-supplied FX multipliers
//! and zips the yearly rows into [`NetWorthBreakdown`]s. It is
//! currency-agnostic: every value it sums is already in the base currency.

use rustc_hash::FxHashMap;

use crate::config::{AggregationRequest, GrowthScenario};
use crate::error::{EngineError, Result, ScenarioKind};
use crate::model::{NetWorthBreakdown, NetWorthProjection, YearlySnapshot};
use crate::{cashflow, growth, simulation};

/// Component key for the retirement scenario's value.
pub const RETIREMENT_COMPONENT: &str = "retirement";

/// Component key for the cash-flow scenario's value.
pub const CASH_COMPONENT: &str = "cash";

/// Horizons are clamped here to bound iteration cost.
pub const MAX_HORIZON_YEARS: i32 = 100;

/// Aggregate the selected scenarios into one aligned net-worth series plus
/// the breakdown at the requested horizon.
///
/// Retirement and cash-flow scenarios are required; growth scenarios may be
/// absent. Duplicate growth categories accumulate into one component.
pub fn aggregate(request: &AggregationRequest) -> Result<NetWorthProjection> {
    let horizon = request.horizon_years.clamp(0, MAX_HORIZON_YEARS);

    let retirement_config = request
        .retirement
        .as_ref()
        .ok_or(EngineError::MissingScenario(ScenarioKind::Retirement))?;
    let cash_config = request
        .cash_flow
        .as_ref()
        .ok_or(EngineError::MissingScenario(ScenarioKind::CashFlow))?;

    let retirement = simulation::simulate(&retirement_config.with_projection_years(horizon))?;
    let cash = cashflow::project(&cash_config.with_projection_years(horizon))?;
    let growth_series = project_growth(&request.growth, horizon)?;

    let mut series = Vec::with_capacity(horizon as usize + 1);
    for year in 0..=horizon as usize {
        let mut components = FxHashMap::default();
        components.insert(
            RETIREMENT_COMPONENT.to_string(),
            total_at(&retirement.series, year),
        );
        components.insert(CASH_COMPONENT.to_string(), total_at(&cash, year));
        for (scenario, rows) in request.growth.iter().zip(&growth_series) {
            *components.entry(scenario.category.clone()).or_insert(0.0) +=
                scenario.fx_multiplier * total_at(rows, year);
        }

        let total = components.values().sum();
        series.push(NetWorthBreakdown {
            year,
            components,
            total,
        });
    }

    let at_year = series[horizon as usize].clone();
    Ok(NetWorthProjection { series, at_year })
}

/// Read a series at `year`, falling back to its last point when the series
/// is shorter than the requested horizon.
fn total_at(series: &[YearlySnapshot], year: usize) -> f64 {
    series
        .get(year)
        .or_else(|| series.last())
        .map_or(0.0, |row| row.total)
}

#[cfg(feature = "parallel")]
fn project_growth(scenarios: &[GrowthScenario], horizon: i32) -> Result<Vec<Vec<YearlySnapshot>>> {
    use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

    scenarios
        .par_iter()
        .map(|scenario| growth::project(&scenario.config.with_projection_years(horizon)))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn project_growth(scenarios: &[GrowthScenario], horizon: i32) -> Result<Vec<Vec<YearlySnapshot>>> {
    scenarios
        .iter()
        .map(|scenario| growth::project(&scenario.config.with_projection_years(horizon)))
        .collect()
}
