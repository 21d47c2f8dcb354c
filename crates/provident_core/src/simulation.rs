//! Month-by-month simulation of the provident retirement accounts.
//!
//! Two nested clocks drive the loop: months within a simulated year and
//! years within the horizon. Each month runs a fixed sequence of
//! contributions, overflow cascade, interest, cascade again, then the
//! restructuring check; each year closes with a final cascade and a
//! snapshot row.

use crate::config::RetirementScenarioConfig;
use crate::error::{EngineError, Result};
use crate::model::{AccountBalances, RetirementProjection, YearlySnapshot};
use crate::policy::{self, MONTHS_PER_YEAR};
use crate::simulation_state::SimulationState;

/// Simulate the retirement accounts across the configured horizon.
///
/// Pure and deterministic: identical configurations produce bit-identical
/// series. The only rejected input is a negative horizon; monetary inputs
/// are clamped to zero instead.
pub fn simulate(config: &RetirementScenarioConfig) -> Result<RetirementProjection> {
    if config.projection_years < 0 {
        return Err(EngineError::InvalidHorizon {
            years: config.projection_years,
        });
    }
    let years = config.projection_years as usize;

    let monthly_wage = config.monthly_wage.max(0.0);
    let annual_bonus = config.annual_bonus.max(0.0);

    let mut state = SimulationState::from_config(config);

    let mut series = Vec::with_capacity(years + 1);
    series.push(snapshot_row(0, state.clock.age(), &state.balances));

    for year_index in 0..years {
        state.wages.reset();
        let growth = (1.0 + config.annual_wage_growth_rate).powi(year_index as i32);

        for month in 0..MONTHS_PER_YEAR {
            let age = state.clock.advance(month as u8);
            let band = policy::allocation_for_age(age)?;

            let mut wage_base = state.wages.cap_monthly(monthly_wage * growth);
            if month == MONTHS_PER_YEAR - 1 {
                wage_base += state.wages.cap_bonus(annual_bonus * growth);
            }

            let b = &mut state.balances;
            b.ordinary += wage_base * band.ordinary;
            b.special += wage_base * band.special;
            b.medisave += wage_base * band.medisave;

            // Contributions land before interest; the cascade re-runs after
            // interest crediting because crediting can push medisave back
            // over its cap within the same month.
            state.apply_overflow_cascade(year_index);
            state.accrue_monthly_interest();
            state.apply_overflow_cascade(year_index);

            if !state.restructured && age >= policy::RESTRUCTURE_AGE {
                state.apply_restructure(year_index);
            }
        }

        state.apply_overflow_cascade(year_index);
        series.push(snapshot_row(
            year_index + 1,
            state.clock.age(),
            &state.balances,
        ));
    }

    Ok(RetirementProjection {
        series,
        final_balances: state.balances,
        restructure: state.restructure,
    })
}

fn snapshot_row(year: usize, age: u8, balances: &AccountBalances) -> YearlySnapshot {
    YearlySnapshot::from_buckets(
        year,
        Some(age),
        balances.ordinary,
        balances.special + balances.retirement,
        balances.medisave,
    )
}
