//! Goal-seek helpers built on top of the projectors.
//!
//! Single-parameter searches over monotone objectives, so plain bisection
//! converges without derivative information.

use crate::config::GrowthScenarioConfig;
use crate::error::Result;
use crate::growth;

const BISECTION_ITERATIONS: usize = 64;

/// Find the periodic contribution a growth scenario needs to reach
/// `target_value` at the end of its horizon.
///
/// The horizon value is monotone increasing in the contribution, so the
/// answer is bracketed between zero and `max_contribution` and bisected to
/// floating-point convergence. Returns `Ok(None)` when even
/// `max_contribution` cannot reach the target within the horizon.
pub fn required_periodic_contribution(
    base: &GrowthScenarioConfig,
    target_value: f64,
    max_contribution: f64,
) -> Result<Option<f64>> {
    let max_contribution = max_contribution.max(0.0);

    if horizon_value(base, 0.0)? >= target_value {
        return Ok(Some(0.0));
    }
    if horizon_value(base, max_contribution)? < target_value {
        return Ok(None);
    }

    let mut low = 0.0;
    let mut high = max_contribution;
    for _ in 0..BISECTION_ITERATIONS {
        let mid = f64::midpoint(low, high);
        if horizon_value(base, mid)? < target_value {
            low = mid;
        } else {
            high = mid;
        }
    }

    Ok(Some(high))
}

fn horizon_value(base: &GrowthScenarioConfig, contribution: f64) -> Result<f64> {
    let series = growth::project(&base.with_periodic_contribution(contribution))?;
    // project() always returns at least the year-0 row.
    Ok(series.last().map_or(0.0, |row| row.total))
}
