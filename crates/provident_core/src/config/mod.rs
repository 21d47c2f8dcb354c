//! Scenario configuration
//!
//! Each projector takes one immutable configuration value; the aggregator
//! takes an [`AggregationRequest`] selecting one scenario per asset
//! category. Configurations are plain data: construct them directly, with
//! serde, or through the fluent builders:
//!
//! ```ignore
//! use provident_core::config::{AggregationRequestBuilder, RetirementScenarioBuilder};
//!
//! let retirement = RetirementScenarioBuilder::new()
//!     .age(30)
//!     .birth_month(6)
//!     .monthly_wage(6_000.0)
//!     .annual_bonus(12_000.0)
//!     .years(35)
//!     .build();
//!
//! let request = AggregationRequestBuilder::new()
//!     .horizon(35)
//!     .retirement(retirement)
//!     .growth("equities", 1.35, equities)
//!     .cash_flow(savings)
//!     .build();
//! ```

use serde::{Deserialize, Serialize};

use crate::model::AccountBalances;

pub mod builder;

pub use builder::{AggregationRequestBuilder, RetirementScenarioBuilder};

fn default_projection_years() -> i32 {
    30
}

fn default_fx_multiplier() -> f64 {
    1.0
}

/// Inputs for the retirement-account simulator.
///
/// Monetary fields are clamped to zero defensively when negative; a
/// negative `projection_years` is the one rejected input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementScenarioConfig {
    #[serde(default)]
    pub current_age: u8,
    /// 0–11; the age increments at this month within the simulated year.
    #[serde(default)]
    pub birth_month_index: u8,
    #[serde(default)]
    pub monthly_wage: f64,
    #[serde(default)]
    pub annual_bonus: f64,
    #[serde(default)]
    pub annual_wage_growth_rate: f64,
    #[serde(default = "default_projection_years")]
    pub projection_years: i32,
    #[serde(default)]
    pub initial_balances: AccountBalances,
}

impl Default for RetirementScenarioConfig {
    fn default() -> Self {
        Self {
            current_age: 0,
            birth_month_index: 0,
            monthly_wage: 0.0,
            annual_bonus: 0.0,
            annual_wage_growth_rate: 0.0,
            projection_years: default_projection_years(),
            initial_balances: AccountBalances::default(),
        }
    }
}

impl RetirementScenarioConfig {
    /// Create a variant with a different projection horizon.
    #[must_use]
    pub fn with_projection_years(&self, years: i32) -> Self {
        let mut config = self.clone();
        config.projection_years = years;
        config
    }
}

/// How often a growth scenario receives its periodic contribution, which is
/// also its compounding frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContributionFrequency {
    Annual,
    Quarterly,
    #[default]
    Monthly,
}

impl ContributionFrequency {
    #[must_use]
    pub fn periods_per_year(self) -> u32 {
        match self {
            ContributionFrequency::Annual => 1,
            ContributionFrequency::Quarterly => 4,
            ContributionFrequency::Monthly => 12,
        }
    }
}

/// Inputs for the periodic-compounding projector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthScenarioConfig {
    #[serde(default)]
    pub initial_value: f64,
    #[serde(default)]
    pub periodic_contribution: f64,
    #[serde(default)]
    pub contribution_frequency: ContributionFrequency,
    /// Nominal annual rate; zero and negative values are valid.
    #[serde(default)]
    pub nominal_annual_rate: f64,
    #[serde(default = "default_projection_years")]
    pub projection_years: i32,
}

impl Default for GrowthScenarioConfig {
    fn default() -> Self {
        Self {
            initial_value: 0.0,
            periodic_contribution: 0.0,
            contribution_frequency: ContributionFrequency::default(),
            nominal_annual_rate: 0.0,
            projection_years: default_projection_years(),
        }
    }
}

impl GrowthScenarioConfig {
    /// Create a variant with a different projection horizon.
    #[must_use]
    pub fn with_projection_years(&self, years: i32) -> Self {
        let mut config = self.clone();
        config.projection_years = years;
        config
    }

    /// Create a variant with a different periodic contribution.
    #[must_use]
    pub fn with_periodic_contribution(&self, contribution: f64) -> Self {
        let mut config = self.clone();
        config.periodic_contribution = contribution;
        config
    }
}

/// Inputs for the cash-savings projector.
///
/// `initial_balance` is deliberately not clamped: a negative opening
/// position is a meaningful drawdown signal, not bad input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowScenarioConfig {
    #[serde(default)]
    pub initial_balance: f64,
    #[serde(default)]
    pub monthly_inflow: f64,
    #[serde(default)]
    pub monthly_outflow: f64,
    #[serde(default)]
    pub annual_outflow_growth_rate: f64,
    #[serde(default)]
    pub annual_interest_rate: f64,
    #[serde(default = "default_projection_years")]
    pub projection_years: i32,
}

impl Default for CashFlowScenarioConfig {
    fn default() -> Self {
        Self {
            initial_balance: 0.0,
            monthly_inflow: 0.0,
            monthly_outflow: 0.0,
            annual_outflow_growth_rate: 0.0,
            annual_interest_rate: 0.0,
            projection_years: default_projection_years(),
        }
    }
}

impl CashFlowScenarioConfig {
    /// Create a variant with a different projection horizon.
    #[must_use]
    pub fn with_projection_years(&self, years: i32) -> Self {
        let mut config = self.clone();
        config.projection_years = years;
        config
    }
}

/// One selected growth scenario inside an aggregation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthScenario {
    /// Component key in the resulting breakdowns, e.g. `"equities"`.
    pub category: String,
    /// Conversion factor into the base currency; the engine never supplies
    /// its own rates.
    #[serde(default = "default_fx_multiplier")]
    pub fx_multiplier: f64,
    pub config: GrowthScenarioConfig,
}

/// Scenario selection for one net-worth aggregation.
///
/// Retirement and cash-flow scenarios are required; growth scenarios may be
/// empty. The `Option` fields exist so a half-configured dashboard request
/// surfaces as [`EngineError::MissingScenario`](crate::error::EngineError)
/// rather than a construction failure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregationRequest {
    #[serde(default)]
    pub retirement: Option<RetirementScenarioConfig>,
    #[serde(default)]
    pub growth: Vec<GrowthScenario>,
    #[serde(default)]
    pub cash_flow: Option<CashFlowScenarioConfig>,
    #[serde(default)]
    pub horizon_years: i32,
}
