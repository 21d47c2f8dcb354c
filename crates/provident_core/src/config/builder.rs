//! Scenario builder DSL
//!
//! Fluent construction for the two configuration types that carry several
//! fields. The simpler growth and cash-flow configs are comfortable as
//! struct literals with `..Default::default()`.
//!
//! # Examples
//!
//! ```ignore
//! use provident_core::config::RetirementScenarioBuilder;
//! use provident_core::model::AccountBalances;
//!
//! let scenario = RetirementScenarioBuilder::new()
//!     .age(30)
//!     .birth_month(6)
//!     .monthly_wage(6_000.0)
//!     .annual_bonus(12_000.0)
//!     .wage_growth(0.03)
//!     .years(35)
//!     .balances(AccountBalances::new(50_000.0, 30_000.0, 20_000.0, 0.0))
//!     .build();
//! ```

use crate::model::AccountBalances;

use super::{
    AggregationRequest, CashFlowScenarioConfig, GrowthScenario, GrowthScenarioConfig,
    RetirementScenarioConfig,
};

/// Builder for [`RetirementScenarioConfig`]
#[derive(Debug, Clone, Default)]
pub struct RetirementScenarioBuilder {
    config: RetirementScenarioConfig,
}

impl RetirementScenarioBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn age(mut self, age: u8) -> Self {
        self.config.current_age = age;
        self
    }

    /// Month of the year (0–11) at which the age increments.
    #[must_use]
    pub fn birth_month(mut self, month: u8) -> Self {
        self.config.birth_month_index = month;
        self
    }

    #[must_use]
    pub fn monthly_wage(mut self, wage: f64) -> Self {
        self.config.monthly_wage = wage;
        self
    }

    #[must_use]
    pub fn annual_bonus(mut self, bonus: f64) -> Self {
        self.config.annual_bonus = bonus;
        self
    }

    /// Annual growth applied to both wage and bonus.
    #[must_use]
    pub fn wage_growth(mut self, rate: f64) -> Self {
        self.config.annual_wage_growth_rate = rate;
        self
    }

    #[must_use]
    pub fn years(mut self, years: i32) -> Self {
        self.config.projection_years = years;
        self
    }

    #[must_use]
    pub fn balances(mut self, balances: AccountBalances) -> Self {
        self.config.initial_balances = balances;
        self
    }

    #[must_use]
    pub fn build(self) -> RetirementScenarioConfig {
        self.config
    }
}

/// Builder for [`AggregationRequest`]
#[derive(Debug, Clone, Default)]
pub struct AggregationRequestBuilder {
    request: AggregationRequest,
}

impl AggregationRequestBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn horizon(mut self, years: i32) -> Self {
        self.request.horizon_years = years;
        self
    }

    #[must_use]
    pub fn retirement(mut self, config: RetirementScenarioConfig) -> Self {
        self.request.retirement = Some(config);
        self
    }

    /// Add a growth scenario under `category`, valued through `fx_multiplier`.
    #[must_use]
    pub fn growth(
        mut self,
        category: impl Into<String>,
        fx_multiplier: f64,
        config: GrowthScenarioConfig,
    ) -> Self {
        self.request.growth.push(GrowthScenario {
            category: category.into(),
            fx_multiplier,
            config,
        });
        self
    }

    #[must_use]
    pub fn cash_flow(mut self, config: CashFlowScenarioConfig) -> Self {
        self.request.cash_flow = Some(config);
        self
    }

    #[must_use]
    pub fn build(self) -> AggregationRequest {
        self.request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retirement_builder_sets_all_fields() {
        let config = RetirementScenarioBuilder::new()
            .age(42)
            .birth_month(9)
            .monthly_wage(7_500.0)
            .annual_bonus(15_000.0)
            .wage_growth(0.02)
            .years(20)
            .balances(AccountBalances::new(1.0, 2.0, 3.0, 4.0))
            .build();

        assert_eq!(config.current_age, 42);
        assert_eq!(config.birth_month_index, 9);
        assert_eq!(config.monthly_wage, 7_500.0);
        assert_eq!(config.annual_bonus, 15_000.0);
        assert_eq!(config.annual_wage_growth_rate, 0.02);
        assert_eq!(config.projection_years, 20);
        assert_eq!(config.initial_balances.total(), 10.0);
    }

    #[test]
    fn test_aggregation_builder_collects_scenarios() {
        let request = AggregationRequestBuilder::new()
            .horizon(25)
            .retirement(RetirementScenarioConfig::default())
            .growth("equities", 1.35, GrowthScenarioConfig::default())
            .growth("other", 1.0, GrowthScenarioConfig::default())
            .cash_flow(CashFlowScenarioConfig::default())
            .build();

        assert_eq!(request.horizon_years, 25);
        assert!(request.retirement.is_some());
        assert!(request.cash_flow.is_some());
        assert_eq!(request.growth.len(), 2);
        assert_eq!(request.growth[0].category, "equities");
        assert_eq!(request.growth[0].fx_multiplier, 1.35);
    }
}
