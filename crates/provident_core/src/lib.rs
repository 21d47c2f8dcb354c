//! Deterministic financial projection engine
//!
//! This crate is the calculation core of a personal-finance dashboard. It
//! simulates the evolution of a member's retirement accounts and investment
//! balances over a multi-year horizon and merges them into one net-worth
//! timeline. Four components, each a pure function:
//!
//! - [`simulation::simulate`]: the retirement-account simulator: four
//!   ring-fenced sub-accounts stepped month by month under age-banded
//!   contribution rates, wage ceilings, escalating statutory caps, tiered
//!   bonus interest and the one-time age-55 restructuring event.
//! - [`growth::project`]: future value of a periodically funded account
//!   compounding at a fixed nominal rate (equities, miscellaneous assets).
//! - [`cashflow::project`]: a cash balance earning simple annual interest
//!   while absorbing growing net cash flow.
//! - [`aggregate::aggregate`]: zips the yearly series of the selected
//!   scenarios, FX-adjusted, into net-worth breakdowns.
//!
//! Everything is synchronous, deterministic and free of I/O; callers own
//! formatting, persistence and observability. Errors come back as
//! [`error::EngineError`] values, never panics.
//!
//! ```ignore
//! use provident_core::config::RetirementScenarioBuilder;
//! use provident_core::simulation;
//!
//! let scenario = RetirementScenarioBuilder::new()
//!     .age(30)
//!     .monthly_wage(6_000.0)
//!     .annual_bonus(12_000.0)
//!     .years(35)
//!     .build();
//! let projection = simulation::simulate(&scenario)?;
//! let at_55 = &projection.restructure;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod aggregate;
pub mod analysis;
pub mod cashflow;
pub mod error;
pub mod growth;
pub mod policy;
pub mod simulation;

mod simulation_state;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{
    AggregationRequest, AggregationRequestBuilder, CashFlowScenarioConfig, ContributionFrequency,
    GrowthScenario, GrowthScenarioConfig, RetirementScenarioBuilder, RetirementScenarioConfig,
};
pub use error::{EngineError, Result, ScenarioKind};
pub use model::{
    AccountBalances, NetWorthBreakdown, NetWorthProjection, RestructureEvent,
    RetirementProjection, YearlySnapshot,
};
