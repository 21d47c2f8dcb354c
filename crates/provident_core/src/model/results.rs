//! Projection results and snapshots
//!
//! Every projector emits one [`YearlySnapshot`] per integer year (year 0 is
//! the initial state), so the aggregator can zip their outputs uniformly.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::balances::AccountBalances;

/// One point of a projector's yearly series.
///
/// The row shape is shared across projectors; bucket semantics differ:
///
/// | projector  | `ordinary`       | `combined`            | `medisave` |
/// |------------|------------------|-----------------------|------------|
/// | retirement | ordinary account | special + retirement  | medisave   |
/// | growth     | amount invested  | value above invested  | 0          |
/// | savings    | cash balance     | 0                     | 0          |
///
/// `total` always equals the sum of the three buckets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct YearlySnapshot {
    pub year: usize,
    /// Age at year end; only the retirement simulator populates this.
    pub age: Option<u8>,
    pub ordinary: f64,
    pub combined: f64,
    pub medisave: f64,
    pub total: f64,
}

impl YearlySnapshot {
    /// Build a row with `total` derived from the buckets, keeping the sum
    /// invariant exact rather than approximate.
    #[must_use]
    pub fn from_buckets(
        year: usize,
        age: Option<u8>,
        ordinary: f64,
        combined: f64,
        medisave: f64,
    ) -> Self {
        Self {
            year,
            age,
            ordinary,
            combined,
            medisave,
            total: ordinary + combined + medisave,
        }
    }
}

/// One-time record of the age-55 account restructuring.
///
/// Captured at the instant the special account consolidates into the
/// retirement account. `age_reached` stays false for horizons that end
/// before the member turns 55.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RestructureEvent {
    pub age_reached: bool,
    /// Ordinary-account balance at the instant of the transfer.
    pub withdrawable_amount: f64,
    /// Retirement-account balance right after the transfer.
    pub retirement_account_amount: f64,
    /// The year-scaled consolidation target in force at that instant.
    pub target_amount: f64,
}

/// Complete output of the retirement-account simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementProjection {
    /// One row per year, `projection_years + 1` rows in total.
    pub series: Vec<YearlySnapshot>,
    /// Sub-account split at the end of the horizon.
    pub final_balances: AccountBalances,
    pub restructure: RestructureEvent,
}

/// Net worth at one year, broken down by component category.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NetWorthBreakdown {
    pub year: usize,
    /// Category → FX-adjusted value in the base currency.
    pub components: FxHashMap<String, f64>,
    /// Sum of `components`.
    pub total: f64,
}

/// Aligned net-worth series plus the breakdown at the requested horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetWorthProjection {
    pub series: Vec<NetWorthBreakdown>,
    pub at_year: NetWorthBreakdown,
}
