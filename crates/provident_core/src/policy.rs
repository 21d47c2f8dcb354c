//! Statutory policy constants for the provident-account simulation.
//!
//! Contribution allocation rates, wage ceilings, account caps and interest
//! tiers all live here, so a future policy year means editing this table and
//! the escalation rate, never the simulation loop.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Contribution allocation for one age band, as fractions of the wage
/// subject to contribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationBand {
    /// Inclusive upper age for this band; `None` marks the open-ended band.
    pub max_age: Option<u8>,
    pub ordinary: f64,
    pub special: f64,
    pub medisave: f64,
}

impl AllocationBand {
    /// Total contribution rate for the band.
    #[must_use]
    pub fn total_rate(&self) -> f64 {
        self.ordinary + self.special + self.medisave
    }
}

/// Allocation rates by age band. Total rates hold at 37% through age 55 and
/// step down monotonically afterwards.
pub const ALLOCATION_BANDS: [AllocationBand; 8] = [
    AllocationBand {
        max_age: Some(35),
        ordinary: 0.23,
        special: 0.06,
        medisave: 0.08,
    },
    AllocationBand {
        max_age: Some(45),
        ordinary: 0.21,
        special: 0.07,
        medisave: 0.09,
    },
    AllocationBand {
        max_age: Some(50),
        ordinary: 0.19,
        special: 0.08,
        medisave: 0.10,
    },
    AllocationBand {
        max_age: Some(55),
        ordinary: 0.15,
        special: 0.115,
        medisave: 0.105,
    },
    AllocationBand {
        max_age: Some(60),
        ordinary: 0.12,
        special: 0.095,
        medisave: 0.095,
    },
    AllocationBand {
        max_age: Some(65),
        ordinary: 0.035,
        special: 0.08,
        medisave: 0.105,
    },
    AllocationBand {
        max_age: Some(70),
        ordinary: 0.01,
        special: 0.07,
        medisave: 0.085,
    },
    AllocationBand {
        max_age: None,
        ordinary: 0.01,
        special: 0.01,
        medisave: 0.105,
    },
];

/// Look up the allocation band covering `age`.
///
/// The open-ended last band makes this total over all ages; the error arm
/// guards against a misconfigured table.
pub fn allocation_for_age(age: u8) -> Result<&'static AllocationBand> {
    ALLOCATION_BANDS
        .iter()
        .find(|band| band.max_age.is_none_or(|max| age <= max))
        .ok_or(EngineError::RateUnavailable { age })
}

/// Monthly wage subject to contribution is capped here.
pub const MONTHLY_WAGE_CEILING: f64 = 6_800.0;

/// Total wage subject to contribution per simulated year, bonus included.
pub const ANNUAL_WAGE_CEILING: f64 = 102_000.0;

/// Medisave balance cap at the model epoch.
pub const MEDISAVE_CAP_BASE: f64 = 71_500.0;

/// Consolidation target for the retirement account at age 55, and the cap on
/// the special/retirement account, at the model epoch.
pub const RETIREMENT_TARGET_BASE: f64 = 205_800.0;

/// Statutory caps escalate at this rate per simulated year.
pub const CAP_ESCALATION_RATE: f64 = 0.03;

/// Scale a statutory cap forward from the model epoch. The first simulated
/// year is the epoch itself (`years_from_epoch == 0`).
#[must_use]
pub fn escalated_cap(base: f64, years_from_epoch: usize) -> f64 {
    base * (1.0 + CAP_ESCALATION_RATE).powi(years_from_epoch as i32)
}

/// Nominal annual interest rates per sub-account, credited monthly.
pub const ORDINARY_INTEREST_RATE: f64 = 0.025;
pub const SPECIAL_INTEREST_RATE: f64 = 0.04;
pub const MEDISAVE_INTEREST_RATE: f64 = 0.04;
pub const RETIREMENT_INTEREST_RATE: f64 = 0.04;

/// Extra interest rate on the eligible slice of combined balances.
pub const EXTRA_INTEREST_RATE: f64 = 0.01;

/// Combined balance eligible for extra interest, consumed hierarchically:
/// medisave first, then special-or-retirement, then ordinary.
pub const EXTRA_INTEREST_ELIGIBLE_CAP: f64 = 60_000.0;

/// The ordinary account contributes at most this much to the eligible slice.
pub const EXTRA_INTEREST_ORDINARY_CAP: f64 = 20_000.0;

/// Age at which the special account consolidates into the retirement account.
pub const RESTRUCTURE_AGE: u8 = 55;

pub const MONTHS_PER_YEAR: usize = 12;
