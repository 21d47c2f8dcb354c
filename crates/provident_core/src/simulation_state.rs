//! Mutable working state for the retirement-account simulation.
//!
//! [`simulate`](crate::simulation::simulate) owns one [`SimulationState`]
//! per call and drives it month by month; nothing here outlives a call.

use crate::config::RetirementScenarioConfig;
use crate::model::{AccountBalances, RestructureEvent};
use crate::policy::{
    self, EXTRA_INTEREST_ELIGIBLE_CAP, EXTRA_INTEREST_ORDINARY_CAP, EXTRA_INTEREST_RATE,
    MEDISAVE_CAP_BASE, MEDISAVE_INTEREST_RATE, MONTHS_PER_YEAR, ORDINARY_INTEREST_RATE,
    RETIREMENT_INTEREST_RATE, RETIREMENT_TARGET_BASE, SPECIAL_INTEREST_RATE,
};

/// Tracks the member's effective age across simulated months.
///
/// The age increments on the month after the birth month, including across
/// the December/January wrap, so the contribution bands and the
/// restructuring check observe the same boundary. Kept as explicit state
/// instead of being recomputed from month indices.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AgeClock {
    age: u8,
    birth_month: u8,
    prev_month: Option<u8>,
}

impl AgeClock {
    pub(crate) fn new(age: u8, birth_month_index: u8) -> Self {
        Self {
            age,
            // Out-of-range UI input resolves to December.
            birth_month: birth_month_index.min(MONTHS_PER_YEAR as u8 - 1),
            prev_month: None,
        }
    }

    /// Advance to `month` (0–11 within the simulated year) and return the
    /// effective age for that month.
    pub(crate) fn advance(&mut self, month: u8) -> u8 {
        if self.prev_month == Some(self.birth_month) {
            self.age = self.age.saturating_add(1);
        }
        self.prev_month = Some(month);
        self.age
    }

    /// Effective age of the most recently advanced month.
    pub(crate) fn age(&self) -> u8 {
        self.age
    }
}

/// Year-to-date wage subject to contribution; reset every simulated year.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct WageCeilingTracker {
    ytd_subject: f64,
}

impl WageCeilingTracker {
    pub(crate) fn reset(&mut self) {
        self.ytd_subject = 0.0;
    }

    /// Cap a month's wage at the monthly ceiling and register it against
    /// the annual ceiling.
    pub(crate) fn cap_monthly(&mut self, wage: f64) -> f64 {
        let capped = wage.min(policy::MONTHLY_WAGE_CEILING);
        self.ytd_subject += capped;
        capped
    }

    /// Admit a bonus only up to the headroom left under the annual ceiling.
    pub(crate) fn cap_bonus(&mut self, bonus: f64) -> f64 {
        let headroom = (policy::ANNUAL_WAGE_CEILING - self.ytd_subject).max(0.0);
        let capped = bonus.min(headroom);
        self.ytd_subject += capped;
        capped
    }
}

/// Working state threaded through the monthly loop.
#[derive(Debug)]
pub(crate) struct SimulationState {
    pub(crate) balances: AccountBalances,
    pub(crate) clock: AgeClock,
    pub(crate) wages: WageCeilingTracker,
    pub(crate) restructured: bool,
    pub(crate) restructure: RestructureEvent,
}

impl SimulationState {
    pub(crate) fn from_config(config: &RetirementScenarioConfig) -> Self {
        Self {
            balances: config.initial_balances.clamped(),
            clock: AgeClock::new(config.current_age, config.birth_month_index),
            wages: WageCeilingTracker::default(),
            restructured: false,
            restructure: RestructureEvent::default(),
        }
    }

    /// Re-check the statutory caps and sweep excess to the fallback
    /// accounts. Idempotent: safe to run any number of times at a given
    /// instant, which lets the same routine serve the post-contribution,
    /// post-interest and year-end sites.
    pub(crate) fn apply_overflow_cascade(&mut self, year_index: usize) {
        let medisave_cap = policy::escalated_cap(MEDISAVE_CAP_BASE, year_index);
        let reserve_cap = policy::escalated_cap(RETIREMENT_TARGET_BASE, year_index);

        let b = &mut self.balances;
        let excess = (b.medisave - medisave_cap).max(0.0);
        if excess > 0.0 {
            b.medisave -= excess;
            let destination = if self.restructured {
                &mut b.retirement
            } else {
                &mut b.special
            };
            let moved = excess.min((reserve_cap - *destination).max(0.0));
            *destination += moved;
            b.ordinary += excess - moved;
        }

        // The allocation table still nominally routes contributions to the
        // special account at advanced ages; once consolidated it must never
        // show a positive balance, so sweep it every time.
        if self.restructured && b.special > 0.0 {
            let moved = b.special.min((reserve_cap - b.retirement).max(0.0));
            b.retirement += moved;
            b.ordinary += b.special - moved;
            b.special = 0.0;
        }
    }

    /// Accrue one month of interest. Base interest is computed per account
    /// on the pre-credit balance and credited in one step, so a month never
    /// compounds on its own interest. Extra interest consumes the eligible
    /// budget hierarchically and lands on the active special-or-retirement
    /// account.
    pub(crate) fn accrue_monthly_interest(&mut self) {
        fn consume(budget: &mut f64, balance: f64) -> f64 {
            let taken = balance.min(*budget);
            *budget -= taken;
            taken
        }

        let months = MONTHS_PER_YEAR as f64;
        let b = &self.balances;

        let mut budget = EXTRA_INTEREST_ELIGIBLE_CAP;
        let mut eligible = consume(&mut budget, b.medisave);
        eligible += consume(
            &mut budget,
            if self.restructured {
                b.retirement
            } else {
                b.special
            },
        );
        eligible += consume(&mut budget, b.ordinary.min(EXTRA_INTEREST_ORDINARY_CAP));
        let extra = eligible * (EXTRA_INTEREST_RATE / months);

        let pending_ordinary = b.ordinary * (ORDINARY_INTEREST_RATE / months);
        let pending_special = b.special * (SPECIAL_INTEREST_RATE / months);
        let pending_medisave = b.medisave * (MEDISAVE_INTEREST_RATE / months);
        let pending_retirement = b.retirement * (RETIREMENT_INTEREST_RATE / months);

        let b = &mut self.balances;
        b.ordinary += pending_ordinary;
        b.special += pending_special;
        b.medisave += pending_medisave;
        b.retirement += pending_retirement;
        if self.restructured {
            b.retirement += extra;
        } else {
            b.special += extra;
        }
    }

    /// One-time consolidation of the special account into the retirement
    /// account, up to the year-scaled target; any remainder becomes
    /// withdrawable ordinary balance. Records the event snapshot.
    pub(crate) fn apply_restructure(&mut self, year_index: usize) {
        let target = policy::escalated_cap(RETIREMENT_TARGET_BASE, year_index);

        let b = &mut self.balances;
        let moved = b.special.min((target - b.retirement).max(0.0));
        b.retirement += moved;
        b.ordinary += b.special - moved;
        b.special = 0.0;

        self.restructured = true;
        self.restructure = RestructureEvent {
            age_reached: true,
            withdrawable_amount: b.ordinary,
            retirement_account_amount: b.retirement,
            target_amount: target,
        };
    }
}
