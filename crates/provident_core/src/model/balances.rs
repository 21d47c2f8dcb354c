//! Balances of the four ring-fenced provident sub-accounts.

use serde::{Deserialize, Serialize};

/// Sub-account balances of the retirement vehicle.
///
/// All four stay non-negative at every observation point; `special` is
/// forced to zero once the age-55 restructuring event has occurred.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AccountBalances {
    #[serde(default)]
    pub ordinary: f64,
    #[serde(default)]
    pub special: f64,
    #[serde(default)]
    pub medisave: f64,
    #[serde(default)]
    pub retirement: f64,
}

impl AccountBalances {
    #[must_use]
    pub fn new(ordinary: f64, special: f64, medisave: f64, retirement: f64) -> Self {
        Self {
            ordinary,
            special,
            medisave,
            retirement,
        }
    }

    /// Sum across all four sub-accounts.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.ordinary + self.special + self.medisave + self.retirement
    }

    /// Negative inputs are treated as empty accounts; the UI may hand the
    /// engine half-edited values.
    #[must_use]
    pub(crate) fn clamped(&self) -> Self {
        Self {
            ordinary: self.ordinary.max(0.0),
            special: self.special.max(0.0),
            medisave: self.medisave.max(0.0),
            retirement: self.retirement.max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_sums_all_accounts() {
        let b = AccountBalances::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(b.total(), 10.0);
    }

    #[test]
    fn test_clamped_zeroes_negatives() {
        let b = AccountBalances::new(-5.0, 2.0, -0.1, 4.0).clamped();
        assert_eq!(b, AccountBalances::new(0.0, 2.0, 0.0, 4.0));
    }
}
