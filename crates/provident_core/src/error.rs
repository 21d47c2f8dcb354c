use std::fmt;

/// Scenario categories an aggregation request selects from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioKind {
    Retirement,
    Growth,
    CashFlow,
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioKind::Retirement => write!(f, "retirement"),
            ScenarioKind::Growth => write!(f, "growth"),
            ScenarioKind::CashFlow => write!(f, "cash flow"),
        }
    }
}

/// Errors produced by the projection engine
///
/// All variants are recoverable by the caller: substitute a safe default
/// snapshot and keep rendering. The engine never panics across its public
/// boundary and never logs.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A negative projection horizon was requested.
    InvalidHorizon { years: i32 },
    /// No allocation band covers the requested age. Unreachable with the
    /// built-in table (the last band is open-ended), guarded regardless.
    RateUnavailable { age: u8 },
    /// A required scenario was absent from an aggregation request.
    MissingScenario(ScenarioKind),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidHorizon { years } => {
                write!(f, "projection horizon must be non-negative, got {years}")
            }
            EngineError::RateUnavailable { age } => {
                write!(f, "no allocation rates resolve for age {age}")
            }
            EngineError::MissingScenario(kind) => {
                write!(f, "aggregation request is missing its {kind} scenario")
            }
        }
    }
}

impl std::error::Error for EngineError {}

pub type Result<T> = std::result::Result<T, EngineError>;
