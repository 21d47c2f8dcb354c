mod balances;
mod results;

pub use balances::AccountBalances;
pub use results::{
    NetWorthBreakdown, NetWorthProjection, RestructureEvent, RetirementProjection, YearlySnapshot,
};
