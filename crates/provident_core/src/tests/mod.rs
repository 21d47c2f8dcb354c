//! Integration tests for the projection engine
//!
//! Tests are organized by component:
//! - `retirement` - the retirement-account simulator
//! - `growth` - the periodic-compounding projector
//! - `cashflow` - the cash-savings projector
//! - `aggregate` - the net-worth aggregator
//! - `analysis` - goal-seek helpers

mod analysis;
mod cashflow;
mod growth;
