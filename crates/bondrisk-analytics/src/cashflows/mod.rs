//! Cashflow schedule construction.
//!
//! A [`Schedule`] is the ordered list of payment times and amounts implied
//! by [`BondTerms`](crate::terms::BondTerms). Regular periods fall on
//! `k/p` for `k = 1..=N`; when `T·p` is not an integer the remaining
//! fraction of a period is paid as a final stub at maturity.

mod schedule;

pub use schedule::{CashflowPeriod, Schedule, StubPolicy, PERIOD_COUNT_TOLERANCE};
