//! # cardioscore-finance
//!
//! Program ROI and cost-savings aggregation for CardioScore.
//!
//! One operation: [`aggregate_financial_impact`] sums probability-weighted
//! savings and procedure margin against one-time and recurring
//! investments, producing a `FinancialSummary` with ROI, net benefit, and
//! an explicit payback period that is `Undefined` (not infinite) when
//! annual savings are zero.

pub mod aggregate;

pub use aggregate::aggregate_financial_impact;
