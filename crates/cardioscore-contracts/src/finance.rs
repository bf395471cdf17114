//! Financial modeling types for program ROI analysis.
//!
//! Line items are pure input values; `FinancialSummary` is pure output.
//! Payback period is modeled as an explicit `Payback` enum so a program
//! with zero annual savings yields a defined `Undefined` variant rather
//! than a silent `f64::INFINITY`.

use serde::{Deserialize, Serialize};

/// A probability-weighted expected annual cost saving.
///
/// Example: "avoided stroke admissions" with an annual amount and the
/// probability the saving is realized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsLineItem {
    pub description: String,
    /// Expected gross saving per year, in dollars. Must be non-negative.
    pub annual_amount: f64,
    /// Probability the saving is realized, in [0, 1].
    pub probability: f64,
}

/// Incremental procedure revenue from a change in case volume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcedureVolumeDelta {
    pub description: String,
    /// Additional cases per year. Must be non-negative.
    pub volume_delta: f64,
    /// Net contribution margin per case, in dollars. Must be non-negative.
    pub net_margin_per_case: f64,
    /// Fraction of cases completed successfully, in [0, 1].
    pub success_rate: f64,
}

/// How often an investment line item recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recurrence {
    /// Charged once, outside the annual run rate.
    OneTime,
    Monthly,
    Quarterly,
    Annual,
}

impl Recurrence {
    /// Occurrences per year, or `None` for one-time items.
    pub fn per_year(self) -> Option<f64> {
        match self {
            Recurrence::OneTime => None,
            Recurrence::Monthly => Some(12.0),
            Recurrence::Quarterly => Some(4.0),
            Recurrence::Annual => Some(1.0),
        }
    }
}

/// A program cost: capital outlay, staffing, maintenance, training.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentLineItem {
    pub description: String,
    /// Amount per occurrence, in dollars. Must be non-negative.
    pub amount: f64,
    pub cadence: Recurrence,
}

/// Payback period of the modeled program.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Payback {
    /// Total cost recovered after this many years of annual savings.
    Years(f64),
    /// Annual savings are zero — the investment is never recovered.
    Undefined,
}

/// Aggregated financial totals over the modeled timeframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Probability-weighted savings plus procedure margin, per year.
    pub annual_savings: f64,
    /// Recurring investments normalized to an annual run rate.
    pub annual_recurring_cost: f64,
    /// Sum of one-time investments.
    pub one_time_cost: f64,
    /// One-time cost plus recurring cost over the full timeframe.
    pub total_cost: f64,
    /// Annual savings over the full timeframe.
    pub total_savings: f64,
    /// Total savings minus total cost.
    pub net_benefit: f64,
    /// Net benefit as a percentage of total cost.
    pub roi_pct: f64,
    pub payback: Payback,
}
