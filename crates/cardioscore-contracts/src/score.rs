//! Risk score result types.
//!
//! Both risk scorers — CHA₂DS₂-VASc and HAS-BLED — produce a `ScoreResult`:
//! an integer point total, a categorical tier, and the annualized event
//! risk drawn from the scorer's fixed lookup table.

use serde::{Deserialize, Serialize};

/// Categorical risk tier derived from a score.
///
/// Tier thresholds belong to the scorer, not to this type — CHA₂DS₂-VASc
/// thresholds are sex-differentiated, HAS-BLED thresholds are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

/// The output of a risk scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Integer point total. CHA₂DS₂-VASc range 0–9, HAS-BLED range 0–8.
    pub score: u8,
    /// Categorical tier per the scorer's thresholds.
    pub tier: RiskTier,
    /// Annualized event risk (% per year) from the scorer's lookup table,
    /// clamped at the table bounds. `None` when the scorer publishes no
    /// annualized table.
    pub annual_risk_pct: Option<f64>,
}
