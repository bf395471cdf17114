//! Combined assessment report types.
//!
//! An `AssessmentReport` is the assessor pipeline's single output value:
//! both risk scores, the ablation estimate with its factor breakdown, and
//! one eligibility verdict per configured therapy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::eligibility::EligibilityVerdict;
use crate::score::ScoreResult;

/// One labeled adjustment applied by the ablation outcome model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AblationFactor {
    /// What drove the adjustment (e.g. "age 60-69").
    pub label: String,
    /// Percentage-point delta applied to the base rate.
    pub delta: i8,
}

/// Estimated likelihood of ablation success for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AblationEstimate {
    /// Success likelihood in percent, clamped to [20, 95].
    pub success_pct: u8,
    /// Every non-zero adjustment applied to the 60% base rate, in the
    /// order the model considered them.
    pub factors: Vec<AblationFactor>,
}

/// The assessor pipeline's combined output for one patient profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// CHA₂DS₂-VASc result.
    pub stroke: ScoreResult,
    /// HAS-BLED result.
    pub bleeding: ScoreResult,
    pub ablation: AblationEstimate,
    /// One verdict per therapy, in criteria declaration order.
    pub therapies: Vec<EligibilityVerdict>,
    /// When this report was produced.
    pub generated_at: DateTime<Utc>,
}
