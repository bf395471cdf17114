//! Therapy eligibility verdict and evaluation context types.
//!
//! The eligibility engine consumes an `EvaluationContext` and produces one
//! `EligibilityVerdict` per configured therapy. The status ladder is
//! one-directional: an absolute contraindication always wins and a verdict
//! never escalates back once downgraded.

use serde::{Deserialize, Serialize};

use crate::profile::ClinicalProfile;
use crate::score::ScoreResult;

/// The eligibility decision for a single therapy option.
///
/// Ordered from best to worst. Every therapy starts `Eligible`; matched
/// criteria only ever move the status down the ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TherapyStatus {
    /// No disqualifying criteria matched.
    Eligible,
    /// A relative contraindication matched; proceed with monitoring.
    Caution,
    /// The therapy's indication gates are not met for this patient.
    NotIndicated,
    /// An absolute contraindication matched. Terminal — supporting
    /// factors and relative downgrades never override this.
    Contraindicated,
}

/// The full verdict the eligibility engine emits for one therapy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityVerdict {
    /// Stable criteria identifier (e.g. "doac", "laac").
    pub therapy_id: String,
    /// Human-readable therapy name for reports.
    pub therapy_name: String,
    pub status: TherapyStatus,
    /// Confidence in the verdict: base confidence plus the weights of all
    /// matched supporting factors, capped at 95.
    pub confidence_pct: u8,
    /// Descriptions of matched supporting factors.
    pub supporting: Vec<String>,
    /// Monitoring recommendations from matched relative contraindications.
    pub cautions: Vec<String>,
    /// Reasons from matched absolute contraindications, plus unmet
    /// indication gates.
    pub contraindications: Vec<String>,
}

/// Everything the eligibility engine needs to make its decisions.
///
/// Built by the assessor after both risk scorers have run. Serializable so
/// criteria conditions can resolve dotted field paths against it
/// (e.g. `profile.active_bleeding`, `stroke.score`, `bleeding.tier`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationContext {
    pub profile: ClinicalProfile,
    /// CHA₂DS₂-VASc result for this profile.
    pub stroke: ScoreResult,
    /// HAS-BLED result for this profile.
    pub bleeding: ScoreResult,
}
