//! The CardioScore assessor: the deterministic assessment pipeline.
//!
//! The assessor enforces the evaluation order:
//!
//!   Validate → Stroke score → Bleeding score → Ablation estimate
//!            → Eligibility → Report
//!
//! Validation happens exactly once, at the boundary. Scorers and the
//! estimator are total functions and are never called with a profile that
//! failed validation — malformed input surfaces as `InvalidInput`, not as
//! a silently wrong score.

use chrono::Utc;
use tracing::debug;

use cardioscore_contracts::{
    eligibility::EvaluationContext,
    error::CardioResult,
    profile::ClinicalProfile,
    report::AssessmentReport,
};

use crate::traits::{EligibilityEngine, RiskScorer, SuccessEstimator};

/// The central pipeline that produces a full `AssessmentReport` for one
/// patient profile.
///
/// Construct once and reuse across profiles — the assessor holds no
/// per-evaluation state and is safe to share between threads.
pub struct Assessor {
    stroke: Box<dyn RiskScorer>,
    bleeding: Box<dyn RiskScorer>,
    ablation: Box<dyn SuccessEstimator>,
    eligibility: Box<dyn EligibilityEngine>,
}

impl Assessor {
    /// Create an assessor from the given components.
    pub fn new(
        stroke: Box<dyn RiskScorer>,
        bleeding: Box<dyn RiskScorer>,
        ablation: Box<dyn SuccessEstimator>,
        eligibility: Box<dyn EligibilityEngine>,
    ) -> Self {
        Self { stroke, bleeding, ablation, eligibility }
    }

    /// Run the full pipeline for one profile.
    ///
    /// # Pipeline
    ///
    /// 1. `profile.validate()` — `InvalidInput` stops everything here
    /// 2. Stroke scorer
    /// 3. Bleeding scorer
    /// 4. Ablation estimator
    /// 5. Eligibility engine over the assembled `EvaluationContext`
    /// 6. Assemble the timestamped report
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for out-of-range profile fields and
    /// `ConfigError` when the eligibility criteria reference a field the
    /// context does not carry.
    pub fn assess(&self, profile: &ClinicalProfile) -> CardioResult<AssessmentReport> {
        profile.validate()?;

        let stroke = self.stroke.score(profile);
        debug!(
            scorer = self.stroke.name(),
            score = stroke.score,
            tier = ?stroke.tier,
            "stroke risk scored"
        );

        let bleeding = self.bleeding.score(profile);
        debug!(
            scorer = self.bleeding.name(),
            score = bleeding.score,
            tier = ?bleeding.tier,
            "bleeding risk scored"
        );

        let ablation = self.ablation.estimate(profile);
        debug!(success_pct = ablation.success_pct, "ablation success estimated");

        let ctx = EvaluationContext {
            profile: profile.clone(),
            stroke: stroke.clone(),
            bleeding: bleeding.clone(),
        };
        let therapies = self.eligibility.evaluate(&ctx)?;
        debug!(therapy_count = therapies.len(), "eligibility evaluated");

        Ok(AssessmentReport {
            stroke,
            bleeding,
            ablation,
            therapies,
            generated_at: Utc::now(),
        })
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
