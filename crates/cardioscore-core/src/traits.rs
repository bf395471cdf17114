//! Core trait definitions for the CardioScore assessment pipeline.
//!
//! Three seams cover the whole pipeline:
//!
//! - `RiskScorer`        — point-based risk scoring (CHA₂DS₂-VASc, HAS-BLED)
//! - `SuccessEstimator`  — procedural outcome estimation (ablation)
//! - `EligibilityEngine` — therapy eligibility over a full evaluation context
//!
//! The assessor wires them together in a fixed order. Scorers and
//! estimators are total functions — the assessor validates the profile at
//! the boundary so implementations never see malformed input.

use cardioscore_contracts::{
    eligibility::{EligibilityVerdict, EvaluationContext},
    error::CardioResult,
    profile::ClinicalProfile,
    report::AblationEstimate,
    score::ScoreResult,
};

/// A point-based clinical risk scorer.
///
/// Implementations MUST be pure and total over validated profiles: same
/// input, same output, no I/O, no panics. The assessor guarantees
/// `ClinicalProfile::validate()` has passed before calling `score()`.
pub trait RiskScorer: Send + Sync {
    /// Compute the score, tier, and annualized risk for `profile`.
    fn score(&self, profile: &ClinicalProfile) -> ScoreResult;

    /// Stable name used in logs and reports (e.g. "cha2ds2-vasc").
    fn name(&self) -> &'static str;
}

/// A procedural success estimator.
///
/// Same purity contract as `RiskScorer`: total over validated profiles,
/// deterministic, side-effect free.
pub trait SuccessEstimator: Send + Sync {
    /// Estimate the success likelihood and return the factor breakdown.
    fn estimate(&self, profile: &ClinicalProfile) -> AblationEstimate;
}

/// The therapy eligibility engine.
///
/// Evaluation is fallible — criteria documents are configuration, and a
/// condition referencing a field absent from the context is a
/// `ConfigError`, never a silently skipped rule.
pub trait EligibilityEngine: Send + Sync {
    /// Produce one verdict per configured therapy, in declaration order.
    fn evaluate(&self, ctx: &EvaluationContext) -> CardioResult<Vec<EligibilityVerdict>>;
}
