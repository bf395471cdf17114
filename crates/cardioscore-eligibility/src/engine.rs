//! TOML-driven eligibility engine implementation.
//!
//! `CriteriaEngine` loads a `CriteriaConfig` from a TOML string or file and
//! implements the `EligibilityEngine` trait from cardioscore-core.
//!
//! Evaluation algorithm, per therapy and in declaration order:
//!
//! 1. Evaluate every **absolute** rule; any match forces the status to
//!    `Contraindicated` and records the reason. The status never
//!    escalates back — an absolute contraindication beats everything.
//! 2. Evaluate every **indication** gate; any unmet gate records its
//!    reason and, unless already contraindicated, sets `NotIndicated`.
//! 3. Evaluate every **relative** rule; a match records a monitoring
//!    recommendation and downgrades `Eligible` → `Caution` only.
//! 4. Evaluate every **support** rule; matches are recorded and their
//!    weights added to the base confidence, capped at 95.
//!
//! All rules are always evaluated — verdicts carry the complete reason
//! set, not just the first match.

use std::path::Path;

use tracing::{debug, warn};

use cardioscore_contracts::{
    eligibility::{EligibilityVerdict, EvaluationContext, TherapyStatus},
    error::{CardioError, CardioResult},
};
use cardioscore_core::traits::EligibilityEngine;

use crate::criteria::{CriteriaConfig, TherapyCriteria};

/// Verdict confidence never exceeds this, however many supporting
/// factors match.
const CONFIDENCE_CAP: u8 = 95;

/// Therapy criteria shipped with the library: warfarin, DOAC, LAAC device
/// closure, and observation.
const DEFAULT_CRITERIA: &str = include_str!("../criteria/default.toml");

/// An `EligibilityEngine` implementation that reads criteria from a TOML
/// document.
///
/// Construct via `default_criteria`, `from_toml_str`, or `from_file`, then
/// pass to the assessor.
#[derive(Debug)]
pub struct CriteriaEngine {
    config: CriteriaConfig,
}

impl CriteriaEngine {
    /// Build an engine from the embedded default criteria document.
    pub fn default_criteria() -> CardioResult<Self> {
        Self::from_toml_str(DEFAULT_CRITERIA)
    }

    /// Parse `s` as TOML and build a `CriteriaEngine`.
    ///
    /// Returns `CardioError::ConfigError` if the TOML is malformed or does
    /// not match the expected `CriteriaConfig` schema.
    pub fn from_toml_str(s: &str) -> CardioResult<Self> {
        let config: CriteriaConfig =
            toml::from_str(s).map_err(|e| CardioError::ConfigError {
                reason: format!("failed to parse criteria TOML: {}", e),
            })?;
        Ok(Self { config })
    }

    /// Read the file at `path` and parse it as TOML criteria configuration.
    pub fn from_file(path: &Path) -> CardioResult<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| CardioError::ConfigError {
                reason: format!(
                    "failed to read criteria file '{}': {}",
                    path.display(),
                    e
                ),
            })?;
        Self::from_toml_str(&contents)
    }

    /// Evaluate one therapy's criteria against the serialized context.
    fn evaluate_therapy(
        therapy: &TherapyCriteria,
        ctx: &serde_json::Value,
    ) -> CardioResult<EligibilityVerdict> {
        let mut status = TherapyStatus::Eligible;
        let mut supporting = Vec::new();
        let mut cautions = Vec::new();
        let mut contraindications = Vec::new();

        // ── Absolute contraindications: any match is terminal ────────────
        for rule in &therapy.absolute {
            if rule.condition.evaluate(ctx)? {
                warn!(
                    therapy = %therapy.id,
                    rule_id = %rule.id,
                    "absolute contraindication matched"
                );
                contraindications.push(rule.reason.clone());
                status = TherapyStatus::Contraindicated;
            }
        }

        // ── Indication gates: all must hold ──────────────────────────────
        for rule in &therapy.indication {
            if !rule.condition.evaluate(ctx)? {
                debug!(
                    therapy = %therapy.id,
                    rule_id = %rule.id,
                    "indication gate unmet"
                );
                contraindications.push(rule.reason.clone());
                if status != TherapyStatus::Contraindicated {
                    status = TherapyStatus::NotIndicated;
                }
            }
        }

        // ── Relative contraindications: downgrade Eligible → Caution ─────
        for rule in &therapy.relative {
            if rule.condition.evaluate(ctx)? {
                debug!(
                    therapy = %therapy.id,
                    rule_id = %rule.id,
                    "relative contraindication matched"
                );
                cautions.push(rule.reason.clone());
                if status == TherapyStatus::Eligible {
                    status = TherapyStatus::Caution;
                }
            }
        }

        // ── Supporting factors: accumulate confidence, cap at 95 ─────────
        let mut confidence = therapy.base_confidence.min(CONFIDENCE_CAP);
        for rule in &therapy.support {
            if rule.condition.evaluate(ctx)? {
                debug!(
                    therapy = %therapy.id,
                    rule_id = %rule.id,
                    weight = rule.weight,
                    "supporting factor matched"
                );
                supporting.push(rule.description.clone());
                confidence = confidence.saturating_add(rule.weight).min(CONFIDENCE_CAP);
            }
        }

        Ok(EligibilityVerdict {
            therapy_id: therapy.id.clone(),
            therapy_name: therapy.name.clone(),
            status,
            confidence_pct: confidence,
            supporting,
            cautions,
            contraindications,
        })
    }
}

impl EligibilityEngine for CriteriaEngine {
    /// Evaluate every configured therapy against the context.
    ///
    /// Verdicts come back in criteria declaration order. Conditions that
    /// reference fields missing from the context abort the whole
    /// evaluation with `ConfigError` — a half-evaluated verdict set is
    /// worse than none.
    fn evaluate(&self, ctx: &EvaluationContext) -> CardioResult<Vec<EligibilityVerdict>> {
        let ctx_value =
            serde_json::to_value(ctx).map_err(|e| CardioError::ConfigError {
                reason: format!("failed to serialize evaluation context: {}", e),
            })?;

        debug!(
            stroke_score = ctx.stroke.score,
            bleeding_score = ctx.bleeding.score,
            therapy_count = self.config.therapy.len(),
            "evaluating therapy criteria"
        );

        self.config
            .therapy
            .iter()
            .map(|therapy| Self::evaluate_therapy(therapy, &ctx_value))
            .collect()
    }
}
