//! Catheter-ablation success estimator.
//!
//! Additive heuristic over a 60% base rate, in the manner of the Mount
//! Sinai single-center series: age bracket, structural heart disease,
//! hypertension, diabetes, and AF chronicity each shift the estimate by a
//! fixed number of percentage points. The result is clamped to [20, 95].
//!
//! Chronicity is an explicit `AfPattern` input on the profile — it is
//! never inferred from other fields.

use tracing::debug;

use cardioscore_contracts::{
    profile::{AfPattern, ClinicalProfile},
    report::{AblationEstimate, AblationFactor},
};
use cardioscore_core::traits::SuccessEstimator;

/// Baseline single-procedure success rate, in percent.
const BASE_SUCCESS_PCT: i16 = 60;

/// Estimate floor and ceiling. No profile is quoted below 20% or above 95%.
const MIN_SUCCESS_PCT: i16 = 20;
const MAX_SUCCESS_PCT: i16 = 95;

/// The ablation outcome model. Stateless; construct freely.
#[derive(Debug, Default)]
pub struct AblationOutcomeModel;

impl AblationOutcomeModel {
    pub fn new() -> Self {
        Self
    }
}

impl SuccessEstimator for AblationOutcomeModel {
    /// Total over validated profiles. Result in [20, 95].
    fn estimate(&self, profile: &ClinicalProfile) -> AblationEstimate {
        let mut factors: Vec<AblationFactor> = Vec::new();
        let mut push = |label: &str, delta: i8| {
            if delta != 0 {
                factors.push(AblationFactor { label: label.to_string(), delta });
            }
        };

        match profile.age {
            ..=59 => push("age under 60", 15),
            60..=69 => push("age 60-69", 10),
            70..=74 => push("age 70-74", 5),
            _ => push("age 75 or older", -10),
        }

        if profile.structural_heart_disease {
            push("structural heart disease", -5);
        } else {
            push("structurally normal heart", 10);
        }

        if !profile.hypertension {
            push("no hypertension", 5);
        }

        if profile.diabetes {
            push("diabetes", -5);
        } else {
            push("no diabetes", 5);
        }

        match profile.af_pattern {
            AfPattern::Paroxysmal => push("paroxysmal AF", 15),
            AfPattern::Persistent => push("persistent AF", 5),
            AfPattern::LongStandingPersistent => {}
        }

        let raw: i16 = BASE_SUCCESS_PCT
            + factors.iter().map(|f| i16::from(f.delta)).sum::<i16>();
        let success_pct = raw.clamp(MIN_SUCCESS_PCT, MAX_SUCCESS_PCT) as u8;

        debug!(success_pct, factor_count = factors.len(), "ablation success estimated");

        AblationEstimate { success_pct, factors }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use cardioscore_contracts::profile::{AfPattern, ClinicalProfile, Sex};
    use cardioscore_core::traits::SuccessEstimator;

    use super::AblationOutcomeModel;

    fn estimate(profile: &ClinicalProfile) -> u8 {
        AblationOutcomeModel::new().estimate(profile).success_pct
    }

    /// Best case: young, structurally normal, no comorbidity, paroxysmal.
    /// Raw 60+15+10+5+5+15 = 110 clamps to the 95 ceiling.
    #[test]
    fn test_best_case_clamps_to_ceiling() {
        let profile = ClinicalProfile::baseline(45, Sex::Male);
        assert_eq!(estimate(&profile), 95);
    }

    /// Worst case: elderly, structural disease, hypertensive, diabetic,
    /// long-standing persistent. Raw 60-10-5-5 = 40, above the floor.
    #[test]
    fn test_worst_case_stays_above_floor() {
        let mut profile = ClinicalProfile::baseline(82, Sex::Male);
        profile.structural_heart_disease = true;
        profile.hypertension = true;
        profile.diabetes = true;
        profile.af_pattern = AfPattern::LongStandingPersistent;

        assert_eq!(estimate(&profile), 40);
    }

    /// Mid-range case with an exact expected value: age 67 (+10), normal
    /// heart (+10), no HTN (+5), diabetic (-5), persistent (+5) = 85.
    #[test]
    fn test_mid_range_value() {
        let mut profile = ClinicalProfile::baseline(67, Sex::Female);
        profile.diabetes = true;
        profile.af_pattern = AfPattern::Persistent;

        assert_eq!(estimate(&profile), 85);
    }

    /// The factor breakdown accounts for the whole pre-clamp adjustment.
    #[test]
    fn test_factors_sum_to_adjustment() {
        let mut profile = ClinicalProfile::baseline(72, Sex::Male);
        profile.hypertension = true;
        profile.diabetes = true;
        profile.structural_heart_disease = true;
        profile.af_pattern = AfPattern::Persistent;

        let result = AblationOutcomeModel::new().estimate(&profile);
        let sum: i16 = result.factors.iter().map(|f| i16::from(f.delta)).sum();
        // 60 + (5 - 5 - 5 + 5) = 60; no clamping in play here.
        assert_eq!(i16::from(result.success_pct), 60 + sum);
    }

    /// Chronicity is read from the explicit input field: same profile,
    /// different pattern, different estimate.
    #[test]
    fn test_pattern_drives_estimate() {
        let mut profile = ClinicalProfile::baseline(72, Sex::Male);
        profile.hypertension = true;
        profile.structural_heart_disease = true;

        profile.af_pattern = AfPattern::Paroxysmal;
        let paroxysmal = estimate(&profile);

        profile.af_pattern = AfPattern::Persistent;
        let persistent = estimate(&profile);

        profile.af_pattern = AfPattern::LongStandingPersistent;
        let long_standing = estimate(&profile);

        assert!(paroxysmal > persistent);
        assert!(persistent > long_standing);
        assert_eq!(paroxysmal - persistent, 10);
    }

    /// Purity: repeated calls agree.
    #[test]
    fn test_idempotent() {
        let profile = ClinicalProfile::baseline(58, Sex::Female);
        let model = AblationOutcomeModel::new();
        assert_eq!(model.estimate(&profile), model.estimate(&profile));
    }
}
