//! Patient profile types.
//!
//! A `ClinicalProfile` is the immutable input record every scorer and
//! evaluator consumes. It is created fresh per evaluation, never mutated,
//! and carries no identity beyond the call.

use serde::{Deserialize, Serialize};

use crate::error::{CardioError, CardioResult};

/// Patient sex as recorded for risk scoring.
///
/// CHA₂DS₂-VASc awards one point for female sex, and the high-risk tier
/// threshold is one point higher for women.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sex {
    Male,
    Female,
}

/// Atrial fibrillation chronicity classification.
///
/// This is an explicit clinical input. Earlier revisions inferred
/// chronicity from age and heart-failure status; that shortcut produced
/// unstable ablation estimates and was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AfPattern {
    /// Self-terminating episodes lasting less than seven days.
    Paroxysmal,
    /// Sustained beyond seven days or requiring cardioversion.
    Persistent,
    /// Continuous for more than twelve months.
    LongStandingPersistent,
}

/// Flat record of the comorbidity flags and measurements every CardioScore
/// evaluator reads.
///
/// All fields are plain values — no references, no interior mutability.
/// Construct one per evaluation; `validate()` is called once at the
/// pipeline boundary so downstream scorers stay total functions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicalProfile {
    // ── Demographics ─────────────────────────────────────────────────────
    /// Age in completed years. Valid range 18–120.
    pub age: u8,
    pub sex: Sex,
    /// Body weight in kilograms. Weights below 60 kg are a dosing caution
    /// for direct oral anticoagulants.
    pub weight_kg: f64,

    // ── Arrhythmia ───────────────────────────────────────────────────────
    /// Chronicity of the documented atrial fibrillation.
    pub af_pattern: AfPattern,

    // ── Stroke-risk comorbidities (CHA₂DS₂-VASc inputs) ──────────────────
    pub heart_failure: bool,
    /// Diagnosed hypertension, treated or not. Distinct from the measured
    /// `systolic_bp_mmhg` reading used for bleeding risk.
    pub hypertension: bool,
    pub diabetes: bool,
    /// Prior stroke, TIA, or systemic thromboembolism.
    pub prior_stroke: bool,
    /// Prior MI, peripheral artery disease, or aortic plaque.
    pub vascular_disease: bool,

    // ── Bleeding-risk factors (HAS-BLED inputs) ──────────────────────────
    /// Most recent systolic blood pressure in mmHg.
    pub systolic_bp_mmhg: f64,
    /// Dialysis, transplant, or creatinine significantly above normal.
    pub abnormal_renal_function: bool,
    /// Cirrhosis or bilirubin/transaminase derangement.
    pub abnormal_liver_function: bool,
    /// Prior major bleeding or predisposition to bleeding.
    pub bleeding_history: bool,
    /// Unstable or high INRs; time in therapeutic range below 60%.
    pub labile_inr: bool,
    /// Concomitant antiplatelet/NSAID use or alcohol excess.
    pub drug_or_alcohol_use: bool,

    // ── Therapy history and contraindication flags ───────────────────────
    pub anticoagulant_contraindicated: bool,
    /// Thromboembolic event despite adequate anticoagulation.
    pub anticoagulant_failure: bool,
    pub active_bleeding: bool,
    pub pregnancy: bool,
    pub intracranial_hemorrhage_history: bool,
    pub esophageal_varices: bool,
    /// Decompensated cirrhosis or coagulopathy of liver disease. Implies
    /// `abnormal_liver_function` clinically, but is tracked separately
    /// because it is an absolute (not relative) contraindication.
    pub severe_liver_disease: bool,
    pub fall_risk: bool,
    pub cognitive_impairment: bool,

    // ── Structural / anatomical findings ─────────────────────────────────
    pub structural_heart_disease: bool,
    /// Thrombus seen in the left atrial appendage on imaging.
    pub appendage_thrombus: bool,
    /// Left atrial appendage ostium diameter in millimetres, when a device
    /// workup has measured it. `None` until imaging is done.
    pub laa_diameter_mm: Option<f64>,

    // ── Laboratory values ────────────────────────────────────────────────
    /// Creatinine clearance in mL/min (Cockcroft-Gault).
    pub creatinine_clearance_ml_min: f64,
    /// Platelet count in thousands per microlitre.
    pub platelet_count_k_per_ul: f64,
    /// Hemoglobin in g/dL.
    pub hemoglobin_g_dl: f64,
}

impl ClinicalProfile {
    /// A profile with every flag clear and unremarkable vitals and labs.
    ///
    /// Intended as a starting point for mock data and tests — set only the
    /// fields a case cares about.
    pub fn baseline(age: u8, sex: Sex) -> Self {
        Self {
            age,
            sex,
            weight_kg: 80.0,
            af_pattern: AfPattern::Paroxysmal,
            heart_failure: false,
            hypertension: false,
            diabetes: false,
            prior_stroke: false,
            vascular_disease: false,
            systolic_bp_mmhg: 120.0,
            abnormal_renal_function: false,
            abnormal_liver_function: false,
            bleeding_history: false,
            labile_inr: false,
            drug_or_alcohol_use: false,
            anticoagulant_contraindicated: false,
            anticoagulant_failure: false,
            active_bleeding: false,
            pregnancy: false,
            intracranial_hemorrhage_history: false,
            esophageal_varices: false,
            severe_liver_disease: false,
            fall_risk: false,
            cognitive_impairment: false,
            structural_heart_disease: false,
            appendage_thrombus: false,
            laa_diameter_mm: None,
            creatinine_clearance_ml_min: 90.0,
            platelet_count_k_per_ul: 250.0,
            hemoglobin_g_dl: 14.0,
        }
    }

    /// Check every numeric field against its valid clinical range.
    ///
    /// Called once at the pipeline boundary. Returns
    /// `CardioError::InvalidInput` naming the first offending field, so
    /// downstream scorers never see malformed input and can stay total.
    pub fn validate(&self) -> CardioResult<()> {
        if !(18..=120).contains(&self.age) {
            return Err(CardioError::InvalidInput {
                reason: format!("age {} outside valid range 18-120", self.age),
            });
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 || self.weight_kg > 400.0 {
            return Err(CardioError::InvalidInput {
                reason: format!("weight_kg {} outside valid range (0, 400]", self.weight_kg),
            });
        }
        if !self.systolic_bp_mmhg.is_finite()
            || !(50.0..=300.0).contains(&self.systolic_bp_mmhg)
        {
            return Err(CardioError::InvalidInput {
                reason: format!(
                    "systolic_bp_mmhg {} outside valid range [50, 300]",
                    self.systolic_bp_mmhg
                ),
            });
        }
        if !self.creatinine_clearance_ml_min.is_finite()
            || self.creatinine_clearance_ml_min < 0.0
        {
            return Err(CardioError::InvalidInput {
                reason: format!(
                    "creatinine_clearance_ml_min {} must be non-negative",
                    self.creatinine_clearance_ml_min
                ),
            });
        }
        if !self.platelet_count_k_per_ul.is_finite() || self.platelet_count_k_per_ul < 0.0 {
            return Err(CardioError::InvalidInput {
                reason: format!(
                    "platelet_count_k_per_ul {} must be non-negative",
                    self.platelet_count_k_per_ul
                ),
            });
        }
        if !self.hemoglobin_g_dl.is_finite() || self.hemoglobin_g_dl < 0.0 {
            return Err(CardioError::InvalidInput {
                reason: format!(
                    "hemoglobin_g_dl {} must be non-negative",
                    self.hemoglobin_g_dl
                ),
            });
        }
        if let Some(d) = self.laa_diameter_mm {
            if !d.is_finite() || d <= 0.0 || d > 60.0 {
                return Err(CardioError::InvalidInput {
                    reason: format!("laa_diameter_mm {} outside valid range (0, 60]", d),
                });
            }
        }
        Ok(())
    }
}
