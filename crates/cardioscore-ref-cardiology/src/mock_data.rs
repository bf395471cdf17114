//! Simulated cardiology data for the CardioScore reference runtime.
//!
//! All data in this module is hardcoded and fictional. No external systems
//! are contacted. This module acts as a stand-in for a real EHR feed and a
//! real service-line finance ledger in a production deployment.

use cardioscore_contracts::{
    error::CardioResult,
    finance::{InvestmentLineItem, ProcedureVolumeDelta, Recurrence, SavingsLineItem},
    profile::{AfPattern, ClinicalProfile, Sex},
};
use cardioscore_core::Assessor;
use cardioscore_eligibility::CriteriaEngine;
use cardioscore_risk::{AblationOutcomeModel, ChadsVascScorer, HasBledScorer};

/// One fictional patient in the reference cohort.
pub struct CohortMember {
    /// Chart identifier used in scenario output.
    pub id: &'static str,
    /// One-line clinical summary.
    pub summary: &'static str,
    pub profile: ClinicalProfile,
}

/// Wire the standard scorers and the embedded default criteria into an
/// assessor.
///
/// Fallible because criteria parsing is; the embedded document parsing
/// only fails if the shipped TOML is broken.
pub fn standard_assessor() -> CardioResult<Assessor> {
    Ok(Assessor::new(
        Box::new(ChadsVascScorer::new()),
        Box::new(HasBledScorer::new()),
        Box::new(AblationOutcomeModel::new()),
        Box::new(CriteriaEngine::default_criteria()?),
    ))
}

/// The reference atrial fibrillation cohort: five fictional patients
/// spanning the interesting branches of the evaluators.
pub fn af_cohort() -> Vec<CohortMember> {
    vec![
        CohortMember {
            id: "AF-001",
            summary: "52M, paroxysmal AF, no comorbidity",
            profile: ClinicalProfile::baseline(52, Sex::Male),
        },
        CohortMember {
            id: "AF-002",
            summary: "67F, persistent AF, hypertensive and diabetic",
            profile: {
                let mut p = ClinicalProfile::baseline(67, Sex::Female);
                p.af_pattern = AfPattern::Persistent;
                p.hypertension = true;
                p.diabetes = true;
                p.systolic_bp_mmhg = 148.0;
                p
            },
        },
        CohortMember {
            id: "AF-003",
            summary: "79M, prior GI bleed on warfarin, LAA 24 mm on TEE",
            profile: {
                let mut p = ClinicalProfile::baseline(79, Sex::Male);
                p.af_pattern = AfPattern::Persistent;
                p.hypertension = true;
                p.vascular_disease = true;
                p.bleeding_history = true;
                p.labile_inr = true;
                p.abnormal_renal_function = true;
                p.creatinine_clearance_ml_min = 44.0;
                p.laa_diameter_mm = Some(24.0);
                p
            },
        },
        CohortMember {
            id: "AF-004",
            summary: "74F, persistent AF, structural heart disease, diabetic",
            profile: {
                let mut p = ClinicalProfile::baseline(74, Sex::Female);
                p.af_pattern = AfPattern::Persistent;
                p.structural_heart_disease = true;
                p.heart_failure = true;
                p.diabetes = true;
                p
            },
        },
        CohortMember {
            id: "AF-005",
            summary: "83M, admitted with active GI bleeding",
            profile: {
                let mut p = ClinicalProfile::baseline(83, Sex::Male);
                p.af_pattern = AfPattern::LongStandingPersistent;
                p.hypertension = true;
                p.prior_stroke = true;
                p.active_bleeding = true;
                p.bleeding_history = true;
                p.hemoglobin_g_dl = 8.9;
                p
            },
        },
    ]
}

/// Savings, procedure volume, and investment line items for a modeled
/// left atrial appendage closure program. Figures are illustrative.
pub fn laac_program_model() -> (
    Vec<SavingsLineItem>,
    Vec<ProcedureVolumeDelta>,
    Vec<InvestmentLineItem>,
) {
    let savings = vec![
        SavingsLineItem {
            description: "Avoided stroke admissions".to_string(),
            annual_amount: 420_000.0,
            probability: 0.65,
        },
        SavingsLineItem {
            description: "Avoided major bleeding events".to_string(),
            annual_amount: 180_000.0,
            probability: 0.5,
        },
        SavingsLineItem {
            description: "Anticoagulation clinic offload".to_string(),
            annual_amount: 60_000.0,
            probability: 0.9,
        },
    ];

    let procedures = vec![ProcedureVolumeDelta {
        description: "Incremental LAAC implants".to_string(),
        volume_delta: 48.0,
        net_margin_per_case: 4_200.0,
        success_rate: 0.95,
    }];

    let investments = vec![
        InvestmentLineItem {
            description: "Device inventory and capital".to_string(),
            amount: 310_000.0,
            cadence: Recurrence::OneTime,
        },
        InvestmentLineItem {
            description: "Structural heart coordinator".to_string(),
            amount: 9_500.0,
            cadence: Recurrence::Monthly,
        },
        InvestmentLineItem {
            description: "Registry participation fees".to_string(),
            amount: 6_000.0,
            cadence: Recurrence::Quarterly,
        },
    ];

    (savings, procedures, investments)
}
