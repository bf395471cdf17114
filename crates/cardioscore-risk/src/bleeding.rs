//! HAS-BLED bleeding-risk scorer.
//!
//! One point each for: uncontrolled hypertension (systolic > 160 mmHg),
//! abnormal renal function, abnormal liver function, prior stroke,
//! bleeding history or predisposition, labile INR, age over 65, and
//! drug or alcohol use. Range [0, 8].
//!
//! Tier: ≥ 3 high, 2 moderate, otherwise low. The high tier is the usual
//! trigger for closer INR monitoring and for considering non-pharmacologic
//! stroke prevention.

use tracing::debug;

use cardioscore_contracts::{
    profile::ClinicalProfile,
    score::{RiskTier, ScoreResult},
};
use cardioscore_core::traits::RiskScorer;

use crate::tables::{lookup_clamped, BLEED_RISK_PCT};

/// Systolic pressure above this reading counts as uncontrolled
/// hypertension for HAS-BLED, independent of the diagnosis flag.
const UNCONTROLLED_SBP_MMHG: f64 = 160.0;

/// The HAS-BLED scorer. Stateless; construct freely.
#[derive(Debug, Default)]
pub struct HasBledScorer;

impl HasBledScorer {
    pub fn new() -> Self {
        Self
    }

    fn points(profile: &ClinicalProfile) -> u8 {
        let mut score = 0u8;
        if profile.systolic_bp_mmhg > UNCONTROLLED_SBP_MMHG {
            score += 1;
        }
        if profile.abnormal_renal_function {
            score += 1;
        }
        if profile.abnormal_liver_function {
            score += 1;
        }
        if profile.prior_stroke {
            score += 1;
        }
        if profile.bleeding_history {
            score += 1;
        }
        if profile.labile_inr {
            score += 1;
        }
        if profile.age > 65 {
            score += 1;
        }
        if profile.drug_or_alcohol_use {
            score += 1;
        }
        score
    }

    fn tier(score: u8) -> RiskTier {
        match score {
            0 | 1 => RiskTier::Low,
            2 => RiskTier::Moderate,
            _ => RiskTier::High,
        }
    }
}

impl RiskScorer for HasBledScorer {
    /// Total over validated profiles. Score range [0, 8].
    fn score(&self, profile: &ClinicalProfile) -> ScoreResult {
        let score = Self::points(profile);
        let tier = Self::tier(score);
        let annual_risk_pct = lookup_clamped(&BLEED_RISK_PCT, score);

        debug!(score, tier = ?tier, annual_risk_pct, "has-bled scored");

        ScoreResult {
            score,
            tier,
            annual_risk_pct: Some(annual_risk_pct),
        }
    }

    fn name(&self) -> &'static str {
        "has-bled"
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
