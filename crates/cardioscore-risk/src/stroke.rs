//! CHA₂DS₂-VASc stroke-risk scorer.
//!
//! Point assignment:
//!
//! | Factor                         | Points |
//! |--------------------------------|--------|
//! | Congestive heart failure       | 1      |
//! | Hypertension                   | 1      |
//! | Age ≥ 75                       | 2      |
//! | Age 65–74                      | 1      |
//! | Diabetes mellitus              | 1      |
//! | Prior stroke / TIA / embolism  | 2      |
//! | Vascular disease               | 1      |
//! | Female sex                     | 1      |
//!
//! Tier thresholds are sex-differentiated per the 2020 ESC guideline:
//! the female sex point does not by itself move a woman out of the low
//! tier, so every threshold is one point higher for women.

use tracing::debug;

use cardioscore_contracts::{
    profile::{ClinicalProfile, Sex},
    score::{RiskTier, ScoreResult},
};
use cardioscore_core::traits::RiskScorer;

use crate::tables::{lookup_clamped, STROKE_RISK_PCT};

/// The CHA₂DS₂-VASc scorer. Stateless; construct freely.
#[derive(Debug, Default)]
pub struct ChadsVascScorer;

impl ChadsVascScorer {
    pub fn new() -> Self {
        Self
    }

    fn points(profile: &ClinicalProfile) -> u8 {
        let mut score = 0u8;
        if profile.heart_failure {
            score += 1;
        }
        if profile.hypertension {
            score += 1;
        }
        score += match profile.age {
            75.. => 2,
            65..=74 => 1,
            _ => 0,
        };
        if profile.diabetes {
            score += 1;
        }
        if profile.prior_stroke {
            score += 2;
        }
        if profile.vascular_disease {
            score += 1;
        }
        if profile.sex == Sex::Female {
            score += 1;
        }
        score
    }

    fn tier(score: u8, sex: Sex) -> RiskTier {
        // One threshold site for the whole library. The female sex point is
        // a modifier, not an indication on its own.
        let effective = match sex {
            Sex::Male => score,
            Sex::Female => score.saturating_sub(1),
        };
        match effective {
            0 => RiskTier::Low,
            1 => RiskTier::Moderate,
            _ => RiskTier::High,
        }
    }
}

impl RiskScorer for ChadsVascScorer {
    /// Total over validated profiles. Score range [0, 9].
    fn score(&self, profile: &ClinicalProfile) -> ScoreResult {
        let score = Self::points(profile);
        let tier = Self::tier(score, profile.sex);
        let annual_risk_pct = lookup_clamped(&STROKE_RISK_PCT, score);

        debug!(score, tier = ?tier, annual_risk_pct, "cha2ds2-vasc scored");

        ScoreResult {
            score,
            tier,
            annual_risk_pct: Some(annual_risk_pct),
        }
    }

    fn name(&self) -> &'static str {
        "cha2ds2-vasc"
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
