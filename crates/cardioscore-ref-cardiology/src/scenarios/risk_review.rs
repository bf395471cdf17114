//! Scenario 1: Stroke and Bleeding Risk Review
//!
//! Runs both risk scorers over the full mock cohort, the way a weekly AF
//! clinic review would: CHA₂DS₂-VASc and HAS-BLED side by side, with
//! tiers and the annualized risks from the published lookup tables.

use cardioscore_contracts::error::CardioResult;
use cardioscore_core::traits::RiskScorer;
use cardioscore_risk::{ChadsVascScorer, HasBledScorer};

use crate::mock_data::af_cohort;

/// Run Scenario 1: Stroke and Bleeding Risk Review.
pub fn run_scenario() -> CardioResult<()> {
    println!("=== Scenario 1: Stroke and Bleeding Risk Review ===");
    println!();

    let stroke_scorer = ChadsVascScorer::new();
    let bleed_scorer = HasBledScorer::new();

    for member in af_cohort() {
        // Scorers are total, but the boundary contract still applies.
        member.profile.validate()?;

        let stroke = stroke_scorer.score(&member.profile);
        let bleeding = bleed_scorer.score(&member.profile);

        println!("  {}  {}", member.id, member.summary);
        println!(
            "    CHA2DS2-VASc: {} ({:?}, {:.1}%/yr stroke)",
            stroke.score,
            stroke.tier,
            stroke.annual_risk_pct.unwrap_or(0.0),
        );
        println!(
            "    HAS-BLED:     {} ({:?}, {:.2}%/yr major bleed)",
            bleeding.score,
            bleeding.tier,
            bleeding.annual_risk_pct.unwrap_or(0.0),
        );
        println!();
    }

    println!("  Scenario 1 complete.");
    println!();
    Ok(())
}
