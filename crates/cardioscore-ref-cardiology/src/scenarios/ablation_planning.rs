//! Scenario 3: Ablation Planning
//!
//! Runs the ablation outcome model over the cohort and prints each
//! estimate with its factor breakdown, the way an EP planning conference
//! reviews candidates.

use cardioscore_contracts::error::CardioResult;
use cardioscore_core::traits::SuccessEstimator;
use cardioscore_risk::AblationOutcomeModel;

use crate::mock_data::af_cohort;

/// Run Scenario 3: Ablation Planning.
pub fn run_scenario() -> CardioResult<()> {
    println!("=== Scenario 3: Ablation Planning ===");
    println!();

    let model = AblationOutcomeModel::new();

    for member in af_cohort() {
        member.profile.validate()?;
        let estimate = model.estimate(&member.profile);

        println!("  {}  {}", member.id, member.summary);
        println!("    Estimated single-procedure success: {}%", estimate.success_pct);
        for factor in &estimate.factors {
            println!("      {:+}  {}", factor.delta, factor.label);
        }
        println!();
    }

    println!("  Scenario 3 complete.");
    println!();
    Ok(())
}
