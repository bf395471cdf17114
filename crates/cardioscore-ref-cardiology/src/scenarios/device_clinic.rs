//! Scenario 2: Device Clinic
//!
//! Runs the full assessment pipeline over the cohort and focuses on the
//! left atrial appendage closure verdicts. Shows each status branch on a
//! real profile:
//!
//!   - AF-003 meets every indication gate → Eligible with supports
//!   - AF-001 sits below the stroke threshold → NotIndicated
//!   - AF-005 is actively bleeding → Contraindicated, terminal

use cardioscore_contracts::{eligibility::TherapyStatus, error::CardioResult};

use crate::mock_data::{af_cohort, standard_assessor};

/// Run Scenario 2: Device Clinic.
pub fn run_scenario() -> CardioResult<()> {
    println!("=== Scenario 2: Device Clinic (LAAC eligibility) ===");
    println!();

    let assessor = standard_assessor()?;

    for member in af_cohort() {
        let report = assessor.assess(&member.profile)?;

        println!("  {}  {}", member.id, member.summary);
        println!(
            "    CHA2DS2-VASc {} / HAS-BLED {}",
            report.stroke.score, report.bleeding.score
        );

        for verdict in report
            .therapies
            .iter()
            .filter(|v| v.therapy_id == "laac")
        {
            let status = match verdict.status {
                TherapyStatus::Eligible => "ELIGIBLE",
                TherapyStatus::Caution => "CAUTION",
                TherapyStatus::NotIndicated => "NOT INDICATED",
                TherapyStatus::Contraindicated => "CONTRAINDICATED",
            };
            println!(
                "    {}: {} (confidence {}%)",
                verdict.therapy_name, status, verdict.confidence_pct
            );
            for reason in &verdict.contraindications {
                println!("      - blocked: {}", reason);
            }
            for caution in &verdict.cautions {
                println!("      - monitor: {}", caution);
            }
            for support in &verdict.supporting {
                println!("      - for: {}", support);
            }
        }
        println!();
    }

    println!("  Scenario 2 complete.");
    println!();
    Ok(())
}
