//! Scenario 4: Program ROI
//!
//! Aggregates the modeled LAAC program financials over a three-year
//! timeframe: probability-weighted savings and incremental procedure
//! margin against one-time and recurring investments.

use cardioscore_contracts::{error::CardioResult, finance::Payback};
use cardioscore_finance::aggregate_financial_impact;

use crate::mock_data::laac_program_model;

/// Modeling horizon for the reference program.
const TIMEFRAME_YEARS: f64 = 3.0;

/// Run Scenario 4: Program ROI.
pub fn run_scenario() -> CardioResult<()> {
    println!("=== Scenario 4: Program ROI ({} year model) ===", TIMEFRAME_YEARS);
    println!();

    let (savings, procedures, investments) = laac_program_model();

    for item in &savings {
        println!(
            "  saving:     {:>9.0} x {:.0}%  {}",
            item.annual_amount,
            item.probability * 100.0,
            item.description
        );
    }
    for item in &procedures {
        println!(
            "  procedures: {:>5.0} cases x {:.0} margin x {:.0}%  {}",
            item.volume_delta,
            item.net_margin_per_case,
            item.success_rate * 100.0,
            item.description
        );
    }
    for item in &investments {
        println!(
            "  investment: {:>9.0} ({:?})  {}",
            item.amount, item.cadence, item.description
        );
    }
    println!();

    let summary =
        aggregate_financial_impact(&savings, &procedures, &investments, TIMEFRAME_YEARS)?;

    println!("  Annual savings:        ${:>12.0}", summary.annual_savings);
    println!("  Annual recurring cost: ${:>12.0}", summary.annual_recurring_cost);
    println!("  One-time cost:         ${:>12.0}", summary.one_time_cost);
    println!("  Total cost:            ${:>12.0}", summary.total_cost);
    println!("  Total savings:         ${:>12.0}", summary.total_savings);
    println!("  Net benefit:           ${:>12.0}", summary.net_benefit);
    println!("  ROI:                   {:>12.1}%", summary.roi_pct);
    match summary.payback {
        Payback::Years(years) => {
            println!("  Payback period:        {:>12.2} years", years)
        }
        Payback::Undefined => {
            println!("  Payback period:        never (no annual savings)")
        }
    }

    println!();
    println!("  Scenario 4 complete.");
    println!();
    Ok(())
}
