//! CardioScore Cardiology Reference Runtime — Demo CLI
//!
//! Runs one or all of the four cardiology demo scenarios. Each scenario
//! uses real CardioScore components (scorers, criteria engine, assessor,
//! financial aggregator) wired together with mock clinical data.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- risk-review
//!   cargo run -p demo -- device-clinic
//!   cargo run -p demo -- ablation-planning
//!   cargo run -p demo -- program-roi

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cardioscore_ref_cardiology::scenarios::{
    ablation_planning, device_clinic, program_roi, risk_review,
};

// ── CLI definition ────────────────────────────────────────────────────────────

/// CardioScore — cardiology decision-support demo.
///
/// Each subcommand runs one or all of the four service-line scenarios over
/// the fictional reference cohort.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "CardioScore cardiology reference demo",
    long_about = "Runs CardioScore demo scenarios showing risk scoring,\n\
                  therapy eligibility evaluation, ablation outcome estimation,\n\
                  and program ROI aggregation over a mock AF cohort."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all four cardiology scenarios in sequence.
    RunAll,
    /// Scenario 1: Stroke and Bleeding Risk Review (CHA2DS2-VASc + HAS-BLED).
    RiskReview,
    /// Scenario 2: Device Clinic (LAAC eligibility verdicts).
    DeviceClinic,
    /// Scenario 3: Ablation Planning (outcome estimates with factors).
    AblationPlanning,
    /// Scenario 4: Program ROI (financial aggregation).
    ProgramRoi,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging. Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let result = match cli.command {
        Command::RunAll => run_all(),
        Command::RiskReview => risk_review::run_scenario(),
        Command::DeviceClinic => device_clinic::run_scenario(),
        Command::AblationPlanning => ablation_planning::run_scenario(),
        Command::ProgramRoi => program_roi::run_scenario(),
    };

    match result {
        Ok(()) => {
            println!("All selected scenarios completed successfully.");
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

// ── Scenario dispatch ─────────────────────────────────────────────────────────

fn run_all() -> cardioscore_contracts::error::CardioResult<()> {
    risk_review::run_scenario()?;
    device_clinic::run_scenario()?;
    ablation_planning::run_scenario()?;
    program_roi::run_scenario()?;
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("CardioScore — Cardiology Decision Support");
    println!("Reference Demo");
    println!("=========================================");
    println!();
    println!("Assessment pipeline per profile:");
    println!("  [1] Boundary validation of the clinical profile");
    println!("  [2] CHA2DS2-VASc stroke risk with annualized lookup");
    println!("  [3] HAS-BLED bleeding risk with annualized lookup");
    println!("  [4] Ablation outcome estimate with factor breakdown");
    println!("  [5] TOML-driven therapy eligibility verdicts");
    println!();
}
