//! Cardiology reference demo scenarios.
//!
//! Each scenario is a self-contained module that wires up real CardioScore
//! components (scorers, criteria engine, assessor, aggregator) with the
//! mock cohort and walks through one service-line workflow.

pub mod ablation_planning;
pub mod device_clinic;
pub mod program_roi;
pub mod risk_review;
