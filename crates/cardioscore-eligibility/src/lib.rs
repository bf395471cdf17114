//! # cardioscore-eligibility
//!
//! A TOML-driven therapy eligibility engine for CardioScore.
//!
//! ## Overview
//!
//! This crate provides [`CriteriaEngine`], which implements the
//! [`EligibilityEngine`](cardioscore_core::traits::EligibilityEngine)
//! trait. Criteria are declared in a TOML document — per therapy, a set of
//! indication gates, absolute and relative contraindications, and
//! supporting factors — and evaluated against the serialized
//! `EvaluationContext` by dotted field path.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use cardioscore_eligibility::CriteriaEngine;
//!
//! let engine = CriteriaEngine::default_criteria()?;
//! // Pass `engine` to `cardioscore_core::Assessor::new(...)`.
//! ```
//!
//! ## Status ladder
//!
//! Every therapy starts `Eligible`. Absolute contraindications force
//! `Contraindicated` (terminal); unmet indication gates force
//! `NotIndicated`; relative contraindications downgrade `Eligible` to
//! `Caution`. Supporting factors only ever raise confidence (capped at
//! 95) — they never improve the status.

pub mod criteria;
pub mod engine;

pub use criteria::{Condition, CriteriaConfig, CriterionRule, SupportRule, TherapyCriteria};
pub use engine::CriteriaEngine;

// ── Tests ─────────────────────────────────────────────────────────────────────
