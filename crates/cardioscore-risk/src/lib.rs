//! # cardioscore-risk
//!
//! The standard CardioScore scorers:
//!
//! - [`ChadsVascScorer`] — CHA₂DS₂-VASc stroke risk with the Friberg
//!   annualized-risk table and sex-differentiated tiers.
//! - [`HasBledScorer`] — HAS-BLED bleeding risk with the Pisters
//!   annualized-risk table.
//! - [`AblationOutcomeModel`] — additive ablation success heuristic,
//!   clamped to [20, 95].
//!
//! All three implement the seams in `cardioscore_core::traits` and are
//! pure, total functions over validated profiles.

pub mod ablation;
pub mod bleeding;
pub mod stroke;
pub mod tables;

pub use ablation::AblationOutcomeModel;
pub use bleeding::HasBledScorer;
pub use stroke::ChadsVascScorer;
