//! # cardioscore-contracts
//!
//! Shared types, schemas, and contracts for the CardioScore library.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions, boundary validation, and error types.

pub mod eligibility;
pub mod error;
pub mod finance;
pub mod profile;
pub mod report;
pub mod score;
