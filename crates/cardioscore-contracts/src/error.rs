//! Error types for the CardioScore evaluation pipeline.
//!
//! All fallible operations in CardioScore return `CardioResult<T>`.
//! The scorers themselves are total functions; errors arise only at the
//! boundaries — input validation, criteria configuration, and mathematically
//! undefined financial results.

use thiserror::Error;

/// The unified error type for the CardioScore crates.
#[derive(Debug, Error)]
pub enum CardioError {
    /// An input field is out of its valid clinical range or malformed.
    ///
    /// Raised at the pipeline boundary before any scorer runs, and by the
    /// financial aggregator before any arithmetic. The reason names the
    /// offending field or line item.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A result is mathematically undefined for the given inputs.
    ///
    /// Used where the source data would otherwise produce `Infinity` or
    /// `NaN` — e.g. ROI with zero total cost.
    #[error("undefined result: {reason}")]
    Undefined { reason: String },

    /// A criteria document is missing, malformed, or references a field
    /// that does not exist in the evaluation context.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

/// Convenience alias used throughout the CardioScore crates.
pub type CardioResult<T> = Result<T, CardioError>;
