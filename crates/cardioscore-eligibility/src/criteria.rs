//! Criteria types and configuration schema.
//!
//! A `CriteriaConfig` is deserialized from TOML and holds one
//! `TherapyCriteria` per therapy option. Rules within a therapy are
//! evaluated in declaration order and ALL rules are evaluated — reasons
//! accumulate; there is no first-match short circuit.
//!
//! Conditions reference the evaluation context by dotted field path
//! (e.g. `profile.active_bleeding`, `stroke.score`, `bleeding.tier`).
//! A path whose key is missing from the context is a configuration error;
//! a path resolving to JSON `null` (an absent measurement, such as an
//! unmeasured LAA diameter) simply fails the condition.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use cardioscore_contracts::error::{CardioError, CardioResult};

/// A predicate over the serialized evaluation context.
///
/// Expressed in TOML as an inline table with a `kind` discriminant:
///
/// ```toml
/// condition = { kind = "flag", field = "profile.active_bleeding" }
/// condition = { kind = "at-least", field = "stroke.score", value = 2.0 }
/// condition = { kind = "in-range", field = "profile.laa_diameter_mm", min = 14.0, max = 31.5 }
/// condition = { kind = "equals", field = "bleeding.tier", value = "high" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Condition {
    /// The boolean field is `true`.
    Flag { field: String },
    /// The boolean field is `false`.
    NotFlag { field: String },
    /// The field equals the given value exactly.
    Equals { field: String, value: Value },
    /// The numeric field is ≥ `value`.
    AtLeast { field: String, value: f64 },
    /// The numeric field is < `value`.
    Below { field: String, value: f64 },
    /// The numeric field is within [`min`, `max`], inclusive.
    InRange { field: String, min: f64, max: f64 },
    /// At least one sub-condition holds. Empty list never holds.
    AnyOf { of: Vec<Condition> },
    /// Every sub-condition holds. Empty list holds vacuously.
    AllOf { of: Vec<Condition> },
}

impl Condition {
    /// Evaluate this condition against the serialized context.
    ///
    /// # Errors
    ///
    /// `ConfigError` when a referenced key is missing from the context or
    /// the field's type does not fit the condition — misconfigured
    /// criteria surface immediately, they are never silently skipped.
    pub fn evaluate(&self, ctx: &Value) -> CardioResult<bool> {
        match self {
            Condition::Flag { field } => Ok(Self::as_flag(ctx, field)?.unwrap_or(false)),
            Condition::NotFlag { field } => {
                Ok(!Self::as_flag(ctx, field)?.unwrap_or(true))
            }
            Condition::Equals { field, value } => {
                Ok(Self::resolve(ctx, field)? == value)
            }
            Condition::AtLeast { field, value } => {
                Ok(Self::as_number(ctx, field)?.map_or(false, |n| n >= *value))
            }
            Condition::Below { field, value } => {
                Ok(Self::as_number(ctx, field)?.map_or(false, |n| n < *value))
            }
            Condition::InRange { field, min, max } => Ok(Self::as_number(ctx, field)?
                .map_or(false, |n| n >= *min && n <= *max)),
            Condition::AnyOf { of } => {
                for cond in of {
                    if cond.evaluate(ctx)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Condition::AllOf { of } => {
                for cond in of {
                    if !cond.evaluate(ctx)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
        }
    }

    /// Resolve a dotted field path against the context.
    ///
    /// A missing key at any segment is a `ConfigError` naming the path.
    fn resolve<'v>(ctx: &'v Value, path: &str) -> CardioResult<&'v Value> {
        let mut current = ctx;
        for segment in path.split('.') {
            current = current.get(segment).ok_or_else(|| CardioError::ConfigError {
                reason: format!(
                    "condition references unknown field '{path}' (no key '{segment}')"
                ),
            })?;
        }
        Ok(current)
    }

    /// The field as a boolean; `None` when the value is JSON null.
    fn as_flag(ctx: &Value, path: &str) -> CardioResult<Option<bool>> {
        match Self::resolve(ctx, path)? {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(*b)),
            other => Err(CardioError::ConfigError {
                reason: format!(
                    "condition on '{path}' expects a boolean, found {other}"
                ),
            }),
        }
    }

    /// The field as a number; `None` when the value is JSON null.
    fn as_number(ctx: &Value, path: &str) -> CardioResult<Option<f64>> {
        match Self::resolve(ctx, path)? {
            Value::Null => Ok(None),
            Value::Number(n) => Ok(n.as_f64()),
            other => Err(CardioError::ConfigError {
                reason: format!("condition on '{path}' expects a number, found {other}"),
            }),
        }
    }
}

/// A contraindication or indication rule.
///
/// Used in three roles within a `TherapyCriteria`:
/// - `indication` — the gate must hold or the therapy is not indicated;
///   `reason` explains the unmet gate.
/// - `absolute` — a match forces `Contraindicated`; `reason` is recorded.
/// - `relative` — a match downgrades to `Caution`; `reason` is the
///   monitoring recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionRule {
    /// Stable identifier used in logs.
    pub id: String,
    /// Human-readable description of what the rule checks.
    pub description: String,
    /// Text recorded on the verdict when the rule fires (or, for
    /// indication rules, when the gate is unmet).
    pub reason: String,
    pub condition: Condition,
}

/// A supporting factor that raises verdict confidence when matched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportRule {
    pub id: String,
    /// Recorded on the verdict's supporting list when matched.
    pub description: String,
    /// Percentage points added to the base confidence. The total is
    /// capped at 95.
    pub weight: u8,
    pub condition: Condition,
}

fn default_base_confidence() -> u8 {
    30
}

/// The complete criteria set for one therapy option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TherapyCriteria {
    /// Stable identifier (e.g. "doac", "laac").
    pub id: String,
    /// Human-readable name for reports.
    pub name: String,
    /// Starting confidence before supporting factors. Defaults to 30.
    #[serde(default = "default_base_confidence")]
    pub base_confidence: u8,
    /// Gates that must ALL hold for the therapy to be indicated.
    #[serde(default)]
    pub indication: Vec<CriterionRule>,
    /// Absolute contraindications. Any match is terminal.
    #[serde(default)]
    pub absolute: Vec<CriterionRule>,
    /// Relative contraindications. Matches downgrade to `Caution`.
    #[serde(default)]
    pub relative: Vec<CriterionRule>,
    /// Supporting factors. Matches raise confidence.
    #[serde(default)]
    pub support: Vec<SupportRule>,
}

/// The top-level structure deserialized from a TOML criteria document.
///
/// Therapies are evaluated, and verdicts returned, in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriteriaConfig {
    pub therapy: Vec<TherapyCriteria>,
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use serde_json::json;

    use cardioscore_contracts::error::CardioError;

    use super::Condition;

    fn ctx() -> serde_json::Value {
        json!({
            "profile": {
                "active_bleeding": false,
                "bleeding_history": true,
                "platelet_count_k_per_ul": 230.0,
                "laa_diameter_mm": null,
                "age": 74
            },
            "stroke": { "score": 4, "tier": "high" },
            "bleeding": { "score": 2, "tier": "moderate" }
        })
    }

    #[test]
    fn flag_reads_booleans() {
        let ctx = ctx();
        let hit = Condition::Flag { field: "profile.bleeding_history".to_string() };
        let miss = Condition::Flag { field: "profile.active_bleeding".to_string() };

        assert!(hit.evaluate(&ctx).unwrap());
        assert!(!miss.evaluate(&ctx).unwrap());
    }

    #[test]
    fn numeric_comparisons() {
        let ctx = ctx();

        let at_least = Condition::AtLeast { field: "stroke.score".to_string(), value: 2.0 };
        assert!(at_least.evaluate(&ctx).unwrap());

        let below = Condition::Below {
            field: "profile.platelet_count_k_per_ul".to_string(),
            value: 100.0,
        };
        assert!(!below.evaluate(&ctx).unwrap());

        let in_range = Condition::InRange {
            field: "profile.age".to_string(),
            min: 70.0,
            max: 74.0,
        };
        assert!(in_range.evaluate(&ctx).unwrap());
    }

    #[test]
    fn equals_compares_strings() {
        let ctx = ctx();
        let cond = Condition::Equals {
            field: "stroke.tier".to_string(),
            value: serde_json::json!("high"),
        };
        assert!(cond.evaluate(&ctx).unwrap());
    }

    /// JSON null (an absent measurement) fails comparisons instead of
    /// erroring — an unmeasured LAA is not a configuration problem.
    #[test]
    fn null_measurement_fails_condition() {
        let ctx = ctx();
        let cond = Condition::InRange {
            field: "profile.laa_diameter_mm".to_string(),
            min: 14.0,
            max: 31.5,
        };
        assert!(!cond.evaluate(&ctx).unwrap());
    }

    /// A missing key is a misconfigured criteria document and must error.
    #[test]
    fn unknown_field_is_config_error() {
        let ctx = ctx();
        let cond = Condition::Flag { field: "profile.no_such_flag".to_string() };

        match cond.evaluate(&ctx) {
            Err(CardioError::ConfigError { reason }) => {
                assert!(reason.contains("profile.no_such_flag"));
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    /// A type mismatch (flag condition on a numeric field) must error.
    #[test]
    fn type_mismatch_is_config_error() {
        let ctx = ctx();
        let cond = Condition::Flag { field: "stroke.score".to_string() };
        assert!(matches!(cond.evaluate(&ctx), Err(CardioError::ConfigError { .. })));
    }

    #[test]
    fn any_of_and_all_of() {
        let ctx = ctx();

        let any = Condition::AnyOf {
            of: vec![
                Condition::Flag { field: "profile.active_bleeding".to_string() },
                Condition::Flag { field: "profile.bleeding_history".to_string() },
            ],
        };
        assert!(any.evaluate(&ctx).unwrap());

        let all = Condition::AllOf {
            of: vec![
                Condition::Flag { field: "profile.active_bleeding".to_string() },
                Condition::Flag { field: "profile.bleeding_history".to_string() },
            ],
        };
        assert!(!all.evaluate(&ctx).unwrap());

        // Empty lists: any-of never holds, all-of holds vacuously.
        assert!(!Condition::AnyOf { of: vec![] }.evaluate(&ctx).unwrap());
        assert!(Condition::AllOf { of: vec![] }.evaluate(&ctx).unwrap());
    }

    /// Conditions parse from their TOML inline-table form.
    #[test]
    fn condition_parses_from_toml() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            condition: Condition,
        }

        let parsed: Wrapper = toml::from_str(
            r#"condition = { kind = "at-least", field = "stroke.score", value = 2.0 }"#,
        )
        .unwrap();

        assert!(matches!(parsed.condition, Condition::AtLeast { .. }));
    }
}
