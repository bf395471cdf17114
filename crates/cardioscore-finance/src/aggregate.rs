//! Financial impact aggregation.
//!
//! Pure arithmetic over validated line items:
//!
//! - annual savings = Σ(annual_amount × probability)
//!                  + Σ(volume_delta × net_margin_per_case × success_rate)
//! - annual recurring cost = Σ(recurring amounts normalized to one year)
//! - total cost  = one-time + annual recurring × timeframe
//! - net benefit = total savings − total cost
//! - ROI%        = net benefit / total cost × 100
//! - payback     = total cost / annual savings, or `Payback::Undefined`
//!                 when annual savings is zero
//!
//! Validation runs before any arithmetic so a malformed line item yields
//! `InvalidInput` naming the item, never a silently wrong total.

use tracing::debug;

use cardioscore_contracts::{
    error::{CardioError, CardioResult},
    finance::{
        FinancialSummary, InvestmentLineItem, Payback, ProcedureVolumeDelta,
        SavingsLineItem,
    },
};

/// Aggregate the modeled savings and investments over `timeframe_years`.
///
/// # Errors
///
/// - `InvalidInput` for negative amounts, margins, or volumes; for
///   probabilities or success rates outside [0, 1]; for non-finite
///   values; and for a non-positive timeframe.
/// - `Undefined` when total cost is zero — ROI has no denominator.
///
/// A payback period with zero annual savings is NOT an error: it is
/// reported as `Payback::Undefined` so the rest of the summary stays
/// usable.
pub fn aggregate_financial_impact(
    savings: &[SavingsLineItem],
    procedures: &[ProcedureVolumeDelta],
    investments: &[InvestmentLineItem],
    timeframe_years: f64,
) -> CardioResult<FinancialSummary> {
    validate_inputs(savings, procedures, investments, timeframe_years)?;

    let weighted_savings: f64 = savings
        .iter()
        .map(|item| item.annual_amount * item.probability)
        .sum();
    let procedure_margin: f64 = procedures
        .iter()
        .map(|p| p.volume_delta * p.net_margin_per_case * p.success_rate)
        .sum();
    let annual_savings = weighted_savings + procedure_margin;

    let mut one_time_cost = 0.0;
    let mut annual_recurring_cost = 0.0;
    for item in investments {
        match item.cadence.per_year() {
            None => one_time_cost += item.amount,
            Some(per_year) => annual_recurring_cost += item.amount * per_year,
        }
    }

    let total_cost = one_time_cost + annual_recurring_cost * timeframe_years;
    if total_cost == 0.0 {
        return Err(CardioError::Undefined {
            reason: "ROI is undefined with zero total cost".to_string(),
        });
    }

    let total_savings = annual_savings * timeframe_years;
    let net_benefit = total_savings - total_cost;
    let roi_pct = net_benefit / total_cost * 100.0;

    let payback = if annual_savings > 0.0 {
        Payback::Years(total_cost / annual_savings)
    } else {
        Payback::Undefined
    };

    debug!(
        annual_savings,
        total_cost,
        net_benefit,
        roi_pct,
        "financial impact aggregated"
    );

    Ok(FinancialSummary {
        annual_savings,
        annual_recurring_cost,
        one_time_cost,
        total_cost,
        total_savings,
        net_benefit,
        roi_pct,
        payback,
    })
}

/// Reject malformed inputs before any arithmetic runs.
fn validate_inputs(
    savings: &[SavingsLineItem],
    procedures: &[ProcedureVolumeDelta],
    investments: &[InvestmentLineItem],
    timeframe_years: f64,
) -> CardioResult<()> {
    if !timeframe_years.is_finite() || timeframe_years <= 0.0 {
        return Err(CardioError::InvalidInput {
            reason: format!("timeframe_years {} must be positive", timeframe_years),
        });
    }

    for item in savings {
        if !item.annual_amount.is_finite() || item.annual_amount < 0.0 {
            return Err(CardioError::InvalidInput {
                reason: format!(
                    "savings item '{}' has negative or non-finite amount",
                    item.description
                ),
            });
        }
        if !item.probability.is_finite() || !(0.0..=1.0).contains(&item.probability) {
            return Err(CardioError::InvalidInput {
                reason: format!(
                    "savings item '{}' has probability outside [0, 1]",
                    item.description
                ),
            });
        }
    }

    for p in procedures {
        if !p.volume_delta.is_finite() || p.volume_delta < 0.0 {
            return Err(CardioError::InvalidInput {
                reason: format!(
                    "procedure item '{}' has negative or non-finite volume delta",
                    p.description
                ),
            });
        }
        if !p.net_margin_per_case.is_finite() || p.net_margin_per_case < 0.0 {
            return Err(CardioError::InvalidInput {
                reason: format!(
                    "procedure item '{}' has negative or non-finite margin",
                    p.description
                ),
            });
        }
        if !p.success_rate.is_finite() || !(0.0..=1.0).contains(&p.success_rate) {
            return Err(CardioError::InvalidInput {
                reason: format!(
                    "procedure item '{}' has success rate outside [0, 1]",
                    p.description
                ),
            });
        }
    }

    for item in investments {
        if !item.amount.is_finite() || item.amount < 0.0 {
            return Err(CardioError::InvalidInput {
                reason: format!(
                    "investment item '{}' has negative or non-finite amount",
                    item.description
                ),
            });
        }
    }

    Ok(())
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use cardioscore_contracts::error::CardioError;
    use cardioscore_contracts::finance::{
        InvestmentLineItem, Payback, ProcedureVolumeDelta, Recurrence, SavingsLineItem,
    };

    use super::aggregate_financial_impact;

    // ── Builder helpers ───────────────────────────────────────────────────────

    fn saving(desc: &str, amount: f64, probability: f64) -> SavingsLineItem {
        SavingsLineItem {
            description: desc.to_string(),
            annual_amount: amount,
            probability,
        }
    }

    fn investment(desc: &str, amount: f64, cadence: Recurrence) -> InvestmentLineItem {
        InvestmentLineItem { description: desc.to_string(), amount, cadence }
    }

    fn procedure(
        desc: &str,
        volume: f64,
        margin: f64,
        success: f64,
    ) -> ProcedureVolumeDelta {
        ProcedureVolumeDelta {
            description: desc.to_string(),
            volume_delta: volume,
            net_margin_per_case: margin,
            success_rate: success,
        }
    }

    // ── Worked example ────────────────────────────────────────────────────────

    /// One 100k saving at 80% probability against a 50k one-time cost over
    /// one year: savings 80k, cost 50k, net 30k, ROI 60%, payback 0.625y.
    #[test]
    fn test_worked_example() {
        let summary = aggregate_financial_impact(
            &[saving("avoided admissions", 100_000.0, 0.8)],
            &[],
            &[investment("device inventory", 50_000.0, Recurrence::OneTime)],
            1.0,
        )
        .unwrap();

        assert_eq!(summary.annual_savings, 80_000.0);
        assert_eq!(summary.total_cost, 50_000.0);
        assert_eq!(summary.net_benefit, 30_000.0);
        assert_eq!(summary.roi_pct, 60.0);
        assert_eq!(summary.payback, Payback::Years(0.625));
    }

    // ── Recurrence normalization ─────────────────────────────────────────────

    /// Monthly, quarterly, and annual cadences normalize to an annual run
    /// rate: 1k monthly + 3k quarterly + 5k annual = 29k per year.
    #[test]
    fn test_recurring_cost_normalization() {
        let summary = aggregate_financial_impact(
            &[saving("savings", 100_000.0, 1.0)],
            &[],
            &[
                investment("monitoring service", 1_000.0, Recurrence::Monthly),
                investment("registry fees", 3_000.0, Recurrence::Quarterly),
                investment("maintenance contract", 5_000.0, Recurrence::Annual),
            ],
            2.0,
        )
        .unwrap();

        assert_eq!(summary.annual_recurring_cost, 29_000.0);
        assert_eq!(summary.one_time_cost, 0.0);
        // Two years of recurring cost.
        assert_eq!(summary.total_cost, 58_000.0);
    }

    // ── Procedure volume revenue ─────────────────────────────────────────────

    /// Procedure margin contributes volume × margin × success rate.
    #[test]
    fn test_procedure_margin_contributes() {
        let summary = aggregate_financial_impact(
            &[saving("base savings", 10_000.0, 1.0)],
            &[procedure("added ablation cases", 40.0, 5_000.0, 0.9)],
            &[investment("lab upgrade", 100_000.0, Recurrence::OneTime)],
            1.0,
        )
        .unwrap();

        // 10_000 + 40 * 5_000 * 0.9 = 190_000.
        assert_eq!(summary.annual_savings, 190_000.0);
        assert_eq!(summary.net_benefit, 90_000.0);
    }

    // ── Payback edge cases ───────────────────────────────────────────────────

    /// Zero annual savings yields a defined Undefined payback — never
    /// infinity, never a crash.
    #[test]
    fn test_zero_savings_payback_undefined() {
        let summary = aggregate_financial_impact(
            &[saving("unrealized", 100_000.0, 0.0)],
            &[],
            &[investment("program cost", 50_000.0, Recurrence::OneTime)],
            3.0,
        )
        .unwrap();

        assert_eq!(summary.annual_savings, 0.0);
        assert_eq!(summary.payback, Payback::Undefined);
        // The rest of the summary stays usable.
        assert_eq!(summary.net_benefit, -50_000.0);
        assert_eq!(summary.roi_pct, -100.0);
    }

    /// No savings line items at all behaves the same as zero-probability
    /// items.
    #[test]
    fn test_empty_savings() {
        let summary = aggregate_financial_impact(
            &[],
            &[],
            &[investment("program cost", 10_000.0, Recurrence::OneTime)],
            1.0,
        )
        .unwrap();

        assert_eq!(summary.payback, Payback::Undefined);
    }

    /// Zero total cost has no ROI denominator: Undefined error.
    #[test]
    fn test_zero_cost_is_undefined() {
        let result = aggregate_financial_impact(
            &[saving("savings", 10_000.0, 1.0)],
            &[],
            &[],
            1.0,
        );

        match result {
            Err(CardioError::Undefined { reason }) => {
                assert!(reason.contains("zero total cost"));
            }
            other => panic!("expected Undefined, got {:?}", other),
        }
    }

    // ── Validation ───────────────────────────────────────────────────────────

    #[test]
    fn test_negative_amount_rejected() {
        let result = aggregate_financial_impact(
            &[saving("bad item", -5.0, 0.5)],
            &[],
            &[investment("cost", 1_000.0, Recurrence::OneTime)],
            1.0,
        );

        match result {
            Err(CardioError::InvalidInput { reason }) => {
                assert!(reason.contains("bad item"), "should name the item: {reason}");
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_probability_out_of_range_rejected() {
        let result = aggregate_financial_impact(
            &[saving("overconfident", 5_000.0, 1.2)],
            &[],
            &[investment("cost", 1_000.0, Recurrence::OneTime)],
            1.0,
        );

        assert!(matches!(result, Err(CardioError::InvalidInput { .. })));
    }

    #[test]
    fn test_bad_success_rate_rejected() {
        let result = aggregate_financial_impact(
            &[],
            &[procedure("cases", 10.0, 1_000.0, -0.1)],
            &[investment("cost", 1_000.0, Recurrence::OneTime)],
            1.0,
        );

        assert!(matches!(result, Err(CardioError::InvalidInput { .. })));
    }

    #[test]
    fn test_nonpositive_timeframe_rejected() {
        for years in [0.0, -1.0, f64::NAN] {
            let result = aggregate_financial_impact(
                &[saving("savings", 1_000.0, 1.0)],
                &[],
                &[investment("cost", 1_000.0, Recurrence::OneTime)],
                years,
            );
            assert!(matches!(result, Err(CardioError::InvalidInput { .. })));
        }
    }

    #[test]
    fn test_negative_investment_rejected() {
        let result = aggregate_financial_impact(
            &[],
            &[],
            &[investment("rebate booked as cost", -500.0, Recurrence::Annual)],
            1.0,
        );

        assert!(matches!(result, Err(CardioError::InvalidInput { .. })));
    }
}
