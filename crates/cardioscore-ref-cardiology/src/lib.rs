//! # cardioscore-ref-cardiology
//!
//! Cardiology reference runtime for the CardioScore library.
//!
//! Demonstrates four service-line workflows using mock data:
//!
//! 1. **Risk Review** — CHA₂DS₂-VASc and HAS-BLED over the cohort.
//! 2. **Device Clinic** — full pipeline, focused on LAAC eligibility
//!    verdicts across the Eligible / NotIndicated / Contraindicated
//!    branches.
//! 3. **Ablation Planning** — outcome estimates with factor breakdowns.
//! 4. **Program ROI** — financial aggregation over a modeled LAAC program.
//!
//! All data is hardcoded and fictional. No external systems are contacted.

pub mod mock_data;
pub mod scenarios;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use cardioscore_contracts::eligibility::TherapyStatus;

    use crate::mock_data::{af_cohort, laac_program_model, standard_assessor};

    /// Every cohort member passes boundary validation — the mock data must
    /// stay within the contract ranges.
    #[test]
    fn cohort_profiles_validate() {
        for member in af_cohort() {
            assert!(
                member.profile.validate().is_ok(),
                "cohort member {} fails validation",
                member.id
            );
        }
    }

    /// The standard assessor wires up from the embedded criteria and
    /// produces a verdict per therapy for every cohort member.
    #[test]
    fn standard_assessor_covers_cohort() {
        let assessor = standard_assessor().unwrap();

        for member in af_cohort() {
            let report = assessor.assess(&member.profile).unwrap();
            assert_eq!(report.therapies.len(), 4, "member {}", member.id);
        }
    }

    /// The cohort exercises each LAAC status branch.
    #[test]
    fn cohort_spans_device_branches() {
        let assessor = standard_assessor().unwrap();

        let statuses: Vec<TherapyStatus> = af_cohort()
            .iter()
            .map(|m| {
                assessor
                    .assess(&m.profile)
                    .unwrap()
                    .therapies
                    .iter()
                    .find(|v| v.therapy_id == "laac")
                    .expect("laac verdict present")
                    .status
            })
            .collect();

        assert!(statuses.contains(&TherapyStatus::Eligible));
        assert!(statuses.contains(&TherapyStatus::NotIndicated));
        assert!(statuses.contains(&TherapyStatus::Contraindicated));
    }

    /// The reference program model is internally valid and profitable over
    /// its three-year horizon.
    #[test]
    fn program_model_aggregates() {
        let (savings, procedures, investments) = laac_program_model();
        let summary = cardioscore_finance::aggregate_financial_impact(
            &savings,
            &procedures,
            &investments,
            3.0,
        )
        .unwrap();

        assert!(summary.annual_savings > 0.0);
        assert!(summary.net_benefit > 0.0);
    }
}
