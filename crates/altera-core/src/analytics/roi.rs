//! ROI derivation.
//!
//! Turns the screening totals into the time/cost savings card: manual
//! review is costed at a fixed per-applicant time, assisted review at a
//! fixed per-diamond time, and the delta is priced at a flat hourly rate.

use crate::analytics::model::{RoiCalculated, RoiReport, RoiVariables};

/// Inputs to the ROI derivation. The defaults are the product's standard
/// assumptions (10 min manual review, 5 min assisted, $50/h).
#[derive(Debug, Clone)]
pub struct RoiInputs {
    pub total_applicants: u64,
    pub diamonds_count: u64,
    pub manual_minutes_per_applicant: u64,
    pub assisted_minutes_per_applicant: u64,
    pub hourly_rate: u64,
}

impl RoiInputs {
    pub fn new(total_applicants: u64, diamonds_count: u64) -> Self {
        Self {
            total_applicants,
            diamonds_count,
            manual_minutes_per_applicant: 10,
            assisted_minutes_per_applicant: 5,
            hourly_rate: 50,
        }
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10u64.pow(decimals) as f64;
    (value * factor).round() / factor
}

/// Derive the ROI card from the screening totals.
pub fn compute_roi(inputs: &RoiInputs) -> RoiReport {
    let manual_total_min = inputs.total_applicants * inputs.manual_minutes_per_applicant;
    let assisted_total_min = inputs.diamonds_count * inputs.assisted_minutes_per_applicant;

    let time_saved_minutes = manual_total_min.saturating_sub(assisted_total_min);
    let time_saved_hours = time_saved_minutes as f64 / 60.0;
    let cost_saved = time_saved_hours * inputs.hourly_rate as f64;
    let speed_improvement = if assisted_total_min > 0 {
        Some(round_to(
            manual_total_min as f64 / assisted_total_min as f64,
            1,
        ))
    } else {
        None
    };
    let efficiency_percentage = if inputs.total_applicants > 0 {
        round_to(
            inputs.diamonds_count as f64 / inputs.total_applicants as f64 * 100.0,
            1,
        )
    } else {
        0.0
    };

    RoiReport {
        variables: RoiVariables {
            total_applicants: inputs.total_applicants,
            diamonds_count: inputs.diamonds_count,
            manual_time_per_applicant: inputs.manual_minutes_per_applicant,
            assisted_time_per_applicant: inputs.assisted_minutes_per_applicant,
            hourly_rate: inputs.hourly_rate,
        },
        calculated: RoiCalculated {
            time_saved_hours: round_to(time_saved_hours, 2),
            cost_saved: round_to(cost_saved, 2),
            speed_improvement,
            efficiency_percentage,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_assumptions() {
        // 120 applicants, 6 diamonds: 1200 manual minutes vs 30 assisted.
        let report = compute_roi(&RoiInputs::new(120, 6));
        assert_eq!(report.calculated.time_saved_hours, 19.5);
        assert_eq!(report.calculated.cost_saved, 975.0);
        assert_eq!(report.calculated.speed_improvement, Some(40.0));
        assert_eq!(report.calculated.efficiency_percentage, 5.0);
        assert_eq!(report.variables.hourly_rate, 50);
    }

    #[test]
    fn no_diamonds_means_no_speed_improvement() {
        let report = compute_roi(&RoiInputs::new(30, 0));
        assert_eq!(report.calculated.speed_improvement, None);
        assert_eq!(report.calculated.time_saved_hours, 5.0);
        assert_eq!(report.calculated.efficiency_percentage, 0.0);
    }

    #[test]
    fn no_applicants_is_all_zero() {
        let report = compute_roi(&RoiInputs::new(0, 0));
        assert_eq!(report.calculated.time_saved_hours, 0.0);
        assert_eq!(report.calculated.cost_saved, 0.0);
        assert_eq!(report.calculated.efficiency_percentage, 0.0);
    }

    #[test]
    fn savings_never_go_negative() {
        // Degenerate configuration where assisted review costs more.
        let inputs = RoiInputs {
            total_applicants: 1,
            diamonds_count: 1,
            manual_minutes_per_applicant: 1,
            assisted_minutes_per_applicant: 60,
            hourly_rate: 50,
        };
        let report = compute_roi(&inputs);
        assert_eq!(report.calculated.time_saved_hours, 0.0);
        assert_eq!(report.calculated.cost_saved, 0.0);
    }

    #[test]
    fn rounding_is_to_cents_and_tenths() {
        // 7 applicants, 3 diamonds: 70 - 15 = 55 min = 0.9166.. h.
        let report = compute_roi(&RoiInputs::new(7, 3));
        assert_eq!(report.calculated.time_saved_hours, 0.92);
        assert_eq!(report.calculated.cost_saved, 45.83);
        assert_eq!(report.calculated.speed_improvement, Some(4.7));
        assert_eq!(report.calculated.efficiency_percentage, 42.9);
    }
}
