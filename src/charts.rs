//! Chart datasets derived from the last recorded vitals.

use crate::scoring::{factor_scores, Vitals};

/// The four metric labels, in display order.
pub const METRIC_LABELS: [&str; 4] = ["Age", "BMI", "Blood Pressure", "Glucose"];

/// Dataset for the health-metrics bar chart: the four vitals verbatim.
pub fn metrics_chart(vitals: &Vitals) -> Vec<(&'static str, f64)> {
    vec![
        ("Age", f64::from(vitals.age)),
        ("BMI", vitals.bmi),
        ("Blood Pressure", f64::from(vitals.blood_pressure)),
        ("Glucose", f64::from(vitals.glucose)),
    ]
}

/// Dataset for the risk-contribution chart: one bucketed score per factor.
pub fn risk_contribution_chart(vitals: &Vitals) -> Vec<(&'static str, u64)> {
    factor_scores(vitals)
        .iter()
        .map(|f| (f.label, u64::from(f.points)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_chart_is_verbatim() {
        let vitals = Vitals {
            age: 52,
            bmi: 31.5,
            blood_pressure: 95,
            glucose: 140,
        };
        let data = metrics_chart(&vitals);
        assert_eq!(
            data,
            vec![
                ("Age", 52.0),
                ("BMI", 31.5),
                ("Blood Pressure", 95.0),
                ("Glucose", 140.0),
            ]
        );
    }

    #[test]
    fn test_risk_contribution_chart_buckets() {
        let vitals = Vitals {
            age: 52,
            bmi: 31.5,
            blood_pressure: 95,
            glucose: 140,
        };
        let data = risk_contribution_chart(&vitals);
        assert_eq!(
            data,
            vec![
                ("Age", 1),
                ("BMI", 2),
                ("Blood Pressure", 2),
                ("Glucose", 3),
            ]
        );
    }

    #[test]
    fn test_labels_match_between_charts() {
        let vitals = Vitals {
            age: 45,
            bmi: 25.0,
            blood_pressure: 80,
            glucose: 100,
        };
        let metrics = metrics_chart(&vitals);
        let risks = risk_contribution_chart(&vitals);
        for (i, label) in METRIC_LABELS.iter().enumerate() {
            assert_eq!(metrics[i].0, *label);
            assert_eq!(risks[i].0, *label);
        }
    }
}
