use serde::Serialize;

use super::engine::Vitals;

/// One factor's contribution to the overall risk picture, as shown in the
/// risk-contribution chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FactorScore {
    pub label: &'static str,
    pub points: u8,
}

/// Per-factor risk contributions.
///
/// This is a separate derivation from the engine's total, with its own
/// thresholds: each factor reports a single bucketed value. For BMI and
/// blood pressure the bucket happens to equal what the engine accumulates
/// across both comparisons, but glucose above 125 buckets to 3 while the
/// engine adds both bonuses (2+3). The factor sum therefore tops out at 8
/// against the engine's 10; neither side is derived from the other.
pub fn factor_scores(vitals: &Vitals) -> [FactorScore; 4] {
    let age = if vitals.age > 45 { 1 } else { 0 };
    let bmi = if vitals.bmi > 30.0 {
        2
    } else if vitals.bmi > 25.0 {
        1
    } else {
        0
    };
    let bp = if vitals.blood_pressure > 90 {
        2
    } else if vitals.blood_pressure > 80 {
        1
    } else {
        0
    };
    let glucose = if vitals.glucose > 125 {
        3
    } else if vitals.glucose > 100 {
        2
    } else {
        0
    };

    [
        FactorScore {
            label: "Age",
            points: age,
        },
        FactorScore {
            label: "BMI",
            points: bmi,
        },
        FactorScore {
            label: "Blood Pressure",
            points: bp,
        },
        FactorScore {
            label: "Glucose",
            points: glucose,
        },
    ]
}
