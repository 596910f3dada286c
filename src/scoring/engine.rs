use serde::Serialize;

/// The four patient vitals used for risk assessment.
///
/// Declared domains (enforced at the input boundary, not here):
/// age 18-90 years, BMI 15.0-50.0, blood pressure 40-130, glucose 40-200.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vitals {
    pub age: u32,
    pub bmi: f64,
    pub blood_pressure: u32,
    pub glucose: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Moderate => write!(f, "Moderate"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// Result of one evaluation. The raw score is kept alongside the label so
/// presentation layers can show a breakdown without re-deriving it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub risk: RiskLevel,
    /// Capped proxy value scaled from the raw score, not a statistical
    /// confidence interval. Always in [0, 95].
    pub confidence: u8,
    pub score: u8,
}

/// Evaluate diabetes risk from the four vitals.
///
/// Pure and total: no validation, no failure modes, deterministic for
/// identical inputs. All comparisons are strict `>`. A value above a higher
/// threshold also collects the lower threshold's points (BMI 35 contributes
/// 2, glucose 130 contributes 5). That compounding is the rule, not an
/// accident.
pub fn evaluate(vitals: &Vitals) -> RiskAssessment {
    let mut score: u8 = 0;

    if vitals.age > 45 {
        score += 1;
    }
    if vitals.bmi > 25.0 {
        score += 1;
    }
    if vitals.bmi > 30.0 {
        score += 1;
    }
    if vitals.blood_pressure > 80 {
        score += 1;
    }
    if vitals.blood_pressure > 90 {
        score += 1;
    }
    if vitals.glucose > 100 {
        score += 2;
    }
    if vitals.glucose > 125 {
        score += 3;
    }

    let confidence = (u32::from(score) * 10).min(95) as u8;

    let risk = if score >= 6 {
        RiskLevel::High
    } else if score >= 3 {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    };

    RiskAssessment {
        risk,
        confidence,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vitals(age: u32, bmi: f64, bp: u32, glucose: u32) -> Vitals {
        Vitals {
            age,
            bmi,
            blood_pressure: bp,
            glucose,
        }
    }

    #[test]
    fn test_all_thresholds_exclusive() {
        // Every vital sits exactly on a threshold; strict > means no points.
        let result = evaluate(&vitals(45, 25.0, 80, 100));
        assert_eq!(result.score, 0);
        assert_eq!(result.risk, RiskLevel::Low);
        assert_eq!(result.confidence, 0);
    }

    #[test]
    fn test_just_past_lower_thresholds() {
        // 1 (age) + 1 (bmi>25) + 1 (bp>80) + 2 (glucose>100) = 5
        let result = evaluate(&vitals(46, 26.0, 81, 101));
        assert_eq!(result.score, 5);
        assert_eq!(result.risk, RiskLevel::Moderate);
        assert_eq!(result.confidence, 50);
    }

    #[test]
    fn test_maximum_score_clamps_confidence() {
        // All seven bonuses: 1+1+1+1+1+2+3 = 10; 10*10=100 clamped to 95.
        let result = evaluate(&vitals(46, 31.0, 91, 126));
        assert_eq!(result.score, 10);
        assert_eq!(result.risk, RiskLevel::High);
        assert_eq!(result.confidence, 95);
    }

    #[test]
    fn test_domain_minimums() {
        let result = evaluate(&vitals(18, 15.0, 40, 40));
        assert_eq!(result.score, 0);
        assert_eq!(result.risk, RiskLevel::Low);
        assert_eq!(result.confidence, 0);
    }

    #[test]
    fn test_bmi_double_counts_above_both_thresholds() {
        let low = evaluate(&vitals(30, 26.0, 70, 90));
        let high = evaluate(&vitals(30, 35.0, 70, 90));
        assert_eq!(low.score, 1);
        assert_eq!(high.score, 2);
    }

    #[test]
    fn test_bp_double_counts_above_both_thresholds() {
        let low = evaluate(&vitals(30, 20.0, 85, 90));
        let high = evaluate(&vitals(30, 20.0, 95, 90));
        assert_eq!(low.score, 1);
        assert_eq!(high.score, 2);
    }

    #[test]
    fn test_glucose_bonuses_stack() {
        let mid = evaluate(&vitals(30, 20.0, 70, 110));
        let high = evaluate(&vitals(30, 20.0, 70, 130));
        assert_eq!(mid.score, 2);
        assert_eq!(high.score, 5); // 2 + 3
    }

    #[test]
    fn test_label_boundaries() {
        // score 2 -> Low, score 3 -> Moderate, score 6 -> High
        assert_eq!(evaluate(&vitals(30, 20.0, 70, 110)).risk, RiskLevel::Low);
        assert_eq!(
            evaluate(&vitals(46, 20.0, 70, 110)).risk,
            RiskLevel::Moderate
        );
        assert_eq!(evaluate(&vitals(46, 20.0, 70, 130)).risk, RiskLevel::High);
    }

    #[test]
    fn test_deterministic() {
        let v = vitals(52, 31.5, 95, 140);
        assert_eq!(evaluate(&v), evaluate(&v));
    }

    #[test]
    fn test_monotonic_in_each_vital() {
        let base = vitals(44, 24.0, 79, 99);
        let base_score = evaluate(&base).score;

        for age in [45, 46, 60, 90] {
            let v = Vitals { age, ..base };
            assert!(evaluate(&v).score >= base_score, "age={}", age);
        }
        let mut prev = base_score;
        for bmi in [25.0, 25.1, 30.0, 30.1, 50.0] {
            let s = evaluate(&Vitals { bmi, ..base }).score;
            assert!(s >= prev, "bmi={}", bmi);
            prev = s;
        }
        let mut prev = base_score;
        for bp in [80, 81, 90, 91, 130] {
            let s = evaluate(&Vitals {
                blood_pressure: bp,
                ..base
            })
            .score;
            assert!(s >= prev, "bp={}", bp);
            prev = s;
        }
        let mut prev = base_score;
        for glucose in [100, 101, 125, 126, 200] {
            let s = evaluate(&Vitals { glucose, ..base }).score;
            assert!(s >= prev, "glucose={}", glucose);
            prev = s;
        }
    }

    #[test]
    fn test_confidence_always_in_bounds() {
        for age in [18, 46, 90] {
            for bmi in [15.0, 26.0, 31.0] {
                for bp in [40, 81, 91] {
                    for glucose in [40, 101, 126] {
                        let result = evaluate(&vitals(age, bmi, bp, glucose));
                        assert!(result.confidence <= 95);
                        assert_eq!(
                            result.confidence,
                            (u32::from(result.score) * 10).min(95) as u8
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_lenient_out_of_domain_inputs() {
        // No validation inside the engine: out-of-domain values still score.
        let result = evaluate(&vitals(200, 80.0, 300, 500));
        assert_eq!(result.score, 10);
        assert_eq!(result.risk, RiskLevel::High);
    }
}
