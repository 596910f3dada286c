use crate::scoring::Vitals;

/// Per-session record of the last submitted vitals.
///
/// Views that derive from an assessment (the dashboard charts) must check
/// `has_prediction()` before reading; the assessment itself is recomputed
/// from the stored vitals rather than cached. One owner per session, no
/// sharing.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    last_vitals: Option<Vitals>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the submitted vitals. From this point `has_prediction()` is
    /// true for the rest of the session.
    pub fn record_prediction(&mut self, vitals: Vitals) {
        self.last_vitals = Some(vitals);
    }

    pub fn has_prediction(&self) -> bool {
        self.last_vitals.is_some()
    }

    /// The last submitted vitals, or None before any prediction.
    pub fn last_vitals(&self) -> Option<&Vitals> {
        self.last_vitals.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_has_no_prediction() {
        let session = SessionState::new();
        assert!(!session.has_prediction());
        assert!(session.last_vitals().is_none());
    }

    #[test]
    fn test_record_prediction_flips_flag() {
        let mut session = SessionState::new();
        let vitals = Vitals {
            age: 50,
            bmi: 28.0,
            blood_pressure: 85,
            glucose: 110,
        };

        session.record_prediction(vitals);

        assert!(session.has_prediction());
        assert_eq!(session.last_vitals(), Some(&vitals));
    }

    #[test]
    fn test_record_prediction_replaces_previous() {
        let mut session = SessionState::new();
        session.record_prediction(Vitals {
            age: 30,
            bmi: 22.0,
            blood_pressure: 70,
            glucose: 90,
        });

        let newer = Vitals {
            age: 60,
            bmi: 33.0,
            blood_pressure: 95,
            glucose: 140,
        };
        session.record_prediction(newer);

        assert_eq!(session.last_vitals(), Some(&newer));
    }
}
