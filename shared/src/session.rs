use crate::shared_wheel_game::ResetSignal;
use crate::user_info::UserInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Intake,
    Wheel,
}

/// Host side of the flow: receives the validated record from intake and
/// drops it again when the wheel signals a reset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PromoSession {
    user: Option<UserInfo>,
}

impl PromoSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        match self.user {
            Some(_) => SessionPhase::Wheel,
            None => SessionPhase::Intake,
        }
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    /// Hands the record to the wheel. A record already in play is kept.
    pub fn accept(&mut self, user: UserInfo) -> bool {
        if self.user.is_some() {
            log::warn!("Ignoring second intake record for the current cycle");
            return false;
        }
        self.user = Some(user);
        true
    }

    pub fn handle_reset(&mut self, _signal: ResetSignal) {
        log::debug!("Discarding user record and returning to intake");
        self.user = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prize_engine::PrizeEngine;
    use crate::shared_wheel_game::{WheelGame, WheelPhase, SPIN_DURATION_MS};
    use crate::user_info::IntakeForm;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pat() -> UserInfo {
        UserInfo {
            first_name: "Pat".to_string(),
            last_name: "Doe".to_string(),
            email: "pat@example.com".to_string(),
            phone: "01/01/2000".to_string(),
        }
    }

    #[test]
    fn test_full_cycle() {
        let engine = PrizeEngine::default();
        let mut rng = StdRng::seed_from_u64(2024);
        let mut session = PromoSession::new();
        assert_eq!(session.phase(), SessionPhase::Intake);

        let mut form = IntakeForm::new();
        form.info = pat();
        form.agreed_to_terms = true;
        let record = form.submit().unwrap();
        assert_eq!(record, pat());

        assert!(session.accept(record));
        assert_eq!(session.phase(), SessionPhase::Wheel);
        assert_eq!(session.user(), Some(&pat()));

        let mut wheel = WheelGame::new();
        let pending = wheel.spin_with(&engine, &mut rng).unwrap();
        assert!(wheel.spin_with(&engine, &mut rng).is_none());
        assert_eq!(pending.delay_ms, SPIN_DURATION_MS);

        // Presentation delay elapses
        assert!(wheel.complete_spin(pending.ticket));
        assert_eq!(wheel.phase(), WheelPhase::Revealed);
        let winner = wheel.winner.clone().unwrap();
        assert!(engine.catalog().prizes().contains(&winner));

        let signal = wheel.reset();
        session.handle_reset(signal);
        assert_eq!(wheel.phase(), WheelPhase::Idle);
        assert_eq!(wheel.rotation, 0.0);
        assert_eq!(session.phase(), SessionPhase::Intake);
        assert!(session.user().is_none());
    }

    #[test]
    fn test_record_accepted_once_per_cycle() {
        let mut session = PromoSession::new();
        assert!(session.accept(pat()));
        let mut other = pat();
        other.first_name = "Sam".to_string();
        assert!(!session.accept(other));
        assert_eq!(session.user().unwrap().first_name, "Pat");

        let mut wheel = WheelGame::new();
        session.handle_reset(wheel.reset());
        assert!(session.accept(pat()));
    }

    #[test]
    fn test_intake_stays_closed_until_reset() {
        let mut session = PromoSession::new();
        assert!(session.accept(pat()));

        // Leaving the wheel without a reset keeps the cycle open
        let mut sam = pat();
        sam.first_name = "Sam".to_string();
        sam.email = "sam@example.com".to_string();
        assert_eq!(session.phase(), SessionPhase::Wheel);
        assert!(!session.accept(sam.clone()));
        assert_eq!(session.user().map(|u| u.email.as_str()), Some("pat@example.com"));

        session.handle_reset(WheelGame::new().reset());
        assert_eq!(session.phase(), SessionPhase::Intake);
        assert!(session.accept(sam));
        assert_eq!(session.user().map(|u| u.first_name.as_str()), Some("Sam"));
    }
}
