use crate::config;

/// Where the phone-verification sub-flow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerificationState {
    #[default]
    Idle,
    ChallengeSent,
    Verified,
}

/// Returned by a successful verification request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Challenge {
    pub resend: bool,
    pub attempt: u32,
}

/// The single verification ticket of a form session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerificationTicket {
    challenge_issued: bool,
    verified: bool,
    issued_count: u32,
}

impl VerificationTicket {
    pub fn state(&self) -> VerificationState {
        match (self.challenge_issued, self.verified) {
            (_, true) => VerificationState::Verified,
            (true, false) => VerificationState::ChallengeSent,
            (false, false) => VerificationState::Idle,
        }
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }

    pub fn is_outstanding(&self) -> bool {
        self.challenge_issued && !self.verified
    }

    /// Issues (or reissues) the challenge. `None` once verified.
    pub fn issue(&mut self) -> Option<Challenge> {
        if self.verified {
            return None;
        }
        let resend = self.challenge_issued;
        self.challenge_issued = true;
        self.issued_count += 1;
        Some(Challenge { resend, attempt: self.issued_count })
    }

    pub fn mark_verified(&mut self) {
        self.verified = true;
    }
}

/// Decides whether a code answers the challenge for a mobile number.
pub trait CodeVerifier {
    fn verify(&self, mobile: &str, code: &str) -> bool;
}

/// Accepts one fixed code for every number.
#[derive(Debug, Clone, PartialEq)]
pub struct MockCodeVerifier {
    reference: String,
}

impl MockCodeVerifier {
    pub fn new(reference: impl Into<String>) -> Self {
        Self { reference: reference.into() }
    }
}

impl Default for MockCodeVerifier {
    fn default() -> Self {
        Self::new(config::MOCK_OTP)
    }
}

impl CodeVerifier for MockCodeVerifier {
    fn verify(&self, _mobile: &str, code: &str) -> bool {
        code == self.reference
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_walks_the_state_machine() {
        let mut ticket = VerificationTicket::default();
        assert_eq!(ticket.state(), VerificationState::Idle);

        let first = ticket.issue().unwrap();
        assert_eq!(first, Challenge { resend: false, attempt: 1 });
        assert_eq!(ticket.state(), VerificationState::ChallengeSent);

        let again = ticket.issue().unwrap();
        assert_eq!(again, Challenge { resend: true, attempt: 2 });
        assert_eq!(ticket.state(), VerificationState::ChallengeSent);

        ticket.mark_verified();
        assert_eq!(ticket.state(), VerificationState::Verified);
        assert!(!ticket.is_outstanding());
        assert_eq!(ticket.issue(), None);
    }

    #[test]
    fn mock_verifier_matches_reference_only() {
        let verifier = MockCodeVerifier::default();
        assert!(verifier.verify("9876543210", "123456"));
        assert!(!verifier.verify("9876543210", "000000"));
        assert!(!verifier.verify("9876543210", "12345"));
        assert!(!verifier.verify("9876543210", ""));
    }
}
