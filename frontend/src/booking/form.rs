use std::cell::RefCell;

use log::{error, info};

use crate::booking::lead::{is_valid_mobile, Field, FieldErrors, FieldValue, LeadRecord, SubmittedLead, INVALID_MOBILE};
use crate::booking::notify::{Notification, Notifier};
use crate::booking::sink::{LeadSink, SubmitError};
use crate::booking::verification::{Challenge, CodeVerifier, VerificationState, VerificationTicket};

/// Result of a full submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Preconditions did not hold; nothing was sent.
    Skipped,
    Submitted,
    Failed(SubmitError),
}

/// State of one booking form: the record, its errors, the verification ticket
/// and whether a submission is in flight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadForm {
    record: LeadRecord,
    errors: FieldErrors,
    ticket: VerificationTicket,
    busy: bool,
}

impl LeadForm {
    pub fn record(&self) -> &LeadRecord {
        &self.record
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn verification(&self) -> VerificationState {
        self.ticket.state()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn can_submit(&self) -> bool {
        self.ticket.is_verified() && !self.busy
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<FieldValue>) {
        if field == Field::Mobile && self.ticket.is_verified() {
            return;
        }
        self.record.set(field, value.into());
        self.errors.clear(field);
    }

    /// Issues (or re-issues) a challenge for the current mobile and tells the user it was sent.
    pub fn request_verification(&mut self, notifier: &dyn Notifier) -> Option<Challenge> {
        if !is_valid_mobile(&self.record.mobile) {
            self.errors.insert(Field::Mobile, INVALID_MOBILE);
            return None;
        }
        let challenge = self.ticket.issue()?;
        info!(
            "Verification challenge issued (attempt {}, resend: {})",
            challenge.attempt, challenge.resend
        );
        notifier.notify(Notification::otp_sent());
        Some(challenge)
    }

    pub fn submit_verification_code(
        &mut self,
        code: &str,
        verifier: &dyn CodeVerifier,
        notifier: &dyn Notifier,
    ) -> VerificationState {
        if !self.ticket.is_outstanding() {
            return self.ticket.state();
        }
        if verifier.verify(&self.record.mobile, code) {
            self.ticket.mark_verified();
            info!("Mobile number verified");
            notifier.notify(Notification::otp_verified());
        } else {
            info!("Verification code rejected");
            notifier.notify(Notification::otp_invalid());
        }
        self.ticket.state()
    }

    /// Re-checks every field from scratch. Says nothing about verification.
    pub fn validate(&mut self) -> bool {
        self.errors = self.record.validate();
        self.errors.is_empty()
    }

    /// First half of a submission: checks the preconditions and marks the form busy.
    pub fn begin_submit(&mut self) -> Option<SubmittedLead> {
        if self.busy {
            return None;
        }
        if !self.validate() || !self.ticket.is_verified() {
            return None;
        }
        self.busy = true;
        Some(self.record.stamp())
    }

    /// Second half: reports the collaborator's answer and resets the form on success.
    pub fn complete_submit(&mut self, result: Result<(), SubmitError>, notifier: &dyn Notifier) -> SubmitOutcome {
        self.busy = false;
        match result {
            Ok(()) => {
                info!("Test ride booking submitted");
                notifier.notify(Notification::submit_success());
                *self = LeadForm::default();
                SubmitOutcome::Submitted
            }
            Err(e) => {
                error!("Form submission error: {}", e);
                notifier.notify(Notification::submit_error());
                SubmitOutcome::Failed(e)
            }
        }
    }
}

/// Runs a whole submission against `sink`. The form is only borrowed around the await.
/// `started` fires once the form is busy, before the sink is awaited.
pub async fn submit<S, F>(form: &RefCell<LeadForm>, sink: &S, notifier: &dyn Notifier, started: F) -> SubmitOutcome
where
    S: LeadSink + ?Sized,
    F: FnOnce(),
{
    let lead = form.borrow_mut().begin_submit();
    let lead = match lead {
        Some(lead) => lead,
        None => return SubmitOutcome::Skipped,
    };
    started();
    let result = sink.submit(&lead).await;
    form.borrow_mut().complete_submit(result, notifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::notify::{RecordingNotifier, Severity, ToastPosition};
    use crate::booking::verification::MockCodeVerifier;
    use async_trait::async_trait;
    use futures::executor::block_on;

    #[derive(Default)]
    struct CapturingSink {
        received: RefCell<Vec<SubmittedLead>>,
        fail_with: Option<SubmitError>,
    }

    #[async_trait(?Send)]
    impl LeadSink for CapturingSink {
        async fn submit(&self, lead: &SubmittedLead) -> Result<(), SubmitError> {
            self.received.borrow_mut().push(lead.clone());
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    fn filled() -> LeadForm {
        let mut form = LeadForm::default();
        form.update_field(Field::Name, "Asha Rao");
        form.update_field(Field::Mobile, "9876543210");
        form.update_field(Field::Email, "asha@example.com");
        form.update_field(Field::Pincode, "560001");
        form.update_field(Field::TermsAccepted, true);
        form
    }

    fn verified() -> LeadForm {
        let mut form = filled();
        form.request_verification(&RecordingNotifier::default()).unwrap();
        form.submit_verification_code("123456", &MockCodeVerifier::default(), &RecordingNotifier::default());
        form
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut form = LeadForm::default();
        assert!(!form.validate());
        assert_eq!(form.errors().len(), 5);

        form.update_field(Field::Email, "x");
        assert!(!form.errors().contains(Field::Email));
        assert!(form.errors().contains(Field::Name));
        assert!(form.errors().contains(Field::Mobile));
        assert!(form.errors().contains(Field::Pincode));
        assert!(form.errors().contains(Field::TermsAccepted));
        assert_eq!(form.errors().len(), 4);
    }

    #[test]
    fn editing_does_not_validate_early() {
        let mut form = LeadForm::default();
        form.update_field(Field::Email, "not-an-email");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn valid_mobile_issues_a_challenge() {
        let mut form = LeadForm::default();
        form.update_field(Field::Mobile, "9876543210");
        let notifier = RecordingNotifier::default();
        let challenge = form.request_verification(&notifier).unwrap();
        assert!(!challenge.resend);
        assert_eq!(form.verification(), VerificationState::ChallengeSent);
        assert!(form.errors().is_empty());

        let sent = notifier.sent();
        assert_eq!(sent, vec![Notification::otp_sent()]);
        assert_eq!(sent[0].severity, Severity::Info);
        assert_eq!(sent[0].position, ToastPosition::TopRight);
    }

    #[test]
    fn bad_leading_digit_stays_idle_with_error() {
        let mut form = LeadForm::default();
        form.update_field(Field::Mobile, "1234567890");
        let notifier = RecordingNotifier::default();
        assert_eq!(form.request_verification(&notifier), None);
        assert!(notifier.sent().is_empty());
        assert_eq!(form.verification(), VerificationState::Idle);
        assert_eq!(form.errors().get(Field::Mobile), Some(INVALID_MOBILE));
    }

    #[test]
    fn missing_mobile_stays_idle_with_error() {
        let mut form = LeadForm::default();
        let notifier = RecordingNotifier::default();
        assert_eq!(form.request_verification(&notifier), None);
        assert!(notifier.sent().is_empty());
        assert_eq!(form.errors().get(Field::Mobile), Some(INVALID_MOBILE));
        assert_eq!(form.errors().len(), 1);
    }

    #[test]
    fn second_request_is_a_resend() {
        let mut form = LeadForm::default();
        form.update_field(Field::Mobile, "9876543210");
        let notifier = RecordingNotifier::default();
        form.request_verification(&notifier);
        let again = form.request_verification(&notifier).unwrap();
        assert!(again.resend);
        assert_eq!(notifier.sent(), vec![Notification::otp_sent(), Notification::otp_sent()]);
        assert_eq!(form.verification(), VerificationState::ChallengeSent);
    }

    #[test]
    fn correct_code_verifies() {
        let mut form = filled();
        form.request_verification(&RecordingNotifier::default());
        let notifier = RecordingNotifier::default();
        let state = form.submit_verification_code("123456", &MockCodeVerifier::default(), &notifier);
        assert_eq!(state, VerificationState::Verified);
        assert_eq!(notifier.sent(), vec![Notification::otp_verified()]);
    }

    #[test]
    fn wrong_code_stays_pending_and_notifies_failure() {
        let mut form = filled();
        form.request_verification(&RecordingNotifier::default());
        let notifier = RecordingNotifier::default();
        let state = form.submit_verification_code("000000", &MockCodeVerifier::default(), &notifier);
        assert_eq!(state, VerificationState::ChallengeSent);
        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].severity, Severity::Error);

        let partial = form.submit_verification_code("123", &MockCodeVerifier::default(), &notifier);
        assert_eq!(partial, VerificationState::ChallengeSent);
        assert_eq!(notifier.sent().len(), 2);
    }

    #[test]
    fn code_without_challenge_is_ignored() {
        let mut form = filled();
        let notifier = RecordingNotifier::default();
        let state = form.submit_verification_code("123456", &MockCodeVerifier::default(), &notifier);
        assert_eq!(state, VerificationState::Idle);
        assert!(notifier.sent().is_empty());
    }

    #[test]
    fn verified_mobile_is_immutable() {
        let mut form = verified();
        form.update_field(Field::Mobile, "7000000000");
        form.update_field(Field::Mobile, "");
        assert_eq!(form.record().mobile, "9876543210");
        let notifier = RecordingNotifier::default();
        assert_eq!(form.request_verification(&notifier), None);
        assert!(notifier.sent().is_empty());
        assert_eq!(form.verification(), VerificationState::Verified);
    }

    #[test]
    fn begin_submit_requires_verification() {
        let mut form = filled();
        assert!(form.begin_submit().is_none());
        assert!(!form.is_busy());
        assert!(!form.can_submit());
    }

    #[test]
    fn begin_submit_requires_valid_record() {
        let mut form = verified();
        form.update_field(Field::TermsAccepted, false);
        assert!(form.begin_submit().is_none());
        assert!(form.errors().contains(Field::TermsAccepted));
    }

    #[test]
    fn busy_form_refuses_a_second_submit() {
        let mut form = verified();
        assert!(form.begin_submit().is_some());
        assert!(form.is_busy());
        assert!(!form.can_submit());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn submit_forwards_one_stamped_record_and_resets() {
        let form = RefCell::new(verified());
        let sink = CapturingSink::default();
        let notifier = RecordingNotifier::default();

        let outcome = block_on(submit(&form, &sink, &notifier, || ()));
        assert_eq!(outcome, SubmitOutcome::Submitted);

        let received = sink.received.borrow();
        assert_eq!(received.len(), 1);
        let lead = &received[0];
        assert_eq!(lead.lead.name, "Asha Rao");
        assert_eq!(lead.lead.mobile, "9876543210");
        assert_eq!(lead.lead.email, "asha@example.com");
        assert_eq!(lead.lead.pincode, "560001");
        assert!(lead.lead.terms_accepted);
        assert!(!lead.timestamp.is_empty());

        assert_eq!(notifier.sent(), vec![Notification::submit_success()]);
        assert_eq!(*form.borrow(), LeadForm::default());
    }

    #[test]
    fn submit_without_verification_is_a_no_op() {
        let form = RefCell::new(filled());
        let sink = CapturingSink::default();
        let notifier = RecordingNotifier::default();

        assert_eq!(block_on(submit(&form, &sink, &notifier, || ())), SubmitOutcome::Skipped);
        assert!(sink.received.borrow().is_empty());
        assert!(notifier.sent().is_empty());
    }

    #[test]
    fn failed_submit_keeps_the_record() {
        let form = RefCell::new(verified());
        let sink = CapturingSink { fail_with: Some(SubmitError::Status(500)), ..Default::default() };
        let notifier = RecordingNotifier::default();

        let outcome = block_on(submit(&form, &sink, &notifier, || ()));
        assert_eq!(outcome, SubmitOutcome::Failed(SubmitError::Status(500)));
        assert_eq!(notifier.sent(), vec![Notification::submit_error()]);

        let form = form.borrow();
        assert_eq!(form.record().name, "Asha Rao");
        assert_eq!(form.verification(), VerificationState::Verified);
        assert!(form.can_submit());
    }
}
