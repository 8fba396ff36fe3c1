//! Contact form controller
//!
//! Owns the form values, the validation errors and the submission state for
//! one form instance. The relay request and the success auto-clear timer run
//! as tokio tasks and report back over a channel; the owner applies those
//! events with [`ContactController::poll`] or [`ContactController::settle`],
//! so every state change happens on the owner's thread.

use crate::relay::{RelayClientTrait, RelayError};
use crate::state::{
    validate, ContactField, ContactForm, Form, FormField, SubmissionState, ValidationErrors,
};
use chrono::Local;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use uuid::Uuid;

/// How long the success banner stays up
pub const SUCCESS_BANNER_DURATION: Duration = Duration::from_secs(5);

/// Result of asking the controller to submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Request is in flight
    Started,
    /// Validation failed; nothing was sent
    Invalid,
    /// A submission is already in flight
    Busy,
}

/// Completion notices from background tasks
#[derive(Debug)]
enum ControllerEvent {
    SubmissionFinished {
        id: Uuid,
        result: Result<(), RelayError>,
    },
    SuccessExpired {
        id: Uuid,
    },
}

pub struct ContactController {
    relay: Arc<dyn RelayClientTrait>,
    form: ContactForm,
    errors: ValidationErrors,
    submission: SubmissionState,
    success_delay: Duration,
    /// Id of the most recent submission; events for older ids are dropped
    current_id: Option<Uuid>,
    in_flight: Option<JoinHandle<()>>,
    success_timer: Option<JoinHandle<()>>,
    events_tx: UnboundedSender<ControllerEvent>,
    events_rx: UnboundedReceiver<ControllerEvent>,
}

impl ContactController {
    pub fn new(relay: Arc<dyn RelayClientTrait>, success_delay: Duration) -> Self {
        let (events_tx, events_rx) = unbounded_channel();
        Self {
            relay,
            form: ContactForm::new(),
            errors: ValidationErrors::new(),
            submission: SubmissionState::idle(),
            success_delay,
            current_id: None,
            in_flight: None,
            success_timer: None,
            events_tx,
            events_rx,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    /// Form controls are disabled while a request is in flight
    pub fn is_locked(&self) -> bool {
        self.submission.is_submitting()
    }

    pub fn next_field(&mut self) {
        self.form.next_field();
    }

    pub fn prev_field(&mut self) {
        self.form.prev_field();
    }

    pub fn focus(&mut self, field: ContactField) {
        self.form.set_active_field(field.index());
    }

    /// Apply an edit to one field and drop that field's error.
    ///
    /// Returns false when the form is locked and the edit was ignored.
    pub fn update_field(&mut self, field: ContactField, edit: impl FnOnce(&mut FormField)) -> bool {
        if self.is_locked() {
            return false;
        }
        edit(self.form.field_mut(field));
        self.errors.clear_field(field);
        true
    }

    /// Overwrite a text field's value
    pub fn set_field_text(&mut self, field: ContactField, value: impl Into<String>) -> bool {
        let value = value.into();
        self.update_field(field, |f| f.set_text(value))
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) -> bool {
        match self.form.active_contact_field() {
            Some(ContactField::Service) => false,
            Some(field) => self.update_field(field, |f| f.push_char(c)),
            None => false,
        }
    }

    pub fn backspace(&mut self) -> bool {
        match self.form.active_contact_field() {
            Some(field) => self.update_field(field, FormField::pop_char),
            None => false,
        }
    }

    /// Newline, only meaningful in the message field
    pub fn newline(&mut self) -> bool {
        match self.form.active_contact_field() {
            Some(ContactField::Message) => {
                self.update_field(ContactField::Message, |f| f.push_char('\n'))
            }
            _ => false,
        }
    }

    /// Step the service selector forward or backward
    pub fn cycle_service(&mut self, forward: bool) -> bool {
        self.update_field(ContactField::Service, |f| f.cycle_choice(forward))
    }

    /// Recompute all validation errors; true when the form is valid
    pub fn validate(&mut self) -> bool {
        self.errors = validate(&self.form);
        self.errors.is_empty()
    }

    /// Validate and, if clean, post the form to the relay in the background
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_locked() {
            tracing::debug!("Submit ignored, request already in flight");
            return SubmitOutcome::Busy;
        }
        if !self.validate() {
            tracing::debug!(errors = self.errors.len(), "Contact form failed validation");
            return SubmitOutcome::Invalid;
        }

        self.cancel_success_timer();
        self.submission = SubmissionState::submitting();

        let id = Uuid::new_v4();
        self.current_id = Some(id);
        let inquiry = self.form.to_inquiry();
        tracing::debug!(submission_id = %id, service = %inquiry.service, "Submitting inquiry to relay");

        let relay = Arc::clone(&self.relay);
        let tx = self.events_tx.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let result = relay.submit(&inquiry).await;
            let _ = tx.send(ControllerEvent::SubmissionFinished { id, result });
        }));

        SubmitOutcome::Started
    }

    /// Apply any finished background work without blocking.
    /// Returns true if state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.events_rx.try_recv() {
            changed |= self.apply(event);
        }
        changed
    }

    /// Wait for the next background event and apply it
    pub async fn settle(&mut self) -> bool {
        match self.events_rx.recv().await {
            Some(event) => self.apply(event),
            None => false,
        }
    }

    /// Hide the error banner, keeping the typed values
    pub fn dismiss_error(&mut self) {
        if self.submission.error().is_some() {
            self.submission = SubmissionState::idle();
        }
    }

    /// Cancel background work so nothing lands after the form goes away
    pub fn teardown(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        self.cancel_success_timer();
        self.current_id = None;
    }

    fn cancel_success_timer(&mut self) {
        if let Some(timer) = self.success_timer.take() {
            timer.abort();
        }
    }

    fn apply(&mut self, event: ControllerEvent) -> bool {
        match event {
            ControllerEvent::SubmissionFinished { id, result } => {
                if self.current_id != Some(id) {
                    return false;
                }
                self.in_flight = None;
                match result {
                    Ok(()) => {
                        tracing::debug!(submission_id = %id, "Inquiry delivered");
                        self.form.reset();
                        self.errors.clear();
                        self.submission = SubmissionState::succeeded(Local::now());
                        self.schedule_success_clear(id);
                    }
                    Err(err) => {
                        tracing::debug!(submission_id = %id, error = %err, "Inquiry submission failed");
                        self.submission = SubmissionState::failed(err.user_message());
                    }
                }
                true
            }
            ControllerEvent::SuccessExpired { id } => {
                if self.current_id != Some(id) || !self.submission.is_submitted() {
                    return false;
                }
                self.success_timer = None;
                self.submission = SubmissionState::idle();
                true
            }
        }
    }

    fn schedule_success_clear(&mut self, id: Uuid) {
        let tx = self.events_tx.clone();
        let delay = self.success_delay;
        self.success_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(ControllerEvent::SuccessExpired { id });
        }));
    }
}

impl Drop for ContactController {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::MockRelayClientTrait;
    use crate::state::{Inquiry, SubmissionPhase};
    use pretty_assertions::assert_eq;

    fn controller_with(mock: MockRelayClientTrait) -> ContactController {
        ContactController::new(Arc::new(mock), SUCCESS_BANNER_DURATION)
    }

    fn fill_valid(controller: &mut ContactController) {
        controller.set_field_text(ContactField::Name, "Anita Rao");
        controller.set_field_text(ContactField::Email, "anita@freightco.in");
        controller.set_field_text(ContactField::Phone, "+91 92393 80072");
        controller.cycle_service(true);
        controller.set_field_text(ContactField::Message, "Need weekly Pune-Delhi runs");
    }

    fn expected_inquiry() -> Inquiry {
        Inquiry {
            name: "Anita Rao".to_string(),
            email: "anita@freightco.in".to_string(),
            phone: "+91 92393 80072".to_string(),
            service: "fleet".to_string(),
            message: "Need weekly Pune-Delhi runs".to_string(),
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_edit_clears_only_that_fields_error() {
            let mut controller = controller_with(MockRelayClientTrait::new());
            assert!(!controller.validate());
            assert_eq!(controller.errors().len(), 3);

            controller.set_field_text(ContactField::Email, "x");

            assert!(controller.errors().get(ContactField::Email).is_none());
            assert!(controller.errors().get(ContactField::Name).is_some());
            assert!(controller.errors().get(ContactField::Message).is_some());
        }

        #[tokio::test]
        async fn test_edit_does_not_revalidate() {
            let mut controller = controller_with(MockRelayClientTrait::new());
            controller.validate();
            // Still too short, but the error stays cleared until the next pass
            controller.set_field_text(ContactField::Name, "A");
            assert!(controller.errors().get(ContactField::Name).is_none());
        }

        #[tokio::test]
        async fn test_typing_goes_to_focused_field() {
            let mut controller = controller_with(MockRelayClientTrait::new());
            controller.input_char('H');
            controller.input_char('i');
            controller.focus(ContactField::Message);
            controller.input_char('a');
            controller.newline();
            controller.input_char('b');
            controller.backspace();

            assert_eq!(controller.form().name.as_text(), "Hi");
            assert_eq!(controller.form().message.as_text(), "a\n");
        }

        #[tokio::test]
        async fn test_chars_ignored_on_service_and_send_row() {
            let mut controller = controller_with(MockRelayClientTrait::new());
            controller.focus(ContactField::Service);
            assert!(!controller.input_char('x'));
            controller.next_field();
            controller.next_field();
            assert!(controller.form().is_send_row_active());
            assert!(!controller.input_char('x'));
            assert!(!controller.newline());
        }
    }

    mod submitting {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_invalid_form_issues_no_request() {
            let mut mock = MockRelayClientTrait::new();
            mock.expect_submit().times(0);
            let mut controller = controller_with(mock);

            assert_eq!(controller.submit(), SubmitOutcome::Invalid);
            assert_eq!(controller.submission(), &SubmissionState::idle());
            assert!(!controller.errors().is_empty());
        }

        #[tokio::test]
        async fn test_success_posts_once_and_clears_form() {
            let mut mock = MockRelayClientTrait::new();
            mock.expect_submit()
                .withf(|inquiry: &Inquiry| *inquiry == expected_inquiry())
                .times(1)
                .returning(|_| Ok(()));
            let mut controller = controller_with(mock);
            fill_valid(&mut controller);

            assert_eq!(controller.submit(), SubmitOutcome::Started);
            assert!(controller.submission().is_submitting());
            assert_eq!(controller.submission().button_label(), "Sending...");

            assert!(controller.settle().await);

            assert!(controller.submission().is_submitted());
            assert!(!controller.submission().is_submitting());
            assert!(controller.form().is_empty());
            assert!(controller.errors().is_empty());
        }

        #[tokio::test]
        async fn test_second_submit_while_in_flight_is_noop() {
            let mut mock = MockRelayClientTrait::new();
            mock.expect_submit().times(1).returning(|_| Ok(()));
            let mut controller = controller_with(mock);
            fill_valid(&mut controller);

            assert_eq!(controller.submit(), SubmitOutcome::Started);
            assert_eq!(controller.submit(), SubmitOutcome::Busy);

            controller.settle().await;
            assert!(controller.submission().is_submitted());
        }

        #[tokio::test]
        async fn test_fields_locked_while_submitting() {
            let mut mock = MockRelayClientTrait::new();
            mock.expect_submit().times(1).returning(|_| Ok(()));
            let mut controller = controller_with(mock);
            fill_valid(&mut controller);
            controller.submit();

            assert!(controller.is_locked());
            assert!(!controller.set_field_text(ContactField::Name, "Someone Else"));
            assert!(!controller.cycle_service(true));
            assert_eq!(controller.form().name.as_text(), "Anita Rao");

            controller.settle().await;
            assert!(!controller.is_locked());
        }

        #[tokio::test]
        async fn test_rejection_keeps_fields_and_shows_server_error() {
            let mut mock = MockRelayClientTrait::new();
            mock.expect_submit().times(1).returning(|_| {
                Err(RelayError::Rejected {
                    status: 422,
                    message: Some("bad input".to_string()),
                })
            });
            let mut controller = controller_with(mock);
            fill_valid(&mut controller);

            controller.submit();
            controller.settle().await;

            assert_eq!(controller.submission().error(), Some("bad input"));
            assert!(!controller.submission().is_submitting());
            assert_eq!(controller.submission().phase(), SubmissionPhase::Failed);
            assert_eq!(controller.form().to_inquiry(), expected_inquiry());
        }

        #[tokio::test]
        async fn test_transport_failure_uses_generic_message() {
            let mut mock = MockRelayClientTrait::new();
            mock.expect_submit()
                .times(1)
                .returning(|_| Err(RelayError::Transport("connection reset".to_string())));
            let mut controller = controller_with(mock);
            fill_valid(&mut controller);

            controller.submit();
            controller.settle().await;

            let expected = RelayError::Transport(String::new()).user_message();
            assert_eq!(controller.submission().error(), Some(expected.as_str()));
            assert_eq!(controller.form().to_inquiry(), expected_inquiry());
        }

        #[tokio::test]
        async fn test_retry_after_failure() {
            let mut mock = MockRelayClientTrait::new();
            let mut seq = mockall::Sequence::new();
            mock.expect_submit()
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| {
                    Err(RelayError::Rejected {
                        status: 503,
                        message: None,
                    })
                });
            mock.expect_submit()
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(()));
            let mut controller = controller_with(mock);
            fill_valid(&mut controller);

            controller.submit();
            controller.settle().await;
            assert_eq!(controller.submission().phase(), SubmissionPhase::Failed);

            assert_eq!(controller.submit(), SubmitOutcome::Started);
            controller.settle().await;
            assert_eq!(controller.submission().phase(), SubmissionPhase::Succeeded);
        }

        #[tokio::test]
        async fn test_dismiss_error_returns_to_idle() {
            let mut mock = MockRelayClientTrait::new();
            mock.expect_submit().returning(|_| {
                Err(RelayError::Rejected {
                    status: 400,
                    message: None,
                })
            });
            let mut controller = controller_with(mock);
            fill_valid(&mut controller);
            controller.submit();
            controller.settle().await;

            controller.dismiss_error();
            assert_eq!(controller.submission().phase(), SubmissionPhase::Idle);
            assert!(!controller.form().is_empty());
        }
    }

    mod success_banner {
        use super::*;
        use pretty_assertions::assert_eq;
        use tokio::time::Instant;

        fn succeeding_controller() -> ContactController {
            let mut mock = MockRelayClientTrait::new();
            mock.expect_submit().returning(|_| Ok(()));
            controller_with(mock)
        }

        #[tokio::test(start_paused = true)]
        async fn test_banner_clears_after_five_seconds() {
            let mut controller = succeeding_controller();
            fill_valid(&mut controller);
            controller.submit();
            controller.settle().await;
            let shown_at = Instant::now();

            tokio::time::advance(Duration::from_secs(4)).await;
            controller.poll();
            assert!(controller.submission().is_submitted());

            assert!(controller.settle().await);
            assert!(!controller.submission().is_submitted());
            assert_eq!(controller.submission().phase(), SubmissionPhase::Idle);
            assert!(shown_at.elapsed() >= SUCCESS_BANNER_DURATION);
        }

        #[tokio::test(start_paused = true)]
        async fn test_teardown_cancels_pending_clear() {
            let mut controller = succeeding_controller();
            fill_valid(&mut controller);
            controller.submit();
            controller.settle().await;

            controller.teardown();
            tokio::time::advance(Duration::from_secs(10)).await;
            tokio::task::yield_now().await;

            assert!(!controller.poll());
            assert!(controller.submission().is_submitted());
        }

        #[tokio::test(start_paused = true)]
        async fn test_new_submission_cancels_old_timer() {
            let mut controller = succeeding_controller();
            fill_valid(&mut controller);
            controller.submit();
            controller.settle().await;

            tokio::time::advance(Duration::from_secs(3)).await;
            fill_valid(&mut controller);
            assert_eq!(controller.submit(), SubmitOutcome::Started);
            controller.settle().await;
            let second_shown_at = Instant::now();

            // Only the second timer remains, so the banner lasts a full five seconds
            controller.settle().await;
            assert!(!controller.submission().is_submitted());
            assert!(second_shown_at.elapsed() >= SUCCESS_BANNER_DURATION);
        }
    }

    mod teardown {
        use super::*;
        use async_trait::async_trait;
        use pretty_assertions::assert_eq;

        /// Relay that answers successfully after one second
        struct SlowRelay;

        #[async_trait]
        impl RelayClientTrait for SlowRelay {
            async fn submit(&self, _inquiry: &Inquiry) -> Result<(), RelayError> {
                tokio::time::sleep(Duration::from_secs(1)).await;
                Ok(())
            }
        }

        #[tokio::test(start_paused = true)]
        async fn test_teardown_aborts_in_flight_request() {
            let mut controller =
                ContactController::new(Arc::new(SlowRelay), SUCCESS_BANNER_DURATION);
            fill_valid(&mut controller);
            assert_eq!(controller.submit(), SubmitOutcome::Started);
            assert!(controller.is_locked());

            controller.teardown();
            tokio::time::advance(Duration::from_secs(10)).await;
            tokio::task::yield_now().await;

            assert!(!controller.poll());
            assert!(!controller.submission().is_submitted());
            assert!(!controller.form().is_empty());
        }

        #[tokio::test(start_paused = true)]
        async fn test_slow_request_completes_without_teardown() {
            let mut controller =
                ContactController::new(Arc::new(SlowRelay), SUCCESS_BANNER_DURATION);
            fill_valid(&mut controller);
            controller.submit();

            assert!(controller.settle().await);
            assert!(controller.submission().is_submitted());
        }
    }
}
