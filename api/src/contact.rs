use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::email::Delivery;

// how long a success or error banner stays up before the form returns to idle
pub const STATUS_RESET_MS: u32 = 5_000;

// how long demo mode pretends to be sending
pub const DEMO_DELAY_MS: u32 = 1_500;

// counted in characters, after trimming
pub const MIN_MESSAGE_LEN: usize = 10;

// deliberately loose, this only catches obvious typos
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

// structs and types

// the three values sent to the mail service
//
// these double as the template parameters, so the field names are part of the
// contract with the email template
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn clear(&mut self, field: Field) {
        *self.slot_mut(field) = None;
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

// validation

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email.trim())
}

pub fn validate(fields: &ContactMessage) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if fields.name.trim().is_empty() {
        errors.name = Some("Name is required".into());
    }

    let email = fields.email.trim();
    if email.is_empty() {
        errors.email = Some("Email is required".into());
    } else if !is_valid_email(email) {
        errors.email = Some("Please enter a valid email address".into());
    }

    let message = fields.message.trim();
    if message.is_empty() {
        errors.message = Some("Message is required".into());
    } else if message.chars().count() < MIN_MESSAGE_LEN {
        errors.message = Some(format!(
            "Message must be at least {MIN_MESSAGE_LEN} characters"
        ));
    }

    errors
}

// form state
//
// the lifecycle is idle -> submitting -> (success | error) -> idle.  the webapp
// owns the timers and the async send, this just enforces the transitions:
//
//   begin_submit()  validates and hands back the message to send, if any
//   finish()        records the outcome of the send
//   settle()        drops a finished banner back to idle
//
// every accepted submit bumps the submission counter, and settle() is keyed on it
// so a revert timer left over from an earlier send is a no-op
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub fields: ContactMessage,
    pub errors: FieldErrors,
    pub status: SubmitStatus,
    submission: u64,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.fields.name,
            Field::Email => &self.fields.email,
            Field::Message => &self.fields.message,
        }
    }

    // only the edited field loses its error
    pub fn edit(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Message => self.fields.message = value,
        }

        self.errors.clear(field);
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn submission(&self) -> u64 {
        self.submission
    }

    // returns None if a send is already in flight or validation failed, in which
    // case nothing should be sent
    pub fn begin_submit(&mut self) -> Option<ContactMessage> {
        if self.is_submitting() {
            return None;
        }

        self.errors = validate(&self.fields);
        if !self.errors.is_empty() {
            self.status = SubmitStatus::Idle;
            return None;
        }

        self.status = SubmitStatus::Submitting;
        self.submission += 1;

        Some(ContactMessage {
            name: self.fields.name.trim().to_owned(),
            email: self.fields.email.trim().to_owned(),
            message: self.fields.message.trim().to_owned(),
        })
    }

    // a failed send keeps whatever the user typed so they can retry or copy it
    pub fn finish(&mut self, outcome: &anyhow::Result<Delivery>) {
        match outcome {
            Ok(_) => {
                self.fields = ContactMessage::default();
                self.status = SubmitStatus::Success;
            }
            Err(_) => self.status = SubmitStatus::Error,
        }
    }

    // submission is the value of submission() when the banner went up
    pub fn settle(&mut self, submission: u64) {
        if submission != self.submission {
            return;
        }

        if matches!(self.status, SubmitStatus::Success | SubmitStatus::Error) {
            self.status = SubmitStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use async_trait::async_trait;
    use futures::executor::block_on;

    use super::*;
    use crate::email::{Mailer, Transport};

    // records every message it is asked to send
    struct RecordingMailer {
        calls: Cell<usize>,
        fail: bool,
    }

    impl RecordingMailer {
        fn new(fail: bool) -> Self {
            RecordingMailer {
                calls: Cell::new(0),
                fail,
            }
        }
    }

    #[async_trait(?Send)]
    impl Mailer for RecordingMailer {
        async fn send(&self, _message: &ContactMessage) -> anyhow::Result<Delivery> {
            self.calls.set(self.calls.get() + 1);

            if self.fail {
                Err(anyhow::Error::msg("service unavailable"))
            } else {
                Ok(Delivery::Sent("OK".into()))
            }
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.edit(Field::Name, "Ada".into());
        form.edit(Field::Email, "ada@example.com".into());
        form.edit(Field::Message, "Hello there, nice site!".into());
        form
    }

    // the same sequence the contact section runs, handing back the send outcome
    fn submit(form: &mut ContactForm, mailer: &dyn Mailer) -> Option<anyhow::Result<Delivery>> {
        let message = form.begin_submit()?;
        let outcome = block_on(mailer.send(&message));
        form.finish(&outcome);
        Some(outcome)
    }

    #[test]
    fn email_shape() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("  first.last@sub.example.org "));
    }

    #[test]
    fn message_length_boundary() {
        let mut fields = filled().fields;

        fields.message = "  123456789  ".into();
        assert!(validate(&fields).message.is_some());

        fields.message = "  1234567890  ".into();
        assert!(validate(&fields).message.is_none());
    }

    #[test]
    fn each_empty_field_blocks_the_send() {
        for field in [Field::Name, Field::Email, Field::Message] {
            let mut form = filled();
            form.edit(field, "   ".into());

            let mailer = RecordingMailer::new(false);
            submit(&mut form, &mailer);

            assert!(form.errors.get(field).is_some(), "{field:?} should error");
            assert!(!form.errors.is_empty());
            assert_eq!(form.status, SubmitStatus::Idle);
            assert_eq!(mailer.calls.get(), 0);
        }
    }

    #[test]
    fn editing_clears_only_that_error() {
        let mut form = ContactForm::default();
        assert!(form.begin_submit().is_none());
        assert!(form.errors.name.is_some());
        assert!(form.errors.email.is_some());
        assert!(form.errors.message.is_some());

        form.edit(Field::Email, "x".into());

        assert!(form.errors.name.is_some());
        assert!(form.errors.email.is_none());
        assert!(form.errors.message.is_some());
    }

    #[test]
    fn successful_send_clears_fields_then_settles() {
        let mut form = filled();
        let mailer = RecordingMailer::new(false);

        submit(&mut form, &mailer);

        assert_eq!(mailer.calls.get(), 1);
        assert_eq!(form.fields, ContactMessage::default());
        assert_eq!(form.status, SubmitStatus::Success);

        form.settle(form.submission());
        assert_eq!(form.status, SubmitStatus::Idle);
    }

    #[test]
    fn failed_send_keeps_fields() {
        let mut form = filled();
        let before = form.fields.clone();
        let mailer = RecordingMailer::new(true);

        submit(&mut form, &mailer);

        assert_eq!(mailer.calls.get(), 1);
        assert_eq!(form.status, SubmitStatus::Error);
        assert_eq!(form.fields, before);

        form.settle(form.submission());
        assert_eq!(form.status, SubmitStatus::Idle);
        assert_eq!(form.fields, before);
    }

    #[test]
    fn simulated_send_counts_as_success() {
        let transport = Transport::from_config(None).with_demo_delay(0);
        assert!(transport.is_simulated());

        let mut form = filled();
        let outcome = submit(&mut form, &transport).expect("valid form is sent");

        assert_eq!(outcome.expect("demo send never fails"), Delivery::Simulated);
        assert_eq!(form.fields, ContactMessage::default());
        assert_eq!(form.status, SubmitStatus::Success);
    }

    #[test]
    fn stale_revert_leaves_a_newer_banner_up() {
        let mut form = filled();
        let mailer = RecordingMailer::new(false);

        submit(&mut form, &mailer);
        let first = form.submission();

        // resubmitted while the first banner is still showing
        form.fields = filled().fields;
        submit(&mut form, &mailer);
        assert_eq!(mailer.calls.get(), 2);
        assert_eq!(form.status, SubmitStatus::Success);

        form.settle(first);
        assert_eq!(form.status, SubmitStatus::Success);

        form.settle(form.submission());
        assert_eq!(form.status, SubmitStatus::Idle);
    }

    #[test]
    fn second_submit_while_sending_is_ignored() {
        let mut form = filled();

        let first = form.begin_submit();
        assert!(first.is_some());
        assert!(form.is_submitting());

        assert!(form.begin_submit().is_none());
        assert!(form.is_submitting());
    }

    #[test]
    fn submitted_values_are_trimmed() {
        let mut form = ContactForm::default();
        form.edit(Field::Name, "  Ada ".into());
        form.edit(Field::Email, " ada@example.com".into());
        form.edit(Field::Message, "Hello there, nice site!\n".into());

        let message = form.begin_submit().expect("valid form");

        assert_eq!(message.name, "Ada");
        assert_eq!(message.email, "ada@example.com");
        assert_eq!(message.message, "Hello there, nice site!");
    }

    #[test]
    fn settle_leaves_submitting_alone() {
        let mut form = filled();
        form.begin_submit();

        form.settle(form.submission());

        assert_eq!(form.status, SubmitStatus::Submitting);
    }
}
