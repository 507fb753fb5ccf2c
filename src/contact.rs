//! Contact form state and the mail handoff protocol.
//!
//! Nothing is sent from the page itself. Submitting builds a `mailto:` URI
//! and asks the browser to open it, which hands the message to whatever
//! mail client the visitor has registered. [`SubmissionStatus::Submitted`]
//! therefore means "the handoff was requested without a local error", never
//! "the message was delivered".

use std::fmt;
use std::str::FromStr;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

use crate::config::SiteConfig;

/// Characters left as-is when encoding a URI component: ASCII alphanumerics
/// and `- _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Mail handoff failed: {reason}")]
    SubmissionHandoffFailed { reason: String },
    #[error("Unknown form field: {0}")]
    UnknownField(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    /// DOM id of the input, also the identifier carried by input events.
    pub fn id(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }

    /// Enforced by the browser through the `required` attribute.
    pub fn is_required(self) -> bool {
        !matches!(self, FormField::Subject)
    }
}

impl FromStr for FormField {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|f| f.id() == s)
            .ok_or_else(|| ContactError::UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl ContactForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    /// Stores `value` verbatim; no validation happens while typing.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The subject as typed, or `fallback` when the field is empty.
    pub fn effective_subject<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.subject.is_empty() {
            fallback
        } else {
            &self.subject
        }
    }

    /// Message body before encoding.
    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\n{}",
            self.name, self.email, self.message
        )
    }
}

/// Percent-encodes `s` for use as a single URI component (query value).
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

pub fn mailto_uri(form: &ContactForm, config: &SiteConfig) -> String {
    let subject = encode_component(form.effective_subject(&config.fallback_subject));
    let body = encode_component(&form.body());
    format!(
        "mailto:{}?subject={}&body={}",
        config.recipient, subject, body
    )
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Errored,
}

impl SubmissionStatus {
    pub fn is_submitting(self) -> bool {
        self == SubmissionStatus::Submitting
    }

    pub fn is_submitted(self) -> bool {
        self == SubmissionStatus::Submitted
    }

    pub fn is_errored(self) -> bool {
        self == SubmissionStatus::Errored
    }
}

/// Identifies one press of the submit button. Later attempts compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Attempt(u64);

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owns the submission status and remembers which attempt is current.
///
/// The success transition is applied after a delay, so by the time it fires
/// the visitor may already have submitted again. Only the latest attempt is
/// allowed to move the status; anything older is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionTracker {
    status: SubmissionStatus,
    issued: u64,
}

impl SubmissionTracker {
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_current(&self, attempt: Attempt) -> bool {
        attempt.0 == self.issued
    }

    /// Starts a new attempt; the status becomes `Submitting`.
    pub fn begin(&mut self) -> Attempt {
        self.issued += 1;
        self.status = SubmissionStatus::Submitting;
        Attempt(self.issued)
    }

    /// Delayed success transition. Returns whether it was applied.
    pub fn settle(&mut self, attempt: Attempt) -> bool {
        if self.is_current(attempt) && self.status.is_submitting() {
            self.status = SubmissionStatus::Submitted;
            true
        } else {
            false
        }
    }

    /// Returns whether the failure was recorded.
    pub fn fail(&mut self, attempt: Attempt) -> bool {
        if self.is_current(attempt) {
            self.status = SubmissionStatus::Errored;
            true
        } else {
            false
        }
    }
}

/// Hands a composed `mailto:` URI to something that can open it.
pub trait MailHandoff {
    fn hand_off(&self, uri: &str) -> Result<(), ContactError>;
}

/// Runs one submission up to the point where success is pending.
///
/// On success the form is cleared and the returned attempt must be passed to
/// [`SubmissionTracker::settle`] once the success delay has elapsed. On
/// failure the tracker is already `Errored` and the form keeps its values so
/// the visitor can retry.
pub fn submit<H>(
    form: &mut ContactForm,
    tracker: &mut SubmissionTracker,
    config: &SiteConfig,
    handoff: &H,
) -> Result<Attempt, ContactError>
where
    H: MailHandoff + ?Sized,
{
    let attempt = tracker.begin();
    let uri = mailto_uri(form, config);
    if let Err(err) = handoff.hand_off(&uri) {
        tracker.fail(attempt);
        return Err(err);
    }
    form.clear();
    log::debug!("contact attempt {} handed off to mail client", attempt);
    Ok(attempt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingHandoff {
        uris: RefCell<Vec<String>>,
    }

    impl MailHandoff for RecordingHandoff {
        fn hand_off(&self, uri: &str) -> Result<(), ContactError> {
            self.uris.borrow_mut().push(uri.to_string());
            Ok(())
        }
    }

    struct FailingHandoff;

    impl MailHandoff for FailingHandoff {
        fn hand_off(&self, _uri: &str) -> Result<(), ContactError> {
            Err(ContactError::SubmissionHandoffFailed {
                reason: "no mail handler".to_string(),
            })
        }
    }

    fn filled(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::default();
        form.set(FormField::Name, name);
        form.set(FormField::Email, email);
        form.set(FormField::Subject, subject);
        form.set(FormField::Message, message);
        form
    }

    // Splits a mailto URI into its decoded subject and body
    fn decode_query(uri: &str) -> (String, String) {
        let (_, query) = uri.split_once('?').expect("mailto should have a query");
        let (subject, body) = query.split_once("&body=").expect("body param");
        let subject = subject.strip_prefix("subject=").expect("subject param");
        let decode = |s: &str| percent_decode_str(s).decode_utf8().unwrap().into_owned();
        (decode(subject), decode(body))
    }

    #[test]
    fn test_concrete_mailto_uri() {
        let form = filled("Ada", "ada@example.com", "", "Hello");
        assert_eq!(
            mailto_uri(&form, &SiteConfig::default()),
            "mailto:giovanni.podbersig@outlook.it?subject=Portfolio%20Contact%20Form&body=Name%3A%20Ada%0AEmail%3A%20ada%40example.com%0A%0AHello"
        );
    }

    #[test]
    fn test_empty_subject_uses_fallback() {
        let form = filled("Ada", "ada@example.com", "", "Hi");
        assert_eq!(form.effective_subject("Portfolio Contact Form"), "Portfolio Contact Form");

        let (subject, _) = decode_query(&mailto_uri(&form, &SiteConfig::default()));
        assert_eq!(subject, "Portfolio Contact Form");
    }

    #[test]
    fn test_subject_is_used_verbatim() {
        for raw in ["Job offer", "  padded  ", "a&b=c?d", "Caffè ☕", "100% sure + more"] {
            let form = filled("Ada", "ada@example.com", raw, "Hi");
            let (subject, _) = decode_query(&mailto_uri(&form, &SiteConfig::default()));
            assert_eq!(subject, raw);
        }
    }

    #[test]
    fn test_body_round_trips_template() {
        let form = filled("Grace Hopper", "grace@navy.mil", "", "Line one\nLine two & more");
        let (_, body) = decode_query(&mailto_uri(&form, &SiteConfig::default()));
        assert_eq!(
            body,
            "Name: Grace Hopper\nEmail: grace@navy.mil\n\nLine one\nLine two & more"
        );
    }

    #[test]
    fn test_encode_component_rules() {
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("&=?+#/"), "%26%3D%3F%2B%23%2F");
        assert_eq!(encode_component("é"), "%C3%A9");
        assert_eq!(encode_component("\n"), "%0A");
    }

    #[test]
    fn test_field_ids() {
        for field in FormField::ALL {
            assert_eq!(field.id().parse::<FormField>(), Ok(field));
        }
        assert_eq!(
            "phone".parse::<FormField>(),
            Err(ContactError::UnknownField("phone".to_string()))
        );
    }

    #[test]
    fn test_set_leaves_other_fields() {
        let mut form = filled("Ada", "ada@example.com", "Hi", "Hello");
        form.set(FormField::Email, "ada@lovelace.dev");
        assert_eq!(form.get(FormField::Name), "Ada");
        assert_eq!(form.get(FormField::Email), "ada@lovelace.dev");
        assert_eq!(form.get(FormField::Subject), "Hi");
        assert_eq!(form.get(FormField::Message), "Hello");
    }

    #[test]
    fn test_only_subject_is_optional() {
        let optional = FormField::ALL
            .into_iter()
            .filter(|f| !f.is_required())
            .collect::<Vec<_>>();
        assert_eq!(optional, vec![FormField::Subject]);
    }

    #[test]
    fn test_submit_clears_fields_and_hands_off() {
        let mut form = filled("Ada", "ada@example.com", "Hi", "Hello");
        let mut tracker = SubmissionTracker::default();
        let handoff = RecordingHandoff::default();

        submit(&mut form, &mut tracker, &SiteConfig::default(), &handoff).unwrap();

        for field in FormField::ALL {
            assert_eq!(form.get(field), "");
        }
        let uris = handoff.uris.borrow();
        assert_eq!(uris.len(), 1);
        assert!(uris[0].starts_with("mailto:giovanni.podbersig@outlook.it?subject=Hi&body="));
    }

    #[test]
    fn test_status_transitions() {
        let mut form = filled("Ada", "ada@example.com", "", "Hello");
        let mut tracker = SubmissionTracker::default();
        assert_eq!(tracker.status(), SubmissionStatus::Idle);

        let attempt =
            submit(&mut form, &mut tracker, &SiteConfig::default(), &RecordingHandoff::default())
                .unwrap();
        let status = tracker.status();
        assert!(status.is_submitting() && !status.is_submitted() && !status.is_errored());

        assert!(tracker.settle(attempt));
        let status = tracker.status();
        assert!(!status.is_submitting() && status.is_submitted() && !status.is_errored());
    }

    #[test]
    fn test_failed_handoff_is_never_reported_as_sent() {
        let mut form = filled("Ada", "ada@example.com", "", "Hello");
        let mut tracker = SubmissionTracker::default();

        let err = submit(&mut form, &mut tracker, &SiteConfig::default(), &FailingHandoff)
            .unwrap_err();
        assert!(matches!(err, ContactError::SubmissionHandoffFailed { .. }));
        assert_eq!(tracker.status(), SubmissionStatus::Errored);
        // fields survive so the visitor can retry
        assert_eq!(form.get(FormField::Message), "Hello");

        // a settle for the failed attempt, if one were ever scheduled, is a no-op
        let failed = Attempt(tracker.issued);
        assert!(!tracker.settle(failed));
        assert_eq!(tracker.status(), SubmissionStatus::Errored);
    }

    // The delayed success of an earlier attempt must not overwrite the status
    // of a later one. Stale settles are dropped instead of reproducing the race.
    #[test]
    fn test_stale_settle_does_not_override_newer_attempt() {
        let config = SiteConfig::default();
        let handoff = RecordingHandoff::default();
        let mut tracker = SubmissionTracker::default();

        let mut form = filled("Ada", "ada@example.com", "", "first");
        let first = submit(&mut form, &mut tracker, &config, &handoff).unwrap();

        let mut form = filled("Ada", "ada@example.com", "", "second");
        let second = submit(&mut form, &mut tracker, &config, &handoff).unwrap();
        assert!(first < second);

        assert!(!tracker.settle(first));
        assert_eq!(tracker.status(), SubmissionStatus::Submitting);

        assert!(tracker.settle(second));
        assert_eq!(tracker.status(), SubmissionStatus::Submitted);
    }

    #[test]
    fn test_stale_settle_after_newer_failure() {
        let config = SiteConfig::default();
        let mut tracker = SubmissionTracker::default();

        let mut form = filled("Ada", "ada@example.com", "", "first");
        let first = submit(&mut form, &mut tracker, &config, &RecordingHandoff::default()).unwrap();

        let mut form = filled("Ada", "ada@example.com", "", "second");
        assert!(submit(&mut form, &mut tracker, &config, &FailingHandoff).is_err());

        assert!(!tracker.settle(first));
        assert_eq!(tracker.status(), SubmissionStatus::Errored);
    }

    #[test]
    fn test_resubmit_after_success_restarts() {
        let config = SiteConfig::default();
        let handoff = RecordingHandoff::default();
        let mut tracker = SubmissionTracker::default();

        let mut form = filled("Ada", "ada@example.com", "", "one");
        let attempt = submit(&mut form, &mut tracker, &config, &handoff).unwrap();
        tracker.settle(attempt);

        form = filled("Ada", "ada@example.com", "", "two");
        submit(&mut form, &mut tracker, &config, &handoff).unwrap();
        assert_eq!(tracker.status(), SubmissionStatus::Submitting);
        assert_eq!(handoff.uris.borrow().len(), 2);
    }

    #[test]
    fn test_custom_recipient() {
        let config = SiteConfig {
            recipient: "someone@example.org".to_string(),
            ..SiteConfig::default()
        };
        let form = filled("A", "a@b.c", "", "m");
        assert!(mailto_uri(&form, &config).starts_with("mailto:someone@example.org?subject="));
    }
}
