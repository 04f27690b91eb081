use chrono::{Duration, NaiveDateTime};
use rent_core::validation::validate;
use rent_core::FieldErrors;
use rent_shared::{ContactSubmission, SubmissionKind};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

use crate::booking::SAVED_BANNER_MILLIS;
use crate::clock::Clock;
use crate::transport::IntakeTransport;
use crate::SubmitError;

pub const FAILURE_ALERT: &str = "Sorry, could not send your message. Please try again.";

/// Contact form. Same flow as the booking widget without the local mirror.
pub struct ContactWidget {
    clock: Arc<dyn Clock>,
    transport: Arc<dyn IntakeTransport>,
    pub form: ContactSubmission,
    errors: FieldErrors,
    saved_until: Option<NaiveDateTime>,
    alert: Option<String>,
}

impl ContactWidget {
    pub fn new(clock: Arc<dyn Clock>, transport: Arc<dyn IntakeTransport>) -> Self {
        Self {
            clock,
            transport,
            form: ContactSubmission::default(),
            errors: FieldErrors::new(),
            saved_until: None,
            alert: None,
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn saved_visible(&self) -> bool {
        matches!(self.saved_until, Some(until) if self.clock.now() < until)
    }

    pub fn dismiss_saved(&mut self) {
        self.saved_until = None;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn validate(&mut self) -> bool {
        let f = &self.form;
        self.errors = validate(&[
            ("name", f.name.as_str()),
            ("email", f.email.as_str()),
            ("mobile", f.mobile.expose().as_str()),
            ("message", f.message.as_str()),
        ]);
        self.errors.is_empty()
    }

    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        if !self.validate() {
            return Err(SubmitError::Invalid(self.errors.clone()));
        }

        self.saved_until = None;
        self.alert = None;

        let result = self
            .transport
            .submit(SubmissionKind::Contact, &json!({ "contact": self.form }))
            .await;

        match result {
            Ok(()) => {
                info!("Contact message sent");
                self.form = ContactSubmission::default();
                self.errors = FieldErrors::new();
                let banner = Duration::milliseconds(SAVED_BANNER_MILLIS);
                self.saved_until = Some(self.clock.now() + banner);
                Ok(())
            }
            Err(e) => {
                error!("Contact send failed: {}", e);
                self.alert = Some(FAILURE_ALERT.to_string());
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::testing::FakeTransport;
    use chrono::NaiveDate;
    use rent_core::validation::{EMAIL_INVALID, MESSAGE_REQUIRED};
    use rent_shared::Masked;

    fn widget(transport: Arc<FakeTransport>) -> ContactWidget {
        let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
        ContactWidget::new(Arc::new(ManualClock::new(start)), transport)
    }

    fn fill(w: &mut ContactWidget) {
        w.form.name = "Sara Ahmed".into();
        w.form.email = "sara.ahmed@example.com".into();
        w.form.mobile = Masked("+92 333 2222222".to_string());
        w.form.message = "Is the D-17 apartment free next week?".into();
    }

    #[tokio::test]
    async fn test_invalid_email_and_blank_message() {
        let transport = Arc::new(FakeTransport::ok());
        let mut w = widget(transport.clone());
        fill(&mut w);
        w.form.email = "sara.ahmed".into();
        w.form.message = " ".into();

        let err = w.submit().await.unwrap_err();
        let errors = err.field_errors().unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("email"), Some(EMAIL_INVALID));
        assert_eq!(errors.get("message"), Some(MESSAGE_REQUIRED));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_submit_posts_contact_and_clears() {
        let transport = Arc::new(FakeTransport::ok());
        let mut w = widget(transport.clone());
        fill(&mut w);

        w.submit().await.unwrap();

        let sent = transport.sent();
        assert_eq!(sent[0].0, SubmissionKind::Contact);
        assert_eq!(sent[0].1["contact"]["email"], "sara.ahmed@example.com");
        assert_eq!(w.form, ContactSubmission::default());
        assert!(w.saved_visible());
    }

    #[tokio::test]
    async fn test_failure_raises_alert() {
        let transport = Arc::new(FakeTransport::rejecting(400, "Missing contact data"));
        let mut w = widget(transport);
        fill(&mut w);

        let err = w.submit().await.unwrap_err();
        assert_eq!(err.to_string(), "Missing contact data");
        assert_eq!(w.alert(), Some(FAILURE_ALERT));
        assert_eq!(w.form.name, "Sara Ahmed");
    }
}
