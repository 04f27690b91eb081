//! Booking form: check-in/out pickers, guest stepper, name and mobile.

use chrono::{Duration, NaiveDateTime};
use rent_core::validation::validate;
use rent_core::FieldErrors;
use rent_shared::{BookingSubmission, Masked, Slot, SubmissionKind};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

use crate::clock::Clock;
use crate::local_log::{LocalLog, StoragePort};
use crate::transport::IntakeTransport;
use crate::SubmitError;

pub const DEFAULT_STAY_HOURS: i64 = 24;
pub const MIN_STAY_HOURS: i64 = 1;
pub const SAVED_BANNER_MILLIS: i64 = 2500;

pub const SAVED_TITLE: &str = "Success";
pub const SAVED_MESSAGE: &str = "Booking saved. We'll contact you shortly.";
pub const FAILURE_ALERT: &str = "Sorry, could not save your booking. Please try again.";

pub fn format_date(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%d").to_string()
}

/// 12-hour clock, no leading zero on the hour: `2:05 PM`, `12:00 AM`.
pub fn format_time_12h(at: NaiveDateTime) -> String {
    at.format("%-I:%M %p").to_string()
}

pub fn slot(at: NaiveDateTime) -> Slot {
    Slot {
        date: format_date(at),
        time: format_time_12h(at),
    }
}

pub fn default_check_out(check_in: NaiveDateTime) -> NaiveDateTime {
    check_in + Duration::hours(DEFAULT_STAY_HOURS)
}

pub fn min_check_out(check_in: NaiveDateTime) -> NaiveDateTime {
    check_in + Duration::hours(MIN_STAY_HOURS)
}

pub struct BookingWidget<S: StoragePort> {
    clock: Arc<dyn Clock>,
    transport: Arc<dyn IntakeTransport>,
    log: LocalLog<S>,
    opened_at: NaiveDateTime,
    check_in: NaiveDateTime,
    check_out: NaiveDateTime,
    guests: u32,
    name: String,
    mobile: String,
    errors: FieldErrors,
    saved_until: Option<NaiveDateTime>,
    alert: Option<String>,
}

impl<S: StoragePort> BookingWidget<S> {
    pub fn new(
        clock: Arc<dyn Clock>,
        transport: Arc<dyn IntakeTransport>,
        log: LocalLog<S>,
    ) -> Self {
        let now = clock.now();
        Self {
            clock,
            transport,
            log,
            opened_at: now,
            check_in: now,
            check_out: default_check_out(now),
            guests: 1,
            name: String::new(),
            mobile: String::new(),
            errors: FieldErrors::new(),
            saved_until: None,
            alert: None,
        }
    }

    pub fn check_in(&self) -> NaiveDateTime {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDateTime {
        self.check_out
    }

    pub fn guests(&self) -> u32 {
        self.guests
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn log(&self) -> &LocalLog<S> {
        &self.log
    }

    /// Earliest selectable check-in: the moment the form was opened.
    pub fn min_check_in(&self) -> NaiveDateTime {
        self.opened_at
    }

    /// Earliest selectable check-out for the current check-in.
    pub fn min_check_out(&self) -> NaiveDateTime {
        min_check_out(self.check_in)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_mobile(&mut self, mobile: impl Into<String>) {
        self.mobile = mobile.into();
    }

    /// A cleared picker (`None`) is ignored. Pushes check-out forward when it
    /// would no longer be more than an hour after check-in.
    pub fn set_check_in(&mut self, date: Option<NaiveDateTime>) {
        let Some(date) = date else { return };
        self.check_in = date;
        let min_co = min_check_out(date);
        if self.check_out <= min_co {
            self.check_out = min_co;
        }
    }

    /// Clamps to check-in + 1h. A cleared picker (`None`) is ignored.
    pub fn set_check_out(&mut self, date: Option<NaiveDateTime>) {
        let Some(date) = date else { return };
        let min_co = self.min_check_out();
        self.check_out = if date > min_co { date } else { min_co };
    }

    pub fn increment_guests(&mut self) {
        self.guests = self.guests.saturating_add(1);
    }

    pub fn decrement_guests(&mut self) {
        self.guests = self.guests.saturating_sub(1).max(1);
    }

    pub fn validate(&mut self) -> bool {
        self.errors = validate(&[("name", self.name.as_str()), ("mobile", self.mobile.as_str())]);
        self.errors.is_empty()
    }

    pub fn compose(&self) -> BookingSubmission {
        BookingSubmission {
            check_in: slot(self.check_in),
            check_out: slot(self.check_out),
            guests: self.guests,
            name: self.name.clone(),
            mobile: Masked(self.mobile.clone()),
        }
    }

    /// Whether the "saved" confirmation is still showing.
    pub fn saved_visible(&self) -> bool {
        matches!(self.saved_until, Some(until) if self.clock.now() < until)
    }

    pub fn dismiss_saved(&mut self) {
        self.saved_until = None;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Validate, mirror into the local log, then POST. Validation failures never
    /// reach storage or the network; any later failure leaves the fields as they
    /// were and raises the alert.
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        if !self.validate() {
            return Err(SubmitError::Invalid(self.errors.clone()));
        }

        self.saved_until = None;
        self.alert = None;

        match self.send().await {
            Ok(()) => {
                info!("Booking saved ({} guest(s))", self.guests);
                self.reset();
                let banner = Duration::milliseconds(SAVED_BANNER_MILLIS);
                self.saved_until = Some(self.clock.now() + banner);
                Ok(())
            }
            Err(e) => {
                error!("Booking save failed: {}", e);
                self.alert = Some(FAILURE_ALERT.to_string());
                Err(e)
            }
        }
    }

    async fn send(&mut self) -> Result<(), SubmitError> {
        let booking = self.compose();
        self.log.append(&booking)?;
        self.transport
            .submit(SubmissionKind::Booking, &json!({ "booking": booking }))
            .await?;
        Ok(())
    }

    fn reset(&mut self) {
        self.name.clear();
        self.mobile.clear();
        self.guests = 1;
        self.errors = FieldErrors::new();
        let now = self.clock.now();
        self.check_in = now;
        self.check_out = default_check_out(now);
    }
}
