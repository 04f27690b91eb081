//! Two-phase intake: persist the payload (authoritative, errors propagate), then
//! notify (best effort, errors are logged and dropped).

use chrono::{DateTime, Utc};
use rent_shared::SubmissionKind;
use serde_json::{Map, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::filename::{iso_millis, seed_from, submission_file_name};
use crate::notify::{format_booking, format_contact, Formatter, Notifier};
use crate::repository::SubmissionStore;
use crate::{CoreError, CoreResult};

/// Everything that differs between the booking and contact endpoints.
#[derive(Clone)]
pub struct IntakeProfile {
    pub kind: SubmissionKind,
    /// Directory under the storage root that receives this kind's files.
    pub subdir: String,
    /// Payload field whose value seeds the filename.
    pub seed_field: &'static str,
    pub default_seed: &'static str,
    pub format: Formatter,
}

impl IntakeProfile {
    pub fn booking(subdir: impl Into<String>) -> Self {
        Self {
            kind: SubmissionKind::Booking,
            subdir: subdir.into(),
            seed_field: "name",
            default_seed: SubmissionKind::Booking.default_seed(),
            format: format_booking,
        }
    }

    pub fn contact(subdir: impl Into<String>) -> Self {
        Self {
            kind: SubmissionKind::Contact,
            subdir: subdir.into(),
            seed_field: "name",
            default_seed: SubmissionKind::Contact.default_seed(),
            format: format_contact,
        }
    }

    /// Pull the payload object out of a request body.
    pub fn extract<'a>(&self, body: &'a Value) -> CoreResult<&'a Value> {
        match body.get(self.kind.payload_key()) {
            Some(payload) if payload.is_object() => Ok(payload),
            _ => Err(CoreError::MissingPayload(self.kind)),
        }
    }

    /// `{ createdAt, <key>: payload }`, in that order.
    pub fn document(&self, created_at: DateTime<Utc>, payload: &Value) -> Value {
        let mut doc = Map::new();
        doc.insert("createdAt".to_string(), Value::String(iso_millis(created_at)));
        doc.insert(self.kind.payload_key().to_string(), payload.clone());
        Value::Object(doc)
    }
}

impl std::fmt::Debug for IntakeProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntakeProfile")
            .field("kind", &self.kind)
            .field("subdir", &self.subdir)
            .field("seed_field", &self.seed_field)
            .field("default_seed", &self.default_seed)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub struct IntakeReceipt {
    pub file: PathBuf,
    pub created_at: DateTime<Utc>,
    /// The detached notification task, if mail is configured. Resolves to whether
    /// the send succeeded. Dropping it does not cancel the send.
    pub notification: Option<JoinHandle<bool>>,
}

#[derive(Clone)]
pub struct IntakeService {
    store: Arc<dyn SubmissionStore>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl IntakeService {
    pub fn new(store: Arc<dyn SubmissionStore>, notifier: Option<Arc<dyn Notifier>>) -> Self {
        Self { store, notifier }
    }

    pub fn notifications_enabled(&self) -> bool {
        self.notifier.is_some()
    }

    pub async fn accept(&self, profile: &IntakeProfile, body: &Value) -> CoreResult<IntakeReceipt> {
        let payload = profile.extract(body)?;

        // Phase 1: persist
        let created_at = Utc::now();
        let seed = seed_from(payload, profile.seed_field, profile.default_seed);
        let file_name = submission_file_name(created_at, &seed);
        let document = profile.document(created_at, payload);

        let file = self
            .store
            .persist(&profile.subdir, &file_name, &document)
            .await
            .map_err(|e| {
                error!("Failed to persist {} submission {}: {}", profile.kind, file_name, e);
                CoreError::Persistence(e.to_string())
            })?;

        info!("Stored {} submission at {}", profile.kind, file.display());

        // Phase 2: notify
        let notification = match &self.notifier {
            Some(notifier) => {
                let notifier = notifier.clone();
                let message = (profile.format)(payload);
                let kind = profile.kind;
                Some(tokio::spawn(async move {
                    match notifier.send(&message).await {
                        Ok(()) => {
                            info!("Sent {} notification: {}", kind, message.subject);
                            true
                        }
                        Err(e) => {
                            warn!("Failed to send {} notification: {}", kind, e);
                            false
                        }
                    }
                }))
            }
            None => {
                debug!("Mail not configured, skipping {} notification", profile.kind);
                None
            }
        };

        Ok(IntakeReceipt {
            file,
            created_at,
            notification,
        })
    }
}
