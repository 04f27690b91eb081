use async_trait::async_trait;
use rent_shared::SubmissionKind;
use serde_json::Value;
use std::sync::Mutex;

use crate::transport::{IntakeTransport, TransportError};

/// Records every body and answers with a canned result.
pub(crate) struct FakeTransport {
    sent: Mutex<Vec<(SubmissionKind, Value)>>,
    reject: Option<(u16, String)>,
}

impl FakeTransport {
    pub(crate) fn ok() -> Self {
        Self { sent: Mutex::new(Vec::new()), reject: None }
    }

    pub(crate) fn rejecting(status: u16, body: &str) -> Self {
        Self { sent: Mutex::new(Vec::new()), reject: Some((status, body.to_string())) }
    }

    pub(crate) fn sent(&self) -> Vec<(SubmissionKind, Value)> {
        self.sent.lock().unwrap().clone()
    }

    pub(crate) fn calls(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl IntakeTransport for FakeTransport {
    async fn submit(&self, kind: SubmissionKind, body: &Value) -> Result<(), TransportError> {
        self.sent.lock().unwrap().push((kind, body.clone()));
        match &self.reject {
            Some((status, body)) => Err(TransportError::Rejected {
                status: *status,
                body: body.clone(),
            }),
            None => Ok(()),
        }
    }
}
