pub mod validation;
pub mod filename;
pub mod repository;
pub mod notify;
pub mod intake;

pub use intake::{IntakeProfile, IntakeReceipt, IntakeService};
pub use notify::{Notification, Notifier};
pub use repository::SubmissionStore;
pub use validation::FieldErrors;

use rent_shared::SubmissionKind;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The request body did not carry the expected top-level object.
    #[error("Missing {0} data")]
    MissingPayload(SubmissionKind),
    #[error("Failed to persist submission: {0}")]
    Persistence(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_payload_message_names_the_kind() {
        assert_eq!(
            CoreError::MissingPayload(SubmissionKind::Booking).to_string(),
            "Missing booking data"
        );
        assert_eq!(
            CoreError::MissingPayload(SubmissionKind::Contact).to_string(),
            "Missing contact data"
        );
    }
}
