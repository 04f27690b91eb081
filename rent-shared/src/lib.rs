pub mod models;
pub mod pii;

pub use models::submission::{BookingSubmission, ContactSubmission, Slot, SubmissionKind};
pub use pii::Masked;
