pub mod clock;
pub mod local_log;
pub mod transport;
pub mod booking;
pub mod contact;
pub mod carousel;

#[cfg(test)]
mod testing;

pub use booking::BookingWidget;
pub use carousel::{Carousel, Gallery, Key, Modal};
pub use clock::{Clock, ManualClock, SystemClock};
pub use contact::ContactWidget;
pub use local_log::{FileStorage, LocalLog, MemoryStorage, StorageError, StoragePort};
pub use transport::{HttpIntakeClient, IntakeTransport, TransportError};

use rent_core::FieldErrors;

/// Failure of a widget submit. Submitting holds `&mut self` across the request,
/// so a second submit cannot start until the first resolves.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FieldErrors),
    #[error("Local storage failed: {0}")]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl SubmitError {
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            SubmitError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}
