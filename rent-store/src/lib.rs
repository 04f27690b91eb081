pub mod app_config;
pub mod file_repo;
pub mod mailer;

pub use file_repo::FileSubmissionStore;
pub use mailer::HttpMailer;

use rent_core::Notifier;
use std::sync::Arc;

/// Build the mail notifier, or `None` when the mail credentials are incomplete.
pub fn notifier_from_config(
    mail: &app_config::MailConfig,
) -> Result<Option<Arc<dyn Notifier>>, mailer::MailError> {
    match mail.credentials() {
        Some(credentials) => {
            let mailer = HttpMailer::new(&mail.endpoint, credentials, mail.timeout_seconds)?;
            Ok(Some(Arc::new(mailer)))
        }
        None => {
            tracing::info!("Mail credentials not set, notifications disabled");
            Ok(None)
        }
    }
}
