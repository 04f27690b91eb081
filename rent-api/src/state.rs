use rent_core::{IntakeProfile, IntakeService, Notifier, SubmissionStore};
use rent_store::app_config::Config;
use rent_store::FileSubmissionStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub intake: IntakeService,
    pub booking: Arc<IntakeProfile>,
    pub contact: Arc<IntakeProfile>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn SubmissionStore>,
        notifier: Option<Arc<dyn Notifier>>,
        booking_dir: &str,
        contact_dir: &str,
    ) -> Self {
        Self {
            intake: IntakeService::new(store, notifier),
            booking: Arc::new(IntakeProfile::booking(booking_dir)),
            contact: Arc::new(IntakeProfile::contact(contact_dir)),
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let store = Arc::new(FileSubmissionStore::new(&config.storage.root));
        let notifier = rent_store::notifier_from_config(&config.mail)?;
        Ok(Self::new(
            store,
            notifier,
            &config.storage.booking_dir,
            &config.storage.contact_dir,
        ))
    }
}
