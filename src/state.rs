use crate::notify::Notifier;
use crate::store::{ReadingStore, SettingsStore};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub readings: Arc<Mutex<ReadingStore>>,
    pub settings: Arc<Mutex<SettingsStore>>,
    pub notifier: Notifier,
}

impl AppState {
    pub fn new(readings: ReadingStore, settings: SettingsStore, notifier: Notifier) -> Self {
        Self {
            readings: Arc::new(Mutex::new(readings)),
            settings: Arc::new(Mutex::new(settings)),
            notifier,
        }
    }
}
