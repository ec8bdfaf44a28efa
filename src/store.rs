use crate::errors::AppError;
use crate::models::{Reading, Settings};
use crate::storage;
use serde::Serialize;
use std::path::PathBuf;
use tokio::sync::broadcast;

const EVENT_CAPACITY: usize = 16;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoreEvent {
    ReadingAdded { id: String },
    ReadingDeleted { id: String },
}

pub struct ReadingStore {
    path: PathBuf,
    readings: Vec<Reading>,
    events: broadcast::Sender<StoreEvent>,
}

impl ReadingStore {
    pub async fn load(path: PathBuf) -> Self {
        let readings = storage::load_json(&path).await;
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            path,
            readings,
            events,
        }
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    pub async fn add(&mut self, reading: Reading) -> Result<(), AppError> {
        let id = reading.id.clone();
        // Newest entry goes first; range queries re-sort by timestamp.
        self.readings.insert(0, reading);
        self.save().await?;
        let _ = self.events.send(StoreEvent::ReadingAdded { id });
        Ok(())
    }

    pub async fn delete(&mut self, id: &str) -> Result<bool, AppError> {
        let before = self.readings.len();
        self.readings.retain(|reading| reading.id != id);
        if self.readings.len() == before {
            return Ok(false);
        }
        self.save().await?;
        let _ = self.events.send(StoreEvent::ReadingDeleted {
            id: id.to_string(),
        });
        Ok(true)
    }

    async fn save(&self) -> Result<(), AppError> {
        storage::persist_json(&self.path, &self.readings).await
    }
}

pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
}

impl SettingsStore {
    pub async fn load(path: PathBuf) -> Self {
        let settings = storage::load_json(&path).await;
        Self { path, settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn chat_id(&self) -> Option<String> {
        self.settings.telegram_chat_id.clone()
    }

    pub async fn set_chat_id(&mut self, chat_id: Option<String>) -> Result<(), AppError> {
        self.settings.telegram_chat_id = chat_id
            .map(|raw| raw.trim().to_string())
            .filter(|value| !value.is_empty());
        storage::persist_json(&self.path, &self.settings).await
    }
}
