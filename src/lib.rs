pub mod app;
pub mod errors;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod notify;
pub mod report;
pub mod state;
pub mod stats;
pub mod status;
pub mod storage;
pub mod store;
pub mod ui;

pub use app::router;
pub use notify::Notifier;
pub use state::AppState;
pub use storage::{READINGS_FILE, SETTINGS_FILE, resolve_data_dir};
pub use store::{ReadingStore, SettingsStore};
