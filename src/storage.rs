use crate::errors::AppError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub const READINGS_FILE: &str = "readings.json";
pub const SETTINGS_FILE: &str = "settings.json";

pub fn resolve_data_dir() -> PathBuf {
    match env::var("GLUCOTRACK_DATA_DIR") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from("data"),
    }
}

pub async fn load_json<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(err) => {
                error!("failed to parse {}: {err}", path.display());
                T::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => T::default(),
        Err(err) => {
            error!("failed to read {}: {err}", path.display());
            T::default()
        }
    }
}

pub async fn persist_json<T>(path: &Path, value: &T) -> Result<(), AppError>
where
    T: Serialize,
{
    let payload = serde_json::to_vec_pretty(value)?;
    fs::write(path, payload).await?;
    Ok(())
}
