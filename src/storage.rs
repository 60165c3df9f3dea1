use crate::errors::AppError;
use crate::models::Journal;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("JOURNAL_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/journal.json"))
}

pub async fn load_journal(path: &Path) -> Journal {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(journal) => journal,
            Err(err) => {
                error!("failed to parse journal file: {err}");
                Journal::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Journal::default(),
        Err(err) => {
            error!("failed to read journal file: {err}");
            Journal::default()
        }
    }
}

pub async fn persist_journal(path: &Path, journal: &Journal) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(journal).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
