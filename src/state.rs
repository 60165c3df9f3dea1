use crate::models::Journal;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub journal: Arc<Mutex<Journal>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, journal: Journal) -> Self {
        Self {
            data_path,
            journal: Arc::new(Mutex::new(journal)),
        }
    }
}
