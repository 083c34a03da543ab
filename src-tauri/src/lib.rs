use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use log::info;

pub mod api_types;
mod config;
pub mod database;
#[cfg(feature = "desktop")]
pub mod desktop;
pub mod errors;
pub mod naming;
pub mod naming_commands;
pub mod repositories;

use crate::config::app;
use database::Database;
pub use errors::{to_tauri_result, AppError, AppResult};
pub use naming::{compose, AttributeSlot, Catalog, ComposedName, Selection, ValidationFailure};

// アプリケーション状態管理
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub db: Arc<Mutex<Database>>,
}

impl AppState {
    /// Uses the platform data directory
    pub fn new() -> AppResult<Self> {
        let app_data_dir = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(app::DATA_DIR_NAME);

        Self::from_data_dir(&app_data_dir)
    }

    pub fn from_data_dir(app_data_dir: &Path) -> AppResult<Self> {
        // ディレクトリが存在しない場合は作成
        if !app_data_dir.exists() {
            std::fs::create_dir_all(app_data_dir)?;
        }

        let catalog = Catalog::load_or_builtin(&app_data_dir.join(app::CATALOG_FILENAME))?;
        let db = Database::new(&app_data_dir.join(app::DATABASE_FILENAME))?;
        info!("Application data directory: {}", app_data_dir.display());

        Ok(AppState {
            catalog: Arc::new(catalog),
            db: Arc::new(Mutex::new(db)),
        })
    }
}

/// Initializes env_logger once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(app::DEFAULT_LOG_FILTER),
    )
    .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_state_creates_data_dir_and_database() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("nested").join(app::DATA_DIR_NAME);

        let state = AppState::from_data_dir(&data_dir).expect("Failed to create state");

        assert!(data_dir.join(app::DATABASE_FILENAME).exists());
        assert_eq!(state.catalog.media_arts().len(), 4);
    }

    #[test]
    fn test_state_uses_catalog_override() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join(app::CATALOG_FILENAME)).unwrap();
        write!(
            file,
            r#"{{"mediaArts": [{{"key": "audio", "label": "Audio", "value": "aud"}}]}}"#
        )
        .unwrap();

        let state = AppState::from_data_dir(dir.path()).expect("Failed to create state");
        assert_eq!(state.catalog.media_arts().len(), 1);
        assert!(state.catalog.media_art("layout").is_none());
    }

    #[test]
    fn test_state_rejects_broken_catalog() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(app::CATALOG_FILENAME), "[]").unwrap();

        let result = AppState::from_data_dir(dir.path());
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging();
        init_logging();
    }
}
