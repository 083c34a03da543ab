use thiserror::Error;

use crate::naming::ValidationFailure;

/// アプリケーション全体で使用する統一エラー型
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationFailure),

    /// Reported by the UI when writing the composed name to the clipboard fails
    #[error("Clipboard write failed: {0}")]
    ClipboardWriteFailed(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // These preserve the original message without adding a prefix
    #[error("{0}")]
    DatabaseLock(String),

    #[error("{0}")]
    HistoryOperation(String),

    #[error("{0}")]
    Custom(String),
}

impl AppError {
    /// クリップボードエラーを作成
    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::ClipboardWriteFailed(message.into())
    }

    /// 設定エラーを作成
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// データベースロックエラーを作成
    pub fn database_lock(message: impl Into<String>) -> Self {
        Self::DatabaseLock(message.into())
    }

    /// 履歴操作エラーを作成
    pub fn history_operation(message: impl Into<String>) -> Self {
        Self::HistoryOperation(message.into())
    }

    /// カスタムエラーを作成 (任意の文字列エラーメッセージ用)
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}

/// アプリケーション全体で使用するResult型
pub type AppResult<T> = Result<T, AppError>;

/// エラーのカテゴリ分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// ユーザー操作エラー（修正可能）
    UserError,
    /// システムエラー（再試行可能）
    SystemError,
    /// 設定エラー（設定変更が必要）
    ConfigError,
    /// 重大なエラー（アプリケーション終了）
    FatalError,
}

impl AppError {
    /// エラーのカテゴリを取得
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Validation(_) => ErrorCategory::UserError,
            AppError::ClipboardWriteFailed(_) => ErrorCategory::SystemError,
            AppError::Database(_) => ErrorCategory::SystemError,
            AppError::Io(_) => ErrorCategory::SystemError,
            AppError::Internal(_) => ErrorCategory::SystemError,
            AppError::Configuration(_) => ErrorCategory::ConfigError,
            AppError::Serialization(_) => ErrorCategory::FatalError,
            AppError::DatabaseLock(_) => ErrorCategory::SystemError,
            AppError::HistoryOperation(_) => ErrorCategory::SystemError,
            AppError::Custom(_) => ErrorCategory::SystemError,
        }
    }

    /// ユーザー向けメッセージを取得
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(failure) => failure.to_string(),
            AppError::ClipboardWriteFailed(_) => {
                "The file name could not be copied to the clipboard. Please copy it manually."
                    .to_string()
            }
            AppError::Database(_) => {
                "The title history could not be accessed. Please restart the application."
                    .to_string()
            }
            AppError::Io(_) => {
                "A file could not be read or written. Please check the permissions of the application data folder."
                    .to_string()
            }
            AppError::Internal(err) => format!("Internal error: {err}"),
            AppError::Configuration(msg) => format!("Configuration error: {msg}"),
            AppError::Serialization(_) => "Data could not be converted.".to_string(),
            AppError::DatabaseLock(msg) => msg.clone(),
            AppError::HistoryOperation(msg) => msg.clone(),
            AppError::Custom(msg) => msg.clone(),
        }
    }

    /// 再試行可能かどうか
    pub fn is_retryable(&self) -> bool {
        matches!(self.category(), ErrorCategory::SystemError)
    }
}

/// String から AppError への変換 (既存のエラーメッセージを保持)
impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Custom(msg)
    }
}

/// &str から AppError への変換 (既存のエラーメッセージを保持)
impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Custom(msg.to_string())
    }
}

/// AppError を String に変換 (エラーメッセージの表示)
impl From<AppError> for String {
    fn from(err: AppError) -> Self {
        err.to_string()
    }
}

/// Convert AppResult<T> to Result<T, String> for the UI commands
/// This ensures all error messages are preserved exactly
pub fn to_tauri_result<T>(result: AppResult<T>) -> Result<T, String> {
    result.map_err(|e| e.to_string())
}
