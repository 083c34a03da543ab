// API型定義 - TypeScript自動生成対応
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::database::TitleHistoryEntry;
use crate::errors::AppError;
use crate::naming::{
    AttributeSlot, Catalog, ComposedName, MediaArt, NameOption, NameToken, Selection,
    ValidationFailure,
};

// =============================================================================
// API Request/Response Types
// =============================================================================

/// Everything the form needs to render its unconditional fields
#[derive(Debug, Clone, Serialize, Deserialize, TS, JsonSchema)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub media_arts: Vec<MediaArt>,
    pub languages: Vec<NameOption>,
    pub countries: Vec<NameOption>,
    pub default_titles: Vec<String>,
}

impl From<&Catalog> for CatalogView {
    fn from(catalog: &Catalog) -> Self {
        Self {
            media_arts: catalog.media_arts().to_vec(),
            languages: catalog.languages().to_vec(),
            countries: catalog.countries().to_vec(),
            default_titles: catalog.default_titles().to_vec(),
        }
    }
}

/// Result of switching the media art
#[derive(Debug, Clone, Serialize, Deserialize, TS, JsonSchema)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MediaArtChange {
    pub selection: Selection,
    pub cleared: Vec<AttributeSlot>,
    pub visible_slots: Vec<AttributeSlot>,
    pub content_types: Vec<NameOption>,
    pub content_categories: Vec<NameOption>,
}

/// Outcome of the build action. A validation failure is a normal outcome.
#[derive(Debug, Clone, Serialize, Deserialize, TS, JsonSchema)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ComposeOutcome {
    pub success: bool,
    pub file_name: Option<String>,
    pub title: Option<String>,
    pub tokens: Vec<NameToken>,
    pub failure: Option<ValidationFailure>,
    pub failed_slot: Option<AttributeSlot>,
    pub message: String,
}

impl From<Result<ComposedName, ValidationFailure>> for ComposeOutcome {
    fn from(result: Result<ComposedName, ValidationFailure>) -> Self {
        match result {
            Ok(name) => Self {
                success: true,
                message: format!("{} is ready to copy", name.file_name),
                file_name: Some(name.file_name),
                title: Some(name.title),
                tokens: name.tokens,
                failure: None,
                failed_slot: None,
            },
            Err(failure) => Self {
                success: false,
                file_name: None,
                title: None,
                tokens: Vec::new(),
                failure: Some(failure),
                failed_slot: Some(failure.slot()),
                message: failure.to_string(),
            },
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

#[derive(Debug, Serialize, Deserialize, TS, JsonSchema)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub code: String,
    pub message: String,
    pub retryable: bool,
}

impl From<&AppError> for ApiError {
    fn from(err: &AppError) -> Self {
        let code = match err {
            AppError::Validation(_) => "validation",
            AppError::ClipboardWriteFailed(_) => "clipboardWriteFailed",
            AppError::Database(_) | AppError::DatabaseLock(_) => "database",
            AppError::HistoryOperation(_) => "history",
            AppError::Io(_) => "io",
            AppError::Serialization(_) => "serialization",
            AppError::Configuration(_) => "configuration",
            AppError::Internal(_) | AppError::Custom(_) => "internal",
        };
        Self {
            code: code.to_string(),
            message: err.user_message(),
            retryable: err.is_retryable(),
        }
    }
}

// =============================================================================
// TypeScript Generation Helper
// =============================================================================

/// TypeScript型定義を生成するヘルパー関数
pub fn generate_typescript_bindings() -> Result<(), ts_rs::ExportError> {
    AttributeSlot::export()?;
    NameOption::export()?;
    MediaArt::export()?;
    Selection::export()?;
    NameToken::export()?;
    ComposedName::export()?;
    ValidationFailure::export()?;
    TitleHistoryEntry::export()?;
    CatalogView::export()?;
    MediaArtChange::export()?;
    ComposeOutcome::export()?;
    ApiError::export()?;
    Ok(())
}

/// JSON Schemaを生成するヘルパー関数
pub fn generate_json_schemas() -> Result<String, serde_json::Error> {
    use schemars::schema_for;

    let schemas = serde_json::json!({
        "selection": schema_for!(Selection),
        "composeOutcome": schema_for!(ComposeOutcome),
        "catalogView": schema_for!(CatalogView),
        "mediaArtChange": schema_for!(MediaArtChange),
        "titleHistoryEntry": schema_for!(TitleHistoryEntry),
        "apiError": schema_for!(ApiError),
    });
    serde_json::to_string_pretty(&schemas)
}
