use std::collections::HashSet;

use log::{info, warn};

use crate::api_types::{ApiError, CatalogView, ComposeOutcome, MediaArtChange};
use crate::config::history;
use crate::database::TitleHistoryEntry;
use crate::naming::{compose, date_token, AttributeSlot, NameOption, Selection};
use crate::{to_tauri_result, AppError, AppResult, AppState};

// フォーム表示用のカタログ取得コマンド
pub fn get_catalog(state: &AppState) -> CatalogView {
    CatalogView::from(state.catalog.as_ref())
}

pub fn get_slot_options(state: &AppState, slot: AttributeSlot, media_art: &str) -> Vec<NameOption> {
    state.catalog.options_for(slot, media_art).to_vec()
}

pub fn get_visible_slots(state: &AppState, selection: &Selection) -> Vec<AttributeSlot> {
    selection.visible_slots(&state.catalog)
}

// メディアアート変更時に依存フィールドを再検証
pub fn select_media_art(
    state: &AppState,
    mut selection: Selection,
    media_art: Option<String>,
) -> MediaArtChange {
    let cleared = selection.select_media_art(media_art.as_deref(), &state.catalog);
    if !cleared.is_empty() {
        info!("Media art changed, cleared {:?}", cleared);
    }

    let key = selection.media_art.clone().unwrap_or_default();
    MediaArtChange {
        visible_slots: selection.visible_slots(&state.catalog),
        content_types: get_slot_options(state, AttributeSlot::ContentType, &key),
        content_categories: get_slot_options(state, AttributeSlot::ContentCategory, &key),
        cleared,
        selection,
    }
}

// ファイル名生成コマンド（検証失敗も正常な結果として返す）
pub fn compose_file_name(state: &AppState, selection: &Selection) -> ComposeOutcome {
    let outcome = ComposeOutcome::from(compose(selection, &state.catalog));
    match (&outcome.file_name, outcome.failure) {
        (Some(name), _) => info!("Composed file name {}", name),
        (None, Some(failure)) => info!("Compose rejected: {:?}", failure),
        (None, None) => {}
    }
    outcome
}

fn record_title(state: &AppState, title: &str) -> AppResult<TitleHistoryEntry> {
    if title.trim().is_empty() {
        return Err(AppError::history_operation("Cannot record an empty title"));
    }

    let db = state
        .db
        .lock()
        .map_err(|e| AppError::database_lock(format!("Database lock error: {e}")))?;

    db.record_title(title)
        .map_err(|e| AppError::history_operation(format!("Failed to record title: {e}")))
}

// クリップボードへのコピー成功後にタイトルを履歴へ追加
pub fn confirm_file_name(state: &AppState, title: &str) -> Result<TitleHistoryEntry, String> {
    to_tauri_result(record_title(state, title))
}

fn title_suggestions(state: &AppState, prefix: &str, limit: Option<usize>) -> AppResult<Vec<String>> {
    let limit = limit
        .unwrap_or(history::DEFAULT_SUGGESTION_LIMIT)
        .min(history::MAX_SUGGESTION_LIMIT);
    if limit == 0 {
        return Ok(Vec::new());
    }

    let from_history = {
        let db = state
            .db
            .lock()
            .map_err(|e| AppError::database_lock(format!("Database lock error: {e}")))?;
        db.search_titles(prefix, limit)
            .map_err(|e| AppError::history_operation(format!("Failed to search titles: {e}")))?
    };

    let needle = prefix.trim_start().to_lowercase();
    let mut suggestions: Vec<String> = from_history.into_iter().map(|e| e.title).collect();
    // Defaults that differ from a history title only by case are the same suggestion
    let mut seen: HashSet<String> = suggestions.iter().map(|t| t.to_lowercase()).collect();
    for title in state.catalog.default_titles() {
        let folded = title.to_lowercase();
        if folded.starts_with(&needle) && seen.insert(folded) {
            suggestions.push(title.clone());
        }
    }
    suggestions.truncate(limit);
    Ok(suggestions)
}

// タイトル候補取得コマンド（履歴優先、カタログ既定値で補完）
pub fn get_title_suggestions(
    state: &AppState,
    prefix: &str,
    limit: Option<usize>,
) -> Result<Vec<String>, String> {
    to_tauri_result(title_suggestions(state, prefix, limit))
}

pub fn get_title_history(state: &AppState) -> Result<Vec<TitleHistoryEntry>, String> {
    let db = state
        .db
        .lock()
        .map_err(|e| AppError::database_lock(format!("Database lock error: {e}")).to_string())?;

    db.get_title_history().map_err(|e| {
        AppError::history_operation(format!("Failed to get title history: {e}")).to_string()
    })
}

pub fn remove_title_from_history(state: &AppState, title: &str) -> Result<bool, String> {
    let db = state
        .db
        .lock()
        .map_err(|e| AppError::database_lock(format!("Database lock error: {e}")).to_string())?;

    db.remove_title(title).map_err(|e| {
        AppError::history_operation(format!("Failed to remove title: {e}")).to_string()
    })
}

pub fn clear_title_history(state: &AppState) -> Result<usize, String> {
    let db = state
        .db
        .lock()
        .map_err(|e| AppError::database_lock(format!("Database lock error: {e}")).to_string())?;

    let removed = db.clear_title_history().map_err(|e| {
        AppError::history_operation(format!("Failed to clear title history: {e}")).to_string()
    })?;
    info!("Cleared {} titles from history", removed);
    Ok(removed)
}

/// Initial value for the date field
pub fn default_date_input() -> String {
    date_token::today_input()
}

// UI側のクリップボード書き込み失敗をユーザー向けエラーに変換
pub fn clipboard_failure_message(detail: &str) -> ApiError {
    let err = AppError::clipboard(detail);
    warn!("{}", err);
    ApiError::from(&err)
}
