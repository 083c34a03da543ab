// Tauri command bindings for the desktop shell
// Learn more about Tauri commands at https://tauri.app/develop/calling-rust/

use crate::api_types::{ApiError, CatalogView, ComposeOutcome, MediaArtChange};
use crate::database::TitleHistoryEntry;
use crate::naming::{AttributeSlot, NameOption, Selection};
use crate::{init_logging, naming_commands, AppState};

#[tauri::command]
pub fn get_catalog(state: tauri::State<'_, AppState>) -> CatalogView {
    naming_commands::get_catalog(&state)
}

#[tauri::command]
pub fn get_slot_options(
    state: tauri::State<'_, AppState>,
    slot: AttributeSlot,
    media_art: String,
) -> Vec<NameOption> {
    naming_commands::get_slot_options(&state, slot, &media_art)
}

#[tauri::command]
pub fn get_visible_slots(
    state: tauri::State<'_, AppState>,
    selection: Selection,
) -> Vec<AttributeSlot> {
    naming_commands::get_visible_slots(&state, &selection)
}

#[tauri::command]
pub fn select_media_art(
    state: tauri::State<'_, AppState>,
    selection: Selection,
    media_art: Option<String>,
) -> MediaArtChange {
    naming_commands::select_media_art(&state, selection, media_art)
}

#[tauri::command]
pub fn compose_file_name(state: tauri::State<'_, AppState>, selection: Selection) -> ComposeOutcome {
    naming_commands::compose_file_name(&state, &selection)
}

#[tauri::command]
pub fn confirm_file_name(
    state: tauri::State<'_, AppState>,
    title: String,
) -> Result<TitleHistoryEntry, String> {
    naming_commands::confirm_file_name(&state, &title)
}

#[tauri::command]
pub fn get_title_suggestions(
    state: tauri::State<'_, AppState>,
    prefix: String,
    limit: Option<usize>,
) -> Result<Vec<String>, String> {
    naming_commands::get_title_suggestions(&state, &prefix, limit)
}

#[tauri::command]
pub fn get_title_history(
    state: tauri::State<'_, AppState>,
) -> Result<Vec<TitleHistoryEntry>, String> {
    naming_commands::get_title_history(&state)
}

#[tauri::command]
pub fn remove_title_from_history(
    state: tauri::State<'_, AppState>,
    title: String,
) -> Result<bool, String> {
    naming_commands::remove_title_from_history(&state, &title)
}

#[tauri::command]
pub fn clear_title_history(state: tauri::State<'_, AppState>) -> Result<usize, String> {
    naming_commands::clear_title_history(&state)
}

#[tauri::command]
pub fn default_date_input() -> String {
    naming_commands::default_date_input()
}

#[tauri::command]
pub fn clipboard_failure_message(detail: String) -> ApiError {
    naming_commands::clipboard_failure_message(&detail)
}

/// Application builder with state and commands registered.
///
/// The shell binary finishes it with `.run(tauri::generate_context!())`.
pub fn builder(app_state: AppState) -> tauri::Builder<tauri::Wry> {
    init_logging();

    tauri::Builder::default()
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            get_catalog,
            get_slot_options,
            get_visible_slots,
            select_media_art,
            compose_file_name,
            confirm_file_name,
            get_title_suggestions,
            get_title_history,
            remove_title_from_history,
            clear_title_history,
            default_date_input,
            clipboard_failure_message,
        ])
}
