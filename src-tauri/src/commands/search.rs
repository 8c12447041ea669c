//! Search, map rendering and the street-view hand-off

use tauri::{AppHandle, Manager, State, Window};
use tauri_plugin_opener::OpenerExt;
use zonemap_core::{Screen, UiEvent, ViewModel};

use super::CommandResult;
use crate::state::AppState;

#[tauri::command]
pub fn get_screen(window: Window, state: State<AppState>) -> CommandResult<Screen> {
    let session_id = state.session_id_for_window(window.label());
    state.zonemap().screen(&session_id).into()
}

#[tauri::command]
pub async fn search_address(window: Window, address: String) -> CommandResult<Screen> {
    let state = window.state::<AppState>();
    let session_id = state.session_id_for_window(window.label());
    let zonemap = state.zonemap();

    zonemap
        .dispatch(&session_id, UiEvent::SearchRequested(address))
        .await
        .into()
}

#[tauri::command]
pub async fn set_opacity(window: Window, value: f64) -> CommandResult<Screen> {
    let state = window.state::<AppState>();
    let session_id = state.session_id_for_window(window.label());
    let zonemap = state.zonemap();

    zonemap
        .dispatch(&session_id, UiEvent::OpacityChanged(value))
        .await
        .into()
}

#[tauri::command]
pub fn current_view(window: Window, state: State<AppState>) -> CommandResult<Option<ViewModel>> {
    let session_id = state.session_id_for_window(window.label());
    state.zonemap().current_view(&session_id).into()
}

/// Opens the street-view link in the system browser
#[tauri::command]
pub fn open_street_view(
    app: AppHandle,
    window: Window,
    state: State<AppState>,
) -> CommandResult<String> {
    let session_id = state.session_id_for_window(window.label());

    let url = match state.zonemap().street_view_url(&session_id) {
        Ok(Some(url)) => url,
        Ok(None) => return CommandResult::err("No location has been searched yet".to_string()),
        Err(e) => return CommandResult::err(e.to_string()),
    };

    match app.opener().open_url(url.as_str(), None::<&str>) {
        Ok(()) => {
            tracing::info!(session_id = %session_id, url = %url, "Opened street view");
            CommandResult::ok(url)
        }
        Err(e) => CommandResult::err(e.to_string()),
    }
}
