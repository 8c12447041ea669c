//! Access gate command

use tauri::{Manager, Window};
use zonemap_core::{Screen, UiEvent};

use super::CommandResult;
use crate::state::AppState;

#[tauri::command]
pub async fn unlock(window: Window, passphrase: String) -> CommandResult<Screen> {
    let state = window.state::<AppState>();
    let session_id = state.session_id_for_window(window.label());
    let zonemap = state.zonemap();

    zonemap
        .dispatch(&session_id, UiEvent::Unlock(passphrase))
        .await
        .into()
}
