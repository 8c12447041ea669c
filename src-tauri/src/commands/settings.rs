//! Static settings for the sidebar and legend panel

use tauri::State;
use zonemap_core::{Legend, UiDefaults};

use super::CommandResult;
use crate::state::AppState;

#[tauri::command]
pub fn get_defaults(state: State<AppState>) -> CommandResult<UiDefaults> {
    CommandResult::ok(state.zonemap().defaults())
}

#[tauri::command]
pub fn get_legend(state: State<AppState>) -> CommandResult<Legend> {
    CommandResult::ok(state.zonemap().legend().clone())
}
