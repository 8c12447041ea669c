//! Tauri IPC Commands
//!
//! These commands bridge the frontend to the Rust core.
//! Each one resolves the calling window's session and makes one core call.

pub mod diagnostics;
pub mod gate;
pub mod search;
pub mod settings;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

impl<T> From<zonemap_core::Result<T>> for CommandResult<T> {
    fn from(result: zonemap_core::Result<T>) -> Self {
        match result {
            Ok(data) => CommandResult::ok(data),
            Err(e) => CommandResult::err(e.to_string()),
        }
    }
}
